use crate::domain::a001_task::aggregate::{Task, TaskStatus};
use crate::domain::a002_staff::aggregate::Staff;
use crate::domain::common::AggregateRoot;
use crate::shared::datetime::flexible;
use crate::shared::ids::optional_id;
use crate::shared::{EntityId, StatusTone, StorageKey};
use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageType {
    TaskAssigned,
    TaskRejected,
    System,
    #[serde(other)]
    Other,
}

impl MessageType {
    pub fn code(&self) -> &'static str {
        match self {
            MessageType::TaskAssigned => "task_assigned",
            MessageType::TaskRejected => "task_rejected",
            MessageType::System => "system",
            MessageType::Other => "other",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            MessageType::TaskAssigned => "Task Assigned",
            MessageType::TaskRejected => "Task Rejected",
            MessageType::System => "System",
            MessageType::Other => "Message",
        }
    }

    pub fn tone(&self) -> StatusTone {
        match self {
            MessageType::TaskAssigned => StatusTone::Brand,
            MessageType::TaskRejected => StatusTone::Danger,
            MessageType::System => StatusTone::Subtle,
            MessageType::Other => StatusTone::Informative,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: EntityId,
    #[serde(rename = "type")]
    pub kind: MessageType,
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default, with = "optional_id", skip_serializing_if = "Option::is_none")]
    pub task_id: Option<EntityId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub task_name: Option<String>,
    #[serde(with = "flexible")]
    pub timestamp: NaiveDateTime,
    #[serde(default)]
    pub is_read: bool,
    #[serde(default)]
    pub sender: String,
    #[serde(default)]
    pub recipient: String,
}

impl AggregateRoot for Message {
    type Id = EntityId;

    fn id(&self) -> Self::Id {
        self.id
    }

    fn description(&self) -> &str {
        &self.title
    }

    fn aggregate_index() -> &'static str {
        "a012"
    }

    fn collection_name() -> &'static str {
        "message"
    }

    fn element_name() -> &'static str {
        "Message"
    }

    fn list_name() -> &'static str {
        "Messages"
    }

    fn storage_key() -> StorageKey {
        StorageKey::Messages
    }
}

/// Message center filter select.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MessageFilter {
    #[default]
    All,
    Unread,
    Read,
    Type(MessageType),
}

impl MessageFilter {
    pub fn code(&self) -> &'static str {
        match self {
            MessageFilter::All => "",
            MessageFilter::Unread => "unread",
            MessageFilter::Read => "read",
            MessageFilter::Type(t) => t.code(),
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            MessageFilter::All => "All Messages",
            MessageFilter::Unread => "Unread",
            MessageFilter::Read => "Read",
            MessageFilter::Type(t) => t.display_name(),
        }
    }

    pub fn options() -> Vec<MessageFilter> {
        vec![
            MessageFilter::All,
            MessageFilter::Unread,
            MessageFilter::Read,
            MessageFilter::Type(MessageType::TaskAssigned),
            MessageFilter::Type(MessageType::TaskRejected),
            MessageFilter::Type(MessageType::System),
        ]
    }

    pub fn from_code(code: &str) -> MessageFilter {
        Self::options()
            .into_iter()
            .find(|f| f.code() == code)
            .unwrap_or_default()
    }

    pub fn matches(&self, message: &Message) -> bool {
        match self {
            MessageFilter::All => true,
            MessageFilter::Unread => !message.is_read,
            MessageFilter::Read => message.is_read,
            MessageFilter::Type(t) => message.kind == *t,
        }
    }
}

/// Filtered messages, newest first.
pub fn filter_messages(messages: &[Message], filter: MessageFilter) -> Vec<Message> {
    let mut out: Vec<Message> = messages.iter().filter(|m| filter.matches(m)).cloned().collect();
    out.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    out
}

pub fn unread_count(messages: &[Message]) -> usize {
    messages.iter().filter(|m| !m.is_read).count()
}

/// Returns true when the message was unread.
pub fn mark_read(messages: &mut [Message], id: EntityId) -> bool {
    match messages.iter_mut().find(|m| m.id == id) {
        Some(m) if !m.is_read => {
            m.is_read = true;
            true
        }
        _ => false,
    }
}

pub fn mark_all_read(messages: &mut [Message]) {
    for m in messages.iter_mut() {
        m.is_read = true;
    }
}

/// "Just now", "5m ago", "3h ago", "2d ago", or the date after a week.
pub fn time_ago(timestamp: NaiveDateTime, now: NaiveDateTime) -> String {
    let secs = (now - timestamp).num_seconds();
    if secs < 60 {
        "Just now".to_string()
    } else if secs < 3_600 {
        format!("{}m ago", secs / 60)
    } else if secs < 86_400 {
        format!("{}h ago", secs / 3_600)
    } else if secs < 604_800 {
        format!("{}d ago", secs / 86_400)
    } else {
        timestamp.format("%d/%m/%Y").to_string()
    }
}

/// "3 messages" / "1 message"
pub fn count_label(count: usize) -> String {
    format!("{} message{}", count, if count == 1 { "" } else { "s" })
}

/// Sample inbox built from the current tasks: assignment notices, rejection
/// notices and one maintenance announcement.
pub fn sample_messages(
    tasks: &[Task],
    staff: &[Staff],
    recipient: &str,
    now: NaiveDateTime,
    max_assigned: usize,
    max_rejected: usize,
) -> Vec<Message> {
    let base_id = now.and_utc().timestamp_millis().max(0) as u64;
    let mut messages = Vec::new();

    for (index, task) in tasks
        .iter()
        .filter(|t| t.status == TaskStatus::Assigned)
        .take(max_assigned)
        .enumerate()
    {
        messages.push(Message {
            id: EntityId(base_id + index as u64),
            kind: MessageType::TaskAssigned,
            title: "New Task Assigned".to_string(),
            content: format!(
                "You have been assigned to task \"{}\". Please review the task details and start when ready.",
                task.name
            ),
            task_id: Some(task.id),
            task_name: Some(task.name.clone()),
            timestamp: now - Duration::hours(6 + 13 * index as i64),
            is_read: index % 2 == 1,
            sender: "System".to_string(),
            recipient: recipient.to_string(),
        });
    }

    for (index, task) in tasks
        .iter()
        .filter(|t| t.status == TaskStatus::Rejected)
        .take(max_rejected)
        .enumerate()
    {
        let rejected_by = staff
            .iter()
            .find(|s| task.assigned_staff.contains(&s.id))
            .map(|s| s.name.clone());
        messages.push(Message {
            id: EntityId(base_id + 1_000 + index as u64),
            kind: MessageType::TaskRejected,
            title: "Task Rejected".to_string(),
            content: format!(
                "Task \"{}\" has been rejected by {}. Please review and reassign if necessary.",
                task.name,
                rejected_by.as_deref().unwrap_or("staff member")
            ),
            task_id: Some(task.id),
            task_name: Some(task.name.clone()),
            timestamp: now - Duration::hours(3 + 7 * index as i64),
            is_read: index % 3 == 2,
            sender: rejected_by.unwrap_or_else(|| "Staff Member".to_string()),
            recipient: recipient.to_string(),
        });
    }

    messages.push(Message {
        id: EntityId(base_id + 2_000),
        kind: MessageType::System,
        title: "System Maintenance".to_string(),
        content: "Scheduled system maintenance will occur this weekend. Please save your work frequently.".to_string(),
        task_id: None,
        task_name: None,
        timestamp: now - Duration::days(2),
        is_read: false,
        sender: "System".to_string(),
        recipient: "all".to_string(),
    });

    messages.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    messages
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_task::samples::sample_tasks;
    use crate::shared::datetime::parse_datetime;

    fn now() -> NaiveDateTime {
        parse_datetime("2025-08-09T12:00:00").unwrap()
    }

    #[test]
    fn test_time_ago_buckets() {
        let n = now();
        assert_eq!(time_ago(n - Duration::seconds(59), n), "Just now");
        assert_eq!(time_ago(n - Duration::minutes(5), n), "5m ago");
        assert_eq!(time_ago(n - Duration::minutes(59), n), "59m ago");
        assert_eq!(time_ago(n - Duration::hours(3), n), "3h ago");
        assert_eq!(time_ago(n - Duration::days(6), n), "6d ago");
        assert_eq!(time_ago(n - Duration::days(7), n), "02/08/2025");
    }

    #[test]
    fn test_samples_respect_limits() {
        let tasks = sample_tasks(now().date());
        let msgs = sample_messages(&tasks, &Staff::seed(), "manager", now(), 5, 3);
        let assigned = msgs.iter().filter(|m| m.kind == MessageType::TaskAssigned).count();
        let rejected: Vec<&Message> = msgs.iter().filter(|m| m.kind == MessageType::TaskRejected).collect();
        assert_eq!(assigned, 5);
        assert_eq!(rejected.len(), 1);
        assert_eq!(rejected[0].sender, "Jane Doe");
        assert!(msgs.iter().any(|m| m.kind == MessageType::System && m.recipient == "all"));
        assert!(msgs.windows(2).all(|w| w[0].timestamp >= w[1].timestamp));
    }

    #[test]
    fn test_filters_and_read_marks() {
        let tasks = sample_tasks(now().date());
        let mut msgs = sample_messages(&tasks, &Staff::seed(), "manager", now(), 5, 3);
        let unread_before = unread_count(&msgs);
        assert_eq!(filter_messages(&msgs, MessageFilter::Unread).len(), unread_before);

        let target = filter_messages(&msgs, MessageFilter::Unread)[0].id;
        assert!(mark_read(&mut msgs, target));
        assert!(!mark_read(&mut msgs, target));
        assert_eq!(unread_count(&msgs), unread_before - 1);

        mark_all_read(&mut msgs);
        assert!(filter_messages(&msgs, MessageFilter::Unread).is_empty());
        assert_eq!(
            filter_messages(&msgs, MessageFilter::Type(MessageType::System)).len(),
            1
        );
        assert_eq!(MessageFilter::from_code("task_rejected"), MessageFilter::Type(MessageType::TaskRejected));
        assert_eq!(MessageFilter::from_code("bogus"), MessageFilter::All);
    }

    #[test]
    fn test_count_label() {
        assert_eq!(count_label(1), "1 message");
        assert_eq!(count_label(0), "0 messages");
    }
}
