use crate::domain::common::AggregateRoot;
use crate::shared::datetime::flexible;
use crate::shared::ids::lenient_u32;
use crate::shared::{EntityId, StatusTone, StorageKey};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

// ============================================================================
// Status
// ============================================================================

/// Task lifecycle status. Any code path may set any value; there are no
/// enforced transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    OpenQueued,
    Assigned,
    InProgress,
    Pending,
    Completed,
    Cancelled,
    Rejected,
    Suspended,
    Overdue,
    #[serde(other)]
    Unknown,
}

impl TaskStatus {
    pub fn code(&self) -> &'static str {
        match self {
            TaskStatus::OpenQueued => "open-queued",
            TaskStatus::Assigned => "assigned",
            TaskStatus::InProgress => "in-progress",
            TaskStatus::Pending => "pending",
            TaskStatus::Completed => "completed",
            TaskStatus::Cancelled => "cancelled",
            TaskStatus::Rejected => "rejected",
            TaskStatus::Suspended => "suspended",
            TaskStatus::Overdue => "overdue",
            TaskStatus::Unknown => "unknown",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            TaskStatus::OpenQueued => "Open / Queued",
            TaskStatus::Assigned => "Assigned",
            TaskStatus::InProgress => "In Progress",
            TaskStatus::Pending => "Pending",
            TaskStatus::Completed => "Completed",
            TaskStatus::Cancelled => "Cancelled",
            TaskStatus::Rejected => "Rejected",
            TaskStatus::Suspended => "Suspended",
            TaskStatus::Overdue => "Overdue",
            TaskStatus::Unknown => "Unknown",
        }
    }

    pub fn all() -> Vec<TaskStatus> {
        vec![
            TaskStatus::OpenQueued,
            TaskStatus::Assigned,
            TaskStatus::InProgress,
            TaskStatus::Pending,
            TaskStatus::Completed,
            TaskStatus::Cancelled,
            TaskStatus::Rejected,
            TaskStatus::Suspended,
            TaskStatus::Overdue,
        ]
    }

    pub fn from_code(code: &str) -> Option<TaskStatus> {
        Self::all().into_iter().find(|s| s.code() == code)
    }

    /// Rank used by the task list after end time and category.
    pub fn priority(&self) -> u32 {
        match self {
            TaskStatus::OpenQueued => 1,
            TaskStatus::Assigned => 2,
            TaskStatus::InProgress => 3,
            TaskStatus::Rejected => 4,
            TaskStatus::Completed => 5,
            TaskStatus::Cancelled => 6,
            _ => 999,
        }
    }

    pub fn tone(&self) -> StatusTone {
        match self {
            TaskStatus::OpenQueued => StatusTone::Informative,
            TaskStatus::Assigned => StatusTone::Brand,
            TaskStatus::InProgress | TaskStatus::Pending => StatusTone::Warning,
            TaskStatus::Completed => StatusTone::Success,
            TaskStatus::Cancelled => StatusTone::Subtle,
            TaskStatus::Suspended => StatusTone::Important,
            TaskStatus::Overdue => StatusTone::Danger,
            TaskStatus::Rejected | TaskStatus::Unknown => StatusTone::Subtle,
        }
    }
}

// ============================================================================
// Value objects
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TaskFeatures {
    pub photo_evidence: bool,
    pub early_complete: bool,
}

/// Document attached to a task, denormalised from the documents store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskDocumentRef {
    pub id: EntityId,
    pub filename: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub category: String,
}

// ============================================================================
// Aggregate Root
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: EntityId,
    pub name: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub subcategory: String,
    #[serde(with = "flexible")]
    pub start_time: NaiveDateTime,
    #[serde(with = "flexible")]
    pub end_time: NaiveDateTime,
    /// Minutes
    #[serde(default, with = "lenient_u32")]
    pub duration: u32,
    #[serde(default)]
    pub location: String,
    pub status: TaskStatus,
    #[serde(default)]
    pub assigned_staff: Vec<EntityId>,
    #[serde(default)]
    pub features: TaskFeatures,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document: Option<TaskDocumentRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<String>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub is_overdue: bool,
}

impl Task {
    pub fn is_assigned_to(&self, staff_id: EntityId) -> bool {
        self.assigned_staff.contains(&staff_id)
    }

    pub fn is_adhoc(&self) -> bool {
        self.category.eq_ignore_ascii_case("adhoc")
    }

    /// Overdue either by status or by the stored flag.
    pub fn shows_overdue(&self) -> bool {
        self.is_overdue || self.status == TaskStatus::Overdue
    }

    pub fn start_date_key(&self) -> String {
        self.start_time.format("%Y-%m-%d").to_string()
    }
}

impl AggregateRoot for Task {
    type Id = EntityId;

    fn id(&self) -> Self::Id {
        self.id
    }

    fn description(&self) -> &str {
        &self.name
    }

    fn aggregate_index() -> &'static str {
        "a001"
    }

    fn collection_name() -> &'static str {
        "task"
    }

    fn element_name() -> &'static str {
        "Task"
    }

    fn list_name() -> &'static str {
        "Tasks"
    }

    fn storage_key() -> StorageKey {
        StorageKey::Tasks
    }
}

/// Comma-separated names of the assignees; dangling ids read "Unknown".
pub fn staff_names<F>(ids: &[EntityId], lookup: F) -> String
where
    F: Fn(EntityId) -> Option<String>,
{
    if ids.is_empty() {
        return "Unassigned".to_string();
    }
    ids.iter()
        .map(|id| lookup(*id).unwrap_or_else(|| "Unknown".to_string()))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reads_legacy_task_shape() {
        let raw = r#"{
            "id": 1754700000000,
            "name": "Security Patrol",
            "category": "Security",
            "subcategory": "Patrol",
            "startTime": "2025-08-09T14:00",
            "endTime": "2025-08-09T15:00:00.000Z",
            "duration": "60",
            "location": "Building B - Floor 2",
            "status": "in-progress",
            "assignedStaff": ["3"],
            "features": {"photoEvidence": true}
        }"#;
        let task: Task = serde_json::from_str(raw).unwrap();
        assert_eq!(task.duration, 60);
        assert_eq!(task.status, TaskStatus::InProgress);
        assert_eq!(task.assigned_staff, vec![EntityId(3)]);
        assert!(task.features.photo_evidence);
        assert!(!task.features.early_complete);
        assert_eq!(task.start_date_key(), "2025-08-09");
    }

    #[test]
    fn test_unknown_status_is_tolerated() {
        let raw = r#"{"id":1,"name":"x","startTime":"2025-08-09T14:00","endTime":"2025-08-09T15:00","status":"paused"}"#;
        let task: Task = serde_json::from_str(raw).unwrap();
        assert_eq!(task.status, TaskStatus::Unknown);
        assert_eq!(task.status.priority(), 999);
    }

    #[test]
    fn test_staff_names_marks_dangling_ids() {
        let names = staff_names(&[EntityId(1), EntityId(9)], |id| {
            (id == EntityId(1)).then(|| "John Smith".to_string())
        });
        assert_eq!(names, "John Smith, Unknown");
        assert_eq!(staff_names(&[], |_| None), "Unassigned");
    }
}
