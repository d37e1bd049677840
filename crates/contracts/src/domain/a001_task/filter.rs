use super::aggregate::{Task, TaskStatus};
use crate::shared::datetime::{end_of_day, start_of_day};
use crate::shared::EntityId;
use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

/// Filter bar of the task page.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TaskFilter {
    pub hide_completed: bool,
    pub hide_cancelled: bool,
    pub hide_rejected: bool,
    pub status: Option<TaskStatus>,
    /// Category, compared case-insensitively
    pub category: Option<String>,
    pub staff_id: Option<EntityId>,
    /// Case-insensitive substring of the location label
    pub location: Option<String>,
    pub date_from: Option<NaiveDate>,
    /// Missing end means "the start day only"
    pub date_to: Option<NaiveDate>,
}

impl TaskFilter {
    /// Today through today + `window_days`.
    pub fn with_default_window(today: NaiveDate, window_days: i64) -> Self {
        Self {
            date_from: Some(today),
            date_to: Some(today + Duration::days(window_days)),
            ..Self::default()
        }
    }

    pub fn matches(&self, task: &Task) -> bool {
        if self.hide_completed && task.status == TaskStatus::Completed {
            return false;
        }
        if self.hide_cancelled && task.status == TaskStatus::Cancelled {
            return false;
        }
        if self.hide_rejected && task.status == TaskStatus::Rejected {
            return false;
        }
        if let Some(status) = self.status {
            if task.status != status {
                return false;
            }
        }
        if let Some(category) = self.category.as_deref().filter(|c| !c.is_empty()) {
            if task.category.to_lowercase() != category.to_lowercase() {
                return false;
            }
        }
        if let Some(staff_id) = self.staff_id {
            if !task.is_assigned_to(staff_id) {
                return false;
            }
        }
        if let Some(location) = self.location.as_deref().map(str::trim).filter(|l| !l.is_empty()) {
            if !task.location.to_lowercase().contains(&location.to_lowercase()) {
                return false;
            }
        }
        let bounds = match (self.date_from, self.date_to) {
            (Some(from), to) => Some((start_of_day(from), end_of_day(to.unwrap_or(from)))),
            (None, Some(to)) => Some((chrono::NaiveDateTime::MIN, end_of_day(to))),
            (None, None) => None,
        };
        if let Some((lower, upper)) = bounds {
            if task.start_time < lower || task.start_time > upper {
                return false;
            }
        }
        true
    }

    pub fn apply<'a>(&self, tasks: &'a [Task]) -> Vec<&'a Task> {
        tasks.iter().filter(|t| self.matches(t)).collect()
    }

    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_task::samples::task_at;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_date_range_is_inclusive_to_end_of_day() {
        let tasks = vec![
            task_at(1, "Routine", "2025-08-09T00:00", 30, TaskStatus::Assigned),
            task_at(2, "Routine", "2025-08-11T23:59", 30, TaskStatus::Assigned),
            task_at(3, "Routine", "2025-08-12T00:00", 30, TaskStatus::Assigned),
            task_at(4, "Routine", "2025-08-08T23:59", 30, TaskStatus::Assigned),
        ];
        let filter = TaskFilter::with_default_window(date("2025-08-09"), 2);
        let ids: Vec<u64> = filter.apply(&tasks).iter().map(|t| t.id.0).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn test_missing_end_means_single_day() {
        let tasks = vec![
            task_at(1, "Routine", "2025-08-09T18:00", 30, TaskStatus::Assigned),
            task_at(2, "Routine", "2025-08-10T08:00", 30, TaskStatus::Assigned),
        ];
        let filter = TaskFilter {
            date_from: Some(date("2025-08-09")),
            ..Default::default()
        };
        assert_eq!(filter.apply(&tasks).len(), 1);
    }

    #[test]
    fn test_toggles_and_attribute_filters() {
        let mut a = task_at(1, "Security", "2025-08-09T09:00", 30, TaskStatus::Completed);
        a.location = "Building A - Floor 1".into();
        let mut b = task_at(2, "security", "2025-08-09T09:00", 30, TaskStatus::Assigned);
        b.location = "Building B - Floor 2".into();
        b.assigned_staff = vec![EntityId(3)];
        let c = task_at(3, "Maintenance", "2025-08-09T09:00", 30, TaskStatus::Rejected);
        let tasks = vec![a, b, c];

        let filter = TaskFilter {
            hide_completed: true,
            hide_rejected: true,
            ..Default::default()
        };
        assert_eq!(filter.apply(&tasks).len(), 1);

        let filter = TaskFilter {
            category: Some("SECURITY".into()),
            location: Some("floor".into()),
            ..Default::default()
        };
        assert_eq!(filter.apply(&tasks).len(), 2);

        let filter = TaskFilter {
            staff_id: Some(EntityId(3)),
            status: Some(TaskStatus::Assigned),
            ..Default::default()
        };
        let hits = filter.apply(&tasks);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, EntityId(2));
    }
}
