use super::aggregate::{Task, TaskStatus};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TaskStats {
    pub total: usize,
    pub completed: usize,
    pub pending: usize,
    pub overdue: usize,
}

impl TaskStats {
    pub fn collect<'a, I: IntoIterator<Item = &'a Task>>(tasks: I) -> Self {
        tasks.into_iter().fold(Self::default(), |mut acc, t| {
            acc.total += 1;
            match t.status {
                TaskStatus::Completed => acc.completed += 1,
                TaskStatus::Pending => acc.pending += 1,
                TaskStatus::Overdue => acc.overdue += 1,
                _ => {}
            }
            acc
        })
    }
}

/// Tasks bucketed by the date part of their start time, dates ascending.
/// Order inside a bucket is preserved.
pub fn group_by_start_date<'a, I: IntoIterator<Item = &'a Task>>(tasks: I) -> BTreeMap<String, Vec<&'a Task>> {
    let mut groups: BTreeMap<String, Vec<&'a Task>> = BTreeMap::new();
    for task in tasks {
        groups.entry(task.start_date_key()).or_default().push(task);
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_task::samples::task_at;

    #[test]
    fn test_stats_count_by_status() {
        let tasks = vec![
            task_at(1, "Routine", "2025-08-09T09:00", 30, TaskStatus::Completed),
            task_at(2, "Routine", "2025-08-09T09:00", 30, TaskStatus::Pending),
            task_at(3, "Routine", "2025-08-09T09:00", 30, TaskStatus::Overdue),
            task_at(4, "Routine", "2025-08-09T09:00", 30, TaskStatus::Assigned),
        ];
        let stats = TaskStats::collect(&tasks);
        assert_eq!(
            stats,
            TaskStats {
                total: 4,
                completed: 1,
                pending: 1,
                overdue: 1
            }
        );
    }

    #[test]
    fn test_group_by_date_sorted() {
        let tasks = vec![
            task_at(1, "Routine", "2025-08-10T09:00", 30, TaskStatus::Assigned),
            task_at(2, "Routine", "2025-08-09T09:00", 30, TaskStatus::Assigned),
            task_at(3, "Routine", "2025-08-10T07:00", 30, TaskStatus::Assigned),
        ];
        let groups = group_by_start_date(&tasks);
        let keys: Vec<&String> = groups.keys().collect();
        assert_eq!(keys, vec!["2025-08-09", "2025-08-10"]);
        let ids: Vec<u64> = groups["2025-08-10"].iter().map(|t| t.id.0).collect();
        assert_eq!(ids, vec![1, 3]);
    }
}
