use super::aggregate::Task;
use std::cmp::Ordering;

/// End time ascending, then "adhoc" tasks first, then status priority.
pub fn compare_tasks(a: &Task, b: &Task) -> Ordering {
    a.end_time
        .cmp(&b.end_time)
        .then_with(|| b.is_adhoc().cmp(&a.is_adhoc()))
        .then_with(|| a.status.priority().cmp(&b.status.priority()))
}

/// Stable sort; equal tasks keep their stored order.
pub fn sort_tasks(tasks: &mut [Task]) {
    tasks.sort_by(compare_tasks);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_task::aggregate::TaskStatus;
    use crate::domain::a001_task::samples::task_at;

    #[test]
    fn test_sort_by_end_then_adhoc_then_status() {
        let mut tasks = vec![
            task_at(1, "Routine", "2025-08-09T10:00", 60, TaskStatus::OpenQueued),
            task_at(2, "Adhoc", "2025-08-09T10:00", 60, TaskStatus::Completed),
            task_at(3, "Routine", "2025-08-09T08:00", 60, TaskStatus::Cancelled),
            task_at(4, "Routine", "2025-08-09T10:00", 60, TaskStatus::Assigned),
            task_at(5, "adhoc", "2025-08-09T10:00", 60, TaskStatus::InProgress),
        ];
        sort_tasks(&mut tasks);
        let ids: Vec<u64> = tasks.iter().map(|t| t.id.0).collect();
        assert_eq!(ids, vec![3, 5, 2, 1, 4]);
    }

    #[test]
    fn test_unknown_statuses_sink_but_stay_stable() {
        let mut tasks = vec![
            task_at(1, "Routine", "2025-08-09T10:00", 30, TaskStatus::Suspended),
            task_at(2, "Routine", "2025-08-09T10:00", 30, TaskStatus::Pending),
            task_at(3, "Routine", "2025-08-09T10:00", 30, TaskStatus::Rejected),
        ];
        sort_tasks(&mut tasks);
        let ids: Vec<u64> = tasks.iter().map(|t| t.id.0).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }
}
