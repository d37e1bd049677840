use crate::domain::a001_task::aggregate::{Task, TaskStatus};
use crate::domain::a002_staff::aggregate::Staff;
use crate::shared::datetime::{end_of_day, parse_datetime, start_of_day};
use crate::system::auth::SessionRole;
use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

/// Which dashboard layout a session gets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DashboardVariant {
    Admin,
    Manager,
    Staff,
}

impl DashboardVariant {
    /// Licensee managers share the manager layout.
    pub fn for_role(role: SessionRole) -> Self {
        match role {
            SessionRole::SystemAdmin => DashboardVariant::Admin,
            SessionRole::Manager | SessionRole::ManagerLicensee => DashboardVariant::Manager,
            SessionRole::Staff => DashboardVariant::Staff,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            DashboardVariant::Admin => "System Overview",
            DashboardVariant::Manager => "Team Overview",
            DashboardVariant::Staff => "My Day",
        }
    }
}

/// Period toggle of the tasks chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DashboardPeriod {
    #[default]
    Day,
    Week,
    Month,
}

impl DashboardPeriod {
    pub fn all() -> [DashboardPeriod; 3] {
        [DashboardPeriod::Day, DashboardPeriod::Week, DashboardPeriod::Month]
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            DashboardPeriod::Day => "Day",
            DashboardPeriod::Week => "Week",
            DashboardPeriod::Month => "Month",
        }
    }

    /// First day of the period containing `today`; weeks start on Monday.
    pub fn first_day(&self, today: NaiveDate) -> NaiveDate {
        match self {
            DashboardPeriod::Day => today,
            DashboardPeriod::Week => today - Duration::days(i64::from(today.weekday().num_days_from_monday())),
            DashboardPeriod::Month => today.with_day(1).unwrap_or(today),
        }
    }
}

/// Completed / pending / overdue bars of the tasks chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TaskBreakdown {
    pub completed: usize,
    pub pending: usize,
    pub overdue: usize,
}

impl TaskBreakdown {
    /// Counts tasks starting between the period's first day and `today`.
    /// Cancelled and rejected tasks are left out.
    pub fn for_period(tasks: &[Task], period: DashboardPeriod, today: NaiveDate) -> Self {
        let from = start_of_day(period.first_day(today));
        let to = end_of_day(today);
        let mut out = Self::default();
        for task in tasks.iter().filter(|t| t.start_time >= from && t.start_time <= to) {
            if task.status == TaskStatus::Completed {
                out.completed += 1;
            } else if task.shows_overdue() {
                out.overdue += 1;
            } else if !matches!(task.status, TaskStatus::Cancelled | TaskStatus::Rejected) {
                out.pending += 1;
            }
        }
        out
    }

    pub fn max(&self) -> usize {
        self.completed.max(self.pending).max(self.overdue)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryStat {
    pub label: String,
    pub value: usize,
}

/// Headline numbers of the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TaskSummary {
    pub total_tasks: usize,
    pub active_staff: usize,
    pub completed_today: usize,
    pub open_tasks: usize,
    pub overdue_tasks: usize,
}

impl TaskSummary {
    pub fn collect(tasks: &[Task], staff: &[Staff], today: NaiveDate) -> Self {
        let completed_today = tasks
            .iter()
            .filter(|t| t.status == TaskStatus::Completed)
            .filter(|t| {
                t.completed_at
                    .as_deref()
                    .and_then(parse_datetime)
                    .map(|at| at.date() == today)
                    .unwrap_or(false)
            })
            .count();
        Self {
            total_tasks: tasks.len(),
            active_staff: staff.iter().filter(|s| s.is_active()).count(),
            completed_today,
            open_tasks: tasks.iter().filter(|t| t.status == TaskStatus::OpenQueued).count(),
            overdue_tasks: tasks.iter().filter(|t| t.shows_overdue()).count(),
        }
    }

    /// Same numbers restricted to one staff member's tasks. Active staff is
    /// not meaningful there and stays zero.
    pub fn collect_for_staff(tasks: &[Task], staff_id: crate::shared::EntityId, today: NaiveDate) -> Self {
        let own: Vec<Task> = tasks.iter().filter(|t| t.is_assigned_to(staff_id)).cloned().collect();
        Self {
            active_staff: 0,
            ..Self::collect(&own, &[], today)
        }
    }

    pub fn stats(&self, variant: DashboardVariant) -> Vec<SummaryStat> {
        let stat = |label: &str, value: usize| SummaryStat {
            label: label.to_string(),
            value,
        };
        match variant {
            DashboardVariant::Admin | DashboardVariant::Manager => vec![
                stat("Total Tasks", self.total_tasks),
                stat("Active Staff", self.active_staff),
                stat("Completed Today", self.completed_today),
                stat("Open Tasks", self.open_tasks),
                stat("Overdue Tasks", self.overdue_tasks),
            ],
            DashboardVariant::Staff => vec![
                stat("My Tasks", self.total_tasks),
                stat("Completed Today", self.completed_today),
                stat("Overdue", self.overdue_tasks),
            ],
        }
    }
}

/// Tasks starting on each of the seven days ending at `today`, oldest first.
pub fn daily_task_counts(tasks: &[Task], today: NaiveDate) -> Vec<(NaiveDate, usize)> {
    (0..7)
        .rev()
        .map(|back| {
            let day = today - Duration::days(back);
            let count = tasks.iter().filter(|t| t.start_time.date() == day).count();
            (day, count)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_task::samples::{sample_tasks, task_at};
    use crate::domain::common::AggregateRoot;
    use crate::shared::EntityId;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 8, 13).unwrap()
    }

    #[test]
    fn test_variant_per_role() {
        assert_eq!(DashboardVariant::for_role(SessionRole::SystemAdmin), DashboardVariant::Admin);
        assert_eq!(DashboardVariant::for_role(SessionRole::ManagerLicensee), DashboardVariant::Manager);
        assert_eq!(DashboardVariant::for_role(SessionRole::Staff), DashboardVariant::Staff);
    }

    #[test]
    fn test_summary_counts() {
        let mut done = task_at(1, "Maintenance", "2025-08-13T09:00", 60, TaskStatus::Completed);
        done.completed_at = Some("2025-08-13T10:00:00".into());
        let mut done_earlier = task_at(2, "Maintenance", "2025-08-12T09:00", 60, TaskStatus::Completed);
        done_earlier.completed_at = Some("2025-08-12T10:00:00".into());
        let open = task_at(3, "Security", "2025-08-13T11:00", 60, TaskStatus::OpenQueued);
        let mut late = task_at(4, "Security", "2025-08-11T11:00", 60, TaskStatus::Assigned);
        late.is_overdue = true;

        let summary = TaskSummary::collect(&[done, done_earlier, open, late], &Staff::seed(), today());
        assert_eq!(
            summary,
            TaskSummary {
                total_tasks: 4,
                active_staff: 4,
                completed_today: 1,
                open_tasks: 1,
                overdue_tasks: 1,
            }
        );
        assert_eq!(summary.stats(DashboardVariant::Admin).len(), 5);
        assert_eq!(summary.stats(DashboardVariant::Staff)[0].label, "My Tasks");
    }

    #[test]
    fn test_staff_summary_only_counts_own_tasks() {
        let tasks = sample_tasks(today());
        let mine = TaskSummary::collect_for_staff(&tasks, EntityId(3), today());
        let expected = tasks.iter().filter(|t| t.is_assigned_to(EntityId(3))).count();
        assert_eq!(mine.total_tasks, expected);
        assert_eq!(mine.active_staff, 0);
    }

    #[test]
    fn test_breakdown_by_period() {
        let tasks = vec![
            task_at(1, "A", "2025-08-13T09:00", 60, TaskStatus::Completed),
            task_at(2, "A", "2025-08-11T09:00", 60, TaskStatus::Assigned),
            task_at(3, "A", "2025-08-02T09:00", 60, TaskStatus::Overdue),
            task_at(4, "A", "2025-08-13T12:00", 60, TaskStatus::Cancelled),
        ];
        assert_eq!(
            TaskBreakdown::for_period(&tasks, DashboardPeriod::Day, today()),
            TaskBreakdown { completed: 1, pending: 0, overdue: 0 }
        );
        // week of Monday 2025-08-11
        assert_eq!(
            TaskBreakdown::for_period(&tasks, DashboardPeriod::Week, today()),
            TaskBreakdown { completed: 1, pending: 1, overdue: 0 }
        );
        let month = TaskBreakdown::for_period(&tasks, DashboardPeriod::Month, today());
        assert_eq!(month, TaskBreakdown { completed: 1, pending: 1, overdue: 1 });
        assert_eq!(month.max(), 1);
    }

    #[test]
    fn test_daily_counts_cover_last_seven_days() {
        let tasks = vec![
            task_at(1, "A", "2025-08-13T09:00", 60, TaskStatus::Completed),
            task_at(2, "A", "2025-08-07T09:00", 60, TaskStatus::Assigned),
            task_at(3, "A", "2025-08-06T09:00", 60, TaskStatus::Assigned),
        ];
        let counts = daily_task_counts(&tasks, today());
        assert_eq!(counts.len(), 7);
        assert_eq!(counts[0], (NaiveDate::from_ymd_opt(2025, 8, 7).unwrap(), 1));
        assert_eq!(counts[6].1, 1);
        assert_eq!(counts.iter().map(|(_, n)| n).sum::<usize>(), 2);
    }
}
