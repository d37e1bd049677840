use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReportKind {
    #[default]
    TaskSummary,
    PatrolSummary,
    DailyActivity,
    TaskActivity,
}

impl ReportKind {
    pub fn code(&self) -> &'static str {
        match self {
            ReportKind::TaskSummary => "task-summary",
            ReportKind::PatrolSummary => "patrol-summary",
            ReportKind::DailyActivity => "daily-activity",
            ReportKind::TaskActivity => "task-activity",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            ReportKind::TaskSummary => "Task Summary Report",
            ReportKind::PatrolSummary => "Patrol Summary Report",
            ReportKind::DailyActivity => "Daily Activity Report",
            ReportKind::TaskActivity => "Task Activity Report",
        }
    }

    pub fn all() -> Vec<ReportKind> {
        vec![
            ReportKind::TaskSummary,
            ReportKind::PatrolSummary,
            ReportKind::DailyActivity,
            ReportKind::TaskActivity,
        ]
    }

    pub fn from_code(code: &str) -> Option<ReportKind> {
        Self::all().into_iter().find(|k| k.code() == code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_and_titles() {
        assert_eq!(ReportKind::from_code("patrol-summary"), Some(ReportKind::PatrolSummary));
        assert_eq!(ReportKind::from_code("weekly"), None);
        assert_eq!(ReportKind::default().title(), "Task Summary Report");
    }
}
