pub mod dto;

pub use dto::{DashboardPeriod, DashboardVariant, SummaryStat, TaskBreakdown, TaskSummary};
