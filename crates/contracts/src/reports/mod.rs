pub mod export;
pub mod report_kind;

pub use export::{contract_staff_map, resolve_contract, ReportFilters, REPORT_FILE_NAME};
pub use report_kind::ReportKind;
