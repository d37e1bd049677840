//! Report filter panel and its CSV export. The export carries the
//! selected filters only, not task data.

use super::report_kind::ReportKind;
use crate::domain::a001_task::aggregate::TaskStatus;
use crate::domain::a002_staff::aggregate::{name_of, Staff};
use crate::shared::csv::csv_document;
use crate::shared::datetime::format_date;
use crate::shared::EntityId;
use crate::system::auth::CurrentUser;
use chrono::{Duration, NaiveDate};
use std::collections::BTreeMap;

pub const REPORT_FILE_NAME: &str = "report.csv";

/// Bucket for staff without a contract.
pub const UNASSIGNED_CONTRACT: &str = "UNASSIGNED";

/// Session contract, else the first staff member's, else `fallback`.
pub fn resolve_contract(user: Option<&CurrentUser>, staff: &[Staff], fallback: &str) -> String {
    user.and_then(|u| u.contract.clone())
        .filter(|c| !c.is_empty())
        .or_else(|| staff.first().map(|s| s.contract.clone()).filter(|c| !c.is_empty()))
        .unwrap_or_else(|| fallback.to_string())
}

pub fn contract_staff_map(staff: &[Staff]) -> BTreeMap<String, Vec<Staff>> {
    let mut map: BTreeMap<String, Vec<Staff>> = BTreeMap::new();
    for s in staff {
        let key = if s.contract.is_empty() {
            UNASSIGNED_CONTRACT.to_string()
        } else {
            s.contract.clone()
        };
        map.entry(key).or_default().push(s.clone());
    }
    map
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReportFilters {
    pub kind: ReportKind,
    pub contract: String,
    pub statuses: Vec<TaskStatus>,
    /// `YYYY-MM-DD`
    pub start_date: String,
    pub end_date: String,
    pub staff_id: Option<EntityId>,
}

impl ReportFilters {
    /// Range defaults to the `window_days` days before today.
    pub fn new(contract: String, today: NaiveDate, window_days: i64) -> Self {
        Self {
            kind: ReportKind::default(),
            contract,
            statuses: Vec::new(),
            start_date: format_date(&(today - Duration::days(window_days))),
            end_date: format_date(&today),
            staff_id: None,
        }
    }

    pub fn toggle_status(&mut self, status: TaskStatus) {
        if let Some(pos) = self.statuses.iter().position(|s| *s == status) {
            self.statuses.remove(pos);
        } else {
            self.statuses.push(status);
        }
    }

    /// Staff of the selected contract whose name contains `query`.
    pub fn staff_options(&self, by_contract: &BTreeMap<String, Vec<Staff>>, query: &str) -> Vec<Staff> {
        let q = query.trim().to_lowercase();
        by_contract
            .get(&self.contract)
            .map(|list| {
                list.iter()
                    .filter(|s| q.is_empty() || s.name.to_lowercase().contains(&q))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn csv_rows(&self, staff: &[Staff]) -> Vec<Vec<String>> {
        let status = if self.statuses.is_empty() {
            "All".to_string()
        } else {
            self.statuses.iter().map(|s| s.code()).collect::<Vec<_>>().join("|")
        };
        let staff_label = match self.staff_id {
            Some(id) => name_of(staff, id).unwrap_or_else(|| id.to_string()),
            None => "All".to_string(),
        };
        let row = |label: &str, value: String| vec![label.to_string(), value];
        vec![
            row("Report", self.kind.title().to_string()),
            row("Contract", self.contract.clone()),
            row("Status", status),
            row("Start Date", self.start_date.clone()),
            row("End Date", self.end_date.clone()),
            row("Staff", staff_label),
        ]
    }

    pub fn to_csv(&self, staff: &[Staff]) -> String {
        csv_document(&self.csv_rows(staff))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::AggregateRoot;
    use crate::system::auth::SessionRole;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 8, 13).unwrap()
    }

    #[test]
    fn test_contract_resolution_order() {
        let staff = Staff::seed();
        let mut user = CurrentUser::new(SessionRole::ManagerLicensee);
        assert_eq!(resolve_contract(Some(&user), &staff, "CON001"), "CON001");
        user.contract = Some("CON007".into());
        assert_eq!(resolve_contract(Some(&user), &staff, "CON001"), "CON007");
        assert_eq!(resolve_contract(None, &staff[1..], "CON001"), "CON002");
        assert_eq!(resolve_contract(None, &[], "CON009"), "CON009");
    }

    #[test]
    fn test_staff_grouped_by_contract() {
        let mut staff = Staff::seed();
        staff[0].contract.clear();
        let map = contract_staff_map(&staff);
        assert_eq!(map[UNASSIGNED_CONTRACT].len(), 1);
        assert_eq!(map["CON002"][0].name, "Jane Doe");
    }

    #[test]
    fn test_default_window_and_staff_options() {
        let staff = Staff::seed();
        let filters = ReportFilters::new("CON003".into(), today(), 7);
        assert_eq!(filters.start_date, "2025-08-06");
        assert_eq!(filters.end_date, "2025-08-13");
        let map = contract_staff_map(&staff);
        assert_eq!(filters.staff_options(&map, "mike").len(), 1);
        assert!(filters.staff_options(&map, "jane").is_empty());
    }

    #[test]
    fn test_csv_export() {
        let staff = Staff::seed();
        let mut filters = ReportFilters::new("CON001".into(), today(), 7);
        filters.kind = ReportKind::DailyActivity;
        assert_eq!(
            filters.to_csv(&staff),
            "\"Report\",\"Daily Activity Report\"\n\"Contract\",\"CON001\"\n\"Status\",\"All\"\n\
             \"Start Date\",\"2025-08-06\"\n\"End Date\",\"2025-08-13\"\n\"Staff\",\"All\""
        );
        filters.toggle_status(TaskStatus::Completed);
        filters.toggle_status(TaskStatus::Overdue);
        filters.staff_id = Some(EntityId(1));
        let rows = filters.csv_rows(&staff);
        assert_eq!(rows[2][1], "completed|overdue");
        assert_eq!(rows[5][1], "John Smith");
        filters.toggle_status(TaskStatus::Completed);
        assert_eq!(filters.statuses, vec![TaskStatus::Overdue]);
    }
}
