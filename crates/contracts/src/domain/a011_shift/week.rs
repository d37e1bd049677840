use super::aggregate::{ShiftEntry, ShiftMap, ShiftTemplate};
use crate::domain::a002_staff::aggregate::Staff;
use crate::shared::storage::load_map_or_seed;
use crate::shared::{EntityId, KeyValueStore, StorageKey, StoreResult};
use chrono::{Datelike, Duration, NaiveDate};

pub const EMPTY_CELL: &str = "—";

/// Monday of the week containing `date`.
pub fn week_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(i64::from(date.weekday().num_days_from_monday()))
}

pub fn week_days(start: NaiveDate) -> Vec<NaiveDate> {
    (0..7).map(|n| start + Duration::days(n)).collect()
}

pub fn prev_week(start: NaiveDate) -> NaiveDate {
    start - Duration::days(7)
}

pub fn next_week(start: NaiveDate) -> NaiveDate {
    start + Duration::days(7)
}

/// "Aug 4 - Aug 10"
pub fn week_label(start: NaiveDate) -> String {
    let end = start + Duration::days(6);
    format!("{} - {}", start.format("%b %-d"), end.format("%b %-d"))
}

/// Column header "Mon 4"
pub fn day_header(date: NaiveDate) -> String {
    date.format("%a %-d").to_string()
}

/// Filter of the schedule grid.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ScheduleFilter {
    /// `None` means all teams
    pub team: Option<String>,
    pub query: String,
}

impl ScheduleFilter {
    pub fn apply<'a>(&self, staff: &'a [Staff]) -> Vec<&'a Staff> {
        let query = self.query.trim().to_lowercase();
        staff
            .iter()
            .filter(|s| match &self.team {
                Some(team) => s.team.as_deref().unwrap_or("") == team,
                None => true,
            })
            .filter(|s| s.name.to_lowercase().contains(&query))
            .collect()
    }
}

/// Distinct non-empty teams, sorted.
pub fn teams(staff: &[Staff]) -> Vec<String> {
    let mut teams: Vec<String> = staff
        .iter()
        .filter_map(|s| s.team.clone())
        .filter(|t| !t.is_empty())
        .collect();
    teams.sort();
    teams.dedup();
    teams
}

/// Shifts of one staff member on one day, `—` when none.
pub fn cell_text(shifts: &ShiftMap, staff_id: EntityId, date: NaiveDate) -> String {
    let key = date.format("%Y-%m-%d").to_string();
    let labels: Vec<String> = shifts
        .get(&staff_id)
        .map(|entries| entries.iter().filter(|e| e.date_iso == key).map(ShiftEntry::label).collect())
        .unwrap_or_default();
    if labels.is_empty() {
        EMPTY_CELL.to_string()
    } else {
        labels.join(", ")
    }
}

/// Put a template's shift on a day, replacing what the staff member had
/// on that day.
pub fn assign_shift(shifts: &mut ShiftMap, staff_id: EntityId, date: NaiveDate, template: &ShiftTemplate) {
    let entry = ShiftEntry::from_template(date, template);
    let entries = shifts.entry(staff_id).or_default();
    entries.retain(|e| e.date_iso != entry.date_iso);
    entries.push(entry);
    entries.sort_by(|a, b| a.date_iso.cmp(&b.date_iso));
}

pub fn clear_shift(shifts: &mut ShiftMap, staff_id: EntityId, date: NaiveDate) {
    let key = date.format("%Y-%m-%d").to_string();
    if let Some(entries) = shifts.get_mut(&staff_id) {
        entries.retain(|e| e.date_iso != key);
    }
}

/// Sample shifts placed in the week of `today`.
pub fn seed_shifts(today: NaiveDate) -> ShiftMap {
    let ws = week_start(today);
    let day = |n: i64| ws + Duration::days(n);
    let mut map = ShiftMap::new();
    map.insert(
        EntityId(1),
        vec![ShiftEntry::new(day(0), "09:00", "17:00"), ShiftEntry::new(day(2), "12:00", "20:00")],
    );
    map.insert(
        EntityId(2),
        vec![ShiftEntry::new(day(1), "08:00", "16:00"), ShiftEntry::new(day(3), "10:00", "18:00")],
    );
    map.insert(EntityId(3), vec![ShiftEntry::new(day(4), "09:00", "17:00")]);
    map.insert(
        EntityId(4),
        vec![ShiftEntry::new(day(0), "07:00", "15:00"), ShiftEntry::new(day(6), "11:00", "19:00")],
    );
    map
}

pub fn load_shifts(store: &dyn KeyValueStore, today: NaiveDate) -> StoreResult<ShiftMap> {
    load_map_or_seed(store, StorageKey::Shifts, || seed_shifts(today))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::AggregateRoot;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_week_starts_monday() {
        assert_eq!(week_start(date("2025-08-10")), date("2025-08-04"));
        assert_eq!(week_start(date("2025-08-04")), date("2025-08-04"));
        assert_eq!(week_start(date("2025-08-06")), date("2025-08-04"));
        assert_eq!(next_week(date("2025-08-04")), date("2025-08-11"));
        assert_eq!(prev_week(date("2025-08-04")), date("2025-07-28"));
        assert_eq!(week_label(date("2025-08-04")), "Aug 4 - Aug 10");
        assert_eq!(week_days(date("2025-08-04")).len(), 7);
    }

    #[test]
    fn test_cells() {
        let shifts = seed_shifts(date("2025-08-06"));
        assert_eq!(cell_text(&shifts, EntityId(1), date("2025-08-04")), "09:00 - 17:00");
        assert_eq!(cell_text(&shifts, EntityId(1), date("2025-08-05")), EMPTY_CELL);
        assert_eq!(cell_text(&shifts, EntityId(42), date("2025-08-05")), EMPTY_CELL);
    }

    #[test]
    fn test_assign_replaces_same_day() {
        let mut shifts = seed_shifts(date("2025-08-06"));
        let night = ShiftTemplate::seed().remove(3);
        assign_shift(&mut shifts, EntityId(1), date("2025-08-04"), &night);
        assert_eq!(cell_text(&shifts, EntityId(1), date("2025-08-04")), "23:00 - 07:00");
        assert_eq!(shifts[&EntityId(1)].len(), 2);
        clear_shift(&mut shifts, EntityId(1), date("2025-08-04"));
        assert_eq!(cell_text(&shifts, EntityId(1), date("2025-08-04")), EMPTY_CELL);
    }

    #[test]
    fn test_team_and_name_filter() {
        let staff = Staff::seed();
        assert_eq!(teams(&staff), vec!["Team A", "Team B", "Team C"]);
        let filter = ScheduleFilter {
            team: Some("Team A".into()),
            query: "mike".into(),
        };
        let hits = filter.apply(&staff);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Mike Johnson");
    }
}
