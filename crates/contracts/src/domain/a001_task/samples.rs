use super::aggregate::{Task, TaskFeatures, TaskStatus};
use crate::shared::datetime::{add_minutes, format_datetime};
use crate::shared::EntityId;
use chrono::{Duration, NaiveDate, NaiveTime};

#[cfg(test)]
/// Bare task starting at `start` (any form `parse_datetime` accepts).
pub(crate) fn task_at(id: u64, category: &str, start: &str, duration: u32, status: TaskStatus) -> Task {
    let start_time = crate::shared::datetime::parse_datetime(start).unwrap_or_default();
    Task {
        id: EntityId(id),
        name: format!("Task {}", id),
        category: category.to_string(),
        subcategory: String::new(),
        start_time,
        end_time: add_minutes(start_time, duration),
        duration,
        location: String::new(),
        status,
        assigned_staff: Vec::new(),
        features: TaskFeatures::default(),
        document: None,
        created_at: None,
        completed_at: None,
        is_overdue: false,
    }
}

struct SampleRow {
    name: &'static str,
    category: &'static str,
    subcategory: &'static str,
    day: i64,
    hour: u32,
    duration: u32,
    location: &'static str,
    status: TaskStatus,
    staff: &'static [u64],
}

const ROWS: &[SampleRow] = &[
    SampleRow { name: "Daily Cleaning Service", category: "Maintenance", subcategory: "Cleaning", day: 0, hour: 9, duration: 60, location: "Building A - Floor 1", status: TaskStatus::Completed, staff: &[1, 2] },
    SampleRow { name: "Security Patrol", category: "Security", subcategory: "Patrol", day: 0, hour: 14, duration: 60, location: "Building B - Floor 1", status: TaskStatus::InProgress, staff: &[3] },
    SampleRow { name: "Equipment Inspection", category: "Maintenance", subcategory: "Equipment Repair", day: 0, hour: 11, duration: 60, location: "Building A - Floor 2", status: TaskStatus::Completed, staff: &[4] },
    SampleRow { name: "Spill Response", category: "Adhoc", subcategory: "", day: 0, hour: 10, duration: 30, location: "Building A - Floor 1", status: TaskStatus::OpenQueued, staff: &[] },
    SampleRow { name: "Access Control Check", category: "Security", subcategory: "Access Control", day: 0, hour: 16, duration: 45, location: "Building B - Floor 1", status: TaskStatus::Assigned, staff: &[1] },
    SampleRow { name: "Deep Cleaning Lobby", category: "Cleaning", subcategory: "Deep Cleaning", day: 0, hour: 7, duration: 120, location: "Building A - Floor 1", status: TaskStatus::Overdue, staff: &[2] },
    SampleRow { name: "Window Cleaning", category: "Cleaning", subcategory: "General Cleaning", day: 0, hour: 13, duration: 90, location: "Building A - Floor 2", status: TaskStatus::Pending, staff: &[] },
    SampleRow { name: "Night Patrol", category: "Security", subcategory: "Patrol", day: 0, hour: 22, duration: 120, location: "Building B - Floor 1", status: TaskStatus::Assigned, staff: &[3] },
    SampleRow { name: "HVAC Filter Replacement", category: "Maintenance", subcategory: "Equipment Repair", day: 1, hour: 8, duration: 90, location: "Building A - Floor 2", status: TaskStatus::Assigned, staff: &[4] },
    SampleRow { name: "Restroom Restock", category: "Cleaning", subcategory: "General Cleaning", day: 1, hour: 9, duration: 30, location: "Building A - Floor 1", status: TaskStatus::OpenQueued, staff: &[] },
    SampleRow { name: "Loading Dock Patrol", category: "Security", subcategory: "Patrol", day: 1, hour: 12, duration: 60, location: "Building B - Floor 1", status: TaskStatus::Pending, staff: &[] },
    SampleRow { name: "Broken Door Report", category: "Adhoc", subcategory: "", day: 1, hour: 15, duration: 30, location: "Building B - Floor 1", status: TaskStatus::Assigned, staff: &[1] },
    SampleRow { name: "Carpet Shampoo", category: "Cleaning", subcategory: "Deep Cleaning", day: 1, hour: 18, duration: 180, location: "Building A - Floor 2", status: TaskStatus::Rejected, staff: &[2] },
    SampleRow { name: "Fire Extinguisher Check", category: "Maintenance", subcategory: "Equipment Repair", day: 1, hour: 10, duration: 60, location: "Building A - Floor 1", status: TaskStatus::Cancelled, staff: &[4] },
    SampleRow { name: "Visitor Badge Audit", category: "Security", subcategory: "Access Control", day: 1, hour: 17, duration: 45, location: "Building B - Floor 1", status: TaskStatus::Suspended, staff: &[3] },
    SampleRow { name: "Lift Lobby Mopping", category: "Cleaning", subcategory: "General Cleaning", day: 2, hour: 7, duration: 30, location: "Building A - Floor 1", status: TaskStatus::Assigned, staff: &[2] },
    SampleRow { name: "Perimeter Patrol", category: "Security", subcategory: "Patrol", day: 2, hour: 9, duration: 90, location: "Building B - Floor 1", status: TaskStatus::OpenQueued, staff: &[] },
    SampleRow { name: "Lighting Repair", category: "Maintenance", subcategory: "Equipment Repair", day: 2, hour: 11, duration: 60, location: "Building A - Floor 2", status: TaskStatus::Pending, staff: &[] },
    SampleRow { name: "Water Leak Check", category: "Adhoc", subcategory: "", day: 2, hour: 14, duration: 30, location: "Building A - Floor 2", status: TaskStatus::InProgress, staff: &[4] },
    SampleRow { name: "Waste Collection", category: "Cleaning", subcategory: "General Cleaning", day: 2, hour: 16, duration: 60, location: "Building A - Floor 1", status: TaskStatus::Assigned, staff: &[1, 2] },
    SampleRow { name: "CCTV Review", category: "Security", subcategory: "Access Control", day: 2, hour: 19, duration: 60, location: "Building B - Floor 1", status: TaskStatus::Pending, staff: &[] },
    SampleRow { name: "Pantry Cleaning", category: "Cleaning", subcategory: "General Cleaning", day: -1, hour: 9, duration: 45, location: "Building A - Floor 2", status: TaskStatus::Completed, staff: &[2] },
    SampleRow { name: "Generator Test", category: "Maintenance", subcategory: "Equipment Repair", day: -1, hour: 13, duration: 60, location: "Building B - Floor 1", status: TaskStatus::Overdue, staff: &[4] },
    SampleRow { name: "Evening Patrol", category: "Security", subcategory: "Patrol", day: -1, hour: 20, duration: 60, location: "Building B - Floor 1", status: TaskStatus::Completed, staff: &[3] },
    SampleRow { name: "Glass Door Polish", category: "Cleaning", subcategory: "Deep Cleaning", day: -2, hour: 8, duration: 60, location: "Building A - Floor 1", status: TaskStatus::Completed, staff: &[1] },
    SampleRow { name: "Key Handover", category: "Security", subcategory: "Access Control", day: -2, hour: 12, duration: 15, location: "Building B - Floor 1", status: TaskStatus::Cancelled, staff: &[] },
    SampleRow { name: "Pipe Inspection", category: "Maintenance", subcategory: "Equipment Repair", day: 3, hour: 10, duration: 120, location: "Building A - Floor 2", status: TaskStatus::OpenQueued, staff: &[] },
    SampleRow { name: "Floor Buffing", category: "Cleaning", subcategory: "Deep Cleaning", day: 3, hour: 21, duration: 120, location: "Building A - Floor 1", status: TaskStatus::Assigned, staff: &[2] },
    SampleRow { name: "Alarm Panel Test", category: "Security", subcategory: "Access Control", day: 4, hour: 9, duration: 60, location: "Building B - Floor 1", status: TaskStatus::Pending, staff: &[] },
    SampleRow { name: "Ceiling Tile Swap", category: "Adhoc", subcategory: "", day: 4, hour: 15, duration: 45, location: "Building A - Floor 2", status: TaskStatus::OpenQueued, staff: &[] },
];

/// Thirty sample tasks spread around `today`.
pub fn sample_tasks(today: NaiveDate) -> Vec<Task> {
    ROWS.iter()
        .enumerate()
        .map(|(idx, row)| {
            let hour = NaiveTime::from_hms_opt(row.hour, 0, 0).unwrap_or(NaiveTime::MIN);
            let start_time = (today + Duration::days(row.day)).and_time(hour);
            let end_time = add_minutes(start_time, row.duration);
            Task {
                id: EntityId(idx as u64 + 1),
                name: row.name.to_string(),
                category: row.category.to_string(),
                subcategory: row.subcategory.to_string(),
                start_time,
                end_time,
                duration: row.duration,
                location: row.location.to_string(),
                status: row.status,
                assigned_staff: row.staff.iter().copied().map(EntityId).collect(),
                features: TaskFeatures {
                    photo_evidence: idx % 3 == 0,
                    early_complete: idx % 4 == 0,
                },
                document: None,
                created_at: Some(format_datetime(&(start_time - Duration::hours(1)))),
                completed_at: (row.status == TaskStatus::Completed).then(|| format_datetime(&end_time)),
                is_overdue: row.status == TaskStatus::Overdue,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_samples_are_relative_to_today() {
        let today = NaiveDate::from_ymd_opt(2025, 8, 9).unwrap();
        let tasks = sample_tasks(today);
        assert_eq!(tasks.len(), 30);
        assert_eq!(tasks[0].start_date_key(), "2025-08-09");
        assert!(tasks.iter().all(|t| t.end_time > t.start_time));
        assert!(tasks.iter().any(|t| t.is_adhoc()));
    }
}
