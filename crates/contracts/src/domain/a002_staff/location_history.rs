use crate::shared::storage::load_map_or_seed;
use crate::shared::{EntityId, KeyValueStore, StorageKey, StoreResult};
use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One reported position of a staff member.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationHistoryEntry {
    #[serde(with = "crate::shared::datetime::flexible")]
    pub ts: NaiveDateTime,
    pub location_name: String,
    #[serde(default)]
    pub details: String,
}

/// staffId -> history, stored under `staffLocationHistory`.
pub type LocationHistoryMap = BTreeMap<EntityId, Vec<LocationHistoryEntry>>;

pub fn seed_location_history(now: NaiveDateTime) -> LocationHistoryMap {
    let entry = |minutes_ago: i64, name: &str, details: &str| LocationHistoryEntry {
        ts: now - Duration::minutes(minutes_ago),
        location_name: name.to_string(),
        details: details.to_string(),
    };
    let mut map = LocationHistoryMap::new();
    map.insert(
        EntityId(1),
        vec![
            entry(240, "Building A - Floor 1", "Checked in"),
            entry(120, "Building A - Floor 2", "Cleaning round"),
            entry(15, "Building A - Floor 1", "Task completed"),
        ],
    );
    map.insert(
        EntityId(2),
        vec![entry(300, "Building A - Floor 2", "Checked in"), entry(45, "Building A - Floor 1", "On break")],
    );
    map.insert(
        EntityId(3),
        vec![entry(180, "Building B - Floor 1", "Patrol start"), entry(30, "Building B - Floor 1", "Checkpoint scanned")],
    );
    map.insert(EntityId(4), vec![entry(60, "Building A - Floor 2", "Inspection")]);
    map
}

pub fn load_location_history(store: &dyn KeyValueStore, now: NaiveDateTime) -> StoreResult<LocationHistoryMap> {
    load_map_or_seed(store, StorageKey::StaffLocationHistory, || seed_location_history(now))
}

/// History of one staff member, newest first.
pub fn history_for(map: &LocationHistoryMap, staff_id: EntityId) -> Vec<LocationHistoryEntry> {
    let mut entries = map.get(&staff_id).cloned().unwrap_or_default();
    entries.sort_by(|a, b| b.ts.cmp(&a.ts));
    entries
}

/// Most recent position of a staff member.
pub fn last_known(map: &LocationHistoryMap, staff_id: EntityId) -> Option<LocationHistoryEntry> {
    map.get(&staff_id)?.iter().max_by_key(|e| e.ts).cloned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::MemoryStore;

    #[test]
    fn test_history_sorted_newest_first() {
        let now = crate::shared::datetime::parse_datetime("2025-08-09T12:00").unwrap();
        let map = seed_location_history(now);
        let entries = history_for(&map, EntityId(1));
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].details, "Task completed");
        assert!(entries.windows(2).all(|w| w[0].ts >= w[1].ts));
        assert!(history_for(&map, EntityId(99)).is_empty());
        assert_eq!(last_known(&map, EntityId(3)).unwrap().details, "Checkpoint scanned");
    }

    #[test]
    fn test_load_seeds_once() {
        let store = MemoryStore::new();
        let now = crate::shared::datetime::parse_datetime("2025-08-09T12:00").unwrap();
        let map = load_location_history(&store, now).unwrap();
        assert_eq!(map.len(), 4);
        assert!(store.get_item("staffLocationHistory").unwrap().is_some());
    }
}
