//! Local key-value persistence.
//!
//! Every collection is one JSON blob under a fixed key. Loaders read the
//! whole blob, callers mutate the in-memory copy and write it all back.

use super::error::StoreError;
use serde::{de::DeserializeOwned, Serialize};
use std::cell::RefCell;
use std::collections::BTreeMap;

pub type StoreResult<T> = Result<T, StoreError>;

/// Minimal surface of the browser's `localStorage`.
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> StoreResult<Option<String>>;
    fn set_item(&self, key: &str, value: &str) -> StoreResult<()>;
    fn remove_item(&self, key: &str) -> StoreResult<()>;
    fn clear(&self) -> StoreResult<()>;
}

/// Keys of every stored blob.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StorageKey {
    Tasks,
    Staff,
    Locations,
    Contracts,
    Services,
    UserRoles,
    AccessPages,
    AccessTaskSettings,
    Checkpoints,
    Shifts,
    ShiftTemplates,
    Documents,
    Messages,
    CurrentUser,
    SelectedStaffId,
    TaskCategories,
    TaskSubcategories,
    TaskTemplates,
    TaskTemplatesInline,
    LocationZones,
    StaffLocationHistory,
    PortalConfig,
}

impl StorageKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            StorageKey::Tasks => "tasks",
            StorageKey::Staff => "staff",
            StorageKey::Locations => "locations",
            StorageKey::Contracts => "contracts",
            StorageKey::Services => "services",
            StorageKey::UserRoles => "userRolesV2",
            StorageKey::AccessPages => "accessPagesV2",
            StorageKey::AccessTaskSettings => "accessTaskSettingsV2",
            StorageKey::Checkpoints => "checkpoints",
            StorageKey::Shifts => "shifts",
            StorageKey::ShiftTemplates => "shiftTemplates",
            StorageKey::Documents => "documents",
            StorageKey::Messages => "messages",
            StorageKey::CurrentUser => "currentUser",
            StorageKey::SelectedStaffId => "selectedStaffId",
            StorageKey::TaskCategories => "taskCategories",
            StorageKey::TaskSubcategories => "taskSubcategories",
            StorageKey::TaskTemplates => "taskTemplates",
            StorageKey::TaskTemplatesInline => "taskTemplatesInline",
            StorageKey::LocationZones => "locationZones",
            StorageKey::StaffLocationHistory => "staffLocationHistory",
            StorageKey::PortalConfig => "portalConfig",
        }
    }
}

impl std::fmt::Display for StorageKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// In-memory store for tests and for browsers without `localStorage`.
#[derive(Debug, Default)]
pub struct MemoryStore {
    items: RefCell<BTreeMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> StoreResult<()> {
        self.items.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> StoreResult<()> {
        self.items.borrow_mut().remove(key);
        Ok(())
    }

    fn clear(&self) -> StoreResult<()> {
        self.items.borrow_mut().clear();
        Ok(())
    }
}

/// Read and decode a blob. `Ok(None)` when the key is absent.
pub fn read_json<T: DeserializeOwned>(store: &dyn KeyValueStore, key: StorageKey) -> StoreResult<Option<T>> {
    match store.get_item(key.as_str())? {
        None => Ok(None),
        Some(raw) if raw.trim().is_empty() || raw.trim() == "null" => Ok(None),
        Some(raw) => serde_json::from_str(&raw)
            .map(Some)
            .map_err(|source| StoreError::Corrupt {
                key: key.as_str().to_string(),
                source,
            }),
    }
}

pub fn write_json<T: Serialize + ?Sized>(store: &dyn KeyValueStore, key: StorageKey, value: &T) -> StoreResult<()> {
    let raw = serde_json::to_string(value).map_err(|source| StoreError::Encode {
        key: key.as_str().to_string(),
        source,
    })?;
    log::debug!("storage: write {} ({} bytes)", key, raw.len());
    store.set_item(key.as_str(), &raw)
}

/// Load an array blob; a missing or empty array is replaced by `seed()`
/// and written back.
pub fn load_list_or_seed<T, F>(store: &dyn KeyValueStore, key: StorageKey, seed: F) -> StoreResult<Vec<T>>
where
    T: DeserializeOwned + Serialize,
    F: FnOnce() -> Vec<T>,
{
    match read_json::<Vec<T>>(store, key)? {
        Some(items) if !items.is_empty() => Ok(items),
        _ => {
            let items = seed();
            if !items.is_empty() {
                log::info!("storage: seeding {} with {} records", key, items.len());
                write_json(store, key, &items)?;
            }
            Ok(items)
        }
    }
}

/// Same as [`load_list_or_seed`] for object-shaped blobs.
pub fn load_map_or_seed<K, V, F>(store: &dyn KeyValueStore, key: StorageKey, seed: F) -> StoreResult<BTreeMap<K, V>>
where
    K: Ord + DeserializeOwned + Serialize,
    V: DeserializeOwned + Serialize,
    F: FnOnce() -> BTreeMap<K, V>,
{
    match read_json::<BTreeMap<K, V>>(store, key)? {
        Some(map) if !map.is_empty() => Ok(map),
        _ => {
            let map = seed();
            if !map.is_empty() {
                log::info!("storage: seeding {} with {} entries", key, map.len());
                write_json(store, key, &map)?;
            }
            Ok(map)
        }
    }
}

/// Recover from a corrupted blob by falling back to `seed()` without
/// overwriting what is stored. The error is returned alongside so the
/// page can surface it.
pub fn load_list_lenient<T, F>(store: &dyn KeyValueStore, key: StorageKey, seed: F) -> (Vec<T>, Option<StoreError>)
where
    T: DeserializeOwned + Serialize,
    F: FnOnce() -> Vec<T> + Clone,
{
    match load_list_or_seed(store, key, seed.clone()) {
        Ok(items) => (items, None),
        Err(err) => {
            log::warn!("storage: {}", err);
            (seed(), Some(err))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_key_is_seeded_and_persisted() {
        let store = MemoryStore::new();
        let items = load_list_or_seed(&store, StorageKey::Services, || vec![1u32, 2, 3]).unwrap();
        assert_eq!(items, vec![1, 2, 3]);
        assert_eq!(store.get_item("services").unwrap().as_deref(), Some("[1,2,3]"));
    }

    #[test]
    fn test_empty_array_is_reseeded() {
        let store = MemoryStore::new();
        store.set_item("services", "[]").unwrap();
        let items = load_list_or_seed(&store, StorageKey::Services, || vec![9u32]).unwrap();
        assert_eq!(items, vec![9]);
    }

    #[test]
    fn test_existing_data_wins_over_seed() {
        let store = MemoryStore::new();
        store.set_item("services", "[4]").unwrap();
        let items = load_list_or_seed(&store, StorageKey::Services, || vec![9u32]).unwrap();
        assert_eq!(items, vec![4]);
    }

    #[test]
    fn test_corrupted_blob_is_reported_not_overwritten() {
        let store = MemoryStore::new();
        store.set_item("tasks", "{not json").unwrap();
        let res = load_list_or_seed(&store, StorageKey::Tasks, || vec![1u32]);
        assert!(matches!(res, Err(StoreError::Corrupt { ref key, .. }) if key == "tasks"));

        let (items, err) = load_list_lenient(&store, StorageKey::Tasks, || vec![1u32]);
        assert_eq!(items, vec![1]);
        assert!(err.is_some());
        assert_eq!(store.get_item("tasks").unwrap().as_deref(), Some("{not json"));
    }

    #[test]
    fn test_map_keys_round_trip_as_strings() {
        let store = MemoryStore::new();
        let mut map = BTreeMap::new();
        map.insert(1u64, true);
        write_json(&store, StorageKey::AccessPages, &map).unwrap();
        assert_eq!(store.get_item("accessPagesV2").unwrap().as_deref(), Some(r#"{"1":true}"#));
        let back: BTreeMap<u64, bool> = read_json(&store, StorageKey::AccessPages).unwrap().unwrap();
        assert_eq!(back, map);
    }
}
