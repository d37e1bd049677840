use crate::shared::storage::{read_json, write_json};
use crate::shared::{EntityId, KeyValueStore, StorageKey, StoreResult};

/// Remember which staff member the detail page should open.
pub fn select_staff(store: &dyn KeyValueStore, id: EntityId) -> StoreResult<()> {
    write_json(store, StorageKey::SelectedStaffId, &id)
}

pub fn selected_staff(store: &dyn KeyValueStore) -> StoreResult<Option<EntityId>> {
    read_json(store, StorageKey::SelectedStaffId)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::MemoryStore;

    #[test]
    fn test_selection_accepts_string_form() {
        let store = MemoryStore::new();
        store.set_item("selectedStaffId", "\"3\"").unwrap();
        assert_eq!(selected_staff(&store).unwrap(), Some(EntityId(3)));
        select_staff(&store, EntityId(4)).unwrap();
        assert_eq!(store.get_item("selectedStaffId").unwrap().as_deref(), Some("4"));
    }
}
