use super::{AggregateId, AggregateRoot};
use crate::shared::storage::{load_list_or_seed, read_json, write_json};
use crate::shared::{KeyValueStore, StoreResult};
use std::marker::PhantomData;

/// Whole-collection access to one aggregate's blob.
///
/// Each mutating call reads the current blob, applies the change and writes
/// the entire collection back.
pub struct Repository<'a, T> {
    store: &'a dyn KeyValueStore,
    _marker: PhantomData<T>,
}

impl<'a, T: AggregateRoot> Repository<'a, T> {
    pub fn new(store: &'a dyn KeyValueStore) -> Self {
        Self {
            store,
            _marker: PhantomData,
        }
    }

    /// Load with the aggregate's own seed fallback
    pub fn list(&self) -> StoreResult<Vec<T>> {
        load_list_or_seed(self.store, T::storage_key(), T::seed)
    }

    /// Load with a caller-provided seed (for seeds that depend on "now")
    pub fn list_or_seed<F: FnOnce() -> Vec<T>>(&self, seed: F) -> StoreResult<Vec<T>> {
        load_list_or_seed(self.store, T::storage_key(), seed)
    }

    /// Load without seeding; absent key yields an empty list
    pub fn list_raw(&self) -> StoreResult<Vec<T>> {
        Ok(read_json::<Vec<T>>(self.store, T::storage_key())?.unwrap_or_default())
    }

    pub fn save_all(&self, items: &[T]) -> StoreResult<()> {
        write_json(self.store, T::storage_key(), items)
    }

    pub fn find(&self, id: T::Id) -> StoreResult<Option<T>> {
        Ok(self.list()?.into_iter().find(|item| item.id() == id))
    }

    /// Replace the record with the same id or append it
    pub fn upsert(&self, item: T) -> StoreResult<Vec<T>> {
        let mut items = self.list()?;
        match items.iter().position(|x| x.id() == item.id()) {
            Some(pos) => items[pos] = item,
            None => items.push(item),
        }
        self.save_all(&items)?;
        Ok(items)
    }

    pub fn delete(&self, id: T::Id) -> StoreResult<Vec<T>> {
        let mut items = self.list()?;
        let before = items.len();
        items.retain(|x| x.id() != id);
        if items.len() != before {
            log::info!("{}: deleted {}", T::full_name(), id.as_string());
        }
        self.save_all(&items)?;
        Ok(items)
    }
}
