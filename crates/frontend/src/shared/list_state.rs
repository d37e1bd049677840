//! State shared by the CRUD list pages: the loaded collection, search box,
//! current page and the error banner.

use super::data::{confirm, load_list, save_list, Banner};
use contracts::domain::common::AggregateRoot;
use contracts::shared::pagination::{paginate, PageWindow};
use contracts::shared::{EntityId, IdGenerator};
use leptos::prelude::*;

pub struct ListState<T: Send + Sync + 'static> {
    pub items: RwSignal<Vec<T>>,
    pub query: RwSignal<String>,
    /// 1-based
    pub page: RwSignal<usize>,
    pub banner: Banner,
}

impl<T: Send + Sync + 'static> Clone for ListState<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for ListState<T> {}

impl<T> ListState<T>
where
    T: AggregateRoot<Id = EntityId> + Send + Sync + 'static,
{
    /// Load the collection (seeding it when empty).
    pub fn load() -> Self {
        let banner: Banner = RwSignal::new(None);
        let items = load_list::<T>(banner);
        Self::with_items(items, banner)
    }

    pub fn with_items(items: Vec<T>, banner: Banner) -> Self {
        Self {
            items: RwSignal::new(items),
            query: RwSignal::new(String::new()),
            page: RwSignal::new(1),
            banner,
        }
    }

    /// Current page of the items accepted by `keep` for the search text.
    pub fn visible(&self, page_size: usize, keep: impl Fn(&T, &str) -> bool) -> (Vec<T>, PageWindow) {
        let query = self.query.get().trim().to_lowercase();
        let filtered: Vec<T> = self
            .items
            .with(|items| items.iter().filter(|item| keep(item, &query)).cloned().collect());
        paginate(&filtered, self.page.get(), page_size)
    }

    /// Persist `items` and show them. Returns whether the write worked.
    pub fn commit(&self, items: Vec<T>) -> bool {
        if save_list(self.banner, &items) {
            self.banner.set(None);
            self.items.set(items);
            true
        } else {
            false
        }
    }

    /// Replace the record with the same id or append it, then persist.
    pub fn upsert(&self, item: T) -> bool {
        let mut items = self.items.get_untracked();
        match items.iter().position(|x| x.id() == item.id()) {
            Some(pos) => items[pos] = item,
            None => items.push(item),
        }
        self.commit(items)
    }

    /// Remove after a confirm dialog naming the record.
    pub fn delete(&self, id: EntityId) -> bool {
        let mut items = self.items.get_untracked();
        let Some(pos) = items.iter().position(|x| x.id() == id) else {
            return false;
        };
        let message = format!(
            "Are you sure you want to delete {} \"{}\"?",
            T::element_name().to_lowercase(),
            items[pos].description()
        );
        if !confirm(&message) {
            return false;
        }
        items.remove(pos);
        self.commit(items)
    }

    /// Id for a new record, above every id already in the collection.
    pub fn next_id(&self) -> EntityId {
        let mut ids = IdGenerator::new();
        self.items.with_untracked(|items| ids.observe(items.iter().map(|x| x.id())));
        ids.next()
    }

    pub fn find(&self, id: EntityId) -> Option<T> {
        self.items
            .with_untracked(|items| items.iter().find(|x| x.id() == id).cloned())
    }

    /// Search text changed: back to the first page.
    pub fn set_query(&self, query: String) {
        self.query.set(query);
        self.page.set(1);
    }
}

/// Case-insensitive "contains" against an already lower-cased query.
pub fn text_matches(value: &str, query_lower: &str) -> bool {
    query_lower.is_empty() || value.to_lowercase().contains(query_lower)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_matches() {
        assert!(text_matches("Building A - Floor 1", "floor"));
        assert!(text_matches("anything", ""));
        assert!(!text_matches("Zone 1", "patrol"));
    }
}
