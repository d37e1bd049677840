//! `window.localStorage` behind the domain crate's `KeyValueStore`.

use contracts::shared::{KeyValueStore, StoreError, StoreResult};
use web_sys::window;

/// Handle to the browser store. Holds nothing itself, so it can live in
/// signals and contexts; every call looks the storage object up again.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStore;

fn get_local_storage() -> StoreResult<web_sys::Storage> {
    window()
        .and_then(|w| w.local_storage().ok().flatten())
        .ok_or(StoreError::Unavailable)
}

impl KeyValueStore for BrowserStore {
    fn get_item(&self, key: &str) -> StoreResult<Option<String>> {
        get_local_storage()?
            .get_item(key)
            .map_err(|_| StoreError::Unavailable)
    }

    fn set_item(&self, key: &str, value: &str) -> StoreResult<()> {
        get_local_storage()?
            .set_item(key, value)
            .map_err(|e| StoreError::Write {
                key: key.to_string(),
                message: format!("{:?}", e),
            })
    }

    fn remove_item(&self, key: &str) -> StoreResult<()> {
        get_local_storage()?
            .remove_item(key)
            .map_err(|e| StoreError::Write {
                key: key.to_string(),
                message: format!("{:?}", e),
            })
    }

    fn clear(&self) -> StoreResult<()> {
        get_local_storage()?
            .clear()
            .map_err(|e| StoreError::Write {
                key: "*".to_string(),
                message: format!("{:?}", e),
            })
    }
}
