use super::storage::read_json;
use super::{KeyValueStore, StorageKey};
use serde::{Deserialize, Serialize};

/// Tunables of the portal. Stored (optionally, and partially) under the
/// `portalConfig` key; anything missing falls back to the defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PortalConfig {
    pub task_page_size: usize,
    pub message_page_size: usize,
    pub task_settings_page_size: usize,
    /// Days after today covered by the default task date filter.
    pub task_window_days: i64,
    /// Days before today covered by the default report range.
    pub report_window_days: i64,
    pub checkpoint_max_locations: usize,
    pub document_max_bytes: u64,
    pub fallback_contract: String,
    pub sample_assigned_messages: usize,
    pub sample_rejected_messages: usize,
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            task_page_size: 12,
            message_page_size: 10,
            task_settings_page_size: 20,
            task_window_days: 2,
            report_window_days: 7,
            checkpoint_max_locations: 10,
            document_max_bytes: 10 * 1024 * 1024,
            fallback_contract: "CON001".to_string(),
            sample_assigned_messages: 5,
            sample_rejected_messages: 3,
        }
    }
}

impl PortalConfig {
    pub fn document_max_mb(&self) -> u64 {
        self.document_max_bytes / (1024 * 1024)
    }

    /// Defaults overlaid with whatever `portalConfig` holds. A broken
    /// override is ignored.
    pub fn load(store: &dyn KeyValueStore) -> Self {
        match read_json::<PortalConfig>(store, StorageKey::PortalConfig) {
            Ok(Some(cfg)) => cfg,
            Ok(None) => Self::default(),
            Err(err) => {
                log::warn!("config: {}, using defaults", err);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_keeps_defaults() {
        let cfg: PortalConfig = serde_json::from_str(r#"{"taskPageSize": 24}"#).unwrap();
        assert_eq!(cfg.task_page_size, 24);
        assert_eq!(cfg.message_page_size, 10);
        assert_eq!(cfg.fallback_contract, "CON001");
        assert_eq!(cfg.document_max_mb(), 10);
    }

    #[test]
    fn test_load_from_store() {
        let store = crate::shared::MemoryStore::new();
        assert_eq!(PortalConfig::load(&store), PortalConfig::default());
        store.set_item("portalConfig", r#"{"messagePageSize": 5}"#).unwrap();
        assert_eq!(PortalConfig::load(&store).message_page_size, 5);
        store.set_item("portalConfig", "{oops").unwrap();
        assert_eq!(PortalConfig::load(&store), PortalConfig::default());
    }
}
