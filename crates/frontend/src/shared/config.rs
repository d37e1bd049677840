use super::storage::BrowserStore;
use contracts::shared::config::PortalConfig;
use leptos::prelude::*;
use std::ops::Deref;

/// Portal settings provided to every page.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig(PortalConfig);

impl AppConfig {
    /// Defaults overlaid with the `portalConfig` storage entry.
    pub fn load() -> Self {
        Self(PortalConfig::load(&BrowserStore))
    }
}

impl Deref for AppConfig {
    type Target = PortalConfig;

    fn deref(&self) -> &PortalConfig {
        &self.0
    }
}

pub fn use_config() -> AppConfig {
    use_context::<AppConfig>().expect("AppConfig not found in context")
}
