use contracts::shared::EntityId;
use contracts::system::access::PageKey;
use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use serde::{Deserialize, Serialize};
use web_sys::window;

/// How long a notice stays on screen
const NOTICE_MS: u32 = 3_000;

/// Sub-pages reachable from the settings menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SettingsView {
    #[default]
    Menu,
    AccessControl,
    UserRoles,
    Contracts,
    Services,
    Locations,
    TaskCategories,
    TaskTemplates,
    Checkpoints,
    TaskSettings,
}

impl SettingsView {
    pub fn code(&self) -> &'static str {
        match self {
            SettingsView::Menu => "menu",
            SettingsView::AccessControl => "access-control",
            SettingsView::UserRoles => "user-roles",
            SettingsView::Contracts => "contracts",
            SettingsView::Services => "services",
            SettingsView::Locations => "locations",
            SettingsView::TaskCategories => "task-categories",
            SettingsView::TaskTemplates => "task-templates",
            SettingsView::Checkpoints => "checkpoints",
            SettingsView::TaskSettings => "task-settings",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SettingsView::Menu => "Settings",
            SettingsView::AccessControl => "Access Control",
            SettingsView::UserRoles => "User Roles",
            SettingsView::Contracts => "Contracts",
            SettingsView::Services => "Services",
            SettingsView::Locations => "Locations",
            SettingsView::TaskCategories => "Task Categories",
            SettingsView::TaskTemplates => "Task Templates",
            SettingsView::Checkpoints => "Checkpoints",
            SettingsView::TaskSettings => "Task Settings",
        }
    }

    pub fn all() -> [SettingsView; 10] {
        [
            SettingsView::Menu,
            SettingsView::AccessControl,
            SettingsView::UserRoles,
            SettingsView::Contracts,
            SettingsView::Services,
            SettingsView::Locations,
            SettingsView::TaskCategories,
            SettingsView::TaskTemplates,
            SettingsView::Checkpoints,
            SettingsView::TaskSettings,
        ]
    }

    pub fn from_code(code: &str) -> Option<SettingsView> {
        Self::all().into_iter().find(|v| v.code() == code)
    }
}

/// Navigation state mirrored in the query string (`?page=task&view=...`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NavQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub view: Option<String>,
}

impl NavQuery {
    pub fn parse(search: &str) -> Self {
        serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default()
    }

    pub fn for_state(page: PageKey, view: SettingsView) -> Self {
        Self {
            page: Some(page.code().to_string()),
            view: (page == PageKey::Settings && view != SettingsView::Menu).then(|| view.code().to_string()),
        }
    }

    pub fn page_key(&self) -> Option<PageKey> {
        self.page.as_deref().and_then(PageKey::from_code)
    }

    pub fn settings_view(&self) -> SettingsView {
        self.view
            .as_deref()
            .and_then(SettingsView::from_code)
            .unwrap_or_default()
    }

    pub fn to_search(&self) -> String {
        format!("?{}", serde_qs::to_string(self).unwrap_or_default())
    }
}

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub page: RwSignal<PageKey>,
    pub settings_view: RwSignal<SettingsView>,
    /// Staff member opened in the staff detail view
    pub staff_detail: RwSignal<Option<EntityId>>,
    pub left_open: RwSignal<bool>,
    /// Short success message shown in the header
    pub notice: RwSignal<Option<String>>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            page: RwSignal::new(PageKey::Dashboard),
            settings_view: RwSignal::new(SettingsView::Menu),
            staff_detail: RwSignal::new(None),
            left_open: RwSignal::new(true),
            notice: RwSignal::new(None),
        }
    }

    /// Restore page and settings view from the URL, then keep the URL in
    /// sync with them.
    pub fn init_router_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        let query = NavQuery::parse(&search);
        if let Some(page) = query.page_key() {
            self.page.set(page);
            self.settings_view.set(query.settings_view());
        }

        let this = *self;
        Effect::new(move |_| {
            let new_url = NavQuery::for_state(this.page.get(), this.settings_view.get()).to_search();
            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();

            if current_search != new_url {
                if let Some(w) = window() {
                    if let Ok(history) = w.history() {
                        let _ = history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(&new_url));
                    }
                }
            }
        });
    }

    pub fn navigate(&self, page: PageKey) {
        leptos::logging::log!("navigate: {}", page.code());
        self.page.set(page);
        self.settings_view.set(SettingsView::Menu);
        self.staff_detail.set(None);
    }

    pub fn open_settings(&self, view: SettingsView) {
        self.page.set(PageKey::Settings);
        self.settings_view.set(view);
    }

    pub fn open_staff_detail(&self, id: EntityId) {
        self.page.set(PageKey::Staff);
        self.staff_detail.set(Some(id));
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|val| *val = !*val);
    }

    /// Show `message` for a few seconds.
    pub fn notify(&self, message: impl Into<String>) {
        let message = message.into();
        self.notice.set(Some(message.clone()));
        let notice = self.notice;
        Timeout::new(NOTICE_MS, move || {
            if notice.get_untracked().as_deref() == Some(message.as_str()) {
                notice.set(None);
            }
        })
        .forget();
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_global_context() -> AppGlobalContext {
    use_context::<AppGlobalContext>().expect("AppGlobalContext not found")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nav_query_round_trip() {
        let query = NavQuery::for_state(PageKey::Settings, SettingsView::UserRoles);
        assert_eq!(query.to_search(), "?page=settings&view=user-roles");
        let parsed = NavQuery::parse("?page=settings&view=user-roles");
        assert_eq!(parsed.page_key(), Some(PageKey::Settings));
        assert_eq!(parsed.settings_view(), SettingsView::UserRoles);
    }

    #[test]
    fn test_view_dropped_outside_settings() {
        let query = NavQuery::for_state(PageKey::Task, SettingsView::UserRoles);
        assert_eq!(query.to_search(), "?page=task");
    }

    #[test]
    fn test_unknown_values_fall_back() {
        let parsed = NavQuery::parse("page=nowhere&view=bogus");
        assert_eq!(parsed.page_key(), None);
        assert_eq!(parsed.settings_view(), SettingsView::Menu);
        assert_eq!(NavQuery::parse("").page_key(), None);
    }
}
