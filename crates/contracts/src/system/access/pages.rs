use crate::shared::EntityId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Top-level screens reachable from the navigation bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageKey {
    Dashboard,
    Task,
    Staff,
    Schedule,
    Locate,
    Documents,
    Reports,
    Messages,
    Settings,
}

impl PageKey {
    /// Canonical order, also used when picking a redirect target.
    pub const ORDER: [PageKey; 9] = [
        PageKey::Dashboard,
        PageKey::Task,
        PageKey::Staff,
        PageKey::Schedule,
        PageKey::Locate,
        PageKey::Documents,
        PageKey::Reports,
        PageKey::Messages,
        PageKey::Settings,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            PageKey::Dashboard => "dashboard",
            PageKey::Task => "task",
            PageKey::Staff => "staff",
            PageKey::Schedule => "schedule",
            PageKey::Locate => "locate",
            PageKey::Documents => "documents",
            PageKey::Reports => "reports",
            PageKey::Messages => "messages",
            PageKey::Settings => "settings",
        }
    }

    /// Route segment; the message page keeps its historical name.
    pub fn route(&self) -> &'static str {
        match self {
            PageKey::Messages => "message-center",
            other => other.code(),
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            PageKey::Dashboard => "Dashboard",
            PageKey::Task => "Tasks",
            PageKey::Staff => "Staff",
            PageKey::Schedule => "Schedule",
            PageKey::Locate => "Locate",
            PageKey::Documents => "Documents",
            PageKey::Reports => "Reports",
            PageKey::Messages => "Messages",
            PageKey::Settings => "Settings",
        }
    }

    pub fn from_code(code: &str) -> Option<PageKey> {
        Self::ORDER.into_iter().find(|p| p.code() == code)
    }

    pub fn from_route(route: &str) -> Option<PageKey> {
        Self::ORDER.into_iter().find(|p| p.route() == route)
    }
}

/// One row of the page-visibility matrix. Missing flags read as hidden.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PageVisibility {
    pub dashboard: bool,
    pub task: bool,
    pub staff: bool,
    pub schedule: bool,
    pub locate: bool,
    pub documents: bool,
    pub reports: bool,
    pub messages: bool,
    pub settings: bool,
}

impl PageVisibility {
    pub fn all_visible() -> Self {
        let mut v = Self::default();
        for page in PageKey::ORDER {
            v.set(page, true);
        }
        v
    }

    pub fn only(pages: &[PageKey]) -> Self {
        let mut v = Self::default();
        for page in pages {
            v.set(*page, true);
        }
        v
    }

    pub fn get(&self, page: PageKey) -> bool {
        match page {
            PageKey::Dashboard => self.dashboard,
            PageKey::Task => self.task,
            PageKey::Staff => self.staff,
            PageKey::Schedule => self.schedule,
            PageKey::Locate => self.locate,
            PageKey::Documents => self.documents,
            PageKey::Reports => self.reports,
            PageKey::Messages => self.messages,
            PageKey::Settings => self.settings,
        }
    }

    pub fn set(&mut self, page: PageKey, visible: bool) {
        let slot = match page {
            PageKey::Dashboard => &mut self.dashboard,
            PageKey::Task => &mut self.task,
            PageKey::Staff => &mut self.staff,
            PageKey::Schedule => &mut self.schedule,
            PageKey::Locate => &mut self.locate,
            PageKey::Documents => &mut self.documents,
            PageKey::Reports => &mut self.reports,
            PageKey::Messages => &mut self.messages,
            PageKey::Settings => &mut self.settings,
        };
        *slot = visible;
    }

    pub fn visible_pages(&self) -> Vec<PageKey> {
        PageKey::ORDER.into_iter().filter(|p| self.get(*p)).collect()
    }
}

/// Role id -> page visibility, stored under `accessPagesV2`.
pub type PageMatrix = BTreeMap<EntityId, PageVisibility>;

pub fn seed_page_matrix() -> PageMatrix {
    let mut matrix = PageMatrix::new();
    matrix.insert(EntityId(1), PageVisibility::all_visible());
    matrix.insert(EntityId(2), PageVisibility::all_visible());
    matrix.insert(
        EntityId(3),
        PageVisibility::only(&[PageKey::Dashboard, PageKey::Task, PageKey::Locate, PageKey::Messages]),
    );
    matrix
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_route_alias() {
        assert_eq!(PageKey::Messages.route(), "message-center");
        assert_eq!(PageKey::from_route("message-center"), Some(PageKey::Messages));
        assert_eq!(PageKey::from_route("task"), Some(PageKey::Task));
    }

    #[test]
    fn test_missing_flags_are_hidden() {
        let v: PageVisibility = serde_json::from_str(r#"{"dashboard":true,"task":true}"#).unwrap();
        assert_eq!(v.visible_pages(), vec![PageKey::Dashboard, PageKey::Task]);
    }
}
