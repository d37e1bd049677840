use super::pages::{seed_page_matrix, PageKey, PageMatrix, PageVisibility};
use super::roles::{AccessLevel, Role};
use super::task_permissions::{
    seed_task_permission_matrix, PermissionLevel, TaskPermissionMatrix, TaskSettingsPermissions,
    TaskSettingsSection,
};
use crate::domain::common::AggregateRoot;
use crate::shared::storage::load_map_or_seed;
use crate::shared::{KeyValueStore, StorageKey, StoreResult};
use crate::system::auth::SessionRole;

/// Result of asking whether the current role may open a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageAccess {
    Allowed,
    /// Denied, send the user to the first visible page instead
    Redirect(PageKey),
    /// Denied and no page at all is visible
    Denied,
}

/// Maps a session role to its role record and that record's matrix rows.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AccessResolver {
    roles: Vec<Role>,
    pages: PageMatrix,
    task_settings: TaskPermissionMatrix,
}

impl AccessResolver {
    pub fn new(roles: Vec<Role>, pages: PageMatrix, task_settings: TaskPermissionMatrix) -> Self {
        Self {
            roles,
            pages,
            task_settings,
        }
    }

    /// Read roles and both matrices, seeding any that are missing.
    pub fn load(store: &dyn KeyValueStore) -> StoreResult<Self> {
        let roles = crate::shared::storage::load_list_or_seed(store, Role::storage_key(), Role::seed)?;
        let pages = load_map_or_seed(store, StorageKey::AccessPages, seed_page_matrix)?;
        let task_settings = load_map_or_seed(store, StorageKey::AccessTaskSettings, seed_task_permission_matrix)?;
        Ok(Self::new(roles, pages, task_settings))
    }

    pub fn roles(&self) -> &[Role] {
        &self.roles
    }

    pub fn page_matrix(&self) -> &PageMatrix {
        &self.pages
    }

    pub fn task_permission_matrix(&self) -> &TaskPermissionMatrix {
        &self.task_settings
    }

    /// Role record for a session role.
    ///
    /// Matches on access level or on the normalised role name. A licensee
    /// falls back to the first manager-level role and staff to the first
    /// frontline role.
    pub fn resolve_role(&self, role: SessionRole) -> Option<&Role> {
        let key = role.code();
        let direct = self
            .roles
            .iter()
            .find(|r| r.access_level.code() == key || r.name_key() == key);
        if direct.is_some() {
            return direct;
        }
        let fallback = match role {
            SessionRole::ManagerLicensee => AccessLevel::Manager,
            SessionRole::Staff => AccessLevel::Frontline,
            _ => return None,
        };
        self.roles.iter().find(|r| r.access_level == fallback)
    }

    /// Visibility row of the role; everything is visible when the role or
    /// its row is missing.
    pub fn page_visibility(&self, role: SessionRole) -> PageVisibility {
        self.resolve_role(role)
            .and_then(|r| self.pages.get(&r.id))
            .copied()
            .unwrap_or_else(PageVisibility::all_visible)
    }

    pub fn is_page_visible(&self, role: SessionRole, page: PageKey) -> bool {
        self.page_visibility(role).get(page)
    }

    pub fn visible_pages(&self, role: SessionRole) -> Vec<PageKey> {
        self.page_visibility(role).visible_pages()
    }

    pub fn check_page(&self, role: SessionRole, page: PageKey) -> PageAccess {
        let visibility = self.page_visibility(role);
        if visibility.get(page) {
            return PageAccess::Allowed;
        }
        match visibility.visible_pages().first() {
            Some(target) => PageAccess::Redirect(*target),
            None => PageAccess::Denied,
        }
    }

    pub fn task_settings_permissions(&self, role: SessionRole) -> TaskSettingsPermissions {
        match self.resolve_role(role) {
            Some(record) => self
                .task_settings
                .get(&record.id)
                .copied()
                .unwrap_or_else(|| TaskSettingsPermissions::for_access_level(record.access_level)),
            None => TaskSettingsPermissions::for_access_level(match role {
                SessionRole::SystemAdmin => AccessLevel::SystemAdmin,
                SessionRole::Manager | SessionRole::ManagerLicensee => AccessLevel::Manager,
                SessionRole::Staff => AccessLevel::Frontline,
            }),
        }
    }

    pub fn permission(&self, role: SessionRole, section: TaskSettingsSection) -> PermissionLevel {
        self.task_settings_permissions(role).get(section)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::{EntityId, MemoryStore, RecordStatus};

    fn seeded() -> AccessResolver {
        AccessResolver::new(Role::seed(), seed_page_matrix(), seed_task_permission_matrix())
    }

    #[test]
    fn test_staff_sees_only_frontline_pages() {
        let resolver = seeded();
        assert_eq!(
            resolver.visible_pages(SessionRole::Staff),
            vec![PageKey::Dashboard, PageKey::Task, PageKey::Locate, PageKey::Messages]
        );
        assert_eq!(
            resolver.check_page(SessionRole::Staff, PageKey::Reports),
            PageAccess::Redirect(PageKey::Dashboard)
        );
        assert_eq!(resolver.check_page(SessionRole::Staff, PageKey::Task), PageAccess::Allowed);
    }

    #[test]
    fn test_licensee_falls_back_to_manager_role() {
        let resolver = seeded();
        let role = resolver.resolve_role(SessionRole::ManagerLicensee).unwrap();
        assert_eq!(role.id, EntityId(2));
    }

    #[test]
    fn test_match_by_normalised_name() {
        let mut roles = Role::seed();
        roles.push(Role {
            id: EntityId(77),
            name: "Manager Licensee".into(),
            access_level: AccessLevel::Manager,
            status: RecordStatus::Active,
            created_date: String::new(),
        });
        // A name match beats the manager-level fallback.
        let resolver = AccessResolver::new(roles, seed_page_matrix(), seed_task_permission_matrix());
        assert_eq!(resolver.resolve_role(SessionRole::ManagerLicensee).unwrap().id, EntityId(77));
    }

    #[test]
    fn test_missing_matrix_row_means_everything_visible() {
        let resolver = AccessResolver::new(Role::seed(), PageMatrix::new(), TaskPermissionMatrix::new());
        assert_eq!(resolver.visible_pages(SessionRole::Staff).len(), 9);
        assert_eq!(resolver.check_page(SessionRole::Staff, PageKey::Settings), PageAccess::Allowed);
    }

    #[test]
    fn test_no_roles_means_everything_visible() {
        let resolver = AccessResolver::new(Vec::new(), seed_page_matrix(), seed_task_permission_matrix());
        assert!(resolver.is_page_visible(SessionRole::Manager, PageKey::Reports));
        assert_eq!(
            resolver.permission(SessionRole::Staff, TaskSettingsSection::Documents),
            PermissionLevel::Hidden
        );
    }

    #[test]
    fn test_empty_row_denies_everything() {
        let mut pages = seed_page_matrix();
        pages.insert(EntityId(3), PageVisibility::default());
        let resolver = AccessResolver::new(Role::seed(), pages, seed_task_permission_matrix());
        assert_eq!(resolver.check_page(SessionRole::Staff, PageKey::Dashboard), PageAccess::Denied);
    }

    #[test]
    fn test_redirect_follows_canonical_order() {
        let mut pages = seed_page_matrix();
        pages.insert(EntityId(2), PageVisibility::only(&[PageKey::Settings, PageKey::Schedule]));
        let resolver = AccessResolver::new(Role::seed(), pages, seed_task_permission_matrix());
        assert_eq!(
            resolver.check_page(SessionRole::Manager, PageKey::Dashboard),
            PageAccess::Redirect(PageKey::Schedule)
        );
    }

    #[test]
    fn test_load_seeds_store() {
        let store = MemoryStore::new();
        let resolver = AccessResolver::load(&store).unwrap();
        assert_eq!(resolver.roles().len(), 3);
        assert!(store.get_item("accessPagesV2").unwrap().is_some());
        assert!(store.get_item("accessTaskSettingsV2").unwrap().is_some());
        assert_eq!(
            resolver.permission(SessionRole::SystemAdmin, TaskSettingsSection::Checkpoints),
            PermissionLevel::Manage
        );
    }
}
