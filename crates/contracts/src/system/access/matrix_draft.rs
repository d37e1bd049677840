use super::pages::{PageKey, PageMatrix, PageVisibility};
use super::roles::Role;
use super::task_permissions::{PermissionLevel, TaskPermissionMatrix, TaskSettingsPermissions, TaskSettingsSection};
use crate::shared::storage::write_json;
use crate::shared::{EntityId, KeyValueStore, StorageKey, StoreResult};

pub const SAVED_MESSAGE: &str = "Access permissions saved.";

/// Pending edits of both access matrices. Toggles only touch the draft;
/// nothing is persisted until [`AccessMatrixDraft::commit`].
#[derive(Debug, Clone, PartialEq)]
pub struct AccessMatrixDraft {
    pub pages: PageMatrix,
    pub task_settings: TaskPermissionMatrix,
    dirty: bool,
}

impl AccessMatrixDraft {
    /// Every role gets a row; roles without one start all-hidden in the
    /// page matrix and at their level default in the task matrix.
    pub fn new(roles: &[Role], pages: &PageMatrix, task_settings: &TaskPermissionMatrix) -> Self {
        let mut draft_pages = pages.clone();
        let mut draft_tasks = task_settings.clone();
        for role in roles {
            draft_pages.entry(role.id).or_insert_with(PageVisibility::default);
            draft_tasks
                .entry(role.id)
                .or_insert_with(|| TaskSettingsPermissions::for_access_level(role.access_level));
        }
        Self {
            pages: draft_pages,
            task_settings: draft_tasks,
            dirty: false,
        }
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn page(&self, role_id: EntityId, page: PageKey) -> bool {
        self.pages.get(&role_id).map(|row| row.get(page)).unwrap_or(false)
    }

    pub fn set_page(&mut self, role_id: EntityId, page: PageKey, visible: bool) {
        self.pages.entry(role_id).or_default().set(page, visible);
        self.dirty = true;
    }

    pub fn permission(&self, role_id: EntityId, section: TaskSettingsSection) -> PermissionLevel {
        self.task_settings
            .get(&role_id)
            .map(|row| row.get(section))
            .unwrap_or_default()
    }

    pub fn set_permission(&mut self, role_id: EntityId, section: TaskSettingsSection, level: PermissionLevel) {
        self.task_settings.entry(role_id).or_default().set(section, level);
        self.dirty = true;
    }

    /// Persist both matrices.
    pub fn commit(&mut self, store: &dyn KeyValueStore) -> StoreResult<&'static str> {
        write_json(store, StorageKey::AccessPages, &self.pages)?;
        write_json(store, StorageKey::AccessTaskSettings, &self.task_settings)?;
        self.dirty = false;
        log::info!("access: matrices saved ({} roles)", self.pages.len());
        Ok(SAVED_MESSAGE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::AggregateRoot;
    use crate::shared::MemoryStore;
    use crate::system::access::pages::seed_page_matrix;
    use crate::system::access::resolver::AccessResolver;
    use crate::system::access::task_permissions::seed_task_permission_matrix;
    use crate::system::auth::SessionRole;

    #[test]
    fn test_toggle_is_deferred_until_commit() {
        let store = MemoryStore::new();
        let resolver = AccessResolver::load(&store).unwrap();
        let mut draft = AccessMatrixDraft::new(
            resolver.roles(),
            resolver.page_matrix(),
            resolver.task_permission_matrix(),
        );

        draft.set_page(EntityId(3), PageKey::Reports, true);
        assert!(draft.is_dirty());
        let reloaded = AccessResolver::load(&store).unwrap();
        assert!(!reloaded.is_page_visible(SessionRole::Staff, PageKey::Reports));

        assert_eq!(draft.commit(&store).unwrap(), SAVED_MESSAGE);
        let reloaded = AccessResolver::load(&store).unwrap();
        assert!(reloaded.is_page_visible(SessionRole::Staff, PageKey::Reports));
        assert!(!draft.is_dirty());
    }

    #[test]
    fn test_new_role_gets_rows() {
        let mut roles = Role::seed();
        roles[2].id = EntityId(42);
        let draft = AccessMatrixDraft::new(&roles, &seed_page_matrix(), &seed_task_permission_matrix());
        assert!(!draft.page(EntityId(42), PageKey::Dashboard));
        assert_eq!(
            draft.permission(EntityId(42), TaskSettingsSection::Documents),
            PermissionLevel::Hidden
        );
    }

    #[test]
    fn test_permission_change_persists() {
        let store = MemoryStore::new();
        let mut draft = AccessMatrixDraft::new(&Role::seed(), &seed_page_matrix(), &seed_task_permission_matrix());
        draft.set_permission(EntityId(2), TaskSettingsSection::Zones, PermissionLevel::Hidden);
        draft.commit(&store).unwrap();
        let resolver = AccessResolver::load(&store).unwrap();
        assert_eq!(
            resolver.permission(SessionRole::Manager, TaskSettingsSection::Zones),
            PermissionLevel::Hidden
        );
    }
}
