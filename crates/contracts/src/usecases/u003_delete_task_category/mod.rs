use crate::domain::a006_task_category::aggregate::{ensure_deletable, TaskCategory};
use crate::domain::common::Repository;
use crate::shared::{EntityId, KeyValueStore};
use crate::usecases::common::{UseCaseMetadata, UseCaseResult};

pub struct DeleteTaskCategory;

impl UseCaseMetadata for DeleteTaskCategory {
    fn usecase_index() -> &'static str {
        "u003"
    }

    fn usecase_name() -> &'static str {
        "delete_task_category"
    }

    fn display_name() -> &'static str {
        "Delete task category"
    }

    fn description() -> &'static str {
        "Remove a category unless other categories name it as parent"
    }
}

impl DeleteTaskCategory {
    pub fn execute(store: &dyn KeyValueStore, id: EntityId) -> UseCaseResult<Vec<TaskCategory>> {
        let repo = Repository::<TaskCategory>::new(store);
        let categories = repo.list()?;
        ensure_deletable(&categories, id)?;
        Ok(repo.delete(id)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::MemoryStore;

    #[test]
    fn test_parent_with_children_is_kept() {
        let store = MemoryStore::new();
        let err = DeleteTaskCategory::execute(&store, EntityId(1)).unwrap_err();
        assert_eq!(
            err.message,
            "Cannot delete category that has child categories. Please delete child categories first."
        );
        assert_eq!(Repository::<TaskCategory>::new(&store).list().unwrap().len(), 5);
    }

    #[test]
    fn test_leaf_is_deleted() {
        let store = MemoryStore::new();
        let left = DeleteTaskCategory::execute(&store, EntityId(4)).unwrap();
        assert_eq!(left.len(), 4);
        assert!(left.iter().all(|c| c.id != EntityId(4)));
    }
}
