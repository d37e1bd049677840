use crate::domain::common::AggregateRoot;
use crate::shared::ids::optional_id;
use crate::shared::{EntityId, RecordStatus, StorageKey, ValidationError};
use serde::{Deserialize, Serialize};

/// Task category. A category with `parent_id` is a child of another one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskCategory {
    pub id: EntityId,
    pub name: String,
    #[serde(default)]
    pub contract: String,
    #[serde(default, with = "optional_id")]
    pub parent_id: Option<EntityId>,
    #[serde(default)]
    pub status: RecordStatus,
    #[serde(default)]
    pub created_date: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TaskCategoryDto {
    pub id: Option<EntityId>,
    pub name: String,
    pub contract: String,
    pub parent_id: Option<EntityId>,
}

impl From<&TaskCategory> for TaskCategoryDto {
    fn from(c: &TaskCategory) -> Self {
        Self {
            id: Some(c.id),
            name: c.name.clone(),
            contract: c.contract.clone(),
            parent_id: c.parent_id,
        }
    }
}

impl TaskCategory {
    /// Validate against the existing list; new names must be unique
    /// (case-insensitive).
    pub fn from_dto(
        id: EntityId,
        dto: &TaskCategoryDto,
        existing: &[TaskCategory],
        created_date: String,
    ) -> Result<Self, ValidationError> {
        let name = dto.name.trim();
        if name.is_empty() {
            return Err(ValidationError::RequiredFields);
        }
        let is_new = dto.id.is_none();
        if is_new && existing.iter().any(|c| c.name.to_lowercase() == name.to_lowercase()) {
            return Err(ValidationError::DuplicateCategory);
        }
        Ok(Self {
            id,
            name: name.to_string(),
            contract: dto.contract.clone(),
            parent_id: dto.parent_id.filter(|p| *p != id),
            status: RecordStatus::Active,
            created_date,
        })
    }

    pub fn parent_name<'a>(&self, all: &'a [TaskCategory]) -> Option<&'a str> {
        let parent = self.parent_id?;
        all.iter().find(|c| c.id == parent).map(|c| c.name.as_str())
    }
}

/// Refuse to delete a category that still has children.
pub fn ensure_deletable(categories: &[TaskCategory], id: EntityId) -> Result<(), ValidationError> {
    if categories.iter().any(|c| c.parent_id == Some(id)) {
        return Err(ValidationError::CategoryHasChildren);
    }
    Ok(())
}

impl AggregateRoot for TaskCategory {
    type Id = EntityId;

    fn id(&self) -> Self::Id {
        self.id
    }

    fn description(&self) -> &str {
        &self.name
    }

    fn aggregate_index() -> &'static str {
        "a006"
    }

    fn collection_name() -> &'static str {
        "task_category"
    }

    fn element_name() -> &'static str {
        "Task Category"
    }

    fn list_name() -> &'static str {
        "Task Categories"
    }

    fn storage_key() -> StorageKey {
        StorageKey::TaskCategories
    }

    fn seed() -> Vec<Self> {
        let row = |id: u64, name: &str, contract: &str, parent: Option<u64>| TaskCategory {
            id: EntityId(id),
            name: name.to_string(),
            contract: contract.to_string(),
            parent_id: parent.map(EntityId),
            status: RecordStatus::Active,
            created_date: "2024-01-01".to_string(),
        };
        vec![
            row(1, "Maintenance", "CON001", None),
            row(2, "Security", "CON001", None),
            row(3, "Cleaning", "CON002", None),
            row(4, "Equipment Repair", "CON001", Some(1)),
            row(5, "Patrol", "CON001", Some(2)),
        ]
    }
}

/// Subcategory picked after the category in the task form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskSubcategory {
    pub id: EntityId,
    pub category_id: EntityId,
    pub name: String,
}

impl AggregateRoot for TaskSubcategory {
    type Id = EntityId;

    fn id(&self) -> Self::Id {
        self.id
    }

    fn description(&self) -> &str {
        &self.name
    }

    fn aggregate_index() -> &'static str {
        "a006"
    }

    fn collection_name() -> &'static str {
        "task_subcategory"
    }

    fn element_name() -> &'static str {
        "Task Subcategory"
    }

    fn list_name() -> &'static str {
        "Task Subcategories"
    }

    fn storage_key() -> StorageKey {
        StorageKey::TaskSubcategories
    }

    fn seed() -> Vec<Self> {
        let row = |id: u64, category: u64, name: &str| TaskSubcategory {
            id: EntityId(id),
            category_id: EntityId(category),
            name: name.to_string(),
        };
        vec![
            row(1, 1, "Equipment Repair"),
            row(2, 1, "Cleaning"),
            row(3, 2, "Patrol"),
            row(4, 2, "Access Control"),
            row(5, 3, "General Cleaning"),
            row(6, 3, "Deep Cleaning"),
        ]
    }
}

pub fn subcategories_of(all: &[TaskSubcategory], category_id: EntityId) -> Vec<TaskSubcategory> {
    all.iter().filter(|s| s.category_id == category_id).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_name_rejected_on_create_only() {
        let existing = TaskCategory::seed();
        let dto = TaskCategoryDto {
            name: "security".into(),
            contract: "CON001".into(),
            ..Default::default()
        };
        assert_eq!(
            TaskCategory::from_dto(EntityId(10), &dto, &existing, String::new()).unwrap_err(),
            ValidationError::DuplicateCategory
        );
        let edit = TaskCategoryDto {
            id: Some(EntityId(2)),
            ..dto
        };
        assert!(TaskCategory::from_dto(EntityId(2), &edit, &existing, String::new()).is_ok());
    }

    #[test]
    fn test_parent_with_children_cannot_be_deleted() {
        let categories = TaskCategory::seed();
        assert_eq!(
            ensure_deletable(&categories, EntityId(1)),
            Err(ValidationError::CategoryHasChildren)
        );
        assert!(ensure_deletable(&categories, EntityId(3)).is_ok());
        assert_eq!(categories[3].parent_name(&categories), Some("Maintenance"));
    }

    #[test]
    fn test_empty_parent_string_reads_as_none() {
        let c: TaskCategory =
            serde_json::from_str(r#"{"id":9,"name":"Misc","contract":"CON001","parentId":"","status":"active"}"#).unwrap();
        assert_eq!(c.parent_id, None);
    }

    #[test]
    fn test_subcategories_by_category() {
        let subs = subcategories_of(&TaskSubcategory::seed(), EntityId(2));
        let names: Vec<&str> = subs.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Patrol", "Access Control"]);
    }
}
