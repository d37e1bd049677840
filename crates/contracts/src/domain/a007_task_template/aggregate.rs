use crate::domain::common::AggregateRoot;
use crate::shared::ids::{lenient_u32, optional_id};
use crate::shared::storage::{read_json, write_json};
use crate::shared::{EntityId, KeyValueStore, StorageKey, StoreResult, ValidationError};
use serde::{Deserialize, Serialize};

/// Which picker produced a task's location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LocationMode {
    #[default]
    Poi,
    Checkpoint,
    Zone,
}

impl LocationMode {
    pub fn code(&self) -> &'static str {
        match self {
            LocationMode::Poi => "poi",
            LocationMode::Checkpoint => "checkpoint",
            LocationMode::Zone => "zone",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            LocationMode::Poi => "POI",
            LocationMode::Checkpoint => "Checkpoint",
            LocationMode::Zone => "Zone",
        }
    }

    pub fn all() -> Vec<LocationMode> {
        vec![LocationMode::Poi, LocationMode::Checkpoint, LocationMode::Zone]
    }
}

/// Saved task configuration used to pre-fill the task form.
///
/// The same shape is kept in two places: the managed list in
/// `taskTemplates` and quick templates saved from the task form in
/// `taskTemplatesInline`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskTemplate {
    pub id: EntityId,
    pub name: String,
    #[serde(default, with = "optional_id")]
    pub category_id: Option<EntityId>,
    #[serde(default, with = "optional_id")]
    pub subcategory_id: Option<EntityId>,
    #[serde(default)]
    pub category_label: String,
    #[serde(default)]
    pub subcategory_label: String,
    #[serde(default, with = "lenient_u32")]
    pub duration: u32,
    #[serde(default)]
    pub location_display: String,
    /// Id of the picked POI, checkpoint or zone, as a string
    #[serde(default)]
    pub location_value: String,
    #[serde(default)]
    pub mode: LocationMode,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_date: Option<String>,
}

impl TaskTemplate {
    /// Templates from the settings list need name, category and
    /// subcategory.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() || self.category_id.is_none() || self.subcategory_id.is_none() {
            return Err(ValidationError::RequiredFields);
        }
        Ok(())
    }

    pub fn location_id(&self) -> Option<EntityId> {
        self.location_value.trim().parse().ok()
    }

    /// "Maintenance / Cleaning"
    pub fn category_path(&self) -> String {
        format!("{} / {}", self.category_label, self.subcategory_label)
    }
}

impl AggregateRoot for TaskTemplate {
    type Id = EntityId;

    fn id(&self) -> Self::Id {
        self.id
    }

    fn description(&self) -> &str {
        &self.name
    }

    fn aggregate_index() -> &'static str {
        "a007"
    }

    fn collection_name() -> &'static str {
        "task_template"
    }

    fn element_name() -> &'static str {
        "Task Template"
    }

    fn list_name() -> &'static str {
        "Task Templates"
    }

    fn storage_key() -> StorageKey {
        StorageKey::TaskTemplates
    }

    fn seed() -> Vec<Self> {
        vec![
            TaskTemplate {
                id: EntityId(1),
                name: "Patrol".to_string(),
                category_id: Some(EntityId(2)),
                subcategory_id: Some(EntityId(3)),
                category_label: "Security".to_string(),
                subcategory_label: "Patrol".to_string(),
                duration: 60,
                location_display: "North Wing Routine: Building A - Floor 1, Building A - Floor 2".to_string(),
                location_value: "1".to_string(),
                mode: LocationMode::Checkpoint,
                created_date: Some("2024-01-01".to_string()),
            },
            TaskTemplate {
                id: EntityId(2),
                name: "Equipment Repair".to_string(),
                category_id: Some(EntityId(1)),
                subcategory_id: Some(EntityId(1)),
                category_label: "Maintenance".to_string(),
                subcategory_label: "Equipment Repair".to_string(),
                duration: 90,
                location_display: "Building A - Floor 2".to_string(),
                location_value: "2".to_string(),
                mode: LocationMode::Poi,
                created_date: Some("2024-01-01".to_string()),
            },
        ]
    }
}

/// Quick templates saved from the task form. Never seeded.
pub fn load_inline_templates(store: &dyn KeyValueStore) -> StoreResult<Vec<TaskTemplate>> {
    Ok(read_json(store, StorageKey::TaskTemplatesInline)?.unwrap_or_default())
}

pub fn append_inline_template(store: &dyn KeyValueStore, template: TaskTemplate) -> StoreResult<Vec<TaskTemplate>> {
    let mut templates = load_inline_templates(store)?;
    templates.push(template);
    write_json(store, StorageKey::TaskTemplatesInline, &templates)?;
    Ok(templates)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::MemoryStore;

    #[test]
    fn test_reads_string_ids_from_form() {
        let raw = r#"{"id":1754700000000,"name":"Patrol","categoryId":"2","subcategoryId":"3",
            "categoryLabel":"Security","subcategoryLabel":"Patrol","duration":"45",
            "locationDisplay":"Building B - Floor 1","locationValue":"3","mode":"poi"}"#;
        let t: TaskTemplate = serde_json::from_str(raw).unwrap();
        assert_eq!(t.category_id, Some(EntityId(2)));
        assert_eq!(t.duration, 45);
        assert_eq!(t.location_id(), Some(EntityId(3)));
        assert_eq!(t.category_path(), "Security / Patrol");
        assert!(t.validate().is_ok());
    }

    #[test]
    fn test_inline_templates_append() {
        let store = MemoryStore::new();
        assert!(load_inline_templates(&store).unwrap().is_empty());
        let template = TaskTemplate::seed().remove(0);
        append_inline_template(&store, template.clone()).unwrap();
        let all = append_inline_template(&store, template).unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(load_inline_templates(&store).unwrap().len(), 2);
    }
}
