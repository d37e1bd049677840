use crate::domain::common::AggregateRoot;
use crate::shared::{EntityId, RecordStatus, StorageKey, ValidationError};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationZone {
    pub id: EntityId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub status: RecordStatus,
}

impl LocationZone {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::RequiredFields);
        }
        Ok(())
    }
}

impl AggregateRoot for LocationZone {
    type Id = EntityId;

    fn id(&self) -> Self::Id {
        self.id
    }

    fn description(&self) -> &str {
        &self.name
    }

    fn aggregate_index() -> &'static str {
        "a009"
    }

    fn collection_name() -> &'static str {
        "location_zone"
    }

    fn element_name() -> &'static str {
        "Location Zone"
    }

    fn list_name() -> &'static str {
        "Location Zones"
    }

    fn storage_key() -> StorageKey {
        StorageKey::LocationZones
    }

    fn seed() -> Vec<Self> {
        let row = |id: u64, name: &str, description: &str| LocationZone {
            id: EntityId(id),
            name: name.to_string(),
            description: description.to_string(),
            status: RecordStatus::Active,
        };
        vec![
            row(1, "Zone 1", "Building A Level 1"),
            row(2, "Zone 2", "Building B Loading Area"),
            row(3, "Zone 3", "Building A Level 2"),
        ]
    }
}
