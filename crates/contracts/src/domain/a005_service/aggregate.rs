use crate::domain::common::AggregateRoot;
use crate::shared::{EntityId, RecordStatus, StorageKey, ValidationError};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub id: EntityId,
    pub name: String,
    #[serde(default)]
    pub status: RecordStatus,
    #[serde(default)]
    pub created_date: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ServiceDto {
    pub id: Option<EntityId>,
    pub name: String,
    pub status: RecordStatus,
}

impl Service {
    pub fn from_dto(id: EntityId, dto: &ServiceDto, created_date: String) -> Result<Self, ValidationError> {
        if dto.name.trim().is_empty() {
            return Err(ValidationError::RequiredFields);
        }
        Ok(Self {
            id,
            name: dto.name.trim().to_string(),
            status: dto.status,
            created_date,
        })
    }
}

impl AggregateRoot for Service {
    type Id = EntityId;

    fn id(&self) -> Self::Id {
        self.id
    }

    fn description(&self) -> &str {
        &self.name
    }

    fn aggregate_index() -> &'static str {
        "a005"
    }

    fn collection_name() -> &'static str {
        "service"
    }

    fn element_name() -> &'static str {
        "Service"
    }

    fn list_name() -> &'static str {
        "Services"
    }

    fn storage_key() -> StorageKey {
        StorageKey::Services
    }

    fn seed() -> Vec<Self> {
        let row = |id: u64, name: &str, status: RecordStatus| Service {
            id: EntityId(id),
            name: name.to_string(),
            status,
            created_date: "2024-01-01".to_string(),
        };
        vec![
            row(1, "Maintenance", RecordStatus::Active),
            row(2, "Cleaning", RecordStatus::Active),
            row(3, "Security", RecordStatus::Active),
            row(4, "Inspection", RecordStatus::Inactive),
        ]
    }
}
