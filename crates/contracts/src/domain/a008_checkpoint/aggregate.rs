use crate::domain::a003_location::aggregate::{name_of, Location};
use crate::domain::common::AggregateRoot;
use crate::shared::{EntityId, RecordStatus, StorageKey, ValidationError};
use serde::{Deserialize, Serialize};

/// Named set of POIs used for patrol routing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Checkpoint {
    pub id: EntityId,
    pub name: String,
    #[serde(default, alias = "locations")]
    pub location_ids: Vec<EntityId>,
    #[serde(default)]
    pub status: RecordStatus,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CheckpointDto {
    pub id: Option<EntityId>,
    pub name: String,
    pub location_ids: Vec<EntityId>,
    pub status: RecordStatus,
}

impl From<&Checkpoint> for CheckpointDto {
    fn from(c: &Checkpoint) -> Self {
        Self {
            id: Some(c.id),
            name: c.name.clone(),
            location_ids: c.location_ids.clone(),
            status: c.status,
        }
    }
}

impl Checkpoint {
    pub fn from_dto(id: EntityId, dto: &CheckpointDto, max_locations: usize) -> Result<Self, ValidationError> {
        if dto.name.trim().is_empty() {
            return Err(ValidationError::RequiredFields);
        }
        if dto.location_ids.len() > max_locations {
            return Err(ValidationError::TooManyLocations { max: max_locations });
        }
        Ok(Self {
            id,
            name: dto.name.trim().to_string(),
            location_ids: dto.location_ids.clone(),
            status: dto.status,
        })
    }

    /// Names of the referenced POIs; ids without a location are skipped.
    pub fn location_names(&self, locations: &[Location]) -> Vec<String> {
        self.location_ids
            .iter()
            .filter_map(|id| name_of(locations, *id).map(str::to_string))
            .collect()
    }

    /// "North Wing Routine: Building A - Floor 1, Building A - Floor 2"
    pub fn label(&self, locations: &[Location]) -> String {
        format!("{}: {}", self.name, self.location_names(locations).join(", "))
    }
}

impl AggregateRoot for Checkpoint {
    type Id = EntityId;

    fn id(&self) -> Self::Id {
        self.id
    }

    fn description(&self) -> &str {
        &self.name
    }

    fn aggregate_index() -> &'static str {
        "a008"
    }

    fn collection_name() -> &'static str {
        "checkpoint"
    }

    fn element_name() -> &'static str {
        "Checkpoint"
    }

    fn list_name() -> &'static str {
        "Checkpoints"
    }

    fn storage_key() -> StorageKey {
        StorageKey::Checkpoints
    }

    fn seed() -> Vec<Self> {
        vec![
            Checkpoint {
                id: EntityId(1),
                name: "North Wing Routine".to_string(),
                location_ids: vec![EntityId(1), EntityId(2)],
                status: RecordStatus::Active,
            },
            Checkpoint {
                id: EntityId(2),
                name: "South Wing Patrol".to_string(),
                location_ids: vec![EntityId(3)],
                status: RecordStatus::Active,
            },
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_poi_limit() {
        let dto = CheckpointDto {
            name: "Full sweep".into(),
            location_ids: (1..=11).map(EntityId).collect(),
            ..Default::default()
        };
        let err = Checkpoint::from_dto(EntityId(5), &dto, 10).unwrap_err();
        assert_eq!(err.to_string(), "Please select at most 10 POI locations");

        let dto = CheckpointDto {
            location_ids: (1..=10).map(EntityId).collect(),
            ..dto
        };
        assert!(Checkpoint::from_dto(EntityId(5), &dto, 10).is_ok());
    }

    #[test]
    fn test_label_skips_dangling_locations() {
        let mut cp = Checkpoint::seed().remove(0);
        cp.location_ids.push(EntityId(99));
        assert_eq!(
            cp.label(&Location::seed()),
            "North Wing Routine: Building A - Floor 1, Building A - Floor 2"
        );
    }

    #[test]
    fn test_legacy_locations_key() {
        let cp: Checkpoint = serde_json::from_str(r#"{"id":2,"name":"South Wing Patrol","locations":[3]}"#).unwrap();
        assert_eq!(cp.location_ids, vec![EntityId(3)]);
    }
}
