use crate::domain::common::AggregateRoot;
use crate::shared::{EntityId, RecordStatus, StorageKey, ValidationError};
use serde::{Deserialize, Serialize};

/// Point of interest inside a building.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub id: EntityId,
    pub name: String,
    #[serde(default)]
    pub contract: String,
    #[serde(default)]
    pub building: String,
    #[serde(default = "default_level")]
    pub level: i32,
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
    #[serde(default)]
    pub status: RecordStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_date: Option<String>,
}

fn default_level() -> i32 {
    1
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationDto {
    pub id: Option<EntityId>,
    pub name: String,
    pub contract: String,
    pub building: String,
    /// Raw input; unparsable values fall back to level 1
    pub level: String,
    pub x: String,
    pub y: String,
}

impl Default for LocationDto {
    fn default() -> Self {
        Self {
            id: None,
            name: String::new(),
            contract: String::new(),
            building: String::new(),
            level: "1".to_string(),
            x: "0".to_string(),
            y: "0".to_string(),
        }
    }
}

impl From<&Location> for LocationDto {
    fn from(l: &Location) -> Self {
        Self {
            id: Some(l.id),
            name: l.name.clone(),
            contract: l.contract.clone(),
            building: l.building.clone(),
            level: l.level.to_string(),
            x: l.x.to_string(),
            y: l.y.to_string(),
        }
    }
}

impl Location {
    pub fn from_dto(id: EntityId, dto: &LocationDto, created_date: Option<String>) -> Result<Self, ValidationError> {
        if dto.name.trim().is_empty() || dto.contract.trim().is_empty() {
            return Err(ValidationError::RequiredFields);
        }
        Ok(Self {
            id,
            name: dto.name.trim().to_string(),
            contract: dto.contract.clone(),
            building: dto.building.trim().to_string(),
            level: dto.level.trim().parse().ok().filter(|l| *l != 0).unwrap_or(1),
            x: dto.x.trim().parse().unwrap_or(0.0),
            y: dto.y.trim().parse().unwrap_or(0.0),
            status: RecordStatus::Active,
            created_date,
        })
    }
}

impl AggregateRoot for Location {
    type Id = EntityId;

    fn id(&self) -> Self::Id {
        self.id
    }

    fn description(&self) -> &str {
        &self.name
    }

    fn aggregate_index() -> &'static str {
        "a003"
    }

    fn collection_name() -> &'static str {
        "location"
    }

    fn element_name() -> &'static str {
        "Location"
    }

    fn list_name() -> &'static str {
        "Locations"
    }

    fn storage_key() -> StorageKey {
        StorageKey::Locations
    }

    fn seed() -> Vec<Self> {
        let row = |id: u64, name: &str, building: &str, level: i32, x: f64, y: f64| Location {
            id: EntityId(id),
            name: name.to_string(),
            contract: "CON001".to_string(),
            building: building.to_string(),
            level,
            x,
            y,
            status: RecordStatus::Active,
            created_date: Some("2024-01-01".to_string()),
        };
        vec![
            row(1, "Building A - Floor 1", "A", 1, 100.0, 200.0),
            row(2, "Building A - Floor 2", "A", 2, 100.0, 300.0),
            row(3, "Building B - Floor 1", "B", 1, 200.0, 200.0),
        ]
    }
}

pub fn name_of(locations: &[Location], id: EntityId) -> Option<&str> {
    locations.iter().find(|l| l.id == id).map(|l| l.name.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_fields_fall_back() {
        let dto = LocationDto {
            name: "Lobby".into(),
            contract: "CON001".into(),
            level: "abc".into(),
            x: "12.5".into(),
            y: "".into(),
            ..Default::default()
        };
        let loc = Location::from_dto(EntityId(10), &dto, None).unwrap();
        assert_eq!(loc.level, 1);
        assert_eq!(loc.x, 12.5);
        assert_eq!(loc.y, 0.0);
    }

    #[test]
    fn test_contract_is_required() {
        let dto = LocationDto {
            name: "Lobby".into(),
            ..Default::default()
        };
        assert_eq!(
            Location::from_dto(EntityId(10), &dto, None).unwrap_err(),
            ValidationError::RequiredFields
        );
    }
}
