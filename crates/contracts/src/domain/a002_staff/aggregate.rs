use crate::domain::common::AggregateRoot;
use crate::shared::{EntityId, RecordStatus, StorageKey, ValidationError};
use crate::system::auth::SessionRole;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Staff {
    pub id: EntityId,
    pub name: String,
    #[serde(default)]
    pub contract: String,
    pub role: SessionRole,
    #[serde(default)]
    pub status: RecordStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct StaffDto {
    pub id: Option<EntityId>,
    pub name: String,
    pub contract: String,
    pub role: Option<SessionRole>,
    pub status: RecordStatus,
    pub team: String,
}

impl From<&Staff> for StaffDto {
    fn from(s: &Staff) -> Self {
        Self {
            id: Some(s.id),
            name: s.name.clone(),
            contract: s.contract.clone(),
            role: Some(s.role),
            status: s.status,
            team: s.team.clone().unwrap_or_default(),
        }
    }
}

impl StaffDto {
    pub fn validate(&self) -> Result<SessionRole, ValidationError> {
        match self.role {
            Some(role) if !self.name.trim().is_empty() && !self.contract.trim().is_empty() => Ok(role),
            _ => Err(ValidationError::RequiredFields),
        }
    }
}

impl Staff {
    pub fn from_dto(id: EntityId, dto: &StaffDto) -> Result<Self, ValidationError> {
        let role = dto.validate()?;
        Ok(Self {
            id,
            name: dto.name.trim().to_string(),
            contract: dto.contract.trim().to_string(),
            role,
            status: dto.status,
            team: Some(dto.team.trim().to_string()).filter(|t| !t.is_empty()),
        })
    }

    pub fn update(&mut self, dto: &StaffDto) -> Result<(), ValidationError> {
        let updated = Self::from_dto(self.id, dto)?;
        *self = updated;
        Ok(())
    }

    pub fn is_active(&self) -> bool {
        self.status.is_active()
    }
}

impl AggregateRoot for Staff {
    type Id = EntityId;

    fn id(&self) -> Self::Id {
        self.id
    }

    fn description(&self) -> &str {
        &self.name
    }

    fn aggregate_index() -> &'static str {
        "a002"
    }

    fn collection_name() -> &'static str {
        "staff"
    }

    fn element_name() -> &'static str {
        "Staff Member"
    }

    fn list_name() -> &'static str {
        "Staff"
    }

    fn storage_key() -> StorageKey {
        StorageKey::Staff
    }

    fn seed() -> Vec<Self> {
        let row = |id: u64, name: &str, contract: &str, role: SessionRole, team: &str| Staff {
            id: EntityId(id),
            name: name.to_string(),
            contract: contract.to_string(),
            role,
            status: RecordStatus::Active,
            team: Some(team.to_string()),
        };
        vec![
            row(1, "John Smith", "CON001", SessionRole::Staff, "Team A"),
            row(2, "Jane Doe", "CON002", SessionRole::Staff, "Team B"),
            row(3, "Mike Johnson", "CON003", SessionRole::Staff, "Team A"),
            row(4, "Sarah Wilson", "CON004", SessionRole::Manager, "Team C"),
        ]
    }
}

/// Case-insensitive substring match on the name.
pub fn search_by_name<'a>(staff: &'a [Staff], query: &str) -> Vec<&'a Staff> {
    let query = query.trim().to_lowercase();
    staff
        .iter()
        .filter(|s| query.is_empty() || s.name.to_lowercase().contains(&query))
        .collect()
}

pub fn active_staff(staff: &[Staff]) -> Vec<Staff> {
    staff.iter().filter(|s| s.is_active()).cloned().collect()
}

pub fn name_of(staff: &[Staff], id: EntityId) -> Option<String> {
    staff.iter().find(|s| s.id == id).map(|s| s.name.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_requires_name_contract_role() {
        let mut dto = StaffDto {
            name: "Donna Ng".into(),
            contract: "CON003".into(),
            ..Default::default()
        };
        assert_eq!(Staff::from_dto(EntityId(5), &dto).unwrap_err(), ValidationError::RequiredFields);
        dto.role = Some(SessionRole::Staff);
        let staff = Staff::from_dto(EntityId(5), &dto).unwrap();
        assert_eq!(staff.team, None);
        dto.contract = "  ".into();
        assert!(Staff::from_dto(EntityId(5), &dto).is_err());
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let staff = Staff::seed();
        let hits = search_by_name(&staff, "  jo ");
        let names: Vec<&str> = hits.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["John Smith", "Mike Johnson"]);
        assert_eq!(search_by_name(&staff, "").len(), 4);
    }
}
