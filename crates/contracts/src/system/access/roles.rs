use crate::domain::common::AggregateRoot;
use crate::shared::{EntityId, RecordStatus, StorageKey, ValidationError};
use serde::{Deserialize, Serialize};

/// Permission tier a role record maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccessLevel {
    SystemAdmin,
    Manager,
    Frontline,
}

impl AccessLevel {
    pub fn code(&self) -> &'static str {
        match self {
            AccessLevel::SystemAdmin => "system_admin",
            AccessLevel::Manager => "manager",
            AccessLevel::Frontline => "frontline",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            AccessLevel::SystemAdmin => "System Admin",
            AccessLevel::Manager => "Manager",
            AccessLevel::Frontline => "Frontline",
        }
    }

    pub fn all() -> Vec<AccessLevel> {
        vec![AccessLevel::SystemAdmin, AccessLevel::Manager, AccessLevel::Frontline]
    }

    pub fn from_code(code: &str) -> Option<AccessLevel> {
        Self::all().into_iter().find(|l| l.code() == code)
    }
}

/// Named role row from `userRolesV2`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Role {
    pub id: EntityId,
    pub name: String,
    #[serde(alias = "jobNature")]
    pub access_level: AccessLevel,
    #[serde(default)]
    pub status: RecordStatus,
    #[serde(default)]
    pub created_date: String,
}

/// Form state of the role editor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoleDto {
    pub id: Option<EntityId>,
    pub name: String,
    pub access_level: AccessLevel,
    pub status: RecordStatus,
}

impl Default for RoleDto {
    fn default() -> Self {
        Self {
            id: None,
            name: String::new(),
            access_level: AccessLevel::Frontline,
            status: RecordStatus::Active,
        }
    }
}

impl From<&Role> for RoleDto {
    fn from(role: &Role) -> Self {
        Self {
            id: Some(role.id),
            name: role.name.clone(),
            access_level: role.access_level,
            status: role.status,
        }
    }
}

impl Role {
    /// Name lower-cased with whitespace runs collapsed to `_`
    /// ("System Admin" -> "system_admin").
    pub fn name_key(&self) -> String {
        self.name
            .split_whitespace()
            .collect::<Vec<_>>()
            .join("_")
            .to_lowercase()
    }

    pub fn from_dto(id: EntityId, dto: &RoleDto, created_date: String) -> Result<Self, ValidationError> {
        let mut role = Self {
            id,
            name: String::new(),
            access_level: dto.access_level,
            status: dto.status,
            created_date,
        };
        role.update(dto);
        role.validate()?;
        Ok(role)
    }

    pub fn update(&mut self, dto: &RoleDto) {
        self.name = dto.name.trim().to_string();
        self.access_level = dto.access_level;
        self.status = dto.status;
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::RequiredFields);
        }
        Ok(())
    }
}

impl AggregateRoot for Role {
    type Id = EntityId;

    fn id(&self) -> Self::Id {
        self.id
    }

    fn description(&self) -> &str {
        &self.name
    }

    fn aggregate_index() -> &'static str {
        "s001"
    }

    fn collection_name() -> &'static str {
        "user_role"
    }

    fn element_name() -> &'static str {
        "User Role"
    }

    fn list_name() -> &'static str {
        "User Roles"
    }

    fn storage_key() -> StorageKey {
        StorageKey::UserRoles
    }

    fn seed() -> Vec<Self> {
        let row = |id: u64, name: &str, level: AccessLevel| Role {
            id: EntityId(id),
            name: name.to_string(),
            access_level: level,
            status: RecordStatus::Active,
            created_date: "2024-01-01".to_string(),
        };
        vec![
            row(1, "System Admin", AccessLevel::SystemAdmin),
            row(2, "Manager", AccessLevel::Manager),
            row(3, "Frontline", AccessLevel::Frontline),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_key_normalises_whitespace() {
        let mut role = Role::seed().remove(0);
        role.name = "  Night   Shift Lead ".to_string();
        assert_eq!(role.name_key(), "night_shift_lead");
    }

    #[test]
    fn test_role_requires_name() {
        let dto = RoleDto {
            name: "   ".into(),
            ..Default::default()
        };
        assert_eq!(
            Role::from_dto(EntityId(9), &dto, String::new()).unwrap_err(),
            ValidationError::RequiredFields
        );
    }

    #[test]
    fn test_legacy_job_nature_field_is_read() {
        let role: Role = serde_json::from_str(
            r#"{"id":4,"name":"Supervisor","jobNature":"manager","status":"active","createdDate":"2024-02-01"}"#,
        )
        .unwrap();
        assert_eq!(role.access_level, AccessLevel::Manager);
    }
}
