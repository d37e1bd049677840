use crate::domain::common::AggregateRoot;
use crate::shared::datetime::parse_date;
use crate::shared::{EntityId, RecordStatus, StorageKey, ValidationError};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contract {
    pub id: EntityId,
    pub number: String,
    /// `YYYY-MM-DD`
    pub start_time: String,
    pub end_time: String,
    #[serde(default)]
    pub service_type: String,
    #[serde(default)]
    pub is_licensee: bool,
    #[serde(default)]
    pub status: RecordStatus,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ContractDto {
    pub id: Option<EntityId>,
    pub number: String,
    pub start_time: String,
    pub end_time: String,
    pub service_type: String,
}

impl From<&Contract> for ContractDto {
    fn from(c: &Contract) -> Self {
        Self {
            id: Some(c.id),
            number: c.number.clone(),
            start_time: c.start_time.clone(),
            end_time: c.end_time.clone(),
            service_type: c.service_type.clone(),
        }
    }
}

impl ContractDto {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.number.trim().is_empty() || self.start_time.trim().is_empty() || self.end_time.trim().is_empty() {
            return Err(ValidationError::RequiredFields);
        }
        let start = parse_date(&self.start_time).ok_or_else(|| ValidationError::InvalidDate(self.start_time.clone()))?;
        let end = parse_date(&self.end_time).ok_or_else(|| ValidationError::InvalidDate(self.end_time.clone()))?;
        if end <= start {
            return Err(ValidationError::EndBeforeStart);
        }
        Ok(())
    }
}

impl Contract {
    /// Contracts created from the portal are always licensee contracts.
    pub fn new_licensee(id: EntityId, dto: &ContractDto) -> Result<Self, ValidationError> {
        dto.validate()?;
        Ok(Self {
            id,
            number: dto.number.trim().to_string(),
            start_time: dto.start_time.clone(),
            end_time: dto.end_time.clone(),
            service_type: dto.service_type.clone(),
            is_licensee: true,
            status: RecordStatus::Active,
        })
    }

    /// Editing never touches `is_licensee`.
    pub fn update(&mut self, dto: &ContractDto) -> Result<(), ValidationError> {
        dto.validate()?;
        self.number = dto.number.trim().to_string();
        self.start_time = dto.start_time.clone();
        self.end_time = dto.end_time.clone();
        self.service_type = dto.service_type.clone();
        Ok(())
    }
}

impl AggregateRoot for Contract {
    type Id = EntityId;

    fn id(&self) -> Self::Id {
        self.id
    }

    fn description(&self) -> &str {
        &self.number
    }

    fn aggregate_index() -> &'static str {
        "a004"
    }

    fn collection_name() -> &'static str {
        "contract"
    }

    fn element_name() -> &'static str {
        "Contract"
    }

    fn list_name() -> &'static str {
        "Contracts"
    }

    fn storage_key() -> StorageKey {
        StorageKey::Contracts
    }

    fn seed() -> Vec<Self> {
        let rows: [(&str, &str, &str, &str, bool); 8] = [
            ("CON001", "2024-01-01", "2024-12-31", "maintenance", true),
            ("CON002", "2024-02-01", "2024-11-30", "cleaning", false),
            ("CON003", "2024-03-01", "2025-02-28", "security", true),
            ("CON004", "2024-04-01", "2025-03-31", "maintenance", false),
            ("CON005", "2024-05-01", "2025-04-30", "cleaning", true),
            ("CON006", "2024-06-01", "2025-05-31", "security", false),
            ("CON007", "2024-07-01", "2025-06-30", "inspection", true),
            ("CON008", "2024-08-01", "2025-07-31", "maintenance", false),
        ];
        rows.iter()
            .enumerate()
            .map(|(idx, (number, start, end, service, licensee))| Contract {
                id: EntityId(idx as u64 + 1),
                number: number.to_string(),
                start_time: start.to_string(),
                end_time: end.to_string(),
                service_type: service.to_string(),
                is_licensee: *licensee,
                status: RecordStatus::Active,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dto(start: &str, end: &str) -> ContractDto {
        ContractDto {
            id: None,
            number: "CON009".into(),
            start_time: start.into(),
            end_time: end.into(),
            service_type: "cleaning".into(),
        }
    }

    #[test]
    fn test_end_must_follow_start() {
        assert_eq!(dto("2025-01-10", "2025-01-10").validate(), Err(ValidationError::EndBeforeStart));
        assert_eq!(dto("2025-01-10", "2025-01-01").validate(), Err(ValidationError::EndBeforeStart));
        assert_eq!(dto("2025-01-10", "").validate(), Err(ValidationError::RequiredFields));
        assert!(dto("2025-01-10", "2025-06-30").validate().is_ok());
    }

    #[test]
    fn test_licensee_flag_is_fixed() {
        let mut contract = Contract::new_licensee(EntityId(9), &dto("2025-01-01", "2025-12-31")).unwrap();
        assert!(contract.is_licensee);

        let mut seeded = Contract::seed().remove(1);
        assert!(!seeded.is_licensee);
        seeded.update(&dto("2025-01-01", "2025-12-31")).unwrap();
        assert!(!seeded.is_licensee);
        assert_eq!(seeded.number, "CON009");

        contract.update(&dto("2025-01-01", "2026-01-01")).unwrap();
        assert!(contract.is_licensee);
    }

    #[test]
    fn test_seed_numbers() {
        let numbers: Vec<String> = Contract::seed().into_iter().map(|c| c.number).collect();
        assert_eq!(numbers.first().map(String::as_str), Some("CON001"));
        assert_eq!(numbers.last().map(String::as_str), Some("CON008"));
        assert_eq!(numbers.len(), 8);
    }
}
