use crate::domain::common::AggregateRoot;
use crate::shared::ids::optional_id;
use crate::shared::{EntityId, RecordStatus, StorageKey};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One shift of one staff member on one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftEntry {
    #[serde(rename = "dateISO")]
    pub date_iso: String,
    /// `HH:MM`
    pub start: String,
    pub end: String,
    #[serde(default, rename = "zoneId", with = "optional_id", skip_serializing_if = "Option::is_none")]
    pub zone_id: Option<EntityId>,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

impl ShiftEntry {
    pub fn new(date: NaiveDate, start: &str, end: &str) -> Self {
        Self {
            date_iso: date.format("%Y-%m-%d").to_string(),
            start: start.to_string(),
            end: end.to_string(),
            zone_id: None,
            kind: None,
        }
    }

    pub fn from_template(date: NaiveDate, template: &ShiftTemplate) -> Self {
        Self {
            zone_id: template.zone_id,
            kind: Some(template.kind.clone()).filter(|k| !k.is_empty()),
            ..Self::new(date, &template.start, &template.end)
        }
    }

    /// "09:00 - 17:00"
    pub fn label(&self) -> String {
        format!("{} - {}", self.start, self.end)
    }
}

/// staffId -> shifts, stored under `shifts`.
pub type ShiftMap = BTreeMap<EntityId, Vec<ShiftEntry>>;

/// Reusable shift definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShiftTemplate {
    pub id: EntityId,
    pub name: String,
    #[serde(default, rename = "type")]
    pub kind: String,
    pub start: String,
    pub end: String,
    #[serde(default, with = "optional_id")]
    pub zone_id: Option<EntityId>,
    #[serde(default)]
    pub status: RecordStatus,
}

impl AggregateRoot for ShiftTemplate {
    type Id = EntityId;

    fn id(&self) -> Self::Id {
        self.id
    }

    fn description(&self) -> &str {
        &self.name
    }

    fn aggregate_index() -> &'static str {
        "a011"
    }

    fn collection_name() -> &'static str {
        "shift_template"
    }

    fn element_name() -> &'static str {
        "Shift Template"
    }

    fn list_name() -> &'static str {
        "Shift Templates"
    }

    fn storage_key() -> StorageKey {
        StorageKey::ShiftTemplates
    }

    fn seed() -> Vec<Self> {
        let row = |id: u64, name: &str, kind: &str, start: &str, end: &str, zone: u64| ShiftTemplate {
            id: EntityId(id),
            name: name.to_string(),
            kind: kind.to_string(),
            start: start.to_string(),
            end: end.to_string(),
            zone_id: Some(EntityId(zone)),
            status: RecordStatus::Active,
        };
        vec![
            row(1, "Morning", "day", "07:00", "15:00", 1),
            row(2, "Office Hours", "day", "09:00", "17:00", 1),
            row(3, "Evening", "evening", "15:00", "23:00", 2),
            row(4, "Night", "night", "23:00", "07:00", 3),
        ]
    }
}
