use super::roles::AccessLevel;
use crate::shared::EntityId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PermissionLevel {
    Manage,
    #[default]
    View,
    Hidden,
}

impl PermissionLevel {
    pub fn code(&self) -> &'static str {
        match self {
            PermissionLevel::Manage => "manage",
            PermissionLevel::View => "view",
            PermissionLevel::Hidden => "hidden",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            PermissionLevel::Manage => "Manage",
            PermissionLevel::View => "View",
            PermissionLevel::Hidden => "Hidden",
        }
    }

    pub fn all() -> Vec<PermissionLevel> {
        vec![PermissionLevel::Manage, PermissionLevel::View, PermissionLevel::Hidden]
    }

    pub fn from_code(code: &str) -> Option<PermissionLevel> {
        Self::all().into_iter().find(|l| l.code() == code)
    }

    pub fn can_view(&self) -> bool {
        !matches!(self, PermissionLevel::Hidden)
    }

    pub fn can_manage(&self) -> bool {
        matches!(self, PermissionLevel::Manage)
    }
}

/// Sections of the task settings screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaskSettingsSection {
    Templates,
    Categories,
    CustomPoi,
    Checkpoints,
    Zones,
    Documents,
}

impl TaskSettingsSection {
    pub const ALL: [TaskSettingsSection; 6] = [
        TaskSettingsSection::Templates,
        TaskSettingsSection::Categories,
        TaskSettingsSection::CustomPoi,
        TaskSettingsSection::Checkpoints,
        TaskSettingsSection::Zones,
        TaskSettingsSection::Documents,
    ];

    /// Section id used in the settings query string
    pub fn code(&self) -> &'static str {
        match self {
            TaskSettingsSection::Templates => "templates",
            TaskSettingsSection::Categories => "categories",
            TaskSettingsSection::CustomPoi => "custom-poi",
            TaskSettingsSection::Checkpoints => "checkpoints",
            TaskSettingsSection::Zones => "location-zone",
            TaskSettingsSection::Documents => "documents",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            TaskSettingsSection::Templates => "Task Templates",
            TaskSettingsSection::Categories => "Task Categories",
            TaskSettingsSection::CustomPoi => "Custom POI",
            TaskSettingsSection::Checkpoints => "Checkpoints",
            TaskSettingsSection::Zones => "Location Zones",
            TaskSettingsSection::Documents => "Documents",
        }
    }

    pub fn from_code(code: &str) -> Option<TaskSettingsSection> {
        Self::ALL.into_iter().find(|s| s.code() == code)
    }
}

/// One row of the task-permission matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TaskSettingsPermissions {
    pub templates: PermissionLevel,
    pub categories: PermissionLevel,
    pub custom_poi: PermissionLevel,
    pub checkpoints: PermissionLevel,
    pub zones: PermissionLevel,
    pub documents: PermissionLevel,
}

impl Default for TaskSettingsPermissions {
    fn default() -> Self {
        Self::uniform(PermissionLevel::View)
    }
}

impl TaskSettingsPermissions {
    pub fn uniform(level: PermissionLevel) -> Self {
        Self {
            templates: level,
            categories: level,
            custom_poi: level,
            checkpoints: level,
            zones: level,
            documents: level,
        }
    }

    /// Row used when a role has no stored entry.
    pub fn for_access_level(level: AccessLevel) -> Self {
        match level {
            AccessLevel::SystemAdmin | AccessLevel::Manager => Self::uniform(PermissionLevel::Manage),
            AccessLevel::Frontline => Self {
                documents: PermissionLevel::Hidden,
                ..Self::uniform(PermissionLevel::View)
            },
        }
    }

    pub fn get(&self, section: TaskSettingsSection) -> PermissionLevel {
        match section {
            TaskSettingsSection::Templates => self.templates,
            TaskSettingsSection::Categories => self.categories,
            TaskSettingsSection::CustomPoi => self.custom_poi,
            TaskSettingsSection::Checkpoints => self.checkpoints,
            TaskSettingsSection::Zones => self.zones,
            TaskSettingsSection::Documents => self.documents,
        }
    }

    pub fn set(&mut self, section: TaskSettingsSection, level: PermissionLevel) {
        let slot = match section {
            TaskSettingsSection::Templates => &mut self.templates,
            TaskSettingsSection::Categories => &mut self.categories,
            TaskSettingsSection::CustomPoi => &mut self.custom_poi,
            TaskSettingsSection::Checkpoints => &mut self.checkpoints,
            TaskSettingsSection::Zones => &mut self.zones,
            TaskSettingsSection::Documents => &mut self.documents,
        };
        *slot = level;
    }
}

/// Role id -> section permissions, stored under `accessTaskSettingsV2`.
pub type TaskPermissionMatrix = BTreeMap<EntityId, TaskSettingsPermissions>;

pub fn seed_task_permission_matrix() -> TaskPermissionMatrix {
    let mut matrix = TaskPermissionMatrix::new();
    matrix.insert(EntityId(1), TaskSettingsPermissions::for_access_level(AccessLevel::SystemAdmin));
    matrix.insert(EntityId(2), TaskSettingsPermissions::for_access_level(AccessLevel::Manager));
    matrix.insert(EntityId(3), TaskSettingsPermissions::for_access_level(AccessLevel::Frontline));
    matrix
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_uses_camel_case_keys() {
        let row: TaskSettingsPermissions = serde_json::from_str(
            r#"{"templates":"manage","categories":"view","customPoi":"hidden","checkpoints":"view","zones":"manage","documents":"hidden"}"#,
        )
        .unwrap();
        assert_eq!(row.get(TaskSettingsSection::CustomPoi), PermissionLevel::Hidden);
        assert!(row.get(TaskSettingsSection::Zones).can_manage());
        assert!(!row.get(TaskSettingsSection::Documents).can_view());
    }

    #[test]
    fn test_frontline_default_hides_documents() {
        let row = TaskSettingsPermissions::for_access_level(AccessLevel::Frontline);
        assert_eq!(row.templates, PermissionLevel::View);
        assert_eq!(row.documents, PermissionLevel::Hidden);
    }
}
