//! Fixed role capabilities that sit beside the editable matrices.

use crate::system::auth::SessionRole;

pub fn can_manage_access_control(role: SessionRole) -> bool {
    matches!(role, SessionRole::SystemAdmin)
}

pub fn can_manage_user_roles(role: SessionRole) -> bool {
    matches!(role, SessionRole::SystemAdmin)
}

pub fn can_view_contracts(role: SessionRole) -> bool {
    matches!(
        role,
        SessionRole::SystemAdmin | SessionRole::Manager | SessionRole::ManagerLicensee
    )
}

pub fn can_edit_contracts(role: SessionRole) -> bool {
    matches!(role, SessionRole::SystemAdmin | SessionRole::ManagerLicensee)
}

pub fn can_manage_staff(role: SessionRole) -> bool {
    matches!(role, SessionRole::SystemAdmin | SessionRole::ManagerLicensee)
}

pub fn can_add_services(role: SessionRole) -> bool {
    matches!(role, SessionRole::SystemAdmin | SessionRole::ManagerLicensee)
}

/// Reference data (locations, categories, templates) is maintained by
/// every signed-in role that reaches the settings page.
pub fn can_manage_reference_data(_role: SessionRole) -> bool {
    true
}

/// Groups of the settings menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsGroup {
    System,
    Contract,
    Task,
}

impl SettingsGroup {
    pub fn display_name(&self) -> &'static str {
        match self {
            SettingsGroup::System => "System Settings",
            SettingsGroup::Contract => "Contract Settings",
            SettingsGroup::Task => "Task Settings",
        }
    }
}

pub fn settings_groups(role: SessionRole) -> Vec<SettingsGroup> {
    let mut groups = Vec::new();
    if matches!(role, SessionRole::SystemAdmin) {
        groups.push(SettingsGroup::System);
    }
    if can_view_contracts(role) {
        groups.push(SettingsGroup::Contract);
    }
    groups.push(SettingsGroup::Task);
    groups
}

/// Staff roles the current user may assign in the staff editor.
pub fn assignable_staff_roles(role: SessionRole) -> Vec<SessionRole> {
    match role {
        SessionRole::SystemAdmin => vec![SessionRole::SystemAdmin, SessionRole::Manager, SessionRole::Staff],
        SessionRole::Manager | SessionRole::ManagerLicensee => vec![SessionRole::Manager, SessionRole::Staff],
        SessionRole::Staff => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_groups_per_role() {
        assert_eq!(
            settings_groups(SessionRole::SystemAdmin),
            vec![SettingsGroup::System, SettingsGroup::Contract, SettingsGroup::Task]
        );
        assert_eq!(
            settings_groups(SessionRole::ManagerLicensee),
            vec![SettingsGroup::Contract, SettingsGroup::Task]
        );
        assert_eq!(settings_groups(SessionRole::Staff), vec![SettingsGroup::Task]);
    }

    #[test]
    fn test_contract_editing_is_admin_or_licensee() {
        assert!(can_view_contracts(SessionRole::Manager));
        assert!(!can_edit_contracts(SessionRole::Manager));
        assert!(can_edit_contracts(SessionRole::ManagerLicensee));
        assert!(!can_view_contracts(SessionRole::Staff));
    }

    #[test]
    fn test_assignable_roles() {
        assert!(assignable_staff_roles(SessionRole::Staff).is_empty());
        assert_eq!(
            assignable_staff_roles(SessionRole::Manager),
            vec![SessionRole::Manager, SessionRole::Staff]
        );
        assert!(assignable_staff_roles(SessionRole::SystemAdmin).contains(&SessionRole::SystemAdmin));
    }
}
