//! Session context: who is "logged in" and with which role.
//!
//! The session is an unguarded role string in local storage; there is no
//! credential check.

use crate::shared::storage::{read_json, write_json};
use crate::shared::{KeyValueStore, StorageKey, StoreResult};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionRole {
    SystemAdmin,
    Manager,
    ManagerLicensee,
    Staff,
}

impl SessionRole {
    pub fn code(&self) -> &'static str {
        match self {
            SessionRole::SystemAdmin => "system_admin",
            SessionRole::Manager => "manager",
            SessionRole::ManagerLicensee => "manager_licensee",
            SessionRole::Staff => "staff",
        }
    }

    /// Title shown on the login card
    pub fn display_name(&self) -> &'static str {
        match self {
            SessionRole::SystemAdmin => "System Administrator",
            SessionRole::Manager => "Manager",
            SessionRole::ManagerLicensee => "Manager (Licensee)",
            SessionRole::Staff => "Staff Member",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            SessionRole::SystemAdmin => "Full access to system settings, roles and access control",
            SessionRole::Manager => "Manage tasks, staff and schedules for assigned contracts",
            SessionRole::ManagerLicensee => "Manage licensee contracts, staff and services",
            SessionRole::Staff => "View and complete assigned tasks",
        }
    }

    /// Header label: first underscore becomes a space, then upper-cased
    /// ("MANAGER LICENSEE", "SYSTEM ADMIN").
    pub fn header_label(&self) -> String {
        self.code().replacen('_', " ", 1).to_uppercase()
    }

    pub fn all() -> Vec<SessionRole> {
        vec![
            SessionRole::SystemAdmin,
            SessionRole::Manager,
            SessionRole::ManagerLicensee,
            SessionRole::Staff,
        ]
    }

    pub fn from_code(code: &str) -> Option<SessionRole> {
        Self::all().into_iter().find(|r| r.code() == code)
    }
}

/// Value stored under `currentUser`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentUser {
    pub role: SessionRole,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contract: Option<String>,
}

impl CurrentUser {
    pub fn new(role: SessionRole) -> Self {
        Self { role, contract: None }
    }
}

pub fn login(store: &dyn KeyValueStore, role: SessionRole) -> StoreResult<CurrentUser> {
    let user = CurrentUser::new(role);
    write_json(store, StorageKey::CurrentUser, &user)?;
    log::info!("session: logged in as {}", role.code());
    Ok(user)
}

/// Current session, if any. A corrupted session counts as logged out.
pub fn current_user(store: &dyn KeyValueStore) -> Option<CurrentUser> {
    match read_json::<CurrentUser>(store, StorageKey::CurrentUser) {
        Ok(user) => user,
        Err(err) => {
            log::warn!("session: {}", err);
            None
        }
    }
}

/// Logging out wipes the whole store, seeds included.
pub fn logout(store: &dyn KeyValueStore) -> StoreResult<()> {
    log::info!("session: logout");
    store.clear()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::MemoryStore;

    #[test]
    fn test_login_persists_role_string() {
        let store = MemoryStore::new();
        login(&store, SessionRole::ManagerLicensee).unwrap();
        assert_eq!(
            store.get_item("currentUser").unwrap().as_deref(),
            Some(r#"{"role":"manager_licensee"}"#)
        );
        assert_eq!(current_user(&store).map(|u| u.role), Some(SessionRole::ManagerLicensee));
    }

    #[test]
    fn test_logout_clears_everything() {
        let store = MemoryStore::new();
        login(&store, SessionRole::Staff).unwrap();
        store.set_item("tasks", "[]").unwrap();
        logout(&store).unwrap();
        assert!(store.is_empty());
        assert!(current_user(&store).is_none());
    }

    #[test]
    fn test_unknown_role_is_logged_out() {
        let store = MemoryStore::new();
        store.set_item("currentUser", r#"{"role":"guest"}"#).unwrap();
        assert!(current_user(&store).is_none());
    }

    #[test]
    fn test_header_label() {
        assert_eq!(SessionRole::ManagerLicensee.header_label(), "MANAGER LICENSEE");
        assert_eq!(SessionRole::SystemAdmin.header_label(), "SYSTEM ADMIN");
    }
}
