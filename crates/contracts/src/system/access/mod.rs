//! Role records, the page-visibility and task-permission matrices, and the
//! resolver that maps a session role onto them.

pub mod matrix_draft;
pub mod pages;
pub mod policy;
pub mod resolver;
pub mod roles;
pub mod task_permissions;

pub use pages::{PageKey, PageMatrix, PageVisibility};
pub use resolver::{AccessResolver, PageAccess};
pub use roles::{AccessLevel, Role, RoleDto};
pub use task_permissions::{PermissionLevel, TaskPermissionMatrix, TaskSettingsPermissions, TaskSettingsSection};
