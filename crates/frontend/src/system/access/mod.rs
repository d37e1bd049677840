mod access_control;
mod user_roles;

pub use access_control::AccessControl;
pub use user_roles::UserRoles;
