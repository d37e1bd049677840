pub mod context;
pub mod guard;

pub use context::{do_login, do_logout, use_auth, AuthProvider, SessionContext};
pub use guard::RequireRole;
