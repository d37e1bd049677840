use crate::shared::storage::BrowserStore;
use contracts::system::access::AccessResolver;
use contracts::system::auth::{self, CurrentUser, SessionRole};
use leptos::prelude::*;

/// Logged-in user plus the access matrices that gate navigation.
#[derive(Clone, Copy)]
pub struct SessionContext {
    pub user: RwSignal<Option<CurrentUser>>,
    pub access: RwSignal<AccessResolver>,
    /// Storage failures outside any page (login, logout, matrix reload)
    pub error: RwSignal<Option<String>>,
}

impl SessionContext {
    pub fn role(&self) -> Option<SessionRole> {
        self.user.with(|u| u.as_ref().map(|u| u.role))
    }

    pub fn role_untracked(&self) -> Option<SessionRole> {
        self.user.with_untracked(|u| u.as_ref().map(|u| u.role))
    }

    pub fn is_logged_in(&self) -> bool {
        self.user.with(Option::is_some)
    }

    /// Re-read roles and matrices after they were edited.
    pub fn reload_access(&self) {
        match AccessResolver::load(&BrowserStore) {
            Ok(resolver) => self.access.set(resolver),
            Err(err) => {
                log::warn!("access: {}", err);
                self.error.set(Some(err.to_string()));
                self.access.set(AccessResolver::default());
            }
        }
    }
}

/// Session provider. Restores the session stored by a previous visit.
#[component]
pub fn AuthProvider(children: ChildrenFn) -> impl IntoView {
    let ctx = SessionContext {
        user: RwSignal::new(auth::current_user(&BrowserStore)),
        access: RwSignal::new(AccessResolver::default()),
        error: RwSignal::new(None),
    };
    ctx.reload_access();
    provide_context(ctx);

    children()
}

/// Hook to access the session
pub fn use_auth() -> SessionContext {
    use_context::<SessionContext>().expect("AuthProvider not found in component tree")
}

/// Start a session with the chosen role.
pub fn do_login(ctx: SessionContext, role: SessionRole) {
    match auth::login(&BrowserStore, role) {
        Ok(user) => {
            ctx.error.set(None);
            ctx.reload_access();
            ctx.user.set(Some(user));
        }
        Err(err) => ctx.error.set(Some(format!("Login failed: {}", err))),
    }
}

/// End the session; the whole store is wiped.
pub fn do_logout(ctx: SessionContext) {
    if let Err(err) = auth::logout(&BrowserStore) {
        log::warn!("logout: {}", err);
    }
    ctx.user.set(None);
    ctx.access.set(AccessResolver::default());
}
