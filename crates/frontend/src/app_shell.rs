//! Root components: the login gate and the main layout.

use crate::layout::center::PageOutlet;
use crate::layout::global_context::use_global_context;
use crate::layout::left::Navbar;
use crate::layout::Shell;
use crate::system::auth::use_auth;
use crate::system::pages::login::LoginPage;
use leptos::prelude::*;

/// Navbar on the left, the active page in the center.
///
/// Syncs the active page with the URL (`?page=...`).
#[component]
fn MainLayout() -> impl IntoView {
    let ctx = use_global_context();
    ctx.init_router_integration();

    view! {
        <Shell
            left=|| view! { <Navbar /> }.into_any()
            center=|| view! { <PageOutlet /> }.into_any()
        />
    }
}

/// Shows `LoginPage` without a session, `MainLayout` with one.
#[component]
pub fn AppShell() -> impl IntoView {
    let session = use_auth();

    view! {
        <Show
            when=move || session.is_logged_in()
            fallback=|| view! { <LoginPage /> }
        >
            <MainLayout />
        </Show>
    }
}
