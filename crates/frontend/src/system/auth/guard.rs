use leptos::prelude::*;

use super::context::use_auth;
use contracts::system::auth::SessionRole;

/// Renders `children` only when the session role passes `allowed`.
#[component]
pub fn RequireRole(
    allowed: fn(SessionRole) -> bool,
    children: ChildrenFn,
) -> impl IntoView {
    let session = use_auth();

    view! {
        <Show
            when=move || session.role().map(allowed).unwrap_or(false)
            fallback=|| view! {
                <div class="warning-box">
                    <span class="warning-box__text">"Access denied. You do not have permission to view this page."</span>
                </div>
            }
        >
            {children()}
        </Show>
    }
}
