use crate::layout::global_context::use_global_context;
use crate::shared::icons;
use crate::system::auth::use_auth;
use contracts::system::access::PageKey;
use leptos::prelude::*;

/// Navigation entries the current role may open, in canonical order.
#[component]
pub fn Navbar() -> impl IntoView {
    let ctx = use_global_context();
    let session = use_auth();

    let pages = move || {
        let role = session.role();
        session.access.with(|access| match role {
            Some(role) => access.visible_pages(role),
            None => Vec::new(),
        })
    };

    view! {
        <nav class="main-nav-bar">
            <ul>
                {move || pages().into_iter().map(|page: PageKey| {
                    view! {
                        <li
                            class:active=move || ctx.page.get() == page
                            on:click=move |_| ctx.navigate(page)
                        >
                            {icons::icon(page.code())}
                            <span>{page.display_name()}</span>
                        </li>
                    }
                }).collect_view()}
            </ul>
        </nav>
    }
}
