use crate::dashboards::d001_summary::ui::SummaryDashboard;
use crate::domain::a001_task::ui::TaskList;
use crate::domain::a002_staff::ui::{LocatePage, StaffPage};
use crate::domain::a010_document::ui::DocumentList;
use crate::domain::a011_shift::ui::ScheduleWeek;
use crate::domain::a012_message::ui::MessageCenter;
use crate::layout::global_context::use_global_context;
use crate::reports::ui::ReportsPage;
use crate::system::auth::use_auth;
use crate::system::pages::settings::SettingsPage;
use contracts::system::access::{PageAccess, PageKey};
use leptos::prelude::*;

#[component]
pub fn Center(children: Children) -> impl IntoView {
    view! {
        <div data-zone="center" class="app-content" style="flex: 1; overflow: auto;">
            {children()}
        </div>
    }
}

fn render_page(page: PageKey) -> AnyView {
    match page {
        PageKey::Dashboard => view! { <SummaryDashboard /> }.into_any(),
        PageKey::Task => view! { <TaskList /> }.into_any(),
        PageKey::Staff => view! { <StaffPage /> }.into_any(),
        PageKey::Schedule => view! { <ScheduleWeek /> }.into_any(),
        PageKey::Locate => view! { <LocatePage /> }.into_any(),
        PageKey::Documents => view! { <DocumentList /> }.into_any(),
        PageKey::Reports => view! { <ReportsPage /> }.into_any(),
        PageKey::Messages => view! { <MessageCenter /> }.into_any(),
        PageKey::Settings => view! { <SettingsPage /> }.into_any(),
    }
}

/// Active page after the access check. A hidden page sends the user to the
/// first visible one.
#[component]
pub fn PageOutlet() -> impl IntoView {
    let ctx = use_global_context();
    let session = use_auth();

    let access = Memo::new(move |_| {
        let page = ctx.page.get();
        match session.role() {
            Some(role) => session.access.with(|a| a.check_page(role, page)),
            None => PageAccess::Denied,
        }
    });

    Effect::new(move |_| {
        if let PageAccess::Redirect(target) = access.get() {
            leptos::logging::log!("page {} hidden, redirecting to {}", ctx.page.get_untracked().code(), target.code());
            ctx.navigate(target);
        }
    });

    move || match access.get() {
        PageAccess::Allowed => render_page(ctx.page.get()),
        PageAccess::Redirect(_) => view! { <div class="page page--loading"></div> }.into_any(),
        PageAccess::Denied => view! {
            <div class="warning-box">
                <span class="warning-box__text">"Your role has no pages available. Contact a system administrator."</span>
            </div>
        }
        .into_any(),
    }
}
