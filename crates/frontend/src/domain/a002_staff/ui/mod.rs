mod detail;
mod form;
mod list;
mod locate;

pub use locate::LocatePage;

use crate::layout::global_context::use_global_context;
use detail::StaffDetail;
use leptos::prelude::*;
use list::StaffList;

/// Staff list, or the detail view of the member picked from it.
#[component]
#[allow(non_snake_case)]
pub fn StaffPage() -> impl IntoView {
    let ctx = use_global_context();

    move || match ctx.staff_detail.get() {
        Some(id) => view! { <StaffDetail id=id /> }.into_any(),
        None => view! { <StaffList /> }.into_any(),
    }
}
