use super::form::StaffForm;
use crate::layout::global_context::use_global_context;
use crate::shared::components::{ErrorBanner, PageHeader, PaginationControls, RecordStatusBadge};
use crate::shared::config::use_config;
use crate::shared::data::report;
use crate::shared::icons::icon;
use crate::shared::list_state::{text_matches, ListState};
use crate::shared::list_utils::highlight_matches;
use crate::shared::page_frame::PageFrame;
use crate::shared::storage::BrowserStore;
use crate::system::auth::use_auth;
use contracts::domain::a002_staff::selection::select_staff;
use contracts::domain::a002_staff::{Staff, StaffDto};
use contracts::shared::EntityId;
use contracts::system::access::policy::can_manage_staff;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn StaffList() -> impl IntoView {
    let ctx = use_global_context();
    let session = use_auth();
    let can_manage = Memo::new(move |_| session.role().map(can_manage_staff).unwrap_or(false));
    let page_size = use_config().task_settings_page_size;
    let state = ListState::<Staff>::load();
    let editing = RwSignal::new(None::<StaffDto>);

    let page = Memo::new(move |_| state.visible(page_size, |s, q| text_matches(&s.name, q)));

    let open_detail = move |id: EntityId| {
        if let Err(e) = select_staff(&BrowserStore, id) {
            report(state.banner, e);
        }
        ctx.open_staff_detail(id);
    };

    view! {
        <PageFrame page_id="a002_staff--list" category="list">
            <PageHeader title="Staff".to_string() subtitle="People, roles and teams".to_string()>
                <Show when=move || can_manage.get()>
                    <Button appearance=ButtonAppearance::Primary on_click=move |_| editing.set(Some(StaffDto::default()))>
                        {icon("plus")}
                        " Add Staff"
                    </Button>
                </Show>
            </PageHeader>
            <ErrorBanner banner=state.banner />
            <div class="list-toolbar">
                <input
                    class="search-input"
                    type="search"
                    placeholder="Search by name..."
                    prop:value=move || state.query.get()
                    on:input=move |ev| state.set_query(event_target_value(&ev))
                />
            </div>
            <Table>
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell>"Name"</TableHeaderCell>
                        <TableHeaderCell>"Role"</TableHeaderCell>
                        <TableHeaderCell>"Contract"</TableHeaderCell>
                        <TableHeaderCell>"Team"</TableHeaderCell>
                        <TableHeaderCell>"Status"</TableHeaderCell>
                        <TableHeaderCell>"Actions"</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    {move || {
                        let query = state.query.get();
                        let manage = can_manage.get();
                        page.get().0.into_iter().map(|s| {
                            let id = s.id;
                            let dto = StaffDto::from(&s);
                            let highlighted = highlight_matches(&s.name, &query);
                            view! {
                                <TableRow>
                                    <TableCell>
                                        <TableCellLayout>
                                            <a class="link" on:click=move |_| open_detail(id)>{highlighted}</a>
                                        </TableCellLayout>
                                    </TableCell>
                                    <TableCell>{s.role.display_name()}</TableCell>
                                    <TableCell>{s.contract.clone()}</TableCell>
                                    <TableCell>{s.team.clone().unwrap_or_else(|| "-".to_string())}</TableCell>
                                    <TableCell><RecordStatusBadge status=s.status /></TableCell>
                                    <TableCell>
                                        <div class="table-actions">
                                            <button class="button button--icon" title="View" on:click=move |_| open_detail(id)>
                                                {icon("eye")}
                                            </button>
                                            {manage.then(|| view! {
                                                <button class="button button--icon" title="Edit" on:click=move |_| editing.set(Some(dto.clone()))>
                                                    {icon("edit")}
                                                </button>
                                                <button class="button button--icon button--danger" title="Delete" on:click=move |_| {
                                                    state.delete(id);
                                                }>{icon("delete")}</button>
                                            })}
                                        </div>
                                    </TableCell>
                                </TableRow>
                            }
                        }).collect_view()
                    }}
                </TableBody>
            </Table>
            <PaginationControls
                window=Signal::derive(move || page.get().1)
                on_page_change=Callback::new(move |p| state.page.set(p))
            />
            {move || editing.get().map(|dto| view! { <StaffForm dto=dto state=state editing=editing /> })}
        </PageFrame>
    }
}
