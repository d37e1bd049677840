use super::details::LocationDetails;
use crate::shared::components::{ErrorBanner, PageHeader, PaginationControls};
use crate::shared::config::use_config;
use crate::shared::icons::icon;
use crate::shared::list_state::{text_matches, ListState};
use crate::shared::list_utils::highlight_matches;
use crate::shared::page_frame::PageFrame;
use contracts::domain::a003_location::{Location, LocationDto};
use leptos::prelude::*;
use thaw::*;

/// Points of interest. Only active locations are listed.
#[component]
#[allow(non_snake_case)]
pub fn LocationList(
    /// Hide add/edit/delete (task settings with view permission)
    #[prop(optional)]
    read_only: bool,
    /// Rendered inside another page: no page frame or title
    #[prop(optional)]
    embedded: bool,
) -> impl IntoView {
    let config = use_config();
    let page_size = config.task_settings_page_size;
    let state = ListState::<Location>::load();
    let editing = RwSignal::new(None::<LocationDto>);

    let page = Memo::new(move |_| {
        state.visible(page_size, |l, q| {
            l.status.is_active()
                && (text_matches(&l.name, q) || text_matches(&l.building, q) || text_matches(&l.contract, q))
        })
    });

    let on_saved = Callback::new(move |mut location: Location| {
        if let Some(existing) = state.find(location.id) {
            location.created_date = existing.created_date;
        }
        if state.upsert(location) {
            editing.set(None);
        }
    });

    let table = move || {
        let (rows, _) = page.get();
        let query = state.query.get();
        if rows.is_empty() {
            return view! { <div class="empty-state">"No locations found"</div> }.into_any();
        }
        view! {
            <Table>
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell>"Name"</TableHeaderCell>
                        <TableHeaderCell>"Contract"</TableHeaderCell>
                        <TableHeaderCell>"Building"</TableHeaderCell>
                        <TableHeaderCell>"Level"</TableHeaderCell>
                        <TableHeaderCell>"Coordinates"</TableHeaderCell>
                        {(!read_only).then(|| view! { <TableHeaderCell>"Actions"</TableHeaderCell> })}
                    </TableRow>
                </TableHeader>
                <TableBody>
                    {rows.into_iter().map(|l| {
                        let dto = LocationDto::from(&l);
                        let id = l.id;
                        let highlighted = highlight_matches(&l.name, &query);
                        view! {
                            <TableRow>
                                <TableCell><TableCellLayout>{highlighted}</TableCellLayout></TableCell>
                                <TableCell>{l.contract.clone()}</TableCell>
                                <TableCell>{l.building.clone()}</TableCell>
                                <TableCell>{l.level}</TableCell>
                                <TableCell>{format!("({}, {})", l.x, l.y)}</TableCell>
                                {(!read_only).then(|| view! {
                                    <TableCell>
                                        <div class="table-actions">
                                            <button class="button button--icon" title="Edit" on:click=move |_| editing.set(Some(dto.clone()))>
                                                {icon("edit")}
                                            </button>
                                            <button class="button button--icon button--danger" title="Delete" on:click=move |_| {
                                                state.delete(id);
                                            }>{icon("delete")}</button>
                                        </div>
                                    </TableCell>
                                })}
                            </TableRow>
                        }
                    }).collect_view()}
                </TableBody>
            </Table>
        }
        .into_any()
    };

    let content = view! {
        <ErrorBanner banner=state.banner />
        <div class="list-toolbar">
            <input
                class="search-input"
                type="search"
                placeholder="Search locations..."
                prop:value=move || state.query.get()
                on:input=move |ev| state.set_query(event_target_value(&ev))
            />
            {(!read_only).then(|| view! {
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| editing.set(Some(LocationDto::default()))
                >
                    {icon("plus")}
                    " Add Location"
                </Button>
            })}
        </div>
        {table}
        <PaginationControls
            window=Signal::derive(move || page.get().1)
            on_page_change=Callback::new(move |p| state.page.set(p))
        />
        {move || editing.get().map(|dto| view! {
            <LocationDetails
                dto=dto
                on_saved=on_saved
                on_cancel=Callback::new(move |_| editing.set(None))
                next_id=Callback::new(move |_| state.next_id())
            />
        })}
    };

    if embedded {
        content.into_any()
    } else {
        view! {
            <PageFrame page_id="a003_location--list" category="list">
                <PageHeader title="Locations".to_string() subtitle="Points of interest used by tasks and checkpoints".to_string()>
                    {()}
                </PageHeader>
                {content}
            </PageFrame>
        }
        .into_any()
    }
}
