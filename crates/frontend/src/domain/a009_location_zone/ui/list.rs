use crate::shared::components::{ErrorBanner, PageHeader, PaginationControls, RecordStatusBadge};
use crate::shared::config::use_config;
use crate::shared::form_fields::{form_error, status_field, text_field};
use crate::shared::icons::icon;
use crate::shared::list_state::{text_matches, ListState};
use crate::shared::modal::Modal;
use crate::shared::page_frame::PageFrame;
use contracts::domain::a009_location_zone::LocationZone;
use contracts::shared::RecordStatus;
use leptos::prelude::*;
use thaw::*;

#[component]
#[allow(non_snake_case)]
pub fn ZoneList(
    #[prop(optional)] read_only: bool,
    #[prop(optional)] embedded: bool,
) -> impl IntoView {
    let page_size = use_config().task_settings_page_size;
    let state = ListState::<LocationZone>::load();
    // (is new, zone)
    let editing = RwSignal::new(None::<(bool, LocationZone)>);

    let page = Memo::new(move |_| {
        state.visible(page_size, |z, q| text_matches(&z.name, q) || text_matches(&z.description, q))
    });

    let add = move |_| {
        let zone = LocationZone {
            id: state.next_id(),
            name: String::new(),
            description: String::new(),
            status: RecordStatus::Active,
        };
        editing.set(Some((true, zone)));
    };

    let content = view! {
        <ErrorBanner banner=state.banner />
        <div class="list-toolbar">
            <input
                class="search-input"
                type="search"
                placeholder="Search zones..."
                prop:value=move || state.query.get()
                on:input=move |ev| state.set_query(event_target_value(&ev))
            />
            {(!read_only).then(|| view! {
                <Button appearance=ButtonAppearance::Primary on_click=add>
                    {icon("plus")}
                    " Add Zone"
                </Button>
            })}
        </div>
        <Table>
            <TableHeader>
                <TableRow>
                    <TableHeaderCell>"Zone"</TableHeaderCell>
                    <TableHeaderCell>"Description"</TableHeaderCell>
                    <TableHeaderCell>"Status"</TableHeaderCell>
                    {(!read_only).then(|| view! { <TableHeaderCell>"Actions"</TableHeaderCell> })}
                </TableRow>
            </TableHeader>
            <TableBody>
                {move || page.get().0.into_iter().map(|z| {
                    let name = z.name.clone();
                    let description = z.description.clone();
                    let id = z.id;
                    view! {
                        <TableRow>
                            <TableCell>{name}</TableCell>
                            <TableCell>{description}</TableCell>
                            <TableCell><RecordStatusBadge status=z.status /></TableCell>
                            {(!read_only).then(|| view! {
                                <TableCell>
                                    <div class="table-actions">
                                        <button class="button button--icon" title="Edit" on:click=move |_| editing.set(Some((false, z.clone())))>
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
        <PaginationControls
            window=Signal::derive(move || page.get().1)
            on_page_change=Callback::new(move |p| state.page.set(p))
        />
        {move || editing.get().map(|(is_new, zone)| view! {
            <ZoneForm zone=zone is_new=is_new state=state editing=editing />
        })}
    };

    if embedded {
        content.into_any()
    } else {
        view! {
            <PageFrame page_id="a009_location_zone--list" category="list">
                <PageHeader title="Location Zones".to_string() subtitle="Areas used for zone-based tasks and shifts".to_string()>
                    {()}
                </PageHeader>
                {content}
            </PageFrame>
        }
        .into_any()
    }
}

#[component]
fn ZoneForm(
    zone: LocationZone,
    is_new: bool,
    state: ListState<LocationZone>,
    editing: RwSignal<Option<(bool, LocationZone)>>,
) -> impl IntoView {
    let form = RwSignal::new(zone);
    let error = RwSignal::new(None::<String>);

    let save = move |_| {
        let mut zone = form.get_untracked();
        zone.name = zone.name.trim().to_string();
        if let Err(e) = zone.validate() {
            error.set(Some(e.to_string()));
            return;
        }
        if state.upsert(zone) {
            editing.set(None);
        }
    };

    view! {
        <Modal
            title=if is_new { "Add Zone".to_string() } else { "Edit Zone".to_string() }
            on_close=Callback::new(move |_| editing.set(None))
        >
            {form_error(error)}
            {text_field(form, "Zone Name *", |z| z.name.clone(), |z, v| z.name = v)}
            {text_field(form, "Description", |z| z.description.clone(), |z, v| z.description = v)}
            {status_field(form, |z| z.status, |z, v| z.status = v)}
            <div class="modal-footer">
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| editing.set(None)>"Cancel"</Button>
                <Button appearance=ButtonAppearance::Primary on_click=save>"Save"</Button>
            </div>
        </Modal>
    }
}
