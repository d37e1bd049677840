use crate::shared::components::{ErrorBanner, PageHeader, PaginationControls, RecordStatusBadge};
use crate::shared::config::use_config;
use crate::shared::data::load_list;
use crate::shared::form_fields::{form_error, status_field, text_field};
use crate::shared::icons::icon;
use crate::shared::list_state::{text_matches, ListState};
use crate::shared::list_utils::highlight_matches;
use crate::shared::modal::Modal;
use crate::shared::page_frame::PageFrame;
use contracts::domain::a003_location::Location;
use contracts::domain::a008_checkpoint::{Checkpoint, CheckpointDto};
use contracts::shared::EntityId;
use leptos::prelude::*;
use thaw::*;

/// Patrol checkpoints: named groups of POIs.
#[component]
#[allow(non_snake_case)]
pub fn CheckpointList(
    #[prop(optional)] read_only: bool,
    #[prop(optional)] embedded: bool,
) -> impl IntoView {
    let page_size = use_config().task_settings_page_size;
    let state = ListState::<Checkpoint>::load();
    let locations = StoredValue::new(
        load_list::<Location>(state.banner)
            .into_iter()
            .filter(|l| l.status.is_active())
            .collect::<Vec<_>>(),
    );
    let editing = RwSignal::new(None::<CheckpointDto>);

    let page = Memo::new(move |_| state.visible(page_size, |c, q| text_matches(&c.name, q)));

    let content = view! {
        <ErrorBanner banner=state.banner />
        <div class="list-toolbar">
            <input
                class="search-input"
                type="search"
                placeholder="Search checkpoints..."
                prop:value=move || state.query.get()
                on:input=move |ev| state.set_query(event_target_value(&ev))
            />
            {(!read_only).then(|| view! {
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| editing.set(Some(CheckpointDto::default()))
                >
                    {icon("plus")}
                    " Add Checkpoint"
                </Button>
            })}
        </div>
        <Table>
            <TableHeader>
                <TableRow>
                    <TableHeaderCell>"Name"</TableHeaderCell>
                    <TableHeaderCell>"POI Locations"</TableHeaderCell>
                    <TableHeaderCell>"Status"</TableHeaderCell>
                    {(!read_only).then(|| view! { <TableHeaderCell>"Actions"</TableHeaderCell> })}
                </TableRow>
            </TableHeader>
            <TableBody>
                {move || {
                    let query = state.query.get();
                    page.get().0.into_iter().map(|c| {
                        let names = locations.with_value(|all| c.location_names(all)).join(", ");
                        let dto = CheckpointDto::from(&c);
                        let id = c.id;
                        let highlighted = highlight_matches(&c.name, &query);
                        view! {
                            <TableRow>
                                <TableCell><TableCellLayout>{highlighted}</TableCellLayout></TableCell>
                                <TableCell>{names}</TableCell>
                                <TableCell><RecordStatusBadge status=c.status /></TableCell>
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
                    }).collect_view()
                }}
            </TableBody>
        </Table>
        <PaginationControls
            window=Signal::derive(move || page.get().1)
            on_page_change=Callback::new(move |p| state.page.set(p))
        />
        {move || editing.get().map(|dto| view! {
            <CheckpointForm dto=dto locations=locations state=state editing=editing />
        })}
    };

    if embedded {
        content.into_any()
    } else {
        view! {
            <PageFrame page_id="a008_checkpoint--list" category="list">
                <PageHeader title="Checkpoints".to_string() subtitle="Patrol routes built from POI locations".to_string()>
                    {()}
                </PageHeader>
                {content}
            </PageFrame>
        }
        .into_any()
    }
}

#[component]
fn CheckpointForm(
    dto: CheckpointDto,
    locations: StoredValue<Vec<Location>>,
    state: ListState<Checkpoint>,
    editing: RwSignal<Option<CheckpointDto>>,
) -> impl IntoView {
    let max = use_config().checkpoint_max_locations;
    let is_edit = dto.id.is_some();
    let form = RwSignal::new(dto);
    let error = RwSignal::new(None::<String>);

    let toggle = move |id: EntityId| {
        form.update(|f| match f.location_ids.iter().position(|x| *x == id) {
            Some(pos) => {
                f.location_ids.remove(pos);
            }
            None => f.location_ids.push(id),
        });
    };

    let save = move |_| {
        let dto = form.get_untracked();
        let id = dto.id.unwrap_or_else(|| state.next_id());
        match Checkpoint::from_dto(id, &dto, max) {
            Ok(checkpoint) => {
                if state.upsert(checkpoint) {
                    editing.set(None);
                }
            }
            Err(e) => error.set(Some(e.to_string())),
        }
    };

    view! {
        <Modal
            title=if is_edit { "Edit Checkpoint".to_string() } else { "Add Checkpoint".to_string() }
            on_close=Callback::new(move |_| editing.set(None))
        >
            {form_error(error)}
            {text_field(form, "Checkpoint Name *", |f| f.name.clone(), |f, v| f.name = v)}
            <div class="form__group">
                <label class="form__label">
                    {move || format!("POI Locations ({}/{})", form.with(|f| f.location_ids.len()), max)}
                </label>
                <div class="checkbox-list">
                    {locations.with_value(|all| all.iter().map(|l| {
                        let id = l.id;
                        view! {
                            <label class="checkbox-list__item">
                                <input
                                    type="checkbox"
                                    prop:checked=move || form.with(|f| f.location_ids.contains(&id))
                                    on:change=move |_| toggle(id)
                                />
                                {l.name.clone()}
                            </label>
                        }
                    }).collect_view())}
                </div>
            </div>
            {status_field(form, |f| f.status, |f, v| f.status = v)}
            <div class="modal-footer">
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| editing.set(None)>"Cancel"</Button>
                <Button appearance=ButtonAppearance::Primary on_click=save>"Save"</Button>
            </div>
        </Modal>
    }
}
