use crate::shared::components::{ErrorBanner, PageHeader, PaginationControls, RecordStatusBadge};
use crate::shared::config::use_config;
use crate::shared::date_utils::{format_date_str, today_iso};
use crate::shared::form_fields::{form_error, status_field, text_field};
use crate::shared::icons::icon;
use crate::shared::list_state::{text_matches, ListState};
use crate::shared::modal::Modal;
use crate::shared::page_frame::PageFrame;
use crate::system::auth::use_auth;
use contracts::domain::a005_service::{Service, ServiceDto};
use contracts::system::access::policy::can_add_services;
use leptos::prelude::*;
use thaw::*;

#[component]
#[allow(non_snake_case)]
pub fn ServiceList() -> impl IntoView {
    let session = use_auth();
    let page_size = use_config().task_settings_page_size;
    let state = ListState::<Service>::load();
    let editing = RwSignal::new(None::<ServiceDto>);
    let can_manage = move || session.role().is_some_and(can_add_services);

    let page = Memo::new(move |_| state.visible(page_size, |s, q| text_matches(&s.name, q)));

    view! {
        <PageFrame page_id="a005_service--list" category="list">
            <PageHeader title="Services".to_string() subtitle="Service types offered under contracts".to_string()>
                <Show when=can_manage>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| editing.set(Some(ServiceDto::default()))
                    >
                        {icon("plus")}
                        " Add Service"
                    </Button>
                </Show>
            </PageHeader>
            <ErrorBanner banner=state.banner />
            <div class="list-toolbar">
                <input
                    class="search-input"
                    type="search"
                    placeholder="Search services..."
                    prop:value=move || state.query.get()
                    on:input=move |ev| state.set_query(event_target_value(&ev))
                />
            </div>
            <Table>
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell>"Name"</TableHeaderCell>
                        <TableHeaderCell>"Status"</TableHeaderCell>
                        <TableHeaderCell>"Created"</TableHeaderCell>
                        <TableHeaderCell>""</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    {move || page.get().0.into_iter().map(|s| {
                        let dto = ServiceDto { id: Some(s.id), name: s.name.clone(), status: s.status };
                        let id = s.id;
                        view! {
                            <TableRow>
                                <TableCell>{s.name.clone()}</TableCell>
                                <TableCell><RecordStatusBadge status=s.status /></TableCell>
                                <TableCell>{format_date_str(&s.created_date)}</TableCell>
                                <TableCell>
                                    {can_manage().then(|| view! {
                                        <div class="table-actions">
                                            <button class="button button--icon" title="Edit" on:click=move |_| editing.set(Some(dto.clone()))>
                                                {icon("edit")}
                                            </button>
                                            <button class="button button--icon button--danger" title="Delete" on:click=move |_| {
                                                state.delete(id);
                                            }>{icon("delete")}</button>
                                        </div>
                                    })}
                                </TableCell>
                            </TableRow>
                        }
                    }).collect_view()}
                </TableBody>
            </Table>
            <PaginationControls
                window=Signal::derive(move || page.get().1)
                on_page_change=Callback::new(move |p| state.page.set(p))
            />
            {move || editing.get().map(|dto| view! { <ServiceForm dto=dto state=state editing=editing /> })}
        </PageFrame>
    }
}

#[component]
fn ServiceForm(dto: ServiceDto, state: ListState<Service>, editing: RwSignal<Option<ServiceDto>>) -> impl IntoView {
    let is_edit = dto.id.is_some();
    let form = RwSignal::new(dto);
    let error = RwSignal::new(None::<String>);

    let save = move |_| {
        let dto = form.get_untracked();
        let (id, created) = match dto.id.and_then(|id| state.find(id)) {
            Some(existing) => (existing.id, existing.created_date),
            None => (state.next_id(), today_iso()),
        };
        match Service::from_dto(id, &dto, created) {
            Ok(service) => {
                if state.upsert(service) {
                    editing.set(None);
                }
            }
            Err(e) => error.set(Some(e.to_string())),
        }
    };

    view! {
        <Modal
            title=if is_edit { "Edit Service".to_string() } else { "Add Service".to_string() }
            on_close=Callback::new(move |_| editing.set(None))
        >
            {form_error(error)}
            {text_field(form, "Service Name *", |f| f.name.clone(), |f, v| f.name = v)}
            {status_field(form, |f| f.status, |f, v| f.status = v)}
            <div class="modal-footer">
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| editing.set(None)>"Cancel"</Button>
                <Button appearance=ButtonAppearance::Primary on_click=save>"Save"</Button>
            </div>
        </Modal>
    }
}
