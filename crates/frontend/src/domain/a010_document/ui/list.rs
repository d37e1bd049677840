use crate::layout::global_context::use_global_context;
use crate::shared::components::{ErrorBanner, PageHeader, PaginationControls, RecordStatusBadge};
use crate::shared::config::use_config;
use crate::shared::data::{load_list, report};
use crate::shared::form_fields::{form_error, status_field};
use crate::shared::icons::icon;
use crate::shared::list_state::{text_matches, ListState};
use crate::shared::list_utils::highlight_matches;
use crate::shared::modal::Modal;
use crate::shared::page_frame::PageFrame;
use crate::shared::storage::BrowserStore;
use crate::system::auth::use_auth;
use contracts::domain::a002_staff::Staff;
use contracts::domain::a006_task_category::TaskCategory;
use contracts::domain::a010_document::{Document, DocumentUpload};
use contracts::reports::export::resolve_contract;
use contracts::shared::EntityId;
use contracts::usecases::u004_upload_document::{UploadDocument, SAVED_MESSAGE};
use leptos::prelude::*;
use thaw::*;
use web_sys::{HtmlInputElement, Url};

/// Documents attached to task categories, stored against the session contract.
#[component]
#[allow(non_snake_case)]
pub fn DocumentList(
    #[prop(optional)] read_only: bool,
    #[prop(optional)] embedded: bool,
) -> impl IntoView {
    let page_size = use_config().task_settings_page_size;
    let state = ListState::<Document>::load();
    let uploading = RwSignal::new(false);

    let page = Memo::new(move |_| {
        state.visible(page_size, |d, q| {
            d.status.is_active()
                && (text_matches(&d.filename, q) || text_matches(&d.category_name, q) || text_matches(&d.contract, q))
        })
    });

    let content = view! {
        <ErrorBanner banner=state.banner />
        <div class="list-toolbar">
            <input
                class="search-input"
                type="search"
                placeholder="Search documents..."
                prop:value=move || state.query.get()
                on:input=move |ev| state.set_query(event_target_value(&ev))
            />
            {(!read_only).then(|| view! {
                <Button appearance=ButtonAppearance::Primary on_click=move |_| uploading.set(true)>
                    {icon("upload")}
                    " Upload Document"
                </Button>
            })}
        </div>
        <Table>
            <TableHeader>
                <TableRow>
                    <TableHeaderCell>"File"</TableHeaderCell>
                    <TableHeaderCell>"Category"</TableHeaderCell>
                    <TableHeaderCell>"Contract"</TableHeaderCell>
                    <TableHeaderCell>"Status"</TableHeaderCell>
                    <TableHeaderCell>"Actions"</TableHeaderCell>
                </TableRow>
            </TableHeader>
            <TableBody>
                {move || {
                    let query = state.query.get();
                    page.get().0.into_iter().map(|d| {
                        let id = d.id;
                        let has_url = !d.url.is_empty();
                        let highlighted = highlight_matches(&d.filename, &query);
                        view! {
                            <TableRow>
                                <TableCell><TableCellLayout>{highlighted}</TableCellLayout></TableCell>
                                <TableCell>{d.category_name.clone()}</TableCell>
                                <TableCell>{d.contract.clone()}</TableCell>
                                <TableCell><RecordStatusBadge status=d.status /></TableCell>
                                <TableCell>
                                    <div class="table-actions">
                                        {has_url.then(|| view! {
                                            <a class="button button--icon" title="View" href=d.url.clone() target="_blank" rel="noopener">
                                                {icon("eye")}
                                            </a>
                                        })}
                                        {(!read_only).then(|| view! {
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
        <Show when=move || uploading.get()>
            <UploadForm state=state open=uploading />
        </Show>
    };

    if embedded {
        content.into_any()
    } else {
        view! {
            <PageFrame page_id="a010_document--list" category="list">
                <PageHeader title="Documents".to_string() subtitle="Manuals and instructions attached to task categories".to_string()>
                    {()}
                </PageHeader>
                {content}
            </PageFrame>
        }
        .into_any()
    }
}

#[component]
fn UploadForm(state: ListState<Document>, open: RwSignal<bool>) -> impl IntoView {
    let config = StoredValue::new(use_config());
    let max_mb = config.with_value(|c| c.document_max_mb());
    let session = use_auth();
    let ctx = use_global_context();
    let form = RwSignal::new(DocumentUpload::default());
    let error = RwSignal::new(None::<String>);
    let categories: Vec<TaskCategory> = load_list::<TaskCategory>(error)
        .into_iter()
        .filter(|c| c.status.is_active())
        .collect();
    let category_names = StoredValue::new(
        categories.iter().map(|c| (c.id, c.name.clone())).collect::<Vec<_>>(),
    );

    let on_file = move |ev: leptos::ev::Event| {
        let input = event_target::<HtmlInputElement>(&ev);
        let file = input.files().and_then(|files| files.get(0));
        form.update(|f| match &file {
            Some(file) => {
                f.filename = Some(file.name());
                f.size_bytes = file.size().max(0.0) as u64;
                f.url = Url::create_object_url_with_blob(file).unwrap_or_default();
            }
            None => {
                f.filename = None;
                f.size_bytes = 0;
                f.url.clear();
            }
        });
    };

    let save = move |_| {
        let staff = load_list::<Staff>(error);
        let user = session.user.get_untracked();
        let upload = form.get_untracked();
        let result = config.with_value(|config| {
            let contract = resolve_contract(user.as_ref(), &staff, &config.fallback_contract);
            UploadDocument::execute(&BrowserStore, &contract, &upload, config)
        });
        match result {
            Ok(documents) => {
                state.items.set(documents);
                open.set(false);
                ctx.notify(SAVED_MESSAGE);
            }
            Err(e) if e.is_validation() => error.set(Some(e.message)),
            Err(e) => report(error, e),
        }
    };

    view! {
        <Modal title="Upload Document".to_string() on_close=Callback::new(move |_| open.set(false))>
            {form_error(error)}
            <div class="form__group">
                <label class="form__label">"Task Category *"</label>
                <select
                    class="form__select"
                    prop:value=move || form.with(|f| f.category_id.map(|id| id.to_string()).unwrap_or_default())
                    on:change=move |ev| {
                        let id = event_target_value(&ev).parse::<EntityId>().ok();
                        let name = category_names.with_value(|all| {
                            id.and_then(|id| all.iter().find(|(cid, _)| *cid == id).map(|(_, n)| n.clone()))
                        });
                        form.update(|f| {
                            f.category_id = id;
                            f.category_name = name.unwrap_or_default();
                        });
                    }
                >
                    <option value="">"Select category"</option>
                    {categories.iter().map(|c| view! {
                        <option value=c.id.to_string()>{c.name.clone()}</option>
                    }).collect_view()}
                </select>
            </div>
            <div class="form__group">
                <label class="form__label">{format!("File * (max {} MB)", max_mb)}</label>
                <input class="form__input" type="file" on:change=on_file />
                {move || form.with(|f| f.filename.clone()).map(|name| view! {
                    <div class="form__hint">{format!("{} ({} KB)", name, form.with(|f| f.size_bytes) / 1024)}</div>
                })}
            </div>
            {status_field(form, |f| f.status, |f, v| f.status = v)}
            <div class="modal-footer">
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| open.set(false)>"Cancel"</Button>
                <Button appearance=ButtonAppearance::Primary on_click=save>"Upload"</Button>
            </div>
        </Modal>
    }
}
