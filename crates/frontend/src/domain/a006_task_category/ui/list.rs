use crate::shared::components::{ErrorBanner, PageHeader, PaginationControls};
use crate::shared::config::use_config;
use crate::shared::data::{confirm, load_list, report};
use crate::shared::date_utils::{format_date_str, today_iso};
use crate::shared::form_fields::{form_error, text_field};
use crate::shared::icons::icon;
use crate::shared::list_state::{text_matches, ListState};
use crate::shared::list_utils::highlight_matches;
use crate::shared::modal::Modal;
use crate::shared::page_frame::PageFrame;
use crate::shared::storage::BrowserStore;
use contracts::domain::a004_contract::Contract;
use contracts::domain::a006_task_category::{TaskCategory, TaskCategoryDto};
use contracts::shared::EntityId;
use contracts::usecases::u003_delete_task_category::DeleteTaskCategory;
use leptos::prelude::*;
use thaw::*;

/// Category tree. Parents cannot be deleted while they have children.
#[component]
#[allow(non_snake_case)]
pub fn TaskCategoryList(
    #[prop(optional)] read_only: bool,
    #[prop(optional)] embedded: bool,
) -> impl IntoView {
    let page_size = use_config().task_settings_page_size;
    let state = ListState::<TaskCategory>::load();
    let editing = RwSignal::new(None::<TaskCategoryDto>);

    let page = Memo::new(move |_| {
        state.visible(page_size, |c, q| text_matches(&c.name, q) || text_matches(&c.contract, q))
    });

    let delete = move |category: TaskCategory| {
        if !confirm(&format!("Are you sure you want to delete category \"{}\"?", category.name)) {
            return;
        }
        match DeleteTaskCategory::execute(&BrowserStore, category.id) {
            Ok(left) => {
                state.banner.set(None);
                state.items.set(left);
            }
            Err(e) => report(state.banner, e),
        }
    };

    let content = view! {
        <ErrorBanner banner=state.banner />
        <div class="list-toolbar">
            <input
                class="search-input"
                type="search"
                placeholder="Search categories..."
                prop:value=move || state.query.get()
                on:input=move |ev| state.set_query(event_target_value(&ev))
            />
            {(!read_only).then(|| view! {
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| editing.set(Some(TaskCategoryDto::default()))
                >
                    {icon("plus")}
                    " Add Category"
                </Button>
            })}
        </div>
        <Table>
            <TableHeader>
                <TableRow>
                    <TableHeaderCell>"Name"</TableHeaderCell>
                    <TableHeaderCell>"Parent"</TableHeaderCell>
                    <TableHeaderCell>"Contract"</TableHeaderCell>
                    <TableHeaderCell>"Created"</TableHeaderCell>
                    {(!read_only).then(|| view! { <TableHeaderCell>"Actions"</TableHeaderCell> })}
                </TableRow>
            </TableHeader>
            <TableBody>
                {move || {
                    let all = state.items.get();
                    let query = state.query.get();
                    page.get().0.into_iter().map(|c| {
                        let parent = c.parent_name(&all).unwrap_or("—").to_string();
                        let dto = TaskCategoryDto::from(&c);
                        let created = format_date_str(&c.created_date);
                        let contract = c.contract.clone();
                        let highlighted = highlight_matches(&c.name, &query);
                        view! {
                            <TableRow>
                                <TableCell><TableCellLayout>{highlighted}</TableCellLayout></TableCell>
                                <TableCell>{parent}</TableCell>
                                <TableCell>{contract}</TableCell>
                                <TableCell>{created}</TableCell>
                                {(!read_only).then(|| view! {
                                    <TableCell>
                                        <div class="table-actions">
                                            <button class="button button--icon" title="Edit" on:click=move |_| editing.set(Some(dto.clone()))>
                                                {icon("edit")}
                                            </button>
                                            <button class="button button--icon button--danger" title="Delete" on:click=move |_| delete(c.clone())>
                                                {icon("delete")}
                                            </button>
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
        {move || editing.get().map(|dto| view! { <CategoryForm dto=dto state=state editing=editing /> })}
    };

    if embedded {
        content.into_any()
    } else {
        view! {
            <PageFrame page_id="a006_task_category--list" category="list">
                <PageHeader title="Task Categories".to_string() subtitle="Categories and sub-categories available to tasks".to_string()>
                    {()}
                </PageHeader>
                {content}
            </PageFrame>
        }
        .into_any()
    }
}

#[component]
fn CategoryForm(
    dto: TaskCategoryDto,
    state: ListState<TaskCategory>,
    editing: RwSignal<Option<TaskCategoryDto>>,
) -> impl IntoView {
    let is_edit = dto.id.is_some();
    let form = RwSignal::new(dto);
    let error = RwSignal::new(None::<String>);
    let contracts: Vec<Contract> = load_list::<Contract>(error)
        .into_iter()
        .filter(|c| c.status.is_active())
        .collect();
    let own_id = form.with_untracked(|f| f.id);
    let parents: Vec<TaskCategory> = state
        .items
        .get_untracked()
        .into_iter()
        .filter(|c| Some(c.id) != own_id)
        .collect();

    let save = move |_| {
        let dto = form.get_untracked();
        let existing = state.items.get_untracked();
        let (id, created) = match dto.id.and_then(|id| state.find(id)) {
            Some(current) => (current.id, current.created_date),
            None => (state.next_id(), today_iso()),
        };
        match TaskCategory::from_dto(id, &dto, &existing, created) {
            Ok(category) => {
                if state.upsert(category) {
                    editing.set(None);
                }
            }
            Err(e) => error.set(Some(e.to_string())),
        }
    };

    view! {
        <Modal
            title=if is_edit { "Edit Category".to_string() } else { "Add Category".to_string() }
            on_close=Callback::new(move |_| editing.set(None))
        >
            {form_error(error)}
            {text_field(form, "Category Name *", |f| f.name.clone(), |f, v| f.name = v)}
            <div class="form__group">
                <label class="form__label">"Contract"</label>
                <select
                    class="form__select"
                    prop:value=move || form.with(|f| f.contract.clone())
                    on:change=move |ev| form.update(|f| f.contract = event_target_value(&ev))
                >
                    <option value="">"All contracts"</option>
                    {contracts.iter().map(|c| view! {
                        <option value=c.number.clone()>{c.number.clone()}</option>
                    }).collect_view()}
                </select>
            </div>
            <div class="form__group">
                <label class="form__label">"Parent Category"</label>
                <select
                    class="form__select"
                    prop:value=move || form.with(|f| f.parent_id.map(|p| p.to_string()).unwrap_or_default())
                    on:change=move |ev| {
                        let parent = event_target_value(&ev).parse::<EntityId>().ok();
                        form.update(|f| f.parent_id = parent);
                    }
                >
                    <option value="">"None (top level)"</option>
                    {parents.iter().map(|c| view! {
                        <option value=c.id.to_string()>{c.name.clone()}</option>
                    }).collect_view()}
                </select>
            </div>
            <div class="modal-footer">
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| editing.set(None)>"Cancel"</Button>
                <Button appearance=ButtonAppearance::Primary on_click=save>"Save"</Button>
            </div>
        </Modal>
    }
}
