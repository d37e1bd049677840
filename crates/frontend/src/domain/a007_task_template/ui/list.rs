use crate::shared::components::{ErrorBanner, PageHeader, PaginationControls, ToneBadge};
use crate::shared::config::use_config;
use crate::shared::date_utils::today_iso;
use crate::shared::form_fields::{form_error, text_field};
use crate::shared::icons::icon;
use crate::shared::list_state::{text_matches, ListState};
use crate::shared::list_utils::highlight_matches;
use crate::shared::lookups::Lookups;
use crate::shared::modal::Modal;
use crate::shared::page_frame::PageFrame;
use contracts::domain::a001_task::TaskDraft;
use contracts::domain::a006_task_category::aggregate::subcategories_of;
use contracts::domain::a007_task_template::{LocationMode, TaskTemplate};
use contracts::shared::{EntityId, StatusTone};
use leptos::prelude::*;
use thaw::*;

#[component]
#[allow(non_snake_case)]
pub fn TaskTemplateList(
    #[prop(optional)] read_only: bool,
    #[prop(optional)] embedded: bool,
) -> impl IntoView {
    let page_size = use_config().task_settings_page_size;
    let state = ListState::<TaskTemplate>::load();
    // (template being edited, form state)
    let editing = RwSignal::new(None::<(Option<TaskTemplate>, TaskDraft)>);
    let lookups = StoredValue::new(Lookups::load(state.banner));

    let page = Memo::new(move |_| {
        state.visible(page_size, |t, q| {
            text_matches(&t.name, q) || text_matches(&t.category_label, q) || text_matches(&t.location_display, q)
        })
    });

    let open_editor = move |template: Option<TaskTemplate>| {
        let draft = match &template {
            Some(t) => lookups.with_value(|l| {
                let mut draft = TaskDraft::default();
                draft.apply_template(t, &l.catalog());
                draft.name = t.name.clone();
                draft
            }),
            None => TaskDraft::default(),
        };
        editing.set(Some((template, draft)));
    };

    let content = view! {
        <ErrorBanner banner=state.banner />
        <div class="list-toolbar">
            <input
                class="search-input"
                type="search"
                placeholder="Search templates..."
                prop:value=move || state.query.get()
                on:input=move |ev| state.set_query(event_target_value(&ev))
            />
            {(!read_only).then(|| view! {
                <Button appearance=ButtonAppearance::Primary on_click=move |_| open_editor(None)>
                    {icon("plus")}
                    " Add Template"
                </Button>
            })}
        </div>
        <Table>
            <TableHeader>
                <TableRow>
                    <TableHeaderCell>"Name"</TableHeaderCell>
                    <TableHeaderCell>"Category"</TableHeaderCell>
                    <TableHeaderCell>"Duration"</TableHeaderCell>
                    <TableHeaderCell>"Location"</TableHeaderCell>
                    {(!read_only).then(|| view! { <TableHeaderCell>"Actions"</TableHeaderCell> })}
                </TableRow>
            </TableHeader>
            <TableBody>
                {move || {
                    let query = state.query.get();
                    page.get().0.into_iter().map(|t| {
                        let id = t.id;
                        let mode = t.mode.display_name();
                        let category_path = t.category_path();
                        let location_display = t.location_display.clone();
                        let highlighted = highlight_matches(&t.name, &query);
                        view! {
                            <TableRow>
                                <TableCell><TableCellLayout>{highlighted}</TableCellLayout></TableCell>
                                <TableCell>{category_path}</TableCell>
                                <TableCell>{format!("{} min", t.duration)}</TableCell>
                                <TableCell>
                                    <ToneBadge tone=StatusTone::Informative text=mode />
                                    " "
                                    {location_display}
                                </TableCell>
                                {(!read_only).then(|| view! {
                                    <TableCell>
                                        <div class="table-actions">
                                            <button class="button button--icon" title="Edit" on:click=move |_| open_editor(Some(t.clone()))>
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
        {move || editing.get().map(|(template, draft)| view! {
            <TemplateForm template=template draft=draft lookups=lookups state=state editing=editing />
        })}
    };

    if embedded {
        content.into_any()
    } else {
        view! {
            <PageFrame page_id="a007_task_template--list" category="list">
                <PageHeader title="Task Templates".to_string() subtitle="Reusable task configurations".to_string()>
                    {()}
                </PageHeader>
                {content}
            </PageFrame>
        }
        .into_any()
    }
}

#[component]
fn TemplateForm(
    template: Option<TaskTemplate>,
    draft: TaskDraft,
    lookups: StoredValue<Lookups>,
    state: ListState<TaskTemplate>,
    editing: RwSignal<Option<(Option<TaskTemplate>, TaskDraft)>>,
) -> impl IntoView {
    let is_edit = template.is_some();
    let form = RwSignal::new(draft);
    let error = RwSignal::new(None::<String>);
    let existing = StoredValue::new(template);
    let close = move || editing.set(None);

    let save = move |_| {
        let draft = form.get_untracked();
        let (id, created) = existing.with_value(|t| match t {
            Some(t) => (t.id, t.created_date.clone()),
            None => (state.next_id(), Some(today_iso())),
        });
        let mut template = lookups.with_value(|l| draft.to_template(id, &l.catalog()));
        template.created_date = created;
        if let Err(e) = template.validate() {
            error.set(Some(e.to_string()));
            return;
        }
        if state.upsert(template) {
            close();
        }
    };

    let subcategory_options = move || {
        let category = form.with(|f| f.category_id);
        lookups.with_value(|l| category.map(|c| subcategories_of(&l.subcategories, c)).unwrap_or_default())
    };

    view! {
        <Modal
            title=if is_edit { "Edit Template".to_string() } else { "Add Template".to_string() }
            on_close=Callback::new(move |_| close())
        >
            {form_error(error)}
            {text_field(form, "Template Name *", |f| f.name.clone(), |f, v| f.name = v)}
            <div class="form__row">
                <div class="form__group">
                    <label class="form__label">"Category *"</label>
                    <select
                        class="form__select"
                        prop:value=move || form.with(|f| f.category_id.map(|id| id.to_string()).unwrap_or_default())
                        on:change=move |ev| {
                            let id = event_target_value(&ev).parse::<EntityId>().ok();
                            let label = lookups.with_value(|l| {
                                id.and_then(|id| l.categories.iter().find(|c| c.id == id).map(|c| c.name.clone()))
                            });
                            form.update(|f| f.select_category(id, label.unwrap_or_default()));
                        }
                    >
                        <option value="">"Select category"</option>
                        {lookups.with_value(|l| l.categories.iter().filter(|c| c.parent_id.is_none()).map(|c| view! {
                            <option value=c.id.to_string()>{c.name.clone()}</option>
                        }).collect_view())}
                    </select>
                </div>
                <div class="form__group">
                    <label class="form__label">"Subcategory *"</label>
                    <select
                        class="form__select"
                        prop:value=move || form.with(|f| f.subcategory_id.map(|id| id.to_string()).unwrap_or_default())
                        on:change=move |ev| {
                            let id = event_target_value(&ev).parse::<EntityId>().ok();
                            let label = lookups.with_value(|l| {
                                id.and_then(|id| l.subcategories.iter().find(|s| s.id == id).map(|s| s.name.clone()))
                            });
                            // keep the template name the user typed
                            form.update(|f| {
                                let name = f.name.clone();
                                f.select_subcategory(id, label.unwrap_or_default());
                                if !name.trim().is_empty() {
                                    f.name = name;
                                }
                            });
                        }
                    >
                        <option value="">"Select subcategory"</option>
                        {move || subcategory_options().into_iter().map(|s| view! {
                            <option value=s.id.to_string()>{s.name}</option>
                        }).collect_view()}
                    </select>
                </div>
            </div>
            <div class="form__group">
                <label class="form__label">"Duration (minutes)"</label>
                <input
                    class="form__input"
                    type="number"
                    min="0"
                    prop:value=move || form.with(|f| f.duration.to_string())
                    on:input=move |ev| {
                        let minutes = event_target_value(&ev).trim().parse().unwrap_or(0);
                        form.update(|f| f.set_duration(minutes));
                    }
                />
            </div>
            <LocationPicker form=form lookups=lookups />
            <div class="modal-footer">
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| close()>"Cancel"</Button>
                <Button appearance=ButtonAppearance::Primary on_click=save>"Save Template"</Button>
            </div>
        </Modal>
    }
}

/// Mode tabs (POI / checkpoint / zone) plus the matching select.
#[component]
pub fn LocationPicker(form: RwSignal<TaskDraft>, lookups: StoredValue<Lookups>) -> impl IntoView {
    view! {
        <div class="form__group">
            <label class="form__label">"Location"</label>
            <div class="segmented">
                {LocationMode::all().into_iter().map(|mode| view! {
                    <button
                        type="button"
                        class="segmented__item"
                        class:segmented__item--active=move || form.with(|f| f.location_mode == mode)
                        on:click=move |_| form.update(|f| f.select_location(mode, None))
                    >
                        {mode.display_name()}
                    </button>
                }).collect_view()}
            </div>
            <select
                class="form__select"
                prop:value=move || form.with(|f| f.location_id.map(|id| id.to_string()).unwrap_or_default())
                on:change=move |ev| {
                    let id = event_target_value(&ev).parse::<EntityId>().ok();
                    form.update(|f| f.select_location(f.location_mode, id));
                }
            >
                <option value="">"Select location"</option>
                {move || {
                    let mode = form.with(|f| f.location_mode);
                    lookups.with_value(|l| l.location_options(mode)).into_iter().map(|(id, label)| view! {
                        <option value=id>{label}</option>
                    }).collect_view()
                }}
            </select>
        </div>
    }
}
