use crate::domain::a007_task_template::ui::LocationPicker;
use crate::layout::global_context::use_global_context;
use crate::shared::data::report;
use crate::shared::date_utils::now;
use crate::shared::form_fields::{form_error, input_field, text_field};
use crate::shared::lookups::Lookups;
use crate::shared::modal::Modal;
use crate::shared::storage::BrowserStore;
use contracts::domain::a001_task::form::RecurrenceKind;
use contracts::domain::a001_task::TaskDraft;
use contracts::domain::a006_task_category::aggregate::subcategories_of;
use contracts::shared::EntityId;
use contracts::usecases::u001_save_task::{SaveTask, SaveTaskRequest, SaveTaskResponse};
use contracts::usecases::u002_save_inline_template::{SaveInlineTemplate, SAVED_MESSAGE};
use leptos::prelude::*;
use thaw::*;

/// Create/edit modal of the task page.
#[component]
pub fn TaskForm(
    draft: TaskDraft,
    lookups: StoredValue<Lookups>,
    on_saved: Callback<SaveTaskResponse>,
    on_close: Callback<()>,
) -> impl IntoView {
    let ctx = use_global_context();
    let is_edit = draft.is_edit_mode();
    let form = RwSignal::new(draft);
    let error = RwSignal::new(None::<String>);
    let staff_query = RwSignal::new(String::new());

    let save = move |_| {
        let request = SaveTaskRequest { draft: form.get_untracked() };
        match SaveTask::execute(&BrowserStore, &request, now()) {
            Ok(response) => on_saved.run(response),
            Err(e) if e.is_validation() => error.set(Some(e.message)),
            Err(e) => report(error, e),
        }
    };

    let save_template = move |_| {
        match SaveInlineTemplate::execute(&BrowserStore, &form.get_untracked(), now()) {
            Ok(_) => ctx.notify(SAVED_MESSAGE),
            Err(e) => report(error, e),
        }
    };

    let subcategory_options = move || {
        let category = form.with(|f| f.category_id);
        lookups.with_value(|l| category.map(|c| subcategories_of(&l.subcategories, c)).unwrap_or_default())
    };

    let staff_options = move || {
        let query = staff_query.get().trim().to_lowercase();
        lookups.with_value(|l| {
            l.staff
                .iter()
                .filter(|s| query.is_empty() || s.name.to_lowercase().contains(&query))
                .map(|s| (s.id, s.name.clone()))
                .collect::<Vec<_>>()
        })
    };

    view! {
        <Modal
            title=if is_edit { "Edit Task".to_string() } else { "Add New Task".to_string() }
            on_close=on_close
            wide=true
        >
            {form_error(error)}
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
                    <label class="form__label">"Subcategory"</label>
                    <select
                        class="form__select"
                        prop:value=move || form.with(|f| f.subcategory_id.map(|id| id.to_string()).unwrap_or_default())
                        on:change=move |ev| {
                            let id = event_target_value(&ev).parse::<EntityId>().ok();
                            let label = lookups.with_value(|l| {
                                id.and_then(|id| l.subcategories.iter().find(|s| s.id == id).map(|s| s.name.clone()))
                            });
                            form.update(|f| f.select_subcategory(id, label.unwrap_or_default()));
                        }
                    >
                        <option value="">"Select subcategory"</option>
                        {move || subcategory_options().into_iter().map(|s| view! {
                            <option value=s.id.to_string()>{s.name}</option>
                        }).collect_view()}
                    </select>
                </div>
            </div>
            {text_field(form, "Task Name *", |f| f.name.clone(), |f, v| f.name = v)}
            <div class="form__row">
                {input_field(form, "Start Time *", "datetime-local", |f| f.start_time.clone(), |f, v| f.set_start_time(v))}
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
                {input_field(form, "End Time *", "datetime-local", |f| f.end_time.clone(), |f, v| f.end_time = v)}
            </div>
            <LocationPicker form=form lookups=lookups />
            {move || {
                let kept = form.with(|f| (f.location_id.is_none() && !f.location_label.is_empty()).then(|| f.location_label.clone()));
                kept.map(|label| view! { <div class="form__hint">{format!("Current location: {}", label)}</div> })
            }}
            <div class="form__group">
                <label class="form__label">"Features"</label>
                <label class="filter-toggle">
                    <input
                        type="checkbox"
                        prop:checked=move || form.with(|f| f.features.photo_evidence)
                        on:change=move |ev| {
                            let checked = event_target_checked(&ev);
                            form.update(|f| f.features.photo_evidence = checked);
                        }
                    />
                    <span>"Photo evidence required"</span>
                </label>
                <label class="filter-toggle">
                    <input
                        type="checkbox"
                        prop:checked=move || form.with(|f| f.features.early_complete)
                        on:change=move |ev| {
                            let checked = event_target_checked(&ev);
                            form.update(|f| f.features.early_complete = checked);
                        }
                    />
                    <span>"Allow early completion"</span>
                </label>
            </div>
            <div class="form__group">
                <label class="form__label">"Document"</label>
                <select
                    class="form__select"
                    prop:value=move || form.with(|f| f.document_id.map(|id| id.to_string()).unwrap_or_default())
                    on:change=move |ev| {
                        let id = event_target_value(&ev).parse::<EntityId>().ok();
                        form.update(|f| f.document_id = id);
                    }
                >
                    <option value="">"No document"</option>
                    {lookups.with_value(|l| l.documents.iter().map(|d| view! {
                        <option value=d.id.to_string()>{format!("{} ({})", d.filename, d.category_name)}</option>
                    }).collect_view())}
                </select>
            </div>
            <div class="form__group">
                <label class="form__label">
                    {if is_edit { "Assigned Staff" } else { "Assign Staff (one task per person)" }}
                </label>
                <div class="list-toolbar">
                    <input
                        class="search-input"
                        type="search"
                        placeholder="Search staff..."
                        prop:value=move || staff_query.get()
                        on:input=move |ev| staff_query.set(event_target_value(&ev))
                    />
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| form.update(|f| f.clear_assignees())>
                        "Clear"
                    </Button>
                </div>
                <div class="staff-pick-list">
                    {move || staff_options().into_iter().map(|(id, name)| view! {
                        <label class="filter-toggle">
                            <input
                                type=if is_edit { "radio" } else { "checkbox" }
                                prop:checked=move || form.with(|f| f.assignees.contains(&id))
                                on:change=move |_| form.update(|f| f.toggle_assignee(id))
                            />
                            <span>{name}</span>
                        </label>
                    }).collect_view()}
                </div>
            </div>
            {(!is_edit).then(|| view! {
                <div class="form__row">
                    <div class="form__group">
                        <label class="form__label">"Repeat"</label>
                        <select
                            class="form__select"
                            prop:value=move || form.with(|f| f.recurrence_kind.map(|k| k.code()).unwrap_or_default())
                            on:change=move |ev| {
                                let kind = RecurrenceKind::from_code(&event_target_value(&ev));
                                form.update(|f| f.recurrence_kind = kind);
                            }
                        >
                            <option value="">"Does not repeat"</option>
                            {[RecurrenceKind::Hourly, RecurrenceKind::Daily].into_iter().map(|k| view! {
                                <option value=k.code()>{k.display_name()}</option>
                            }).collect_view()}
                        </select>
                    </div>
                    <Show when=move || form.with(|f| f.recurrence_kind.is_some())>
                        <div class="form__group">
                            <label class="form__label">"Every"</label>
                            <input
                                class="form__input"
                                type="number"
                                min="1"
                                prop:value=move || form.with(|f| f.recurrence_interval.to_string())
                                on:input=move |ev| {
                                    let interval = event_target_value(&ev).trim().parse().unwrap_or(0);
                                    form.update(|f| f.recurrence_interval = interval);
                                }
                            />
                        </div>
                        {input_field(form, "Until", "datetime-local", |f| f.recurrence_until.clone(), |f, v| f.recurrence_until = v)}
                    </Show>
                </div>
            })}
            <div class="modal-footer">
                <Button appearance=ButtonAppearance::Secondary on_click=save_template>"Save as Template"</Button>
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_close.run(())>"Cancel"</Button>
                <Button appearance=ButtonAppearance::Primary on_click=save>
                    {if is_edit { "Update Task" } else { "Create Task" }}
                </Button>
            </div>
        </Modal>
    }
}
