use crate::shared::lookups::Lookups;
use contracts::domain::a001_task::{TaskFilter, TaskStatus};
use contracts::shared::datetime::{format_date, parse_date};
use contracts::shared::EntityId;
use leptos::prelude::*;
use thaw::*;

fn date_value(date: Option<chrono::NaiveDate>) -> String {
    date.map(|d| format_date(&d)).unwrap_or_default()
}

/// Filter bar above the task cards. Every change goes through `on_change`
/// so the page can reset its paging.
#[component]
pub fn TaskFilterBar(
    filter: RwSignal<TaskFilter>,
    lookups: StoredValue<Lookups>,
    on_change: Callback<()>,
    on_clear: Callback<()>,
) -> impl IntoView {
    let change = move |f: Box<dyn FnOnce(&mut TaskFilter)>| {
        filter.update(f);
        on_change.run(());
    };

    let hide_toggle = move |label: &'static str, get: fn(&TaskFilter) -> bool, set: fn(&mut TaskFilter, bool)| {
        view! {
            <label class="filter-toggle">
                <input
                    type="checkbox"
                    prop:checked=move || filter.with(get)
                    on:change=move |ev| {
                        let checked = event_target_checked(&ev);
                        change(Box::new(move |f| set(f, checked)));
                    }
                />
                <span>{label}</span>
            </label>
        }
    };

    view! {
        <div class="filter-panel">
            <div class="filter-panel__row">
                <select
                    class="form__select"
                    prop:value=move || filter.with(|f| f.status.map(|s| s.code()).unwrap_or_default())
                    on:change=move |ev| {
                        let status = TaskStatus::from_code(&event_target_value(&ev));
                        change(Box::new(move |f| f.status = status));
                    }
                >
                    <option value="">"All statuses"</option>
                    {TaskStatus::all().into_iter().map(|s| view! {
                        <option value=s.code()>{s.display_name()}</option>
                    }).collect_view()}
                </select>
                <select
                    class="form__select"
                    prop:value=move || filter.with(|f| f.category.clone().unwrap_or_default())
                    on:change=move |ev| {
                        let category = Some(event_target_value(&ev)).filter(|c| !c.is_empty());
                        change(Box::new(move |f| f.category = category));
                    }
                >
                    <option value="">"All categories"</option>
                    {lookups.with_value(|l| l.categories.iter().filter(|c| c.parent_id.is_none()).map(|c| {
                        let value = c.name.to_lowercase();
                        view! { <option value=value>{c.name.clone()}</option> }
                    }).collect_view())}
                </select>
                <select
                    class="form__select"
                    prop:value=move || filter.with(|f| f.staff_id.map(|id| id.to_string()).unwrap_or_default())
                    on:change=move |ev| {
                        let staff_id = event_target_value(&ev).parse::<EntityId>().ok();
                        change(Box::new(move |f| f.staff_id = staff_id));
                    }
                >
                    <option value="">"All staff"</option>
                    {lookups.with_value(|l| l.staff.iter().map(|s| view! {
                        <option value=s.id.to_string()>{s.name.clone()}</option>
                    }).collect_view())}
                </select>
                <input
                    class="search-input"
                    type="search"
                    placeholder="Location..."
                    prop:value=move || filter.with(|f| f.location.clone().unwrap_or_default())
                    on:input=move |ev| {
                        let location = Some(event_target_value(&ev)).filter(|l| !l.trim().is_empty());
                        change(Box::new(move |f| f.location = location));
                    }
                />
            </div>
            <div class="filter-panel__row">
                <label class="form__label">"From"</label>
                <input
                    class="form__input"
                    type="date"
                    prop:value=move || filter.with(|f| date_value(f.date_from))
                    on:change=move |ev| {
                        let date = parse_date(&event_target_value(&ev));
                        change(Box::new(move |f| f.date_from = date));
                    }
                />
                <label class="form__label">"To"</label>
                <input
                    class="form__input"
                    type="date"
                    prop:value=move || filter.with(|f| date_value(f.date_to))
                    on:change=move |ev| {
                        let date = parse_date(&event_target_value(&ev));
                        change(Box::new(move |f| f.date_to = date));
                    }
                />
                {hide_toggle("Hide completed", |f| f.hide_completed, |f, v| f.hide_completed = v)}
                {hide_toggle("Hide cancelled", |f| f.hide_cancelled, |f, v| f.hide_cancelled = v)}
                {hide_toggle("Hide rejected", |f| f.hide_rejected, |f, v| f.hide_rejected = v)}
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_clear.run(())>
                    "Clear Filters"
                </Button>
            </div>
        </div>
    }
}
