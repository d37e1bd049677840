use crate::shared::data::{or_report, Banner};
use crate::shared::modal::Modal;
use crate::shared::storage::BrowserStore;
use contracts::domain::a007_task_template::aggregate::load_inline_templates;
use contracts::domain::a007_task_template::TaskTemplate;
use leptos::prelude::*;

/// Quick templates saved from the task form, shown as cards.
#[component]
pub fn TemplatePicker(banner: Banner, on_pick: Callback<TaskTemplate>, on_close: Callback<()>) -> impl IntoView {
    let templates = or_report(banner, load_inline_templates(&BrowserStore), Vec::new);

    let cards = if templates.is_empty() {
        view! {
            <div class="empty-state">"No templates yet. Use \"Save as Template\" in the task form."</div>
        }
        .into_any()
    } else {
        view! {
            <div class="card-grid">
                {templates.into_iter().map(|t| {
                    let name = if t.name.is_empty() { "Untitled Task".to_string() } else { t.name.clone() };
                    let location = if t.location_display.is_empty() { "-".to_string() } else { t.location_display.clone() };
                    let summary = format!("{} / {}", t.category_label, t.subcategory_label);
                    let duration = format!("Duration: {}m", t.duration);
                    view! {
                        <div class="template-card" on:click=move |_| on_pick.run(t.clone())>
                            <div class="template-card__title">{name}</div>
                            <div class="template-card__line">{summary}</div>
                            <div class="template-card__line">{duration}</div>
                            <div class="template-card__line">{format!("Location: {}", location)}</div>
                        </div>
                    }
                }).collect_view()}
            </div>
        }
        .into_any()
    };

    view! {
        <Modal title="Choose a Template".to_string() on_close=on_close>
            {cards}
        </Modal>
    }
}
