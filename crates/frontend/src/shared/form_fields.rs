//! Labelled inputs bound to one field of a form signal.

use contracts::shared::RecordStatus;
use leptos::prelude::*;

/// `<input>` of the given type bound through a getter/setter pair.
pub fn input_field<T: Send + Sync + 'static>(
    form: RwSignal<T>,
    label: &'static str,
    input_type: &'static str,
    get: fn(&T) -> String,
    set: fn(&mut T, String),
) -> impl IntoView {
    view! {
        <div class="form__group">
            <label class="form__label">{label}</label>
            <input
                class="form__input"
                type=input_type
                prop:value=move || form.with(get)
                on:input=move |ev| form.update(|f| set(f, event_target_value(&ev)))
            />
        </div>
    }
}

pub fn text_field<T: Send + Sync + 'static>(
    form: RwSignal<T>,
    label: &'static str,
    get: fn(&T) -> String,
    set: fn(&mut T, String),
) -> impl IntoView {
    input_field(form, label, "text", get, set)
}

/// Red line at the top of a form.
pub fn form_error(error: RwSignal<Option<String>>) -> impl IntoView {
    move || error.get().map(|e| view! { <div class="warning-box warning-box--error">{e}</div> })
}

/// Active / inactive select.
pub fn status_field<T: Send + Sync + 'static>(
    form: RwSignal<T>,
    get: fn(&T) -> RecordStatus,
    set: fn(&mut T, RecordStatus),
) -> impl IntoView {
    view! {
        <div class="form__group">
            <label class="form__label">"Status"</label>
            <select
                class="form__select"
                prop:value=move || form.with(|f| get(f).code().to_string())
                on:change=move |ev| {
                    if let Some(status) = RecordStatus::from_code(&event_target_value(&ev)) {
                        form.update(|f| set(f, status));
                    }
                }
            >
                {RecordStatus::all().into_iter().map(|s| view! {
                    <option value=s.code()>{s.display_name()}</option>
                }).collect_view()}
            </select>
        </div>
    }
}
