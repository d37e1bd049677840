use leptos::prelude::*;

/// Dismissable error line shown above page content.
#[component]
pub fn ErrorBanner(banner: RwSignal<Option<String>>) -> impl IntoView {
    view! {
        {move || banner.get().map(|e| view! {
            <div class="warning-box warning-box--error">
                <span class="warning-box__icon">"⚠"</span>
                <span class="warning-box__text">{e}</span>
                <button class="warning-box__close" on:click=move |_| banner.set(None)>"×"</button>
            </div>
        })}
    }
}
