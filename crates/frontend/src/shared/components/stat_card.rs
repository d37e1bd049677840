use crate::shared::icons::icon;
use leptos::prelude::*;

/// Visual accent of a stat card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatAccent {
    #[default]
    Neutral,
    Success,
    Warning,
    Error,
}

impl StatAccent {
    fn class(&self) -> &'static str {
        match self {
            StatAccent::Neutral => "stat-card",
            StatAccent::Success => "stat-card stat-card--success",
            StatAccent::Warning => "stat-card stat-card--warning",
            StatAccent::Error => "stat-card stat-card--error",
        }
    }
}

#[component]
pub fn StatCard(
    /// Label displayed above the value
    #[prop(into)]
    label: String,
    /// Icon name from the icon() helper
    #[prop(into)]
    icon_name: String,
    #[prop(into)]
    value: Signal<usize>,
    #[prop(optional)]
    accent: StatAccent,
    #[prop(into, optional)]
    subtitle: MaybeProp<String>,
) -> impl IntoView {
    view! {
        <div class=accent.class()>
            <div class="stat-card__icon">
                {icon(&icon_name)}
            </div>
            <div class="stat-card__content">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">{move || value.get()}</div>
                {move || subtitle.get().map(|s| view! { <div class="stat-card__subtitle">{s}</div> })}
            </div>
        </div>
    }
}
