use contracts::shared::{RecordStatus, StatusTone};
use leptos::prelude::*;
use thaw::*;

pub fn badge_color(tone: StatusTone) -> BadgeColor {
    match tone {
        StatusTone::Informative => BadgeColor::Informative,
        StatusTone::Brand => BadgeColor::Brand,
        StatusTone::Warning => BadgeColor::Warning,
        StatusTone::Success => BadgeColor::Success,
        StatusTone::Subtle => BadgeColor::Subtle,
        StatusTone::Important => BadgeColor::Important,
        StatusTone::Danger => BadgeColor::Danger,
    }
}

/// Tinted badge for any status that knows its tone.
#[component]
pub fn ToneBadge(tone: StatusTone, #[prop(into)] text: String) -> impl IntoView {
    view! {
        <Badge appearance=BadgeAppearance::Tint color=badge_color(tone)>
            {text}
        </Badge>
    }
}

/// Active / inactive badge of reference records.
#[component]
pub fn RecordStatusBadge(status: RecordStatus) -> impl IntoView {
    let tone = if status.is_active() { StatusTone::Success } else { StatusTone::Subtle };
    view! { <ToneBadge tone=tone text=status.display_name() /> }
}
