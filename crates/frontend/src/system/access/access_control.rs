use crate::layout::global_context::use_global_context;
use crate::shared::components::{ErrorBanner, PageHeader};
use crate::shared::data::{report, Banner};
use crate::shared::icons::icon;
use crate::shared::storage::BrowserStore;
use crate::system::auth::use_auth;
use contracts::system::access::matrix_draft::AccessMatrixDraft;
use contracts::system::access::{PageKey, PermissionLevel, TaskSettingsSection};
use leptos::prelude::*;
use thaw::*;

/// Page visibility and task-settings permissions per role. Edits stay in a
/// draft until saved.
#[component]
#[allow(non_snake_case)]
pub fn AccessControl() -> impl IntoView {
    let ctx = use_global_context();
    let session = use_auth();
    let banner: Banner = RwSignal::new(None);

    let fresh_draft = move || {
        session.access.with_untracked(|a| {
            AccessMatrixDraft::new(a.roles(), a.page_matrix(), a.task_permission_matrix())
        })
    };
    let draft = RwSignal::new(fresh_draft());
    let roles = move || session.access.with(|a| a.roles().to_vec());

    let save = move |_| {
        let mut current = draft.get_untracked();
        match current.commit(&BrowserStore) {
            Ok(message) => {
                banner.set(None);
                session.reload_access();
                draft.set(fresh_draft());
                ctx.notify(message);
            }
            Err(e) => report(banner, e),
        }
    };
    let discard = move |_| draft.set(fresh_draft());

    view! {
        <PageHeader title="Access Control".to_string() subtitle="Which pages and task settings each role can use".to_string()>
            <Button appearance=ButtonAppearance::Secondary on_click=discard disabled=Signal::derive(move || !draft.with(|d| d.is_dirty()))>
                "Discard"
            </Button>
            <Button appearance=ButtonAppearance::Primary on_click=save>
                {icon("check")}
                " Save"
            </Button>
        </PageHeader>
        <ErrorBanner banner=banner />
        <div class="detail-card">
            <h3 class="detail-card__title">"Page Visibility"</h3>
            <div class="matrix-scroll">
                <table class="matrix-table">
                    <thead>
                        <tr>
                            <th>"Role"</th>
                            {PageKey::ORDER.into_iter().map(|p| view! { <th>{p.display_name()}</th> }).collect_view()}
                        </tr>
                    </thead>
                    <tbody>
                        {move || roles().into_iter().map(|role| {
                            let role_id = role.id;
                            view! {
                                <tr>
                                    <td class="matrix-table__role">{role.name}</td>
                                    {PageKey::ORDER.into_iter().map(|page| view! {
                                        <td class="matrix-table__cell">
                                            <input
                                                type="checkbox"
                                                prop:checked=move || draft.with(|d| d.page(role_id, page))
                                                on:change=move |ev| {
                                                    let visible = event_target_checked(&ev);
                                                    draft.update(|d| d.set_page(role_id, page, visible));
                                                }
                                            />
                                        </td>
                                    }).collect_view()}
                                </tr>
                            }
                        }).collect_view()}
                    </tbody>
                </table>
            </div>
        </div>
        <div class="detail-card">
            <h3 class="detail-card__title">"Task Settings Permissions"</h3>
            <div class="matrix-scroll">
                <table class="matrix-table">
                    <thead>
                        <tr>
                            <th>"Role"</th>
                            {TaskSettingsSection::ALL.into_iter().map(|s| view! { <th>{s.display_name()}</th> }).collect_view()}
                        </tr>
                    </thead>
                    <tbody>
                        {move || roles().into_iter().map(|role| {
                            let role_id = role.id;
                            view! {
                                <tr>
                                    <td class="matrix-table__role">{role.name}</td>
                                    {TaskSettingsSection::ALL.into_iter().map(|section| view! {
                                        <td class="matrix-table__cell">
                                            <select
                                                class="form__select form__select--compact"
                                                prop:value=move || draft.with(|d| d.permission(role_id, section).code().to_string())
                                                on:change=move |ev| {
                                                    if let Some(level) = PermissionLevel::from_code(&event_target_value(&ev)) {
                                                        draft.update(|d| d.set_permission(role_id, section, level));
                                                    }
                                                }
                                            >
                                                {PermissionLevel::all().into_iter().map(|l| view! {
                                                    <option value=l.code()>{l.display_name()}</option>
                                                }).collect_view()}
                                            </select>
                                        </td>
                                    }).collect_view()}
                                </tr>
                            }
                        }).collect_view()}
                    </tbody>
                </table>
            </div>
        </div>
        <Show when=move || draft.with(|d| d.is_dirty())>
            <div class="warning-box">
                <span class="warning-box__text">"You have unsaved changes."</span>
            </div>
        </Show>
    }
}
