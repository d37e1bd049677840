//! Settings menu and the sub-pages it opens. The open sub-page lives in
//! [`AppGlobalContext::settings_view`](crate::layout::global_context::AppGlobalContext).

use super::task_settings::TaskSettingsPage;
use crate::domain::a003_location::ui::LocationList;
use crate::domain::a004_contract::ui::ContractList;
use crate::domain::a005_service::ui::ServiceList;
use crate::domain::a006_task_category::ui::TaskCategoryList;
use crate::domain::a007_task_template::ui::TaskTemplateList;
use crate::domain::a008_checkpoint::ui::CheckpointList;
use crate::layout::global_context::{use_global_context, SettingsView};
use crate::shared::components::PageHeader;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_SYSTEM;
use crate::system::access::{AccessControl, UserRoles};
use crate::system::auth::{use_auth, RequireRole};
use contracts::system::access::policy::{
    can_manage_access_control, can_manage_reference_data, can_manage_user_roles, can_view_contracts,
    settings_groups, SettingsGroup,
};
use contracts::system::auth::SessionRole;
use leptos::prelude::*;

fn group_items(group: SettingsGroup) -> &'static [SettingsView] {
    match group {
        SettingsGroup::System => &[SettingsView::UserRoles, SettingsView::AccessControl],
        SettingsGroup::Contract => &[SettingsView::Contracts, SettingsView::Services, SettingsView::Locations],
        SettingsGroup::Task => &[
            SettingsView::TaskCategories,
            SettingsView::TaskTemplates,
            SettingsView::Checkpoints,
            SettingsView::TaskSettings,
        ],
    }
}

/// Role check guarding a sub-page opened directly by its view code.
fn view_guard(view: SettingsView) -> fn(SessionRole) -> bool {
    match view {
        SettingsView::AccessControl => can_manage_access_control,
        SettingsView::UserRoles => can_manage_user_roles,
        SettingsView::Contracts | SettingsView::Services => can_view_contracts,
        _ => can_manage_reference_data,
    }
}

fn view_description(view: SettingsView) -> &'static str {
    match view {
        SettingsView::Menu => "",
        SettingsView::AccessControl => "Page visibility and task permissions per role",
        SettingsView::UserRoles => "Create and edit named roles",
        SettingsView::Contracts => "Service contracts and validity",
        SettingsView::Services => "Services offered under contracts",
        SettingsView::Locations => "Points of interest for tasks",
        SettingsView::TaskCategories => "Categories and subcategories",
        SettingsView::TaskTemplates => "Reusable task presets",
        SettingsView::Checkpoints => "Checkpoints and their zones",
        SettingsView::TaskSettings => "All task settings on one page",
    }
}

#[component]
#[allow(non_snake_case)]
pub fn SettingsPage() -> impl IntoView {
    let ctx = use_global_context();

    move || match ctx.settings_view.get() {
        SettingsView::Menu => view! { <SettingsMenu /> }.into_any(),
        view => view! { <SettingsSubPage view=view /> }.into_any(),
    }
}

#[component]
#[allow(non_snake_case)]
fn SettingsMenu() -> impl IntoView {
    let ctx = use_global_context();
    let session = use_auth();
    let groups = move || session.role().map(settings_groups).unwrap_or_default();

    view! {
        <PageFrame page_id="settings--system" category=PAGE_CAT_SYSTEM>
            <PageHeader title="Settings".to_string() subtitle="System, contract and task configuration".to_string()>
                {()}
            </PageHeader>
            {move || groups().into_iter().map(|group| view! {
                <section class="settings-group">
                    <h3 class="settings-group__title">{group.display_name()}</h3>
                    <div class="settings-grid">
                        {group_items(group).iter().map(|&item| view! {
                            <button type="button" class="settings-item" on:click=move |_| ctx.open_settings(item)>
                                <span class="settings-item__name">{item.display_name()}</span>
                                <span class="settings-item__desc">{view_description(item)}</span>
                                {icon("chevron-right")}
                            </button>
                        }).collect_view()}
                    </div>
                </section>
            }).collect_view()}
        </PageFrame>
    }
}

#[component]
#[allow(non_snake_case)]
fn SettingsSubPage(view: SettingsView) -> impl IntoView {
    let ctx = use_global_context();

    let body = move || match view {
        SettingsView::AccessControl => view! {
            <PageFrame page_id="access_control--system" category=PAGE_CAT_SYSTEM>
                <AccessControl />
            </PageFrame>
        }
        .into_any(),
        SettingsView::UserRoles => view! {
            <PageFrame page_id="user_roles--system" category=PAGE_CAT_SYSTEM>
                <UserRoles />
            </PageFrame>
        }
        .into_any(),
        SettingsView::Contracts => view! { <ContractList /> }.into_any(),
        SettingsView::Services => view! { <ServiceList /> }.into_any(),
        SettingsView::Locations => view! { <LocationList /> }.into_any(),
        SettingsView::TaskCategories => view! { <TaskCategoryList /> }.into_any(),
        SettingsView::TaskTemplates => view! { <TaskTemplateList /> }.into_any(),
        SettingsView::Checkpoints => view! { <CheckpointList /> }.into_any(),
        SettingsView::TaskSettings => view! { <TaskSettingsPage /> }.into_any(),
        SettingsView::Menu => view! { <></> }.into_any(),
    };

    view! {
        <div class="settings-back">
            <a class="link" on:click=move |_| ctx.open_settings(SettingsView::Menu)>
                {icon("chevron-left")}
                " Back to settings"
            </a>
        </div>
        <RequireRole allowed=view_guard(view)>
            {body()}
        </RequireRole>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_sub_page_is_in_one_group() {
        let groups = [SettingsGroup::System, SettingsGroup::Contract, SettingsGroup::Task];
        for view in SettingsView::all().into_iter().filter(|v| *v != SettingsView::Menu) {
            let hits = groups.iter().filter(|g| group_items(**g).contains(&view)).count();
            assert_eq!(hits, 1, "{} listed {} times", view.code(), hits);
        }
    }

    #[test]
    fn test_menu_items_match_their_guard() {
        for role in SessionRole::all() {
            for group in settings_groups(role) {
                for view in group_items(group) {
                    assert!(view_guard(*view)(role), "{} offered {} it cannot open", role.code(), view.code());
                }
            }
        }
    }

    #[test]
    fn test_access_pages_are_admin_only() {
        assert!(view_guard(SettingsView::AccessControl)(SessionRole::SystemAdmin));
        assert!(!view_guard(SettingsView::AccessControl)(SessionRole::Manager));
        assert!(!view_guard(SettingsView::UserRoles)(SessionRole::ManagerLicensee));
    }
}
