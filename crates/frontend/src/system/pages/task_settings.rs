use crate::domain::a003_location::ui::LocationList;
use crate::domain::a006_task_category::ui::TaskCategoryList;
use crate::domain::a007_task_template::ui::TaskTemplateList;
use crate::domain::a008_checkpoint::ui::CheckpointList;
use crate::domain::a009_location_zone::ui::ZoneList;
use crate::domain::a010_document::ui::DocumentList;
use crate::shared::components::PageHeader;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_SYSTEM;
use crate::system::auth::use_auth;
use contracts::system::access::{PermissionLevel, TaskSettingsPermissions, TaskSettingsSection};
use leptos::prelude::*;

/// Sections the role can see, with whether each is read-only.
fn visible_sections(permissions: &TaskSettingsPermissions) -> Vec<(TaskSettingsSection, bool)> {
    TaskSettingsSection::ALL
        .into_iter()
        .map(|s| (s, permissions.get(s)))
        .filter(|(_, level)| level.can_view())
        .map(|(s, level)| (s, !level.can_manage()))
        .collect()
}

fn section_view(section: TaskSettingsSection, read_only: bool) -> AnyView {
    match section {
        TaskSettingsSection::Templates => view! { <TaskTemplateList read_only=read_only embedded=true /> }.into_any(),
        TaskSettingsSection::Categories => view! { <TaskCategoryList read_only=read_only embedded=true /> }.into_any(),
        TaskSettingsSection::CustomPoi => view! { <LocationList read_only=read_only embedded=true /> }.into_any(),
        TaskSettingsSection::Checkpoints => view! { <CheckpointList read_only=read_only embedded=true /> }.into_any(),
        TaskSettingsSection::Zones => view! { <ZoneList read_only=read_only embedded=true /> }.into_any(),
        TaskSettingsSection::Documents => view! { <DocumentList read_only=read_only embedded=true /> }.into_any(),
    }
}

/// Every task-related list on one page, gated per section by the
/// task-permission matrix.
#[component]
#[allow(non_snake_case)]
pub fn TaskSettingsPage() -> impl IntoView {
    let session = use_auth();
    let sections = Memo::new(move |_| {
        let Some(role) = session.role() else {
            return Vec::new();
        };
        session.access.with(|a| visible_sections(&a.task_settings_permissions(role)))
    });

    view! {
        <PageFrame page_id="task_settings--system" category=PAGE_CAT_SYSTEM>
            <PageHeader title="Task Settings".to_string() subtitle="Templates, categories, locations and documents".to_string()>
                {()}
            </PageHeader>
            {move || {
                let sections = sections.get();
                if sections.is_empty() {
                    return view! {
                        <div class="empty-state">"No task settings are available for your role."</div>
                    }
                    .into_any();
                }
                sections
                    .into_iter()
                    .map(|(section, read_only)| view! {
                        <section class="settings-section" id=format!("task-settings-{}", section.code())>
                            <div class="settings-section__header">
                                <h3>{section.display_name()}</h3>
                                {read_only.then(|| view! {
                                    <span class="settings-section__badge">{PermissionLevel::View.display_name()}</span>
                                })}
                            </div>
                            {section_view(section, read_only)}
                        </section>
                    })
                    .collect_view()
                    .into_any()
            }}
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::system::access::AccessLevel;

    #[test]
    fn test_hidden_sections_are_dropped() {
        let frontline = TaskSettingsPermissions::for_access_level(AccessLevel::Frontline);
        let sections = visible_sections(&frontline);
        assert_eq!(sections.len(), TaskSettingsSection::ALL.len() - 1);
        assert!(sections.iter().all(|(s, _)| *s != TaskSettingsSection::Documents));
        assert!(sections.iter().all(|(_, read_only)| *read_only));
    }

    #[test]
    fn test_manage_is_editable() {
        let mut permissions = TaskSettingsPermissions::uniform(PermissionLevel::Hidden);
        permissions.set(TaskSettingsSection::Zones, PermissionLevel::Manage);
        assert_eq!(visible_sections(&permissions), vec![(TaskSettingsSection::Zones, false)]);
    }
}
