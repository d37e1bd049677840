use crate::layout::global_context::use_global_context;
use crate::shared::components::{ErrorBanner, PageHeader, PaginationControls, RecordStatusBadge, ToneBadge};
use crate::shared::config::use_config;
use crate::shared::date_utils::{format_date_str, today_iso};
use crate::shared::form_fields::{form_error, status_field, text_field};
use crate::shared::icons::icon;
use crate::shared::list_state::{text_matches, ListState};
use crate::shared::list_utils::highlight_matches;
use crate::shared::modal::Modal;
use crate::system::auth::use_auth;
use contracts::shared::{EntityId, StatusTone, ValidationError};
use contracts::system::access::{AccessLevel, Role, RoleDto};
use leptos::prelude::*;
use thaw::*;

/// Apply the form to the existing role, or build a new one.
fn role_from_form(existing: Option<Role>, dto: &RoleDto, next_id: EntityId, created: String) -> Result<Role, ValidationError> {
    match existing {
        Some(mut role) => {
            role.update(dto);
            role.validate()?;
            Ok(role)
        }
        None => Role::from_dto(next_id, dto, created),
    }
}

fn level_tone(level: AccessLevel) -> StatusTone {
    match level {
        AccessLevel::SystemAdmin => StatusTone::Brand,
        AccessLevel::Manager => StatusTone::Informative,
        AccessLevel::Frontline => StatusTone::Subtle,
    }
}

#[component]
#[allow(non_snake_case)]
pub fn UserRoles() -> impl IntoView {
    let ctx = use_global_context();
    let session = use_auth();
    let page_size = use_config().task_settings_page_size;
    let state = ListState::<Role>::load();
    let editing = RwSignal::new(None::<RoleDto>);

    let page = Memo::new(move |_| {
        state.visible(page_size, |r, q| text_matches(&r.name, q) || text_matches(r.access_level.display_name(), q))
    });

    let delete = move |id: EntityId| {
        if state.delete(id) {
            session.reload_access();
            ctx.notify("Role deleted.");
        }
    };

    view! {
        <PageHeader title="User Roles".to_string() subtitle="Named roles and their access level".to_string()>
            <Button appearance=ButtonAppearance::Primary on_click=move |_| editing.set(Some(RoleDto::default()))>
                {icon("plus")}
                " Add Role"
            </Button>
        </PageHeader>
        <ErrorBanner banner=state.banner />
        <div class="list-toolbar">
            <input
                class="search-input"
                type="search"
                placeholder="Search roles..."
                prop:value=move || state.query.get()
                on:input=move |ev| state.set_query(event_target_value(&ev))
            />
        </div>
        <Table>
            <TableHeader>
                <TableRow>
                    <TableHeaderCell>"Role"</TableHeaderCell>
                    <TableHeaderCell>"Access Level"</TableHeaderCell>
                    <TableHeaderCell>"Status"</TableHeaderCell>
                    <TableHeaderCell>"Created"</TableHeaderCell>
                    <TableHeaderCell>"Actions"</TableHeaderCell>
                </TableRow>
            </TableHeader>
            <TableBody>
                {move || {
                    let query = state.query.get();
                    page.get().0.into_iter().map(|r| {
                        let id = r.id;
                        let dto = RoleDto::from(&r);
                        let highlighted = highlight_matches(&r.name, &query);
                        view! {
                            <TableRow>
                                <TableCell><TableCellLayout>{highlighted}</TableCellLayout></TableCell>
                                <TableCell><ToneBadge tone=level_tone(r.access_level) text=r.access_level.display_name() /></TableCell>
                                <TableCell><RecordStatusBadge status=r.status /></TableCell>
                                <TableCell>{format_date_str(&r.created_date)}</TableCell>
                                <TableCell>
                                    <div class="table-actions">
                                        <button class="button button--icon" title="Edit" on:click=move |_| editing.set(Some(dto.clone()))>
                                            {icon("edit")}
                                        </button>
                                        <button class="button button--icon button--danger" title="Delete" on:click=move |_| delete(id)>
                                            {icon("delete")}
                                        </button>
                                    </div>
                                </TableCell>
                            </TableRow>
                        }
                    }).collect_view()
                }}
            </TableBody>
        </Table>
        <PaginationControls
            window=Signal::derive(move || page.get().1)
            on_page_change=Callback::new(move |p| state.page.set(p))
        />
        {move || editing.get().map(|dto| view! { <RoleForm dto=dto state=state editing=editing /> })}
    }
}

#[component]
#[allow(non_snake_case)]
fn RoleForm(dto: RoleDto, state: ListState<Role>, editing: RwSignal<Option<RoleDto>>) -> impl IntoView {
    let ctx = use_global_context();
    let session = use_auth();
    let is_edit = dto.id.is_some();
    let form = RwSignal::new(dto);
    let error = RwSignal::new(None::<String>);

    let save = move |_| {
        let dto = form.get_untracked();
        let existing = dto.id.and_then(|id| state.find(id));
        match role_from_form(existing, &dto, state.next_id(), today_iso()) {
            Ok(role) => {
                let name = role.name.clone();
                if state.upsert(role) {
                    editing.set(None);
                    session.reload_access();
                    ctx.notify(format!("Role \"{}\" saved.", name));
                }
            }
            Err(e) => error.set(Some(e.to_string())),
        }
    };

    view! {
        <Modal
            title=if is_edit { "Edit Role".to_string() } else { "Add Role".to_string() }
            on_close=Callback::new(move |_| editing.set(None))
        >
            {form_error(error)}
            {text_field(form, "Role Name *", |f| f.name.clone(), |f, v| f.name = v)}
            <div class="form__group">
                <label class="form__label">"Access Level"</label>
                <select
                    class="form__select"
                    prop:value=move || form.with(|f| f.access_level.code().to_string())
                    on:change=move |ev| {
                        if let Some(level) = AccessLevel::from_code(&event_target_value(&ev)) {
                            form.update(|f| f.access_level = level);
                        }
                    }
                >
                    {AccessLevel::all().into_iter().map(|l| view! {
                        <option value=l.code()>{l.display_name()}</option>
                    }).collect_view()}
                </select>
            </div>
            {status_field(form, |f| f.status, |f, s| f.status = s)}
            <div class="modal-footer">
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| editing.set(None)>"Cancel"</Button>
                <Button appearance=ButtonAppearance::Primary on_click=save>
                    {if is_edit { "Save Changes" } else { "Add Role" }}
                </Button>
            </div>
        </Modal>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::common::AggregateRoot;

    #[test]
    fn test_role_from_form_creates_with_next_id() {
        let dto = RoleDto {
            name: "  Night Supervisor ".to_string(),
            access_level: AccessLevel::Manager,
            ..RoleDto::default()
        };
        let role = role_from_form(None, &dto, EntityId(7), "2025-08-09".to_string()).unwrap();
        assert_eq!(role.id, EntityId(7));
        assert_eq!(role.name, "Night Supervisor");
        assert_eq!(role.created_date, "2025-08-09");
    }

    #[test]
    fn test_role_from_form_keeps_id_and_created_date() {
        let existing = Role::seed().remove(0);
        let mut dto = RoleDto::from(&existing);
        dto.access_level = AccessLevel::Frontline;
        let role = role_from_form(Some(existing.clone()), &dto, EntityId(99), "2030-01-01".to_string()).unwrap();
        assert_eq!(role.id, existing.id);
        assert_eq!(role.created_date, existing.created_date);
        assert_eq!(role.access_level, AccessLevel::Frontline);
    }

    #[test]
    fn test_role_from_form_requires_name() {
        let dto = RoleDto::default();
        assert_eq!(
            role_from_form(None, &dto, EntityId(1), String::new()),
            Err(ValidationError::RequiredFields)
        );
    }
}
