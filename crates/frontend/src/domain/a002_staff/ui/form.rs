use crate::shared::data::load_list;
use crate::shared::form_fields::{form_error, status_field, text_field};
use crate::shared::list_state::ListState;
use crate::shared::modal::Modal;
use crate::system::auth::use_auth;
use contracts::domain::a002_staff::{Staff, StaffDto};
use contracts::domain::a004_contract::Contract;
use contracts::system::access::policy::assignable_staff_roles;
use contracts::system::auth::SessionRole;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn StaffForm(dto: StaffDto, state: ListState<Staff>, editing: RwSignal<Option<StaffDto>>) -> impl IntoView {
    let session = use_auth();
    let is_edit = dto.id.is_some();
    let form = RwSignal::new(dto);
    let error = RwSignal::new(None::<String>);
    let contracts: Vec<Contract> = load_list::<Contract>(error)
        .into_iter()
        .filter(|c| c.status.is_active())
        .collect();
    let mut roles = session.role_untracked().map(assignable_staff_roles).unwrap_or_default();
    // an edited member keeps a role the editor could not grant
    if let Some(current) = form.with_untracked(|f| f.role) {
        if !roles.contains(&current) {
            roles.push(current);
        }
    }

    let save = move |_| {
        let dto = form.get_untracked();
        let id = dto.id.unwrap_or_else(|| state.next_id());
        match Staff::from_dto(id, &dto) {
            Ok(staff) => {
                if state.upsert(staff) {
                    editing.set(None);
                }
            }
            Err(e) => error.set(Some(e.to_string())),
        }
    };

    view! {
        <Modal
            title=if is_edit { "Edit Staff".to_string() } else { "Add Staff".to_string() }
            on_close=Callback::new(move |_| editing.set(None))
        >
            {form_error(error)}
            {text_field(form, "Name *", |f| f.name.clone(), |f, v| f.name = v)}
            <div class="form__group">
                <label class="form__label">"Contract *"</label>
                <select
                    class="form__select"
                    prop:value=move || form.with(|f| f.contract.clone())
                    on:change=move |ev| form.update(|f| f.contract = event_target_value(&ev))
                >
                    <option value="">"Select contract"</option>
                    {contracts.iter().map(|c| view! {
                        <option value=c.number.clone()>{c.number.clone()}</option>
                    }).collect_view()}
                </select>
            </div>
            <div class="form__group">
                <label class="form__label">"Role *"</label>
                <select
                    class="form__select"
                    prop:value=move || form.with(|f| f.role.map(|r| r.code()).unwrap_or_default())
                    on:change=move |ev| {
                        let role = SessionRole::from_code(&event_target_value(&ev));
                        form.update(|f| f.role = role);
                    }
                >
                    <option value="">"Select role"</option>
                    {roles.into_iter().map(|r| view! {
                        <option value=r.code()>{r.display_name()}</option>
                    }).collect_view()}
                </select>
            </div>
            {text_field(form, "Team", |f| f.team.clone(), |f, v| f.team = v)}
            {status_field(form, |f| f.status, |f, v| f.status = v)}
            <div class="modal-footer">
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| editing.set(None)>"Cancel"</Button>
                <Button appearance=ButtonAppearance::Primary on_click=save>"Save"</Button>
            </div>
        </Modal>
    }
}
