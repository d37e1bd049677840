use crate::shared::data::load_list;
use crate::shared::form_fields::{form_error, input_field, text_field};
use crate::shared::modal::Modal;
use contracts::domain::a004_contract::{Contract, ContractDto};
use contracts::domain::a005_service::Service;
use contracts::shared::EntityId;
use leptos::prelude::*;
use thaw::*;

/// New contracts are always licensee contracts; editing keeps the flag.
#[component]
pub fn ContractDetails(
    dto: ContractDto,
    #[prop(into)] existing: Signal<Vec<Contract>>,
    on_saved: Callback<Contract>,
    on_cancel: Callback<()>,
    next_id: Callback<(), EntityId>,
) -> impl IntoView {
    let is_edit = dto.id.is_some();
    let form = RwSignal::new(dto);
    let error = RwSignal::new(None::<String>);
    let services: Vec<Service> = load_list::<Service>(error)
        .into_iter()
        .filter(|s| s.status.is_active())
        .collect();

    let save = move |_| {
        let dto = form.get_untracked();
        let current = dto
            .id
            .and_then(|id| existing.with_untracked(|all| all.iter().find(|c| c.id == id).cloned()));
        let result = match current {
            Some(mut contract) => contract.update(&dto).map(|_| contract),
            None => Contract::new_licensee(next_id.run(()), &dto),
        };
        match result {
            Ok(contract) => on_saved.run(contract),
            Err(e) => error.set(Some(e.to_string())),
        }
    };

    view! {
        <Modal
            title=if is_edit { "Edit Contract".to_string() } else { "Add Contract".to_string() }
            on_close=on_cancel
        >
            {form_error(error)}
            {text_field(form, "Contract Number *", |f| f.number.clone(), |f, v| f.number = v)}
            <div class="form__row">
                {input_field(form, "Start Date *", "date", |f| f.start_time.clone(), |f, v| f.start_time = v)}
                {input_field(form, "End Date *", "date", |f| f.end_time.clone(), |f, v| f.end_time = v)}
            </div>
            <div class="form__group">
                <label class="form__label">"Service Type"</label>
                <select
                    class="form__select"
                    prop:value=move || form.with(|f| f.service_type.clone())
                    on:change=move |ev| form.update(|f| f.service_type = event_target_value(&ev))
                >
                    <option value="">"Select service"</option>
                    {services.iter().map(|s| {
                        let code = s.name.to_lowercase();
                        view! { <option value=code>{s.name.clone()}</option> }
                    }).collect_view()}
                </select>
            </div>
            <div class="modal-footer">
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_cancel.run(())>"Cancel"</Button>
                <Button appearance=ButtonAppearance::Primary on_click=save>
                    {if is_edit { "Save Changes" } else { "Add Contract" }}
                </Button>
            </div>
        </Modal>
    }
}
