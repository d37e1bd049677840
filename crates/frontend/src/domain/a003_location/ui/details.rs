use crate::shared::data::load_list;
use crate::shared::date_utils::today_iso;
use crate::shared::form_fields::{form_error, text_field};
use crate::shared::modal::Modal;
use contracts::domain::a003_location::{Location, LocationDto};
use contracts::domain::a004_contract::Contract;
use contracts::shared::EntityId;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn LocationDetails(
    dto: LocationDto,
    on_saved: Callback<Location>,
    on_cancel: Callback<()>,
    next_id: Callback<(), EntityId>,
) -> impl IntoView {
    let is_edit = dto.id.is_some();
    let form = RwSignal::new(dto);
    let error = RwSignal::new(None::<String>);
    let contracts: Vec<Contract> = load_list::<Contract>(error)
        .into_iter()
        .filter(|c| c.status.is_active())
        .collect();

    let save = move |_| {
        let dto = form.get_untracked();
        let id = dto.id.unwrap_or_else(|| next_id.run(()));
        match Location::from_dto(id, &dto, Some(today_iso())) {
            Ok(location) => on_saved.run(location),
            Err(e) => error.set(Some(e.to_string())),
        }
    };

    view! {
        <Modal
            title=if is_edit { "Edit Location".to_string() } else { "Add Location".to_string() }
            on_close=on_cancel
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
            {text_field(form, "Building", |f| f.building.clone(), |f, v| f.building = v)}
            <div class="form__row">
                {text_field(form, "Level", |f| f.level.clone(), |f, v| f.level = v)}
                {text_field(form, "X", |f| f.x.clone(), |f, v| f.x = v)}
                {text_field(form, "Y", |f| f.y.clone(), |f, v| f.y = v)}
            </div>
            <div class="modal-footer">
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_cancel.run(())>"Cancel"</Button>
                <Button appearance=ButtonAppearance::Primary on_click=save>
                    {if is_edit { "Save Changes" } else { "Add Location" }}
                </Button>
            </div>
        </Modal>
    }
}
