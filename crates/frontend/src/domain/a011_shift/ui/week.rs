use crate::shared::components::{ErrorBanner, PageHeader};
use crate::shared::data::{load_list, or_report, report, Banner};
use crate::shared::date_utils::today;
use crate::shared::icons::icon;
use crate::shared::modal::Modal;
use crate::shared::page_frame::PageFrame;
use crate::shared::storage::BrowserStore;
use chrono::NaiveDate;
use contracts::domain::a002_staff::aggregate::active_staff;
use contracts::domain::a002_staff::Staff;
use contracts::domain::a011_shift::week::{
    assign_shift, cell_text, clear_shift, day_header, load_shifts, next_week, prev_week, teams, week_days,
    week_label, week_start, ScheduleFilter, EMPTY_CELL,
};
use contracts::domain::a011_shift::{ShiftMap, ShiftTemplate};
use contracts::shared::storage::write_json;
use contracts::shared::{EntityId, StorageKey};
use leptos::prelude::*;
use thaw::*;

fn save_shifts(banner: Banner, shifts: RwSignal<ShiftMap>, change: impl FnOnce(&mut ShiftMap)) {
    let mut next = shifts.get_untracked();
    change(&mut next);
    match write_json(&BrowserStore, StorageKey::Shifts, &next) {
        Ok(()) => shifts.set(next),
        Err(e) => report(banner, e),
    }
}

/// Week grid of shifts: one row per active staff member, Monday first.
#[component]
#[allow(non_snake_case)]
pub fn ScheduleWeek() -> impl IntoView {
    let banner: Banner = RwSignal::new(None);
    let staff = StoredValue::new(active_staff(&load_list::<Staff>(banner)));
    let templates = StoredValue::new(
        load_list::<ShiftTemplate>(banner)
            .into_iter()
            .filter(|t| t.status.is_active())
            .collect::<Vec<_>>(),
    );
    let shifts = RwSignal::new(or_report(banner, load_shifts(&BrowserStore, today()), ShiftMap::new));
    let start = RwSignal::new(week_start(today()));
    let filter = RwSignal::new(ScheduleFilter::default());
    let selected_cell = RwSignal::new(None::<(EntityId, String, NaiveDate)>);
    let team_options = staff.with_value(|s| teams(s));

    view! {
        <PageFrame page_id="a011_shift--week" category="list">
            <PageHeader
                title="Schedule".to_string()
                subtitle=Signal::derive(move || Some(week_label(start.get())))
            >
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| start.update(|s| *s = prev_week(*s))>
                    {icon("chevron-left")}
                </Button>
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| start.set(week_start(today()))>
                    "Today"
                </Button>
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| start.update(|s| *s = next_week(*s))>
                    {icon("chevron-right")}
                </Button>
            </PageHeader>
            <ErrorBanner banner=banner />
            <div class="list-toolbar">
                <select
                    class="form__select"
                    on:change=move |ev| {
                        let team = event_target_value(&ev);
                        filter.update(|f| f.team = Some(team).filter(|t| !t.is_empty()));
                    }
                >
                    <option value="">"All teams"</option>
                    {team_options.into_iter().map(|t| view! { <option value=t.clone()>{t.clone()}</option> }).collect_view()}
                </select>
                <input
                    class="search-input"
                    type="search"
                    placeholder="Search staff..."
                    prop:value=move || filter.with(|f| f.query.clone())
                    on:input=move |ev| filter.update(|f| f.query = event_target_value(&ev))
                />
            </div>
            <div class="schedule-grid">
                <table class="table__data schedule-grid__table">
                    <thead>
                        <tr>
                            <th class="table__header-cell">"Staff"</th>
                            {move || week_days(start.get()).into_iter().map(|d| view! {
                                <th class="table__header-cell" class:schedule-grid__today={d == today()}>{day_header(d)}</th>
                            }).collect_view()}
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let days = week_days(start.get());
                            let current = filter.get();
                            let map = shifts.get();
                            let rows: Vec<Staff> = staff.with_value(|all| current.apply(all).into_iter().cloned().collect());
                            if rows.is_empty() {
                                return view! {
                                    <tr><td colspan="8" class="empty-state">"No staff match the filter"</td></tr>
                                }.into_any();
                            }
                            rows.into_iter().map(|s| {
                                let cells = days.iter().map(|&d| {
                                    let text = cell_text(&map, s.id, d);
                                    let empty = text == EMPTY_CELL;
                                    let (id, name) = (s.id, s.name.clone());
                                    view! {
                                        <td
                                            class="schedule-grid__cell"
                                            class:schedule-grid__cell--empty=empty
                                            on:click=move |_| selected_cell.set(Some((id, name.clone(), d)))
                                        >
                                            {text}
                                        </td>
                                    }
                                }).collect_view();
                                view! {
                                    <tr>
                                        <td class="schedule-grid__staff">
                                            <div>{s.name.clone()}</div>
                                            <div class="schedule-grid__team">{s.team.clone().unwrap_or_default()}</div>
                                        </td>
                                        {cells}
                                    </tr>
                                }
                            }).collect_view().into_any()
                        }}
                    </tbody>
                </table>
            </div>
            {move || selected_cell.get().map(|(staff_id, name, date)| {
                let close = move || selected_cell.set(None);
                view! {
                    <Modal
                        title=format!("{} · {}", name, day_header(date))
                        on_close=Callback::new(move |_| close())
                    >
                        <div class="shift-picker">
                            {templates.with_value(|all| all.iter().map(|t| {
                                let template = t.clone();
                                view! {
                                    <button class="shift-picker__option" on:click=move |_| {
                                        save_shifts(banner, shifts, |m| assign_shift(m, staff_id, date, &template));
                                        close();
                                    }>
                                        <span class="shift-picker__name">{t.name.clone()}</span>
                                        <span class="shift-picker__time">{format!("{} - {}", t.start, t.end)}</span>
                                    </button>
                                }
                            }).collect_view())}
                        </div>
                        <div class="modal-footer">
                            <Button appearance=ButtonAppearance::Secondary on_click=move |_| {
                                save_shifts(banner, shifts, |m| clear_shift(m, staff_id, date));
                                close();
                            }>
                                "Clear Shift"
                            </Button>
                        </div>
                    </Modal>
                }
            })}
        </PageFrame>
    }
}
