use crate::shared::components::{ErrorBanner, PageHeader};
use crate::shared::config::use_config;
use crate::shared::data::{load_list, Banner};
use crate::shared::date_utils::today;
use crate::shared::export::download_csv;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_USECASE;
use crate::system::auth::use_auth;
use contracts::domain::a001_task::TaskStatus;
use contracts::domain::a002_staff::Staff;
use contracts::reports::{contract_staff_map, resolve_contract, ReportFilters, ReportKind, REPORT_FILE_NAME};
use contracts::shared::EntityId;
use leptos::prelude::*;
use thaw::*;

/// Statuses offered as report filters
const REPORT_STATUSES: [TaskStatus; 6] = [
    TaskStatus::OpenQueued,
    TaskStatus::Assigned,
    TaskStatus::InProgress,
    TaskStatus::Completed,
    TaskStatus::Cancelled,
    TaskStatus::Overdue,
];

#[component]
#[allow(non_snake_case)]
pub fn ReportsPage() -> impl IntoView {
    let config = use_config();
    let session = use_auth();
    let banner: Banner = RwSignal::new(None);
    let staff = StoredValue::new(load_list::<Staff>(banner));
    let by_contract = StoredValue::new(staff.with_value(|s| contract_staff_map(s)));

    let contract = staff.with_value(|s| {
        session.user.with_untracked(|u| resolve_contract(u.as_ref(), s, &config.fallback_contract))
    });
    let filters = RwSignal::new(ReportFilters::new(contract, today(), config.report_window_days));
    let staff_query = RwSignal::new(String::new());

    let mut contract_options = by_contract.with_value(|m| m.keys().cloned().collect::<Vec<_>>());
    let selected = filters.with_untracked(|f| f.contract.clone());
    if !contract_options.contains(&selected) {
        contract_options.insert(0, selected);
    }
    let staff_options = move || {
        let query = staff_query.get();
        filters.with(|f| by_contract.with_value(|m| f.staff_options(m, &query)))
    };

    let download = move |_| {
        let csv = staff.with_value(|s| filters.with_untracked(|f| f.to_csv(s)));
        match download_csv(&csv, REPORT_FILE_NAME) {
            Ok(()) => banner.set(None),
            Err(e) => {
                log::error!("report export: {}", e);
                banner.set(Some(e));
            }
        }
    };

    view! {
        <PageFrame page_id="reports--usecase" category=PAGE_CAT_USECASE>
            <PageHeader title="Reports".to_string() subtitle="Export the selected report filters".to_string()>
                <Button appearance=ButtonAppearance::Primary on_click=download>
                    {icon("download")}
                    " Download CSV"
                </Button>
            </PageHeader>
            <ErrorBanner banner=banner />
            <div class="report-form">
                <div class="form__group">
                    <label class="form__label">"Report"</label>
                    <div class="segmented">
                        {ReportKind::all().into_iter().map(|kind| view! {
                            <button
                                type="button"
                                class="segmented__item"
                                class:segmented__item--active=move || filters.with(|f| f.kind == kind)
                                on:click=move |_| filters.update(|f| f.kind = kind)
                            >
                                {kind.title()}
                            </button>
                        }).collect_view()}
                    </div>
                </div>
                <div class="form__row">
                    <div class="form__group">
                        <label class="form__label">"Contract"</label>
                        <select
                            class="form__select"
                            prop:value=move || filters.with(|f| f.contract.clone())
                            on:change=move |ev| {
                                let contract = event_target_value(&ev);
                                filters.update(|f| {
                                    f.contract = contract;
                                    f.staff_id = None;
                                });
                            }
                        >
                            {contract_options.into_iter().map(|c| view! { <option value=c.clone()>{c.clone()}</option> }).collect_view()}
                        </select>
                    </div>
                    <div class="form__group">
                        <label class="form__label">"Start Date"</label>
                        <input
                            class="form__input"
                            type="date"
                            prop:value=move || filters.with(|f| f.start_date.clone())
                            on:change=move |ev| filters.update(|f| f.start_date = event_target_value(&ev))
                        />
                    </div>
                    <div class="form__group">
                        <label class="form__label">"End Date"</label>
                        <input
                            class="form__input"
                            type="date"
                            prop:value=move || filters.with(|f| f.end_date.clone())
                            on:change=move |ev| filters.update(|f| f.end_date = event_target_value(&ev))
                        />
                    </div>
                </div>
                <div class="form__group">
                    <label class="form__label">"Status"</label>
                    <div class="filter-panel__row">
                        {REPORT_STATUSES.into_iter().map(|status| view! {
                            <label class="filter-toggle">
                                <input
                                    type="checkbox"
                                    prop:checked=move || filters.with(|f| f.statuses.contains(&status))
                                    on:change=move |_| filters.update(|f| f.toggle_status(status))
                                />
                                <span>{status.display_name()}</span>
                            </label>
                        }).collect_view()}
                    </div>
                </div>
                <div class="form__group">
                    <label class="form__label">"Staff"</label>
                    <input
                        class="search-input"
                        type="search"
                        placeholder="Search staff..."
                        prop:value=move || staff_query.get()
                        on:input=move |ev| staff_query.set(event_target_value(&ev))
                    />
                    <select
                        class="form__select"
                        prop:value=move || filters.with(|f| f.staff_id.map(|id| id.to_string()).unwrap_or_default())
                        on:change=move |ev| {
                            let id = event_target_value(&ev).parse::<EntityId>().ok();
                            filters.update(|f| f.staff_id = id);
                        }
                    >
                        <option value="">"All staff"</option>
                        {move || staff_options().into_iter().map(|s| view! {
                            <option value=s.id.to_string()>{s.name}</option>
                        }).collect_view()}
                    </select>
                </div>
            </div>
        </PageFrame>
    }
}
