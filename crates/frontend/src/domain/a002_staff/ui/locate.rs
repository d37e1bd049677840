use crate::shared::components::{ErrorBanner, PageHeader};
use crate::shared::data::{load_list, or_report, Banner};
use crate::shared::date_utils::now;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::storage::BrowserStore;
use contracts::domain::a002_staff::aggregate::{active_staff, search_by_name};
use contracts::domain::a002_staff::location_history::{
    last_known, load_location_history, LocationHistoryEntry, LocationHistoryMap,
};
use contracts::domain::a002_staff::Staff;
use contracts::domain::a012_message::aggregate::time_ago;
use leptos::prelude::*;

/// Active staff paired with their last reported position, most recent first.
/// Members that never reported come last.
fn positions(staff: &[Staff], history: &LocationHistoryMap) -> Vec<(Staff, Option<LocationHistoryEntry>)> {
    let mut rows: Vec<_> = staff
        .iter()
        .map(|s| (s.clone(), last_known(history, s.id)))
        .collect();
    rows.sort_by(|a, b| b.1.as_ref().map(|e| e.ts).cmp(&a.1.as_ref().map(|e| e.ts)));
    rows
}

/// Last known positions of active staff. The map itself is a placeholder.
#[component]
#[allow(non_snake_case)]
pub fn LocatePage() -> impl IntoView {
    let banner: Banner = RwSignal::new(None);
    let staff = active_staff(&load_list::<Staff>(banner));
    let history = or_report(banner, load_location_history(&BrowserStore, now()), LocationHistoryMap::new);
    let rows = StoredValue::new(positions(&staff, &history));
    let query = RwSignal::new(String::new());

    let visible = move || {
        let q = query.get();
        rows.with_value(|rows| {
            let names: Vec<_> = rows.iter().map(|(s, _)| s.clone()).collect();
            let matching: Vec<_> = search_by_name(&names, &q).into_iter().map(|s| s.id).collect();
            rows.iter()
                .filter(|(s, _)| matching.contains(&s.id))
                .cloned()
                .collect::<Vec<_>>()
        })
    };

    view! {
        <PageFrame page_id="a002_staff--locate" category=PAGE_CAT_LIST>
            <PageHeader title="Locate".to_string() subtitle="Last reported staff positions".to_string()>
                {()}
            </PageHeader>
            <ErrorBanner banner=banner />
            <div class="locate-layout">
                <div class="locate-map">
                    {icon("locate")}
                    <span>"Map view"</span>
                </div>
                <div class="locate-list">
                    <input
                        class="search-input"
                        type="search"
                        placeholder="Search staff..."
                        prop:value=move || query.get()
                        on:input=move |ev| query.set(event_target_value(&ev))
                    />
                    {move || {
                        let current = now();
                        visible().into_iter().map(|(s, entry)| {
                            let (place, when) = match entry {
                                Some(e) => (e.location_name, time_ago(e.ts, current)),
                                None => ("No position reported".to_string(), String::new()),
                            };
                            view! {
                                <div class="locate-item">
                                    <div class="locate-item__name">{s.name}</div>
                                    <div class="locate-item__place">{place}</div>
                                    <div class="locate-item__time">{when}</div>
                                </div>
                            }
                        }).collect_view()
                    }}
                </div>
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a002_staff::location_history::seed_location_history;
    use contracts::domain::common::AggregateRoot;
    use contracts::shared::datetime::parse_datetime;

    #[test]
    fn test_positions_newest_first_silent_last() {
        let now = parse_datetime("2025-08-09T12:00").unwrap();
        let history = seed_location_history(now);
        let staff = Staff::seed();
        let rows = positions(&staff, &history);
        assert_eq!(rows.len(), staff.len());
        // staff 1 reported 15 minutes ago, the most recent entry in the seed
        assert_eq!(rows[0].0.id.0, 1);
        let first_silent = rows.iter().position(|(_, e)| e.is_none()).unwrap_or(rows.len());
        assert!(rows[first_silent..].iter().all(|(_, e)| e.is_none()));
    }
}
