use crate::layout::global_context::use_global_context;
use crate::shared::components::{ErrorBanner, PageHeader, StatCard, ToneBadge};
use crate::shared::data::{load_list, load_list_with, Banner};
use crate::shared::date_utils::{format_long_date, now, today};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DASHBOARD;
use crate::system::auth::use_auth;
use contracts::dashboards::d001_summary::dto::daily_task_counts;
use contracts::dashboards::d001_summary::{DashboardPeriod, DashboardVariant, TaskBreakdown, TaskSummary};
use contracts::domain::a001_task::ordering::sort_tasks;
use contracts::domain::a001_task::samples::sample_tasks;
use contracts::domain::a001_task::{Task, TaskStatus};
use contracts::domain::a002_staff::Staff;
use contracts::shared::datetime::display_datetime;
use contracts::system::access::PageKey;
use contracts::system::auth::SessionRole;
use leptos::prelude::*;

/// Number of upcoming tasks listed under the charts
const UPCOMING_LIMIT: usize = 5;

/// Staff member a staff session speaks for: the first active frontline
/// member, preferring one on the session contract.
fn session_staff<'a>(staff: &'a [Staff], contract: Option<&str>) -> Option<&'a Staff> {
    let frontline = || staff.iter().filter(|s| s.is_active() && s.role == SessionRole::Staff);
    contract
        .and_then(|c| frontline().find(|s| s.contract == c))
        .or_else(|| frontline().next())
}

/// Percentage width of a bar; an empty chart draws nothing.
fn bar_width(value: usize, max: usize) -> String {
    let pct = if max == 0 { 0 } else { value * 100 / max };
    format!("width: {}%", pct)
}

#[component]
#[allow(non_snake_case)]
pub fn SummaryDashboard() -> impl IntoView {
    let ctx = use_global_context();
    let session = use_auth();
    let banner: Banner = RwSignal::new(None);
    let today = today();

    let role = session.role_untracked().unwrap_or(SessionRole::Staff);
    let variant = DashboardVariant::for_role(role);
    let all_tasks = load_list_with::<Task>(banner, || sample_tasks(today));
    let staff = load_list::<Staff>(banner);

    let contract = session.user.with_untracked(|u| u.as_ref().and_then(|u| u.contract.clone()));
    let me = session_staff(&staff, contract.as_deref()).map(|s| (s.id, s.name.clone()));
    let tasks: Vec<Task> = match (variant, &me) {
        (DashboardVariant::Staff, Some((id, _))) => all_tasks.iter().filter(|t| t.is_assigned_to(*id)).cloned().collect(),
        (DashboardVariant::Staff, None) => Vec::new(),
        _ => all_tasks,
    };
    let summary = match (variant, &me) {
        (DashboardVariant::Staff, Some((id, _))) => TaskSummary::collect_for_staff(&tasks, *id, today),
        _ => TaskSummary::collect(&tasks, &staff, today),
    };

    let period = RwSignal::new(DashboardPeriod::default());
    let tasks = StoredValue::new(tasks);
    let breakdown = Memo::new(move |_| {
        let p = period.get();
        tasks.with_value(|t| TaskBreakdown::for_period(t, p, today))
    });
    let daily = tasks.with_value(|t| daily_task_counts(t, today));
    let daily_max = daily.iter().map(|(_, n)| *n).max().unwrap_or(0);

    let current = now();
    let mut upcoming: Vec<Task> = tasks.with_value(|t| {
        t.iter()
            .filter(|t| t.end_time >= current)
            .filter(|t| !matches!(t.status, TaskStatus::Completed | TaskStatus::Cancelled | TaskStatus::Rejected))
            .cloned()
            .collect()
    });
    sort_tasks(&mut upcoming);
    upcoming.truncate(UPCOMING_LIMIT);

    let subtitle = match (variant, &me) {
        (DashboardVariant::Staff, Some((_, name))) => format!("{} - {}", name, format_long_date(&today)),
        _ => format_long_date(&today),
    };

    view! {
        <PageFrame page_id="d001_summary--dashboard" category=PAGE_CAT_DASHBOARD>
            <PageHeader title=variant.title().to_string() subtitle=subtitle>
                {()}
            </PageHeader>
            <ErrorBanner banner=banner />
            <div class="stat-grid">
                {summary.stats(variant).into_iter().map(|s| {
                    let value = s.value;
                    view! { <StatCard label=s.label icon_name="task" value=Signal::derive(move || value) /> }
                }).collect_view()}
            </div>
            <div class="dashboard-grid">
                <div class="dashboard-card">
                    <div class="dashboard-card__header">
                        <h3>"Tasks"</h3>
                        <div class="segmented">
                            {DashboardPeriod::all().into_iter().map(|p| view! {
                                <button
                                    type="button"
                                    class="segmented__item"
                                    class:segmented__item--active=move || period.get() == p
                                    on:click=move |_| period.set(p)
                                >
                                    {p.display_name()}
                                </button>
                            }).collect_view()}
                        </div>
                    </div>
                    {move || {
                        let b = breakdown.get();
                        let max = b.max();
                        [("Completed", b.completed, "bar--success"), ("Pending", b.pending, "bar--warning"), ("Overdue", b.overdue, "bar--error")]
                            .into_iter()
                            .map(|(label, value, class)| view! {
                                <div class="bar-row">
                                    <span class="bar-row__label">{label}</span>
                                    <div class="bar-row__track">
                                        <div class=format!("bar {}", class) style=bar_width(value, max)></div>
                                    </div>
                                    <span class="bar-row__value">{value}</span>
                                </div>
                            })
                            .collect_view()
                    }}
                </div>
                <div class="dashboard-card">
                    <div class="dashboard-card__header"><h3>"Last 7 Days"</h3></div>
                    {daily.into_iter().map(|(day, count)| view! {
                        <div class="bar-row">
                            <span class="bar-row__label">{day.format("%a %d").to_string()}</span>
                            <div class="bar-row__track">
                                <div class="bar" style=bar_width(count, daily_max)></div>
                            </div>
                            <span class="bar-row__value">{count}</span>
                        </div>
                    }).collect_view()}
                </div>
            </div>
            <div class="dashboard-card">
                <div class="dashboard-card__header">
                    <h3>"Upcoming Tasks"</h3>
                    <a class="link" on:click=move |_| ctx.navigate(PageKey::Task)>"View all"</a>
                </div>
                {if upcoming.is_empty() {
                    view! { <div class="empty-state">"Nothing scheduled"</div> }.into_any()
                } else {
                    upcoming.into_iter().map(|t| view! {
                        <div class="detail-task">
                            <span>{t.name.clone()}</span>
                            <span class="detail-task__time">{display_datetime(&t.start_time)}</span>
                            <ToneBadge tone=t.status.tone() text=t.status.display_name() />
                        </div>
                    }).collect_view().into_any()
                }}
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::common::AggregateRoot;

    #[test]
    fn test_session_staff_prefers_contract() {
        let staff = Staff::seed();
        assert_eq!(session_staff(&staff, Some("CON003")).map(|s| s.name.as_str()), Some("Mike Johnson"));
        assert_eq!(session_staff(&staff, None).map(|s| s.name.as_str()), Some("John Smith"));
        // the manager on CON004 is not a frontline member
        assert_eq!(session_staff(&staff, Some("CON004")).map(|s| s.name.as_str()), Some("John Smith"));
    }

    #[test]
    fn test_bar_width() {
        assert_eq!(bar_width(0, 0), "width: 0%");
        assert_eq!(bar_width(1, 4), "width: 25%");
        assert_eq!(bar_width(4, 4), "width: 100%");
    }
}
