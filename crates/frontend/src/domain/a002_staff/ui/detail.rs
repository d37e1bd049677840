use crate::layout::global_context::use_global_context;
use crate::shared::components::{ErrorBanner, PageHeader, RecordStatusBadge, ToneBadge};
use crate::shared::data::{load_list, load_list_with, or_report, Banner};
use crate::shared::date_utils::{format_datetime, now, today};
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::storage::BrowserStore;
use contracts::domain::a001_task::ordering::sort_tasks;
use contracts::domain::a001_task::samples::sample_tasks;
use contracts::domain::a001_task::Task;
use contracts::domain::a002_staff::location_history::{history_for, load_location_history, LocationHistoryMap};
use contracts::domain::a002_staff::Staff;
use contracts::shared::datetime::display_datetime;
use contracts::shared::EntityId;
use leptos::prelude::*;
use thaw::*;

/// Profile, assigned tasks and reported positions of one staff member.
#[component]
pub fn StaffDetail(id: EntityId) -> impl IntoView {
    let ctx = use_global_context();
    let banner: Banner = RwSignal::new(None);
    let staff = load_list::<Staff>(banner).into_iter().find(|s| s.id == id);
    let history = history_for(
        &or_report(banner, load_location_history(&BrowserStore, now()), LocationHistoryMap::new),
        id,
    );
    let mut tasks: Vec<Task> = load_list_with::<Task>(banner, || sample_tasks(today()))
        .into_iter()
        .filter(|t| t.is_assigned_to(id))
        .collect();
    sort_tasks(&mut tasks);

    let back = move |_| ctx.staff_detail.set(None);

    let Some(staff) = staff else {
        return view! {
            <PageFrame page_id="a002_staff--detail" category="detail">
                <div class="warning-box">
                    <span class="warning-box__text">{format!("Staff member {} not found.", id)}</span>
                </div>
                <Button appearance=ButtonAppearance::Secondary on_click=back>"Back to staff"</Button>
            </PageFrame>
        }
        .into_any();
    };

    let history_rows = if history.is_empty() {
        view! { <div class="empty-state">"No location history"</div> }.into_any()
    } else {
        view! {
            <Table>
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell>"Time"</TableHeaderCell>
                        <TableHeaderCell>"Location"</TableHeaderCell>
                        <TableHeaderCell>"Details"</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    {history.into_iter().map(|e| view! {
                        <TableRow>
                            <TableCell>{format_datetime(&e.ts)}</TableCell>
                            <TableCell>{e.location_name}</TableCell>
                            <TableCell>{e.details}</TableCell>
                        </TableRow>
                    }).collect_view()}
                </TableBody>
            </Table>
        }
        .into_any()
    };

    view! {
        <PageFrame page_id="a002_staff--detail" category="detail">
            <PageHeader title=staff.name.clone() subtitle=staff.role.display_name().to_string()>
                <Button appearance=ButtonAppearance::Secondary on_click=back>
                    {icon("chevron-left")}
                    " Back to staff"
                </Button>
            </PageHeader>
            <ErrorBanner banner=banner />
            <div class="detail-grid">
                <div class="detail-card">
                    <h3 class="detail-card__title">"Profile"</h3>
                    <dl class="detail-list">
                        <dt>"Contract"</dt>
                        <dd>{staff.contract.clone()}</dd>
                        <dt>"Team"</dt>
                        <dd>{staff.team.clone().unwrap_or_else(|| "-".to_string())}</dd>
                        <dt>"Status"</dt>
                        <dd><RecordStatusBadge status=staff.status /></dd>
                    </dl>
                </div>
                <div class="detail-card">
                    <h3 class="detail-card__title">{format!("Assigned Tasks ({})", tasks.len())}</h3>
                    {if tasks.is_empty() {
                        view! { <div class="empty-state">"No tasks assigned"</div> }.into_any()
                    } else {
                        tasks.into_iter().map(|t| view! {
                            <div class="detail-task">
                                <span>{t.name.clone()}</span>
                                <span class="detail-task__time">{display_datetime(&t.start_time)}</span>
                                <ToneBadge tone=t.status.tone() text=t.status.display_name() />
                            </div>
                        }).collect_view().into_any()
                    }}
                </div>
            </div>
            <div class="detail-card">
                <h3 class="detail-card__title">"Location History"</h3>
                {history_rows}
            </div>
        </PageFrame>
    }
    .into_any()
}
