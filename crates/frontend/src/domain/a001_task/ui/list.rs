use super::filters::TaskFilterBar;
use super::form::TaskForm;
use super::templates::TemplatePicker;
use crate::layout::global_context::use_global_context;
use crate::shared::components::{ErrorBanner, PageHeader, PaginationControls, StatAccent, StatCard, ToneBadge};
use crate::shared::config::use_config;
use crate::shared::data::{load_list, load_list_with, Banner};
use crate::shared::date_utils::today;
use crate::shared::icons::icon;
use crate::shared::lookups::Lookups;
use crate::shared::page_frame::PageFrame;
use contracts::domain::a001_task::aggregate::staff_names;
use contracts::domain::a001_task::ordering::sort_tasks;
use contracts::domain::a001_task::samples::sample_tasks;
use contracts::domain::a001_task::stats::{group_by_start_date, TaskStats};
use contracts::domain::a001_task::{Task, TaskDraft, TaskFilter};
use contracts::domain::a002_staff::aggregate::name_of;
use contracts::domain::a002_staff::Staff;
use contracts::domain::a007_task_template::TaskTemplate;
use contracts::shared::datetime::{display_time, parse_date};
use contracts::shared::pagination::{paginate, PageWindow};
use contracts::usecases::u001_save_task::SaveTaskResponse;
use leptos::prelude::*;
use thaw::*;

fn date_heading(key: &str) -> String {
    parse_date(key)
        .map(|d| d.format("%a, %b %-d").to_string())
        .unwrap_or_else(|| key.to_string())
}

#[derive(Debug, Clone, PartialEq)]
struct TaskPage {
    rows: Vec<Task>,
    window: PageWindow,
    stats: TaskStats,
}

/// Filter, sort, count and cut one page out of `tasks`.
fn task_page(tasks: &[Task], filter: &TaskFilter, page: usize, page_size: usize) -> TaskPage {
    let mut filtered: Vec<Task> = filter.apply(tasks).into_iter().cloned().collect();
    sort_tasks(&mut filtered);
    let stats = TaskStats::collect(&filtered);
    let (rows, window) = paginate(&filtered, page, page_size);
    TaskPage { rows, window, stats }
}

#[component]
#[allow(non_snake_case)]
pub fn TaskList() -> impl IntoView {
    let ctx = use_global_context();
    let config = use_config();
    let (page_size, window_days) = (config.task_page_size, config.task_window_days);
    let banner: Banner = RwSignal::new(None);

    let tasks = RwSignal::new(load_list_with::<Task>(banner, || sample_tasks(today())));
    let all_staff = StoredValue::new(load_list::<Staff>(banner));
    let lookups = StoredValue::new(Lookups::load(banner));
    let filter = RwSignal::new(TaskFilter::with_default_window(today(), window_days));
    let page = RwSignal::new(1usize);
    let editing = RwSignal::new(None::<TaskDraft>);
    let picking = RwSignal::new(false);
    let add_menu = RwSignal::new(false);

    let current = Memo::new(move |_| {
        tasks.with(|all| filter.with(|f| task_page(all, f, page.get(), page_size)))
    });
    let stat = move |pick: fn(&TaskStats) -> usize| Signal::derive(move || pick(&current.get().stats));

    let open_task = move |task: &Task| {
        let draft = lookups.with_value(|l| TaskDraft::from_task(task, &l.categories, &l.subcategories, &l.catalog()));
        editing.set(Some(draft));
    };

    let on_saved = Callback::new(move |response: SaveTaskResponse| {
        tasks.set(response.tasks);
        editing.set(None);
        match response.notice {
            Some(notice) => ctx.notify(notice),
            None => ctx.notify(format!("{} task(s) saved", response.saved.len())),
        }
    });

    let on_pick = Callback::new(move |template: TaskTemplate| {
        let mut draft = TaskDraft::default();
        lookups.with_value(|l| draft.apply_template(&template, &l.catalog()));
        picking.set(false);
        editing.set(Some(draft));
    });

    let staff_label = move |task: &Task| {
        all_staff.with_value(|staff| staff_names(&task.assigned_staff, |id| name_of(staff, id)))
    };

    view! {
        <PageFrame page_id="a001_task--list" category="list">
            <PageHeader title="Tasks".to_string() subtitle="Plan, assign and track work".to_string()>
                <div class="dropdown">
                    <Button appearance=ButtonAppearance::Primary on_click=move |_| add_menu.update(|v| *v = !*v)>
                        {icon("plus")}
                        " Add Task"
                    </Button>
                    <Show when=move || add_menu.get()>
                        <div class="dropdown__menu">
                            <button class="dropdown__item" on:click=move |_| {
                                add_menu.set(false);
                                editing.set(Some(TaskDraft::default()));
                            }>"New Task"</button>
                            <button class="dropdown__item" on:click=move |_| {
                                add_menu.set(false);
                                picking.set(true);
                            }>"From Template"</button>
                        </div>
                    </Show>
                </div>
            </PageHeader>
            <ErrorBanner banner=banner />
            <div class="stat-grid">
                <StatCard label="Total Tasks" icon_name="task" value=stat(|s| s.total) />
                <StatCard label="Completed" icon_name="check" value=stat(|s| s.completed) accent=StatAccent::Success />
                <StatCard label="Pending" icon_name="schedule" value=stat(|s| s.pending) accent=StatAccent::Warning />
                <StatCard label="Overdue" icon_name="alert" value=stat(|s| s.overdue) accent=StatAccent::Error />
            </div>
            <TaskFilterBar
                filter=filter
                lookups=lookups
                on_change=Callback::new(move |_| page.set(1))
                on_clear=Callback::new(move |_| {
                    filter.set(TaskFilter::with_default_window(today(), window_days));
                    page.set(1);
                })
            />
            <div class="task-collection">
                {move || {
                    let rows = current.get().rows;
                    if rows.is_empty() {
                        return view! { <div class="empty-state">"No tasks."</div> }.into_any();
                    }
                    group_by_start_date(&rows).into_iter().map(|(key, group)| {
                        let cards = group.into_iter().cloned().map(|task| {
                            let assigned = staff_label(&task);
                            let time = format!("{} - {}", display_time(&task.start_time), display_time(&task.end_time));
                            let overdue = task.shows_overdue();
                            let stored = StoredValue::new(task.clone());
                            view! {
                                <div class="task-card" on:click=move |_| stored.with_value(|t| open_task(t))>
                                    <div class="task-card__header">
                                        <h4 class="task-card__title">{task.name.clone()}</h4>
                                        <ToneBadge tone=task.status.tone() text=task.status.display_name() />
                                    </div>
                                    <div class="task-card__line">{format!("Category: {}", task.category)}</div>
                                    <div class="task-card__line">{format!("Location: {}", task.location)}</div>
                                    <div class="task-card__line">{format!("Time: {}", time)}</div>
                                    <div class="task-card__line">{format!("Assigned: {}", assigned)}</div>
                                    {overdue.then(|| view! { <div class="task-card__overdue">"OVERDUE"</div> })}
                                </div>
                            }
                        }).collect_view();
                        view! {
                            <section class="task-group">
                                <div class="task-group__date">{date_heading(&key)}</div>
                                <div class="card-grid">{cards}</div>
                            </section>
                        }
                    }).collect_view().into_any()
                }}
            </div>
            <PaginationControls
                window=Signal::derive(move || current.get().window)
                on_page_change=Callback::new(move |p| page.set(p))
            />
            {move || editing.get().map(|draft| view! {
                <TaskForm
                    draft=draft
                    lookups=lookups
                    on_saved=on_saved
                    on_close=Callback::new(move |_| editing.set(None))
                />
            })}
            <Show when=move || picking.get()>
                <TemplatePicker banner=banner on_pick=on_pick on_close=Callback::new(move |_| picking.set(false)) />
            </Show>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_task::TaskStatus;

    fn tasks() -> Vec<Task> {
        let mut all = sample_tasks(parse_date("2025-08-09").unwrap());
        for (i, t) in all.iter_mut().enumerate() {
            t.status = if i % 2 == 0 { TaskStatus::Completed } else { TaskStatus::Pending };
        }
        all
    }

    #[test]
    fn test_task_page_counts_filtered_tasks() {
        let all = tasks();
        let filter = TaskFilter {
            hide_completed: true,
            ..TaskFilter::default()
        };
        let page = task_page(&all, &filter, 1, 12);
        assert_eq!(page.stats.completed, 0);
        assert_eq!(page.stats.total, all.iter().filter(|t| t.status != TaskStatus::Completed).count());
        assert!(page.rows.len() <= 12);
        assert_eq!(page.window.total_items, page.stats.total);
    }

    #[test]
    fn test_task_page_rows_are_sorted_by_end_time() {
        let page = task_page(&tasks(), &TaskFilter::default(), 1, 50);
        assert!(page.rows.windows(2).all(|w| w[0].end_time <= w[1].end_time));
    }

    #[test]
    fn test_date_heading() {
        assert_eq!(date_heading("2025-08-09"), "Sat, Aug 9");
        assert_eq!(date_heading("garbage"), "garbage");
    }
}
