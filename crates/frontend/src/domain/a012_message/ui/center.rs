use crate::shared::components::{ErrorBanner, PageHeader, PaginationControls, ToneBadge};
use crate::shared::config::use_config;
use crate::shared::data::{load_list, load_list_with, save_list, Banner};
use crate::shared::date_utils::{format_datetime, now, today};
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::system::auth::use_auth;
use contracts::domain::a001_task::samples::sample_tasks;
use contracts::domain::a001_task::Task;
use contracts::domain::a002_staff::Staff;
use contracts::domain::a012_message::aggregate::{
    count_label, filter_messages, mark_all_read, mark_read, sample_messages, time_ago, unread_count,
};
use contracts::domain::a012_message::{Message, MessageFilter};
use contracts::shared::pagination::paginate;
use contracts::shared::EntityId;
use leptos::prelude::*;
use thaw::*;

/// Inbox of the session role. The first visit builds sample messages from
/// the current tasks.
#[component]
#[allow(non_snake_case)]
pub fn MessageCenter() -> impl IntoView {
    let config = use_config();
    let page_size = config.message_page_size;
    let session = use_auth();
    let banner: Banner = RwSignal::new(None);

    let recipient = session
        .role_untracked()
        .map(|r| r.code().to_string())
        .unwrap_or_default();
    let (max_assigned, max_rejected) = (config.sample_assigned_messages, config.sample_rejected_messages);
    let messages = RwSignal::new(load_list_with::<Message>(banner, || {
        let tasks = load_list_with::<Task>(banner, || sample_tasks(today()));
        let staff = load_list::<Staff>(banner);
        sample_messages(&tasks, &staff, &recipient, now(), max_assigned, max_rejected)
    }));
    let filter = RwSignal::new(MessageFilter::default());
    let page = RwSignal::new(1usize);
    let expanded = RwSignal::new(None::<EntityId>);

    let visible = Memo::new(move |_| {
        let filtered = messages.with(|all| filter_messages(all, filter.get()));
        let total = filtered.len();
        let (rows, window) = paginate(&filtered, page.get(), page_size);
        (rows, window, total)
    });
    let unread = Memo::new(move |_| messages.with(|all| unread_count(all)));

    let update = move |change: &dyn Fn(&mut Vec<Message>) -> bool| {
        let mut next = messages.get_untracked();
        if change(&mut next) && save_list(banner, &next) {
            messages.set(next);
        }
    };

    let open = move |id: EntityId| {
        expanded.update(|e| *e = if *e == Some(id) { None } else { Some(id) });
        update(&|all| mark_read(all, id));
    };

    let read_all = move |_| {
        update(&|all| {
            let had_unread = unread_count(all) > 0;
            mark_all_read(all);
            had_unread
        });
    };

    view! {
        <PageFrame page_id="a012_message--center" category="list">
            <PageHeader
                title="Message Center".to_string()
                subtitle=Signal::derive(move || Some(format!("{} unread", unread.get())))
            >
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=read_all
                    disabled=Signal::derive(move || unread.get() == 0)
                >
                    {icon("check")}
                    " Mark All as Read"
                </Button>
            </PageHeader>
            <ErrorBanner banner=banner />
            <div class="list-toolbar">
                <select
                    class="form__select"
                    prop:value=move || filter.get().code()
                    on:change=move |ev| {
                        filter.set(MessageFilter::from_code(&event_target_value(&ev)));
                        page.set(1);
                    }
                >
                    {MessageFilter::options().into_iter().map(|f| view! {
                        <option value=f.code()>{f.display_name()}</option>
                    }).collect_view()}
                </select>
                <span class="list-toolbar__count">{move || count_label(visible.get().2)}</span>
            </div>
            <div class="message-list">
                {move || {
                    let (rows, _, total) = visible.get();
                    if total == 0 {
                        return view! { <div class="empty-state">"No messages"</div> }.into_any();
                    }
                    let current = now();
                    rows.into_iter().map(|m| {
                        let id = m.id;
                        let content = m.content.clone();
                        let task_line = m.task_name.clone().map(|name| view! {
                            <div class="message-item__task">{format!("Task: {}", name)}</div>
                        });
                        view! {
                            <div
                                class="message-item"
                                class:message-item--unread={!m.is_read}
                                on:click=move |_| open(id)
                            >
                                <div class="message-item__header">
                                    <ToneBadge tone=m.kind.tone() text=m.kind.display_name() />
                                    <span class="message-item__title">{m.title.clone()}</span>
                                    <span class="message-item__time" title=format_datetime(&m.timestamp)>
                                        {time_ago(m.timestamp, current)}
                                    </span>
                                </div>
                                <Show when=move || expanded.get() == Some(id)>
                                    <div class="message-item__body">{content.clone()}</div>
                                </Show>
                                {task_line}
                                <div class="message-item__meta">{format!("From: {}", m.sender)}</div>
                            </div>
                        }
                    }).collect_view().into_any()
                }}
            </div>
            <PaginationControls
                window=Signal::derive(move || visible.get().1)
                on_page_change=Callback::new(move |p| page.set(p))
            />
        </PageFrame>
    }
}
