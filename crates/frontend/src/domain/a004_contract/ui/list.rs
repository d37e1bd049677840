use super::details::ContractDetails;
use crate::shared::components::{ErrorBanner, PageHeader, PaginationControls, ToneBadge};
use crate::shared::config::use_config;
use crate::shared::date_utils::format_date_str;
use crate::shared::icons::icon;
use crate::shared::list_state::{text_matches, ListState};
use crate::shared::list_utils::highlight_matches;
use crate::shared::page_frame::PageFrame;
use crate::system::auth::use_auth;
use contracts::domain::a004_contract::{Contract, ContractDto};
use contracts::shared::StatusTone;
use contracts::system::access::policy::can_edit_contracts;
use leptos::prelude::*;
use thaw::*;

#[component]
#[allow(non_snake_case)]
pub fn ContractList() -> impl IntoView {
    let session = use_auth();
    let config = use_config();
    let page_size = config.task_settings_page_size;
    let state = ListState::<Contract>::load();
    let editing = RwSignal::new(None::<ContractDto>);
    let can_edit = move || session.role().is_some_and(can_edit_contracts);

    let page = Memo::new(move |_| {
        state.visible(page_size, |c, q| {
            c.status.is_active() && (text_matches(&c.number, q) || text_matches(&c.service_type, q))
        })
    });

    let on_saved = Callback::new(move |contract: Contract| {
        if state.upsert(contract) {
            editing.set(None);
        }
    });

    view! {
        <PageFrame page_id="a004_contract--list" category="list">
            <PageHeader title="Contracts".to_string() subtitle="Service contracts and their validity periods".to_string()>
                <Show when=can_edit>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| editing.set(Some(ContractDto::default()))
                    >
                        {icon("plus")}
                        " Add Contract"
                    </Button>
                </Show>
            </PageHeader>
            <ErrorBanner banner=state.banner />
            <div class="list-toolbar">
                <input
                    class="search-input"
                    type="search"
                    placeholder="Search by number or service..."
                    prop:value=move || state.query.get()
                    on:input=move |ev| state.set_query(event_target_value(&ev))
                />
            </div>
            {move || {
                let (rows, _) = page.get();
                let query = state.query.get();
                let editable = can_edit();
                if rows.is_empty() {
                    return view! { <div class="empty-state">"No contracts found"</div> }.into_any();
                }
                view! {
                    <Table>
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell>"Contract No."</TableHeaderCell>
                                <TableHeaderCell>"Start"</TableHeaderCell>
                                <TableHeaderCell>"End"</TableHeaderCell>
                                <TableHeaderCell>"Service"</TableHeaderCell>
                                <TableHeaderCell>"Type"</TableHeaderCell>
                                {editable.then(|| view! { <TableHeaderCell>"Actions"</TableHeaderCell> })}
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            {rows.into_iter().map(|c| {
                                let dto = ContractDto::from(&c);
                                let (tone, kind) = if c.is_licensee {
                                    (StatusTone::Brand, "Licensee")
                                } else {
                                    (StatusTone::Subtle, "Standard")
                                };
                                let highlighted = highlight_matches(&c.number, &query);
                                view! {
                                    <TableRow>
                                        <TableCell><TableCellLayout>{highlighted}</TableCellLayout></TableCell>
                                        <TableCell>{format_date_str(&c.start_time)}</TableCell>
                                        <TableCell>{format_date_str(&c.end_time)}</TableCell>
                                        <TableCell>{c.service_type.clone()}</TableCell>
                                        <TableCell><ToneBadge tone=tone text=kind /></TableCell>
                                        {editable.then(|| view! {
                                            <TableCell>
                                                <button class="button button--icon" title="Edit" on:click=move |_| editing.set(Some(dto.clone()))>
                                                    {icon("edit")}
                                                </button>
                                            </TableCell>
                                        })}
                                    </TableRow>
                                }
                            }).collect_view()}
                        </TableBody>
                    </Table>
                }
                .into_any()
            }}
            <PaginationControls
                window=Signal::derive(move || page.get().1)
                on_page_change=Callback::new(move |p| state.page.set(p))
            />
            {move || editing.get().map(|dto| view! {
                <ContractDetails
                    dto=dto
                    existing=Signal::derive(move || state.items.get())
                    on_saved=on_saved
                    on_cancel=Callback::new(move |_| editing.set(None))
                    next_id=Callback::new(move |_| state.next_id())
                />
            })}
        </PageFrame>
    }
}
