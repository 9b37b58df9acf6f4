mod state;

use contracts::domain::a001_customer::aggregate::{Customer, CustomerId};
use contracts::domain::common::AggregateRoot;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a001_customer::api;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::table::number_format::format_euro;
use crate::shared::components::ui::Badge;
use crate::shared::config::config;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use state::{apply_page_response, create_state, PageOutcome};

const TABLE_ID: &str = "a001-customers-table";

#[component]
pub fn CustomerList() -> impl IntoView {
    let state = create_state(config().customers.page_size);

    // Only an index change re-runs the fetch effect; item updates do not.
    let current_page = Memo::new(move |_| state.with(|s| s.current_page));

    Effect::new(move |_| {
        current_page.track();
        let Some(request) = state.try_update(|s| s.begin_fetch()) else {
            return;
        };
        spawn_local(async move {
            match api::fetch_page(request.query).await {
                Ok(envelope) => match apply_page_response(state, &request, envelope) {
                    PageOutcome::Applied => {}
                    PageOutcome::Stale => {
                        log::debug!("Dropped stale customers page {}", request.query.page)
                    }
                    PageOutcome::Closed => {
                        log::debug!("Customer list closed before page {} arrived", request.query.page)
                    }
                },
                Err(e) => log::error!("Failed to load customers page {}: {}", request.query.page, e),
            }
        });
    });

    let handle_delete = move |id: CustomerId| {
        let Some(snapshot) = state.try_update(|s| s.remove_optimistic(id)).flatten() else {
            return;
        };
        spawn_local(async move {
            match api::delete_customer(id).await {
                Ok(()) => log::info!("Customer {} deleted", id),
                Err(e) => {
                    state.update(|s| s.restore(snapshot));
                    log::error!("Failed to delete customer {}: {}", id, e);
                }
            }
        });
    };

    let handle_page_change = move |page: usize| {
        state.update(|s| {
            s.change_page(page);
        });
    };

    view! {
        <PageFrame page_id="a001_customer--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    {icon("customers")}
                    <h1 class="page__title">{Customer::list_name()}</h1>
                </div>
            </div>

            <div class="page__content">
                <div class="table-wrapper">
                    <Table attr:id=TABLE_ID attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell>"Id"</TableHeaderCell>
                                <TableHeaderCell>"Клиент"</TableHeaderCell>
                                <TableHeaderCell>"Email"</TableHeaderCell>
                                <TableHeaderCell>"Компания"</TableHeaderCell>
                                <TableHeaderCell class="text-center">"Счета"</TableHeaderCell>
                                <TableHeaderCell class="text-center">"Сумма"</TableHeaderCell>
                                <TableHeaderCell></TableHeaderCell>
                            </TableRow>
                        </TableHeader>

                        <TableBody>
                            <Show
                                when=move || !state.with(|s| s.loading)
                                fallback=|| view! {
                                    <TableRow>
                                        <TableCell>
                                            <Flex gap=FlexGap::Small style="align-items: center;">
                                                <Spinner />
                                                <span>"Загрузка..."</span>
                                            </Flex>
                                        </TableCell>
                                    </TableRow>
                                }
                            >
                                <For
                                    each=move || state.with(|s| s.items.clone())
                                    key=|c: &Customer| c.id
                                    children=move |customer: Customer| {
                                        let id = customer.id;
                                        let deletable = customer.can_delete();
                                        let name = customer.display_name();
                                        let invoice_count = customer.invoice_count();
                                        let total = format_euro(customer.total_amount);
                                        let email = customer.email;
                                        let company = customer.company.unwrap_or_default();
                                        view! {
                                            <TableRow>
                                                <TableCell>{id.value()}</TableCell>
                                                <TableCell>
                                                    <TableCellLayout truncate=true>
                                                        <span style="font-weight: 500;">{name}</span>
                                                    </TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout truncate=true>{email}</TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout truncate=true>
                                                        {company}
                                                    </TableCellLayout>
                                                </TableCell>
                                                <TableCell class="text-center">
                                                    <Badge variant="primary">{invoice_count}</Badge>
                                                </TableCell>
                                                <TableCell class="text-center">
                                                    {total}
                                                </TableCell>
                                                <TableCell>
                                                    <Button
                                                        appearance=ButtonAppearance::Secondary
                                                        on_click=move |_| handle_delete(id)
                                                        disabled=!deletable
                                                        attr:title="Удалить"
                                                    >
                                                        {icon("delete")}
                                                        " Удалить"
                                                    </Button>
                                                </TableCell>
                                            </TableRow>
                                        }
                                    }
                                />
                            </Show>
                        </TableBody>
                    </Table>
                </div>

                <PaginationControls
                    current_page=Signal::derive(move || state.with(|s| s.current_page))
                    total_pages=Signal::derive(move || state.with(|s| s.total_pages()))
                    total_count=Signal::derive(move || state.with(|s| s.total_items))
                    on_page_change=Callback::new(handle_page_change)
                />
            </div>
        </PageFrame>
    }
}
