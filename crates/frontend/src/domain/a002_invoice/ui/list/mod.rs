mod state;

use contracts::domain::a002_invoice::aggregate::Invoice;
use contracts::domain::common::AggregateRoot;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use thaw::*;

use crate::domain::a002_invoice::api;
use crate::routes::routes::{invoice_path, new_invoice_path};
use crate::shared::components::table::number_format::format_euro;
use crate::shared::components::ui::InvoiceStatusBadge;
use crate::shared::date_utils::format_date_opt;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use state::create_state;

const TABLE_ID: &str = "a002-invoices-table";

#[component]
pub fn InvoiceList() -> impl IntoView {
    let state = create_state();

    let load_data = move || {
        state.update(|s| s.begin_load());
        spawn_local(async move {
            match api::fetch_all().await {
                Ok(items) => state.update(|s| s.apply_items(items)),
                Err(e) => {
                    log::error!("Failed to load invoices: {}", e);
                    state.update(|s| s.apply_error(format!("Не удалось загрузить счета: {}", e)));
                }
            }
        });
    };

    load_data();

    view! {
        <PageFrame page_id="a002_invoice--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    {icon("invoices")}
                    <h1 class="page__title">{Invoice::list_name()}</h1>
                </div>
                <div class="page__header-right">
                    <A href=new_invoice_path() attr:class="button button--primary">
                        {icon("plus")}
                        " Новый счёт"
                    </A>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| load_data()
                        disabled=Signal::derive(move || state.with(|s| s.loading))
                    >
                        {icon("refresh")}
                        " Обновить"
                    </Button>
                </div>
            </div>

            <div class="page__content">
                {move || state.with(|s| s.error.clone()).map(|e| view! { <div class="alert alert--error">{e}</div> })}

                <div class="table-wrapper">
                    <Table attr:id=TABLE_ID attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell>"Номер"</TableHeaderCell>
                                <TableHeaderCell>"Клиент"</TableHeaderCell>
                                <TableHeaderCell class="text-center">"Дата отправки"</TableHeaderCell>
                                <TableHeaderCell class="text-center">"Статус"</TableHeaderCell>
                                <TableHeaderCell class="text-center">"Сумма"</TableHeaderCell>
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
                                    key=|i: &Invoice| i.id
                                    children=move |invoice: Invoice| {
                                        let number = invoice
                                            .chrono
                                            .map(|c| c.to_string())
                                            .unwrap_or_else(|| invoice.id.to_string());
                                        let href = invoice_path(invoice.id);
                                        let customer = invoice.customer.display_name();
                                        let sent_at = format_date_opt(invoice.sent_at.as_ref());
                                        let status = invoice.status;
                                        let amount = format_euro(invoice.amount);
                                        view! {
                                            <TableRow>
                                                <TableCell>
                                                    <A href=href>{number}</A>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout truncate=true>
                                                        {customer}
                                                    </TableCellLayout>
                                                </TableCell>
                                                <TableCell class="text-center">
                                                    {sent_at}
                                                </TableCell>
                                                <TableCell class="text-center">
                                                    <InvoiceStatusBadge status=status />
                                                </TableCell>
                                                <TableCell class="text-center">
                                                    {amount}
                                                </TableCell>
                                            </TableRow>
                                        }
                                    }
                                />
                            </Show>
                        </TableBody>
                    </Table>
                </div>
            </div>
        </PageFrame>
    }
}
