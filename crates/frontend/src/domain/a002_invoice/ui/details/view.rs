use super::state::{FormMode, NEW_SENTINEL};
use super::view_model::InvoiceDetailsViewModel;
use crate::routes::routes::{back_to_list_options, INVOICES_PATH};
use crate::shared::components::ui::{Input, Select};
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DETAIL;
use contracts::domain::a002_invoice::aggregate::InvoiceField;
use contracts::enums::InvoiceStatus;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::{use_navigate, use_params_map};
use std::rc::Rc;

#[component]
pub fn InvoiceDetails() -> impl IntoView {
    let params = use_params_map();
    let id_param = Memo::new(move |_| {
        params
            .read()
            .get("id")
            .unwrap_or_else(|| NEW_SENTINEL.to_string())
    });

    // The navigator lives in the reactive arena, so the handlers below stay Copy
    // and do nothing once the page has been left.
    let navigate = StoredValue::new_local(use_navigate());
    let back_to_list = move || {
        let navigated = navigate.try_with_value(|nav| nav(INVOICES_PATH, back_to_list_options()));
        if navigated.is_none() {
            log::debug!("Invoice form already closed, navigation skipped");
        }
    };
    let leave = move || -> Rc<dyn Fn(())> { Rc::new(move |_: ()| back_to_list()) };

    let initial_mode = FormMode::parse(&id_param.get_untracked()).unwrap_or(FormMode::Create);
    let vm = InvoiceDetailsViewModel::new(initial_mode);
    vm.load_customers(leave());

    Effect::new(move |_| {
        let param = id_param.get();
        match FormMode::parse(&param) {
            Some(mode) => vm.open(mode, leave()),
            None => {
                log::warn!("Invalid invoice id in route: {:?}", param);
                back_to_list();
            }
        }
    });

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        vm.save_command(leave());
    };

    let status_options: Vec<(String, String)> = InvoiceStatus::all()
        .into_iter()
        .map(|s| (s.code().to_string(), s.display_name().to_string()))
        .collect();

    let is_edit_mode = vm.is_edit_mode();

    view! {
        <PageFrame page_id="a002_invoice--detail" category=PAGE_CAT_DETAIL>
            <div class="page__header">
                <div class="page__header-left">
                    {icon("invoices")}
                    <h1 class="page__title">
                        {move || if is_edit_mode() { "Редактирование счёта" } else { "Новый счёт" }}
                    </h1>
                </div>
            </div>

            <div class="page__content">
                <form class="details-form" on:submit=on_submit>
                    <Input
                        name=InvoiceField::Amount.name()
                        label="Сумма"
                        input_type="number"
                        placeholder="Сумма счёта"
                        value=Signal::derive(vm.field_value(InvoiceField::Amount))
                        on_input=Callback::new(move |v: String| vm.change_field(InvoiceField::Amount.name(), v))
                        error=Signal::derive(vm.field_error(InvoiceField::Amount))
                    />
                    <Select
                        name=InvoiceField::Customer.name()
                        label="Клиент"
                        value=Signal::derive(vm.field_value(InvoiceField::Customer))
                        options=Signal::derive(vm.customer_options())
                        on_change=Callback::new(move |v: String| vm.change_field(InvoiceField::Customer.name(), v))
                        error=Signal::derive(vm.field_error(InvoiceField::Customer))
                    />
                    <Select
                        name=InvoiceField::Status.name()
                        label="Статус"
                        value=Signal::derive(vm.field_value(InvoiceField::Status))
                        options=Signal::stored(status_options)
                        on_change=Callback::new(move |v: String| vm.change_field(InvoiceField::Status.name(), v))
                        error=Signal::derive(vm.field_error(InvoiceField::Status))
                    />

                    <div class="details-actions">
                        <button type="submit" class="button button--primary">
                            {icon("save")}
                            "Сохранить"
                        </button>
                        <A href=INVOICES_PATH attr:class="button button--secondary">
                            {icon("cancel")}
                            "К списку счетов"
                        </A>
                    </div>
                </form>
            </div>
        </PageFrame>
    }
}
