use super::view_model::CxInvoiceLineViewModel;
use crate::shared::components::ui::{Input, Select};
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::{page_id, PAGE_CAT_DETAIL};
use crate::system::auth::context::use_auth;
use contracts::domain::a017_cx_invoice::{CxInvoiceDetailForm, CxInvoiceField};
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance};

#[component]
pub fn CxInvoiceLineDetails(
    id: Option<String>,
    parent_id: Option<String>,
    on_saved: Callback<()>,
    on_close: Callback<()>,
) -> impl IntoView {
    let (_, set_auth_state) = use_auth();
    let vm = CxInvoiceLineViewModel::new(parent_id.as_deref());
    vm.load_if_needed(id, set_auth_state);

    let busy = Signal::derive(move || vm.saving.get());

    let editable = move |label: &'static str,
                         input_type: &'static str,
                         field: CxInvoiceField,
                         get: fn(&CxInvoiceDetailForm) -> String| {
        view! {
            <Input
                label=label.to_string()
                input_type=input_type.to_string()
                value=Signal::derive(move || vm.form.with(get))
                on_input=Callback::new(move |v: String| vm.change(field, &v))
                disabled=busy
            />
        }
    };

    let derived = move |label: &'static str, get: fn(&CxInvoiceDetailForm) -> String| {
        view! {
            <Input
                label=label.to_string()
                value=Signal::derive(move || vm.form.with(get))
                readonly=true
            />
        }
    };

    view! {
        <PageFrame page_id=page_id("a017_cx_invoice_detail", PAGE_CAT_DETAIL) category=PAGE_CAT_DETAIL>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">
                        {move || if vm.is_edit_mode() { "Edit CX invoice line" } else { "New CX invoice line" }}
                    </h1>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| vm.save_command(on_saved, set_auth_state)
                        disabled=Signal::derive(move || vm.saving.get() || vm.loading.get())
                    >
                        {icon("save")}
                        {move || if vm.saving.get() { " Saving..." } else { " Save" }}
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| on_close.run(())
                    >
                        {icon("x")}
                        " Close"
                    </Button>
                </div>
            </div>

            <div class="page__content">
                {move || vm.error.get().map(|e| view! {
                    <div class="warning-box warning-box--error">
                        <span class="warning-box__icon">"⚠"</span>
                        <span class="warning-box__text">{e}</span>
                    </div>
                })}

                <div class="details-form">
                    <Select
                        label="Quotation line".to_string()
                        value=Signal::derive(move || vm.form.with(|f| f.cx_quotation_detail_id.clone()))
                        on_change=Callback::new(move |v: String| vm.change(CxInvoiceField::QuotationLine, &v))
                        options=Signal::derive(move || vm.quotation_line_options())
                        placeholder="Select quotation line".to_string()
                        disabled=busy
                    />
                    {editable("Description", "text", CxInvoiceField::Description, |f| f.description.clone())}
                    {editable("Rate", "number", CxInvoiceField::Rate, |f| f.rate.clone())}
                    {editable("Qty", "number", CxInvoiceField::Qty, |f| f.qty.clone())}
                    {derived("Amount", |f| f.amount.clone())}
                    {editable("Exchange rate", "number", CxInvoiceField::ExchangeRate, |f| f.exchange_rate.clone())}
                    {derived("Amount (local)", |f| f.amount_local.clone())}
                    {editable("Paid", "number", CxInvoiceField::PaidAmount, |f| f.paid_amount.clone())}
                    {derived("Outstanding", |f| f.outstanding.clone())}
                </div>
            </div>
        </PageFrame>
    }
}
