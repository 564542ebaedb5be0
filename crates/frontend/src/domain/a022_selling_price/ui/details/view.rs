use super::view_model::SellingPriceLineViewModel;
use crate::shared::components::ui::{Input, Select};
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::{page_id, PAGE_CAT_DETAIL};
use crate::system::auth::context::use_auth;
use contracts::domain::a022_selling_price::{SellingPriceDetailForm, SellingPriceField};
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance};

#[component]
pub fn SellingPriceLineDetails(
    id: Option<String>,
    parent_id: Option<String>,
    on_saved: Callback<()>,
    on_close: Callback<()>,
) -> impl IntoView {
    let (_, set_auth_state) = use_auth();
    let vm = SellingPriceLineViewModel::new(parent_id.as_deref());
    vm.load_if_needed(id, set_auth_state);

    let busy = Signal::derive(move || vm.saving.get());

    let editable = move |label: &'static str,
                         field: SellingPriceField,
                         get: fn(&SellingPriceDetailForm) -> String| {
        view! {
            <Input
                label=label.to_string()
                input_type="number".to_string()
                value=Signal::derive(move || vm.form.with(get))
                on_input=Callback::new(move |v: String| vm.change(field, &v))
                disabled=busy
            />
        }
    };

    let derived = move |label: &'static str, get: fn(&SellingPriceDetailForm) -> String| {
        view! {
            <Input
                label=label.to_string()
                value=Signal::derive(move || vm.form.with(get))
                readonly=true
            />
        }
    };

    view! {
        <PageFrame page_id=page_id("a022_selling_price_detail", PAGE_CAT_DETAIL) category=PAGE_CAT_DETAIL>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">
                        {move || if vm.is_edit_mode() { "Edit selling price line" } else { "New selling price line" }}
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
                        label="Buying price line".to_string()
                        value=Signal::derive(move || vm.form.with(|f| f.buying_price_detail_id.clone()))
                        on_change=Callback::new(move |v: String| vm.change(SellingPriceField::BuyingPriceDetail, &v))
                        options=Signal::derive(move || vm.buying_price_options())
                        placeholder="Select buying price line".to_string()
                        disabled=busy
                        required=true
                    />
                    {derived("SKU", |f| f.sku.clone())}
                    {editable("Unit cost", SellingPriceField::UnitCost, |f| f.unit_cost.clone())}
                    {editable("Channel fee, %", SellingPriceField::ChannelFeePercent, |f| f.channel_fee_percent.clone())}
                    {editable("Selling price", SellingPriceField::SellingPrice, |f| f.selling_price.clone())}
                    {derived("Channel fee", |f| f.channel_fee.clone())}
                    {derived("Margin", |f| f.margin.clone())}
                    {derived("Margin, %", |f| f.margin_percent.clone())}
                </div>
            </div>
        </PageFrame>
    }
}
