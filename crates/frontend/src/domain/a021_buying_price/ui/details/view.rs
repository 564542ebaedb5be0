use super::view_model::BuyingPriceLineViewModel;
use crate::shared::components::ui::{Input, Select};
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::{page_id, PAGE_CAT_DETAIL};
use crate::system::auth::context::use_auth;
use contracts::domain::a021_buying_price::{BuyingPriceDetailForm, BuyingPriceField};
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance};

#[component]
pub fn BuyingPriceLineDetails(
    id: Option<String>,
    parent_id: Option<String>,
    on_saved: Callback<()>,
    on_close: Callback<()>,
) -> impl IntoView {
    let (_, set_auth_state) = use_auth();
    let vm = BuyingPriceLineViewModel::new(parent_id.as_deref());
    vm.load_if_needed(id, set_auth_state);

    let busy = Signal::derive(move || vm.saving.get());

    // editable money / qty input
    let amount_input = move |label: &'static str,
                             field: BuyingPriceField,
                             get: fn(&BuyingPriceDetailForm) -> String| {
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

    let derived = move |label: &'static str, get: fn(&BuyingPriceDetailForm) -> String| {
        view! {
            <Input
                label=label.to_string()
                value=Signal::derive(move || vm.form.with(get))
                readonly=true
            />
        }
    };

    view! {
        <PageFrame page_id=page_id("a021_buying_price_detail", PAGE_CAT_DETAIL) category=PAGE_CAT_DETAIL>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">
                        {move || if vm.is_edit_mode() { "Edit buying price line" } else { "New buying price line" }}
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
                        label="PI line".to_string()
                        value=Signal::derive(move || vm.form.with(|f| f.pi_detail_id.clone()))
                        on_change=Callback::new(move |v: String| vm.change(BuyingPriceField::PiDetail, &v))
                        options=Signal::derive(move || vm.pi_detail_options())
                        placeholder="Select PI line".to_string()
                        disabled=busy
                        required=true
                    />
                    {derived("SKU", |f| f.sku.clone())}
                    {amount_input("Product cost", BuyingPriceField::ProdCost, |f| f.prod_cost.clone())}
                    {amount_input("First mile", BuyingPriceField::FirstMileCost, |f| f.first_mile_cost.clone())}
                    {amount_input("Last mile", BuyingPriceField::LastMileCost, |f| f.last_mile_cost.clone())}
                    {amount_input("Qty", BuyingPriceField::OrderedQty, |f| f.ordered_qty.clone())}
                    {amount_input("Selling price", BuyingPriceField::SellingPrice, |f| f.selling_price.clone())}
                    {derived("Landed cost", |f| f.landed_cost.clone())}
                    {derived("Landed / unit", |f| f.landed_cost_per_unit.clone())}
                    <Select
                        label="Surcharge".to_string()
                        value=Signal::derive(move || vm.form.with(|f| f.true_cost_id.clone()))
                        on_change=Callback::new(move |v: String| vm.change(BuyingPriceField::TrueCostSetting, &v))
                        options=Signal::derive(move || vm.cost_setting_options())
                        placeholder="No surcharge".to_string()
                        disabled=busy
                    />
                    {derived("True cost", |f| f.true_cost.clone())}
                    {derived("True cost / unit", |f| f.true_cost_per_unit.clone())}
                </div>
            </div>
        </PageFrame>
    }
}
