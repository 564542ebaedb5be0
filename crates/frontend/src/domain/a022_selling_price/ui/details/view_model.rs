use super::model;
use crate::system::auth::context::{failure_message, AuthState};
use contracts::domain::a021_buying_price::BuyingPriceDetail;
use contracts::domain::a022_selling_price::{
    SellingPriceDetailForm, SellingPriceField, SellingPriceRefs,
};
use contracts::domain::common::RecordId;
use contracts::shared::recalc::Recalculate;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[derive(Clone, Copy)]
pub struct SellingPriceLineViewModel {
    pub form: RwSignal<SellingPriceDetailForm>,
    pub buying_price_details: RwSignal<Vec<BuyingPriceDetail>>,
    pub error: RwSignal<Option<String>>,
    pub loading: RwSignal<bool>,
    pub saving: RwSignal<bool>,
}

impl SellingPriceLineViewModel {
    pub fn new(parent_id: Option<&str>) -> Self {
        Self {
            form: RwSignal::new(SellingPriceDetailForm::new_for(
                parent_id.and_then(RecordId::from_string),
                0.0,
            )),
            buying_price_details: RwSignal::new(Vec::new()),
            error: RwSignal::new(None),
            loading: RwSignal::new(false),
            saving: RwSignal::new(false),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.form.with(|f| f.is_edit_mode())
    }

    pub fn buying_price_options(&self) -> Vec<(String, String)> {
        self.buying_price_details
            .with(|d| model::buying_price_options(d))
    }

    pub fn change(&self, field: SellingPriceField, value: &str) {
        let details = self.buying_price_details;
        self.form.update(|f| {
            details.with_untracked(|d| {
                f.apply_change(field, value, &SellingPriceRefs { buying_price_details: d });
            })
        });
    }

    pub fn load_if_needed(&self, id: Option<String>, set_auth_state: WriteSignal<AuthState>) {
        let vm = *self;
        spawn_local(async move {
            vm.loading.set(true);
            match id {
                Some(existing_id) => match model::fetch_by_id(&existing_id).await {
                    Ok(detail) => vm.form.set(SellingPriceDetailForm::from_detail(&detail)),
                    Err(e) => {
                        log::error!("failed to load selling price line {}: {}", existing_id, e);
                        vm.error.set(Some(failure_message(
                            "load selling price line",
                            &e,
                            set_auth_state,
                        )));
                    }
                },
                None => {
                    // a new line starts with the fee of the header's channel
                    let header_id = vm.form.with_untracked(|f| f.selling_price_id.clone());
                    if let Some(h) = header_id {
                        match model::fetch_channel_fee(&h).await {
                            Ok(fee) => vm.form.set(SellingPriceDetailForm::new_for(Some(h), fee)),
                            Err(e) => log::error!("failed to load channel fee of {}: {}", h, e),
                        }
                    }
                }
            }

            match model::fetch_buying_price_details().await {
                Ok(details) => vm.buying_price_details.set(details),
                Err(e) => {
                    log::error!("failed to load buying price lines: {}", e);
                    if vm.error.get_untracked().is_none() {
                        vm.error.set(Some(failure_message(
                            "load buying price lines",
                            &e,
                            set_auth_state,
                        )));
                    }
                }
            }
            vm.loading.set(false);
        });
    }

    pub fn save_command(&self, on_saved: Callback<()>, set_auth_state: WriteSignal<AuthState>) {
        if self.saving.get_untracked() {
            return;
        }
        let current = self.form.get_untracked();
        if let Err(msg) = current.validate() {
            self.error.set(Some(msg));
            return;
        }

        self.error.set(None);
        self.saving.set(true);
        let vm = *self;
        spawn_local(async move {
            let result = model::save_form(&current.to_detail()).await;
            vm.saving.set(false);
            match result {
                Ok(()) => {
                    log::info!("saved selling price line {}", current.sku);
                    on_saved.run(());
                }
                Err(e) => {
                    log::error!("failed to save selling price line: {}", e);
                    vm.error.set(Some(failure_message(
                        "save selling price line",
                        &e,
                        set_auth_state,
                    )));
                }
            }
        });
    }
}
