use super::model;
use crate::system::auth::context::{failure_message, AuthState};
use contracts::domain::a007_cost_setting::aggregate::CostSetting;
use contracts::domain::a015_proforma_invoice::aggregate::ProformaInvoiceDetail;
use contracts::domain::a021_buying_price::{
    BuyingPriceDetailForm, BuyingPriceField, BuyingPriceRefs,
};
use contracts::domain::common::RecordId;
use contracts::shared::api::ApiError;
use contracts::shared::recalc::Recalculate;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[derive(Clone, Copy)]
pub struct BuyingPriceLineViewModel {
    pub form: RwSignal<BuyingPriceDetailForm>,
    pub pi_details: RwSignal<Vec<ProformaInvoiceDetail>>,
    pub cost_settings: RwSignal<Vec<CostSetting>>,
    pub error: RwSignal<Option<String>>,
    pub loading: RwSignal<bool>,
    pub saving: RwSignal<bool>,
}

impl BuyingPriceLineViewModel {
    pub fn new(parent_id: Option<&str>) -> Self {
        Self {
            form: RwSignal::new(BuyingPriceDetailForm::new_for(
                parent_id.and_then(RecordId::from_string),
            )),
            pi_details: RwSignal::new(Vec::new()),
            cost_settings: RwSignal::new(Vec::new()),
            error: RwSignal::new(None),
            loading: RwSignal::new(false),
            saving: RwSignal::new(false),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.form.with(|f| f.is_edit_mode())
    }

    pub fn pi_detail_options(&self) -> Vec<(String, String)> {
        self.pi_details
            .with(|d| d.iter().map(|l| (l.id.as_string(), l.label())).collect())
    }

    pub fn cost_setting_options(&self) -> Vec<(String, String)> {
        self.cost_settings.with(|s| {
            s.iter()
                .map(|c| (c.id.as_string(), format!("{} (+{:.2})", c.name, c.amount)))
                .collect()
        })
    }

    /// Every input goes through here so derived fields stay consistent
    pub fn change(&self, field: BuyingPriceField, value: &str) {
        let pi_details = self.pi_details;
        let cost_settings = self.cost_settings;
        self.form.update(|f| {
            pi_details.with_untracked(|pi| {
                cost_settings.with_untracked(|cs| {
                    let refs = BuyingPriceRefs {
                        pi_details: pi,
                        cost_settings: cs,
                    };
                    f.apply_change(field, value, &refs);
                })
            })
        });
    }

    /// Load the line (edit mode), then the PI lines of the header's
    /// proforma invoice and the surcharges
    pub fn load_if_needed(&self, id: Option<String>, set_auth_state: WriteSignal<AuthState>) {
        let vm = *self;
        spawn_local(async move {
            vm.loading.set(true);
            if let Some(existing_id) = id {
                match model::fetch_by_id(&existing_id).await {
                    Ok(detail) => vm.form.set(BuyingPriceDetailForm::from_detail(&detail)),
                    Err(e) => {
                        log::error!("failed to load buying price line {}: {}", existing_id, e);
                        vm.fail("load buying price line", &e, set_auth_state);
                    }
                }
            }

            let header_id = vm.form.with_untracked(|f| f.buying_price_id.clone());
            let invoice_id = match &header_id {
                Some(h) => match model::fetch_header(h).await {
                    Ok(header) => header.proforma_invoice_id,
                    Err(e) => {
                        log::error!("failed to load buying price {}: {}", h, e);
                        None
                    }
                },
                None => None,
            };

            match model::fetch_pi_details(invoice_id.as_ref()).await {
                Ok(lines) => vm.pi_details.set(lines),
                Err(e) => vm.fail("load PI lines", &e, set_auth_state),
            }
            match model::fetch_cost_settings().await {
                Ok(settings) => vm.cost_settings.set(settings),
                Err(e) => vm.fail("load cost settings", &e, set_auth_state),
            }
            vm.loading.set(false);
        });
    }

    /// Keeps the first failure of a load
    fn fail(&self, action: &str, e: &ApiError, set_auth_state: WriteSignal<AuthState>) {
        if self.error.get_untracked().is_none() {
            self.error.set(Some(failure_message(action, e, set_auth_state)));
        }
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
                    log::info!("saved buying price line {}", current.sku);
                    on_saved.run(());
                }
                Err(e) => {
                    log::error!("failed to save buying price line: {}", e);
                    vm.error.set(Some(failure_message(
                        "save buying price line",
                        &e,
                        set_auth_state,
                    )));
                }
            }
        });
    }
}
