use super::model;
use crate::system::auth::context::{failure_message, AuthState};
use contracts::domain::a016_cx_quotation::CxQuotationDetail;
use contracts::domain::a017_cx_invoice::{CxInvoiceDetailForm, CxInvoiceField, CxInvoiceRefs};
use contracts::domain::common::RecordId;
use contracts::shared::recalc::Recalculate;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[derive(Clone, Copy)]
pub struct CxInvoiceLineViewModel {
    pub form: RwSignal<CxInvoiceDetailForm>,
    pub quotation_lines: RwSignal<Vec<CxQuotationDetail>>,
    pub error: RwSignal<Option<String>>,
    pub loading: RwSignal<bool>,
    pub saving: RwSignal<bool>,
}

impl CxInvoiceLineViewModel {
    pub fn new(parent_id: Option<&str>) -> Self {
        Self {
            form: RwSignal::new(CxInvoiceDetailForm::new_for(
                parent_id.and_then(RecordId::from_string),
            )),
            quotation_lines: RwSignal::new(Vec::new()),
            error: RwSignal::new(None),
            loading: RwSignal::new(false),
            saving: RwSignal::new(false),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.form.with(|f| f.is_edit_mode())
    }

    pub fn quotation_line_options(&self) -> Vec<(String, String)> {
        self.quotation_lines.with(|lines| {
            lines
                .iter()
                .map(|l| (l.id.as_string(), l.description.clone()))
                .collect()
        })
    }

    pub fn change(&self, field: CxInvoiceField, value: &str) {
        let quotation_lines = self.quotation_lines;
        self.form.update(|f| {
            quotation_lines.with_untracked(|lines| {
                f.apply_change(field, value, &CxInvoiceRefs { quotation_lines: lines });
            })
        });
    }

    pub fn load_if_needed(&self, id: Option<String>, set_auth_state: WriteSignal<AuthState>) {
        let vm = *self;
        spawn_local(async move {
            vm.loading.set(true);
            if let Some(existing_id) = id {
                match model::fetch_by_id(&existing_id).await {
                    Ok(detail) => vm.form.set(CxInvoiceDetailForm::from_detail(&detail)),
                    Err(e) => {
                        log::error!("failed to load CX invoice line {}: {}", existing_id, e);
                        vm.error.set(Some(failure_message(
                            "load CX invoice line",
                            &e,
                            set_auth_state,
                        )));
                    }
                }
            }

            let header_id = vm.form.with_untracked(|f| f.cx_invoice_id.clone());
            let quotation_id = match &header_id {
                Some(h) => match model::fetch_header(h).await {
                    Ok(header) => header.cx_quotation_id,
                    Err(e) => {
                        log::error!("failed to load CX invoice {}: {}", h, e);
                        None
                    }
                },
                None => None,
            };

            match model::fetch_quotation_lines(quotation_id.as_ref()).await {
                Ok(lines) => vm.quotation_lines.set(lines),
                Err(e) => {
                    log::error!("failed to load quotation lines: {}", e);
                    if vm.error.get_untracked().is_none() {
                        vm.error.set(Some(failure_message(
                            "load quotation lines",
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
                Ok(()) => on_saved.run(()),
                Err(e) => {
                    log::error!("failed to save CX invoice line: {}", e);
                    vm.error.set(Some(failure_message(
                        "save CX invoice line",
                        &e,
                        set_auth_state,
                    )));
                }
            }
        });
    }
}
