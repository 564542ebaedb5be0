use super::model::{self, ReferenceOptions};
use crate::shared::date_utils::today;
use crate::system::auth::context::{failure_message, AuthState};
use contracts::shared::form::FormRecord;
use contracts::shared::metadata::{FieldMeta, ResourceMeta};
use leptos::prelude::*;
use leptos::task::spawn_local;

/// ViewModel of the generic record form
#[derive(Clone, Copy)]
pub struct ResourceDetailsViewModel {
    pub meta: &'static ResourceMeta,
    pub form: RwSignal<FormRecord>,
    pub options: RwSignal<ReferenceOptions>,
    pub error: RwSignal<Option<String>>,
    pub loading: RwSignal<bool>,
    /// A save is in flight; the submit button is disabled meanwhile
    pub saving: RwSignal<bool>,
}

impl ResourceDetailsViewModel {
    /// New record, or line item of `parent_id` when given
    pub fn new(meta: &'static ResourceMeta, parent_id: Option<&str>) -> Self {
        Self {
            meta,
            form: RwSignal::new(initial_record(meta, parent_id)),
            options: RwSignal::new(ReferenceOptions::new()),
            error: RwSignal::new(None),
            loading: RwSignal::new(false),
            saving: RwSignal::new(false),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.form.with(|f| f.id().is_some())
    }

    pub fn options_for(&self, field: &FieldMeta) -> Vec<(String, String)> {
        self.options
            .with(|o| o.get(field.name).cloned().unwrap_or_default())
    }

    pub fn set_field(&self, field: &FieldMeta, raw: &str) {
        self.form.update(|f| f.set_input(field, raw));
    }

    /// Load dropdown options, and the record itself when `id` is given
    pub fn load_if_needed(
        &self,
        id: Option<String>,
        set_auth_state: WriteSignal<AuthState>,
        on_loaded: Callback<FormRecord>,
    ) {
        let vm = *self;
        spawn_local(async move {
            vm.loading.set(true);
            if let Some(existing_id) = id {
                match model::fetch_record(vm.meta, &existing_id).await {
                    Ok(record) => {
                        vm.form.set(record.clone());
                        on_loaded.run(record);
                    }
                    Err(e) => {
                        log::error!("failed to load {} {}: {}", vm.meta.endpoint, existing_id, e);
                        let what = format!("load {}", vm.meta.element_name.to_lowercase());
                        vm.error
                            .set(Some(failure_message(&what, &e, set_auth_state)));
                    }
                }
            }
            let (options, failed) = model::fetch_reference_options(vm.meta.reference_fields()).await;
            vm.options.set(options);
            if let Some(e) = failed {
                if vm.error.get_untracked().is_none() {
                    vm.error
                        .set(Some(failure_message("load options", &e, set_auth_state)));
                }
            }
            vm.loading.set(false);
        });
    }

    /// Validate and save. Does nothing while a previous save is running.
    pub fn save_command(&self, on_saved: Callback<()>, set_auth_state: WriteSignal<AuthState>) {
        if self.saving.get_untracked() {
            return;
        }
        let current = self.form.get_untracked();
        if let Err(msg) = current.validate(self.meta) {
            self.error.set(Some(msg));
            return;
        }

        self.error.set(None);
        self.saving.set(true);
        let vm = *self;
        spawn_local(async move {
            let result = model::save(vm.meta, &current).await;
            vm.saving.set(false);
            match result {
                Ok(_) => {
                    log::info!("saved {}", vm.meta.endpoint);
                    on_saved.run(());
                }
                Err(e) => {
                    log::error!("failed to save {}: {}", vm.meta.endpoint, e);
                    let what = format!("save {}", vm.meta.element_name.to_lowercase());
                    vm.error
                        .set(Some(failure_message(&what, &e, set_auth_state)));
                }
            }
        });
    }
}

fn initial_record(meta: &ResourceMeta, parent_id: Option<&str>) -> FormRecord {
    let mut record = FormRecord::new_for(meta, today());
    if let Some((link, parent)) = meta.parent.zip(parent_id) {
        if let Some(field) = meta.field(link.field) {
            record.set_input(field, parent);
        }
    }
    record
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::registry;
    use serde_json::json;

    #[test]
    fn test_initial_record_links_parent() {
        let meta = registry::resource("a014_purchase_order_detail").unwrap();
        let link = meta.parent.unwrap();
        let record = initial_record(meta, Some("12"));
        assert_eq!(record.get(link.field), Some(&json!(12)));
        assert!(record.id().is_none());
    }

    #[test]
    fn test_initial_record_dates_default_to_today() {
        let meta = registry::resource("a014_purchase_order").unwrap();
        let record = initial_record(meta, None);
        let date = meta.field("date").map(|f| record.input_value(f));
        assert_eq!(date, Some(today().format("%Y-%m-%d").to_string()));
    }
}
