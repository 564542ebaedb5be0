use super::view_model::ResourceDetailsViewModel;
use crate::domain::resource::ui::list::ResourceList;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::{detail_tab_label, pick_identifier};
use crate::shared::components::ui::{Input, Select, Textarea};
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::{page_id, PAGE_CAT_DETAIL};
use crate::system::auth::context::use_auth;
use contracts::domain::registry;
use contracts::shared::form::FormRecord;
use contracts::shared::metadata::{FieldKind, FieldMeta, ResourceMeta};
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance};

/// Input for one field, picked by its kind
fn field_input(vm: ResourceDetailsViewModel, field: &'static FieldMeta, locked: bool) -> AnyView {
    let value = Signal::derive(move || vm.form.with(|f| f.input_value(field)));
    let on_change = Callback::new(move |raw: String| vm.set_field(field, &raw));
    let required = field.validation.required;
    let disabled = Signal::derive(move || locked || vm.saving.get());

    match field.kind {
        FieldKind::Reference { .. } => view! {
            <Select
                label=field.label.to_string()
                id=field.name.to_string()
                value=value
                on_change=on_change
                options=Signal::derive(move || vm.options_for(field))
                placeholder=format!("Select {}", field.label.to_lowercase())
                disabled=disabled
                required=required
            />
        }
        .into_any(),
        FieldKind::Enum(choices) => view! {
            <Select
                label=field.label.to_string()
                id=field.name.to_string()
                value=value
                on_change=on_change
                options=Signal::derive(move || {
                    choices.iter().map(|c| (c.to_string(), c.to_string())).collect::<Vec<_>>()
                })
                disabled=disabled
                required=required
            />
        }
        .into_any(),
        FieldKind::TextArea => view! {
            <Textarea
                label=field.label.to_string()
                id=field.name.to_string()
                value=value
                on_input=on_change
                placeholder=field.placeholder.unwrap_or_default().to_string()
                disabled=disabled
            />
        }
        .into_any(),
        kind => view! {
            <Input
                label=field.label.to_string()
                id=field.name.to_string()
                input_type=kind.input_type().to_string()
                value=value
                on_input=on_change
                placeholder=field.placeholder.unwrap_or_default().to_string()
                disabled=disabled
                readonly=field.read_only
                required=required
            />
        }
        .into_any(),
    }
}

/// Create / edit form for any resource described by metadata.
///
/// In edit mode the line items of the record are listed below the form.
#[component]
pub fn ResourceDetails(
    meta: &'static ResourceMeta,
    id: Option<String>,
    /// Header of a new line item
    parent_id: Option<String>,
    tab_key: String,
    on_saved: Callback<()>,
    on_close: Callback<()>,
) -> impl IntoView {
    let tabs_store =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let (_, set_auth_state) = use_auth();

    let vm = ResourceDetailsViewModel::new(meta, parent_id.as_deref());

    let on_loaded = Callback::new(move |record: FormRecord| {
        let id = record.id().map(|i| i.as_string()).unwrap_or_default();
        let display = record
            .get(meta.display_field)
            .and_then(|v| v.as_str().map(str::to_string));
        let title = detail_tab_label(meta.element_name, &pick_identifier(display.as_deref(), &id));
        tabs_store.update_tab_title(&tab_key, &title);
    });
    vm.load_if_needed(id, set_auth_state, on_loaded);

    let locked_field = meta
        .parent
        .filter(|_| parent_id.is_some())
        .map(|link| link.field);

    let record_id = Memo::new(move |_| vm.form.with(|f| f.id().map(|i| i.as_string())));
    let children = registry::children_of(meta.key);

    view! {
        <PageFrame page_id=page_id(meta.key, PAGE_CAT_DETAIL) category=PAGE_CAT_DETAIL>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">
                        {move || if vm.is_edit_mode() {
                            format!("Edit {}", meta.element_name.to_lowercase())
                        } else {
                            format!("New {}", meta.element_name.to_lowercase())
                        }}
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
                    {meta.fields.iter().map(|field| {
                        field_input(vm, field, locked_field == Some(field.name))
                    }).collect_view()}
                </div>

                {move || record_id.get().map(|header_id| {
                    children.iter().map(|child| view! {
                        <ResourceList meta=*child parent_id=header_id.clone() />
                    }).collect_view()
                })}
            </div>
        </PageFrame>
    }
}
