//! Cost settings: named surcharges added on top of landed cost

pub mod aggregate;

use crate::shared::metadata::{FieldKind, FieldMeta, ResourceGroup, ResourceMeta};

pub use aggregate::CostSetting;

pub const FIELDS: &[FieldMeta] = &[
    FieldMeta::new("name", "Name", FieldKind::Text).required(),
    FieldMeta::new("amount", "Amount", FieldKind::Money)
        .required()
        .min(0.0),
    FieldMeta::new("notes", "Notes", FieldKind::TextArea).hidden_in_list(),
];

pub const RESOURCE: ResourceMeta = ResourceMeta {
    index: "a007",
    key: "a007_cost_setting",
    endpoint: "cost-setting",
    element_name: "Cost setting",
    list_name: "Cost settings",
    icon: "percent",
    group: ResourceGroup::MasterData,
    display_field: "name",
    fields: FIELDS,
    parent: None,
};
