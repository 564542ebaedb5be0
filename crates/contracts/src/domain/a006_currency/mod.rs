//! Currencies and their exchange rate to the local currency

use crate::shared::metadata::{FieldKind, FieldMeta, ResourceGroup, ResourceMeta};

pub const FIELDS: &[FieldMeta] = &[
    FieldMeta::new("code", "Code", FieldKind::Text)
        .required()
        .max_length(3)
        .placeholder("USD"),
    FieldMeta::new("name", "Name", FieldKind::Text).required(),
    FieldMeta::new("rate", "Exchange rate", FieldKind::Number)
        .required()
        .min(0.0),
];

pub const RESOURCE: ResourceMeta = ResourceMeta {
    index: "a006",
    key: "a006_currency",
    endpoint: "currency",
    element_name: "Currency",
    list_name: "Currencies",
    icon: "dollar-sign",
    group: ResourceGroup::MasterData,
    display_field: "code",
    fields: FIELDS,
    parent: None,
};
