//! Bank accounts used for PI payments

use crate::shared::metadata::{reference, FieldKind, FieldMeta, ResourceGroup, ResourceMeta};

pub const FIELDS: &[FieldMeta] = &[
    FieldMeta::new("name", "Bank", FieldKind::Text).required(),
    FieldMeta::new("accountName", "Account name", FieldKind::Text).required(),
    FieldMeta::new("accountNumber", "Account number", FieldKind::Text).required(),
    reference("currencyId", "Currency", "a006_currency", "code"),
    FieldMeta::new("swiftCode", "SWIFT", FieldKind::Text)
        .max_length(11)
        .hidden_in_list(),
];

pub const RESOURCE: ResourceMeta = ResourceMeta {
    index: "a005",
    key: "a005_bank",
    endpoint: "bank",
    element_name: "Bank",
    list_name: "Banks",
    icon: "building",
    group: ResourceGroup::MasterData,
    display_field: "name",
    fields: FIELDS,
    parent: None,
};
