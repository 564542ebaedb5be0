//! Units of measure

use crate::shared::metadata::{FieldKind, FieldMeta, ResourceGroup, ResourceMeta};

pub const FIELDS: &[FieldMeta] = &[
    FieldMeta::new("code", "Code", FieldKind::Text)
        .required()
        .max_length(10)
        .placeholder("PCS"),
    FieldMeta::new("name", "Name", FieldKind::Text).required(),
];

pub const RESOURCE: ResourceMeta = ResourceMeta {
    index: "a009",
    key: "a009_uom",
    endpoint: "uom",
    element_name: "Unit of measure",
    list_name: "Units of measure",
    icon: "ruler",
    group: ResourceGroup::MasterData,
    display_field: "code",
    fields: FIELDS,
    parent: None,
};
