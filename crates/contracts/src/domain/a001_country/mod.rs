//! Countries

use crate::shared::metadata::{FieldKind, FieldMeta, ResourceGroup, ResourceMeta};

pub const FIELDS: &[FieldMeta] = &[
    FieldMeta::new("name", "Name", FieldKind::Text).required(),
    FieldMeta::new("code", "Code", FieldKind::Text)
        .required()
        .max_length(3)
        .placeholder("ID"),
];

pub const RESOURCE: ResourceMeta = ResourceMeta {
    index: "a001",
    key: "a001_country",
    endpoint: "country",
    element_name: "Country",
    list_name: "Countries",
    icon: "globe",
    group: ResourceGroup::MasterData,
    display_field: "name",
    fields: FIELDS,
    parent: None,
};
