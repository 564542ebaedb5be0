//! Cities, each inside a province

use crate::shared::metadata::{reference, FieldKind, FieldMeta, ResourceGroup, ResourceMeta};

pub const FIELDS: &[FieldMeta] = &[
    FieldMeta::new("name", "Name", FieldKind::Text).required(),
    reference("provinceId", "Province", "a002_province", "name").required(),
    FieldMeta::new("postalCode", "Postal code", FieldKind::Text)
        .max_length(10)
        .hidden_in_list(),
];

pub const RESOURCE: ResourceMeta = ResourceMeta {
    index: "a003",
    key: "a003_city",
    endpoint: "city",
    element_name: "City",
    list_name: "Cities",
    icon: "map-pin",
    group: ResourceGroup::MasterData,
    display_field: "name",
    fields: FIELDS,
    parent: None,
};
