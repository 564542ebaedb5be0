//! Warehouses

use crate::shared::metadata::{reference, FieldKind, FieldMeta, ResourceGroup, ResourceMeta};

pub const FIELDS: &[FieldMeta] = &[
    FieldMeta::new("code", "Code", FieldKind::Text).required(),
    FieldMeta::new("name", "Name", FieldKind::Text).required(),
    reference("cityId", "City", "a003_city", "name").required(),
    FieldMeta::new("address", "Address", FieldKind::TextArea).hidden_in_list(),
];

pub const RESOURCE: ResourceMeta = ResourceMeta {
    index: "a004",
    key: "a004_warehouse",
    endpoint: "warehouse",
    element_name: "Warehouse",
    list_name: "Warehouses",
    icon: "warehouse",
    group: ResourceGroup::MasterData,
    display_field: "name",
    fields: FIELDS,
    parent: None,
};
