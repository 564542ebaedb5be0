//! Product categories

use crate::shared::metadata::{FieldKind, FieldMeta, ResourceGroup, ResourceMeta};

pub const FIELDS: &[FieldMeta] = &[
    FieldMeta::new("name", "Name", FieldKind::Text).required(),
    FieldMeta::new("description", "Description", FieldKind::TextArea).hidden_in_list(),
];

pub const RESOURCE: ResourceMeta = ResourceMeta {
    index: "a008",
    key: "a008_product_category",
    endpoint: "product-category",
    element_name: "Product category",
    list_name: "Product categories",
    icon: "layers",
    group: ResourceGroup::MasterData,
    display_field: "name",
    fields: FIELDS,
    parent: None,
};
