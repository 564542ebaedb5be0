//! Product variants identified by SKU

use crate::shared::metadata::{reference, FieldKind, FieldMeta, ResourceGroup, ResourceMeta};

pub const FIELDS: &[FieldMeta] = &[
    FieldMeta::new("sku", "SKU", FieldKind::Text).required(),
    FieldMeta::new("name", "Name", FieldKind::Text).required(),
    reference("productCategoryId", "Category", "a008_product_category", "name"),
    reference("uomId", "Unit", "a009_uom", "code"),
];

pub const RESOURCE: ResourceMeta = ResourceMeta {
    index: "a011",
    key: "a011_variant",
    endpoint: "variant",
    element_name: "Variant",
    list_name: "Variants",
    icon: "package",
    group: ResourceGroup::MasterData,
    display_field: "sku",
    fields: FIELDS,
    parent: None,
};
