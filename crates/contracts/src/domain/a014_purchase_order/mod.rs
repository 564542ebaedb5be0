//! Purchase orders and their lines

use crate::shared::metadata::{
    reference, FieldKind, FieldMeta, ParentLink, ResourceGroup, ResourceMeta,
};

pub const FIELDS: &[FieldMeta] = &[
    FieldMeta::new("code", "PO number", FieldKind::Text).required(),
    FieldMeta::new("date", "Date", FieldKind::Date).required(),
    FieldMeta::new("supplierName", "Supplier", FieldKind::Text).required(),
    reference("currencyId", "Currency", "a006_currency", "code").required(),
    reference("warehouseId", "Deliver to", "a004_warehouse", "name"),
    FieldMeta::new("notes", "Notes", FieldKind::TextArea).hidden_in_list(),
];

pub const RESOURCE: ResourceMeta = ResourceMeta {
    index: "a014",
    key: "a014_purchase_order",
    endpoint: "purchase-order",
    element_name: "Purchase order",
    list_name: "Purchase orders",
    icon: "shopping-cart",
    group: ResourceGroup::Transaction,
    display_field: "code",
    fields: FIELDS,
    parent: None,
};

pub const DETAIL_FIELDS: &[FieldMeta] = &[
    reference("purchaseOrderId", "Purchase order", "a014_purchase_order", "code").required(),
    reference("variantId", "Variant", "a011_variant", "sku").required(),
    FieldMeta::new("qty", "Qty", FieldKind::Number)
        .required()
        .min(0.0),
    FieldMeta::new("unitPrice", "Unit price", FieldKind::Money)
        .required()
        .min(0.0),
];

pub const DETAIL_RESOURCE: ResourceMeta = ResourceMeta {
    index: "a014",
    key: "a014_purchase_order_detail",
    endpoint: "purchase-order-detail",
    element_name: "PO line",
    list_name: "PO lines",
    icon: "list",
    group: ResourceGroup::Transaction,
    display_field: "qty",
    fields: DETAIL_FIELDS,
    parent: Some(ParentLink {
        resource: "a014_purchase_order",
        field: "purchaseOrderId",
    }),
};
