//! Last-mile shipments from the warehouse to stores

use crate::shared::metadata::{reference, FieldKind, FieldMeta, ResourceGroup, ResourceMeta};

pub const FIELDS: &[FieldMeta] = &[
    FieldMeta::new("code", "Number", FieldKind::Text).required(),
    FieldMeta::new("date", "Date", FieldKind::Date).required(),
    reference("goodsReceiptId", "Goods receipt", "a018_goods_receipt", "code"),
    reference("storeId", "Store", "a013_store", "name").required(),
    reference("forwarderId", "Forwarder", "a012_forwarder", "name"),
    FieldMeta::new("trackingNumber", "Tracking number", FieldKind::Text),
    FieldMeta::new("cost", "Cost", FieldKind::Money).min(0.0),
];

pub const RESOURCE: ResourceMeta = ResourceMeta {
    index: "a019",
    key: "a019_last_mile",
    endpoint: "last-mile",
    element_name: "Last-mile shipment",
    list_name: "Last-mile shipments",
    icon: "truck",
    group: ResourceGroup::Transaction,
    display_field: "code",
    fields: FIELDS,
    parent: None,
};
