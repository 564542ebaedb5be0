//! Goods receipts against purchase orders

use crate::shared::metadata::{reference, FieldKind, FieldMeta, ResourceGroup, ResourceMeta};

pub const FIELDS: &[FieldMeta] = &[
    FieldMeta::new("code", "Number", FieldKind::Text).required(),
    FieldMeta::new("date", "Date", FieldKind::Date).required(),
    reference("purchaseOrderId", "Purchase order", "a014_purchase_order", "code").required(),
    reference("warehouseId", "Warehouse", "a004_warehouse", "name").required(),
    FieldMeta::new("receivedBy", "Received by", FieldKind::Text),
    FieldMeta::new("notes", "Notes", FieldKind::TextArea).hidden_in_list(),
];

pub const RESOURCE: ResourceMeta = ResourceMeta {
    index: "a018",
    key: "a018_goods_receipt",
    endpoint: "goods-receipt",
    element_name: "Goods receipt",
    list_name: "Goods receipts",
    icon: "import",
    group: ResourceGroup::Transaction,
    display_field: "code",
    fields: FIELDS,
    parent: None,
};
