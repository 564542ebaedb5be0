//! Proforma invoices (PI) and their lines.
//!
//! PI lines carry the per-SKU costs that buying price calculations start from.

pub mod aggregate;

use crate::shared::metadata::{
    reference, FieldKind, FieldMeta, ParentLink, ResourceGroup, ResourceMeta,
};

pub use aggregate::ProformaInvoiceDetail;

pub const FIELDS: &[FieldMeta] = &[
    FieldMeta::new("code", "PI number", FieldKind::Text).required(),
    FieldMeta::new("date", "Date", FieldKind::Date).required(),
    reference("purchaseOrderId", "Purchase order", "a014_purchase_order", "code").required(),
    reference("currencyId", "Currency", "a006_currency", "code"),
    FieldMeta::new("notes", "Notes", FieldKind::TextArea).hidden_in_list(),
];

pub const RESOURCE: ResourceMeta = ResourceMeta {
    index: "a015",
    key: "a015_proforma_invoice",
    endpoint: "proforma-invoice",
    element_name: "Proforma invoice",
    list_name: "Proforma invoices",
    icon: "invoices",
    group: ResourceGroup::Transaction,
    display_field: "code",
    fields: FIELDS,
    parent: None,
};

pub const DETAIL_FIELDS: &[FieldMeta] = &[
    reference("proformaInvoiceId", "Proforma invoice", "a015_proforma_invoice", "code").required(),
    FieldMeta::new("sku", "SKU", FieldKind::Text).required(),
    FieldMeta::new("prodCost", "Product cost", FieldKind::Money)
        .required()
        .min(0.0),
    FieldMeta::new("firstMileCost", "First-mile cost", FieldKind::Money).min(0.0),
    FieldMeta::new("lastMileCost", "Last-mile cost", FieldKind::Money).min(0.0),
    FieldMeta::new("orderedQty", "Ordered qty", FieldKind::Number)
        .required()
        .min(0.0),
    FieldMeta::new("sellingPrice", "Selling price", FieldKind::Money).min(0.0),
];

pub const DETAIL_RESOURCE: ResourceMeta = ResourceMeta {
    index: "a015",
    key: "a015_proforma_invoice_detail",
    endpoint: "pi-detail",
    element_name: "PI line",
    list_name: "PI lines",
    icon: "list",
    group: ResourceGroup::Transaction,
    display_field: "sku",
    fields: DETAIL_FIELDS,
    parent: Some(ParentLink {
        resource: "a015_proforma_invoice",
        field: "proformaInvoiceId",
    }),
};
