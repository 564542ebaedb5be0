//! Payments made against proforma invoices

use crate::shared::metadata::{reference, FieldKind, FieldMeta, ResourceGroup, ResourceMeta};

pub const FIELDS: &[FieldMeta] = &[
    reference("proformaInvoiceId", "Proforma invoice", "a015_proforma_invoice", "code").required(),
    FieldMeta::new("date", "Date", FieldKind::Date).required(),
    reference("bankId", "Bank", "a005_bank", "name").required(),
    FieldMeta::new("amount", "Amount", FieldKind::Money)
        .required()
        .min(0.0),
    FieldMeta::new("reference", "Reference", FieldKind::Text),
];

pub const RESOURCE: ResourceMeta = ResourceMeta {
    index: "a020",
    key: "a020_pi_payment",
    endpoint: "pi-payment",
    element_name: "PI payment",
    list_name: "PI payments",
    icon: "credit-card",
    group: ResourceGroup::Transaction,
    display_field: "reference",
    fields: FIELDS,
    parent: None,
};
