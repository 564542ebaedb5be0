//! CX invoices: what the forwarder actually billed against a quotation

pub mod aggregate;
pub mod form;

use crate::shared::metadata::{
    reference, FieldKind, FieldMeta, ParentLink, ResourceGroup, ResourceMeta,
};

pub use aggregate::{CxInvoice, CxInvoiceDetail};
pub use form::{CxInvoiceDetailForm, CxInvoiceField, CxInvoiceRefs};

pub const FIELDS: &[FieldMeta] = &[
    FieldMeta::new("code", "Invoice number", FieldKind::Text).required(),
    FieldMeta::new("date", "Date", FieldKind::Date).required(),
    reference("cxQuotationId", "Quotation", "a016_cx_quotation", "code").required(),
    reference("forwarderId", "Forwarder", "a012_forwarder", "name").required(),
    reference("currencyId", "Currency", "a006_currency", "code"),
    FieldMeta::new("notes", "Notes", FieldKind::TextArea).hidden_in_list(),
];

pub const RESOURCE: ResourceMeta = ResourceMeta {
    index: "a017",
    key: "a017_cx_invoice",
    endpoint: "cx-invoice",
    element_name: "CX invoice",
    list_name: "CX invoices",
    icon: "file-text",
    group: ResourceGroup::Transaction,
    display_field: "code",
    fields: FIELDS,
    parent: None,
};

pub const DETAIL_FIELDS: &[FieldMeta] = &[
    reference("cxInvoiceId", "Invoice", "a017_cx_invoice", "code").required(),
    reference(
        "cxQuotationDetailId",
        "Quotation line",
        "a016_cx_quotation_detail",
        "description",
    )
    .hidden_in_list(),
    FieldMeta::new("description", "Description", FieldKind::Text).required(),
    FieldMeta::new("rate", "Rate", FieldKind::Money).min(0.0),
    FieldMeta::new("qty", "Qty", FieldKind::Number).min(0.0),
    FieldMeta::new("amount", "Amount", FieldKind::Money).read_only(),
    FieldMeta::new("exchangeRate", "Exchange rate", FieldKind::Number)
        .min(0.0)
        .hidden_in_list(),
    FieldMeta::new("amountLocal", "Amount (local)", FieldKind::Money).read_only(),
    FieldMeta::new("paidAmount", "Paid", FieldKind::Money).min(0.0),
    FieldMeta::new("outstanding", "Outstanding", FieldKind::Money).read_only(),
];

pub const DETAIL_RESOURCE: ResourceMeta = ResourceMeta {
    index: "a017",
    key: "a017_cx_invoice_detail",
    endpoint: "cx-invoice-detail",
    element_name: "Invoice line",
    list_name: "Invoice lines",
    icon: "list",
    group: ResourceGroup::Transaction,
    display_field: "description",
    fields: DETAIL_FIELDS,
    parent: Some(ParentLink {
        resource: "a017_cx_invoice",
        field: "cxInvoiceId",
    }),
};
