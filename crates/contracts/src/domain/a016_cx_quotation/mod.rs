//! CX quotations: freight/customs cost offers from a forwarder

pub mod aggregate;

use crate::shared::metadata::{
    reference, FieldKind, FieldMeta, ParentLink, ResourceGroup, ResourceMeta,
};

pub use aggregate::CxQuotationDetail;

pub const FIELDS: &[FieldMeta] = &[
    FieldMeta::new("code", "Quotation number", FieldKind::Text).required(),
    FieldMeta::new("date", "Date", FieldKind::Date).required(),
    reference("forwarderId", "Forwarder", "a012_forwarder", "name").required(),
    reference("currencyId", "Currency", "a006_currency", "code"),
    FieldMeta::new("notes", "Notes", FieldKind::TextArea).hidden_in_list(),
];

pub const RESOURCE: ResourceMeta = ResourceMeta {
    index: "a016",
    key: "a016_cx_quotation",
    endpoint: "cx-quotation",
    element_name: "CX quotation",
    list_name: "CX quotations",
    icon: "file-text",
    group: ResourceGroup::Transaction,
    display_field: "code",
    fields: FIELDS,
    parent: None,
};

pub const DETAIL_FIELDS: &[FieldMeta] = &[
    reference("cxQuotationId", "Quotation", "a016_cx_quotation", "code").required(),
    FieldMeta::new("description", "Description", FieldKind::Text).required(),
    FieldMeta::new("rate", "Rate", FieldKind::Money)
        .required()
        .min(0.0),
    FieldMeta::new("qty", "Qty", FieldKind::Number).min(0.0),
    FieldMeta::new("exchangeRate", "Exchange rate", FieldKind::Number).min(0.0),
];

pub const DETAIL_RESOURCE: ResourceMeta = ResourceMeta {
    index: "a016",
    key: "a016_cx_quotation_detail",
    endpoint: "cx-quotation-detail",
    element_name: "Quotation line",
    list_name: "Quotation lines",
    icon: "list",
    group: ResourceGroup::Transaction,
    display_field: "description",
    fields: DETAIL_FIELDS,
    parent: Some(ParentLink {
        resource: "a016_cx_quotation",
        field: "cxQuotationId",
    }),
};
