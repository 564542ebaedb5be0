//! Buying price calculations.
//!
//! A buying price document points at a proforma invoice; each of its lines
//! picks a PI line and derives landed and true cost from it.

pub mod aggregate;
pub mod form;

use crate::shared::metadata::{
    reference, FieldKind, FieldMeta, ParentLink, ResourceGroup, ResourceMeta,
};

pub use aggregate::{BuyingPrice, BuyingPriceDetail};
pub use form::{BuyingPriceDetailForm, BuyingPriceField, BuyingPriceRefs};

pub const FIELDS: &[FieldMeta] = &[
    FieldMeta::new("code", "Number", FieldKind::Text).required(),
    FieldMeta::new("date", "Date", FieldKind::Date).required(),
    reference("proformaInvoiceId", "Proforma invoice", "a015_proforma_invoice", "code").required(),
    FieldMeta::new("notes", "Notes", FieldKind::TextArea).hidden_in_list(),
];

pub const RESOURCE: ResourceMeta = ResourceMeta {
    index: "a021",
    key: "a021_buying_price",
    endpoint: "buying-price",
    element_name: "Buying price",
    list_name: "Buying prices",
    icon: "calculator",
    group: ResourceGroup::Pricing,
    display_field: "code",
    fields: FIELDS,
    parent: None,
};

pub const DETAIL_FIELDS: &[FieldMeta] = &[
    reference("buyingPriceId", "Buying price", "a021_buying_price", "code").required(),
    reference("piDetailId", "PI line", "a015_proforma_invoice_detail", "sku").required(),
    FieldMeta::new("sku", "SKU", FieldKind::Text).read_only(),
    FieldMeta::new("prodCost", "Product cost", FieldKind::Money).min(0.0),
    FieldMeta::new("firstMileCost", "First mile", FieldKind::Money).min(0.0),
    FieldMeta::new("lastMileCost", "Last mile", FieldKind::Money).min(0.0),
    FieldMeta::new("orderedQty", "Qty", FieldKind::Number).min(0.0),
    FieldMeta::new("sellingPrice", "Selling price", FieldKind::Money).hidden_in_list(),
    FieldMeta::new("landedCost", "Landed cost", FieldKind::Money).read_only(),
    FieldMeta::new("landedCostPerUnit", "Landed / unit", FieldKind::Money).read_only(),
    reference("trueCostId", "Surcharge", "a007_cost_setting", "name").hidden_in_list(),
    FieldMeta::new("trueCost", "True cost", FieldKind::Money).read_only(),
    FieldMeta::new("trueCostPerUnit", "True cost / unit", FieldKind::Money).read_only(),
];

pub const DETAIL_RESOURCE: ResourceMeta = ResourceMeta {
    index: "a021",
    key: "a021_buying_price_detail",
    endpoint: "buying-price-detail",
    element_name: "Buying price line",
    list_name: "Buying price lines",
    icon: "list",
    group: ResourceGroup::Pricing,
    display_field: "sku",
    fields: DETAIL_FIELDS,
    parent: Some(ParentLink {
        resource: "a021_buying_price",
        field: "buyingPriceId",
    }),
};
