//! Selling price calculations: channel fee and margin on top of the cost
//! worked out in a buying price line.

pub mod aggregate;
pub mod form;

use crate::shared::metadata::{
    reference, FieldKind, FieldMeta, ParentLink, ResourceGroup, ResourceMeta,
};

pub use aggregate::{SellingPrice, SellingPriceDetail};
pub use form::{SellingPriceDetailForm, SellingPriceField, SellingPriceRefs};

pub const FIELDS: &[FieldMeta] = &[
    FieldMeta::new("code", "Number", FieldKind::Text).required(),
    FieldMeta::new("date", "Date", FieldKind::Date).required(),
    reference("channelId", "Channel", "a010_channel", "name").required(),
    FieldMeta::new("notes", "Notes", FieldKind::TextArea).hidden_in_list(),
];

pub const RESOURCE: ResourceMeta = ResourceMeta {
    index: "a022",
    key: "a022_selling_price",
    endpoint: "selling-price",
    element_name: "Selling price",
    list_name: "Selling prices",
    icon: "tag",
    group: ResourceGroup::Pricing,
    display_field: "code",
    fields: FIELDS,
    parent: None,
};

pub const DETAIL_FIELDS: &[FieldMeta] = &[
    reference("sellingPriceId", "Selling price", "a022_selling_price", "code").required(),
    reference(
        "buyingPriceDetailId",
        "Buying price line",
        "a021_buying_price_detail",
        "sku",
    )
    .required(),
    FieldMeta::new("sku", "SKU", FieldKind::Text).read_only(),
    FieldMeta::new("unitCost", "Unit cost", FieldKind::Money).min(0.0),
    FieldMeta::new("channelFeePercent", "Fee, %", FieldKind::Number)
        .min(0.0)
        .max(100.0),
    FieldMeta::new("sellingPrice", "Selling price", FieldKind::Money).min(0.0),
    FieldMeta::new("channelFee", "Channel fee", FieldKind::Money).read_only(),
    FieldMeta::new("margin", "Margin", FieldKind::Money).read_only(),
    FieldMeta::new("marginPercent", "Margin, %", FieldKind::Number).read_only(),
];

pub const DETAIL_RESOURCE: ResourceMeta = ResourceMeta {
    index: "a022",
    key: "a022_selling_price_detail",
    endpoint: "selling-price-detail",
    element_name: "Selling price line",
    list_name: "Selling price lines",
    icon: "list",
    group: ResourceGroup::Pricing,
    display_field: "sku",
    fields: DETAIL_FIELDS,
    parent: Some(ParentLink {
        resource: "a022_selling_price",
        field: "sellingPriceId",
    }),
};
