//! Sales channels; the fee feeds selling price calculations

pub mod aggregate;

use crate::shared::metadata::{FieldKind, FieldMeta, ResourceGroup, ResourceMeta};

pub use aggregate::Channel;

pub const FIELDS: &[FieldMeta] = &[
    FieldMeta::new("name", "Name", FieldKind::Text).required(),
    FieldMeta::new("feePercent", "Fee, %", FieldKind::Number)
        .min(0.0)
        .max(100.0),
];

pub const RESOURCE: ResourceMeta = ResourceMeta {
    index: "a010",
    key: "a010_channel",
    endpoint: "channel",
    element_name: "Channel",
    list_name: "Channels",
    icon: "store",
    group: ResourceGroup::MasterData,
    display_field: "name",
    fields: FIELDS,
    parent: None,
};
