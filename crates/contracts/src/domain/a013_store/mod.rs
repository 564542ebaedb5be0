//! Stores selling through a channel

use crate::shared::metadata::{reference, FieldKind, FieldMeta, ResourceGroup, ResourceMeta};

pub const FIELDS: &[FieldMeta] = &[
    FieldMeta::new("name", "Name", FieldKind::Text).required(),
    reference("channelId", "Channel", "a010_channel", "name").required(),
    reference("warehouseId", "Warehouse", "a004_warehouse", "name"),
];

pub const RESOURCE: ResourceMeta = ResourceMeta {
    index: "a013",
    key: "a013_store",
    endpoint: "store",
    element_name: "Store",
    list_name: "Stores",
    icon: "shopping-cart",
    group: ResourceGroup::MasterData,
    display_field: "name",
    fields: FIELDS,
    parent: None,
};
