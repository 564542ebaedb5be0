//! Freight forwarders issuing CX quotations

use crate::shared::metadata::{FieldKind, FieldMeta, ResourceGroup, ResourceMeta};

pub const FIELDS: &[FieldMeta] = &[
    FieldMeta::new("name", "Name", FieldKind::Text).required(),
    FieldMeta::new("contactName", "Contact", FieldKind::Text),
    FieldMeta::new("phone", "Phone", FieldKind::Text),
    FieldMeta::new("email", "Email", FieldKind::Text).hidden_in_list(),
];

pub const RESOURCE: ResourceMeta = ResourceMeta {
    index: "a012",
    key: "a012_forwarder",
    endpoint: "forwarder",
    element_name: "Forwarder",
    list_name: "Forwarders",
    icon: "truck",
    group: ResourceGroup::MasterData,
    display_field: "name",
    fields: FIELDS,
    parent: None,
};
