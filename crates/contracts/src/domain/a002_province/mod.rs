//! Provinces, each inside a country

use crate::shared::metadata::{reference, FieldKind, FieldMeta, ResourceGroup, ResourceMeta};

pub const FIELDS: &[FieldMeta] = &[
    FieldMeta::new("name", "Name", FieldKind::Text).required(),
    reference("countryId", "Country", "a001_country", "name").required(),
];

pub const RESOURCE: ResourceMeta = ResourceMeta {
    index: "a002",
    key: "a002_province",
    endpoint: "province",
    element_name: "Province",
    list_name: "Provinces",
    icon: "map",
    group: ResourceGroup::MasterData,
    display_field: "name",
    fields: FIELDS,
    parent: None,
};
