//! Lookup of resource descriptors by key

use crate::shared::metadata::{ResourceGroup, ResourceMeta};
use once_cell::sync::Lazy;
use std::collections::HashMap;

use super::*;

/// Every resource in sidebar order
static RESOURCES: &[ResourceMeta] = &[
    a001_country::RESOURCE,
    a002_province::RESOURCE,
    a003_city::RESOURCE,
    a004_warehouse::RESOURCE,
    a005_bank::RESOURCE,
    a006_currency::RESOURCE,
    a007_cost_setting::RESOURCE,
    a008_product_category::RESOURCE,
    a009_uom::RESOURCE,
    a010_channel::RESOURCE,
    a011_variant::RESOURCE,
    a012_forwarder::RESOURCE,
    a013_store::RESOURCE,
    a014_purchase_order::RESOURCE,
    a014_purchase_order::DETAIL_RESOURCE,
    a015_proforma_invoice::RESOURCE,
    a015_proforma_invoice::DETAIL_RESOURCE,
    a016_cx_quotation::RESOURCE,
    a016_cx_quotation::DETAIL_RESOURCE,
    a017_cx_invoice::RESOURCE,
    a017_cx_invoice::DETAIL_RESOURCE,
    a018_goods_receipt::RESOURCE,
    a019_last_mile::RESOURCE,
    a020_pi_payment::RESOURCE,
    a021_buying_price::RESOURCE,
    a021_buying_price::DETAIL_RESOURCE,
    a022_selling_price::RESOURCE,
    a022_selling_price::DETAIL_RESOURCE,
];

static BY_KEY: Lazy<HashMap<&'static str, &'static ResourceMeta>> =
    Lazy::new(|| RESOURCES.iter().map(|r| (r.key, r)).collect());

pub fn all_resources() -> &'static [ResourceMeta] {
    RESOURCES
}

pub fn resource(key: &str) -> Option<&'static ResourceMeta> {
    BY_KEY.get(key).copied()
}

/// Header resources of a sidebar group. Line items are reached through
/// their header and are not listed.
pub fn resources_in(group: ResourceGroup) -> impl Iterator<Item = &'static ResourceMeta> {
    RESOURCES
        .iter()
        .filter(move |r| r.group == group && !r.is_line_item())
}

/// Line-item resources whose parent is `key`
pub fn children_of(key: &str) -> Vec<&'static ResourceMeta> {
    RESOURCES
        .iter()
        .filter(|r| r.parent.map(|p| p.resource) == Some(key))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::metadata::FieldKind;
    use std::collections::HashSet;

    #[test]
    fn test_keys_are_unique() {
        let keys: HashSet<_> = all_resources().iter().map(|r| r.key).collect();
        assert_eq!(keys.len(), all_resources().len());
        assert_eq!(BY_KEY.len(), all_resources().len());
    }

    #[test]
    fn test_references_resolve() {
        for r in all_resources() {
            for f in r.fields {
                if let FieldKind::Reference { resource: target, display } = f.kind {
                    let target_meta = resource(target)
                        .unwrap_or_else(|| panic!("{}.{} -> unknown {}", r.key, f.name, target));
                    assert!(
                        target_meta.field(display).is_some(),
                        "{}.{} displays missing field {}.{}",
                        r.key,
                        f.name,
                        target,
                        display
                    );
                }
            }
        }
    }

    #[test]
    fn test_every_resource_lists_something() {
        for r in all_resources() {
            assert!(r.list_fields().next().is_some(), "{} has no list columns", r.key);
            assert!(r.field(r.display_field).is_some(), "{} display field", r.key);
        }
    }

    #[test]
    fn test_parent_links() {
        for r in all_resources() {
            if let Some(parent) = r.parent {
                assert!(resource(parent.resource).is_some());
                assert!(r.field(parent.field).is_some(), "{} lacks {}", r.key, parent.field);
            }
        }
        let children: Vec<_> = children_of("a021_buying_price").iter().map(|r| r.key).collect();
        assert_eq!(children, vec!["a021_buying_price_detail"]);
        assert!(children_of("a001_country").is_empty());
    }

    #[test]
    fn test_groups() {
        assert_eq!(resources_in(ResourceGroup::MasterData).count(), 13);
        let pricing: Vec<_> = resources_in(ResourceGroup::Pricing).map(|r| r.key).collect();
        assert_eq!(pricing, vec!["a021_buying_price", "a022_selling_price"]);
        assert_eq!(resource("a010_channel").map(|r| r.endpoint), Some("channel"));
        assert!(resource("a999_missing").is_none());
    }
}
