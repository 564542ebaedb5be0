//! Tab keys: what a tab shows is fully encoded in its key.
//!
//! * `"{resource}"` - list page of a resource
//! * `"{resource}:{id}"` - existing record
//! * `"{resource}:new-{uuid}"` - unsaved record, one tab per click
//! * `"{resource}:new-{uuid}:{parent_id}"` - unsaved line item of a header

use contracts::domain::common::RecordId;

const NEW_PREFIX: &str = "new-";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TabTarget {
    List {
        resource: String,
    },
    Existing {
        resource: String,
        id: String,
    },
    New {
        resource: String,
        parent_id: Option<String>,
    },
}

impl TabTarget {
    pub fn resource(&self) -> &str {
        match self {
            Self::List { resource } | Self::Existing { resource, .. } | Self::New { resource, .. } => {
                resource
            }
        }
    }
}

pub fn parse_tab_key(key: &str) -> Option<TabTarget> {
    let key = key.trim();
    if key.is_empty() {
        return None;
    }
    let Some((resource, rest)) = key.split_once(':') else {
        return Some(TabTarget::List {
            resource: key.to_string(),
        });
    };
    if resource.is_empty() || rest.is_empty() {
        return None;
    }
    let resource = resource.to_string();
    match rest.strip_prefix(NEW_PREFIX) {
        Some(new_part) => {
            let parent_id = new_part
                .split_once(':')
                .map(|(_, parent)| parent.to_string())
                .filter(|p| !p.is_empty());
            Some(TabTarget::New {
                resource,
                parent_id,
            })
        }
        None => Some(TabTarget::Existing {
            resource,
            id: rest.to_string(),
        }),
    }
}

pub fn list_key(resource: &str) -> String {
    resource.to_string()
}

pub fn detail_key(resource: &str, id: &RecordId) -> String {
    format!("{}:{}", resource, id.as_string())
}

pub fn new_detail_key(resource: &str, parent_id: Option<&str>) -> String {
    let token = uuid::Uuid::new_v4().simple().to_string();
    match parent_id {
        Some(parent) => format!("{}:{}{}:{}", resource, NEW_PREFIX, token, parent),
        None => format!("{}:{}{}", resource, NEW_PREFIX, token),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_key() {
        assert_eq!(
            parse_tab_key("a001_country"),
            Some(TabTarget::List {
                resource: "a001_country".into()
            })
        );
        assert_eq!(parse_tab_key(""), None);
        assert_eq!(parse_tab_key("a001_country:"), None);
    }

    #[test]
    fn test_existing_key() {
        let key = detail_key("a014_purchase_order", &RecordId::Number(42));
        assert_eq!(key, "a014_purchase_order:42");
        assert_eq!(
            parse_tab_key(&key),
            Some(TabTarget::Existing {
                resource: "a014_purchase_order".into(),
                id: "42".into()
            })
        );
        // text ids may contain the separator
        assert_eq!(
            parse_tab_key("a006_currency:ID:R"),
            Some(TabTarget::Existing {
                resource: "a006_currency".into(),
                id: "ID:R".into()
            })
        );
    }

    #[test]
    fn test_new_keys_are_unique() {
        let a = new_detail_key("a001_country", None);
        let b = new_detail_key("a001_country", None);
        assert_ne!(a, b);
        assert_eq!(
            parse_tab_key(&a),
            Some(TabTarget::New {
                resource: "a001_country".into(),
                parent_id: None
            })
        );
    }

    #[test]
    fn test_new_line_item_carries_parent() {
        let key = new_detail_key("a021_buying_price_detail", Some("7"));
        let target = parse_tab_key(&key).unwrap();
        assert_eq!(target.resource(), "a021_buying_price_detail");
        assert_eq!(
            target,
            TabTarget::New {
                resource: "a021_buying_price_detail".into(),
                parent_id: Some("7".into())
            }
        );
    }
}
