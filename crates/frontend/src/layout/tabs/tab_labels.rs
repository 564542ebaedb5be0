//! Tab titles, derived from resource metadata

use super::tab_key::{parse_tab_key, TabTarget};
use contracts::domain::registry;

/// Human readable title for a tab key. Unknown keys are shown as is.
pub fn tab_label_for_key(key: &str) -> String {
    let Some(target) = parse_tab_key(key) else {
        return key.to_string();
    };
    let Some(meta) = registry::resource(target.resource()) else {
        return key.to_string();
    };
    match target {
        TabTarget::List { .. } => meta.list_name.to_string(),
        TabTarget::Existing { id, .. } => detail_tab_label(meta.element_name, &id),
        TabTarget::New { .. } => format!("New {}", meta.element_name.to_lowercase()),
    }
}

pub fn detail_tab_label(element_name: &str, identifier: &str) -> String {
    format!("{} {}", element_name, identifier)
}

/// Best label for a loaded record: its display field, else `#id`
pub fn pick_identifier(display: Option<&str>, id: &str) -> String {
    match display.map(str::trim) {
        Some(d) if !d.is_empty() => d.to_string(),
        _ => format!("#{}", id),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_and_detail_labels() {
        assert_eq!(tab_label_for_key("a001_country"), "Countries");
        assert_eq!(tab_label_for_key("a001_country:5"), "Country 5");
        assert_eq!(
            tab_label_for_key("a021_buying_price_detail:new-abc:3"),
            "New buying price line"
        );
    }

    #[test]
    fn test_unknown_key() {
        assert_eq!(tab_label_for_key("zz_unknown"), "zz_unknown");
        assert_eq!(tab_label_for_key(""), "");
    }

    #[test]
    fn test_pick_identifier() {
        assert_eq!(pick_identifier(Some("PO-001"), "4"), "PO-001");
        assert_eq!(pick_identifier(Some("  "), "4"), "#4");
        assert_eq!(pick_identifier(None, "4"), "#4");
    }
}
