//! Page categories for tab pages.
//!
//! Every page rendered inside a tab carries an HTML `id` of the form
//! `{resource}--{category}` (e.g. `"a001_country--list"`) and a
//! `data-page-category` attribute with one of the constants below.

/// Table of records
pub const PAGE_CAT_LIST: &str = "list";

/// Create / edit form for a single record
pub const PAGE_CAT_DETAIL: &str = "detail";

pub fn page_id(resource: &str, category: &str) -> String {
    format!("{}--{}", resource, category)
}

/// Validate that a page id matches the `{resource}--{category}` format.
pub fn is_valid_page_id(id: &str) -> bool {
    let parts: Vec<&str> = id.splitn(2, "--").collect();
    parts.len() == 2 && !parts[0].is_empty() && !parts[1].is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_id() {
        let id = page_id("a021_buying_price_detail", PAGE_CAT_DETAIL);
        assert_eq!(id, "a021_buying_price_detail--detail");
        assert!(is_valid_page_id(&id));
        assert!(!is_valid_page_id("a001_country"));
        assert!(!is_valid_page_id("--list"));
    }
}
