//! Search, sort and the search box shared by list pages
use contracts::domain::common::RecordId;
use contracts::shared::form::FormRecord;
use contracts::shared::metadata::{FieldKind, ResourceMeta};
use leptos::ev::MouseEvent;
use leptos::prelude::*;
use std::cmp::Ordering;
use std::collections::HashMap;
use wasm_bindgen::JsCast;

use crate::shared::components::table::format_money;

/// Filters shorter than this are ignored
pub const MIN_FILTER_LEN: usize = 3;

/// Types that can be matched against the search box
pub trait Searchable {
    fn matches_filter(&self, filter: &str) -> bool;

    fn get_field_value(&self, field: &str) -> Option<String>;
}

/// Types that can be ordered by a named column
pub trait Sortable {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering;
}

/// Display text of referenced records, per field: field name -> id -> label
pub type ReferenceLabels = HashMap<&'static str, HashMap<String, String>>;

/// One table row of a generic list: the record id plus the text of each
/// list column
#[derive(Debug, Clone, PartialEq)]
pub struct ListRow {
    pub id: Option<RecordId>,
    pub cells: Vec<(&'static str, String)>,
}

impl ListRow {
    pub fn build(meta: &ResourceMeta, record: &FormRecord, labels: &ReferenceLabels) -> Self {
        let cells = meta
            .list_fields()
            .map(|field| {
                let raw = record.display_value(field);
                let text = match &field.kind {
                    FieldKind::Reference { .. } => labels
                        .get(field.name)
                        .and_then(|by_id| by_id.get(&raw))
                        .cloned()
                        .unwrap_or(raw),
                    FieldKind::Money if raw != "-" => {
                        format_money(contracts::shared::money::parse_amount(&raw))
                    }
                    _ => raw,
                };
                (field.name, text)
            })
            .collect();
        Self {
            id: record.id(),
            cells,
        }
    }

    pub fn cell(&self, field: &str) -> &str {
        self.cells
            .iter()
            .find(|(name, _)| *name == field)
            .map(|(_, text)| text.as_str())
            .unwrap_or("")
    }

    pub fn key(&self) -> String {
        self.id.as_ref().map(RecordId::as_string).unwrap_or_default()
    }
}

impl Searchable for ListRow {
    fn matches_filter(&self, filter: &str) -> bool {
        let filter = filter.trim().to_lowercase();
        self.cells
            .iter()
            .any(|(_, text)| text.to_lowercase().contains(&filter))
    }

    fn get_field_value(&self, field: &str) -> Option<String> {
        self.cells
            .iter()
            .find(|(name, _)| *name == field)
            .map(|(_, text)| text.clone())
    }
}

fn as_number(text: &str) -> Option<f64> {
    let cleaned: String = text.chars().filter(|c| !matches!(c, ' ' | ',')).collect();
    cleaned.parse::<f64>().ok().filter(|v| v.is_finite())
}

impl Sortable for ListRow {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        let a = self.cell(field);
        let b = other.cell(field);
        match (as_number(a), as_number(b)) {
            (Some(x), Some(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
            _ => a.to_lowercase().cmp(&b.to_lowercase()),
        }
    }
}

/// Byte ranges of `text` matching `filter` case-insensitively.
///
/// Matching walks `text` char by char, so every range starts and ends on a
/// char boundary even when lowercasing changes a char's byte length.
pub fn match_ranges(text: &str, filter: &str) -> Vec<(usize, usize)> {
    let needle: Vec<char> = filter.trim().to_lowercase().chars().collect();
    if needle.is_empty() {
        return Vec::new();
    }
    let chars: Vec<(usize, char)> = text.char_indices().collect();

    let mut ranges = Vec::new();
    let mut i = 0;
    while i < chars.len() {
        let mut matched = 0;
        let mut j = i;
        let mut failed = false;
        while matched < needle.len() && j < chars.len() {
            // a char only counts when its whole lowercase form matches
            for lower in chars[j].1.to_lowercase() {
                if needle.get(matched) == Some(&lower) {
                    matched += 1;
                } else {
                    failed = true;
                    break;
                }
            }
            if failed {
                break;
            }
            j += 1;
        }

        if !failed && matched == needle.len() {
            let end = chars.get(j).map(|(pos, _)| *pos).unwrap_or(text.len());
            ranges.push((chars[i].0, end));
            i = j;
        } else {
            i += 1;
        }
    }
    ranges
}

/// Highlight matches of `filter` in `text` (case-insensitive)
pub fn highlight_matches(text: &str, filter: &str) -> AnyView {
    if filter.trim().chars().count() < MIN_FILTER_LEN {
        return view! { <span>{text.to_string()}</span> }.into_any();
    }

    let ranges = match_ranges(text, filter);
    if ranges.is_empty() {
        return view! { <span>{text.to_string()}</span> }.into_any();
    }

    let mut parts: Vec<AnyView> = Vec::new();
    let mut last_pos = 0;

    for (start, end) in ranges {
        if start > last_pos {
            parts.push(view! { <span>{text[last_pos..start].to_string()}</span> }.into_any());
        }
        parts.push(view! {
            <span class="search-highlight">{text[start..end].to_string()}</span>
        }.into_any());
        last_pos = end;
    }

    if last_pos < text.len() {
        parts.push(view! { <span>{text[last_pos..].to_string()}</span> }.into_any());
    }

    view! { <>{parts}</> }.into_any()
}

pub fn sort_list<T: Sortable>(items: &mut [T], field: &str, ascending: bool) {
    items.sort_by(|a, b| {
        let cmp = a.compare_by_field(b, field);
        if ascending {
            cmp
        } else {
            cmp.reverse()
        }
    });
}

pub fn filter_list<T: Searchable>(items: Vec<T>, filter: &str) -> Vec<T> {
    if filter.trim().chars().count() < MIN_FILTER_LEN {
        return items;
    }

    items
        .into_iter()
        .filter(|item| item.matches_filter(filter))
        .collect()
}

/// Search box with debounce and a clear button
#[component]
pub fn SearchInput(
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_change: Callback<String>,
    #[prop(optional, into)] placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Search (min. 3 characters)...".to_string()
    } else {
        placeholder
    };

    let (input_value, set_input_value) = signal(value.get_untracked());

    let debounce_timeout = StoredValue::new(None::<i32>);

    let handle_input_change = move |new_value: String| {
        set_input_value.set(new_value.clone());

        if let Some(timeout_id) = debounce_timeout.get_value() {
            if let Some(w) = web_sys::window() {
                w.clear_timeout_with_handle(timeout_id);
            }
        }

        let Some(window) = web_sys::window() else {
            on_change.run(new_value);
            return;
        };
        let closure = wasm_bindgen::closure::Closure::once(move || {
            on_change.run(new_value);
        });

        match window.set_timeout_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref::<js_sys::Function>(),
            300,
        ) {
            Ok(timeout_id) => debounce_timeout.set_value(Some(timeout_id)),
            Err(_) => debounce_timeout.set_value(None),
        }
        closure.forget();
    };

    let is_filter_active = move || value.get().trim().chars().count() >= MIN_FILTER_LEN;

    let clear_filter = move |_| {
        set_input_value.set(String::new());
        on_change.run(String::new());
    };

    view! {
        <div class="search-input">
            <input
                type="text"
                class="search-input__field"
                class:search-input__field--active=is_filter_active
                placeholder=placeholder
                prop:value=move || input_value.get()
                on:input=move |ev| handle_input_change(event_target_value(&ev))
            />
            <Show when=move || !input_value.get().is_empty()>
                <button class="search-input__clear" on:click=clear_filter title="Clear">
                    {crate::shared::icons::icon("x")}
                </button>
            </Show>
        </div>
    }
}

/// Sort indicator for a column header
pub fn get_sort_indicator(current_field: &str, field: &str, ascending: bool) -> &'static str {
    if current_field == field {
        if ascending {
            " ▲"
        } else {
            " ▼"
        }
    } else {
        " ⇅"
    }
}

/// Click handler for a sortable header: same column flips direction,
/// a new column sorts ascending
pub fn create_sort_toggle(
    field: &'static str,
    sort_field: RwSignal<String>,
    sort_ascending: RwSignal<bool>,
) -> impl Fn(MouseEvent) + 'static {
    move |_| {
        if sort_field.get_untracked() == field {
            sort_ascending.update(|v| *v = !*v);
        } else {
            sort_field.set(field.to_string());
            sort_ascending.set(true);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::registry;
    use serde_json::json;

    fn rows() -> Vec<ListRow> {
        let meta = registry::resource("a003_city").unwrap();
        let mut labels = ReferenceLabels::new();
        labels.insert(
            "provinceId",
            HashMap::from([("1".to_string(), "West Java".to_string())]),
        );
        [
            json!({"id": 1, "name": "Bandung", "provinceId": 1}),
            json!({"id": 2, "name": "bekasi", "provinceId": 1}),
            json!({"id": 3, "name": "Aceh", "provinceId": 9}),
        ]
        .into_iter()
        .map(|v| ListRow::build(meta, &FormRecord::from_value(v), &labels))
        .collect()
    }

    #[test]
    fn test_reference_columns_show_labels() {
        let rows = rows();
        assert_eq!(rows[0].cell("provinceId"), "West Java");
        // unknown ids fall back to the raw value
        assert_eq!(rows[2].cell("provinceId"), "9");
        assert_eq!(rows[0].key(), "1");
    }

    #[test]
    fn test_filter_needs_three_chars() {
        assert_eq!(filter_list(rows(), "ba").len(), 3);
        let found = filter_list(rows(), "BAND");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].cell("name"), "Bandung");
        assert_eq!(filter_list(rows(), "west").len(), 2);
    }

    #[test]
    fn test_sort_is_case_insensitive_and_numeric_aware() {
        let mut items = rows();
        sort_list(&mut items, "name", true);
        let names: Vec<_> = items.iter().map(|r| r.cell("name").to_string()).collect();
        assert_eq!(names, vec!["Aceh", "Bandung", "bekasi"]);

        let mk = |v: &str| ListRow {
            id: None,
            cells: vec![("amount", v.to_string())],
        };
        let mut amounts = vec![mk("1 200.00"), mk("95.50"), mk("10.00")];
        sort_list(&mut amounts, "amount", false);
        assert_eq!(amounts[0].cell("amount"), "1 200.00");
        assert_eq!(amounts[2].cell("amount"), "10.00");
    }

    #[test]
    fn test_sort_indicator() {
        assert_eq!(get_sort_indicator("name", "name", true), " ▲");
        assert_eq!(get_sort_indicator("name", "name", false), " ▼");
        assert_eq!(get_sort_indicator("code", "name", true), " ⇅");
    }

    #[test]
    fn test_match_ranges_case_insensitive() {
        let text = "Steel bolt, STEEL nut";
        let found: Vec<_> = match_ranges(text, "steel")
            .into_iter()
            .map(|(s, e)| &text[s..e])
            .collect();
        assert_eq!(found, vec!["Steel", "STEEL"]);
        assert!(match_ranges(text, "copper").is_empty());
        assert!(match_ranges(text, "  ").is_empty());
    }

    #[test]
    fn test_match_ranges_with_length_changing_lowercase() {
        // Kelvin sign lowercases to a 1-byte 'k', dotted capital I to 3 bytes
        let text = "\u{212A}elvin \u{130}\u{130} steel";
        let ranges = match_ranges(text, "kel");
        assert_eq!(ranges.len(), 1);
        let (s, e) = ranges[0];
        assert_eq!(&text[s..e], "\u{212A}el");

        let ranges = match_ranges(text, "steel");
        assert_eq!(ranges.len(), 1);
        let (s, e) = ranges[0];
        assert_eq!(&text[s..e], "steel");

        for filter in ["i", "vin", "n \u{130}"] {
            for (s, e) in match_ranges(text, filter) {
                assert!(text.is_char_boundary(s) && text.is_char_boundary(e));
            }
        }
    }
}
