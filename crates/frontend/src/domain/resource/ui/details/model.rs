use contracts::domain::common::RecordId;
use contracts::domain::registry;
use contracts::shared::api::ApiError;
use contracts::shared::form::FormRecord;
use contracts::shared::metadata::{FieldKind, FieldMeta, ResourceMeta};
use serde_json::Value;
use std::collections::HashMap;

use crate::layout::tabs::pick_identifier;
use crate::shared::http;
use crate::shared::list_utils::ReferenceLabels;

/// Dropdown options per reference field: field name -> (id, label)
pub type ReferenceOptions = HashMap<&'static str, Vec<(String, String)>>;

/// `(id, label)` pairs for a dropdown; records without an id are skipped
pub fn option_pairs(records: &[Value], display: &str) -> Vec<(String, String)> {
    records
        .iter()
        .filter_map(|record| {
            let id = record.get("id").and_then(RecordId::from_json)?.as_string();
            let label = match record.get(display) {
                Some(Value::String(s)) => Some(s.clone()),
                Some(Value::Number(n)) => Some(n.to_string()),
                _ => None,
            };
            Some((id.clone(), pick_identifier(label.as_deref(), &id)))
        })
        .collect()
}

/// Lookup tables for list cells, built from the same options
pub fn labels_from_options(options: &ReferenceOptions) -> ReferenceLabels {
    options
        .iter()
        .map(|(field, pairs)| (*field, pairs.iter().cloned().collect()))
        .collect()
}

/// Header id a line item belongs to, `None` for plain resources
pub fn parent_value(meta: &ResourceMeta, record: &FormRecord) -> Option<RecordId> {
    let link = meta.parent?;
    record.get(link.field).and_then(RecordId::from_json)
}

pub fn belongs_to(meta: &ResourceMeta, record: &FormRecord, parent_id: &str) -> bool {
    contracts::domain::common::matches_selection(parent_value(meta, record).as_ref(), parent_id)
}

pub async fn fetch_record(meta: &ResourceMeta, id: &str) -> Result<FormRecord, ApiError> {
    let value = http::get_one(meta.endpoint, id).await?;
    Ok(FormRecord::from_value(value))
}

/// Rows of a resource, restricted to one header for line items
pub async fn fetch_records(
    meta: &ResourceMeta,
    parent_id: Option<&str>,
) -> Result<Vec<FormRecord>, ApiError> {
    let filter = meta.parent.zip(parent_id);
    let params: Vec<(&str, &str)> = filter.iter().map(|(link, id)| (link.field, *id)).collect();
    let records = http::get_list(meta.endpoint, &params).await?;
    Ok(records
        .into_iter()
        .map(FormRecord::from_value)
        .filter(|r| parent_id.map_or(true, |p| belongs_to(meta, r, p)))
        .collect())
}

async fn fetch_field_options(field: &FieldMeta) -> Result<Vec<(String, String)>, ApiError> {
    let FieldKind::Reference { resource, display } = field.kind else {
        return Ok(Vec::new());
    };
    let Some(target) = registry::resource(resource) else {
        return Ok(Vec::new());
    };
    let records = http::get_list(target.endpoint, &[]).await?;
    Ok(option_pairs(&records, display))
}

/// Options of every reference field in `fields`. A failing lookup is
/// reported but does not stop the others.
pub async fn fetch_reference_options<'a>(
    fields: impl Iterator<Item = &'a FieldMeta>,
) -> (ReferenceOptions, Option<ApiError>) {
    let mut options = ReferenceOptions::new();
    let mut first_error = None;
    for field in fields.filter(|f| matches!(f.kind, FieldKind::Reference { .. })) {
        match fetch_field_options(field).await {
            Ok(pairs) => {
                options.insert(field.name, pairs);
            }
            Err(e) => {
                log::error!("failed to load options for {}: {}", field.name, e);
                first_error.get_or_insert(e);
            }
        }
    }
    (options, first_error)
}

/// Create or update depending on whether the record has an id
pub async fn save(meta: &ResourceMeta, record: &FormRecord) -> Result<Value, ApiError> {
    match record.id() {
        Some(id) => http::update(meta.endpoint, &id.as_string(), &record.as_value()).await,
        None => http::create(meta.endpoint, &record.as_value()).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_option_pairs() {
        let records = vec![
            json!({"id": 1, "name": "Indonesia"}),
            json!({"id": "CN", "name": ""}),
            json!({"name": "no id"}),
            json!({"id": 3, "code": 77}),
        ];
        assert_eq!(
            option_pairs(&records, "name"),
            vec![
                ("1".to_string(), "Indonesia".to_string()),
                ("CN".to_string(), "#CN".to_string()),
                ("3".to_string(), "#3".to_string()),
            ]
        );
        assert_eq!(option_pairs(&records[3..], "code")[0].1, "77");
    }

    #[test]
    fn test_labels_from_options() {
        let mut options = ReferenceOptions::new();
        options.insert("countryId", vec![("1".to_string(), "Indonesia".to_string())]);
        let labels = labels_from_options(&options);
        assert_eq!(labels["countryId"]["1"], "Indonesia");
    }

    #[test]
    fn test_belongs_to_parent() {
        let meta = registry::resource("a021_buying_price_detail").unwrap();
        let line = FormRecord::from_value(json!({"id": 9, "buyingPriceId": 4}));
        assert!(belongs_to(meta, &line, "4"));
        assert!(!belongs_to(meta, &line, "5"));

        let plain = registry::resource("a001_country").unwrap();
        assert!(!belongs_to(plain, &line, "4"));
    }
}
