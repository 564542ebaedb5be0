//! Field-name keyed working copy of a record, used by the generic pages

use crate::domain::common::RecordId;
use crate::shared::metadata::{FieldKind, FieldMeta, ResourceMeta};
use crate::shared::money::{format2, parse_amount};
use chrono::NaiveDate;
use serde_json::{Map, Number, Value};

pub const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormRecord {
    values: Map<String, Value>,
}

impl FormRecord {
    /// Empty record for a "new" page; date fields start at `today`
    pub fn new_for(meta: &ResourceMeta, today: NaiveDate) -> Self {
        let mut values = Map::new();
        for field in meta.fields {
            if field.kind == FieldKind::Date {
                values.insert(
                    field.name.to_string(),
                    Value::String(today.format(DATE_FORMAT).to_string()),
                );
            }
        }
        Self { values }
    }

    /// Anything but a JSON object yields an empty record
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(values) => Self { values },
            _ => Self::default(),
        }
    }

    pub fn id(&self) -> Option<RecordId> {
        self.values.get("id").and_then(RecordId::from_json)
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    pub fn set(&mut self, name: &str, value: Value) {
        self.values.insert(name.to_string(), value);
    }

    /// Current value as shown in an `<input>`
    pub fn input_value(&self, field: &FieldMeta) -> String {
        match self.values.get(field.name) {
            None | Some(Value::Null) => String::new(),
            Some(Value::String(s)) => match field.kind {
                FieldKind::Date => s.chars().take(10).collect(),
                _ => s.clone(),
            },
            Some(Value::Number(n)) => match field.kind {
                FieldKind::Money => format2(n.as_f64().unwrap_or_default()),
                _ => n.to_string(),
            },
            Some(Value::Bool(b)) => b.to_string(),
            Some(other) => other.to_string(),
        }
    }

    /// Store raw input text, converted to the JSON shape the backend expects
    pub fn set_input(&mut self, field: &FieldMeta, raw: &str) {
        let trimmed = raw.trim();
        let value = if trimmed.is_empty() {
            if matches!(field.kind, FieldKind::Text | FieldKind::TextArea) {
                Value::String(raw.to_string())
            } else {
                Value::Null
            }
        } else {
            match field.kind {
                FieldKind::Number | FieldKind::Money => Number::from_f64(parse_amount(trimmed))
                    .map(Value::Number)
                    .unwrap_or(Value::Null),
                FieldKind::Reference { .. } => match RecordId::from_string(trimmed) {
                    Some(RecordId::Number(n)) => Value::from(n),
                    Some(RecordId::Text(s)) => Value::String(s),
                    None => Value::Null,
                },
                FieldKind::Date => Value::String(trimmed.to_string()),
                _ => Value::String(raw.to_string()),
            }
        };
        self.values.insert(field.name.to_string(), value);
    }

    /// Check all fields of `meta`, stopping at the first failure
    pub fn validate(&self, meta: &ResourceMeta) -> Result<(), String> {
        for field in meta.fields.iter().filter(|f| !f.read_only) {
            let text = self.input_value(field);
            field.validation.validate_string(&text, field.label)?;
            if text.trim().is_empty() {
                continue;
            }
            match field.kind {
                FieldKind::Number | FieldKind::Money => {
                    let cleaned = text.replace(',', "");
                    let number = cleaned
                        .trim()
                        .parse::<f64>()
                        .ok()
                        .filter(|v| v.is_finite())
                        .ok_or_else(|| format!("{} must be a number", field.label))?;
                    field.validation.validate_number(number, field.label)?;
                }
                FieldKind::Date => {
                    NaiveDate::parse_from_str(text.trim(), DATE_FORMAT)
                        .map_err(|_| format!("{} must be a date (YYYY-MM-DD)", field.label))?;
                }
                FieldKind::Enum(options) => {
                    if !options.contains(&text.trim()) {
                        return Err(format!("{} has an unknown value", field.label));
                    }
                }
                _ => {}
            }
        }
        Ok(())
    }

    /// Cell text for list tables
    pub fn display_value(&self, field: &FieldMeta) -> String {
        match (&field.kind, self.values.get(field.name)) {
            (_, None | Some(Value::Null)) => "-".to_string(),
            (FieldKind::Money, Some(v)) => match v {
                Value::Number(n) => format2(n.as_f64().unwrap_or_default()),
                Value::String(s) => format2(parse_amount(s)),
                other => other.to_string(),
            },
            (_, Some(Value::String(s))) if s.trim().is_empty() => "-".to_string(),
            _ => self.input_value(field),
        }
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.values)
    }

    pub fn as_value(&self) -> Value {
        Value::Object(self.values.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::registry;
    use serde_json::json;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
    }

    #[test]
    fn test_new_seeds_dates() {
        let meta = registry::resource("a014_purchase_order").unwrap();
        let form = FormRecord::new_for(meta, today());
        assert_eq!(form.get("date"), Some(&json!("2024-03-15")));
        assert_eq!(form.get("code"), None);
        assert_eq!(form.id(), None);
    }

    #[test]
    fn test_set_input_converts_by_kind() {
        let meta = registry::resource("a020_pi_payment").unwrap();
        let mut form = FormRecord::default();

        form.set_input(meta.field("amount").unwrap(), "1,500.5");
        form.set_input(meta.field("bankId").unwrap(), "3");
        form.set_input(meta.field("reference").unwrap(), "TT-001");
        assert_eq!(form.get("amount"), Some(&json!(1500.5)));
        assert_eq!(form.get("bankId"), Some(&json!(3)));
        assert_eq!(form.get("reference"), Some(&json!("TT-001")));

        form.set_input(meta.field("amount").unwrap(), "");
        form.set_input(meta.field("bankId").unwrap(), "");
        assert_eq!(form.get("amount"), Some(&Value::Null));
        assert_eq!(form.get("bankId"), Some(&Value::Null));
    }

    #[test]
    fn test_input_value_formats_money() {
        let meta = registry::resource("a020_pi_payment").unwrap();
        let form = FormRecord::from_value(json!({
            "id": 9,
            "amount": 1200,
            "date": "2024-03-01T00:00:00Z",
            "reference": null
        }));
        assert_eq!(form.id(), Some(RecordId::Number(9)));
        assert_eq!(form.input_value(meta.field("amount").unwrap()), "1200.00");
        assert_eq!(form.input_value(meta.field("date").unwrap()), "2024-03-01");
        assert_eq!(form.input_value(meta.field("reference").unwrap()), "");
        assert_eq!(form.display_value(meta.field("reference").unwrap()), "-");
    }

    #[test]
    fn test_validate_reports_first_failure() {
        let meta = registry::resource("a010_channel").unwrap();
        let mut form = FormRecord::default();
        assert_eq!(form.validate(meta), Err("Name is required".to_string()));

        form.set_input(meta.field("name").unwrap(), "Marketplace");
        form.set("feePercent", json!(120));
        assert_eq!(form.validate(meta), Err("Fee, % must be at most 100".to_string()));

        form.set("feePercent", json!("abc"));
        assert_eq!(form.validate(meta), Err("Fee, % must be a number".to_string()));

        form.set_input(meta.field("feePercent").unwrap(), "12.5");
        assert!(form.validate(meta).is_ok());
    }

    #[test]
    fn test_validate_date_format() {
        let meta = registry::resource("a018_goods_receipt").unwrap();
        let mut form = FormRecord::new_for(meta, today());
        form.set("code", json!("GR-001"));
        form.set("date", json!("15/03/2024"));
        let err = form.validate(meta).unwrap_err();
        assert!(err.contains("must be a date"), "{}", err);
    }

    #[test]
    fn test_non_object_value() {
        let form = FormRecord::from_value(json!([1, 2]));
        assert_eq!(form.into_value(), json!({}));
    }
}
