use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier assigned by the backend. Some resources use numeric keys,
/// others string codes, so both shapes are accepted on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Number(i64),
    Text(String),
}

impl RecordId {
    /// Convert the ID to its string form (used in URLs and tab keys)
    pub fn as_string(&self) -> String {
        match self {
            Self::Number(n) => n.to_string(),
            Self::Text(s) => s.clone(),
        }
    }

    /// Parse an ID typed into a form or taken from a tab key.
    ///
    /// Empty input means "nothing selected" and yields `None`.
    pub fn from_string(s: &str) -> Option<Self> {
        let s = s.trim();
        if s.is_empty() {
            return None;
        }
        match s.parse::<i64>() {
            Ok(n) => Some(Self::Number(n)),
            Err(_) => Some(Self::Text(s.to_string())),
        }
    }

    /// Read an ID out of a loose JSON value (`{"id": 7}` or `{"id": "PO-7"}`)
    pub fn from_json(value: &serde_json::Value) -> Option<Self> {
        match value {
            serde_json::Value::Number(n) => n.as_i64().map(Self::Number),
            serde_json::Value::String(s) => Self::from_string(s),
            _ => None,
        }
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{}", n),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for RecordId {
    fn from(value: i64) -> Self {
        Self::Number(value)
    }
}

/// Compare an optional ID with the raw value of a `<select>`
pub fn matches_selection(id: Option<&RecordId>, selected: &str) -> bool {
    match (id, RecordId::from_string(selected)) {
        (Some(id), Some(sel)) => *id == sel,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_string() {
        assert_eq!(RecordId::from_string("42"), Some(RecordId::Number(42)));
        assert_eq!(
            RecordId::from_string(" PO-001 "),
            Some(RecordId::Text("PO-001".to_string()))
        );
        assert_eq!(RecordId::from_string("   "), None);
    }

    #[test]
    fn test_wire_shapes() {
        let n: RecordId = serde_json::from_str("7").unwrap();
        let s: RecordId = serde_json::from_str("\"ID-7\"").unwrap();
        assert_eq!(n, RecordId::Number(7));
        assert_eq!(s.as_string(), "ID-7");
        assert_eq!(serde_json::to_string(&n).unwrap(), "7");
    }

    #[test]
    fn test_matches_selection() {
        let id = RecordId::Number(3);
        assert!(matches_selection(Some(&id), "3"));
        assert!(!matches_selection(Some(&id), "4"));
        assert!(!matches_selection(None, "3"));
        assert!(!matches_selection(Some(&id), ""));
    }
}
