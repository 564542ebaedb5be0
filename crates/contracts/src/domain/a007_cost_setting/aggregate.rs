use crate::domain::common::RecordId;
use crate::shared::money::de_amount;
use serde::{Deserialize, Serialize};

/// Surcharge selectable as "true cost" on buying price lines
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostSetting {
    pub id: RecordId,
    #[serde(default)]
    pub name: String,
    #[serde(default, deserialize_with = "de_amount")]
    pub amount: f64,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Find the setting picked in a `<select>`
pub fn find_cost_setting<'a>(settings: &'a [CostSetting], selected: &str) -> Option<&'a CostSetting> {
    let id = RecordId::from_string(selected)?;
    settings.iter().find(|s| s.id == id)
}
