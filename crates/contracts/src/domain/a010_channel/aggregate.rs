use crate::domain::common::RecordId;
use crate::shared::money::de_amount;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Channel {
    pub id: RecordId,
    #[serde(default)]
    pub name: String,
    /// Commission charged by the channel, in percent of the selling price
    #[serde(default, deserialize_with = "de_amount")]
    pub fee_percent: f64,
}
