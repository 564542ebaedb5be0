use crate::domain::common::RecordId;
use crate::shared::money::de_amount;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SellingPrice {
    pub id: RecordId,
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub channel_id: Option<RecordId>,
    #[serde(default)]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SellingPriceDetail {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    #[serde(default)]
    pub selling_price_id: Option<RecordId>,
    #[serde(default)]
    pub buying_price_detail_id: Option<RecordId>,
    #[serde(default)]
    pub sku: String,
    #[serde(default, deserialize_with = "de_amount")]
    pub unit_cost: f64,
    #[serde(default, deserialize_with = "de_amount")]
    pub channel_fee_percent: f64,
    #[serde(default, deserialize_with = "de_amount")]
    pub selling_price: f64,
    #[serde(default, deserialize_with = "de_amount")]
    pub channel_fee: f64,
    #[serde(default, deserialize_with = "de_amount")]
    pub margin: f64,
    #[serde(default, deserialize_with = "de_amount")]
    pub margin_percent: f64,
}
