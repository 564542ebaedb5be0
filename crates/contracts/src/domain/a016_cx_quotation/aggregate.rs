use crate::domain::common::RecordId;
use crate::shared::money::de_amount;
use serde::{Deserialize, Serialize};

/// One charge line of a CX quotation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CxQuotationDetail {
    pub id: RecordId,
    #[serde(default)]
    pub cx_quotation_id: Option<RecordId>,
    #[serde(default)]
    pub description: String,
    #[serde(default, deserialize_with = "de_amount")]
    pub rate: f64,
    #[serde(default, deserialize_with = "de_amount")]
    pub qty: f64,
    #[serde(default, deserialize_with = "de_amount")]
    pub exchange_rate: f64,
}

/// Find the quotation line picked in a `<select>`
pub fn find_quotation_line<'a>(
    lines: &'a [CxQuotationDetail],
    selected: &str,
) -> Option<&'a CxQuotationDetail> {
    let id = RecordId::from_string(selected)?;
    lines.iter().find(|l| l.id == id)
}
