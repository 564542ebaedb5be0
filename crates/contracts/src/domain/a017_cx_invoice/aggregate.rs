use crate::domain::common::RecordId;
use crate::shared::money::de_amount;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CxInvoice {
    pub id: RecordId,
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub cx_quotation_id: Option<RecordId>,
    #[serde(default)]
    pub forwarder_id: Option<RecordId>,
    #[serde(default)]
    pub currency_id: Option<RecordId>,
    #[serde(default)]
    pub notes: Option<String>,
}

/// One billed charge; amounts in invoice currency unless suffixed `_local`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CxInvoiceDetail {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    #[serde(default)]
    pub cx_invoice_id: Option<RecordId>,
    #[serde(default)]
    pub cx_quotation_detail_id: Option<RecordId>,
    #[serde(default)]
    pub description: String,
    #[serde(default, deserialize_with = "de_amount")]
    pub rate: f64,
    #[serde(default, deserialize_with = "de_amount")]
    pub qty: f64,
    #[serde(default, deserialize_with = "de_amount")]
    pub amount: f64,
    #[serde(default, deserialize_with = "de_amount")]
    pub exchange_rate: f64,
    #[serde(default, deserialize_with = "de_amount")]
    pub amount_local: f64,
    #[serde(default, deserialize_with = "de_amount")]
    pub paid_amount: f64,
    #[serde(default, deserialize_with = "de_amount")]
    pub outstanding: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_detail_with_string_amounts() {
        let json = r#"{
            "id": "INV-1-01",
            "cxInvoiceId": 4,
            "description": "Customs clearance",
            "rate": "150.00",
            "qty": 2,
            "amount": "300.00",
            "exchangeRate": "15500",
            "amountLocal": 4650000,
            "paidAmount": null,
            "outstanding": "4650000.00"
        }"#;
        let d: CxInvoiceDetail = serde_json::from_str(json).unwrap();
        assert_eq!(d.id, Some(RecordId::Text("INV-1-01".into())));
        assert_eq!(d.cx_invoice_id, Some(RecordId::Number(4)));
        assert_eq!(d.cx_quotation_detail_id, None);
        assert_eq!(d.exchange_rate, 15500.0);
        assert_eq!(d.paid_amount, 0.0);
        assert_eq!(d.outstanding, 4_650_000.0);
    }
}
