use crate::domain::common::RecordId;
use crate::shared::money::de_amount;
use serde::{Deserialize, Serialize};

/// One SKU line of a proforma invoice
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProformaInvoiceDetail {
    pub id: RecordId,
    #[serde(default)]
    pub proforma_invoice_id: Option<RecordId>,
    #[serde(default)]
    pub sku: String,
    #[serde(default, deserialize_with = "de_amount")]
    pub prod_cost: f64,
    #[serde(default, deserialize_with = "de_amount")]
    pub first_mile_cost: f64,
    #[serde(default, deserialize_with = "de_amount")]
    pub last_mile_cost: f64,
    #[serde(default, deserialize_with = "de_amount")]
    pub ordered_qty: f64,
    #[serde(default, deserialize_with = "de_amount")]
    pub selling_price: f64,
}

impl ProformaInvoiceDetail {
    /// Label used in the PI line dropdown
    pub fn label(&self) -> String {
        if self.sku.is_empty() {
            format!("#{}", self.id)
        } else {
            format!("{} (#{})", self.sku, self.id)
        }
    }
}

/// Find the PI line picked in a `<select>`
pub fn find_pi_detail<'a>(
    details: &'a [ProformaInvoiceDetail],
    selected: &str,
) -> Option<&'a ProformaInvoiceDetail> {
    let id = RecordId::from_string(selected)?;
    details.iter().find(|d| d.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_mixed_amounts() {
        let json = r#"{
            "id": 11,
            "proformaInvoiceId": 3,
            "sku": "TSHIRT-RED-M",
            "prodCost": "50000.00",
            "firstMileCost": 2500,
            "lastMileCost": null,
            "orderedQty": "100",
            "sellingPrice": 89000
        }"#;
        let d: ProformaInvoiceDetail = serde_json::from_str(json).unwrap();
        assert_eq!(d.prod_cost, 50000.0);
        assert_eq!(d.first_mile_cost, 2500.0);
        assert_eq!(d.last_mile_cost, 0.0);
        assert_eq!(d.ordered_qty, 100.0);
        assert_eq!(d.label(), "TSHIRT-RED-M (#11)");
    }

    #[test]
    fn test_find_pi_detail() {
        let details: Vec<ProformaInvoiceDetail> =
            serde_json::from_str(r#"[{"id": 1, "sku": "A"}, {"id": 2, "sku": "B"}]"#).unwrap();
        assert_eq!(find_pi_detail(&details, "2").map(|d| d.sku.as_str()), Some("B"));
        assert!(find_pi_detail(&details, "9").is_none());
        assert!(find_pi_detail(&details, "").is_none());
    }
}
