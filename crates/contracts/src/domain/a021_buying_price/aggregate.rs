use crate::domain::common::RecordId;
use crate::shared::money::de_amount;
use serde::{Deserialize, Serialize};

/// Buying price document header
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuyingPrice {
    pub id: RecordId,
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub proforma_invoice_id: Option<RecordId>,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Buying price line as stored by the backend
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuyingPriceDetail {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    #[serde(default)]
    pub buying_price_id: Option<RecordId>,
    #[serde(default)]
    pub pi_detail_id: Option<RecordId>,
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
    #[serde(default, deserialize_with = "de_amount")]
    pub landed_cost: f64,
    #[serde(default, deserialize_with = "de_amount")]
    pub landed_cost_per_unit: f64,
    #[serde(default)]
    pub true_cost_id: Option<RecordId>,
    #[serde(default, deserialize_with = "de_amount")]
    pub true_cost: f64,
    #[serde(default, deserialize_with = "de_amount")]
    pub true_cost_per_unit: f64,
}

impl BuyingPriceDetail {
    /// Cost basis for selling price lines: true cost when a surcharge was
    /// applied, landed cost otherwise
    pub fn unit_cost(&self) -> f64 {
        if self.true_cost_per_unit > 0.0 {
            self.true_cost_per_unit
        } else {
            self.landed_cost_per_unit
        }
    }

    pub fn label(&self) -> String {
        match &self.id {
            Some(id) if !self.sku.is_empty() => format!("{} (#{})", self.sku, id),
            Some(id) => format!("#{}", id),
            None => self.sku.clone(),
        }
    }
}

/// Find the buying price line picked in a `<select>`
pub fn find_buying_price_detail<'a>(
    details: &'a [BuyingPriceDetail],
    selected: &str,
) -> Option<&'a BuyingPriceDetail> {
    let id = RecordId::from_string(selected)?;
    details.iter().find(|d| d.id.as_ref() == Some(&id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_cost_prefers_true_cost() {
        let mut d = BuyingPriceDetail {
            landed_cost_per_unit: 10.0,
            ..Default::default()
        };
        assert_eq!(d.unit_cost(), 10.0);
        d.true_cost_per_unit = 12.5;
        assert_eq!(d.unit_cost(), 12.5);
    }

    #[test]
    fn test_new_line_serializes_without_id() {
        let d = BuyingPriceDetail {
            sku: "A-1".into(),
            ..Default::default()
        };
        let json = serde_json::to_value(&d).unwrap();
        assert!(json.get("id").is_none());
        assert_eq!(json["sku"], "A-1");
        assert_eq!(json["landedCostPerUnit"], 0.0);
    }
}
