//! Working copy of a buying price line while it is edited.
//!
//! Source fields hold whatever the user typed; derived fields always hold
//! two-decimal display strings.

use super::aggregate::BuyingPriceDetail;
use crate::domain::a007_cost_setting::aggregate::{find_cost_setting, CostSetting};
use crate::domain::a015_proforma_invoice::aggregate::{find_pi_detail, ProformaInvoiceDetail};
use crate::domain::common::RecordId;
use crate::shared::money::{format2, parse_amount, per_unit};
use crate::shared::recalc::Recalculate;

/// Inputs of the buying price line form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuyingPriceField {
    PiDetail,
    ProdCost,
    FirstMileCost,
    LastMileCost,
    OrderedQty,
    SellingPrice,
    TrueCostSetting,
}

/// Reference data loaded for the page
#[derive(Debug, Clone, Copy)]
pub struct BuyingPriceRefs<'a> {
    pub pi_details: &'a [ProformaInvoiceDetail],
    pub cost_settings: &'a [CostSetting],
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BuyingPriceDetailForm {
    pub id: Option<RecordId>,
    pub buying_price_id: Option<RecordId>,
    pub pi_detail_id: String,
    pub sku: String,
    pub prod_cost: String,
    pub first_mile_cost: String,
    pub last_mile_cost: String,
    pub ordered_qty: String,
    pub selling_price: String,
    pub landed_cost: String,
    pub landed_cost_per_unit: String,
    pub true_cost_id: String,
    pub true_cost: String,
    pub true_cost_per_unit: String,
}

impl BuyingPriceDetailForm {
    pub fn new_for(buying_price_id: Option<RecordId>) -> Self {
        Self {
            buying_price_id,
            ..Self::default()
        }
    }

    pub fn from_detail(d: &BuyingPriceDetail) -> Self {
        let id_str = |id: &Option<RecordId>| id.as_ref().map(RecordId::as_string).unwrap_or_default();
        Self {
            id: d.id.clone(),
            buying_price_id: d.buying_price_id.clone(),
            pi_detail_id: id_str(&d.pi_detail_id),
            sku: d.sku.clone(),
            prod_cost: format2(d.prod_cost),
            first_mile_cost: format2(d.first_mile_cost),
            last_mile_cost: format2(d.last_mile_cost),
            ordered_qty: format2(d.ordered_qty),
            selling_price: format2(d.selling_price),
            landed_cost: format2(d.landed_cost),
            landed_cost_per_unit: format2(d.landed_cost_per_unit),
            true_cost_id: id_str(&d.true_cost_id),
            true_cost: format2(d.true_cost),
            true_cost_per_unit: format2(d.true_cost_per_unit),
        }
    }

    pub fn to_detail(&self) -> BuyingPriceDetail {
        BuyingPriceDetail {
            id: self.id.clone(),
            buying_price_id: self.buying_price_id.clone(),
            pi_detail_id: RecordId::from_string(&self.pi_detail_id),
            sku: self.sku.trim().to_string(),
            prod_cost: parse_amount(&self.prod_cost),
            first_mile_cost: parse_amount(&self.first_mile_cost),
            last_mile_cost: parse_amount(&self.last_mile_cost),
            ordered_qty: parse_amount(&self.ordered_qty),
            selling_price: parse_amount(&self.selling_price),
            landed_cost: parse_amount(&self.landed_cost),
            landed_cost_per_unit: parse_amount(&self.landed_cost_per_unit),
            true_cost_id: RecordId::from_string(&self.true_cost_id),
            true_cost: parse_amount(&self.true_cost),
            true_cost_per_unit: parse_amount(&self.true_cost_per_unit),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.id.is_some()
    }

    pub fn validate(&self) -> Result<(), String> {
        if RecordId::from_string(&self.pi_detail_id).is_none() {
            return Err("PI line is required".to_string());
        }
        if self.sku.trim().is_empty() {
            return Err("SKU is required".to_string());
        }
        if parse_amount(&self.ordered_qty) <= 0.0 {
            return Err("Qty must be greater than zero".to_string());
        }
        Ok(())
    }

    fn qty(&self) -> f64 {
        parse_amount(&self.ordered_qty)
    }

    /// landed = product + first mile + last mile
    fn recompute_landed(&mut self) {
        let landed = parse_amount(&self.prod_cost)
            + parse_amount(&self.first_mile_cost)
            + parse_amount(&self.last_mile_cost);
        self.landed_cost = format2(landed);
        self.landed_cost_per_unit = format2(per_unit(landed, self.qty()));
    }

    /// true cost = landed + selected surcharge. Returns false when the
    /// selected surcharge is not among the loaded settings.
    fn recompute_true_cost(&mut self, cost_settings: &[CostSetting]) -> bool {
        let Some(setting) = find_cost_setting(cost_settings, &self.true_cost_id) else {
            return false;
        };
        let true_cost = parse_amount(&self.landed_cost) + setting.amount;
        self.true_cost = format2(true_cost);
        self.true_cost_per_unit = format2(per_unit(true_cost, self.qty()));
        true
    }

    fn fill_from_pi_detail(&mut self, line: &ProformaInvoiceDetail, cost_settings: &[CostSetting]) {
        self.sku = line.sku.clone();
        self.prod_cost = format2(line.prod_cost);
        self.first_mile_cost = format2(line.first_mile_cost);
        self.last_mile_cost = format2(line.last_mile_cost);
        self.ordered_qty = format2(line.ordered_qty);
        self.selling_price = format2(line.selling_price);
        self.recompute_landed();
        if !self.recompute_true_cost(cost_settings) {
            self.true_cost.clear();
            self.true_cost_per_unit.clear();
        }
    }
}

impl<'a> Recalculate<BuyingPriceRefs<'a>> for BuyingPriceDetailForm {
    type Field = BuyingPriceField;

    fn apply_change(&mut self, field: BuyingPriceField, value: &str, ctx: &BuyingPriceRefs<'a>) {
        match field {
            BuyingPriceField::PiDetail => {
                self.pi_detail_id = value.to_string();
                if let Some(line) = find_pi_detail(ctx.pi_details, value) {
                    self.fill_from_pi_detail(line, ctx.cost_settings);
                }
            }
            BuyingPriceField::ProdCost
            | BuyingPriceField::FirstMileCost
            | BuyingPriceField::LastMileCost => {
                let target = match field {
                    BuyingPriceField::ProdCost => &mut self.prod_cost,
                    BuyingPriceField::FirstMileCost => &mut self.first_mile_cost,
                    _ => &mut self.last_mile_cost,
                };
                *target = value.to_string();
                self.recompute_landed();
                self.recompute_true_cost(ctx.cost_settings);
            }
            BuyingPriceField::OrderedQty => {
                self.ordered_qty = value.to_string();
                self.recompute_landed();
                self.recompute_true_cost(ctx.cost_settings);
            }
            BuyingPriceField::SellingPrice => {
                self.selling_price = value.to_string();
            }
            BuyingPriceField::TrueCostSetting => {
                self.true_cost_id = value.to_string();
                self.recompute_true_cost(ctx.cost_settings);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pi_line(id: i64, sku: &str, costs: (f64, f64, f64), qty: f64, price: f64) -> ProformaInvoiceDetail {
        ProformaInvoiceDetail {
            id: RecordId::Number(id),
            proforma_invoice_id: Some(RecordId::Number(1)),
            sku: sku.to_string(),
            prod_cost: costs.0,
            first_mile_cost: costs.1,
            last_mile_cost: costs.2,
            ordered_qty: qty,
            selling_price: price,
        }
    }

    fn surcharge(id: i64, amount: f64) -> CostSetting {
        CostSetting {
            id: RecordId::Number(id),
            name: format!("Surcharge {}", id),
            amount,
            notes: None,
        }
    }

    fn fixtures() -> (Vec<ProformaInvoiceDetail>, Vec<CostSetting>) {
        (
            vec![
                pi_line(1, "BAG-BLK", (100.0, 20.0, 5.5), 10.0, 250.0),
                pi_line(2, "BAG-RED", (80.0, 10.0, 10.0), 0.0, 199.9),
                pi_line(3, "CAP-WHT", (33.333, 0.0, 0.0), 3.0, 60.0),
            ],
            vec![surcharge(7, 24.5)],
        )
    }

    #[test]
    fn selecting_pi_line_fills_sources_and_landed_cost() {
        let (pi, cs) = fixtures();
        let refs = BuyingPriceRefs { pi_details: &pi, cost_settings: &cs };
        let mut form = BuyingPriceDetailForm::default();

        form.apply_change(BuyingPriceField::PiDetail, "1", &refs);

        assert_eq!(form.pi_detail_id, "1");
        assert_eq!(form.sku, "BAG-BLK");
        assert_eq!(form.prod_cost, "100.00");
        assert_eq!(form.first_mile_cost, "20.00");
        assert_eq!(form.last_mile_cost, "5.50");
        assert_eq!(form.ordered_qty, "10.00");
        assert_eq!(form.selling_price, "250.00");
        assert_eq!(form.landed_cost, "125.50");
        assert_eq!(form.landed_cost_per_unit, "12.55");
    }

    #[test]
    fn zero_quantity_yields_zero_per_unit() {
        let (pi, cs) = fixtures();
        let refs = BuyingPriceRefs { pi_details: &pi, cost_settings: &cs };
        let mut form = BuyingPriceDetailForm::default();

        form.apply_change(BuyingPriceField::PiDetail, "2", &refs);
        assert_eq!(form.landed_cost, "100.00");
        assert_eq!(form.landed_cost_per_unit, "0.00");

        form.apply_change(BuyingPriceField::OrderedQty, "", &refs);
        assert_eq!(form.landed_cost_per_unit, "0.00");

        form.apply_change(BuyingPriceField::OrderedQty, "abc", &refs);
        assert_eq!(form.landed_cost_per_unit, "0.00");
        assert!(!form.landed_cost_per_unit.contains("NaN"));
        assert!(!form.landed_cost_per_unit.contains("inf"));
    }

    #[test]
    fn per_unit_is_rounded_to_two_decimals() {
        let (pi, cs) = fixtures();
        let refs = BuyingPriceRefs { pi_details: &pi, cost_settings: &cs };
        let mut form = BuyingPriceDetailForm::default();

        form.apply_change(BuyingPriceField::PiDetail, "3", &refs);
        assert_eq!(form.prod_cost, "33.33");
        assert_eq!(form.landed_cost, "33.33");
        assert_eq!(form.landed_cost_per_unit, "11.11");
    }

    #[test]
    fn manual_cost_edit_recomputes_landed_cost() {
        let (pi, cs) = fixtures();
        let refs = BuyingPriceRefs { pi_details: &pi, cost_settings: &cs };
        let mut form = BuyingPriceDetailForm::default();
        form.apply_change(BuyingPriceField::PiDetail, "1", &refs);

        form.apply_change(BuyingPriceField::LastMileCost, "14.5", &refs);

        // raw input kept as typed
        assert_eq!(form.last_mile_cost, "14.5");
        assert_eq!(form.landed_cost, "134.50");
        assert_eq!(form.landed_cost_per_unit, "13.45");
    }

    #[test]
    fn surcharge_gives_true_cost() {
        let (pi, cs) = fixtures();
        let refs = BuyingPriceRefs { pi_details: &pi, cost_settings: &cs };
        let mut form = BuyingPriceDetailForm::default();
        form.apply_change(BuyingPriceField::PiDetail, "1", &refs);

        form.apply_change(BuyingPriceField::TrueCostSetting, "7", &refs);

        assert_eq!(form.true_cost_id, "7");
        assert_eq!(form.true_cost, "150.00");
        assert_eq!(form.true_cost_per_unit, "15.00");

        // later cost edits keep the true cost in step
        form.apply_change(BuyingPriceField::ProdCost, "110", &refs);
        assert_eq!(form.landed_cost, "135.50");
        assert_eq!(form.true_cost, "160.00");
        assert_eq!(form.true_cost_per_unit, "16.00");
    }

    #[test]
    fn reselecting_overwrites_every_derived_field() {
        let (pi, cs) = fixtures();
        let refs = BuyingPriceRefs { pi_details: &pi, cost_settings: &cs };
        let mut form = BuyingPriceDetailForm::default();
        form.apply_change(BuyingPriceField::PiDetail, "1", &refs);
        form.apply_change(BuyingPriceField::TrueCostSetting, "7", &refs);
        form.apply_change(BuyingPriceField::FirstMileCost, "999", &refs);

        form.apply_change(BuyingPriceField::PiDetail, "2", &refs);

        assert_eq!(form.sku, "BAG-RED");
        assert_eq!(form.first_mile_cost, "10.00");
        assert_eq!(form.landed_cost, "100.00");
        assert_eq!(form.landed_cost_per_unit, "0.00");
        assert_eq!(form.true_cost, "124.50");
        assert_eq!(form.true_cost_per_unit, "0.00");
    }

    #[test]
    fn reselecting_without_surcharge_clears_true_cost() {
        let (pi, cs) = fixtures();
        let refs = BuyingPriceRefs { pi_details: &pi, cost_settings: &cs };
        let mut form = BuyingPriceDetailForm {
            true_cost: "1.00".into(),
            true_cost_per_unit: "1.00".into(),
            ..Default::default()
        };

        form.apply_change(BuyingPriceField::PiDetail, "1", &refs);

        assert_eq!(form.true_cost, "");
        assert_eq!(form.true_cost_per_unit, "");
    }

    #[test]
    fn unknown_reference_applies_raw_edit_only() {
        let (pi, cs) = fixtures();
        let refs = BuyingPriceRefs { pi_details: &pi, cost_settings: &cs };
        let mut form = BuyingPriceDetailForm::default();
        form.apply_change(BuyingPriceField::PiDetail, "1", &refs);
        let before = form.clone();

        form.apply_change(BuyingPriceField::PiDetail, "404", &refs);
        assert_eq!(form.pi_detail_id, "404");
        assert_eq!(form.landed_cost, before.landed_cost);
        assert_eq!(form.sku, before.sku);

        form.apply_change(BuyingPriceField::TrueCostSetting, "99", &refs);
        assert_eq!(form.true_cost_id, "99");
        assert_eq!(form.true_cost, before.true_cost);
    }

    #[test]
    fn round_trips_through_wire_record() {
        let (pi, cs) = fixtures();
        let refs = BuyingPriceRefs { pi_details: &pi, cost_settings: &cs };
        let mut form = BuyingPriceDetailForm::new_for(Some(RecordId::Number(5)));
        form.apply_change(BuyingPriceField::PiDetail, "1", &refs);
        form.apply_change(BuyingPriceField::TrueCostSetting, "7", &refs);

        let detail = form.to_detail();
        assert_eq!(detail.buying_price_id, Some(RecordId::Number(5)));
        assert_eq!(detail.pi_detail_id, Some(RecordId::Number(1)));
        assert_eq!(detail.landed_cost, 125.5);
        assert_eq!(detail.true_cost_per_unit, 15.0);
        assert!(form.validate().is_ok());

        let reloaded = BuyingPriceDetailForm::from_detail(&detail);
        assert_eq!(reloaded.landed_cost_per_unit, "12.55");
        assert_eq!(reloaded.true_cost_id, "7");
    }

    #[test]
    fn validation_requires_line_and_quantity() {
        let form = BuyingPriceDetailForm::default();
        assert_eq!(form.validate(), Err("PI line is required".to_string()));

        let form = BuyingPriceDetailForm {
            pi_detail_id: "2".into(),
            sku: "BAG-RED".into(),
            ordered_qty: "0.00".into(),
            ..Default::default()
        };
        assert_eq!(form.validate(), Err("Qty must be greater than zero".to_string()));
    }

    #[test]
    fn huge_manual_costs_never_render_infinity() {
        let (pi, cs) = fixtures();
        let refs = BuyingPriceRefs { pi_details: &pi, cost_settings: &cs };
        let mut form = BuyingPriceDetailForm::new_for(Some(RecordId::Number(5)));
        form.apply_change(BuyingPriceField::ProdCost, "1e307", &refs);
        form.apply_change(BuyingPriceField::OrderedQty, "1", &refs);
        for derived in [&form.landed_cost, &form.landed_cost_per_unit, &form.true_cost] {
            assert!(!derived.contains("inf"), "{}", derived);
            assert!(!derived.contains("NaN"), "{}", derived);
        }
    }
}
