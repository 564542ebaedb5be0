use super::aggregate::SellingPriceDetail;
use crate::domain::a021_buying_price::aggregate::{find_buying_price_detail, BuyingPriceDetail};
use crate::domain::common::RecordId;
use crate::shared::money::{format2, parse_amount, round2};
use crate::shared::recalc::Recalculate;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SellingPriceField {
    BuyingPriceDetail,
    UnitCost,
    ChannelFeePercent,
    SellingPrice,
}

#[derive(Debug, Clone, Copy)]
pub struct SellingPriceRefs<'a> {
    pub buying_price_details: &'a [BuyingPriceDetail],
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SellingPriceDetailForm {
    pub id: Option<RecordId>,
    pub selling_price_id: Option<RecordId>,
    pub buying_price_detail_id: String,
    pub sku: String,
    pub unit_cost: String,
    pub channel_fee_percent: String,
    pub selling_price: String,
    pub channel_fee: String,
    pub margin: String,
    pub margin_percent: String,
}

impl SellingPriceDetailForm {
    /// New line; `fee_percent` comes from the channel of the header
    pub fn new_for(selling_price_id: Option<RecordId>, fee_percent: f64) -> Self {
        let mut form = Self {
            selling_price_id,
            channel_fee_percent: format2(fee_percent),
            ..Self::default()
        };
        form.recompute();
        form
    }

    pub fn from_detail(d: &SellingPriceDetail) -> Self {
        Self {
            id: d.id.clone(),
            selling_price_id: d.selling_price_id.clone(),
            buying_price_detail_id: d
                .buying_price_detail_id
                .as_ref()
                .map(RecordId::as_string)
                .unwrap_or_default(),
            sku: d.sku.clone(),
            unit_cost: format2(d.unit_cost),
            channel_fee_percent: format2(d.channel_fee_percent),
            selling_price: format2(d.selling_price),
            channel_fee: format2(d.channel_fee),
            margin: format2(d.margin),
            margin_percent: format2(d.margin_percent),
        }
    }

    pub fn to_detail(&self) -> SellingPriceDetail {
        SellingPriceDetail {
            id: self.id.clone(),
            selling_price_id: self.selling_price_id.clone(),
            buying_price_detail_id: RecordId::from_string(&self.buying_price_detail_id),
            sku: self.sku.trim().to_string(),
            unit_cost: parse_amount(&self.unit_cost),
            channel_fee_percent: parse_amount(&self.channel_fee_percent),
            selling_price: parse_amount(&self.selling_price),
            channel_fee: parse_amount(&self.channel_fee),
            margin: parse_amount(&self.margin),
            margin_percent: parse_amount(&self.margin_percent),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.id.is_some()
    }

    pub fn validate(&self) -> Result<(), String> {
        if RecordId::from_string(&self.buying_price_detail_id).is_none() {
            return Err("Buying price line is required".to_string());
        }
        let pct = parse_amount(&self.channel_fee_percent);
        if !(0.0..=100.0).contains(&pct) {
            return Err("Fee, % must be between 0 and 100".to_string());
        }
        if parse_amount(&self.selling_price) <= 0.0 {
            return Err("Selling price must be greater than zero".to_string());
        }
        Ok(())
    }

    fn recompute(&mut self) {
        let price = parse_amount(&self.selling_price);
        let cost = parse_amount(&self.unit_cost);
        let fee = round2(price * parse_amount(&self.channel_fee_percent) / 100.0);
        let margin = price - cost - fee;
        let margin_percent = if price != 0.0 { margin / price * 100.0 } else { 0.0 };
        self.channel_fee = format2(fee);
        self.margin = format2(margin);
        self.margin_percent = format2(margin_percent);
    }
}

impl<'a> Recalculate<SellingPriceRefs<'a>> for SellingPriceDetailForm {
    type Field = SellingPriceField;

    fn apply_change(&mut self, field: SellingPriceField, value: &str, ctx: &SellingPriceRefs<'a>) {
        match field {
            SellingPriceField::BuyingPriceDetail => {
                self.buying_price_detail_id = value.to_string();
                let Some(line) = find_buying_price_detail(ctx.buying_price_details, value) else {
                    return;
                };
                self.sku = line.sku.clone();
                self.unit_cost = format2(line.unit_cost());
            }
            SellingPriceField::UnitCost => self.unit_cost = value.to_string(),
            SellingPriceField::ChannelFeePercent => self.channel_fee_percent = value.to_string(),
            SellingPriceField::SellingPrice => self.selling_price = value.to_string(),
        }
        self.recompute();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn buying_lines() -> Vec<BuyingPriceDetail> {
        vec![
            BuyingPriceDetail {
                id: Some(RecordId::Number(1)),
                sku: "BAG-BLK".into(),
                landed_cost_per_unit: 12.55,
                true_cost_per_unit: 15.0,
                ..Default::default()
            },
            BuyingPriceDetail {
                id: Some(RecordId::Number(2)),
                sku: "BAG-RED".into(),
                landed_cost_per_unit: 40.0,
                ..Default::default()
            },
        ]
    }

    #[test]
    fn selecting_buying_line_uses_true_cost() {
        let lines = buying_lines();
        let refs = SellingPriceRefs { buying_price_details: &lines };
        let mut form = SellingPriceDetailForm::new_for(None, 10.0);

        form.apply_change(SellingPriceField::BuyingPriceDetail, "1", &refs);
        assert_eq!(form.sku, "BAG-BLK");
        assert_eq!(form.unit_cost, "15.00");

        form.apply_change(SellingPriceField::BuyingPriceDetail, "2", &refs);
        assert_eq!(form.sku, "BAG-RED");
        assert_eq!(form.unit_cost, "40.00");
    }

    #[test]
    fn margin_after_channel_fee() {
        let lines = buying_lines();
        let refs = SellingPriceRefs { buying_price_details: &lines };
        let mut form = SellingPriceDetailForm::new_for(None, 10.0);
        form.apply_change(SellingPriceField::BuyingPriceDetail, "2", &refs);

        form.apply_change(SellingPriceField::SellingPrice, "100", &refs);

        assert_eq!(form.channel_fee, "10.00");
        assert_eq!(form.margin, "50.00");
        assert_eq!(form.margin_percent, "50.00");

        form.apply_change(SellingPriceField::ChannelFeePercent, "25", &refs);
        assert_eq!(form.channel_fee, "25.00");
        assert_eq!(form.margin, "35.00");
        assert_eq!(form.margin_percent, "35.00");
    }

    #[test]
    fn zero_price_gives_zero_margin_percent() {
        let refs = SellingPriceRefs { buying_price_details: &[] };
        let mut form = SellingPriceDetailForm::new_for(None, 5.0);
        form.apply_change(SellingPriceField::UnitCost, "20", &refs);

        assert_eq!(form.margin, "-20.00");
        assert_eq!(form.margin_percent, "0.00");
    }

    #[test]
    fn unknown_buying_line_only_sets_selection() {
        let lines = buying_lines();
        let refs = SellingPriceRefs { buying_price_details: &lines };
        let mut form = SellingPriceDetailForm::new_for(None, 0.0);
        form.apply_change(SellingPriceField::BuyingPriceDetail, "1", &refs);

        form.apply_change(SellingPriceField::BuyingPriceDetail, "", &refs);

        assert_eq!(form.buying_price_detail_id, "");
        assert_eq!(form.sku, "BAG-BLK");
        assert_eq!(form.unit_cost, "15.00");
    }

    #[test]
    fn validation_and_wire_record() {
        let lines = buying_lines();
        let refs = SellingPriceRefs { buying_price_details: &lines };
        let mut form = SellingPriceDetailForm::new_for(Some(RecordId::Number(3)), 10.0);
        assert_eq!(
            form.validate(),
            Err("Buying price line is required".to_string())
        );

        form.apply_change(SellingPriceField::BuyingPriceDetail, "1", &refs);
        assert_eq!(
            form.validate(),
            Err("Selling price must be greater than zero".to_string())
        );

        form.apply_change(SellingPriceField::SellingPrice, "30", &refs);
        assert!(form.validate().is_ok());

        let detail = form.to_detail();
        assert_eq!(detail.selling_price_id, Some(RecordId::Number(3)));
        assert_eq!(detail.buying_price_detail_id, Some(RecordId::Number(1)));
        assert_eq!(detail.channel_fee, 3.0);
        assert_eq!(detail.margin, 12.0);
        assert_eq!(detail.margin_percent, 40.0);
    }
}
