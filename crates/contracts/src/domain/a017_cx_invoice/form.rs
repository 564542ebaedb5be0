use super::aggregate::CxInvoiceDetail;
use crate::domain::a016_cx_quotation::aggregate::{find_quotation_line, CxQuotationDetail};
use crate::domain::common::RecordId;
use crate::shared::money::{format2, parse_amount};
use crate::shared::recalc::Recalculate;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CxInvoiceField {
    QuotationLine,
    Description,
    Rate,
    Qty,
    ExchangeRate,
    PaidAmount,
}

#[derive(Debug, Clone, Copy)]
pub struct CxInvoiceRefs<'a> {
    pub quotation_lines: &'a [CxQuotationDetail],
}

/// Editable CX invoice line.
///
/// `amount`, `amount_local` and `outstanding` are derived and always hold
/// two-decimal strings.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CxInvoiceDetailForm {
    pub id: Option<RecordId>,
    pub cx_invoice_id: Option<RecordId>,
    pub cx_quotation_detail_id: String,
    pub description: String,
    pub rate: String,
    pub qty: String,
    pub amount: String,
    pub exchange_rate: String,
    pub amount_local: String,
    pub paid_amount: String,
    pub outstanding: String,
}

impl CxInvoiceDetailForm {
    pub fn new_for(cx_invoice_id: Option<RecordId>) -> Self {
        let mut form = Self {
            cx_invoice_id,
            exchange_rate: format2(1.0),
            ..Self::default()
        };
        form.recompute();
        form
    }

    pub fn from_detail(d: &CxInvoiceDetail) -> Self {
        Self {
            id: d.id.clone(),
            cx_invoice_id: d.cx_invoice_id.clone(),
            cx_quotation_detail_id: d
                .cx_quotation_detail_id
                .as_ref()
                .map(RecordId::as_string)
                .unwrap_or_default(),
            description: d.description.clone(),
            rate: format2(d.rate),
            qty: format2(d.qty),
            amount: format2(d.amount),
            exchange_rate: format2(d.exchange_rate),
            amount_local: format2(d.amount_local),
            paid_amount: format2(d.paid_amount),
            outstanding: format2(d.outstanding),
        }
    }

    pub fn to_detail(&self) -> CxInvoiceDetail {
        CxInvoiceDetail {
            id: self.id.clone(),
            cx_invoice_id: self.cx_invoice_id.clone(),
            cx_quotation_detail_id: RecordId::from_string(&self.cx_quotation_detail_id),
            description: self.description.trim().to_string(),
            rate: parse_amount(&self.rate),
            qty: parse_amount(&self.qty),
            amount: parse_amount(&self.amount),
            exchange_rate: parse_amount(&self.exchange_rate),
            amount_local: parse_amount(&self.amount_local),
            paid_amount: parse_amount(&self.paid_amount),
            outstanding: parse_amount(&self.outstanding),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.id.is_some()
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.description.trim().is_empty() {
            return Err("Description is required".to_string());
        }
        if parse_amount(&self.qty) <= 0.0 {
            return Err("Qty must be greater than zero".to_string());
        }
        if parse_amount(&self.exchange_rate) <= 0.0 {
            return Err("Exchange rate must be greater than zero".to_string());
        }
        Ok(())
    }

    /// amount -> amount_local -> outstanding
    fn recompute(&mut self) {
        let amount = parse_amount(&self.rate) * parse_amount(&self.qty);
        let amount_local = amount * parse_amount(&self.exchange_rate);
        let outstanding = amount_local - parse_amount(&self.paid_amount);
        self.amount = format2(amount);
        self.amount_local = format2(amount_local);
        self.outstanding = format2(outstanding);
    }
}

impl<'a> Recalculate<CxInvoiceRefs<'a>> for CxInvoiceDetailForm {
    type Field = CxInvoiceField;

    fn apply_change(&mut self, field: CxInvoiceField, value: &str, ctx: &CxInvoiceRefs<'a>) {
        match field {
            CxInvoiceField::QuotationLine => {
                self.cx_quotation_detail_id = value.to_string();
                let Some(line) = find_quotation_line(ctx.quotation_lines, value) else {
                    return;
                };
                self.description = line.description.clone();
                self.rate = format2(line.rate);
                self.qty = format2(line.qty);
                self.exchange_rate = format2(line.exchange_rate);
            }
            CxInvoiceField::Description => {
                self.description = value.to_string();
                return;
            }
            CxInvoiceField::Rate => self.rate = value.to_string(),
            CxInvoiceField::Qty => self.qty = value.to_string(),
            CxInvoiceField::ExchangeRate => self.exchange_rate = value.to_string(),
            CxInvoiceField::PaidAmount => self.paid_amount = value.to_string(),
        }
        self.recompute();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quotation_lines() -> Vec<CxQuotationDetail> {
        vec![
            CxQuotationDetail {
                id: RecordId::Number(1),
                cx_quotation_id: Some(RecordId::Number(9)),
                description: "Ocean freight".into(),
                rate: 1200.0,
                qty: 2.0,
                exchange_rate: 15.5,
            },
            CxQuotationDetail {
                id: RecordId::Number(2),
                cx_quotation_id: Some(RecordId::Number(9)),
                description: "Customs".into(),
                rate: 75.0,
                qty: 1.0,
                exchange_rate: 1.0,
            },
        ]
    }

    #[test]
    fn selecting_quotation_line_fills_and_computes() {
        let lines = quotation_lines();
        let refs = CxInvoiceRefs { quotation_lines: &lines };
        let mut form = CxInvoiceDetailForm::new_for(Some(RecordId::Number(4)));

        form.apply_change(CxInvoiceField::QuotationLine, "1", &refs);

        assert_eq!(form.description, "Ocean freight");
        assert_eq!(form.rate, "1200.00");
        assert_eq!(form.qty, "2.00");
        assert_eq!(form.exchange_rate, "15.50");
        assert_eq!(form.amount, "2400.00");
        assert_eq!(form.amount_local, "37200.00");
        assert_eq!(form.outstanding, "37200.00");
    }

    #[test]
    fn payment_reduces_outstanding() {
        let lines = quotation_lines();
        let refs = CxInvoiceRefs { quotation_lines: &lines };
        let mut form = CxInvoiceDetailForm::new_for(None);
        form.apply_change(CxInvoiceField::QuotationLine, "1", &refs);

        form.apply_change(CxInvoiceField::PaidAmount, "10000", &refs);
        assert_eq!(form.paid_amount, "10000");
        assert_eq!(form.outstanding, "27200.00");

        form.apply_change(CxInvoiceField::Qty, "3", &refs);
        assert_eq!(form.amount, "3600.00");
        assert_eq!(form.amount_local, "55800.00");
        assert_eq!(form.outstanding, "45800.00");
    }

    #[test]
    fn unparsable_inputs_compute_as_zero() {
        let refs = CxInvoiceRefs { quotation_lines: &[] };
        let mut form = CxInvoiceDetailForm::new_for(None);
        assert_eq!(form.exchange_rate, "1.00");
        assert_eq!(form.amount, "0.00");

        form.apply_change(CxInvoiceField::Rate, "12.5", &refs);
        form.apply_change(CxInvoiceField::Qty, "x", &refs);
        assert_eq!(form.amount, "0.00");
        assert_eq!(form.outstanding, "0.00");
    }

    #[test]
    fn missing_quotation_line_keeps_values() {
        let lines = quotation_lines();
        let refs = CxInvoiceRefs { quotation_lines: &lines };
        let mut form = CxInvoiceDetailForm::new_for(None);
        form.apply_change(CxInvoiceField::QuotationLine, "2", &refs);
        let before = form.clone();

        form.apply_change(CxInvoiceField::QuotationLine, "77", &refs);

        assert_eq!(form.cx_quotation_detail_id, "77");
        assert_eq!(form.description, before.description);
        assert_eq!(form.amount_local, before.amount_local);
    }

    #[test]
    fn validation_messages() {
        let mut form = CxInvoiceDetailForm::new_for(None);
        assert_eq!(form.validate(), Err("Description is required".to_string()));
        form.description = "Handling".into();
        assert_eq!(form.validate(), Err("Qty must be greater than zero".to_string()));
        form.qty = "1".into();
        assert!(form.validate().is_ok());
        assert_eq!(form.to_detail().exchange_rate, 1.0);
    }
}
