use crate::shared::http;
use contracts::domain::a007_cost_setting;
use contracts::domain::a007_cost_setting::aggregate::CostSetting;
use contracts::domain::a015_proforma_invoice;
use contracts::domain::a015_proforma_invoice::aggregate::ProformaInvoiceDetail;
use contracts::domain::a021_buying_price::{self, BuyingPrice, BuyingPriceDetail};
use contracts::domain::common::RecordId;
use contracts::shared::api::ApiError;

pub async fn fetch_by_id(id: &str) -> Result<BuyingPriceDetail, ApiError> {
    http::get_one_as(a021_buying_price::DETAIL_RESOURCE.endpoint, id).await
}

pub async fn fetch_header(id: &RecordId) -> Result<BuyingPrice, ApiError> {
    http::get_one_as(a021_buying_price::RESOURCE.endpoint, &id.as_string()).await
}

/// Lines of the proforma invoice the buying price document is based on
pub fn lines_of_invoice(
    details: Vec<ProformaInvoiceDetail>,
    invoice_id: Option<&RecordId>,
) -> Vec<ProformaInvoiceDetail> {
    match invoice_id {
        Some(pi) => details
            .into_iter()
            .filter(|d| d.proforma_invoice_id.as_ref() == Some(pi))
            .collect(),
        None => details,
    }
}

pub async fn fetch_pi_details(
    invoice_id: Option<&RecordId>,
) -> Result<Vec<ProformaInvoiceDetail>, ApiError> {
    let details =
        http::get_list_as(a015_proforma_invoice::DETAIL_RESOURCE.endpoint).await?;
    Ok(lines_of_invoice(details, invoice_id))
}

pub async fn fetch_cost_settings() -> Result<Vec<CostSetting>, ApiError> {
    http::get_list_as(a007_cost_setting::RESOURCE.endpoint).await
}

pub async fn save_form(detail: &BuyingPriceDetail) -> Result<(), ApiError> {
    let body = serde_json::to_value(detail).map_err(|e| ApiError::Decode(e.to_string()))?;
    let endpoint = a021_buying_price::DETAIL_RESOURCE.endpoint;
    match &detail.id {
        Some(id) => http::update(endpoint, &id.as_string(), &body).await?,
        None => http::create(endpoint, &body).await?,
    };
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lines_of_invoice() {
        let details: Vec<ProformaInvoiceDetail> = serde_json::from_str(
            r#"[
                {"id": 1, "proformaInvoiceId": 5, "sku": "A"},
                {"id": 2, "proformaInvoiceId": 6, "sku": "B"},
                {"id": 3, "proformaInvoiceId": 5, "sku": "C"}
            ]"#,
        )
        .unwrap();
        let picked = lines_of_invoice(details.clone(), Some(&RecordId::Number(5)));
        let skus: Vec<_> = picked.iter().map(|d| d.sku.as_str()).collect();
        assert_eq!(skus, vec!["A", "C"]);

        assert_eq!(lines_of_invoice(details, None).len(), 3);
    }
}
