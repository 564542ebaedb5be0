use crate::shared::http;
use contracts::domain::a016_cx_quotation::{self, CxQuotationDetail};
use contracts::domain::a017_cx_invoice::{self, CxInvoice, CxInvoiceDetail};
use contracts::domain::common::RecordId;
use contracts::shared::api::ApiError;

pub async fn fetch_by_id(id: &str) -> Result<CxInvoiceDetail, ApiError> {
    http::get_one_as(a017_cx_invoice::DETAIL_RESOURCE.endpoint, id).await
}

pub async fn fetch_header(id: &RecordId) -> Result<CxInvoice, ApiError> {
    http::get_one_as(a017_cx_invoice::RESOURCE.endpoint, &id.as_string()).await
}

/// Only lines of the quotation the invoice bills against
pub fn lines_of_quotation(
    lines: Vec<CxQuotationDetail>,
    quotation_id: Option<&RecordId>,
) -> Vec<CxQuotationDetail> {
    match quotation_id {
        Some(q) => lines
            .into_iter()
            .filter(|l| l.cx_quotation_id.as_ref() == Some(q))
            .collect(),
        None => lines,
    }
}

pub async fn fetch_quotation_lines(
    quotation_id: Option<&RecordId>,
) -> Result<Vec<CxQuotationDetail>, ApiError> {
    let lines = http::get_list_as(a016_cx_quotation::DETAIL_RESOURCE.endpoint).await?;
    Ok(lines_of_quotation(lines, quotation_id))
}

pub async fn save_form(detail: &CxInvoiceDetail) -> Result<(), ApiError> {
    let body = serde_json::to_value(detail).map_err(|e| ApiError::Decode(e.to_string()))?;
    let endpoint = a017_cx_invoice::DETAIL_RESOURCE.endpoint;
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
    fn test_lines_of_quotation() {
        let lines: Vec<CxQuotationDetail> = serde_json::from_str(
            r#"[
                {"id": 1, "cxQuotationId": 2, "description": "Freight"},
                {"id": 2, "cxQuotationId": 3, "description": "Customs"}
            ]"#,
        )
        .unwrap();
        let picked = lines_of_quotation(lines, Some(&RecordId::Number(3)));
        assert_eq!(picked.len(), 1);
        assert_eq!(picked[0].description, "Customs");
    }
}
