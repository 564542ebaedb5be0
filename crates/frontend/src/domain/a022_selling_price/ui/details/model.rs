use crate::shared::http;
use contracts::domain::a010_channel::{self, Channel};
use contracts::domain::a021_buying_price::{self, BuyingPriceDetail};
use contracts::domain::a022_selling_price::{self, SellingPrice, SellingPriceDetail};
use contracts::domain::common::RecordId;
use contracts::shared::api::ApiError;

pub async fn fetch_by_id(id: &str) -> Result<SellingPriceDetail, ApiError> {
    http::get_one_as(a022_selling_price::DETAIL_RESOURCE.endpoint, id).await
}

pub async fn fetch_header(id: &RecordId) -> Result<SellingPrice, ApiError> {
    http::get_one_as(a022_selling_price::RESOURCE.endpoint, &id.as_string()).await
}

pub async fn fetch_channel(id: &RecordId) -> Result<Channel, ApiError> {
    http::get_one_as(a010_channel::RESOURCE.endpoint, &id.as_string()).await
}

/// Fee of the header's channel, 0 when the header or channel is unknown
pub async fn fetch_channel_fee(header_id: &RecordId) -> Result<f64, ApiError> {
    let header = fetch_header(header_id).await?;
    match header.channel_id {
        Some(channel_id) => Ok(fetch_channel(&channel_id).await?.fee_percent),
        None => Ok(0.0),
    }
}

pub async fn fetch_buying_price_details() -> Result<Vec<BuyingPriceDetail>, ApiError> {
    http::get_list_as(a021_buying_price::DETAIL_RESOURCE.endpoint).await
}

/// `(id, label)` pairs for the buying price line dropdown
pub fn buying_price_options(details: &[BuyingPriceDetail]) -> Vec<(String, String)> {
    details
        .iter()
        .filter_map(|d| d.id.as_ref().map(|id| (id.as_string(), d.label())))
        .collect()
}

pub async fn save_form(detail: &SellingPriceDetail) -> Result<(), ApiError> {
    let body = serde_json::to_value(detail).map_err(|e| ApiError::Decode(e.to_string()))?;
    let endpoint = a022_selling_price::DETAIL_RESOURCE.endpoint;
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
    fn test_buying_price_options_skip_unsaved_lines() {
        let details = vec![
            BuyingPriceDetail {
                id: Some(RecordId::Number(4)),
                sku: "SKU-4".into(),
                ..Default::default()
            },
            BuyingPriceDetail {
                sku: "draft".into(),
                ..Default::default()
            },
        ];
        assert_eq!(
            buying_price_options(&details),
            vec![("4".to_string(), "SKU-4 (#4)".to_string())]
        );
    }
}
