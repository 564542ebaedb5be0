//! REST calls against `{api_base}/api/{endpoint}`.
//!
//! Every request carries the stored bearer token. GET payloads come wrapped
//! in `{ "data": ... }`; bare payloads are accepted too. Failures are
//! reported as [`ApiError`].

use contracts::shared::api::ApiError;
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::shared::api_utils::api_base;
use crate::system::auth::storage;

/// `{base}/api/{endpoint}[/{id}][?k=v&...]`, values percent-encoded
pub fn build_url(base: &str, endpoint: &str, id: Option<&str>, params: &[(&str, &str)]) -> String {
    let mut url = format!("{}/api/{}", base, endpoint);
    if let Some(id) = id {
        url.push('/');
        url.push_str(&urlencoding::encode(id));
    }
    if !params.is_empty() {
        let query: Vec<String> = params
            .iter()
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect();
        url.push('?');
        url.push_str(&query.join("&"));
    }
    url
}

/// Payload of a successful response body
pub fn unwrap_data(text: &str) -> Result<Value, ApiError> {
    if text.trim().is_empty() {
        return Ok(Value::Null);
    }
    if let Some(err) = ApiError::from_success_body(text) {
        return Err(err);
    }
    let value: Value = serde_json::from_str(text).map_err(|e| ApiError::Decode(e.to_string()))?;
    Ok(match value {
        Value::Object(mut map) if map.contains_key("data") => {
            map.remove("data").unwrap_or(Value::Null)
        }
        other => other,
    })
}

/// Rows of a list payload
pub fn unwrap_list(text: &str) -> Result<Vec<Value>, ApiError> {
    match unwrap_data(text)? {
        Value::Array(items) => Ok(items),
        Value::Null => Ok(Vec::new()),
        other => Err(ApiError::Decode(format!("expected a list, got {}", other))),
    }
}

fn authorized(builder: RequestBuilder) -> Result<RequestBuilder, ApiError> {
    let token = storage::get_access_token().ok_or(ApiError::NotAuthenticated)?;
    Ok(builder
        .header("Authorization", &format!("Bearer {}", token))
        .header("Accept", "application/json"))
}

async fn read_body(response: Response) -> Result<String, ApiError> {
    let status = response.status();
    let text = response
        .text()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    if !response.ok() {
        return Err(ApiError::from_response(status, &text));
    }
    Ok(text)
}

async fn send(builder: RequestBuilder) -> Result<String, ApiError> {
    let response = authorized(builder)?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    read_body(response).await
}

async fn send_json(builder: RequestBuilder, body: &Value) -> Result<String, ApiError> {
    let response = authorized(builder)?
        .json(body)
        .map_err(|e| ApiError::Decode(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    read_body(response).await
}

pub async fn get_list(endpoint: &str, params: &[(&str, &str)]) -> Result<Vec<Value>, ApiError> {
    let url = build_url(&api_base(), endpoint, None, params);
    let text = send(Request::get(&url)).await?;
    unwrap_list(&text)
}

pub async fn get_one(endpoint: &str, id: &str) -> Result<Value, ApiError> {
    let url = build_url(&api_base(), endpoint, Some(id), &[]);
    let text = send(Request::get(&url)).await?;
    unwrap_data(&text)
}

/// Typed list, for pages that work with aggregates
pub async fn get_list_as<T: DeserializeOwned>(endpoint: &str) -> Result<Vec<T>, ApiError> {
    get_list(endpoint, &[])
        .await?
        .into_iter()
        .map(|v| serde_json::from_value(v).map_err(|e| ApiError::Decode(e.to_string())))
        .collect()
}

pub async fn get_one_as<T: DeserializeOwned>(endpoint: &str, id: &str) -> Result<T, ApiError> {
    let value = get_one(endpoint, id).await?;
    serde_json::from_value(value).map_err(|e| ApiError::Decode(e.to_string()))
}

/// POST a new record, returns whatever the backend sends back
pub async fn create(endpoint: &str, body: &Value) -> Result<Value, ApiError> {
    let url = build_url(&api_base(), endpoint, None, &[]);
    let text = send_json(Request::post(&url), body).await?;
    unwrap_data(&text)
}

pub async fn update(endpoint: &str, id: &str, body: &Value) -> Result<Value, ApiError> {
    let url = build_url(&api_base(), endpoint, Some(id), &[]);
    let text = send_json(Request::put(&url), body).await?;
    unwrap_data(&text)
}

pub async fn delete(endpoint: &str, id: &str) -> Result<(), ApiError> {
    let url = build_url(&api_base(), endpoint, Some(id), &[]);
    send(Request::delete(&url)).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_build_url() {
        assert_eq!(
            build_url("http://h:3000", "country", None, &[]),
            "http://h:3000/api/country"
        );
        assert_eq!(
            build_url("", "country", Some("12"), &[]),
            "/api/country/12"
        );
        assert_eq!(
            build_url("", "pi-detail", None, &[("proformaInvoiceId", "A B")]),
            "/api/pi-detail?proformaInvoiceId=A%20B"
        );
    }

    #[test]
    fn test_unwrap_data() {
        assert_eq!(unwrap_data(r#"{"data":{"id":1}}"#).unwrap(), json!({"id": 1}));
        assert_eq!(unwrap_data(r#"{"id":2}"#).unwrap(), json!({"id": 2}));
        assert_eq!(unwrap_data("").unwrap(), Value::Null);
        assert!(matches!(unwrap_data("not json"), Err(ApiError::Decode(_))));
    }

    #[test]
    fn test_unwrap_data_reports_error_status_on_200() {
        let err = unwrap_data(r#"{"status":{"code":409,"message":"Bank already exists"}}"#)
            .unwrap_err();
        assert_eq!(err.backend_message(), Some("Bank already exists"));
    }

    #[test]
    fn test_unwrap_list() {
        assert_eq!(unwrap_list(r#"{"data":[{"id":1},{"id":2}]}"#).unwrap().len(), 2);
        assert!(unwrap_list(r#"{"data":null}"#).unwrap().is_empty());
        assert!(unwrap_list(r#"{"data":{"id":1}}"#).is_err());
    }
}
