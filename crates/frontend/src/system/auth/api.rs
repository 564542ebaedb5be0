use contracts::shared::api::{ApiEnvelope, ApiError};
use contracts::system::auth::{LoginRequest, LoginResponse, UserInfo};
use gloo_net::http::Request;

use crate::shared::api_utils::api_url;

/// Login with username and password
pub async fn login(username: String, password: String) -> Result<LoginResponse, ApiError> {
    let request = LoginRequest { username, password };

    let response = Request::post(&api_url("/api/auth/login"))
        .json(&request)
        .map_err(|e| ApiError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    let status = response.status();
    let text = response
        .text()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))?;

    // a rejected login is a 401 too, keep the backend's wording for it
    if !response.ok() {
        return Err(match ApiError::from_response(status, &text) {
            ApiError::NotAuthenticated => ApiError::Http {
                status,
                message: Some("Invalid username or password".to_string()),
            },
            other => other,
        });
    }

    decode_login(&text)
}

fn decode_login(text: &str) -> Result<LoginResponse, ApiError> {
    if let Ok(env) = serde_json::from_str::<ApiEnvelope<LoginResponse>>(text) {
        return Ok(env.data);
    }
    serde_json::from_str::<LoginResponse>(text).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Logout; the token is dropped locally whatever the backend says
pub async fn logout(access_token: &str) -> Result<(), ApiError> {
    let response = Request::post(&api_url("/api/auth/logout"))
        .header("Authorization", &format!("Bearer {}", access_token))
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !response.ok() {
        let text = response.text().await.unwrap_or_default();
        return Err(ApiError::from_response(response.status(), &text));
    }

    Ok(())
}

/// Get current user info, also used to check a stored token
pub async fn get_current_user(access_token: &str) -> Result<UserInfo, ApiError> {
    let response = Request::get(&api_url("/api/auth/me"))
        .header("Authorization", &format!("Bearer {}", access_token))
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    let status = response.status();
    let text = response
        .text()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))?;

    if !response.ok() {
        return Err(ApiError::from_response(status, &text));
    }

    decode_user(&text)
}

fn decode_user(text: &str) -> Result<UserInfo, ApiError> {
    if let Ok(env) = serde_json::from_str::<ApiEnvelope<UserInfo>>(text) {
        return Ok(env.data);
    }
    serde_json::from_str::<UserInfo>(text).map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_login_with_and_without_envelope() {
        let r = decode_login(r#"{"data":{"token":"t1"}}"#).unwrap();
        assert_eq!(r.token, "t1");
        let r = decode_login(r#"{"access_token":"t2","user":{"id":3,"username":"ops"}}"#).unwrap();
        assert_eq!(r.token, "t2");
        assert!(matches!(decode_login("[]"), Err(ApiError::Decode(_))));
    }

    #[test]
    fn test_decode_user() {
        let u = decode_user(r#"{"data":{"id":1,"username":"admin"}}"#).unwrap();
        assert_eq!(u.username, "admin");
        let u = decode_user(r#"{"id":"u-7","username":"ops","name":"Operator"}"#).unwrap();
        assert_eq!(u.display_name(), "Operator");
    }
}
