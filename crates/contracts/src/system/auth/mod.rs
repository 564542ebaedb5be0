use crate::domain::common::RecordId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    /// Bearer token sent with every API call
    #[serde(alias = "accessToken", alias = "access_token")]
    pub token: String,
    #[serde(default)]
    pub user: Option<UserInfo>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: RecordId,
    pub username: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
}

impl UserInfo {
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .filter(|n| !n.trim().is_empty())
            .unwrap_or(&self.username)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_response_shapes() {
        let r: LoginResponse = serde_json::from_str(
            r#"{"token": "abc", "user": {"id": 1, "username": "admin", "name": "Administrator", "role": "admin"}}"#,
        )
        .unwrap();
        assert_eq!(r.token, "abc");
        assert_eq!(r.user.as_ref().map(|u| u.display_name()), Some("Administrator"));

        let r: LoginResponse = serde_json::from_str(r#"{"accessToken": "xyz"}"#).unwrap();
        assert_eq!(r.token, "xyz");
        assert!(r.user.is_none());
    }

    #[test]
    fn test_display_name_falls_back_to_username() {
        let u = UserInfo {
            id: RecordId::Text("u-1".into()),
            username: "ops".into(),
            name: Some(" ".into()),
            role: None,
        };
        assert_eq!(u.display_name(), "ops");
    }
}
