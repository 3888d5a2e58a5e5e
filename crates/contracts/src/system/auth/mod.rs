use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub user: UserInfo,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshRequest {
    pub refresh_token: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshResponse {
    pub access_token: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: Uuid,
    pub username: String,
    pub full_name: Option<String>,
    pub email: Option<String>,
    /// Permission identifiers granted to this account. Opaque strings; the
    /// sidebar filter and route guards compare them verbatim.
    #[serde(default)]
    pub permissions: Vec<String>,
}

impl UserInfo {
    /// Snapshot of the granted set in the form the navigation filter takes.
    pub fn permission_set(&self) -> HashSet<String> {
        self.permissions.iter().cloned().collect()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    pub sub: String, // user_id
    pub username: String,
    pub permissions: Vec<String>,
    pub exp: usize, // expiration timestamp
    pub iat: usize, // issued at
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_permission_set_deduplicates() {
        let user = UserInfo {
            id: Uuid::nil(),
            username: "admin".to_string(),
            full_name: None,
            email: None,
            permissions: vec![
                "READ_PAY".to_string(),
                "READ_PAY".to_string(),
                "READ_CASH".to_string(),
            ],
        };
        let set = user.permission_set();
        assert_eq!(set.len(), 2);
        assert!(set.contains("READ_PAY"));
    }

    #[test]
    fn test_user_info_tolerates_missing_permissions_field() {
        let json = r#"{"id":"00000000-0000-0000-0000-000000000000","username":"u","full_name":null,"email":null}"#;
        let user: UserInfo = serde_json::from_str(json).unwrap();
        assert!(user.permissions.is_empty());
    }
}
