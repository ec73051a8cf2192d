use serde::{Deserialize, Serialize};

/// Claims carried by the bearer token issued by the identity provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    pub sub: String, // user_id
    pub email: Option<String>,
    pub exp: usize, // expiration timestamp
    pub iat: usize, // issued at
}

/// Authenticated user as seen by the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: String,
    pub email: Option<String>,
}
