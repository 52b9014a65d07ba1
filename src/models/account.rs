use serde::{Deserialize, Serialize};

/// Profile returned by the identity provider's userinfo endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    /// Provider-side subject identifier.
    pub sub: String,
    pub email: Option<String>,
    pub name: Option<String>,
}

/// A provider account linked through the adapter (`accounts` table).
#[derive(Debug, Clone, Serialize)]
pub struct Account {
    pub id: i64,
    pub provider: String,
    pub provider_account_id: String,
    pub email: Option<String>,
    pub name: Option<String>,
    pub created_at: String,
}

/// A login session issued after a successful provider exchange (`sessions` table).
#[derive(Debug, Clone, Serialize)]
pub struct Session {
    pub token: String,
    pub account_id: i64,
    pub expires_at: String, // RFC 3339
}
