//! Identity delegation: one external OAuth provider plus the database
//! adapter that keeps its accounts and sessions.

pub mod adapter;
pub mod google;

pub use google::GoogleConfig;

/// Provider name stored alongside linked accounts.
pub const PROVIDER: &str = "google";

#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("provider is not configured (set {0})")]
    NotConfigured(&'static str),
    #[error("token exchange failed: {0}")]
    TokenExchange(String),
    #[error("provider api error: {0}")]
    ProviderApi(String),
    #[error("unknown or expired session")]
    InvalidSession,
}
