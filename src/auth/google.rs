//! Google OAuth: authorization URL, code exchange, profile fetch.

use super::AuthError;
use crate::models::Profile;
use reqwest::Url;

const AUTHORIZE_ENDPOINT: &str = "https://accounts.google.com/o/oauth2/v2/auth";
const TOKEN_ENDPOINT: &str = "https://oauth2.googleapis.com/token";
const USERINFO_ENDPOINT: &str = "https://openidconnect.googleapis.com/v1/userinfo";

pub const ENV_CLIENT_ID: &str = "GOOGLE_CLIENT_ID";
pub const ENV_CLIENT_SECRET: &str = "GOOGLE_CLIENT_SECRET";
pub const ENV_REDIRECT_URI: &str = "GOOGLE_REDIRECT_URI";

/// Google OAuth configuration loaded from environment.
#[derive(Debug, Clone)]
pub struct GoogleConfig {
    pub client_id: String,
    pub client_secret: String,
    pub redirect_uri: String,
}

#[derive(Debug, serde::Deserialize)]
struct TokenResponse {
    access_token: String,
}

impl GoogleConfig {
    /// Load from `GOOGLE_CLIENT_ID`, `GOOGLE_CLIENT_SECRET`, `GOOGLE_REDIRECT_URI`.
    /// Returns `None` if any are missing (auth will be disabled).
    pub fn from_env() -> Option<Self> {
        Self::from_lookup(|k| std::env::var(k).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Option<Self> {
        let get = |k: &str| lookup(k).filter(|v| !v.trim().is_empty());
        Some(Self {
            client_id: get(ENV_CLIENT_ID)?,
            client_secret: get(ENV_CLIENT_SECRET)?,
            redirect_uri: get(ENV_REDIRECT_URI)?,
        })
    }

    pub fn require() -> Result<Self, AuthError> {
        Self::from_env().ok_or(AuthError::NotConfigured(
            "GOOGLE_CLIENT_ID, GOOGLE_CLIENT_SECRET and GOOGLE_REDIRECT_URI",
        ))
    }

    /// Build the Google authorization URL.
    pub fn authorize_url(&self, state: &str) -> Result<Url, AuthError> {
        Url::parse_with_params(
            AUTHORIZE_ENDPOINT,
            &[
                ("client_id", self.client_id.as_str()),
                ("redirect_uri", self.redirect_uri.as_str()),
                ("response_type", "code"),
                ("scope", "openid email profile"),
                ("state", state),
            ],
        )
        .map_err(|e| AuthError::ProviderApi(e.to_string()))
    }
}

/// Exchange an OAuth code for an access token.
pub fn exchange_code(config: &GoogleConfig, code: &str) -> Result<String, AuthError> {
    let client = reqwest::blocking::Client::new();
    let resp = client
        .post(TOKEN_ENDPOINT)
        .header("Accept", "application/json")
        .form(&[
            ("client_id", config.client_id.as_str()),
            ("client_secret", config.client_secret.as_str()),
            ("code", code),
            ("redirect_uri", config.redirect_uri.as_str()),
            ("grant_type", "authorization_code"),
        ])
        .send()
        .map_err(|e| AuthError::TokenExchange(e.to_string()))?;

    let body = resp
        .text()
        .map_err(|e| AuthError::TokenExchange(e.to_string()))?;
    let token_resp: TokenResponse = serde_json::from_str(&body)
        .map_err(|_| AuthError::TokenExchange(format!("unexpected response: {body}")))?;
    Ok(token_resp.access_token)
}

/// Fetch the authenticated user's profile.
pub fn fetch_profile(access_token: &str) -> Result<Profile, AuthError> {
    let client = reqwest::blocking::Client::new();
    let resp = client
        .get(USERINFO_ENDPOINT)
        .bearer_auth(access_token)
        .send()
        .map_err(|e| AuthError::ProviderApi(e.to_string()))?;

    if !resp.status().is_success() {
        let status = resp.status();
        let body = resp.text().unwrap_or_default();
        return Err(AuthError::ProviderApi(format!("{status}: {body}")));
    }

    resp.json::<Profile>()
        .map_err(|e| AuthError::ProviderApi(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn vars(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn config() -> GoogleConfig {
        GoogleConfig {
            client_id: "id123".into(),
            client_secret: "secret456".into(),
            redirect_uri: "http://localhost:3000/api/auth/callback/google".into(),
        }
    }

    #[test]
    fn from_lookup_all_set_returns_some() {
        let env = vars(&[
            (ENV_CLIENT_ID, "id123"),
            (ENV_CLIENT_SECRET, "secret456"),
            (ENV_REDIRECT_URI, "http://localhost/callback"),
        ]);
        let cfg = GoogleConfig::from_lookup(|k| env.get(k).cloned()).unwrap();
        assert_eq!(cfg.client_id, "id123");
        assert_eq!(cfg.client_secret, "secret456");
        assert_eq!(cfg.redirect_uri, "http://localhost/callback");
    }

    #[test]
    fn from_lookup_missing_secret_returns_none() {
        let env = vars(&[
            (ENV_CLIENT_ID, "id123"),
            (ENV_REDIRECT_URI, "http://localhost/callback"),
        ]);
        assert!(GoogleConfig::from_lookup(|k| env.get(k).cloned()).is_none());
    }

    #[test]
    fn from_lookup_blank_value_returns_none() {
        let env = vars(&[
            (ENV_CLIENT_ID, " "),
            (ENV_CLIENT_SECRET, "secret456"),
            (ENV_REDIRECT_URI, "http://localhost/callback"),
        ]);
        assert!(GoogleConfig::from_lookup(|k| env.get(k).cloned()).is_none());
    }

    #[test]
    fn authorize_url_encodes_parameters() {
        let url = config().authorize_url("abc").unwrap();
        assert_eq!(url.host_str(), Some("accounts.google.com"));

        let q: HashMap<_, _> = url.query_pairs().into_owned().collect();
        assert_eq!(q["client_id"], "id123");
        assert_eq!(q["response_type"], "code");
        assert_eq!(q["scope"], "openid email profile");
        assert_eq!(q["state"], "abc");
        assert_eq!(
            q["redirect_uri"],
            "http://localhost:3000/api/auth/callback/google"
        );
        assert!(!url.as_str().contains("openid email"));
    }
}
