//! OAuth2 token state and the refresh-token grant.

use base64::{engine::general_purpose, Engine as _};
use reqwest::header::{ACCEPT, AUTHORIZATION};
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use tokio::sync::Mutex;
use tracing::{debug, info};

use super::config::ClientConfig;
use crate::error::{Result, YahooError};

/// The current access/refresh token pair.
#[derive(Debug, Clone, Default)]
pub struct TokenState {
    pub access_token: Option<String>,
    pub refresh_token: Option<String>,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default)]
    refresh_token: Option<String>,
    #[serde(default)]
    expires_in: Option<u64>,
    #[serde(default)]
    token_type: Option<String>,
}

/// Owns the token pair. Refreshes are serialized on one async mutex so
/// concurrent 401s trigger a single token exchange.
pub struct TokenManager {
    http: Client,
    token_url: String,
    consumer_key: String,
    consumer_secret: String,
    state: Mutex<TokenState>,
}

impl TokenManager {
    pub fn new(http: Client, config: &ClientConfig) -> Self {
        Self {
            http,
            token_url: config.token_url.clone(),
            consumer_key: config.consumer_key.clone(),
            consumer_secret: config.consumer_secret.clone(),
            state: Mutex::new(TokenState {
                access_token: config.access_token.clone(),
                refresh_token: config.refresh_token.clone(),
            }),
        }
    }

    pub async fn access_token(&self) -> Option<String> {
        self.state.lock().await.access_token.clone()
    }

    pub async fn has_refresh_token(&self) -> bool {
        self.state.lock().await.refresh_token.is_some()
    }

    pub async fn snapshot(&self) -> TokenState {
        self.state.lock().await.clone()
    }

    fn basic_auth(&self) -> String {
        let credentials = format!("{}:{}", self.consumer_key, self.consumer_secret);
        format!("Basic {}", general_purpose::STANDARD.encode(credentials.as_bytes()))
    }

    /// Exchange the refresh token for a new access token.
    ///
    /// `stale` is the access token the caller saw fail. When the stored token
    /// no longer matches it, another caller already refreshed and the stored
    /// token is returned without a second exchange.
    pub async fn refresh(&self, stale: Option<&str>) -> Result<String> {
        let mut state = self.state.lock().await;

        if let Some(current) = state.access_token.as_deref() {
            if Some(current) != stale {
                debug!("Access token already refreshed by another request");
                return Ok(current.to_string());
            }
        }

        let refresh_token = state
            .refresh_token
            .clone()
            .ok_or(YahooError::MissingRefreshToken)?;

        info!("Refreshing Yahoo access token");
        let form = [
            ("grant_type", "refresh_token"),
            ("refresh_token", refresh_token.as_str()),
        ];
        let response = self
            .http
            .post(&self.token_url)
            .header(AUTHORIZATION, self.basic_auth())
            .header(ACCEPT, "application/json")
            .form(&form)
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            return Err(YahooError::TokenRefresh {
                status: status.as_u16(),
                body,
            });
        }

        let token: TokenResponse = response.json().await?;
        info!(
            expires_in = token.expires_in.unwrap_or_default(),
            token_type = token.token_type.as_deref().unwrap_or("bearer"),
            "Token refreshed"
        );

        state.access_token = Some(token.access_token.clone());
        if let Some(new_refresh) = token.refresh_token.filter(|t| !t.is_empty()) {
            state.refresh_token = Some(new_refresh);
        }
        Ok(token.access_token)
    }
}
