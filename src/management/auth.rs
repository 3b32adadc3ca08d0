use std::{fmt, sync::Arc};

use chrono::{DateTime, Duration, Utc};
use reqwest::{Client, StatusCode};
use tokio::sync::Mutex;

use crate::{config::Settings, info, types::TokenResponse};

/// Source of the current time, replaceable in tests.
pub type Clock = Arc<dyn Fn() -> DateTime<Utc> + Send + Sync>;

#[derive(Debug)]
pub enum TokenError {
    RequestError(reqwest::Error),
    Rejected(StatusCode, String),
    Malformed(String),
}

impl fmt::Display for TokenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenError::RequestError(e) => write!(f, "token request failed: {}", e),
            TokenError::Rejected(status, body) => {
                write!(f, "token endpoint answered {}: {}", status, body)
            }
            TokenError::Malformed(e) => write!(f, "malformed token response: {}", e),
        }
    }
}

impl std::error::Error for TokenError {}

impl From<reqwest::Error> for TokenError {
    fn from(err: reqwest::Error) -> Self {
        TokenError::RequestError(err)
    }
}

#[derive(Debug, Clone)]
pub struct TokenState {
    pub access_token: String,
    pub expires_at: DateTime<Utc>,
}

/// Owns the access token and refreshes it lazily.
///
/// One instance is shared (behind an `Arc`) by every conversation the server
/// handles. The refresh runs while the state lock is held, so concurrent
/// callers that find an expired token wait for a single refresh instead of
/// each issuing their own.
pub struct TokenManager {
    http: Client,
    token_url: String,
    refresh_token: String,
    client_credential: String,
    clock: Clock,
    state: Mutex<Option<TokenState>>,
}

impl TokenManager {
    pub fn new(http: Client, settings: &Settings) -> Self {
        TokenManager {
            http,
            token_url: settings.token_url.clone(),
            refresh_token: settings.refresh_token.clone(),
            client_credential: settings.client_credential.clone(),
            clock: Arc::new(Utc::now),
            state: Mutex::new(None),
        }
    }

    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    /// Starts from an already known token instead of an empty cache.
    pub fn with_token(mut self, access_token: &str, expires_at: DateTime<Utc>) -> Self {
        self.state = Mutex::new(Some(TokenState {
            access_token: access_token.to_string(),
            expires_at,
        }));
        self
    }

    /// Returns a token that is valid right now, refreshing it first if the
    /// cached one has expired (or there is none yet).
    pub async fn get_access_token(&self) -> Result<String, TokenError> {
        let mut state = self.state.lock().await;
        let now = (self.clock)();

        if let Some(current) = state.as_ref() {
            if now < current.expires_at {
                return Ok(current.access_token.clone());
            }
        }

        let fresh = self.refresh(now).await?;
        let token = fresh.access_token.clone();
        *state = Some(fresh);
        Ok(token)
    }

    pub async fn current_token(&self) -> Option<TokenState> {
        self.state.lock().await.clone()
    }

    async fn refresh(&self, now: DateTime<Utc>) -> Result<TokenState, TokenError> {
        let res = self
            .http
            .post(&self.token_url)
            .header(
                reqwest::header::AUTHORIZATION,
                format!("Basic {}", self.client_credential),
            )
            .form(&[
                ("grant_type", "refresh_token"),
                ("refresh_token", self.refresh_token.as_str()),
            ])
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;
        if !status.is_success() {
            return Err(TokenError::Rejected(status, body));
        }

        let json: TokenResponse =
            serde_json::from_str(&body).map_err(|e| TokenError::Malformed(e.to_string()))?;

        let expires_at = Duration::try_seconds(json.expires_in)
            .and_then(|lifetime| now.checked_add_signed(lifetime))
            .ok_or_else(|| {
                TokenError::Malformed(format!("expires_in out of range: {}", json.expires_in))
            })?;

        info!("Access token refreshed, valid for {} seconds", json.expires_in);

        Ok(TokenState {
            access_token: json.access_token,
            expires_at,
        })
    }
}
