//! HTTP fetcher for character details. One POST per (account, unit) pair, no retries.

use std::fmt;

use reqwest::header::{CONTENT_TYPE, COOKIE};
use serde_json::Value;
use tracing::debug;

use crate::api::types::{CharacterDetailsRequest, Credential};
use crate::config::ApiConfig;

#[derive(Debug)]
pub enum FetchError {
    /// Connection failure, timeout, or an unusable request.
    Transport(reqwest::Error),
    /// Non-2xx HTTP status.
    Status(u16),
    /// Body was not JSON.
    Decode(serde_json::Error),
    /// JSON envelope did not carry `code: 0`.
    Api { code: Option<i64>, message: Option<String> },
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Transport(err) => write!(f, "request failed: {err}"),
            Self::Status(status) => write!(f, "upstream returned HTTP {status}"),
            Self::Decode(err) => write!(f, "response is not valid JSON: {err}"),
            Self::Api { code, message } => {
                match code {
                    Some(code) => write!(f, "upstream rejected request with code {code}")?,
                    None => write!(f, "upstream response has no status code")?,
                }
                if let Some(message) = message {
                    write!(f, ": {message}")?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for FetchError {}

/// Source of raw character-detail responses.
#[allow(async_fn_in_trait)]
pub trait StatsFetcher {
    async fn fetch_character_details(
        &self,
        account_id: &str,
        unit_code: u32,
    ) -> Result<Value, FetchError>;
}

/// Accept only envelopes whose numeric `code` equals 0 (`0` and `0.0` alike).
pub fn check_envelope(body: Value) -> Result<Value, FetchError> {
    let code = body.get("code");
    if code.and_then(Value::as_f64) == Some(0.0) {
        return Ok(body);
    }
    Err(FetchError::Api {
        code: code.and_then(Value::as_i64),
        message: body.get("msg").and_then(Value::as_str).map(str::to_string),
    })
}

#[derive(Debug, Clone)]
pub struct HttpStatsFetcher {
    client: reqwest::Client,
    url: String,
    area_id: u32,
    credential: Credential,
}

impl HttpStatsFetcher {
    pub fn new(config: &ApiConfig, credential: Credential) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("gearstats/", env!("CARGO_PKG_VERSION")))
            .timeout(config.timeout)
            .build()
            .map_err(FetchError::Transport)?;
        Ok(Self {
            client,
            url: config.url.clone(),
            area_id: config.area_id,
            credential,
        })
    }
}

impl StatsFetcher for HttpStatsFetcher {
    async fn fetch_character_details(
        &self,
        account_id: &str,
        unit_code: u32,
    ) -> Result<Value, FetchError> {
        let payload = CharacterDetailsRequest::new(account_id, unit_code, self.area_id);
        debug!(account_id, unit_code, "requesting character details");

        let response = self
            .client
            .post(&self.url)
            .header(CONTENT_TYPE, "application/json")
            .header(COOKIE, self.credential.expose())
            .json(&payload)
            .send()
            .await
            .map_err(FetchError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let bytes = response.bytes().await.map_err(FetchError::Transport)?;
        let body: Value = serde_json::from_slice(&bytes).map_err(FetchError::Decode)?;
        check_envelope(body)
    }
}
