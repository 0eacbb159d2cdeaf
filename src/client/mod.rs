//! HTTP transport for the support chat endpoint.
//! One request shape, one response shape, two ways to fail:
//! the server answered with an error status, or nothing usable came back.

pub mod wire;

#[cfg(test)]
mod tests;

pub use wire::{ChatReply, ChatRequest};

use crate::session::SessionId;
use reqwest::{Client, StatusCode};
use std::env;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, warn};
use url::Url;

/// Fixed path under the configured backend base.
pub const SUPPORT_PATH: &str = "/api/chat/support";

const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Error)]
pub enum SendError {
    /// Server was reachable but answered with a non-success status.
    /// The body is not inspected further.
    #[error("support endpoint rejected the request: HTTP {status}")]
    RemoteRejection { status: StatusCode },
    /// No usable response at all: connect failure, DNS, timeout, or an
    /// unreadable body.
    #[error("could not reach the support endpoint: {0}")]
    TransportFailure(#[source] reqwest::Error),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("SUPPORT_BACKEND_URL is not set")]
    MissingBaseUrl,
    #[error("invalid SUPPORT_BACKEND_URL: {0}")]
    InvalidBaseUrl(#[from] url::ParseError),
    #[error("invalid SUPPORT_REQUEST_TIMEOUT_SECS: {0}")]
    InvalidTimeout(String),
    #[error("failed to build HTTP client: {0}")]
    Http(#[from] reqwest::Error),
}

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: Url,
    pub request_timeout: Duration,
}

impl ClientConfig {
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url,
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Reads `SUPPORT_BACKEND_URL` (required) and
    /// `SUPPORT_REQUEST_TIMEOUT_SECS` (optional, default 30).
    pub fn from_env() -> Result<Self, ConfigError> {
        let base_url = env::var("SUPPORT_BACKEND_URL")
            .ok()
            .map(|value| value.trim().to_owned())
            .filter(|value| !value.is_empty())
            .ok_or(ConfigError::MissingBaseUrl)?;
        let base_url = Url::parse(&base_url)?;

        let request_timeout = match env::var("SUPPORT_REQUEST_TIMEOUT_SECS") {
            Ok(raw) => {
                let secs = raw
                    .trim()
                    .parse::<u64>()
                    .map_err(|_| ConfigError::InvalidTimeout(raw.clone()))?;
                Duration::from_secs(secs)
            }
            Err(_) => Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        };

        Ok(Self {
            base_url,
            request_timeout,
        })
    }
}

/// Thin wrapper around a pooled `reqwest::Client`, pointed at one backend.
#[derive(Debug, Clone)]
pub struct SupportClient {
    http: Client,
    endpoint: Url,
}

impl SupportClient {
    pub fn new(config: ClientConfig) -> Result<Self, ConfigError> {
        let http = Client::builder().timeout(config.request_timeout).build()?;
        // String concatenation rather than Url::join, so a base with a path
        // prefix keeps that prefix.
        let endpoint = Url::parse(&format!(
            "{}{}",
            config.base_url.as_str().trim_end_matches('/'),
            SUPPORT_PATH
        ))?;
        Ok(Self { http, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// POST one user utterance, tagged with its session id. Success means
    /// a 2xx status and a parseable `{"response": ...}` body.
    pub async fn send(&self, message: &str, session_id: &SessionId) -> Result<String, SendError> {
        debug!(%session_id, "posting support message");

        let response = self
            .http
            .post(self.endpoint.clone())
            .json(&ChatRequest {
                message,
                session_id: session_id.as_str(),
            })
            .send()
            .await
            .map_err(SendError::TransportFailure)?;

        let status = response.status();
        if !status.is_success() {
            warn!(%status, "support endpoint returned an error status");
            return Err(SendError::RemoteRejection { status });
        }

        let reply: ChatReply = response.json().await.map_err(SendError::TransportFailure)?;
        Ok(reply.response)
    }
}
