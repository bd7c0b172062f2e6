// @awa-component: SHOP-ChatApi
//
//! HTTP client for the product chat service.
//!
//! [`ChatApi`] is the seam the session talks through; [`HttpChatApi`] is the
//! reqwest implementation. `post_chat` reports every HTTP response it gets,
//! whatever the status, so callers can record the round trip before deciding
//! whether it produced a usable reply.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use thiserror::Error;

use crate::config::{CHAT_ENDPOINT, ClientConfig, PRODUCTS_ENDPOINT};
use crate::models::{ChatReply, ChatRequest, ProductsResponse};

/// Errors that can occur while talking to the service.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Request failed: {0}")]
    Transport(String),

    #[error("Request timed out: {0}")]
    Timeout(String),

    #[error("Unexpected status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Malformed response body (status {status}): {reason}")]
    MalformedBody { status: u16, reason: String },

    #[error("Config error: {0}")]
    Config(String),
}

impl ApiError {
    /// HTTP status of the response that caused the error, if one arrived.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } | ApiError::MalformedBody { status, .. } => {
                Some(*status)
            }
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            ApiError::Timeout(e.to_string())
        } else {
            ApiError::Transport(e.to_string())
        }
    }
}

/// Status and decoded body of an HTTP response.
///
/// `data` is the parsed JSON body. A body that is not JSON is kept as a JSON
/// string; an empty body is `null`.
#[derive(Debug, Clone, PartialEq)]
pub struct RawResponse {
    pub status: u16,
    pub data: Value,
}

impl RawResponse {
    /// Decode a response body received with `status`.
    pub fn from_body(status: u16, body: &[u8]) -> Self {
        let data = if body.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(body)
                .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(body).into_owned()))
        };
        Self { status, data }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Extract the assistant reply from a chat response.
    ///
    /// Only a 2xx response whose body carries a string `response` field counts.
    pub fn reply(&self) -> Result<String, ApiError> {
        if !self.is_success() {
            return Err(ApiError::Status {
                status: self.status,
                body: self.data.to_string(),
            });
        }

        serde_json::from_value::<ChatReply>(self.data.clone())
            .map(|reply| reply.response)
            .map_err(|e| ApiError::MalformedBody {
                status: self.status,
                reason: e.to_string(),
            })
    }
}

/// Operations offered by the product chat service.
#[async_trait]
pub trait ChatApi: Send + Sync {
    /// `POST /api/chat`. Any HTTP response is `Ok`, regardless of status.
    async fn post_chat(&self, request: &ChatRequest) -> Result<RawResponse, ApiError>;

    /// `GET /api/products`. Non-2xx statuses are errors.
    async fn list_products(&self) -> Result<ProductsResponse, ApiError>;
}

/// reqwest-backed [`ChatApi`].
#[derive(Debug, Clone)]
pub struct HttpChatApi {
    client: Client,
    config: ClientConfig,
}

impl HttpChatApi {
    /// Build a client for `config`, applying its timeout when set.
    pub fn new(config: ClientConfig) -> Result<Self, ApiError> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| ApiError::Config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self { client, config })
    }
}

#[async_trait]
impl ChatApi for HttpChatApi {
    async fn post_chat(&self, request: &ChatRequest) -> Result<RawResponse, ApiError> {
        let url = self.config.endpoint_url(CHAT_ENDPOINT);
        log::debug!("POST {url}");

        let resp = self.client.post(&url).json(request).send().await?;
        let status = resp.status().as_u16();
        let body = resp.bytes().await?;

        log::debug!("POST {url} -> {status} ({} bytes)", body.len());
        Ok(RawResponse::from_body(status, &body))
    }

    async fn list_products(&self) -> Result<ProductsResponse, ApiError> {
        let url = self.config.endpoint_url(PRODUCTS_ENDPOINT);
        log::debug!("GET {url}");

        let resp = self.client.get(&url).send().await?;
        let status = resp.status();
        if !status.is_success() {
            let body = resp
                .text()
                .await
                .unwrap_or_else(|_| "<no body>".to_string());
            return Err(ApiError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body = resp.bytes().await?;
        serde_json::from_slice(&body).map_err(|e| ApiError::MalformedBody {
            status: status.as_u16(),
            reason: e.to_string(),
        })
    }
}
