// SPDX-FileCopyrightText: 2026 LimeAI Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP client for the LimeAI API.
//!
//! Provides [`LimeClient`], which attaches the access credential to every
//! request and folds transport, parse, and remote-status failures into
//! [`LimeError`]. Requests are never retried.

use std::time::Duration;

use limeai_config::RemoteConfig;
use limeai_core::{AccessCredential, DocumentKind, DocumentPayload, LimeError, RemoteResult};
use limeai_core::error::UNKNOWN_REMOTE_ERROR;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::{Method, RequestBuilder};
use tracing::{debug, warn};

use crate::naming::normalize_filename;

/// Path of the current-user endpoint, relative to the API base.
pub const USER_INFO_PATH: &str = "/mcp/user/userinfo";

/// Path of the document creation endpoint, relative to the API base.
pub const CREATE_DOCUMENT_PATH: &str = "/mcp/resource/create-document";

/// Header carrying the access credential.
pub const ACCESS_TOKEN_HEADER: &str = "Access-Token";

/// Value of `status` in a successful response body.
const SUCCESS_STATUS: &str = "success";

/// HTTP client for LimeAI API communication.
///
/// Cheap to clone and safe to share across concurrent tool calls: the only
/// state is the base URL, the credential header, and the underlying
/// `reqwest::Client`. Idle connections are not pooled, so each call's
/// connection is closed once its response has been read or dropped.
#[derive(Debug, Clone)]
pub struct LimeClient {
    client: reqwest::Client,
    base_url: String,
    access_token: Option<HeaderValue>,
}

impl LimeClient {
    /// Creates a new client.
    ///
    /// A missing `credential` is not an error here; every operation reports
    /// it instead, before touching the network.
    pub fn new(
        api_base: impl Into<String>,
        credential: Option<AccessCredential>,
        timeout: Option<Duration>,
    ) -> Result<Self, LimeError> {
        let access_token = credential
            .map(|credential| {
                let mut value = HeaderValue::from_str(credential.expose()).map_err(|e| {
                    LimeError::Config(format!("invalid access token header value: {e}"))
                })?;
                value.set_sensitive(true);
                Ok::<_, LimeError>(value)
            })
            .transpose()?;

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let mut builder = reqwest::Client::builder()
            .default_headers(headers)
            .pool_max_idle_per_host(0);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(|e| LimeError::Config(format!(
            "failed to build HTTP client: {e}"
        )))?;

        Ok(Self {
            client,
            base_url: api_base.into().trim_end_matches('/').to_string(),
            access_token,
        })
    }

    /// Creates a client from the `[remote]` config section.
    pub fn from_config(config: &RemoteConfig) -> Result<Self, LimeError> {
        Self::new(
            config.api_base.clone(),
            config.credential(),
            config.request_timeout_secs.map(Duration::from_secs),
        )
    }

    /// Base URL endpoint paths are appended to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Whether an access credential was configured.
    pub fn has_credential(&self) -> bool {
        self.access_token.is_some()
    }

    /// Fetches the profile of the user owning the access credential.
    pub async fn fetch_user_info(&self) -> Result<RemoteResult, LimeError> {
        let request = self.request(Method::GET, USER_INFO_PATH)?;
        self.execute(request, USER_INFO_PATH).await
    }

    /// Stores `content` as a new document of the given kind.
    ///
    /// `file_name` is normalized with [`normalize_filename`]; when absent a
    /// random `mcp_` name is generated.
    pub async fn save_document(
        &self,
        content: &str,
        file_name: Option<&str>,
        kind: DocumentKind,
    ) -> Result<RemoteResult, LimeError> {
        let request = self.request(Method::POST, CREATE_DOCUMENT_PATH)?;
        let payload = DocumentPayload::new(
            kind,
            content,
            normalize_filename(file_name, kind.extension()),
        );
        debug!(
            kind = %kind,
            file_name = %payload.file_name,
            bytes = payload.content.len(),
            "creating document"
        );
        self.execute(request.json(&payload), CREATE_DOCUMENT_PATH).await
    }

    /// Stores Markdown text. See [`save_document`](Self::save_document).
    pub async fn save_markdown(
        &self,
        content: &str,
        file_name: Option<&str>,
    ) -> Result<RemoteResult, LimeError> {
        self.save_document(content, file_name, DocumentKind::Markdown).await
    }

    /// Stores HTML text. See [`save_document`](Self::save_document).
    pub async fn save_html(
        &self,
        content: &str,
        file_name: Option<&str>,
    ) -> Result<RemoteResult, LimeError> {
        self.save_document(content, file_name, DocumentKind::Html).await
    }

    /// Starts a request with the credential attached. Fails without any
    /// network activity when no credential is configured.
    fn request(&self, method: Method, path: &str) -> Result<RequestBuilder, LimeError> {
        let token = self
            .access_token
            .clone()
            .ok_or_else(LimeError::missing_credential)?;
        Ok(self
            .client
            .request(method, format!("{}{path}", self.base_url))
            .header(ACCESS_TOKEN_HEADER, token))
    }

    /// Sends the request and turns the response into a [`RemoteResult`].
    async fn execute(
        &self,
        request: RequestBuilder,
        endpoint: &str,
    ) -> Result<RemoteResult, LimeError> {
        let response = request.send().await.map_err(|e| {
            warn!(endpoint, error = %e, "request failed");
            transport_error(e)
        })?;

        let status = response.status();
        debug!(endpoint, status = %status, "response received");

        // Non-2xx responses are transport failures; their bodies are not parsed.
        let response = response.error_for_status().map_err(|e| {
            warn!(endpoint, status = %status, "remote returned error status");
            transport_error(e)
        })?;

        let body = response.text().await.map_err(transport_error)?;
        let result: RemoteResult =
            serde_json::from_str(&body).map_err(|e| {
                warn!(endpoint, error = %e, "unparsable response body");
                LimeError::MalformedResponse {
                    message: e.to_string(),
                    source: Some(Box::new(e)),
                }
            })?;

        check_status(result).inspect_err(|e| {
            warn!(endpoint, error = %e, "remote rejected request");
        })
    }
}

fn transport_error(e: reqwest::Error) -> LimeError {
    LimeError::Transport {
        message: e.to_string(),
        source: Some(Box::new(e)),
    }
}

/// Accepts a body whose `status` is `"success"`; otherwise reports the
/// remote `message`, or a generic one when the remote gave none.
fn check_status(result: RemoteResult) -> Result<RemoteResult, LimeError> {
    if result.get("status").and_then(|s| s.as_str()) == Some(SUCCESS_STATUS) {
        return Ok(result);
    }
    let message = match result.get("message") {
        Some(serde_json::Value::String(message)) => message.clone(),
        Some(serde_json::Value::Null) | None => UNKNOWN_REMOTE_ERROR.to_string(),
        Some(other) => other.to_string(),
    };
    Err(LimeError::Rejected { message })
}
