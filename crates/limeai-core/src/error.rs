// SPDX-FileCopyrightText: 2026 LimeAI Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the LimeAI MCP server.

use thiserror::Error;

/// Message reported when no access credential was configured.
pub const MISSING_CREDENTIAL: &str = "missing access credential.";

/// Message used when the remote service rejects a request without saying why.
pub const UNKNOWN_REMOTE_ERROR: &str = "unknown error";

/// Coarse failure category, as seen by a tool caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Local configuration problem (missing or unusable credential).
    Configuration,
    /// Connection failure, timeout, or non-2xx HTTP status.
    Transport,
    /// The response could not be parsed or did not indicate success.
    Protocol,
}

/// The error type returned by every remote operation.
#[derive(Debug, Error)]
pub enum LimeError {
    /// Configuration errors (missing credential, invalid header value, bad base URL).
    #[error("configuration error: {0}")]
    Config(String),

    /// Transport errors (connection failure, timeout, non-2xx status).
    #[error("HTTP request failed: {message}")]
    Transport {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The response body was not a JSON object.
    #[error("failed to parse response: {message}")]
    MalformedResponse {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The remote service answered but reported a non-success status.
    #[error("API response error: {message}")]
    Rejected { message: String },
}

impl LimeError {
    /// Shorthand for the missing-credential configuration error.
    pub fn missing_credential() -> Self {
        Self::Config(MISSING_CREDENTIAL.to_string())
    }

    /// Which of the three failure categories this error belongs to.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Config(_) => ErrorKind::Configuration,
            Self::Transport { .. } => ErrorKind::Transport,
            Self::MalformedResponse { .. } | Self::Rejected { .. } => ErrorKind::Protocol,
        }
    }

    /// The bare message without the category prefix.
    pub fn message(&self) -> &str {
        match self {
            Self::Config(message) => message,
            Self::Transport { message, .. }
            | Self::MalformedResponse { message, .. }
            | Self::Rejected { message } => message,
        }
    }
}
