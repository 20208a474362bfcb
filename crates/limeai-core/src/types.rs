// SPDX-FileCopyrightText: 2026 LimeAI Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Request-scoped types shared by the client adapter and the tool shim.

use std::fmt;

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Parsed body of a remote response. Always a JSON object with at least `status`.
pub type RemoteResult = serde_json::Map<String, serde_json::Value>;

/// The kinds of document the remote service can store.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum DocumentKind {
    Markdown,
    Html,
}

impl DocumentKind {
    /// Filename suffix, including the leading dot.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Markdown => ".md",
            Self::Html => ".html",
        }
    }

    /// MIME type sent as `content_type`.
    pub fn content_type(self) -> &'static str {
        match self {
            Self::Markdown => "text/markdown",
            Self::Html => "text/html",
        }
    }

    /// Value sent as `type`.
    pub fn type_name(self) -> &'static str {
        match self {
            Self::Markdown => "markdown",
            Self::Html => "html",
        }
    }
}

/// Body of `POST /mcp/resource/create-document`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentPayload {
    pub content: String,
    pub file_name: String,
    pub content_type: String,
    #[serde(rename = "type")]
    pub type_: String,
    pub file_extension: String,
}

impl DocumentPayload {
    /// Builds the payload for `kind` around an already-normalized filename.
    pub fn new(kind: DocumentKind, content: impl Into<String>, file_name: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            file_name: file_name.into(),
            content_type: kind.content_type().to_string(),
            type_: kind.type_name().to_string(),
            file_extension: kind.extension().to_string(),
        }
    }
}

/// The secret value sent as the `Access-Token` header.
#[derive(Clone)]
pub struct AccessCredential(SecretString);

impl AccessCredential {
    /// Wraps a raw token. Returns `None` for blank input so an empty env var
    /// counts as unset.
    pub fn new(token: impl Into<String>) -> Option<Self> {
        let token = token.into();
        if token.trim().is_empty() {
            None
        } else {
            Some(Self(SecretString::from(token)))
        }
    }

    pub fn expose(&self) -> &str {
        self.0.expose_secret()
    }

    /// Masked form for display: first and last four characters.
    pub fn masked(&self) -> String {
        mask_secret(self.expose())
    }
}

impl fmt::Debug for AccessCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("AccessCredential").field(&"[REDACTED]").finish()
    }
}

/// Mask all but the outer characters of a secret.
pub fn mask_secret(value: &str) -> String {
    let chars: Vec<char> = value.chars().collect();
    if chars.len() <= 8 {
        return "*".repeat(chars.len());
    }
    let head: String = chars[..4].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{head}...{tail}")
}
