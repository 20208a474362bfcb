// SPDX-FileCopyrightText: 2026 LimeAI Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs for the LimeAI MCP server.
//!
//! All structs use `#[serde(deny_unknown_fields)]` to reject unrecognized
//! config keys at startup, providing actionable error messages.

use std::fmt;

use limeai_core::AccessCredential;
use limeai_core::types::mask_secret;
use serde::{Deserialize, Serialize};

/// Default base URL of the LimeAI HTTP API.
pub const DEFAULT_API_BASE: &str = "https://web.limeai.net/api";

/// Top-level LimeAI configuration.
///
/// Loaded from TOML files following XDG hierarchy, with environment variable overrides.
/// All sections are optional and default to sensible values.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct LimeConfig {
    /// MCP server identity and transport settings.
    #[serde(default)]
    pub server: ServerConfig,

    /// Remote LimeAI API settings.
    #[serde(default)]
    pub remote: RemoteConfig,
}

/// How the MCP server talks to its host.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TransportKind {
    /// JSON-RPC over stdin/stdout.
    #[default]
    Stdio,
    /// Streamable HTTP.
    Http,
}

impl fmt::Display for TransportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stdio => f.write_str("stdio"),
            Self::Http => f.write_str("http"),
        }
    }
}

/// MCP server configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
    /// Server name reported to the MCP host.
    #[serde(default = "default_server_name")]
    pub name: String,

    /// Logging level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Transport used by `limeai serve`.
    #[serde(default)]
    pub transport: TransportKind,

    /// Address the HTTP transport binds to.
    #[serde(default = "default_bind_address")]
    pub bind_address: String,

    /// Port the HTTP transport listens on.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Route the HTTP transport is mounted at.
    #[serde(default = "default_http_path")]
    pub http_path: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            name: default_server_name(),
            log_level: default_log_level(),
            transport: TransportKind::default(),
            bind_address: default_bind_address(),
            port: default_port(),
            http_path: default_http_path(),
        }
    }
}

fn default_server_name() -> String {
    "LimeAI-MCP-Server".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_bind_address() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_http_path() -> String {
    "/mcp".to_string()
}

/// Remote LimeAI API configuration.
#[derive(Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct RemoteConfig {
    /// Base URL all endpoint paths are appended to.
    #[serde(default = "default_api_base")]
    pub api_base: String,

    /// Access token sent as the `Access-Token` header. Usually supplied via
    /// `LIMEAI_ACCESS_TOKEN`; never written back out.
    #[serde(default, skip_serializing)]
    pub access_token: Option<String>,

    /// Optional per-request timeout. No timeout when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_timeout_secs: Option<u64>,
}

impl RemoteConfig {
    /// The configured credential, or `None` when unset or blank.
    pub fn credential(&self) -> Option<AccessCredential> {
        self.access_token.clone().and_then(AccessCredential::new)
    }
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            api_base: default_api_base(),
            access_token: None,
            request_timeout_secs: None,
        }
    }
}

impl fmt::Debug for RemoteConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RemoteConfig")
            .field("api_base", &self.api_base)
            .field(
                "access_token",
                &self.access_token.as_deref().map(mask_secret),
            )
            .field("request_timeout_secs", &self.request_timeout_secs)
            .finish()
    }
}

fn default_api_base() -> String {
    DEFAULT_API_BASE.to_string()
}
