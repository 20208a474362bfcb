// SPDX-FileCopyrightText: 2026 LimeAI Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.
//!
//! Checks semantic constraints that serde attributes cannot express. All
//! failures are collected rather than stopping at the first one.

use crate::diagnostic::ConfigError;
use crate::model::LimeConfig;

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error", "off"];

/// Validate a deserialized configuration.
pub fn validate_config(config: &LimeConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();
    let mut fail = |message: String| errors.push(ConfigError::Validation { message });

    let api_base = config.remote.api_base.trim();
    if api_base.is_empty() {
        fail("remote.api_base must not be empty".to_string());
    } else if !(api_base.starts_with("http://") || api_base.starts_with("https://")) {
        fail(format!(
            "remote.api_base `{api_base}` must start with http:// or https://"
        ));
    }

    if config.remote.request_timeout_secs == Some(0) {
        fail("remote.request_timeout_secs must be greater than 0 when set".to_string());
    }

    let level = config.server.log_level.trim().to_ascii_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        fail(format!(
            "server.log_level `{}` is not one of: {}",
            config.server.log_level,
            LOG_LEVELS.join(", ")
        ));
    }

    if config.server.name.trim().is_empty() {
        fail("server.name must not be empty".to_string());
    }

    let addr = config.server.bind_address.trim();
    if addr.is_empty() {
        fail("server.bind_address must not be empty".to_string());
    } else {
        let is_valid_ip = addr.parse::<std::net::IpAddr>().is_ok();
        let is_valid_hostname = addr
            .chars()
            .all(|c| c.is_alphanumeric() || c == '.' || c == '-');
        if !is_valid_ip && !is_valid_hostname {
            fail(format!(
                "server.bind_address `{addr}` is not a valid IP address or hostname"
            ));
        }
    }

    if config.server.port == 0 {
        fail("server.port must not be 0".to_string());
    }

    let http_path = config.server.http_path.as_str();
    if !http_path.starts_with('/') {
        fail(format!("server.http_path `{http_path}` must start with `/`"));
    } else if http_path.ends_with('/') {
        // The router cannot nest a service at the root.
        fail(format!(
            "server.http_path `{http_path}` must name a path below `/` without a trailing `/`"
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
