// SPDX-FileCopyrightText: 2026 LimeAI Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Supports XDG hierarchy: `./limeai.toml` > `~/.config/limeai/limeai.toml` > `/etc/limeai/limeai.toml`
//! with environment variable overrides via `LIMEAI_` prefix.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::{Path, PathBuf};

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};

use crate::model::LimeConfig;

/// System-wide config file.
pub const SYSTEM_CONFIG_PATH: &str = "/etc/limeai/limeai.toml";

/// Config file in the working directory.
pub const LOCAL_CONFIG_PATH: &str = "limeai.toml";

/// Per-user config file under the XDG config directory, if one exists.
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("limeai/limeai.toml"))
}

/// Load configuration from the standard XDG hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/limeai/limeai.toml` (system-wide)
/// 3. `~/.config/limeai/limeai.toml` (user XDG config)
/// 4. `./limeai.toml` (local directory)
/// 5. `LIMEAI_*` environment variables
pub fn load_config() -> Result<LimeConfig, figment::Error> {
    build_figment().extract()
}

/// Load configuration from a TOML string only (no XDG lookup, no env).
///
/// Used for testing and explicit configuration.
pub fn load_config_from_str(toml_content: &str) -> Result<LimeConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(LimeConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<LimeConfig, figment::Error> {
    let figment = Figment::new()
        .merge(Serialized::defaults(LimeConfig::default()))
        .merge(Toml::file(path));
    merge_env(figment).extract()
}

/// Build the Figment used internally for config loading (exposed for diagnostic use).
///
/// Returns the Figment before extraction so callers can inspect metadata.
pub fn build_figment() -> Figment {
    let figment = Figment::new()
        .merge(Serialized::defaults(LimeConfig::default()))
        .merge(Toml::file(SYSTEM_CONFIG_PATH))
        .merge(Toml::file(user_config_path().unwrap_or_default()))
        .merge(Toml::file(LOCAL_CONFIG_PATH));
    merge_env(figment)
}

/// Merge `LIMEAI_*` overrides onto `figment`.
///
/// The access credential is read verbatim: `Env` parses values, which would
/// turn a token like `00123` into the integer `123`.
pub fn merge_env(figment: Figment) -> Figment {
    let figment = figment.merge(env_provider());
    match credential_from_env() {
        Some(token) => figment.merge(Serialized::default(CREDENTIAL_KEY, token)),
        None => figment,
    }
}

/// Config path of the access credential.
const CREDENTIAL_KEY: &str = "remote.access_token";

/// Env vars holding the credential, highest precedence first.
const CREDENTIAL_VARS: [&str; 2] = ["LIMEAI_ACCESS_TOKEN", "LIMEAI_REMOTE_ACCESS_TOKEN"];

fn credential_from_env() -> Option<String> {
    CREDENTIAL_VARS
        .iter()
        .find_map(|var| std::env::var(var).ok())
}

/// Create the environment variable provider.
///
/// Uses an explicit key mapping rather than `Env::split("_")` because key
/// names contain underscores: `LIMEAI_ACCESS_TOKEN` must map to
/// `remote.access_token`, not `access.token`. Unrecognized `LIMEAI_*`
/// variables are ignored instead of tripping `deny_unknown_fields`. The
/// credential is left to [`merge_env`].
pub fn env_provider() -> Env {
    Env::prefixed("LIMEAI_")
        .filter(|key| map_env_key(key.as_str()).is_some_and(|path| path != CREDENTIAL_KEY))
        .map(|key| map_env_key(key.as_str()).unwrap_or_default().into())
}

/// Map a prefix-stripped env var name to its config path.
///
/// Figment hands keys over with their original casing, so matching is done
/// on the lowercased name. `access_token` and `api_base` are accepted without
/// a section prefix to match the variable names the hosted service documents.
pub fn map_env_key(key: &str) -> Option<String> {
    let key = key.to_ascii_lowercase();
    let key = key.as_str();
    match key {
        "access_token" | "api_base" => Some(format!("remote.{key}")),
        _ => key
            .strip_prefix("remote_")
            .map(|rest| format!("remote.{rest}"))
            .or_else(|| key.strip_prefix("server_").map(|rest| format!("server.{rest}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_credential_var_maps_into_remote() {
        assert_eq!(
            map_env_key("access_token").as_deref(),
            Some("remote.access_token")
        );
        assert_eq!(map_env_key("api_base").as_deref(), Some("remote.api_base"));
    }

    #[test]
    fn sectioned_vars_keep_underscored_keys() {
        assert_eq!(
            map_env_key("remote_request_timeout_secs").as_deref(),
            Some("remote.request_timeout_secs")
        );
        assert_eq!(
            map_env_key("server_log_level").as_deref(),
            Some("server.log_level")
        );
    }

    #[test]
    fn uppercase_names_are_matched() {
        assert_eq!(
            map_env_key("ACCESS_TOKEN").as_deref(),
            Some("remote.access_token")
        );
        assert_eq!(map_env_key("SERVER_PORT").as_deref(), Some("server.port"));
    }

    #[test]
    fn env_provider_skips_credential_vars() {
        figment::Jail::expect_with(|jail| {
            jail.set_env("LIMEAI_ACCESS_TOKEN", "1234567890");
            jail.set_env("LIMEAI_SERVER_PORT", "9100");
            let figment = Figment::from(env_provider());
            assert!(figment.find_value(CREDENTIAL_KEY).is_err());
            assert_eq!(figment.extract_inner::<u16>("server.port")?, 9100);
            Ok(())
        });
    }

    #[test]
    fn unrelated_vars_are_ignored() {
        assert_eq!(map_env_key("config"), None);
        assert_eq!(map_env_key("home"), None);
    }
}
