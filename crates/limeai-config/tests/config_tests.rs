// SPDX-FileCopyrightText: 2026 LimeAI Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Integration tests for the LimeAI configuration system.

use limeai_config::diagnostic::ConfigError;
use limeai_config::model::{LimeConfig, TransportKind, DEFAULT_API_BASE};
use limeai_config::{load_and_validate_str, load_config_from_path, load_config_from_str};

/// Valid TOML with all known fields deserializes successfully.
#[test]
fn valid_toml_deserializes_into_lime_config() {
    let toml = r#"
[server]
name = "custom-server"
log_level = "debug"
transport = "http"
bind_address = "0.0.0.0"
port = 9000
http_path = "/tools"

[remote]
api_base = "http://localhost:8080/api"
access_token = "tok-123"
request_timeout_secs = 30
"#;

    let config = load_config_from_str(toml).expect("valid TOML should deserialize");
    assert_eq!(config.server.name, "custom-server");
    assert_eq!(config.server.log_level, "debug");
    assert_eq!(config.server.transport, TransportKind::Http);
    assert_eq!(config.server.bind_address, "0.0.0.0");
    assert_eq!(config.server.port, 9000);
    assert_eq!(config.server.http_path, "/tools");
    assert_eq!(config.remote.api_base, "http://localhost:8080/api");
    assert_eq!(config.remote.access_token.as_deref(), Some("tok-123"));
    assert_eq!(config.remote.request_timeout_secs, Some(30));
}

/// Missing sections fall back to defaults.
#[test]
fn empty_toml_uses_defaults() {
    let config = load_config_from_str("").expect("empty TOML should use defaults");
    assert_eq!(config.server.name, "LimeAI-MCP-Server");
    assert_eq!(config.server.log_level, "info");
    assert_eq!(config.server.transport, TransportKind::Stdio);
    assert_eq!(config.server.port, 8000);
    assert_eq!(config.server.http_path, "/mcp");
    assert_eq!(config.remote.api_base, DEFAULT_API_BASE);
    assert!(config.remote.access_token.is_none());
}

/// Unknown keys are rejected and reported with a suggestion.
#[test]
fn unknown_key_in_remote_is_reported_with_suggestion() {
    let toml = r#"
[remote]
acess_token = "abc"
"#;

    let errors = load_and_validate_str(toml).expect_err("should reject unknown field");
    assert!(errors.iter().any(|e| matches!(
        e,
        ConfigError::UnknownKey { key, suggestion: Some(s), .. }
            if key == "acess_token" && s == "access_token"
    )));
}

/// A value of the wrong type produces an InvalidType diagnostic.
#[test]
fn wrong_type_is_reported() {
    let toml = r#"
[server]
port = "eighty"
"#;

    let errors = load_and_validate_str(toml).expect_err("should reject string port");
    assert!(errors
        .iter()
        .any(|e| matches!(e, ConfigError::InvalidType { key, .. } if key.contains("port"))));
}

/// Semantic validation runs after a successful parse.
#[test]
fn validation_errors_surface_from_str_loader() {
    let toml = r#"
[remote]
api_base = "ftp://example.com"
"#;

    let errors = load_and_validate_str(toml).expect_err("ftp base should be rejected");
    assert!(errors
        .iter()
        .any(|e| matches!(e, ConfigError::Validation { message } if message.contains("api_base"))));
}

/// `LIMEAI_ACCESS_TOKEN` lands in `remote.access_token` over the file value.
#[test]
fn env_access_token_overrides_toml() {
    figment::Jail::expect_with(|jail| {
        jail.create_file(
            "limeai.toml",
            r#"
[remote]
access_token = "from-toml"
"#,
        )?;
        jail.set_env("LIMEAI_ACCESS_TOKEN", "from-env");

        let config = load_config_from_path(std::path::Path::new("limeai.toml"))?;
        assert_eq!(config.remote.access_token.as_deref(), Some("from-env"));
        Ok(())
    });
}

/// Tokens that look like numbers, booleans or arrays are kept verbatim.
#[test]
fn env_access_token_is_read_as_raw_text() {
    for token in ["1234567890", "00123", "true", "[ab,cd]"] {
        figment::Jail::expect_with(|jail| {
            jail.set_env("LIMEAI_ACCESS_TOKEN", token);

            let config = load_config_from_path(std::path::Path::new("limeai.toml"))?;
            assert_eq!(config.remote.access_token.as_deref(), Some(token));
            Ok(())
        });
    }
}

/// The sectioned variable name is accepted too, and other overrides still parse.
#[test]
fn sectioned_env_vars_apply() {
    figment::Jail::expect_with(|jail| {
        jail.set_env("LIMEAI_REMOTE_ACCESS_TOKEN", "42");
        jail.set_env("LIMEAI_SERVER_PORT", "9100");

        let config = load_config_from_path(std::path::Path::new("limeai.toml"))?;
        assert_eq!(config.remote.access_token.as_deref(), Some("42"));
        assert_eq!(config.server.port, 9100);
        Ok(())
    });
}

/// Missing config files are skipped by Figment.
#[test]
fn missing_config_file_falls_back_to_defaults() {
    let config = load_config_from_path(std::path::Path::new("/nonexistent/limeai.toml"))
        .expect("missing file should be silently skipped");
    assert_eq!(config.server.name, "LimeAI-MCP-Server");
}

/// Serialized defaults round-trip through TOML without the credential.
#[test]
fn defaults_render_as_toml() {
    let rendered = toml::to_string(&LimeConfig::default()).expect("defaults should serialize");
    assert!(rendered.contains("[server]"));
    assert!(rendered.contains("[remote]"));
    assert!(rendered.contains(DEFAULT_API_BASE));
    assert!(!rendered.contains("access_token"));
}
