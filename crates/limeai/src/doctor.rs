// SPDX-FileCopyrightText: 2026 LimeAI Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `limeai doctor` command implementation.
//!
//! Checks that the configuration is usable, a credential is present, and the
//! LimeAI API accepts it.

use std::io::IsTerminal;
use std::time::{Duration, Instant};

use colored::Colorize;
use limeai_client::LimeClient;
use limeai_config::LimeConfig;

use crate::error::AppError;

/// Status of a diagnostic check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckStatus {
    Pass,
    Warn,
    Fail,
}

/// Result of a single diagnostic check.
#[derive(Debug, Clone)]
pub struct CheckResult {
    pub name: &'static str,
    pub status: CheckStatus,
    pub message: String,
    pub duration: Duration,
}

/// Run the `limeai doctor` command.
///
/// Fails with [`AppError::ChecksFailed`] when any check fails; warnings alone
/// still exit successfully.
pub async fn run_doctor(config: &LimeConfig, plain: bool) -> Result<(), AppError> {
    let use_color = !plain && std::io::stdout().is_terminal();
    let client = LimeClient::from_config(&config.remote)?;

    let results = vec![
        check_config(config),
        check_credential(&client),
        check_remote(&client).await,
    ];

    println!();
    println!("  limeai doctor");
    println!("  {}", "-".repeat(50));
    for result in &results {
        println!("{}", format_line(result, use_color));
    }
    println!();

    let failed = results
        .iter()
        .filter(|r| r.status == CheckStatus::Fail)
        .count();
    let warned = results
        .iter()
        .filter(|r| r.status == CheckStatus::Warn)
        .count();

    match failed + warned {
        0 => println!("  All checks passed."),
        1 => println!("  1 issue found."),
        n => println!("  {n} issues found."),
    }
    println!();

    if failed > 0 {
        Err(AppError::ChecksFailed(failed))
    } else {
        Ok(())
    }
}

fn format_line(result: &CheckResult, use_color: bool) -> String {
    let ms = result.duration.as_millis();
    if !use_color {
        let tag = match result.status {
            CheckStatus::Pass => "[OK]  ",
            CheckStatus::Warn => "[WARN]",
            CheckStatus::Fail => "[FAIL]",
        };
        return format!("    {tag} {:<20} {} ({ms}ms)", result.name, result.message);
    }

    let (symbol, message) = match result.status {
        CheckStatus::Pass => ("✓".green(), result.message.normal()),
        CheckStatus::Warn => ("!".yellow(), result.message.yellow()),
        CheckStatus::Fail => ("✗".red(), result.message.red()),
    };
    format!("    {symbol} {:<20} {message} ({ms}ms)", result.name)
}

/// The config was already loaded and validated; report where calls go.
fn check_config(config: &LimeConfig) -> CheckResult {
    CheckResult {
        name: "Configuration",
        status: CheckStatus::Pass,
        message: format!("valid (api_base = {})", config.remote.api_base),
        duration: Duration::ZERO,
    }
}

fn check_credential(client: &LimeClient) -> CheckResult {
    let (status, message) = if client.has_credential() {
        (CheckStatus::Pass, "present".to_string())
    } else {
        (
            CheckStatus::Fail,
            "not set (export LIMEAI_ACCESS_TOKEN or add it to .env)".to_string(),
        )
    };
    CheckResult {
        name: "Access credential",
        status,
        message,
        duration: Duration::ZERO,
    }
}

/// Calls the user-info endpoint to prove the API is reachable and accepts
/// the credential.
async fn check_remote(client: &LimeClient) -> CheckResult {
    let start = Instant::now();
    let name = "LimeAI API";

    if !client.has_credential() {
        return CheckResult {
            name,
            status: CheckStatus::Warn,
            message: "skipped (no credential)".to_string(),
            duration: start.elapsed(),
        };
    }

    let (status, message) = match client.fetch_user_info().await {
        Ok(_) => (CheckStatus::Pass, "credential accepted".to_string()),
        Err(e) => (CheckStatus::Fail, e.to_string()),
    };
    CheckResult {
        name,
        status,
        message,
        duration: start.elapsed(),
    }
}
