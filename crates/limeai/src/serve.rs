// SPDX-FileCopyrightText: 2026 LimeAI Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `limeai serve` command implementation.
//!
//! Builds the LimeAI client from config, wraps it in the MCP server, and
//! runs the configured transport until the host disconnects or a shutdown
//! signal arrives.

use limeai_client::LimeClient;
use limeai_config::{LimeConfig, TransportKind};
use limeai_mcp_server::{serve_http, serve_stdio, LimeMcpServer};
use tracing::{info, warn};

use crate::error::AppError;
use crate::shutdown;

/// Runs the `limeai serve` command.
pub async fn run_serve(config: LimeConfig) -> Result<(), AppError> {
    let client = LimeClient::from_config(&config.remote)?;
    if !client.has_credential() {
        warn!("LIMEAI_ACCESS_TOKEN is not set; every tool call will fail until it is configured");
    }

    info!(
        name = %config.server.name,
        transport = %config.server.transport,
        api_base = %client.base_url(),
        "starting limeai serve"
    );

    let server = LimeMcpServer::new(client, config.server.name.clone());
    let shutdown = shutdown::install_signal_handler();

    match config.server.transport {
        TransportKind::Stdio => serve_stdio(server, shutdown).await?,
        TransportKind::Http => serve_http(server, &config.server, shutdown).await?,
    }

    info!("limeai serve stopped");
    Ok(())
}
