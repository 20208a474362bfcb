// SPDX-FileCopyrightText: 2026 LimeAI Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Transports for serving [`LimeMcpServer`]: stdio and streamable HTTP.
//!
//! Both run until the host disconnects or the shutdown token is cancelled.

use std::net::SocketAddr;

use limeai_config::ServerConfig;
use rmcp::transport::streamable_http_server::session::local::LocalSessionManager;
use rmcp::transport::streamable_http_server::{StreamableHttpServerConfig, StreamableHttpService};
use rmcp::ServiceExt;
use thiserror::Error;
use tokio_util::sync::CancellationToken;
use tracing::info;

use crate::handler::LimeMcpServer;

/// Failures that stop the server as a whole (individual tool failures never do).
#[derive(Debug, Error)]
pub enum ServeError {
    /// The MCP handshake with the host failed.
    #[error("MCP initialization failed: {0}")]
    Initialize(String),

    /// The server task ended abnormally.
    #[error("MCP server task failed: {0}")]
    Task(String),

    /// Binding or running the HTTP listener failed.
    #[error("HTTP transport error: {0}")]
    Http(#[from] std::io::Error),

    #[error("invalid listen address `{0}`")]
    Address(String),
}

/// Serves over stdin/stdout until the host closes the stream or `shutdown` fires.
pub async fn serve_stdio(
    server: LimeMcpServer,
    shutdown: CancellationToken,
) -> Result<(), ServeError> {
    info!("serving MCP over stdio");
    let running = server
        .serve_with_ct(rmcp::transport::stdio(), shutdown)
        .await
        .map_err(|e| ServeError::Initialize(e.to_string()))?;
    let reason = running
        .waiting()
        .await
        .map_err(|e| ServeError::Task(e.to_string()))?;
    info!(reason = ?reason, "stdio transport closed");
    Ok(())
}

/// Serves streamable HTTP at `config.http_path` on `bind_address:port`.
pub async fn serve_http(
    server: LimeMcpServer,
    config: &ServerConfig,
    shutdown: CancellationToken,
) -> Result<(), ServeError> {
    let addr = listen_addr(config)?;

    let service = StreamableHttpService::new(
        move || Ok(server.clone()),
        LocalSessionManager::default().into(),
        StreamableHttpServerConfig::default(),
    );
    let app = axum::Router::new().nest_service(&config.http_path, service);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(addr = %addr, path = %config.http_path, "serving MCP over streamable HTTP");

    axum::serve(listener, app)
        .with_graceful_shutdown(async move { shutdown.cancelled().await })
        .await?;
    info!("HTTP transport stopped");
    Ok(())
}

/// Socket address from `bind_address` and `port`; hostnames are resolved.
fn listen_addr(config: &ServerConfig) -> Result<SocketAddr, ServeError> {
    use std::net::ToSocketAddrs;

    let raw = format!("{}:{}", config.bind_address, config.port);
    raw.to_socket_addrs()
        .ok()
        .and_then(|mut addrs| addrs.next())
        .ok_or(ServeError::Address(raw))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listen_addr_combines_host_and_port() {
        let config = ServerConfig {
            bind_address: "127.0.0.1".into(),
            port: 8123,
            ..ServerConfig::default()
        };
        assert_eq!(listen_addr(&config).unwrap().to_string(), "127.0.0.1:8123");
    }

    #[test]
    fn listen_addr_rejects_garbage() {
        let config = ServerConfig {
            bind_address: "not a host".into(),
            ..ServerConfig::default()
        };
        assert!(matches!(listen_addr(&config), Err(ServeError::Address(_))));
    }
}
