// SPDX-FileCopyrightText: 2026 LimeAI Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! MCP server for the LimeAI document API.
//!
//! Exposes three tools to MCP hosts:
//!
//! | Tool | Arguments |
//! |---|---|
//! | `get_user_info` | none |
//! | `save_markdown` | `text_content`, optional `file_name` |
//! | `save_html` | `html_content`, optional `file_name` |
//!
//! Served over stdio (the default for desktop hosts) or streamable HTTP.

pub mod handler;
pub mod transport;

pub use handler::{LimeMcpServer, SaveHtmlParams, SaveMarkdownParams};
pub use transport::{serve_http, serve_stdio, ServeError};
