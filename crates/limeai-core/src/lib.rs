// SPDX-FileCopyrightText: 2026 LimeAI Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core types for the LimeAI MCP server.
//!
//! Holds the error taxonomy shared by the remote client and the tool shim,
//! the document kinds the remote service accepts, and the access credential
//! wrapper.

pub mod error;
pub mod types;

pub use error::{ErrorKind, LimeError};
pub use types::{AccessCredential, DocumentKind, DocumentPayload, RemoteResult};
