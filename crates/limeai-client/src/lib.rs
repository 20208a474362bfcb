// SPDX-FileCopyrightText: 2026 LimeAI Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Client adapter for the LimeAI document API.
//!
//! [`LimeClient`] wraps the two remote endpoints the MCP tools expose:
//! reading the current user and creating Markdown or HTML documents.
//! Filenames are normalized by [`normalize_filename`] before upload.

pub mod client;
pub mod naming;

pub use client::LimeClient;
pub use naming::{generate_identifier, normalize_filename, DEFAULT_IDENTIFIER_LEN};
