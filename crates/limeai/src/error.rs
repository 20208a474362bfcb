// SPDX-FileCopyrightText: 2026 LimeAI Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use limeai_core::LimeError;
use limeai_mcp_server::ServeError;
use thiserror::Error;

/// Errors that end a `limeai` command with a non-zero exit code.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Client(#[from] LimeError),

    #[error(transparent)]
    Serve(#[from] ServeError),

    #[error("failed to render configuration: {0}")]
    Render(#[from] toml::ser::Error),

    #[error("{0} check(s) failed")]
    ChecksFailed(usize),
}
