// SPDX-FileCopyrightText: 2026 LimeAI Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Default and normalized document filenames.

use rand::distributions::Alphanumeric;
use rand::Rng;

/// Length of generated identifiers in default filenames.
pub const DEFAULT_IDENTIFIER_LEN: usize = 8;

/// Prefix of generated filenames.
const GENERATED_PREFIX: &str = "mcp_";

/// Random string of `length` characters from `[A-Za-z0-9]`.
///
/// Not unique: two calls may collide.
pub fn generate_identifier(length: usize) -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(length)
        .map(char::from)
        .collect()
}

/// Canonical filename for a document with the given `extension` (e.g. `.md`).
///
/// A non-empty `provided` name gets `extension` appended unless it already
/// ends with it, compared case-insensitively; the caller's casing is kept.
/// Otherwise a name of the form `mcp_<8 random chars><extension>` is generated.
pub fn normalize_filename(provided: Option<&str>, extension: &str) -> String {
    match provided.filter(|name| !name.is_empty()) {
        Some(name) if ends_with_ignore_case(name, extension) => name.to_string(),
        Some(name) => format!("{name}{extension}"),
        None => format!(
            "{GENERATED_PREFIX}{}{extension}",
            generate_identifier(DEFAULT_IDENTIFIER_LEN)
        ),
    }
}

fn ends_with_ignore_case(name: &str, suffix: &str) -> bool {
    name.len() >= suffix.len()
        && name
            .get(name.len() - suffix.len()..)
            .is_some_and(|tail| tail.eq_ignore_ascii_case(suffix))
}
