//! errors.rs - Custom error types for the replacer-core library.
//!
//! This module defines a structured error enum for the library, providing
//! specific, actionable error types that can be handled programmatically.
//!
//! License: MIT OR Apache-2.0

use thiserror::Error;

/// This enum represents all possible error types in the `replacer-core` library.
///
/// By using `#[non_exhaustive]`, we signal to consumers of this library that
/// new variants may be added in future versions. This prevents them from
/// matching all variants exhaustively, thus avoiding breaking changes.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ReplacerError {
    /// A configuration payload could not be decoded. This is the only hard
    /// failure in the loading path; no partial replacer is usable after it.
    #[error("Failed to decode replacer configuration: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Failed to compile pattern '{0}': {1}")]
    PatternCompile(String, regex::Error),

    #[error("An unexpected I/O error occurred: {0}")]
    Io(#[from] std::io::Error),
}
