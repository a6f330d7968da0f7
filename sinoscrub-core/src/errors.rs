//! errors.rs - Custom error types for the sinoscrub-core library.
//!
//! This module defines a structured error enum for the library, providing
//! specific, actionable error types that can be handled programmatically.
//!
//! License: MIT OR APACHE 2.0

use thiserror::Error;

/// This enum represents all possible error types in the `sinoscrub-core` library.
///
/// By using `#[non_exhaustive]`, we signal to consumers of this library that
/// new variants may be added in future versions. This prevents them from
/// matching all variants exhaustively, thus avoiding breaking changes.
///
/// Every variant is a construction-time failure. Scanning and replacement
/// never fail: given a built [`Scrubber`](crate::Scrubber) and any input
/// text, they are total functions.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ScrubError {
    /// A referenced dictionary source does not exist on disk.
    ///
    /// Callers may treat this as recoverable for optional custom
    /// dictionaries (warn and continue without the source); it is fatal for
    /// built-in sources.
    #[error("Dictionary source '{source_id}' not found")]
    SourceNotFound {
        source_id: String,
        #[source]
        source: std::io::Error,
    },

    /// A dictionary source is structurally invalid: not parseable as a JSON
    /// keyword mapping, or a record entry is missing its `replacement`.
    #[error("Failed to parse dictionary source '{source_id}': {source}")]
    MalformedSource {
        source_id: String,
        #[source]
        source: serde_json::Error,
    },

    /// A dictionary source maps the empty string to a replacement.
    #[error("Dictionary source '{source_id}' contains an empty keyword")]
    EmptyKeyword { source_id: String },

    /// The engine was asked to require at least one keyword, but the
    /// finalized dictionary is empty.
    #[error("Dictionary contains no keywords, but the engine requires at least one")]
    EmptyDictionary,

    #[error("An unexpected I/O error occurred: {0}")]
    IoError(#[from] std::io::Error),
}
