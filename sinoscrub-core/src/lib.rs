// sinoscrub-core/src/lib.rs
//! # sinoscrub Core Library
//!
//! `sinoscrub-core` provides the fundamental, platform-independent logic for
//! dictionary-driven keyword scrubbing. It indexes an arbitrary-size keyword
//! dictionary once into a multi-pattern matching automaton, then rewrites
//! input text in a single pass proportional to the text length plus the
//! number of matches found, independent of dictionary size.
//!
//! The library is designed to be pure and stateless beyond the compiled
//! automaton, focusing solely on the transformation of input text based on
//! loaded dictionaries, without concerns for terminal rendering or
//! application-specific state management.
//!
//! ## Modules
//!
//! * `dictionary`: Defines `KeywordEntry`, the built-in `Category` sources,
//!   and the `Dictionary` load/override rules.
//! * `automaton`: Compiles a finalized dictionary into the arena-indexed
//!   prefix tree with fallback links.
//! * `matcher`: Scans a text buffer against the automaton, producing ordered
//!   non-overlapping matches.
//! * `replacer`: Splices replacements into the original text and accumulates
//!   change records.
//! * `change`: Defines the `KeywordMatch` and `Change` record types.
//! * `engine`: The `Scrubber` facade tying the phases together.
//! * `errors`: The `ScrubError` taxonomy for construction-time failures.
//!
//! ## Usage Example
//!
//! ```rust
//! use sinoscrub_core::{Category, Dictionary, Scrubber};
//! use anyhow::Result;
//!
//! fn main() -> Result<()> {
//!     // 1. Assemble a dictionary from the built-in categories.
//!     let dictionary = Dictionary::with_builtin_categories(&Category::ALL)?;
//!
//!     // 2. Build the engine once; reuse it for every scrub call.
//!     let scrubber = Scrubber::new(dictionary)?;
//!
//!     // 3. Rewrite text, tracking what changed and why.
//!     let (scrubbed, changes) = scrubber.scrub_with_changes("系统正在处死进程");
//!     assert_eq!(scrubbed, "系统正在终止进程");
//!     assert_eq!(changes.len(), 1);
//!     assert_eq!(changes[0].keyword, "处死");
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All fallible operations happen at construction time (dictionary loading
//! and engine building) and return the typed [`ScrubError`]. Scanning and
//! replacement never fail.
//!
//! ## Concurrency
//!
//! A built [`Scrubber`] is immutable. Wrap it in an `Arc` and scan from as
//! many threads as you like; each scan owns its own cursor state.
//!
//! ---
//! License: MIT OR Apache-2.0

pub mod automaton;
mod casefold;
pub mod change;
pub mod dictionary;
pub mod engine;
pub mod errors;
pub mod matcher;
pub mod replacer;

/// Re-exports the dictionary types: entries, categories and load rules.
pub use dictionary::{Category, Dictionary, KeywordEntry};

/// Re-exports the custom error type for clear error reporting.
pub use errors::ScrubError;

/// Re-exports the engine facade and its construction options.
pub use engine::{EngineOptions, Scrubber};

/// Re-exports the scanning types: the lazy match sequence and the boundary
/// character class.
pub use matcher::{Matches, WordCharClass};

/// Re-exports the match and change record types.
pub use change::{Change, KeywordMatch};

/// Re-exports the replacement pass for callers driving the phases manually.
pub use replacer::apply;
