//! engine.rs - The scrubbing engine facade.
//!
//! A [`Scrubber`] couples a finalized [`Dictionary`] with the automaton
//! compiled from it. Construction is the only fallible, mutable phase; the
//! built engine is immutable and intended to be created once and reused
//! across many scrub invocations, including from multiple threads at once.
//!
//! License: MIT OR Apache-2.0

use std::path::Path;

use log::debug;

use crate::automaton::Automaton;
use crate::change::Change;
use crate::dictionary::{Category, Dictionary};
use crate::errors::ScrubError;
use crate::matcher::{Matches, WordCharClass};
use crate::replacer;

/// Engine construction options.
#[derive(Debug, Clone, Default)]
pub struct EngineOptions {
    /// The word-character class used for match boundary checking.
    pub word_chars: WordCharClass,
    /// When true, construction fails with [`ScrubError::EmptyDictionary`]
    /// if the dictionary holds no entries. An empty dictionary is otherwise
    /// legal and simply never matches.
    pub require_keywords: bool,
}

/// The scrubbing engine: dictionary plus compiled automaton.
#[derive(Debug)]
pub struct Scrubber {
    dictionary: Dictionary,
    automaton: Automaton,
    options: EngineOptions,
}

impl Scrubber {
    /// Builds an engine over a finalized dictionary with default options.
    pub fn new(dictionary: Dictionary) -> Result<Self, ScrubError> {
        Self::with_options(dictionary, EngineOptions::default())
    }

    pub fn with_options(dictionary: Dictionary, options: EngineOptions) -> Result<Self, ScrubError> {
        if options.require_keywords && dictionary.is_empty() {
            return Err(ScrubError::EmptyDictionary);
        }
        let automaton = Automaton::build(&dictionary);
        debug!("Scrubber ready: {} keywords.", dictionary.len());
        Ok(Self { dictionary, automaton, options })
    }

    /// One-shot convenience constructor: loads the given built-in categories
    /// in order, then the optional custom dictionary last, and builds the
    /// engine.
    ///
    /// Errors propagate as-is; callers wanting warn-and-continue semantics
    /// for a missing custom source should assemble the [`Dictionary`]
    /// themselves and match on [`ScrubError::SourceNotFound`].
    pub fn from_sources(categories: &[Category], custom: Option<&Path>) -> Result<Self, ScrubError> {
        let mut dictionary = Dictionary::with_builtin_categories(categories)?;
        if let Some(path) = custom {
            dictionary.load_file(path)?;
        }
        Self::new(dictionary)
    }

    /// Scans `text` and returns the lazy, ordered match sequence.
    pub fn find_matches(&self, text: &str) -> Matches<'_> {
        Matches::new(&self.automaton, self.dictionary.entries(), &self.options.word_chars, text)
    }

    /// Rewrites `text`, replacing every accepted match. Fast path: no change
    /// tracking.
    pub fn scrub(&self, text: &str) -> String {
        replacer::apply(text, self.find_matches(text), false).0
    }

    /// Rewrites `text` and reports one [`Change`] per replacement, with
    /// original-text offsets.
    pub fn scrub_with_changes(&self, text: &str) -> (String, Vec<Change>) {
        let (scrubbed, changes) = replacer::apply(text, self.find_matches(text), true);
        (scrubbed, changes.unwrap_or_default())
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    pub fn options(&self) -> &EngineOptions {
        &self.options
    }
}
