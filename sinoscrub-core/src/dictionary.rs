//! Dictionary management for `sinoscrub-core`.
//!
//! This module defines the in-memory keyword dictionary and the on-disk
//! source format. A dictionary is assembled from one or more sources: the
//! embedded built-in category files first, then an optional custom file.
//! Loading the same keyword twice is a legal override, never an error; the
//! entry loaded last fully wins (replacement, reason and category).
//!
//! License: MIT OR Apache-2.0

use std::collections::{BTreeMap, HashMap};
use std::io;
use std::path::Path;

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::casefold;
use crate::errors::ScrubError;

/// A built-in dictionary category, compiled into the library.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Fixes for harsh machine-translation artifacts ("kill", "abort", ...).
    Translation,
    /// Culturally taboo phrasing (death euphemisms, homophone taboos).
    Cultural,
    /// Politically charged terms replaced with neutral wording.
    Political,
}

impl Category {
    /// All built-in categories, in default load order.
    pub const ALL: [Category; 3] = [Category::Translation, Category::Cultural, Category::Political];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Translation => "translation",
            Category::Cultural => "cultural",
            Category::Political => "political",
        }
    }

    /// Stable identifier used in error reporting and logs.
    pub fn source_id(&self) -> &'static str {
        match self {
            Category::Translation => "builtin:translation",
            Category::Cultural => "builtin:cultural",
            Category::Political => "builtin:political",
        }
    }

    fn embedded_source(&self) -> &'static str {
        match self {
            Category::Translation => include_str!("../data/translation_fix.json"),
            Category::Cultural => include_str!("../data/cultural_taboo.json"),
            Category::Political => include_str!("../data/political_sensitive.json"),
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single keyword entry: the pattern to find plus what to do with it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeywordEntry {
    /// The pattern, stored case-folded. Never empty.
    pub keyword: String,
    /// Substituted verbatim for each match. May be empty (deletion).
    pub replacement: String,
    /// Human-readable explanation of why the keyword is replaced.
    pub reason: Option<String>,
    /// Classification label, e.g. "translation" or "cultural".
    pub category: Option<String>,
}

/// The two source shapes a keyword may map to: a bare replacement string, or
/// a record carrying a reason and category. Normalized into [`KeywordEntry`]
/// immediately after parsing; unknown record fields are ignored.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum EntrySpec {
    Plain(String),
    Detailed {
        replacement: String,
        #[serde(default)]
        reason: Option<String>,
        #[serde(default)]
        category: Option<String>,
    },
}

/// An ordered keyword collection with last-write-wins override semantics.
///
/// Mutable only during the load phase; once handed to
/// [`Scrubber`](crate::Scrubber) construction, no further loads occur.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    entries: Vec<KeywordEntry>,
    /// Folded keyword -> index into `entries`, for override resolution.
    index: HashMap<String, usize>,
}

impl Dictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a dictionary from the given built-in categories, in order.
    pub fn with_builtin_categories(categories: &[Category]) -> Result<Self, ScrubError> {
        let mut dict = Self::new();
        for category in categories {
            dict.load_builtin(*category)?;
        }
        Ok(dict)
    }

    /// Loads one embedded built-in category source.
    pub fn load_builtin(&mut self, category: Category) -> Result<(), ScrubError> {
        debug!("Loading built-in dictionary '{}'...", category);
        self.load_str(category.embedded_source(), category.source_id())
    }

    /// Loads a dictionary source from a JSON file on disk.
    ///
    /// A missing file is reported as [`ScrubError::SourceNotFound`] so that
    /// callers can choose to warn and continue for optional custom sources.
    pub fn load_file<P: AsRef<Path>>(&mut self, path: P) -> Result<(), ScrubError> {
        let path = path.as_ref();
        let source_id = path.display().to_string();
        info!("Loading custom dictionary from: {}", source_id);
        let text = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == io::ErrorKind::NotFound {
                ScrubError::SourceNotFound { source_id: source_id.clone(), source: e }
            } else {
                ScrubError::IoError(e)
            }
        })?;
        self.load_str(&text, &source_id)
    }

    /// Parses a JSON keyword mapping and appends its entries.
    ///
    /// Each value is either a plain replacement string or a record with a
    /// required `replacement` and optional `reason`/`category`. A record
    /// without `replacement` fails deserialization and is reported as
    /// [`ScrubError::MalformedSource`].
    pub fn load_str(&mut self, json: &str, source_id: &str) -> Result<(), ScrubError> {
        let specs: BTreeMap<String, EntrySpec> = serde_json::from_str(json)
            .map_err(|e| ScrubError::MalformedSource { source_id: source_id.to_string(), source: e })?;

        let loaded = specs.len();
        for (keyword, spec) in specs {
            if keyword.is_empty() {
                return Err(ScrubError::EmptyKeyword { source_id: source_id.to_string() });
            }
            let entry = match spec {
                EntrySpec::Plain(replacement) => KeywordEntry {
                    keyword: casefold::fold(&keyword),
                    replacement,
                    reason: None,
                    category: None,
                },
                EntrySpec::Detailed { replacement, reason, category } => KeywordEntry {
                    keyword: casefold::fold(&keyword),
                    replacement,
                    reason,
                    category,
                },
            };
            self.insert(entry);
        }

        info!("Loaded {} entries from '{}' ({} total).", loaded, source_id, self.entries.len());
        Ok(())
    }

    /// Inserts one entry, overriding any earlier entry with the same folded
    /// keyword in place.
    fn insert(&mut self, entry: KeywordEntry) {
        match self.index.get(&entry.keyword) {
            Some(&idx) => {
                debug!("Keyword '{}' overridden by a later source.", entry.keyword);
                self.entries[idx] = entry;
            }
            None => {
                self.index.insert(entry.keyword.clone(), self.entries.len());
                self.entries.push(entry);
            }
        }
    }

    /// Looks up an entry by keyword text (folded before lookup).
    pub fn get(&self, keyword: &str) -> Option<&KeywordEntry> {
        self.index.get(&casefold::fold(keyword)).map(|&idx| &self.entries[idx])
    }

    pub fn entries(&self) -> &[KeywordEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
