//! change.rs - Record types describing matched keywords and applied
//! replacements.
//!
//! License: MIT OR Apache-2.0

use serde::{Deserialize, Serialize};

use crate::dictionary::KeywordEntry;

/// One accepted occurrence of a keyword in a scanned text.
///
/// Spans are half-open `[start, end)` char ranges into the original text.
/// Matches produced by a scan are non-overlapping and ordered by ascending
/// `start`. The borrowed entry ties a match to the engine that produced it;
/// matches are transient and consumed within a single scrub call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeywordMatch<'a> {
    /// The case-folded keyword text that matched.
    pub keyword: &'a str,
    /// The dictionary entry behind the match.
    pub entry: &'a KeywordEntry,
    pub start: usize,
    pub end: usize,
}

/// A single replacement event, reported with original-text offsets.
///
/// Offsets describe positions in the original text, not the rewritten one,
/// even though spans shift during replacement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Change {
    pub keyword: String,
    pub replacement: String,
    #[serde(default)]
    pub reason: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    pub start: usize,
    pub end: usize,
}

impl From<&KeywordMatch<'_>> for Change {
    fn from(m: &KeywordMatch<'_>) -> Self {
        Change {
            keyword: m.entry.keyword.clone(),
            replacement: m.entry.replacement.clone(),
            reason: m.entry.reason.clone(),
            category: m.entry.category.clone(),
            start: m.start,
            end: m.end,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_change_copies_entry_metadata() {
        let entry = KeywordEntry {
            keyword: "处死".to_string(),
            replacement: "终止".to_string(),
            reason: Some("avoid lethal phrasing".to_string()),
            category: Some("translation".to_string()),
        };
        let m = KeywordMatch { keyword: &entry.keyword, entry: &entry, start: 4, end: 6 };
        let change = Change::from(&m);
        assert_eq!(change.keyword, "处死");
        assert_eq!(change.replacement, "终止");
        assert_eq!(change.category.as_deref(), Some("translation"));
        assert_eq!((change.start, change.end), (4, 6));
    }

    #[test]
    fn test_change_round_trips_through_json() {
        let change = Change {
            keyword: "升天".to_string(),
            replacement: "幸福".to_string(),
            reason: None,
            category: Some("cultural".to_string()),
            start: 0,
            end: 2,
        };
        let json = serde_json::to_string(&change).unwrap();
        let back: Change = serde_json::from_str(&json).unwrap();
        assert_eq!(back, change);
    }
}
