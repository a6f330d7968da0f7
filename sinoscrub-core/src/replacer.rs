//! replacer.rs - Splices replacement text into the original buffer.
//!
//! License: MIT OR Apache-2.0

use crate::change::{Change, KeywordMatch};

/// Applies an ordered match sequence to `text`, producing the scrubbed text
/// and, when requested, one [`Change`] per match.
///
/// Matches must be ascending, non-overlapping and within bounds, exactly as
/// produced by a scan. Unmatched spans are copied verbatim; each matched
/// span is replaced with its entry's replacement text. Change records carry
/// original-text offsets, not positions in the rewritten text. The rewritten
/// text is byte-identical whether or not changes are tracked; the fast path
/// merely skips the accumulation.
pub fn apply<'a, I>(text: &str, matches: I, track_changes: bool) -> (String, Option<Vec<Change>>)
where
    I: IntoIterator<Item = KeywordMatch<'a>>,
{
    // Byte offset of each char, with a sentinel so `end` can point one past
    // the last char.
    let offsets: Vec<usize> = text
        .char_indices()
        .map(|(byte, _)| byte)
        .chain(std::iter::once(text.len()))
        .collect();

    let mut scrubbed = String::with_capacity(text.len());
    let mut changes = if track_changes { Some(Vec::new()) } else { None };
    let mut copied = 0usize;

    for m in matches {
        scrubbed.push_str(&text[offsets[copied]..offsets[m.start]]);
        scrubbed.push_str(&m.entry.replacement);
        if let Some(changes) = changes.as_mut() {
            changes.push(Change::from(&m));
        }
        copied = m.end;
    }
    scrubbed.push_str(&text[offsets[copied]..]);

    (scrubbed, changes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::KeywordEntry;

    fn entry(keyword: &str, replacement: &str) -> KeywordEntry {
        KeywordEntry {
            keyword: keyword.to_string(),
            replacement: replacement.to_string(),
            reason: None,
            category: None,
        }
    }

    #[test]
    fn test_empty_match_sequence_is_identity() {
        let (scrubbed, changes) = apply("系统正在处死进程", std::iter::empty(), true);
        assert_eq!(scrubbed, "系统正在处死进程");
        assert_eq!(changes, Some(vec![]));
    }

    #[test]
    fn test_replacement_preserves_surrounding_text() {
        let e = entry("处死", "终止");
        let text = "系统正在处死进程";
        let m = KeywordMatch { keyword: &e.keyword, entry: &e, start: 4, end: 6 };
        let (scrubbed, changes) = apply(text, [m], true);
        assert_eq!(scrubbed, "系统正在终止进程");
        let changes = changes.unwrap();
        assert_eq!(changes.len(), 1);
        assert_eq!((changes[0].start, changes[0].end), (4, 6));
    }

    #[test]
    fn test_empty_replacement_deletes_the_span() {
        let e = entry("秘密", "");
        let text = "这是秘密文件";
        let m = KeywordMatch { keyword: &e.keyword, entry: &e, start: 2, end: 4 };
        let (scrubbed, _) = apply(text, [m], false);
        assert_eq!(scrubbed, "这是文件");
    }

    #[test]
    fn test_untracked_path_skips_changes() {
        let e = entry("ab", "x");
        let m = KeywordMatch { keyword: &e.keyword, entry: &e, start: 0, end: 2 };
        let (scrubbed, changes) = apply("ab", [m], false);
        assert_eq!(scrubbed, "x");
        assert!(changes.is_none());
    }
}
