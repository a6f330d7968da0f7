//! matcher.rs - Single-pass scanning of a text buffer against the compiled
//! automaton.
//!
//! A scan walks the text once, following trie transitions and fallback
//! links, and yields an ordered, non-overlapping sequence of matches under a
//! longest-match-wins policy with word-boundary constraints. Zero matches is
//! a valid outcome, and scanning never fails.
//!
//! License: MIT OR Apache-2.0

use std::collections::HashSet;

use crate::automaton::{Automaton, ROOT};
use crate::casefold;
use crate::change::KeywordMatch;
use crate::dictionary::KeywordEntry;

/// The set of characters considered part of a word for boundary checking.
///
/// A match is accepted only if the characters immediately before and after
/// it (when they exist) fall outside this class. Characters outside the
/// class, which under the default includes every non-ASCII script character,
/// act as implicit boundaries: a keyword embedded in a run of CJK text
/// matches freely, while a keyword that is a strict substring of a longer
/// ASCII word does not. The check runs over the case-folded text, so a
/// custom class should list lowercase characters.
#[derive(Debug, Clone, Default)]
pub enum WordCharClass {
    /// ASCII letters, digits and underscore.
    #[default]
    AsciiIdentifier,
    /// An explicit character set, for scripts with different boundary needs.
    Custom(HashSet<char>),
}

impl WordCharClass {
    pub fn contains(&self, c: char) -> bool {
        match self {
            WordCharClass::AsciiIdentifier => c.is_ascii_alphanumeric() || c == '_',
            WordCharClass::Custom(set) => set.contains(&c),
        }
    }
}

/// Lazy match sequence over one text buffer.
///
/// Produced by [`Scrubber::find_matches`](crate::Scrubber::find_matches);
/// finite, non-restartable, consumed in one pass. Each scan owns its cursor
/// state, so any number of scans may run concurrently over one shared
/// engine.
pub struct Matches<'s> {
    automaton: &'s Automaton,
    entries: &'s [KeywordEntry],
    word_chars: &'s WordCharClass,
    /// The case-folded text; one char per original char.
    chars: Vec<char>,
    pos: usize,
    node: usize,
    /// Candidate match held back until no longer keyword can still cover its
    /// start: `(start, end, entry index)`.
    pending: Option<(usize, usize, usize)>,
}

impl<'s> Matches<'s> {
    pub(crate) fn new(
        automaton: &'s Automaton,
        entries: &'s [KeywordEntry],
        word_chars: &'s WordCharClass,
        text: &str,
    ) -> Self {
        Matches {
            automaton,
            entries,
            word_chars,
            chars: text.chars().map(casefold::fold_char).collect(),
            pos: 0,
            node: ROOT,
            pending: None,
        }
    }

    fn boundary_ok(&self, start: usize, end: usize) -> bool {
        let before_ok = start == 0 || !self.word_chars.contains(self.chars[start - 1]);
        let after_ok = end == self.chars.len() || !self.word_chars.contains(self.chars[end]);
        before_ok && after_ok
    }

    /// Accepts the pending candidate and resumes scanning at its end, from
    /// the root. The chars between the match end and the current position
    /// are rescanned; matches never overlap, so each position is visited at
    /// most twice over a whole scan.
    fn accept_pending(&mut self) -> Option<KeywordMatch<'s>> {
        let (start, end, entry_idx) = self.pending.take()?;
        self.pos = end;
        self.node = ROOT;
        let entry = &self.entries[entry_idx];
        Some(KeywordMatch { keyword: &entry.keyword, entry, start, end })
    }
}

impl<'s> Iterator for Matches<'s> {
    type Item = KeywordMatch<'s>;

    fn next(&mut self) -> Option<Self::Item> {
        while self.pos < self.chars.len() {
            self.node = self.automaton.step(self.node, self.chars[self.pos]);

            // The live prefix covers chars [pos + 1 - depth, pos + 1). Once
            // it starts past the pending match, nothing longer can replace
            // the candidate: accept it and re-enter at its end.
            if let Some((start, _, _)) = self.pending {
                if self.pos + 1 - self.automaton.depth(self.node) > start {
                    return self.accept_pending();
                }
            }

            if let Some((entry_idx, len)) = self.automaton.longest_terminal(self.node) {
                let end = self.pos + 1;
                let start = end - len;
                if self.boundary_ok(start, end) {
                    match self.pending {
                        // A candidate starting at or before the held one is
                        // necessarily longer: it supersedes it. Later-starting
                        // candidates are dropped; if legitimate, the rescan
                        // after acceptance rediscovers them.
                        None => self.pending = Some((start, end, entry_idx)),
                        Some((held_start, _, _)) if start <= held_start => {
                            self.pending = Some((start, end, entry_idx));
                        }
                        Some(_) => {}
                    }
                }
            }

            self.pos += 1;
        }

        self.accept_pending()
    }
}
