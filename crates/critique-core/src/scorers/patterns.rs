//! Shared detection patterns and text helpers for the scorers.
//!
//! The tone markers live here as a declarative `{name, pattern, points}`
//! table: adding a marker is a data change, not a control-flow change, and
//! each row is independently testable.

use std::collections::HashSet;

use lazy_static::lazy_static;
use regex::Regex;

/// One stylistic marker: a pattern worth a fixed number of points.
///
/// Points are awarded once per narration no matter how often the
/// pattern matches.
pub struct ToneMarker {
    pub name: &'static str,
    pub pattern: Regex,
    pub points: u8,
}

lazy_static! {
    /// The stylistic marker table for tone scoring.
    ///
    /// Seven vocabulary checks (case-insensitive, word-boundary) plus one
    /// structural check for a coherent multi-sentence shape. Raw sum is
    /// 110, so the tone score is capped at 100 by the scorer.
    pub static ref TONE_MARKERS: Vec<ToneMarker> = vec![
        ToneMarker {
            name: "informal address",
            pattern: Regex::new(r"(?i)\b(morty|jeez|geez)\b").unwrap(),
            points: 15,
        },
        ToneMarker {
            name: "vocal tic",
            pattern: Regex::new(r"(?i)\b(burp|belch)\b").unwrap(),
            points: 10,
        },
        ToneMarker {
            name: "sci-fi jargon",
            pattern: Regex::new(r"(?i)\b(dimension|multiverse|universe|reality|portal)\b")
                .unwrap(),
            points: 15,
        },
        ToneMarker {
            name: "cynicism",
            pattern: Regex::new(r"(?i)\b(stupid|dumb|idiot|moron|pathetic)\b").unwrap(),
            points: 10,
        },
        ToneMarker {
            name: "scientific register",
            pattern: Regex::new(
                r"(?i)\b(science|quantum|molecular|cosmic|inter-dimensional)\b",
            )
            .unwrap(),
            points: 15,
        },
        ToneMarker {
            name: "nihilism",
            pattern: Regex::new(
                r"(?i)\b(nobody cares|doesn't matter|pointless|meaningless|who cares)\b",
            )
            .unwrap(),
            points: 15,
        },
        ToneMarker {
            name: "family vocabulary",
            pattern: Regex::new(r"(?i)\b(grandpa|grandson|family)\b").unwrap(),
            points: 10,
        },
        ToneMarker {
            name: "multi-sentence structure",
            // Two sentence boundaries each followed by a capitalized word.
            pattern: Regex::new(r"[.!?]\s+[A-Z].*[.!?]\s+[A-Z]").unwrap(),
            points: 10,
        },
    ];

    /// Explicit humor markers used by the creativity fallback estimate.
    pub static ref HUMOR_PATTERN: Regex =
        Regex::new(r"(?i)\b(haha|lol|funny|hilarious)\b").unwrap();
}

/// Count whitespace-delimited words.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Count non-blank sentences delimited by `.`, `!`, or `?`.
pub fn sentence_count(text: &str) -> usize {
    text.split(['.', '!', '?'])
        .filter(|s| !s.trim().is_empty())
        .count()
}

/// Count distinct lower-cased words, split on non-alphanumeric boundaries.
pub fn distinct_word_count(text: &str) -> usize {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .collect::<HashSet<_>>()
        .len()
}

/// Check if the text contains an explicit humor marker.
pub fn contains_humor_marker(text: &str) -> bool {
    HUMOR_PATTERN.is_match(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn marker(name: &str) -> &'static ToneMarker {
        TONE_MARKERS
            .iter()
            .find(|m| m.name == name)
            .unwrap_or_else(|| panic!("no marker named {name}"))
    }

    #[test]
    fn test_marker_table_shape() {
        assert_eq!(TONE_MARKERS.len(), 8);
        let raw_sum: u16 = TONE_MARKERS.iter().map(|m| u16::from(m.points)).sum();
        assert_eq!(raw_sum, 110);
    }

    #[test]
    fn test_informal_address_is_word_bounded() {
        let m = marker("informal address");
        assert!(m.pattern.is_match("Listen up, MORTY!"));
        assert!(m.pattern.is_match("jeez, what a mess"));
        assert!(!m.pattern.is_match("mortyfied")); // substring, not a word
    }

    #[test]
    fn test_nihilism_matches_phrases() {
        let m = marker("nihilism");
        assert!(m.pattern.is_match("Nobody cares about your portal gun."));
        assert!(m.pattern.is_match("it doesn't matter anyway"));
        assert!(!m.pattern.is_match("everybody cares a lot"));
    }

    #[test]
    fn test_scientific_register_hyphenated() {
        let m = marker("scientific register");
        assert!(m.pattern.is_match("an inter-dimensional cable box"));
        assert!(m.pattern.is_match("pure SCIENCE"));
    }

    #[test]
    fn test_multi_sentence_structure() {
        let m = marker("multi-sentence structure");
        assert!(m.pattern.is_match("First thing. Second thing. Third thing."));
        assert!(!m.pattern.is_match("One sentence only"));
        // One boundary is not enough.
        assert!(!m.pattern.is_match("First thing. Second thing"));
    }

    #[test]
    fn test_word_count() {
        assert_eq!(word_count("one two three"), 3);
        assert_eq!(word_count("  spaced   out  "), 2);
        assert_eq!(word_count(""), 0);
    }

    #[test]
    fn test_sentence_count() {
        assert_eq!(sentence_count("One. Two! Three?"), 3);
        assert_eq!(sentence_count("Trailing dots..."), 1);
        assert_eq!(sentence_count("no terminator"), 1);
        assert_eq!(sentence_count(""), 0);
    }

    #[test]
    fn test_distinct_word_count_case_insensitive() {
        assert_eq!(distinct_word_count("The the THE"), 1);
        assert_eq!(distinct_word_count("it's"), 2); // "it" and "s"
        assert_eq!(distinct_word_count(""), 0);
    }

    #[test]
    fn test_humor_marker() {
        assert!(contains_humor_marker("that was hilarious"));
        assert!(contains_humor_marker("LOL"));
        assert!(!contains_humor_marker("a serious report"));
    }
}
