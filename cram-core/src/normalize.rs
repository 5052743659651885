//! Fuzzy normalization of free-form level text ("tuff", "can skip", "panic mode")
//! into the closed `Difficulty` / `Weight` / `Weakness` sets.
//!
//! Resolution order, each stage short-circuiting:
//! 1. empty input -> default
//! 2. canonicalize (trim, lowercase, collapse whitespace, strip edge punctuation)
//! 3. exact synonym match
//! 4. substring match, first key in table order wins
//! 5. keyword roots, "more demanding" reading checked first
//! 6. default
//!
//! Tables are slices, not maps: iteration order is part of the contract.

use regex::Regex;
use std::sync::LazyLock;

use crate::levels::{Difficulty, Weakness, Weight};

static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));

const EDGE_PUNCTUATION: &[char] = &[' ', '.', ',', '!', '?', ':', ';', '-', '/', '\\'];

/// A level enum that can be recovered from free-form text.
pub trait FuzzyLevel: Copy + 'static {
    const DEFAULT: Self;
    const SYNONYMS: &'static [(&'static str, Self)];
    /// Root substrings, checked group by group after the synonym table misses.
    const ROOTS: &'static [(&'static [&'static str], Self)];
}

/// Canonical form used for every lookup.
pub fn canonicalize(value: &str) -> String {
    let lowered = value.trim().to_lowercase();
    let collapsed = WHITESPACE.replace_all(&lowered, " ");
    collapsed.trim_matches(EDGE_PUNCTUATION).to_string()
}

/// Map free text onto `T`. Total: every input yields exactly one member.
pub fn normalize<T: FuzzyLevel>(value: &str) -> T {
    if value.is_empty() {
        return T::DEFAULT;
    }

    let text = canonicalize(value);

    if let Some((_, level)) = T::SYNONYMS.iter().find(|(key, _)| *key == text) {
        return *level;
    }

    if let Some((_, level)) = T::SYNONYMS.iter().find(|(key, _)| text.contains(key)) {
        return *level;
    }

    for (roots, level) in T::ROOTS {
        if roots.iter().any(|root| text.contains(root)) {
            return *level;
        }
    }

    T::DEFAULT
}

pub fn normalize_difficulty(value: &str) -> Difficulty {
    normalize(value)
}

pub fn normalize_weight(value: &str) -> Weight {
    normalize(value)
}

pub fn normalize_weakness(value: &str) -> Weakness {
    normalize(value)
}

impl FuzzyLevel for Difficulty {
    const DEFAULT: Self = Difficulty::Medium;

    const SYNONYMS: &'static [(&'static str, Self)] = &[
        // easy
        ("easy", Difficulty::Easy),
        ("e", Difficulty::Easy),
        ("ez", Difficulty::Easy),
        ("simple", Difficulty::Easy),
        ("basic", Difficulty::Easy),
        ("beginner", Difficulty::Easy),
        ("begginer", Difficulty::Easy),
        ("intro", Difficulty::Easy),
        ("introductory", Difficulty::Easy),
        ("trivial", Difficulty::Easy),
        ("no brainer", Difficulty::Easy),
        ("no-brainer", Difficulty::Easy),
        ("light", Difficulty::Easy),
        ("chill", Difficulty::Easy),
        ("easy peasy", Difficulty::Easy),
        ("easy-peasy", Difficulty::Easy),
        // medium
        ("medium", Difficulty::Medium),
        ("moderate", Difficulty::Medium),
        ("modrate", Difficulty::Medium),
        ("average", Difficulty::Medium),
        ("mid", Difficulty::Medium),
        ("normal", Difficulty::Medium),
        ("ok", Difficulty::Medium),
        ("okay", Difficulty::Medium),
        ("decent", Difficulty::Medium),
        ("manageable", Difficulty::Medium),
        ("intermediate", Difficulty::Medium),
        // hard
        ("hard", Difficulty::Hard),
        ("difficult", Difficulty::Hard),
        ("diffficult", Difficulty::Hard),
        ("dificult", Difficulty::Hard),
        ("tough", Difficulty::Hard),
        ("tuf", Difficulty::Hard),
        ("tuff", Difficulty::Hard),
        ("complex", Difficulty::Hard),
        ("challenging", Difficulty::Hard),
        ("chalenging", Difficulty::Hard),
        ("challange", Difficulty::Hard),
        ("advanced", Difficulty::Hard),
        ("intense", Difficulty::Hard),
        ("brutal", Difficulty::Hard),
        ("nightmare", Difficulty::Hard),
    ];

    const ROOTS: &'static [(&'static [&'static str], Self)] = &[
        (&["hard", "diff", "tough", "complex", "advanc"], Difficulty::Hard),
        (&["easy", "simple", "basic", "intro"], Difficulty::Easy),
    ];
}

impl FuzzyLevel for Weight {
    const DEFAULT: Self = Weight::Medium;

    const SYNONYMS: &'static [(&'static str, Self)] = &[
        // high
        ("high", Weight::High),
        ("important", Weight::High),
        ("major", Weight::High),
        ("critical", Weight::High),
        ("crtical", Weight::High),
        ("vital", Weight::High),
        ("key", Weight::High),
        ("core", Weight::High),
        ("essential", Weight::High),
        ("must do", Weight::High),
        ("must-do", Weight::High),
        ("urgent", Weight::High),
        ("top", Weight::High),
        ("top priority", Weight::High),
        ("high priority", Weight::High),
        ("exam heavy", Weight::High),
        ("exam-heavy", Weight::High),
        // medium
        ("medium", Weight::Medium),
        ("mid", Weight::Medium),
        ("moderate", Weight::Medium),
        ("modrate", Weight::Medium),
        ("average", Weight::Medium),
        ("normal", Weight::Medium),
        ("balanced", Weight::Medium),
        ("standard", Weight::Medium),
        ("okay", Weight::Medium),
        ("ok", Weight::Medium),
        ("decent", Weight::Medium),
        ("medium priority", Weight::Medium),
        // low
        ("low", Weight::Low),
        ("minor", Weight::Low),
        ("less important", Weight::Low),
        ("unimportant", Weight::Low),
        ("not important", Weight::Low),
        ("trivial", Weight::Low),
        ("extra", Weight::Low),
        ("bonus", Weight::Low),
        ("filler", Weight::Low),
        ("side topic", Weight::Low),
        ("side-topic", Weight::Low),
        ("optional", Weight::Low),
        ("can skip", Weight::Low),
        ("can-skip", Weight::Low),
    ];

    const ROOTS: &'static [(&'static [&'static str], Self)] = &[
        (&["high", "important", "vital", "core", "urgent"], Weight::High),
        (&["low", "minor", "optional", "extra", "filler"], Weight::Low),
    ];
}

impl FuzzyLevel for Weakness {
    const DEFAULT: Self = Weakness::Moderate;

    const SYNONYMS: &'static [(&'static str, Self)] = &[
        // weak
        ("weak", Weakness::Weak),
        ("bad", Weakness::Weak),
        ("poor", Weakness::Weak),
        ("confused", Weakness::Weak),
        ("cnofused", Weakness::Weak),
        ("lost", Weakness::Weak),
        ("no idea", Weakness::Weak),
        ("no clue", Weakness::Weak),
        ("clueless", Weakness::Weak),
        ("struggle", Weakness::Weak),
        ("strugle", Weakness::Weak),
        ("struggling", Weakness::Weak),
        ("not confident", Weakness::Weak),
        ("low confidence", Weakness::Weak),
        ("hate this", Weakness::Weak),
        ("scary topic", Weakness::Weak),
        ("panic", Weakness::Weak),
        ("panic mode", Weakness::Weak),
        // moderate
        ("moderate", Weakness::Moderate),
        ("modrate", Weakness::Moderate),
        ("average", Weakness::Moderate),
        ("avg", Weakness::Moderate),
        ("okay", Weakness::Moderate),
        ("ok", Weakness::Moderate),
        ("decent", Weakness::Moderate),
        ("mid", Weakness::Moderate),
        ("manageable", Weakness::Moderate),
        ("50 50", Weakness::Moderate),
        ("50-50", Weakness::Moderate),
        ("mixed", Weakness::Moderate),
        ("getting there", Weakness::Moderate),
        // strong
        ("strong", Weakness::Strong),
        ("good", Weakness::Strong),
        ("confident", Weakness::Strong),
        ("very confident", Weakness::Strong),
        ("solid", Weakness::Strong),
        ("clear", Weakness::Strong),
        ("comfortable", Weakness::Strong),
        ("mastered", Weakness::Strong),
        ("fluent", Weakness::Strong),
        ("easy for me", Weakness::Strong),
    ];

    const ROOTS: &'static [(&'static [&'static str], Self)] = &[
        (&["no idea", "clueless", "strug", "panic", "lost"], Weakness::Weak),
        (&["strong", "confident", "master", "comfortable"], Weakness::Strong),
    ];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonicalize() {
        assert_eq!(canonicalize("  Very   HARD!! "), "very hard");
        assert_eq!(canonicalize("\tcan\n skip..."), "can skip");
        assert_eq!(canonicalize("--/\\"), "");
    }

    #[test]
    fn test_empty_and_blank_fall_back_to_defaults() {
        assert_eq!(normalize_difficulty(""), Difficulty::Medium);
        assert_eq!(normalize_weight(""), Weight::Medium);
        assert_eq!(normalize_weakness(""), Weakness::Moderate);

        assert_eq!(normalize_difficulty("   "), Difficulty::Medium);
        assert_eq!(normalize_weakness("?!"), Weakness::Moderate);
    }

    #[test]
    fn test_own_names_are_idempotent() {
        for d in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
            assert_eq!(normalize_difficulty(d.as_str()), d);
        }
        for w in [Weight::High, Weight::Medium, Weight::Low] {
            assert_eq!(normalize_weight(w.as_str()), w);
        }
        for w in [Weakness::Weak, Weakness::Moderate, Weakness::Strong] {
            assert_eq!(normalize_weakness(w.as_str()), w);
        }
    }

    #[test]
    fn test_exact_synonyms() {
        assert_eq!(normalize_difficulty("Tuff"), Difficulty::Hard);
        assert_eq!(normalize_difficulty("brutal!"), Difficulty::Hard);
        assert_eq!(normalize_difficulty("nightmare"), Difficulty::Hard);
        assert_eq!(normalize_weight("Can Skip"), Weight::Low);
        assert_eq!(normalize_weight("filler"), Weight::Low);
        assert_eq!(normalize_weight("not important"), Weight::Low);
        assert_eq!(normalize_weakness("clueless"), Weakness::Weak);
        assert_eq!(normalize_weakness("PANIC"), Weakness::Weak);
        assert_eq!(normalize_weakness("50-50"), Weakness::Moderate);
    }

    #[test]
    fn test_substring_match_follows_table_order() {
        // "important" (high) precedes "not important" (low) in the table, so a
        // phrase that merely contains it resolves to high.
        assert_eq!(normalize_weight("this is not important at all"), Weight::High);
        // "confused" precedes "confident" in the weakness table.
        assert_eq!(normalize_weakness("confident but confused"), Weakness::Weak);
        // single-letter "e" sits second in the difficulty table.
        assert_eq!(normalize_difficulty("pretty hard"), Difficulty::Easy);
    }

    #[test]
    fn test_keyword_roots() {
        // no synonym key is a substring here, only the "diff" root
        assert_eq!(normalize_difficulty("diffy"), Difficulty::Hard);
        assert_eq!(normalize_weakness("mastry"), Weakness::Moderate);
        assert_eq!(normalize_weakness("strugglin"), Weakness::Weak);
    }

    #[test]
    fn test_demanding_root_checked_first() {
        // both "strug" (weak) and "master" (strong) roots match; word order
        // does not matter, the weak group is consulted first
        assert_eq!(normalize_weakness("master strug"), Weakness::Weak);
        assert_eq!(normalize_weakness("strug master"), Weakness::Weak);
    }

    #[test]
    fn test_gibberish_is_default() {
        assert_eq!(normalize_difficulty("xyzzy"), Difficulty::Medium);
        assert_eq!(normalize_weight("qwrty"), Weight::Medium);
        assert_eq!(normalize_weakness("zzz"), Weakness::Moderate);
    }

    #[test]
    fn test_deterministic() {
        for input in ["tuf stuff", "mixed bag", "", "kinda optional"] {
            assert_eq!(normalize_weight(input), normalize_weight(input));
            assert_eq!(normalize_difficulty(input), normalize_difficulty(input));
        }
    }
}
