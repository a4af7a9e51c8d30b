//! Rule compilation.
//!
//! A `CharacterMap` is the static side of a conversion: the ordered list of
//! `(source, target)` rules derived from the letter table for one direction
//! and one set of options.
//!
//! ## Ordering invariants
//!
//! - Letter rules come before diacritic rules.
//! - Letter rules are stably sorted by decreasing length of the NFD-decomposed
//!   source, counted in code points. `th` is therefore tried before `t`, and
//!   `ē` (two code points once decomposed) before `e`.
//! - Ties keep declaration order, so σ claims `s` before ς does.
//!
//! The sweep in `substitute.rs` relies on this order and never re-sorts.

use unicode_normalization::UnicodeNormalization;

use crate::letters::{Graphemes, LetterTable};
use crate::{Options, Representation};

/// Whether a rule came from the letter table or the diacritic table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleKind {
    Letter,
    Diacritic,
}

/// One `source -> target` substitution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapRule {
    pub source: String,
    pub target: String,
    pub kind: RuleKind,
    chars: Box<[char]>,
}

impl MapRule {
    fn new(source: &str, target: &str, kind: RuleKind) -> Self {
        MapRule {
            source: source.to_string(),
            target: target.to_string(),
            kind,
            chars: source.chars().collect(),
        }
    }

    /// Source as code points, the unit the sweep matches on.
    pub(crate) fn source_chars(&self) -> &[char] {
        &self.chars
    }

    fn decomposed_len(&self) -> usize {
        self.source.nfd().count()
    }
}

/// Ordered substitution rules for one `(from, to, options)` triple.
///
/// A map owns all of its data and is never mutated after construction, so a
/// single instance can be shared between threads and reused for any number of
/// inputs converted with the same options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterMap {
    from: Representation,
    to: Representation,
    rules: Vec<MapRule>,
    letter_rules: usize,
    /// `(base, mark, composed)` units re-attached in transliteration input.
    long_vowels: Vec<(char, char, char)>,
}

impl CharacterMap {
    /// Build the map converting `from` into `to` under `options`.
    pub fn new(from: Representation, to: Representation, options: &Options) -> Self {
        let table = LetterTable::new(options);

        let mut rules: Vec<MapRule> = table
            .letters()
            .iter()
            .filter_map(|entry| Some(MapRule::new(entry.field(from)?, entry.field(to)?, RuleKind::Letter)))
            .collect();
        // `sort_by_key` is stable: equal lengths keep declaration order.
        rules.sort_by_key(|rule| std::cmp::Reverse(rule.decomposed_len()));
        let letter_rules = rules.len();

        if !options.remove_diacritics {
            rules.extend(table.diacritics().iter().filter_map(|entry| {
                Some(MapRule::new(entry.field(from)?, entry.field(to)?, RuleKind::Diacritic))
            }));
        }

        let long_vowels =
            if from == Representation::Transliteration { table.long_vowels() } else { Vec::new() };

        tracing::debug!(
            %from,
            %to,
            letters = letter_rules,
            diacritics = rules.len() - letter_rules,
            "built character map"
        );

        CharacterMap { from, to, rules, letter_rules, long_vowels }
    }

    pub fn from(&self) -> Representation {
        self.from
    }

    pub fn to(&self) -> Representation {
        self.to
    }

    /// All rules, letters first, in matching order.
    pub fn rules(&self) -> &[MapRule] {
        &self.rules
    }

    /// Number of letter rules (the diacritic rules follow them).
    pub fn letter_rule_count(&self) -> usize {
        self.letter_rules
    }

    pub fn diacritic_rule_count(&self) -> usize {
        self.rules.len() - self.letter_rules
    }

    /// Iterate the rules as `(source, target)` string pairs.
    pub fn pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.rules.iter().map(|r| (r.source.as_str(), r.target.as_str()))
    }

    pub(crate) fn long_vowels(&self) -> &[(char, char, char)] {
        &self.long_vowels
    }
}
