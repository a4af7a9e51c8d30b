//! Breathing reconstruction.
//!
//! Greek and Beta Code write breathings as diacritics; transliteration writes
//! a rough breathing as a leading `h` (or an `h` after rho) and a smooth
//! breathing not at all. Two direction-specific passes bridge the gap:
//!
//! - [`spell_out`] runs on decomposed Greek *before* substitution into
//!   transliteration. It drops smooth breathings and turns rough ones into a
//!   written `h`.
//! - [`flag`] and [`resolve`] run around the substitution *from*
//!   transliteration. `flag` replaces every `h` that stands for a breathing
//!   with a noncharacter sentinel; after the sweep, `resolve` turns each sentinel
//!   into a rough breathing on the right letter, or discards it.
//!
//! ```text
//! "Hoi"  --flag-->  "⁂⁂oi"  --sweep-->  "⁂⁂οι"  --resolve-->  "Οἱ"
//! "rhēma" -flag-->  "r⁂ēma" --sweep-->  "ρ⁂ημα" --resolve-->  "ῥημα"
//! ```
//!
//! Only word-initial vowel clusters (one or two vowels after whitespace,
//! punctuation or the start of the text) and rhos are ever touched.

use unicode_normalization::UnicodeNormalization;

use super::normalize::{compose, is_word_char};
use crate::letters::marks;

/// Marker standing for a breathing `h` between the two passes. A Unicode
/// noncharacter, so unlike private-use code points it never occurs in
/// interchanged text.
pub(crate) const SENTINEL: char = '\u{FDD0}';

const DIPHTHONGS: [(char, char); 8] =
    [('α', 'ι'), ('α', 'υ'), ('ε', 'ι'), ('ε', 'υ'), ('η', 'υ'), ('ο', 'ι'), ('ο', 'υ'), ('υ', 'ι')];

fn is_greek_vowel(c: char) -> bool {
    matches!(c, 'α' | 'ε' | 'η' | 'ι' | 'ο' | 'υ' | 'ω' | 'Α' | 'Ε' | 'Η' | 'Ι' | 'Ο' | 'Υ' | 'Ω')
}

fn is_rho(c: char) -> bool {
    matches!(c, 'ρ' | 'Ρ')
}

fn is_breathing(c: char) -> bool {
    c == marks::ROUGH || c == marks::SMOOTH
}

fn lower(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

fn upper(c: char) -> char {
    c.to_uppercase().next().unwrap_or(c)
}

fn at_word_start(chars: &[char], i: usize) -> bool {
    i == 0 || !(is_word_char(chars[i - 1]) || chars[i - 1] == SENTINEL)
}

/// End of the combining-mark run that starts at `i`.
fn marks_end(chars: &[char], i: usize) -> usize {
    (i..chars.len()).find(|&j| !marks::is_combining(chars[j])).unwrap_or(chars.len())
}

/// The base letter before position `i`, skipping combining marks.
fn base_before(chars: &[char], i: usize) -> Option<usize> {
    (0..i).rev().find(|&j| !marks::is_combining(chars[j]))
}

/// A word-initial run of one or two vowels with their marks.
///
/// ```text
///  o  ̔  i  ́  k
///  ^first   ^end
///        ^second
/// ```
#[derive(Debug, Clone, Copy)]
struct Cluster {
    first: usize,
    second: Option<usize>,
    end: usize,
}

impl Cluster {
    fn at(chars: &[char], first: usize) -> Option<Cluster> {
        if first >= chars.len() || !is_greek_vowel(chars[first]) {
            return None;
        }
        let first_end = marks_end(chars, first + 1);
        if first_end < chars.len() && is_greek_vowel(chars[first_end]) {
            let end = marks_end(chars, first_end + 1);
            Some(Cluster { first, second: Some(first_end), end })
        } else {
            Some(Cluster { first, second: None, end: first_end })
        }
    }

    fn marks<'a>(&self, chars: &'a [char]) -> &'a [char] {
        &chars[self.first..self.end]
    }

    /// Where a breathing belongs: on the second vowel of a diphthong whose
    /// second vowel has no diaeresis, otherwise on the first vowel.
    fn breathing_target(&self, chars: &[char]) -> usize {
        let Some(second) = self.second else {
            return self.first;
        };
        let pair = (lower(chars[self.first]), lower(chars[second]));
        let diaeresis = chars[second + 1..self.end].contains(&marks::DIAERESIS);
        if DIPHTHONGS.contains(&pair) && !diaeresis { second } else { self.first }
    }
}

// --- Greek -> transliteration ------------------------------------------------

/// Spell breathings out the way transliteration writes them.
///
/// Input and output are NFD Greek. Smooth breathings vanish; a rough
/// breathing on a word-initial cluster becomes an `h` (or `H`) in front of it;
/// a rough breathing on a single rho becomes an `h` after it. Breathings in
/// any other position are dropped.
pub(crate) fn spell_out(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len() + 8);
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];

        if at_word_start(&chars, i) {
            if let Some(cluster) = Cluster::at(&chars, i) {
                let rough = cluster.marks(&chars).contains(&marks::ROUGH);
                let capital = chars[cluster.first].is_uppercase();
                if rough {
                    out.push(if capital { 'H' } else { 'h' });
                }
                // "Ὁ" -> "Ho" but "ὉΔΟΣ" -> "HODOS".
                let next_upper = match cluster.second {
                    Some(second) => chars[second].is_uppercase(),
                    None => chars.get(cluster.end).is_some_and(|n| n.is_uppercase()),
                };
                for (k, &ch) in chars[cluster.first..cluster.end].iter().enumerate() {
                    if is_breathing(ch) {
                        continue;
                    }
                    if k == 0 && rough && capital && !next_upper {
                        out.push(lower(ch));
                    } else {
                        out.push(ch);
                    }
                }
                i = cluster.end;
                continue;
            }
        }

        if c == marks::ROUGH {
            if let Some(rho) = base_before(&chars, i).filter(|&j| is_rho(chars[j])) {
                let double = base_before(&chars, rho).is_some_and(|j| is_rho(chars[j]));
                if !double {
                    out.push('h');
                }
            }
            i += 1;
            continue;
        }

        if c != marks::SMOOTH {
            out.push(c);
        }
        i += 1;
    }

    out
}

// --- transliteration -> Greek ------------------------------------------------

/// Replace each `h` that stands for a breathing with [`SENTINEL`]: any `h`
/// at a word boundary, and any `h` after one or two `r`. A capital `H`
/// becomes two sentinels so the capital can be restored after the sweep.
pub(crate) fn flag(text: &str) -> String {
    let text = regex!(r"(^|[^\p{L}\p{M}])(h|H)").replace_all(text, |caps: &regex::Captures| {
        let marker = if &caps[2] == "H" { "\u{FDD0}\u{FDD0}" } else { "\u{FDD0}" };
        format!("{}{marker}", &caps[1])
    });
    regex!(r"([rR]{1,2})[hH]").replace_all(&text, "$1\u{FDD0}").into_owned()
}

/// Resolve sentinels left by [`flag`] in (possibly composed) Greek text,
/// and, when `smooth` is set, give every other word-initial vowel cluster a
/// smooth breathing. Returns NFC text with no sentinels left.
///
/// A doubled sentinel capitalises the first vowel of its cluster. With
/// `rough` unset the sentinels are still consumed (and still capitalise) but
/// no mark is written. Clusters that already carry a breathing keep it.
pub(crate) fn resolve(text: &str, rough: bool, smooth: bool) -> String {
    let chars: Vec<char> = text.nfd().collect();
    let mut out = String::with_capacity(text.len() + 8);
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];

        if c == SENTINEL {
            let run_end = (i..chars.len()).find(|&j| chars[j] != SENTINEL).unwrap_or(chars.len());
            let capital = run_end - i >= 2;

            if at_word_start(&chars, i) {
                if let Some(cluster) = Cluster::at(&chars, run_end) {
                    breathe(&chars, cluster, rough.then_some(marks::ROUGH), capital, &mut out);
                    i = cluster.end;
                    continue;
                }
            } else if let Some(rho) = base_before(&chars, i).filter(|&j| is_rho(chars[j])) {
                let double = base_before(&chars, rho).is_some_and(|j| is_rho(chars[j]));
                if rough && !double {
                    out.push(marks::ROUGH);
                }
            }
            i = run_end;
            continue;
        }

        if smooth && at_word_start(&chars, i) {
            if let Some(cluster) = Cluster::at(&chars, i) {
                breathe(&chars, cluster, Some(marks::SMOOTH), false, &mut out);
                i = cluster.end;
                continue;
            }
        }

        out.push(c);
        i += 1;
    }

    compose(&out)
}

/// Copy `cluster` into `out`, placing `mark` directly after the base letter
/// it belongs to (ahead of any accent already there).
fn breathe(chars: &[char], cluster: Cluster, mark: Option<char>, capital: bool, out: &mut String) {
    let existing = cluster.marks(chars).iter().any(|c| is_breathing(*c));
    let target = cluster.breathing_target(chars);

    for (j, &ch) in chars.iter().enumerate().take(cluster.end).skip(cluster.first) {
        if ch == SENTINEL {
            continue;
        }
        out.push(if j == cluster.first && capital { upper(ch) } else { ch });
        if let Some(mark) = mark.filter(|_| j == target && !existing) {
            out.push(mark);
        }
    }
}

/// Whether transliterated input carries accents, i.e. is written
/// polytonically. Only then are smooth breathings restored, and then on
/// every word: unaccented proclitics (`en`, `ou`, `ek`) take a breathing too.
pub(crate) fn is_polytonic(text: &str) -> bool {
    text.nfd().any(|c| matches!(c, marks::ACUTE | marks::GRAVE | marks::LATIN_TILDE | marks::DIAERESIS))
}
