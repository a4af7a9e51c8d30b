//! Longest-match substitution.
//!
//! The sweep allocates one slot per input code point and walks the rules of a
//! [`CharacterMap`] in order. Every non-overlapping occurrence of a rule's
//! source whose slots are all still unset is claimed: the target goes into the
//! first slot and the remaining slots become `Consumed`, so no later (shorter)
//! rule can claim any part of the span.
//!
//! ```text
//! input:  a  ̓  ́  n  q  r  w  p  o  s
//! rule q: .  .  .  .  θ  .  .  .  .  .
//! rule a: α  .  .  .  θ  .  .  .  .  .
//! ...
//! slots:  α  ̓  ́  ν  θ  ρ  ω  π  ο  σ   -> NFC -> ἄνθρωποσ
//! ```
//!
//! Slots that no rule claims keep their input code point, which is how digits,
//! foreign punctuation and text already in the target script survive.

use unicode_normalization::UnicodeNormalization;

use super::charmap::CharacterMap;
use super::normalize;
use crate::Representation;
use crate::letters::marks;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slot<'m> {
    Unset,
    Consumed,
    Claimed(&'m str),
}

impl CharacterMap {
    /// Convert `text` with this map: prepare, sweep, recompose, and apply the
    /// gamma-nasal rule for Greek and transliteration output.
    ///
    /// This is the bare substitution step. Breathing reconstruction and the
    /// other orthographic passes are run by [`Converter`](crate::Converter).
    pub fn apply(&self, text: &str) -> String {
        let prepared = prepare(text, self);
        let swept = sweep(&prepared, self);
        assimilate(&swept, self.to())
    }
}

/// NFD-decompose `text` and apply the input-side fixups for `map.from()`.
pub(crate) fn prepare(text: &str, map: &CharacterMap) -> Vec<char> {
    let decomposed: Vec<char> = text.nfd().collect();
    match map.from() {
        Representation::Transliteration => attach_long_vowels(&decomposed, map.long_vowels()),
        Representation::Greek => decomposed.into_iter().map(coerce_greek).collect(),
        Representation::BetaCode => decomposed,
    }
}

/// Run the slot sweep over prepared input and NFC-recompose the result.
pub(crate) fn sweep(input: &[char], map: &CharacterMap) -> String {
    let mut slots = vec![Slot::Unset; input.len()];
    let mut unset = input.len();

    for rule in map.rules() {
        if unset == 0 {
            break;
        }
        let needle = rule.source_chars();
        for start in occurrences(input, needle) {
            let span = start..start + needle.len();
            if slots[span.clone()].iter().all(|s| *s == Slot::Unset) {
                slots[start] = Slot::Claimed(rule.target.as_str());
                for slot in &mut slots[span.start + 1..span.end] {
                    *slot = Slot::Consumed;
                }
                unset -= needle.len();
            }
        }
    }

    let mut out = String::with_capacity(input.len() * 2);
    for (slot, original) in slots.iter().zip(input) {
        match slot {
            Slot::Unset => out.push(*original),
            Slot::Claimed(target) => out.push_str(target),
            Slot::Consumed => {}
        }
    }
    out.nfc().collect()
}

/// Gamma-nasal assimilation where the output script has one.
pub(crate) fn assimilate(text: &str, to: Representation) -> String {
    match to {
        Representation::Greek | Representation::Transliteration => normalize::gamma_nasal(text, to),
        Representation::BetaCode => text.to_string(),
    }
}

/// Start positions of the non-overlapping occurrences of `needle`, scanning
/// left to right.
fn occurrences<'a>(haystack: &'a [char], needle: &'a [char]) -> impl Iterator<Item = usize> + 'a {
    let mut pos = 0;
    std::iter::from_fn(move || {
        if needle.is_empty() {
            return None;
        }
        while pos + needle.len() <= haystack.len() {
            if haystack[pos..pos + needle.len()] == *needle {
                let found = pos;
                pos += needle.len();
                return Some(found);
            }
            pos += 1;
        }
        None
    })
}

/// Canonically distinct look-alikes that Greek input commonly carries.
fn coerce_greek(c: char) -> char {
    match c {
        marks::LATIN_TILDE => marks::PERISPOMENI,
        '\u{B7}' => '\u{387}',
        ';' => '\u{37E}',
        other => other,
    }
}

/// Recompose each long-vowel letter with its mark so that it matches its
/// table entry as one unit, whatever position the mark had in its run.
///
/// ```text
/// e ́ ̄ o   ->   ē ́ o
/// ```
fn attach_long_vowels(input: &[char], long_vowels: &[(char, char, char)]) -> Vec<char> {
    let mut out = Vec::with_capacity(input.len());
    let mut i = 0;
    while i < input.len() {
        let base = input[i];
        let run_end = (i + 1..input.len()).find(|&j| !marks::is_combining(input[j])).unwrap_or(input.len());
        let run = &input[i + 1..run_end];

        let unit = long_vowels
            .iter()
            .filter(|(b, _, _)| *b == base)
            .find_map(|(_, mark, composed)| run.iter().position(|m| m == mark).map(|at| (at, *composed)));

        match unit {
            Some((at, composed)) => {
                out.push(composed);
                out.extend(run.iter().enumerate().filter(|(k, _)| *k != at).map(|(_, m)| *m));
            }
            None => {
                out.push(base);
                out.extend_from_slice(run);
            }
        }
        i = run_end;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Options;

    fn map(from: Representation, to: Representation) -> CharacterMap {
        CharacterMap::new(from, to, &Options::default())
    }

    #[test]
    fn beta_code_to_greek() {
        let m = map(Representation::BetaCode, Representation::Greek);
        assert_eq!(m.apply("a)/nqrwpos"), "ἄνθρωποσ");
        assert_eq!(m.apply("a)/|"), "ᾄ");
    }

    #[test]
    fn unmapped_characters_pass_through() {
        let m = map(Representation::BetaCode, Representation::Greek);
        assert_eq!(m.apply("logos 123 !"), "λογοσ 123 !");
    }

    #[test]
    fn digraphs_claim_before_single_letters() {
        let m = map(Representation::Transliteration, Representation::Greek);
        assert_eq!(m.apply("thesphps"), "θεσφψ");
        assert_eq!(m.apply("THeos"), "Θεοσ");
    }

    #[test]
    fn occurrences_do_not_overlap() {
        let hay: Vec<char> = "sss".chars().collect();
        let needle: Vec<char> = "ss".chars().collect();
        assert_eq!(occurrences(&hay, &needle).collect::<Vec<_>>(), vec![0]);
        assert_eq!(occurrences(&hay, &[]).count(), 0);
    }

    #[test]
    fn consumed_slots_block_shorter_rules() {
        // `ps` claims both slots; neither `p` nor `s` may re-claim the tail.
        let m = map(Representation::Transliteration, Representation::BetaCode);
        assert_eq!(m.apply("ps"), "y");
        assert_eq!(m.apply("kh"), "kh");
    }

    #[test]
    fn long_vowel_mark_is_reattached() {
        let m = map(Representation::Transliteration, Representation::Greek);
        // Acute typed before the macron still yields eta.
        assert_eq!(m.apply("e\u{301}\u{304}"), "\u{3AE}");
        assert_eq!(m.apply("ō"), "ω");
        // A macron on alpha is a free diacritic, not a letter.
        assert_eq!(m.apply("a\u{304}"), "\u{1FB1}");
    }

    #[test]
    fn greek_lookalikes_are_coerced() {
        let m = map(Representation::Greek, Representation::BetaCode);
        assert_eq!(m.apply("τί;"), "ti/;");
        assert_eq!(m.apply("ὦ"), "w)=");
        assert_eq!(m.apply("ω\u{313}\u{303}"), "w)=");
        assert_eq!(m.apply("α\u{B7}"), "a:");
    }

    #[test]
    fn gamma_nasal_runs_for_greek_and_transliteration() {
        assert_eq!(map(Representation::Greek, Representation::Greek).apply("ανγελος"), "αγγελος");
        assert_eq!(map(Representation::Greek, Representation::Transliteration).apply("αγγελος"), "angelos");
        assert_eq!(map(Representation::Greek, Representation::BetaCode).apply("αγγελος"), "aggelos");
    }

    #[test]
    fn sweep_is_deterministic() {
        let m = map(Representation::Greek, Representation::Transliteration);
        let input = "Ἐν ἀρχῇ ἦν ὁ λόγος";
        assert_eq!(m.apply(input), m.apply(input));
    }
}
