//! Orthographic normalization.
//!
//! Context rules applied to substitution output, per target script:
//!
//! ```text
//! Greek            gamma nasal -> pi+sigma -> sigma finality -> beta variant
//! Transliteration  gamma nasal
//! Beta Code        iota-subscript ordering
//! ```
//!
//! Each pass is idempotent, and so is their composition.

use unicode_normalization::UnicodeNormalization;

use crate::letters::marks;
use crate::{Options, Representation};

/// Run every normalization pass for `to` over `text`.
pub fn normalize_orthography(text: &str, to: Representation, options: &Options) -> String {
    orthography(&gamma_nasal(text, to), to, options)
}

/// The post-substitution passes other than gamma nasal, which the sweep
/// already applies.
pub(crate) fn orthography(text: &str, to: Representation, options: &Options) -> String {
    match to {
        Representation::Greek => {
            let text = pi_sigma(text);
            let text = sigma_finality(&text);
            if options.disable_beta_variant { text } else { beta_variant(&text) }
        }
        Representation::Transliteration => text.to_string(),
        Representation::BetaCode => reorder_beta_code_diacritics(text),
    }
}

/// Velar-nasal spelling: Greek ν before a velar becomes γ; transliterated
/// `g` before a velar becomes `n`. A run of nasals assimilates as a whole, and
/// each keeps its case.
pub(crate) fn gamma_nasal(text: &str, to: Representation) -> String {
    match to {
        Representation::Greek => regex!(r"([νΝ]+)([γξκχΓΞΚΧ])")
            .replace_all(text, |caps: &regex::Captures| {
                let nasals: String = caps[1].chars().map(|c| if c == 'Ν' { 'Γ' } else { 'γ' }).collect();
                format!("{nasals}{}", &caps[2])
            })
            .into_owned(),
        Representation::Transliteration => regex!(r"([gG]+)([gGxXkK]|[cC][hH])")
            .replace_all(text, |caps: &regex::Captures| {
                let nasals: String = caps[1].chars().map(|c| if c == 'G' { 'N' } else { 'n' }).collect();
                format!("{nasals}{}", &caps[2])
            })
            .into_owned(),
        Representation::BetaCode => text.to_string(),
    }
}

/// π or Π directly followed by a sigma collapses to ψ/Ψ (case of the pi).
pub(crate) fn pi_sigma(text: &str) -> String {
    regex!(r"([πΠ])[σςΣ]")
        .replace_all(text, |caps: &regex::Captures| if &caps[1] == "Π" { "Ψ" } else { "ψ" })
        .into_owned()
}

/// ς at the end of a word, σ elsewhere.
pub(crate) fn sigma_finality(text: &str) -> String {
    let medial = text.replace('ς', "σ");
    regex!(r"σ(\s|\p{P}|$)").replace_all(&medial, "ς$1").into_owned()
}

/// Cursive ϐ inside words, β at the start of a word.
pub(crate) fn beta_variant(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut prev: Option<char> = None;
    for c in text.chars() {
        let c = if c == 'ϐ' { 'β' } else { c };
        let inside_word = prev.is_some_and(is_word_char);
        out.push(if c == 'β' && inside_word { 'ϐ' } else { c });
        prev = Some(c);
    }
    out
}

/// Move an iota-subscript sigil to the end of the breathing/accent run it
/// sits in.
pub(crate) fn reorder_beta_code_diacritics(text: &str) -> String {
    regex!(r"\|([()/\\=+]+)").replace_all(text, "$1|").into_owned()
}

/// Drop free diacritics from text in `repr`. Precomposed long-vowel letters
/// (ē, ō) are not combining marks and survive.
pub(crate) fn strip_diacritics(text: &str, repr: Representation) -> String {
    match repr {
        Representation::BetaCode => text.chars().filter(|c| !"()/\\=+|_^".contains(*c)).collect(),
        Representation::Greek | Representation::Transliteration => {
            text.chars().filter(|c| !marks::is_combining(*c)).collect()
        }
    }
}

pub(crate) fn is_word_char(c: char) -> bool {
    c.is_alphabetic() || marks::is_combining(c)
}

/// NFC-recompose `text`.
pub(crate) fn compose(text: &str) -> String {
    text.nfc().collect()
}
