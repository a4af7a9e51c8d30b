//! Conversion options.
//!
//! `Options` is a plain value: it is cheap to clone, hashable, and every
//! field is public. The engine never mutates it; changing any field means
//! building a new [`CharacterMap`](crate::CharacterMap).

use std::str::FromStr;

bitflags::bitflags! {
    /// Optional archaic letters added to the letter table.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct ExtendedLetters: u8 {
        const DIGAMMA      = 1 << 0;
        const YOT          = 1 << 1;
        const LUNATE_SIGMA = 1 << 2;
        const STIGMA       = 1 << 3;
        const KOPPA        = 1 << 4;
        const SAMPI        = 1 << 5;
        const ALL = Self::DIGAMMA.bits()
            | Self::YOT.bits()
            | Self::LUNATE_SIGMA.bits()
            | Self::STIGMA.bits()
            | Self::KOPPA.bits()
            | Self::SAMPI.bits();
    }
}

/// Returned when an extended letter name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown extended letter '{0}' (expected digamma, yot, lunate-sigma, stigma, koppa, sampi or all)")]
pub struct ParseExtendedLetterError(pub String);

impl FromStr for ExtendedLetters {
    type Err = ParseExtendedLetterError;

    /// Parse a single letter name, or `all`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase().replace('_', "-");
        match name.as_str() {
            "digamma" => Ok(ExtendedLetters::DIGAMMA),
            "yot" => Ok(ExtendedLetters::YOT),
            "lunate-sigma" | "lunate" => Ok(ExtendedLetters::LUNATE_SIGMA),
            "stigma" => Ok(ExtendedLetters::STIGMA),
            "koppa" => Ok(ExtendedLetters::KOPPA),
            "sampi" => Ok(ExtendedLetters::SAMPI),
            "all" => Ok(ExtendedLetters::ALL),
            _ => Err(ParseExtendedLetterError(s.to_string())),
        }
    }
}

/// Options that affect table construction and post-processing.
///
/// The default converts with diacritics, collapses whitespace, uses the
/// cursive beta glyph inside words, and transliterates η/ω as ē/ō, χ as
/// `ch` and ξ as `x`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Options {
    /// Drop accents, breathings and other free diacritics from the output.
    pub remove_diacritics: bool,
    /// Keep whitespace exactly as given instead of collapsing and trimming it.
    pub preserve_whitespace: bool,
    /// Archaic letters to include in the tables.
    pub extended_letters: ExtendedLetters,
    /// Never use the cursive beta ϐ in Greek output.
    pub disable_beta_variant: bool,
    /// Transliterate η/ω as ê/ô instead of ē/ō.
    pub use_circumflex_for_long_vowels: bool,
    /// Transliterate χ as `kh` instead of `ch`.
    pub chi_as_kh: bool,
    /// Transliterate ξ as `ks` instead of `x`.
    pub xi_as_ks: bool,
}

impl Options {
    pub fn with_remove_diacritics(mut self, value: bool) -> Self {
        self.remove_diacritics = value;
        self
    }

    pub fn with_preserve_whitespace(mut self, value: bool) -> Self {
        self.preserve_whitespace = value;
        self
    }

    pub fn with_extended_letters(mut self, letters: ExtendedLetters) -> Self {
        self.extended_letters = letters;
        self
    }

    pub fn with_beta_variant(mut self, enabled: bool) -> Self {
        self.disable_beta_variant = !enabled;
        self
    }

    pub fn with_circumflex_for_long_vowels(mut self, value: bool) -> Self {
        self.use_circumflex_for_long_vowels = value;
        self
    }

    pub fn with_chi_as_kh(mut self, value: bool) -> Self {
        self.chi_as_kh = value;
        self
    }

    pub fn with_xi_as_ks(mut self, value: bool) -> Self {
        self.xi_as_ks = value;
        self
    }
}
