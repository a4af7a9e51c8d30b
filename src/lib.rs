//! Conversion between polytonic Greek, Beta Code and Latin transliteration.
//!
//! The crate is a small, table-driven rewrite engine:
//!
//! ```text
//! Options ──▶ LetterTable ──▶ CharacterMap (sorted rules)
//!                                   │
//! input ── prepare ── breathing ────┼── slot sweep ── breathing ── normalize ──▶ output
//!          (NFD,      pre-pass      │   (longest      resolution   (gamma nasal,
//!          coercion)                │    match)                    sigma, beta, …)
//! ```
//!
//! Every conversion is deterministic and infallible: characters that no rule
//! covers are copied through unchanged.
//!
//! # Example
//! ```
//! use polytonic::{Options, Representation, to_greek};
//!
//! let greek = to_greek("a)/nqrwpos", Representation::BetaCode, &Options::default());
//! assert_eq!(greek, "ἄνθρωπος");
//! ```

#[macro_use]
mod macros;
mod api;
mod engine;
mod letters;
mod options;

#[cfg(test)]
mod tests;

use std::fmt;
use std::str::FromStr;

pub use api::{
    ConversionDetails, ConversionVerbose, StageSummary, convert, convert_verbose, to_beta_code, to_greek,
    to_transliteration,
};
pub use engine::{
    CharacterMap, Converter, MapRule, RuleKind, RunMetrics, RunResult, StageMetrics, normalize_orthography,
};
pub use letters::{DiacriticEntry, LetterEntry, LetterTable};
pub use options::{ExtendedLetters, Options, ParseExtendedLetterError};

// --- Representations ---------------------------------------------------------

/// One of the three writing systems the engine converts between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Representation {
    /// Native Greek script (Unicode, polytonic).
    Greek,
    /// ASCII Beta Code (`a)/nqrwpos`).
    BetaCode,
    /// Latin transliteration (`ánthrōpos`).
    Transliteration,
}

impl Representation {
    pub const ALL: [Representation; 3] =
        [Representation::Greek, Representation::BetaCode, Representation::Transliteration];

    /// Stable lowercase name, also accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            Representation::Greek => "greek",
            Representation::BetaCode => "beta-code",
            Representation::Transliteration => "transliteration",
        }
    }
}

impl fmt::Display for Representation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when a representation name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown representation '{0}' (expected greek, beta-code or transliteration)")]
pub struct ParseRepresentationError(pub String);

impl FromStr for Representation {
    type Err = ParseRepresentationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "greek" | "gr" | "grc" => Ok(Representation::Greek),
            "beta" | "beta-code" | "betacode" | "beta_code" | "bc" => Ok(Representation::BetaCode),
            "translit" | "transliteration" | "tr" | "latin" => Ok(Representation::Transliteration),
            _ => Err(ParseRepresentationError(s.to_string())),
        }
    }
}
