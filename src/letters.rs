//! Letter and diacritic tables.
//!
//! Each record holds the same grapheme in up to three systems. A missing
//! field means "unmapped in that system": the record simply produces no rule
//! for any direction that touches it.
//!
//! Declaration order is significant. When two records share a source string
//! (σ and ς both transliterate to `s`), the one declared first wins in the
//! reverse direction because rule sorting is stable.

use unicode_normalization::UnicodeNormalization;

use crate::{ExtendedLetters, Options, Representation};

/// Combining marks shared by the tables, the breathing passes and the
/// normalizer.
pub(crate) mod marks {
    pub const GRAVE: char = '\u{300}';
    pub const ACUTE: char = '\u{301}';
    pub const LATIN_TILDE: char = '\u{303}';
    pub const MACRON: char = '\u{304}';
    pub const DIAERESIS: char = '\u{308}';
    pub const SMOOTH: char = '\u{313}';
    pub const ROUGH: char = '\u{314}';
    pub const PERISPOMENI: char = '\u{342}';

    /// Combining Diacritical Marks block, the only marks the tables use.
    pub fn is_combining(c: char) -> bool {
        ('\u{300}'..='\u{36F}').contains(&c)
    }
}

/// A letter or punctuation mark in up to three systems.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LetterEntry {
    pub name: &'static str,
    pub greek: Option<&'static str>,
    pub beta_code: Option<&'static str>,
    pub transliteration: Option<&'static str>,
}

/// A combining mark in up to three systems. The Greek field is always one
/// combining code point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiacriticEntry {
    pub name: &'static str,
    pub greek: &'static str,
    pub beta_code: Option<&'static str>,
    pub transliteration: Option<&'static str>,
}

/// Read access to one field of a table record.
pub(crate) trait Graphemes {
    fn field(&self, repr: Representation) -> Option<&str>;
}

impl Graphemes for LetterEntry {
    fn field(&self, repr: Representation) -> Option<&str> {
        let value = match repr {
            Representation::Greek => self.greek,
            Representation::BetaCode => self.beta_code,
            Representation::Transliteration => self.transliteration,
        };
        value.filter(|s| !s.is_empty())
    }
}

impl Graphemes for DiacriticEntry {
    fn field(&self, repr: Representation) -> Option<&str> {
        match repr {
            Representation::Greek => Some(self.greek),
            Representation::BetaCode => self.beta_code.filter(|s| !s.is_empty()),
            Representation::Transliteration => self.transliteration.filter(|s| !s.is_empty()),
        }
    }
}

const fn letter(
    name: &'static str,
    greek: &'static str,
    beta_code: Option<&'static str>,
    transliteration: Option<&'static str>,
) -> LetterEntry {
    LetterEntry { name, greek: Some(greek), beta_code, transliteration }
}

const fn diacritic(
    name: &'static str,
    greek: &'static str,
    beta_code: &'static str,
    transliteration: Option<&'static str>,
) -> DiacriticEntry {
    DiacriticEntry { name, greek, beta_code: Some(beta_code), transliteration }
}

// Breathings carry no transliteration field: the breathing passes turn them
// into (or out of) a written `h`.
static DIACRITICS: &[DiacriticEntry] = &[
    diacritic("rough breathing", "\u{314}", "(", None),
    diacritic("smooth breathing", "\u{313}", ")", Some("")),
    diacritic("acute", "\u{301}", "/", Some("\u{301}")),
    diacritic("grave", "\u{300}", "\\", Some("\u{300}")),
    diacritic("circumflex", "\u{342}", "=", Some("\u{303}")),
    diacritic("macron", "\u{304}", "_", Some("\u{304}")),
    diacritic("breve", "\u{306}", "^", Some("\u{306}")),
    diacritic("diaeresis", "\u{308}", "+", Some("\u{308}")),
    diacritic("iota subscript", "\u{345}", "|", Some("\u{327}")), // cedilla
];

static BASE_LETTERS: &[LetterEntry] = &[
    letter("alpha", "α", Some("a"), Some("a")),
    letter("Alpha", "Α", Some("A"), Some("A")),
    letter("beta", "β", Some("b"), Some("b")),
    letter("Beta", "Β", Some("B"), Some("B")),
    letter("beta (cursive)", "ϐ", Some("b"), Some("b")),
    letter("gamma", "γ", Some("g"), Some("g")),
    letter("Gamma", "Γ", Some("G"), Some("G")),
    letter("delta", "δ", Some("d"), Some("d")),
    letter("Delta", "Δ", Some("D"), Some("D")),
    letter("epsilon", "ε", Some("e"), Some("e")),
    letter("Epsilon", "Ε", Some("E"), Some("E")),
    letter("zeta", "ζ", Some("z"), Some("z")),
    letter("Zeta", "Ζ", Some("Z"), Some("Z")),
    letter("eta", "η", Some("h"), Some("ē")),
    letter("Eta", "Η", Some("H"), Some("Ē")),
    letter("theta", "θ", Some("q"), Some("th")),
    letter("Theta", "Θ", Some("Q"), Some("Th")),
    letter("THETA", "Θ", None, Some("TH")),
    letter("iota", "ι", Some("i"), Some("i")),
    letter("Iota", "Ι", Some("I"), Some("I")),
    letter("kappa", "κ", Some("k"), Some("k")),
    letter("Kappa", "Κ", Some("K"), Some("K")),
    letter("lambda", "λ", Some("l"), Some("l")),
    letter("Lambda", "Λ", Some("L"), Some("L")),
    letter("mu", "μ", Some("m"), Some("m")),
    letter("Mu", "Μ", Some("M"), Some("M")),
    letter("nu", "ν", Some("n"), Some("n")),
    letter("Nu", "Ν", Some("N"), Some("N")),
    letter("xi", "ξ", Some("c"), Some("x")),
    letter("Xi", "Ξ", Some("C"), Some("X")),
    letter("XI", "Ξ", None, None),
    letter("omicron", "ο", Some("o"), Some("o")),
    letter("Omicron", "Ο", Some("O"), Some("O")),
    letter("pi", "π", Some("p"), Some("p")),
    letter("Pi", "Π", Some("P"), Some("P")),
    letter("rho", "ρ", Some("r"), Some("r")),
    letter("Rho", "Ρ", Some("R"), Some("R")),
    letter("sigma", "σ", Some("s"), Some("s")),
    letter("Sigma", "Σ", Some("S"), Some("S")),
    letter("final sigma", "ς", Some("s"), Some("s")),
    letter("tau", "τ", Some("t"), Some("t")),
    letter("Tau", "Τ", Some("T"), Some("T")),
    letter("upsilon", "υ", Some("u"), Some("u")),
    letter("Upsilon", "Υ", Some("U"), Some("U")),
    letter("phi", "φ", Some("f"), Some("ph")),
    letter("Phi", "Φ", Some("F"), Some("Ph")),
    letter("PHI", "Φ", None, Some("PH")),
    letter("chi", "χ", Some("x"), Some("ch")),
    letter("Chi", "Χ", Some("X"), Some("Ch")),
    letter("CHI", "Χ", None, Some("CH")),
    letter("psi", "ψ", Some("y"), Some("ps")),
    letter("Psi", "Ψ", Some("Y"), Some("Ps")),
    letter("PSI", "Ψ", None, Some("PS")),
    letter("omega", "ω", Some("w"), Some("ō")),
    letter("Omega", "Ω", Some("W"), Some("Ō")),
    letter("question mark", "\u{37E}", Some(";"), Some("?")),
    letter("ano teleia", "\u{387}", Some(":"), Some(";")),
];

/// A style flag and the records it swaps in, matched by name.
struct StyleOverride {
    enabled: fn(&Options) -> bool,
    letters: &'static [LetterEntry],
}

fn chi_as_kh(options: &Options) -> bool {
    options.chi_as_kh
}

fn xi_as_ks(options: &Options) -> bool {
    options.xi_as_ks
}

fn circumflex_long_vowels(options: &Options) -> bool {
    options.use_circumflex_for_long_vowels
}

static STYLE_OVERRIDES: &[StyleOverride] = &[
    StyleOverride {
        enabled: chi_as_kh,
        letters: &[
            letter("chi", "χ", Some("x"), Some("kh")),
            letter("Chi", "Χ", Some("X"), Some("Kh")),
            letter("CHI", "Χ", None, Some("KH")),
        ],
    },
    StyleOverride {
        enabled: xi_as_ks,
        letters: &[
            letter("xi", "ξ", Some("c"), Some("ks")),
            letter("Xi", "Ξ", Some("C"), Some("Ks")),
            letter("XI", "Ξ", None, Some("KS")),
        ],
    },
    StyleOverride {
        enabled: circumflex_long_vowels,
        letters: &[
            letter("eta", "η", Some("h"), Some("ê")),
            letter("Eta", "Η", Some("H"), Some("Ê")),
            letter("omega", "ω", Some("w"), Some("ô")),
            letter("Omega", "Ω", Some("W"), Some("Ô")),
        ],
    },
];

static EXTENDED_LETTERS: &[(ExtendedLetters, &[LetterEntry])] = &[
    (
        ExtendedLetters::DIGAMMA,
        &[letter("digamma", "ϝ", Some("v"), Some("w")), letter("Digamma", "Ϝ", Some("V"), Some("W"))],
    ),
    (ExtendedLetters::YOT, &[letter("yot", "ϳ", Some("j"), Some("j")), letter("Yot", "Ϳ", Some("J"), Some("J"))]),
    (
        ExtendedLetters::LUNATE_SIGMA,
        &[letter("lunate sigma", "ϲ", Some("s3"), Some("s")), letter("Lunate sigma", "Ϲ", Some("S3"), Some("S"))],
    ),
    (ExtendedLetters::STIGMA, &[letter("stigma", "ϛ", Some("#2"), Some("st")), letter("Stigma", "Ϛ", None, Some("St"))]),
    (ExtendedLetters::KOPPA, &[letter("koppa", "ϟ", Some("#3"), Some("q")), letter("Koppa", "Ϟ", None, Some("Q"))]),
    (ExtendedLetters::SAMPI, &[letter("sampi", "ϡ", Some("#5"), Some("ss")), letter("Sampi", "Ϡ", None, Some("Ss"))]),
];

/// The letter records in effect for one set of options.
///
/// Built fresh for every [`CharacterMap`](crate::CharacterMap); the static
/// tables underneath are never modified.
#[derive(Debug, Clone)]
pub struct LetterTable {
    letters: Vec<LetterEntry>,
}

impl LetterTable {
    pub fn new(options: &Options) -> Self {
        let active: Vec<&StyleOverride> = STYLE_OVERRIDES.iter().filter(|s| (s.enabled)(options)).collect();

        let mut letters: Vec<LetterEntry> = BASE_LETTERS
            .iter()
            .map(|entry| {
                active
                    .iter()
                    .flat_map(|style| style.letters.iter())
                    .find(|styled| styled.name == entry.name)
                    .copied()
                    .unwrap_or(*entry)
            })
            .collect();

        for (flag, extra) in EXTENDED_LETTERS {
            if options.extended_letters.contains(*flag) {
                letters.extend_from_slice(extra);
            }
        }

        LetterTable { letters }
    }

    pub fn letters(&self) -> &[LetterEntry] {
        &self.letters
    }

    pub fn diacritics(&self) -> &'static [DiacriticEntry] {
        DIACRITICS
    }

    /// Transliteration letters written as one precomposed vowel carrying a
    /// mark (ē, ō, …), as `(base, mark, composed)`.
    pub(crate) fn long_vowels(&self) -> Vec<(char, char, char)> {
        self.letters
            .iter()
            .filter_map(|entry| entry.field(Representation::Transliteration))
            .filter_map(|tr| {
                let mut chars = tr.chars();
                let composed = chars.next()?;
                if chars.next().is_some() {
                    return None;
                }
                let mut parts = std::iter::once(composed).nfd();
                match (parts.next(), parts.next(), parts.next()) {
                    (Some(base), Some(mark), None) => Some((base, mark, composed)),
                    _ => None,
                }
            })
            .collect()
    }
}
