use proptest::prelude::*;
use unicode_normalization::UnicodeNormalization;

use crate::{
    Converter, ExtendedLetters, Options, Representation, convert, normalize_orthography, to_beta_code, to_greek,
    to_transliteration,
};

use Representation::{BetaCode, Greek, Transliteration};

fn nfc(s: &str) -> String {
    s.nfc().collect()
}

#[test]
fn conversion_examples_matching() {
    // (from, to, input, expected)
    let cases: Vec<(Representation, Representation, &str, &str)> = vec![
        (BetaCode, Greek, "a)/nqrwpos", "ἄνθρωπος"),
        (Greek, BetaCode, "ἄνθρωπος", "a)/nqrwpos"),
        (Greek, Transliteration, "ἄνθρωπος", "ánthrōpos"),
        (Greek, Greek, "ανγελος", "αγγελος"),
        (Transliteration, Greek, "aggelos", "αγγελος"),
        (Transliteration, Greek, "ánthrōpos", "ἄνθρωπος"),
        (BetaCode, Greek, "A)/nqrwpos", "Ἄνθρωπος"),
        (BetaCode, Greek, "lo/gos 42!", "λόγος 42!"),
        (BetaCode, Greek, "bibli/on", "βιϐλίον"),
        (BetaCode, Greek, "w)/ps", "ὤψ"),
        (BetaCode, Greek, "ti/;", "τί;"),
        (BetaCode, Transliteration, "a)/nqrwpos", "ánthrōpos"),
        (Transliteration, BetaCode, "hodós", "o(do/s"),
        (Greek, BetaCode, "ᾄδω", "a)/|dw"),
        (Greek, BetaCode, "τῷ", "tw=|"),
        (Greek, Transliteration, "ὁδός", "hodós"),
        (Greek, Transliteration, "Ὅμηρος", "Hómēros"),
        (Greek, Transliteration, "ῥήτωρ", "rhḗtōr"),
        (Greek, Transliteration, "οἶκος", "oĩkos"),
        (Greek, Transliteration, "υἱός", "huiós"),
        (Greek, Transliteration, "σφίγξ", "sphínx"),
        (Greek, Transliteration, "ἀγγέλλω", "angéllō"),
        (Transliteration, Greek, "Hodos", "Ὁδος"),
        (Transliteration, Greek, "rhḗtōr", "ῥήτωρ"),
        (Transliteration, Greek, "THEOS", "ΘΕΟΣ"),
        (Transliteration, Greek, "psuchḗ", "ψυχή"),
        (Transliteration, Greek, "HODOS", "ὉΔΟΣ"),
        (Greek, Transliteration, "ἑαυτόν", "heautón"),
    ];

    let opts = Options::default();
    for (from, to, input, expected) in cases {
        assert_eq!(convert(input, from, to, &opts), nfc(expected), "{from} -> {to}: {input:?}");
    }
}

#[test]
fn direction_helpers_match_literal_scenarios() {
    let opts = Options::default();
    assert_eq!(to_greek("a)/nqrwpos", BetaCode, &opts), nfc("ἄνθρωπος"));
    assert_eq!(to_beta_code("ἄνθρωπος", Greek, &opts), "a)/nqrwpos");
    assert_eq!(to_transliteration("ἄνθρωπος", Greek, &opts), nfc("ánthrōpos"));
    assert_eq!(to_greek("ανγελος", Greek, &opts), nfc("αγγελος"));
    assert_eq!(to_greek("aggelos", Transliteration, &opts), nfc("αγγελος"));

    let bare = Options::default().with_remove_diacritics(true);
    assert_eq!(to_transliteration("ῥυθμός", Greek, &bare), "rhuthmos");
}

#[test]
fn smooth_breathing_follows_the_whole_input() {
    let opts = Options::default();
    // Accents anywhere mark the input as polytonic, so unaccented words
    // (proclitics included) get their smooth breathing too.
    assert_eq!(to_greek("ánthrōpos aggelos", Transliteration, &opts), nfc("ἄνθρωπος ἀγγελος"));
    assert_eq!(to_greek("ou kakós", Transliteration, &opts), nfc("οὐ κακός"));
    assert_eq!(to_greek("aggelos", Transliteration, &opts), nfc("αγγελος"));
    assert_eq!(to_greek("ou kakos", Transliteration, &opts), nfc("ου κακος"));
}

#[test]
fn private_use_characters_pass_through() {
    let opts = Options::default();
    assert_eq!(to_greek("a\u{E000}b", Transliteration, &opts), "α\u{E000}β");
    assert_eq!(to_beta_code("\u{E000}x", Transliteration, &opts), "\u{E000}c");
    assert_eq!(to_greek("\u{E000}hodós", Transliteration, &opts), nfc("\u{E000}ὁδός"));
    for from in Representation::ALL {
        for to in Representation::ALL {
            assert!(convert("a\u{E000}b", from, to, &opts).contains('\u{E000}'), "{from} -> {to}");
        }
    }
}

#[test]
fn remove_diacritics_examples() {
    let opts = Options::default().with_remove_diacritics(true);
    let cases: Vec<(Representation, Representation, &str, &str)> = vec![
        (BetaCode, Greek, "a)/nqrwpos", "ανθρωπος"),
        (Greek, BetaCode, "ἄνθρωπος", "anqrwpos"),
        (Greek, Transliteration, "ἄνθρωπος", "anthrōpos"),
        (Greek, Transliteration, "Ὅμηρος", "Homēros"),
        (Transliteration, Greek, "hodós", "οδος"),
        (BetaCode, Transliteration, "o(do/s", "hodos"),
        (Transliteration, BetaCode, "Hómēros", "Omhros"),
    ];
    for (from, to, input, expected) in cases {
        assert_eq!(convert(input, from, to, &opts), nfc(expected), "{from} -> {to}: {input:?}");
    }
}

const CORPUS: &[&str] = &[
    "ἄνθρωπος",
    "λόγος",
    "ὁδός",
    "οἶκος",
    "ἡμέρα",
    "Ὅμηρος",
    "ψυχή",
    "Ἀθῆναι",
    "ῥήτωρ",
    "ξένος",
    "ἀγγέλλω",
    "υἱός",
    "ἐν ἀρχῇ ἦν ὁ λόγος",
];

#[test]
fn corpus_round_trips_through_beta_code() {
    let opts = Options::default();
    for word in CORPUS {
        let greek = to_greek(word, Greek, &opts);
        let beta = to_beta_code(&greek, Greek, &opts);
        assert_eq!(to_greek(&beta, BetaCode, &opts), greek, "via beta code {beta:?}");
        assert_eq!(to_beta_code(&to_greek(&beta, BetaCode, &opts), Greek, &opts), beta);
    }
}

#[test]
fn corpus_round_trips_through_transliteration() {
    let opts = Options::default();
    for word in CORPUS {
        let greek = to_greek(word, Greek, &opts);
        let latin = to_transliteration(&greek, Greek, &opts);
        assert_eq!(to_greek(&latin, Transliteration, &opts), greek, "via transliteration {latin:?}");
    }
}

#[test]
fn corpus_round_trips_between_beta_code_and_transliteration() {
    let opts = Options::default();
    for word in CORPUS {
        let beta = to_beta_code(word, Greek, &opts);
        let latin = to_transliteration(&beta, BetaCode, &opts);
        assert_eq!(to_beta_code(&latin, Transliteration, &opts), beta, "via transliteration {latin:?}");
    }
}

#[test]
fn longest_match_is_never_shadowed() {
    let opts = Options::default();
    // Every digraph becomes one Greek letter; no stray τ/π/κ/σ survive.
    assert_eq!(to_greek("thphchps", Transliteration, &opts), "θφχψ");
    // Composed and decomposed long vowels match the same rule.
    assert_eq!(to_greek("ō o\u{304}", Transliteration, &opts), "ω ω");

    let lunate = opts.clone().with_extended_letters(ExtendedLetters::LUNATE_SIGMA);
    assert_eq!(to_greek("s3ofi/a", BetaCode, &lunate), nfc("ϲοφία"));
}

#[test]
fn extended_letters_convert_when_enabled() {
    let plain = Options::default();
    let all = Options::default().with_extended_letters(ExtendedLetters::ALL);

    assert_eq!(to_greek("#3", BetaCode, &plain), "#3");
    assert_eq!(to_greek("#3", BetaCode, &all), "ϟ");
    assert_eq!(to_transliteration("ϝάναξ", Greek, &all), nfc("wánax"));
    assert_eq!(to_beta_code("ϝάναξ", Greek, &all), "va/nac");
    assert_eq!(to_beta_code("ϲοφία", Greek, &all), "s3ofi/a");
    assert_eq!(to_transliteration("ϡ", Greek, &all), "ss");
}

#[test]
fn transliteration_style_flags() {
    let kh = Options::default().with_chi_as_kh(true);
    assert_eq!(to_transliteration("χάος", Greek, &kh), nfc("kháos"));
    assert_eq!(to_greek("kháos", Transliteration, &kh), nfc("χάος"));

    let ks = Options::default().with_xi_as_ks(true);
    assert_eq!(to_transliteration("ξένος", Greek, &ks), nfc("ksénos"));
    assert_eq!(to_greek("ksénos", Transliteration, &ks), nfc("ξένος"));
    // Gamma nasal still applies before the `ks` spelling.
    assert_eq!(to_transliteration("σφίγξ", Greek, &ks), nfc("sphínks"));

    let circ = Options::default().with_circumflex_for_long_vowels(true);
    assert_eq!(to_transliteration("ψυχή", Greek, &circ), nfc("psuche\u{302}\u{301}"));
    assert_eq!(to_greek("psuche\u{302}\u{301}", Transliteration, &circ), nfc("ψυχή"));
}

#[test]
fn beta_variant_can_be_disabled() {
    let opts = Options::default().with_beta_variant(false);
    assert_eq!(to_greek("bibli/on", BetaCode, &opts), nfc("βιβλίον"));
}

#[test]
fn whitespace_is_collapsed_unless_preserved() {
    let opts = Options::default();
    assert_eq!(to_greek("  lo/gos \n\t a)/nqrwpos ", BetaCode, &opts), nfc("λόγος ἄνθρωπος"));

    let keep = Options::default().with_preserve_whitespace(true);
    assert_eq!(to_greek(" lo/gos\n", BetaCode, &keep), nfc(" λόγος\n"));
}

#[test]
fn converter_reuse_matches_one_shot_convert() {
    let opts = Options::default();
    let converter = Converter::new(Greek, Transliteration, &opts);
    for word in CORPUS {
        assert_eq!(converter.convert(word), convert(word, Greek, Transliteration, &opts));
    }
}

#[test]
fn character_map_is_shareable_between_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<crate::CharacterMap>();
    assert_send_sync::<Converter>();
}

// --- Properties --------------------------------------------------------------

fn arb_greek() -> impl Strategy<Value = String> {
    let fragments = vec![
        "α", "ε", "η", "ι", "ο", "υ", "ω", "ἀ", "ἁ", "ά", "ὰ", "ᾶ", "ἄ", "ᾳ", "ῷ", "ἡ", "ὑ", "ϊ", "ῥ", "β", "γ", "δ",
        "ζ", "θ", "κ", "λ", "μ", "ν", "ξ", "π", "ρ", "σ", "ς", "τ", "φ", "χ", "ψ", "Α", "Ὁ", "Σ", " ",
    ];
    prop::collection::vec(prop::sample::select(fragments), 0..16).prop_map(|parts| parts.concat())
}

proptest! {
    #[test]
    fn greek_normalization_is_idempotent(text in arb_greek()) {
        let opts = Options::default();
        let once = to_greek(&text, Greek, &opts);
        prop_assert_eq!(to_greek(&once, Greek, &opts), once.clone());
        prop_assert_eq!(normalize_orthography(&once, Greek, &opts), once);
    }

    #[test]
    fn greek_round_trips_through_beta_code(text in arb_greek()) {
        let opts = Options::default();
        let greek = to_greek(&text, Greek, &opts);
        let beta = to_beta_code(&greek, Greek, &opts);
        prop_assert_eq!(to_greek(&beta, BetaCode, &opts), greek);
    }

    #[test]
    fn removed_diacritics_leave_no_marks(text in arb_greek()) {
        let opts = Options::default().with_remove_diacritics(true);
        for to in Representation::ALL {
            let out = convert(&text, Greek, to, &opts);
            // ē and ō are letters: NFC keeps them precomposed.
            prop_assert!(out.chars().all(|c| !('\u{300}'..='\u{36F}').contains(&c)), "combining mark left in {:?}", out);
            prop_assert!(!out.chars().any(|c| "()\\/+=|".contains(c)), "sigil left in {:?}", out);
        }
    }

    #[test]
    fn conversion_is_deterministic(text in arb_greek()) {
        let opts = Options::default();
        for to in Representation::ALL {
            prop_assert_eq!(convert(&text, Greek, to, &opts), convert(&text, Greek, to, &opts));
        }
    }
}
