//! The conversion pipeline.
//!
//! A [`Converter`] owns the compiled maps for one `(from, to, options)`
//! triple and runs text through them. Beta Code and transliteration have no
//! direct table pairing worth keeping (breathings and long vowels only line up
//! through Greek), so those directions run as two legs joined at Greek.
//!
//! Per leg:
//!
//! ```text
//! prepare ─> breathing ─> [strip] ─> substitute ─> [resolve] ─> normalize
//!  NFD +      spell out     only with    sweep + NFC   translit   per-script
//!  fixups     or flag `h`   diacritics   + gamma       -> Greek   passes
//!                           removed      nasal         only
//! ```
//!
//! Whitespace handling runs once, before the first leg. Diacritics are only
//! removed on the last leg, so a rough breathing in Beta Code still reaches
//! transliteration as an `h`.

use std::time::Instant;

use super::charmap::CharacterMap;
use super::metrics::{RunMetrics, RunResult, StageMetrics};
use super::{breathing, normalize, substitute};
use crate::{Options, Representation};

type Trace = Option<Vec<StageMetrics>>;

/// Reusable converter between two representations.
#[derive(Debug, Clone)]
pub struct Converter {
    from: Representation,
    to: Representation,
    options: Options,
    legs: Vec<CharacterMap>,
}

impl Converter {
    pub fn new(from: Representation, to: Representation, options: &Options) -> Self {
        use Representation::*;
        let legs = match (from, to) {
            (BetaCode, Transliteration) | (Transliteration, BetaCode) => {
                let keep = Options { remove_diacritics: false, ..options.clone() };
                vec![CharacterMap::new(from, Greek, &keep), CharacterMap::new(Greek, to, options)]
            }
            _ => vec![CharacterMap::new(from, to, options)],
        };
        Converter { from, to, options: options.clone(), legs }
    }

    pub fn from(&self) -> Representation {
        self.from
    }

    pub fn to(&self) -> Representation {
        self.to
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    /// The maps run in order: one, or two for directions chained through Greek.
    pub fn maps(&self) -> &[CharacterMap] {
        &self.legs
    }

    /// Convert `text`.
    pub fn convert(&self, text: &str) -> String {
        self.run(text, &mut None)
    }

    /// Convert `text`, recording each stage's output and timing.
    pub fn run_with_metrics(&self, text: &str) -> RunResult {
        let total_start = Instant::now();
        let mut trace: Trace = Some(Vec::new());
        let output = self.run(text, &mut trace);
        let metrics = RunMetrics { total: total_start.elapsed(), stages: trace.unwrap_or_default() };
        RunResult { output, metrics }
    }

    fn run(&self, text: &str, trace: &mut Trace) -> String {
        let _span = tracing::debug_span!("convert", from = %self.from, to = %self.to).entered();

        let mut text = stage!(trace, "whitespace", collapse_whitespace(text, self.options.preserve_whitespace));
        for (i, map) in self.legs.iter().enumerate() {
            let first = trace.as_ref().map_or(0, Vec::len);
            let remove = self.options.remove_diacritics && i + 1 == self.legs.len();
            text = self.run_leg(map, &text, remove, trace);
            if let Some(stages) = trace.as_mut() {
                for stage in &mut stages[first..] {
                    stage.leg = Some((map.from(), map.to()));
                }
            }
        }

        tracing::debug!(chars = text.chars().count(), "conversion complete");
        text
    }

    fn run_leg(&self, map: &CharacterMap, text: &str, remove: bool, trace: &mut Trace) -> String {
        use Representation::*;
        let (from, to) = (map.from(), map.to());

        let prepared = stage!(trace, "prepare", substitute::prepare(text, map).into_iter().collect());

        let mut polytonic = false;
        let text = match (from, to) {
            (Greek, Transliteration) => stage!(trace, "breathing", breathing::spell_out(&prepared)),
            (Transliteration, Greek) => {
                polytonic = breathing::is_polytonic(&prepared);
                stage!(trace, "breathing", breathing::flag(&prepared))
            }
            _ => prepared,
        };

        let text = if remove { stage!(trace, "strip", normalize::strip_diacritics(&text, from)) } else { text };

        let chars: Vec<char> = text.chars().collect();
        let text = stage!(trace, "substitute", substitute::assimilate(&substitute::sweep(&chars, map), to));

        let text = if (from, to) == (Transliteration, Greek) {
            stage!(trace, "resolve", breathing::resolve(&text, !remove, polytonic && !remove))
        } else {
            text
        };

        stage!(trace, "normalize", normalize::orthography(&text, to, &self.options))
    }
}

/// Collapse whitespace runs to one space and trim, unless `preserve` is set.
fn collapse_whitespace(text: &str, preserve: bool) -> String {
    if preserve {
        return text.to_string();
    }
    regex!(r"\s+").replace_all(text, " ").trim().to_string()
}
