use crate::engine::{Converter, StageMetrics};
use crate::{Options, Representation};
use std::time::Duration;

/// One pipeline stage in a verbose trace.
#[derive(Debug, Clone)]
pub struct StageSummary {
    /// Stage name, prefixed with its leg for chained conversions
    /// (`beta-code->greek:substitute`).
    pub stage: String,
    /// Text after the stage.
    pub text: String,
    pub duration: Duration,
}

/// Additional details returned by [`convert_verbose`].
///
/// Meant for debugging: every stage's output text is kept, so this allocates
/// roughly one copy of the input per stage.
#[derive(Debug, Clone)]
pub struct ConversionDetails {
    pub from: Representation,
    pub to: Representation,
    /// Total elapsed time.
    pub total: Duration,
    /// Letter rules per map, in leg order.
    pub letter_rules: Vec<usize>,
    /// Diacritic rules per map, in leg order.
    pub diacritic_rules: Vec<usize>,
    pub stages: Vec<StageSummary>,
}

/// Result from [`convert_verbose`].
#[derive(Debug, Clone)]
pub struct ConversionVerbose {
    pub text: String,
    pub output: String,
    pub elapsed: Duration,
    pub details: ConversionDetails,
}

/// Convert `text` from `from` into Greek script.
///
/// # Example
/// ```
/// use polytonic::{Options, Representation, to_greek};
///
/// assert_eq!(to_greek("aggelos", Representation::Transliteration, &Options::default()), "αγγελος");
/// ```
pub fn to_greek(text: &str, from: Representation, options: &Options) -> String {
    convert(text, from, Representation::Greek, options)
}

/// Convert `text` from `from` into Beta Code.
pub fn to_beta_code(text: &str, from: Representation, options: &Options) -> String {
    convert(text, from, Representation::BetaCode, options)
}

/// Convert `text` from `from` into Latin transliteration.
///
/// # Example
/// ```
/// use polytonic::{Options, Representation, to_transliteration};
///
/// let opts = Options::default().with_remove_diacritics(true);
/// assert_eq!(to_transliteration("ῥυθμός", Representation::Greek, &opts), "rhuthmos");
/// ```
pub fn to_transliteration(text: &str, from: Representation, options: &Options) -> String {
    convert(text, from, Representation::Transliteration, options)
}

/// Convert `text` between any two representations.
///
/// Builds the maps for this call. To convert many strings with the same
/// options, build a [`Converter`] once and reuse it.
pub fn convert(text: &str, from: Representation, to: Representation, options: &Options) -> String {
    Converter::new(from, to, options).convert(text)
}

/// Convert `text` and return per-stage texts and timings alongside the output.
///
/// The default [`convert`] path does not allocate these traces.
pub fn convert_verbose(text: &str, from: Representation, to: Representation, options: &Options) -> ConversionVerbose {
    let converter = Converter::new(from, to, options);
    let run = converter.run_with_metrics(text);

    let details = ConversionDetails {
        from,
        to,
        total: run.metrics.total,
        letter_rules: converter.maps().iter().map(|m| m.letter_rule_count()).collect(),
        diacritic_rules: converter.maps().iter().map(|m| m.diacritic_rule_count()).collect(),
        stages: run.metrics.stages.iter().map(|s| stage_summary(s, converter.maps().len() > 1)).collect(),
    };

    ConversionVerbose { text: text.to_string(), output: run.output, elapsed: run.metrics.total, details }
}

fn stage_summary(stage: &StageMetrics, chained: bool) -> StageSummary {
    let name = match stage.leg {
        Some((from, to)) if chained => format!("{from}->{to}:{}", stage.stage),
        _ => stage.stage.to_string(),
    };
    StageSummary { stage: name, text: stage.text.clone(), duration: stage.duration }
}
