//! Conversion engine.
//!
//! The engine is split into focused submodules under `src/engine/` while the
//! public paths stay flat (`crate::engine::Converter`,
//! `crate::engine::CharacterMap`).
//!
//! ## How the parts work together
//!
//! ```text
//! LetterTable (letters.rs) + Options
//!               │  CharacterMap::new               (charmap.rs)
//!               v
//!         ordered rules ── longest NFD source first, letters before diacritics
//!               │
//! input ── Converter::convert ──────────────────── (pipeline.rs)
//!               │  collapse whitespace
//!               │  prepare: NFD + input fixups     (substitute.rs)
//!               │  breathings: spell out / flag    (breathing.rs)
//!               │  slot sweep + NFC + gamma nasal  (substitute.rs)
//!               │  breathings: resolve             (breathing.rs)
//!               │  orthographic passes             (normalize.rs)
//!               v
//!             String
//! ```
//!
//! Beta Code <-> transliteration runs the per-leg stages twice, through Greek.
//!
//! ## Responsibilities by module
//!
//! - `charmap.rs`: derives a `CharacterMap` from the letter table and owns the
//!   rule ordering invariants.
//! - `substitute.rs`: input preparation and the non-overlapping longest-match
//!   sweep.
//! - `breathing.rs`: moves breathings between diacritic form and a written `h`.
//! - `normalize.rs`: context rules on the output (final sigma, ϐ, ψ, γ before
//!   velars, Beta Code sigil order).
//! - `pipeline.rs`: `Converter`, which chains the above.
//! - `metrics.rs`: optional per-stage timings and texts.
//!
//! ## Debugging
//!
//! Every stage emits a `trace`-level event with its output text; the CLI reads
//! its filter from `POLYTONIC_LOG` (e.g. `POLYTONIC_LOG=polytonic=trace`).

#[path = "engine/breathing.rs"]
mod breathing;
#[path = "engine/charmap.rs"]
mod charmap;
#[path = "engine/metrics.rs"]
mod metrics;
#[path = "engine/normalize.rs"]
mod normalize;
#[path = "engine/pipeline.rs"]
mod pipeline;
#[path = "engine/substitute.rs"]
mod substitute;

pub use charmap::{CharacterMap, MapRule, RuleKind};
pub use metrics::{RunMetrics, RunResult, StageMetrics};
pub use normalize::normalize_orthography;
pub use pipeline::Converter;
