//! Weighted criticality index computed from the five attribute bands.
//!
//! The index follows the AHP-derived formula
//! `II = Σ(S_i * W_i) / Σ(S_max,i * W_i)` with `S_max = 3` for every
//! criterion. `II` therefore spans [1/3, 1]; the normalized index rescales
//! that interval onto [0, 1] and clamps the result, which also absorbs the
//! last-ULP overshoot of the all-high case.

use serde::{Deserialize, Serialize};

use crate::classify::AttributeBands;
use crate::config::weights::IndexWeights;

/// Maximum band score per criterion (`S_max`).
pub const MAX_BAND_SCORE: f64 = 3.0;

/// Lower end of the raw index range, reached when every band is low.
pub const INDEX_MIN: f64 = 1.0 / 3.0;

/// Upper end of the raw index range, reached when every band is high.
pub const INDEX_MAX: f64 = 1.0;

/// Criticality index for one substation.
///
/// `weighted_sum` and `raw` are intermediates; only `normalized` is
/// persisted into the output table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IndexScore {
    pub weighted_sum: f64,
    pub raw: f64,
    pub normalized: f64,
}

/// Computes the weighted criticality index from five bands.
///
/// Pure function of the bands and weights. The denominator `3 * Σw` is
/// computed from the injected weights rather than assumed to be 3, so any
/// positive weighting scheme works without renormalization.
pub fn weighted_index(bands: &AttributeBands, weights: &IndexWeights) -> IndexScore {
    let weighted_sum = bands.power_draw.score() * weights.power_draw
        + bands.residents.score() * weights.residents
        + bands.node_score.score() * weights.node_score
        + bands.infrastructure.score() * weights.infrastructure
        + bands.commercial.score() * weights.commercial;

    let denominator = MAX_BAND_SCORE * weights.sum();
    let raw = weighted_sum / denominator;
    let normalized = ((raw - INDEX_MIN) / (INDEX_MAX - INDEX_MIN)).clamp(0.0, 1.0);

    IndexScore {
        weighted_sum,
        raw,
        normalized,
    }
}
