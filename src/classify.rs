//! Ordinal band classification for substation attributes.
//!
//! Each of the five rated attributes maps onto a band of 1 (low), 2 (medium)
//! or 3 (high). Two threshold shapes exist: range attributes compare against
//! a lower and an upper bound, presence attributes treat exactly zero as
//! "none" and only then compare against the upper bound. The zero test is a
//! deliberate semantic difference, a substation with a tiny node score is
//! already in the medium band.
//!
//! All classifiers are pure and total: a missing value is coerced to 0
//! before thresholding and every finite input lands in exactly one band.

use serde::{Deserialize, Serialize};

use crate::config::thresholds::{ClassificationThresholds, PresenceThresholds, RangeThresholds};

/// Ordinal classification level for a single attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Band {
    Low = 1,
    Medium = 2,
    High = 3,
}

impl Band {
    /// Numeric band value (1, 2 or 3) as used in the weighted sum.
    pub fn score(self) -> f64 {
        self as i32 as f64
    }

    /// Band value as written into the output table.
    pub fn value(self) -> u8 {
        self as u8
    }
}

impl std::fmt::Display for Band {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value())
    }
}

/// Classifies a range attribute: below `low` is band 1, below `high` band 2,
/// everything else band 3. Negative values fall into band 1.
pub fn classify_range(value: Option<f64>, thresholds: &RangeThresholds) -> Band {
    let v = value.unwrap_or(0.0);
    if v < thresholds.low {
        Band::Low
    } else if v < thresholds.high {
        Band::Medium
    } else {
        Band::High
    }
}

/// Classifies a presence attribute: exactly zero is band 1, any other value
/// below `high` band 2, everything else band 3.
pub fn classify_presence(value: Option<f64>, thresholds: &PresenceThresholds) -> Band {
    let v = value.unwrap_or(0.0);
    if v == 0.0 {
        Band::Low
    } else if v < thresholds.high {
        Band::Medium
    } else {
        Band::High
    }
}

/// Raw attribute values for one substation, as read from the table.
///
/// `None` marks a missing or non-numeric cell; classification coerces it
/// to 0 rather than propagating an unknown.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AttributeValues {
    pub power_draw: Option<f64>,
    pub residents: Option<f64>,
    pub node_score: Option<f64>,
    pub infrastructure: Option<f64>,
    pub commercial: Option<f64>,
}

/// The five band values derived for one substation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeBands {
    pub power_draw: Band,
    pub residents: Band,
    pub node_score: Band,
    pub infrastructure: Band,
    pub commercial: Band,
}

impl AttributeBands {
    /// Classifies all five attributes of one record.
    pub fn classify(values: &AttributeValues, thresholds: &ClassificationThresholds) -> Self {
        Self {
            power_draw: classify_range(values.power_draw, &thresholds.power_draw),
            residents: classify_range(values.residents, &thresholds.residents),
            node_score: classify_presence(values.node_score, &thresholds.node_score),
            infrastructure: classify_presence(values.infrastructure, &thresholds.infrastructure),
            commercial: classify_range(values.commercial, &thresholds.commercial),
        }
    }

    /// All five bands at the given level, mainly useful in tests and
    /// sensitivity analysis.
    pub fn uniform(band: Band) -> Self {
        Self {
            power_draw: band,
            residents: band,
            node_score: band,
            infrastructure: band,
            commercial: band,
        }
    }
}
