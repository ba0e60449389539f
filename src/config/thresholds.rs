use serde::{Deserialize, Serialize};

/// Thresholds for a range attribute: `< low` is band 1, `[low, high)` band 2,
/// `>= high` band 3.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RangeThresholds {
    pub low: f64,
    pub high: f64,
}

/// Threshold for a presence attribute: exactly 0 is band 1, `(0, high)`
/// band 2, `>= high` band 3.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PresenceThresholds {
    pub high: f64,
}

/// Classification thresholds for all five attributes.
///
/// The defaults carry the calibration of the reference study; overriding
/// them in `.gridcrit.toml` supports sensitivity analysis without a rebuild.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClassificationThresholds {
    /// Power draw in kVA.
    #[serde(default = "default_power_draw_thresholds")]
    pub power_draw: RangeThresholds,

    /// Residents served by the substation.
    #[serde(default = "default_residents_thresholds")]
    pub residents: RangeThresholds,

    /// Grid-node importance score (NKB).
    #[serde(default = "default_node_score_thresholds")]
    pub node_score: PresenceThresholds,

    /// Count of critical infrastructure supplied.
    #[serde(default = "default_infrastructure_thresholds")]
    pub infrastructure: PresenceThresholds,

    /// Count of commercial units supplied.
    #[serde(default = "default_commercial_thresholds")]
    pub commercial: RangeThresholds,
}

impl Default for ClassificationThresholds {
    fn default() -> Self {
        Self {
            power_draw: default_power_draw_thresholds(),
            residents: default_residents_thresholds(),
            node_score: default_node_score_thresholds(),
            infrastructure: default_infrastructure_thresholds(),
            commercial: default_commercial_thresholds(),
        }
    }
}

fn default_power_draw_thresholds() -> RangeThresholds {
    RangeThresholds {
        low: 83.80,
        high: 185.53,
    }
}

fn default_residents_thresholds() -> RangeThresholds {
    RangeThresholds {
        low: 130.0,
        high: 274.0,
    }
}

fn default_node_score_thresholds() -> PresenceThresholds {
    PresenceThresholds { high: 0.5 }
}

fn default_infrastructure_thresholds() -> PresenceThresholds {
    PresenceThresholds { high: 2.0 }
}

fn default_commercial_thresholds() -> RangeThresholds {
    RangeThresholds { low: 4.0, high: 13.0 }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_study_calibration() {
        let t = ClassificationThresholds::default();
        assert_eq!(t.power_draw.low, 83.80);
        assert_eq!(t.power_draw.high, 185.53);
        assert_eq!(t.residents.low, 130.0);
        assert_eq!(t.residents.high, 274.0);
        assert_eq!(t.node_score.high, 0.5);
        assert_eq!(t.infrastructure.high, 2.0);
        assert_eq!(t.commercial.low, 4.0);
        assert_eq!(t.commercial.high, 13.0);
    }

    #[test]
    fn partial_toml_falls_back_to_defaults() {
        let t: ClassificationThresholds =
            toml::from_str("[power_draw]\nlow = 100.0\nhigh = 200.0\n").unwrap();
        assert_eq!(t.power_draw.low, 100.0);
        assert_eq!(t.residents, ClassificationThresholds::default().residents);
    }
}
