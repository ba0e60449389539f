use serde::{Deserialize, Serialize};

/// AHP-derived importance weights for the five criteria.
///
/// The weights are used in ratio form only (`Σ S_i·w_i / Σ S_max·w_i`), so
/// they do not need to sum to 1; they only need to be positive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IndexWeights {
    #[serde(default = "default_power_draw_weight")]
    pub power_draw: f64,

    #[serde(default = "default_residents_weight")]
    pub residents: f64,

    #[serde(default = "default_node_score_weight")]
    pub node_score: f64,

    #[serde(default = "default_infrastructure_weight")]
    pub infrastructure: f64,

    #[serde(default = "default_commercial_weight")]
    pub commercial: f64,
}

impl Default for IndexWeights {
    fn default() -> Self {
        Self {
            power_draw: default_power_draw_weight(),
            residents: default_residents_weight(),
            node_score: default_node_score_weight(),
            infrastructure: default_infrastructure_weight(),
            commercial: default_commercial_weight(),
        }
    }
}

impl IndexWeights {
    pub fn sum(&self) -> f64 {
        self.power_draw + self.residents + self.node_score + self.infrastructure + self.commercial
    }

    /// Validates that every weight is a positive finite number.
    pub fn validate(&self) -> Result<(), String> {
        let weights = [
            ("power_draw", self.power_draw),
            ("residents", self.residents),
            ("node_score", self.node_score),
            ("infrastructure", self.infrastructure),
            ("commercial", self.commercial),
        ];

        for (name, value) in weights {
            if !value.is_finite() || value <= 0.0 {
                return Err(format!(
                    "{} weight {} is invalid (must be a positive number)",
                    name, value
                ));
            }
        }
        Ok(())
    }
}

// AHP pairwise-comparison weights after Saaty.
fn default_power_draw_weight() -> f64 {
    0.062
}
fn default_residents_weight() -> f64 {
    0.250
}
fn default_node_score_weight() -> f64 {
    0.118
}
fn default_infrastructure_weight() -> f64 {
    0.537
}
fn default_commercial_weight() -> f64 {
    0.033
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_weights_sum_to_one() {
        assert!((IndexWeights::default().sum() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn default_weights_are_valid() {
        assert!(IndexWeights::default().validate().is_ok());
    }

    #[test]
    fn zero_and_negative_weights_are_rejected() {
        let mut w = IndexWeights::default();
        w.infrastructure = 0.0;
        assert!(w.validate().is_err());
        w.infrastructure = -0.5;
        assert!(w.validate().is_err());
    }

    #[test]
    fn non_finite_weights_are_rejected() {
        let mut w = IndexWeights::default();
        w.residents = f64::NAN;
        assert!(w.validate().is_err());
    }
}
