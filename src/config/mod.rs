//! Configuration for the criticality scorer.
//!
//! Everything the transform needs beyond the table itself lives here: file
//! location and format, column names, classification thresholds and index
//! weights. All sections are optional in `.gridcrit.toml`; missing values
//! fall back to the defaults of the reference study.

pub mod loader;
pub mod thresholds;
pub mod weights;

pub use loader::{load_config, load_config_file};
pub use thresholds::{ClassificationThresholds, PresenceThresholds, RangeThresholds};
pub use weights::IndexWeights;

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure for gridcrit.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct GridcritConfig {
    /// Input file location and format.
    #[serde(default)]
    pub io: Option<IoConfig>,

    /// Column names consumed and produced.
    #[serde(default)]
    pub columns: Option<ColumnsConfig>,

    /// Classification thresholds per attribute.
    #[serde(default)]
    pub thresholds: Option<ClassificationThresholds>,

    /// AHP index weights.
    #[serde(default)]
    pub weights: Option<IndexWeights>,
}

/// File location and format of the substation table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IoConfig {
    /// Path of the table; overwritten in place unless `--output` redirects.
    #[serde(default = "default_path")]
    pub path: PathBuf,

    /// Field delimiter, a single ASCII character.
    #[serde(default = "default_delimiter")]
    pub delimiter: char,

    /// Text encoding label as understood by the WHATWG encoding registry
    /// (e.g. "latin-1", "windows-1252", "utf-8").
    #[serde(default = "default_encoding")]
    pub encoding: String,
}

impl Default for IoConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
            delimiter: default_delimiter(),
            encoding: default_encoding(),
        }
    }
}

fn default_path() -> PathBuf {
    PathBuf::from("criticality.csv")
}

fn default_delimiter() -> char {
    ';'
}

fn default_encoding() -> String {
    "latin-1".to_string()
}

/// Column names of the substation table.
///
/// The `*_band` names are the display names the derived band columns are
/// written under. With the defaults, four of them shadow the source columns
/// ("Einwohner", "NKB", "Infrastruktur", "Gewerbe"), exactly like the
/// reference implementation: the band overwrites the raw column in place.
/// Feeding such an output file into a second run re-classifies band values
/// as raw attributes; configure distinct band names if the raw columns must
/// survive.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnsConfig {
    #[serde(default = "default_power_draw_column")]
    pub power_draw: String,

    #[serde(default = "default_residents_column")]
    pub residents: String,

    #[serde(default = "default_node_score_column")]
    pub node_score: String,

    #[serde(default = "default_infrastructure_column")]
    pub infrastructure: String,

    #[serde(default = "default_commercial_column")]
    pub commercial: String,

    #[serde(default = "default_power_draw_band_column")]
    pub power_draw_band: String,

    #[serde(default = "default_residents_band_column")]
    pub residents_band: String,

    #[serde(default = "default_node_score_band_column")]
    pub node_score_band: String,

    #[serde(default = "default_infrastructure_band_column")]
    pub infrastructure_band: String,

    #[serde(default = "default_commercial_band_column")]
    pub commercial_band: String,

    /// Name of the final normalized index column.
    #[serde(default = "default_index_column")]
    pub index: String,
}

impl Default for ColumnsConfig {
    fn default() -> Self {
        Self {
            power_draw: default_power_draw_column(),
            residents: default_residents_column(),
            node_score: default_node_score_column(),
            infrastructure: default_infrastructure_column(),
            commercial: default_commercial_column(),
            power_draw_band: default_power_draw_band_column(),
            residents_band: default_residents_band_column(),
            node_score_band: default_node_score_band_column(),
            infrastructure_band: default_infrastructure_band_column(),
            commercial_band: default_commercial_band_column(),
            index: default_index_column(),
        }
    }
}

fn default_power_draw_column() -> String {
    "Übertragungsleistung Bezug".to_string()
}
fn default_residents_column() -> String {
    "Einwohner".to_string()
}
fn default_node_score_column() -> String {
    "NKB".to_string()
}
fn default_infrastructure_column() -> String {
    "Infrastruktur".to_string()
}
fn default_commercial_column() -> String {
    "Gewerbe".to_string()
}
fn default_power_draw_band_column() -> String {
    "Leistung".to_string()
}
fn default_residents_band_column() -> String {
    "Einwohner".to_string()
}
fn default_node_score_band_column() -> String {
    "NKB".to_string()
}
fn default_infrastructure_band_column() -> String {
    "Infrastruktur".to_string()
}
fn default_commercial_band_column() -> String {
    "Gewerbe".to_string()
}
fn default_index_column() -> String {
    "II_N".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_toml_gives_all_defaults() {
        let config: GridcritConfig = toml::from_str("").unwrap();
        assert!(config.io.is_none());
        assert!(config.columns.is_none());
        assert!(config.thresholds.is_none());
        assert!(config.weights.is_none());
    }

    #[test]
    fn partial_sections_fill_from_defaults() {
        let config: GridcritConfig = toml::from_str(
            r#"
            [io]
            path = "data/substations.csv"

            [columns]
            residents = "Haushalte"
            "#,
        )
        .unwrap();

        let io = config.io.unwrap();
        assert_eq!(io.path, PathBuf::from("data/substations.csv"));
        assert_eq!(io.delimiter, ';');
        assert_eq!(io.encoding, "latin-1");

        let columns = config.columns.unwrap();
        assert_eq!(columns.residents, "Haushalte");
        assert_eq!(columns.power_draw, "Übertragungsleistung Bezug");
        assert_eq!(columns.index, "II_N");
    }

    #[test]
    fn default_band_names_shadow_source_columns() {
        // Documented collision: the reference implementation overwrites the
        // raw columns with their band values.
        let columns = ColumnsConfig::default();
        assert_eq!(columns.residents_band, columns.residents);
        assert_eq!(columns.node_score_band, columns.node_score);
        assert_eq!(columns.infrastructure_band, columns.infrastructure);
        assert_eq!(columns.commercial_band, columns.commercial);
        assert_ne!(columns.power_draw_band, columns.power_draw);
    }
}
