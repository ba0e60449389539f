//! The batch pipeline: load table, classify, score, write back.
//!
//! A single pass over the table. Band columns are written under their
//! display names, overwriting a same-named column in place, and the
//! normalized index lands in its own column. The `weighted_sum` and raw
//! index intermediates never become columns.

use std::path::Path;

use encoding_rs::Encoding;

use crate::classify::{AttributeBands, AttributeValues};
use crate::config::{ClassificationThresholds, ColumnsConfig, GridcritConfig, IndexWeights};
use crate::errors::GridcritError;
use crate::index::weighted_index;
use crate::table::Table;

/// Parses one table cell into a numeric value.
///
/// Empty, non-numeric and non-finite cells all count as missing; the
/// classifier coerces missing to 0.
pub fn parse_cell(cell: &str) -> Option<f64> {
    let trimmed = cell.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// The configured transform: column names, thresholds and weights.
#[derive(Debug, Clone)]
pub struct Transform {
    pub columns: ColumnsConfig,
    pub thresholds: ClassificationThresholds,
    pub weights: IndexWeights,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            columns: ColumnsConfig::default(),
            thresholds: ClassificationThresholds::default(),
            weights: IndexWeights::default(),
        }
    }
}

impl Transform {
    /// Builds the transform from loaded configuration, filling unset
    /// sections with the study defaults.
    pub fn from_config(config: &GridcritConfig) -> Self {
        Self {
            columns: config.columns.clone().unwrap_or_default(),
            thresholds: config.thresholds.unwrap_or_default(),
            weights: config.weights.unwrap_or_default(),
        }
    }

    /// Classifies and scores every row, then writes the five band columns
    /// and the normalized index column into the table.
    ///
    /// Fails before touching the table if any source column is absent. All
    /// raw values are read before any column is overwritten, so the default
    /// name collision between band and source columns cannot skew a single
    /// run (it only bites when output is fed back as input, see the
    /// `ColumnsConfig` docs).
    pub fn apply(&self, table: &mut Table) -> Result<(), GridcritError> {
        let power_draw = table.require_column(&self.columns.power_draw)?;
        let residents = table.require_column(&self.columns.residents)?;
        let node_score = table.require_column(&self.columns.node_score)?;
        let infrastructure = table.require_column(&self.columns.infrastructure)?;
        let commercial = table.require_column(&self.columns.commercial)?;

        let rows = table.row_count();
        let mut power_draw_bands = Vec::with_capacity(rows);
        let mut residents_bands = Vec::with_capacity(rows);
        let mut node_score_bands = Vec::with_capacity(rows);
        let mut infrastructure_bands = Vec::with_capacity(rows);
        let mut commercial_bands = Vec::with_capacity(rows);
        let mut index_values = Vec::with_capacity(rows);

        for row in 0..rows {
            let values = AttributeValues {
                power_draw: parse_cell(table.cell(row, power_draw)),
                residents: parse_cell(table.cell(row, residents)),
                node_score: parse_cell(table.cell(row, node_score)),
                infrastructure: parse_cell(table.cell(row, infrastructure)),
                commercial: parse_cell(table.cell(row, commercial)),
            };
            let bands = AttributeBands::classify(&values, &self.thresholds);
            let score = weighted_index(&bands, &self.weights);

            power_draw_bands.push(bands.power_draw.to_string());
            residents_bands.push(bands.residents.to_string());
            node_score_bands.push(bands.node_score.to_string());
            infrastructure_bands.push(bands.infrastructure.to_string());
            commercial_bands.push(bands.commercial.to_string());
            index_values.push(score.normalized.to_string());
        }

        table.set_column(&self.columns.power_draw_band, power_draw_bands);
        table.set_column(&self.columns.residents_band, residents_bands);
        table.set_column(&self.columns.node_score_band, node_score_bands);
        table.set_column(&self.columns.infrastructure_band, infrastructure_bands);
        table.set_column(&self.columns.commercial_band, commercial_bands);
        table.set_column(&self.columns.index, index_values);

        Ok(())
    }
}

/// Runs the full batch: read, transform, write. Returns the row count.
pub fn run(
    input: &Path,
    output: &Path,
    delimiter: u8,
    encoding: &'static Encoding,
    transform: &Transform,
) -> Result<usize, GridcritError> {
    let mut table = Table::read(input, delimiter, encoding)?;
    transform.apply(&mut table)?;
    log::info!(
        "scored {} substations from {}",
        table.row_count(),
        input.display()
    );
    table.write(output, delimiter, encoding)?;
    Ok(table.row_count())
}
