// Export modules for library usage
pub mod classify;
pub mod cli;
pub mod commands;
pub mod config;
pub mod errors;
pub mod index;
pub mod table;
pub mod transform;

// Re-export commonly used types
pub use crate::classify::{
    classify_presence, classify_range, AttributeBands, AttributeValues, Band,
};
pub use crate::config::{
    ClassificationThresholds, ColumnsConfig, GridcritConfig, IndexWeights, IoConfig,
    PresenceThresholds, RangeThresholds,
};
pub use crate::errors::GridcritError;
pub use crate::index::{weighted_index, IndexScore, INDEX_MAX, INDEX_MIN, MAX_BAND_SCORE};
pub use crate::table::Table;
pub use crate::transform::{parse_cell, Transform};
