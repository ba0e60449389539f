use anyhow::Result;
use std::path::PathBuf;

use crate::config::{self, IoConfig};
use crate::table;
use crate::transform::{self, Transform};

/// Resolved inputs for the score command: CLI values override the config
/// file, which overrides the study defaults.
pub struct ScoreConfig {
    pub path: Option<PathBuf>,
    pub delimiter: Option<char>,
    pub encoding: Option<String>,
    pub output: Option<PathBuf>,
    pub config: Option<PathBuf>,
}

pub fn run_score(cfg: ScoreConfig) -> Result<()> {
    let file_config = match &cfg.config {
        Some(path) => config::load_config_file(path)?,
        None => config::load_config(),
    };

    let io = file_config.io.clone().unwrap_or_else(IoConfig::default);
    let input = cfg.path.unwrap_or(io.path);
    // in-place overwrite unless an explicit output path redirects it
    let output = cfg.output.unwrap_or_else(|| input.clone());
    let delimiter = table::delimiter_byte(cfg.delimiter.unwrap_or(io.delimiter))?;
    let encoding = table::resolve_encoding(&cfg.encoding.unwrap_or(io.encoding))?;

    let transform = Transform::from_config(&file_config);
    transform::run(&input, &output, delimiter, encoding, &transform)?;

    println!("Results saved as new columns in: {}", output.display());
    Ok(())
}
