use std::fs;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use anyhow::Context;

use super::weights::IndexWeights;
use super::GridcritConfig;

/// Pure function to read config file contents.
pub(crate) fn read_config_file(path: &Path) -> Result<String, std::io::Error> {
    let file = fs::File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Pure function to parse and validate config from a TOML string.
///
/// Invalid weights warn and revert to the study defaults; configuration
/// problems never abort a run.
pub fn parse_and_validate_config(contents: &str) -> Result<GridcritConfig, String> {
    let mut config = toml::from_str::<GridcritConfig>(contents)
        .map_err(|e| format!("Failed to parse .gridcrit.toml: {}", e))?;

    if let Some(ref weights) = config.weights {
        if let Err(e) = weights.validate() {
            log::warn!("Invalid index weights: {}. Using defaults.", e);
            config.weights = Some(IndexWeights::default());
        }
    }

    Ok(config)
}

/// Pure function to try loading config from a specific path.
pub(crate) fn try_load_config_from_path(config_path: &Path) -> Option<GridcritConfig> {
    let contents = match read_config_file(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            handle_read_error(config_path, &e);
            return None;
        }
    };

    match parse_and_validate_config(&contents) {
        Ok(config) => {
            log::debug!("Loaded config from {}", config_path.display());
            Some(config)
        }
        Err(e) => {
            log::warn!("{}. Using defaults.", e);
            None
        }
    }
}

/// Handle file read errors with appropriate logging.
pub(crate) fn handle_read_error(config_path: &Path, error: &std::io::Error) {
    // Only log actual errors, not "file not found"
    if error.kind() != std::io::ErrorKind::NotFound {
        log::warn!(
            "Failed to read config file {}: {}",
            config_path.display(),
            error
        );
    }
}

/// Pure function to generate directory ancestors up to a depth limit.
pub(crate) fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// Loads an explicitly named config file; unlike discovery, a missing or
/// malformed file here is an error the caller asked for.
pub fn load_config_file(path: &Path) -> anyhow::Result<GridcritConfig> {
    let contents = read_config_file(path)
        .with_context(|| format!("failed to read config file {}", path.display()))?;
    parse_and_validate_config(&contents).map_err(anyhow::Error::msg)
}

/// Discovers `.gridcrit.toml` in the current directory or its ancestors.
pub fn load_config() -> GridcritConfig {
    const MAX_TRAVERSAL_DEPTH: usize = 10;

    let current = match std::env::current_dir() {
        Ok(dir) => dir,
        Err(e) => {
            log::warn!(
                "Failed to get current directory: {}. Using default config.",
                e
            );
            return GridcritConfig::default();
        }
    };

    directory_ancestors(current, MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(".gridcrit.toml"))
        .find_map(|path| try_load_config_from_path(&path))
        .unwrap_or_else(|| {
            log::debug!(
                "No config found after checking {} directories. Using default config.",
                MAX_TRAVERSAL_DEPTH
            );
            GridcritConfig::default()
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_weights_revert_to_defaults() {
        let config = parse_and_validate_config(
            "[weights]\npower_draw = -1.0\nresidents = 0.25\nnode_score = 0.118\ninfrastructure = 0.537\ncommercial = 0.033\n",
        )
        .unwrap();
        assert_eq!(config.weights, Some(IndexWeights::default()));
    }

    #[test]
    fn malformed_toml_is_an_error() {
        assert!(parse_and_validate_config("[weights\n").is_err());
    }

    #[test]
    fn ancestors_stop_at_depth_limit() {
        let dirs: Vec<_> = directory_ancestors(PathBuf::from("/a/b/c/d/e"), 3).collect();
        assert_eq!(dirs.len(), 3);
        assert_eq!(dirs[0], PathBuf::from("/a/b/c/d/e"));
        assert_eq!(dirs[2], PathBuf::from("/a/b/c"));
    }

    #[test]
    fn explicit_config_file_must_exist() {
        assert!(load_config_file(Path::new("/nonexistent/.gridcrit.toml")).is_err());
    }
}
