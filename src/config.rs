//! Configuration file support
//!
//! Solver settings are resolved in three layers: built-in defaults, an optional TOML
//! file, then command-line overrides.
//!
//! ```toml
//! rows = 5
//! cols = 5
//! min-length = 4
//! max-length = 7
//! collect-dead-ends = false
//!
//! [letter-points]
//! q = 10
//! ```

use crate::core::{GridShape, LetterPoints, ScoreError, ShapeError};
use crate::solver::{ConfigError, DeadEndPolicy, SolverConfig};
use log::debug;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Error type for loading and resolving configuration
#[derive(Debug, Error)]
pub enum ConfigFileError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid grid size: {0}")]
    Shape(#[from] ShapeError),

    #[error("Invalid letter points: {0}")]
    Points(#[from] ScoreError),

    #[error("Invalid word lengths: {0}")]
    Lengths(#[from] ConfigError),
}

/// Contents of a configuration file; every key is optional
#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct ConfigFile {
    pub rows: Option<usize>,
    pub cols: Option<usize>,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub collect_dead_ends: Option<bool>,
    #[serde(default)]
    pub letter_points: BTreeMap<char, u32>,
}

impl ConfigFile {
    /// Read and parse a configuration file
    ///
    /// # Errors
    /// Returns `ConfigFileError::Io` if the file cannot be read and
    /// `ConfigFileError::Parse` if it is not valid for this schema.
    pub fn load(path: &Path) -> Result<Self, ConfigFileError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigFileError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let file = toml::from_str(&content).map_err(|source| ConfigFileError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("loaded config from {}", path.display());
        Ok(file)
    }
}

/// Settings given on the command line, applied over the file
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub rows: Option<usize>,
    pub cols: Option<usize>,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub collect_dead_ends: bool,
}

/// Build the solver configuration from defaults, file and overrides
///
/// # Errors
/// Returns `ConfigFileError` if the merged values do not form a valid configuration.
pub fn resolve(
    file: Option<&ConfigFile>,
    overrides: &ConfigOverrides,
) -> Result<SolverConfig, ConfigFileError> {
    let file = file.cloned().unwrap_or_default();

    let rows = overrides
        .rows
        .or(file.rows)
        .unwrap_or(SolverConfig::DEFAULT_ROWS);
    let cols = overrides
        .cols
        .or(file.cols)
        .unwrap_or(SolverConfig::DEFAULT_COLS);
    let min_length = overrides
        .min_length
        .or(file.min_length)
        .unwrap_or(SolverConfig::DEFAULT_MIN_LENGTH);
    let max_length = overrides
        .max_length
        .or(file.max_length)
        .unwrap_or(SolverConfig::DEFAULT_MAX_LENGTH);
    let dead_ends = if overrides.collect_dead_ends || file.collect_dead_ends.unwrap_or(false) {
        DeadEndPolicy::Collect
    } else {
        DeadEndPolicy::Skip
    };

    let shape = GridShape::new(rows, cols)?;
    let letter_points = LetterPoints::from_map(&file.letter_points)?;
    let config = SolverConfig::new(shape, min_length, max_length, letter_points)?
        .with_dead_ends(dead_ends);

    debug!(
        "resolved config: {shape} grid, lengths {min_length}..={max_length}, {dead_ends:?} dead ends"
    );
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn parse(text: &str) -> ConfigFile {
        toml::from_str(text).unwrap()
    }

    #[test]
    fn defaults_without_file_or_overrides() {
        let config = resolve(None, &ConfigOverrides::default()).unwrap();
        assert_eq!(config, SolverConfig::default());
    }

    #[test]
    fn file_values_apply() {
        let file = parse(
            r#"
            rows = 4
            cols = 6
            min-length = 3
            max-length = 5
            collect-dead-ends = true

            [letter-points]
            q = 10
            "#,
        );
        let config = resolve(Some(&file), &ConfigOverrides::default()).unwrap();
        assert_eq!(config.shape(), GridShape::new(4, 6).unwrap());
        assert_eq!(config.min_length(), 3);
        assert_eq!(config.max_length(), 5);
        assert_eq!(config.dead_ends(), DeadEndPolicy::Collect);
        assert_eq!(config.letter_points().points("q"), Ok(10));
        assert_eq!(config.letter_points().points("a"), Ok(1));
    }

    #[test]
    fn overrides_win_over_file() {
        let file = parse("rows = 4\nmin-length = 3");
        let overrides = ConfigOverrides {
            rows: Some(6),
            max_length: Some(6),
            ..ConfigOverrides::default()
        };
        let config = resolve(Some(&file), &overrides).unwrap();
        assert_eq!(config.shape(), GridShape::new(6, 5).unwrap());
        assert_eq!(config.min_length(), 3);
        assert_eq!(config.max_length(), 6);
        assert_eq!(config.dead_ends(), DeadEndPolicy::Skip);
    }

    #[test]
    fn collect_dead_ends_flag_overrides_file() {
        let file = parse("collect-dead-ends = false");
        let overrides = ConfigOverrides {
            collect_dead_ends: true,
            ..ConfigOverrides::default()
        };
        let config = resolve(Some(&file), &overrides).unwrap();
        assert_eq!(config.dead_ends(), DeadEndPolicy::Collect);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(toml::from_str::<ConfigFile>("depth = 3").is_err());
    }

    #[test]
    fn invalid_values_are_reported() {
        let zero_rows = ConfigOverrides {
            rows: Some(0),
            ..ConfigOverrides::default()
        };
        assert!(matches!(
            resolve(None, &zero_rows),
            Err(ConfigFileError::Shape(_))
        ));

        let inverted = ConfigOverrides {
            min_length: Some(8),
            ..ConfigOverrides::default()
        };
        assert!(matches!(
            resolve(None, &inverted),
            Err(ConfigFileError::Lengths(_))
        ));

        let huge = ConfigOverrides {
            rows: Some(usize::MAX),
            cols: Some(2),
            ..ConfigOverrides::default()
        };
        assert!(matches!(
            resolve(None, &huge),
            Err(ConfigFileError::Shape(ShapeError::TooLarge { .. }))
        ));

        let file = parse("[letter-points]\ne = 0");
        assert!(matches!(
            resolve(Some(&file), &ConfigOverrides::default()),
            Err(ConfigFileError::Points(_))
        ));
    }

    #[test]
    fn load_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "max-length = 6").unwrap();

        let loaded = ConfigFile::load(file.path()).unwrap();
        assert_eq!(loaded.max_length, Some(6));
    }

    #[test]
    fn load_reports_parse_errors() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "rows = \"five\"").unwrap();

        assert!(matches!(
            ConfigFile::load(file.path()),
            Err(ConfigFileError::Parse { .. })
        ));
    }
}
