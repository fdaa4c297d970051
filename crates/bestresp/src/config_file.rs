//! Optional YAML sweep configuration
//!
//! ```yaml
//! grid:
//!   start: 0.0001
//!   end: 1.0
//!   count: 1000
//! sweep:
//!   start: 0.0001
//!   end: 1.0001
//!   count: 100
//! ```
//!
//! Either section may be omitted; missing sections keep their defaults.

use std::fs;
use std::path::Path;

use bestresp_core::{SweepConfig, SweepError};

/// Error types for config loading
#[derive(Debug)]
pub enum ConfigError {
    Io(String),
    Parse(String),
    Invalid(SweepError),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(msg) => write!(f, "IO error: {}", msg),
            ConfigError::Parse(msg) => write!(f, "Parse error: {}", msg),
            ConfigError::Invalid(e) => write!(f, "Invalid config: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Invalid(e) => Some(e),
            _ => None,
        }
    }
}

/// Parse and validate a sweep config from YAML text
pub fn parse_config(yaml: &str) -> Result<SweepConfig, ConfigError> {
    let config: SweepConfig = serde_saphyr::from_str(yaml)
        .map_err(|e| ConfigError::Parse(format!("Failed to parse config: {}", e)))?;
    config.validate().map_err(ConfigError::Invalid)?;
    Ok(config)
}

/// Load the sweep config, falling back to the defaults when no path is given
pub fn load_config(path: Option<&Path>) -> Result<SweepConfig, ConfigError> {
    let Some(path) = path else {
        return Ok(SweepConfig::default());
    };

    let content = fs::read_to_string(path).map_err(|e| {
        ConfigError::Io(format!("Failed to read {}: {}", path.display(), e))
    })?;

    let config = parse_config(&content)?;
    tracing::info!(path = %path.display(), ?config, "Loaded sweep config");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bestresp_core::GridSpec;
    use tempfile::tempdir;

    #[test]
    fn test_no_path_gives_defaults() {
        assert_eq!(load_config(None).unwrap(), SweepConfig::default());
    }

    #[test]
    fn test_parse_full_config() {
        let yaml = "grid:\n  start: 0.0\n  end: 2.0\n  count: 21\nsweep:\n  start: 0.5\n  end: 1.5\n  count: 3\n";
        let config = parse_config(yaml).unwrap();
        assert_eq!(config.grid, GridSpec::new(0.0, 2.0, 21));
        assert_eq!(config.sweep, GridSpec::new(0.5, 1.5, 3));
    }

    #[test]
    fn test_parse_partial_config_keeps_defaults() {
        let yaml = "sweep:\n  start: 0.0001\n  end: 1.0001\n  count: 10\n";
        let config = parse_config(yaml).unwrap();
        assert_eq!(config.grid, GridSpec::e_i_default());
        assert_eq!(config.sweep.count, 10);
    }

    #[test]
    fn test_parse_rejects_invalid_grid() {
        let yaml = "grid:\n  start: 1.0\n  end: 0.0\n  count: 10\n";
        assert!(matches!(parse_config(yaml), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_parse_rejects_malformed_yaml() {
        assert!(matches!(
            parse_config("grid: [not, a, grid]\n"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("sweep.yaml");
        fs::write(&path, "grid:\n  start: 0.0\n  end: 1.0\n  count: 5\n").unwrap();

        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.grid, GridSpec::new(0.0, 1.0, 5));
        assert_eq!(config.sweep, GridSpec::e_j_default());
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempdir().unwrap();
        let result = load_config(Some(&dir.path().join("missing.yaml")));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }
}
