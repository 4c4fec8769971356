//! Configuration loading and discovery for `binvis.toml`
//!
//! Provides functions to find, load, and merge configuration.

use super::schema::BinvisConfig;
use crate::color::MetricName;
use crate::schemes::SchemeName;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Name of the configuration file searched for.
pub const CONFIG_FILE: &str = "binvis.toml";

/// Configuration loading error
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// File I/O error
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error
    #[error("Failed to parse binvis.toml: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error
    #[error("Config validation failed:\n{}", .0.iter().map(|e| format!("  - {}", e)).collect::<Vec<_>>().join("\n"))]
    Validation(Vec<String>),
}

/// CLI arguments that can override config values
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub scheme: Option<SchemeName>,
    pub curve_size: Option<u32>,
    pub scale: Option<u8>,
    pub start: Option<usize>,
    pub end: Option<usize>,
    pub closest: Option<bool>,
    pub metric: Option<MetricName>,
    pub seed: Option<u64>,
}

/// Find binvis.toml by walking up from the current working directory.
///
/// Search order:
/// 1. Walk up from current directory looking for binvis.toml
/// 2. Check XDG_CONFIG_HOME/binvis/binvis.toml (or ~/.config/binvis/binvis.toml)
pub fn find_config() -> Option<PathBuf> {
    if let Ok(cwd) = env::current_dir() {
        if let Some(path) = find_config_from(cwd) {
            return Some(path);
        }
    }

    find_xdg_config()
}

/// Find binvis.toml in XDG config directory.
pub fn find_xdg_config() -> Option<PathBuf> {
    let xdg_config = env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|_| env::var("HOME").map(|h| PathBuf::from(h).join(".config")))
        .ok()?;

    let config_path = xdg_config.join("binvis").join(CONFIG_FILE);
    if config_path.exists() {
        Some(config_path)
    } else {
        None
    }
}

/// Find binvis.toml by walking up from a specific directory.
pub fn find_config_from(start: PathBuf) -> Option<PathBuf> {
    let mut current = start;

    loop {
        let config_path = current.join(CONFIG_FILE);
        if config_path.exists() {
            return Some(config_path);
        }

        if !current.pop() {
            return None;
        }
    }
}

/// Load configuration from a binvis.toml file.
///
/// If a path is provided, loads from that file. Otherwise, uses `find_config()`
/// to locate the config file. If no config file is found, returns the default
/// configuration.
pub fn load_config(path: Option<&Path>) -> Result<BinvisConfig, ConfigError> {
    let config_path = match path {
        Some(p) => Some(p.to_path_buf()),
        None => find_config(),
    };

    match config_path {
        Some(p) => {
            tracing::debug!(path = %p.display(), "loading config");
            load_config_file(&p)
        }
        None => Ok(BinvisConfig::default()),
    }
}

/// Load configuration from a specific file path.
fn load_config_file(path: &Path) -> Result<BinvisConfig, ConfigError> {
    let contents = fs::read_to_string(path)?;
    let config: BinvisConfig = toml::from_str(&contents)?;
    validated(config)
}

fn validated(config: BinvisConfig) -> Result<BinvisConfig, ConfigError> {
    let errors = config.validate();
    if !errors.is_empty() {
        return Err(ConfigError::Validation(errors.into_iter().map(|e| e.to_string()).collect()));
    }
    Ok(config)
}

/// Merge CLI overrides into a configuration and re-validate it.
///
/// CLI arguments take precedence over config file values.
pub fn merge_cli_overrides(
    mut config: BinvisConfig,
    overrides: &CliOverrides,
) -> Result<BinvisConfig, ConfigError> {
    if let Some(scheme) = overrides.scheme {
        config.render.scheme = scheme;
    }
    if let Some(size) = overrides.curve_size {
        config.render.curve_size = Some(size);
    }
    if let Some(scale) = overrides.scale {
        config.render.scale = scale;
    }
    if let Some(start) = overrides.start {
        config.region.start = start;
    }
    if let Some(end) = overrides.end {
        config.region.end = Some(end);
    }
    if let Some(closest) = overrides.closest {
        config.decode.closest = closest;
    }
    if let Some(metric) = overrides.metric {
        config.decode.metric = metric;
    }
    if let Some(seed) = overrides.seed {
        config.decode.seed = Some(seed);
    }

    validated(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;
    use tempfile::TempDir;

    fn write_config(dir: &Path, contents: &[u8]) -> PathBuf {
        let config_path = dir.join(CONFIG_FILE);
        File::create(&config_path)
            .expect("should create config file")
            .write_all(contents)
            .expect("should write config content");
        config_path
    }

    #[test]
    fn test_find_config_in_current_dir() {
        let temp = TempDir::new().expect("should create temp dir");
        let config_path = write_config(temp.path(), b"[render]\nscheme = \"detail\"");

        let found = find_config_from(temp.path().to_path_buf());
        assert_eq!(found, Some(config_path));
    }

    #[test]
    fn test_find_config_in_parent_dir() {
        let temp = TempDir::new().expect("should create temp dir");
        let config_path = write_config(temp.path(), b"");

        let subdir = temp.path().join("dumps").join("firmware");
        fs::create_dir_all(&subdir).expect("should create subdirectories");

        let found = find_config_from(subdir);
        assert_eq!(found, Some(config_path));
    }

    #[test]
    fn test_find_config_not_found() {
        let temp = TempDir::new().expect("should create temp dir");
        let found = find_config_from(temp.path().to_path_buf());
        assert_eq!(found, None);
    }

    #[test]
    fn test_load_config_from_file() {
        let temp = TempDir::new().expect("should create temp dir");
        let config_path = write_config(
            temp.path(),
            br#"
[render]
scheme = "magnitude"
curve_size = 64

[decode]
closest = true
"#,
        );

        let config = load_config(Some(&config_path)).expect("should load valid config");
        assert_eq!(config.render.scheme, SchemeName::Magnitude);
        assert_eq!(config.render.curve_size, Some(64));
        assert!(config.decode.closest);
    }

    #[test]
    fn test_load_config_missing_file_errors() {
        let temp = TempDir::new().expect("should create temp dir");
        let result = load_config(Some(&temp.path().join("nonexistent.toml")));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[test]
    fn test_load_config_invalid_toml() {
        let temp = TempDir::new().expect("should create temp dir");
        let config_path = write_config(temp.path(), b"this is not valid toml {{{");

        let result = load_config(Some(&config_path));
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_load_config_validation_error() {
        let temp = TempDir::new().expect("should create temp dir");
        let config_path = write_config(temp.path(), b"[render]\ncurve_size = 3");

        match load_config(Some(&config_path)) {
            Err(ConfigError::Validation(errors)) => {
                assert_eq!(errors.len(), 1);
                assert!(errors[0].contains("render.curve_size"));
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_merge_cli_overrides() {
        let overrides = CliOverrides {
            scheme: Some(SchemeName::Detail),
            curve_size: Some(32),
            end: Some(2048),
            closest: Some(true),
            seed: Some(9),
            ..Default::default()
        };
        let config = merge_cli_overrides(BinvisConfig::default(), &overrides).unwrap();
        assert_eq!(config.render.scheme, SchemeName::Detail);
        assert_eq!(config.render.curve_size, Some(32));
        assert_eq!(config.region.start, 0);
        assert_eq!(config.region.end, Some(2048));
        assert!(config.decode.closest);
        assert_eq!(config.decode.seed, Some(9));
    }

    #[test]
    fn test_merge_cli_overrides_revalidates() {
        let overrides = CliOverrides { curve_size: Some(300), ..Default::default() };
        let result = merge_cli_overrides(BinvisConfig::default(), &overrides);
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }
}
