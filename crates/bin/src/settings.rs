//! Locating and loading the validator configuration.

use edgarcheck::{ConfigError, ParseMode, ValidatorConfig};
use std::path::{Path, PathBuf};
use tracing::debug;

/// `<config_dir>/edgarcheck/config.toml`, if the platform has a config dir.
pub(crate) fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("edgarcheck").join("config.toml"))
}

/// Load the configuration.
///
/// An explicit path must exist. Without one, the default path is used when
/// the file exists, and built-in defaults otherwise.
pub(crate) fn load_config(explicit: Option<&Path>) -> Result<ValidatorConfig, ConfigError> {
    if let Some(path) = explicit {
        debug!(path = %path.display(), "loading config");
        return ValidatorConfig::load(path);
    }

    match default_config_path() {
        Some(path) if path.is_file() => {
            debug!(path = %path.display(), "loading config");
            ValidatorConfig::load(&path)
        }
        _ => Ok(ValidatorConfig::default()),
    }
}

/// Apply command-line overrides on top of the loaded configuration.
pub(crate) fn apply_overrides(mut config: ValidatorConfig, lenient: bool) -> ValidatorConfig {
    if lenient {
        config.mode = ParseMode::Lenient;
    }
    config
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_path_shape() {
        if let Some(path) = default_config_path() {
            assert!(path.ends_with("edgarcheck/config.toml"));
        }
    }

    #[test]
    fn test_explicit_missing_path_is_error() {
        let result = load_config(Some(Path::new("/nonexistent/edgarcheck/config.toml")));
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }

    #[test]
    fn test_lenient_override() {
        let config = apply_overrides(ValidatorConfig::default(), true);
        assert_eq!(config.mode, ParseMode::Lenient);
        let config = apply_overrides(ValidatorConfig::default(), false);
        assert_eq!(config.mode, ParseMode::Strict);
    }
}
