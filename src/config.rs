//! Configuration management with TOML file support.
//!
//! Merges settings from three sources (highest precedence first):
//! 1. CLI flags
//! 2. Config file (`~/.config/ari/config.toml` or `$XDG_CONFIG_HOME/ari/config.toml`)
//! 3. Built-in defaults

use std::path::PathBuf;

use serde::Deserialize;

use crate::cli::{Cli, ColorMode};
use crate::error::AriError;

/// Runtime configuration merged from defaults, config file, and CLI arguments.
///
/// Built once at startup and passed by reference; nothing in the engine
/// mutates it.
#[derive(Debug, Clone)]
pub struct Config {
    /// Color output mode (auto/always/never).
    pub color_mode: ColorMode,
    /// Diagnostic verbosity: 0 errors only, 1 default, 2 all output.
    pub verbosity: u8,
    /// Keep numbers exactly as they appear in the input.
    #[allow(dead_code)] // Parsed but not yet consulted by the renderer
    pub raw_numbers: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            color_mode: ColorMode::Auto,
            verbosity: 1,
            raw_numbers: false,
        }
    }
}

impl Config {
    /// Build a [`Config`] from CLI arguments, loading the config file if present.
    ///
    /// Merge precedence: CLI flags > config file > defaults.
    pub fn from_cli(cli: &Cli) -> Result<Self, AriError> {
        let mut config = Self::default();

        let config_path = cli.config.clone().unwrap_or_else(Self::default_config_path);
        if config_path.exists() {
            let file_config = FileConfig::load(&config_path)?;
            config.apply_file_config(file_config);
        }

        if let Some(color) = cli.color {
            config.color_mode = color;
        }
        if let Some(verbosity) = cli.verbosity_override() {
            config.verbosity = verbosity;
        }
        if cli.raw_numbers {
            config.raw_numbers = true;
        }

        Ok(config)
    }

    /// Default config file path: `$XDG_CONFIG_HOME/ari/config.toml` or `~/.config/ari/config.toml`.
    fn default_config_path() -> PathBuf {
        if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME") {
            PathBuf::from(xdg).join("ari").join("config.toml")
        } else if let Some(home) = std::env::var_os("HOME") {
            PathBuf::from(home)
                .join(".config")
                .join("ari")
                .join("config.toml")
        } else {
            PathBuf::from(".config/ari/config.toml")
        }
    }

    /// Apply settings from a parsed config file.
    fn apply_file_config(&mut self, file: FileConfig) {
        if let Some(color) = file.color {
            self.color_mode = match color.as_str() {
                "always" => ColorMode::Always,
                "never" => ColorMode::Never,
                _ => ColorMode::Auto,
            };
        }

        if let Some(verbosity) = file.verbosity {
            self.verbosity = verbosity.min(2);
        }

        if let Some(raw) = file.raw_numbers {
            self.raw_numbers = raw;
        }
    }
}

/// Config file structure (TOML deserialization).
#[derive(Debug, Deserialize)]
struct FileConfig {
    color: Option<String>,
    verbosity: Option<u8>,
    raw_numbers: Option<bool>,
}

impl FileConfig {
    fn load(path: &PathBuf) -> Result<Self, AriError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            AriError::Config(format!("cannot read config file {}: {e}", path.display()))
        })?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.color_mode, ColorMode::Auto);
        assert_eq!(config.verbosity, 1);
        assert!(!config.raw_numbers);
    }

    #[test]
    fn test_file_config_parse() {
        let toml_str = r#"
            color = "never"
            verbosity = 2
            raw_numbers = true
        "#;

        let file_config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(file_config.color.as_deref(), Some("never"));
        assert_eq!(file_config.verbosity, Some(2));
        assert_eq!(file_config.raw_numbers, Some(true));
    }

    #[test]
    fn test_apply_file_config() {
        let mut config = Config::default();
        config.apply_file_config(FileConfig {
            color: Some("always".to_string()),
            verbosity: Some(0),
            raw_numbers: Some(true),
        });
        assert_eq!(config.color_mode, ColorMode::Always);
        assert_eq!(config.verbosity, 0);
        assert!(config.raw_numbers);
    }

    #[test]
    fn test_apply_file_config_clamps_verbosity() {
        let mut config = Config::default();
        config.apply_file_config(FileConfig {
            color: None,
            verbosity: Some(9),
            raw_numbers: None,
        });
        assert_eq!(config.verbosity, 2);
    }

    #[test]
    fn test_unknown_color_falls_back_to_auto() {
        let mut config = Config::default();
        config.apply_file_config(FileConfig {
            color: Some("sometimes".to_string()),
            verbosity: None,
            raw_numbers: None,
        });
        assert_eq!(config.color_mode, ColorMode::Auto);
    }
}
