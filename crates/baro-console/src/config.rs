use std::path::Path;

use baro_types::GaugeSettings;
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: String,
        source: toml::de::Error,
    },
}

#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    /// Initial state of the demo gauge.
    pub gauge: GaugeSettings,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct ServerConfig {
    pub bind: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: "0.0.0.0".into(),
            port: 3000,
        }
    }
}

impl ServerConfig {
    pub fn address(&self) -> String {
        format!("{}:{}", self.bind, self.port)
    }
}

impl Config {
    /// Config used when no file is given: the demo gauge on the default port.
    pub fn demo() -> Self {
        Self {
            server: ServerConfig::default(),
            gauge: GaugeSettings::demo(),
        }
    }

    pub fn from_toml(path: &str, contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|source| ConfigError::Parse {
            path: path.to_string(),
            source,
        })
    }

    pub fn read(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml(&path.display().to_string(), &contents)
    }
}

/// Reads `path`, falling back to [`Config::demo`] with a warning.
pub fn load(path: &str) -> Config {
    Config::read(path).unwrap_or_else(|e| {
        tracing::warn!("{e}, using defaults");
        Config::demo()
    })
}

/// Value following `--config`, or the example file shipped with the repo.
pub fn config_path(args: &[String]) -> String {
    args.iter()
        .position(|a| a == "--config")
        .and_then(|idx| args.get(idx + 1))
        .cloned()
        .unwrap_or_else(|| "config.example.toml".into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use baro_types::{SizePreset, TileFillStyle};

    #[test]
    fn gauge_section_overrides_defaults_field_by_field() {
        let config = Config::from_toml(
            "test.toml",
            r##"
            [server]
            port = 8080

            [gauge]
            primary = 12.5
            size = "l"

            [gauge.options]
            threshold_red = 100.0
            enable_inner_arc = true

            [gauge.tile_arc]
            tiles = 20
            fill_style = "outlined"
            "##,
        )
        .unwrap();

        assert_eq!(config.server.address(), "0.0.0.0:8080");
        assert_eq!(config.gauge.primary, 12.5);
        assert_eq!(config.gauge.secondary, None);
        assert_eq!(config.gauge.size, SizePreset::L);
        assert_eq!(config.gauge.options.threshold_red, 100.0);
        assert_eq!(config.gauge.options.threshold_yellow, 60.0);
        assert!(config.gauge.options.enable_inner_arc);
        assert_eq!(config.gauge.tile_arc.tiles, 20);
        assert_eq!(config.gauge.tile_arc.fill_style, TileFillStyle::Outlined);
    }

    #[test]
    fn parse_errors_name_the_file() {
        let err = Config::from_toml("broken.toml", "[server\nport = ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().starts_with("failed to parse broken.toml"));
    }

    #[test]
    fn missing_file_falls_back_to_demo() {
        let config = load("/nonexistent/baro-console.toml");
        assert_eq!(config, Config::demo());
        assert!(matches!(
            Config::read("/nonexistent/baro-console.toml"),
            Err(ConfigError::Read { .. })
        ));
    }

    #[test]
    fn config_flag_is_optional() {
        let args = |list: &[&str]| list.iter().map(|s| s.to_string()).collect::<Vec<_>>();
        assert_eq!(config_path(&args(&["baro-console"])), "config.example.toml");
        assert_eq!(
            config_path(&args(&["baro-console", "--config", "prod.toml"])),
            "prod.toml"
        );
        assert_eq!(config_path(&args(&["baro-console", "--config"])), "config.example.toml");
    }
}
