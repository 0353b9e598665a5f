//! Configuration file support for unit-converter
//!
//! This module handles parsing `.converter.toml` files that customize the
//! web server, result formatting and chart style.
//!
//! ## Configuration File Format
//!
//! ```toml
//! # .converter.toml
//!
//! [server]
//! # Port for the web UI
//! port = 8501
//! # Open the browser when the server starts
//! open_browser = true
//! # API endpoint advertised to the frontend (enables CORS)
//! # api_endpoint = "http://localhost:8501"
//!
//! [display]
//! # Decimal places of the headline result
//! precision = 4
//!
//! [chart]
//! height = 400
//! source_color = "#1f77b4"
//! converted_color = "#2ecc71"
//!
//! [conversion]
//! # Return the input unchanged for unknown temperature units instead of failing
//! lenient_temperature = false
//! ```

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::chart::{CHART_HEIGHT, CONVERTED_COLOR, ChartStyle, SOURCE_COLOR};

/// Errors that can occur when loading configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Invalid color '{0}': expected #rgb or #rrggbb")]
    InvalidColor(String),
}

/// Web server section
#[derive(Debug, Clone, Deserialize)]
pub struct ServerSection {
    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_open_browser")]
    pub open_browser: bool,

    /// API endpoint URL for a separately deployed frontend
    #[serde(default)]
    pub api_endpoint: Option<String>,
}

fn default_port() -> u16 {
    8501
}

fn default_open_browser() -> bool {
    true
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            port: default_port(),
            open_browser: default_open_browser(),
            api_endpoint: None,
        }
    }
}

/// Result formatting section
#[derive(Debug, Clone, Deserialize)]
pub struct DisplaySection {
    /// Decimal places of the headline result
    #[serde(default = "default_precision")]
    pub precision: usize,
}

fn default_precision() -> usize {
    4
}

impl Default for DisplaySection {
    fn default() -> Self {
        Self {
            precision: default_precision(),
        }
    }
}

/// Chart style section
#[derive(Debug, Clone, Deserialize)]
pub struct ChartSection {
    #[serde(default = "default_height")]
    pub height: u32,

    #[serde(default = "default_source_color")]
    pub source_color: String,

    #[serde(default = "default_converted_color")]
    pub converted_color: String,
}

fn default_height() -> u32 {
    CHART_HEIGHT
}

fn default_source_color() -> String {
    SOURCE_COLOR.to_string()
}

fn default_converted_color() -> String {
    CONVERTED_COLOR.to_string()
}

impl Default for ChartSection {
    fn default() -> Self {
        Self {
            height: default_height(),
            source_color: default_source_color(),
            converted_color: default_converted_color(),
        }
    }
}

/// Conversion behavior section
#[derive(Debug, Clone, Deserialize, Default)]
pub struct ConversionSection {
    /// Pass unknown temperature units through unchanged
    #[serde(default)]
    pub lenient_temperature: bool,
}

/// Root configuration structure
#[derive(Debug, Clone, Deserialize, Default)]
pub struct ConverterConfig {
    #[serde(default)]
    pub server: ServerSection,

    #[serde(default)]
    pub display: DisplaySection,

    #[serde(default)]
    pub chart: ChartSection,

    #[serde(default)]
    pub conversion: ConversionSection,
}

impl ConverterConfig {
    /// Parse and validate configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: ConverterConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check values serde cannot check on its own
    pub fn validate(&self) -> Result<(), ConfigError> {
        for color in [&self.chart.source_color, &self.chart.converted_color] {
            if !is_hex_color(color) {
                return Err(ConfigError::InvalidColor(color.clone()));
            }
        }
        Ok(())
    }

    /// Chart style derived from the `[chart]` section
    pub fn chart_style(&self) -> ChartStyle {
        ChartStyle {
            source_color: self.chart.source_color.clone(),
            converted_color: self.chart.converted_color.clone(),
            height: self.chart.height,
        }
    }
}

fn is_hex_color(s: &str) -> bool {
    match s.strip_prefix('#') {
        Some(hex) => matches!(hex.len(), 3 | 6) && hex.chars().all(|c| c.is_ascii_hexdigit()),
        None => false,
    }
}

/// Load configuration starting from the given path
///
/// If `path` is a config file it is read directly. Otherwise `.converter.toml`
/// is searched for in the directory and its parents. Missing files yield the
/// default configuration.
pub fn load_config(path: &Path) -> Result<ConverterConfig, ConfigError> {
    let config_path = if path.is_file() {
        Some(path.to_path_buf())
    } else {
        find_config_file(path)
    };

    match config_path {
        Some(path) => {
            let content = fs::read_to_string(&path)?;
            ConverterConfig::from_toml(&content)
        }
        None => Ok(ConverterConfig::default()),
    }
}

/// Find the config file by searching up the directory tree
pub fn find_config_file(start_path: &Path) -> Option<PathBuf> {
    let config_names = [".converter.toml", "converter.toml"];

    let mut current = start_path.to_path_buf();

    loop {
        for name in &config_names {
            let config_path = current.join(name);
            if config_path.is_file() {
                return Some(config_path);
            }
        }

        // Move to parent directory
        if let Some(parent) = current.parent() {
            current = parent.to_path_buf();
        } else {
            break;
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ConverterConfig::default();
        assert_eq!(config.server.port, 8501);
        assert!(config.server.open_browser);
        assert!(config.server.api_endpoint.is_none());
        assert_eq!(config.display.precision, 4);
        assert_eq!(config.chart.height, 400);
        assert_eq!(config.chart.source_color, "#1f77b4");
        assert!(!config.conversion.lenient_temperature);
        assert_eq!(config.chart_style(), ChartStyle::default());
    }

    #[test]
    fn test_parse_config() {
        let toml = r##"
            [server]
            port = 9000
            open_browser = false

            [display]
            precision = 2

            [chart]
            source_color = "#abc"

            [conversion]
            lenient_temperature = true
        "##;

        let config = ConverterConfig::from_toml(toml).unwrap();
        assert_eq!(config.server.port, 9000);
        assert!(!config.server.open_browser);
        assert_eq!(config.display.precision, 2);
        assert_eq!(config.chart.source_color, "#abc");
        assert_eq!(config.chart.converted_color, "#2ecc71");
        assert_eq!(config.chart.height, 400);
        assert!(config.conversion.lenient_temperature);
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = ConverterConfig::from_toml("").unwrap();
        assert_eq!(config.server.port, 8501);
        assert_eq!(config.display.precision, 4);
    }

    #[test]
    fn test_invalid_color() {
        let toml = r#"
            [chart]
            converted_color = "green"
        "#;

        let err = ConverterConfig::from_toml(toml).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidColor(c) if c == "green"));
        assert!(!is_hex_color("#12345"));
        assert!(!is_hex_color("#gggggg"));
        assert!(is_hex_color("#A0b1C2"));
    }

    #[test]
    fn test_parse_error() {
        let err = ConverterConfig::from_toml("[server]\nport = \"high\"").unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[test]
    fn test_load_config_searches_parents() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join(".converter.toml"),
            "[display]\nprecision = 6\n",
        )
        .unwrap();
        let nested = dir.path().join("a").join("b");
        fs::create_dir_all(&nested).unwrap();

        let config = load_config(&nested).unwrap();
        assert_eq!(config.display.precision, 6);
    }

    #[test]
    fn test_load_config_from_file_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.toml");
        fs::write(&path, "[chart]\nheight = 300\n").unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.chart.height, 300);
    }
}
