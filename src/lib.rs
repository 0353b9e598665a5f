//! # unit-converter - Length, Weight and Temperature Conversion
//!
//! Converts values between units of the same category and describes the
//! result as a two-bar "before/after" chart.
//!
//! ## Usage
//!
//! ```bash
//! # Convert on the command line
//! unit-converter convert length 1 Kilometer Meter
//!
//! # Include a terminal chart, or emit JSON
//! unit-converter convert temperature 100 Celsius Fahrenheit --chart
//! unit-converter convert weight 1 Pound Kilogram --json
//!
//! # Start the web UI
//! unit-converter web
//! ```
//!
//! ## Conversion Rules
//!
//! Length and weight scale through a base unit (meter, kilogram):
//! ```text
//! result = value * factor[from] / factor[to]
//! ```
//!
//! Temperature is affine and uses a fixed formula per `(from, to)` pair.
//! Unknown units are rejected in every category.
//!
//! ```
//! use unit_converter::{Category, build_chart_spec, convert};
//!
//! let meters = convert(Category::Length, 1.0, "Kilometer", "Meter").unwrap();
//! assert_eq!(meters, 1000.0);
//!
//! let chart = build_chart_spec(1.0, meters, "Kilometer", "Meter");
//! assert_eq!(chart.labels, ["1.00", "1000.00"]);
//! ```

pub mod chart;
pub mod config;
pub mod converter;
pub mod report;
pub mod units;
pub mod web;

pub use chart::{ChartSpec, ChartStyle, ChartTitle, build_chart_spec, build_chart_spec_with_style};
pub use config::{ConfigError, ConverterConfig, load_config};
pub use converter::{
    ConversionError, ConversionRequest, ConversionResult, convert, convert_lenient,
    convert_temperature,
};
pub use report::{format_headline, write_chart, write_json, write_text, write_units};
pub use units::{Category, LENGTH_UNITS, TemperatureUnit, UnitTable, WEIGHT_UNITS};
