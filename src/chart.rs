//! Chart description for the before/after comparison
//!
//! Produces a JSON-serializable, renderer-agnostic two-bar chart: the
//! original value under the source unit and the converted value under the
//! target unit. The web UI and the ASCII renderer in [`crate::report`] both
//! consume this shape.

use serde::Serialize;

/// Title shown above every comparison chart
pub const CHART_TITLE: &str = "Conversion Visualization";

/// Default color of the source (left) bar
pub const SOURCE_COLOR: &str = "#1f77b4";

/// Default color of the converted (right) bar
pub const CONVERTED_COLOR: &str = "#2ecc71";

/// Default chart height in pixels
pub const CHART_HEIGHT: u32 = 400;

const TRANSPARENT: &str = "rgba(0,0,0,0)";

/// Visual settings that may be overridden by configuration
#[derive(Debug, Clone, PartialEq)]
pub struct ChartStyle {
    pub source_color: String,
    pub converted_color: String,
    pub height: u32,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            source_color: SOURCE_COLOR.to_string(),
            converted_color: CONVERTED_COLOR.to_string(),
            height: CHART_HEIGHT,
        }
    }
}

/// Title placement, in fractions of the plot area
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartTitle {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub x_anchor: String,
    pub y_anchor: String,
}

/// Declarative two-bar chart
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSpec {
    /// Bar categories: `[from_unit, to_unit]`
    pub categories: [String; 2],
    /// Bar heights: `[original_value, converted_value]`
    pub values: [f64; 2],
    /// Text shown on each bar, 2 decimal places
    pub labels: [String; 2],
    /// One color per bar position
    pub colors: [String; 2],
    pub text_position: String,
    pub title: ChartTitle,
    pub show_legend: bool,
    pub plot_background: String,
    pub height: u32,
}

/// Build the comparison chart using the default style
pub fn build_chart_spec(
    original_value: f64,
    converted_value: f64,
    from_unit: &str,
    to_unit: &str,
) -> ChartSpec {
    build_chart_spec_with_style(
        original_value,
        converted_value,
        from_unit,
        to_unit,
        &ChartStyle::default(),
    )
}

/// Build the comparison chart with custom colors and height
pub fn build_chart_spec_with_style(
    original_value: f64,
    converted_value: f64,
    from_unit: &str,
    to_unit: &str,
    style: &ChartStyle,
) -> ChartSpec {
    ChartSpec {
        categories: [from_unit.to_string(), to_unit.to_string()],
        values: [original_value, converted_value],
        labels: [
            format_label(original_value),
            format_label(converted_value),
        ],
        colors: [style.source_color.clone(), style.converted_color.clone()],
        text_position: "auto".to_string(),
        title: ChartTitle {
            text: CHART_TITLE.to_string(),
            x: 0.5,
            y: 0.9,
            x_anchor: "center".to_string(),
            y_anchor: "top".to_string(),
        },
        show_legend: false,
        plot_background: TRANSPARENT.to_string(),
        height: style.height,
    }
}

/// Format a bar label with 2 decimal places
pub fn format_label(value: f64) -> String {
    format!("{:.2}", value)
}
