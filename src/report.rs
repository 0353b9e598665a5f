//! Output formatting for conversion results
//!
//! Generates human-readable text (with an optional terminal bar chart) and
//! machine-readable JSON.

use std::io::{self, Write};

use serde::Serialize;

use crate::chart::ChartSpec;
use crate::converter::ConversionResult;
use crate::units::Category;

/// Width in characters of the longest bar in the terminal chart
const BAR_WIDTH: usize = 40;

/// Format the one-line result, e.g. `1 Kilometer = 1000.0000 Meter`
pub fn format_headline(result: &ConversionResult, precision: usize) -> String {
    format!(
        "{} {} = {:.*} {}",
        result.request.value, result.request.from_unit, precision, result.value, result.request.to_unit
    )
}

/// Write a text report for a conversion
pub fn write_text<W: Write>(
    writer: &mut W,
    result: &ConversionResult,
    chart: Option<&ChartSpec>,
    precision: usize,
) -> io::Result<()> {
    writeln!(writer, "Conversion Result ({}):", result.request.category)?;
    writeln!(writer, "  {}", format_headline(result, precision))?;

    if let Some(chart) = chart {
        writeln!(writer)?;
        write_chart(writer, chart)?;
    }

    Ok(())
}

/// Render a two-bar chart with block characters
pub fn write_chart<W: Write>(writer: &mut W, chart: &ChartSpec) -> io::Result<()> {
    writeln!(writer, "{}", chart.title.text)?;
    writeln!(writer, "{}", "─".repeat(chart.title.text.chars().count()))?;

    let max = chart.values.iter().fold(0.0_f64, |acc, v| acc.max(v.abs()));
    let name_width = chart.categories.iter().map(|c| c.len()).max().unwrap_or(0);

    for ((category, value), label) in chart
        .categories
        .iter()
        .zip(chart.values.iter())
        .zip(chart.labels.iter())
    {
        let len = bar_length(*value, max);
        let sign = if *value < 0.0 { "-" } else { "" };
        writeln!(
            writer,
            "{:>width$} │{}{} {}",
            category,
            sign,
            "█".repeat(len),
            label,
            width = name_width
        )?;
    }

    Ok(())
}

fn bar_length(value: f64, max: f64) -> usize {
    if max <= 0.0 || !value.is_finite() {
        return 0;
    }
    let len = (value.abs() / max * BAR_WIDTH as f64).round() as usize;
    // Keep non-zero values visible next to much larger ones
    if len == 0 && value != 0.0 { 1 } else { len }
}

/// JSON document emitted by `convert --json`
#[derive(Debug, Serialize)]
pub struct JsonOutput<'a> {
    pub category: String,
    pub value: f64,
    pub from_unit: &'a str,
    pub to_unit: &'a str,
    pub result: f64,
    pub headline: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chart: Option<&'a ChartSpec>,
}

impl<'a> JsonOutput<'a> {
    pub fn new(result: &'a ConversionResult, chart: Option<&'a ChartSpec>, precision: usize) -> Self {
        Self {
            category: result.request.category.to_string(),
            value: result.request.value,
            from_unit: &result.request.from_unit,
            to_unit: &result.request.to_unit,
            result: result.value,
            headline: format_headline(result, precision),
            chart,
        }
    }
}

/// Write a conversion as pretty-printed JSON
pub fn write_json<W: Write>(
    writer: &mut W,
    result: &ConversionResult,
    chart: Option<&ChartSpec>,
    precision: usize,
) -> io::Result<()> {
    let output = JsonOutput::new(result, chart, precision);
    serde_json::to_writer_pretty(&mut *writer, &output)?;
    writeln!(writer)
}

/// List the units of one category, or of all categories
pub fn write_units<W: Write>(writer: &mut W, category: Option<Category>) -> io::Result<()> {
    let categories: Vec<Category> = match category {
        Some(c) => vec![c],
        None => Category::all().to_vec(),
    };

    for (i, category) in categories.iter().enumerate() {
        if i > 0 {
            writeln!(writer)?;
        }
        writeln!(writer, "{}:", category)?;

        let base = category.base_unit();
        for unit in category.units() {
            match category.table().and_then(|t| t.factor(unit)) {
                Some(factor) if *unit == base => {
                    writeln!(writer, "  {:<12} {} (base unit)", unit, factor)?
                }
                Some(factor) => writeln!(writer, "  {:<12} {} {}", unit, factor, base)?,
                None => writeln!(writer, "  {}", unit)?,
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::build_chart_spec;
    use crate::converter::ConversionRequest;

    fn km_to_m() -> ConversionResult {
        ConversionRequest::new(Category::Length, 1.0, "Kilometer", "Meter")
            .execute()
            .unwrap()
    }

    #[test]
    fn test_format_headline() {
        assert_eq!(format_headline(&km_to_m(), 4), "1 Kilometer = 1000.0000 Meter");

        let result = ConversionRequest::new(Category::Weight, 1.0, "Pound", "Kilogram")
            .execute()
            .unwrap();
        assert_eq!(format_headline(&result, 4), "1 Pound = 0.4536 Kilogram");
        assert_eq!(format_headline(&result, 1), "1 Pound = 0.5 Kilogram");
    }

    #[test]
    fn test_write_text() {
        let result = km_to_m();
        let mut output = Vec::new();
        write_text(&mut output, &result, None, 4).unwrap();

        let output_str = String::from_utf8(output).unwrap();
        assert!(output_str.contains("Conversion Result (Length):"));
        assert!(output_str.contains("1 Kilometer = 1000.0000 Meter"));
        assert!(!output_str.contains("Conversion Visualization"));
    }

    #[test]
    fn test_write_text_with_chart() {
        let result = km_to_m();
        let chart = build_chart_spec(1.0, 1000.0, "Kilometer", "Meter");
        let mut output = Vec::new();
        write_text(&mut output, &result, Some(&chart), 4).unwrap();

        let output_str = String::from_utf8(output).unwrap();
        assert!(output_str.contains("Conversion Visualization"));
        assert!(output_str.contains("Kilometer │█ 1.00"));
        assert!(output_str.contains(&format!("    Meter │{} 1000.00", "█".repeat(40))));
    }

    #[test]
    fn test_bar_length() {
        assert_eq!(bar_length(1000.0, 1000.0), 40);
        assert_eq!(bar_length(500.0, 1000.0), 20);
        assert_eq!(bar_length(0.001, 1000.0), 1);
        assert_eq!(bar_length(0.0, 1000.0), 0);
        assert_eq!(bar_length(0.0, 0.0), 0);
        assert_eq!(bar_length(-40.0, 40.0), 40);
    }

    #[test]
    fn test_write_json() {
        let result = km_to_m();
        let chart = build_chart_spec(1.0, 1000.0, "Kilometer", "Meter");
        let mut output = Vec::new();
        write_json(&mut output, &result, Some(&chart), 4).unwrap();

        let json: serde_json::Value = serde_json::from_slice(&output).unwrap();
        assert_eq!(json["category"], "Length");
        assert_eq!(json["result"], 1000.0);
        assert_eq!(json["headline"], "1 Kilometer = 1000.0000 Meter");
        assert_eq!(json["chart"]["labels"][1], "1000.00");
    }

    #[test]
    fn test_write_json_without_chart() {
        let mut output = Vec::new();
        write_json(&mut output, &km_to_m(), None, 4).unwrap();

        let json: serde_json::Value = serde_json::from_slice(&output).unwrap();
        assert!(json.get("chart").is_none());
    }

    #[test]
    fn test_write_units() {
        let mut output = Vec::new();
        write_units(&mut output, Some(Category::Length)).unwrap();

        let output_str = String::from_utf8(output).unwrap();
        assert!(output_str.starts_with("Length:"));
        assert!(output_str.contains("Meter        1 (base unit)"));
        assert!(output_str.contains("Kilometer    1000 Meter"));
        assert!(!output_str.contains("Weight:"));

        let mut output = Vec::new();
        write_units(&mut output, None).unwrap();
        let output_str = String::from_utf8(output).unwrap();
        assert!(output_str.contains("Weight:"));
        assert!(output_str.contains("Temperature:\n  Celsius\n  Fahrenheit\n  Kelvin\n"));
    }
}
