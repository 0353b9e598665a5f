//! Conversion engine
//!
//! Length and weight go through their base unit:
//! `value * table[from] / table[to]`. Temperature is affine and dispatched
//! on the `(from, to)` pair. Nothing here rounds; rounding is a display
//! concern handled by [`crate::report`] and [`crate::chart`].

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::units::{Category, TemperatureUnit, UnitTable};

/// Errors produced by the conversion engine
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConversionError {
    #[error("Unknown {category} unit: '{unit}' (expected one of: {})", .category.units().join(", "))]
    UnknownUnit { category: Category, unit: String },

    #[error("Unknown category: '{0}' (expected Length, Weight or Temperature)")]
    UnknownCategory(String),
}

/// A single conversion to perform
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionRequest {
    pub category: Category,
    pub value: f64,
    pub from_unit: String,
    pub to_unit: String,
}

/// The outcome of a [`ConversionRequest`]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConversionResult {
    pub request: ConversionRequest,
    pub value: f64,
}

impl ConversionRequest {
    pub fn new(
        category: Category,
        value: f64,
        from_unit: impl Into<String>,
        to_unit: impl Into<String>,
    ) -> Self {
        Self {
            category,
            value,
            from_unit: from_unit.into(),
            to_unit: to_unit.into(),
        }
    }

    /// Run the conversion, rejecting unknown units in every category
    pub fn execute(&self) -> Result<ConversionResult, ConversionError> {
        let value = convert(self.category, self.value, &self.from_unit, &self.to_unit)?;
        Ok(self.result(value))
    }

    /// Run the conversion with the legacy temperature passthrough enabled
    pub fn execute_lenient(&self) -> Result<ConversionResult, ConversionError> {
        let value = convert_lenient(self.category, self.value, &self.from_unit, &self.to_unit)?;
        Ok(self.result(value))
    }

    fn result(&self, value: f64) -> ConversionResult {
        ConversionResult {
            request: self.clone(),
            value,
        }
    }
}

/// Convert `value` from `from_unit` to `to_unit` within `category`
pub fn convert(
    category: Category,
    value: f64,
    from_unit: &str,
    to_unit: &str,
) -> Result<f64, ConversionError> {
    match category.table() {
        Some(table) => convert_linear(category, table, value, from_unit, to_unit),
        None => {
            let from = parse_temperature(from_unit)?;
            let to = parse_temperature(to_unit)?;
            Ok(convert_temperature(value, from, to))
        }
    }
}

/// Like [`convert`], but an unrecognized temperature unit returns `value`
/// unchanged instead of failing. Length and weight still fail on unknown units.
pub fn convert_lenient(
    category: Category,
    value: f64,
    from_unit: &str,
    to_unit: &str,
) -> Result<f64, ConversionError> {
    if category != Category::Temperature {
        return convert(category, value, from_unit, to_unit);
    }

    match (
        TemperatureUnit::parse(from_unit),
        TemperatureUnit::parse(to_unit),
    ) {
        (Some(from), Some(to)) => Ok(convert_temperature(value, from, to)),
        _ => Ok(value),
    }
}

fn convert_linear(
    category: Category,
    table: &UnitTable,
    value: f64,
    from_unit: &str,
    to_unit: &str,
) -> Result<f64, ConversionError> {
    let lookup = |unit: &str| {
        table.factor(unit).ok_or_else(|| ConversionError::UnknownUnit {
            category,
            unit: unit.to_string(),
        })
    };

    let from = lookup(from_unit)?;
    let to = lookup(to_unit)?;
    if from_unit == to_unit {
        return Ok(value);
    }
    Ok(value * from / to)
}

fn parse_temperature(unit: &str) -> Result<TemperatureUnit, ConversionError> {
    TemperatureUnit::parse(unit).ok_or_else(|| ConversionError::UnknownUnit {
        category: Category::Temperature,
        unit: unit.to_string(),
    })
}

/// Convert between two temperature scales
pub fn convert_temperature(value: f64, from: TemperatureUnit, to: TemperatureUnit) -> f64 {
    use TemperatureUnit::*;

    match (from, to) {
        (Celsius, Fahrenheit) => value * 9.0 / 5.0 + 32.0,
        (Celsius, Kelvin) => value + 273.15,
        (Fahrenheit, Celsius) => (value - 32.0) * 5.0 / 9.0,
        (Fahrenheit, Kelvin) => (value - 32.0) * 5.0 / 9.0 + 273.15,
        (Kelvin, Celsius) => value - 273.15,
        (Kelvin, Fahrenheit) => (value - 273.15) * 9.0 / 5.0 + 32.0,
        (Celsius, Celsius) | (Fahrenheit, Fahrenheit) | (Kelvin, Kelvin) => value,
    }
}
