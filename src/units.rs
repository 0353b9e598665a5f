//! Unit categories and their static unit tables
//!
//! Length and weight units are defined by a scale factor relative to a base
//! unit (meter, kilogram). Temperature has no shared base unit because its
//! scales have different zero points, so it gets its own enum instead.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::converter::ConversionError;

/// Kind of quantity being converted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Length,
    Weight,
    Temperature,
}

impl Category {
    /// All categories in display order
    pub fn all() -> [Category; 3] {
        [Category::Length, Category::Weight, Category::Temperature]
    }

    /// Unit names for this category, in display order
    pub fn units(&self) -> &'static [&'static str] {
        match self {
            Category::Length => LENGTH_UNITS.names(),
            Category::Weight => WEIGHT_UNITS.names(),
            Category::Temperature => TemperatureUnit::NAMES,
        }
    }

    /// The scale table backing this category, if it is a linear one
    pub fn table(&self) -> Option<&'static UnitTable> {
        match self {
            Category::Length => Some(&LENGTH_UNITS),
            Category::Weight => Some(&WEIGHT_UNITS),
            Category::Temperature => None,
        }
    }

    /// Reference unit for the category
    ///
    /// Temperature has no true base unit; Celsius is reported as the
    /// reference scale for listings only.
    pub fn base_unit(&self) -> &'static str {
        match self.table() {
            Some(table) => table.base_unit(),
            None => TemperatureUnit::Celsius.name(),
        }
    }

    /// Check whether `unit` belongs to this category
    pub fn contains(&self, unit: &str) -> bool {
        self.units().contains(&unit)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Length => write!(f, "Length"),
            Category::Weight => write!(f, "Weight"),
            Category::Temperature => write!(f, "Temperature"),
        }
    }
}

impl FromStr for Category {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Category::all()
            .into_iter()
            .find(|c| c.to_string().eq_ignore_ascii_case(s))
            .ok_or_else(|| ConversionError::UnknownCategory(s.to_string()))
    }
}

/// An ordered, immutable table of unit name -> factor relative to the base unit
#[derive(Debug)]
pub struct UnitTable {
    base: &'static str,
    names: &'static [&'static str],
    factors: &'static [f64],
}

impl UnitTable {
    /// Name of the unit whose factor is exactly 1
    pub fn base_unit(&self) -> &'static str {
        self.base
    }

    /// Unit names in display order
    pub fn names(&self) -> &'static [&'static str] {
        self.names
    }

    /// Scale factor for `unit`, or `None` if the unit is not in the table
    pub fn factor(&self, unit: &str) -> Option<f64> {
        self.names
            .iter()
            .position(|name| *name == unit)
            .map(|i| self.factors[i])
    }

    /// Iterate over `(name, factor)` pairs in display order
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, f64)> + '_ {
        self.names.iter().copied().zip(self.factors.iter().copied())
    }
}

/// Length units, base = meter
pub static LENGTH_UNITS: UnitTable = UnitTable {
    base: "Meter",
    names: &[
        "Kilometer",
        "Meter",
        "Centimeter",
        "Millimeter",
        "Mile",
        "Yard",
        "Foot",
        "Inch",
    ],
    factors: &[1000.0, 1.0, 0.01, 0.001, 1609.34, 0.9144, 0.3048, 0.0254],
};

/// Weight units, base = kilogram
pub static WEIGHT_UNITS: UnitTable = UnitTable {
    base: "Kilogram",
    names: &["Tonne", "Kilogram", "Gram", "Milligram", "Pound", "Ounce"],
    factors: &[1000.0, 1.0, 0.001, 0.000001, 0.453592, 0.0283495],
};

/// Temperature scales
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemperatureUnit {
    Celsius,
    Fahrenheit,
    Kelvin,
}

impl TemperatureUnit {
    pub const NAMES: &'static [&'static str] = &["Celsius", "Fahrenheit", "Kelvin"];

    pub fn name(&self) -> &'static str {
        match self {
            TemperatureUnit::Celsius => "Celsius",
            TemperatureUnit::Fahrenheit => "Fahrenheit",
            TemperatureUnit::Kelvin => "Kelvin",
        }
    }

    /// Look up a scale by its exact name
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "Celsius" => Some(TemperatureUnit::Celsius),
            "Fahrenheit" => Some(TemperatureUnit::Fahrenheit),
            "Kelvin" => Some(TemperatureUnit::Kelvin),
            _ => None,
        }
    }
}

impl fmt::Display for TemperatureUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
