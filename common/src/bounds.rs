//! # Field Bounds
//!
//! Accepted range and form default of every numeric input.
//!
//! The estimator itself never checks these. They exist for the layer that
//! collects input, which is expected to reject anything outside them.

use std::fmt;

use crate::error::InputError;

/// Inclusive range plus the value a form starts from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldBounds {
    pub min: f64,
    pub max: f64,
    pub default: f64,
}

impl FieldBounds {
    pub const fn new(min: f64, max: f64, default: f64) -> Self {
        Self { min, max, default }
    }

    pub fn contains(&self, value: f64) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

pub const AGE: FieldBounds = FieldBounds::new(10.0, 80.0, 25.0);
pub const WEIGHT: FieldBounds = FieldBounds::new(30.0, 120.0, 70.0);
pub const HEIGHT: FieldBounds = FieldBounds::new(140.0, 200.0, 175.0);
pub const TEMPERATURE: FieldBounds = FieldBounds::new(15.0, 35.0, 25.0);
pub const HUMIDITY: FieldBounds = FieldBounds::new(20.0, 90.0, 50.0);

/// One numeric input of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// Years, whole numbers only.
    Age,
    /// Kilograms.
    Weight,
    /// Centimeters.
    Height,
    /// Degrees Celsius.
    Temperature,
    /// Relative humidity, percent.
    Humidity,
}

impl Field {
    /// Form order.
    pub const ALL: [Field; 5] = [
        Field::Age,
        Field::Weight,
        Field::Height,
        Field::Temperature,
        Field::Humidity,
    ];

    pub const fn bounds(self) -> FieldBounds {
        match self {
            Field::Age => AGE,
            Field::Weight => WEIGHT,
            Field::Height => HEIGHT,
            Field::Temperature => TEMPERATURE,
            Field::Humidity => HUMIDITY,
        }
    }

    /// Returns `value` unchanged if it lies within the field's bounds.
    ///
    /// `NaN` never does.
    pub fn check(self, value: f64) -> Result<f64, InputError> {
        let bounds = self.bounds();
        if bounds.contains(value) {
            Ok(value)
        } else {
            Err(InputError::OutOfRange {
                field: self,
                value,
                min: bounds.min,
                max: bounds.max,
            })
        }
    }

    /// Parses user text into a value within bounds.
    ///
    /// [`Field::Age`] only accepts whole numbers.
    pub fn parse(self, raw: &str) -> Result<f64, InputError> {
        let trimmed = raw.trim();
        let invalid = || InputError::InvalidNumber {
            field: self,
            raw: trimmed.to_string(),
        };

        let value = match self {
            Field::Age => f64::from(trimmed.parse::<u32>().map_err(|_| invalid())?),
            _ => trimmed.parse::<f64>().map_err(|_| invalid())?,
        };

        self.check(value)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::Age => "age",
            Field::Weight => "weight",
            Field::Height => "height",
            Field::Temperature => "temperature",
            Field::Humidity => "humidity",
        };
        f.write_str(name)
    }
}

/// Parses an age answer into whole years within bounds.
pub fn parse_age(raw: &str) -> Result<u32, InputError> {
    // Field::parse already rejects fractions, so the cast is lossless.
    Field::Age.parse(raw).map(|years| years as u32)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
