//! # Prediction Model
//!
//! The value objects passed into and out of the estimator.
//!
//! Both are plain `Copy` records built fresh for every evaluation. Nothing
//! here has identity or a lifecycle beyond a single call.

use std::fmt;
use std::str::FromStr;

use crate::bounds::{self, Field};
use crate::error::InputError;

/// Biological sex. Selects which VO2max regression applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Sex {
    #[default]
    Male,
    Female,
}

impl FromStr for Sex {
    type Err = InputError;

    /// Accepts `male`, `m`, `男`, `female`, `f` and `女` (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "male" | "m" | "男" => Ok(Sex::Male),
            "female" | "f" | "女" => Ok(Sex::Female),
            other => Err(InputError::UnknownSex(other.to_string())),
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sex::Male => f.write_str("male"),
            Sex::Female => f.write_str("female"),
        }
    }
}

/// Everything the estimator needs for one evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PredictionInput {
    /// Years.
    pub age: u32,
    /// Kilograms.
    pub weight: f64,
    /// Centimeters.
    pub height: f64,
    /// Ambient temperature in degrees Celsius.
    pub temperature: f64,
    /// Ambient relative humidity in percent.
    pub humidity: f64,
    pub sex: Sex,
}

impl PredictionInput {
    /// Checks every numeric field against [`bounds`], in form order.
    ///
    /// Returns the first violation found.
    pub fn validate(&self) -> Result<(), InputError> {
        for field in Field::ALL {
            field.check(self.value_of(field))?;
        }
        Ok(())
    }

    /// Numeric value of `field`, with age widened to `f64`.
    pub fn value_of(&self, field: Field) -> f64 {
        match field {
            Field::Age => f64::from(self.age),
            Field::Weight => self.weight,
            Field::Height => self.height,
            Field::Temperature => self.temperature,
            Field::Humidity => self.humidity,
        }
    }
}

impl Default for PredictionInput {
    /// The starting values of the original form.
    fn default() -> Self {
        Self {
            age: bounds::AGE.default as u32,
            weight: bounds::WEIGHT.default,
            height: bounds::HEIGHT.default,
            temperature: bounds::TEMPERATURE.default,
            humidity: bounds::HUMIDITY.default,
            sex: Sex::default(),
        }
    }
}

/// Estimator result. Derived, never stored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PredictionOutput {
    /// Beats per minute.
    pub heart_rate: f64,
    /// Breaths per minute.
    pub respiratory_rate: f64,
    /// Milliliters of oxygen per minute.
    pub vo2max: f64,
    /// Predicted heart rate lies above 80% of the age-predicted maximum.
    pub in_anaerobic_zone: bool,
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
