use thiserror::Error;

use crate::bounds::Field;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum InputError {
    #[error("{field} must be within {min}..={max}, got {value}")]
    OutOfRange {
        field: Field,
        value: f64,
        min: f64,
        max: f64,
    },
    #[error("invalid number for {field}: '{raw}'")]
    InvalidNumber { field: Field, raw: String },
    #[error("unknown sex '{0}', expected male or female")]
    UnknownSex(String),
    #[error("unknown locale '{0}', expected en or zh")]
    UnknownLocale(String),
}
