//! # Shared Model
//!
//! Types shared by the estimator core and every front end.
//!
//! * **[`model`]**: The input record, the derived output, and [`model::Sex`].
//! * **[`bounds`]**: Accepted ranges and form defaults for each numeric field.
//! * **[`locale`]**: Display language of the front end.
//! * **[`ports`]**: Traits a front end implements to drive the estimator.
//! * **[`config`]**: Runtime switches for the front end.
//! * **[`error`]**: Errors raised while collecting input.

pub mod bounds;
pub mod config;
pub mod error;
pub mod locale;
pub mod model;
pub mod ports;
