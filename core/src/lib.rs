//! # Performance Estimator Core
//!
//! * **[`estimator`]**: The regression formulas and the anaerobic-zone rule.
//!   Pure functions, no IO.
//! * **[`prediction`]**: Application service that drives one evaluation
//!   through the [`perfpredict_common::ports`] traits.

pub mod estimator;
pub mod prediction;

pub use estimator::evaluate;
