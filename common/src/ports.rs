//! # Ports
//!
//! Contracts between the estimator core and whatever collects input and
//! shows results. The core depends only on these traits, so a terminal form,
//! a web page or a test fake can all drive it.

use crate::model::{PredictionInput, PredictionOutput};

/// Supplies one input record per evaluation.
pub trait InputForm {
    /// Gathers the six inputs.
    ///
    /// Implementations are expected to enforce [`crate::bounds`] themselves;
    /// the caller validates again before evaluating.
    fn collect(&mut self) -> anyhow::Result<PredictionInput>;
}

/// Shows the result of one evaluation.
pub trait ReportSink {
    fn render(&self, input: &PredictionInput, output: &PredictionOutput) -> anyhow::Result<()>;
}
