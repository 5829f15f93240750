//! # Prediction Service
//!
//! Implements the one use case of the tool: collect input, evaluate, show.
//!
//! The service knows nothing about terminals. It receives the collaborator
//! that gathers input and the one that renders results as trait objects.

use perfpredict_common::model::PredictionOutput;
use perfpredict_common::ports::{InputForm, ReportSink};
use tracing::info_span;

use crate::estimator;

/// Application Service for a single prediction.
///
/// Orchestrates the evaluation by:
/// 1. delegating input collection to the [`InputForm`] port.
/// 2. validating the record against the field bounds.
/// 3. running the [`estimator`].
/// 4. handing both records to the [`ReportSink`] port.
pub struct PredictionService {
    form: Box<dyn InputForm>,
    report: Box<dyn ReportSink>,
}

impl PredictionService {
    pub fn new(form: Box<dyn InputForm>, report: Box<dyn ReportSink>) -> Self {
        Self { form, report }
    }

    pub fn run(&mut self) -> anyhow::Result<PredictionOutput> {
        let span = info_span!("prediction");
        let _guard = span.enter();

        let input = self.form.collect()?;
        input.validate()?;

        let output = estimator::evaluate(&input);
        self.report.render(&input, &output)?;

        Ok(output)
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
