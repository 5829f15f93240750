#![cfg(test)]
use std::cell::RefCell;
use std::rc::Rc;

use perfpredict_common::bounds::Field;
use perfpredict_common::error::InputError;
use perfpredict_common::model::{PredictionInput, PredictionOutput, Sex};
use perfpredict_common::ports::{InputForm, ReportSink};
use perfpredict_core::prediction::PredictionService;

/// Hands out queued records, one per evaluation.
struct QueuedForm(Vec<PredictionInput>);

impl InputForm for QueuedForm {
    fn collect(&mut self) -> anyhow::Result<PredictionInput> {
        self.0.pop().ok_or_else(|| anyhow::anyhow!("no input left"))
    }
}

#[derive(Clone, Default)]
struct Transcript(Rc<RefCell<Vec<(PredictionInput, PredictionOutput)>>>);

impl ReportSink for Transcript {
    fn render(&self, input: &PredictionInput, output: &PredictionOutput) -> anyhow::Result<()> {
        self.0.borrow_mut().push((*input, *output));
        Ok(())
    }
}

#[test]
fn service_evaluates_each_collected_input_independently() {
    let male = PredictionInput::default();
    let female = PredictionInput {
        sex: Sex::Female,
        ..male
    };
    let transcript = Transcript::default();
    let mut service = PredictionService::new(
        Box::new(QueuedForm(vec![male, female, male])),
        Box::new(transcript.clone()),
    );

    let first = service.run().unwrap();
    let second = service.run().unwrap();
    let third = service.run().unwrap();

    assert_eq!(first, third);
    assert_eq!(first.heart_rate, second.heart_rate);
    assert_ne!(first.vo2max, second.vo2max);
    assert_eq!(transcript.0.borrow().len(), 3);
    assert_eq!(transcript.0.borrow()[1].0.sex, Sex::Female);
}

#[test]
fn service_propagates_form_failure() {
    let transcript = Transcript::default();
    let mut service = PredictionService::new(
        Box::new(QueuedForm(Vec::new())),
        Box::new(transcript.clone()),
    );

    assert!(service.run().is_err());
    assert!(transcript.0.borrow().is_empty());
}

#[test]
fn service_rejects_values_outside_bounds() {
    let input = PredictionInput {
        humidity: 95.0,
        ..PredictionInput::default()
    };
    let mut service = PredictionService::new(
        Box::new(QueuedForm(vec![input])),
        Box::new(Transcript::default()),
    );

    let err = service.run().unwrap_err();
    assert_eq!(
        err.downcast_ref::<InputError>(),
        Some(&InputError::OutOfRange {
            field: Field::Humidity,
            value: 95.0,
            min: 20.0,
            max: 90.0,
        })
    );
}
