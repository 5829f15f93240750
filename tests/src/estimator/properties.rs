#![cfg(test)]
use perfpredict_common::bounds::{self, Field};
use perfpredict_common::model::{PredictionInput, PredictionOutput, Sex};
use perfpredict_core::estimator::{
    self, anaerobic_threshold, classify_zone, predict_heart_rate, predict_respiratory_rate,
    predict_vo2max,
};

const EPSILON: f64 = 1e-9;

fn reference(sex: Sex) -> PredictionInput {
    PredictionInput {
        age: 25,
        weight: 70.0,
        height: 175.0,
        temperature: 25.0,
        humidity: 50.0,
        sex,
    }
}

/// Copies of `base` with `field` stepped across its bounds.
fn sweep(base: PredictionInput, field: Field) -> Vec<PredictionInput> {
    let bounds = field.bounds();
    let steps = 10;
    (0..=steps)
        .map(|i| {
            let value = bounds.min + (bounds.max - bounds.min) * f64::from(i) / f64::from(steps);
            let mut input = base;
            match field {
                Field::Age => input.age = value.round() as u32,
                Field::Weight => input.weight = value,
                Field::Height => input.height = value,
                Field::Temperature => input.temperature = value,
                Field::Humidity => input.humidity = value,
            }
            input
        })
        .collect()
}

/// Asserts `predict` moves strictly in the direction of `coefficient` along `field`.
fn assert_direction(
    predict: fn(&PredictionInput) -> f64,
    base: PredictionInput,
    field: Field,
    coefficient: f64,
) {
    let values: Vec<f64> = sweep(base, field).iter().map(predict).collect();
    for pair in values.windows(2) {
        let delta = pair[1] - pair[0];
        assert!(
            delta.signum() == coefficient.signum(),
            "{field}: expected sign of {coefficient}, got delta {delta}"
        );
    }
}

#[test]
fn reference_scenario_male() {
    let output: PredictionOutput = estimator::evaluate(&reference(Sex::Male));

    assert!((output.heart_rate - 172.146).abs() < EPSILON);
    assert!((output.respiratory_rate - 44.919).abs() < EPSILON);
    assert!((output.vo2max - 3481.06).abs() < EPSILON);
    assert!(output.in_anaerobic_zone);
}

#[test]
fn evaluation_is_deterministic() {
    for field in Field::ALL {
        for input in sweep(reference(Sex::Female), field) {
            let first = estimator::evaluate(&input);
            let second = estimator::evaluate(&input);
            assert_eq!(first.heart_rate.to_bits(), second.heart_rate.to_bits());
            assert_eq!(first.respiratory_rate.to_bits(), second.respiratory_rate.to_bits());
            assert_eq!(first.vo2max.to_bits(), second.vo2max.to_bits());
            assert_eq!(first.in_anaerobic_zone, second.in_anaerobic_zone);
        }
    }
}

#[test]
fn sex_only_changes_vo2max() {
    let male = estimator::evaluate(&reference(Sex::Male));
    let female = estimator::evaluate(&reference(Sex::Female));

    assert_eq!(male.heart_rate, female.heart_rate);
    assert_eq!(male.respiratory_rate, female.respiratory_rate);
    assert_eq!(male.in_anaerobic_zone, female.in_anaerobic_zone);
    assert_ne!(male.vo2max, female.vo2max);
}

#[test]
fn zone_boundary_is_strict() {
    let threshold = anaerobic_threshold(25);
    assert!((threshold - 156.0).abs() < EPSILON);

    assert!(!classify_zone(25, threshold));
    assert!(classify_zone(25, threshold + 0.001));
    assert!(!classify_zone(25, threshold - 0.001));
}

#[test]
fn zone_tracks_predicted_heart_rate() {
    for field in Field::ALL {
        for input in sweep(reference(Sex::Male), field) {
            let output = estimator::evaluate(&input);
            assert_eq!(
                output.in_anaerobic_zone,
                output.heart_rate > anaerobic_threshold(input.age)
            );
        }
    }
}

#[test]
fn heart_rate_follows_coefficient_signs() {
    let base = reference(Sex::Male);
    assert_direction(predict_heart_rate, base, Field::Temperature, 0.1301);
    assert_direction(predict_heart_rate, base, Field::Humidity, -0.0501);
    assert_direction(predict_heart_rate, base, Field::Age, -0.5892);
    assert_direction(predict_heart_rate, base, Field::Weight, 0.0643);
    assert_direction(predict_heart_rate, base, Field::Height, -0.2303);
}

#[test]
fn respiratory_rate_follows_coefficient_signs() {
    let base = reference(Sex::Female);
    assert_direction(predict_respiratory_rate, base, Field::Temperature, 0.0154);
    assert_direction(predict_respiratory_rate, base, Field::Humidity, -0.0087);
    assert_direction(predict_respiratory_rate, base, Field::Age, -0.2041);
    assert_direction(predict_respiratory_rate, base, Field::Weight, -0.0568);
    assert_direction(predict_respiratory_rate, base, Field::Height, -0.0899);
}

#[test]
fn vo2max_male_follows_coefficient_signs() {
    let base = reference(Sex::Male);
    assert_direction(predict_vo2max, base, Field::Temperature, -13.29);
    assert_direction(predict_vo2max, base, Field::Humidity, -1.30);
    assert_direction(predict_vo2max, base, Field::Age, -9.78);
    assert_direction(predict_vo2max, base, Field::Weight, 18.56);
    assert_direction(predict_vo2max, base, Field::Height, 23.95);
}

#[test]
fn vo2max_female_follows_coefficient_signs() {
    let base = reference(Sex::Female);
    assert_direction(predict_vo2max, base, Field::Temperature, 27.80);
    assert_direction(predict_vo2max, base, Field::Humidity, 2.06);
    assert_direction(predict_vo2max, base, Field::Age, 2.74);
    assert_direction(predict_vo2max, base, Field::Weight, 20.40);
    assert_direction(predict_vo2max, base, Field::Height, 20.09);
}

#[test]
fn estimator_does_not_clamp() {
    let input = PredictionInput {
        height: bounds::HEIGHT.max + 50.0,
        ..reference(Sex::Male)
    };
    assert!(input.validate().is_err());

    let output = estimator::evaluate(&input);
    assert!(output.heart_rate < predict_heart_rate(&reference(Sex::Male)));
    assert!(!output.in_anaerobic_zone);
}
