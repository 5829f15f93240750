//! Linear regressions estimating exercise response from body and climate.
//!
//! Each formula is a ridge regression fitted on high-intensity treadmill
//! sessions. Coefficients are fixed; nothing is learned at runtime.
//! Terms are summed in the order intercept, temperature, humidity, age,
//! weight, height. No rounding is applied.

use perfpredict_common::model::{PredictionInput, PredictionOutput, Sex};
use tracing::debug;

/// Share of the age-predicted maximum heart rate marking the anaerobic threshold.
pub const ANAEROBIC_FRACTION: f64 = 0.8;

/// Intercept of the age-predicted maximum heart rate (`220 - age`).
pub const MAX_HR_INTERCEPT: f64 = 220.0;

/// Intercept and per-unit weights of one regression.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearModel {
    pub intercept: f64,
    pub temperature: f64,
    pub humidity: f64,
    pub age: f64,
    pub weight: f64,
    pub height: f64,
}

impl LinearModel {
    pub fn apply(&self, input: &PredictionInput) -> f64 {
        self.intercept
            + self.temperature * input.temperature
            + self.humidity * input.humidity
            + self.age * f64::from(input.age)
            + self.weight * input.weight
            + self.height * input.height
    }
}

/// Heart rate, bpm.
pub const HEART_RATE: LinearModel = LinearModel {
    intercept: 221.93,
    temperature: 0.1301,
    humidity: -0.0501,
    age: -0.5892,
    weight: 0.0643,
    height: -0.2303,
};

/// Respiratory rate, breaths/min.
pub const RESPIRATORY_RATE: LinearModel = LinearModel {
    intercept: 69.78,
    temperature: 0.0154,
    humidity: -0.0087,
    age: -0.2041,
    weight: -0.0568,
    height: -0.0899,
};

/// VO2max for men, mL/min.
pub const VO2MAX_MALE: LinearModel = LinearModel {
    intercept: -1367.64,
    temperature: -13.29,
    humidity: -1.30,
    age: -9.78,
    weight: 18.56,
    height: 23.95,
};

/// VO2max for women, mL/min.
pub const VO2MAX_FEMALE: LinearModel = LinearModel {
    intercept: -2785.38,
    temperature: 27.80,
    humidity: 2.06,
    age: 2.74,
    weight: 20.40,
    height: 20.09,
};

pub fn vo2max_model(sex: Sex) -> &'static LinearModel {
    match sex {
        Sex::Male => &VO2MAX_MALE,
        Sex::Female => &VO2MAX_FEMALE,
    }
}

pub fn predict_heart_rate(input: &PredictionInput) -> f64 {
    HEART_RATE.apply(input)
}

pub fn predict_respiratory_rate(input: &PredictionInput) -> f64 {
    RESPIRATORY_RATE.apply(input)
}

pub fn predict_vo2max(input: &PredictionInput) -> f64 {
    vo2max_model(input.sex).apply(input)
}

/// `220 - age`, in bpm.
pub fn max_heart_rate(age: u32) -> f64 {
    MAX_HR_INTERCEPT - f64::from(age)
}

/// 80% of [`max_heart_rate`].
pub fn anaerobic_threshold(age: u32) -> f64 {
    ANAEROBIC_FRACTION * max_heart_rate(age)
}

/// `true` only when `heart_rate` lies strictly above the threshold for `age`.
pub fn classify_zone(age: u32, heart_rate: f64) -> bool {
    heart_rate > anaerobic_threshold(age)
}

/// Runs every formula over `input`.
///
/// Never fails and never checks ranges. Callers that need bounded input
/// validate it first (see [`PredictionInput::validate`]).
pub fn evaluate(input: &PredictionInput) -> PredictionOutput {
    debug!(?input, "evaluating prediction");

    let heart_rate = predict_heart_rate(input);

    PredictionOutput {
        heart_rate,
        respiratory_rate: predict_respiratory_rate(input),
        vo2max: predict_vo2max(input),
        in_anaerobic_zone: classify_zone(input.age, heart_rate),
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
