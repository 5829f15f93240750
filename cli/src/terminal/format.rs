use colored::*;
use perfpredict_common::bounds::Field;
use perfpredict_common::model::{PredictionInput, PredictionOutput};

use crate::terminal::colors;
use crate::terminal::text::Catalog;

/// One decimal place, then the unit.
pub fn measurement(value: f64, unit: &str) -> String {
    format!("{value:.1} {unit}")
}

/// Signed coefficient as shown in the model tables.
pub fn coefficient(value: f64) -> String {
    format!("{value:+.4}")
}

pub fn zone_indicator(in_zone: bool, text: &Catalog) -> ColoredString {
    if in_zone {
        format!("■ {}", text.zone_in).color(colors::ZONE_IN).bold()
    } else {
        format!("■ {}", text.zone_out).color(colors::ZONE_OUT).bold()
    }
}

/// Label and value for every input, in form order.
pub fn input_to_detail(input: &PredictionInput, text: &Catalog) -> Vec<(&'static str, String)> {
    let mut details: Vec<(&'static str, String)> = Vec::with_capacity(6);
    details.push((text.field(Field::Age), input.age.to_string()));
    details.push((text.sex, text.sex_value(input.sex).to_string()));
    for field in &Field::ALL[1..] {
        details.push((text.field(*field), format!("{:.1}", input.value_of(*field))));
    }
    details
}

/// Label and formatted value of each numeric output.
pub fn output_to_detail(output: &PredictionOutput, text: &Catalog) -> [(&'static str, String); 3] {
    [
        (text.heart_rate, measurement(output.heart_rate, text.bpm)),
        (
            text.respiratory_rate,
            measurement(output.respiratory_rate, text.breaths_per_min),
        ),
        (text.vo2max, measurement(output.vo2max, text.ml_per_min)),
    ]
}
