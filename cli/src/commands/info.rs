use colored::*;
use perfpredict_common::config::Config;
use perfpredict_core::estimator::{self, LinearModel};

use crate::pprint;
use crate::terminal::text::{self, Catalog};
use crate::terminal::{colors, format, print};

pub fn info(cfg: &Config) -> anyhow::Result<()> {
    let text = text::catalog(cfg.locale);

    print::header("about the tool", cfg.quiet);
    print::print(&format!("{}", text.subtitle.color(colors::TEXT_DEFAULT)));
    pprint!();
    print::fit_key_width(["Version", "Basis", "Threshold"]);
    print::aligned_line("Version", env!("CARGO_PKG_VERSION"));
    print::aligned_line("Basis", text.footnote);
    print::aligned_line(
        "Threshold",
        format!(
            "HR > {} × ({} - age)",
            estimator::ANAEROBIC_FRACTION,
            estimator::MAX_HR_INTERCEPT
        ),
    );

    print::header("regression coefficients", cfg.quiet);
    let tables = model_tables(text);
    for (idx, (name, model)) in tables.iter().enumerate() {
        print::tree_head(idx, name);
        print::as_tree_one_level(model_to_detail(model));
        if idx + 1 != tables.len() {
            pprint!();
        }
    }

    print::end_of_program();
    Ok(())
}

fn model_tables(text: &Catalog) -> [(&'static str, &'static LinearModel); 4] {
    [
        (text.heart_rate, &estimator::HEART_RATE),
        (text.respiratory_rate, &estimator::RESPIRATORY_RATE),
        (text.vo2max_male, &estimator::VO2MAX_MALE),
        (text.vo2max_female, &estimator::VO2MAX_FEMALE),
    ]
}

fn model_to_detail(model: &LinearModel) -> Vec<(String, ColoredString)> {
    [
        ("intercept", model.intercept),
        ("temperature", model.temperature),
        ("humidity", model.humidity),
        ("age", model.age),
        ("weight", model.weight),
        ("height", model.height),
    ]
    .into_iter()
    .map(|(term, value)| {
        let color = if value < 0.0 {
            colors::COEF_NEGATIVE
        } else {
            colors::COEF_POSITIVE
        };
        (term.to_string(), format::coefficient(value).color(color))
    })
    .collect()
}
