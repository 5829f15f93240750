//! Terminal rendering of a prediction.
//!
//! Implements the [`ReportSink`] port. Layout depends on the quiet level:
//! `0` prints headers, an input summary, aligned results and the footnote;
//! `1` prints plain result lines; `2` prints bare values, one per line.

use colored::*;
use perfpredict_common::config::Config;
use perfpredict_common::model::{PredictionInput, PredictionOutput};
use perfpredict_common::ports::ReportSink;

use crate::pprint;
use crate::terminal::text::{self, Catalog};
use crate::terminal::{colors, format, print};

pub struct TerminalReport {
    quiet: u8,
    text: &'static Catalog,
}

impl TerminalReport {
    pub fn new(cfg: &Config) -> Self {
        Self {
            quiet: cfg.quiet,
            text: text::catalog(cfg.locale),
        }
    }
}

impl ReportSink for TerminalReport {
    fn render(&self, input: &PredictionInput, output: &PredictionOutput) -> anyhow::Result<()> {
        let lines = render_lines(input, output, self.quiet, self.text);
        print::fit_key_width(lines.iter().filter_map(|line| match line {
            Line::Aligned(key, _) => Some(*key),
            _ => None,
        }));

        for line in lines {
            match line {
                Line::Header(title) => print::header(title, self.quiet),
                Line::Aligned(key, value) => print::aligned_line(key, value.color(colors::VALUE)),
                Line::Plain(msg) => print::print(&msg),
                Line::Zone(in_zone) => {
                    pprint!();
                    print::centerln(&format::zone_indicator(in_zone, self.text).to_string());
                }
                Line::Footnote => {
                    let footnote = self.text.footnote.italic().color(colors::SECONDARY);
                    print::fat_separator();
                    print::print(&format!("{}", footnote));
                }
                Line::End => print::end_of_program(),
            }
        }
        Ok(())
    }
}

/// One unit of report output, before any styling.
#[derive(Debug, Clone, PartialEq)]
enum Line {
    Header(&'static str),
    Aligned(&'static str, String),
    Plain(String),
    Zone(bool),
    Footnote,
    End,
}

fn render_lines(
    input: &PredictionInput,
    output: &PredictionOutput,
    quiet: u8,
    text: &Catalog,
) -> Vec<Line> {
    let results = format::output_to_detail(output, text);

    match quiet {
        0 => {
            let inputs = format::input_to_detail(input, text);
            let mut lines = vec![Line::Header(text.input_header)];
            lines.extend(inputs.into_iter().map(|(key, value)| Line::Aligned(key, value)));
            lines.push(Line::Header(text.results_header));
            lines.extend(results.into_iter().map(|(key, value)| Line::Aligned(key, value)));
            lines.push(Line::Zone(output.in_anaerobic_zone));
            lines.push(Line::Footnote);
            lines.push(Line::End);
            lines
        }
        1 => {
            let zone = if output.in_anaerobic_zone {
                text.zone_in
            } else {
                text.zone_out
            };
            results
                .into_iter()
                .map(|(key, value)| Line::Plain(format!("{key}: {value}")))
                .chain(std::iter::once(Line::Plain(zone.to_string())))
                .collect()
        }
        _ => vec![
            Line::Plain(format!("{:.1}", output.heart_rate)),
            Line::Plain(format!("{:.1}", output.respiratory_rate)),
            Line::Plain(format!("{:.1}", output.vo2max)),
            Line::Plain(output.in_anaerobic_zone.to_string()),
        ],
    }
}
