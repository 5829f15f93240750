use std::io::{self, BufRead, Write};

use colored::*;
use console::Term;
use perfpredict_common::config::Config;
use perfpredict_core::prediction::PredictionService;
use tracing::info_span;

use crate::commands::PredictArgs;
use crate::pprint;
use crate::terminal::form::{Preset, TerminalForm};
use crate::terminal::report::TerminalReport;
use crate::terminal::{colors, print, text};

impl From<PredictArgs> for Preset {
    fn from(args: PredictArgs) -> Self {
        Self {
            age: args.age,
            sex: args.sex,
            weight: args.weight,
            height: args.height,
            temperature: args.temperature,
            humidity: args.humidity,
        }
    }
}

pub fn predict(args: PredictArgs, cfg: &Config) -> anyhow::Result<()> {
    let span = info_span!("predict");
    let _guard = span.enter();

    let preset: Preset = args.into();
    if cfg.quiet == 0 && !cfg.disable_input && !preset.is_complete() {
        intro(cfg);
    }

    // Prompts stay off stdout so `-qq` output is values only.
    run(io::stdin().lock(), Term::stderr(), preset, cfg)
}

fn run<R, W>(reader: R, prompts: W, preset: Preset, cfg: &Config) -> anyhow::Result<()>
where
    R: BufRead + 'static,
    W: Write + 'static,
{
    let form = TerminalForm::new(reader, prompts, preset, cfg);
    let report = TerminalReport::new(cfg);

    PredictionService::new(Box::new(form), Box::new(report)).run()?;
    Ok(())
}

fn intro(cfg: &Config) {
    let text = text::catalog(cfg.locale);
    print::header(text.title, cfg.quiet);
    print::print(&format!("{}", text.subtitle.color(colors::TEXT_DEFAULT)));
    pprint!();
}
