//! Interactive terminal form.
//!
//! Implements the [`InputForm`] port by prompting for each field the command
//! line left open. An empty answer takes the default shown in brackets; a
//! malformed or out-of-range answer is explained on the prompt writer and
//! asked again.

use std::fmt::Display;
use std::io::{BufRead, Write};
use std::str::FromStr;

use colored::*;
use perfpredict_common::bounds::{self, Field};
use perfpredict_common::config::Config;
use perfpredict_common::error::InputError;
use perfpredict_common::model::{PredictionInput, Sex};
use perfpredict_common::ports::InputForm;
use tracing::debug;

use crate::terminal::colors;
use crate::terminal::text::{self, Catalog};

/// Values already known before the form opens.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Preset {
    pub age: Option<u32>,
    pub sex: Option<Sex>,
    pub weight: Option<f64>,
    pub height: Option<f64>,
    pub temperature: Option<f64>,
    pub humidity: Option<f64>,
}

impl Preset {
    /// Every field is known, so the form will not prompt.
    pub fn is_complete(&self) -> bool {
        self.age.is_some()
            && self.sex.is_some()
            && self.weight.is_some()
            && self.height.is_some()
            && self.temperature.is_some()
            && self.humidity.is_some()
    }
}

pub struct TerminalForm<R, W> {
    reader: R,
    writer: W,
    preset: Preset,
    interactive: bool,
    text: &'static Catalog,
}

impl<R: BufRead, W: Write> TerminalForm<R, W> {
    pub fn new(reader: R, writer: W, preset: Preset, cfg: &Config) -> Self {
        Self {
            reader,
            writer,
            preset,
            interactive: !cfg.disable_input,
            text: text::catalog(cfg.locale),
        }
    }

    fn number(&mut self, field: Field, preset: Option<f64>) -> anyhow::Result<f64> {
        if let Some(value) = preset {
            return Ok(value);
        }
        let bounds = field.bounds();
        let label = format!("{} {}-{}", self.text.field(field), bounds.min, bounds.max);
        self.ask(&label, bounds.default, |raw| field.parse(raw))
    }

    fn ask<T, P>(&mut self, label: &str, default: T, parse: P) -> anyhow::Result<T>
    where
        T: Display,
        P: Fn(&str) -> Result<T, InputError>,
    {
        if !self.interactive {
            return Ok(default);
        }

        loop {
            write!(
                self.writer,
                "{} {}{}{} ",
                label.color(colors::PRIMARY),
                "[".color(colors::SEPARATOR),
                default.to_string().color(colors::ACCENT),
                "]:".color(colors::SEPARATOR)
            )?;
            self.writer.flush()?;

            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                anyhow::bail!("input closed before '{label}' was answered");
            }

            let answer = line.trim();
            if answer.is_empty() {
                return Ok(default);
            }

            match parse(answer) {
                Ok(value) => return Ok(value),
                Err(e) => {
                    debug!(%e, "answer rejected");
                    writeln!(self.writer, "{}", format!("  {e}").color(colors::REJECTED))?;
                }
            }
        }
    }
}

impl<R: BufRead, W: Write> InputForm for TerminalForm<R, W> {
    fn collect(&mut self) -> anyhow::Result<PredictionInput> {
        let age = match self.preset.age {
            Some(age) => age,
            None => {
                let label = format!(
                    "{} {}-{}",
                    self.text.field(Field::Age),
                    bounds::AGE.min,
                    bounds::AGE.max
                );
                self.ask(&label, bounds::AGE.default as u32, bounds::parse_age)?
            }
        };

        let sex = match self.preset.sex {
            Some(sex) => sex,
            None => {
                let label = format!("{} {}/{}", self.text.sex, self.text.male, self.text.female);
                let text = self.text;
                // Shown in the form's language, parsed in either.
                let default = LocalizedSex(Sex::default(), text);
                self.ask(&label, default, |raw| {
                    Sex::from_str(raw).map(|sex| LocalizedSex(sex, text))
                })?
                .0
            }
        };

        let weight = self.number(Field::Weight, self.preset.weight)?;
        let height = self.number(Field::Height, self.preset.height)?;
        let temperature = self.number(Field::Temperature, self.preset.temperature)?;
        let humidity = self.number(Field::Humidity, self.preset.humidity)?;

        Ok(PredictionInput {
            age,
            weight,
            height,
            temperature,
            humidity,
            sex,
        })
    }
}

struct LocalizedSex(Sex, &'static Catalog);

impl Display for LocalizedSex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.1.sex_value(self.0))
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

#[cfg(test)]
mod tests {
    use super::*;
    use perfpredict_common::locale::Locale;
    use std::io::Cursor;

    fn form(answers: &str, preset: Preset, cfg: &Config) -> TerminalForm<Cursor<Vec<u8>>, Vec<u8>> {
        TerminalForm::new(Cursor::new(answers.as_bytes().to_vec()), Vec::new(), preset, cfg)
    }

    #[test]
    fn test_empty_answers_take_defaults() {
        let mut form = form("\n\n\n\n\n\n", Preset::default(), &Config::default());
        assert_eq!(form.collect().unwrap(), PredictionInput::default());
    }

    #[test]
    fn test_answers_fill_every_field() {
        let mut form = form("40\nf\n60.5\n165\n30\n80\n", Preset::default(), &Config::default());
        let input = form.collect().unwrap();

        assert_eq!(
            input,
            PredictionInput {
                age: 40,
                weight: 60.5,
                height: 165.0,
                temperature: 30.0,
                humidity: 80.0,
                sex: Sex::Female,
            }
        );
    }

    #[test]
    fn test_invalid_answer_is_asked_again() {
        // age: out of range, then fractional, then valid
        let mut form = form("5\n30.5\n30\n\n\n\n\n\n", Preset::default(), &Config::default());
        let input = form.collect().unwrap();

        assert_eq!(input.age, 30);
        let prompts = String::from_utf8(form.writer).unwrap();
        assert_eq!(prompts.matches("Age (years)").count(), 3);
        assert!(prompts.contains("age must be within 10..=80, got 5"));
        assert!(prompts.contains("invalid number for age: '30.5'"));
    }

    #[test]
    fn test_preset_fields_are_not_asked() {
        let preset = Preset {
            age: Some(50),
            sex: Some(Sex::Female),
            weight: Some(55.0),
            height: Some(160.0),
            temperature: None,
            humidity: Some(30.0),
        };
        let mut form = form("20\n", preset, &Config::default());
        let input = form.collect().unwrap();

        assert!(!preset.is_complete());
        assert_eq!(input.age, 50);
        assert_eq!(input.sex, Sex::Female);
        assert_eq!(input.temperature, 20.0);
        let prompts = String::from_utf8(form.writer).unwrap();
        assert!(prompts.contains("Temperature"));
        assert!(!prompts.contains("Weight"));
    }

    #[test]
    fn test_disabled_input_never_reads() {
        let cfg = Config {
            disable_input: true,
            ..Config::default()
        };
        let preset = Preset {
            weight: Some(90.0),
            ..Preset::default()
        };
        let mut form = form("", preset, &cfg);
        let input = form.collect().unwrap();

        assert_eq!(input.weight, 90.0);
        assert_eq!(input.age, 25);
        assert!(form.writer.is_empty());
    }

    #[test]
    fn test_closed_input_fails() {
        let mut form = form("30\n", Preset::default(), &Config::default());
        assert!(form.collect().is_err());
    }

    #[test]
    fn test_chinese_form_accepts_chinese_sex() {
        let cfg = Config {
            locale: Locale::Zh,
            ..Config::default()
        };
        let mut form = form("\n女\n\n\n\n\n", Preset::default(), &cfg);
        let input = form.collect().unwrap();

        assert_eq!(input.sex, Sex::Female);
        let prompts = String::from_utf8(form.writer).unwrap();
        assert!(prompts.contains("性别 男/女"));
    }
}
