pub mod info;
pub mod predict;

use clap::{ArgAction, Args, Parser, Subcommand};
use perfpredict_common::bounds::{self, Field};
use perfpredict_common::error::InputError;
use perfpredict_common::locale::Locale;
use perfpredict_common::model::Sex;

#[derive(Parser)]
#[command(name = "perfpredict")]
#[command(version)]
#[command(about = "Estimate heart rate, respiratory rate and VO2max under hard exercise.")]
#[command(args_conflicts_with_subcommands = true)]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Field values for the default `predict` command
    #[command(flatten)]
    pub predict: PredictArgs,

    /// Reduce output; repeat for bare values only
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub quiet: u8,

    /// Do not print the banner
    #[arg(long, global = true)]
    pub no_banner: bool,

    /// Display language (en, zh)
    #[arg(short, long, global = true, default_value = "en")]
    pub lang: Locale,

    /// Never prompt; fields not given take their defaults
    #[arg(long, global = true)]
    pub no_input: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Predict exercise response (the default command)
    #[command(alias = "p")]
    Predict(PredictArgs),
    /// Show the tool and the regression coefficients
    #[command(alias = "i")]
    Info,
}

#[derive(Args, Debug, Default, Clone)]
pub struct PredictArgs {
    /// Age in whole years (10-80)
    #[arg(short, long, value_parser = bounds::parse_age)]
    pub age: Option<u32>,

    /// Sex (male, female)
    #[arg(short, long)]
    pub sex: Option<Sex>,

    /// Body weight in kg (30-120)
    #[arg(short, long, value_parser = parse_weight)]
    pub weight: Option<f64>,

    /// Height in cm (140-200)
    #[arg(short = 'H', long, value_parser = parse_height)]
    pub height: Option<f64>,

    /// Ambient temperature in °C (15-35)
    #[arg(short, long, value_parser = parse_temperature)]
    pub temperature: Option<f64>,

    /// Ambient relative humidity in % (20-90)
    #[arg(short = 'u', long, value_parser = parse_humidity)]
    pub humidity: Option<f64>,
}

fn parse_weight(s: &str) -> Result<f64, InputError> {
    Field::Weight.parse(s)
}

fn parse_height(s: &str) -> Result<f64, InputError> {
    Field::Height.parse(s)
}

fn parse_temperature(s: &str) -> Result<f64, InputError> {
    Field::Temperature.parse(s)
}

fn parse_humidity(s: &str) -> Result<f64, InputError> {
    Field::Humidity.parse(s)
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
