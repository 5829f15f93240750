mod commands;
mod terminal;

use commands::{CommandLine, Commands, info, predict};
use perfpredict_common::config::Config;
use terminal::{logging, print};

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init_logging()?;

    let cfg = Config {
        no_banner: commands.no_banner,
        quiet: commands.quiet,
        locale: commands.lang,
        disable_input: commands.no_input,
    };

    print::banner(cfg.no_banner, cfg.quiet);

    match commands.command {
        Some(Commands::Info) => info::info(&cfg),
        Some(Commands::Predict(args)) => predict::predict(args, &cfg),
        None => predict::predict(commands.predict, &cfg),
    }
}
