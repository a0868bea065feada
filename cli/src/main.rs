mod commands;
mod terminal;

use commands::{CommandLine, check};
use pingwatch_common::config::Config;
use terminal::{logging, print};

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init_logging();
    print::initialize();

    let cfg = Config {
        quiet: commands.quiet,
        ..Config::default()
    };

    check::check(commands.file.as_deref(), &cfg)
}
