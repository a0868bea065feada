use std::io;
use std::path::Path;

use anyhow::Context;
use pingwatch_common::config::Config;
use pingwatch_common::network::host::Hostname;
use pingwatch_core::{input, monitor, prober::IcmpProber};
use tracing::debug;

use crate::terminal::print::{self, TerminalReporter};

pub fn check(file: Option<&Path>, cfg: &Config) -> anyhow::Result<()> {
    let hosts: Vec<Hostname> = gather_hosts(file, cfg)?;
    debug!("Loaded {} servers", hosts.len());

    let mut prober = IcmpProber::new(cfg.probe);
    let mut reporter = TerminalReporter;
    monitor::run(&hosts, &mut prober, &mut reporter, cfg);
    Ok(())
}

fn gather_hosts(file: Option<&Path>, cfg: &Config) -> anyhow::Result<Vec<Hostname>> {
    match file {
        Some(path) => {
            input::read_hosts_from_file(path).context("Error reading servers from file")
        }
        None => {
            if !cfg.quiet {
                print::prompt(input::STDIN_PROMPT);
            }
            input::read_hosts(io::stdin().lock()).context("Error reading servers from stdin")
        }
    }
}
