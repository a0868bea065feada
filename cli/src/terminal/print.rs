use std::io::{self, IsTerminal};

use colored::*;
use pingwatch_common::network::host::Hostname;
use pingwatch_core::monitor::{Reporter, RunSummary};

/// Turns colors off when stdout is redirected.
pub fn initialize() {
    if !io::stdout().is_terminal() {
        colored::control::set_override(false);
    }
}

pub fn prompt(msg: &str) {
    println!("{}", msg.bright_black());
}

/// Writes the run report to stdout.
pub struct TerminalReporter;

impl Reporter for TerminalReporter {
    fn pinging(&mut self, host: &Hostname) {
        println!("Pinging server: {}", host.as_str().bold());
    }

    fn responsive(&mut self, host: &Hostname) {
        println!("Server {} is responsive", host.as_str().green());
    }

    fn finished(&mut self, summary: &RunSummary) {
        let message: ColoredString = if summary.all_responsive() {
            summary.message().green().bold()
        } else {
            summary.message().yellow().bold()
        };
        println!("{}", message);
    }
}
