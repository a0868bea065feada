use std::collections::HashMap;
use std::path::Path;

use pingwatch_common::config::Config;
use pingwatch_common::network::host::Hostname;
use pingwatch_common::network::probe::ProbeStats;
use pingwatch_core::monitor::{Reporter, RunSummary};
use pingwatch_core::prober::{ProbeError, Prober};

/// Prober answering from a fixed table of received-packet counts.
/// Hosts missing from the table fail name resolution.
#[derive(Default)]
pub struct StubProber {
    replies: HashMap<String, u16>,
}

impl StubProber {
    pub fn responsive(mut self, host: &str) -> Self {
        self.replies.insert(host.to_string(), 3);
        self
    }

    pub fn unresponsive(mut self, host: &str) -> Self {
        self.replies.insert(host.to_string(), 0);
        self
    }
}

impl Prober for StubProber {
    fn probe(&mut self, host: &Hostname) -> Result<ProbeStats, ProbeError> {
        match self.replies.get(host.as_str()) {
            Some(received) => Ok(ProbeStats::new(3, *received)),
            None => Err(ProbeError::NoAddress { host: host.clone() }),
        }
    }
}

/// Captures what would have been printed on stdout.
#[derive(Default)]
pub struct CapturedOutput {
    pub lines: Vec<String>,
}

impl Reporter for CapturedOutput {
    fn pinging(&mut self, host: &Hostname) {
        self.lines.push(format!("Pinging server: {host}"));
    }

    fn responsive(&mut self, host: &Hostname) {
        self.lines.push(format!("Server {host} is responsive"));
    }

    fn finished(&mut self, summary: &RunSummary) {
        self.lines.push(summary.message().to_string());
    }
}

pub fn config(log_path: &Path, quiet: bool) -> Config {
    Config {
        quiet,
        log_path: log_path.to_path_buf(),
        ..Config::default()
    }
}

pub fn read_log(path: &Path) -> Vec<String> {
    std::fs::read_to_string(path)
        .map(|contents| contents.lines().map(str::to_string).collect())
        .unwrap_or_default()
}
