//! The run loop: probe every host in input order, alert on the silent ones.
//!
//! All state of a run lives in the returned [`RunSummary`]; nothing is kept
//! between invocations except the alert log on disk.

use is_root::is_root;
use pingwatch_common::config::Config;
use pingwatch_common::network::host::Hostname;
use pingwatch_common::network::probe::ProbeOutcome;
use tracing::{debug, error, warn};

use crate::alert::AlertLog;
use crate::prober::Prober;

pub const SOME_UNRESPONSIVE: &str = "Some servers are unresponsive. Check logs for details.";
pub const ALL_RESPONSIVE: &str = "All servers are responsive.";

/// Receives the operator-facing lines of a run. Never called in quiet mode.
pub trait Reporter {
    fn pinging(&mut self, host: &Hostname);
    fn responsive(&mut self, host: &Hostname);
    fn finished(&mut self, summary: &RunSummary);
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub checked: usize,
    /// Unresponsive hosts, in the order they were probed.
    pub unresponsive: Vec<Hostname>,
    /// Unresponsive hosts whose alert line could not be written.
    pub unrecorded: Vec<Hostname>,
}

impl RunSummary {
    pub fn all_responsive(&self) -> bool {
        self.unresponsive.is_empty()
    }

    pub fn message(&self) -> &'static str {
        if self.all_responsive() {
            ALL_RESPONSIVE
        } else {
            SOME_UNRESPONSIVE
        }
    }
}

pub fn run<P, R>(hosts: &[Hostname], prober: &mut P, reporter: &mut R, cfg: &Config) -> RunSummary
where
    P: Prober,
    R: Reporter,
{
    let alerts = AlertLog::new(&cfg.log_path);
    let mut summary = RunSummary::default();

    for host in hosts {
        if !cfg.quiet {
            reporter.pinging(host);
        }

        summary.checked += 1;
        match check_host(prober, host) {
            ProbeOutcome::Responsive => {
                if !cfg.quiet {
                    reporter.responsive(host);
                }
            }
            ProbeOutcome::Unresponsive => {
                if let Err(e) = alerts.record(host) {
                    error!("Failed to write alert for server {host}: {e}");
                    summary.unrecorded.push(host.clone());
                }
                summary.unresponsive.push(host.clone());
            }
        }
    }

    // The summary still counts these hosts even though the log misses them.
    if !summary.unrecorded.is_empty() {
        warn!(
            "{} of {} unresponsive servers are missing from {}",
            summary.unrecorded.len(),
            summary.unresponsive.len(),
            alerts.path().display()
        );
    }

    if !cfg.quiet {
        reporter.finished(&summary);
    }
    summary
}

fn check_host<P: Prober>(prober: &mut P, host: &Hostname) -> ProbeOutcome {
    match prober.probe(host) {
        Ok(stats) => {
            debug!("{host}: {} sent, {} received", stats.sent, stats.received);
            let outcome = stats.outcome();
            if !outcome.is_responsive() {
                warn!("No response from server {host}");
            }
            outcome
        }
        Err(e) if e.is_setup() => {
            error!("Failed to create pinger for server {host}: {e}");
            if e.is_permission_denied() && !is_root() {
                warn!("Raw ICMP sockets need root privileges or CAP_NET_RAW");
            }
            ProbeOutcome::Unresponsive
        }
        Err(e) => {
            error!("Ping failed for server {host}: {e}");
            ProbeOutcome::Unresponsive
        }
    }
}
