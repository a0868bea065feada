use std::path::PathBuf;
use std::time::Duration;

/// File every unresponsive host is appended to, relative to the working directory.
pub const ALERT_LOG_FILE: &str = "unresponsive_servers.log";

pub struct Config {
    /// Suppresses every non-error line on stdout.
    ///
    /// Does not stop alert lines from being written to the log file.
    pub quiet: bool,
    pub log_path: PathBuf,
    pub probe: ProbeSettings,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            quiet: false,
            log_path: PathBuf::from(ALERT_LOG_FILE),
            probe: ProbeSettings::default(),
        }
    }
}

/// Parameters of a single probe session. Not exposed on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProbeSettings {
    /// Echo requests sent per session.
    pub count: u16,
    /// Upper bound for the whole session, sends and replies included.
    pub timeout: Duration,
    /// Pause between two consecutive echo requests.
    pub interval: Duration,
}

impl Default for ProbeSettings {
    fn default() -> Self {
        Self {
            count: 3,
            timeout: Duration::from_secs(5),
            interval: Duration::from_secs(1),
        }
    }
}
