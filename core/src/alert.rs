//! Append-only alert log for unresponsive hosts.
//!
//! The file is opened, written and closed for every single alert; no handle is
//! kept across hosts. Lines look like
//! `ALERT: 2024/01/23 01:23:23 Server db.example is unresponsive`.

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use pingwatch_common::network::host::Hostname;
use thiserror::Error;

const ALERT_PREFIX: &str = "ALERT: ";
const TIMESTAMP_FORMAT: &str = "%Y/%m/%d %H:%M:%S";

#[derive(Debug, Error)]
pub enum AlertError {
    #[error("failed to open log file {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to write to log file {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

#[derive(Debug, Clone)]
pub struct AlertLog {
    path: PathBuf,
}

impl AlertLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Appends one alert line for `host`, stamped with the current local time.
    pub fn record(&self, host: &Hostname) -> Result<(), AlertError> {
        self.record_at(host, &Local::now())
    }

    pub fn record_at(&self, host: &Hostname, at: &DateTime<Local>) -> Result<(), AlertError> {
        let mut file: File = self.open().map_err(|source| AlertError::Open {
            path: self.path.clone(),
            source,
        })?;

        writeln!(file, "{}", format_alert(host, at)).map_err(|source| AlertError::Write {
            path: self.path.clone(),
            source,
        })
    }

    fn open(&self) -> io::Result<File> {
        let mut options = OpenOptions::new();
        options.create(true).append(true);

        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(0o644);
        }

        options.open(&self.path)
    }
}

pub fn format_alert(host: &Hostname, at: &DateTime<Local>) -> String {
    format!(
        "{ALERT_PREFIX}{} Server {host} is unresponsive",
        at.format(TIMESTAMP_FORMAT)
    )
}
