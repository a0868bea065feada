//! Collects the hostnames to check, either from a file or from standard input.
//!
//! Every line is trimmed and blank lines are dropped. Order is preserved and
//! duplicates are kept. Bytes that are not valid UTF-8 are replaced rather than
//! rejected; such a name just fails to resolve later.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use pingwatch_common::network::host::Hostname;
use thiserror::Error;

pub const STDIN_PROMPT: &str = "Enter server hostnames, one per line (Press Ctrl+D when done):";

#[derive(Debug, Error)]
pub enum InputError {
    #[error("failed to open file {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("error reading input: {0}")]
    Read(#[source] io::Error),
}

pub fn read_hosts<R: BufRead>(mut reader: R) -> Result<Vec<Hostname>, InputError> {
    let mut hosts: Vec<Hostname> = Vec::new();
    let mut buf: Vec<u8> = Vec::new();
    loop {
        buf.clear();
        let read: usize = reader
            .read_until(b'\n', &mut buf)
            .map_err(InputError::Read)?;
        if read == 0 {
            return Ok(hosts);
        }
        if let Some(host) = Hostname::parse(&String::from_utf8_lossy(&buf)) {
            hosts.push(host);
        }
    }
}

pub fn read_hosts_from_file(path: &Path) -> Result<Vec<Hostname>, InputError> {
    let file = File::open(path).map_err(|source| InputError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    read_hosts(BufReader::new(file))
}
