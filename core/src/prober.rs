//! Reachability probing.
//!
//! The run loop only talks to the [`Prober`] trait, so the real ICMP
//! implementation in [`icmp`] can be swapped for a stub in tests.

use std::io;

use pingwatch_common::network::{host::Hostname, probe::ProbeStats};
use thiserror::Error;

mod icmp;

pub use icmp::IcmpProber;

pub trait Prober {
    /// Runs one complete probe session against `host`.
    ///
    /// `Ok` carries the packet counters even when nothing came back; `Err`
    /// means the session could not be set up or broke off.
    fn probe(&mut self, host: &Hostname) -> Result<ProbeStats, ProbeError>;
}

#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("failed to resolve {host}: {source}")]
    Resolve {
        host: Hostname,
        #[source]
        source: io::Error,
    },
    #[error("no address found for {host}")]
    NoAddress { host: Hostname },
    #[error("failed to open raw ICMP socket: {0}")]
    Channel(#[source] io::Error),
    #[error("failed to build echo request")]
    Packet,
    #[error("failed to send echo request: {0}")]
    Send(#[source] io::Error),
    #[error("failed to receive echo reply: {0}")]
    Receive(#[source] io::Error),
}

impl ProbeError {
    /// True when the session never started (resolution, socket or packet setup).
    pub fn is_setup(&self) -> bool {
        matches!(
            self,
            ProbeError::Resolve { .. }
                | ProbeError::NoAddress { .. }
                | ProbeError::Channel(_)
                | ProbeError::Packet
        )
    }

    pub fn is_permission_denied(&self) -> bool {
        matches!(self, ProbeError::Channel(e) if e.kind() == io::ErrorKind::PermissionDenied)
    }
}
