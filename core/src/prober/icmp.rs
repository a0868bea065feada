//! ICMP echo prober.
//!
//! One session sends `count` echo requests, `interval` apart, and collects
//! matching replies until every request has been answered or `timeout` has
//! elapsed since the first send. Opening the raw socket requires **root
//! privileges** or `CAP_NET_RAW`.

use std::collections::BTreeSet;
use std::net::{IpAddr, ToSocketAddrs};
use std::time::{Duration, Instant};

use pingwatch_common::config::ProbeSettings;
use pingwatch_common::network::{host::Hostname, probe::ProbeStats};
use tracing::{debug, trace};

use super::{ProbeError, Prober};
use crate::network::echo;
use crate::network::transport::{EchoTransport, IcmpChannel};

pub struct IcmpProber {
    settings: ProbeSettings,
}

impl IcmpProber {
    pub fn new(settings: ProbeSettings) -> Self {
        Self { settings }
    }
}

impl Prober for IcmpProber {
    fn probe(&mut self, host: &Hostname) -> Result<ProbeStats, ProbeError> {
        let target: IpAddr = resolve(host)?;
        debug!("Resolved {host} to {target}");

        let mut channel = IcmpChannel::open(&target).map_err(ProbeError::Channel)?;
        EchoSession::new(target, rand::random(), self.settings).run(&mut channel)
    }
}

/// Prefers the first IPv4 address and falls back to IPv6.
fn resolve(host: &Hostname) -> Result<IpAddr, ProbeError> {
    let addrs: Vec<IpAddr> = (host.as_str(), 0)
        .to_socket_addrs()
        .map_err(|source| ProbeError::Resolve {
            host: host.clone(),
            source,
        })?
        .map(|addr| addr.ip())
        .collect();

    addrs
        .iter()
        .find(|ip| ip.is_ipv4())
        .or_else(|| addrs.first())
        .copied()
        .ok_or_else(|| ProbeError::NoAddress { host: host.clone() })
}

struct EchoSession {
    target: IpAddr,
    identifier: u16,
    settings: ProbeSettings,
    replies: BTreeSet<u16>,
}

impl EchoSession {
    fn new(target: IpAddr, identifier: u16, settings: ProbeSettings) -> Self {
        Self {
            target,
            identifier,
            settings,
            replies: BTreeSet::new(),
        }
    }

    fn run<T: EchoTransport>(mut self, transport: &mut T) -> Result<ProbeStats, ProbeError> {
        let deadline: Instant = Instant::now() + self.settings.timeout;
        let mut sent: u16 = 0;

        for sequence in 0..self.settings.count {
            if Instant::now() >= deadline {
                break;
            }

            let request = echo::echo_request(&self.target, self.identifier, sequence)
                .ok_or(ProbeError::Packet)?;
            transport
                .send(&request, self.target)
                .map_err(ProbeError::Send)?;
            sent += 1;
            trace!("Sent echo request {sequence} to {}", self.target);

            let is_last: bool = sequence + 1 == self.settings.count;
            let wait_until: Instant = if is_last {
                deadline
            } else {
                (Instant::now() + self.settings.interval).min(deadline)
            };
            self.collect_replies(transport, wait_until)?;

            if self.is_complete() {
                break;
            }
        }

        Ok(ProbeStats::new(sent, self.replies.len() as u16))
    }

    fn collect_replies<T: EchoTransport>(
        &mut self,
        transport: &mut T,
        until: Instant,
    ) -> Result<(), ProbeError> {
        loop {
            let now: Instant = Instant::now();
            if now >= until || self.is_complete() {
                return Ok(());
            }

            let remaining: Duration = until - now;
            let Some((bytes, source)) = transport.recv(remaining).map_err(ProbeError::Receive)?
            else {
                continue;
            };

            if source != self.target {
                continue;
            }
            if let Some(sequence) = echo::match_echo_reply(&self.target, &bytes, self.identifier)
                && sequence < self.settings.count
                && self.replies.insert(sequence)
            {
                trace!("Echo reply {sequence} from {source}");
            }
        }
    }

    fn is_complete(&self) -> bool {
        self.replies.len() >= usize::from(self.settings.count)
    }
}
