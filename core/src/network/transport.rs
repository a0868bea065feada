use std::io;
use std::net::IpAddr;
use std::time::Duration;

use pnet::packet::Packet;
use pnet::packet::icmp::IcmpPacket;
use pnet::packet::icmpv6::Icmpv6Packet;
use pnet::packet::ip::IpNextHeaderProtocols;
use pnet::transport::{
    self, TransportChannelType, TransportProtocol, TransportReceiver, TransportSender,
};

const TRANSPORT_BUFFER_SIZE: usize = 4096;
const CHANNEL_TYPE_ICMP: TransportChannelType =
    TransportChannelType::Layer4(TransportProtocol::Ipv4(IpNextHeaderProtocols::Icmp));
const CHANNEL_TYPE_ICMPV6: TransportChannelType =
    TransportChannelType::Layer4(TransportProtocol::Ipv6(IpNextHeaderProtocols::Icmpv6));

/// Sends raw echo packets and hands back whatever ICMP traffic arrives.
pub trait EchoTransport {
    fn send(&mut self, packet: &[u8], destination: IpAddr) -> io::Result<()>;

    /// Waits at most `timeout` for the next ICMP packet. `Ok(None)` means the
    /// wait elapsed without traffic.
    fn recv(&mut self, timeout: Duration) -> io::Result<Option<(Vec<u8>, IpAddr)>>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum IcmpFamily {
    V4,
    V6,
}

/// Raw ICMP (or ICMPv6) socket pair. Needs root or `CAP_NET_RAW`.
pub struct IcmpChannel {
    family: IcmpFamily,
    tx: TransportSender,
    rx: TransportReceiver,
}

impl IcmpChannel {
    /// Opens a channel of the family matching `target`.
    pub fn open(target: &IpAddr) -> io::Result<Self> {
        let (family, channel_type) = match target {
            IpAddr::V4(_) => (IcmpFamily::V4, CHANNEL_TYPE_ICMP),
            IpAddr::V6(_) => (IcmpFamily::V6, CHANNEL_TYPE_ICMPV6),
        };
        let (tx, rx) = transport::transport_channel(TRANSPORT_BUFFER_SIZE, channel_type)?;
        Ok(Self { family, tx, rx })
    }
}

impl EchoTransport for IcmpChannel {
    fn send(&mut self, packet: &[u8], destination: IpAddr) -> io::Result<()> {
        let truncated = || io::Error::new(io::ErrorKind::InvalidInput, "truncated ICMP packet");
        match self.family {
            IcmpFamily::V4 => {
                let pkt = IcmpPacket::new(packet).ok_or_else(truncated)?;
                self.tx.send_to(pkt, destination)?;
            }
            IcmpFamily::V6 => {
                let pkt = Icmpv6Packet::new(packet).ok_or_else(truncated)?;
                self.tx.send_to(pkt, destination)?;
            }
        }
        Ok(())
    }

    fn recv(&mut self, timeout: Duration) -> io::Result<Option<(Vec<u8>, IpAddr)>> {
        match self.family {
            IcmpFamily::V4 => {
                let mut iter = transport::icmp_packet_iter(&mut self.rx);
                let received = iter.next_with_timeout(timeout)?;
                Ok(received.map(|(pkt, source)| (pkt.packet().to_vec(), source)))
            }
            IcmpFamily::V6 => {
                let mut iter = transport::icmpv6_packet_iter(&mut self.rx);
                let received = iter.next_with_timeout(timeout)?;
                Ok(received.map(|(pkt, source)| (pkt.packet().to_vec(), source)))
            }
        }
    }
}
