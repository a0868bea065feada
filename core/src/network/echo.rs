//! ICMP and ICMPv6 echo packet construction and reply matching.

use std::net::IpAddr;

use pnet::packet::Packet;
use pnet::packet::icmp::{self, IcmpCode, IcmpPacket, IcmpTypes};
use pnet::packet::icmpv6::{self, Icmpv6Code, Icmpv6Types};

pub const ECHO_HDR_LEN: usize = 8;
pub const ECHO_PAYLOAD: &[u8; 16] = b"pingwatch-probe!";

/// Builds an echo request for the address family of `target`.
pub fn echo_request(target: &IpAddr, identifier: u16, sequence: u16) -> Option<Vec<u8>> {
    match target {
        IpAddr::V4(_) => echo_request_v4(identifier, sequence),
        IpAddr::V6(_) => echo_request_v6(identifier, sequence),
    }
}

fn echo_request_v4(identifier: u16, sequence: u16) -> Option<Vec<u8>> {
    let mut pkt = vec![0u8; ECHO_HDR_LEN + ECHO_PAYLOAD.len()];
    let mut echo = icmp::echo_request::MutableEchoRequestPacket::new(&mut pkt)?;

    echo.set_icmp_type(IcmpTypes::EchoRequest);
    echo.set_icmp_code(IcmpCode::new(0));
    echo.set_identifier(identifier);
    echo.set_sequence_number(sequence);
    echo.set_payload(ECHO_PAYLOAD);

    echo.set_checksum(0);
    let csm = icmp::checksum(&IcmpPacket::new(echo.packet())?);
    echo.set_checksum(csm);
    Some(pkt)
}

// The kernel fills in the ICMPv6 checksum on raw sockets.
fn echo_request_v6(identifier: u16, sequence: u16) -> Option<Vec<u8>> {
    let mut pkt = vec![0u8; ECHO_HDR_LEN + ECHO_PAYLOAD.len()];
    let mut echo = icmpv6::echo_request::MutableEchoRequestPacket::new(&mut pkt)?;

    echo.set_icmpv6_type(Icmpv6Types::EchoRequest);
    echo.set_icmpv6_code(Icmpv6Code::new(0));
    echo.set_identifier(identifier);
    echo.set_sequence_number(sequence);
    echo.set_payload(ECHO_PAYLOAD);
    echo.set_checksum(0);
    Some(pkt)
}

/// Returns the sequence number if `bytes` is an echo reply carrying `identifier`.
pub fn match_echo_reply(target: &IpAddr, bytes: &[u8], identifier: u16) -> Option<u16> {
    match target {
        IpAddr::V4(_) => {
            let reply = icmp::echo_reply::EchoReplyPacket::new(bytes)?;
            (reply.get_icmp_type() == IcmpTypes::EchoReply && reply.get_identifier() == identifier)
                .then(|| reply.get_sequence_number())
        }
        IpAddr::V6(_) => {
            let reply = icmpv6::echo_reply::EchoReplyPacket::new(bytes)?;
            (reply.get_icmpv6_type() == Icmpv6Types::EchoReply
                && reply.get_identifier() == identifier)
                .then(|| reply.get_sequence_number())
        }
    }
}

/// Rewrites an echo request into the reply a well-behaved peer would send.
#[cfg(test)]
pub(crate) fn reply_for(target: &IpAddr, request: &[u8]) -> Vec<u8> {
    let mut reply = request.to_vec();
    reply[0] = match target {
        IpAddr::V4(_) => IcmpTypes::EchoReply.0,
        IpAddr::V6(_) => Icmpv6Types::EchoReply.0,
    };
    reply
}
