//! Local network address discovery.

use std::io;
use std::net::{IpAddr, UdpSocket};

/// Address returned whenever the outbound interface can't be determined.
pub const LOOPBACK: &str = "127.0.0.1";

/// Default probe target; only used to let the routing table pick an interface.
pub const DEFAULT_PROBE_ADDRESS: &str = "8.8.8.8:80";

/// IPv4 address of the interface the OS would use to reach `probe_address`.
///
/// Connecting a UDP socket sends nothing; it only binds the socket to the
/// local address the OS would route through. Falls back to [`LOOPBACK`] on
/// any failure.
pub fn local_ip_via(probe_address: &str) -> String {
    match outbound_addr(probe_address) {
        Ok(ip) if !ip.is_unspecified() => ip.to_string(),
        Ok(ip) => {
            tracing::debug!("Probe via {} yielded {}, using loopback", probe_address, ip);
            LOOPBACK.to_string()
        }
        Err(e) => {
            tracing::debug!("Probe via {} failed ({}), using loopback", probe_address, e);
            LOOPBACK.to_string()
        }
    }
}

fn outbound_addr(probe_address: &str) -> io::Result<IpAddr> {
    let socket = UdpSocket::bind("0.0.0.0:0")?;
    socket.connect(probe_address)?;
    Ok(socket.local_addr()?.ip())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::Ipv4Addr;

    #[test]
    fn malformed_probe_falls_back_to_loopback() {
        assert_eq!(local_ip_via("no-port-here"), LOOPBACK);
    }

    #[test]
    fn ipv6_probe_on_ipv4_socket_falls_back() {
        assert_eq!(local_ip_via("[::1]:80"), LOOPBACK);
    }

    #[test]
    fn loopback_probe_resolves_to_loopback() {
        assert_eq!(local_ip_via("127.0.0.1:9"), LOOPBACK);
    }

    #[test]
    fn local_ip_is_ipv4_shaped() {
        let ip = local_ip_via(DEFAULT_PROBE_ADDRESS);
        assert!(ip.parse::<Ipv4Addr>().is_ok(), "not IPv4: {}", ip);
    }
}
