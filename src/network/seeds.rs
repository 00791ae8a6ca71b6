//! Bootstrap peer seeds
//!
//! Networks ship two kinds of seeds: DNS seed records handed to an external
//! resolver, and compact fixed addresses compiled into the binary. Fixed
//! seeds are expanded into full peer addresses with a randomized "last seen"
//! time between one and two weeks in the past, so they rank below freshly
//! gossiped peers in the address manager.

use chrono::{DateTime, Duration, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr};

bitflags::bitflags! {
    /// Services a peer advertises
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct ServiceFlags: u64 {
        /// Full node able to serve the complete chain
        const NODE_NETWORK = 1 << 0;
    }
}

/// One week in seconds
pub const ONE_WEEK_SECS: i64 = 7 * 24 * 60 * 60;

// =============================================================================
// Seed Records
// =============================================================================

/// A DNS seed: display name plus the host queried for peer addresses
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DnsSeed {
    pub name: String,
    pub host: String,
}

impl DnsSeed {
    pub fn new(name: impl Into<String>, host: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            host: host.into(),
        }
    }
}

/// Compact fixed seed: 16-byte IPv6 (IPv4-mapped for v4 peers) plus port
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SeedSpec6 {
    pub addr: [u8; 16],
    pub port: u16,
}

impl SeedSpec6 {
    /// IPv4 seed stored in IPv4-mapped form
    pub fn from_ipv4(ip: Ipv4Addr, port: u16) -> Self {
        Self {
            addr: ip.to_ipv6_mapped().octets(),
            port,
        }
    }

    /// Socket address, unmapping IPv4 peers
    pub fn socket_addr(&self) -> SocketAddr {
        let v6 = Ipv6Addr::from(self.addr);
        let ip = match v6.to_ipv4_mapped() {
            Some(v4) => IpAddr::V4(v4),
            None => IpAddr::V6(v6),
        };
        SocketAddr::new(ip, self.port)
    }
}

/// A fixed seed expanded into a peer-address record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedAddress {
    pub addr: SocketAddr,
    pub services: ServiceFlags,
    pub last_seen: DateTime<Utc>,
}

// =============================================================================
// Expansion
// =============================================================================

/// Expand compact seeds into peer addresses.
///
/// Output order and length match `records`. Each `last_seen` falls strictly
/// inside `(now - 14 days, now - 7 days)`.
pub fn expand_fixed_seeds<R: Rng + ?Sized>(
    records: &[SeedSpec6],
    now: DateTime<Utc>,
    rng: &mut R,
) -> Vec<SeedAddress> {
    let week = Duration::seconds(ONE_WEEK_SECS);

    records
        .iter()
        .map(|record| {
            let jitter = Duration::seconds(rng.gen_range(1..ONE_WEEK_SECS));
            SeedAddress {
                addr: record.socket_addr(),
                services: ServiceFlags::NODE_NETWORK,
                last_seen: now - week - jitter,
            }
        })
        .collect()
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn records() -> Vec<SeedSpec6> {
        vec![
            SeedSpec6::from_ipv4(Ipv4Addr::new(95, 179, 193, 119), 49444),
            SeedSpec6::from_ipv4(Ipv4Addr::new(45, 32, 176, 66), 49444),
            SeedSpec6 {
                addr: Ipv6Addr::LOCALHOST.octets(),
                port: 8333,
            },
        ]
    }

    #[test]
    fn test_ipv4_mapping() {
        let seed = SeedSpec6::from_ipv4(Ipv4Addr::new(95, 179, 193, 119), 49444);
        assert_eq!(&seed.addr[..12], &[0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0xff, 0xff]);
        assert_eq!(
            seed.socket_addr(),
            "95.179.193.119:49444".parse::<SocketAddr>().unwrap()
        );
    }

    #[test]
    fn test_ipv6_seed_stays_v6() {
        let seed = SeedSpec6 {
            addr: Ipv6Addr::LOCALHOST.octets(),
            port: 8333,
        };
        assert!(seed.socket_addr().is_ipv6());
    }

    #[test]
    fn test_expansion_preserves_count_and_order() {
        let mut rng = StdRng::seed_from_u64(7);
        let now = Utc::now();
        let expanded = expand_fixed_seeds(&records(), now, &mut rng);

        assert_eq!(expanded.len(), 3);
        for (record, addr) in records().iter().zip(&expanded) {
            assert_eq!(addr.addr, record.socket_addr());
            assert_eq!(addr.services, ServiceFlags::NODE_NETWORK);
        }
    }

    #[test]
    fn test_last_seen_window() {
        let mut rng = StdRng::seed_from_u64(42);
        let now = Utc::now();
        let oldest = now - Duration::seconds(2 * ONE_WEEK_SECS);
        let newest = now - Duration::seconds(ONE_WEEK_SECS);

        let many: Vec<SeedSpec6> = records().into_iter().cycle().take(500).collect();
        for addr in expand_fixed_seeds(&many, now, &mut rng) {
            assert!(addr.last_seen > oldest);
            assert!(addr.last_seen < newest);
        }
    }

    #[test]
    fn test_empty_records() {
        let mut rng = StdRng::seed_from_u64(0);
        assert!(expand_fixed_seeds(&[], Utc::now(), &mut rng).is_empty());
    }
}
