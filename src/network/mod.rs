//! Peer bootstrap data
//!
//! DNS seed records and fixed seed addresses, plus the service flags
//! advertised for expanded seeds. Resolution and transport live elsewhere.

pub mod seeds;

pub use seeds::{expand_fixed_seeds, DnsSeed, SeedAddress, SeedSpec6, ServiceFlags, ONE_WEEK_SECS};
