//! Cryptographic utilities
//!
//! This module provides:
//! - SHA-256 / double SHA-256 / HASH160 hashing
//! - The Quark header hash
//! - Merkle root calculation
//! - Base58Check address encoding against a version table

pub mod base58;
pub mod hash;
pub mod merkle;
pub mod quark;

pub use base58::{decode_address, encode_address, pubkey_address, AddressError};
pub use hash::{double_sha256, hash160, hash256, sha256};
pub use merkle::calculate_merkle_root;
pub use quark::quark_hash;
