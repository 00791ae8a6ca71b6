//! Base58Check codec over a network's address version table
//!
//! Encoding prepends the class prefix and appends the first four bytes of the
//! double SHA-256 checksum. Decoding checks the checksum and then matches the
//! prefix against the table, so data from another network is rejected.

use super::hash::{double_sha256, hash160};
use crate::params::{AddressClass, AddressVersionTable};
use thiserror::Error;

/// Checksum length in bytes
const CHECKSUM_LEN: usize = 4;

/// Errors that can occur while decoding addresses
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AddressError {
    #[error("Invalid base58: {0}")]
    InvalidBase58(String),
    #[error("Address too short: {0} bytes")]
    TooShort(usize),
    #[error("Checksum mismatch")]
    BadChecksum,
    #[error("Unknown version prefix for this network")]
    UnknownPrefix,
}

/// Encode `payload` as `class` using the network's prefixes
pub fn encode_address(table: &AddressVersionTable, class: AddressClass, payload: &[u8]) -> String {
    let mut data = table.prefix(class).to_vec();
    data.extend_from_slice(payload);

    let checksum = double_sha256(&data);
    data.extend_from_slice(&checksum[..CHECKSUM_LEN]);

    bs58::encode(data).into_string()
}

/// Pubkey-hash address for a serialized public key
pub fn pubkey_address(table: &AddressVersionTable, pubkey: &[u8]) -> String {
    encode_address(table, AddressClass::PubkeyHash, &hash160(pubkey))
}

/// Decode a base58check string, returning its class and payload.
///
/// Longer prefixes are tried first so a four-byte extended-key prefix is
/// never mistaken for a one-byte address prefix.
pub fn decode_address(
    table: &AddressVersionTable,
    encoded: &str,
) -> Result<(AddressClass, Vec<u8>), AddressError> {
    let data = bs58::decode(encoded)
        .into_vec()
        .map_err(|e| AddressError::InvalidBase58(e.to_string()))?;

    if data.len() <= CHECKSUM_LEN {
        return Err(AddressError::TooShort(data.len()));
    }

    let (body, checksum) = data.split_at(data.len() - CHECKSUM_LEN);
    if &double_sha256(body)[..CHECKSUM_LEN] != checksum {
        return Err(AddressError::BadChecksum);
    }

    let mut classes = AddressClass::ALL;
    classes.sort_by_key(|c| std::cmp::Reverse(table.prefix(*c).len()));

    classes
        .iter()
        .find_map(|class| {
            body.strip_prefix(table.prefix(*class))
                .map(|payload| (*class, payload.to_vec()))
        })
        .ok_or(AddressError::UnknownPrefix)
}
