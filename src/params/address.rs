//! Address version prefixes
//!
//! Every checksummed text encoding starts with a network-specific prefix
//! that tells the decoder both the address class and the network it
//! belongs to.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Classes of base58-encoded data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AddressClass {
    /// Pay-to-pubkey-hash address
    PubkeyHash,
    /// Pay-to-script-hash address
    ScriptHash,
    /// WIF private key
    SecretKey,
    /// BIP32 extended public key
    ExtPublicKey,
    /// BIP32 extended private key
    ExtSecretKey,
}

impl AddressClass {
    /// All classes, in table order
    pub const ALL: [AddressClass; 5] = [
        AddressClass::PubkeyHash,
        AddressClass::ScriptHash,
        AddressClass::SecretKey,
        AddressClass::ExtPublicKey,
        AddressClass::ExtSecretKey,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            AddressClass::PubkeyHash => "pubkey-hash",
            AddressClass::ScriptHash => "script-hash",
            AddressClass::SecretKey => "secret-key",
            AddressClass::ExtPublicKey => "ext-public-key",
            AddressClass::ExtSecretKey => "ext-secret-key",
        }
    }
}

impl fmt::Display for AddressClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Per-network base58 prefixes plus the BIP44 coin type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressVersionTable {
    pub pubkey_hash: u8,
    pub script_hash: u8,
    pub secret_key: u8,
    pub ext_public_key: [u8; 4],
    pub ext_secret_key: [u8; 4],
    pub ext_coin_type: [u8; 4],
}

impl AddressVersionTable {
    /// Prefix bytes for one address class
    pub fn prefix(&self, class: AddressClass) -> &[u8] {
        match class {
            AddressClass::PubkeyHash => std::slice::from_ref(&self.pubkey_hash),
            AddressClass::ScriptHash => std::slice::from_ref(&self.script_hash),
            AddressClass::SecretKey => std::slice::from_ref(&self.secret_key),
            AddressClass::ExtPublicKey => &self.ext_public_key,
            AddressClass::ExtSecretKey => &self.ext_secret_key,
        }
    }

    /// BIP44 coin type as a big-endian integer
    pub fn bip44_coin_type(&self) -> u32 {
        u32::from_be_bytes(self.ext_coin_type)
    }

    /// First pair of classes whose prefixes are equal, if any
    pub fn find_duplicate(&self) -> Option<(AddressClass, AddressClass)> {
        for (i, a) in AddressClass::ALL.iter().enumerate() {
            for b in &AddressClass::ALL[i + 1..] {
                if self.prefix(*a) == self.prefix(*b) {
                    return Some((*a, *b));
                }
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> AddressVersionTable {
        AddressVersionTable {
            pubkey_hash: 55,
            script_hash: 108,
            secret_key: 117,
            ext_public_key: [0x06, 0x3f, 0x44, 0x23],
            ext_secret_key: [0x09, 0x61, 0x22, 0x2d],
            ext_coin_type: [0x80, 0x00, 0x00, 0x01],
        }
    }

    #[test]
    fn test_prefix_lookup() {
        let t = table();
        assert_eq!(t.prefix(AddressClass::PubkeyHash), &[55]);
        assert_eq!(t.prefix(AddressClass::ExtSecretKey), &[0x09, 0x61, 0x22, 0x2d]);
        assert_eq!(t.bip44_coin_type(), 0x8000_0001);
    }

    #[test]
    fn test_duplicate_detection() {
        let mut t = table();
        assert_eq!(t.find_duplicate(), None);

        t.secret_key = t.script_hash;
        assert_eq!(
            t.find_duplicate(),
            Some((AddressClass::ScriptHash, AddressClass::SecretKey))
        );
    }
}
