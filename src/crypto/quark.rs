//! Quark proof-of-work hash
//!
//! Nine rounds of 512-bit hashes over six functions. Three of the rounds
//! pick between two functions by bit 3 of the previous digest's first byte.
//! The block hash is the first 32 bytes of the last digest.

use crate::core::Hash256;
use bmw_hash::Bmw512;
use groestl::Groestl512;
use jh::Jh512;
use sha2::Digest;
use sha3::Keccak512;
use skein::Skein512;

type Hash512 = [u8; 64];

/// Bit of the first digest byte that selects the branch
const BRANCH_MASK: u8 = 8;

fn digest512<D: Digest>(data: &[u8]) -> Hash512 {
    let mut out = [0u8; 64];
    out.copy_from_slice(&D::digest(data));
    out
}

fn blake512(data: &[u8]) -> Hash512 {
    let mut out = [0u8; 64];
    out.copy_from_slice(&<blake_hash::Blake512 as blake_hash::Digest>::digest(data));
    out
}

fn bmw512(data: &[u8]) -> Hash512 {
    digest512::<Bmw512>(data)
}

fn groestl512(data: &[u8]) -> Hash512 {
    digest512::<Groestl512>(data)
}

fn skein512(data: &[u8]) -> Hash512 {
    digest512::<Skein512>(data)
}

fn jh512(data: &[u8]) -> Hash512 {
    digest512::<Jh512>(data)
}

fn keccak512(data: &[u8]) -> Hash512 {
    digest512::<Keccak512>(data)
}

fn branch(
    input: &Hash512,
    set: fn(&[u8]) -> Hash512,
    clear: fn(&[u8]) -> Hash512,
) -> Hash512 {
    if input[0] & BRANCH_MASK != 0 {
        set(input)
    } else {
        clear(input)
    }
}

/// Quark hash of `data` in internal byte order
pub fn quark_hash(data: &[u8]) -> Hash256 {
    let hash = blake512(data);
    let hash = bmw512(&hash);
    let hash = branch(&hash, groestl512, skein512);
    let hash = groestl512(&hash);
    let hash = jh512(&hash);
    let hash = branch(&hash, blake512, bmw512);
    let hash = keccak512(&hash);
    let hash = skein512(&hash);
    let hash = branch(&hash, keccak512, jh512);

    let mut out = [0u8; 32];
    out.copy_from_slice(&hash[..32]);
    Hash256(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header(merkle_root: &str, time: u32, nonce: u32) -> Vec<u8> {
        let mut data = Vec::with_capacity(80);
        data.extend_from_slice(&1i32.to_le_bytes());
        data.extend_from_slice(&[0u8; 32]);
        data.extend_from_slice(Hash256::from_hex(merkle_root).unwrap().as_bytes());
        data.extend_from_slice(&time.to_le_bytes());
        data.extend_from_slice(&0x1e0f_fff0u32.to_le_bytes());
        data.extend_from_slice(&nonce.to_le_bytes());
        data
    }

    #[test]
    fn test_round_functions_empty_input() {
        assert_eq!(
            hex::encode(blake512(b"")),
            "a8cfbbd73726062df0c6864dda65defe58ef0cc52a5625090fa17601e1eecd1b628e94f396ae402a00acc9eab77b4d4c2e852aaaa25a636d80af3fc7913ef5b8"
        );
        assert_eq!(
            hex::encode(bmw512(b"")),
            "6a725655c42bc8a2a20549dd5a233a6a2beb01616975851fd122504e604b46af7d96697d0b6333db1d1709d6df328d2a6c786551b0cce2255e8c7332b4819c0e"
        );
        assert_eq!(
            hex::encode(keccak512(b"")),
            "0eab42de4c3ceb9235fc91acffe746b29c29a8c366b7c60e4e67c466f36a4304c00fa9caf9d87976ba469bcbe06713b435f091ef2769fb160cdab33d3670680e"
        );
        assert_eq!(
            hex::encode(skein512(b"")),
            "bc5b4c50925519c290cc634277ae3d6257212395cba733bbad37a4af0fa06af41fca7903d06564fea7a2d3730dbdb80c1f85562dfcc070334ea4d1d9e72cba7a"
        );
    }

    #[test]
    fn test_pivx_mainnet_genesis() {
        // Public PIVX genesis header, a known Quark result
        let data = header(
            "1b2ef6e2f28be914103a277377ae7729dcd125dfeb8bf97bd5964ba72b6dc39b",
            1_454_124_731,
            2_402_015,
        );
        assert_eq!(
            quark_hash(&data).to_hex(),
            "0000041e482b9b9691d98eefb48473405c0b8ec31b76df3797c74a78680ef818"
        );
    }

    #[test]
    fn test_differs_from_double_sha256() {
        let data = header(
            "69ce58136f49e4b752e4a9d932dca99dea3d0e6847f6e685bf595c7709623dca",
            1_538_783_565,
            4_974_290,
        );
        let quark = quark_hash(&data);
        assert_eq!(
            quark.to_hex(),
            "c9b627cd7af564c2586bfaa81e8b2da994f4a47abd2e6fca72aec92af8612e5a"
        );
        assert_ne!(quark, crate::crypto::hash256(&data));
    }
}
