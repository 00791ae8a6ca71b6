//! Core value types: 256-bit integers, scripts, transactions and blocks

pub mod block;
pub mod script;
pub mod transaction;
pub mod uint;

pub use block::{Block, BlockHeader, BLOCK_HEADER_SIZE, ZEROCOIN_HEADER_VERSION};
pub use script::{Script, OP_CHECKSIG};
pub use transaction::{
    write_compact_size, Amount, OutPoint, Transaction, TxIn, TxOut, COIN, SEQUENCE_FINAL, ZCENT,
};
pub use uint::{
    hash_meets_limit, serialize_u256_hex, target_from_compact, u256_to_hex, Hash256,
    HashParseError, U256,
};
