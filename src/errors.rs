//! Error types surfaced by the library.
//!
//! Every operation here is pure computation, so all errors are terminal
//! for the call that raised them. There are no retries and no partial
//! results.

use thiserror::Error;

/// Errors raised by pair construction, lookups, and liquidity math.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The two tokens belong to different chains
    #[error("CHAIN_IDS: tokens are on chains {ours} and {theirs}")]
    ChainMismatch {
        /// Chain id of the first token
        ours: u64,
        /// Chain id of the second token
        theirs: u64,
    },

    /// Two distinct tokens share one address, so they cannot be ordered
    #[error("ADDRESSES: tokens have identical addresses")]
    IdenticalAddresses,

    /// No factory or template address is registered for the chain
    #[error("no factory/template address configured for chain {chain_id}")]
    MissingAddressConfig {
        /// Chain id with no table entry
        chain_id: u64,
    },

    /// The token is neither token0 nor token1 of the pair
    #[error("TOKEN: token is not part of the pair")]
    TokenNotInPair,

    /// A liquidity mint would produce a non-positive share amount
    #[error("INSUFFICIENT_INPUT_AMOUNT: deposit mints no liquidity")]
    InsufficientInputAmount,

    /// An address string could not be parsed as a 20-byte hex address
    #[error("invalid address: {0}")]
    InvalidAddress(String),

    /// An address table could not be decoded
    #[error("invalid address table: {0}")]
    InvalidConfig(String),
}
