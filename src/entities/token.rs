//! Token identities.
//!
//! A token is identified by its chain id and contract address; equality
//! and hashing look at nothing else. Decimals, symbol, and name ride
//! along as opaque metadata for callers, and this crate never interprets
//! them beyond constructing the pair's own share token.

use std::fmt::{self, Display};
use std::hash::{Hash, Hasher};

use alloy::primitives::Address;
use serde::{Deserialize, Serialize};

use crate::errors::Error;

/// A fungible token deployed on an EVM-compatible chain.
#[derive(Clone, Debug, Eq, Serialize, Deserialize)]
pub struct Token {
    /// Chain the token contract is deployed on
    chain_id: u64,
    /// Address of the token contract
    address: Address,
    /// Decimal places of the token's smallest unit
    decimals: u8,
    /// Ticker symbol, if known
    symbol: Option<String>,
    /// Human-readable name, if known
    name: Option<String>,
}

/// Tokens are compared by identity only: chain id and address. Metadata
/// (decimals, symbol, name) never participates, so the same deployment
/// described with and without metadata is one token.
impl PartialEq for Token {
    fn eq(&self, other: &Self) -> bool {
        self.chain_id == other.chain_id && self.address == other.address
    }
}

impl Hash for Token {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.chain_id.hash(state);
        self.address.hash(state);
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.symbol {
            Some(symbol) => write!(f, "{symbol}"),
            None => write!(f, "{}", self.address),
        }
    }
}

impl Token {
    /// Creates a token without metadata.
    ///
    /// # Arguments
    ///
    /// * `chain_id` - Chain the token contract is deployed on
    /// * `address` - Address of the token contract
    /// * `decimals` - Decimal places of the token's smallest unit
    #[must_use]
    pub const fn new(chain_id: u64, address: Address, decimals: u8) -> Self {
        Self {
            chain_id,
            address,
            decimals,
            symbol: None,
            name: None,
        }
    }

    /// Creates a token carrying symbol and name metadata.
    ///
    /// # Arguments
    ///
    /// * `chain_id` - Chain the token contract is deployed on
    /// * `address` - Address of the token contract
    /// * `decimals` - Decimal places of the token's smallest unit
    /// * `symbol` - Ticker symbol
    /// * `name` - Human-readable name
    #[must_use]
    pub const fn with_metadata(
        chain_id: u64,
        address: Address,
        decimals: u8,
        symbol: Option<String>,
        name: Option<String>,
    ) -> Self {
        Self {
            chain_id,
            address,
            decimals,
            symbol,
            name,
        }
    }

    /// The chain the token contract is deployed on.
    #[must_use]
    pub const fn chain_id(&self) -> u64 {
        self.chain_id
    }

    /// The address of the token contract.
    #[must_use]
    pub const fn address(&self) -> Address {
        self.address
    }

    /// Decimal places of the token's smallest unit.
    #[must_use]
    pub const fn decimals(&self) -> u8 {
        self.decimals
    }

    /// The ticker symbol, if known.
    #[must_use]
    pub fn symbol(&self) -> Option<&str> {
        self.symbol.as_deref()
    }

    /// The human-readable name, if known.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Whether the two tokens live on the same chain.
    #[must_use]
    pub const fn same_chain(&self, other: &Self) -> bool {
        self.chain_id == other.chain_id
    }

    /// Whether this token sorts before `other` in the canonical pair
    /// ordering (byte-wise address comparison, lower first).
    ///
    /// # Arguments
    ///
    /// * `other` - The token to compare against
    ///
    /// # Errors
    ///
    /// Returns [`Error::ChainMismatch`] when the tokens are on different
    /// chains and [`Error::IdenticalAddresses`] when they share one
    /// address; neither pair can be ordered.
    pub fn sorts_before(&self, other: &Self) -> Result<bool, Error> {
        if !self.same_chain(other) {
            return Err(Error::ChainMismatch {
                ours: self.chain_id,
                theirs: other.chain_id,
            });
        }
        if self.address == other.address {
            return Err(Error::IdenticalAddresses);
        }
        Ok(self.address < other.address)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::entities::test_helpers::*;

    #[test]
    fn test_equality_ignores_metadata() {
        let bare = token(1, "0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48");
        let described = Token::with_metadata(
            1,
            bare.address(),
            6,
            Some("USDC".to_string()),
            Some("USD Coin".to_string()),
        );

        assert_eq!(bare, described);

        let other_chain = token(3, "0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48");
        assert_ne!(bare, other_chain);
    }

    #[test]
    fn test_sorts_before() {
        let dai = token(1, "0x6B175474E89094C44Da98b954EedeAC495271d0F");
        let usdc = token(1, "0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48");

        assert!(dai.sorts_before(&usdc).unwrap());
        assert!(!usdc.sorts_before(&dai).unwrap());
    }

    #[test]
    fn test_sorts_before_rejects_cross_chain() {
        let mainnet = token(1, "0x6B175474E89094C44Da98b954EedeAC495271d0F");
        let testnet = token(3, "0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48");

        assert_eq!(
            mainnet.sorts_before(&testnet),
            Err(Error::ChainMismatch { ours: 1, theirs: 3 })
        );
    }

    #[test]
    fn test_sorts_before_rejects_self() {
        let dai = token(1, "0x6B175474E89094C44Da98b954EedeAC495271d0F");

        assert_eq!(dai.sorts_before(&dai), Err(Error::IdenticalAddresses));
    }

    #[test]
    fn test_display() {
        let bare = token(1, "0x6B175474E89094C44Da98b954EedeAC495271d0F");
        assert_eq!(
            bare.to_string(),
            "0x6B175474E89094C44Da98b954EedeAC495271d0F"
        );

        let described = Token::with_metadata(1, bare.address(), 18, Some("DAI".to_string()), None);
        assert_eq!(described.to_string(), "DAI");
    }
}
