//! Raw token amounts.
//!
//! An amount pairs a [`Token`] with a non-negative quantity of its
//! smallest unit. Quantities are raw integers; decimal scaling and
//! display formatting are the caller's concern.

use alloy::primitives::U256;
use derive_more::Display;

use crate::entities::token::Token;

/// A quantity of a specific token, denominated in its smallest unit.
#[derive(Clone, Debug, Display, PartialEq, Eq)]
#[display("{raw} {token}")]
pub struct TokenAmount {
    /// The token the quantity is denominated in
    token: Token,
    /// The quantity in the token's smallest unit
    raw: U256,
}

impl TokenAmount {
    /// Creates an amount from a raw quantity.
    ///
    /// # Arguments
    ///
    /// * `token` - The token the quantity is denominated in
    /// * `raw` - The quantity in the token's smallest unit
    #[must_use]
    pub const fn new(token: Token, raw: U256) -> Self {
        Self { token, raw }
    }

    /// The token the quantity is denominated in.
    #[must_use]
    pub const fn token(&self) -> &Token {
        &self.token
    }

    /// The raw quantity.
    #[must_use]
    pub const fn raw(&self) -> U256 {
        self.raw
    }

    /// Whether the quantity is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.raw.is_zero()
    }
}
