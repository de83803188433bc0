//! Rational prices between two tokens.
//!
//! A price is the exact ratio `numerator / denominator` quoting one token
//! in terms of another. The ratio is never reduced and never converted to
//! floating point; equality is cross-multiplied fraction equality.

use std::fmt::{self, Display};

use alloy::primitives::{U256, U512};

use crate::entities::token::Token;

/// An exact exchange rate: `numerator / denominator` units of `quote`
/// per one unit of `base` (in raw smallest-unit terms).
#[derive(Clone, Debug, Eq)]
pub struct Price {
    /// The token the price is quoted for
    base: Token,
    /// The token the price is quoted in
    quote: Token,
    /// Ratio denominator, an amount of `base`
    denominator: U256,
    /// Ratio numerator, an amount of `quote`
    numerator: U256,
}

/// Prices are equal when they quote the same token pair and their
/// fractions agree. The comparison cross-multiplies in 512 bits, so
/// 100/101 and 200/202 are the same price.
impl PartialEq for Price {
    fn eq(&self, other: &Self) -> bool {
        self.base == other.base
            && self.quote == other.quote
            && U512::from(self.numerator) * U512::from(other.denominator)
                == U512::from(other.numerator) * U512::from(self.denominator)
    }
}

impl Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{} {} per {}",
            self.numerator, self.denominator, self.quote, self.base
        )
    }
}

impl Price {
    /// Creates a price from its fraction parts.
    ///
    /// # Arguments
    ///
    /// * `base` - The token the price is quoted for
    /// * `quote` - The token the price is quoted in
    /// * `denominator` - Amount of `base` on the denominator side
    /// * `numerator` - Amount of `quote` on the numerator side
    #[must_use]
    pub const fn new(base: Token, quote: Token, denominator: U256, numerator: U256) -> Self {
        Self {
            base,
            quote,
            denominator,
            numerator,
        }
    }

    /// The token the price is quoted for.
    #[must_use]
    pub const fn base(&self) -> &Token {
        &self.base
    }

    /// The token the price is quoted in.
    #[must_use]
    pub const fn quote(&self) -> &Token {
        &self.quote
    }

    /// The fraction denominator.
    #[must_use]
    pub const fn denominator(&self) -> U256 {
        self.denominator
    }

    /// The fraction numerator.
    #[must_use]
    pub const fn numerator(&self) -> U256 {
        self.numerator
    }

    /// The same exchange rate quoted in the other direction.
    #[must_use]
    pub fn invert(&self) -> Self {
        Self {
            base: self.quote.clone(),
            quote: self.base.clone(),
            denominator: self.numerator,
            numerator: self.denominator,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::entities::test_helpers::*;

    #[test]
    fn test_equality_cross_multiplies() {
        let dai = token(1, "0x6B175474E89094C44Da98b954EedeAC495271d0F");
        let usdc = token(1, "0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48");

        let price = Price::new(dai.clone(), usdc.clone(), U256::from(100), U256::from(101));
        let scaled = Price::new(dai.clone(), usdc.clone(), U256::from(200), U256::from(202));
        let other = Price::new(dai.clone(), usdc.clone(), U256::from(100), U256::from(102));

        assert_eq!(price, scaled);
        assert_ne!(price, other);
        // same fraction, opposite orientation
        assert_ne!(
            price,
            Price::new(usdc, dai, U256::from(100), U256::from(101))
        );
    }

    #[test]
    fn test_invert() {
        let dai = token(1, "0x6B175474E89094C44Da98b954EedeAC495271d0F");
        let usdc = token(1, "0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48");

        let price = Price::new(dai.clone(), usdc.clone(), U256::from(100), U256::from(101));
        let inverted = price.invert();

        assert_eq!(inverted.base(), &usdc);
        assert_eq!(inverted.quote(), &dai);
        assert_eq!(inverted.denominator(), U256::from(101));
        assert_eq!(inverted.numerator(), U256::from(100));
        assert_eq!(inverted.invert(), price);
    }
}
