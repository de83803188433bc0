//! Integer math primitives shared by the liquidity formulas.
//!
//! Everything operates on 512-bit unsigned integers so that products of
//! two 256-bit quantities never overflow. All rounding is floor; callers
//! that need another direction must ask for it explicitly.

use alloy::primitives::U512;

/// Share units permanently locked by the pool on the first deposit.
///
/// The first mint is reduced by this amount, which caps the cost of the
/// classic share-price inflation attack against early depositors.
pub const MINIMUM_LIQUIDITY: u64 = 1000;

/// Floor integer square root.
///
/// Babylonian iteration: start above the root and descend until the
/// sequence stops decreasing. The loop is bounded because each step
/// strictly decreases while staying >= floor(sqrt(y)).
///
/// # Arguments
///
/// * `y` - The radicand
///
/// # Returns
///
/// The largest `z` with `z * z <= y`
#[must_use]
pub fn sqrt(y: U512) -> U512 {
    let one = U512::from(1u64);
    let two = U512::from(2u64);

    if y <= U512::from(3u64) {
        // floor(sqrt(y)) is 0 for 0 and 1 for 1..=3
        return if y.is_zero() { U512::ZERO } else { one };
    }

    let mut z = y;
    let mut x = y / two + one;
    while x < z {
        z = x;
        x = (y / x + x) / two;
    }
    z
}
