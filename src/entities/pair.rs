//! The pair entity and its address derivation.
//!
//! A pair is deployed by a per-chain factory contract as an EIP-1167
//! minimal-proxy clone of a per-chain template implementation, via
//! CREATE2 salted with the two token addresses. That makes the pair
//! address a pure function of (factory, template, token0, token1), which
//! this module reproduces offline, byte for byte.
//!
//! The liquidity math mirrors the pool contract's integer share
//! accounting exactly: floor square root for the first deposit, floor
//! division for proportional mints and the protocol-fee adjustment.

use alloy::primitives::{keccak256, Address, U256, U512};

use crate::config::{self, AddressMap};
use crate::entities::amount::TokenAmount;
use crate::entities::price::Price;
use crate::entities::token::Token;
use crate::errors::Error;
use crate::math;

/// EIP-1167 minimal-proxy creation code up to the embedded
/// implementation address.
const CLONE_CODE_PREFIX: [u8; 20] = [
    0x3d, 0x60, 0x2d, 0x80, 0x60, 0x0a, 0x3d, 0x39, 0x81, 0xf3, 0x36, 0x3d, 0x3d, 0x37, 0x3d,
    0x3d, 0x3d, 0x36, 0x3d, 0x73,
];

/// EIP-1167 minimal-proxy creation code after the embedded
/// implementation address.
const CLONE_CODE_SUFFIX: [u8; 15] = [
    0x5a, 0xf4, 0x3d, 0x82, 0x80, 0x3e, 0x90, 0x3d, 0x91, 0x60, 0x2b, 0x57, 0xfd, 0x5b, 0xf3,
];

/// Decimals of every pair's liquidity share token.
const LIQUIDITY_TOKEN_DECIMALS: u8 = 18;

/// The 55-byte creation code of a minimal proxy cloning `template`.
fn clone_init_code(template: Address) -> [u8; 55] {
    let mut code = [0u8; 55];
    code[..20].copy_from_slice(&CLONE_CODE_PREFIX);
    code[20..40].copy_from_slice(template.as_slice());
    code[40..].copy_from_slice(&CLONE_CODE_SUFFIX);
    code
}

/// Computes the deterministic address of the pair for two tokens.
///
/// The token addresses are sorted ascending before hashing, so the result
/// does not depend on argument order. The salt is the keccak-256 hash of
/// the two packed token addresses; the init code is the minimal proxy
/// cloning `template`, matching the factory's on-chain CREATE2.
///
/// # Arguments
///
/// * `factory` - The factory contract performing the CREATE2
/// * `template` - The pair implementation the factory clones
/// * `token_a` - One token of the pair
/// * `token_b` - The other token of the pair
///
/// # Returns
///
/// The 20-byte pair address
#[must_use]
pub fn compute_pair_address(
    factory: Address,
    template: Address,
    token_a: &Token,
    token_b: &Token,
) -> Address {
    let (token0, token1) = if token_a.address() < token_b.address() {
        (token_a, token_b)
    } else {
        (token_b, token_a)
    };

    let mut packed = [0u8; 40];
    packed[..20].copy_from_slice(token0.address().as_slice());
    packed[20..].copy_from_slice(token1.address().as_slice());
    let salt = keccak256(packed);

    let pair = factory.create2_from_code(salt, clone_init_code(template));
    log::trace!(
        "entities::pair: derived {pair} for {}/{} from factory {factory}",
        token0.address(),
        token1.address()
    );
    pair
}

/// A two-token constant-product pool at a known reserve state.
///
/// Construction canonicalizes the token order (`token0` sorts before
/// `token1`) and derives the pool address once. A `Pair` never mutates;
/// model updated reserves by constructing a new value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pair {
    /// The token sorting first in the canonical order
    token0: Token,
    /// The token sorting second in the canonical order
    token1: Token,
    /// Pool reserve of `token0`
    reserve0: TokenAmount,
    /// Pool reserve of `token1`
    reserve1: TokenAmount,
    /// Deterministic pool address
    address: Address,
    /// The pool's liquidity share token
    liquidity_token: Token,
}

impl Pair {
    /// Creates a pair from its two reserves, in either order.
    ///
    /// # Arguments
    ///
    /// * `amount_a` - Reserve of one token
    /// * `amount_b` - Reserve of the other token
    /// * `factories` - Factory address per chain id
    /// * `templates` - Template (pair implementation) address per chain id
    ///
    /// # Errors
    ///
    /// * [`Error::ChainMismatch`] if the tokens are on different chains
    /// * [`Error::IdenticalAddresses`] if the tokens share one address
    /// * [`Error::MissingAddressConfig`] if either table lacks the chain
    pub fn new(
        amount_a: TokenAmount,
        amount_b: TokenAmount,
        factories: &AddressMap,
        templates: &AddressMap,
    ) -> Result<Self, Error> {
        let (amount0, amount1) = if amount_a.token().sorts_before(amount_b.token())? {
            (amount_a, amount_b)
        } else {
            (amount_b, amount_a)
        };

        let chain_id = amount0.token().chain_id();
        let factory = config::lookup(factories, chain_id)?;
        let template = config::lookup(templates, chain_id)?;
        let address = compute_pair_address(factory, template, amount0.token(), amount1.token());

        let liquidity_token = Token::with_metadata(
            chain_id,
            address,
            LIQUIDITY_TOKEN_DECIMALS,
            Some("WLP".to_string()),
            Some("Weir LP Token".to_string()),
        );

        log::debug!(
            "entities::pair: pair {address} on chain {chain_id} ({} / {})",
            amount0,
            amount1
        );

        Ok(Self {
            token0: amount0.token().clone(),
            token1: amount1.token().clone(),
            reserve0: amount0,
            reserve1: amount1,
            address,
            liquidity_token,
        })
    }

    /// Derives the pair address for two tokens without reserve state.
    ///
    /// Equals [`Pair::address`] of any pair constructed from the same
    /// tokens and tables.
    ///
    /// # Arguments
    ///
    /// * `token_a` - One token of the pair
    /// * `token_b` - The other token of the pair
    /// * `factories` - Factory address per chain id
    /// * `templates` - Template (pair implementation) address per chain id
    ///
    /// # Errors
    ///
    /// * [`Error::ChainMismatch`] if the tokens are on different chains
    /// * [`Error::MissingAddressConfig`] if either table lacks the chain
    pub fn address_for(
        token_a: &Token,
        token_b: &Token,
        factories: &AddressMap,
        templates: &AddressMap,
    ) -> Result<Address, Error> {
        if !token_a.same_chain(token_b) {
            return Err(Error::ChainMismatch {
                ours: token_a.chain_id(),
                theirs: token_b.chain_id(),
            });
        }

        let chain_id = token_a.chain_id();
        let factory = config::lookup(factories, chain_id)?;
        let template = config::lookup(templates, chain_id)?;
        Ok(compute_pair_address(factory, template, token_a, token_b))
    }

    /// The token sorting first in the canonical order.
    #[must_use]
    pub const fn token0(&self) -> &Token {
        &self.token0
    }

    /// The token sorting second in the canonical order.
    #[must_use]
    pub const fn token1(&self) -> &Token {
        &self.token1
    }

    /// The reserve of `token0`.
    #[must_use]
    pub const fn reserve0(&self) -> &TokenAmount {
        &self.reserve0
    }

    /// The reserve of `token1`.
    #[must_use]
    pub const fn reserve1(&self) -> &TokenAmount {
        &self.reserve1
    }

    /// The deterministic pool address.
    #[must_use]
    pub const fn address(&self) -> Address {
        self.address
    }

    /// The chain the pair lives on.
    #[must_use]
    pub const fn chain_id(&self) -> u64 {
        self.token0.chain_id()
    }

    /// The pool's liquidity share token: chain id of the pair, address of
    /// the pool, 18 decimals.
    #[must_use]
    pub const fn liquidity_token(&self) -> &Token {
        &self.liquidity_token
    }

    /// Whether `token` is one of the pair's two tokens.
    #[must_use]
    pub fn involves_token(&self, token: &Token) -> bool {
        *token == self.token0 || *token == self.token1
    }

    /// The pair's reserve of `token`.
    ///
    /// # Arguments
    ///
    /// * `token` - The token whose reserve to return
    ///
    /// # Errors
    ///
    /// Returns [`Error::TokenNotInPair`] if `token` is neither `token0`
    /// nor `token1`.
    pub fn reserve_of(&self, token: &Token) -> Result<&TokenAmount, Error> {
        if *token == self.token0 {
            Ok(&self.reserve0)
        } else if *token == self.token1 {
            Ok(&self.reserve1)
        } else {
            Err(Error::TokenNotInPair)
        }
    }

    /// The price of `token0` in terms of `token1`: reserve1 / reserve0.
    #[must_use]
    pub fn token0_price(&self) -> Price {
        Price::new(
            self.token0.clone(),
            self.token1.clone(),
            self.reserve0.raw(),
            self.reserve1.raw(),
        )
    }

    /// The price of `token1` in terms of `token0`: reserve0 / reserve1.
    #[must_use]
    pub fn token1_price(&self) -> Price {
        Price::new(
            self.token1.clone(),
            self.token0.clone(),
            self.reserve1.raw(),
            self.reserve0.raw(),
        )
    }

    /// The price of `token` in terms of the pair's other token.
    ///
    /// # Arguments
    ///
    /// * `token` - The token to quote
    ///
    /// # Errors
    ///
    /// Returns [`Error::TokenNotInPair`] if `token` is neither `token0`
    /// nor `token1`.
    pub fn price_of(&self, token: &Token) -> Result<Price, Error> {
        if *token == self.token0 {
            Ok(self.token0_price())
        } else if *token == self.token1 {
            Ok(self.token1_price())
        } else {
            Err(Error::TokenNotInPair)
        }
    }

    /// The liquidity shares minted for depositing both tokens at the
    /// pair's current reserves.
    ///
    /// On the first deposit (`total_supply` zero) the mint is the floor
    /// square root of the deposit product, less the pool's permanently
    /// locked [`math::MINIMUM_LIQUIDITY`]. Afterwards it is the smaller
    /// of the two pro-rata quotients, so an imbalanced deposit never
    /// dilutes existing holders. All divisions are floor.
    ///
    /// # Arguments
    ///
    /// * `total_supply` - Current liquidity token supply
    /// * `amount_a` - Deposit of one pair token
    /// * `amount_b` - Deposit of the other pair token
    ///
    /// # Errors
    ///
    /// Returns [`Error::InsufficientInputAmount`] if the deposit mints no
    /// shares.
    ///
    /// # Panics
    ///
    /// Panics if `total_supply` is not denominated in the pair's
    /// liquidity token, if the deposits do not cover exactly the pair's
    /// two tokens, or if a pair reserve is zero while `total_supply` is
    /// not.
    #[allow(clippy::panic_in_result_fn)]
    pub fn liquidity_minted(
        &self,
        total_supply: &TokenAmount,
        amount_a: &TokenAmount,
        amount_b: &TokenAmount,
    ) -> Result<TokenAmount, Error> {
        assert!(
            total_supply.token() == &self.liquidity_token,
            "total supply must be denominated in the pair's liquidity token"
        );
        let (amount0, amount1) = if amount_a.token() == &self.token0 {
            (amount_a, amount_b)
        } else {
            (amount_b, amount_a)
        };
        assert!(
            amount0.token() == &self.token0 && amount1.token() == &self.token1,
            "deposit must supply both pair tokens"
        );

        let minted = if total_supply.is_zero() {
            let product = U512::from(amount0.raw()) * U512::from(amount1.raw());
            math::sqrt(product)
                .checked_sub(U512::from(math::MINIMUM_LIQUIDITY))
                .unwrap_or(U512::ZERO)
        } else {
            let supply = U512::from(total_supply.raw());
            let liquidity0 = U512::from(amount0.raw()) * supply / U512::from(self.reserve0.raw());
            let liquidity1 = U512::from(amount1.raw()) * supply / U512::from(self.reserve1.raw());
            liquidity0.min(liquidity1)
        };

        if minted.is_zero() {
            return Err(Error::InsufficientInputAmount);
        }
        Ok(TokenAmount::new(
            self.liquidity_token.clone(),
            minted.to::<U256>(),
        ))
    }

    /// The amount of `token` a liquidity position redeems for at the
    /// pair's current reserves.
    ///
    /// With `fee_on`, the supply is first grown by the protocol-fee
    /// shares that a fee mint would create for the invariant growth since
    /// `k_last` (one sixth of the growth), diluting the position exactly
    /// as the pool contract would. The final pro-rata division is floor.
    ///
    /// # Arguments
    ///
    /// * `token` - The pair token to value the position in
    /// * `total_supply` - Current liquidity token supply
    /// * `liquidity` - The position being valued
    /// * `fee_on` - Whether protocol fee accounting is enabled
    /// * `k_last` - Reserve product recorded at the last fee mint;
    ///   required when `fee_on`
    ///
    /// # Errors
    ///
    /// Returns [`Error::TokenNotInPair`] if `token` is neither `token0`
    /// nor `token1`.
    ///
    /// # Panics
    ///
    /// Panics if `total_supply` or `liquidity` is not denominated in the
    /// pair's liquidity token, if `liquidity` exceeds `total_supply`, if
    /// `fee_on` without `k_last`, or if `total_supply` is zero while
    /// `liquidity` is redeemed.
    #[allow(clippy::panic_in_result_fn)]
    pub fn liquidity_value(
        &self,
        token: &Token,
        total_supply: &TokenAmount,
        liquidity: &TokenAmount,
        fee_on: bool,
        k_last: Option<U256>,
    ) -> Result<TokenAmount, Error> {
        let reserve = self.reserve_of(token)?;

        assert!(
            total_supply.token() == &self.liquidity_token,
            "total supply must be denominated in the pair's liquidity token"
        );
        assert!(
            liquidity.token() == &self.liquidity_token,
            "liquidity must be denominated in the pair's liquidity token"
        );
        assert!(
            liquidity.raw() <= total_supply.raw(),
            "liquidity exceeds total supply"
        );

        let effective_supply = if fee_on {
            assert!(
                k_last.is_some(),
                "k_last is required when fee accounting is on"
            );
            // SAFETY: presence asserted above
            #[allow(clippy::unwrap_used)]
            self.fee_adjusted_supply(total_supply.raw(), k_last.unwrap())
        } else {
            total_supply.raw()
        };

        let value =
            U512::from(reserve.raw()) * U512::from(liquidity.raw()) / U512::from(effective_supply);
        Ok(TokenAmount::new(token.clone(), value.to::<U256>()))
    }

    /// The liquidity supply after the protocol-fee mint for invariant
    /// growth since `k_last`.
    ///
    /// No growth (or `k_last` of zero, meaning no recorded fee event)
    /// leaves the supply unchanged. The `* 5` term fixes the protocol
    /// share at one sixth of the growth; it is a protocol constant, not a
    /// parameter.
    fn fee_adjusted_supply(&self, supply: U256, k_last: U256) -> U256 {
        if k_last.is_zero() {
            return supply;
        }

        let root_k = math::sqrt(U512::from(self.reserve0.raw()) * U512::from(self.reserve1.raw()));
        let root_k_last = math::sqrt(U512::from(k_last));
        if root_k <= root_k_last {
            return supply;
        }

        let numerator = U512::from(supply) * (root_k - root_k_last);
        let denominator = root_k * U512::from(5u64) + root_k_last;
        let fee_liquidity = numerator / denominator;
        supply + fee_liquidity.to::<U256>()
    }
}
