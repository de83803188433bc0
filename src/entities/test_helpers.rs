use alloy::primitives::U256;

use crate::config::{parse_address, AddressMap};
use crate::entities::amount::TokenAmount;
use crate::entities::token::Token;

/// Factory deployments used across the pair tests: mainnet plus the
/// zero-address placeholder registered for the Ropsten-style test chain.
#[allow(dead_code)]
pub fn factories() -> AddressMap {
    address_map(&[
        (1, "0x4Eb4445EBc238080307A576Cee6B82baf39D5658"),
        (3, "0x0000000000000000000000000000000000000000"),
    ])
}

/// Template (pair implementation) deployments matching [`factories`].
#[allow(dead_code)]
pub fn templates() -> AddressMap {
    address_map(&[
        (1, "0x2EC05dbD2e7d6Ee00FAfB3045EaE880F10796f1D"),
        (3, "0x0000000000000000000000000000000000000000"),
    ])
}

#[allow(dead_code)]
pub fn address_map(entries: &[(u64, &str)]) -> AddressMap {
    entries
        .iter()
        .map(|(chain_id, address)| {
            #[allow(clippy::unwrap_used)]
            (*chain_id, parse_address(address).unwrap())
        })
        .collect()
}

#[allow(dead_code)]
pub fn token(chain_id: u64, address: &str) -> Token {
    #[allow(clippy::unwrap_used)]
    Token::new(chain_id, parse_address(address).unwrap(), 18)
}

#[allow(dead_code)]
pub fn amount(token: &Token, raw: u64) -> TokenAmount {
    TokenAmount::new(token.clone(), U256::from(raw))
}
