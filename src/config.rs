//! Per-chain factory and template address tables.
//!
//! The pair-address derivation is keyed by two deployed contracts: the
//! factory that performs the CREATE2 and the template pair implementation
//! it clones. Both differ per chain, so callers supply one table of each,
//! keyed by chain id. The tables are plain values passed to constructors;
//! nothing in this crate reads ambient configuration.

use std::collections::HashMap;
use std::str::FromStr;

use alloy::primitives::Address;

use crate::errors::Error;

/// Chain id to deployed contract address.
pub type AddressMap = HashMap<u64, Address>;

/// Parse an address string into a typed [`Address`].
///
/// Accepts `0x`-prefixed 20-byte hex in any case; an EIP-55 checksum is
/// accepted but not required.
///
/// # Arguments
///
/// * `s` - The address string
///
/// # Errors
///
/// Returns [`Error::InvalidAddress`] if the string is not 20 bytes of hex.
pub fn parse_address(s: &str) -> Result<Address, Error> {
    Address::from_str(s).map_err(|_| Error::InvalidAddress(s.to_string()))
}

/// Look up the address registered for a chain.
///
/// # Arguments
///
/// * `map` - The per-chain address table
/// * `chain_id` - The chain to resolve
///
/// # Errors
///
/// Returns [`Error::MissingAddressConfig`] if the table has no entry for
/// the chain. There is no fallback entry.
pub fn lookup(map: &AddressMap, chain_id: u64) -> Result<Address, Error> {
    map.get(&chain_id)
        .copied()
        .ok_or(Error::MissingAddressConfig { chain_id })
}

/// Decode an address table from a JSON object of the form
/// `{ "<chain id>": "<address>" }`.
///
/// # Arguments
///
/// * `json` - The JSON document
///
/// # Errors
///
/// Returns [`Error::InvalidConfig`] if the document is not such an
/// object, or [`Error::InvalidAddress`] for a malformed address value.
/// Malformed entries are rejected, never skipped.
pub fn address_map_from_json(json: &str) -> Result<AddressMap, Error> {
    let raw: HashMap<u64, String> =
        serde_json::from_str(json).map_err(|e| Error::InvalidConfig(e.to_string()))?;

    let mut map = AddressMap::with_capacity(raw.len());
    for (chain_id, address) in raw {
        map.insert(chain_id, parse_address(&address)?);
    }
    Ok(map)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use alloy::primitives::address;

    use super::*;

    #[test]
    fn test_parse_address() {
        // case-insensitive, checksum not enforced
        for input in &[
            "0x4Eb4445EBc238080307A576Cee6B82baf39D5658",
            "0x4eb4445ebc238080307a576cee6b82baf39d5658",
        ] {
            assert_eq!(
                parse_address(input).unwrap(),
                address!("0x4Eb4445EBc238080307A576Cee6B82baf39D5658")
            );
        }
    }

    #[test]
    fn test_parse_address_rejects_malformed() {
        for input in &["", "0x1234", "not an address", "0xzz..zz"] {
            assert_eq!(
                parse_address(input),
                Err(Error::InvalidAddress((*input).to_string()))
            );
        }
    }

    #[test]
    fn test_lookup() {
        let mut map = AddressMap::new();
        map.insert(1, address!("0x4Eb4445EBc238080307A576Cee6B82baf39D5658"));

        assert_eq!(
            lookup(&map, 1).unwrap(),
            address!("0x4Eb4445EBc238080307A576Cee6B82baf39D5658")
        );
        assert_eq!(
            lookup(&map, 42),
            Err(Error::MissingAddressConfig { chain_id: 42 })
        );
    }

    #[test]
    fn test_address_map_from_json() {
        let map = address_map_from_json(
            r#"{
                "1": "0x4Eb4445EBc238080307A576Cee6B82baf39D5658",
                "3": "0x0000000000000000000000000000000000000000"
            }"#,
        )
        .unwrap();

        assert_eq!(map.len(), 2);
        assert_eq!(
            map[&1],
            address!("0x4Eb4445EBc238080307A576Cee6B82baf39D5658")
        );
        assert_eq!(map[&3], Address::ZERO);
    }

    #[test]
    fn test_address_map_from_json_rejects_bad_entries() {
        assert!(matches!(
            address_map_from_json("[]"),
            Err(Error::InvalidConfig(_))
        ));
        assert_eq!(
            address_map_from_json(r#"{ "1": "0xdead" }"#),
            Err(Error::InvalidAddress("0xdead".to_string()))
        );
    }
}
