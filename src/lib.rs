/*!
 * # Weir - Constant-Product Pair Core
 *
 * Weir is a Rust library modelling two-token constant-product liquidity
 * pools on Ethereum and other EVM-compatible blockchains. It is the
 * offline half of a deployment scheme in which a factory contract deploys
 * minimal-proxy clones of a template pair contract.
 *
 * ## Core Features
 *
 * - **Deterministic Addresses**: Computes pair addresses offline, byte for
 *   byte identical to the factory's on-chain CREATE2 derivation
 * - **Canonical Ordering**: Stores reserves under the factory's canonical
 *   token ordering regardless of how callers supply them
 * - **Spot Prices**: Exposes reserve ratios as rational prices, never
 *   floating point
 * - **Liquidity Math**: Reproduces the pool's integer share accounting
 *   exactly, including the protocol-fee-on-growth adjustment
 *
 * ## Module Structure
 *
 * - `config`: Per-chain factory and template address tables
 * - `entities`: Tokens, amounts, prices, and the pair itself
 * - `errors`: Error types surfaced by the library
 * - `math`: Integer math primitives shared by the liquidity formulas
 * - `utils`: Utility functions and helpers
 */

/// Per-chain factory and template address tables
pub mod config;
/// Tokens, amounts, prices, and the pair itself
pub mod entities;
/// Error types surfaced by the library
pub mod errors;
/// Integer math primitives shared by the liquidity formulas
pub mod math;
/// Utility functions and helpers
pub mod utils;
