//! Custody vault releasing funds against signed, single-use authorizations.
//!
//! A `Vault` holds a custodied balance and processes withdrawals only when
//! presented with a valid secp256k1 signature over the canonical withdrawal
//! message, produced by a signer the `AuthorizationRegistry` currently
//! trusts. Every authorization carries a caller-chosen nonce that is
//! consumed on first use, so no signature can release funds twice.
//!
//! # Modules
//! - `errors`: vault and registry error types
//! - `events`: events emitted by vault and registry operations
//! - `security`: reentrancy guard and nonce bookkeeping
//! - `authorization`: canonical withdrawal message encoding and hashing
//! - `crypto`: signature recovery to a signer address
//! - `registry`: the authorized-signer set and its admin surface
//! - `vault`: deposits, balance tracking, verified withdrawals

pub mod authorization;
pub mod crypto;
pub mod errors;
pub mod events;
pub mod registry;
pub mod security;
pub mod vault;
