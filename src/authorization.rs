//! Canonical withdrawal message encoding and hashing.
//!
//! A withdrawal authorization is signed off-system and reconstructed here,
//! per call, from the withdrawal parameters. The byte layout is fixed-width
//! and order-sensitive so that no two distinct parameter tuples encode to
//! the same bytes, and it must stay bit-exact with external signer tooling.

use alloy_primitives::{keccak256, Address, B256, U256};

/// Packed authorization length:
/// vault (20) + chain id (32) + recipient (20) + amount (32) + nonce (32).
pub const PACKED_AUTHORIZATION_LEN: usize = 136;

/// Prefix applied to the 32-byte message hash before signing, matching the
/// personal-message convention of standard wallet tooling.
pub const PERSONAL_MESSAGE_PREFIX: &[u8] = b"\x19Ethereum Signed Message:\n32";

/// The tuple an authorized signer approves: one exact withdrawal against one
/// exact vault on one exact chain, usable at most once.
///
/// Vault identity and chain id are domain bindings. They prevent a signature
/// produced for one vault or deployment from being replayed against another,
/// even when both trust the same signer set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WithdrawalAuthorization {
    pub vault: Address,
    pub chain_id: U256,
    pub recipient: Address,
    pub amount: U256,
    pub nonce: U256,
}

impl WithdrawalAuthorization {
    /// Tightly packed canonical bytes in signing order.
    ///
    /// Addresses occupy exactly 20 bytes; integers exactly 32 bytes,
    /// big-endian. Fixed widths keep the encoding injective.
    pub fn packed_bytes(&self) -> [u8; PACKED_AUTHORIZATION_LEN] {
        let mut buf = [0u8; PACKED_AUTHORIZATION_LEN];
        buf[0..20].copy_from_slice(self.vault.as_slice());
        buf[20..52].copy_from_slice(&self.chain_id.to_be_bytes::<32>());
        buf[52..72].copy_from_slice(self.recipient.as_slice());
        buf[72..104].copy_from_slice(&self.amount.to_be_bytes::<32>());
        buf[104..136].copy_from_slice(&self.nonce.to_be_bytes::<32>());
        buf
    }

    /// Keccak-256 hash of the packed bytes.
    pub fn message_hash(&self) -> B256 {
        keccak256(self.packed_bytes())
    }

    /// The digest actually signed: the message hash wrapped in the
    /// personal-message prefix and hashed again.
    pub fn signing_digest(&self) -> B256 {
        let mut buf = Vec::with_capacity(PERSONAL_MESSAGE_PREFIX.len() + 32);
        buf.extend_from_slice(PERSONAL_MESSAGE_PREFIX);
        buf.extend_from_slice(self.message_hash().as_slice());
        keccak256(&buf)
    }
}
