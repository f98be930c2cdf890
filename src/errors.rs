//! Error types for the vault and the authorization registry.
//!
//! Every failure is terminal for the call that produced it; nothing here is
//! retried internally. The only state change that survives a failure is the
//! nonce burn behind `TransferFailed`.

use alloy_primitives::{Address, U256};
use thiserror::Error;

/// Vault-specific errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VaultError {
    #[error("Withdrawal amount must be nonzero")]
    InvalidAmount,

    #[error("Insufficient balance: requested {requested}, available {available}")]
    InsufficientBalance { requested: U256, available: U256 },

    #[error("Signature does not recover to a well-formed address")]
    InvalidSignature,

    #[error("Recovered signer {signer} is not authorized")]
    NotAuthorized { signer: Address },

    #[error("Authorization nonce already used: {nonce}")]
    NonceAlreadyUsed { nonce: U256 },

    #[error("Transfer of {amount} to {recipient} failed; authorization consumed")]
    TransferFailed { recipient: Address, amount: U256 },

    #[error("Vault identity must not be the zero address")]
    ZeroAddress,

    #[error("Arithmetic overflow in balance calculation")]
    Overflow,

    #[error("Reentrancy detected")]
    Reentrancy,
}

/// Registry-specific errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("Unauthorized: caller {caller} is not the registry admin")]
    Unauthorized { caller: Address },

    #[error("Registry admin must not be the zero address")]
    ZeroAdmin,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vault_error_display() {
        let err = VaultError::InsufficientBalance {
            requested: U256::from(5),
            available: U256::from(2),
        };
        assert_eq!(
            err.to_string(),
            "Insufficient balance: requested 5, available 2"
        );
    }

    #[test]
    fn test_nonce_error_carries_nonce() {
        let err = VaultError::NonceAlreadyUsed {
            nonce: U256::from(42),
        };
        assert!(err.to_string().contains("42"));
    }

    #[test]
    fn test_not_authorized_carries_signer() {
        let signer = Address::repeat_byte(0xAB);
        let err = VaultError::NotAuthorized { signer };
        // Address renders as checksummed hex; compare case-insensitively.
        assert!(err.to_string().to_lowercase().contains("0xabab"));
    }

    #[test]
    fn test_registry_error_display() {
        let caller = Address::repeat_byte(0x01);
        let err = RegistryError::Unauthorized { caller };
        assert!(err.to_string().starts_with("Unauthorized"));
    }
}
