//! Events emitted by vault and registry operations.
//!
//! Events are immutable records appended to each component's event log.
//! They are the observability surface of the contract layer: external glue
//! drains them after a call and forwards them wherever they need to go.

use alloy_primitives::{Address, U256};
use serde::{Deserialize, Serialize};

/// Value credited to the vault's custodied balance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepositReceived {
    pub depositor: Address,
    pub amount: U256,
}

/// Funds released to a recipient against a consumed authorization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WithdrawalExecuted {
    pub recipient: Address,
    pub amount: U256,
    pub nonce: U256,
}

/// A signer entered the authorized set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignerAdded {
    pub signer: Address,
}

/// A signer left the authorized set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignerRemoved {
    pub signer: Address,
}

/// Enum wrapper for all contract events, enabling uniform handling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContractEvent {
    DepositReceived(DepositReceived),
    WithdrawalExecuted(WithdrawalExecuted),
    SignerAdded(SignerAdded),
    SignerRemoved(SignerRemoved),
}
