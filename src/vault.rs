//! Vault: custodied balance, deposits, and signature-verified withdrawals.
//!
//! The withdrawal path is the security boundary of the crate. Its ordering
//! is fixed: full verification first, nonce consumption second, the
//! external value transfer strictly last. A port of this type into a
//! multi-threaded service must hold a per-vault lock around the entire
//! verify-mark-transfer sequence; in-process, `&mut self` serializes calls.

use alloy_primitives::{Address, U256};

use crate::authorization::WithdrawalAuthorization;
use crate::crypto::recover_signer;
use crate::errors::VaultError;
use crate::events::{ContractEvent, DepositReceived, WithdrawalExecuted};
use crate::registry::AuthorizationSource;
use crate::security::{NonceTracker, ReentrancyGuard};

/// Outbound value-transfer primitive: the platform's send operation.
///
/// Reports completion like a low-level call; the vault treats `false` as a
/// failed transfer. Control transiently leaves the vault here, which is why
/// the nonce is consumed before this is ever invoked.
pub trait TransferBackend {
    /// Send `amount` to `recipient`. Returns `false` if the transfer did
    /// not complete.
    fn transfer(&mut self, recipient: Address, amount: U256) -> bool;
}

/// Custody vault releasing funds only against signed, single-use
/// authorizations.
///
/// The trusted registry is fixed at construction; the type offers no way to
/// re-point it afterwards, so the trust source cannot be swapped under
/// depositors. The vault's own identity and the chain context are bound
/// into every signed message.
#[derive(Debug)]
pub struct Vault<R: AuthorizationSource> {
    /// Own identity, bound into every authorization (domain binding)
    address: Address,
    /// Deployment context identifier, also bound into every authorization
    chain_id: U256,
    /// Custodied balance
    balance: U256,
    /// Consumed authorization nonces
    nonces: NonceTracker,
    /// Trusted signer registry, read-only from the vault's side
    registry: R,
    /// Security: reentrancy guard
    reentrancy_guard: ReentrancyGuard,
    /// Emitted events log (append-only)
    events: Vec<ContractEvent>,
}

impl<R: AuthorizationSource> Vault<R> {
    /// Create a vault with its identity, chain context, and trusted
    /// registry. Balance starts at zero.
    pub fn new(address: Address, chain_id: U256, registry: R) -> Result<Self, VaultError> {
        if address == Address::ZERO {
            return Err(VaultError::ZeroAddress);
        }
        Ok(Self {
            address,
            chain_id,
            balance: U256::ZERO,
            nonces: NonceTracker::new(),
            registry,
            reentrancy_guard: ReentrancyGuard::new(),
            events: Vec::new(),
        })
    }

    // ───────────────────────── Deposit ─────────────────────────

    /// Deposit value into the vault. Any caller may deposit.
    ///
    /// Credits the balance with overflow protection and emits
    /// `DepositReceived`.
    pub fn deposit(
        &mut self,
        depositor: Address,
        amount: U256,
    ) -> Result<ContractEvent, VaultError> {
        if !self.reentrancy_guard.acquire() {
            return Err(VaultError::Reentrancy);
        }
        let result = self.credit(depositor, amount);
        self.reentrancy_guard.release();
        result
    }

    fn credit(&mut self, depositor: Address, amount: U256) -> Result<ContractEvent, VaultError> {
        self.balance = self
            .balance
            .checked_add(amount)
            .ok_or(VaultError::Overflow)?;

        let event = ContractEvent::DepositReceived(DepositReceived { depositor, amount });
        self.events.push(event.clone());
        Ok(event)
    }

    // ───────────────────────── Withdraw ─────────────────────────

    /// Process a withdrawal request against a signed authorization.
    ///
    /// Verification order, fixed:
    /// 1. reject a zero amount;
    /// 2. reconstruct the canonical message for
    ///    `(self, chain, recipient, amount, nonce)` and recover the signer;
    /// 3. the recovered signer must be currently authorized;
    /// 4. the nonce must be unused;
    /// 5. the balance must cover the amount.
    ///
    /// Only then is state touched: the nonce is consumed, the transfer runs,
    /// and on success the balance is debited. A failed transfer leaves the
    /// nonce consumed; the authorization is burned either way, and the
    /// caller needs a freshly signed one to retry.
    ///
    /// Returns the transferred amount.
    pub fn withdraw<T: TransferBackend>(
        &mut self,
        backend: &mut T,
        recipient: Address,
        amount: U256,
        nonce: U256,
        signature: &[u8],
    ) -> Result<U256, VaultError> {
        if !self.reentrancy_guard.acquire() {
            return Err(VaultError::Reentrancy);
        }
        let result = self.withdraw_inner(backend, recipient, amount, nonce, signature);
        self.reentrancy_guard.release();
        result
    }

    fn withdraw_inner<T: TransferBackend>(
        &mut self,
        backend: &mut T,
        recipient: Address,
        amount: U256,
        nonce: U256,
        signature: &[u8],
    ) -> Result<U256, VaultError> {
        if amount == U256::ZERO {
            return Err(VaultError::InvalidAmount);
        }

        let authorization = WithdrawalAuthorization {
            vault: self.address,
            chain_id: self.chain_id,
            recipient,
            amount,
            nonce,
        };

        let signer = recover_signer(authorization.signing_digest(), signature)
            .ok_or(VaultError::InvalidSignature)?;

        if !self.registry.is_authorized(&signer) {
            return Err(VaultError::NotAuthorized { signer });
        }

        if self.nonces.is_used(nonce) {
            return Err(VaultError::NonceAlreadyUsed { nonce });
        }

        if amount > self.balance {
            return Err(VaultError::InsufficientBalance {
                requested: amount,
                available: self.balance,
            });
        }

        // Consume the nonce before the external transfer: a re-entering
        // recipient must observe the authorization as already spent.
        self.nonces.use_nonce(nonce);

        if !backend.transfer(recipient, amount) {
            // The nonce stays consumed.
            return Err(VaultError::TransferFailed { recipient, amount });
        }

        self.balance = self
            .balance
            .checked_sub(amount)
            .ok_or(VaultError::Overflow)?;

        let event = ContractEvent::WithdrawalExecuted(WithdrawalExecuted {
            recipient,
            amount,
            nonce,
        });
        self.events.push(event);
        Ok(amount)
    }

    // ───────────────────────── Queries ─────────────────────────

    /// The vault's own identity.
    pub fn address(&self) -> Address {
        self.address
    }

    /// The chain context bound into every authorization.
    pub fn chain_id(&self) -> U256 {
        self.chain_id
    }

    /// Total custodied amount.
    pub fn balance(&self) -> U256 {
        self.balance
    }

    /// Whether an authorization nonce has been consumed.
    pub fn is_nonce_used(&self, nonce: U256) -> bool {
        self.nonces.is_used(nonce)
    }

    // ───────────────────────── Events ─────────────────────────

    /// Get all emitted events.
    pub fn events(&self) -> &[ContractEvent] {
        &self.events
    }

    /// Drain all events (consume and clear).
    pub fn drain_events(&mut self) -> Vec<ContractEvent> {
        std::mem::take(&mut self.events)
    }
}
