//! Authorization registry: the set of signers trusted to approve
//! withdrawals, and the admin surface that maintains it.

use alloy_primitives::Address;
use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;
use std::sync::{Arc, RwLock};

use crate::errors::RegistryError;
use crate::events::{ContractEvent, SignerAdded, SignerRemoved};

/// Read-only authorization query the vault performs during withdrawal
/// verification. Must be side-effect free.
pub trait AuthorizationSource {
    /// Whether `signer` is currently authorized to approve withdrawals.
    fn is_authorized(&self, signer: &Address) -> bool;
}

/// Registry of addresses currently authorized to sign withdrawal messages.
///
/// A single admin, fixed at construction, may add or remove signers. Both
/// mutations are idempotent: re-adding a present signer or removing an
/// absent one is a no-op rather than an error.
#[derive(Debug, Clone)]
pub struct AuthorizationRegistry {
    admin: Address,
    authorized: HashSet<Address>,
    /// Emitted events log (append-only)
    events: Vec<ContractEvent>,
}

impl AuthorizationRegistry {
    /// Create a registry with an empty authorized set.
    pub fn new(admin: Address) -> Result<Self, RegistryError> {
        Self::with_signers(admin, std::iter::empty())
    }

    /// Create a registry seeded with an initial authorized set.
    ///
    /// Which signers to seed (none, the deployer, a fixed operator set) is
    /// caller policy.
    pub fn with_signers(
        admin: Address,
        signers: impl IntoIterator<Item = Address>,
    ) -> Result<Self, RegistryError> {
        if admin == Address::ZERO {
            return Err(RegistryError::ZeroAdmin);
        }
        Ok(Self {
            admin,
            authorized: signers.into_iter().collect(),
            events: Vec::new(),
        })
    }

    /// Check whether an address is currently authorized. Pure read.
    pub fn is_authorized(&self, signer: &Address) -> bool {
        self.authorized.contains(signer)
    }

    /// Add a signer to the authorized set. Admin-only.
    ///
    /// Emits `SignerAdded` when the set actually changes.
    pub fn add_signer(&mut self, caller: Address, signer: Address) -> Result<(), RegistryError> {
        self.check_admin(caller)?;
        if self.authorized.insert(signer) {
            self.events
                .push(ContractEvent::SignerAdded(SignerAdded { signer }));
        }
        Ok(())
    }

    /// Remove a signer from the authorized set. Admin-only.
    ///
    /// Emits `SignerRemoved` when the set actually changes.
    pub fn remove_signer(&mut self, caller: Address, signer: Address) -> Result<(), RegistryError> {
        self.check_admin(caller)?;
        if self.authorized.remove(&signer) {
            self.events
                .push(ContractEvent::SignerRemoved(SignerRemoved { signer }));
        }
        Ok(())
    }

    /// The registry admin.
    pub fn admin(&self) -> Address {
        self.admin
    }

    /// Number of currently authorized signers.
    pub fn signer_count(&self) -> usize {
        self.authorized.len()
    }

    /// Get all emitted events.
    pub fn events(&self) -> &[ContractEvent] {
        &self.events
    }

    /// Drain all events (consume and clear).
    pub fn drain_events(&mut self) -> Vec<ContractEvent> {
        std::mem::take(&mut self.events)
    }

    fn check_admin(&self, caller: Address) -> Result<(), RegistryError> {
        if caller != self.admin {
            return Err(RegistryError::Unauthorized { caller });
        }
        Ok(())
    }
}

impl AuthorizationSource for AuthorizationRegistry {
    fn is_authorized(&self, signer: &Address) -> bool {
        AuthorizationRegistry::is_authorized(self, signer)
    }
}

// Wrapper impls so a vault can share the registry with the admin that
// mutates it: Rc<RefCell<_>> single-threaded, Arc<RwLock<_>> in a
// multi-threaded port.

impl<R: AuthorizationSource> AuthorizationSource for RefCell<R> {
    fn is_authorized(&self, signer: &Address) -> bool {
        self.borrow().is_authorized(signer)
    }
}

impl<R: AuthorizationSource + ?Sized> AuthorizationSource for Rc<R> {
    fn is_authorized(&self, signer: &Address) -> bool {
        (**self).is_authorized(signer)
    }
}

impl<R: AuthorizationSource + ?Sized> AuthorizationSource for Arc<R> {
    fn is_authorized(&self, signer: &Address) -> bool {
        (**self).is_authorized(signer)
    }
}

impl<R: AuthorizationSource> AuthorizationSource for RwLock<R> {
    /// A poisoned lock answers "not authorized" rather than panicking:
    /// authorization checks fail closed.
    fn is_authorized(&self, signer: &Address) -> bool {
        self.read().map(|r| r.is_authorized(signer)).unwrap_or(false)
    }
}
