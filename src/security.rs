//! Security primitives shared by the vault's state-changing operations.
//!
//! Provides the reentrancy guard wrapped around deposits and withdrawals,
//! and the nonce tracker backing single-use authorization consumption.

use alloy_primitives::U256;
use std::collections::HashSet;

/// Reentrancy guard preventing nested calls into protected functions.
///
/// An operation acquires the guard before touching state and releases it on
/// completion. Any nested call attempt fails.
#[derive(Debug, Clone)]
pub struct ReentrancyGuard {
    locked: bool,
}

impl ReentrancyGuard {
    /// Create a new unlocked guard.
    pub fn new() -> Self {
        Self { locked: false }
    }

    /// Acquire the guard. Returns `false` if already locked (reentrancy
    /// attempt).
    pub fn acquire(&mut self) -> bool {
        if self.locked {
            return false;
        }
        self.locked = true;
        true
    }

    /// Release the guard.
    pub fn release(&mut self) {
        self.locked = false;
    }

    /// Check if currently locked.
    pub fn is_locked(&self) -> bool {
        self.locked
    }
}

impl Default for ReentrancyGuard {
    fn default() -> Self {
        Self::new()
    }
}

/// Consumed-nonce set for replay protection.
///
/// Nonces are vault-global and caller-chosen; uniqueness is the only
/// requirement. A nonce transitions `unused -> used` exactly once and never
/// back, for the lifetime of the tracker.
#[derive(Debug, Clone, Default)]
pub struct NonceTracker {
    used: HashSet<U256>,
}

impl NonceTracker {
    /// Create a new empty tracker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if a nonce has been consumed.
    pub fn is_used(&self, nonce: U256) -> bool {
        self.used.contains(&nonce)
    }

    /// Consume a nonce. Returns `false` if it was already used (replay
    /// attempt).
    pub fn use_nonce(&mut self, nonce: U256) -> bool {
        self.used.insert(nonce)
    }

    /// Number of consumed nonces.
    pub fn count(&self) -> usize {
        self.used.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // --- ReentrancyGuard tests ---

    #[test]
    fn test_reentrancy_guard_acquire_release() {
        let mut guard = ReentrancyGuard::new();
        assert!(!guard.is_locked());
        assert!(guard.acquire());
        assert!(guard.is_locked());
        guard.release();
        assert!(!guard.is_locked());
    }

    #[test]
    fn test_reentrancy_guard_double_acquire_fails() {
        let mut guard = ReentrancyGuard::new();
        assert!(guard.acquire());
        assert!(!guard.acquire(), "Second acquire must fail");
    }

    #[test]
    fn test_reentrancy_guard_reacquire_after_release() {
        let mut guard = ReentrancyGuard::new();
        assert!(guard.acquire());
        guard.release();
        assert!(guard.acquire(), "Should succeed after release");
    }

    // --- NonceTracker tests ---

    #[test]
    fn test_nonce_tracker_use_once() {
        let mut tracker = NonceTracker::new();
        assert!(tracker.use_nonce(U256::from(1)));
        assert!(tracker.is_used(U256::from(1)));
    }

    #[test]
    fn test_nonce_tracker_replay_rejected() {
        let mut tracker = NonceTracker::new();
        assert!(tracker.use_nonce(U256::from(1)));
        assert!(!tracker.use_nonce(U256::from(1)), "Second use must return false");
    }

    #[test]
    fn test_nonce_tracker_nonces_need_not_be_sequential() {
        let mut tracker = NonceTracker::new();
        assert!(tracker.use_nonce(U256::from(1_000_000)));
        assert!(tracker.use_nonce(U256::from(7)));
        assert!(tracker.use_nonce(U256::MAX));
        assert_eq!(tracker.count(), 3);
    }

    #[test]
    fn test_nonce_tracker_unused_nonce() {
        let tracker = NonceTracker::new();
        assert!(!tracker.is_used(U256::from(99)));
    }
}
