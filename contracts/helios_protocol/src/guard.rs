//! Per-instance mutual-exclusion lock for entry points that both mutate
//! ledger state and call out to the token contract.
//!
//! The lock is an instance-storage flag checked and set on entry. A
//! reentrant invocation — the token call synchronously re-entering a
//! guarded entry point — finds the flag set and fails with
//! [`Error::ReentrantCall`] instead of observing half-applied state.
//! Release is structural: the flag is cleared when the guard value drops,
//! on every exit path, and a failed invocation reverts the flag along
//! with the rest of its writes.

use soroban_sdk::Env;

use crate::storage::DataKey;
use crate::Error;

pub struct EntryLock {
    env: Env,
}

impl EntryLock {
    /// Acquire the lock, failing if any guarded operation is in flight.
    pub fn acquire(env: &Env) -> Result<Self, Error> {
        if env.storage().instance().has(&DataKey::EntryLock) {
            return Err(Error::ReentrantCall);
        }
        env.storage().instance().set(&DataKey::EntryLock, &true);
        Ok(EntryLock { env: env.clone() })
    }
}

impl Drop for EntryLock {
    fn drop(&mut self) {
        self.env.storage().instance().remove(&DataKey::EntryLock);
    }
}
