//! # Role registry
//!
//! Two independent capability sets — **developers** (create and operate
//! projects) and **oracles** (verify production data) — plus a single
//! admin identity that is the only one allowed to mutate them.
//!
//! Membership is boolean and idempotent: granting a capability twice or
//! revoking an absent one succeeds without effect, and one address may
//! hold both capabilities at once. Role storage lives on the instance
//! tier under its own key enum, separate from the ledger keys in
//! [`crate::storage`].

use soroban_sdk::{contracttype, Address, Env};

use crate::{storage, Error};

/// Role storage keys (Instance tier).
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum RbacKey {
    Admin,
    Developer(Address),
    Oracle(Address),
}

/// Set the admin. Must be called exactly once.
pub fn init_admin(env: &Env, admin: &Address) -> Result<(), Error> {
    if env.storage().instance().has(&RbacKey::Admin) {
        return Err(Error::AlreadyInitialized);
    }
    env.storage().instance().set(&RbacKey::Admin, admin);
    storage::bump_instance(env);
    Ok(())
}

/// The current admin, or `None` before `init`.
pub fn admin(env: &Env) -> Option<Address> {
    env.storage().instance().get(&RbacKey::Admin)
}

pub fn require_admin(env: &Env, caller: &Address) -> Result<(), Error> {
    match admin(env) {
        Some(current) if current == *caller => Ok(()),
        _ => Err(Error::NotAuthorized),
    }
}

/// Hand the admin identity over. The previous admin loses it immediately.
pub fn transfer_admin(env: &Env, current: &Address, new_admin: &Address) -> Result<(), Error> {
    require_admin(env, current)?;
    env.storage().instance().set(&RbacKey::Admin, new_admin);
    storage::bump_instance(env);
    Ok(())
}

pub fn set_developer(env: &Env, target: &Address, granted: bool) {
    set_membership(env, &RbacKey::Developer(target.clone()), granted);
}

pub fn set_oracle(env: &Env, target: &Address, granted: bool) {
    set_membership(env, &RbacKey::Oracle(target.clone()), granted);
}

fn set_membership(env: &Env, key: &RbacKey, granted: bool) {
    if granted {
        env.storage().instance().set(key, &true);
    } else {
        env.storage().instance().remove(key);
    }
    storage::bump_instance(env);
}

pub fn is_developer(env: &Env, who: &Address) -> bool {
    env.storage()
        .instance()
        .has(&RbacKey::Developer(who.clone()))
}

pub fn is_oracle(env: &Env, who: &Address) -> bool {
    env.storage().instance().has(&RbacKey::Oracle(who.clone()))
}

pub fn require_developer(env: &Env, caller: &Address) -> Result<(), Error> {
    if is_developer(env, caller) {
        Ok(())
    } else {
        Err(Error::NotAuthorized)
    }
}

pub fn require_oracle(env: &Env, caller: &Address) -> Result<(), Error> {
    if is_oracle(env, caller) {
        Ok(())
    } else {
        Err(Error::NotAuthorized)
    }
}

/// Production reports may come from either capability set.
pub fn require_reporter(env: &Env, caller: &Address) -> Result<(), Error> {
    if is_developer(env, caller) || is_oracle(env, caller) {
        Ok(())
    } else {
        Err(Error::NotAuthorized)
    }
}
