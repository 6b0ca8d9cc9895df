use soroban_sdk::{Address, Env};

use crate::error::Error;
use crate::storage;
use crate::types::AccessState;

/// Fails with `ContractPaused` while the gate is closed.
///
/// Called first by every value-moving entry point.
pub fn require_active(env: &Env) -> Result<(), Error> {
    if storage::get_access(env).paused {
        return Err(Error::ContractPaused);
    }
    Ok(())
}

/// Authenticates `caller` and checks it is the current owner.
pub fn require_owner(env: &Env, caller: &Address) -> Result<AccessState, Error> {
    caller.require_auth();
    let access = storage::get_access(env);
    if access.owner != *caller {
        return Err(Error::NotOwner);
    }
    Ok(access)
}

pub fn set_paused(env: &Env, caller: &Address, paused: bool) -> Result<(), Error> {
    let mut access = require_owner(env, caller)?;
    match (access.paused, paused) {
        (true, true) => return Err(Error::ContractPaused),
        (false, false) => return Err(Error::ContractNotPaused),
        _ => {}
    }
    access.paused = paused;
    storage::set_access(env, &access);
    Ok(())
}

/// Reassigns the owner and returns the previous one.
pub fn transfer_ownership(
    env: &Env,
    caller: &Address,
    new_owner: &Address,
) -> Result<Address, Error> {
    let mut access = require_owner(env, caller)?;
    // No zero address exists on Soroban; the contract itself can never sign.
    if *new_owner == env.current_contract_address() {
        return Err(Error::InvalidOwner);
    }
    let previous = core::mem::replace(&mut access.owner, new_owner.clone());
    storage::set_access(env, &access);
    Ok(previous)
}
