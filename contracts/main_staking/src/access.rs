use soroban_sdk::{symbol_short, Address, Env, Symbol};

use crate::{ContractError, TTL_EXTEND_TO, TTL_THRESHOLD};

// ── Storage keys ─────────────────────────────────────────────────────────────

const OWNER: Symbol = symbol_short!("OWNER");
const FROZEN: Symbol = symbol_short!("FROZEN");
const REWARD_TOKEN: Symbol = symbol_short!("RWD_TOK");
const INITIALIZED: Symbol = symbol_short!("INIT");

pub fn extend_ttl_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(TTL_THRESHOLD, TTL_EXTEND_TO);
}

// ── Lifecycle ────────────────────────────────────────────────────────────────

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&INITIALIZED)
}

pub fn initialize(env: &Env, owner: &Address, reward_token: &Address) -> Result<(), ContractError> {
    if is_initialized(env) {
        return Err(ContractError::AlreadyInitialized);
    }

    env.storage().instance().set(&OWNER, owner);
    env.storage().instance().set(&REWARD_TOKEN, reward_token);
    env.storage().instance().set(&FROZEN, &false);
    env.storage().instance().set(&INITIALIZED, &true);
    extend_ttl_instance(env);
    Ok(())
}

// ── Accessors ────────────────────────────────────────────────────────────────

pub fn owner(env: &Env) -> Result<Address, ContractError> {
    env.storage()
        .instance()
        .get(&OWNER)
        .ok_or(ContractError::NotInitialized)
}

pub fn set_owner(env: &Env, new_owner: &Address) {
    env.storage().instance().set(&OWNER, new_owner);
}

pub fn reward_token(env: &Env) -> Result<Address, ContractError> {
    env.storage()
        .instance()
        .get(&REWARD_TOKEN)
        .ok_or(ContractError::NotInitialized)
}

pub fn is_frozen(env: &Env) -> bool {
    env.storage().instance().get(&FROZEN).unwrap_or(false)
}

pub fn set_frozen(env: &Env, value: bool) {
    env.storage().instance().set(&FROZEN, &value);
}

// ── Guards ───────────────────────────────────────────────────────────────────

/// Authenticate `caller` and require it to be the stored owner.
pub fn require_owner(env: &Env, caller: &Address) -> Result<(), ContractError> {
    caller.require_auth();
    let owner = owner(env)?;
    if *caller != owner {
        return Err(ContractError::OnlyOwner);
    }
    Ok(())
}

/// Fails with `Frozen` while the global freeze is engaged.
pub fn require_not_frozen(env: &Env) -> Result<(), ContractError> {
    if is_frozen(env) {
        return Err(ContractError::Frozen);
    }
    Ok(())
}
