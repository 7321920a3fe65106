use soroban_sdk::{contracttype, symbol_short, Address, Env, Symbol, Vec};

use crate::{ContractError, DAYS_30, DAYS_60, DAYS_90, TTL_EXTEND_TO, TTL_THRESHOLD};

// ── Storage keys ─────────────────────────────────────────────────────────────

const PERIODS: Symbol = symbol_short!("PERIODS");
const PERIOD: Symbol = symbol_short!("PERIOD");
const TOKEN: Symbol = symbol_short!("TOKEN");
const TOKEN_PERIODS: Symbol = symbol_short!("TOK_PER");
const POOL: Symbol = symbol_short!("POOL");

fn extend_ttl_token_key(env: &Env, key: &(Symbol, Address)) {
    env.storage()
        .persistent()
        .extend_ttl(key, TTL_THRESHOLD, TTL_EXTEND_TO);
}

fn extend_ttl_pool_key(env: &Env, key: &(Symbol, Address, u64)) {
    env.storage()
        .persistent()
        .extend_ttl(key, TTL_THRESHOLD, TTL_EXTEND_TO);
}

// ── Types ────────────────────────────────────────────────────────────────────

/// Reward configuration and aggregate stake for one (token, period) pair.
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Pool {
    /// Basis points of principal paid per elapsed period.
    pub reward_rate: u32,
    pub registered: bool,
    pub total_staked: i128,
}

// ── Period registry ──────────────────────────────────────────────────────────

pub fn is_valid_period(env: &Env, period: u64) -> bool {
    env.storage()
        .persistent()
        .get(&(PERIOD, period))
        .unwrap_or(false)
}

pub fn periods(env: &Env) -> Vec<u64> {
    env.storage()
        .instance()
        .get(&PERIODS)
        .unwrap_or_else(|| Vec::new(env))
}

/// Add `period` to the registry. Zero is never a valid lock period.
pub fn add_period(env: &Env, period: u64) -> Result<(), ContractError> {
    if period == 0 {
        return Err(ContractError::InvalidPeriod);
    }
    if is_valid_period(env, period) {
        return Err(ContractError::ValidPeriod);
    }

    let key = (PERIOD, period);
    env.storage().persistent().set(&key, &true);
    env.storage()
        .persistent()
        .extend_ttl(&key, TTL_THRESHOLD, TTL_EXTEND_TO);

    let mut all = periods(env);
    all.push_back(period);
    env.storage().instance().set(&PERIODS, &all);
    Ok(())
}

pub fn add_canonical_periods(env: &Env) -> Result<(), ContractError> {
    for period in [DAYS_30, DAYS_60, DAYS_90] {
        add_period(env, period)?;
    }
    Ok(())
}

// ── Token registration ───────────────────────────────────────────────────────

pub fn is_token_registered(env: &Env, token: &Address) -> bool {
    env.storage()
        .persistent()
        .get(&(TOKEN, token.clone()))
        .unwrap_or(false)
}

/// True once the token has been registered at least once, even if it has
/// since been deregistered.
pub fn is_token_known(env: &Env, token: &Address) -> bool {
    env.storage().persistent().has(&(TOKEN, token.clone()))
}

fn set_token_registered(env: &Env, token: &Address, registered: bool) {
    let key = (TOKEN, token.clone());
    env.storage().persistent().set(&key, &registered);
    extend_ttl_token_key(env, &key);
}

pub fn token_periods(env: &Env, token: &Address) -> Vec<u64> {
    env.storage()
        .persistent()
        .get(&(TOKEN_PERIODS, token.clone()))
        .unwrap_or_else(|| Vec::new(env))
}

// ── Pools ────────────────────────────────────────────────────────────────────

pub fn pool_exists(env: &Env, token: &Address, period: u64) -> bool {
    env.storage().persistent().has(&(POOL, token.clone(), period))
}

pub fn load_pool(env: &Env, token: &Address, period: u64) -> Pool {
    env.storage()
        .persistent()
        .get(&(POOL, token.clone(), period))
        .unwrap_or_default()
}

pub fn store_pool(env: &Env, token: &Address, period: u64, pool: &Pool) {
    let key = (POOL, token.clone(), period);
    env.storage().persistent().set(&key, pool);
    extend_ttl_pool_key(env, &key);
}

/// Validate and apply a token registration.
///
/// Checks run in a fixed order so callers see a deterministic error for
/// inputs that break several rules at once.
pub fn register_token(
    env: &Env,
    reward_token: &Address,
    token: &Address,
    periods: &Vec<u64>,
    rewards: &Vec<u32>,
) -> Result<(), ContractError> {
    if periods.len() != rewards.len() {
        return Err(ContractError::PeriodsRewardsLengthMisMatch);
    }
    if token == reward_token {
        return Err(ContractError::NotRewardToken);
    }
    if !(periods.contains(DAYS_30) && periods.contains(DAYS_60) && periods.contains(DAYS_90)) {
        return Err(ContractError::CanonicalPeriodsUnspecified);
    }
    if rewards.iter().any(|rate| rate == 0) {
        return Err(ContractError::ZeroReward);
    }
    if periods.iter().any(|period| !is_valid_period(env, period)) {
        return Err(ContractError::InvalidPeriod);
    }

    let mut configured = token_periods(env, token);
    for (period, reward_rate) in periods.iter().zip(rewards.iter()) {
        let existing = load_pool(env, token, period);
        store_pool(
            env,
            token,
            period,
            &Pool {
                reward_rate,
                registered: true,
                total_staked: existing.total_staked,
            },
        );
        if !configured.contains(period) {
            configured.push_back(period);
        }
    }

    let key = (TOKEN_PERIODS, token.clone());
    env.storage().persistent().set(&key, &configured);
    extend_ttl_token_key(env, &key);
    set_token_registered(env, token, true);
    Ok(())
}

/// Close every pool under `token` to new stakes. Rates and staked totals
/// are kept so existing positions can still be withdrawn.
pub fn deregister_token(env: &Env, token: &Address) -> Result<(), ContractError> {
    if !is_token_registered(env, token) {
        return Err(ContractError::StakeTokenNotRegistered);
    }

    for period in token_periods(env, token).iter() {
        let mut pool = load_pool(env, token, period);
        pool.registered = false;
        store_pool(env, token, period, &pool);
    }

    set_token_registered(env, token, false);
    Ok(())
}
