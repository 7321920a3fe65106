use soroban_sdk::{contracttype, symbol_short, Address, Env, Symbol};

use crate::{events, rewards, ContractError, TTL_EXTEND_TO, TTL_THRESHOLD};

// ── Storage keys ─────────────────────────────────────────────────────────────

// Per-user persistent storage uses tuple keys: (prefix, user, token, period)
const POSITION: Symbol = symbol_short!("POSITION");
const REWARD: Symbol = symbol_short!("REWARD");

type PositionKey = (Symbol, Address, Address, u64);

fn position_key(user: &Address, token: &Address, period: u64) -> PositionKey {
    (POSITION, user.clone(), token.clone(), period)
}

fn reward_key(user: &Address, token: &Address, period: u64) -> PositionKey {
    (REWARD, user.clone(), token.clone(), period)
}

fn extend_ttl_position_key(env: &Env, key: &PositionKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, TTL_THRESHOLD, TTL_EXTEND_TO);
}

// ── Types ────────────────────────────────────────────────────────────────────

/// One user's stake in one (token, period) pool.
///
/// The record survives a full withdrawal with `amount == 0`; staking again
/// into the same pool reuses it.
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Position {
    pub amount: i128,
    /// Pool reward rate captured at `last_checkpoint`.
    pub reward_rate: u32,
    pub last_checkpoint: u64,
}

// ── Position ledger ──────────────────────────────────────────────────────────

pub fn load(env: &Env, user: &Address, token: &Address, period: u64) -> Position {
    env.storage()
        .persistent()
        .get(&position_key(user, token, period))
        .unwrap_or_default()
}

pub fn store(env: &Env, user: &Address, token: &Address, period: u64, position: &Position) {
    let key = position_key(user, token, period);
    env.storage().persistent().set(&key, position);
    extend_ttl_position_key(env, &key);
}

// ── Claimable reward ledger ──────────────────────────────────────────────────

pub fn claimable(env: &Env, user: &Address, token: &Address, period: u64) -> i128 {
    env.storage()
        .persistent()
        .get(&reward_key(user, token, period))
        .unwrap_or(0)
}

fn set_claimable(env: &Env, user: &Address, token: &Address, period: u64, amount: i128) {
    let key = reward_key(user, token, period);
    env.storage().persistent().set(&key, &amount);
    extend_ttl_position_key(env, &key);
}

/// Zero the claimable balance and return what it held.
pub fn take_claimable(env: &Env, user: &Address, token: &Address, period: u64) -> i128 {
    let amount = claimable(env, user, token, period);
    set_claimable(env, user, token, period, 0);
    amount
}

// ── Checkpoint ───────────────────────────────────────────────────────────────

/// Reward the position has earned since its last checkpoint, without
/// touching storage.
pub fn pending(
    env: &Env,
    user: &Address,
    token: &Address,
    period: u64,
) -> Result<i128, ContractError> {
    let position = load(env, user, token, period);
    rewards::accrued(env, &position, period, env.ledger().timestamp())
        .ok_or(ContractError::ArithmeticOverflow)
}

/// Fold pending reward into the claimable balance and restart the accrual
/// clock at the pool's current rate.
///
/// Returns the refreshed position; the caller applies its amount change and
/// stores it.
pub fn checkpoint(
    env: &Env,
    user: &Address,
    token: &Address,
    period: u64,
    pool_rate: u32,
) -> Result<Position, ContractError> {
    let now = env.ledger().timestamp();
    let mut position = load(env, user, token, period);

    let accrued =
        rewards::accrued(env, &position, period, now).ok_or(ContractError::ArithmeticOverflow)?;
    if accrued > 0 {
        let total = claimable(env, user, token, period)
            .checked_add(accrued)
            .ok_or(ContractError::ArithmeticOverflow)?;
        set_claimable(env, user, token, period, total);
        events::publish_reward_accrued(env, user.clone(), token.clone(), period, accrued, total);
    }

    position.reward_rate = pool_rate;
    position.last_checkpoint = now;
    Ok(position)
}
