#![allow(deprecated)] // events().publish, pending the contractevent migration

use soroban_sdk::{symbol_short, Address, Env, Vec};

// ── Event payloads ──────────────────────────────────────────────────────────

/// Fired once when the contract is bootstrapped.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InitializedEvent {
    pub owner: Address,
    pub reward_token: Address,
    pub timestamp: u64,
}

#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OwnerChangedEvent {
    pub old_owner: Address,
    pub new_owner: Address,
    pub timestamp: u64,
}

#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FrozenChangedEvent {
    pub frozen: bool,
    pub timestamp: u64,
}

/// Fired when the owner withdraws the reward-token balance.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RewardTokenDrainedEvent {
    pub to: Address,
    pub amount: i128,
    pub timestamp: u64,
}

#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PeriodRegisteredEvent {
    pub period: u64,
    pub timestamp: u64,
}

#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TokenRegisteredEvent {
    pub token: Address,
    pub periods: Vec<u64>,
    pub rewards: Vec<u32>,
    pub timestamp: u64,
}

#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TokenDeregisteredEvent {
    pub token: Address,
    pub timestamp: u64,
}

/// Fired when a user deposits into a pool.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StakedEvent {
    pub user: Address,
    pub token: Address,
    pub period: u64,
    pub amount: i128,
    pub new_position: i128,
    pub new_total_staked: i128,
    pub timestamp: u64,
}

/// Fired when a user withdraws principal and is paid their reward.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UnstakedEvent {
    pub user: Address,
    pub token: Address,
    pub period: u64,
    pub amount: i128,
    pub reward: i128,
    pub new_total_staked: i128,
    pub timestamp: u64,
}

/// Fired when a checkpoint folds a non-zero reward into the claimable balance.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RewardAccruedEvent {
    pub user: Address,
    pub token: Address,
    pub period: u64,
    pub accrued: i128,
    pub claimable: i128,
    pub timestamp: u64,
}

// ── Publishers ──────────────────────────────────────────────────────────────

pub fn publish_initialized(env: &Env, owner: Address, reward_token: Address) {
    env.events().publish(
        (symbol_short!("INIT"),),
        InitializedEvent {
            owner,
            reward_token,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_owner_changed(env: &Env, old_owner: Address, new_owner: Address) {
    env.events().publish(
        (symbol_short!("OWNER"), old_owner.clone()),
        OwnerChangedEvent {
            old_owner,
            new_owner,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_frozen_changed(env: &Env, frozen: bool) {
    env.events().publish(
        (symbol_short!("FROZEN"),),
        FrozenChangedEvent {
            frozen,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_reward_token_drained(env: &Env, to: Address, amount: i128) {
    env.events().publish(
        (symbol_short!("RWD_DRAIN"), to.clone()),
        RewardTokenDrainedEvent {
            to,
            amount,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_period_registered(env: &Env, period: u64) {
    env.events().publish(
        (symbol_short!("PERIOD"),),
        PeriodRegisteredEvent {
            period,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_token_registered(env: &Env, token: Address, periods: Vec<u64>, rewards: Vec<u32>) {
    env.events().publish(
        (symbol_short!("TOK_REG"), token.clone()),
        TokenRegisteredEvent {
            token,
            periods,
            rewards,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_token_deregistered(env: &Env, token: Address) {
    env.events().publish(
        (symbol_short!("TOK_DEREG"), token.clone()),
        TokenDeregisteredEvent {
            token,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_staked(
    env: &Env,
    user: Address,
    token: Address,
    period: u64,
    amount: i128,
    new_position: i128,
    new_total_staked: i128,
) {
    env.events().publish(
        (symbol_short!("STAKED"), user.clone()),
        StakedEvent {
            user,
            token,
            period,
            amount,
            new_position,
            new_total_staked,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_unstaked(
    env: &Env,
    user: Address,
    token: Address,
    period: u64,
    amount: i128,
    reward: i128,
    new_total_staked: i128,
) {
    env.events().publish(
        (symbol_short!("UNSTAKED"), user.clone()),
        UnstakedEvent {
            user,
            token,
            period,
            amount,
            reward,
            new_total_staked,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_reward_accrued(
    env: &Env,
    user: Address,
    token: Address,
    period: u64,
    accrued: i128,
    claimable: i128,
) {
    env.events().publish(
        (symbol_short!("ACCRUED"), user.clone()),
        RewardAccruedEvent {
            user,
            token,
            period,
            accrued,
            claimable,
            timestamp: env.ledger().timestamp(),
        },
    );
}
