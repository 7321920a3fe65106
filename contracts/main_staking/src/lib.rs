#![no_std]

pub mod access;
pub mod errors;
pub mod events;
pub mod positions;
pub mod registry;
pub mod rewards;

use soroban_sdk::{contract, contractimpl, log, token, Address, Env, Vec};

pub use errors::ContractError;
pub use positions::Position;
pub use registry::Pool;
pub use rewards::RATE_SCALE;

// ── Constants ────────────────────────────────────────────────────────────────

/// Canonical lock tiers, in seconds. Every registered token offers all three.
pub const DAYS_30: u64 = 60 * 60 * 24 * 30;
pub const DAYS_60: u64 = 60 * 60 * 24 * 60;
pub const DAYS_90: u64 = 60 * 60 * 24 * 90;

/// TTL bounds for instance and persistent storage (in ledgers)
const TTL_THRESHOLD: u32 = 17_280; // ~1 day
const TTL_EXTEND_TO: u32 = 518_400; // ~30 days

// ── Token movements ──────────────────────────────────────────────────────────

/// Pull `amount` of `token` from `from` into the contract using the
/// allowance `from` granted it.
fn pull_tokens(env: &Env, token: &Address, from: &Address, amount: i128) -> Result<(), ContractError> {
    let this = env.current_contract_address();
    let client = token::Client::new(env, token);

    if client.allowance(from, &this) < amount {
        return Err(ContractError::InsufficientAllowance);
    }
    if client.balance(from) < amount {
        return Err(ContractError::InsufficientBalance);
    }

    client.transfer_from(&this, from, &this, &amount);
    Ok(())
}

/// Push `amount` of `token` from the contract to `to`.
fn push_tokens(env: &Env, token: &Address, to: &Address, amount: i128) -> Result<(), ContractError> {
    let this = env.current_contract_address();
    let client = token::Client::new(env, token);

    if client.balance(&this) < amount {
        return Err(ContractError::InsufficientBalance);
    }

    client.transfer(&this, to, &amount);
    Ok(())
}

// ── Contract ─────────────────────────────────────────────────────────────────

#[contract]
pub struct MainStaking;

#[contractimpl]
impl MainStaking {
    // ── Initialisation ──────────────────────────────────────────────────────

    /// Bootstrap the contract.
    ///
    /// * `owner`        – address allowed to run the owner-gated operations.
    /// * `reward_token` – token paid out as staking reward. It can never be
    ///   registered as a stake token.
    ///
    /// The 30, 60 and 90 day periods are registered as valid lock periods.
    pub fn initialize(env: Env, owner: Address, reward_token: Address) -> Result<(), ContractError> {
        owner.require_auth();

        access::initialize(&env, &owner, &reward_token)?;
        registry::add_canonical_periods(&env)?;

        events::publish_initialized(&env, owner.clone(), reward_token.clone());
        log!(&env, "staking initialized: owner={}, reward_token={}", owner, reward_token);

        Ok(())
    }

    // ── Owner controls ──────────────────────────────────────────────────────

    /// Hand ownership to `new_owner` in a single step.
    pub fn change_owner(env: Env, caller: Address, new_owner: Address) -> Result<(), ContractError> {
        access::require_owner(&env, &caller)?;

        access::set_owner(&env, &new_owner);
        access::extend_ttl_instance(&env);

        events::publish_owner_changed(&env, caller, new_owner);
        Ok(())
    }

    /// Engage or release the global freeze on `stake` and `unstake`.
    pub fn change_frozen(env: Env, caller: Address, value: bool) -> Result<(), ContractError> {
        access::require_owner(&env, &caller)?;

        access::set_frozen(&env, value);
        access::extend_ttl_instance(&env);

        events::publish_frozen_changed(&env, value);
        log!(&env, "frozen set to {}", value);
        Ok(())
    }

    /// Move the contract's entire reward-token balance to `to`.
    ///
    /// Outstanding claimable rewards are not reserved: after a drain,
    /// `unstake` calls that owe a reward fail with `InsufficientBalance`
    /// until the contract is refunded.
    pub fn transfer_reward_token(env: Env, caller: Address, to: Address) -> Result<i128, ContractError> {
        access::require_owner(&env, &caller)?;

        let reward_token = access::reward_token(&env)?;
        let balance = token::Client::new(&env, &reward_token).balance(&env.current_contract_address());
        if balance > 0 {
            push_tokens(&env, &reward_token, &to, balance)?;
        }

        events::publish_reward_token_drained(&env, to.clone(), balance);
        log!(&env, "reward token drained: to={}, amount={}", to, balance);
        Ok(balance)
    }

    // ── Registry ────────────────────────────────────────────────────────────

    /// Add a custom lock period. Fails with `ValidPeriod` if it is already
    /// registered.
    pub fn register_period(env: Env, caller: Address, period: u64) -> Result<(), ContractError> {
        access::require_owner(&env, &caller)?;

        registry::add_period(&env, period)?;
        access::extend_ttl_instance(&env);

        events::publish_period_registered(&env, period);
        Ok(())
    }

    /// Open (or reconfigure) the pools of `token`, one per listed period.
    ///
    /// `periods` must include the three canonical periods and every entry
    /// must already be a registered period. `rewards[i]` is the rate for
    /// `periods[i]` in basis points per period and must be non-zero.
    /// Re-registering keeps each pool's staked total; the new rate applies
    /// to positions from their next checkpoint.
    pub fn register_token(
        env: Env,
        caller: Address,
        token: Address,
        periods: Vec<u64>,
        rewards: Vec<u32>,
    ) -> Result<(), ContractError> {
        access::require_owner(&env, &caller)?;

        let reward_token = access::reward_token(&env)?;
        registry::register_token(&env, &reward_token, &token, &periods, &rewards)?;
        access::extend_ttl_instance(&env);

        events::publish_token_registered(&env, token.clone(), periods, rewards);
        log!(&env, "stake token registered: {}", token);
        Ok(())
    }

    /// Close every pool of `token` to new stakes. Existing positions remain
    /// withdrawable.
    pub fn de_register_token(env: Env, caller: Address, token: Address) -> Result<(), ContractError> {
        access::require_owner(&env, &caller)?;

        registry::deregister_token(&env, &token)?;
        access::extend_ttl_instance(&env);

        events::publish_token_deregistered(&env, token.clone());
        log!(&env, "stake token deregistered: {}", token);
        Ok(())
    }

    // ── Staking ─────────────────────────────────────────────────────────────

    /// Deposit `amount` of `token` into the `period` pool.
    ///
    /// `user` must have approved the contract for at least `amount`.
    /// Pending reward is checkpointed first, so the new deposit only earns
    /// from now on.
    pub fn stake(
        env: Env,
        user: Address,
        token: Address,
        amount: i128,
        period: u64,
    ) -> Result<(), ContractError> {
        user.require_auth();
        access::require_not_frozen(&env)?;

        if amount <= 0 {
            return Err(ContractError::ZeroAmount);
        }
        if !registry::is_token_registered(&env, &token) {
            return Err(ContractError::StakeTokenNotRegistered);
        }
        if !registry::is_valid_period(&env, period) {
            return Err(ContractError::InvalidPeriod);
        }
        let mut pool = registry::load_pool(&env, &token, period);
        if !pool.registered {
            return Err(ContractError::StakeTokenNotRegistered);
        }

        // 1. Settle what the existing stake earned so far.
        let mut position = positions::checkpoint(&env, &user, &token, period, pool.reward_rate)?;

        // 2. Apply the deposit.
        position.amount = position
            .amount
            .checked_add(amount)
            .ok_or(ContractError::ArithmeticOverflow)?;
        pool.total_staked = pool
            .total_staked
            .checked_add(amount)
            .ok_or(ContractError::ArithmeticOverflow)?;
        positions::store(&env, &user, &token, period, &position);
        registry::store_pool(&env, &token, period, &pool);
        access::extend_ttl_instance(&env);

        // 3. Pull the tokens only after state is final.
        pull_tokens(&env, &token, &user, amount)?;

        events::publish_staked(
            &env,
            user.clone(),
            token,
            period,
            amount,
            position.amount,
            pool.total_staked,
        );
        log!(&env, "user {} staked {} for {} seconds", user, amount, period);

        Ok(())
    }

    /// Withdraw `amount` of principal from the `period` pool and receive the
    /// full claimable reward of that position. Returns the reward paid.
    ///
    /// Withdrawal stays open after the token is deregistered.
    pub fn unstake(
        env: Env,
        user: Address,
        token: Address,
        amount: i128,
        period: u64,
    ) -> Result<i128, ContractError> {
        user.require_auth();
        access::require_not_frozen(&env)?;

        if amount <= 0 {
            return Err(ContractError::ZeroAmount);
        }
        if !registry::is_token_known(&env, &token) {
            return Err(ContractError::StakeTokenNotRegistered);
        }
        if !registry::is_valid_period(&env, period) {
            return Err(ContractError::InvalidPeriod);
        }
        if !registry::pool_exists(&env, &token, period) {
            return Err(ContractError::StakeTokenNotRegistered);
        }
        let mut pool = registry::load_pool(&env, &token, period);

        // 1. Settle pending reward at the pool's current rate.
        let mut position = positions::checkpoint(&env, &user, &token, period, pool.reward_rate)?;
        if position.amount < amount {
            return Err(ContractError::InsufficientStake);
        }

        // 2. Apply the withdrawal and take the claimable balance.
        position.amount -= amount;
        pool.total_staked = pool
            .total_staked
            .checked_sub(amount)
            .ok_or(ContractError::ArithmeticOverflow)?;
        positions::store(&env, &user, &token, period, &position);
        registry::store_pool(&env, &token, period, &pool);
        let reward = positions::take_claimable(&env, &user, &token, period);
        access::extend_ttl_instance(&env);

        // 3. Principal first, then reward.
        push_tokens(&env, &token, &user, amount)?;
        if reward > 0 {
            let reward_token = access::reward_token(&env)?;
            push_tokens(&env, &reward_token, &user, reward)?;
        }

        events::publish_unstaked(
            &env,
            user.clone(),
            token,
            period,
            amount,
            reward,
            pool.total_staked,
        );
        log!(&env, "user {} unstaked {} with {} reward", user, amount, reward);

        Ok(reward)
    }

    // ── View functions ───────────────────────────────────────────────────────

    pub fn is_initialized(env: Env) -> bool {
        access::is_initialized(&env)
    }

    pub fn owner(env: Env) -> Result<Address, ContractError> {
        access::owner(&env)
    }

    pub fn frozen(env: Env) -> bool {
        access::is_frozen(&env)
    }

    pub fn reward_token(env: Env) -> Result<Address, ContractError> {
        access::reward_token(&env)
    }

    /// Whether `period` is a registered lock period.
    pub fn stake_periods(env: Env, period: u64) -> bool {
        registry::is_valid_period(&env, period)
    }

    pub fn is_valid_period(env: Env, period: u64) -> bool {
        registry::is_valid_period(&env, period)
    }

    /// Every registered lock period, in registration order.
    pub fn get_periods(env: Env) -> Vec<u64> {
        registry::periods(&env)
    }

    pub fn is_token_registered(env: Env, token: Address) -> bool {
        registry::is_token_registered(&env, &token)
    }

    /// Every period a pool was ever opened for under `token`.
    pub fn get_token_periods(env: Env, token: Address) -> Vec<u64> {
        registry::token_periods(&env, &token)
    }

    /// Pool configuration for (`token`, `period`); zeroed if never opened.
    pub fn stake_tokens(env: Env, token: Address, period: u64) -> Pool {
        registry::load_pool(&env, &token, period)
    }

    /// The user's position in (`token`, `period`); zeroed if never staked.
    pub fn user_stakings(env: Env, user: Address, token: Address, period: u64) -> Position {
        positions::load(&env, &user, &token, period)
    }

    /// Reward settled by past checkpoints and not yet paid out.
    pub fn user_rewards(env: Env, user: Address, token: Address, period: u64) -> i128 {
        positions::claimable(&env, &user, &token, period)
    }

    /// Reward accrued since the position's last checkpoint. Read-only.
    pub fn calculate_reward(
        env: Env,
        user: Address,
        token: Address,
        period: u64,
    ) -> Result<i128, ContractError> {
        positions::pending(&env, &user, &token, period)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────



#[cfg(test)]
mod test_registry;
