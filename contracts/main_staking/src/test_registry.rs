extern crate std;

use soroban_sdk::{
    testutils::Address as _,
    token::{Client as TokenClient, StellarAssetClient},
    vec, Address, Env, Vec,
};

use crate::{ContractError, MainStaking, MainStakingClient, Pool, DAYS_30, DAYS_60, DAYS_90};

const DAYS_120: u64 = DAYS_60 * 2;

// ── Test helpers ─────────────────────────────────────────────────────────────

fn setup() -> (Env, MainStakingClient<'static>, Address, Address, Address) {
    let env = Env::default();
    env.mock_all_auths();

    let reward_token = env
        .register_stellar_asset_contract_v2(Address::generate(&env))
        .address();
    let stake_token = env
        .register_stellar_asset_contract_v2(Address::generate(&env))
        .address();

    let contract_id = env.register(MainStaking, ());
    let client = MainStakingClient::new(&env, &contract_id);

    let owner = Address::generate(&env);
    client.initialize(&owner, &reward_token);

    (env, client, owner, reward_token, stake_token)
}

fn canonical(env: &Env) -> Vec<u64> {
    vec![env, DAYS_30, DAYS_60, DAYS_90]
}

fn flat_rewards(env: &Env) -> Vec<u32> {
    vec![env, 10_000, 10_000, 10_000]
}

// ── Period registry ───────────────────────────────────────────────────────────

#[test]
fn test_register_period() {
    let (env, client, owner, _, _) = setup();

    client.register_period(&owner, &DAYS_120);

    assert!(client.is_valid_period(&DAYS_120));
    assert!(client.stake_periods(&DAYS_120));
    assert_eq!(
        client.get_periods(),
        vec![&env, DAYS_30, DAYS_60, DAYS_90, DAYS_120]
    );
}

#[test]
fn test_register_period_by_non_owner_fails() {
    let (env, client, _owner, _, _) = setup();

    let res = client.try_register_period(&Address::generate(&env), &DAYS_120);
    assert_eq!(res.unwrap_err().unwrap(), ContractError::OnlyOwner);
    assert!(!client.is_valid_period(&DAYS_120));
}

#[test]
fn test_register_existing_period_fails() {
    let (_env, client, owner, _, _) = setup();

    let res = client.try_register_period(&owner, &DAYS_30);
    assert_eq!(res.unwrap_err().unwrap(), ContractError::ValidPeriod);

    client.register_period(&owner, &DAYS_120);
    let res = client.try_register_period(&owner, &DAYS_120);
    assert_eq!(res.unwrap_err().unwrap(), ContractError::ValidPeriod);
}

#[test]
fn test_register_zero_period_fails() {
    let (_env, client, owner, _, _) = setup();

    let res = client.try_register_period(&owner, &0);
    assert_eq!(res.unwrap_err().unwrap(), ContractError::InvalidPeriod);
    assert!(!client.is_valid_period(&0));
}

// ── Token registration ────────────────────────────────────────────────────────

#[test]
fn test_register_token() {
    let (env, client, owner, _, stake_token) = setup();
    let rewards = vec![&env, 100u32, 200u32, 300u32];

    client.register_token(&owner, &stake_token, &canonical(&env), &rewards);

    assert!(client.is_token_registered(&stake_token));
    assert_eq!(client.get_token_periods(&stake_token), canonical(&env));
    for (period, rate) in canonical(&env).iter().zip(rewards.iter()) {
        assert_eq!(
            client.stake_tokens(&stake_token, &period),
            Pool {
                reward_rate: rate,
                registered: true,
                total_staked: 0,
            }
        );
    }
}

#[test]
fn test_register_two_tokens() {
    let (env, client, owner, _, stake_token) = setup();
    let second = Address::generate(&env);

    client.register_token(&owner, &stake_token, &canonical(&env), &flat_rewards(&env));
    client.register_token(&owner, &second, &canonical(&env), &flat_rewards(&env));

    assert!(client.is_token_registered(&stake_token));
    assert!(client.is_token_registered(&second));
}

#[test]
fn test_register_token_with_custom_period() {
    let (env, client, owner, _, stake_token) = setup();
    client.register_period(&owner, &DAYS_120);

    let periods = vec![&env, DAYS_120, DAYS_90, DAYS_60, DAYS_30];
    let rewards = vec![&env, 4u32, 3u32, 2u32, 1u32];
    client.register_token(&owner, &stake_token, &periods, &rewards);

    assert_eq!(client.stake_tokens(&stake_token, &DAYS_120).reward_rate, 4);
    assert_eq!(client.stake_tokens(&stake_token, &DAYS_30).reward_rate, 1);
}

#[test]
fn test_register_token_by_non_owner_fails() {
    let (env, client, _owner, _, stake_token) = setup();

    let res = client.try_register_token(
        &Address::generate(&env),
        &stake_token,
        &canonical(&env),
        &flat_rewards(&env),
    );
    assert_eq!(res.unwrap_err().unwrap(), ContractError::OnlyOwner);
}

#[test]
fn test_register_token_length_mismatch_fails() {
    let (env, client, owner, _, stake_token) = setup();

    let res = client.try_register_token(
        &owner,
        &stake_token,
        &canonical(&env),
        &vec![&env, 10_000u32, 10_000u32],
    );
    assert_eq!(
        res.unwrap_err().unwrap(),
        ContractError::PeriodsRewardsLengthMisMatch
    );
}

#[test]
fn test_register_reward_token_fails() {
    let (env, client, owner, reward_token, _) = setup();

    let res = client.try_register_token(&owner, &reward_token, &canonical(&env), &flat_rewards(&env));
    assert_eq!(res.unwrap_err().unwrap(), ContractError::NotRewardToken);
    assert!(!client.is_token_registered(&reward_token));
}

#[test]
fn test_register_token_missing_canonical_period_fails() {
    let (env, client, owner, _, stake_token) = setup();
    let rewards = vec![&env, 10_000u32, 10_000u32];

    for periods in [
        vec![&env, DAYS_60, DAYS_90],
        vec![&env, DAYS_30, DAYS_90],
        vec![&env, DAYS_30, DAYS_60],
    ] {
        let res = client.try_register_token(&owner, &stake_token, &periods, &rewards);
        assert_eq!(
            res.unwrap_err().unwrap(),
            ContractError::CanonicalPeriodsUnspecified
        );
    }
    assert!(!client.is_token_registered(&stake_token));
}

#[test]
fn test_register_token_zero_reward_fails() {
    let (env, client, owner, _, stake_token) = setup();

    let res = client.try_register_token(
        &owner,
        &stake_token,
        &canonical(&env),
        &vec![&env, 10_000u32, 10_000u32, 0u32],
    );
    assert_eq!(res.unwrap_err().unwrap(), ContractError::ZeroReward);

    // Nothing was written for the valid entries either.
    assert!(!client.is_token_registered(&stake_token));
    assert_eq!(client.stake_tokens(&stake_token, &DAYS_30), Pool::default());
}

#[test]
fn test_register_token_unregistered_period_fails() {
    let (env, client, owner, _, stake_token) = setup();

    let res = client.try_register_token(
        &owner,
        &stake_token,
        &vec![&env, DAYS_30, DAYS_60, DAYS_90, DAYS_120],
        &vec![&env, 1u32, 1u32, 1u32, 1u32],
    );
    assert_eq!(res.unwrap_err().unwrap(), ContractError::InvalidPeriod);
}

#[test]
fn test_reregister_keeps_staked_total() {
    let (env, client, owner, _, stake_token) = setup();
    client.register_token(&owner, &stake_token, &canonical(&env), &flat_rewards(&env));

    let user = Address::generate(&env);
    StellarAssetClient::new(&env, &stake_token).mint(&user, &1_000);
    let expiration = env.ledger().sequence() + 100;
    TokenClient::new(&env, &stake_token).approve(&user, &client.address, &1_000, &expiration);
    client.stake(&user, &stake_token, &1_000, &DAYS_30);

    client.register_token(
        &owner,
        &stake_token,
        &canonical(&env),
        &vec![&env, 5u32, 5u32, 5u32],
    );

    let pool = client.stake_tokens(&stake_token, &DAYS_30);
    assert_eq!(pool.reward_rate, 5);
    assert_eq!(pool.total_staked, 1_000);
}

// ── Deregistration ────────────────────────────────────────────────────────────

#[test]
fn test_deregister_token() {
    let (env, client, owner, _, stake_token) = setup();
    client.register_period(&owner, &DAYS_120);
    client.register_token(
        &owner,
        &stake_token,
        &vec![&env, DAYS_30, DAYS_60, DAYS_90, DAYS_120],
        &vec![&env, 1u32, 2u32, 3u32, 4u32],
    );

    client.de_register_token(&owner, &stake_token);

    assert!(!client.is_token_registered(&stake_token));
    for period in [DAYS_30, DAYS_60, DAYS_90, DAYS_120] {
        let pool = client.stake_tokens(&stake_token, &period);
        assert!(!pool.registered);
        assert!(pool.reward_rate > 0, "rate history is kept");
    }
}

#[test]
fn test_deregister_by_non_owner_fails() {
    let (env, client, owner, _, stake_token) = setup();
    client.register_token(&owner, &stake_token, &canonical(&env), &flat_rewards(&env));

    let res = client.try_de_register_token(&Address::generate(&env), &stake_token);
    assert_eq!(res.unwrap_err().unwrap(), ContractError::OnlyOwner);
    assert!(client.is_token_registered(&stake_token));
}

#[test]
fn test_deregister_unregistered_token_fails() {
    let (env, client, owner, _, stake_token) = setup();
    client.register_token(&owner, &stake_token, &canonical(&env), &flat_rewards(&env));

    let res = client.try_de_register_token(&owner, &Address::generate(&env));
    assert_eq!(
        res.unwrap_err().unwrap(),
        ContractError::StakeTokenNotRegistered
    );

    // A second deregistration of the same token fails too.
    client.de_register_token(&owner, &stake_token);
    let res = client.try_de_register_token(&owner, &stake_token);
    assert_eq!(
        res.unwrap_err().unwrap(),
        ContractError::StakeTokenNotRegistered
    );
}

#[test]
fn test_reregister_after_deregistration() {
    let (env, client, owner, _, stake_token) = setup();
    client.register_token(&owner, &stake_token, &canonical(&env), &flat_rewards(&env));
    client.de_register_token(&owner, &stake_token);

    client.register_token(&owner, &stake_token, &canonical(&env), &flat_rewards(&env));

    assert!(client.is_token_registered(&stake_token));
    assert!(client.stake_tokens(&stake_token, &DAYS_60).registered);
    assert_eq!(client.get_token_periods(&stake_token), canonical(&env));
}
