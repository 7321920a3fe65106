/// Every failure a `MainStaking` entry point can report.
///
/// Codes are stable: off-chain tooling matches on the numeric value.
#[soroban_sdk::contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ContractError {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    /// Caller is not the current owner.
    OnlyOwner = 3,
    /// Stake and unstake are disabled while the contract is frozen.
    Frozen = 4,
    ZeroAmount = 5,
    ZeroReward = 6,
    InvalidPeriod = 7,
    /// The period is already in the registry.
    ValidPeriod = 8,
    StakeTokenNotRegistered = 9,
    /// The reward token can never back a stake pool.
    NotRewardToken = 10,
    PeriodsRewardsLengthMisMatch = 11,
    /// `register_token` must list the 30, 60 and 90 day periods.
    CanonicalPeriodsUnspecified = 12,
    InsufficientStake = 13,
    InsufficientBalance = 14,
    InsufficientAllowance = 15,
    ArithmeticOverflow = 16,
}
