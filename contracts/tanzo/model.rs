use ink::primitives::AccountId;

pub type Balance = u128;
pub type Result<T> = core::result::Result<T, Error>;

/// Number of decimal places the base unit is scaled by.
pub const DECIMALS: u8 = 18;
pub const SCALING_FACTOR: Balance = 1_000_000_000_000_000_000;
/// Fixed supply, minted once to the deployer.
pub const TOTAL_SUPPLY: Balance = 500_000_000 * SCALING_FACTOR;

/// Sentinel account that can never receive value.
pub fn zero_account() -> AccountId {
    AccountId::from([0u8; 32])
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[ink::scale_derive(Encode, Decode, TypeInfo)]
pub enum Error {
    // authorization
    NotOwner,
    NotPendingOwner,

    // funds
    InsufficientBalance,
    InsufficientAllowance,

    // arguments
    ZeroAddress,

    Overflow,
}
