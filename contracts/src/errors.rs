//! Contract error types for the raffle.

use soroban_sdk::contracterror;

/// Contract error types
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ContractError {
    /// Contract has already been initialized
    AlreadyInitialized = 1,
    /// Contract configuration not set - call initialize first
    NotInitialized = 2,
    /// Entrance fee and interval must both be greater than zero
    InvalidConfig = 3,
    /// Payment amount is below the entrance fee
    InsufficientEntryFee = 4,
    /// The round is not open for entry
    RoundNotOpen = 5,
    /// Upkeep conditions are not met
    UpkeepNotNeeded = 6,
    /// Request id does not match the pending randomness request
    UnknownRequest = 7,
    /// Only the configured VRF coordinator may fulfill randomness
    Unauthorized = 8,
    /// Prize transfer to the winner failed
    PayoutFailed = 9,
    /// Fulfillment delivered no random words
    InvalidRandomWords = 10,
}
