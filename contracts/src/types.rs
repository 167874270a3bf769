//! Type definitions for the raffle contract.

use soroban_sdk::{contracttype, Address, BytesN};

/// Storage keys for contract data
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Config,
    State,
    Entrants,
    LastTimestamp,
    PendingRequest,
    RecentWinner,
}

/// Round lifecycle state.
///
/// `Calculating` holds exactly while one randomness request is outstanding;
/// entry is accepted only while `Open`.
#[contracttype]
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum RaffleState {
    Open = 0,
    Calculating = 1,
}

/// Immutable raffle configuration, written once at initialization.
#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct RaffleConfig {
    /// VRF coordinator contract that serves randomness requests. Also the
    /// only address allowed to call `fulfill_random_words`.
    pub vrf_coordinator: Address,
    /// Token used for entrance fees and the prize pot.
    pub payment_token: Address,
    /// Fixed entrance fee, in token units.
    pub entrance_fee: i128,
    /// Gas lane key hash, passed through to the coordinator opaquely.
    pub gas_lane: BytesN<32>,
    /// Coordinator subscription that pays for randomness requests.
    pub subscription_id: u64,
    /// Gas limit for the fulfillment callback, passed through opaquely.
    pub callback_gas_limit: u32,
    /// Minimum seconds between round start and upkeep eligibility.
    pub interval: u64,
}
