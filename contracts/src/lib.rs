#![no_std]
//! # Verifiably-Fair Raffle
//!
//! Soroban-based raffle lottery. Participants pay a fixed entrance fee in a
//! configured payment token; once the round interval has elapsed an
//! automation keeper advances the round, which requests a random value from
//! a VRF coordinator contract. The coordinator's asynchronous callback
//! selects the winner and transfers the entire pot to them, then the round
//! reopens.
//!
//! ## Key Features
//! - Two-state round machine (Open / Calculating) with strict transitions
//! - Single outstanding randomness request, tracked by a pending request id
//! - Oracle-restricted fulfillment callback guards fund disbursement
//! - Checked arithmetic and all-or-nothing error handling

mod contract;
mod errors;
mod oracle;
mod types;

#[cfg(any(test, feature = "testutils"))]
pub mod testutils;

#[cfg(test)]
mod tests;

pub use contract::Raffle;
pub use errors::ContractError;
pub use oracle::{RandomnessConsumer, RandomnessOracle};
pub use types::{DataKey, RaffleConfig, RaffleState};
