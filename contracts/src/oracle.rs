//! Cross-contract interfaces at the two oracle boundaries.
//!
//! The automation keeper needs no interface of its own: `check_upkeep` and
//! `perform_upkeep` are ordinary contract functions any poller may call.

use soroban_sdk::{contractclient, Address, BytesN, Env, Vec};

/// Randomness-provider boundary: the raffle calls this on the configured
/// VRF coordinator when a round advances.
#[contractclient(name = "RandomnessOracleClient")]
pub trait RandomnessOracle {
    /// Opens a randomness request and returns its id. For a given
    /// coordinator, ids are unique across requests and never reissued.
    fn request_randomness(
        env: Env,
        gas_lane: BytesN<32>,
        subscription_id: u64,
        request_confirmations: u32,
        callback_gas_limit: u32,
        num_words: u32,
    ) -> u64;
}

/// Consumer boundary: the coordinator calls this back on the raffle, exactly
/// once per accepted request. `caller` is the coordinator's own address and
/// must carry its authorization.
#[contractclient(name = "RandomnessConsumerClient")]
pub trait RandomnessConsumer {
    fn fulfill_random_words(env: Env, caller: Address, request_id: u64, random_words: Vec<u64>);
}
