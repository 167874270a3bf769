//! Mock VRF coordinator for local testing.
//!
//! Stands in for a live coordinator the way a development-network mock
//! would: it hands out sequential request ids and lets the test driver
//! trigger the fulfillment callback on a consumer, either with words
//! derived from the request id or with an explicit override.

use soroban_sdk::{
    contract, contracterror, contractimpl, contracttype, Address, BytesN, Env, Vec,
};

use crate::oracle::RandomnessConsumerClient;

#[contracttype]
#[derive(Clone)]
pub enum MockKey {
    RequestCounter,
    SubscriptionCounter,
    Request(u64),
}

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum MockVrfError {
    /// No open request exists with the given id
    NonexistentRequest = 1,
}

#[contract]
pub struct MockVrfCoordinator;

#[contractimpl]
impl MockVrfCoordinator {
    pub fn create_subscription(env: Env) -> u64 {
        let id: u64 = env
            .storage()
            .persistent()
            .get(&MockKey::SubscriptionCounter)
            .unwrap_or(0)
            + 1;
        env.storage()
            .persistent()
            .set(&MockKey::SubscriptionCounter, &id);
        id
    }

    /// Accepted for interface parity; the mock charges nothing.
    pub fn fund_subscription(_env: Env, _subscription_id: u64, _amount: i128) {}

    /// Opens a request and returns its id. Ids start at 1 and increase
    /// monotonically, so no id is ever reissued.
    pub fn request_randomness(
        env: Env,
        _gas_lane: BytesN<32>,
        _subscription_id: u64,
        _request_confirmations: u32,
        _callback_gas_limit: u32,
        num_words: u32,
    ) -> u64 {
        let id: u64 = env
            .storage()
            .persistent()
            .get(&MockKey::RequestCounter)
            .unwrap_or(0)
            + 1;
        env.storage().persistent().set(&MockKey::RequestCounter, &id);
        env.storage()
            .persistent()
            .set(&MockKey::Request(id), &num_words);
        id
    }

    /// Fulfills an open request with words derived from the request id and
    /// delivers them to `consumer` via its callback.
    pub fn fulfill_random_words(
        env: Env,
        request_id: u64,
        consumer: Address,
    ) -> Result<(), MockVrfError> {
        let num_words: u32 = env
            .storage()
            .persistent()
            .get(&MockKey::Request(request_id))
            .ok_or(MockVrfError::NonexistentRequest)?;

        let mut words = Vec::new(&env);
        for i in 0..num_words {
            // splitmix64-style scramble keeps words distinct per request
            words.push_back(
                request_id
                    .wrapping_mul(0x9e37_79b9_7f4a_7c15)
                    .wrapping_add(i as u64),
            );
        }

        Self::_deliver(&env, request_id, consumer, words);
        Ok(())
    }

    /// Same as `fulfill_random_words`, but with caller-chosen words.
    pub fn fulfill_words_with_override(
        env: Env,
        request_id: u64,
        consumer: Address,
        words: Vec<u64>,
    ) -> Result<(), MockVrfError> {
        if !env
            .storage()
            .persistent()
            .has(&MockKey::Request(request_id))
        {
            return Err(MockVrfError::NonexistentRequest);
        }

        Self::_deliver(&env, request_id, consumer, words);
        Ok(())
    }

    fn _deliver(env: &Env, request_id: u64, consumer: Address, words: Vec<u64>) {
        env.storage()
            .persistent()
            .remove(&MockKey::Request(request_id));
        RandomnessConsumerClient::new(env, &consumer).fulfill_random_words(
            &env.current_contract_address(),
            &request_id,
            &words,
        );
    }
}
