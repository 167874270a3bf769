//! Core contract implementation for the raffle.

use soroban_sdk::{contract, contractimpl, symbol_short, token, Address, Bytes, Env, Vec};

use crate::errors::ContractError;
use crate::oracle::RandomnessOracleClient;
use crate::types::{DataKey, RaffleConfig, RaffleState};

/// Block confirmations the coordinator waits for before fulfilling.
pub const REQUEST_CONFIRMATIONS: u32 = 3;

/// Random words requested per round; one is enough to pick a winner.
pub const NUM_WORDS: u32 = 1;

#[contract]
pub struct Raffle;

#[contractimpl]
impl Raffle {
    /// Initializes the raffle with its immutable configuration (one-time only).
    ///
    /// The first round opens immediately: state is set to `Open`, the entrant
    /// list is empty and the round clock starts at the current ledger time.
    pub fn initialize(env: Env, config: RaffleConfig) -> Result<(), ContractError> {
        if env.storage().persistent().has(&DataKey::Config) {
            return Err(ContractError::AlreadyInitialized);
        }

        if config.entrance_fee <= 0 || config.interval == 0 {
            return Err(ContractError::InvalidConfig);
        }

        env.storage().persistent().set(&DataKey::Config, &config);
        env.storage().persistent().set(&DataKey::State, &RaffleState::Open);
        env.storage()
            .persistent()
            .set(&DataKey::Entrants, &Vec::<Address>::new(&env));
        env.storage()
            .persistent()
            .set(&DataKey::LastTimestamp, &env.ledger().timestamp());

        Ok(())
    }

    /// Enters the caller into the current round for `amount` of the payment
    /// token. `amount` must cover the entrance fee; any overpayment stays in
    /// the pot and goes to the eventual winner.
    pub fn enter_raffle(env: Env, entrant: Address, amount: i128) -> Result<(), ContractError> {
        entrant.require_auth();

        let config = Self::_config(&env)?;
        let state = Self::_state(&env)?;

        if state != RaffleState::Open {
            return Err(ContractError::RoundNotOpen);
        }

        if amount < config.entrance_fee {
            return Err(ContractError::InsufficientEntryFee);
        }

        token::TokenClient::new(&env, &config.payment_token).transfer(
            &entrant,
            &env.current_contract_address(),
            &amount,
        );

        let mut entrants = Self::_entrants(&env);
        entrants.push_back(entrant.clone());
        env.storage().persistent().set(&DataKey::Entrants, &entrants);

        env.events()
            .publish((symbol_short!("entered"),), entrant);

        Ok(())
    }

    /// Read-only upkeep probe for the automation keeper's polling loop.
    ///
    /// Upkeep is needed when all four conditions hold: the round is open,
    /// the interval has elapsed since the round started, at least one entrant
    /// has joined and the contract holds a non-zero pot.
    pub fn check_upkeep(env: Env, _check_data: Bytes) -> (bool, Bytes) {
        (Self::_upkeep_needed(&env), Bytes::new(&env))
    }

    /// Advances the round: closes entry and requests randomness from the
    /// configured VRF coordinator, recording the returned request id as the
    /// single pending request.
    ///
    /// Fails with `UpkeepNotNeeded` unless `check_upkeep` would report true
    /// at this instant; in particular, calling it again while a request is
    /// already pending fails, since the round is no longer open.
    pub fn perform_upkeep(env: Env, _perform_data: Bytes) -> Result<(), ContractError> {
        if !Self::_upkeep_needed(&env) {
            return Err(ContractError::UpkeepNotNeeded);
        }

        let config = Self::_config(&env)?;

        env.storage()
            .persistent()
            .set(&DataKey::State, &RaffleState::Calculating);

        let request_id = RandomnessOracleClient::new(&env, &config.vrf_coordinator)
            .request_randomness(
                &config.gas_lane,
                &config.subscription_id,
                &REQUEST_CONFIRMATIONS,
                &config.callback_gas_limit,
                &NUM_WORDS,
            );

        env.storage()
            .persistent()
            .set(&DataKey::PendingRequest, &request_id);

        env.events()
            .publish((symbol_short!("requested"),), request_id);

        Ok(())
    }

    /// Fulfillment callback from the VRF coordinator: picks the winner,
    /// pays out the entire pot and reopens the round.
    ///
    /// `caller` must be the configured coordinator and must authorize the
    /// call; `request_id` must match the pending request recorded by the
    /// most recent `perform_upkeep`, which also rejects replays of stale or
    /// forged ids. Any error rolls the invocation back whole, so a failed
    /// payout leaves the round calculating with the pot intact.
    ///
    /// If the coordinator never calls back, the round stays in `Calculating`
    /// indefinitely; there is no timeout or cancellation path.
    pub fn fulfill_random_words(
        env: Env,
        caller: Address,
        request_id: u64,
        random_words: Vec<u64>,
    ) -> Result<(), ContractError> {
        caller.require_auth();

        let config = Self::_config(&env)?;
        if caller != config.vrf_coordinator {
            return Err(ContractError::Unauthorized);
        }

        let pending: u64 = env
            .storage()
            .persistent()
            .get(&DataKey::PendingRequest)
            .ok_or(ContractError::UnknownRequest)?;
        if request_id != pending {
            return Err(ContractError::UnknownRequest);
        }

        let word = random_words.get(0).ok_or(ContractError::InvalidRandomWords)?;

        // A pending request implies a non-empty entrant list: upkeep required
        // entrants and entry has been closed since.
        let entrants = Self::_entrants(&env);
        let index = (word % entrants.len() as u64) as u32;
        let winner = entrants.get(index).ok_or(ContractError::UnknownRequest)?;

        env.storage().persistent().set(&DataKey::RecentWinner, &winner);
        env.storage()
            .persistent()
            .set(&DataKey::Entrants, &Vec::<Address>::new(&env));
        env.storage()
            .persistent()
            .set(&DataKey::LastTimestamp, &env.ledger().timestamp());
        env.storage().persistent().remove(&DataKey::PendingRequest);

        let pot = token::TokenClient::new(&env, &config.payment_token);
        let prize = pot.balance(&env.current_contract_address());
        if pot
            .try_transfer(&env.current_contract_address(), &winner, &prize)
            .is_err()
        {
            return Err(ContractError::PayoutFailed);
        }

        env.storage().persistent().set(&DataKey::State, &RaffleState::Open);

        env.events().publish((symbol_short!("winner"),), winner);

        Ok(())
    }

    pub fn get_config(env: Env) -> Option<RaffleConfig> {
        env.storage().persistent().get(&DataKey::Config)
    }

    pub fn get_entrance_fee(env: Env) -> Option<i128> {
        Self::get_config(env).map(|c| c.entrance_fee)
    }

    pub fn get_interval(env: Env) -> Option<u64> {
        Self::get_config(env).map(|c| c.interval)
    }

    pub fn get_raffle_state(env: Env) -> Option<RaffleState> {
        env.storage().persistent().get(&DataKey::State)
    }

    /// Returns the entrant at `index` in the current round, in entry order.
    pub fn get_player(env: Env, index: u32) -> Option<Address> {
        Self::_entrants(&env).get(index)
    }

    pub fn get_number_of_players(env: Env) -> u32 {
        Self::_entrants(&env).len()
    }

    /// Returns the winner of the most recently completed round.
    pub fn get_recent_winner(env: Env) -> Option<Address> {
        env.storage().persistent().get(&DataKey::RecentWinner)
    }

    /// Returns the timestamp at which the current round started.
    pub fn get_latest_timestamp(env: Env) -> Option<u64> {
        env.storage().persistent().get(&DataKey::LastTimestamp)
    }

    /// Returns the outstanding randomness request id, if any.
    pub fn get_pending_request(env: Env) -> Option<u64> {
        env.storage().persistent().get(&DataKey::PendingRequest)
    }

    pub fn get_request_confirmations(_env: Env) -> u32 {
        REQUEST_CONFIRMATIONS
    }

    pub fn get_num_words(_env: Env) -> u32 {
        NUM_WORDS
    }

    fn _config(env: &Env) -> Result<RaffleConfig, ContractError> {
        env.storage()
            .persistent()
            .get(&DataKey::Config)
            .ok_or(ContractError::NotInitialized)
    }

    fn _state(env: &Env) -> Result<RaffleState, ContractError> {
        env.storage()
            .persistent()
            .get(&DataKey::State)
            .ok_or(ContractError::NotInitialized)
    }

    fn _entrants(env: &Env) -> Vec<Address> {
        env.storage()
            .persistent()
            .get(&DataKey::Entrants)
            .unwrap_or(Vec::new(env))
    }

    /// Recomputes the four-part upkeep condition. Returns false on any
    /// missing state rather than erroring, so the keeper probe stays total.
    fn _upkeep_needed(env: &Env) -> bool {
        let Some(config) = env
            .storage()
            .persistent()
            .get::<DataKey, RaffleConfig>(&DataKey::Config)
        else {
            return false;
        };

        let Some(state) = env
            .storage()
            .persistent()
            .get::<DataKey, RaffleState>(&DataKey::State)
        else {
            return false;
        };
        if state != RaffleState::Open {
            return false;
        }

        let Some(started) = env
            .storage()
            .persistent()
            .get::<DataKey, u64>(&DataKey::LastTimestamp)
        else {
            return false;
        };
        let Some(eligible_at) = started.checked_add(config.interval) else {
            return false;
        };
        if env.ledger().timestamp() < eligible_at {
            return false;
        }

        if Self::_entrants(env).is_empty() {
            return false;
        }

        let balance = token::TokenClient::new(env, &config.payment_token)
            .balance(&env.current_contract_address());
        balance > 0
    }
}
