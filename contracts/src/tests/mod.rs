//! Test modules for the raffle contract.


use soroban_sdk::{
    testutils::{Address as _, IssuerFlags, Ledger as _},
    token::{StellarAssetClient, TokenClient},
    Address, BytesN, Env,
};

use crate::contract::{Raffle, RaffleClient};
use crate::testutils::{MockVrfCoordinator, MockVrfCoordinatorClient};
use crate::types::RaffleConfig;

/// 0.01 XLM in stroops, matching the development-network entrance fee.
pub(crate) const ENTRANCE_FEE: i128 = 100_000;

/// Seconds before a round becomes eligible for upkeep.
pub(crate) const INTERVAL: u64 = 30;

pub(crate) const CALLBACK_GAS_LIMIT: u32 = 500_000;

/// One registered environment per test: a Stellar Asset Contract for
/// payments, the mock VRF coordinator and the raffle itself.
///
/// Clients borrow the `Env`, so they are built on demand instead of being
/// stored here.
pub(crate) struct RaffleTest {
    pub env: Env,
    pub raffle_id: Address,
    pub coordinator_id: Address,
    pub token_id: Address,
}

impl RaffleTest {
    /// Registers all three contracts and initializes the raffle with the
    /// default configuration (fee, interval, funded subscription).
    pub fn setup() -> Self {
        let test = Self::setup_uninitialized();

        let subscription_id = test.coordinator().create_subscription();
        test.coordinator().fund_subscription(&subscription_id, &2_0000000);
        test.raffle().initialize(&test.default_config(subscription_id));

        test
    }

    /// Registers the contracts but leaves the raffle uninitialized.
    pub fn setup_uninitialized() -> Self {
        let env = Env::default();
        env.mock_all_auths();

        let token_admin = Address::generate(&env);
        let sac = env.register_stellar_asset_contract_v2(token_admin);
        // Revocable flag lets tests deauthorize a balance to force a
        // failed payout transfer
        sac.issuer().set_flag(IssuerFlags::RevocableFlag);
        let token_id = sac.address();
        let coordinator_id = env.register(MockVrfCoordinator, ());
        let raffle_id = env.register(Raffle, ());

        RaffleTest {
            env,
            raffle_id,
            coordinator_id,
            token_id,
        }
    }

    pub fn default_config(&self, subscription_id: u64) -> RaffleConfig {
        RaffleConfig {
            vrf_coordinator: self.coordinator_id.clone(),
            payment_token: self.token_id.clone(),
            entrance_fee: ENTRANCE_FEE,
            gas_lane: BytesN::from_array(&self.env, &[0x47; 32]),
            subscription_id,
            callback_gas_limit: CALLBACK_GAS_LIMIT,
            interval: INTERVAL,
        }
    }

    pub fn raffle(&self) -> RaffleClient<'_> {
        RaffleClient::new(&self.env, &self.raffle_id)
    }

    pub fn coordinator(&self) -> MockVrfCoordinatorClient<'_> {
        MockVrfCoordinatorClient::new(&self.env, &self.coordinator_id)
    }

    pub fn token(&self) -> TokenClient<'_> {
        TokenClient::new(&self.env, &self.token_id)
    }

    pub fn token_admin(&self) -> StellarAssetClient<'_> {
        StellarAssetClient::new(&self.env, &self.token_id)
    }

    /// Mints exactly the entrance fee for a fresh address and enters it.
    pub fn enter_new_player(&self) -> Address {
        let player = Address::generate(&self.env);
        self.token_admin().mint(&player, &ENTRANCE_FEE);
        self.raffle().enter_raffle(&player, &ENTRANCE_FEE);
        player
    }

    pub fn advance_time(&self, seconds: u64) {
        self.env.ledger().with_mut(|li| {
            li.timestamp += seconds;
        });
    }
}
