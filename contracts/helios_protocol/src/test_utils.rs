extern crate std;

use soroban_sdk::{
    testutils::{Address as _, Ledger, LedgerInfo},
    token, Address, Env, String,
};

use crate::{
    types::Project, HeliosProtocol, HeliosProtocolClient, ProjectParams, ReturnsModel,
};

pub struct TestContext {
    pub env: Env,
    pub client: HeliosProtocolClient<'static>,
    pub admin: Address,
    pub developer: Address,
    pub oracle: Address,
}

impl TestContext {
    pub fn new() -> Self {
        let env = Env::default();
        env.mock_all_auths();

        // Initialize ledger with a standard timestamp
        env.ledger().set(LedgerInfo {
            timestamp: 100_000,
            protocol_version: 22,
            sequence_number: 100,
            network_id: [0u8; 32],
            base_reserve: 10,
            min_temp_entry_ttl: 10,
            min_persistent_entry_ttl: 10,
            max_entry_ttl: 1000,
        });

        let contract_id = env.register(HeliosProtocol, ());
        let client = HeliosProtocolClient::new(&env, &contract_id);

        let admin = Address::generate(&env);
        let developer = Address::generate(&env);
        let oracle = Address::generate(&env);

        client.init(&admin);
        client.add_developer(&admin, &developer);
        client.add_oracle(&admin, &oracle);

        Self {
            env,
            client,
            admin,
            developer,
            oracle,
        }
    }

    pub fn create_token(&self) -> (token::Client<'static>, token::StellarAssetClient<'static>) {
        let addr = self
            .env
            .register_stellar_asset_contract_v2(self.admin.clone());
        (
            token::Client::new(&self.env, &addr.address()),
            token::StellarAssetClient::new(&self.env, &addr.address()),
        )
    }

    /// Baseline revenue-share project parameters against `token`.
    pub fn default_params(&self, token: &Address) -> ProjectParams {
        ProjectParams {
            name: String::from_str(&self.env, "Rooftop Array 7"),
            location: String::from_str(&self.env, "Almeria, ES"),
            token: token.clone(),
            funding_goal: 10_000,
            duration_days: 30,
            installation_cost: 8_000,
            expected_monthly_production: 1_200,
            price_per_kwh: 50,
            grid_price_per_kwh: 80,
            savings_bp: 1_000,
            monthly_maintenance_cost: 0,
            return_bp: 1_200,
            duration_months: 240,
            returns_model: ReturnsModel::RevenueShare,
        }
    }

    /// Register a default project and hand back its token pair.
    pub fn setup_project(
        &self,
        goal: i128,
    ) -> (
        Project,
        token::Client<'static>,
        token::StellarAssetClient<'static>,
    ) {
        let (token, sac) = self.create_token();
        let mut params = self.default_params(&token.address);
        params.funding_goal = goal;
        let project = self.client.create_project(&self.developer, &params);
        (project, token, sac)
    }

    /// Same, but on the fixed-rate model with the given annual rate.
    pub fn setup_fixed_project(
        &self,
        goal: i128,
        return_bp: u32,
    ) -> (
        Project,
        token::Client<'static>,
        token::StellarAssetClient<'static>,
    ) {
        let (token, sac) = self.create_token();
        let mut params = self.default_params(&token.address);
        params.funding_goal = goal;
        params.return_bp = return_bp;
        params.returns_model = ReturnsModel::FixedRate;
        let project = self.client.create_project(&self.developer, &params);
        (project, token, sac)
    }

    /// Mint and invest in one step.
    pub fn invest(
        &self,
        sac: &token::StellarAssetClient<'static>,
        investor: &Address,
        project_id: u64,
        amount: i128,
    ) {
        sac.mint(investor, &amount);
        self.client.invest(investor, &project_id, &amount);
    }

    pub fn jump_time(&self, seconds: u64) {
        let mut ledger = self.env.ledger().get();
        ledger.timestamp += seconds;
        self.env.ledger().set(ledger);
    }

    pub fn jump_months(&self, months: u64) {
        self.jump_time(months * crate::returns::MONTH_SECONDS);
    }

    pub fn generate_address(&self) -> Address {
        Address::generate(&self.env)
    }
}
