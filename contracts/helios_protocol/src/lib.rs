//! # Helios Protocol Contract
//!
//! Crowdfunding and revenue-sharing ledger for solar-energy projects.
//! Investors fund a project toward its goal; once fully funded the
//! installation operates for a fixed contract duration, production is
//! reported and oracle-verified, and returns accrue for pro-rata claiming.
//! Projects that miss their funding deadline are cancelled and investors
//! refunded.
//!
//! The single Soroban contract `HeliosProtocol` exposes the full lifecycle:
//!
//! | Phase        | Entry Point(s)                                          |
//! |--------------|---------------------------------------------------------|
//! | Bootstrap    | [`HeliosProtocol::init`]                                |
//! | Role admin   | `add_developer`, `remove_developer`, `add_oracle`, `remove_oracle`, `transfer_admin` |
//! | Funding      | [`HeliosProtocol::create_project`], [`HeliosProtocol::invest`] |
//! | Operation    | [`HeliosProtocol::submit_report`], [`HeliosProtocol::verify_report`] |
//! | Returns      | [`HeliosProtocol::claim_returns`], `distribute_monthly_returns` |
//! | Wind-down    | [`HeliosProtocol::cancel_project`], [`HeliosProtocol::refund_investment`], `complete_project` |
//! | Queries      | `get_project`, `get_investment`, `get_report`, …        |
//!
//! ## Architecture
//!
//! Authorization is fully delegated to [`rbac`], storage access to
//! [`storage`], accrual arithmetic to [`returns`], and the reentrancy
//! lock to [`guard`]. This file contains only the public entry points
//! and event emissions. Every state-mutating entry point validates,
//! then mutates, then performs external token calls last; on any error
//! the whole invocation reverts with no partial effect.

#![no_std]

use soroban_sdk::{contract, contracterror, contractimpl, token, Address, Env, Vec};

pub mod events;
mod guard;
pub mod rbac;
mod returns;
mod storage;
mod types;

#[cfg(test)]
mod test_events;
#[cfg(test)]
mod test_utils;

use guard::EntryLock;
use storage::{
    get_and_increment_project_id, load_investment, load_project, load_project_pair, load_report,
    save_investment, save_project, save_project_state, save_report,
};
pub use types::{
    ActivityKind, ActivityRecord, EnergyReport, Investment, MonthlyPerformance, Project,
    ProjectConfig, ProjectParams, ProjectState, ProjectStatus, ReturnsModel,
};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 1,
    NotAuthorized = 2,
    ProjectNotFound = 3,
    ReportNotFound = 4,
    InvalidAmount = 5,
    InvalidGoal = 6,
    InvalidDeadline = 7,
    InvalidDuration = 8,
    InvalidTariff = 9,
    InvalidSavingsShare = 10,
    InvalidReturnRate = 11,
    FundingClosed = 12,
    DeadlinePassed = 13,
    DeadlineNotReached = 14,
    GoalAlreadyReached = 15,
    ProjectNotActive = 16,
    ProjectNotCancelled = 17,
    ReportAlreadyVerified = 18,
    NothingToClaim = 19,
    NothingToRefund = 20,
    InsufficientContractBalance = 21,
    ReentrantCall = 22,
    Overflow = 23,
    InvalidStateTransition = 24,
}

/// Upper sanity bound on funding goals.
const MAX_GOAL: i128 = 1_000_000_000_000_000_000_000_000_000_000;

/// Funding windows are capped at five years.
const MAX_FUNDING_DAYS: u32 = 1_825;

/// Contract durations below 15 years are not economically viable for a
/// solar installation and are rejected at creation.
const MIN_DURATION_MONTHS: u32 = 180;

const SAVINGS_MIN_BP: u32 = 500;
const SAVINGS_MAX_BP: u32 = 1_500;

#[contract]
pub struct HeliosProtocol;

#[contractimpl]
impl HeliosProtocol {
    // ─────────────────────────────────────────────────────────────────
    // Initialisation
    // ─────────────────────────────────────────────────────────────────

    /// Initialise the contract and set the admin.
    ///
    /// Must be called exactly once immediately after deployment.
    /// Subsequent calls fail with `Error::AlreadyInitialized`.
    ///
    /// - `admin` is the only identity allowed to mutate the capability
    ///   sets, and must sign the transaction.
    pub fn init(env: Env, admin: Address) -> Result<(), Error> {
        admin.require_auth();
        rbac::init_admin(&env, &admin)
    }

    // ─────────────────────────────────────────────────────────────────
    // Role management
    // ─────────────────────────────────────────────────────────────────

    /// Grant the developer capability to `target`. Idempotent.
    ///
    /// - `caller` must be the admin.
    pub fn add_developer(env: Env, caller: Address, target: Address) -> Result<(), Error> {
        caller.require_auth();
        rbac::require_admin(&env, &caller)?;
        rbac::set_developer(&env, &target, true);
        events::emit_developer_granted(&env, target);
        Ok(())
    }

    /// Revoke the developer capability from `target`. Idempotent.
    ///
    /// - `caller` must be the admin.
    pub fn remove_developer(env: Env, caller: Address, target: Address) -> Result<(), Error> {
        caller.require_auth();
        rbac::require_admin(&env, &caller)?;
        rbac::set_developer(&env, &target, false);
        events::emit_developer_revoked(&env, target);
        Ok(())
    }

    /// Grant the oracle capability to `target`. Idempotent.
    ///
    /// - `caller` must be the admin.
    pub fn add_oracle(env: Env, caller: Address, target: Address) -> Result<(), Error> {
        caller.require_auth();
        rbac::require_admin(&env, &caller)?;
        rbac::set_oracle(&env, &target, true);
        events::emit_oracle_granted(&env, target);
        Ok(())
    }

    /// Revoke the oracle capability from `target`. Idempotent.
    ///
    /// - `caller` must be the admin.
    pub fn remove_oracle(env: Env, caller: Address, target: Address) -> Result<(), Error> {
        caller.require_auth();
        rbac::require_admin(&env, &caller)?;
        rbac::set_oracle(&env, &target, false);
        events::emit_oracle_revoked(&env, target);
        Ok(())
    }

    /// Transfer the admin identity to `new_admin`.
    ///
    /// - `current` must authorize and be the admin.
    /// - The previous admin loses the identity immediately.
    pub fn transfer_admin(env: Env, current: Address, new_admin: Address) -> Result<(), Error> {
        current.require_auth();
        rbac::transfer_admin(&env, &current, &new_admin)
    }

    pub fn is_developer(env: Env, who: Address) -> bool {
        rbac::is_developer(&env, &who)
    }

    pub fn is_oracle(env: Env, who: Address) -> bool {
        rbac::is_oracle(&env, &who)
    }

    pub fn get_admin(env: Env) -> Option<Address> {
        rbac::admin(&env)
    }

    // ─────────────────────────────────────────────────────────────────
    // Project lifecycle
    // ─────────────────────────────────────────────────────────────────

    /// Create a new funding project.
    ///
    /// - `developer` must hold the developer capability and sign.
    /// - The goal must be positive, the project tariff must undercut the
    ///   reference grid tariff, the savings share must lie within
    ///   500–1500 bp, and the contract duration must be at least 180
    ///   30-day months.
    ///
    /// No state changes or event emissions happen on failure.
    pub fn create_project(
        env: Env,
        developer: Address,
        params: ProjectParams,
    ) -> Result<Project, Error> {
        developer.require_auth();
        rbac::require_developer(&env, &developer)?;

        if params.funding_goal <= 0 || params.funding_goal > MAX_GOAL {
            return Err(Error::InvalidGoal);
        }
        if params.duration_days == 0 || params.duration_days > MAX_FUNDING_DAYS {
            return Err(Error::InvalidDeadline);
        }
        if params.duration_months < MIN_DURATION_MONTHS {
            return Err(Error::InvalidDuration);
        }
        if params.return_bp == 0 {
            return Err(Error::InvalidReturnRate);
        }
        if params.price_per_kwh <= 0 || params.price_per_kwh >= params.grid_price_per_kwh {
            return Err(Error::InvalidTariff);
        }
        if params.savings_bp < SAVINGS_MIN_BP || params.savings_bp > SAVINGS_MAX_BP {
            return Err(Error::InvalidSavingsShare);
        }
        if params.installation_cost <= 0
            || params.expected_monthly_production == 0
            || params.monthly_maintenance_cost < 0
        {
            return Err(Error::InvalidAmount);
        }

        let now = env.ledger().timestamp();
        let funding_deadline = now
            .checked_add(params.duration_days as u64 * 86_400)
            .ok_or(Error::Overflow)?;

        let id = get_and_increment_project_id(&env);

        let config = types::ProjectConfig {
            id,
            name: params.name,
            location: params.location,
            developer: developer.clone(),
            token: params.token,
            funding_goal: params.funding_goal,
            funding_deadline,
            installation_cost: params.installation_cost,
            expected_monthly_production: params.expected_monthly_production,
            price_per_kwh: params.price_per_kwh,
            grid_price_per_kwh: params.grid_price_per_kwh,
            savings_bp: params.savings_bp,
            monthly_maintenance_cost: params.monthly_maintenance_cost,
            return_bp: params.return_bp,
            duration_months: params.duration_months,
            returns_model: params.returns_model,
        };
        let state = types::ProjectState {
            funding_raised: 0,
            status: ProjectStatus::Funding,
            start_date: 0,
            report_count: 0,
            investor_count: 0,
            total_energy_produced: 0,
            total_revenue_generated: 0,
            total_return_distributed: 0,
        };

        save_project(&env, &config, &state);
        events::emit_project_created(
            &env,
            id,
            developer,
            config.token.clone(),
            config.funding_goal,
            funding_deadline,
        );

        Ok(Project::from_parts(config, state))
    }

    /// Invest in a funding project.
    ///
    /// The full `amount` is pulled from the investor; anything beyond
    /// what the goal still needs is paid straight back as the final
    /// call, so the project can never be overfunded. Reaching the goal
    /// activates the project and fixes its start date.
    ///
    /// Investing resets the investor's accrual clock: any unclaimed
    /// accrual time on a prior contribution is forfeited.
    ///
    /// Returns the accepted amount.
    pub fn invest(env: Env, investor: Address, project_id: u64, amount: i128) -> Result<i128, Error> {
        let _lock = EntryLock::acquire(&env)?;
        investor.require_auth();

        if amount <= 0 {
            return Err(Error::InvalidAmount);
        }

        let (config, mut state) = load_project_pair(&env, project_id)?;
        if state.status != ProjectStatus::Funding {
            return Err(Error::FundingClosed);
        }
        let now = env.ledger().timestamp();
        if now >= config.funding_deadline {
            return Err(Error::DeadlinePassed);
        }

        let remaining = config.funding_goal - state.funding_raised;
        let accepted = amount.min(remaining);

        // Pull the full amount up front; the lock covers the window
        // between this call and the state writes below.
        let token_client = token::Client::new(&env, &config.token);
        token_client.transfer(&investor, &env.current_contract_address(), &amount);

        let mut investment = load_investment(&env, project_id, &investor);
        if investment.amount == 0 {
            state.investor_count += 1;
        }
        investment.amount += accepted;
        investment.shares += accepted;
        investment.last_claim_timestamp = now;
        save_investment(&env, project_id, &investor, &investment);

        state.funding_raised += accepted;
        let activated = state.funding_raised == config.funding_goal;
        if activated {
            state.status = ProjectStatus::Active;
            state.start_date = now;
        }
        save_project_state(&env, project_id, &state);

        storage::push_activity(
            &env,
            &investor,
            ActivityRecord {
                kind: ActivityKind::Invested,
                project_id,
                amount: accepted,
                timestamp: now,
            },
        );

        events::emit_investment_made(&env, project_id, investor.clone(), accepted, state.funding_raised);
        if activated {
            events::emit_project_activated(&env, project_id, now);
        }

        let excess = amount - accepted;
        if excess > 0 {
            token_client.transfer(&env.current_contract_address(), &investor, &excess);
        }

        Ok(accepted)
    }

    /// Cancel a project whose funding window closed short of the goal.
    ///
    /// Callable by anyone once `now > funding_deadline` and the goal is
    /// unmet. Irreversible; investors recover their capital through
    /// [`HeliosProtocol::refund_investment`].
    pub fn cancel_project(env: Env, project_id: u64) -> Result<(), Error> {
        let (config, mut state) = load_project_pair(&env, project_id)?;

        if state.status != ProjectStatus::Funding {
            return Err(Error::InvalidStateTransition);
        }
        if env.ledger().timestamp() <= config.funding_deadline {
            return Err(Error::DeadlineNotReached);
        }
        if state.funding_raised >= config.funding_goal {
            return Err(Error::GoalAlreadyReached);
        }

        state.status = ProjectStatus::Cancelled;
        save_project_state(&env, project_id, &state);
        events::emit_project_cancelled(&env, project_id, state.funding_raised);
        Ok(())
    }

    /// Force an operating project to `Completed` ahead of its duration.
    ///
    /// - `caller` must be the admin.
    pub fn complete_project(env: Env, caller: Address, project_id: u64) -> Result<(), Error> {
        caller.require_auth();
        rbac::require_admin(&env, &caller)?;

        let (_config, mut state) = load_project_pair(&env, project_id)?;
        if state.status != ProjectStatus::Active {
            return Err(Error::InvalidStateTransition);
        }
        state.status = ProjectStatus::Completed;
        save_project_state(&env, project_id, &state);
        events::emit_project_completed(&env, project_id, state.total_return_distributed);
        Ok(())
    }

    /// Signal that a monthly distribution window opened. Informational:
    /// emits the current month index and net revenue, changes nothing.
    ///
    /// - `caller` must be the admin.
    /// - The project must be `Active`.
    pub fn distribute_monthly_returns(
        env: Env,
        caller: Address,
        project_id: u64,
    ) -> Result<(), Error> {
        caller.require_auth();
        rbac::require_admin(&env, &caller)?;

        let (config, state) = load_project_pair(&env, project_id)?;
        if state.status != ProjectStatus::Active {
            return Err(Error::ProjectNotActive);
        }
        let now = env.ledger().timestamp();
        let net = returns::net_revenue(&config, &state, now)?;
        events::emit_returns_due(&env, project_id, returns::month_index(now), net);
        Ok(())
    }

    // ─────────────────────────────────────────────────────────────────
    // Energy reports
    // ─────────────────────────────────────────────────────────────────

    /// Submit a production report for an operating project.
    ///
    /// - `reporter` must hold the developer or oracle capability.
    /// - Oracle submissions are verified on the spot and aggregate
    ///   immediately; developer submissions wait for
    ///   [`HeliosProtocol::verify_report`].
    ///
    /// Returns the report's sequence index.
    pub fn submit_report(
        env: Env,
        reporter: Address,
        project_id: u64,
        energy_produced: u64,
    ) -> Result<u32, Error> {
        reporter.require_auth();
        rbac::require_reporter(&env, &reporter)?;

        let (config, mut state) = load_project_pair(&env, project_id)?;
        if state.status != ProjectStatus::Active {
            return Err(Error::ProjectNotActive);
        }
        if energy_produced == 0 {
            return Err(Error::InvalidAmount);
        }

        let revenue = (energy_produced as i128)
            .checked_mul(config.price_per_kwh)
            .ok_or(Error::Overflow)?;

        let verified = rbac::is_oracle(&env, &reporter);
        let report = EnergyReport {
            id: state.report_count,
            timestamp: env.ledger().timestamp(),
            energy_produced,
            revenue,
            reporter: reporter.clone(),
            verified,
        };
        save_report(&env, project_id, &report);
        state.report_count += 1;

        let mut completed = false;
        if verified {
            Self::aggregate_report(&env, &config, &mut state, &report)?;
            completed = Self::check_duration_expiry(&env, &config, &mut state)?;
        }
        save_project_state(&env, project_id, &state);

        events::emit_report_submitted(
            &env,
            project_id,
            report.id,
            reporter,
            energy_produced,
            revenue,
            verified,
        );
        if completed {
            events::emit_project_completed(&env, project_id, state.total_return_distributed);
        }

        Ok(report.id)
    }

    /// Verify a pending report and fold it into the project totals.
    ///
    /// - `oracle` must hold the oracle capability.
    /// - Fails if the report was already verified; the verified flag is
    ///   the single-use gate that makes double-counting impossible.
    pub fn verify_report(
        env: Env,
        oracle: Address,
        project_id: u64,
        report_id: u32,
    ) -> Result<(), Error> {
        oracle.require_auth();
        rbac::require_oracle(&env, &oracle)?;

        let (config, mut state) = load_project_pair(&env, project_id)?;
        let mut report = load_report(&env, project_id, report_id)?;
        if report.verified {
            return Err(Error::ReportAlreadyVerified);
        }

        report.verified = true;
        save_report(&env, project_id, &report);

        Self::aggregate_report(&env, &config, &mut state, &report)?;
        let completed = Self::check_duration_expiry(&env, &config, &mut state)?;
        save_project_state(&env, project_id, &state);

        events::emit_report_verified(&env, project_id, report_id, oracle);
        if completed {
            events::emit_project_completed(&env, project_id, state.total_return_distributed);
        }
        Ok(())
    }

    // ─────────────────────────────────────────────────────────────────
    // Returns & refunds
    // ─────────────────────────────────────────────────────────────────

    /// Claim accrued returns on an operating or completed project.
    ///
    /// The accrued amount is computed by the project's returns model and
    /// clamped to the token balance the contract actually holds; the
    /// payout is the final call. Claims with nothing accrued fail.
    ///
    /// Returns the amount paid out.
    pub fn claim_returns(env: Env, investor: Address, project_id: u64) -> Result<i128, Error> {
        let _lock = EntryLock::acquire(&env)?;
        investor.require_auth();

        let (config, mut state) = load_project_pair(&env, project_id)?;
        match state.status {
            ProjectStatus::Active | ProjectStatus::Completed => {}
            _ => return Err(Error::ProjectNotActive),
        }

        let mut investment = load_investment(&env, project_id, &investor);
        if investment.amount == 0 {
            return Err(Error::NothingToClaim);
        }

        let now = env.ledger().timestamp();
        let accrued = returns::claimable(&config, &state, &investment, now)?;

        let token_client = token::Client::new(&env, &config.token);
        let held = token_client.balance(&env.current_contract_address());
        let payout = accrued.min(held);
        if payout <= 0 {
            return Err(Error::NothingToClaim);
        }

        investment.claimed_returns += payout;
        investment.last_claim_timestamp = now;
        save_investment(&env, project_id, &investor, &investment);

        state.total_return_distributed += payout;
        save_project_state(&env, project_id, &state);

        storage::push_activity(
            &env,
            &investor,
            ActivityRecord {
                kind: ActivityKind::Claimed,
                project_id,
                amount: payout,
                timestamp: now,
            },
        );
        events::emit_returns_claimed(&env, project_id, investor.clone(), payout);

        token_client.transfer(&env.current_contract_address(), &investor, &payout);
        Ok(payout)
    }

    /// Recover invested capital from a cancelled project.
    ///
    /// Pays back exactly what the investor contributed and zeroes the
    /// ledger entry. Fails if the contract does not hold enough of the
    /// token to cover the refund.
    ///
    /// Returns the refunded amount.
    pub fn refund_investment(env: Env, investor: Address, project_id: u64) -> Result<i128, Error> {
        let _lock = EntryLock::acquire(&env)?;
        investor.require_auth();

        let (config, state) = load_project_pair(&env, project_id)?;
        if state.status != ProjectStatus::Cancelled {
            return Err(Error::ProjectNotCancelled);
        }

        let mut investment = load_investment(&env, project_id, &investor);
        if investment.amount == 0 {
            return Err(Error::NothingToRefund);
        }

        let token_client = token::Client::new(&env, &config.token);
        if token_client.balance(&env.current_contract_address()) < investment.amount {
            return Err(Error::InsufficientContractBalance);
        }

        let refund = investment.amount;
        investment.amount = 0;
        investment.shares = 0;
        investment.claimed_returns = 0;
        save_investment(&env, project_id, &investor, &investment);

        let now = env.ledger().timestamp();
        storage::push_activity(
            &env,
            &investor,
            ActivityRecord {
                kind: ActivityKind::Refunded,
                project_id,
                amount: refund,
                timestamp: now,
            },
        );
        events::emit_investment_refunded(&env, project_id, investor.clone(), refund);

        token_client.transfer(&env.current_contract_address(), &investor, &refund);
        Ok(refund)
    }

    // ─────────────────────────────────────────────────────────────────
    // Queries
    // ─────────────────────────────────────────────────────────────────

    pub fn get_project(env: Env, project_id: u64) -> Result<Project, Error> {
        load_project(&env, project_id)
    }

    pub fn get_project_count(env: Env) -> u64 {
        storage::project_count(&env)
    }

    /// The investor's ledger entry, zeroed if they never invested.
    pub fn get_investment(
        env: Env,
        project_id: u64,
        investor: Address,
    ) -> Result<Investment, Error> {
        if !storage::project_exists(&env, project_id) {
            return Err(Error::ProjectNotFound);
        }
        Ok(load_investment(&env, project_id, &investor))
    }

    pub fn get_report(env: Env, project_id: u64, report_id: u32) -> Result<EnergyReport, Error> {
        if !storage::project_exists(&env, project_id) {
            return Err(Error::ProjectNotFound);
        }
        load_report(&env, project_id, report_id)
    }

    pub fn get_report_count(env: Env, project_id: u64) -> Result<u32, Error> {
        Ok(storage::load_project_state(&env, project_id)?.report_count)
    }

    /// The investor's pro-rata share of raised capital, in basis points.
    pub fn get_investor_share_bp(
        env: Env,
        project_id: u64,
        investor: Address,
    ) -> Result<i128, Error> {
        let state = storage::load_project_state(&env, project_id)?;
        let investment = load_investment(&env, project_id, &investor);
        returns::share_bp(investment.shares, state.funding_raised)
    }

    /// Preview of what [`HeliosProtocol::claim_returns`] would pay out
    /// right now, including the contract-balance clamp. Zero when the
    /// project is not accruing or the investor holds nothing.
    pub fn get_claimable(env: Env, project_id: u64, investor: Address) -> Result<i128, Error> {
        let (config, state) = load_project_pair(&env, project_id)?;
        match state.status {
            ProjectStatus::Active | ProjectStatus::Completed => {}
            _ => return Ok(0),
        }
        let investment = load_investment(&env, project_id, &investor);
        if investment.amount == 0 {
            return Ok(0);
        }
        let accrued = returns::claimable(&config, &state, &investment, env.ledger().timestamp())?;
        let token_client = token::Client::new(&env, &config.token);
        let held = token_client.balance(&env.current_contract_address());
        Ok(accrued.min(held).max(0))
    }

    pub fn get_monthly_performance(
        env: Env,
        project_id: u64,
        month_index: u32,
    ) -> Result<MonthlyPerformance, Error> {
        if !storage::project_exists(&env, project_id) {
            return Err(Error::ProjectNotFound);
        }
        Ok(storage::load_monthly_performance(
            &env,
            project_id,
            month_index,
        ))
    }

    /// The investor's recent ledger actions, oldest first, bounded by a
    /// fixed capacity.
    pub fn get_recent_activity(env: Env, investor: Address) -> Vec<ActivityRecord> {
        storage::load_activity(&env, &investor)
    }

    // ─────────────────────────────────────────────────────────────────
    // Internal Helpers
    // ─────────────────────────────────────────────────────────────────

    /// Fold one verified report into the running totals and its month
    /// bucket. Callers hold the single-use verified gate.
    fn aggregate_report(
        env: &Env,
        config: &ProjectConfig,
        state: &mut ProjectState,
        report: &EnergyReport,
    ) -> Result<(), Error> {
        state.total_energy_produced = state
            .total_energy_produced
            .checked_add(report.energy_produced)
            .ok_or(Error::Overflow)?;
        state.total_revenue_generated = state
            .total_revenue_generated
            .checked_add(report.revenue)
            .ok_or(Error::Overflow)?;
        storage::record_monthly_performance(
            env,
            config.id,
            returns::month_index(report.timestamp),
            report.energy_produced,
            report.revenue,
        )
    }

    /// Transition `Active → Completed` once the contract duration has
    /// fully elapsed. Returns whether the transition fired.
    fn check_duration_expiry(
        env: &Env,
        config: &ProjectConfig,
        state: &mut ProjectState,
    ) -> Result<bool, Error> {
        if state.status != ProjectStatus::Active {
            return Ok(false);
        }
        let lifetime = (config.duration_months as u64)
            .checked_mul(returns::MONTH_SECONDS)
            .ok_or(Error::Overflow)?;
        let ends_at = state.start_date.checked_add(lifetime).ok_or(Error::Overflow)?;
        if env.ledger().timestamp() >= ends_at {
            state.status = ProjectStatus::Completed;
            return Ok(true);
        }
        Ok(false)
    }
}
