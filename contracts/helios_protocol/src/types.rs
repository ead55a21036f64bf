//! # Types
//!
//! Shared data structures used across all modules of the Helios protocol.
//!
//! ## Design decisions
//!
//! ### Config / State split
//!
//! A `Project` is internally stored as two separate ledger entries:
//!
//! - [`ProjectConfig`] — written once at creation; never mutated.
//! - [`ProjectState`] — written on every investment, report aggregation,
//!   claim, and cancellation.
//!
//! Investments and claims are the high-frequency writes, so the mutable
//! entry is kept small. The public API exposes the reconstructed
//! [`Project`] struct for convenience.
//!
//! ### Status as a Finite-State Machine
//!
//! [`ProjectStatus`] enforces a strict forward-only lifecycle:
//!
//! ```text
//! Funding ──► Active ──► Completed
//!     └──► Cancelled
//! ```
//!
//! Backward transitions and transitions out of terminal states
//! (`Completed`, `Cancelled`) are rejected.

use soroban_sdk::{contracttype, Address, String, Vec};

/// Lifecycle status of a project.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ProjectStatus {
    /// Accepting investments toward the funding goal.
    Funding,
    /// Fully funded; the installation is operating and accruing returns.
    Active,
    /// Contract duration elapsed; final claims only.
    Completed,
    /// Funding deadline missed; investors may withdraw their capital.
    Cancelled,
}

/// How investor returns accrue once a project is operating.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ReturnsModel {
    /// Contractually fixed monthly rate on raised capital.
    FixedRate,
    /// Pro-rata share of reported energy revenue, net of maintenance,
    /// capped by the contractual rate.
    RevenueShare,
}

/// Immutable project configuration, written once at creation.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProjectConfig {
    pub id: u64,
    pub name: String,
    pub location: String,
    /// Address that created the project and operates the installation.
    pub developer: Address,
    /// Token contract used to move all value in and out of the protocol.
    pub token: Address,
    pub funding_goal: i128,
    /// Ledger timestamp after which the project can no longer be funded.
    pub funding_deadline: u64,
    pub installation_cost: i128,
    /// Forecast production in kWh, used for off-chain appraisal.
    pub expected_monthly_production: u64,
    /// Tariff paid per kWh reported, in token units.
    pub price_per_kwh: i128,
    /// Reference grid tariff; the project tariff must undercut it.
    pub grid_price_per_kwh: i128,
    /// Consumer savings vs. the grid tariff, 500–1500 basis points.
    pub savings_bp: u32,
    pub monthly_maintenance_cost: i128,
    /// Annual investor return in basis points.
    pub return_bp: u32,
    /// Operating lifetime in 30-day months, at least 180.
    pub duration_months: u32,
    pub returns_model: ReturnsModel,
}

/// Mutable project state, updated by the hot paths.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProjectState {
    pub funding_raised: i128,
    pub status: ProjectStatus,
    /// Zero until the project activates; set exactly once.
    pub start_date: u64,
    pub report_count: u32,
    pub investor_count: u32,
    pub total_energy_produced: u64,
    pub total_revenue_generated: i128,
    pub total_return_distributed: i128,
}

/// Full representation of a project.
///
/// Used as the public API return type; reconstructed from the split
/// `ProjectConfig` + `ProjectState` storage entries.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Project {
    pub id: u64,
    pub name: String,
    pub location: String,
    pub developer: Address,
    pub token: Address,
    pub funding_goal: i128,
    pub funding_raised: i128,
    pub funding_deadline: u64,
    pub installation_cost: i128,
    pub expected_monthly_production: u64,
    pub price_per_kwh: i128,
    pub grid_price_per_kwh: i128,
    pub savings_bp: u32,
    pub monthly_maintenance_cost: i128,
    pub return_bp: u32,
    pub duration_months: u32,
    pub returns_model: ReturnsModel,
    pub status: ProjectStatus,
    pub start_date: u64,
    pub report_count: u32,
    pub investor_count: u32,
    pub total_energy_produced: u64,
    pub total_revenue_generated: i128,
    pub total_return_distributed: i128,
}

impl Project {
    /// Reassemble the public view from the two storage entries.
    pub fn from_parts(config: ProjectConfig, state: ProjectState) -> Self {
        Project {
            id: config.id,
            name: config.name,
            location: config.location,
            developer: config.developer,
            token: config.token,
            funding_goal: config.funding_goal,
            funding_raised: state.funding_raised,
            funding_deadline: config.funding_deadline,
            installation_cost: config.installation_cost,
            expected_monthly_production: config.expected_monthly_production,
            price_per_kwh: config.price_per_kwh,
            grid_price_per_kwh: config.grid_price_per_kwh,
            savings_bp: config.savings_bp,
            monthly_maintenance_cost: config.monthly_maintenance_cost,
            return_bp: config.return_bp,
            duration_months: config.duration_months,
            returns_model: config.returns_model,
            status: state.status,
            start_date: state.start_date,
            report_count: state.report_count,
            investor_count: state.investor_count,
            total_energy_produced: state.total_energy_produced,
            total_revenue_generated: state.total_revenue_generated,
            total_return_distributed: state.total_return_distributed,
        }
    }
}

/// Creation parameters for [`crate::HeliosProtocol::create_project`].
///
/// Grouped into a struct to keep the entry-point signature stable as the
/// appraisal fields evolve.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProjectParams {
    pub name: String,
    pub location: String,
    pub token: Address,
    pub funding_goal: i128,
    /// Funding window length; the deadline is `now + duration_days` days.
    pub duration_days: u32,
    pub installation_cost: i128,
    pub expected_monthly_production: u64,
    pub price_per_kwh: i128,
    pub grid_price_per_kwh: i128,
    pub savings_bp: u32,
    pub monthly_maintenance_cost: i128,
    pub return_bp: u32,
    pub duration_months: u32,
    pub returns_model: ReturnsModel,
}

/// Per-(project, investor) ledger entry.
///
/// Created implicitly on first investment, zeroed only by a refund after
/// cancellation, never deleted. `shares` equals `amount` in the current
/// design; the separate field is kept so share weighting can diverge from
/// contributed capital without a storage migration.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Investment {
    pub amount: i128,
    pub shares: i128,
    pub claimed_returns: i128,
    pub last_claim_timestamp: u64,
}

impl Investment {
    pub fn zeroed() -> Self {
        Investment {
            amount: 0,
            shares: 0,
            claimed_returns: 0,
            last_claim_timestamp: 0,
        }
    }
}

/// One production report in a project's append-only log.
///
/// Immutable once verified; `verified` transitions false → true exactly
/// once and gates aggregation into the project totals.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EnergyReport {
    pub id: u32,
    pub timestamp: u64,
    pub energy_produced: u64,
    /// `energy_produced × price_per_kwh`, fixed at submission time.
    pub revenue: i128,
    pub reporter: Address,
    pub verified: bool,
}

/// Verified production aggregated per 30-day month bucket.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MonthlyPerformance {
    pub energy_produced: u64,
    pub revenue: i128,
    pub report_count: u32,
}

impl MonthlyPerformance {
    pub fn zeroed() -> Self {
        MonthlyPerformance {
            energy_produced: 0,
            revenue: 0,
            report_count: 0,
        }
    }
}

/// Kind of ledger action recorded in an investor's activity log.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ActivityKind {
    Invested,
    Claimed,
    Refunded,
}

/// One entry in an investor's bounded activity log.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ActivityRecord {
    pub kind: ActivityKind,
    pub project_id: u64,
    pub amount: i128,
    pub timestamp: u64,
}

/// Fixed-capacity activity log. `next` is the slot the next entry lands
/// in once the buffer is full; entries are overwritten in place rather
/// than shifted.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ActivityLog {
    pub entries: Vec<ActivityRecord>,
    pub next: u32,
}
