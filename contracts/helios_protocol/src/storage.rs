//! # Storage
//!
//! Typed helpers over Soroban's two storage tiers.
//!
//! ## Instance storage (contract-lifetime TTL)
//!
//! | Key            | Type  | Description                       |
//! |----------------|-------|-----------------------------------|
//! | `ProjectCount` | `u64` | Auto-increment project ID counter |
//! | `EntryLock`    | `bool`| Reentrancy lock, held per call    |
//!
//! Role membership also lives on the instance tier under `RbacKey`
//! (see [`crate::rbac`]).
//!
//! ## Persistent storage (per-entry TTL)
//!
//! | Key                        | Type                 | Description                    |
//! |----------------------------|----------------------|--------------------------------|
//! | `ProjConfig(id)`           | `ProjectConfig`      | Immutable project configuration|
//! | `ProjState(id)`            | `ProjectState`       | Mutable project state          |
//! | `Investment(id, investor)` | `Investment`         | Per-investor capital ledger    |
//! | `Report(id, report_id)`    | `EnergyReport`       | Append-only production log     |
//! | `MonthlyPerf(id, month)`   | `MonthlyPerformance` | Verified output per month      |
//! | `Activity(investor)`       | `ActivityLog`        | Bounded recent-action ring     |
//!
//! Instance TTL is bumped by 7 days whenever it falls below 1 day
//! remaining; persistent entries by 30 days when below 7.

use soroban_sdk::{contracttype, Address, Env, Vec};

use crate::types::{
    ActivityLog, ActivityRecord, EnergyReport, Investment, MonthlyPerformance, Project,
    ProjectConfig, ProjectState,
};
use crate::Error;

// ── TTL Constants ────────────────────────────────────────────────────

/// Approximate ledgers per day (~5 seconds per ledger).
const DAY_IN_LEDGERS: u32 = 17_280;

const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
const INSTANCE_LIFETIME_THRESHOLD: u32 = DAY_IN_LEDGERS;

const PERSISTENT_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
const PERSISTENT_LIFETIME_THRESHOLD: u32 = 7 * DAY_IN_LEDGERS;

/// Capacity of each investor's activity ring buffer.
pub const ACTIVITY_CAPACITY: u32 = 16;

// ── Storage Keys ─────────────────────────────────────────────────────

/// All non-RBAC contract storage keys.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    /// Global auto-increment counter for project IDs (Instance).
    ProjectCount,
    /// Mutual-exclusion flag for guarded entry points (Instance).
    EntryLock,
    /// Immutable project configuration keyed by ID (Persistent).
    ProjConfig(u64),
    /// Mutable project state keyed by ID (Persistent).
    ProjState(u64),
    /// Investment ledger keyed by (project, investor) (Persistent).
    Investment(u64, Address),
    /// Energy report keyed by (project, sequence index) (Persistent).
    Report(u64, u32),
    /// Monthly aggregate keyed by (project, month index) (Persistent).
    MonthlyPerf(u64, u32),
    /// Recent-activity ring buffer keyed by investor (Persistent).
    Activity(Address),
}

// ── Instance Storage Helpers ─────────────────────────────────────────

/// Extend instance storage TTL if it falls below the threshold.
pub(crate) fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

/// Atomically reads, increments, and stores the project counter.
/// Returns the ID to use for the *current* project (pre-increment value).
pub fn get_and_increment_project_id(env: &Env) -> u64 {
    bump_instance(env);
    let current: u64 = env
        .storage()
        .instance()
        .get(&DataKey::ProjectCount)
        .unwrap_or(0);
    env.storage()
        .instance()
        .set(&DataKey::ProjectCount, &(current + 1));
    current
}

/// Number of projects ever created.
pub fn project_count(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&DataKey::ProjectCount)
        .unwrap_or(0)
}

// ── Project Helpers ──────────────────────────────────────────────────

fn bump_persistent(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

pub fn project_exists(env: &Env, id: u64) -> bool {
    env.storage().persistent().has(&DataKey::ProjConfig(id))
}

/// Save both the immutable config and the mutable state for a new project.
pub fn save_project(env: &Env, config: &ProjectConfig, state: &ProjectState) {
    let config_key = DataKey::ProjConfig(config.id);
    let state_key = DataKey::ProjState(config.id);
    env.storage().persistent().set(&config_key, config);
    env.storage().persistent().set(&state_key, state);
    bump_persistent(env, &config_key);
    bump_persistent(env, &state_key);
}

pub fn load_project_config(env: &Env, id: u64) -> Result<ProjectConfig, Error> {
    let key = DataKey::ProjConfig(id);
    let config: ProjectConfig = env
        .storage()
        .persistent()
        .get(&key)
        .ok_or(Error::ProjectNotFound)?;
    bump_persistent(env, &key);
    Ok(config)
}

pub fn load_project_state(env: &Env, id: u64) -> Result<ProjectState, Error> {
    let key = DataKey::ProjState(id);
    let state: ProjectState = env
        .storage()
        .persistent()
        .get(&key)
        .ok_or(Error::ProjectNotFound)?;
    bump_persistent(env, &key);
    Ok(state)
}

/// Load both entries with a single not-found check, bumping both TTLs.
pub fn load_project_pair(env: &Env, id: u64) -> Result<(ProjectConfig, ProjectState), Error> {
    let config = load_project_config(env, id)?;
    let state = load_project_state(env, id)?;
    Ok((config, state))
}

/// Load the full `Project` by combining config and state.
pub fn load_project(env: &Env, id: u64) -> Result<Project, Error> {
    let (config, state) = load_project_pair(env, id)?;
    Ok(Project::from_parts(config, state))
}

/// Save only the mutable project state (the hot-path write).
pub fn save_project_state(env: &Env, id: u64, state: &ProjectState) {
    let key = DataKey::ProjState(id);
    env.storage().persistent().set(&key, state);
    bump_persistent(env, &key);
}

// ── Investment Ledger ────────────────────────────────────────────────

/// Load an investor's ledger entry, or a zeroed record if none exists.
/// Entries are created implicitly on first investment.
pub fn load_investment(env: &Env, project_id: u64, investor: &Address) -> Investment {
    let key = DataKey::Investment(project_id, investor.clone());
    match env.storage().persistent().get(&key) {
        Some(investment) => {
            bump_persistent(env, &key);
            investment
        }
        None => Investment::zeroed(),
    }
}

pub fn save_investment(env: &Env, project_id: u64, investor: &Address, investment: &Investment) {
    let key = DataKey::Investment(project_id, investor.clone());
    env.storage().persistent().set(&key, investment);
    bump_persistent(env, &key);
}

// ── Energy Report Log ────────────────────────────────────────────────

pub fn load_report(env: &Env, project_id: u64, report_id: u32) -> Result<EnergyReport, Error> {
    let key = DataKey::Report(project_id, report_id);
    let report: EnergyReport = env
        .storage()
        .persistent()
        .get(&key)
        .ok_or(Error::ReportNotFound)?;
    bump_persistent(env, &key);
    Ok(report)
}

pub fn save_report(env: &Env, project_id: u64, report: &EnergyReport) {
    let key = DataKey::Report(project_id, report.id);
    env.storage().persistent().set(&key, report);
    bump_persistent(env, &key);
}

// ── Monthly Performance Buckets ──────────────────────────────────────

pub fn load_monthly_performance(env: &Env, project_id: u64, month: u32) -> MonthlyPerformance {
    let key = DataKey::MonthlyPerf(project_id, month);
    env.storage()
        .persistent()
        .get(&key)
        .unwrap_or_else(MonthlyPerformance::zeroed)
}

/// Fold one verified report into its month bucket.
pub fn record_monthly_performance(
    env: &Env,
    project_id: u64,
    month: u32,
    energy_produced: u64,
    revenue: i128,
) -> Result<(), Error> {
    let key = DataKey::MonthlyPerf(project_id, month);
    let mut bucket = load_monthly_performance(env, project_id, month);
    bucket.energy_produced = bucket
        .energy_produced
        .checked_add(energy_produced)
        .ok_or(Error::Overflow)?;
    bucket.revenue = bucket.revenue.checked_add(revenue).ok_or(Error::Overflow)?;
    bucket.report_count += 1;
    env.storage().persistent().set(&key, &bucket);
    bump_persistent(env, &key);
    Ok(())
}

// ── Activity Ring Buffer ─────────────────────────────────────────────

/// Append to the investor's fixed-capacity activity log. Once full, the
/// oldest slot is overwritten in place; nothing is ever shifted.
pub fn push_activity(env: &Env, investor: &Address, record: ActivityRecord) {
    let key = DataKey::Activity(investor.clone());
    let mut log: ActivityLog = env.storage().persistent().get(&key).unwrap_or(ActivityLog {
        entries: Vec::new(env),
        next: 0,
    });

    if log.entries.len() < ACTIVITY_CAPACITY {
        log.entries.push_back(record);
    } else {
        log.entries.set(log.next, record);
    }
    log.next = (log.next + 1) % ACTIVITY_CAPACITY;

    env.storage().persistent().set(&key, &log);
    bump_persistent(env, &key);
}

/// The investor's recent activity, oldest first.
pub fn load_activity(env: &Env, investor: &Address) -> Vec<ActivityRecord> {
    let key = DataKey::Activity(investor.clone());
    let log: ActivityLog = match env.storage().persistent().get(&key) {
        Some(log) => log,
        None => return Vec::new(env),
    };

    if log.entries.len() < ACTIVITY_CAPACITY {
        return log.entries;
    }

    // Buffer has wrapped; the oldest entry sits at `next`.
    let mut ordered = Vec::new(env);
    for i in 0..ACTIVITY_CAPACITY {
        if let Some(record) = log.entries.get((log.next + i) % ACTIVITY_CAPACITY) {
            ordered.push_back(record);
        }
    }
    ordered
}
