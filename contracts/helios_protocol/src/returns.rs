//! # Returns accrual
//!
//! Pure computations over project, investment, and revenue aggregates.
//! No storage access happens here; the entry points load state, call in,
//! and persist the effects. All percentages are basis points
//! (10 000 bp = 100%) and all month arithmetic uses 30-day months
//! derived by the single [`months_between`] / [`month_index`] pair so no
//! two call sites can drift.

use crate::types::{Investment, ProjectConfig, ProjectState, ReturnsModel};
use crate::Error;

pub const MONTH_SECONDS: u64 = 30 * 86_400;
pub const BP_DENOM: i128 = 10_000;
const MONTHS_PER_YEAR: i128 = 12;

/// Whole 30-day months elapsed between two timestamps; zero if `to`
/// does not lie after `from`.
pub fn months_between(from: u64, to: u64) -> u64 {
    if to <= from {
        return 0;
    }
    (to - from) / MONTH_SECONDS
}

/// Bucket index of a timestamp: 30-day months since the epoch.
pub fn month_index(timestamp: u64) -> u32 {
    (timestamp / MONTH_SECONDS) as u32
}

/// An investor's pro-rata share of the raised capital, in basis points.
///
/// Fails on a zero denominator, which cannot occur once any shares are
/// outstanding under normal operation.
pub fn share_bp(shares: i128, funding_raised: i128) -> Result<i128, Error> {
    if funding_raised <= 0 {
        return Err(Error::InvalidAmount);
    }
    shares
        .checked_mul(BP_DENOM)
        .ok_or(Error::Overflow)
        .map(|scaled| scaled / funding_raised)
}

/// Reported revenue net of accrued maintenance, floored at zero.
pub fn net_revenue(config: &ProjectConfig, state: &ProjectState, now: u64) -> Result<i128, Error> {
    let months_operating = months_between(state.start_date, now) as i128;
    let maintenance = months_operating
        .checked_mul(config.monthly_maintenance_cost)
        .ok_or(Error::Overflow)?;
    Ok((state.total_revenue_generated - maintenance).max(0))
}

/// Amount the investor may claim right now, before clamping to the
/// token balance actually held by the contract.
///
/// Months accrue from `last_claim_timestamp`, so a repeat claim before
/// time advances — or a claim immediately after investing — accrues
/// nothing.
pub fn claimable(
    config: &ProjectConfig,
    state: &ProjectState,
    investment: &Investment,
    now: u64,
) -> Result<i128, Error> {
    if investment.amount <= 0 {
        return Ok(0);
    }

    let months_accrued = months_between(investment.last_claim_timestamp, now) as i128;
    if months_accrued == 0 {
        return Ok(0);
    }

    match config.returns_model {
        ReturnsModel::RevenueShare => {
            // Contractual rate caps the payout; lifetime revenue share,
            // net of what was already claimed, is the hard entitlement.
            let expected = investment
                .amount
                .checked_mul(config.return_bp as i128)
                .and_then(|v| v.checked_mul(months_accrued))
                .ok_or(Error::Overflow)?
                / (BP_DENOM * MONTHS_PER_YEAR);

            let share = share_bp(investment.shares, state.funding_raised)?;
            let revenue_share = net_revenue(config, state, now)?
                .checked_mul(share)
                .ok_or(Error::Overflow)?
                / BP_DENOM;
            let entitlement = (revenue_share - investment.claimed_returns).max(0);

            Ok(expected.min(entitlement))
        }
        ReturnsModel::FixedRate => {
            let share = share_bp(investment.shares, state.funding_raised)?;
            let monthly_pool = state
                .funding_raised
                .checked_mul(config.return_bp as i128)
                .ok_or(Error::Overflow)?
                / BP_DENOM;
            monthly_pool
                .checked_mul(share)
                .and_then(|v| v.checked_mul(months_accrued))
                .ok_or(Error::Overflow)
                .map(|v| v / BP_DENOM)
        }
    }
}
