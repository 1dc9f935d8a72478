//! Retirement withdrawal projection

use serde::{Deserialize, Serialize};

/// Default projection horizon when the caller supplies none (50 years)
pub const DEFAULT_HORIZON_MONTHS: u32 = 600;

/// Inputs for a monthly withdrawal projection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WithdrawalPlan {
    /// Balance at the start of retirement
    pub starting_balance: f64,

    /// Assumed annual growth rate as a percentage
    pub annual_return: f64,

    /// Fixed amount withdrawn at the end of each month
    pub monthly_withdrawal: f64,
}

/// Outcome of a withdrawal projection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WithdrawalProjection {
    /// Months the balance sustained the full withdrawal
    pub months_funded: u32,

    /// Balance remaining at the horizon, whole currency units
    pub ending_balance: i64,

    /// Total withdrawn over the projection, whole currency units
    pub total_withdrawn: i64,

    /// True when the balance ran out before the horizon
    pub depleted: bool,
}

/// Project monthly growth followed by a fixed withdrawal until the balance
/// is exhausted or the horizon is reached.
pub fn project_withdrawals(plan: &WithdrawalPlan, horizon_months: u32) -> WithdrawalProjection {
    let monthly_rate = plan.annual_return / 100.0 / 12.0;
    let mut balance = plan.starting_balance.max(0.0);
    let mut total_withdrawn = 0.0;
    let mut months_funded = 0;
    let mut depleted = false;

    for _ in 0..horizon_months {
        balance *= 1.0 + monthly_rate;
        if balance < plan.monthly_withdrawal {
            // Final partial month drains whatever is left.
            total_withdrawn += balance;
            balance = 0.0;
            depleted = true;
            break;
        }
        balance -= plan.monthly_withdrawal;
        total_withdrawn += plan.monthly_withdrawal;
        months_funded += 1;
    }

    WithdrawalProjection {
        months_funded,
        ending_balance: balance.max(0.0).round() as i64,
        total_withdrawn: total_withdrawn.round() as i64,
        depleted,
    }
}
