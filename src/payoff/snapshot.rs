//! Snapshot and result structures for payoff simulations

use chrono::{Months, NaiveDate};
use serde::{Deserialize, Serialize};

use super::order::Strategy;
use super::state::PayoffState;

/// Round a working value to whole currency units, floored at zero
fn round_currency(value: f64) -> i64 {
    value.max(0.0).round() as i64
}

/// Rounded per-debt balance inside a monthly snapshot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DebtBalance {
    pub debt_id: u32,
    pub name: String,

    /// Balance in whole currency units, floored at zero
    pub balance: i64,
}

/// Immutable record of simulation state after one full month's processing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlySnapshot {
    /// Month index (1-based)
    pub month: u32,

    /// One entry per debt in the original input set, paid or not
    pub debts: Vec<DebtBalance>,

    /// Aggregate balance across all debts, whole currency units
    pub total_balance: i64,

    /// Cumulative interest paid to date, whole currency units
    pub interest_paid: i64,
}

impl MonthlySnapshot {
    /// Capture the rounded projection of the working state.
    ///
    /// Rounding happens only here; the working state stays unrounded.
    pub(crate) fn capture(state: &PayoffState) -> Self {
        Self {
            month: state.month,
            debts: state
                .debts
                .iter()
                .map(|d| DebtBalance {
                    debt_id: d.debt_id,
                    name: d.name.clone(),
                    balance: round_currency(d.balance),
                })
                .collect(),
            total_balance: round_currency(state.total_balance()),
            interest_paid: round_currency(state.total_interest),
        }
    }
}

/// Terminal summary of a completed payoff simulation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayoffResult {
    pub strategy: Strategy,

    /// Months simulated before every balance reached zero, or the safety
    /// bound if it was hit first
    pub months_to_payoff: u32,

    /// Total interest paid over the run, whole currency units
    pub total_interest_paid: i64,

    /// Projected calendar date of the final payment
    pub payoff_date: NaiveDate,

    /// Full month-by-month trace, in month order
    pub snapshots: Vec<MonthlySnapshot>,
}

impl PayoffResult {
    pub(crate) fn from_run(
        strategy: Strategy,
        as_of: NaiveDate,
        state: &PayoffState,
        snapshots: Vec<MonthlySnapshot>,
    ) -> Self {
        Self {
            strategy,
            months_to_payoff: state.month,
            total_interest_paid: round_currency(state.total_interest),
            payoff_date: as_of + Months::new(state.month),
            snapshots,
        }
    }

    /// Whether the run ended at the safety bound with balance outstanding
    pub fn capped(&self) -> bool {
        self.snapshots
            .last()
            .map(|s| s.total_balance > 0)
            .unwrap_or(false)
    }
}
