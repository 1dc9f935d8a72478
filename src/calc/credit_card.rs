//! Credit-card payoff projection for a single revolving balance

use serde::{Deserialize, Serialize};

use crate::payoff::MAX_PAYOFF_MONTHS;

/// Result of a fixed-payment payoff projection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardPayoff {
    /// Months until the balance reaches zero, or the safety bound
    pub months: u32,

    /// Total interest accrued, whole currency units
    pub total_interest: i64,

    /// True when the projection hit the safety bound with balance remaining
    pub capped: bool,
}

/// Project paying a fixed monthly amount against one revolving balance.
///
/// Same month shape as the payoff engine, reduced to a single account:
/// accrue, then pay. A payment that cannot outpace accrual produces a
/// capped projection rather than an error.
pub fn project_payoff(balance: f64, annual_rate: f64, payment: f64) -> CardPayoff {
    let monthly_rate = annual_rate / 100.0 / 12.0;
    let mut balance = balance.max(0.0);
    let mut total_interest = 0.0;
    let mut months = 0;

    while balance > 0.0 && months < MAX_PAYOFF_MONTHS {
        months += 1;
        let interest = balance * monthly_rate;
        total_interest += interest;
        balance += interest;
        balance -= payment.min(balance);
    }

    CardPayoff {
        months,
        total_interest: total_interest.round() as i64,
        capped: balance > 0.0,
    }
}
