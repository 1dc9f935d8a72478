//! Single-loan amortization arithmetic
//!
//! Closed-form level payment for a fully amortizing loan, plus the full
//! period-by-period schedule.

use serde::{Deserialize, Serialize};

/// Level monthly payment for a fully amortizing loan.
///
/// # Arguments
/// * `principal` - Amount borrowed, currency units
/// * `annual_rate` - Annual interest rate as a percentage
/// * `months` - Term length in months
///
/// A zero-rate loan divides the principal evenly across the term; a
/// zero-month term yields a zero payment.
pub fn payment_per_period(principal: f64, annual_rate: f64, months: u32) -> f64 {
    if months == 0 {
        return 0.0;
    }
    let rate = annual_rate / 100.0 / 12.0;
    if rate.abs() < 1e-12 {
        principal / months as f64
    } else {
        principal * rate / (1.0 - (1.0 + rate).powi(-(months as i32)))
    }
}

/// One month of an amortization schedule
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AmortizationRow {
    pub month: u32,
    pub payment: f64,
    pub interest: f64,
    pub principal: f64,

    /// Remaining balance after this payment
    pub balance: f64,
}

/// Totals across a full amortization schedule
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoanSummary {
    pub payment_per_period: f64,
    pub total_paid: f64,
    pub total_interest: f64,
}

/// Build the full period-by-period schedule.
///
/// The final payment retires whatever balance remains, absorbing the
/// residual of the closed-form payment.
pub fn schedule(principal: f64, annual_rate: f64, months: u32) -> Vec<AmortizationRow> {
    let payment = payment_per_period(principal, annual_rate, months);
    let rate = annual_rate / 100.0 / 12.0;
    let mut balance = principal;
    let mut rows = Vec::with_capacity(months as usize);

    for month in 1..=months {
        let interest = balance * rate;
        let principal_portion = if month == months {
            balance
        } else {
            (payment - interest).min(balance)
        };
        balance -= principal_portion;
        rows.push(AmortizationRow {
            month,
            payment: interest + principal_portion,
            interest,
            principal: principal_portion,
            balance,
        });
    }

    rows
}

/// Totals for a loan over its full term
pub fn summary(principal: f64, annual_rate: f64, months: u32) -> LoanSummary {
    let rows = schedule(principal, annual_rate, months);
    LoanSummary {
        payment_per_period: payment_per_period(principal, annual_rate, months),
        total_paid: rows.iter().map(|r| r.payment).sum(),
        total_interest: rows.iter().map(|r| r.interest).sum(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_zero_rate_divides_evenly() {
        assert_relative_eq!(payment_per_period(1200.0, 0.0, 12), 100.0);
    }

    #[test]
    fn test_level_payment_matches_annuity_formula() {
        // 10000 at 12% over 12 months
        assert_relative_eq!(
            payment_per_period(10_000.0, 12.0, 12),
            888.487_887,
            epsilon = 1e-4
        );
    }

    #[test]
    fn test_schedule_retires_the_loan() {
        let rows = schedule(10_000.0, 12.0, 12);
        assert_eq!(rows.len(), 12);
        assert_relative_eq!(rows.last().unwrap().balance, 0.0);

        // Interest portion shrinks as the balance falls.
        assert!(rows[0].interest > rows[11].interest);
        assert_relative_eq!(rows[0].interest, 100.0, epsilon = 1e-9);
    }

    #[test]
    fn test_summary_totals() {
        let loan = summary(10_000.0, 12.0, 12);
        assert_relative_eq!(
            loan.total_paid,
            loan.total_interest + 10_000.0,
            epsilon = 1e-6
        );
        assert_relative_eq!(loan.total_interest, 661.85, epsilon = 0.01);
    }

    #[test]
    fn test_zero_term_is_empty() {
        assert_eq!(payment_per_period(1000.0, 5.0, 0), 0.0);
        assert!(schedule(1000.0, 5.0, 0).is_empty());
    }
}
