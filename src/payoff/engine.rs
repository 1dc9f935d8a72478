//! Monthly payoff simulation engine
//!
//! Advances a working set of debt balances one calendar month at a time:
//! interest accrual, then a minimum-payment waterfall over a shared pool,
//! then the leftover pool concentrated on the first open debt in strategy
//! order. A snapshot is recorded after each month.

use chrono::{Local, NaiveDate};

use super::order::{order_debts, Strategy};
use super::snapshot::{MonthlySnapshot, PayoffResult};
use super::state::PayoffState;
use crate::debt::Debt;

/// Hard ceiling on simulated months (50 years).
///
/// Guarantees termination when payments cannot outpace accrual; hitting the
/// bound yields a normal, capped result rather than an error.
pub const MAX_PAYOFF_MONTHS: u32 = 600;

/// Configuration for a payoff simulation run
#[derive(Debug, Clone)]
pub struct PayoffConfig {
    /// Pooled extra payment applied on top of the minimums each month
    pub extra_payment: f64,

    /// Prioritization strategy; the processing order is fixed at start
    pub strategy: Strategy,

    /// Iteration ceiling for the monthly loop
    pub max_months: u32,

    /// Override the date the payoff date is anchored to (for testing).
    /// Defaults to today.
    pub as_of: Option<NaiveDate>,
}

impl Default for PayoffConfig {
    fn default() -> Self {
        Self {
            extra_payment: 0.0,
            strategy: Strategy::Avalanche,
            max_months: MAX_PAYOFF_MONTHS,
            as_of: None,
        }
    }
}

/// Main payoff simulation engine
pub struct PayoffEngine {
    config: PayoffConfig,
}

impl PayoffEngine {
    /// Create a new engine with the given config
    pub fn new(config: PayoffConfig) -> Self {
        Self { config }
    }

    /// Run the simulation over a private working copy of the debts.
    ///
    /// Inputs are assumed pre-validated (non-negative balances, rates, and
    /// payments); see `debt::loader` for the validation layer. A debt set
    /// that is already fully paid yields a zero-month result with an empty
    /// trace.
    pub fn simulate(&self, debts: &[Debt]) -> PayoffResult {
        let ordered = order_debts(debts, self.config.strategy);
        let mut state = PayoffState::new(ordered, self.config.extra_payment);
        let mut snapshots = Vec::new();

        while state.any_open() && state.month < self.config.max_months {
            state.month += 1;

            // Fixed phase order: accrual, minimums, extra, snapshot.
            state.accrue_interest();
            let mut pool = state.monthly_pool;
            state.apply_minimums(&mut pool);
            state.apply_extra(pool);

            snapshots.push(MonthlySnapshot::capture(&state));
        }

        if state.any_open() {
            log::warn!(
                "payoff simulation capped at {} months with {:.2} still outstanding",
                state.month,
                state.total_balance()
            );
        }

        let as_of = self
            .config
            .as_of
            .unwrap_or_else(|| Local::now().date_naive());
        PayoffResult::from_run(self.config.strategy, as_of, &state, snapshots)
    }
}

/// Simulate a payoff with the default 600-month safety bound
pub fn simulate_payoff(debts: &[Debt], extra_payment: f64, strategy: Strategy) -> PayoffResult {
    PayoffEngine::new(PayoffConfig {
        extra_payment,
        strategy,
        ..Default::default()
    })
    .simulate(debts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::{prop_assert, prop_assert_eq, proptest};

    fn two_debts() -> Vec<Debt> {
        vec![
            Debt::new(1, "A", 1000.0, 20.0, 50.0),
            Debt::new(2, "B", 2000.0, 10.0, 60.0),
        ]
    }

    fn anchored(extra_payment: f64, strategy: Strategy) -> PayoffEngine {
        PayoffEngine::new(PayoffConfig {
            extra_payment,
            strategy,
            as_of: NaiveDate::from_ymd_opt(2024, 1, 15),
            ..Default::default()
        })
    }

    #[test]
    fn test_first_month_waterfall() {
        let result = anchored(100.0, Strategy::Avalanche).simulate(&two_debts());
        let first = &result.snapshots[0];

        // Accrual adds ~16.67 to each; A takes its 50 minimum plus the full
        // 100 extra, B takes its 60 minimum.
        assert_eq!(first.month, 1);
        assert_eq!(first.debts[0].debt_id, 1);
        assert_eq!(first.debts[0].balance, 867);
        assert_eq!(first.debts[1].debt_id, 2);
        assert_eq!(first.debts[1].balance, 1957);
        assert_eq!(first.total_balance, 2823);
        assert_eq!(first.interest_paid, 33);
    }

    #[test]
    fn test_runs_to_completion() {
        let result = anchored(100.0, Strategy::Avalanche).simulate(&two_debts());

        assert!(result.months_to_payoff > 0);
        assert!(result.months_to_payoff < MAX_PAYOFF_MONTHS);
        assert_eq!(result.snapshots.len(), result.months_to_payoff as usize);
        assert_eq!(result.snapshots.last().unwrap().total_balance, 0);
        assert!(!result.capped());
    }

    #[test]
    fn test_already_paid_off_yields_zero_months() {
        let debts = vec![
            Debt::new(1, "A", 0.0, 20.0, 50.0),
            Debt::new(2, "B", 0.0, 10.0, 60.0),
        ];
        let result = anchored(100.0, Strategy::Snowball).simulate(&debts);

        assert_eq!(result.months_to_payoff, 0);
        assert!(result.snapshots.is_empty());
        assert_eq!(result.total_interest_paid, 0);
        assert_eq!(
            result.payoff_date,
            NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
        );
    }

    #[test]
    fn test_empty_debt_list_yields_zero_months() {
        let result = simulate_payoff(&[], 100.0, Strategy::Avalanche);
        assert_eq!(result.months_to_payoff, 0);
        assert!(result.snapshots.is_empty());
    }

    #[test]
    fn test_interest_only_payment_hits_the_cap() {
        // 12% annually on 1000 accrues 10 per month; a 10 minimum never
        // touches principal.
        let debts = vec![Debt::new(1, "treadmill", 1000.0, 12.0, 10.0)];
        let result = anchored(0.0, Strategy::Avalanche).simulate(&debts);

        assert_eq!(result.months_to_payoff, MAX_PAYOFF_MONTHS);
        assert_eq!(result.snapshots.len(), MAX_PAYOFF_MONTHS as usize);
        assert!(result.capped());
        assert_eq!(result.snapshots.last().unwrap().debts[0].balance, 1000);
        assert_eq!(result.total_interest_paid, 6000);
    }

    #[test]
    fn test_freed_minimum_rolls_into_pool_same_month() {
        // A's balance is below its own minimum; the unused slice of A's
        // minimum must reach B through the shared pool in the same month.
        let debts = vec![
            Debt::new(1, "A", 30.0, 0.0, 50.0),
            Debt::new(2, "B", 1000.0, 0.0, 20.0),
        ];
        let result = anchored(0.0, Strategy::Avalanche).simulate(&debts);
        let first = &result.snapshots[0];

        assert_eq!(first.debts[0].balance, 0);
        // B: 20 minimum plus the 20 left in the pool after A closed.
        assert_eq!(first.debts[1].balance, 960);
    }

    #[test]
    fn test_paid_debt_keeps_funding_the_pool_and_stays_in_snapshots() {
        let debts = vec![
            Debt::new(1, "paid", 0.0, 18.0, 50.0),
            Debt::new(2, "open", 100.0, 0.0, 10.0),
        ];
        let result = anchored(0.0, Strategy::Avalanche).simulate(&debts);

        // The paid debt's 50 minimum accelerates the open debt: 60 available
        // per month retires 100 in two months.
        assert_eq!(result.months_to_payoff, 2);
        for snapshot in &result.snapshots {
            assert_eq!(snapshot.debts.len(), 2);
            assert_eq!(snapshot.debts[0].balance, 0);
        }
    }

    #[test]
    fn test_payoff_date_is_anchor_plus_months() {
        let debts = vec![Debt::new(1, "A", 100.0, 0.0, 60.0)];
        let result = anchored(0.0, Strategy::Avalanche).simulate(&debts);

        assert_eq!(result.months_to_payoff, 2);
        assert_eq!(
            result.payoff_date,
            NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
        );
    }

    #[test]
    fn test_total_balance_never_increases_when_payments_exceed_accrual() {
        let result = anchored(100.0, Strategy::Snowball).simulate(&two_debts());

        for window in result.snapshots.windows(2) {
            assert!(
                window[1].total_balance <= window[0].total_balance,
                "balance rose from {} to {} at month {}",
                window[0].total_balance,
                window[1].total_balance,
                window[1].month
            );
        }
    }

    proptest! {
        #![proptest_config(proptest::test_runner::Config::with_cases(24))]

        #[test]
        fn prop_simulation_terminates_within_the_bound(
            rows in proptest::collection::vec(
                (0u32..100_000, 0u32..4_000, 0u32..50_000),
                0..6,
            ),
            extra_cents in 0u32..100_000,
        ) {
            let debts: Vec<Debt> = rows
                .iter()
                .enumerate()
                .map(|(i, &(balance, rate_bp, min_cents))| {
                    Debt::new(
                        i as u32 + 1,
                        format!("debt-{}", i + 1),
                        balance as f64,
                        rate_bp as f64 / 100.0,
                        min_cents as f64 / 100.0,
                    )
                })
                .collect();

            let result =
                simulate_payoff(&debts, extra_cents as f64 / 100.0, Strategy::Avalanche);

            prop_assert!(result.months_to_payoff <= MAX_PAYOFF_MONTHS);
            prop_assert_eq!(result.snapshots.len(), result.months_to_payoff as usize);
            prop_assert!(result.total_interest_paid >= 0);
        }
    }
}
