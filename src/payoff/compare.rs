//! Side-by-side strategy comparison

use serde::{Deserialize, Serialize};

use super::engine::{PayoffConfig, PayoffEngine};
use super::order::Strategy;
use super::snapshot::PayoffResult;
use crate::debt::Debt;

/// Payoff results for both strategies on identical inputs
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StrategyComparison {
    pub avalanche: PayoffResult,
    pub snowball: PayoffResult,
}

impl StrategyComparison {
    /// The strategy with the lower total interest (avalanche on ties)
    pub fn cheaper(&self) -> Strategy {
        if self.snowball.total_interest_paid < self.avalanche.total_interest_paid {
            Strategy::Snowball
        } else {
            Strategy::Avalanche
        }
    }

    /// Interest difference between the two strategies, whole currency units
    pub fn interest_saved(&self) -> i64 {
        (self.avalanche.total_interest_paid - self.snowball.total_interest_paid).abs()
    }
}

fn run(debts: &[Debt], extra_payment: f64, strategy: Strategy) -> PayoffResult {
    PayoffEngine::new(PayoffConfig {
        extra_payment,
        strategy,
        ..Default::default()
    })
    .simulate(debts)
}

/// Run both strategies on identical copies of the same inputs.
///
/// Each run owns its own working copy, so the two simulations share no
/// state and run in parallel.
pub fn compare_strategies(debts: &[Debt], extra_payment: f64) -> StrategyComparison {
    let (avalanche, snowball) = rayon::join(
        || run(debts, extra_payment, Strategy::Avalanche),
        || run(debts, extra_payment, Strategy::Snowball),
    );
    StrategyComparison {
        avalanche,
        snowball,
    }
}
