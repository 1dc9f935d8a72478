//! Payoff prioritization strategies and debt ordering

use crate::debt::Debt;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Strategy for prioritizing payments across debts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Highest interest rate first
    Avalanche,
    /// Smallest balance first
    Snowball,
}

impl Strategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Strategy::Avalanche => "avalanche",
            Strategy::Snowball => "snowball",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Strategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "avalanche" => Ok(Strategy::Avalanche),
            "snowball" => Ok(Strategy::Snowball),
            other => Err(format!("unknown strategy: {other}")),
        }
    }
}

/// Rank debts for processing under the given strategy.
///
/// The order is computed once per simulation and never revisited as balances
/// evolve. Ties keep the caller's input order (stable sort). The input is
/// not mutated; an empty list yields an empty list.
pub fn order_debts(debts: &[Debt], strategy: Strategy) -> Vec<Debt> {
    let mut ordered = debts.to_vec();
    match strategy {
        Strategy::Avalanche => ordered.sort_by(|a, b| {
            b.annual_rate
                .partial_cmp(&a.annual_rate)
                .unwrap_or(Ordering::Equal)
        }),
        Strategy::Snowball => ordered.sort_by(|a, b| {
            a.balance.partial_cmp(&b.balance).unwrap_or(Ordering::Equal)
        }),
    }
    ordered
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::{prop_assert_eq, proptest};

    fn sample_debts() -> Vec<Debt> {
        vec![
            Debt::new(1, "Car loan", 8000.0, 6.5, 150.0),
            Debt::new(2, "Visa", 1000.0, 26.99, 50.0),
            Debt::new(3, "Store card", 400.0, 19.99, 25.0),
        ]
    }

    fn ids(debts: &[Debt]) -> Vec<u32> {
        debts.iter().map(|d| d.debt_id).collect()
    }

    #[test]
    fn test_avalanche_orders_by_rate_descending() {
        let ordered = order_debts(&sample_debts(), Strategy::Avalanche);
        assert_eq!(ids(&ordered), vec![2, 3, 1]);
    }

    #[test]
    fn test_snowball_orders_by_balance_ascending() {
        let ordered = order_debts(&sample_debts(), Strategy::Snowball);
        assert_eq!(ids(&ordered), vec![3, 2, 1]);
    }

    #[test]
    fn test_ties_keep_input_order() {
        let debts = vec![
            Debt::new(1, "A", 500.0, 10.0, 20.0),
            Debt::new(2, "B", 500.0, 10.0, 20.0),
            Debt::new(3, "C", 500.0, 10.0, 20.0),
        ];
        assert_eq!(ids(&order_debts(&debts, Strategy::Avalanche)), vec![1, 2, 3]);
        assert_eq!(ids(&order_debts(&debts, Strategy::Snowball)), vec![1, 2, 3]);
    }

    #[test]
    fn test_input_is_not_mutated() {
        let debts = sample_debts();
        let _ = order_debts(&debts, Strategy::Avalanche);
        assert_eq!(ids(&debts), vec![1, 2, 3]);
    }

    #[test]
    fn test_empty_list_yields_empty_list() {
        assert!(order_debts(&[], Strategy::Snowball).is_empty());
    }

    #[test]
    fn test_strategy_parses_from_str() {
        assert_eq!("avalanche".parse::<Strategy>(), Ok(Strategy::Avalanche));
        assert_eq!("Snowball".parse::<Strategy>(), Ok(Strategy::Snowball));
        assert!("fastest".parse::<Strategy>().is_err());
    }

    proptest! {
        #![proptest_config(proptest::test_runner::Config::with_cases(32))]

        #[test]
        fn prop_ordering_is_idempotent(
            rows in proptest::collection::vec((1u32..100_000, 0u32..4_000), 0..8)
        ) {
            let debts: Vec<Debt> = rows
                .iter()
                .enumerate()
                .map(|(i, &(balance, rate_bp))| {
                    Debt::new(
                        i as u32 + 1,
                        format!("debt-{}", i + 1),
                        balance as f64,
                        rate_bp as f64 / 100.0,
                        25.0,
                    )
                })
                .collect();

            for strategy in [Strategy::Avalanche, Strategy::Snowball] {
                let once = order_debts(&debts, strategy);
                let twice = order_debts(&once, strategy);
                prop_assert_eq!(ids(&once), ids(&twice));
            }
        }
    }
}
