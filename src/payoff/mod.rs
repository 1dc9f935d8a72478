//! Multi-debt payoff simulation: ordering policy, monthly engine, comparison

mod compare;
mod engine;
mod order;
mod snapshot;
mod state;

pub use compare::{compare_strategies, StrategyComparison};
pub use engine::{simulate_payoff, PayoffConfig, PayoffEngine, MAX_PAYOFF_MONTHS};
pub use order::{order_debts, Strategy};
pub use snapshot::{DebtBalance, MonthlySnapshot, PayoffResult};
pub use state::{DebtState, PayoffState};
