//! Payoff Engine - Personal finance projection engine
//!
//! This library provides:
//! - Multi-debt payoff simulation under avalanche/snowball prioritization
//! - Side-by-side strategy comparison
//! - Single-loan amortization schedules
//! - Credit-card payoff and debt-to-income calculators
//! - Retirement withdrawal projections

pub mod calc;
pub mod debt;
pub mod payoff;

// Re-export commonly used types
pub use debt::Debt;
pub use payoff::{
    compare_strategies, order_debts, simulate_payoff, MonthlySnapshot, PayoffConfig, PayoffEngine,
    PayoffResult, Strategy, StrategyComparison,
};
