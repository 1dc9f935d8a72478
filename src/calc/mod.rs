//! Closed-form and single-stream planning calculators

pub mod amortization;
pub mod credit_card;
pub mod dti;
pub mod retirement;

pub use amortization::{payment_per_period, AmortizationRow, LoanSummary};
pub use credit_card::CardPayoff;
pub use dti::{DtiBand, DtiRatios};
pub use retirement::{WithdrawalPlan, WithdrawalProjection};
