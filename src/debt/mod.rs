//! Debt input records and CSV loading

mod data;
pub mod loader;

pub use data::Debt;
pub use loader::{load_debts, load_debts_from_reader, validate_debts, DebtInputError};
