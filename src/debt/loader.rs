//! Load debts from a CSV file
//!
//! This is the validation layer: the simulation engine assumes non-negative,
//! finite inputs, and everything that enters through here is checked.

use super::Debt;
use csv::Reader;
use std::path::Path;
use thiserror::Error;

/// Errors raised while reading or validating debt input
#[derive(Debug, Error)]
pub enum DebtInputError {
    #[error("failed to read debts: {0}")]
    Csv(#[from] csv::Error),

    #[error("debt {debt_id} ({name}): {field} must be a non-negative finite number, got {value}")]
    InvalidAmount {
        debt_id: u32,
        name: String,
        field: &'static str,
        value: f64,
    },
}

/// Raw CSV row matching the debts input columns
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    #[serde(rename = "DebtID")]
    debt_id: u32,
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "Balance")]
    balance: f64,
    #[serde(rename = "AnnualRate")]
    annual_rate: f64,
    #[serde(rename = "MinPayment")]
    min_payment: f64,
}

impl CsvRow {
    fn to_debt(self) -> Result<Debt, DebtInputError> {
        let debt = Debt::new(
            self.debt_id,
            self.name,
            self.balance,
            self.annual_rate,
            self.min_payment,
        );
        validate_debt(&debt)?;
        Ok(debt)
    }
}

fn validate_debt(debt: &Debt) -> Result<(), DebtInputError> {
    let fields = [
        ("Balance", debt.balance),
        ("AnnualRate", debt.annual_rate),
        ("MinPayment", debt.min_payment),
    ];
    for (field, value) in fields {
        if !value.is_finite() || value < 0.0 {
            return Err(DebtInputError::InvalidAmount {
                debt_id: debt.debt_id,
                name: debt.name.clone(),
                field,
                value,
            });
        }
    }
    Ok(())
}

/// Validate a caller-built debt set before handing it to the engine
pub fn validate_debts(debts: &[Debt]) -> Result<(), DebtInputError> {
    debts.iter().try_for_each(validate_debt)
}

/// Load all debts from a CSV file
pub fn load_debts<P: AsRef<Path>>(path: P) -> Result<Vec<Debt>, DebtInputError> {
    let mut reader = Reader::from_path(path)?;
    let mut debts = Vec::new();

    for result in reader.deserialize() {
        let row: CsvRow = result?;
        debts.push(row.to_debt()?);
    }

    log::debug!("loaded {} debts", debts.len());
    Ok(debts)
}

/// Load debts from any reader (e.g., string buffer, network stream)
pub fn load_debts_from_reader<R: std::io::Read>(reader: R) -> Result<Vec<Debt>, DebtInputError> {
    let mut csv_reader = Reader::from_reader(reader);
    let mut debts = Vec::new();

    for result in csv_reader.deserialize() {
        let row: CsvRow = result?;
        debts.push(row.to_debt()?);
    }

    Ok(debts)
}
