//! Debt data structures matching the debts input format

use serde::{Deserialize, Serialize};

/// A single account under repayment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Debt {
    /// Stable caller-assigned identifier
    pub debt_id: u32,

    /// Display name
    pub name: String,

    /// Outstanding balance in currency units
    pub balance: f64,

    /// Annual interest rate as a percentage (e.g. 19.99)
    pub annual_rate: f64,

    /// Minimum required monthly payment in currency units
    pub min_payment: f64,
}

impl Debt {
    /// Create a new debt record
    pub fn new(
        debt_id: u32,
        name: impl Into<String>,
        balance: f64,
        annual_rate: f64,
        min_payment: f64,
    ) -> Self {
        Self {
            debt_id,
            name: name.into(),
            balance,
            annual_rate,
            min_payment,
        }
    }

    /// A debt with no remaining balance is fully paid.
    /// Paid debts accrue no interest and receive no payments, but stay in
    /// the set for snapshot purposes.
    pub fn is_paid_off(&self) -> bool {
        self.balance <= 0.0
    }

    /// Monthly interest rate as a decimal
    pub fn monthly_rate(&self) -> f64 {
        self.annual_rate / 100.0 / 12.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_monthly_rate() {
        let debt = Debt::new(1, "card", 1000.0, 24.0, 50.0);
        assert!((debt.monthly_rate() - 0.02).abs() < 1e-12);
    }

    #[test]
    fn test_paid_off_at_zero_or_below() {
        let mut debt = Debt::new(1, "card", 100.0, 20.0, 50.0);
        assert!(!debt.is_paid_off());

        debt.balance = 0.0;
        assert!(debt.is_paid_off());

        debt.balance = -0.5;
        assert!(debt.is_paid_off());
    }
}
