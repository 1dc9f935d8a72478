//! Working balance state for a single payoff simulation

use crate::debt::Debt;

/// Unrounded per-debt balance tracked during simulation
#[derive(Debug, Clone)]
pub struct DebtState {
    pub debt_id: u32,
    pub name: String,

    /// Outstanding balance, unrounded
    pub balance: f64,

    /// Annual interest rate as a percentage
    pub annual_rate: f64,

    /// Minimum required monthly payment
    pub min_payment: f64,
}

impl DebtState {
    fn from_debt(debt: Debt) -> Self {
        Self {
            debt_id: debt.debt_id,
            name: debt.name,
            balance: debt.balance,
            annual_rate: debt.annual_rate,
            min_payment: debt.min_payment,
        }
    }

    /// Open debts still accrue interest and receive payments
    pub fn is_open(&self) -> bool {
        self.balance > 0.0
    }
}

/// State of one simulation run between monthly phases.
///
/// Balances stay unrounded here; rounding to whole currency units happens
/// only when a snapshot is captured.
#[derive(Debug, Clone)]
pub struct PayoffState {
    /// Current simulation month (1-indexed, 0 before the first month)
    pub month: u32,

    /// Working debts in fixed strategy order
    pub debts: Vec<DebtState>,

    /// Shared monthly pool: sum of the original minimums plus the extra payment
    pub monthly_pool: f64,

    /// Cumulative interest accrued, unrounded
    pub total_interest: f64,
}

impl PayoffState {
    /// Build working state from the ordered debt set.
    ///
    /// The pool is derived from the original minimums and stays constant even
    /// as debts close; a closed debt's minimum keeps funding later debts.
    pub fn new(ordered: Vec<Debt>, extra_payment: f64) -> Self {
        let monthly_pool =
            ordered.iter().map(|d| d.min_payment).sum::<f64>() + extra_payment;
        Self {
            month: 0,
            debts: ordered.into_iter().map(DebtState::from_debt).collect(),
            monthly_pool,
            total_interest: 0.0,
        }
    }

    /// Whether any debt still carries a positive balance
    pub fn any_open(&self) -> bool {
        self.debts.iter().any(DebtState::is_open)
    }

    /// Phase 1: accrue one month of interest on every open debt
    pub fn accrue_interest(&mut self) {
        for debt in self.debts.iter_mut().filter(|d| d.is_open()) {
            let interest = debt.balance * (debt.annual_rate / 100.0) / 12.0;
            debt.balance += interest;
            self.total_interest += interest;
        }
    }

    /// Phase 2: minimum-payment waterfall over the shared pool.
    ///
    /// Walks debts in strategy order; each open debt consumes up to its own
    /// minimum, its balance, or whatever the pool still holds.
    pub fn apply_minimums(&mut self, pool: &mut f64) {
        for debt in self.debts.iter_mut().filter(|d| d.is_open()) {
            let payment = debt.min_payment.min(debt.balance).min(*pool);
            debt.balance -= payment;
            *pool -= payment;
        }
    }

    /// Phase 3: the first open debt in strategy order absorbs the leftover
    /// pool. Only one debt receives it per month.
    pub fn apply_extra(&mut self, pool: f64) {
        if pool <= 0.0 {
            return;
        }
        if let Some(debt) = self.debts.iter_mut().find(|d| d.is_open()) {
            debt.balance -= pool.min(debt.balance);
        }
    }

    /// Aggregate balance across all debts, unrounded, floored at zero per debt
    pub fn total_balance(&self) -> f64 {
        self.debts.iter().map(|d| d.balance.max(0.0)).sum()
    }
}
