//! Debt-to-income ratio calculations

use serde::{Deserialize, Serialize};

/// Front-end and back-end DTI ratios, as percentages
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DtiRatios {
    /// Housing payment / gross monthly income
    pub front_end: f64,

    /// (Housing + all other debt payments) / gross monthly income
    pub back_end: f64,
}

/// Qualitative band for a back-end DTI ratio
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DtiBand {
    /// [0, 28)
    Healthy,
    /// [28, 36)
    Manageable,
    /// [36, 43)
    Elevated,
    /// [43, Inf)
    Severe,
}

impl DtiBand {
    /// Classify a back-end ratio (percentage)
    pub fn from_back_end(ratio: f64) -> Self {
        if ratio < 28.0 {
            DtiBand::Healthy
        } else if ratio < 36.0 {
            DtiBand::Manageable
        } else if ratio < 43.0 {
            DtiBand::Elevated
        } else {
            DtiBand::Severe
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DtiBand::Healthy => "healthy",
            DtiBand::Manageable => "manageable",
            DtiBand::Elevated => "elevated",
            DtiBand::Severe => "severe",
        }
    }
}

/// Compute DTI ratios. Zero or negative income yields zero ratios rather
/// than a division error.
pub fn ratios(monthly_income: f64, housing_payment: f64, debt_payments: f64) -> DtiRatios {
    if monthly_income <= 0.0 {
        return DtiRatios {
            front_end: 0.0,
            back_end: 0.0,
        };
    }
    DtiRatios {
        front_end: housing_payment / monthly_income * 100.0,
        back_end: (housing_payment + debt_payments) / monthly_income * 100.0,
    }
}
