//! Baseline salary lookup by prior-credential status
//!
//! Catalog salaries are quoted for entrants who already hold the prerequisite
//! credential (e.g. a high-school diploma). Entrants without it get the lower
//! baseline, and the projected salary is scaled by the same ratio.

use serde::{Deserialize, Serialize};

use crate::inputs::EarningsInputs;

/// Baseline annual salary for someone holding the prerequisite credential
pub const CREDENTIALED_BASELINE: f64 = 42_000.0;

/// Baseline annual salary for someone without it
pub const NON_CREDENTIALED_BASELINE: f64 = 33_000.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalaryAssumptions {
    /// Baseline when `has_credential` is true
    pub credentialed_baseline: f64,

    /// Baseline when `has_credential` is false
    pub non_credentialed_baseline: f64,
}

impl Default for SalaryAssumptions {
    fn default() -> Self {
        Self {
            credentialed_baseline: CREDENTIALED_BASELINE,
            non_credentialed_baseline: NON_CREDENTIALED_BASELINE,
        }
    }
}

impl SalaryAssumptions {
    /// Baseline salary for the credential flag
    pub fn baseline(&self, has_credential: bool) -> f64 {
        if has_credential {
            self.credentialed_baseline
        } else {
            self.non_credentialed_baseline
        }
    }

    /// Proportional adjustment applied to catalog salaries
    pub fn adjustment_factor(&self, has_credential: bool) -> f64 {
        if self.credentialed_baseline <= 0.0 {
            return 1.0;
        }
        self.baseline(has_credential) / self.credentialed_baseline
    }

    /// Derive earnings inputs from the credential flag and a catalog salary
    pub fn derive_earnings(
        &self,
        has_credential: bool,
        catalog_salary: f64,
        career_length: u32,
        salary_growth_rate: f64,
    ) -> EarningsInputs {
        EarningsInputs {
            baseline_salary: self.baseline(has_credential),
            projected_salary: catalog_salary * self.adjustment_factor(has_credential),
            career_length,
            salary_growth_rate,
        }
    }
}
