//! Scalar ROI output for a projection

use serde::{Deserialize, Serialize};

use super::aggregator::CostBreakdown;

/// Summary metrics for one set of inputs
///
/// Recomputed from inputs on every call; never mutated after construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoiCalculation {
    /// Net program cost (total cost less non-loan aid)
    pub total_cost: f64,

    /// Lifetime earnings with the credential minus lifetime earnings without it
    pub expected_earnings: f64,

    /// Expected earnings less net cost
    pub net_roi: f64,

    /// Net ROI as a percentage of net cost; +Infinity when free and profitable
    #[serde(with = "infinite_as_null")]
    pub roi_percentage: f64,

    /// Years from program start to break-even; +Infinity if never
    #[serde(with = "infinite_as_null")]
    pub payback_period: f64,

    /// Lifetime earnings with the credential
    pub lifetime_earnings_with_degree: f64,

    /// Lifetime earnings without the credential
    pub lifetime_earnings_without_degree: f64,

    /// Cost detail the totals were derived from
    pub costs: CostBreakdown,
}

impl RoiCalculation {
    /// Whether the credentialed path ever catches up
    pub fn breaks_even(&self) -> bool {
        self.payback_period.is_finite()
    }

    /// Payback measured from program completion rather than program start
    pub fn payback_after_completion(&self) -> f64 {
        (self.payback_period - self.costs.program_length).max(0.0)
    }
}

/// Serialize `+Infinity` sentinels as JSON `null` and read `null` back as `+Infinity`
pub(crate) mod infinite_as_null {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S>(value: &f64, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let finite = if value.is_finite() { Some(*value) } else { None };
        finite.serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<f64, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<f64>::deserialize(deserializer)?;
        Ok(value.unwrap_or(f64::INFINITY))
    }
}
