//! Reduce itemized annual costs and aid into program totals

use serde::{Deserialize, Serialize};

use crate::inputs::{CostInputs, FinancialAid};

/// Program cost totals after netting non-loan aid
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CostBreakdown {
    /// Sum of the annual cost items
    pub annual_cost: f64,

    /// Annual cost scaled by the (possibly fractional) program length
    pub total_cost: f64,

    /// Grants, scholarships and work-study over the program; loans excluded
    pub total_aid: f64,

    /// Total cost less aid, floored at zero
    pub net_cost: f64,

    /// Program length the totals were scaled by
    pub program_length: f64,
}

/// Missing, NaN, infinite or negative amounts count as zero
fn clamp_amount(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

impl CostBreakdown {
    /// Aggregate cost and aid inputs
    pub fn aggregate(costs: &CostInputs, aid: &FinancialAid) -> Self {
        let program_length = clamp_amount(costs.program_length);

        let annual_cost = clamp_amount(costs.tuition)
            + clamp_amount(costs.fees)
            + clamp_amount(costs.room_board)
            + clamp_amount(costs.books)
            + clamp_amount(costs.other_expenses);
        let total_cost = annual_cost * program_length;

        // Loans are repaid, so they never offset cost
        let annual_aid = clamp_amount(aid.grants)
            + clamp_amount(aid.scholarships)
            + clamp_amount(aid.work_study);
        let total_aid = annual_aid * program_length;

        let net_cost = (total_cost - total_aid).max(0.0);

        Self {
            annual_cost,
            total_cost,
            total_aid,
            net_cost,
            program_length,
        }
    }

    /// Aggregate costs with no aid applied
    pub fn gross(costs: &CostInputs) -> Self {
        Self::aggregate(costs, &FinancialAid::none())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn costs() -> CostInputs {
        CostInputs {
            tuition: 40_000.0,
            fees: 0.0,
            room_board: 15_000.0,
            books: 1_200.0,
            other_expenses: 2_000.0,
            program_length: 4.0,
            ..Default::default()
        }
    }

    #[test]
    fn test_totals_without_aid() {
        let breakdown = CostBreakdown::gross(&costs());
        assert_eq!(breakdown.annual_cost, 58_200.0);
        assert_eq!(breakdown.total_cost, 232_800.0);
        assert_eq!(breakdown.total_aid, 0.0);
        assert_eq!(breakdown.net_cost, 232_800.0);
    }

    #[test]
    fn test_aid_nets_against_cost() {
        let aid = FinancialAid {
            grants: 5_000.0,
            scholarships: 3_000.0,
            work_study: 2_000.0,
            ..Default::default()
        };
        let breakdown = CostBreakdown::aggregate(&costs(), &aid);
        assert_eq!(breakdown.total_aid, 40_000.0);
        assert_eq!(breakdown.net_cost, 192_800.0);
        // Aid leaves the annual figure untouched
        assert_eq!(breakdown.annual_cost, 58_200.0);
    }

    #[test]
    fn test_loans_do_not_reduce_net_cost() {
        let aid = FinancialAid {
            loans: 30_000.0,
            interest_rate: 6.5,
            ..Default::default()
        };
        let breakdown = CostBreakdown::aggregate(&costs(), &aid);
        assert_eq!(breakdown.total_aid, 0.0);
        assert_eq!(breakdown.net_cost, 232_800.0);
    }

    #[test]
    fn test_aid_exceeding_cost_floors_at_zero() {
        let aid = FinancialAid {
            grants: 100_000.0,
            ..Default::default()
        };
        let breakdown = CostBreakdown::aggregate(&costs(), &aid);
        assert_eq!(breakdown.net_cost, 0.0);
    }

    #[test]
    fn test_fractional_program_length_scales_totals() {
        let mut c = costs();
        c.program_length = 2.5;
        let breakdown = CostBreakdown::gross(&c);
        assert_eq!(breakdown.total_cost, 145_500.0);
    }

    #[test]
    fn test_bad_values_treated_as_zero() {
        let c = CostInputs {
            tuition: f64::NAN,
            fees: -500.0,
            room_board: 10_000.0,
            books: f64::INFINITY,
            other_expenses: 0.0,
            program_length: 2.0,
            ..Default::default()
        };
        let aid = FinancialAid {
            grants: -1_000.0,
            scholarships: f64::NAN,
            ..Default::default()
        };
        let breakdown = CostBreakdown::aggregate(&c, &aid);
        assert_eq!(breakdown.annual_cost, 10_000.0);
        assert_eq!(breakdown.total_aid, 0.0);
        assert_eq!(breakdown.net_cost, 20_000.0);

        let negative_length = CostInputs { program_length: -3.0, ..c };
        assert_eq!(CostBreakdown::gross(&negative_length).total_cost, 0.0);
    }
}
