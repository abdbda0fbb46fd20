//! Core projection engine for annual education ROI projections

use crate::inputs::{CostInputs, EarningsInputs, FinancialAid, ScenarioInputs};
use super::aggregator::CostBreakdown;
use super::result::RoiCalculation;
use super::state::{Phase, SimulationState};
use super::trajectory::{Trajectory, TrajectoryPoint};

/// Environment variable selecting the payback policy
pub const PAYBACK_POLICY_ENV: &str = "ROI_PAYBACK_POLICY";

/// How the payback period is reported
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaybackPolicy {
    /// Linear interpolation between the last year behind and the break-even year
    #[default]
    Interpolated,
    /// The break-even year index itself
    WholeYear,
}

impl std::str::FromStr for PaybackPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "interpolated" => Ok(PaybackPolicy::Interpolated),
            "whole-year" | "whole_year" | "wholeyear" => Ok(PaybackPolicy::WholeYear),
            other => Err(format!("unknown payback policy: {}", other)),
        }
    }
}

/// Configuration for a projection run
#[derive(Debug, Clone, Default)]
pub struct ProjectionConfig {
    /// Payback reporting policy, shared by the scalar result and the trajectory
    pub payback_policy: PaybackPolicy,
}

impl ProjectionConfig {
    /// Read overrides from the environment, falling back to defaults
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(raw) = std::env::var(PAYBACK_POLICY_ENV) {
            match raw.parse() {
                Ok(policy) => config.payback_policy = policy,
                Err(e) => log::warn!("{}: {}; using {:?}", PAYBACK_POLICY_ENV, e, config.payback_policy),
            }
        }
        config
    }
}

/// Lifetime earnings over `years`, starting at `salary` and compounding at `growth_rate` percent
pub fn lifetime_earnings(salary: f64, growth_rate: f64, years: u32) -> f64 {
    let g = growth_rate / 100.0;
    if g.abs() < 1e-12 {
        return salary * years as f64;
    }
    let exponent = i32::try_from(years).unwrap_or(i32::MAX);
    salary * ((1.0 + g).powi(exponent) - 1.0) / g
}

/// Main projection engine
#[derive(Debug, Clone, Default)]
pub struct ProjectionEngine {
    config: ProjectionConfig,
}

impl ProjectionEngine {
    /// Create a new projection engine with the given config
    pub fn new(config: ProjectionConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ProjectionConfig {
        &self.config
    }

    /// Compute summary ROI metrics
    pub fn project(&self, costs: &CostInputs, earnings: &EarningsInputs, aid: &FinancialAid) -> RoiCalculation {
        let breakdown = CostBreakdown::aggregate(costs, aid);
        let net_cost = breakdown.net_cost;

        let years = earnings.career_length;
        let growth = earnings.salary_growth_rate;
        let lifetime_with = lifetime_earnings(earnings.projected_salary, growth, years);
        let lifetime_without = lifetime_earnings(earnings.baseline_salary, growth, years);
        let expected_earnings = lifetime_with - lifetime_without;
        let net_roi = expected_earnings - net_cost;

        let roi_percentage = if net_cost > 0.0 {
            net_roi / net_cost * 100.0
        } else if net_roi > 0.0 {
            f64::INFINITY
        } else {
            0.0
        };

        let payback_period = self.payback_period(earnings, &breakdown);

        log::debug!(
            "projected: net_cost={:.2} expected_earnings={:.2} net_roi={:.2} payback={}",
            net_cost, expected_earnings, net_roi, payback_period
        );

        RoiCalculation {
            total_cost: net_cost,
            expected_earnings,
            net_roi,
            roi_percentage,
            payback_period,
            lifetime_earnings_with_degree: lifetime_with,
            lifetime_earnings_without_degree: lifetime_without,
            costs: breakdown,
        }
    }

    /// Compute summary ROI metrics for a bundled input set
    pub fn project_scenario(&self, inputs: &ScenarioInputs) -> RoiCalculation {
        self.project(&inputs.costs, &inputs.earnings, &inputs.aid)
    }

    /// Annual trajectory charging the gross annual cost each program year
    ///
    /// Aid never enters the walk, so this agrees with `project` on the
    /// payback period whatever aid `project` was given.
    pub fn simulate_trajectory(&self, costs: &CostInputs, earnings: &EarningsInputs) -> Trajectory {
        self.trajectory_for(earnings, &CostBreakdown::gross(costs))
    }

    /// Step until break-even or the end of the career horizon
    ///
    /// Charges the gross annual cost; aid only nets into the cost totals.
    fn payback_period(&self, earnings: &EarningsInputs, breakdown: &CostBreakdown) -> f64 {
        let mut state = SimulationState::new(
            earnings,
            breakdown.program_length,
            breakdown.annual_cost,
        );

        let mut prior_gap = None;
        for _ in 0..=earnings.career_length {
            let (year, phase) = state.step();
            if state.broke_even(phase) {
                return self.report_payback(year, prior_gap, state.gap());
            }
            prior_gap = Some(state.gap());
        }

        f64::INFINITY
    }

    fn trajectory_for(&self, earnings: &EarningsInputs, breakdown: &CostBreakdown) -> Trajectory {
        let mut trajectory = Trajectory::new();
        let mut state = SimulationState::new(
            earnings,
            breakdown.program_length,
            breakdown.annual_cost,
        );

        let mut prior_gap = None;
        let mut found = false;
        for _ in 0..=earnings.career_length {
            let (year, phase) = state.step();

            let is_break_even = !found && state.broke_even(phase);
            if is_break_even {
                found = true;
                trajectory.payback_period = self.report_payback(year, prior_gap, state.gap());
            }

            trajectory.add_point(TrajectoryPoint {
                year,
                cumulative_with_degree: state.cum_with_degree.round(),
                cumulative_without_degree: state.cum_without_degree.round(),
                is_break_even,
                in_program: phase == Phase::Investment,
            });

            prior_gap = Some(state.gap());
        }

        trajectory
    }

    /// Payback for a break-even at `year` under the configured policy
    ///
    /// Interpolated values fall in `(year - 1, year]`, so rounding up always
    /// recovers the trajectory's break-even year.
    fn report_payback(&self, year: u32, prior_gap: Option<f64>, gap: f64) -> f64 {
        let year_f = year as f64;
        match (self.config.payback_policy, prior_gap) {
            (PaybackPolicy::WholeYear, _) | (_, None) => year_f,
            (PaybackPolicy::Interpolated, Some(prior)) => {
                let closed = prior - gap;
                if prior <= 0.0 || closed <= 0.0 {
                    return year_f;
                }
                let fraction = (prior / closed).min(1.0);
                (year_f - 1.0) + fraction
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    fn reference_costs() -> CostInputs {
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

    fn reference_earnings() -> EarningsInputs {
        EarningsInputs {
            baseline_salary: 35_000.0,
            projected_salary: 105_000.0,
            career_length: 30,
            salary_growth_rate: 3.0,
        }
    }

    #[test]
    fn test_reference_scenario() {
        let engine = ProjectionEngine::default();
        let result = engine.project(&reference_costs(), &reference_earnings(), &FinancialAid::none());

        assert_eq!(result.total_cost, 232_800.0);
        assert_relative_eq!(result.expected_earnings, 3_330_279.0994, epsilon = 0.01);
        assert_relative_eq!(result.net_roi, 3_097_479.0994, epsilon = 0.01);
        assert!(result.net_roi > 1_000_000.0);
        assert_relative_eq!(result.roi_percentage, result.net_roi / 232_800.0 * 100.0);

        // Forgone baseline wages during study push break-even into year 9
        assert!(result.payback_period > 8.0 && result.payback_period < 9.0);
        assert_abs_diff_eq!(result.payback_period, 8.406, epsilon = 0.001);
    }

    #[test]
    fn test_reference_trajectory() {
        let engine = ProjectionEngine::default();
        let trajectory = engine.simulate_trajectory(&reference_costs(), &reference_earnings());

        assert_eq!(trajectory.len(), 31);
        assert_eq!(trajectory.points[0].cumulative_with_degree, -58_200.0);
        assert_eq!(trajectory.points[0].cumulative_without_degree, 35_000.0);
        assert_eq!(trajectory.points[3].cumulative_with_degree, -232_800.0);
        assert!(trajectory.points[3].in_program);
        assert!(!trajectory.points[4].in_program);
        assert_eq!(trajectory.points[4].cumulative_with_degree, -127_800.0);
        assert_eq!(trajectory.break_even_year(), Some(9));
        assert_eq!(trajectory.points.iter().filter(|p| p.is_break_even).count(), 1);
        assert!(trajectory.final_advantage() > 2_000_000.0);
    }

    #[test]
    fn test_scalar_and_trajectory_agree() {
        let engine = ProjectionEngine::default();
        let result = engine.project(&reference_costs(), &reference_earnings(), &FinancialAid::none());
        let trajectory = engine.simulate_trajectory(&reference_costs(), &reference_earnings());

        assert_eq!(result.payback_period, trajectory.payback_period);
        assert_eq!(result.payback_period.ceil() as u32, trajectory.break_even_year().unwrap());
    }

    #[test]
    fn test_whole_year_policy() {
        let engine = ProjectionEngine::new(ProjectionConfig {
            payback_policy: PaybackPolicy::WholeYear,
        });
        let result = engine.project(&reference_costs(), &reference_earnings(), &FinancialAid::none());
        assert_eq!(result.payback_period, 9.0);
    }

    #[test]
    fn test_aid_does_not_move_payback() {
        let engine = ProjectionEngine::default();
        let aid = FinancialAid {
            grants: 40_000.0,
            scholarships: 10_000.0,
            loans: 15_000.0,
            ..Default::default()
        };
        let result = engine.project(&reference_costs(), &reference_earnings(), &aid);
        let trajectory = engine.simulate_trajectory(&reference_costs(), &reference_earnings());

        // Aid nets into the cost totals only
        assert_eq!(result.total_cost, 32_800.0);
        assert!(result.net_roi > engine.project(&reference_costs(), &reference_earnings(), &FinancialAid::none()).net_roi);

        assert_eq!(result.payback_period, trajectory.payback_period);
        assert_eq!(result.payback_period.ceil() as u32, trajectory.break_even_year().unwrap());
        assert_eq!(trajectory.break_even_year(), Some(9));
        assert_eq!(trajectory.points[0].cumulative_with_degree, -58_200.0);
    }

    #[test]
    fn test_lifetime_earnings_huge_horizon_stays_positive() {
        // Exponent saturates instead of wrapping negative
        let total = lifetime_earnings(1.0, 1.0, u32::MAX);
        assert!(total > 0.0);
        assert!(lifetime_earnings(1.0, -1.0, u32::MAX) > 0.0);
    }

    #[test]
    fn test_zero_program_length() {
        let engine = ProjectionEngine::default();
        let costs = CostInputs {
            tuition: 10_000.0,
            program_length: 0.0,
            ..Default::default()
        };

        let result = engine.project(&costs, &reference_earnings(), &FinancialAid::none());
        assert_eq!(result.total_cost, 0.0);
        assert_eq!(result.payback_period, 0.0);
        assert_eq!(result.roi_percentage, f64::INFINITY);

        let mut lower = reference_earnings();
        lower.projected_salary = 30_000.0;
        let result = engine.project(&costs, &lower, &FinancialAid::none());
        assert_eq!(result.payback_period, f64::INFINITY);
        assert!(result.net_roi < 0.0);
        assert_eq!(result.roi_percentage, 0.0);

        let mut equal = reference_earnings();
        equal.projected_salary = equal.baseline_salary;
        let result = engine.project(&costs, &equal, &FinancialAid::none());
        assert_eq!(result.payback_period, 0.0);
    }

    #[test]
    fn test_zero_growth_is_simple_multiplication() {
        assert_eq!(lifetime_earnings(50_000.0, 0.0, 30), 1_500_000.0);
        assert_eq!(lifetime_earnings(50_000.0, 0.0, 0), 0.0);
        assert_relative_eq!(lifetime_earnings(100.0, 10.0, 3), 331.0, epsilon = 1e-9);

        let engine = ProjectionEngine::default();
        let mut earnings = reference_earnings();
        earnings.salary_growth_rate = 0.0;
        let result = engine.project(&reference_costs(), &earnings, &FinancialAid::none());
        assert_eq!(result.lifetime_earnings_with_degree, 105_000.0 * 30.0);
        assert_eq!(result.lifetime_earnings_without_degree, 35_000.0 * 30.0);
        assert!(result.payback_period.is_finite());
    }

    #[test]
    fn test_equal_salaries_never_pay_back() {
        let engine = ProjectionEngine::default();
        let mut earnings = reference_earnings();
        earnings.projected_salary = earnings.baseline_salary;

        let result = engine.project(&reference_costs(), &earnings, &FinancialAid::none());
        assert_eq!(result.expected_earnings, 0.0);
        assert_eq!(result.net_roi, -232_800.0);
        assert_eq!(result.roi_percentage, -100.0);
        assert_eq!(result.payback_period, f64::INFINITY);

        let trajectory = engine.simulate_trajectory(&reference_costs(), &earnings);
        assert_eq!(trajectory.break_even_year(), None);
        assert!(trajectory.payback_period.is_infinite());
    }

    #[test]
    fn test_full_aid_coverage() {
        let engine = ProjectionEngine::default();
        let aid = FinancialAid {
            grants: 60_000.0,
            ..Default::default()
        };
        let result = engine.project(&reference_costs(), &reference_earnings(), &aid);
        assert_eq!(result.total_cost, 0.0);
        assert_eq!(result.roi_percentage, f64::INFINITY);
        assert!(!result.roi_percentage.is_nan());
    }

    #[test]
    fn test_zero_everything_has_no_nan() {
        let engine = ProjectionEngine::default();
        let result = engine.project(
            &CostInputs::default(),
            &EarningsInputs::default(),
            &FinancialAid::none(),
        );
        assert_eq!(result.roi_percentage, 0.0);
        assert_eq!(result.net_roi, 0.0);
        assert_eq!(result.payback_period, 0.0);
    }

    #[test]
    fn test_empty_career_horizon() {
        let engine = ProjectionEngine::default();
        let mut earnings = reference_earnings();
        earnings.career_length = 0;

        let trajectory = engine.simulate_trajectory(&reference_costs(), &earnings);
        assert_eq!(trajectory.len(), 1);
        assert_eq!(trajectory.break_even_year(), None);

        let result = engine.project(&reference_costs(), &earnings, &FinancialAid::none());
        assert_eq!(result.expected_earnings, 0.0);
        assert_eq!(result.payback_period, f64::INFINITY);
    }

    #[test]
    fn test_fractional_program_length() {
        let engine = ProjectionEngine::default();
        let mut costs = reference_costs();
        costs.program_length = 0.5;

        let result = engine.project(&costs, &reference_earnings(), &FinancialAid::none());
        assert_eq!(result.total_cost, 29_100.0);

        let trajectory = engine.simulate_trajectory(&costs, &reference_earnings());
        // Half a year still occupies the whole first year
        assert!(trajectory.points[0].in_program);
        assert_eq!(trajectory.points[0].cumulative_with_degree, -58_200.0);
        assert!(!trajectory.points[1].in_program);
    }

    #[test]
    fn test_idempotent() {
        let engine = ProjectionEngine::default();
        let a = engine.project(&reference_costs(), &reference_earnings(), &FinancialAid::none());
        let b = engine.project(&reference_costs(), &reference_earnings(), &FinancialAid::none());
        assert_eq!(a, b);
        assert_eq!(a.net_roi.to_bits(), b.net_roi.to_bits());
        assert_eq!(a.payback_period.to_bits(), b.payback_period.to_bits());
    }

    #[test]
    fn test_payback_policy_parse() {
        assert_eq!("Interpolated".parse::<PaybackPolicy>(), Ok(PaybackPolicy::Interpolated));
        assert_eq!("whole-year".parse::<PaybackPolicy>(), Ok(PaybackPolicy::WholeYear));
        assert!("monthly".parse::<PaybackPolicy>().is_err());
    }
}
