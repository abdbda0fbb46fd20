//! Running state for the annual with/without-degree simulation

use crate::inputs::EarningsInputs;

/// Which phase a simulated year fell in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Paying program costs; only the counterfactual path earns
    Investment,
    /// Both paths earn
    Earning,
}

/// State of both career paths at the end of a simulated year
#[derive(Debug, Clone)]
pub struct SimulationState {
    /// Index of the next year to simulate (0-indexed)
    pub year: u32,

    /// Cumulative net position with the credential
    pub cum_with_degree: f64,

    /// Cumulative earnings without the credential
    pub cum_without_degree: f64,

    /// Salary the credentialed path earns in its next earning year
    pub salary_with: f64,

    /// Salary the counterfactual path earns in its next year
    pub salary_without: f64,

    /// Program length in years; years below it are investment years
    program_length: f64,

    /// Per-year cost charged during the investment phase
    annual_outlay: f64,

    /// 1 + growth rate
    growth_factor: f64,
}

impl SimulationState {
    /// Initialize state before year 0
    pub fn new(earnings: &EarningsInputs, program_length: f64, annual_outlay: f64) -> Self {
        Self {
            year: 0,
            cum_with_degree: 0.0,
            cum_without_degree: 0.0,
            salary_with: earnings.projected_salary,
            salary_without: earnings.baseline_salary,
            program_length,
            annual_outlay,
            growth_factor: 1.0 + earnings.salary_growth_rate / 100.0,
        }
    }

    /// Simulate one year and advance to the next
    ///
    /// Returns the year just simulated and the phase it fell in. A fractional
    /// program length still occupies the whole final year.
    pub fn step(&mut self) -> (u32, Phase) {
        let year = self.year;
        let phase = if (year as f64) < self.program_length {
            Phase::Investment
        } else {
            Phase::Earning
        };

        match phase {
            Phase::Investment => {
                self.cum_with_degree -= self.annual_outlay;
            }
            Phase::Earning => {
                self.cum_with_degree += self.salary_with;
                self.salary_with *= self.growth_factor;
            }
        }

        // The counterfactual earner works through both phases
        self.cum_without_degree += self.salary_without;
        self.salary_without *= self.growth_factor;

        self.year += 1;

        log::trace!(
            "year {} {:?}: with={:.2} without={:.2}",
            year, phase, self.cum_with_degree, self.cum_without_degree
        );

        (year, phase)
    }

    /// How far the credentialed path trails (positive) or leads (negative)
    pub fn gap(&self) -> f64 {
        self.cum_without_degree - self.cum_with_degree
    }

    /// True once the credentialed path has caught up after the program
    pub fn broke_even(&self, phase: Phase) -> bool {
        phase == Phase::Earning && self.cum_with_degree >= self.cum_without_degree
    }
}
