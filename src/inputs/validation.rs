//! Boundary validation applied before inputs reach the engine
//!
//! The engine itself assumes sanitized input; callers that accept user data
//! run `ScenarioInputs::validate` first.

use thiserror::Error;

use super::ScenarioInputs;

/// Longest program the boundary accepts, in years
pub const MAX_PROGRAM_LENGTH: f64 = 10.0;

/// Longest career horizon the boundary accepts, in years
pub const MAX_CAREER_LENGTH: u32 = 60;

/// Growth rates outside this band (percent) are rejected
pub const MAX_GROWTH_RATE_ABS: f64 = 50.0;

#[derive(Debug, Error, PartialEq)]
pub enum InputError {
    #[error("{field} must be a finite number, got {value}")]
    NotFinite { field: &'static str, value: f64 },

    #[error("{field} must not be negative, got {value}")]
    Negative { field: &'static str, value: f64 },

    #[error("program length must be between 0 and {max} years, got {0}", max = MAX_PROGRAM_LENGTH)]
    ProgramLength(f64),

    #[error("career length must be at most {max} years, got {0}", max = MAX_CAREER_LENGTH)]
    CareerLength(u32),

    #[error("salary growth rate must be within ±{max}%, got {0}", max = MAX_GROWTH_RATE_ABS)]
    GrowthRate(f64),
}

fn non_negative(field: &'static str, value: f64) -> Result<(), InputError> {
    if !value.is_finite() {
        return Err(InputError::NotFinite { field, value });
    }
    if value < 0.0 {
        return Err(InputError::Negative { field, value });
    }
    Ok(())
}

impl ScenarioInputs {
    /// Reject negative, non-finite, or out-of-range inputs
    pub fn validate(&self) -> Result<(), InputError> {
        let c = &self.costs;
        non_negative("tuition", c.tuition)?;
        non_negative("fees", c.fees)?;
        non_negative("room_board", c.room_board)?;
        non_negative("books", c.books)?;
        non_negative("other_expenses", c.other_expenses)?;
        non_negative("program_length", c.program_length)?;
        if c.program_length > MAX_PROGRAM_LENGTH {
            return Err(InputError::ProgramLength(c.program_length));
        }

        let a = &self.aid;
        non_negative("grants", a.grants)?;
        non_negative("scholarships", a.scholarships)?;
        non_negative("work_study", a.work_study)?;
        non_negative("loans", a.loans)?;
        non_negative("interest_rate", a.interest_rate)?;

        let e = &self.earnings;
        non_negative("baseline_salary", e.baseline_salary)?;
        non_negative("projected_salary", e.projected_salary)?;
        if e.career_length > MAX_CAREER_LENGTH {
            return Err(InputError::CareerLength(e.career_length));
        }
        if !e.salary_growth_rate.is_finite() {
            return Err(InputError::NotFinite {
                field: "salary_growth_rate",
                value: e.salary_growth_rate,
            });
        }
        if e.salary_growth_rate.abs() > MAX_GROWTH_RATE_ABS {
            return Err(InputError::GrowthRate(e.salary_growth_rate));
        }

        Ok(())
    }
}
