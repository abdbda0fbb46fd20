//! Cost, financial aid, and earnings records supplied by the caller

use serde::{Deserialize, Serialize};

/// Residency tag for the tuition figure the caller populated
///
/// Informational only: the engine never branches on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Residency {
    #[default]
    #[serde(rename = "in-state")]
    InState,
    #[serde(rename = "out-of-state")]
    OutOfState,
}

impl Residency {
    /// Get the string representation used in catalogs and saved scenarios
    pub fn as_str(&self) -> &'static str {
        match self {
            Residency::InState => "in-state",
            Residency::OutOfState => "out-of-state",
        }
    }
}

impl std::str::FromStr for Residency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "in-state" | "instate" | "in" => Ok(Residency::InState),
            "out-of-state" | "outofstate" | "out" => Ok(Residency::OutOfState),
            other => Err(format!("unknown residency: {}", other)),
        }
    }
}

/// Annual program costs
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CostInputs {
    /// Annual tuition (whichever residency figure applies)
    pub tuition: f64,

    /// Annual mandatory fees
    pub fees: f64,

    /// Annual room and board
    pub room_board: f64,

    /// Annual books and supplies
    pub books: f64,

    /// Any other annual expenses
    pub other_expenses: f64,

    /// Program length in years (fractional allowed)
    pub program_length: f64,

    /// Which tuition figure was chosen
    #[serde(default)]
    pub residency: Residency,
}

/// Annual financial aid
///
/// Loans are carried for display but never reduce net cost: they are repaid.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FinancialAid {
    pub grants: f64,
    pub scholarships: f64,
    pub work_study: f64,
    pub loans: f64,

    /// Loan interest rate in percent (informational)
    #[serde(default)]
    pub interest_rate: f64,
}

impl FinancialAid {
    /// No aid at all
    pub fn none() -> Self {
        Self::default()
    }
}

/// Salary assumptions with and without the credential
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EarningsInputs {
    /// Annual salary achievable without the credential
    pub baseline_salary: f64,

    /// Annual starting salary with the credential
    pub projected_salary: f64,

    /// Years simulated
    pub career_length: u32,

    /// Annual salary growth in percent, compounding
    pub salary_growth_rate: f64,
}

/// Complete input set for one projection
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScenarioInputs {
    pub costs: CostInputs,
    #[serde(default)]
    pub aid: FinancialAid,
    pub earnings: EarningsInputs,
}

impl ScenarioInputs {
    pub fn new(costs: CostInputs, aid: FinancialAid, earnings: EarningsInputs) -> Self {
        Self { costs, aid, earnings }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_residency_parse() {
        assert_eq!("in-state".parse::<Residency>().unwrap(), Residency::InState);
        assert_eq!("Out-Of-State".parse::<Residency>().unwrap(), Residency::OutOfState);
        assert!("abroad".parse::<Residency>().is_err());
    }

    #[test]
    fn test_scenario_json_defaults_aid() {
        let json = r#"{
            "costs": {"tuition": 10000, "fees": 500, "room_board": 0, "books": 0,
                      "other_expenses": 0, "program_length": 2, "residency": "out-of-state"},
            "earnings": {"baseline_salary": 30000, "projected_salary": 50000,
                         "career_length": 25, "salary_growth_rate": 2.5}
        }"#;
        let inputs: ScenarioInputs = serde_json::from_str(json).unwrap();
        assert_eq!(inputs.costs.residency, Residency::OutOfState);
        assert_eq!(inputs.aid, FinancialAid::none());
        assert_eq!(inputs.earnings.career_length, 25);
    }
}
