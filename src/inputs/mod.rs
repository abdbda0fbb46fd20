//! Scenario input records, boundary validation, and program catalog loading

mod data;
mod validation;
pub mod catalog;

pub use data::{CostInputs, FinancialAid, EarningsInputs, Residency, ScenarioInputs};
pub use validation::InputError;
pub use catalog::{ProgramRecord, CatalogError, load_catalog, load_catalog_from_reader};
