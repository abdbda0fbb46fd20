//! Earnings assumptions used to derive salary inputs

mod salary;

pub use salary::{SalaryAssumptions, CREDENTIALED_BASELINE, NON_CREDENTIALED_BASELINE};
