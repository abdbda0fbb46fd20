//! Education ROI - projection engine comparing a credential against entering the workforce
//!
//! This library provides:
//! - Cost/aid aggregation into total and net program cost
//! - Annual with/without-credential earnings simulation and payback analysis
//! - Lifetime-earnings ROI metrics
//! - Program catalog loading and credential-based salary derivation
//! - Batch scenario runs and saved scenario records

pub mod inputs;
pub mod assumptions;
pub mod projection;
pub mod scenario;

// Re-export commonly used types
pub use inputs::{CostInputs, FinancialAid, EarningsInputs, Residency, ScenarioInputs};
pub use assumptions::SalaryAssumptions;
pub use projection::{ProjectionEngine, ProjectionConfig, PaybackPolicy, RoiCalculation, Trajectory, TrajectoryPoint, CostBreakdown};
pub use scenario::{ScenarioRunner, ScenarioRecord, ScenarioStore};
