//! Cost aggregation and annual ROI projection

mod aggregator;
mod state;
mod engine;
mod result;
mod trajectory;

pub use aggregator::CostBreakdown;
pub use state::{SimulationState, Phase};
pub use engine::{ProjectionEngine, ProjectionConfig, PaybackPolicy, lifetime_earnings, PAYBACK_POLICY_ENV};
pub use result::RoiCalculation;
pub use trajectory::{Trajectory, TrajectoryPoint};
