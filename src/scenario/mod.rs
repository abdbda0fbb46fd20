//! Batch scenario runs and saved scenario records

mod runner;
mod record;
pub mod store;

pub use runner::{ScenarioRunner, rank_by_net_roi};
pub use record::ScenarioRecord;
pub use store::{ScenarioStore, MemoryScenarioStore, JsonDirStore, StoreError};
