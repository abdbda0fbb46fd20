//! Saved scenario snapshot: all inputs plus the derived totals

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::inputs::ScenarioInputs;
use crate::projection::{ProjectionEngine, RoiCalculation};

/// A named scenario as persisted by a `ScenarioStore`
///
/// Results are stored for listing and comparison only; `refresh` recomputes
/// them from the inputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioRecord {
    /// Opaque identifier
    pub id: Uuid,

    pub name: String,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,

    pub inputs: ScenarioInputs,

    pub result: RoiCalculation,
}

impl ScenarioRecord {
    /// Project the inputs and wrap them in a new record
    pub fn new(name: impl Into<String>, inputs: ScenarioInputs, engine: &ProjectionEngine) -> Self {
        let now = Utc::now();
        let result = engine.project_scenario(&inputs);
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            created_at: now,
            updated_at: now,
            inputs,
            result,
        }
    }

    /// Replace the inputs and recompute the stored result
    pub fn update_inputs(&mut self, inputs: ScenarioInputs, engine: &ProjectionEngine) {
        self.inputs = inputs;
        self.refresh(engine);
    }

    /// Recompute the stored result from the stored inputs
    pub fn refresh(&mut self, engine: &ProjectionEngine) {
        self.result = engine.project_scenario(&self.inputs);
        self.updated_at = Utc::now();
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}
