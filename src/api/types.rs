use serde::{Deserialize, Serialize};

/// Body of `POST /api/simulate`; every field is optional
pub type SimulationRequest = crate::config::SimulationConfig;

/// Returned verbatim from the engine
pub type SimulationResponse = crate::engine::SimulationResult;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}
