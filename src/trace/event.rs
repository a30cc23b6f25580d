use serde::{Deserialize, Serialize};

/// A discrete, named instant in simulated time (an impact, a phase
/// change) that must stay visible after resampling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraceEvent {
    pub id: String,
    pub t: f64,
}

impl TraceEvent {
    pub fn new(id: impl Into<String>, t: f64) -> Self {
        Self { id: id.into(), t }
    }
}
