use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::event::TraceEvent;
use super::state::{BodyState, Energy};

/// One timestamped snapshot of every body's kinematic state.
///
/// Bodies are keyed by their simulator-assigned id. A `BTreeMap` keeps
/// iteration order deterministic, so downstream draw order never
/// depends on insertion history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub t: f64,
    #[serde(default)]
    pub bodies: BTreeMap<String, BodyState>,
    #[serde(default)]
    pub energy: Option<Energy>,
}

impl Sample {
    pub fn new(t: f64) -> Self {
        Self {
            t,
            bodies: BTreeMap::new(),
            energy: None,
        }
    }

    pub fn with_body(mut self, id: impl Into<String>, state: BodyState) -> Self {
        self.bodies.insert(id.into(), state);
        self
    }

    pub fn with_energy(mut self, energy: Energy) -> Self {
        self.energy = Some(energy);
        self
    }
}

/// The full recorded output of a simulation run: ordered kinematic
/// samples plus the discrete events that occurred along the way.
///
/// Samples and events are sorted by time on construction (and on
/// deserialization), so consumers can bracket-search without checking.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "TraceDoc")]
pub struct Trace {
    samples: Vec<Sample>,
    events: Vec<TraceEvent>,
}

impl Trace {
    pub fn new(mut samples: Vec<Sample>, mut events: Vec<TraceEvent>) -> Self {
        samples.sort_by(|a, b| a.t.total_cmp(&b.t));
        events.sort_by(|a, b| a.t.total_cmp(&b.t));
        Self { samples, events }
    }

    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    pub fn events(&self) -> &[TraceEvent] {
        &self.events
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn start_time(&self) -> Option<f64> {
        self.samples.first().map(|s| s.t)
    }

    pub fn end_time(&self) -> Option<f64> {
        self.samples.last().map(|s| s.t)
    }

    /// Simulated time covered by the samples; zero for fewer than two.
    pub fn duration(&self) -> f64 {
        match (self.start_time(), self.end_time()) {
            (Some(start), Some(end)) => end - start,
            _ => 0.0,
        }
    }
}

#[derive(Deserialize)]
struct TraceDoc {
    #[serde(default)]
    samples: Vec<Sample>,
    #[serde(default)]
    events: Vec<TraceEvent>,
}

impl From<TraceDoc> for Trace {
    fn from(doc: TraceDoc) -> Self {
        Trace::new(doc.samples, doc.events)
    }
}
