//! Simulation traces: the crate's input data model.
//!
//! A trace is the recorded output of an external simulator, an ordered
//! sequence of kinematic samples plus the discrete events that must
//! remain visible after resampling. Types here carry no behavior beyond
//! ordering guarantees and construction helpers.

mod event;
mod sample;
mod state;

pub use event::TraceEvent;
pub use sample::{Sample, Trace};
pub use state::{BodyState, Energy};
