//! Decision request intake.
//!
//! This module reads textual decision requests, individually or in batches
//! from YAML/JSON files, and evaluates them through the engine.

mod loader;
mod request;

pub use loader::RequestLoader;
pub use request::{DecisionRequest, DecisionRequestFile};
