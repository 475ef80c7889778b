//! Risk Engine Service
//!
//! Computes a qualitative Low/Medium/High risk rating for a threat scenario
//! from ten yes/no answers, using the fixed binary risk assessment decision
//! tables.
//!
//! - `tables`: the nine stage tables, typed and exhaustive
//! - `lookup`: letter-level access to a single table, for fixtures and audits
//! - `pipeline`: `evaluate`, the one entry point collaborators call
//! - `engine`: record assembly and auditing for boundary layers

pub mod tables;
pub mod lookup;
pub mod pipeline;
pub mod engine;

pub use engine::{AssessmentEngine, AssessmentRequest, EngineConfig};
pub use pipeline::{evaluate, evaluate_submission};
