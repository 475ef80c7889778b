//! Types library for the binary risk assessment
//!
//! This library provides all core type definitions shared by the risk engine
//! and the boundary services, so every layer agrees on the ten questions,
//! the stage alphabets and the shape of a persisted assessment.
//!
//! # Version
//! v1.0.0 - methodology "2017-05-20"
//!
//! # Modules
//! - `answers`: The ten questions, complete answer sets and raw submissions
//! - `codes`: Stage identifiers and the per-stage letter alphabets
//! - `rating`: Low/Medium/High ratings
//! - `evaluation`: Result of one pipeline run, with intermediate codes
//! - `ids`: Assessment identifiers
//! - `record`: Persisted assessment records
//! - `errors`: Error taxonomy

// Public modules
pub mod answers;
pub mod codes;
pub mod rating;
pub mod evaluation;
pub mod ids;
pub mod record;
pub mod errors;

// Library version constant
pub const LIB_VERSION: &str = "1.0.0";

/// Methodology revision stamped on every record.
///
/// Bump this only together with a new reference fixture; old records keep
/// the revision they were computed under.
pub const METHODOLOGY_VERSION: &str = "2017-05-20";

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::answers::*;
    pub use crate::codes::*;
    pub use crate::rating::*;
    pub use crate::evaluation::*;
    pub use crate::ids::*;
    pub use crate::record::*;
    pub use crate::errors::*;
}
