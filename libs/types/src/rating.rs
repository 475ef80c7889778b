//! Low/Medium/High ratings
//!
//! Output alphabet of the Likelihood, Impact and Risk stages.

use crate::codes::{stage_code, Stage};
use serde::{Deserialize, Deserializer};

stage_code! {
    /// Qualitative rating, ordered `Low < Medium < High`
    ///
    /// Shared by Likelihood, Impact and Risk. `STAGE` is `Risk`, so plain
    /// `from_code` and serde report `risk`; fields holding a likelihood or
    /// impact deserialize through [`likelihood_from_code`] and
    /// [`impact_from_code`] instead.
    pub enum Rating for crate::codes::Stage::Risk {
        Low = 'L',
        Medium = 'M',
        High = 'H',
    }
}

impl Rating {
    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            Rating::Low => "Low",
            Rating::Medium => "Medium",
            Rating::High => "High",
        }
    }
}

fn rating_in<'de, D>(stage: Stage, deserializer: D) -> Result<Rating, D::Error>
where
    D: Deserializer<'de>,
{
    let code = char::deserialize(deserializer)?;
    Rating::from_code_in(stage, code).map_err(serde::de::Error::custom)
}

/// `deserialize_with` target for likelihood fields
pub fn likelihood_from_code<'de, D>(deserializer: D) -> Result<Rating, D::Error>
where
    D: Deserializer<'de>,
{
    rating_in(Stage::Likelihood, deserializer)
}

/// `deserialize_with` target for impact fields
pub fn impact_from_code<'de, D>(deserializer: D) -> Result<Rating, D::Error>
where
    D: Deserializer<'de>,
{
    rating_in(Stage::Impact, deserializer)
}
