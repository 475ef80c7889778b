//! Assessment questions and answers
//!
//! The assessment is driven by exactly ten yes/no questions. `AnswerSet` is
//! the complete, validated form consumed by the pipeline; `AnswerSubmission`
//! is what a boundary layer captures before validation.

use crate::errors::AssessmentError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the ten assessment questions, in canonical order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnswerField {
    SkillsRequired,
    ResourcesRequired,
    FailureRate,
    Coverage,
    VulnerabilityAccessible,
    Preconditions,
    AssetCost,
    AssetValue,
    Internal,
    External,
}

/// Direction in which a `true` answer moves the final risk rating
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Polarity {
    /// `true` never raises the risk rating
    Mitigating,
    /// `true` never lowers the risk rating
    Aggravating,
}

impl AnswerField {
    /// All ten fields in canonical order (bit order for `AnswerSet::from_bits`)
    pub const ALL: [AnswerField; 10] = [
        AnswerField::SkillsRequired,
        AnswerField::ResourcesRequired,
        AnswerField::FailureRate,
        AnswerField::Coverage,
        AnswerField::VulnerabilityAccessible,
        AnswerField::Preconditions,
        AnswerField::AssetCost,
        AnswerField::AssetValue,
        AnswerField::Internal,
        AnswerField::External,
    ];

    /// Field name as used on the wire
    pub fn name(&self) -> &'static str {
        match self {
            AnswerField::SkillsRequired => "skills_required",
            AnswerField::ResourcesRequired => "resources_required",
            AnswerField::FailureRate => "failure_rate",
            AnswerField::Coverage => "coverage",
            AnswerField::VulnerabilityAccessible => "vulnerability_accessible",
            AnswerField::Preconditions => "preconditions",
            AnswerField::AssetCost => "asset_cost",
            AnswerField::AssetValue => "asset_value",
            AnswerField::Internal => "internal",
            AnswerField::External => "external",
        }
    }

    /// Question text presented to the assessor
    pub fn question(&self) -> &'static str {
        match self {
            AnswerField::SkillsRequired => {
                "Are unique skills required to execute the attack successfully?"
            }
            AnswerField::ResourcesRequired => {
                "Are significant resources required to execute the attack successfully?"
            }
            AnswerField::FailureRate => {
                "Is it possible that defenses fail to protect against the attack?"
            }
            AnswerField::Coverage => "Do the defenses cover all access methods to the asset?",
            AnswerField::VulnerabilityAccessible => {
                "Is the vulnerability always present in the asset?"
            }
            AnswerField::Preconditions => {
                "Are there significant prerequisites to completing the attack successfully?"
            }
            AnswerField::AssetCost => {
                "Is there a significant cost to repair or replace this asset?"
            }
            AnswerField::AssetValue => "Does the asset have significant value to the company?",
            AnswerField::Internal => "Will there be consequences to an internal attack?",
            AnswerField::External => "Will there be consequences to an external attack?",
        }
    }

    /// Effect of answering `true` on the final risk, all else held fixed.
    ///
    /// Verified over all 1024 combinations by the engine's fixture tests.
    pub fn polarity(&self) -> Polarity {
        match self {
            AnswerField::SkillsRequired
            | AnswerField::ResourcesRequired
            | AnswerField::Coverage
            | AnswerField::VulnerabilityAccessible => Polarity::Mitigating,
            AnswerField::FailureRate
            | AnswerField::Preconditions
            | AnswerField::AssetCost
            | AnswerField::AssetValue
            | AnswerField::Internal
            | AnswerField::External => Polarity::Aggravating,
        }
    }

    /// Position in canonical order
    pub fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for AnswerField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Complete set of ten answers describing a threat scenario
///
/// Immutable once captured; the sole input to the evaluation pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AnswerSet {
    pub skills_required: bool,
    pub resources_required: bool,
    pub failure_rate: bool,
    pub coverage: bool,
    pub vulnerability_accessible: bool,
    pub preconditions: bool,
    pub asset_cost: bool,
    pub asset_value: bool,
    pub internal: bool,
    pub external: bool,
}

/// Number of distinct answer sets (2^10)
pub const ANSWER_SET_COUNT: u16 = 1 << 10;

impl AnswerSet {
    /// Every answer `false`
    pub const ALL_FALSE: AnswerSet = AnswerSet {
        skills_required: false,
        resources_required: false,
        failure_rate: false,
        coverage: false,
        vulnerability_accessible: false,
        preconditions: false,
        asset_cost: false,
        asset_value: false,
        internal: false,
        external: false,
    };

    /// Every answer `true`
    pub const ALL_TRUE: AnswerSet = AnswerSet {
        skills_required: true,
        resources_required: true,
        failure_rate: true,
        coverage: true,
        vulnerability_accessible: true,
        preconditions: true,
        asset_cost: true,
        asset_value: true,
        internal: true,
        external: true,
    };

    /// Read one answer
    pub fn get(&self, field: AnswerField) -> bool {
        match field {
            AnswerField::SkillsRequired => self.skills_required,
            AnswerField::ResourcesRequired => self.resources_required,
            AnswerField::FailureRate => self.failure_rate,
            AnswerField::Coverage => self.coverage,
            AnswerField::VulnerabilityAccessible => self.vulnerability_accessible,
            AnswerField::Preconditions => self.preconditions,
            AnswerField::AssetCost => self.asset_cost,
            AnswerField::AssetValue => self.asset_value,
            AnswerField::Internal => self.internal,
            AnswerField::External => self.external,
        }
    }

    /// Copy with one answer replaced
    pub fn with(mut self, field: AnswerField, value: bool) -> Self {
        let slot = match field {
            AnswerField::SkillsRequired => &mut self.skills_required,
            AnswerField::ResourcesRequired => &mut self.resources_required,
            AnswerField::FailureRate => &mut self.failure_rate,
            AnswerField::Coverage => &mut self.coverage,
            AnswerField::VulnerabilityAccessible => &mut self.vulnerability_accessible,
            AnswerField::Preconditions => &mut self.preconditions,
            AnswerField::AssetCost => &mut self.asset_cost,
            AnswerField::AssetValue => &mut self.asset_value,
            AnswerField::Internal => &mut self.internal,
            AnswerField::External => &mut self.external,
        };
        *slot = value;
        self
    }

    /// Build from a bitmask; bit `i` answers `AnswerField::ALL[i]`.
    ///
    /// Bits above the tenth are ignored.
    pub fn from_bits(bits: u16) -> Self {
        AnswerField::ALL
            .iter()
            .fold(Self::ALL_FALSE, |set, field| {
                set.with(*field, bits & (1 << field.index()) != 0)
            })
    }

    /// Inverse of `from_bits`
    pub fn to_bits(&self) -> u16 {
        AnswerField::ALL
            .iter()
            .filter(|field| self.get(**field))
            .fold(0, |bits, field| bits | (1 << field.index()))
    }

    /// Iterate all 1024 answer sets in bit order
    pub fn all() -> impl Iterator<Item = AnswerSet> {
        (0..ANSWER_SET_COUNT).map(Self::from_bits)
    }
}

/// Answers as captured by a form, before validation
///
/// A field that was never answered is `None` (absent or `null` on the wire).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnswerSubmission {
    pub skills_required: Option<bool>,
    pub resources_required: Option<bool>,
    pub failure_rate: Option<bool>,
    pub coverage: Option<bool>,
    pub vulnerability_accessible: Option<bool>,
    pub preconditions: Option<bool>,
    pub asset_cost: Option<bool>,
    pub asset_value: Option<bool>,
    pub internal: Option<bool>,
    pub external: Option<bool>,
}

impl AnswerSubmission {
    /// Read one answer, `None` if absent
    pub fn get(&self, field: AnswerField) -> Option<bool> {
        match field {
            AnswerField::SkillsRequired => self.skills_required,
            AnswerField::ResourcesRequired => self.resources_required,
            AnswerField::FailureRate => self.failure_rate,
            AnswerField::Coverage => self.coverage,
            AnswerField::VulnerabilityAccessible => self.vulnerability_accessible,
            AnswerField::Preconditions => self.preconditions,
            AnswerField::AssetCost => self.asset_cost,
            AnswerField::AssetValue => self.asset_value,
            AnswerField::Internal => self.internal,
            AnswerField::External => self.external,
        }
    }

    /// Copy with one answer removed
    pub fn without(mut self, field: AnswerField) -> Self {
        let slot = match field {
            AnswerField::SkillsRequired => &mut self.skills_required,
            AnswerField::ResourcesRequired => &mut self.resources_required,
            AnswerField::FailureRate => &mut self.failure_rate,
            AnswerField::Coverage => &mut self.coverage,
            AnswerField::VulnerabilityAccessible => &mut self.vulnerability_accessible,
            AnswerField::Preconditions => &mut self.preconditions,
            AnswerField::AssetCost => &mut self.asset_cost,
            AnswerField::AssetValue => &mut self.asset_value,
            AnswerField::Internal => &mut self.internal,
            AnswerField::External => &mut self.external,
        };
        *slot = None;
        self
    }

    /// Fields that have not been answered, in canonical order
    pub fn missing_fields(&self) -> Vec<AnswerField> {
        AnswerField::ALL
            .iter()
            .copied()
            .filter(|field| self.get(*field).is_none())
            .collect()
    }

    /// Validate all-or-nothing into a complete `AnswerSet`.
    ///
    /// Fails with `MissingFields` naming every absent answer.
    pub fn into_answer_set(self) -> Result<AnswerSet, AssessmentError> {
        match self {
            AnswerSubmission {
                skills_required: Some(skills_required),
                resources_required: Some(resources_required),
                failure_rate: Some(failure_rate),
                coverage: Some(coverage),
                vulnerability_accessible: Some(vulnerability_accessible),
                preconditions: Some(preconditions),
                asset_cost: Some(asset_cost),
                asset_value: Some(asset_value),
                internal: Some(internal),
                external: Some(external),
            } => Ok(AnswerSet {
                skills_required,
                resources_required,
                failure_rate,
                coverage,
                vulnerability_accessible,
                preconditions,
                asset_cost,
                asset_value,
                internal,
                external,
            }),
            incomplete => Err(AssessmentError::MissingFields {
                fields: incomplete.missing_fields(),
            }),
        }
    }
}

impl From<AnswerSet> for AnswerSubmission {
    fn from(answers: AnswerSet) -> Self {
        Self {
            skills_required: Some(answers.skills_required),
            resources_required: Some(answers.resources_required),
            failure_rate: Some(answers.failure_rate),
            coverage: Some(answers.coverage),
            vulnerability_accessible: Some(answers.vulnerability_accessible),
            preconditions: Some(answers.preconditions),
            asset_cost: Some(answers.asset_cost),
            asset_value: Some(answers.asset_value),
            internal: Some(answers.internal),
            external: Some(answers.external),
        }
    }
}
