//! Assessment engine: orchestrator
//!
//! Wraps the pure pipeline for boundary layers: validates submissions,
//! evaluates them, attaches record metadata and audits stored records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, error, warn};
use types::answers::AnswerSubmission;
use types::codes::{answer_code, Stage};
use types::errors::AssessmentError;
use types::evaluation::Evaluation;
use types::record::{AssessmentRecord, RecordMetadata};
use types::METHODOLOGY_VERSION;

use crate::lookup;
use crate::pipeline;

/// Assessment engine configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Methodology revision stamped on new records
    pub methodology_version: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            methodology_version: METHODOLOGY_VERSION.to_string(),
        }
    }
}

/// What a form layer hands to the engine
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentRequest {
    /// Opaque caller reference, e.g. a ticket key
    #[serde(default)]
    pub reference: String,
    #[serde(default)]
    pub comment: String,
    #[serde(default)]
    pub answers: AnswerSubmission,
}

/// Assessment engine service
#[derive(Debug, Clone)]
pub struct AssessmentEngine {
    config: EngineConfig,
}

impl AssessmentEngine {
    /// Create a new engine with default configuration
    pub fn new() -> Self {
        Self {
            config: EngineConfig::default(),
        }
    }

    /// Create a new engine with custom configuration
    pub fn with_config(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Validate and evaluate a request, producing a record ready to store.
    ///
    /// `created_at` and `created_by` come from the caller so the engine
    /// stays free of clocks and sessions.
    pub fn assess(
        &self,
        request: AssessmentRequest,
        created_at: DateTime<Utc>,
        created_by: Option<String>,
    ) -> Result<AssessmentRecord, AssessmentError> {
        let answers = match request.answers.into_answer_set() {
            Ok(answers) => answers,
            Err(err) => {
                warn!(reference = %request.reference, error = %err, "Rejected incomplete assessment");
                return Err(err);
            }
        };

        let evaluation = pipeline::evaluate(&answers);
        let record = AssessmentRecord::new(
            request.reference,
            request.comment,
            answers,
            evaluation,
            RecordMetadata {
                methodology_version: self.config.methodology_version.clone(),
                created_at,
                created_by,
            },
        );

        debug!(
            id = %record.id,
            reference = %record.reference,
            likelihood = %record.likelihood,
            impact = %record.impact,
            risk = %record.risk,
            "Assessment recorded"
        );

        Ok(record)
    }

    /// Evaluate without producing a record
    pub fn preview(&self, answers: &AnswerSubmission) -> Result<Evaluation, AssessmentError> {
        pipeline::evaluate_submission(answers)
    }

    /// Re-derive a stored record stage by stage from its stored answers.
    ///
    /// Walks the stored letters through the letter-level tables, so a record
    /// whose codes were tampered with, or computed by a different table
    /// revision, fails on the first stage that disagrees.
    pub fn audit(&self, record: &AssessmentRecord) -> Result<(), AssessmentError> {
        let a = &record.answers;
        let stored = record.evaluation();

        let checks: [(Stage, char, char); 9] = [
            (Stage::ThreatScope, answer_code(a.skills_required), answer_code(a.resources_required)),
            (Stage::Protection, answer_code(a.failure_rate), answer_code(a.coverage)),
            (
                Stage::AttackEffectiveness,
                stored.code_for(Stage::ThreatScope),
                stored.code_for(Stage::Protection),
            ),
            (
                Stage::Occurrence,
                answer_code(a.vulnerability_accessible),
                answer_code(a.preconditions),
            ),
            (
                Stage::Likelihood,
                stored.code_for(Stage::AttackEffectiveness),
                stored.code_for(Stage::Occurrence),
            ),
            (Stage::Harm, answer_code(a.internal), answer_code(a.external)),
            (Stage::Valuation, answer_code(a.asset_value), answer_code(a.asset_cost)),
            (Stage::Impact, stored.code_for(Stage::Harm), stored.code_for(Stage::Valuation)),
            (Stage::Risk, stored.code_for(Stage::Impact), stored.code_for(Stage::Likelihood)),
        ];

        for (stage, left, right) in checks {
            let derived = lookup::classify(stage, left, right)?;
            if derived != stored.code_for(stage) {
                error!(
                    id = %record.id,
                    stage = %stage,
                    stored = %stored.code_for(stage),
                    derived = %derived,
                    "Stored assessment does not re-derive"
                );
                return Err(AssessmentError::RecordMismatch {
                    id: record.id,
                    stage,
                });
            }
        }

        Ok(())
    }
}

impl Default for AssessmentEngine {
    fn default() -> Self {
        Self::new()
    }
}
