//! Error types for the risk assessment
//!
//! Comprehensive error taxonomy using thiserror

use crate::answers::AnswerField;
use crate::codes::Stage;
use crate::ids::AssessmentId;
use thiserror::Error;

/// Top-level assessment error
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AssessmentError {
    /// One or more of the ten mandatory answers is absent.
    /// Raised before any stage runs.
    #[error("Missing answers: {}", join_fields(.fields))]
    MissingFields { fields: Vec<AnswerField> },

    /// A stage received a letter outside its input alphabet.
    /// Indicates broken table wiring, never bad user input.
    #[error("Invalid code '{code}' for stage {stage}")]
    InvalidDomain { stage: Stage, code: char },

    /// A stored record no longer re-derives from its own answers.
    #[error("Assessment {id} does not re-derive: stage {stage} differs")]
    RecordMismatch { id: AssessmentId, stage: Stage },
}

impl AssessmentError {
    /// True for errors that signal a programming defect rather than a bad
    /// request.
    pub fn is_defect(&self) -> bool {
        matches!(
            self,
            AssessmentError::InvalidDomain { .. } | AssessmentError::RecordMismatch { .. }
        )
    }
}

fn join_fields(fields: &[AnswerField]) -> String {
    fields
        .iter()
        .map(|field| field.name())
        .collect::<Vec<_>>()
        .join(", ")
}
