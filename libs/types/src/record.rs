//! Persisted assessment records
//!
//! A record combines the raw answers, the computed ratings and the metadata
//! a boundary layer attaches (identity, timestamp, author, methodology).

use crate::answers::AnswerSet;
use crate::evaluation::{Evaluation, Intermediates};
use crate::ids::AssessmentId;
use crate::rating::Rating;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Stored assessment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentRecord {
    pub id: AssessmentId,

    // Provided by the requester
    pub reference: String,
    pub comment: String,
    pub answers: AnswerSet,

    // Calculated
    #[serde(deserialize_with = "crate::rating::likelihood_from_code")]
    pub likelihood: Rating,
    #[serde(deserialize_with = "crate::rating::impact_from_code")]
    pub impact: Rating,
    pub risk: Rating,
    pub intermediates: Intermediates,

    // Metadata
    pub methodology_version: String,
    pub created_at: DateTime<Utc>,
    pub created_by: Option<String>,
}

/// Attributes the boundary layer attaches to an evaluation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordMetadata {
    pub methodology_version: String,
    pub created_at: DateTime<Utc>,
    pub created_by: Option<String>,
}

impl AssessmentRecord {
    /// Assemble a record from an evaluation and its metadata
    pub fn new(
        reference: impl Into<String>,
        comment: impl Into<String>,
        answers: AnswerSet,
        evaluation: Evaluation,
        metadata: RecordMetadata,
    ) -> Self {
        Self {
            id: AssessmentId::new(),
            reference: reference.into(),
            comment: comment.into(),
            answers,
            likelihood: evaluation.likelihood,
            impact: evaluation.impact,
            risk: evaluation.risk,
            intermediates: evaluation.intermediates,
            methodology_version: metadata.methodology_version,
            created_at: metadata.created_at,
            created_by: metadata.created_by,
        }
    }

    /// The stored evaluation, as it was computed
    pub fn evaluation(&self) -> Evaluation {
        Evaluation {
            likelihood: self.likelihood,
            impact: self.impact,
            risk: self.risk,
            intermediates: self.intermediates,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codes::{AttackEffectiveness, Harm, Occurrence, Protection, ThreatScope, Valuation};
    use chrono::TimeZone;

    fn evaluation() -> Evaluation {
        Evaluation {
            likelihood: Rating::High,
            impact: Rating::Low,
            risk: Rating::Medium,
            intermediates: Intermediates {
                threat_scope: ThreatScope::Large,
                protection: Protection::Partial,
                attack_effectiveness: AttackEffectiveness::Certain,
                occurrence: Occurrence::Possible,
                harm: Harm::Limited,
                valuation: Valuation::Peripheral,
            },
        }
    }

    fn metadata() -> RecordMetadata {
        RecordMetadata {
            methodology_version: "2017-05-20".to_string(),
            created_at: Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap(),
            created_by: Some("analyst@example.com".to_string()),
        }
    }

    #[test]
    fn test_record_copies_evaluation() {
        let record = AssessmentRecord::new(
            "SEC-42",
            "Exposed admin panel",
            AnswerSet::ALL_FALSE,
            evaluation(),
            metadata(),
        );
        assert_eq!(record.reference, "SEC-42");
        assert_eq!(record.risk, Rating::Medium);
        assert_eq!(record.evaluation(), evaluation());
    }

    #[test]
    fn test_records_get_distinct_ids() {
        let a = AssessmentRecord::new("r", "", AnswerSet::ALL_FALSE, evaluation(), metadata());
        let b = AssessmentRecord::new("r", "", AnswerSet::ALL_FALSE, evaluation(), metadata());
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_record_json_roundtrip() {
        let record = AssessmentRecord::new("r", "c", AnswerSet::ALL_TRUE, evaluation(), metadata());
        let json = serde_json::to_string(&record).unwrap();
        let back: AssessmentRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn test_bad_rating_letter_names_its_field() {
        let record = AssessmentRecord::new("r", "c", AnswerSet::ALL_TRUE, evaluation(), metadata());
        let mut json = serde_json::to_value(&record).unwrap();

        json["impact"] = "Q".into();
        let err = serde_json::from_value::<AssessmentRecord>(json.clone()).unwrap_err();
        assert!(err.to_string().contains("Invalid code 'Q' for stage impact"));

        json["impact"] = "L".into();
        json["likelihood"] = "X".into();
        let err = serde_json::from_value::<AssessmentRecord>(json).unwrap_err();
        assert!(err.to_string().contains("Invalid code 'X' for stage likelihood"));
    }
}
