use serde::{Deserialize, Serialize};
use types::answers::{AnswerField, Polarity};
use types::record::AssessmentRecord;

/// One question of the assessment form
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionResponse {
    pub field: AnswerField,
    pub question: String,
    pub polarity: Polarity,
}

impl From<AnswerField> for QuestionResponse {
    fn from(field: AnswerField) -> Self {
        Self {
            field,
            question: field.question().to_string(),
            polarity: field.polarity(),
        }
    }
}

/// Assessments sharing one reference, most recent first
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReferenceListResponse {
    pub reference: String,
    pub assessments: Vec<AssessmentRecord>,
}
