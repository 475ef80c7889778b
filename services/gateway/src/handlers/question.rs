use crate::models::QuestionResponse;
use axum::Json;
use types::answers::AnswerField;

pub async fn list_questions() -> Json<Vec<QuestionResponse>> {
    Json(AnswerField::ALL.into_iter().map(QuestionResponse::from).collect())
}
