use crate::store::AssessmentStore;
use risk_engine::AssessmentEngine;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub engine: AssessmentEngine,
    pub store: Arc<dyn AssessmentStore>,
}

impl AppState {
    pub fn new(engine: AssessmentEngine, store: Arc<dyn AssessmentStore>) -> Self {
        Self { engine, store }
    }
}
