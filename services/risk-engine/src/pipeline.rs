//! Evaluation pipeline
//!
//! Threads one answer set through the nine tables in dependency order:
//!
//! ```text
//! threat_scope ─┐
//! protection ───┴─► attack_effectiveness ─┐
//! occurrence ─────────────────────────────┴─► likelihood ─┐
//! harm ─────────┐                                         ├─► risk
//! valuation ────┴─► impact ───────────────────────────────┘
//! ```
//!
//! Pure and deterministic: no clock, no randomness, no shared state.

use tracing::trace;
use types::answers::{AnswerSet, AnswerSubmission};
use types::errors::AssessmentError;
use types::evaluation::{Evaluation, Intermediates};

use crate::tables;

/// Evaluate a complete answer set.
///
/// Total over all 1024 inputs; never fails.
pub fn evaluate(answers: &AnswerSet) -> Evaluation {
    // Likelihood chain
    let threat_scope = tables::threat_scope(answers.skills_required, answers.resources_required);
    let protection = tables::protection(answers.failure_rate, answers.coverage);
    let attack_effectiveness = tables::attack_effectiveness(threat_scope, protection);
    let occurrence = tables::occurrence(answers.vulnerability_accessible, answers.preconditions);
    let likelihood = tables::threat_likelihood(attack_effectiveness, occurrence);

    // Impact chain
    let harm = tables::harm(answers.internal, answers.external);
    let valuation = tables::valuation(answers.asset_value, answers.asset_cost);
    let impact = tables::impact(harm, valuation);

    let risk = tables::risk(impact, likelihood);

    let evaluation = Evaluation {
        likelihood,
        impact,
        risk,
        intermediates: Intermediates {
            threat_scope,
            protection,
            attack_effectiveness,
            occurrence,
            harm,
            valuation,
        },
    };

    trace!(
        answers = answers.to_bits(),
        trace = %evaluation.trace(),
        "Evaluated answer set"
    );

    evaluation
}

/// Validate a raw submission, then evaluate it.
///
/// Fails with `MissingFields` before any stage runs if an answer is absent.
pub fn evaluate_submission(submission: &AnswerSubmission) -> Result<Evaluation, AssessmentError> {
    let answers = submission.clone().into_answer_set()?;
    Ok(evaluate(&answers))
}
