//! Letter-level table lookup
//!
//! Runs a single stage on raw letters, as they appear in reference fixtures
//! and stored records. Answer-driven stages take `T`/`F`; the others take
//! their input stages' letters. Any letter outside a stage's input domain is
//! rejected with `InvalidDomain`; there is no fallback row.

use types::codes::{
    answer_from_code, AttackEffectiveness, Harm, Occurrence, Protection, Stage, ThreatScope,
    Valuation,
};
use types::errors::AssessmentError;
use types::rating::Rating;

use crate::tables;

/// Apply `stage` to the input pair `(left, right)` and return its letter.
pub fn classify(stage: Stage, left: char, right: char) -> Result<char, AssessmentError> {
    let output = match stage {
        Stage::ThreatScope => {
            let (skills, resources) = answers(stage, left, right)?;
            tables::threat_scope(skills, resources).code()
        }
        Stage::Protection => {
            let (failure_rate, coverage) = answers(stage, left, right)?;
            tables::protection(failure_rate, coverage).code()
        }
        Stage::AttackEffectiveness => tables::attack_effectiveness(
            ThreatScope::from_code_in(stage, left)?,
            Protection::from_code_in(stage, right)?,
        )
        .code(),
        Stage::Occurrence => {
            let (accessible, preconditions) = answers(stage, left, right)?;
            tables::occurrence(accessible, preconditions).code()
        }
        Stage::Likelihood => tables::threat_likelihood(
            AttackEffectiveness::from_code_in(stage, left)?,
            Occurrence::from_code_in(stage, right)?,
        )
        .code(),
        Stage::Harm => {
            let (internal, external) = answers(stage, left, right)?;
            tables::harm(internal, external).code()
        }
        Stage::Valuation => {
            let (value, cost) = answers(stage, left, right)?;
            tables::valuation(value, cost).code()
        }
        Stage::Impact => tables::impact(
            Harm::from_code_in(stage, left)?,
            Valuation::from_code_in(stage, right)?,
        )
        .code(),
        Stage::Risk => tables::risk(
            Rating::from_code_in(stage, left)?,
            Rating::from_code_in(stage, right)?,
        )
        .code(),
    };

    Ok(output)
}

fn answers(stage: Stage, left: char, right: char) -> Result<(bool, bool), AssessmentError> {
    Ok((answer_from_code(stage, left)?, answer_from_code(stage, right)?))
}
