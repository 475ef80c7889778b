//! Result of one pipeline run
//!
//! Carries the three ratings plus every intermediate code so a rating can be
//! explained without re-running the tables.

use crate::codes::{AttackEffectiveness, Harm, Occurrence, Protection, Stage, ThreatScope, Valuation};
use crate::rating::Rating;
use serde::{Deserialize, Serialize};

/// Codes produced by the six non-rating stages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Intermediates {
    pub threat_scope: ThreatScope,
    pub protection: Protection,
    pub attack_effectiveness: AttackEffectiveness,
    pub occurrence: Occurrence,
    pub harm: Harm,
    pub valuation: Valuation,
}

/// Likelihood, impact and risk for one answer set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Evaluation {
    #[serde(deserialize_with = "crate::rating::likelihood_from_code")]
    pub likelihood: Rating,
    #[serde(deserialize_with = "crate::rating::impact_from_code")]
    pub impact: Rating,
    pub risk: Rating,
    pub intermediates: Intermediates,
}

impl Evaluation {
    /// Letter produced by `stage` during this evaluation
    pub fn code_for(&self, stage: Stage) -> char {
        let i = &self.intermediates;
        match stage {
            Stage::ThreatScope => i.threat_scope.code(),
            Stage::Protection => i.protection.code(),
            Stage::AttackEffectiveness => i.attack_effectiveness.code(),
            Stage::Occurrence => i.occurrence.code(),
            Stage::Likelihood => self.likelihood.code(),
            Stage::Harm => i.harm.code(),
            Stage::Valuation => i.valuation.code(),
            Stage::Impact => self.impact.code(),
            Stage::Risk => self.risk.code(),
        }
    }

    /// All nine stage letters in `Stage::ALL` order, e.g. `"SPLPLDEHM"`
    pub fn trace(&self) -> String {
        Stage::ALL.iter().map(|stage| self.code_for(*stage)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Evaluation {
        Evaluation {
            likelihood: Rating::Low,
            impact: Rating::High,
            risk: Rating::Medium,
            intermediates: Intermediates {
                threat_scope: ThreatScope::Small,
                protection: Protection::Partial,
                attack_effectiveness: AttackEffectiveness::Limited,
                occurrence: Occurrence::Possible,
                harm: Harm::Disastrous,
                valuation: Valuation::Essential,
            },
        }
    }

    #[test]
    fn test_code_for_each_stage() {
        let evaluation = sample();
        assert_eq!(evaluation.code_for(Stage::ThreatScope), 'S');
        assert_eq!(evaluation.code_for(Stage::Likelihood), 'L');
        assert_eq!(evaluation.code_for(Stage::Impact), 'H');
        assert_eq!(evaluation.code_for(Stage::Risk), 'M');
    }

    #[test]
    fn test_trace() {
        assert_eq!(sample().trace(), "SPLPLDEHM");
    }

    #[test]
    fn test_serialized_shape() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["risk"], "M");
        assert_eq!(json["intermediates"]["valuation"], "E");
    }
}
