//! Stage identifiers and intermediate codes
//!
//! Every stage of the assessment emits a single uppercase letter drawn from
//! its own closed alphabet. Letters are shared between alphabets (`L`, `M`,
//! `P`, ...) but carry no meaning outside the stage that produced them, so
//! each alphabet is its own type.

use crate::errors::AssessmentError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The nine classification stages, in dependency order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    ThreatScope,
    Protection,
    AttackEffectiveness,
    Occurrence,
    Likelihood,
    Harm,
    Valuation,
    Impact,
    Risk,
}

impl Stage {
    /// All stages, leaves first
    pub const ALL: [Stage; 9] = [
        Stage::ThreatScope,
        Stage::Protection,
        Stage::AttackEffectiveness,
        Stage::Occurrence,
        Stage::Likelihood,
        Stage::Harm,
        Stage::Valuation,
        Stage::Impact,
        Stage::Risk,
    ];

    /// Stage name as used in fixtures and logs
    pub fn name(&self) -> &'static str {
        match self {
            Stage::ThreatScope => "threat_scope",
            Stage::Protection => "protection",
            Stage::AttackEffectiveness => "attack_effectiveness",
            Stage::Occurrence => "occurrence",
            Stage::Likelihood => "likelihood",
            Stage::Harm => "harm",
            Stage::Valuation => "valuation",
            Stage::Impact => "impact",
            Stage::Risk => "risk",
        }
    }

    /// Look up a stage by name
    pub fn from_name(name: &str) -> Option<Stage> {
        Stage::ALL.iter().copied().find(|stage| stage.name() == name)
    }

    /// True for stages whose two inputs are raw answers
    pub fn inputs_are_answers(&self) -> bool {
        matches!(
            self,
            Stage::ThreatScope
                | Stage::Protection
                | Stage::Occurrence
                | Stage::Harm
                | Stage::Valuation
        )
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Declares a stage alphabet: a fieldless enum that converts to and from its
/// letter, serializes as that letter and rejects any other letter.
macro_rules! stage_code {
    (
        $(#[$meta:meta])*
        pub enum $name:ident for $stage:path {
            $( $(#[$vmeta:meta])* $variant:ident = $code:literal, )+
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord,
            ::serde::Serialize, ::serde::Deserialize,
        )]
        #[serde(try_from = "char", into = "char")]
        pub enum $name {
            $( $(#[$vmeta])* $variant, )+
        }

        impl $name {
            /// Every code in this alphabet
            pub const ALL: &'static [$name] = &[$( $name::$variant, )+];

            /// Stage that owns this alphabet
            pub const STAGE: $crate::codes::Stage = $stage;

            /// Single-letter code
            pub fn code(&self) -> char {
                match self {
                    $( $name::$variant => $code, )+
                }
            }

            /// Parse a letter, failing with `InvalidDomain` outside the alphabet
            pub fn from_code(code: char) -> Result<Self, $crate::errors::AssessmentError> {
                Self::from_code_in(Self::STAGE, code)
            }

            /// Parse a letter on behalf of `stage`, which is named in the error
            pub fn from_code_in(
                stage: $crate::codes::Stage,
                code: char,
            ) -> Result<Self, $crate::errors::AssessmentError> {
                match code {
                    $( $code => Ok($name::$variant), )+
                    other => Err($crate::errors::AssessmentError::InvalidDomain {
                        stage,
                        code: other,
                    }),
                }
            }
        }

        impl TryFrom<char> for $name {
            type Error = $crate::errors::AssessmentError;

            fn try_from(code: char) -> Result<Self, Self::Error> {
                Self::from_code(code)
            }
        }

        impl From<$name> for char {
            fn from(value: $name) -> char {
                value.code()
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                write!(f, "{}", self.code())
            }
        }
    };
}

pub(crate) use stage_code;

stage_code! {
    /// How many attackers could plausibly mount the attack
    pub enum ThreatScope for Stage::ThreatScope {
        /// Both unique skills and significant resources are needed
        Small = 'S',
        Medium = 'M',
        /// Neither skills nor resources are a barrier
        Large = 'L',
    }
}

stage_code! {
    /// Strength of the defenses around the asset
    pub enum Protection for Stage::Protection {
        Partial = 'P',
        /// Defenses can fail and do not cover every access method
        Insufficient = 'I',
        /// Defenses cannot fail and cover every access method
        Complete = 'C',
    }
}

stage_code! {
    /// How effective an attack is once threat scope meets protection
    pub enum AttackEffectiveness for Stage::AttackEffectiveness {
        Limited = 'L',
        Occasional = 'O',
        Certain = 'C',
    }
}

stage_code! {
    /// How often the vulnerability is exploitable
    pub enum Occurrence for Stage::Occurrence {
        Possible = 'P',
        Rare = 'R',
        Always = 'A',
    }
}

stage_code! {
    /// Breadth of consequences from a successful attack
    pub enum Harm for Stage::Harm {
        /// Consequences both internally and externally
        Disastrous = 'D',
        Moderate = 'M',
        Limited = 'L',
    }
}

stage_code! {
    /// Worth of the asset to the business
    pub enum Valuation for Stage::Valuation {
        /// Significant value and significant replacement cost
        Essential = 'E',
        Significant = 'S',
        Peripheral = 'P',
    }
}

/// Parse a raw-answer input letter (`T`/`F`) for an answer-driven stage
pub fn answer_from_code(stage: Stage, code: char) -> Result<bool, AssessmentError> {
    match code {
        'T' => Ok(true),
        'F' => Ok(false),
        other => Err(AssessmentError::InvalidDomain { stage, code: other }),
    }
}

/// Letter for a raw-answer input
pub fn answer_code(answer: bool) -> char {
    if answer {
        'T'
    } else {
        'F'
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_letters() {
        assert_eq!(ThreatScope::Small.code(), 'S');
        assert_eq!(Protection::Insufficient.code(), 'I');
        assert_eq!(AttackEffectiveness::Occasional.code(), 'O');
        assert_eq!(Occurrence::Always.code(), 'A');
        assert_eq!(Harm::Disastrous.code(), 'D');
        assert_eq!(Valuation::Essential.code(), 'E');
    }

    #[test]
    fn test_from_code_accepts_alphabet() {
        for scope in ThreatScope::ALL {
            assert_eq!(ThreatScope::from_code(scope.code()).unwrap(), *scope);
        }
        for valuation in Valuation::ALL {
            assert_eq!(Valuation::from_code(valuation.code()).unwrap(), *valuation);
        }
    }

    #[test]
    fn test_letters_do_not_cross_alphabets() {
        // 'C' is a Protection code, never a ThreatScope code
        let err = ThreatScope::from_code('C').unwrap_err();
        assert_eq!(
            err,
            AssessmentError::InvalidDomain {
                stage: Stage::ThreatScope,
                code: 'C'
            }
        );
        assert!(Occurrence::from_code('L').is_err());
        assert!(Harm::from_code('E').is_err());
    }

    #[test]
    fn test_lowercase_is_rejected() {
        assert!(Protection::from_code('p').is_err());
    }

    #[test]
    fn test_from_code_in_names_caller_stage() {
        let err = Protection::from_code_in(Stage::AttackEffectiveness, 'X').unwrap_err();
        assert_eq!(
            err,
            AssessmentError::InvalidDomain {
                stage: Stage::AttackEffectiveness,
                code: 'X'
            }
        );
    }

    #[test]
    fn test_serde_uses_letter() {
        assert_eq!(serde_json::to_string(&Occurrence::Rare).unwrap(), "\"R\"");
        let harm: Harm = serde_json::from_str("\"M\"").unwrap();
        assert_eq!(harm, Harm::Moderate);
        assert!(serde_json::from_str::<Harm>("\"Q\"").is_err());
    }

    #[test]
    fn test_answer_codes() {
        assert!(answer_from_code(Stage::Harm, 'T').unwrap());
        assert!(!answer_from_code(Stage::Harm, 'F').unwrap());
        assert!(answer_from_code(Stage::Harm, 't').is_err());
        assert_eq!(answer_code(true), 'T');
    }

    #[test]
    fn test_stage_names_roundtrip() {
        for stage in Stage::ALL {
            assert_eq!(Stage::from_name(stage.name()), Some(stage));
        }
        assert_eq!(Stage::from_name("threat"), None);
    }

    #[test]
    fn test_leaf_stages() {
        let leaves: Vec<_> = Stage::ALL
            .iter()
            .filter(|s| s.inputs_are_answers())
            .collect();
        assert_eq!(leaves.len(), 5);
        assert!(!Stage::Risk.inputs_are_answers());
    }
}
