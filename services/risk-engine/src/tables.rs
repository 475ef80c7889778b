//! Stage classification tables
//!
//! The nine decision tables of the binary risk assessment. Each is an
//! exhaustive match over its input pair with no wildcard arm, so adding a
//! code to any alphabet fails to compile until every table covers it.
//!
//! Argument order is part of the methodology: Protection and Occurrence in
//! particular are not symmetric in their inputs.

use types::codes::{AttackEffectiveness, Harm, Occurrence, Protection, ThreatScope, Valuation};
use types::rating::Rating;

// ── Likelihood chain ─────────────────────────────────────────────────────

/// Threat scope from (skills_required, resources_required)
pub fn threat_scope(skills_required: bool, resources_required: bool) -> ThreatScope {
    match (skills_required, resources_required) {
        (true, true) => ThreatScope::Small,
        (true, false) => ThreatScope::Medium,
        (false, true) => ThreatScope::Medium,
        (false, false) => ThreatScope::Large,
    }
}

/// Protection capability from (failure_rate, coverage)
pub fn protection(failure_rate: bool, coverage: bool) -> Protection {
    match (failure_rate, coverage) {
        (true, true) => Protection::Partial,
        (true, false) => Protection::Insufficient,
        (false, true) => Protection::Complete,
        (false, false) => Protection::Partial,
    }
}

/// Attack effectiveness from (threat scope, protection)
pub fn attack_effectiveness(scope: ThreatScope, protection: Protection) -> AttackEffectiveness {
    use AttackEffectiveness::*;

    match (scope, protection) {
        (ThreatScope::Small, Protection::Complete) => Limited,
        (ThreatScope::Small, Protection::Partial) => Limited,
        (ThreatScope::Small, Protection::Insufficient) => Occasional,
        (ThreatScope::Medium, Protection::Complete) => Limited,
        (ThreatScope::Medium, Protection::Partial) => Occasional,
        (ThreatScope::Medium, Protection::Insufficient) => Certain,
        (ThreatScope::Large, Protection::Complete) => Occasional,
        (ThreatScope::Large, Protection::Partial) => Certain,
        (ThreatScope::Large, Protection::Insufficient) => Certain,
    }
}

/// Occurrence from (vulnerability_accessible, preconditions)
pub fn occurrence(vulnerability_accessible: bool, preconditions: bool) -> Occurrence {
    match (vulnerability_accessible, preconditions) {
        (true, true) => Occurrence::Possible,
        (true, false) => Occurrence::Rare,
        (false, true) => Occurrence::Always,
        (false, false) => Occurrence::Possible,
    }
}

/// Threat likelihood from (attack effectiveness, occurrence)
pub fn threat_likelihood(effectiveness: AttackEffectiveness, occurrence: Occurrence) -> Rating {
    use AttackEffectiveness::*;

    match (effectiveness, occurrence) {
        (Limited, Occurrence::Rare) => Rating::Low,
        (Limited, Occurrence::Possible) => Rating::Low,
        (Limited, Occurrence::Always) => Rating::Medium,
        (Occasional, Occurrence::Rare) => Rating::Low,
        (Occasional, Occurrence::Possible) => Rating::Medium,
        (Occasional, Occurrence::Always) => Rating::High,
        (Certain, Occurrence::Rare) => Rating::Medium,
        (Certain, Occurrence::Possible) => Rating::High,
        (Certain, Occurrence::Always) => Rating::High,
    }
}

// ── Impact chain ─────────────────────────────────────────────────────────

/// Harm from (internal, external)
pub fn harm(internal: bool, external: bool) -> Harm {
    match (internal, external) {
        (true, true) => Harm::Disastrous,
        (true, false) => Harm::Moderate,
        (false, true) => Harm::Moderate,
        (false, false) => Harm::Limited,
    }
}

/// Valuation from (asset_value, asset_cost)
pub fn valuation(asset_value: bool, asset_cost: bool) -> Valuation {
    match (asset_value, asset_cost) {
        (true, true) => Valuation::Essential,
        (true, false) => Valuation::Significant,
        (false, true) => Valuation::Significant,
        (false, false) => Valuation::Peripheral,
    }
}

/// Impact from (harm, valuation)
pub fn impact(harm: Harm, valuation: Valuation) -> Rating {
    match (harm, valuation) {
        (Harm::Limited, Valuation::Essential) => Rating::Medium,
        (Harm::Limited, Valuation::Significant) => Rating::Low,
        (Harm::Limited, Valuation::Peripheral) => Rating::Low,
        (Harm::Moderate, Valuation::Essential) => Rating::High,
        (Harm::Moderate, Valuation::Significant) => Rating::Medium,
        (Harm::Moderate, Valuation::Peripheral) => Rating::Low,
        (Harm::Disastrous, Valuation::Essential) => Rating::High,
        (Harm::Disastrous, Valuation::Significant) => Rating::High,
        (Harm::Disastrous, Valuation::Peripheral) => Rating::Medium,
    }
}

// ── Risk ─────────────────────────────────────────────────────────────────

/// Risk from (impact, likelihood)
pub fn risk(impact: Rating, likelihood: Rating) -> Rating {
    use Rating::*;

    match (impact, likelihood) {
        (Low, High) => Medium,
        (Low, Medium) => Low,
        (Low, Low) => Low,
        (Medium, High) => High,
        (Medium, Medium) => Medium,
        (Medium, Low) => Low,
        (High, High) => High,
        (High, Medium) => High,
        (High, Low) => Medium,
    }
}
