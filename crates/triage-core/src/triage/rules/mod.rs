//! Declarative clinical rule tables.
//!
//! Rules are data, not code: keyword lists, flag names, and vital-sign
//! thresholds live in per-population tables (`general`, `pediatric`,
//! `geriatric`) so they can be reviewed and property-tested independently of
//! the arbitration engine. Predicate evaluation is a pure function over a
//! normalized [`TriageRequest`].

mod general;
mod geriatric;
mod pediatric;

pub use general::general_rules;
pub use geriatric::geriatric_rules;
pub use pediatric::pediatric_rules;

use super::domain::{DepartmentSuggestion, TriageRequest, TriageScore, VitalKind};

/// Sub-population a rule was authored for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleCategory {
    General,
    Pediatric,
    Geriatric,
}

/// Relational comparison applied to a single vital sign reading.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum VitalCheck {
    Below(f64),
    AtMost(f64),
    Above(f64),
    AtLeast(f64),
    /// Holds when the reading falls outside the closed range `[lo, hi]`.
    Outside(f64, f64),
}

impl VitalCheck {
    fn holds(self, value: f64) -> bool {
        match self {
            VitalCheck::Below(bound) => value < bound,
            VitalCheck::AtMost(bound) => value <= bound,
            VitalCheck::Above(bound) => value > bound,
            VitalCheck::AtLeast(bound) => value >= bound,
            VitalCheck::Outside(lo, hi) => value < lo || value > hi,
        }
    }
}

/// Declarative predicate over a [`TriageRequest`].
///
/// Keyword matching is substring containment over tokens the request has
/// already lower-cased; flag matching is exact membership; vital checks fail
/// (rather than error) when the measurement is absent. Conditions compose
/// with [`Criterion::AllOf`] / [`Criterion::AnyOf`] so a rule can model
/// alternative presentations explicitly.
#[derive(Debug, Clone, PartialEq)]
pub enum Criterion {
    /// Any symptom token contains any of these keywords.
    SymptomAny(Vec<&'static str>),
    /// Any medical-history token contains any of these keywords.
    HistoryAny(Vec<&'static str>),
    /// The flag set contains exactly this machine token.
    Flag(&'static str),
    /// The named vital is present and satisfies the check.
    Vital(VitalKind, VitalCheck),
    AgeUnder(f64),
    AgeAtLeast(f64),
    /// Half-open age band `[lo, hi)` in years.
    AgeBand(f64, f64),
    AllOf(Vec<Criterion>),
    AnyOf(Vec<Criterion>),
}

impl Criterion {
    /// Pure predicate: no I/O, no mutation of the request.
    pub fn matches(&self, request: &TriageRequest) -> bool {
        match self {
            Criterion::SymptomAny(keywords) => contains_any(&request.symptoms, keywords),
            Criterion::HistoryAny(keywords) => contains_any(&request.medical_history, keywords),
            Criterion::Flag(flag) => request.has_flag(flag),
            Criterion::Vital(kind, check) => request
                .vitals
                .get(*kind)
                .is_some_and(|value| check.holds(value)),
            Criterion::AgeUnder(bound) => request.age_years < *bound,
            Criterion::AgeAtLeast(bound) => request.age_years >= *bound,
            Criterion::AgeBand(lo, hi) => request.age_years >= *lo && request.age_years < *hi,
            Criterion::AllOf(criteria) => criteria.iter().all(|criterion| criterion.matches(request)),
            Criterion::AnyOf(criteria) => criteria.iter().any(|criterion| criterion.matches(request)),
        }
    }
}

fn contains_any(tokens: &[String], keywords: &[&str]) -> bool {
    tokens
        .iter()
        .any(|token| keywords.iter().any(|keyword| token.contains(keyword)))
}

/// Classification a rule assigns when it wins arbitration.
///
/// `confidence` is audit metadata carried alongside the outcome; arbitration
/// keys only on rule weight.
#[derive(Debug, Clone, PartialEq)]
pub struct RuleOutcome {
    pub score: TriageScore,
    /// Urgency rank on the shared 1..=5 scale, 1 most urgent.
    pub priority: u8,
    pub departments: Vec<DepartmentSuggestion>,
    pub explain: &'static str,
    pub confidence: f64,
}

/// A single declarative clinical rule: predicate plus weighted outcome.
#[derive(Debug, Clone, PartialEq)]
pub struct TriageRule {
    pub id: &'static str,
    pub name: &'static str,
    pub category: RuleCategory,
    /// Arbitration tie-break between simultaneously matching rules. Not a
    /// severity score; `priority` carries urgency.
    pub weight: u32,
    pub criteria: Criterion,
    pub outcome: RuleOutcome,
}

impl TriageRule {
    pub fn matches(&self, request: &TriageRequest) -> bool {
        self.criteria.matches(request)
    }
}

/// The full evaluation set: general, then pediatric, then geriatric rules,
/// source order preserved.
///
/// No deduplication happens here. Overlapping coverage (e.g. respiratory
/// distress in both adult and pediatric form) is legitimate; arbitration,
/// not aggregation, decides the externally visible outcome.
pub fn clinical_rule_set() -> Vec<TriageRule> {
    let mut rules = general_rules();
    rules.extend(pediatric_rules());
    rules.extend(geriatric_rules());
    rules
}
