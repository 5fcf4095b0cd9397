use super::domain::{DepartmentSuggestion, TriageDisposition, TriageRequest, TriageScore};
use super::rules::{clinical_rule_set, TriageRule};

/// Explanation attached to the fallback disposition when no rule matches.
pub const FALLBACK_EXPLANATION: &str = "No high-risk criteria met → default to Low priority.";

/// Arbitration engine over an immutable, explicitly injected rule set.
///
/// The rule collection is constructed once and never mutated; evaluation is
/// a pure, synchronous pass over it, so concurrent callers need no
/// synchronization beyond sharing the engine by reference.
pub struct TriageEngine {
    rules: Vec<TriageRule>,
}

impl TriageEngine {
    /// Build an engine over an arbitrary rule collection. Tests inject
    /// synthetic sets through this constructor.
    pub fn new(rules: Vec<TriageRule>) -> Self {
        Self { rules }
    }

    /// Engine over the full clinical rule set (general + pediatric +
    /// geriatric, aggregation order preserved).
    pub fn with_clinical_rules() -> Self {
        Self::new(clinical_rule_set())
    }

    pub fn rules(&self) -> &[TriageRule] {
        &self.rules
    }

    /// Classify one request. Total: every request yields a disposition.
    ///
    /// The winner is the matched rule with maximal weight; equal weights are
    /// broken by the more urgent (lower) priority, then by first-encountered
    /// order in the aggregated set. Explainability keeps every matched
    /// rule's explanation in match order, not only the winner's.
    pub fn evaluate(&self, request: &TriageRequest) -> TriageDisposition {
        let matched: Vec<&TriageRule> = self
            .rules
            .iter()
            .filter(|rule| rule.matches(request))
            .collect();

        let Some(winner) = select_winner(&matched) else {
            return fallback_disposition();
        };

        TriageDisposition {
            score: winner.outcome.score,
            priority: winner.outcome.priority,
            departments: winner.outcome.departments.clone(),
            explainability: matched
                .iter()
                .map(|rule| rule.outcome.explain.to_string())
                .collect(),
        }
    }
}

fn select_winner<'a>(matched: &[&'a TriageRule]) -> Option<&'a TriageRule> {
    matched.iter().copied().reduce(|best, candidate| {
        let outranks = candidate.weight > best.weight
            || (candidate.weight == best.weight
                && candidate.outcome.priority < best.outcome.priority);
        if outranks {
            candidate
        } else {
            best
        }
    })
}

/// The fixed disposition returned when no rule matches: low acuity, lowest
/// priority, general medicine. Downstream consumers always receive a
/// disposition, never an error or silence.
pub fn fallback_disposition() -> TriageDisposition {
    TriageDisposition {
        score: TriageScore::Low,
        priority: 5,
        departments: vec![DepartmentSuggestion::primary("General Medicine")],
        explainability: vec![FALLBACK_EXPLANATION.to_string()],
    }
}
