use serde::{Deserialize, Serialize};

/// Fixed phrases indicating inability to perform basic activities. Matched
/// by substring over lower-cased impact descriptions; "some difficulty" and
/// similar partial-limitation wording deliberately does not trigger.
const INABILITY_PHRASES: &[&str] = &[
    "unable",
    "cannot",
    "can't",
    "could not",
    "bedridden",
    "incapable",
];

/// Coarse severity from the quick scorer.
///
/// A separate vocabulary from [`crate::triage::domain::TriageScore`]: the
/// quick scorer and the full engine are non-interchangeable classifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuickScore {
    High,
    Medium,
    Low,
}

impl QuickScore {
    pub const fn label(self) -> &'static str {
        match self {
            QuickScore::High => "high",
            QuickScore::Medium => "medium",
            QuickScore::Low => "low",
        }
    }
}

/// Input to the quick scorer: reported pain on a 0..=10 scale plus free-text
/// descriptions of impact on daily activities.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuickAssessment {
    pub pain_level: u8,
    #[serde(default)]
    pub impact_on_activities: Vec<String>,
}

/// Coarse pain/impact classification, independent of the rule libraries and
/// usable when the full engine is unavailable or unneeded.
pub fn quick_score(assessment: &QuickAssessment) -> QuickScore {
    if assessment.pain_level >= 8 || describes_inability(&assessment.impact_on_activities) {
        return QuickScore::High;
    }
    if (5..=7).contains(&assessment.pain_level) {
        return QuickScore::Medium;
    }
    QuickScore::Low
}

fn describes_inability(impacts: &[String]) -> bool {
    impacts.iter().any(|impact| {
        let impact = impact.to_lowercase();
        INABILITY_PHRASES.iter().any(|phrase| impact.contains(phrase))
    })
}
