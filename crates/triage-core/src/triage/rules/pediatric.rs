use super::{Criterion, RuleCategory, RuleOutcome, TriageRule, VitalCheck};
use crate::triage::domain::{DepartmentSuggestion, TriageScore, VitalKind};

/// Pediatric rules. Every rule is gated on age under 18 years; age bands are
/// half-open `[lo, hi)` and fractional ages cover infants (0.25 = 3 months).
///
/// Respiratory-rate thresholds follow pediatric normal ranges, which differ
/// by age bracket rather than using the adult cutoffs.
pub fn pediatric_rules() -> Vec<TriageRule> {
    vec![
        TriageRule {
            id: "ped-infant-fever",
            name: "Fever in infant under 3 months",
            category: RuleCategory::Pediatric,
            weight: 98,
            criteria: Criterion::AllOf(vec![
                Criterion::AgeUnder(0.25),
                Criterion::AnyOf(vec![
                    Criterion::SymptomAny(vec!["fever", "febrile", "hot to touch"]),
                    Criterion::Vital(VitalKind::Temperature, VitalCheck::AtLeast(38.0)),
                ]),
            ]),
            outcome: RuleOutcome {
                score: TriageScore::Critical,
                priority: 1,
                departments: vec![
                    DepartmentSuggestion::primary("Pediatric Emergency"),
                    DepartmentSuggestion::secondary("Pediatrics"),
                ],
                explain: "Fever in an infant under 3 months: sepsis workup until proven otherwise.",
                confidence: 0.96,
            },
        },
        TriageRule {
            id: "ped-respiratory-rate",
            name: "Respiratory rate outside age band",
            category: RuleCategory::Pediatric,
            weight: 92,
            criteria: Criterion::AnyOf(vec![
                Criterion::AllOf(vec![
                    Criterion::AgeUnder(1.0),
                    Criterion::Vital(VitalKind::RespiratoryRate, VitalCheck::Outside(30.0, 60.0)),
                ]),
                Criterion::AllOf(vec![
                    Criterion::AgeBand(1.0, 5.0),
                    Criterion::Vital(VitalKind::RespiratoryRate, VitalCheck::Outside(24.0, 40.0)),
                ]),
                Criterion::AllOf(vec![
                    Criterion::AgeBand(5.0, 12.0),
                    Criterion::Vital(VitalKind::RespiratoryRate, VitalCheck::Outside(18.0, 30.0)),
                ]),
                Criterion::AllOf(vec![
                    Criterion::AgeBand(12.0, 18.0),
                    Criterion::Vital(VitalKind::RespiratoryRate, VitalCheck::Outside(12.0, 25.0)),
                ]),
            ]),
            outcome: RuleOutcome {
                score: TriageScore::Critical,
                priority: 1,
                departments: vec![
                    DepartmentSuggestion::primary("Pediatric Emergency"),
                    DepartmentSuggestion::secondary("Respiratory Medicine"),
                ],
                explain: "Respiratory rate outside the normal range for the child's age band.",
                confidence: 0.9,
            },
        },
        TriageRule {
            id: "ped-febrile-seizure",
            name: "Seizure in young child",
            category: RuleCategory::Pediatric,
            weight: 91,
            criteria: Criterion::AllOf(vec![
                Criterion::AgeUnder(6.0),
                Criterion::SymptomAny(vec!["seizure", "convulsion", "fitting"]),
            ]),
            outcome: RuleOutcome {
                score: TriageScore::Critical,
                priority: 1,
                departments: vec![
                    DepartmentSuggestion::primary("Pediatric Emergency"),
                    DepartmentSuggestion::secondary("Neurology"),
                ],
                explain: "Seizure activity in a young child: immediate pediatric assessment.",
                confidence: 0.93,
            },
        },
        TriageRule {
            id: "ped-respiratory-distress",
            name: "Pediatric respiratory distress",
            category: RuleCategory::Pediatric,
            weight: 88,
            criteria: Criterion::AllOf(vec![
                Criterion::AgeUnder(18.0),
                Criterion::SymptomAny(vec![
                    "difficulty breathing",
                    "grunting",
                    "retractions",
                    "stridor",
                    "nasal flaring",
                ]),
            ]),
            outcome: RuleOutcome {
                score: TriageScore::Critical,
                priority: 1,
                departments: vec![DepartmentSuggestion::primary("Pediatric Emergency")],
                explain: "Signs of respiratory distress in a child.",
                confidence: 0.91,
            },
        },
        TriageRule {
            id: "ped-ingestion",
            name: "Suspected ingestion",
            category: RuleCategory::Pediatric,
            weight: 85,
            criteria: Criterion::AllOf(vec![
                Criterion::AgeUnder(12.0),
                Criterion::SymptomAny(vec!["swallowed", "ingested", "ingestion"]),
            ]),
            outcome: RuleOutcome {
                score: TriageScore::Critical,
                priority: 1,
                departments: vec![
                    DepartmentSuggestion::primary("Pediatric Emergency"),
                    DepartmentSuggestion::secondary("Toxicology"),
                ],
                explain: "Possible ingestion of a harmful substance by a child.",
                confidence: 0.88,
            },
        },
        TriageRule {
            id: "ped-asthma",
            name: "Pediatric asthma exacerbation",
            category: RuleCategory::Pediatric,
            weight: 72,
            criteria: Criterion::AllOf(vec![
                Criterion::AgeUnder(18.0),
                Criterion::HistoryAny(vec!["asthma"]),
                Criterion::SymptomAny(vec!["wheez", "cough", "short of breath"]),
            ]),
            outcome: RuleOutcome {
                score: TriageScore::Urgent,
                priority: 2,
                departments: vec![
                    DepartmentSuggestion::primary("Pediatric Emergency"),
                    DepartmentSuggestion::secondary("Respiratory Medicine"),
                ],
                explain: "Known pediatric asthma with active respiratory symptoms.",
                confidence: 0.84,
            },
        },
        TriageRule {
            id: "ped-dehydration",
            name: "Pediatric dehydration",
            category: RuleCategory::Pediatric,
            weight: 70,
            criteria: Criterion::AllOf(vec![
                Criterion::AgeUnder(18.0),
                Criterion::SymptomAny(vec![
                    "no wet diapers",
                    "sunken fontanelle",
                    "not drinking",
                    "lethargic",
                ]),
            ]),
            outcome: RuleOutcome {
                score: TriageScore::Urgent,
                priority: 2,
                departments: vec![DepartmentSuggestion::primary("Pediatrics")],
                explain: "Dehydration signs in a child: reduced intake or output, lethargy.",
                confidence: 0.83,
            },
        },
        TriageRule {
            id: "ped-high-fever-young-child",
            name: "High fever in young child",
            category: RuleCategory::Pediatric,
            weight: 68,
            criteria: Criterion::AllOf(vec![
                Criterion::AgeBand(0.25, 3.0),
                Criterion::AnyOf(vec![
                    Criterion::Vital(VitalKind::Temperature, VitalCheck::AtLeast(39.5)),
                    Criterion::SymptomAny(vec!["high fever"]),
                ]),
            ]),
            outcome: RuleOutcome {
                score: TriageScore::Urgent,
                priority: 2,
                departments: vec![DepartmentSuggestion::primary("Pediatrics")],
                explain: "High fever in a child between 3 months and 3 years.",
                confidence: 0.8,
            },
        },
        TriageRule {
            id: "ped-fever-school-age",
            name: "Fever in school-age child",
            category: RuleCategory::Pediatric,
            weight: 38,
            criteria: Criterion::AllOf(vec![
                Criterion::AgeBand(3.0, 18.0),
                Criterion::AnyOf(vec![
                    Criterion::SymptomAny(vec!["fever", "febrile"]),
                    Criterion::Vital(VitalKind::Temperature, VitalCheck::AtLeast(38.0)),
                ]),
            ]),
            outcome: RuleOutcome {
                score: TriageScore::Standard,
                priority: 3,
                departments: vec![DepartmentSuggestion::primary("Pediatrics")],
                explain: "Fever in an otherwise stable school-age child.",
                confidence: 0.74,
            },
        },
        TriageRule {
            id: "ped-minor-injury",
            name: "Pediatric minor injury",
            category: RuleCategory::Pediatric,
            weight: 24,
            criteria: Criterion::AllOf(vec![
                Criterion::AgeUnder(18.0),
                Criterion::SymptomAny(vec!["scrape", "small cut", "minor fall"]),
            ]),
            outcome: RuleOutcome {
                score: TriageScore::Low,
                priority: 4,
                departments: vec![DepartmentSuggestion::primary("Pediatrics")],
                explain: "Minor injury in a child with no red-flag features.",
                confidence: 0.76,
            },
        },
    ]
}
