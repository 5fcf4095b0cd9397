use super::{Criterion, RuleCategory, RuleOutcome, TriageRule, VitalCheck};
use crate::triage::domain::{DepartmentSuggestion, TriageScore, VitalKind};

/// Geriatric rules, gated on age 65 and over.
///
/// Thresholds are tuned for atypical presentation: infection in older adults
/// often runs with a blunted febrile response, and cardiac events present as
/// fatigue or breathlessness rather than classic chest pain, so several
/// rules model an OR across alternative presentations.
pub fn geriatric_rules() -> Vec<TriageRule> {
    vec![
        TriageRule {
            id: "ger-atypical-cardiac",
            name: "Chest pain or atypical cardiac presentation",
            category: RuleCategory::Geriatric,
            weight: 88,
            criteria: Criterion::AllOf(vec![
                Criterion::AgeAtLeast(65.0),
                Criterion::AnyOf(vec![
                    Criterion::SymptomAny(vec![
                        "chest pain",
                        "chest pressure",
                        "chest discomfort",
                    ]),
                    Criterion::AllOf(vec![
                        Criterion::SymptomAny(vec!["fatigue", "weakness", "nausea"]),
                        Criterion::SymptomAny(vec![
                            "short of breath",
                            "shortness of breath",
                            "breathless",
                        ]),
                    ]),
                ]),
            ]),
            outcome: RuleOutcome {
                score: TriageScore::Critical,
                priority: 1,
                departments: vec![
                    DepartmentSuggestion::primary("Cardiology"),
                    DepartmentSuggestion::secondary("Geriatrics"),
                ],
                explain: "Possible cardiac event in an older adult, including atypical presentation.",
                confidence: 0.89,
            },
        },
        TriageRule {
            id: "ger-sepsis-atypical",
            name: "Atypical sepsis presentation",
            category: RuleCategory::Geriatric,
            weight: 87,
            criteria: Criterion::AllOf(vec![
                Criterion::AgeAtLeast(65.0),
                Criterion::AnyOf(vec![
                    Criterion::Vital(VitalKind::Temperature, VitalCheck::AtLeast(37.8)),
                    Criterion::Vital(VitalKind::Temperature, VitalCheck::Below(36.0)),
                ]),
                Criterion::AnyOf(vec![
                    Criterion::Vital(VitalKind::HeartRate, VitalCheck::Above(100.0)),
                    Criterion::Vital(VitalKind::SystolicBp, VitalCheck::Below(100.0)),
                ]),
            ]),
            outcome: RuleOutcome {
                score: TriageScore::Critical,
                priority: 1,
                departments: vec![
                    DepartmentSuggestion::primary("Emergency Medicine"),
                    DepartmentSuggestion::secondary("Intensive Care"),
                ],
                explain: "Possible sepsis in an older adult at lowered temperature cutoffs.",
                confidence: 0.86,
            },
        },
        TriageRule {
            id: "ger-fall-anticoagulated",
            name: "Fall with bleeding risk or head injury",
            category: RuleCategory::Geriatric,
            weight: 86,
            criteria: Criterion::AllOf(vec![
                Criterion::AgeAtLeast(65.0),
                Criterion::SymptomAny(vec!["fall", "fell"]),
                Criterion::AnyOf(vec![
                    Criterion::HistoryAny(vec![
                        "warfarin",
                        "apixaban",
                        "rivaroxaban",
                        "anticoagulant",
                        "blood thinner",
                    ]),
                    Criterion::SymptomAny(vec!["head injury", "hit head", "struck head"]),
                ]),
            ]),
            outcome: RuleOutcome {
                score: TriageScore::Critical,
                priority: 1,
                departments: vec![
                    DepartmentSuggestion::primary("Emergency Medicine"),
                    DepartmentSuggestion::secondary("Neurology"),
                ],
                explain: "Fall in an anticoagulated or head-injured older adult: bleed risk.",
                confidence: 0.9,
            },
        },
        TriageRule {
            id: "ger-delirium",
            name: "Acute confusion",
            category: RuleCategory::Geriatric,
            weight: 80,
            criteria: Criterion::AllOf(vec![
                Criterion::AgeAtLeast(65.0),
                Criterion::SymptomAny(vec![
                    "confusion",
                    "confused",
                    "disoriented",
                    "delirium",
                    "altered mental",
                ]),
            ]),
            outcome: RuleOutcome {
                score: TriageScore::Urgent,
                priority: 2,
                departments: vec![
                    DepartmentSuggestion::primary("Geriatrics"),
                    DepartmentSuggestion::secondary("Neurology"),
                ],
                explain: "New confusion in an older adult: delirium screen and cause workup.",
                confidence: 0.85,
            },
        },
        TriageRule {
            id: "ger-syncope",
            name: "Syncope",
            category: RuleCategory::Geriatric,
            weight: 74,
            criteria: Criterion::AllOf(vec![
                Criterion::AgeAtLeast(65.0),
                Criterion::SymptomAny(vec!["fainted", "syncope", "passed out", "blackout"]),
            ]),
            outcome: RuleOutcome {
                score: TriageScore::Urgent,
                priority: 2,
                departments: vec![
                    DepartmentSuggestion::primary("Cardiology"),
                    DepartmentSuggestion::secondary("Geriatrics"),
                ],
                explain: "Syncope in an older adult: cardiac cause must be excluded.",
                confidence: 0.83,
            },
        },
        TriageRule {
            id: "ger-hip-fracture",
            name: "Suspected hip fracture",
            category: RuleCategory::Geriatric,
            weight: 66,
            criteria: Criterion::AllOf(vec![
                Criterion::AgeAtLeast(65.0),
                Criterion::SymptomAny(vec!["hip pain", "groin pain", "cannot bear weight"]),
                Criterion::SymptomAny(vec!["fall", "fell"]),
            ]),
            outcome: RuleOutcome {
                score: TriageScore::Urgent,
                priority: 2,
                departments: vec![
                    DepartmentSuggestion::primary("Orthopedics"),
                    DepartmentSuggestion::secondary("Geriatrics"),
                ],
                explain: "Fall with hip or groin pain in an older adult: suspected hip fracture.",
                confidence: 0.87,
            },
        },
        TriageRule {
            id: "ger-weakness",
            name: "Generalized weakness",
            category: RuleCategory::Geriatric,
            weight: 48,
            criteria: Criterion::AllOf(vec![
                Criterion::AgeAtLeast(65.0),
                Criterion::SymptomAny(vec![
                    "generalized weakness",
                    "unable to stand",
                    "off legs",
                ]),
            ]),
            outcome: RuleOutcome {
                score: TriageScore::Standard,
                priority: 3,
                departments: vec![DepartmentSuggestion::primary("Geriatrics")],
                explain: "Functional decline or generalized weakness needing assessment.",
                confidence: 0.73,
            },
        },
        TriageRule {
            id: "ger-medication-reaction",
            name: "Possible medication reaction",
            category: RuleCategory::Geriatric,
            weight: 44,
            criteria: Criterion::AllOf(vec![
                Criterion::AgeAtLeast(65.0),
                Criterion::HistoryAny(vec!["multiple medications", "polypharmacy"]),
                Criterion::SymptomAny(vec!["dizzy", "dizziness", "drowsy", "unsteady"]),
            ]),
            outcome: RuleOutcome {
                score: TriageScore::Standard,
                priority: 3,
                departments: vec![
                    DepartmentSuggestion::primary("Geriatrics"),
                    DepartmentSuggestion::secondary("Pharmacy"),
                ],
                explain: "Dizziness or sedation on multiple medications: review for interaction.",
                confidence: 0.7,
            },
        },
        TriageRule {
            id: "ger-skin-tear",
            name: "Skin tear or minor wound",
            category: RuleCategory::Geriatric,
            weight: 26,
            criteria: Criterion::AllOf(vec![
                Criterion::AgeAtLeast(65.0),
                Criterion::SymptomAny(vec!["skin tear", "minor wound"]),
            ]),
            outcome: RuleOutcome {
                score: TriageScore::Low,
                priority: 4,
                departments: vec![DepartmentSuggestion::primary("Minor Injuries Unit")],
                explain: "Superficial skin injury: dressing and wound care.",
                confidence: 0.77,
            },
        },
    ]
}
