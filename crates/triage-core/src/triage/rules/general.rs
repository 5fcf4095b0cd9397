use super::{Criterion, RuleCategory, RuleOutcome, TriageRule, VitalCheck};
use crate::triage::domain::{DepartmentSuggestion, TriageScore, VitalKind};

/// General and adult emergency rules, highest-stakes presentations first.
///
/// Vitals use adult reference thresholds: temperature in °C, glucose in
/// mg/dL, oxygen saturation in %, blood pressure in mmHg.
pub fn general_rules() -> Vec<TriageRule> {
    vec![
        TriageRule {
            id: "gen-cardiac-arrest",
            name: "Cardiac arrest",
            category: RuleCategory::General,
            weight: 100,
            criteria: Criterion::Flag("cardiac_arrest"),
            outcome: RuleOutcome {
                score: TriageScore::Critical,
                priority: 1,
                departments: vec![
                    DepartmentSuggestion::primary("Resuscitation"),
                    DepartmentSuggestion::secondary("Cardiology"),
                ],
                explain: "Cardiac arrest reported: immediate resuscitation team activation.",
                confidence: 0.99,
            },
        },
        TriageRule {
            id: "gen-major-trauma",
            name: "Major trauma",
            category: RuleCategory::General,
            weight: 98,
            criteria: Criterion::Flag("major_trauma"),
            outcome: RuleOutcome {
                score: TriageScore::Critical,
                priority: 1,
                departments: vec![
                    DepartmentSuggestion::primary("Trauma Unit"),
                    DepartmentSuggestion::secondary("Surgery"),
                ],
                explain: "Major trauma flag present: trauma team activation required.",
                confidence: 0.97,
            },
        },
        TriageRule {
            id: "gen-respiratory-failure",
            name: "Respiratory failure",
            category: RuleCategory::General,
            weight: 97,
            criteria: Criterion::AnyOf(vec![
                Criterion::Flag("respiratory_failure"),
                Criterion::Vital(VitalKind::OxygenSaturation, VitalCheck::Below(85.0)),
            ]),
            outcome: RuleOutcome {
                score: TriageScore::Critical,
                priority: 1,
                departments: vec![
                    DepartmentSuggestion::primary("Resuscitation"),
                    DepartmentSuggestion::secondary("Respiratory Medicine"),
                ],
                explain: "Respiratory failure or profound hypoxia (SpO2 below 85%).",
                confidence: 0.96,
            },
        },
        TriageRule {
            id: "gen-anaphylaxis",
            name: "Anaphylaxis",
            category: RuleCategory::General,
            weight: 96,
            criteria: Criterion::AnyOf(vec![
                Criterion::Flag("anaphylaxis"),
                Criterion::AllOf(vec![
                    Criterion::SymptomAny(vec!["hives", "swelling", "allergic reaction"]),
                    Criterion::SymptomAny(vec!["breathing", "throat", "wheez"]),
                ]),
            ]),
            outcome: RuleOutcome {
                score: TriageScore::Critical,
                priority: 1,
                departments: vec![
                    DepartmentSuggestion::primary("Resuscitation"),
                    DepartmentSuggestion::secondary("Emergency Medicine"),
                ],
                explain: "Suspected anaphylaxis: allergic presentation with airway involvement.",
                confidence: 0.94,
            },
        },
        TriageRule {
            id: "gen-stroke",
            name: "Suspected stroke",
            category: RuleCategory::General,
            weight: 95,
            criteria: Criterion::AnyOf(vec![
                Criterion::Flag("stroke_alert"),
                Criterion::SymptomAny(vec![
                    "facial droop",
                    "face droop",
                    "slurred speech",
                    "one-sided weakness",
                    "arm weakness",
                ]),
            ]),
            outcome: RuleOutcome {
                score: TriageScore::Critical,
                priority: 1,
                departments: vec![
                    DepartmentSuggestion::primary("Stroke Unit"),
                    DepartmentSuggestion::secondary("Neurology"),
                ],
                explain: "Stroke presentation (FAST positive): time-critical neurology pathway.",
                confidence: 0.93,
            },
        },
        TriageRule {
            id: "gen-major-hemorrhage",
            name: "Uncontrolled bleeding",
            category: RuleCategory::General,
            weight: 94,
            criteria: Criterion::AnyOf(vec![
                Criterion::Flag("uncontrolled_bleeding"),
                Criterion::SymptomAny(vec![
                    "uncontrolled bleeding",
                    "severe bleeding",
                    "hemorrhage",
                ]),
            ]),
            outcome: RuleOutcome {
                score: TriageScore::Critical,
                priority: 1,
                departments: vec![
                    DepartmentSuggestion::primary("Emergency Medicine"),
                    DepartmentSuggestion::secondary("Surgery"),
                ],
                explain: "Uncontrolled hemorrhage: immediate hemostasis and surgical review.",
                confidence: 0.95,
            },
        },
        TriageRule {
            id: "gen-unresponsive",
            name: "Unresponsive or depressed consciousness",
            category: RuleCategory::General,
            weight: 93,
            criteria: Criterion::AnyOf(vec![
                Criterion::Flag("unresponsive"),
                Criterion::Vital(VitalKind::Gcs, VitalCheck::AtMost(8.0)),
            ]),
            outcome: RuleOutcome {
                score: TriageScore::Critical,
                priority: 1,
                departments: vec![
                    DepartmentSuggestion::primary("Resuscitation"),
                    DepartmentSuggestion::secondary("Neurology"),
                ],
                explain: "Unresponsive patient or GCS 8 or below: airway at risk.",
                confidence: 0.97,
            },
        },
        TriageRule {
            id: "gen-respiratory-distress",
            name: "Severe respiratory distress",
            category: RuleCategory::General,
            weight: 90,
            criteria: Criterion::AllOf(vec![
                Criterion::SymptomAny(vec![
                    "difficulty breathing",
                    "shortness of breath",
                    "short of breath",
                    "cannot breathe",
                ]),
                Criterion::AnyOf(vec![
                    Criterion::Vital(VitalKind::OxygenSaturation, VitalCheck::Below(90.0)),
                    Criterion::Vital(VitalKind::RespiratoryRate, VitalCheck::Above(30.0)),
                ]),
            ]),
            outcome: RuleOutcome {
                score: TriageScore::Critical,
                priority: 1,
                departments: vec![
                    DepartmentSuggestion::primary("Respiratory Medicine"),
                    DepartmentSuggestion::secondary("Emergency Medicine"),
                ],
                explain: "Respiratory distress with hypoxia or tachypnea on arrival.",
                confidence: 0.92,
            },
        },
        TriageRule {
            id: "gen-sepsis",
            name: "Suspected sepsis",
            category: RuleCategory::General,
            weight: 89,
            criteria: Criterion::AnyOf(vec![
                Criterion::Flag("sepsis_alert"),
                Criterion::AllOf(vec![
                    Criterion::Vital(VitalKind::Temperature, VitalCheck::AtLeast(38.3)),
                    Criterion::Vital(VitalKind::HeartRate, VitalCheck::Above(110.0)),
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
                explain: "Sepsis criteria met: fever with tachycardia and hypotension.",
                confidence: 0.9,
            },
        },
        TriageRule {
            id: "gen-hypoglycemia",
            name: "Severe hypoglycemia",
            category: RuleCategory::General,
            weight: 87,
            criteria: Criterion::Vital(VitalKind::Glucose, VitalCheck::Below(55.0)),
            outcome: RuleOutcome {
                score: TriageScore::Critical,
                priority: 1,
                departments: vec![
                    DepartmentSuggestion::primary("Emergency Medicine"),
                    DepartmentSuggestion::secondary("Endocrinology"),
                ],
                explain: "Severe hypoglycemia (glucose below 55 mg/dL).",
                confidence: 0.95,
            },
        },
        TriageRule {
            id: "gen-overdose",
            name: "Overdose or poisoning",
            category: RuleCategory::General,
            weight: 86,
            criteria: Criterion::AnyOf(vec![
                Criterion::Flag("overdose"),
                Criterion::SymptomAny(vec!["overdose", "poisoning", "ingested"]),
            ]),
            outcome: RuleOutcome {
                score: TriageScore::Critical,
                priority: 1,
                departments: vec![
                    DepartmentSuggestion::primary("Emergency Medicine"),
                    DepartmentSuggestion::secondary("Toxicology"),
                ],
                explain: "Reported overdose or poisoning: toxicology assessment required.",
                confidence: 0.9,
            },
        },
        TriageRule {
            id: "gen-chest-pain",
            name: "Adult chest pain",
            category: RuleCategory::General,
            weight: 85,
            criteria: Criterion::AllOf(vec![
                Criterion::AgeAtLeast(18.0),
                Criterion::SymptomAny(vec!["chest pain", "chest pressure", "chest tightness"]),
            ]),
            outcome: RuleOutcome {
                score: TriageScore::Critical,
                priority: 1,
                departments: vec![
                    DepartmentSuggestion::primary("Cardiology"),
                    DepartmentSuggestion::secondary("Emergency Medicine"),
                ],
                explain: "Adult chest pain: possible acute coronary syndrome until excluded.",
                confidence: 0.85,
            },
        },
        TriageRule {
            id: "gen-severe-burns",
            name: "Severe burns",
            category: RuleCategory::General,
            weight: 84,
            criteria: Criterion::SymptomAny(vec!["severe burn", "burns to face", "chemical burn"]),
            outcome: RuleOutcome {
                score: TriageScore::Critical,
                priority: 1,
                departments: vec![
                    DepartmentSuggestion::primary("Burn Unit"),
                    DepartmentSuggestion::secondary("Emergency Medicine"),
                ],
                explain: "Severe or facial/chemical burns: specialist burn care.",
                confidence: 0.91,
            },
        },
        TriageRule {
            id: "gen-pregnancy-complication",
            name: "Pregnancy complication",
            category: RuleCategory::General,
            weight: 82,
            criteria: Criterion::AllOf(vec![
                Criterion::SymptomAny(vec!["pregnan"]),
                Criterion::SymptomAny(vec![
                    "bleeding",
                    "severe abdominal pain",
                    "contractions",
                    "reduced fetal movement",
                ]),
            ]),
            outcome: RuleOutcome {
                score: TriageScore::Urgent,
                priority: 2,
                departments: vec![
                    DepartmentSuggestion::primary("Obstetrics"),
                    DepartmentSuggestion::secondary("Emergency Medicine"),
                ],
                explain: "Pregnancy with bleeding, pain, or contractions: obstetric review.",
                confidence: 0.88,
            },
        },
        TriageRule {
            id: "gen-hypotension",
            name: "Hypotension",
            category: RuleCategory::General,
            weight: 81,
            criteria: Criterion::Vital(VitalKind::SystolicBp, VitalCheck::Below(90.0)),
            outcome: RuleOutcome {
                score: TriageScore::Urgent,
                priority: 2,
                departments: vec![DepartmentSuggestion::primary("Emergency Medicine")],
                explain: "Systolic blood pressure below 90 mmHg.",
                confidence: 0.89,
            },
        },
        TriageRule {
            id: "gen-self-harm-risk",
            name: "Mental health crisis",
            category: RuleCategory::General,
            weight: 75,
            criteria: Criterion::AnyOf(vec![
                Criterion::Flag("self_harm_risk"),
                Criterion::SymptomAny(vec!["suicidal", "self-harm", "self harm"]),
            ]),
            outcome: RuleOutcome {
                score: TriageScore::Urgent,
                priority: 2,
                departments: vec![
                    DepartmentSuggestion::primary("Psychiatry"),
                    DepartmentSuggestion::secondary("Emergency Medicine"),
                ],
                explain: "Active self-harm risk: continuous observation and psychiatric review.",
                confidence: 0.87,
            },
        },
        TriageRule {
            id: "gen-breathing-difficulty",
            name: "Breathing difficulty, vitals stable",
            category: RuleCategory::General,
            weight: 65,
            criteria: Criterion::SymptomAny(vec![
                "difficulty breathing",
                "shortness of breath",
                "short of breath",
            ]),
            outcome: RuleOutcome {
                score: TriageScore::Urgent,
                priority: 2,
                departments: vec![DepartmentSuggestion::primary("Respiratory Medicine")],
                explain: "Breathing difficulty without recorded hypoxia: urgent assessment.",
                confidence: 0.75,
            },
        },
        TriageRule {
            id: "gen-severe-abdominal-pain",
            name: "Severe abdominal pain",
            category: RuleCategory::General,
            weight: 63,
            criteria: Criterion::SymptomAny(vec!["severe abdominal pain", "rigid abdomen"]),
            outcome: RuleOutcome {
                score: TriageScore::Urgent,
                priority: 2,
                departments: vec![
                    DepartmentSuggestion::primary("Surgery"),
                    DepartmentSuggestion::secondary("General Medicine"),
                ],
                explain: "Severe abdominal pain: surgical abdomen must be excluded.",
                confidence: 0.8,
            },
        },
        TriageRule {
            id: "gen-asthma-exacerbation",
            name: "Asthma exacerbation",
            category: RuleCategory::General,
            weight: 62,
            criteria: Criterion::AllOf(vec![
                Criterion::HistoryAny(vec!["asthma"]),
                Criterion::SymptomAny(vec!["wheez", "short of breath", "tight chest"]),
            ]),
            outcome: RuleOutcome {
                score: TriageScore::Urgent,
                priority: 2,
                departments: vec![DepartmentSuggestion::primary("Respiratory Medicine")],
                explain: "Known asthma with active wheeze or dyspnea.",
                confidence: 0.82,
            },
        },
        TriageRule {
            id: "gen-high-fever",
            name: "High fever, adult",
            category: RuleCategory::General,
            weight: 60,
            criteria: Criterion::AllOf(vec![
                Criterion::AgeAtLeast(18.0),
                Criterion::Vital(VitalKind::Temperature, VitalCheck::AtLeast(39.5)),
            ]),
            outcome: RuleOutcome {
                score: TriageScore::Urgent,
                priority: 2,
                departments: vec![DepartmentSuggestion::primary("General Medicine")],
                explain: "Adult temperature 39.5 °C or above.",
                confidence: 0.78,
            },
        },
        TriageRule {
            id: "gen-suspected-fracture",
            name: "Suspected fracture",
            category: RuleCategory::General,
            weight: 45,
            criteria: Criterion::SymptomAny(vec!["fracture", "broken bone", "deformed limb"]),
            outcome: RuleOutcome {
                score: TriageScore::Standard,
                priority: 3,
                departments: vec![
                    DepartmentSuggestion::primary("Orthopedics"),
                    DepartmentSuggestion::secondary("Radiology"),
                ],
                explain: "Suspected fracture: imaging and orthopedic review.",
                confidence: 0.8,
            },
        },
        TriageRule {
            id: "gen-laceration",
            name: "Laceration needing closure",
            category: RuleCategory::General,
            weight: 42,
            criteria: Criterion::SymptomAny(vec!["laceration", "deep cut"]),
            outcome: RuleOutcome {
                score: TriageScore::Standard,
                priority: 3,
                departments: vec![DepartmentSuggestion::primary("Minor Injuries Unit")],
                explain: "Laceration likely requiring closure.",
                confidence: 0.79,
            },
        },
        TriageRule {
            id: "gen-dehydration",
            name: "Dehydration risk",
            category: RuleCategory::General,
            weight: 40,
            criteria: Criterion::SymptomAny(vec![
                "persistent vomiting",
                "dehydration",
                "unable to keep fluids",
            ]),
            outcome: RuleOutcome {
                score: TriageScore::Standard,
                priority: 3,
                departments: vec![DepartmentSuggestion::primary("General Medicine")],
                explain: "Fluid loss with dehydration risk: assessment and rehydration.",
                confidence: 0.72,
            },
        },
        TriageRule {
            id: "gen-minor-injury",
            name: "Minor injury",
            category: RuleCategory::General,
            weight: 22,
            criteria: Criterion::SymptomAny(vec!["sprain", "minor injury", "bruise"]),
            outcome: RuleOutcome {
                score: TriageScore::Low,
                priority: 4,
                departments: vec![DepartmentSuggestion::primary("Minor Injuries Unit")],
                explain: "Minor musculoskeletal injury.",
                confidence: 0.75,
            },
        },
        TriageRule {
            id: "gen-uri-symptoms",
            name: "Upper respiratory infection symptoms",
            category: RuleCategory::General,
            weight: 20,
            criteria: Criterion::SymptomAny(vec!["sore throat", "runny nose", "common cold"]),
            outcome: RuleOutcome {
                score: TriageScore::Low,
                priority: 4,
                departments: vec![DepartmentSuggestion::primary("General Medicine")],
                explain: "Uncomplicated upper respiratory symptoms.",
                confidence: 0.7,
            },
        },
        TriageRule {
            id: "gen-mild-rash",
            name: "Mild rash",
            category: RuleCategory::General,
            weight: 18,
            criteria: Criterion::SymptomAny(vec!["rash", "itching"]),
            outcome: RuleOutcome {
                score: TriageScore::Low,
                priority: 4,
                departments: vec![DepartmentSuggestion::primary("General Medicine")],
                explain: "Localized rash without systemic involvement.",
                confidence: 0.68,
            },
        },
        TriageRule {
            id: "gen-medication-refill",
            name: "Medication refill request",
            category: RuleCategory::General,
            weight: 10,
            criteria: Criterion::SymptomAny(vec!["medication refill", "prescription renewal"]),
            outcome: RuleOutcome {
                score: TriageScore::Low,
                priority: 5,
                departments: vec![
                    DepartmentSuggestion::primary("Pharmacy"),
                    DepartmentSuggestion::secondary("General Medicine"),
                ],
                explain: "Routine medication refill: no acute clinical concern.",
                confidence: 0.9,
            },
        },
    ]
}
