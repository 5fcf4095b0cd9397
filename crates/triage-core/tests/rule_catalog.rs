//! Catalog-wide properties of the shipped rule libraries, checked through
//! the public crate API the way review tooling would consume them.

use triage_core::triage::{
    clinical_rule_set, estimate_wait_minutes, quick_score, CaseId, QueuedCase, QuickAssessment,
    QuickScore, RuleCategory, TriageEngine, TriageRequest, TriageScore, VitalSigns,
    FLAG_VOCABULARY,
};

fn request(symptoms: &[&str], flags: &[&str], age_years: f64) -> TriageRequest {
    TriageRequest::new(
        symptoms.iter().map(|symptom| symptom.to_string()).collect(),
        Vec::new(),
        VitalSigns::default(),
        flags.iter().map(|flag| flag.to_string()).collect(),
        age_years,
    )
}

#[test]
fn every_critical_rule_carries_priority_one() {
    for rule in clinical_rule_set() {
        if rule.outcome.score == TriageScore::Critical {
            assert_eq!(rule.outcome.priority, 1, "rule {}", rule.id);
        }
    }
}

#[test]
fn every_library_population_is_represented() {
    let rules = clinical_rule_set();
    for category in [
        RuleCategory::General,
        RuleCategory::Pediatric,
        RuleCategory::Geriatric,
    ] {
        assert!(
            rules.iter().any(|rule| rule.category == category),
            "no rules in category {category:?}"
        );
    }
}

#[test]
fn every_vocabulary_flag_is_consumed_by_some_rule() {
    let engine = TriageEngine::with_clinical_rules();
    for flag in FLAG_VOCABULARY {
        let disposition = engine.evaluate(&request(&[], &[flag], 40.0));
        assert!(
            disposition.priority <= 2,
            "flag {flag} did not reach an urgent-or-better disposition"
        );
    }
}

#[test]
fn spec_scenarios_hold_end_to_end() {
    let engine = TriageEngine::with_clinical_rules();

    let arrest = engine.evaluate(&request(&[], &["cardiac_arrest"], 60.0));
    assert_eq!(arrest.score, TriageScore::Critical);
    assert_eq!(arrest.priority, 1);

    let nothing = engine.evaluate(&request(&[], &[], 30.0));
    assert_eq!(nothing.score, TriageScore::Low);
    assert_eq!(nothing.priority, 5);
    assert_eq!(nothing.departments[0].name, "General Medicine");

    let infant_fever = engine.evaluate(&request(&["fever"], &[], 0.2));
    assert_eq!(infant_fever.score, TriageScore::Critical);
    assert_eq!(infant_fever.priority, 1);

    assert_eq!(
        quick_score(&QuickAssessment {
            pain_level: 9,
            impact_on_activities: vec!["Some difficulty".to_string()],
        }),
        QuickScore::High
    );
    assert_eq!(
        quick_score(&QuickAssessment {
            pain_level: 6,
            impact_on_activities: vec!["Some difficulty".to_string()],
        }),
        QuickScore::Medium
    );

    let queue: Vec<QueuedCase> = [1u8, 3, 3]
        .iter()
        .enumerate()
        .map(|(index, acuity)| QueuedCase {
            case_id: CaseId(format!("case-{index}")),
            acuity: *acuity,
        })
        .collect();
    assert_eq!(estimate_wait_minutes(&queue, 2), Some(45));
}

#[test]
fn overlapping_populations_resolve_through_arbitration() {
    let engine = TriageEngine::with_clinical_rules();
    let disposition = engine.evaluate(&request(&["chest pain"], &[], 70.0));

    // Both the adult and geriatric chest-pain rules fire; the geriatric
    // outcome wins while both explanations are retained.
    assert_eq!(disposition.score, TriageScore::Critical);
    assert!(disposition.departments.iter().any(|d| d.name == "Geriatrics"));
    assert!(disposition.explainability.len() >= 2);
}
