use std::collections::HashSet;

use super::common::*;
use crate::triage::domain::{TriageRequest, TriageScore, VitalSigns};
use crate::triage::rules::{
    clinical_rule_set, general_rules, geriatric_rules, pediatric_rules, RuleCategory,
};

#[test]
fn critical_rules_always_declare_priority_one() {
    for rule in clinical_rule_set() {
        if rule.outcome.score == TriageScore::Critical {
            assert_eq!(
                rule.outcome.priority, 1,
                "rule {} is Critical but declares priority {}",
                rule.id, rule.outcome.priority
            );
        }
    }
}

#[test]
fn rule_ids_are_unique_across_libraries() {
    let rules = clinical_rule_set();
    let ids: HashSet<&str> = rules.iter().map(|rule| rule.id).collect();
    assert_eq!(ids.len(), rules.len());
}

#[test]
fn weights_are_positive_and_confidence_bounded() {
    for rule in clinical_rule_set() {
        assert!(rule.weight > 0, "rule {} has zero weight", rule.id);
        assert!(
            (0.0..=1.0).contains(&rule.outcome.confidence),
            "rule {} has confidence {}",
            rule.id,
            rule.outcome.confidence
        );
        assert!(
            (1..=5).contains(&rule.outcome.priority),
            "rule {} has priority {}",
            rule.id,
            rule.outcome.priority
        );
        assert!(
            !rule.outcome.departments.is_empty(),
            "rule {} suggests no departments",
            rule.id
        );
    }
}

#[test]
fn aggregation_preserves_library_order_without_dedup() {
    let general = general_rules();
    let pediatric = pediatric_rules();
    let geriatric = geriatric_rules();
    let aggregated = clinical_rule_set();

    assert_eq!(
        aggregated.len(),
        general.len() + pediatric.len() + geriatric.len()
    );
    assert_eq!(aggregated[0].id, general[0].id);
    assert_eq!(aggregated[general.len()].id, pediatric[0].id);
    assert_eq!(
        aggregated[general.len() + pediatric.len()].id,
        geriatric[0].id
    );
}

#[test]
fn cardiac_arrest_flag_is_critical_priority_one() {
    let engine = clinical_engine();
    let disposition = engine.evaluate(&flagged_request(&["cardiac_arrest"], 60.0));

    assert_eq!(disposition.score, TriageScore::Critical);
    assert_eq!(disposition.priority, 1);
    assert!(disposition
        .explainability
        .iter()
        .any(|explanation| explanation.contains("Cardiac arrest")));
}

#[test]
fn infant_fever_is_critical_priority_one() {
    let engine = clinical_engine();
    let disposition = engine.evaluate(&request(&["fever"], 0.2));

    assert_eq!(disposition.score, TriageScore::Critical);
    assert_eq!(disposition.priority, 1);
    assert!(disposition
        .explainability
        .iter()
        .any(|explanation| explanation.contains("infant")));
}

#[test]
fn geriatric_chest_pain_matches_geriatric_but_no_pediatric_rule() {
    let case = request(&["chest pain"], 70.0);

    let geriatric_hit = geriatric_rules()
        .iter()
        .any(|rule| rule.matches(&case) && rule.category == RuleCategory::Geriatric);
    assert!(geriatric_hit, "expected a geriatric chest-pain match");

    for rule in pediatric_rules() {
        assert!(
            !rule.matches(&case),
            "pediatric rule {} matched a 70-year-old",
            rule.id
        );
    }
}

#[test]
fn pediatric_rules_never_match_adults() {
    let adult_soup = symptom_soup_request(30.0);
    for rule in pediatric_rules() {
        assert!(
            !rule.matches(&adult_soup),
            "pediatric rule {} matched an adult request",
            rule.id
        );
    }
}

#[test]
fn geriatric_rules_never_match_younger_adults() {
    let younger = symptom_soup_request(40.0);
    for rule in geriatric_rules() {
        assert!(
            !rule.matches(&younger),
            "geriatric rule {} matched a 40-year-old",
            rule.id
        );
    }
}

#[test]
fn pediatric_respiratory_bands_are_age_specific() {
    let engine = clinical_engine();

    // 35 breaths/min is alarming for a ten-year-old but unremarkable for an
    // infant.
    let school_age = TriageRequest::new(
        Vec::new(),
        Vec::new(),
        VitalSigns {
            respiratory_rate: Some(35.0),
            ..VitalSigns::default()
        },
        Vec::new(),
        10.0,
    );
    let infant = TriageRequest::new(
        Vec::new(),
        Vec::new(),
        VitalSigns {
            respiratory_rate: Some(35.0),
            ..VitalSigns::default()
        },
        Vec::new(),
        0.5,
    );

    assert_eq!(engine.evaluate(&school_age).priority, 1);
    assert_eq!(engine.evaluate(&infant).priority, 5);
}

#[test]
fn geriatric_sepsis_uses_lowered_temperature_cutoff() {
    let engine = clinical_engine();

    let vitals = VitalSigns {
        temperature: Some(38.0),
        heart_rate: Some(105.0),
        ..VitalSigns::default()
    };
    let older = TriageRequest::new(Vec::new(), Vec::new(), vitals, Vec::new(), 80.0);
    let adult = TriageRequest::new(Vec::new(), Vec::new(), vitals, Vec::new(), 45.0);

    // 38.0 °C with tachycardia trips the geriatric rule but falls short of
    // the adult sepsis criteria.
    assert_eq!(engine.evaluate(&older).priority, 1);
    assert_eq!(engine.evaluate(&adult).priority, 5);
}

#[test]
fn history_keywords_are_matched_separately_from_symptoms() {
    let engine = clinical_engine();

    let known_asthmatic = TriageRequest::new(
        vec!["wheezing".to_string()],
        vec!["asthma, diagnosed 2019".to_string()],
        VitalSigns::default(),
        Vec::new(),
        28.0,
    );
    let disposition = engine.evaluate(&known_asthmatic);

    assert_eq!(disposition.score, TriageScore::Urgent);
    assert!(disposition
        .explainability
        .iter()
        .any(|explanation| explanation.contains("asthma")));
}
