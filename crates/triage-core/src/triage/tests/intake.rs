use super::common::submission;
use crate::triage::domain::VitalSigns;
use crate::triage::intake::{IntakeError, IntakeGuard};

#[test]
fn normalizes_symptoms_history_and_flags() {
    let guard = IntakeGuard;
    let mut raw = submission();
    raw.symptoms = vec!["  Chest PAIN ".to_string(), "".to_string()];
    raw.medical_history = vec!["  HyperTension".to_string()];
    raw.flags = vec!["CARDIAC_ARREST".to_string()];

    let request = guard.request_from_submission(&raw).expect("valid submission");

    assert_eq!(request.symptoms, vec!["chest pain".to_string()]);
    assert_eq!(request.medical_history, vec!["hypertension".to_string()]);
    assert!(request.has_flag("cardiac_arrest"));
}

#[test]
fn rejects_negative_age() {
    let guard = IntakeGuard;
    let mut raw = submission();
    raw.age_years = -1.0;

    let error = guard.request_from_submission(&raw).unwrap_err();
    assert!(matches!(error, IntakeError::InvalidAge(_)));
}

#[test]
fn rejects_non_finite_age() {
    let guard = IntakeGuard;
    let mut raw = submission();
    raw.age_years = f64::NAN;

    let error = guard.request_from_submission(&raw).unwrap_err();
    assert!(matches!(error, IntakeError::InvalidAge(_)));
}

#[test]
fn rejects_flags_outside_the_vocabulary() {
    let guard = IntakeGuard;
    let mut raw = submission();
    raw.flags = vec!["zombie_outbreak".to_string()];

    let error = guard.request_from_submission(&raw).unwrap_err();
    match error {
        IntakeError::UnknownFlag(flag) => assert_eq!(flag, "zombie_outbreak"),
        other => panic!("expected unknown flag error, got {other:?}"),
    }
}

#[test]
fn rejects_non_finite_vitals() {
    let guard = IntakeGuard;
    let mut raw = submission();
    raw.vitals = VitalSigns {
        temperature: Some(f64::NAN),
        ..VitalSigns::default()
    };

    let error = guard.request_from_submission(&raw).unwrap_err();
    assert!(matches!(error, IntakeError::NonFiniteVital { .. }));
}

#[test]
fn rejects_pain_level_above_scale() {
    let guard = IntakeGuard;
    let mut raw = submission();
    raw.pain_level = Some(11);

    let error = guard.request_from_submission(&raw).unwrap_err();
    assert!(matches!(error, IntakeError::PainLevelOutOfRange(11)));
}

#[test]
fn accepts_fractional_infant_age() {
    let guard = IntakeGuard;
    let mut raw = submission();
    raw.age_years = 0.2;

    let request = guard.request_from_submission(&raw).expect("valid submission");
    assert!((request.age_years - 0.2).abs() < f64::EPSILON);
}
