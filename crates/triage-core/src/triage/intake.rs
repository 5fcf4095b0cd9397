use super::domain::{CheckInSubmission, TriageRequest, VitalKind, VitalSigns};

/// The fixed machine vocabulary for clinical flags. Free-text observations
/// belong in `symptoms`; anything here is a discrete indicator set by the
/// intake workflow or arriving crew.
pub const FLAG_VOCABULARY: &[&str] = &[
    "cardiac_arrest",
    "major_trauma",
    "respiratory_failure",
    "anaphylaxis",
    "stroke_alert",
    "uncontrolled_bleeding",
    "unresponsive",
    "sepsis_alert",
    "overdose",
    "self_harm_risk",
];

/// Validation errors raised by the intake guard. Strict typing stops at
/// this boundary; the engine itself never rejects a request.
#[derive(Debug, thiserror::Error)]
pub enum IntakeError {
    #[error("age must be a non-negative, finite number of years (found {0})")]
    InvalidAge(f64),
    #[error("pain level must be between 0 and 10 (found {0})")]
    PainLevelOutOfRange(u8),
    #[error("vital sign {kind:?} must be a finite number (found {value})")]
    NonFiniteVital { kind: VitalKind, value: f64 },
    #[error("unrecognized clinical flag '{0}'")]
    UnknownFlag(String),
}

/// Guard converting a raw check-in submission into a normalized
/// [`TriageRequest`], enforcing the fixed flag vocabulary and rejecting
/// malformed numerics before they reach the rule engine.
#[derive(Debug, Clone, Default)]
pub struct IntakeGuard;

const VITAL_KINDS: &[VitalKind] = &[
    VitalKind::RespiratoryRate,
    VitalKind::OxygenSaturation,
    VitalKind::HeartRate,
    VitalKind::SystolicBp,
    VitalKind::Temperature,
    VitalKind::Glucose,
    VitalKind::Gcs,
];

impl IntakeGuard {
    pub fn request_from_submission(
        &self,
        submission: &CheckInSubmission,
    ) -> Result<TriageRequest, IntakeError> {
        if !submission.age_years.is_finite() || submission.age_years < 0.0 {
            return Err(IntakeError::InvalidAge(submission.age_years));
        }

        if let Some(pain) = submission.pain_level {
            if pain > 10 {
                return Err(IntakeError::PainLevelOutOfRange(pain));
            }
        }

        validate_vitals(&submission.vitals)?;

        let mut flags = Vec::with_capacity(submission.flags.len());
        for raw in &submission.flags {
            let flag = raw.trim().to_lowercase();
            if flag.is_empty() {
                continue;
            }
            if !FLAG_VOCABULARY.contains(&flag.as_str()) {
                return Err(IntakeError::UnknownFlag(raw.clone()));
            }
            flags.push(flag);
        }

        Ok(TriageRequest::new(
            submission.symptoms.clone(),
            submission.medical_history.clone(),
            submission.vitals,
            flags,
            submission.age_years,
        ))
    }
}

fn validate_vitals(vitals: &VitalSigns) -> Result<(), IntakeError> {
    for kind in VITAL_KINDS {
        if let Some(value) = vitals.get(*kind) {
            if !value.is_finite() {
                return Err(IntakeError::NonFiniteVital {
                    kind: *kind,
                    value,
                });
            }
        }
    }
    Ok(())
}
