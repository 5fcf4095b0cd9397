use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identifier wrapper for triage cases.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CaseId(pub String);

/// Discrete acuity assigned by the full rule engine.
///
/// Distinct from [`crate::triage::quick::QuickScore`]: the two vocabularies
/// come from non-interchangeable classifiers and are never unified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TriageScore {
    Critical,
    Urgent,
    Standard,
    Low,
}

impl TriageScore {
    pub const fn label(self) -> &'static str {
        match self {
            TriageScore::Critical => "critical",
            TriageScore::Urgent => "urgent",
            TriageScore::Standard => "standard",
            TriageScore::Low => "low",
        }
    }
}

/// Whether a suggested department is the intended destination or a consult.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DepartmentRole {
    Primary,
    Secondary,
}

/// A destination department attached to a rule outcome, in preference order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepartmentSuggestion {
    pub name: String,
    pub role: DepartmentRole,
}

impl DepartmentSuggestion {
    pub fn primary(name: &str) -> Self {
        Self {
            name: name.to_string(),
            role: DepartmentRole::Primary,
        }
    }

    pub fn secondary(name: &str) -> Self {
        Self {
            name: name.to_string(),
            role: DepartmentRole::Secondary,
        }
    }
}

/// Named vital sign measurements. Absent readings stay `None` and simply
/// fail any rule criterion that needs them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct VitalSigns {
    pub respiratory_rate: Option<f64>,
    pub oxygen_saturation: Option<f64>,
    pub heart_rate: Option<f64>,
    pub systolic_bp: Option<f64>,
    pub temperature: Option<f64>,
    pub glucose: Option<f64>,
    pub gcs: Option<f64>,
}

/// Names a single measurement inside [`VitalSigns`] so rule criteria can be
/// expressed as data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VitalKind {
    RespiratoryRate,
    OxygenSaturation,
    HeartRate,
    SystolicBp,
    Temperature,
    Glucose,
    Gcs,
}

impl VitalSigns {
    pub fn get(&self, kind: VitalKind) -> Option<f64> {
        match kind {
            VitalKind::RespiratoryRate => self.respiratory_rate,
            VitalKind::OxygenSaturation => self.oxygen_saturation,
            VitalKind::HeartRate => self.heart_rate,
            VitalKind::SystolicBp => self.systolic_bp,
            VitalKind::Temperature => self.temperature,
            VitalKind::Glucose => self.glucose,
            VitalKind::Gcs => self.gcs,
        }
    }
}

/// Raw check-in payload as collected at the front desk, before any
/// normalization or validation has happened.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckInSubmission {
    pub symptoms: Vec<String>,
    #[serde(default)]
    pub medical_history: Vec<String>,
    #[serde(default)]
    pub vitals: VitalSigns,
    #[serde(default)]
    pub flags: Vec<String>,
    pub age_years: f64,
    #[serde(default)]
    pub pain_level: Option<u8>,
    #[serde(default)]
    pub impact_on_activities: Vec<String>,
    #[serde(default)]
    pub arrived_at: Option<DateTime<Utc>>,
}

/// Normalized description of a single case presented for rule evaluation.
///
/// Free-text tokens are trimmed and lower-cased at construction so rule
/// predicates never re-normalize, and flags are the fixed machine vocabulary
/// enforced by the intake guard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TriageRequest {
    pub symptoms: Vec<String>,
    pub medical_history: Vec<String>,
    pub vitals: VitalSigns,
    pub flags: Vec<String>,
    pub age_years: f64,
}

impl TriageRequest {
    pub fn new(
        symptoms: Vec<String>,
        medical_history: Vec<String>,
        vitals: VitalSigns,
        flags: Vec<String>,
        age_years: f64,
    ) -> Self {
        Self {
            symptoms: normalize_tokens(symptoms),
            medical_history: normalize_tokens(medical_history),
            vitals,
            flags: normalize_tokens(flags),
            age_years,
        }
    }

    pub fn has_flag(&self, flag: &str) -> bool {
        self.flags.iter().any(|candidate| candidate == flag)
    }
}

fn normalize_tokens(tokens: Vec<String>) -> Vec<String> {
    tokens
        .into_iter()
        .map(|token| token.trim().to_lowercase())
        .filter(|token| !token.is_empty())
        .collect()
}

/// Final arbitration output handed to persistence, presentation, and the
/// queue estimator.
///
/// `score`, `priority`, and `departments` come from the single winning rule;
/// `explainability` keeps one entry per matched rule, in match order, so
/// clinical review sees every consideration that applied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TriageDisposition {
    pub score: TriageScore,
    pub priority: u8,
    pub departments: Vec<DepartmentSuggestion>,
    pub explainability: Vec<String>,
}

impl TriageDisposition {
    pub fn primary_department(&self) -> Option<&DepartmentSuggestion> {
        self.departments
            .iter()
            .find(|department| department.role == DepartmentRole::Primary)
    }
}

/// High level status tracked for a case across the intake workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CaseStatus {
    Registered,
    Triaged,
}

impl CaseStatus {
    pub const fn label(self) -> &'static str {
        match self {
            CaseStatus::Registered => "registered",
            CaseStatus::Triaged => "triaged",
        }
    }
}
