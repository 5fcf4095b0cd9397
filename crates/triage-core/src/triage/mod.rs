//! Clinical triage: rule tables, arbitration, quick scoring, wait
//! estimation, and the intake/service/HTTP seams around them.

pub mod domain;
pub(crate) mod engine;
pub(crate) mod intake;
pub mod queueing;
pub mod quick;
pub mod repository;
pub mod router;
pub mod rules;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{
    CaseId, CaseStatus, CheckInSubmission, DepartmentRole, DepartmentSuggestion, TriageDisposition,
    TriageRequest, TriageScore, VitalKind, VitalSigns,
};
pub use engine::{fallback_disposition, TriageEngine, FALLBACK_EXPLANATION};
pub use intake::{IntakeError, IntakeGuard, FLAG_VOCABULARY};
pub use queueing::{base_wait_minutes, estimate_wait_minutes, queue_estimates, QueuedCase};
pub use quick::{quick_score, QuickAssessment, QuickScore};
pub use repository::{
    AlertError, CaseRecord, CaseRepository, CaseStatusView, EscalationAlert, EscalationNotifier,
    RepositoryError,
};
pub use router::triage_router;
pub use rules::{clinical_rule_set, Criterion, RuleCategory, RuleOutcome, TriageRule, VitalCheck};
pub use service::{TriageCaseService, TriageServiceError};
