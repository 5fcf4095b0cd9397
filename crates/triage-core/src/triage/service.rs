use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::Utc;
use tracing::{info, warn};

use super::domain::{CaseId, CaseStatus, CheckInSubmission, TriageDisposition, TriageScore};
use super::engine::TriageEngine;
use super::intake::{IntakeError, IntakeGuard};
use super::quick::{quick_score, QuickAssessment};
use super::repository::{
    AlertError, CaseRecord, CaseRepository, EscalationAlert, EscalationNotifier, RepositoryError,
};

/// Service composing the intake guard, rule engine, repository, and
/// escalation notifier.
pub struct TriageCaseService<R, N> {
    guard: IntakeGuard,
    engine: Arc<TriageEngine>,
    repository: Arc<R>,
    notifier: Arc<N>,
}

static CASE_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_case_id() -> CaseId {
    let id = CASE_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    CaseId(format!("case-{id:06}"))
}

impl<R, N> TriageCaseService<R, N>
where
    R: CaseRepository + 'static,
    N: EscalationNotifier + 'static,
{
    /// Service over the full clinical rule set.
    pub fn new(repository: Arc<R>, notifier: Arc<N>) -> Self {
        Self::with_engine(TriageEngine::with_clinical_rules(), repository, notifier)
    }

    /// Service over an injected engine, so tests can drive synthetic rule
    /// sets end-to-end.
    pub fn with_engine(engine: TriageEngine, repository: Arc<R>, notifier: Arc<N>) -> Self {
        Self {
            guard: IntakeGuard,
            engine: Arc::new(engine),
            repository,
            notifier,
        }
    }

    /// Register a new case, returning the repository-backed record.
    pub fn check_in(
        &self,
        submission: CheckInSubmission,
    ) -> Result<CaseRecord, TriageServiceError> {
        let request = self.guard.request_from_submission(&submission)?;

        let provisional = submission.pain_level.map(|pain_level| {
            quick_score(&QuickAssessment {
                pain_level,
                impact_on_activities: submission.impact_on_activities.clone(),
            })
        });

        let record = CaseRecord {
            case_id: next_case_id(),
            request,
            arrived_at: submission.arrived_at.unwrap_or_else(Utc::now),
            status: CaseStatus::Registered,
            provisional,
            disposition: None,
        };

        let stored = self.repository.insert(record)?;
        info!(case_id = %stored.case_id.0, "case registered");
        Ok(stored)
    }

    /// Run the rule engine for a registered case and persist the outcome.
    pub fn triage(&self, case_id: &CaseId) -> Result<TriageDisposition, TriageServiceError> {
        let mut record = self
            .repository
            .fetch(case_id)?
            .ok_or(RepositoryError::NotFound)?;

        let disposition = self.engine.evaluate(&record.request);

        record.status = CaseStatus::Triaged;
        record.disposition = Some(disposition.clone());
        self.repository.update(record)?;

        info!(
            case_id = %case_id.0,
            score = disposition.score.label(),
            priority = disposition.priority,
            "case triaged"
        );

        if disposition.score == TriageScore::Critical {
            warn!(case_id = %case_id.0, "critical disposition, escalating");
            let mut details = BTreeMap::new();
            details.insert("score".to_string(), disposition.score.label().to_string());
            details.insert("priority".to_string(), disposition.priority.to_string());
            self.notifier.publish(EscalationAlert {
                template: "critical_case".to_string(),
                case_id: case_id.clone(),
                details,
            })?;
        }

        Ok(disposition)
    }

    /// Fetch a case and current status for API responses.
    pub fn get(&self, case_id: &CaseId) -> Result<CaseRecord, TriageServiceError> {
        let record = self
            .repository
            .fetch(case_id)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(record)
    }
}

/// Error raised by the triage case service.
#[derive(Debug, thiserror::Error)]
pub enum TriageServiceError {
    #[error(transparent)]
    Intake(#[from] IntakeError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error(transparent)]
    Alert(#[from] AlertError),
}
