use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::domain::{CaseId, CaseStatus, TriageDisposition, TriageRequest};
use super::quick::QuickScore;

/// Repository record for one case: the normalized request, lifecycle status,
/// and the disposition once triage has run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaseRecord {
    pub case_id: CaseId,
    pub request: TriageRequest,
    pub arrived_at: DateTime<Utc>,
    pub status: CaseStatus,
    /// Provisional quick-scorer result captured at check-in, when pain data
    /// was supplied. Audit context only; never consumed by the rule engine.
    pub provisional: Option<QuickScore>,
    pub disposition: Option<TriageDisposition>,
}

impl CaseRecord {
    pub fn disposition_summary(&self) -> String {
        match &self.disposition {
            Some(disposition) => {
                let destination = disposition
                    .primary_department()
                    .map(|department| department.name.as_str())
                    .unwrap_or("unassigned");
                format!(
                    "{} (priority {}) to {}",
                    disposition.score.label(),
                    disposition.priority,
                    destination
                )
            }
            None => "pending triage".to_string(),
        }
    }

    pub fn status_view(&self) -> CaseStatusView {
        CaseStatusView {
            case_id: self.case_id.clone(),
            status: self.status.label(),
            disposition_summary: self.disposition_summary(),
            priority: self
                .disposition
                .as_ref()
                .map(|disposition| disposition.priority),
            explainability: self
                .disposition
                .as_ref()
                .map(|disposition| disposition.explainability.clone()),
        }
    }
}

/// Storage abstraction so the service module can be exercised in isolation.
/// Real persistence lives in a collaborating layer behind this trait.
pub trait CaseRepository: Send + Sync {
    fn insert(&self, record: CaseRecord) -> Result<CaseRecord, RepositoryError>;
    fn update(&self, record: CaseRecord) -> Result<(), RepositoryError>;
    fn fetch(&self, id: &CaseId) -> Result<Option<CaseRecord>, RepositoryError>;
    fn pending(&self, limit: usize) -> Result<Vec<CaseRecord>, RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("case already exists")]
    Conflict,
    #[error("case not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}

/// Outbound hook notified whenever a case is triaged Critical, so charge
/// nurse paging or overhead announcement adapters can react.
pub trait EscalationNotifier: Send + Sync {
    fn publish(&self, alert: EscalationAlert) -> Result<(), AlertError>;
}

/// Escalation payload so routes/tests can assert integration boundaries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EscalationAlert {
    pub template: String,
    pub case_id: CaseId,
    pub details: BTreeMap<String, String>,
}

/// Alert dispatch error.
#[derive(Debug, thiserror::Error)]
pub enum AlertError {
    #[error("alert transport unavailable: {0}")]
    Transport(String),
}

/// Sanitized representation of a case's exposed status.
#[derive(Debug, Clone, Serialize)]
pub struct CaseStatusView {
    pub case_id: CaseId,
    pub status: &'static str,
    pub disposition_summary: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explainability: Option<Vec<String>>,
}
