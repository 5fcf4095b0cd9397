use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::http::StatusCode;
use axum::response::Response;
use serde_json::Value;

use crate::triage::domain::{
    CaseId, CheckInSubmission, DepartmentSuggestion, TriageRequest, TriageScore, VitalSigns,
};
use crate::triage::engine::TriageEngine;
use crate::triage::repository::{
    AlertError, CaseRecord, CaseRepository, EscalationAlert, EscalationNotifier, RepositoryError,
};
use crate::triage::router::triage_router;
use crate::triage::rules::{Criterion, RuleCategory, RuleOutcome, TriageRule};
use crate::triage::service::TriageCaseService;

pub(super) fn request(symptoms: &[&str], age_years: f64) -> TriageRequest {
    TriageRequest::new(
        symptoms.iter().map(|symptom| symptom.to_string()).collect(),
        Vec::new(),
        VitalSigns::default(),
        Vec::new(),
        age_years,
    )
}

pub(super) fn flagged_request(flags: &[&str], age_years: f64) -> TriageRequest {
    TriageRequest::new(
        Vec::new(),
        Vec::new(),
        VitalSigns::default(),
        flags.iter().map(|flag| flag.to_string()).collect(),
        age_years,
    )
}

pub(super) fn empty_request(age_years: f64) -> TriageRequest {
    TriageRequest::new(Vec::new(), Vec::new(), VitalSigns::default(), Vec::new(), age_years)
}

/// A request loaded with every keyword and deranged vital the rule tables
/// look at, so age gating is the only thing that can stop a match.
pub(super) fn symptom_soup_request(age_years: f64) -> TriageRequest {
    TriageRequest::new(
        vec![
            "fever".to_string(),
            "difficulty breathing".to_string(),
            "grunting".to_string(),
            "stridor".to_string(),
            "seizure".to_string(),
            "swallowed a battery".to_string(),
            "no wet diapers".to_string(),
            "lethargic".to_string(),
            "high fever".to_string(),
            "wheezing".to_string(),
            "scrape".to_string(),
            "cough".to_string(),
        ],
        vec!["asthma".to_string()],
        VitalSigns {
            respiratory_rate: Some(100.0),
            temperature: Some(40.5),
            ..VitalSigns::default()
        },
        Vec::new(),
        age_years,
    )
}

pub(super) fn submission() -> CheckInSubmission {
    CheckInSubmission {
        symptoms: vec!["Chest Pain".to_string(), "short of breath".to_string()],
        medical_history: vec!["Hypertension".to_string()],
        vitals: VitalSigns {
            heart_rate: Some(96.0),
            systolic_bp: Some(132.0),
            ..VitalSigns::default()
        },
        flags: Vec::new(),
        age_years: 54.0,
        pain_level: Some(6),
        impact_on_activities: vec!["Some difficulty climbing stairs".to_string()],
        arrived_at: None,
    }
}

pub(super) fn synthetic_rule(
    id: &'static str,
    weight: u32,
    score: TriageScore,
    priority: u8,
    explain: &'static str,
) -> TriageRule {
    TriageRule {
        id,
        name: id,
        category: RuleCategory::General,
        weight,
        criteria: Criterion::AgeAtLeast(0.0),
        outcome: RuleOutcome {
            score,
            priority,
            departments: vec![DepartmentSuggestion::primary(id)],
            explain,
            confidence: 0.5,
        },
    }
}

pub(super) fn build_service() -> (
    TriageCaseService<MemoryRepository, MemoryNotifier>,
    Arc<MemoryRepository>,
    Arc<MemoryNotifier>,
) {
    let repository = Arc::new(MemoryRepository::default());
    let notifier = Arc::new(MemoryNotifier::default());
    let service = TriageCaseService::new(repository.clone(), notifier.clone());
    (service, repository, notifier)
}

#[derive(Default, Clone)]
pub(super) struct MemoryRepository {
    pub(super) records: Arc<Mutex<HashMap<CaseId, CaseRecord>>>,
}

impl CaseRepository for MemoryRepository {
    fn insert(&self, record: CaseRecord) -> Result<CaseRecord, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard.contains_key(&record.case_id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(record.case_id.clone(), record.clone());
        Ok(record)
    }

    fn update(&self, record: CaseRecord) -> Result<(), RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        guard.insert(record.case_id.clone(), record);
        Ok(())
    }

    fn fetch(&self, id: &CaseId) -> Result<Option<CaseRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.get(id).cloned())
    }

    fn pending(&self, _limit: usize) -> Result<Vec<CaseRecord>, RepositoryError> {
        Ok(Vec::new())
    }
}

#[derive(Default, Clone)]
pub(super) struct MemoryNotifier {
    events: Arc<Mutex<Vec<EscalationAlert>>>,
}

impl MemoryNotifier {
    pub(super) fn events(&self) -> Vec<EscalationAlert> {
        self.events.lock().expect("alert mutex poisoned").clone()
    }
}

impl EscalationNotifier for MemoryNotifier {
    fn publish(&self, alert: EscalationAlert) -> Result<(), AlertError> {
        self.events
            .lock()
            .expect("alert mutex poisoned")
            .push(alert);
        Ok(())
    }
}

pub(super) struct ConflictRepository;

impl CaseRepository for ConflictRepository {
    fn insert(&self, _record: CaseRecord) -> Result<CaseRecord, RepositoryError> {
        Err(RepositoryError::Conflict)
    }

    fn update(&self, _record: CaseRecord) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("read only".to_string()))
    }

    fn fetch(&self, _id: &CaseId) -> Result<Option<CaseRecord>, RepositoryError> {
        Ok(None)
    }

    fn pending(&self, _limit: usize) -> Result<Vec<CaseRecord>, RepositoryError> {
        Ok(Vec::new())
    }
}

pub(super) fn assert_conflict_response(response: Response) {
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

pub(super) fn clinical_engine() -> TriageEngine {
    TriageEngine::with_clinical_rules()
}

pub(super) fn triage_router_with_service(
    service: TriageCaseService<MemoryRepository, MemoryNotifier>,
) -> axum::Router {
    triage_router(Arc::new(service))
}
