use crate::infra::{InMemoryCaseRepository, InMemoryEscalationNotifier};
use clap::Args;
use std::sync::Arc;
use triage_core::error::AppError;
use triage_core::triage::{
    queue_estimates, quick_score, CheckInSubmission, QueuedCase, QuickAssessment,
    TriageCaseService, VitalSigns,
};

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Include the full explainability trail for every demo case
    #[arg(long)]
    pub(crate) explain: bool,
}

#[derive(Args, Debug)]
pub(crate) struct WaitEstimateArgs {
    /// Acuity (1..=5, 1 most urgent) of each queued case, in queue order
    #[arg(long = "acuity", required = true)]
    pub(crate) acuities: Vec<u8>,
}

pub(crate) fn run_wait_estimate(args: WaitEstimateArgs) -> Result<(), AppError> {
    let queue: Vec<QueuedCase> = args
        .acuities
        .iter()
        .enumerate()
        .map(|(index, acuity)| QueuedCase {
            case_id: triage_core::triage::CaseId(format!("queued-{}", index + 1)),
            acuity: *acuity,
        })
        .collect();

    println!("Queue wait estimates");
    for (case, minutes) in queue.iter().zip(queue_estimates(&queue)) {
        println!(
            "  {} (acuity {}): ~{} min",
            case.case_id.0, case.acuity, minutes
        );
    }

    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let repository = Arc::new(InMemoryCaseRepository::default());
    let notifier = Arc::new(InMemoryEscalationNotifier::default());
    let service = TriageCaseService::new(repository, notifier.clone());

    println!("Clinical triage demo");

    let mut queue = Vec::new();
    for (label, submission) in sample_cases() {
        let record = service.check_in(submission)?;
        let disposition = service.triage(&record.case_id)?;

        let destination = disposition
            .primary_department()
            .map(|department| department.name.clone())
            .unwrap_or_else(|| "unassigned".to_string());
        println!(
            "\n{label}\n  {} (priority {}) -> {}",
            disposition.score.label(),
            disposition.priority,
            destination
        );
        if args.explain {
            for explanation in &disposition.explainability {
                println!("    - {explanation}");
            }
        }

        queue.push(QueuedCase {
            case_id: record.case_id,
            acuity: disposition.priority,
        });
    }

    println!("\nResulting queue");
    for (case, minutes) in queue.iter().zip(queue_estimates(&queue)) {
        println!(
            "  {} (acuity {}): ~{} min",
            case.case_id.0, case.acuity, minutes
        );
    }

    let quick = quick_score(&QuickAssessment {
        pain_level: 9,
        impact_on_activities: vec!["Unable to walk".to_string()],
    });
    println!("\nQuick scorer sample: pain 9, unable to walk -> {}", quick.label());

    println!("Escalations published: {}", notifier.events().len());

    Ok(())
}

fn sample_cases() -> Vec<(&'static str, CheckInSubmission)> {
    vec![
        (
            "Arriving crew reports cardiac arrest, 60",
            CheckInSubmission {
                symptoms: Vec::new(),
                medical_history: Vec::new(),
                vitals: VitalSigns::default(),
                flags: vec!["cardiac_arrest".to_string()],
                age_years: 60.0,
                pain_level: None,
                impact_on_activities: Vec::new(),
                arrived_at: None,
            },
        ),
        (
            "Feverish infant, 10 weeks",
            CheckInSubmission {
                symptoms: vec!["fever".to_string()],
                medical_history: Vec::new(),
                vitals: VitalSigns {
                    temperature: Some(38.4),
                    ..VitalSigns::default()
                },
                flags: Vec::new(),
                age_years: 0.2,
                pain_level: None,
                impact_on_activities: Vec::new(),
                arrived_at: None,
            },
        ),
        (
            "Chest pain, 70",
            CheckInSubmission {
                symptoms: vec!["chest pain".to_string()],
                medical_history: vec!["hypertension".to_string()],
                vitals: VitalSigns {
                    heart_rate: Some(92.0),
                    systolic_bp: Some(138.0),
                    ..VitalSigns::default()
                },
                flags: Vec::new(),
                age_years: 70.0,
                pain_level: Some(7),
                impact_on_activities: vec!["Unable to climb stairs".to_string()],
                arrived_at: None,
            },
        ),
        (
            "Runny nose, 30",
            CheckInSubmission {
                symptoms: vec!["runny nose".to_string()],
                medical_history: Vec::new(),
                vitals: VitalSigns::default(),
                flags: Vec::new(),
                age_years: 30.0,
                pain_level: Some(1),
                impact_on_activities: Vec::new(),
                arrived_at: None,
            },
        ),
    ]
}
