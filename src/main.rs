use std::sync::Arc;

use chrono::Utc;
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

use clinica::analytics::{DiagnosisGrouper, LexiconTagger};
use clinica::config;
use clinica::coordinator::SyncCoordinator;
use clinica::models::{Diagnosis, Patient};
use clinica::repository::{InMemoryRepository, PatientRepository, RemoteRepository};

/// Demo lexicon: enough vocabulary to group the seeded records.
fn demo_tagger() -> LexiconTagger {
    LexiconTagger::new(
        &["flu", "cold", "hydration", "rash", "ointment"],
        &["rest", "take", "apply"],
    )
}

fn demo_patient() -> Patient {
    Patient {
        id: Uuid::new_v4(),
        name: "Alex Rivera".to_string(),
        age: 41,
        contact_number: "555-0182".to_string(),
        diagnoses: vec![Diagnosis {
            id: Uuid::new_v4(),
            date: Utc::now(),
            description: "Rash".to_string(),
            image_data: Vec::new(),
            treatment_notes: "Apply ointment".to_string(),
        }],
    }
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();

    tracing::info!("{} starting v{}", config::APP_NAME, config::APP_VERSION);

    let repository: Arc<dyn PatientRepository> = match config::service_url() {
        Some(url) => {
            tracing::info!(%url, "Using the remote patient service");
            Arc::new(RemoteRepository::new(
                &url,
                config::request_timeout().as_secs(),
            ))
        }
        None => {
            tracing::info!("No service endpoint configured, using the seeded in-memory store");
            Arc::new(InMemoryRepository::seeded())
        }
    };

    let coordinator = SyncCoordinator::new(repository);

    coordinator.fetch_all().await;
    let snapshot = coordinator.snapshot().await;
    if let Some(err) = &snapshot.last_error {
        tracing::error!("Initial fetch failed: {err}");
        return;
    }
    tracing::info!(count = snapshot.patients.len(), "Patient records loaded");

    coordinator.add(demo_patient()).await;
    let snapshot = coordinator.snapshot().await;
    if let Some(err) = &snapshot.last_error {
        tracing::error!("Demo record rejected: {err}");
    }

    let grouper = DiagnosisGrouper::new(demo_tagger());
    for (signature, members) in grouper.group(&snapshot.patients) {
        let names: Vec<&str> = members.iter().map(|p| p.name.as_str()).collect();
        let label = if signature.is_empty() {
            "(no keywords)"
        } else {
            signature.as_str()
        };
        tracing::info!("[{label}] {}", names.join(", "));
    }
}
