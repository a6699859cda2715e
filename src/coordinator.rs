//! Sync coordination between observers and the patient repository.
//!
//! `SyncCoordinator` owns the canonical in-process patient list. Every
//! mutation goes through the repository first; the cache follows. UI-side
//! collaborators read atomic snapshots, by polling or by subscription.
//! Repository failures never reach the caller as a result: they land in
//! `last_error` on the published snapshot, with `loading` reset.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{mpsc, Mutex, RwLock};

use crate::config;
use crate::models::Patient;
use crate::repository::{PatientRepository, RepositoryError};

// ═══════════════════════════════════════════════════════════
// Snapshot
// ═══════════════════════════════════════════════════════════

/// One complete view of coordinator state.
///
/// Built whole and swapped in a single write, so an observer never sees
/// `loading == false` paired with a list from a still-in-flight fetch.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PatientsSnapshot {
    pub patients: Vec<Patient>,
    pub loading: bool,
    pub last_error: Option<RepositoryError>,
}

// ═══════════════════════════════════════════════════════════
// SyncCoordinator
// ═══════════════════════════════════════════════════════════

/// Mediates cache consistency between observers and the repository.
///
/// The concrete repository is injected at construction. Mutating
/// operations serialize through one async mutex, so concurrent calls
/// cannot interleave a partial cache write; subscribers sit behind a
/// separate `std::sync::Mutex` because registration and publish only need
/// brief exclusive access.
pub struct SyncCoordinator {
    repository: Arc<dyn PatientRepository>,
    state: RwLock<PatientsSnapshot>,
    op_guard: Mutex<()>,
    subscribers: std::sync::Mutex<Vec<mpsc::UnboundedSender<PatientsSnapshot>>>,
    call_timeout: Duration,
}

impl SyncCoordinator {
    /// Coordinator over `repository` with the configured call timeout.
    pub fn new(repository: Arc<dyn PatientRepository>) -> Self {
        Self::with_call_timeout(repository, config::request_timeout())
    }

    /// Coordinator with an explicit per-repository-call timeout.
    pub fn with_call_timeout(
        repository: Arc<dyn PatientRepository>,
        call_timeout: Duration,
    ) -> Self {
        Self {
            repository,
            state: RwLock::new(PatientsSnapshot::default()),
            op_guard: Mutex::new(()),
            subscribers: std::sync::Mutex::new(Vec::new()),
            call_timeout,
        }
    }

    // ── Observation ─────────────────────────────────────────

    /// Current state, polled.
    pub async fn snapshot(&self) -> PatientsSnapshot {
        self.state.read().await.clone()
    }

    /// Register an observer. The receiver gets every snapshot published
    /// from this point on; dropping it unregisters on the next publish.
    pub fn subscribe(&self) -> mpsc::UnboundedReceiver<PatientsSnapshot> {
        let (tx, rx) = mpsc::unbounded_channel();
        self.lock_subscribers().push(tx);
        rx
    }

    fn lock_subscribers(
        &self,
    ) -> std::sync::MutexGuard<'_, Vec<mpsc::UnboundedSender<PatientsSnapshot>>> {
        // Holders never panic while registered, so poisoning cannot
        // actually occur; recover rather than propagate if it ever does.
        self.subscribers
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Swap in `next` as the canonical snapshot and fan it out.
    async fn publish(&self, next: PatientsSnapshot) {
        *self.state.write().await = next.clone();
        self.lock_subscribers()
            .retain(|tx| tx.send(next.clone()).is_ok());
    }

    /// Record a failure on the snapshot without touching the patient list.
    async fn surface_error(&self, err: RepositoryError) {
        let mut next = self.state.read().await.clone();
        next.loading = false;
        next.last_error = Some(err);
        self.publish(next).await;
    }

    /// Repository call with the coordinator's per-call timeout applied.
    async fn with_timeout<T>(
        &self,
        call: impl std::future::Future<Output = Result<T, RepositoryError>>,
    ) -> Result<T, RepositoryError> {
        match tokio::time::timeout(self.call_timeout, call).await {
            Ok(result) => result,
            Err(_) => Err(RepositoryError::Network(format!(
                "repository call timed out after {:?}",
                self.call_timeout
            ))),
        }
    }

    // ── Mutations ───────────────────────────────────────────

    /// Refresh the cache from the repository.
    ///
    /// Publishes `loading == true` up front; on success the fetched list
    /// replaces the cache with `loading` reset and `last_error` cleared,
    /// on failure the prior list stays and the error is surfaced.
    pub async fn fetch_all(&self) {
        let _guard = self.op_guard.lock().await;

        let mut loading = self.state.read().await.clone();
        loading.loading = true;
        self.publish(loading).await;

        match self.with_timeout(self.repository.fetch_all()).await {
            Ok(patients) => {
                tracing::info!(count = patients.len(), "Patient list refreshed");
                self.publish(PatientsSnapshot {
                    patients,
                    loading: false,
                    last_error: None,
                })
                .await;
            }
            Err(err) => {
                tracing::warn!("Patient fetch failed: {err}");
                self.surface_error(err).await;
            }
        }
    }

    /// Create `patient` in the repository, then re-fetch the canonical
    /// list rather than trusting the local object.
    pub async fn add(&self, patient: Patient) {
        let _guard = self.op_guard.lock().await;

        if let Err(err) = self.with_timeout(self.repository.create(&patient)).await {
            tracing::warn!(patient_id = %patient.id, "Patient create failed: {err}");
            self.surface_error(err).await;
            return;
        }

        match self.with_timeout(self.repository.fetch_all()).await {
            Ok(patients) => {
                tracing::info!(patient_id = %patient.id, "Patient created");
                self.publish(PatientsSnapshot {
                    patients,
                    loading: false,
                    last_error: None,
                })
                .await;
            }
            Err(err) => {
                tracing::warn!(patient_id = %patient.id, "Re-fetch after create failed: {err}");
                self.surface_error(err).await;
            }
        }
    }

    /// Replace the repository record matching `patient.id`, then mirror
    /// the replacement into the cache in place.
    pub async fn update(&self, patient: Patient) {
        let _guard = self.op_guard.lock().await;

        if let Err(err) = self.with_timeout(self.repository.update(&patient)).await {
            tracing::warn!(patient_id = %patient.id, "Patient update failed: {err}");
            self.surface_error(err).await;
            return;
        }

        let mut next = self.state.read().await.clone();
        match next.patients.iter_mut().find(|existing| existing.id == patient.id) {
            Some(existing) => *existing = patient,
            // The cache can lag the repository; the next fetch reconciles.
            None => tracing::debug!(patient_id = %patient.id, "Updated patient not in cache"),
        }
        next.last_error = None;
        self.publish(next).await;
    }
}
