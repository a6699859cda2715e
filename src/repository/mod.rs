//! Storage abstraction over patient records.
//!
//! `PatientRepository` is the CRUD contract; concrete stores (the remote
//! HTTP service, the in-memory list) are picked at construction time by
//! whoever wires the application together, never by runtime inspection.

pub mod memory;
pub mod remote;

pub use memory::*;
pub use remote::*;

use async_trait::async_trait;
use uuid::Uuid;

use crate::models::Patient;

/// Errors from patient repository operations.
///
/// Variants carry owned detail (strings, status codes) so the error stays
/// `Clone` for the coordinator's observable error channel.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RepositoryError {
    #[error("Network failure: {0}")]
    Network(String),
    #[error("Unexpected response status {0}")]
    InvalidResponse(u16),
    #[error("Malformed patient payload: {0}")]
    Decode(String),
    #[error("No patient with id {0}")]
    NotFound(Uuid),
}

/// CRUD contract over patient records.
#[async_trait]
pub trait PatientRepository: Send + Sync {
    /// Return the full current record set.
    async fn fetch_all(&self) -> Result<Vec<Patient>, RepositoryError>;

    /// Submit a new record. The caller supplies the id; keeping ids unique
    /// across the record set is the repository's side of the contract.
    async fn create(&self, patient: &Patient) -> Result<(), RepositoryError>;

    /// Replace the record whose id matches `patient.id`.
    ///
    /// Fails with [`RepositoryError::NotFound`] when no such record
    /// exists. Implementations must not swallow an unmatched id.
    async fn update(&self, patient: &Patient) -> Result<(), RepositoryError>;
}
