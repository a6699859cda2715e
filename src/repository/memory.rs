use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::models::{Diagnosis, Patient};

use super::{PatientRepository, RepositoryError};

/// In-process patient store for tests and demos.
///
/// The record list sits behind an async `RwLock` so concurrent coordinator
/// operations cannot interleave a structural mutation. Nothing survives
/// the process.
pub struct InMemoryRepository {
    patients: RwLock<Vec<Patient>>,
}

impl InMemoryRepository {
    /// Empty store.
    pub fn new() -> Self {
        Self {
            patients: RwLock::new(Vec::new()),
        }
    }

    /// Store pre-populated with two demo records.
    pub fn seeded() -> Self {
        let patients = vec![
            Patient {
                id: Uuid::new_v4(),
                name: "John Doe".to_string(),
                age: 30,
                contact_number: "123-456-7890".to_string(),
                diagnoses: vec![Diagnosis {
                    id: Uuid::new_v4(),
                    date: Utc::now(),
                    description: "Flu".to_string(),
                    image_data: Vec::new(),
                    treatment_notes: "Rest and hydration".to_string(),
                }],
            },
            Patient {
                id: Uuid::new_v4(),
                name: "Jane Smith".to_string(),
                age: 25,
                contact_number: "987-654-3210".to_string(),
                diagnoses: vec![Diagnosis {
                    id: Uuid::new_v4(),
                    date: Utc::now(),
                    description: "Cold".to_string(),
                    image_data: Vec::new(),
                    treatment_notes: "Take it easy".to_string(),
                }],
            },
        ];

        Self {
            patients: RwLock::new(patients),
        }
    }
}

impl Default for InMemoryRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PatientRepository for InMemoryRepository {
    async fn fetch_all(&self) -> Result<Vec<Patient>, RepositoryError> {
        Ok(self.patients.read().await.clone())
    }

    async fn create(&self, patient: &Patient) -> Result<(), RepositoryError> {
        self.patients.write().await.push(patient.clone());
        Ok(())
    }

    async fn update(&self, patient: &Patient) -> Result<(), RepositoryError> {
        let mut patients = self.patients.write().await;
        match patients.iter_mut().find(|existing| existing.id == patient.id) {
            Some(existing) => {
                *existing = patient.clone();
                Ok(())
            }
            // An unmatched id fails loudly; callers depend on seeing it.
            None => Err(RepositoryError::NotFound(patient.id)),
        }
    }
}
