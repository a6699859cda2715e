use async_trait::async_trait;

use crate::models::Patient;

use super::{PatientRepository, RepositoryError};

/// HTTP client for the clinic's patient service.
///
/// The REST surface is small: GET and POST on `/patients`, PUT on
/// `/patients/{id}`. Any status outside the expected success code for an
/// operation surfaces as [`RepositoryError::InvalidResponse`] carrying the
/// observed code.
pub struct RemoteRepository {
    base_url: String,
    client: reqwest::Client,
    timeout_secs: u64,
}

impl RemoteRepository {
    /// Create a repository against `base_url` with a per-request timeout.
    pub fn new(base_url: &str, timeout_secs: u64) -> Self {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(timeout_secs))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
            timeout_secs,
        }
    }

    fn transport_error(&self, err: reqwest::Error) -> RepositoryError {
        if err.is_connect() {
            RepositoryError::Network(format!("cannot reach {}", self.base_url))
        } else if err.is_timeout() {
            RepositoryError::Network(format!(
                "request timed out after {}s",
                self.timeout_secs
            ))
        } else {
            RepositoryError::Network(err.to_string())
        }
    }
}

#[async_trait]
impl PatientRepository for RemoteRepository {
    async fn fetch_all(&self) -> Result<Vec<Patient>, RepositoryError> {
        let url = format!("{}/patients", self.base_url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = response.status();
        if status != reqwest::StatusCode::OK {
            return Err(RepositoryError::InvalidResponse(status.as_u16()));
        }

        response
            .json::<Vec<Patient>>()
            .await
            .map_err(|e| RepositoryError::Decode(e.to_string()))
    }

    async fn create(&self, patient: &Patient) -> Result<(), RepositoryError> {
        let url = format!("{}/patients", self.base_url);

        let response = self
            .client
            .post(&url)
            .json(patient)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = response.status();
        if status != reqwest::StatusCode::CREATED {
            return Err(RepositoryError::InvalidResponse(status.as_u16()));
        }
        Ok(())
    }

    async fn update(&self, patient: &Patient) -> Result<(), RepositoryError> {
        let url = format!("{}/patients/{}", self.base_url, patient.id);

        let response = self
            .client
            .put(&url)
            .json(patient)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = response.status();
        if status == reqwest::StatusCode::OK {
            Ok(())
        } else if status == reqwest::StatusCode::NOT_FOUND {
            // The service reports an unmatched id as 404; keep that
            // distinct from other unexpected statuses.
            Err(RepositoryError::NotFound(patient.id))
        } else {
            Err(RepositoryError::InvalidResponse(status.as_u16()))
        }
    }
}
