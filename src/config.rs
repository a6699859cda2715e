use std::time::Duration;

/// Application-level constants
pub const APP_NAME: &str = "Clinica";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Fallback per-request timeout when the environment does not set one.
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Default tracing filter when RUST_LOG is unset.
pub fn default_log_filter() -> String {
    format!("info,{}=debug", env!("CARGO_PKG_NAME"))
}

/// Base endpoint of the remote patient service, from `CLINICA_SERVICE_URL`.
///
/// `None` means no remote endpoint is configured; callers fall back to the
/// in-memory repository.
pub fn service_url() -> Option<String> {
    std::env::var("CLINICA_SERVICE_URL")
        .ok()
        .filter(|url| !url.trim().is_empty())
}

/// Per-request timeout, from `CLINICA_REQUEST_TIMEOUT_SECS`.
pub fn request_timeout() -> Duration {
    let secs = std::env::var("CLINICA_REQUEST_TIMEOUT_SECS")
        .ok()
        .and_then(|raw| raw.parse().ok())
        .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS);
    Duration::from_secs(secs)
}
