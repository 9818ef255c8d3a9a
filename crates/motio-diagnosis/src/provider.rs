//! The external diagnostic collaborator.
//!
//! The collaborator is a black-box classifier behind an HTTP JSON
//! endpoint. The trait seam exists so the orchestrator can be driven by
//! a mock in tests and by `HttpDiagnosticClient` in production.

use std::future::Future;
use std::time::Duration;

use tracing::info;

use motio_core::models::diagnosis::{DiagnosticRequest, DiagnosticResult};

use crate::error::DiagnosisError;

pub trait DiagnosticProvider: Send + Sync {
    fn differential(
        &self,
        request: &DiagnosticRequest,
    ) -> impl Future<Output = Result<DiagnosticResult, DiagnosisError>> + Send;
}

/// HTTP client for the diagnostic collaborator service.
pub struct HttpDiagnosticClient {
    base_url: String,
    client: reqwest::Client,
}

impl HttpDiagnosticClient {
    /// Point at a collaborator instance. The timeout bounds the whole
    /// request; a timed-out call surfaces as a collaborator failure and
    /// the orchestrator falls back.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, DiagnosisError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| DiagnosisError::Collaborator(e.to_string()))?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }
}

impl DiagnosticProvider for HttpDiagnosticClient {
    async fn differential(
        &self,
        request: &DiagnosticRequest,
    ) -> Result<DiagnosticResult, DiagnosisError> {
        let url = format!("{}/differential", self.base_url);

        info!(
            url,
            candidates = request.available_conditions.len(),
            max_conditions = request.max_conditions,
            "invoking diagnostic collaborator"
        );

        let response = self
            .client
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(|e| DiagnosisError::Collaborator(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(DiagnosisError::Collaborator(format!(
                "collaborator returned {status}"
            )));
        }

        response
            .json::<DiagnosticResult>()
            .await
            .map_err(|e| DiagnosisError::ResponseParse(e.to_string()))
    }
}
