use thiserror::Error;

#[derive(Debug, Error)]
pub enum DiagnosisError {
    /// Network-level collaborator failure. Recovered via the fallback
    /// ranking — never surfaced as a hard failure by the orchestrator.
    #[error("collaborator call failed: {0}")]
    Collaborator(String),

    #[error("response parsing failed: {0}")]
    ResponseParse(String),

    #[error("response did not conform to expected schema: {0}")]
    SchemaViolation(String),

    /// An illegal orchestrator state change (e.g. scheduling after the
    /// diagnosis already ran). Rejected with no state mutated.
    #[error("invalid transition: {0}")]
    InvalidTransition(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
