use thiserror::Error;

use motio_catalog::CatalogError;

#[derive(Debug, Error)]
pub enum EngineError {
    /// A response's shape did not match its question's input kind. The
    /// input is rejected and the session is left unchanged.
    #[error("invalid response for question '{question_id}': {message}")]
    Validation {
        question_id: String,
        message: String,
    },

    /// An illegal queue or diagnosis-state change. Rejected with no
    /// state mutated.
    #[error("invalid transition: {0}")]
    InvalidTransition(String),

    #[error(transparent)]
    Catalog(#[from] CatalogError),
}
