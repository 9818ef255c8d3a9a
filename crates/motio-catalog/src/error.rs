use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("unknown question: {0}")]
    UnknownQuestion(String),

    #[error("unknown condition: {0}")]
    UnknownCondition(String),
}
