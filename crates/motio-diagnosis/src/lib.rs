//! motio-diagnosis
//!
//! Differential-diagnosis orchestration: request assembly, the external
//! collaborator call, the deterministic fallback ranking, and the
//! single-execution state machine that guards the terminal diagnosis
//! step. This crate owns the subsystem's only suspension point.

pub mod error;
pub mod fallback;
pub mod orchestrator;
pub mod provider;
pub mod request;

pub use error::DiagnosisError;
pub use orchestrator::{DiagnosisOrchestrator, Phase};
pub use provider::{DiagnosticProvider, HttpDiagnosticClient};
