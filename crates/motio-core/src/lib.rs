//! motio-core
//!
//! Pure domain types for the clinical assessment decision engine.
//! No I/O and no async — this is the shared vocabulary of the Motio system.

pub mod error;
pub mod models;
