//! motio-catalog
//!
//! Static clinical reference data. Pure data — no I/O, no engine logic.
//! Question templates with their activation pathways, per-body-region
//! reference tables, and the condition catalog used as diagnostic
//! candidates. Everything here is immutable and safely shared across
//! concurrent sessions.

pub mod conditions;
pub mod error;
pub mod questions;
pub mod regions;

pub use error::CatalogError;
