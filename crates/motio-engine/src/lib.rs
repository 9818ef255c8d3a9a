//! motio-engine
//!
//! The synchronous half of the clinical assessment decision engine:
//! the adaptive-interview state machine, red-flag and referred-pain
//! evaluators, the physical-test queue, and the final record builder.
//!
//! Every call here is a plain state-updating function over an owned
//! `Session`; nothing blocks, nothing is async. The only suspension
//! point in the subsystem lives in `motio-diagnosis`.

pub mod error;
pub mod interview;
pub mod queue;
pub mod record;
pub mod red_flags;
pub mod referral;

pub use error::EngineError;
