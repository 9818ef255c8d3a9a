//! The diagnosis orchestrator.
//!
//! The terminal diagnosis step is triggered from several independent
//! asynchronous paths ("all tests completed", "tests skipped", a delayed
//! retry) racing against a debounce timer. Instead of flag-checking,
//! execution is guarded by an explicit state machine:
//!
//! ```text
//! idle ──schedule──▶ scheduled ──timer/run──▶ running ──▶ done
//!   ▲                    │
//!   └──────cancel────────┘
//! ```
//!
//! `scheduled` may be cancelled or re-armed; `running` and `done` may
//! not. Re-arming bumps a generation counter, so a superseded timer that
//! fires late finds its generation stale and does nothing. Once `done`,
//! every further request gets the cached result — the underlying
//! request/fallback logic executes at most once per session.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{Mutex, watch};
use tracing::{info, warn};

use motio_core::models::diagnosis::{DiagnosticRequest, DiagnosticResult};

use crate::error::DiagnosisError;
use crate::fallback;
use crate::provider::DiagnosticProvider;

/// Orchestrator lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Scheduled,
    Running,
    Done,
}

struct State {
    phase: Phase,
    /// Bumped on every arm/cancel/run; stale timers compare and bail.
    generation: u64,
}

struct Inner<P> {
    provider: P,
    state: Mutex<State>,
    done_tx: watch::Sender<Option<Arc<DiagnosticResult>>>,
}

/// One orchestrator per session, cheaply cloneable; every trigger path
/// holds a handle to the same underlying state machine.
pub struct DiagnosisOrchestrator<P> {
    inner: Arc<Inner<P>>,
}

impl<P> Clone for DiagnosisOrchestrator<P> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<P: DiagnosticProvider + 'static> DiagnosisOrchestrator<P> {
    pub fn new(provider: P) -> Self {
        let (done_tx, _) = watch::channel(None);
        Self {
            inner: Arc::new(Inner {
                provider,
                state: Mutex::new(State {
                    phase: Phase::Idle,
                    generation: 0,
                }),
                done_tx,
            }),
        }
    }

    pub async fn phase(&self) -> Phase {
        self.inner.state.lock().await.phase
    }

    /// The delivered result, if the diagnosis has already run.
    pub fn result(&self) -> Option<Arc<DiagnosticResult>> {
        self.inner.done_tx.borrow().clone()
    }

    /// Arm (or re-arm) the debounce timer. Legal only while `idle` or
    /// `scheduled`; an earlier pending timer is superseded.
    pub async fn schedule(
        &self,
        request: DiagnosticRequest,
        delay: Duration,
    ) -> Result<(), DiagnosisError> {
        let mut state = self.inner.state.lock().await;
        match state.phase {
            Phase::Running | Phase::Done => Err(DiagnosisError::InvalidTransition(format!(
                "cannot schedule diagnosis while {:?}",
                state.phase
            ))),
            Phase::Idle | Phase::Scheduled => {
                state.generation += 1;
                state.phase = Phase::Scheduled;
                let armed_generation = state.generation;
                drop(state);

                let inner = Arc::clone(&self.inner);
                tokio::spawn(async move {
                    tokio::time::sleep(delay).await;
                    inner.fire(armed_generation, request).await;
                });
                Ok(())
            }
        }
    }

    /// Disarm a scheduled diagnosis. A no-op while `idle`; illegal once
    /// `running` or `done`.
    pub async fn cancel(&self) -> Result<(), DiagnosisError> {
        let mut state = self.inner.state.lock().await;
        match state.phase {
            Phase::Idle => Ok(()),
            Phase::Scheduled => {
                state.generation += 1;
                state.phase = Phase::Idle;
                Ok(())
            }
            Phase::Running | Phase::Done => Err(DiagnosisError::InvalidTransition(format!(
                "cannot cancel diagnosis while {:?}",
                state.phase
            ))),
        }
    }

    /// Run the diagnosis now (or join the one already running / already
    /// delivered). Every caller observes the same shared result; the
    /// collaborator is invoked at most once per orchestrator.
    pub async fn run(&self, request: DiagnosticRequest) -> Arc<DiagnosticResult> {
        let mut state = self.inner.state.lock().await;
        match state.phase {
            Phase::Running | Phase::Done => {
                drop(state);
                self.inner.await_result().await
            }
            Phase::Idle | Phase::Scheduled => {
                // Supersede any armed timer and take the run ourselves.
                state.generation += 1;
                state.phase = Phase::Running;
                drop(state);
                self.inner.execute_and_complete(request).await
            }
        }
    }
}

impl<P: DiagnosticProvider> Inner<P> {
    /// Timer expiry path. Does nothing unless the orchestrator is still
    /// `scheduled` with the firing timer's generation.
    async fn fire(&self, armed_generation: u64, request: DiagnosticRequest) {
        let mut state = self.state.lock().await;
        if state.phase != Phase::Scheduled || state.generation != armed_generation {
            return;
        }
        state.generation += 1;
        state.phase = Phase::Running;
        drop(state);

        self.execute_and_complete(request).await;
    }

    /// Caller must have transitioned the phase to `running` already.
    async fn execute_and_complete(&self, request: DiagnosticRequest) -> Arc<DiagnosticResult> {
        let result = Arc::new(self.execute(request).await);

        {
            let mut state = self.state.lock().await;
            state.phase = Phase::Done;
        }
        // Publish after the phase flip so a caller that saw `done` is
        // guaranteed a send is imminent or already visible.
        let _ = self.done_tx.send(Some(Arc::clone(&result)));

        info!(
            candidates = result.differential_diagnosis.len(),
            fallback = result.fallback,
            "diagnosis delivered"
        );

        result
    }

    /// Invoke the collaborator, validating its response shape; any
    /// failure resolves to the deterministic fallback ranking. This
    /// never raises.
    async fn execute(&self, request: DiagnosticRequest) -> DiagnosticResult {
        match self.provider.differential(&request).await {
            Ok(result) => match validate_result(result, &request) {
                Ok(valid) => valid,
                Err(e) => {
                    warn!(error = %e, "collaborator response rejected, using fallback");
                    fallback::differential(
                        &request.available_conditions,
                        request.max_conditions as usize,
                    )
                }
            },
            Err(e) => {
                warn!(error = %e, "collaborator call failed, using fallback");
                fallback::differential(
                    &request.available_conditions,
                    request.max_conditions as usize,
                )
            }
        }
    }

    async fn await_result(&self) -> Arc<DiagnosticResult> {
        let mut rx = self.done_tx.subscribe();
        loop {
            if let Some(result) = rx.borrow_and_update().as_ref() {
                return Arc::clone(result);
            }
            // The sender lives inside `self`, which the caller borrows.
            rx.changed()
                .await
                .expect("diagnosis watch closed while a caller was waiting");
        }
    }
}

/// Validate the collaborator's response shape: a non-empty ranking whose
/// entries all reference real catalog candidates and carry sane
/// confidences. Returns the ranking sorted descending by confidence and
/// truncated to `max_conditions`.
fn validate_result(
    mut result: DiagnosticResult,
    request: &DiagnosticRequest,
) -> Result<DiagnosticResult, DiagnosisError> {
    if result.differential_diagnosis.is_empty() {
        return Err(DiagnosisError::SchemaViolation(
            "empty differential ranking".to_string(),
        ));
    }

    for entry in &result.differential_diagnosis {
        if !request
            .available_conditions
            .iter()
            .any(|c| c.id == entry.condition_id)
        {
            return Err(DiagnosisError::SchemaViolation(format!(
                "'{}' is not a catalog candidate",
                entry.condition_id
            )));
        }
        if !(0.0..=1.0).contains(&entry.confidence_score) {
            return Err(DiagnosisError::SchemaViolation(format!(
                "confidence {} for '{}' is outside 0..=1",
                entry.confidence_score, entry.condition_id
            )));
        }
    }

    result.differential_diagnosis.sort_by(|a, b| {
        b.confidence_score
            .partial_cmp(&a.confidence_score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    result
        .differential_diagnosis
        .truncate(request.max_conditions as usize);
    result.fallback = false;

    Ok(result)
}
