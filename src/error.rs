//! Error types for the simulation kernel.
//!
//! The kernel distinguishes configuration faults (fail fast at construction)
//! from manager-level faults (calling the narrow host API out of its allowed
//! state). Illegal transitions inside the event loop are *not* represented
//! here — per the allocator/dispatch design they are boolean no-ops that are
//! logged and otherwise ignored, never propagated as errors.

/// A configuration value was out of range at `Engine::new`.
#[derive(Debug, Clone, thiserror::Error)]
#[error("invalid config field `{field}`: {reason}")]
pub struct ConfigError {
    pub field: &'static str,
    pub reason: String,
}

impl ConfigError {
    pub(crate) fn new(field: &'static str, reason: impl Into<String>) -> Self {
        Self {
            field,
            reason: reason.into(),
        }
    }
}

/// Errors surfaced by the narrow host-facing API (§6).
///
/// These are distinct from `ConfigError`: they describe calling the engine
/// out of its allowed lifecycle state, not a bad `Config`.
#[derive(Debug, Clone, thiserror::Error)]
pub enum EngineError {
    #[error("cannot start: engine is already in state {0:?}")]
    AlreadyStarted(crate::engine::SimState),

    #[error("cannot pause: engine is not running (state {0:?})")]
    NotRunning(crate::engine::SimState),

    #[error("cannot resume: engine is not paused (state {0:?})")]
    NotPaused(crate::engine::SimState),

    #[error("invalid config: {0}")]
    Config(#[from] ConfigError),
}
