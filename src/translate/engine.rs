//! translate::engine
//!
//! Call surface of the graph-mutation engine used by direct handlers.
//!
//! # Design
//!
//! The engine that actually rewrites the simulated repository lives outside
//! this crate. Direct handlers reach it only through [`ExecutionEngine`], and
//! only after every validation for the line has passed, so a rejected line
//! never leaves partial effects behind.
//!
//! [`RecordingEngine`] is a deterministic implementation that records calls
//! instead of mutating anything. The CLI uses it to show what a direct
//! command would do, and tests use it to assert on calls or inject failures.
//!
//! # Example
//!
//! ```
//! use hgshim::translate::engine::{EngineCall, ExecutionEngine, RecordingEngine};
//!
//! let mut engine = RecordingEngine::new();
//! engine.hg_rebase("C3", "HEAD").unwrap();
//! assert_eq!(
//!     engine.calls(),
//!     &[EngineCall::HgRebase { destination: "C3".into(), base: "HEAD".into() }]
//! );
//! ```

use serde::Serialize;
use thiserror::Error;

/// Errors reported by the execution engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("engine rejected operation: {0}")]
    Rejected(String),
}

/// Direct-effect operations offered by the execution engine.
pub trait ExecutionEngine {
    /// Move the branch containing `base` onto `destination`.
    fn hg_rebase(&mut self, destination: &str, base: &str) -> Result<(), EngineError>;
}

/// A recorded engine call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum EngineCall {
    HgRebase { destination: String, base: String },
}

impl std::fmt::Display for EngineCall {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EngineCall::HgRebase { destination, base } => {
                write!(f, "rebase {} onto {}", base, destination)
            }
        }
    }
}

/// Engine that records calls without touching any repository.
#[derive(Debug, Clone, Default)]
pub struct RecordingEngine {
    calls: Vec<EngineCall>,
    fail_with: Option<String>,
}

impl RecordingEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// An engine that rejects every call with the given reason.
    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            calls: Vec::new(),
            fail_with: Some(reason.into()),
        }
    }

    pub fn calls(&self) -> &[EngineCall] {
        &self.calls
    }

    /// Drain the recorded calls.
    pub fn take_calls(&mut self) -> Vec<EngineCall> {
        std::mem::take(&mut self.calls)
    }

    fn record(&mut self, call: EngineCall) -> Result<(), EngineError> {
        if let Some(reason) = &self.fail_with {
            return Err(EngineError::Rejected(reason.clone()));
        }
        self.calls.push(call);
        Ok(())
    }
}

impl ExecutionEngine for RecordingEngine {
    fn hg_rebase(&mut self, destination: &str, base: &str) -> Result<(), EngineError> {
        self.record(EngineCall::HgRebase {
            destination: destination.to_string(),
            base: base.to_string(),
        })
    }
}
