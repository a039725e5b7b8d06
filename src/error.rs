//! Error types for pagekit
//!
//! The engine never raises past its own boundary: every failure is delivered
//! as a value on the `errors` output channel, and the engine stays usable
//! afterwards. `Error` is `Clone` (the underlying cause is shared behind an
//! `Arc`) so the same failure can reach every subscriber.

use crate::types::TriggerKind;
use std::sync::Arc;
use thiserror::Error;

/// A classified pagination failure
#[derive(Error, Debug, Clone)]
pub enum Error {
    // ============================================================================
    // Trigger Errors
    // ============================================================================
    /// The trigger was illegal in the current state: a fetch was already in
    /// flight, or no descriptor exists for the requested direction.
    #[error("{trigger} trigger not enabled in the current state")]
    NotEnabled {
        /// The trigger that was rejected
        trigger: TriggerKind,
    },

    // ============================================================================
    // Fetch Errors
    // ============================================================================
    /// The fetch collaborator failed; the cause is surfaced verbatim.
    #[error("underlying fetch error: {cause}")]
    Underlying {
        /// The failure reported by the fetch collaborator
        cause: Arc<anyhow::Error>,
    },
}

impl Error {
    /// Create a rejected-trigger error
    pub fn not_enabled(trigger: TriggerKind) -> Self {
        Self::NotEnabled { trigger }
    }

    /// Create an error wrapping a fetch failure
    pub fn underlying(cause: anyhow::Error) -> Self {
        Self::Underlying {
            cause: Arc::new(cause),
        }
    }

    /// Check if this is a rejected-trigger error
    pub fn is_not_enabled(&self) -> bool {
        matches!(self, Self::NotEnabled { .. })
    }

    /// Check if this is a fetch failure
    pub fn is_underlying(&self) -> bool {
        matches!(self, Self::Underlying { .. })
    }

    /// The trigger a rejected-trigger error refers to
    pub fn trigger(&self) -> Option<TriggerKind> {
        match self {
            Self::NotEnabled { trigger } => Some(*trigger),
            Self::Underlying { .. } => None,
        }
    }

    /// The cause carried by a fetch failure
    pub fn underlying_cause(&self) -> Option<&anyhow::Error> {
        match self {
            Self::Underlying { cause } => Some(cause),
            Self::NotEnabled { .. } => None,
        }
    }
}
