//! Bookkeeping owned by the driver between fetch cycles

use crate::types::TriggerKind;

/// Accumulation and direction state for one engine
///
/// Owned exclusively by the driver task; handles observe it only through
/// the output channels.
#[derive(Debug)]
pub(crate) struct EngineState<R, D> {
    /// Trigger being serviced by the in-flight fetch, if any
    pub(crate) pending: Option<TriggerKind>,
    /// Raw responses in integration order
    pub(crate) responses: Vec<R>,
    /// Descriptor for the page after the latest response
    pub(crate) next: Option<D>,
    /// Descriptor for the page before the latest response
    pub(crate) previous: Option<D>,
}

impl<R, D> EngineState<R, D> {
    /// Quiescent state: nothing pending, nothing accumulated
    pub(crate) fn new() -> Self {
        Self {
            pending: None,
            responses: Vec::new(),
            next: None,
            previous: None,
        }
    }

    /// Store a response according to the trigger that produced it
    ///
    /// Reload replaces the accumulation, next appends, previous prepends.
    pub(crate) fn integrate(&mut self, trigger: TriggerKind, response: R) {
        match trigger {
            TriggerKind::Reload => {
                self.responses.clear();
                self.responses.push(response);
            }
            TriggerKind::Next => self.responses.push(response),
            TriggerKind::Previous => self.responses.insert(0, response),
        }
    }
}
