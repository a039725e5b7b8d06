//! Driver task: serializes every state mutation for one engine
//!
//! One driver runs per engine. It waits for a trigger, runs at most one
//! fetch to completion while rejecting every trigger that arrives in the
//! meantime, then integrates the outcome and publishes the derived state.

use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{debug, warn};

use super::outputs::OutputChannels;
use super::state::EngineState;
use crate::error::Error;
use crate::fetch::{FetchFuture, SharedFetch};
use crate::strategy::{Paged, PagingStrategy};
use crate::types::TriggerKind;

/// Whole-list deduplication pass applied after assembly
pub(crate) type DedupeFn<T> = Box<dyn Fn(Vec<T>) -> Vec<T> + Send>;

/// A trigger queued from an engine handle
pub(crate) struct Trigger<I> {
    pub(crate) kind: TriggerKind,
    pub(crate) input: I,
}

pub(crate) struct Driver<I, S: PagingStrategy> {
    strategy: S,
    fetch: SharedFetch<I, S::Request, S::Response>,
    limit: Option<usize>,
    dedupe: Option<DedupeFn<S::Item>>,
    state: EngineState<S::Response, S::Descriptor>,
    outputs: Arc<OutputChannels<S::Item, S::Response>>,
    triggers: mpsc::UnboundedReceiver<Trigger<I>>,
}

impl<I, S> Driver<I, S>
where
    I: Send + 'static,
    S: PagingStrategy,
{
    pub(crate) fn new(
        strategy: S,
        fetch: SharedFetch<I, S::Request, S::Response>,
        limit: Option<usize>,
        dedupe: Option<DedupeFn<S::Item>>,
        outputs: Arc<OutputChannels<S::Item, S::Response>>,
        triggers: mpsc::UnboundedReceiver<Trigger<I>>,
    ) -> Self {
        Self {
            strategy,
            fetch,
            limit,
            dedupe,
            state: EngineState::new(),
            outputs,
            triggers,
        }
    }

    /// Event loop: one iteration per fetch cycle
    ///
    /// Exits when every engine handle has been dropped; an in-flight fetch
    /// still runs to completion and is integrated first.
    pub(crate) async fn run(mut self) {
        debug!("pagination driver started");

        loop {
            let Some(trigger) = self.triggers.recv().await else {
                break;
            };

            let Some(mut pending_fetch) = self.accept(trigger) else {
                continue;
            };

            let mut closed = false;
            let outcome = loop {
                tokio::select! {
                    outcome = pending_fetch.as_mut() => break outcome,
                    maybe = self.triggers.recv(), if !closed => match maybe {
                        Some(rejected) => {
                            debug!(trigger = %rejected.kind, "trigger rejected: fetch in flight");
                            self.emit_error(Error::not_enabled(rejected.kind));
                        }
                        None => closed = true,
                    },
                }
            };

            self.complete(outcome);

            if closed {
                break;
            }
        }

        debug!("pagination driver stopped");
    }

    /// Validate a trigger and start its fetch; `None` means it was rejected
    fn accept(&mut self, trigger: Trigger<I>) -> Option<FetchFuture<S::Response>> {
        let Trigger { kind, input } = trigger;

        let request = match kind {
            TriggerKind::Reload => {
                // Direction state resets at acceptance, before the fetch runs.
                self.state.next = None;
                self.state.previous = None;
                self.outputs.has_next.send_replace(true);
                self.outputs.has_previous.send_replace(false);
                self.strategy.reload_request(self.limit)
            }
            TriggerKind::Next => match self.state.next.as_ref() {
                Some(descriptor) => self.strategy.next_request(descriptor),
                None => {
                    debug!("next trigger rejected: no next page available");
                    self.emit_error(Error::not_enabled(kind));
                    return None;
                }
            },
            TriggerKind::Previous => match self.state.previous.as_ref() {
                Some(descriptor) => self.strategy.previous_request(descriptor),
                None => {
                    debug!("previous trigger rejected: no previous page available");
                    self.emit_error(Error::not_enabled(kind));
                    return None;
                }
            },
        };

        debug!(trigger = %kind, "trigger accepted");
        self.state.pending = Some(kind);
        self.outputs.in_flight.send_replace(true);

        let fetch = Arc::clone(&self.fetch);
        Some(Box::pin(async move { fetch.fetch(input, request).await }))
    }

    /// Fold a fetch outcome back into the state and publish the results
    fn complete(&mut self, outcome: anyhow::Result<S::Response>) {
        let Some(trigger) = self.state.pending.take() else {
            warn!("fetch completed with no pending trigger");
            return;
        };

        match outcome {
            Ok(response) => self.integrate(trigger, response),
            Err(cause) => {
                warn!(trigger = %trigger, error = %cause, "fetch failed");
                self.outputs.in_flight.send_replace(false);
                self.emit_error(Error::underlying(cause));
            }
        }
    }

    fn integrate(&mut self, trigger: TriggerKind, response: S::Response) {
        debug!(
            trigger = %trigger,
            count = response.items().len(),
            "integrating response"
        );

        self.state.next = self.strategy.next_descriptor(&response);
        self.state.previous = self.strategy.previous_descriptor(&response);

        let page_items = response.items().to_vec();
        self.state.integrate(trigger, response.clone());

        let mut all_items = self.strategy.assemble(&self.state.responses);
        if let Some(dedupe) = &self.dedupe {
            all_items = dedupe(all_items);
        }

        // in_flight is always the last emission of a cycle.
        self.outputs.latest_response.send_replace(Some(response));
        let _ = self.outputs.items.send(page_items);
        self.outputs.all_items.send_replace(all_items);
        self.outputs.has_next.send_replace(self.state.next.is_some());
        self.outputs
            .has_previous
            .send_replace(self.state.previous.is_some());
        self.outputs.in_flight.send_replace(false);
    }

    fn emit_error(&self, error: Error) {
        let _ = self.outputs.errors.send(error);
    }
}
