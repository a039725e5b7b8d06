//! Pagination engine
//!
//! # Overview
//!
//! The engine module provides:
//! - [`PagingEngine`] - cloneable handle: fire-and-forget triggers plus
//!   output subscriptions
//! - [`EngineBuilder`] - configures limit and deduplication, spawns the
//!   driver task
//! - [`OffsetEngine`] / [`PageNumberEngine`] / [`CursorEngine`] - aliases
//!   with a ready-made builder per built-in strategy
//!
//! All state lives in a driver task spawned by [`EngineBuilder::build`].
//! Handles communicate with it over channels only, so every mutation is
//! serialized: at most one fetch is in flight per engine, and triggers that
//! arrive during a fetch are rejected, never queued.

mod driver;
mod outputs;
mod state;


use std::fmt;
use std::hash::Hash;
use std::sync::Arc;

use tokio::sync::{broadcast, mpsc, watch};

use self::driver::{DedupeFn, Driver, Trigger};
use self::outputs::OutputChannels;
use crate::dedup::dedupe_by;
use crate::error::Error;
use crate::fetch::{PageFetch, SharedFetch};
use crate::strategy::{
    CursorResponse, CursorStrategy, OffsetResponse, OffsetStrategy, PageNumberResponse,
    PageNumberStrategy, PagingStrategy, RequestCursor, RequestOffset, RequestPage,
};
use crate::types::TriggerKind;

// ============================================================================
// Engine Handle
// ============================================================================

/// Cloneable handle to a running pagination engine
///
/// Triggers are fire-and-forget: they return immediately, and rejections
/// surface on the [`PagingEngine::errors`] output instead of a return
/// value. Clones share the driver; the driver stops once every clone has
/// been dropped, after completing any fetch still in flight.
pub struct PagingEngine<I, S: PagingStrategy> {
    triggers: mpsc::UnboundedSender<Trigger<I>>,
    outputs: Arc<OutputChannels<S::Item, S::Response>>,
}

impl<I, S: PagingStrategy> PagingEngine<I, S> {
    // ===== Triggers =====

    /// Restart pagination from the first page
    pub fn reload(&self, input: I) {
        self.send(TriggerKind::Reload, input);
    }

    /// Fetch the page after the most recently integrated response
    pub fn next(&self, input: I) {
        self.send(TriggerKind::Next, input);
    }

    /// Fetch the page before the most recently integrated response
    ///
    /// Strategies without a previous direction reject this trigger with
    /// [`Error::NotEnabled`].
    pub fn previous(&self, input: I) {
        self.send(TriggerKind::Previous, input);
    }

    fn send(&self, kind: TriggerKind, input: I) {
        // Failing means the driver is gone; nothing left to notify.
        let _ = self.triggers.send(Trigger { kind, input });
    }

    // ===== Outputs =====

    /// Watch the assembled accumulation of all integrated pages
    pub fn all_items(&self) -> watch::Receiver<Vec<S::Item>> {
        self.outputs.all_items.subscribe()
    }

    /// Watch whether a fetch is currently in flight
    pub fn in_flight(&self) -> watch::Receiver<bool> {
        self.outputs.in_flight.subscribe()
    }

    /// Watch whether a next page is currently available
    pub fn has_next(&self) -> watch::Receiver<bool> {
        self.outputs.has_next.subscribe()
    }

    /// Watch whether a previous page is currently available
    pub fn has_previous(&self) -> watch::Receiver<bool> {
        self.outputs.has_previous.subscribe()
    }

    /// Watch the most recently integrated raw response
    pub fn latest_response(&self) -> watch::Receiver<Option<S::Response>> {
        self.outputs.latest_response.subscribe()
    }

    /// Subscribe to per-integration page items
    ///
    /// Each event carries only the items of the response that was just
    /// integrated, unlike [`Self::all_items`]. Only events emitted after
    /// subscribing are observed.
    pub fn items(&self) -> broadcast::Receiver<Vec<S::Item>> {
        self.outputs.items.subscribe()
    }

    /// Subscribe to classified failures
    ///
    /// Only failures emitted after subscribing are observed.
    pub fn errors(&self) -> broadcast::Receiver<Error> {
        self.outputs.errors.subscribe()
    }

    // ===== Snapshots =====

    /// Current accumulated items, without subscribing
    pub fn current_items(&self) -> Vec<S::Item> {
        self.outputs.all_items.borrow().clone()
    }

    /// Whether a fetch is in flight right now
    pub fn is_in_flight(&self) -> bool {
        *self.outputs.in_flight.borrow()
    }
}

impl<I, S: PagingStrategy> Clone for PagingEngine<I, S> {
    fn clone(&self) -> Self {
        Self {
            triggers: self.triggers.clone(),
            outputs: Arc::clone(&self.outputs),
        }
    }
}

impl<I, S: PagingStrategy> fmt::Debug for PagingEngine<I, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PagingEngine")
            .field("in_flight", &self.is_in_flight())
            .finish_non_exhaustive()
    }
}

// ============================================================================
// Builder
// ============================================================================

/// Builder for a [`PagingEngine`]
pub struct EngineBuilder<I, S: PagingStrategy> {
    strategy: S,
    fetch: SharedFetch<I, S::Request, S::Response>,
    limit: Option<usize>,
    dedupe: Option<DedupeFn<S::Item>>,
}

impl<I, S> EngineBuilder<I, S>
where
    I: Send + 'static,
    S: PagingStrategy,
{
    /// Create a builder from a strategy and a fetch collaborator
    pub fn new(
        strategy: S,
        fetch: impl PageFetch<I, S::Request, Response = S::Response> + 'static,
    ) -> Self {
        Self {
            strategy,
            fetch: Arc::new(fetch),
            limit: None,
            dedupe: None,
        }
    }

    /// Set the page size requested on reload
    ///
    /// Without a limit, reload requests carry no page size and the fetch
    /// collaborator picks one.
    #[must_use]
    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Deduplicate the accumulated list by the given key
    ///
    /// Applied to the assembled list after every integration; the first
    /// occurrence of each key survives.
    #[must_use]
    pub fn dedupe_by<K, F>(mut self, key_of: F) -> Self
    where
        K: Hash + Eq,
        F: Fn(&S::Item) -> K + Send + 'static,
    {
        self.dedupe = Some(Box::new(move |items| dedupe_by(items, &key_of)));
        self
    }

    /// Spawn the driver task and return the engine handle
    ///
    /// Must be called from within a Tokio runtime.
    pub fn build(self) -> PagingEngine<I, S> {
        let outputs = Arc::new(OutputChannels::new());
        let (triggers, receiver) = mpsc::unbounded_channel();

        let driver = Driver::new(
            self.strategy,
            self.fetch,
            self.limit,
            self.dedupe,
            Arc::clone(&outputs),
            receiver,
        );
        tokio::spawn(driver.run());

        PagingEngine { triggers, outputs }
    }
}

// ============================================================================
// Per-Strategy Entry Points
// ============================================================================

/// Engine specialized to the offset strategy
pub type OffsetEngine<I, R> = PagingEngine<I, OffsetStrategy<R>>;

/// Engine specialized to the page-number strategy
pub type PageNumberEngine<I, R> = PagingEngine<I, PageNumberStrategy<R>>;

/// Engine specialized to the cursor strategy
pub type CursorEngine<I, R> = PagingEngine<I, CursorStrategy<R>>;

impl<I, R> OffsetEngine<I, R>
where
    I: Send + 'static,
    R: OffsetResponse + Clone + Send + Sync + 'static,
    R::Item: Clone + Send + Sync + 'static,
{
    /// Builder for an engine paginating by offset and limit
    pub fn builder(
        fetch: impl PageFetch<I, Option<RequestOffset>, Response = R> + 'static,
    ) -> EngineBuilder<I, OffsetStrategy<R>> {
        EngineBuilder::new(OffsetStrategy::new(), fetch)
    }
}

impl<I, R> PageNumberEngine<I, R>
where
    I: Send + 'static,
    R: PageNumberResponse + Clone + Send + Sync + 'static,
    R::Item: Clone + Send + Sync + 'static,
{
    /// Builder for an engine paginating by page number
    pub fn builder(
        fetch: impl PageFetch<I, Option<RequestPage>, Response = R> + 'static,
    ) -> EngineBuilder<I, PageNumberStrategy<R>> {
        EngineBuilder::new(PageNumberStrategy::new(), fetch)
    }
}

impl<I, R> CursorEngine<I, R>
where
    I: Send + 'static,
    R: CursorResponse + Clone + Send + Sync + 'static,
    R::Item: Clone + Send + Sync + 'static,
{
    /// Builder for an engine paginating by opaque cursor tokens
    pub fn builder(
        fetch: impl PageFetch<I, RequestCursor, Response = R> + 'static,
    ) -> EngineBuilder<I, CursorStrategy<R>> {
        EngineBuilder::new(CursorStrategy::new(), fetch)
    }
}
