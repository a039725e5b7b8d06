//! Output channels shared between the driver and engine handles

use tokio::sync::{broadcast, watch};

use crate::error::Error;

/// Buffered events per broadcast output before lagging receivers skip
pub(crate) const EVENT_CHANNEL_CAPACITY: usize = 64;

/// One sender per engine output
///
/// State-like outputs are watch channels, so a subscriber always reads the
/// latest value and intermediate values may be skipped under load.
/// Event-like outputs are broadcast channels, so only receivers alive at
/// emission time observe an event.
pub(crate) struct OutputChannels<I, R> {
    /// Assembled accumulation across all integrated pages
    pub(crate) all_items: watch::Sender<Vec<I>>,
    /// True strictly between trigger acceptance and fetch completion
    pub(crate) in_flight: watch::Sender<bool>,
    /// Whether a next trigger would currently be accepted
    pub(crate) has_next: watch::Sender<bool>,
    /// Whether a previous trigger would currently be accepted
    pub(crate) has_previous: watch::Sender<bool>,
    /// Most recently integrated raw response
    pub(crate) latest_response: watch::Sender<Option<R>>,
    /// Items of each integrated response, one event per integration
    pub(crate) items: broadcast::Sender<Vec<I>>,
    /// Classified failures; the engine stays usable after each
    pub(crate) errors: broadcast::Sender<Error>,
}

impl<I: Clone, R> OutputChannels<I, R> {
    /// Channels primed with the initial quiescent state
    ///
    /// `has_next` starts true even though a next trigger is rejected until
    /// the first response yields a descriptor.
    pub(crate) fn new() -> Self {
        let (all_items, _) = watch::channel(Vec::new());
        let (in_flight, _) = watch::channel(false);
        let (has_next, _) = watch::channel(true);
        let (has_previous, _) = watch::channel(false);
        let (latest_response, _) = watch::channel(None);
        let (items, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        let (errors, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);

        Self {
            all_items,
            in_flight,
            has_next,
            has_previous,
            latest_response,
            items,
            errors,
        }
    }
}
