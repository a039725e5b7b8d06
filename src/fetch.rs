//! Fetch collaborator contract
//!
//! The engine performs no I/O itself: every page is produced by a
//! caller-supplied collaborator invoked with an opaque input context and a
//! computed request. Any `Fn(input, request)` async closure satisfies the
//! contract through a blanket impl, so most callers never implement
//! [`PageFetch`] by hand.

use async_trait::async_trait;
use futures::future::BoxFuture;
use std::future::Future;
use std::sync::Arc;

/// Boxed future produced when a fetch collaborator is invoked
pub type FetchFuture<R> = BoxFuture<'static, anyhow::Result<R>>;

/// Shared handle to a fetch collaborator
pub type SharedFetch<I, Q, R> = Arc<dyn PageFetch<I, Q, Response = R>>;

/// The caller-supplied collaborator that fetches one page
///
/// `I` is the opaque input context forwarded unchanged from the trigger; `Q`
/// is the request computed by the engine's strategy. The collaborator is
/// invoked at most once per accepted trigger and never concurrently with
/// itself from the engine's perspective.
///
/// ```rust,ignore
/// let fetch = |city: String, request: Option<RequestOffset>| async move {
///     http_page(&city, request).await
/// };
/// ```
#[async_trait]
pub trait PageFetch<I, Q>: Send + Sync {
    /// Response type produced by a successful fetch
    type Response;

    /// Fetch one page for the given input context and request
    async fn fetch(&self, input: I, request: Q) -> anyhow::Result<Self::Response>;
}

#[async_trait]
impl<F, Fut, I, Q, R> PageFetch<I, Q> for F
where
    F: Fn(I, Q) -> Fut + Send + Sync,
    Fut: Future<Output = anyhow::Result<R>> + Send + 'static,
    I: Send + 'static,
    Q: Send + 'static,
    R: 'static,
{
    type Response = R;

    async fn fetch(&self, input: I, request: Q) -> anyhow::Result<R> {
        (self)(input, request).await
    }
}
