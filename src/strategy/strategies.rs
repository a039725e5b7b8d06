//! Built-in strategy implementations

use std::marker::PhantomData;

use super::types::{
    CursorResponse, OffsetResponse, PageNumberResponse, Paged, PagingStrategy, RequestCursor,
    RequestOffset, RequestPage,
};
use crate::types::{CursorToken, TokenExt};

// ============================================================================
// Offset Strategy
// ============================================================================

/// Offset pagination: advance by adding the limit to the offset
///
/// The reload request is `Some(first page)` when the engine has a limit
/// configured and `None` otherwise, leaving the page size to the fetch
/// collaborator. Accumulated pages merge in ascending offset order, so a
/// prepended previous page would sort before the pages after it; the
/// built-in strategy never issues one.
#[derive(Debug, Clone, Default)]
pub struct OffsetStrategy<R> {
    _response: PhantomData<fn() -> R>,
}

impl<R> OffsetStrategy<R> {
    /// Create an offset strategy
    pub fn new() -> Self {
        Self {
            _response: PhantomData,
        }
    }
}

impl<R> PagingStrategy for OffsetStrategy<R>
where
    R: OffsetResponse + Clone + Send + Sync + 'static,
    R::Item: Clone + Send + Sync + 'static,
{
    type Item = R::Item;
    type Response = R;
    type Descriptor = RequestOffset;
    type Request = Option<RequestOffset>;

    fn reload_request(&self, limit: Option<usize>) -> Self::Request {
        limit.map(RequestOffset::first_page)
    }

    fn next_request(&self, descriptor: &Self::Descriptor) -> Self::Request {
        Some(*descriptor)
    }

    fn next_descriptor(&self, response: &R) -> Option<Self::Descriptor> {
        response
            .may_have_next()
            .then(|| RequestOffset::new(response.offset() + response.limit(), response.limit()))
    }

    fn assemble(&self, responses: &[R]) -> Vec<Self::Item> {
        let mut ordered: Vec<&R> = responses.iter().collect();
        ordered.sort_by_key(|response| response.offset());
        ordered
            .into_iter()
            .flat_map(|response| response.items().iter().cloned())
            .collect()
    }
}

// ============================================================================
// Page Number Strategy
// ============================================================================

/// Page-number pagination: advance by incrementing a zero-based page index
#[derive(Debug, Clone, Default)]
pub struct PageNumberStrategy<R> {
    _response: PhantomData<fn() -> R>,
}

impl<R> PageNumberStrategy<R> {
    /// Create a page-number strategy
    pub fn new() -> Self {
        Self {
            _response: PhantomData,
        }
    }
}

impl<R> PagingStrategy for PageNumberStrategy<R>
where
    R: PageNumberResponse + Clone + Send + Sync + 'static,
    R::Item: Clone + Send + Sync + 'static,
{
    type Item = R::Item;
    type Response = R;
    type Descriptor = RequestPage;
    type Request = Option<RequestPage>;

    fn reload_request(&self, limit: Option<usize>) -> Self::Request {
        limit.map(RequestPage::first_page)
    }

    fn next_request(&self, descriptor: &Self::Descriptor) -> Self::Request {
        Some(*descriptor)
    }

    fn next_descriptor(&self, response: &R) -> Option<Self::Descriptor> {
        response
            .may_have_next()
            .then(|| RequestPage::new(response.page() + 1, response.items_per_page()))
    }

    fn assemble(&self, responses: &[R]) -> Vec<Self::Item> {
        let mut ordered: Vec<&R> = responses.iter().collect();
        ordered.sort_by_key(|response| response.page());
        ordered
            .into_iter()
            .flat_map(|response| response.items().iter().cloned())
            .collect()
    }
}

// ============================================================================
// Cursor Strategy
// ============================================================================

/// Cursor pagination: replay opaque server-issued tokens in both directions
///
/// Responses arrive pre-ordered by the direction that requested them, so
/// assembly concatenates the accumulation as stored. This is the only
/// built-in strategy with a previous direction.
#[derive(Debug, Clone, Default)]
pub struct CursorStrategy<R> {
    _response: PhantomData<fn() -> R>,
}

impl<R> CursorStrategy<R> {
    /// Create a cursor strategy
    pub fn new() -> Self {
        Self {
            _response: PhantomData,
        }
    }
}

impl<R> PagingStrategy for CursorStrategy<R>
where
    R: CursorResponse + Clone + Send + Sync + 'static,
    R::Item: Clone + Send + Sync + 'static,
{
    type Item = R::Item;
    type Response = R;
    type Descriptor = CursorToken;
    type Request = RequestCursor;

    fn reload_request(&self, limit: Option<usize>) -> Self::Request {
        RequestCursor::reload(limit)
    }

    fn next_request(&self, descriptor: &Self::Descriptor) -> Self::Request {
        RequestCursor::next(descriptor.clone())
    }

    fn previous_request(&self, descriptor: &Self::Descriptor) -> Self::Request {
        RequestCursor::previous(descriptor.clone())
    }

    fn next_descriptor(&self, response: &R) -> Option<Self::Descriptor> {
        response.next_token().cloned().none_if_empty()
    }

    fn previous_descriptor(&self, response: &R) -> Option<Self::Descriptor> {
        response.previous_token().cloned().none_if_empty()
    }

    fn assemble(&self, responses: &[R]) -> Vec<Self::Item> {
        responses
            .iter()
            .flat_map(|response| response.items().iter().cloned())
            .collect()
    }
}
