//! Request descriptors, response contracts, and the strategy trait

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::types::{CursorToken, JsonValue};

// ============================================================================
// Request Descriptors
// ============================================================================

/// Request descriptor for offset pagination
///
/// Fetch up to `limit` items starting at index `offset`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestOffset {
    /// Index of the first item to fetch
    pub offset: usize,
    /// Maximum number of items to fetch
    pub limit: usize,
}

impl RequestOffset {
    /// Create a descriptor for `limit` items starting at `offset`
    pub fn new(offset: usize, limit: usize) -> Self {
        Self { offset, limit }
    }

    /// Descriptor for the first page
    pub fn first_page(limit: usize) -> Self {
        Self::new(0, limit)
    }
}

/// Request descriptor for page-number pagination
///
/// Fetch page `page` (zero-based) of `items_per_page` items each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestPage {
    /// Zero-based page index to fetch
    pub page: usize,
    /// Number of items per page
    pub items_per_page: usize,
}

impl RequestPage {
    /// Create a descriptor for page `page` of `items_per_page` items
    pub fn new(page: usize, items_per_page: usize) -> Self {
        Self {
            page,
            items_per_page,
        }
    }

    /// Descriptor for the first page
    pub fn first_page(items_per_page: usize) -> Self {
        Self::new(0, items_per_page)
    }
}

/// Request descriptor for cursor pagination
///
/// Cursor requests carry their direction: a reload starts over while next
/// and previous replay an opaque server-issued token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestCursor {
    /// Restart from the first page
    Reload {
        /// Page size bound, when the engine has one configured
        limit: Option<usize>,
    },
    /// Fetch the page after the one that issued this token
    Next {
        /// Opaque server-issued token
        token: CursorToken,
    },
    /// Fetch the page before the one that issued this token
    Previous {
        /// Opaque server-issued token
        token: CursorToken,
    },
}

impl RequestCursor {
    /// Reload request with an optional page size bound
    pub fn reload(limit: Option<usize>) -> Self {
        Self::Reload { limit }
    }

    /// Next-page request replaying `token`
    pub fn next(token: CursorToken) -> Self {
        Self::Next { token }
    }

    /// Previous-page request replaying `token`
    pub fn previous(token: CursorToken) -> Self {
        Self::Previous { token }
    }

    /// True for [`RequestCursor::Reload`]
    pub fn is_reload(&self) -> bool {
        matches!(self, Self::Reload { .. })
    }

    /// True for [`RequestCursor::Next`]
    pub fn is_next(&self) -> bool {
        matches!(self, Self::Next { .. })
    }

    /// True for [`RequestCursor::Previous`]
    pub fn is_previous(&self) -> bool {
        matches!(self, Self::Previous { .. })
    }

    /// The token carried by a next or previous request
    pub fn token(&self) -> Option<&CursorToken> {
        match self {
            Self::Reload { .. } => None,
            Self::Next { token } | Self::Previous { token } => Some(token),
        }
    }

    /// Flatten this request into URL query parameters
    ///
    /// Next and previous yield the token map as-is; reload yields `limit`
    /// when configured and an empty map otherwise.
    pub fn url_parameters(&self) -> CursorToken {
        match self {
            Self::Reload { limit } => {
                let mut params = CursorToken::new();
                if let Some(limit) = limit {
                    params.insert("limit".to_string(), JsonValue::from(*limit));
                }
                params
            }
            Self::Next { token } | Self::Previous { token } => token.clone(),
        }
    }
}

// ============================================================================
// Response Contracts
// ============================================================================

/// Base contract for a fetched page of any scheme
pub trait Paged {
    /// Element type carried by the page
    type Item;

    /// Items carried by this page, in server order
    fn items(&self) -> &[Self::Item];
}

/// Response contract for offset pagination
pub trait OffsetResponse: Paged {
    /// Offset this page was fetched at
    fn offset(&self) -> usize;

    /// Limit this page was fetched with
    fn limit(&self) -> usize;

    /// Total number of items, when the server reports it
    fn total_items(&self) -> Option<usize> {
        None
    }

    /// Whether a page may exist after this one
    ///
    /// Exact when the total is known. Otherwise a full page is read as
    /// "possibly more" and an undersized page as "no more".
    fn may_have_next(&self) -> bool {
        match self.total_items() {
            Some(total) => self.offset() + self.limit() < total,
            None => self.items().len() == self.limit(),
        }
    }
}

/// Response contract for page-number pagination
pub trait PageNumberResponse: Paged {
    /// Zero-based index of this page
    fn page(&self) -> usize;

    /// Page size this page was fetched with
    fn items_per_page(&self) -> usize;

    /// Total number of pages, when the server reports it
    fn total_pages(&self) -> Option<usize> {
        None
    }

    /// Whether a page may exist after this one
    ///
    /// Exact when the total is known, otherwise the full-page heuristic.
    fn may_have_next(&self) -> bool {
        match self.total_pages() {
            Some(total) => self.page() + 1 < total,
            None => self.items().len() == self.items_per_page(),
        }
    }
}

/// Response contract for cursor pagination
///
/// Availability is authoritative here: the server either issued a token or
/// it did not. An empty token map counts as no token.
pub trait CursorResponse: Paged {
    /// Token for the page after this one, if the server issued one
    fn next_token(&self) -> Option<&CursorToken>;

    /// Token for the page before this one, if the server issued one
    fn previous_token(&self) -> Option<&CursorToken>;

    /// Whether a page exists after this one
    fn may_have_next(&self) -> bool {
        self.next_token().is_some_and(|token| !token.is_empty())
    }

    /// Whether a page exists before this one
    fn may_have_previous(&self) -> bool {
        self.previous_token().is_some_and(|token| !token.is_empty())
    }
}

// ============================================================================
// Strategy Trait
// ============================================================================

/// Scheme-specific half of the pagination engine
///
/// The engine owns triggers, accumulation, and outputs; the strategy decides
/// what to ask the fetch collaborator for, which descriptors a response
/// yields for each direction, and how accumulated responses merge into one
/// ordered item list.
pub trait PagingStrategy: Send + 'static {
    /// Element type exposed through the engine's item outputs
    type Item: Clone + Send + Sync + 'static;

    /// Response type integrated by the engine
    type Response: Paged<Item = Self::Item> + Clone + Send + Sync + 'static;

    /// Descriptor retained between cycles for each direction
    type Descriptor: fmt::Debug + Clone + Send + 'static;

    /// Request value handed to the fetch collaborator
    type Request: Send + 'static;

    /// Request for a reload cycle, from the engine's configured limit
    fn reload_request(&self, limit: Option<usize>) -> Self::Request;

    /// Request for a next cycle, from the retained next descriptor
    fn next_request(&self, descriptor: &Self::Descriptor) -> Self::Request;

    /// Request for a previous cycle, from the retained previous descriptor
    ///
    /// Defaults to [`PagingStrategy::next_request`]; strategies whose
    /// request carries a direction override this.
    fn previous_request(&self, descriptor: &Self::Descriptor) -> Self::Request {
        self.next_request(descriptor)
    }

    /// Descriptor for the page after this response, or `None` when the
    /// response indicates no further data
    fn next_descriptor(&self, response: &Self::Response) -> Option<Self::Descriptor>;

    /// Descriptor for the page before this response
    ///
    /// Defaults to `None` for strategies without a previous direction.
    fn previous_descriptor(&self, _response: &Self::Response) -> Option<Self::Descriptor> {
        None
    }

    /// Merge accumulated responses into the ordered item list
    fn assemble(&self, responses: &[Self::Response]) -> Vec<Self::Item>;
}
