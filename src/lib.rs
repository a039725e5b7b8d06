// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::unused_self)]

//! # pagekit
//!
//! A generic, strategy-driven pagination state engine for async consumers.
//! One driver task per engine owns all state; handles trigger fetches and
//! observe the results over channels.
//!
//! ## Features
//!
//! - **Built-in Strategies**: Offset, page number, and cursor token pagination
//! - **Serialized Mutations**: At most one fetch in flight; concurrent triggers
//!   are rejected, never queued
//! - **Fire-and-Forget Triggers**: Trigger calls return immediately; rejections
//!   surface as values on the errors output
//! - **Live Outputs**: Watch channels for state, broadcast channels for events
//! - **Whole-List Dedup**: Optional key-based deduplication across page
//!   boundaries
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use pagekit::{OffsetEngine, RequestOffset};
//!
//! #[tokio::main]
//! async fn main() {
//!     let engine = OffsetEngine::builder(|city: String, request: Option<RequestOffset>| {
//!         async move { fetch_venues(&city, request).await }
//!     })
//!     .limit(25)
//!     .build();
//!
//!     let mut venues = engine.all_items();
//!     engine.reload("lisbon".to_string());
//!
//!     while venues.changed().await.is_ok() {
//!         println!("have {} venues", venues.borrow().len());
//!         engine.next("lisbon".to_string());
//!     }
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                       PagingEngine Handle                       │
//! │  reload(input)        next(input)        previous(input)        │
//! │  all_items  items  in_flight  has_next  has_previous  errors    │
//! └───────────────────────────────┬─────────────────────────────────┘
//!                                 │ trigger channel
//! ┌───────────────────────────────▼─────────────────────────────────┐
//! │                           Driver Task                           │
//! │  at most one fetch in flight; triggers meanwhile are rejected   │
//! └──────────┬──────────────────────────────────────┬───────────────┘
//!            │                                      │
//! ┌──────────▼───────────┐              ┌───────────▼───────────────┐
//! │    PagingStrategy    │              │         PageFetch         │
//! ├──────────────────────┤              ├───────────────────────────┤
//! │ Offset               │              │ async closures            │
//! │ Page Number          │              │ custom implementations    │
//! │ Cursor Token         │              │                           │
//! └──────────────────────┘              └───────────────────────────┘
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for triggers and fetches
pub mod error;

/// Common types and type aliases
pub mod types;

/// Order-preserving deduplication
pub mod dedup;

/// Fetch collaborator contract
pub mod fetch;

/// Pagination strategies
pub mod strategy;

/// Pagination engine
pub mod engine;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::Error;
pub use types::*;

// Re-export commonly used types
pub use dedup::{dedupe, dedupe_by};
pub use engine::{CursorEngine, EngineBuilder, OffsetEngine, PageNumberEngine, PagingEngine};
pub use fetch::{FetchFuture, PageFetch, SharedFetch};
pub use strategy::{
    CursorResponse, CursorStrategy, OffsetResponse, OffsetStrategy, PageNumberResponse,
    PageNumberStrategy, Paged, PagingStrategy, RequestCursor, RequestOffset, RequestPage,
};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
