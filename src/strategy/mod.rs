//! Pagination strategies
//!
//! Supports: Offset, Page Number, Cursor Token
//!
//! # Overview
//!
//! A strategy fixes the three things that differ between pagination schemes:
//! how the request for a reload/next/previous page is built, how the
//! descriptor for each direction is derived from a response, and in which
//! order accumulated pages merge into one item list. The engine is generic
//! over the [`PagingStrategy`] trait, so the built-in strategies can be
//! replaced by caller-defined ones.

mod strategies;
mod types;

pub use strategies::{CursorStrategy, OffsetStrategy, PageNumberStrategy};
pub use types::{
    CursorResponse, OffsetResponse, PageNumberResponse, Paged, PagingStrategy, RequestCursor,
    RequestOffset, RequestPage,
};
