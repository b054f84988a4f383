//! # Pagination Types & Count-Skip Decision
//!
//! [`PageRequest`] and [`Page`] carry offset/limit paging through the query
//! executor. [`total_without_count`] is the pagination optimizer: a pure
//! decision over `(offset, size, fetched)` that reports the exact total when
//! the fetched page already reveals it, sparing the count round trip.

use serde::Serialize;

/// A zero-based page request with a positive page size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    /// Zero-based page index
    pub page: u64,
    /// Rows per page
    pub size: u64,
}

impl PageRequest {
    /// Create a page request.
    pub fn of(page: u64, size: u64) -> Self {
        Self {
            page,
            size,
        }
    }

    /// Row offset of the first row on this page.
    pub fn offset(&self) -> u64 { self.page * self.size }
}

/// Page envelope bundling content rows with pagination metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    /// Rows on this page
    pub content:        Vec<T>,
    /// Zero-based page index
    pub page:           u64,
    /// Requested page size
    pub size:           u64,
    /// Exact number of matching rows across all pages
    pub total_elements: u64,
    /// Number of pages needed for `total_elements`
    pub total_pages:    u64,
}

impl<T> Page<T> {
    /// Build a page envelope from fetched content and a known exact total.
    pub fn new(content: Vec<T>, request: PageRequest, total_elements: u64) -> Self {
        let total_pages = if request.size == 0 {
            0
        }
        else {
            total_elements.div_ceil(request.size)
        };

        Self {
            content,
            page: request.page,
            size: request.size,
            total_elements,
            total_pages,
        }
    }
}

/// Decide whether the total is derivable from the fetched page alone.
///
/// Returns `Some(total)` when the count query is provably unnecessary:
/// - first page, not full: the whole matching set fits on this page;
/// - later page, non-empty and not full: this is the last page and its end
///   position is `offset + fetched`.
///
/// Returns `None` when a count query is required: a full page may be
/// followed by more rows, and an empty page past offset zero reveals
/// nothing about where the data actually ended.
pub fn total_without_count(offset: u64, size: u64, fetched: u64) -> Option<u64> {
    if fetched >= size {
        None
    }
    else if offset == 0 {
        Some(fetched)
    }
    else if fetched > 0 {
        Some(offset + fetched)
    }
    else {
        None
    }
}
