//! Pagination types
//!
//! State tracked across one walk of a collection, and its result.

use crate::types::Row;

/// Tracks pagination state during iteration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaginationState {
    /// Number of requests issued so far (1 after the first request)
    pub page: u32,
    /// Rows held by the accumulator
    pub total_fetched: usize,
    /// Is pagination complete?
    pub done: bool,
}

impl PaginationState {
    /// Create a new pagination state
    pub fn new() -> Self {
        Self::default()
    }

    /// Create state for an accumulator that already holds `rows` rows
    pub fn with_fetched(rows: usize) -> Self {
        Self {
            total_fetched: rows,
            ..Default::default()
        }
    }

    /// Increment page number
    pub fn next_page(&mut self) {
        self.page += 1;
    }

    /// Add to total fetched
    pub fn add_fetched(&mut self, count: usize) {
        self.total_fetched += count;
    }

    /// Mark pagination as complete
    pub fn mark_done(&mut self) {
        self.done = true;
    }

    /// Whether more than one page has been requested
    pub fn is_paged(&self) -> bool {
        self.page > 1
    }
}

/// Everything a finished walk produced
#[derive(Debug, Clone, PartialEq)]
pub struct PaginationOutcome {
    /// Rows in page order, then response order within a page
    pub rows: Vec<Row>,
    /// Number of requests issued
    pub pages: u32,
}
