//! Pagination module
//!
//! Follows the server-supplied `paging.next` URL until a page arrives
//! without one, accumulating every row in page order.
//!
//! # Overview
//!
//! - `Paginator` - the fetch loop, generic over a `PageSource`
//! - `PaginationState` - page counter and running row count
//! - `ProgressReporter` - progress side effects (terminal or silent)

mod paginator;
mod progress;
mod types;

pub use paginator::{authorize, Paginator};
pub use progress::{ProgressReporter, SilentProgress, TerminalProgress};
pub use types::{PaginationOutcome, PaginationState};
