//! Progress reporting for long pagination runs
//!
//! Purely cosmetic: nothing here influences which pages are fetched.

use super::types::PaginationState;
use colored::Colorize;
use std::io::Write;

/// Receives progress notifications from the paginator
pub trait ProgressReporter {
    /// Called once, when the first page turns out to have a successor
    fn paging_started(&mut self);

    /// Called after every page that has a successor
    fn page_fetched(&mut self, state: &PaginationState);

    /// Called once when the walk ends successfully
    fn finished(&mut self, state: &PaginationState);
}

/// Discards all progress
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentProgress;

impl ProgressReporter for SilentProgress {
    fn paging_started(&mut self) {}

    fn page_fetched(&mut self, _state: &PaginationState) {}

    fn finished(&mut self, _state: &PaginationState) {}
}

/// Writes a warning and an in-place progress line to a terminal
pub struct TerminalProgress<W: Write> {
    out: W,
}

impl TerminalProgress<std::io::Stdout> {
    /// Report to standard output
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write> TerminalProgress<W> {
    /// Report to `out`
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Consume the reporter and return the writer
    pub fn into_inner(self) -> W {
        self.out
    }
}

// Write failures are ignored: progress output must never fail a run.
impl<W: Write> ProgressReporter for TerminalProgress<W> {
    fn paging_started(&mut self) {
        let _ = write!(
            self.out,
            "More than one page of results, paging is required.\n\
             This could take a very long time for large groups.\n\
             Hit {} to quit.\n\n",
            "Control-C".red()
        );
        let _ = self.out.flush();
    }

    fn page_fetched(&mut self, state: &PaginationState) {
        // Clear the current line and return to column 0
        let _ = write!(
            self.out,
            "\r\x1b[2KPages Queried: {}, Results Found: {}",
            state.page.to_string().green(),
            state.total_fetched.to_string().green()
        );
        let _ = self.out.flush();
    }

    fn finished(&mut self, state: &PaginationState) {
        // The progress line is only open once a second page was requested
        if state.is_paged() {
            let _ = write!(self.out, "\n\n");
            let _ = self.out.flush();
        }
    }
}
