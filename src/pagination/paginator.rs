//! The cursor-following fetch loop

use super::progress::ProgressReporter;
use super::types::{PaginationOutcome, PaginationState};
use crate::error::Result;
use crate::http::{redact_token, PageSource, ACCESS_TOKEN_PARAM};
use crate::types::Row;
use tracing::{debug, info};
use url::Url;

/// Attach the access token to `url` unless it already carries it.
///
/// `next` URLs returned by the API already embed the token, so they pass
/// through untouched.
pub fn authorize(url: &Url, access_token: &str) -> Url {
    let has_param = url.query_pairs().any(|(k, _)| k == ACCESS_TOKEN_PARAM);
    if has_param || url.as_str().contains(access_token) {
        return url.clone();
    }

    let mut authorized = url.clone();
    authorized
        .query_pairs_mut()
        .append_pair(ACCESS_TOKEN_PARAM, access_token);
    authorized
}

/// Walks a cursor-paginated collection to the end
pub struct Paginator<S, P> {
    source: S,
    progress: P,
}

impl<S: PageSource, P: ProgressReporter> Paginator<S, P> {
    /// Create a paginator over `source` reporting to `progress`
    pub fn new(source: S, progress: P) -> Self {
        Self { source, progress }
    }

    /// Get the page source
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Get the progress reporter
    pub fn progress(&self) -> &P {
        &self.progress
    }

    /// Fetch every page starting at `start`, appending to `rows`.
    ///
    /// Stops exactly when a page has no `next` cursor. Any failure aborts
    /// the walk and the rows gathered so far are dropped.
    pub async fn run(
        &mut self,
        start: Url,
        access_token: &str,
        mut rows: Vec<Row>,
    ) -> Result<PaginationOutcome> {
        let mut state = PaginationState::with_fetched(rows.len());
        let mut next = Some(start);

        while let Some(current) = next.take() {
            state.next_page();
            let url = authorize(&current, access_token);
            debug!(page = state.page, "Fetching {}", redact_token(&url));

            let (page_rows, cursor) = self.source.fetch_page(&url).await?.into_parts();
            let record_count = page_rows.len();
            state.add_fetched(record_count);
            rows.extend(page_rows);

            debug!(
                page = state.page,
                "Page {}: fetched {record_count} records", state.page
            );

            match cursor {
                Some(cursor) => {
                    if state.page == 1 {
                        self.progress.paging_started();
                    }
                    self.progress.page_fetched(&state);
                    next = Some(Url::parse(&cursor)?);
                }
                None => state.mark_done(),
            }
        }

        self.progress.finished(&state);
        info!(
            "Fetched {} records in {} pages",
            state.total_fetched, state.page
        );

        Ok(PaginationOutcome {
            rows,
            pages: state.page,
        })
    }
}
