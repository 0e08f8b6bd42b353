//! HTTP client module
//!
//! Provides the page-fetching capability the paginator depends on.
//!
//! # Features
//!
//! - **PageSource**: the abstract `GET url -> PageResult` seam
//! - **HttpClient**: `reqwest`-backed implementation that unwraps the
//!   API's own `{"error": {"message": ..}}` payloads
//! - **No retries, no timeouts**: a failed request fails the run

mod client;

pub(crate) use client::ACCESS_TOKEN_PARAM;
pub use client::{api_error_from_body, redact_token, HttpClient, HttpClientConfig, PageSource};
