// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::unnecessary_wraps)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::unused_async)]

//! # group-export
//!
//! List the Graph API groups an access token can see, or walk every page
//! of a group's member list and export it to CSV.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use group_export::config::{ApiConfig, Mode};
//! use group_export::http::HttpClient;
//! use group_export::pagination::{Paginator, SilentProgress};
//!
//! #[tokio::main]
//! async fn main() -> group_export::Result<()> {
//!     let api = ApiConfig::default();
//!     let start = Mode::List.start_url(&api)?;
//!
//!     let mut paginator = Paginator::new(HttpClient::new()?, SilentProgress);
//!     let outcome = paginator.run(start, "ACCESS_TOKEN", Vec::new()).await?;
//!     println!("{} groups", outcome.rows.len());
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  Runner: options → RunParameters → mode → start URL      │
//! └──────────────────────────────────────────────────────────┘
//!                              │
//! ┌──────────────┬─────────────┴──────┬──────────────────────┐
//! │  Paginator   │    CsvExporter     │   TablePresenter     │
//! ├──────────────┼────────────────────┼──────────────────────┤
//! │ paging.next  │ header from row 1  │ >100 rows: first 50  │
//! │ access_token │ atomic temp+rename │ admin preview        │
//! │ progress     │ quoted when needed │ True/False cells     │
//! └──────────────┴────────────────────┴──────────────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]
#![allow(missing_docs)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Rows, page envelopes and cell rendering
pub mod types;

/// API location and run parameters
pub mod config;

/// HTTP page fetching
pub mod http;

/// Cursor-following fetch loop
pub mod pagination;

/// CSV export and terminal tables
pub mod output;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, ErrorKind, Result};
pub use types::*;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
