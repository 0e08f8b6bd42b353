//! Output module
//!
//! Turns an accumulated row set into something a person can use.
//!
//! # Overview
//!
//! This module provides:
//! - `CsvExporter` - comma-delimited file export, staged and persisted atomically
//! - `TablePresenter` - column-aligned terminal tables with truncation
//!   and an administrator preview for large result sets

mod csv;
mod table;

pub use csv::{quote_field, CsvExporter, ExportSummary};
pub use table::{
    column_widths, DisplayPlan, TablePresenter, PREVIEW_THRESHOLD, TRUNCATED_ROWS,
};
