//! Delimited text export
//!
//! Writes a header line from the first row's field order, then one line
//! per row. The file is assembled in a temporary sibling and renamed over
//! the target only once every line has been written, so an interrupted
//! export never leaves a partial file behind.

use crate::error::{Result, ResultExt};
use crate::types::{Columns, Row};
use std::borrow::Cow;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{debug, info};

/// Result of a successful export
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    /// Where the file ended up (absolute when it could be resolved)
    pub path: PathBuf,
    /// Data lines written, excluding the header
    pub rows: usize,
}

/// Comma-delimited exporter
#[derive(Debug, Clone, Copy)]
pub struct CsvExporter {
    delimiter: char,
}

impl Default for CsvExporter {
    fn default() -> Self {
        Self { delimiter: ',' }
    }
}

impl CsvExporter {
    /// Create an exporter with the default comma delimiter
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a different delimiter
    #[must_use]
    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Get the delimiter
    pub fn delimiter(&self) -> char {
        self.delimiter
    }

    /// Serialize `rows` to `out`.
    ///
    /// An empty row set writes nothing, since there is no field set to
    /// derive a header from.
    pub fn write_to<W: Write>(&self, rows: &[Row], mut out: W) -> std::io::Result<()> {
        let columns = Columns::from_first_row(rows);
        if columns.is_empty() {
            return Ok(());
        }

        self.write_line(&mut out, columns.names().iter().map(String::as_str))?;
        for row in rows {
            let cells = columns.cells(row);
            self.write_line(&mut out, cells.iter().map(String::as_str))?;
        }
        out.flush()
    }

    /// Export `rows` to `path`, replacing any existing file
    pub fn export(&self, rows: &[Row], path: &Path) -> Result<ExportSummary> {
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let mut staged = NamedTempFile::new_in(dir).persisting(path)?;
        debug!("Staging export in {}", staged.path().display());

        self.write_to(rows, BufWriter::new(staged.as_file_mut()))
            .persisting(path)?;
        staged.as_file().sync_all().persisting(path)?;
        staged
            .persist(path)
            .map_err(|e| e.error)
            .persisting(path)?;

        let resolved = std::fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
        info!("Exported {} rows to {}", rows.len(), resolved.display());

        Ok(ExportSummary {
            path: resolved,
            rows: rows.len(),
        })
    }

    fn write_line<'a, W: Write>(
        &self,
        out: &mut W,
        fields: impl Iterator<Item = &'a str>,
    ) -> std::io::Result<()> {
        let mut buf = [0u8; 4];
        let delimiter = self.delimiter.encode_utf8(&mut buf);
        for (i, field) in fields.enumerate() {
            if i > 0 {
                out.write_all(delimiter.as_bytes())?;
            }
            out.write_all(quote_field(field, self.delimiter).as_bytes())?;
        }
        out.write_all(b"\n")
    }
}

/// Quote `value` when it contains the delimiter, a quote or a line break.
///
/// Everything else passes through unchanged.
pub fn quote_field(value: &str, delimiter: char) -> Cow<'_, str> {
    let needs_quotes = value
        .chars()
        .any(|c| c == delimiter || c == '"' || c == '\n' || c == '\r');
    if needs_quotes {
        Cow::Owned(format!("\"{}\"", value.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(value)
    }
}
