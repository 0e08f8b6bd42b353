//! Terminal table rendering
//!
//! Large result sets (more than [`PREVIEW_THRESHOLD`] rows) are cut down
//! to their first [`TRUNCATED_ROWS`] rows. When such a set carries an
//! `administrator` field, the administrators are shown first as a separate
//! preview table, truncated by the same rule.

use crate::types::{is_truthy, Columns, Row, ADMINISTRATOR_FIELD};
use colored::Colorize;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{ColumnConstraint, Table, Width};
use std::io::Write;

/// Row count above which output is truncated
pub const PREVIEW_THRESHOLD: usize = 100;

/// Rows shown once output is truncated
pub const TRUNCATED_ROWS: usize = 50;

/// Padding added to each column's content width
const COLUMN_PADDING: usize = 2;

/// What will be shown for one row set
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayPlan<'a> {
    /// Administrator-only preview, shown before the main table
    pub admin_preview: Option<Box<DisplayPlan<'a>>>,
    /// Whether `rows` was cut down to [`TRUNCATED_ROWS`]
    pub truncated: bool,
    /// Rows of the main table
    pub rows: Vec<&'a Row>,
}

impl<'a> DisplayPlan<'a> {
    /// Plan the display of `rows`
    pub fn build(rows: &'a [Row]) -> Self {
        Self::plan(rows.iter().collect(), true)
    }

    /// An administrator-only subset is planned with `with_preview` unset,
    /// so the preview never nests.
    fn plan(mut rows: Vec<&'a Row>, with_preview: bool) -> Self {
        if rows.len() <= PREVIEW_THRESHOLD {
            return Self {
                admin_preview: None,
                truncated: false,
                rows,
            };
        }

        let admin_preview = (with_preview
            && rows.iter().any(|r| r.contains_key(ADMINISTRATOR_FIELD)))
        .then(|| {
            let admins: Vec<&Row> = rows
                .iter()
                .copied()
                .filter(|r| r.get(ADMINISTRATOR_FIELD).is_some_and(is_truthy))
                .collect();
            Box::new(Self::plan(admins, false))
        });

        rows.truncate(TRUNCATED_ROWS);
        Self {
            admin_preview,
            truncated: true,
            rows,
        }
    }
}

/// Width of each column: longest of header and values, plus padding
pub fn column_widths(columns: &Columns, body: &[Vec<String>]) -> Vec<usize> {
    columns
        .names()
        .iter()
        .enumerate()
        .map(|(i, name)| {
            let longest_value = body
                .iter()
                .filter_map(|cells| cells.get(i))
                .map(|cell| cell.chars().count())
                .max()
                .unwrap_or(0);
            name.chars().count().max(longest_value) + COLUMN_PADDING
        })
        .collect()
}

/// Renders row sets as tables
pub struct TablePresenter<W: Write> {
    out: W,
}

impl TablePresenter<std::io::Stdout> {
    /// Render to standard output
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write> TablePresenter<W> {
    /// Render to `out`
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Consume the presenter and return the writer
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Render `rows`, applying the preview and truncation rules
    pub fn present(&mut self, rows: &[Row]) -> std::io::Result<()> {
        let plan = DisplayPlan::build(rows);
        self.render_plan(&plan)?;
        self.out.flush()
    }

    fn render_plan(&mut self, plan: &DisplayPlan<'_>) -> std::io::Result<()> {
        if let Some(preview) = &plan.admin_preview {
            writeln!(self.out, "\n{}", "Displaying Administrators".green())?;
            self.render_plan(preview)?;
        }

        if plan.truncated {
            writeln!(
                self.out,
                "\n{}",
                format!("Displaying First {TRUNCATED_ROWS} rows").green()
            )?;
        }

        match build_table(&plan.rows) {
            Some(table) => writeln!(self.out, "{table}"),
            None => writeln!(self.out, "No results found."),
        }
    }
}

fn build_table(rows: &[&Row]) -> Option<Table> {
    let columns = Columns::from_row(rows.first()?);
    let body: Vec<Vec<String>> = rows.iter().map(|row| columns.cells(row)).collect();
    let widths = column_widths(&columns, &body);

    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(columns.names());
    table.set_constraints(
        widths
            .iter()
            .map(|w| ColumnConstraint::Absolute(Width::Fixed(*w as u16))),
    );
    for cells in body {
        table.add_row(cells);
    }
    Some(table)
}
