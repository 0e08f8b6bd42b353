//! Common types used throughout group-export
//!
//! Rows, page envelopes and the column set shared by the exporter and the
//! table presenter.

use serde::{Deserialize, Serialize};

// ============================================================================
// Type Aliases
// ============================================================================

/// JSON value type (re-exported from serde_json)
pub type JsonValue = serde_json::Value;

/// JSON object type
pub type JsonObject = serde_json::Map<String, JsonValue>;

/// One fetched record. Keys keep the order they had in the response body.
pub type Row = JsonObject;

/// Name of the field used for the administrator preview
pub const ADMINISTRATOR_FIELD: &str = "administrator";

// ============================================================================
// Page Envelope
// ============================================================================

/// One page of a cursor-paginated collection
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PageResult {
    /// Records on this page
    #[serde(default)]
    pub data: Vec<Row>,
    /// Paging links, absent on single-page results
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paging: Option<Paging>,
}

impl PageResult {
    /// URL of the next page, if the server advertised one
    pub fn next_cursor(&self) -> Option<&str> {
        self.paging
            .as_ref()
            .and_then(|p| p.next.as_deref())
            .filter(|next| !next.is_empty())
    }

    /// Split into rows and next cursor
    pub fn into_parts(self) -> (Vec<Row>, Option<String>) {
        let next = self.next_cursor().map(str::to_string);
        (self.data, next)
    }
}

/// Paging block of a page envelope
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Paging {
    /// Opaque before/after cursors
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cursors: Option<Cursors>,
    /// Full URL of the previous page
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous: Option<String>,
    /// Full URL of the next page
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,
}

/// Opaque cursors around the current page
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cursors {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub before: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub after: Option<String>,
}

// ============================================================================
// Columns
// ============================================================================

/// Ordered field set of a run, fixed by the first row
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Columns(Vec<String>);

impl Columns {
    /// Take the key order of the first row. Empty for an empty row set.
    pub fn from_first_row(rows: &[Row]) -> Self {
        rows.first().map(Self::from_row).unwrap_or_default()
    }

    /// Take the key order of `row`
    pub fn from_row(row: &Row) -> Self {
        Self(row.keys().cloned().collect())
    }

    /// Column names in order
    pub fn names(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Render one row's cells in column order
    pub fn cells(&self, row: &Row) -> Vec<String> {
        self.0
            .iter()
            .map(|name| row.get(name).map(render_cell).unwrap_or_default())
            .collect()
    }
}

// ============================================================================
// Value Rendering
// ============================================================================

/// Render a value for display or export.
///
/// Booleans become `True`/`False`, null becomes empty, strings are used
/// verbatim and everything else uses its JSON text.
pub fn render_cell(value: &JsonValue) -> String {
    match value {
        JsonValue::Bool(true) => "True".to_string(),
        JsonValue::Bool(false) => "False".to_string(),
        JsonValue::Null => String::new(),
        JsonValue::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Loose truthiness used for the administrator filter
pub fn is_truthy(value: &JsonValue) -> bool {
    match value {
        JsonValue::Bool(b) => *b,
        JsonValue::Null => false,
        JsonValue::String(s) => !s.is_empty(),
        JsonValue::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        JsonValue::Array(_) | JsonValue::Object(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use test_case::test_case;

    fn row(value: JsonValue) -> Row {
        value.as_object().cloned().unwrap()
    }

    #[test_case(json!(true), "True" ; "true")]
    #[test_case(json!(false), "False" ; "false")]
    #[test_case(json!(null), "" ; "null")]
    #[test_case(json!("Ada"), "Ada" ; "string")]
    #[test_case(json!(42), "42" ; "number")]
    fn test_render_cell(value: JsonValue, expected: &str) {
        assert_eq!(render_cell(&value), expected);
    }

    #[test_case(json!(true), true ; "bool true")]
    #[test_case(json!(false), false ; "bool false")]
    #[test_case(json!(null), false ; "null")]
    #[test_case(json!(""), false ; "empty string")]
    #[test_case(json!("1"), true ; "non-empty string")]
    #[test_case(json!(0), false ; "zero")]
    #[test_case(json!(1), true ; "non-zero")]
    fn test_is_truthy(value: JsonValue, expected: bool) {
        assert_eq!(is_truthy(&value), expected);
    }

    #[test]
    fn test_page_result_deserialize_with_next() {
        let page: PageResult = serde_json::from_value(json!({
            "data": [{"id": "1", "administrator": true}],
            "paging": {
                "cursors": {"before": "QVFI", "after": "QVFJ"},
                "next": "https://graph.example.com/page2"
            }
        }))
        .unwrap();

        assert_eq!(page.data.len(), 1);
        assert_eq!(page.next_cursor(), Some("https://graph.example.com/page2"));
        assert_eq!(
            page.paging.unwrap().cursors.unwrap().after.as_deref(),
            Some("QVFJ")
        );
    }

    #[test]
    fn test_page_result_without_paging() {
        let page: PageResult = serde_json::from_value(json!({"data": []})).unwrap();
        assert!(page.next_cursor().is_none());

        let page: PageResult =
            serde_json::from_value(json!({"data": [], "paging": {"cursors": {}}})).unwrap();
        assert!(page.next_cursor().is_none());

        let page: PageResult =
            serde_json::from_value(json!({"data": [], "paging": {"next": ""}})).unwrap();
        assert!(page.next_cursor().is_none());
    }

    #[test]
    fn test_row_keeps_response_key_order() {
        let page: PageResult = serde_json::from_str(
            r#"{"data": [{"name": "Rust", "administrator": false, "id": "7"}]}"#,
        )
        .unwrap();
        let columns = Columns::from_first_row(&page.data);
        assert_eq!(columns.names(), ["name", "administrator", "id"]);
    }

    #[test]
    fn test_columns_cells_fill_missing_fields() {
        let rows = vec![
            row(json!({"id": "1", "first_name": "Ada", "administrator": true})),
            row(json!({"id": "2", "administrator": false})),
        ];
        let columns = Columns::from_first_row(&rows);

        assert_eq!(columns.cells(&rows[0]), ["1", "Ada", "True"]);
        assert_eq!(columns.cells(&rows[1]), ["2", "", "False"]);
    }

    #[test]
    fn test_columns_empty() {
        let columns = Columns::from_first_row(&[]);
        assert!(columns.is_empty());
        assert_eq!(columns.len(), 0);
    }
}
