//! Response models.
//!
//! Field maps are kept as raw JSON objects: sheet layouts vary by schema and
//! no validation is applied to them.

use std::ops::Index;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One row of a sheet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SheetRow {
    pub row_id: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subrow_id: Option<u16>,
    /// Only present on single-row responses.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,
    #[serde(default)]
    pub fields: Map<String, Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transient: Option<Map<String, Value>>,
}

/// A page of rows from the row-listing endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RowsPage {
    pub schema: String,
    pub rows: Vec<SheetRow>,
}

impl RowsPage {
    /// The id to pass as `after` to fetch the next page, if this page has rows.
    pub fn last_row_id(&self) -> Option<String> {
        self.rows.last().map(|row| match row.subrow_id {
            Some(subrow) => format!("{}:{subrow}", row.row_id),
            None => row.row_id.to_string(),
        })
    }
}

/// One search hit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    pub score: f64,
    pub sheet: String,
    pub row_id: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subrow_id: Option<u16>,
    #[serde(default)]
    pub fields: Map<String, Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transient: Option<Map<String, Value>>,
}

/// A page of search results.
///
/// `next` holds the cursor for the following page; it is absent on the last one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchResults {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,
    pub schema: String,
    pub results: Vec<SearchResult>,
}

impl SearchResults {
    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SearchResult> {
        self.results.iter()
    }

    /// Returns `true` if another page can be fetched.
    pub const fn has_next(&self) -> bool {
        self.next.is_some()
    }
}

impl Index<usize> for SearchResults {
    type Output = SearchResult;

    fn index(&self, index: usize) -> &Self::Output {
        &self.results[index]
    }
}

impl IntoIterator for SearchResults {
    type Item = SearchResult;
    type IntoIter = std::vec::IntoIter<SearchResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.results.into_iter()
    }
}

impl<'a> IntoIterator for &'a SearchResults {
    type Item = &'a SearchResult;
    type IntoIter = std::slice::Iter<'a, SearchResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.results.iter()
    }
}

/// One game version and the names it is known by (e.g. `7.2`, `latest`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameVersion {
    pub names: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SheetList {
    pub sheets: Vec<SheetEntry>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SheetEntry {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct VersionList {
    pub versions: Vec<GameVersion>,
}

/// Error body returned alongside 4xx and 5xx statuses.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_decodes_without_optionals() {
        let row: SheetRow = serde_json::from_str(
            r#"{"row_id": 12056, "fields": {"Name": "Lesser Panda", "IsUntradable": false}}"#,
        )
        .unwrap();
        assert_eq!(row.row_id, 12056);
        assert_eq!(row.fields["Name"], "Lesser Panda");
        assert_eq!(row.fields["IsUntradable"], false);
        assert!(row.subrow_id.is_none());
        assert!(row.transient.is_none());
    }

    #[test]
    fn test_search_results_container() {
        let results: SearchResults = serde_json::from_str(
            r#"{
                "next": "abc",
                "schema": "exdschema@2",
                "results": [
                    {"score": 1.5, "sheet": "Item", "row_id": 1, "fields": {"Name": "Steak"}},
                    {"score": 1.2, "sheet": "Item", "row_id": 2, "fields": {"Name": "Steak Pie"}}
                ]
            }"#,
        )
        .unwrap();
        assert_eq!(results.len(), 2);
        assert!(results.has_next());
        assert_eq!(results[1].row_id, 2);
        let names: Vec<&str> = results
            .iter()
            .filter_map(|r| r.fields["Name"].as_str())
            .collect();
        assert_eq!(names, ["Steak", "Steak Pie"]);
        assert_eq!(results.into_iter().count(), 2);
    }

    #[test]
    fn test_empty_search_results_are_falsey() {
        let results: SearchResults =
            serde_json::from_str(r#"{"schema": "exdschema@2", "results": []}"#).unwrap();
        assert!(results.is_empty());
        assert!(!results.has_next());
    }

    #[test]
    fn test_rows_page_last_row_id() {
        let page: RowsPage = serde_json::from_str(
            r#"{"schema": "s", "rows": [{"row_id": 1, "fields": {}}, {"row_id": 2, "subrow_id": 3, "fields": {}}]}"#,
        )
        .unwrap();
        assert_eq!(page.last_row_id().as_deref(), Some("2:3"));

        let empty = RowsPage {
            schema: "s".to_string(),
            rows: Vec::new(),
        };
        assert!(empty.last_row_id().is_none());
    }
}
