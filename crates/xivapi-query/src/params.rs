//! Parameters for sheet and row lookups.
//!
//! Row endpoints take a flat parameter set with no filter grammar. Each
//! parameter is emitted only when it carries a value, in the order
//! `rows`, `fields`, `after`, `limit`, `transient`, `language`, `schema`.

use std::fmt;

use xivapi_core::Language;

use crate::encoding::{urlencode, PercentEncoder, ValueEncoder};

/// Parameters for the row-listing and single-row endpoints.
///
/// # Examples
///
/// ```
/// use xivapi_query::{Language, RowParams};
///
/// let params = RowParams::new()
///     .add_rows([1, 2, 3])
///     .add_fields(["Name"])
///     .set_language(Language::En);
/// assert_eq!(params.build(), "rows=1%2C2%2C3&fields=Name&language=en");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RowParams {
    rows: Vec<String>,
    fields: Vec<String>,
    after: Option<String>,
    limit: Option<u32>,
    transients: Vec<String>,
    language: Option<Language>,
    schema: Option<String>,
}

impl RowParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends explicit row ids (`12056` or `subrow` form `"12056:1"`).
    pub fn add_rows<I, R>(mut self, rows: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: ToString,
    {
        self.rows.extend(rows.into_iter().map(|row| row.to_string()));
        self
    }

    pub fn add_fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fields.extend(fields.into_iter().map(Into::into));
        self
    }

    pub fn add_transients<I, S>(mut self, transients: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.transients.extend(transients.into_iter().map(Into::into));
        self
    }

    /// Starts the listing after the given row id.
    pub fn after(mut self, row: impl ToString) -> Self {
        self.after = Some(row.to_string());
        self
    }

    /// Caps the number of rows per page. Zero leaves the limit unset.
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn set_language(mut self, language: Language) -> Self {
        self.language = Some(language);
        self
    }

    pub fn set_schema(mut self, schema: impl Into<String>) -> Self {
        self.schema = Some(schema.into());
        self
    }

    pub const fn language(&self) -> Option<Language> {
        self.language
    }

    pub fn schema(&self) -> Option<&str> {
        self.schema.as_deref()
    }

    /// Fills in language and schema from defaults where they are still unset.
    pub fn with_defaults(mut self, language: Option<Language>, schema: Option<&str>) -> Self {
        if self.language.is_none() {
            self.language = language;
        }
        if self.schema.is_none() {
            self.schema = schema.map(str::to_string);
        }
        self
    }

    /// Returns the ordered parameter mapping before URL encoding.
    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();

        if !self.rows.is_empty() {
            params.push(("rows", self.rows.join(",")));
        }
        if !self.fields.is_empty() {
            params.push(("fields", self.fields.join(",")));
        }
        if let Some(after) = self.after.as_ref().filter(|a| !a.is_empty()) {
            params.push(("after", after.clone()));
        }
        if let Some(limit) = self.limit.filter(|limit| *limit > 0) {
            params.push(("limit", limit.to_string()));
        }
        if !self.transients.is_empty() {
            params.push(("transient", self.transients.join(",")));
        }
        if let Some(language) = self.language {
            params.push(("language", language.code().to_string()));
        }
        if let Some(schema) = self.schema.as_ref().filter(|s| !s.is_empty()) {
            params.push(("schema", schema.clone()));
        }

        params
    }

    /// Returns `true` if no parameter would be emitted.
    pub fn is_empty(&self) -> bool {
        self.to_params().is_empty()
    }

    /// Renders the URL-encoded query string with [`PercentEncoder`].
    pub fn build(&self) -> String {
        self.build_with(&PercentEncoder)
    }

    pub fn build_with(&self, encoder: &dyn ValueEncoder) -> String {
        urlencode(&self.to_params(), encoder)
    }
}

impl fmt::Display for RowParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.build())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        let params = RowParams::new();
        assert!(params.is_empty());
        assert_eq!(params.build(), "");
    }

    #[test]
    fn test_full_order() {
        let params = RowParams::new()
            .set_schema("exdschema@2")
            .set_language(Language::Fr)
            .add_transients(["Description"])
            .limit(50)
            .after(100)
            .add_fields(["Name", "Icon"])
            .add_rows(["101", "202:1"]);
        assert_eq!(
            params.to_params(),
            vec![
                ("rows", "101,202:1".to_string()),
                ("fields", "Name,Icon".to_string()),
                ("after", "100".to_string()),
                ("limit", "50".to_string()),
                ("transient", "Description".to_string()),
                ("language", "fr".to_string()),
                ("schema", "exdschema@2".to_string()),
            ]
        );
    }

    #[test]
    fn test_zero_limit_and_empty_strings_omitted() {
        let params = RowParams::new().limit(0).after("").set_schema("");
        assert!(params.is_empty());
    }

    #[test]
    fn test_with_defaults_fills_unset_only() {
        let params = RowParams::new()
            .set_language(Language::Ja)
            .with_defaults(Some(Language::En), Some("exdschema@2"));
        assert_eq!(params.language(), Some(Language::Ja));
        assert_eq!(params.schema(), Some("exdschema@2"));

        let untouched = RowParams::new().with_defaults(None, None);
        assert!(untouched.is_empty());
    }

    #[test]
    fn test_subrow_ids_encode_colon() {
        let params = RowParams::new().add_rows(["1:2"]);
        assert_eq!(params.build(), "rows=1%3A2");
    }
}
