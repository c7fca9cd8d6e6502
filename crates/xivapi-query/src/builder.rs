//! The search query builder.
//!
//! [`QueryBuilder`] accumulates everything a search request needs and
//! renders it with [`build`](QueryBuilder::build). Parameters are emitted in
//! a fixed order and only when present:
//!
//! | Parameter | Emitted when |
//! |---|---|
//! | `sheets` | always |
//! | `fields` | at least one field was added |
//! | `transient` | at least one transient was added |
//! | `query` | at least one clause was added |
//! | `limit` | a non-zero limit was set |
//! | `version` | a non-empty version was set |
//! | `language` | a language was set |
//! | `schema` | a non-empty schema was set |

use std::fmt;

use xivapi_core::{Language, XivError, XivResult};

use crate::encoding::{urlencode, PercentEncoder, ValueEncoder};
use crate::filter::{join_signed, Clause, Filter, FilterGroup};
use crate::operator::Operator;
use crate::value::{Value, Version};

/// The first argument of [`QueryBuilder::try_filter`].
#[derive(Debug, Clone, PartialEq)]
pub enum FilterTarget {
    /// A field name; operator and value must accompany it.
    Field(String),
    /// A prebuilt group; operator and value must be absent.
    Group(FilterGroup),
}

impl From<&str> for FilterTarget {
    fn from(field: &str) -> Self {
        Self::Field(field.to_string())
    }
}

impl From<String> for FilterTarget {
    fn from(field: String) -> Self {
        Self::Field(field)
    }
}

impl From<FilterGroup> for FilterTarget {
    fn from(group: FilterGroup) -> Self {
        Self::Group(group)
    }
}

/// A fluent builder for search requests.
///
/// Lists are append-only and keep duplicates; scalar settings are
/// last-write-wins. Building borrows the builder, so the same state always
/// renders the same string.
///
/// # Examples
///
/// ```
/// use xivapi_query::QueryBuilder;
///
/// assert_eq!(QueryBuilder::new(["Item"]).build(), "sheets=Item");
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryBuilder {
    sheets: Vec<String>,
    fields: Vec<String>,
    transients: Vec<String>,
    filters: Vec<(Clause, bool)>,
    limit: Option<u32>,
    version: Option<Version>,
    language: Option<Language>,
    schema: Option<String>,
}

impl QueryBuilder {
    /// Creates a builder searching the given sheets.
    pub fn new<I, S>(sheets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            sheets: sheets.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    // ── Selections ───────────────────────────────────────────────────

    /// Appends fields to return for each result.
    pub fn add_fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fields.extend(fields.into_iter().map(Into::into));
        self
    }

    /// Appends transient fields to return for each result.
    pub fn add_transients<I, S>(mut self, transients: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.transients.extend(transients.into_iter().map(Into::into));
        self
    }

    /// Appends sheets to search.
    pub fn add_sheets<I, S>(mut self, sheets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.sheets.extend(sheets.into_iter().map(Into::into));
        self
    }

    // ── Clauses ──────────────────────────────────────────────────────

    /// Appends a predicate that results must match.
    pub fn filter(
        self,
        field: impl Into<String>,
        operator: Operator,
        value: impl Into<Value>,
    ) -> Self {
        self.clause(Filter::new(field, operator, value), false)
    }

    /// Appends a predicate that results must not match.
    pub fn exclude(
        self,
        field: impl Into<String>,
        operator: Operator,
        value: impl Into<Value>,
    ) -> Self {
        self.clause(Filter::new(field, operator, value), true)
    }

    /// Appends a group that results must match.
    pub fn group(self, group: FilterGroup) -> Self {
        self.clause(group, false)
    }

    /// Appends a group that results must not match.
    pub fn exclude_group(self, group: FilterGroup) -> Self {
        self.clause(group, true)
    }

    /// Appends any clause with an explicit exclude flag.
    pub fn clause(mut self, clause: impl Into<Clause>, exclude: bool) -> Self {
        self.filters.push((clause.into(), exclude));
        self
    }

    /// Appends a clause from loosely-typed arguments.
    ///
    /// A field target needs both an operator token and a value; a group
    /// target takes neither.
    ///
    /// # Errors
    ///
    /// - [`XivError::Parameter`] if a field is given without an operator or
    ///   without a value, or the operator token is not supported.
    /// - [`XivError::Type`] if a group is given together with an operator or
    ///   value, which matches neither call shape.
    pub fn try_filter(
        self,
        target: impl Into<FilterTarget>,
        operator: Option<&str>,
        value: Option<Value>,
        exclude: bool,
    ) -> XivResult<Self> {
        match target.into() {
            FilterTarget::Field(field) => {
                let operator = operator.ok_or_else(|| {
                    XivError::Parameter(format!(
                        "operator cannot be empty when a field name is provided ('{field}')"
                    ))
                })?;
                let value = value.ok_or_else(|| {
                    XivError::Parameter(format!(
                        "value cannot be empty when a field name is provided ('{field}')"
                    ))
                })?;
                let operator: Operator = operator.parse()?;
                Ok(self.clause(Filter::new(field, operator, value), exclude))
            }
            FilterTarget::Group(group) => {
                if operator.is_some() || value.is_some() {
                    return Err(XivError::Type(
                        "a filter group takes no operator or value; pass a field name instead"
                            .to_string(),
                    ));
                }
                Ok(self.clause(group, exclude))
            }
        }
    }

    // ── Scalars ──────────────────────────────────────────────────────

    /// Sets the maximum number of results. Zero leaves the limit unset.
    ///
    /// No upper bound is checked here; the service rejects values over its
    /// own maximum.
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Sets the game version to query, from a number or a string.
    pub fn set_version(mut self, version: impl Into<Version>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// Removes any previously set version.
    pub fn clear_version(mut self) -> Self {
        self.version = None;
        self
    }

    /// Sets the language for text fields.
    pub fn set_language(mut self, language: Language) -> Self {
        self.language = Some(language);
        self
    }

    /// Sets the schema used to interpret sheet fields.
    pub fn set_schema(mut self, schema: impl Into<String>) -> Self {
        self.schema = Some(schema.into());
        self
    }

    // ── Accessors ────────────────────────────────────────────────────

    pub fn sheets(&self) -> &[String] {
        &self.sheets
    }

    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    pub fn transients(&self) -> &[String] {
        &self.transients
    }

    /// The top-level signed clauses in insertion order.
    pub fn clauses(&self) -> &[(Clause, bool)] {
        &self.filters
    }

    /// The effective limit, if one will be emitted.
    pub fn get_limit(&self) -> Option<u32> {
        self.limit.filter(|limit| *limit > 0)
    }

    // ── Rendering ────────────────────────────────────────────────────

    /// Renders the signed clauses as the `query` parameter value.
    ///
    /// Returns `None` when no clause has been added.
    pub fn query_expression(&self) -> Option<String> {
        (!self.filters.is_empty()).then(|| join_signed(&self.filters))
    }

    /// Returns the ordered parameter mapping before URL encoding.
    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![("sheets", self.sheets.join(","))];

        if !self.fields.is_empty() {
            params.push(("fields", self.fields.join(",")));
        }
        if !self.transients.is_empty() {
            params.push(("transient", self.transients.join(",")));
        }
        if let Some(query) = self.query_expression() {
            params.push(("query", query));
        }
        if let Some(limit) = self.get_limit() {
            params.push(("limit", limit.to_string()));
        }
        if let Some(version) = self.version.as_ref().filter(|v| !v.is_empty()) {
            params.push(("version", version.to_string()));
        }
        if let Some(language) = self.language {
            params.push(("language", language.code().to_string()));
        }
        if let Some(schema) = self.schema.as_ref().filter(|s| !s.is_empty()) {
            params.push(("schema", schema.clone()));
        }

        params
    }

    /// Renders the URL-encoded query string with [`PercentEncoder`].
    pub fn build(&self) -> String {
        self.build_with(&PercentEncoder)
    }

    /// Renders the query string with a caller-supplied encoder.
    pub fn build_with(&self, encoder: &dyn ValueEncoder) -> String {
        urlencode(&self.to_params(), encoder)
    }
}

impl fmt::Display for QueryBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.build())
    }
}
