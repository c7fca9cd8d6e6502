//! Filters and signed filter groups.
//!
//! A [`Filter`] is a single `field operator value` predicate. A
//! [`FilterGroup`] is an ordered list of signed clauses rendered as one
//! parenthesized clause. [`Clause`] is the union of the two, so groups may
//! hold other groups to any depth.
//!
//! # Examples
//!
//! ```
//! use xivapi_query::{FilterGroup, Operator};
//!
//! let group = FilterGroup::new()
//!     .filter("Name", Operator::Contains, "Steak")
//!     .exclude("Name", Operator::Contains, "eft");
//! assert_eq!(group.build(), r#"(+Name~"Steak" -Name~"eft")"#);
//! ```

use std::fmt;

use crate::operator::Operator;
use crate::value::Value;

/// A single field predicate.
#[derive(Debug, Clone, PartialEq)]
pub struct Filter {
    field: String,
    operator: Operator,
    value: Value,
}

impl Filter {
    /// Creates a new filter.
    pub fn new(field: impl Into<String>, operator: Operator, value: impl Into<Value>) -> Self {
        Self {
            field: field.into(),
            operator,
            value: value.into(),
        }
    }

    /// The field name on the left-hand side.
    pub fn field(&self) -> &str {
        &self.field
    }

    /// The comparison operator.
    pub const fn operator(&self) -> Operator {
        self.operator
    }

    /// The value on the right-hand side.
    pub const fn value(&self) -> &Value {
        &self.value
    }

    /// Renders the token `<field><operator><value>`.
    pub fn build(&self) -> String {
        format!(
            "{}{}{}",
            self.field,
            self.operator.as_str(),
            self.value.to_query_literal()
        )
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.build())
    }
}

/// Either a single predicate or a nested group.
#[derive(Debug, Clone, PartialEq)]
pub enum Clause {
    /// A single field predicate.
    Predicate(Filter),
    /// A parenthesized group of signed clauses.
    Group(FilterGroup),
}

impl Clause {
    /// Renders the clause without its sign.
    pub fn build(&self) -> String {
        match self {
            Self::Predicate(filter) => filter.build(),
            Self::Group(group) => group.build(),
        }
    }
}

impl fmt::Display for Clause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.build())
    }
}

impl From<Filter> for Clause {
    fn from(filter: Filter) -> Self {
        Self::Predicate(filter)
    }
}

impl From<FilterGroup> for Clause {
    fn from(group: FilterGroup) -> Self {
        Self::Group(group)
    }
}

/// An ordered, append-only list of signed clauses.
///
/// Each entry carries an exclude flag: excluded entries render with a `-`
/// prefix, included ones with `+`. Insertion order is preserved and nothing
/// is deduplicated.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterGroup {
    entries: Vec<(Clause, bool)>,
}

impl FilterGroup {
    /// Creates an empty group.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a predicate that results must match.
    pub fn filter(
        self,
        field: impl Into<String>,
        operator: Operator,
        value: impl Into<Value>,
    ) -> Self {
        self.filter_with(field, operator, value, false)
    }

    /// Appends a predicate that results must not match.
    pub fn exclude(
        self,
        field: impl Into<String>,
        operator: Operator,
        value: impl Into<Value>,
    ) -> Self {
        self.filter_with(field, operator, value, true)
    }

    /// Appends a predicate with an explicit exclude flag.
    pub fn filter_with(
        mut self,
        field: impl Into<String>,
        operator: Operator,
        value: impl Into<Value>,
        exclude: bool,
    ) -> Self {
        self.entries
            .push((Clause::Predicate(Filter::new(field, operator, value)), exclude));
        self
    }

    /// Appends a nested group.
    ///
    /// The grammar allows any depth, but the service is only known to accept
    /// groups directly under the top-level query.
    pub fn group(mut self, group: Self, exclude: bool) -> Self {
        self.entries.push((Clause::Group(group), exclude));
        self
    }

    /// The signed entries in insertion order.
    pub fn entries(&self) -> &[(Clause, bool)] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Renders `(<sign><clause> <sign><clause> ...)`. An empty group is `()`.
    pub fn build(&self) -> String {
        format!("({})", join_signed(&self.entries))
    }
}

impl fmt::Display for FilterGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.build())
    }
}

/// Joins signed clauses with single spaces: `-` when excluded, `+` otherwise.
pub(crate) fn join_signed(entries: &[(Clause, bool)]) -> String {
    entries
        .iter()
        .map(|(clause, exclude)| {
            let sign = if *exclude { '-' } else { '+' };
            format!("{sign}{}", clause.build())
        })
        .collect::<Vec<_>>()
        .join(" ")
}
