//! # xivapi-query
//!
//! Builds search requests in the service's query-string grammar. A
//! [`QueryBuilder`] accumulates sheets, field selections, and a list of signed
//! clauses; [`QueryBuilder::build`] renders them into a URL-encoded string
//! without touching the network.
//!
//! ```
//! use xivapi_query::{FilterGroup, Operator, QueryBuilder};
//!
//! let query = QueryBuilder::new(["Item"])
//!     .add_fields(["Name", "Description"])
//!     .filter("IsUntradable", Operator::Eq, false)
//!     .group(
//!         FilterGroup::new()
//!             .filter("Name", Operator::Contains, "Steak")
//!             .exclude("Name", Operator::Contains, "eft"),
//!     )
//!     .set_version(7.2)
//!     .limit(10);
//!
//! assert!(query.build().starts_with("sheets=Item&fields=Name%2CDescription&query="));
//! ```
//!
//! ## Module Overview
//!
//! - [`value`] - Filter values and their query literals
//! - [`operator`] - The closed set of comparison operators
//! - [`filter`] - [`Filter`], [`FilterGroup`], and the [`Clause`] union
//! - [`builder`] - The search [`QueryBuilder`]
//! - [`params`] - [`RowParams`] for sheet and row lookups
//! - [`encoding`] - The [`ValueEncoder`] seam and percent-encoding

// return_self_not_must_use: builder pattern methods are self-documenting
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::doc_markdown)]

pub mod builder;
pub mod encoding;
pub mod filter;
pub mod operator;
pub mod params;
pub mod value;

pub use builder::{FilterTarget, QueryBuilder};
pub use encoding::{urlencode, FormEncoder, PercentEncoder, ValueEncoder};
pub use filter::{Clause, Filter, FilterGroup};
pub use operator::Operator;
pub use params::RowParams;
pub use value::{Value, Version};
pub use xivapi_core::Language;
