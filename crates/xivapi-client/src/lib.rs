//! # xivapi-client
//!
//! Async transport for the game-data API. [`XivApiClient`] turns
//! [`QueryBuilder`](xivapi_query::QueryBuilder) and
//! [`RowParams`](xivapi_query::RowParams) values into requests, maps
//! non-success statuses onto [`XivError`](xivapi_core::XivError), and decodes
//! responses into the [`models`].
//!
//! ```rust,no_run
//! use xivapi_client::XivApiClient;
//! use xivapi_query::{Operator, QueryBuilder};
//!
//! # async fn run() -> xivapi_core::XivResult<()> {
//! let client = XivApiClient::new()?;
//! let query = QueryBuilder::new(["Item"])
//!     .add_fields(["Name"])
//!     .filter("Name", Operator::Contains, "Steak");
//! for result in client.search(&query).await? {
//!     println!("{} {}", result.row_id, result.fields["Name"]);
//! }
//! # Ok(())
//! # }
//! ```

#![allow(clippy::doc_markdown)]

pub mod client;
pub mod models;

pub use client::{AssetFormat, XivApiClient};
pub use models::{GameVersion, RowsPage, SearchResult, SearchResults, SheetRow};
