//! # xivapi
//!
//! Client library for the XIVAPI v2 game-data REST API.
//!
//! This is the meta-crate that re-exports the sub-crates for convenient
//! access. Depend on `xivapi` to get everything, or on an individual crate
//! when you only need the query builder.
//!
//! ```
//! use xivapi::prelude::*;
//!
//! let query = QueryBuilder::new(["Item"]).filter("Name", Operator::Contains, "Steak");
//! assert_eq!(query.build(), "sheets=Item&query=%2BName~%22Steak%22");
//! ```

/// Error types, language codes, settings, and logging.
pub use xivapi_core as core;

/// Search query builder and row lookup parameters.
#[cfg(feature = "query")]
pub use xivapi_query as query;

/// Async HTTP client and response models.
#[cfg(feature = "client")]
pub use xivapi_client as client;

pub use serde_json;
pub use tracing;

pub use xivapi_core::{ClientSettings, Language, XivError, XivResult};

/// The types most programs need, in one import.
pub mod prelude {
    pub use xivapi_core::{ClientSettings, Language, XivError, XivResult};

    #[cfg(feature = "query")]
    pub use xivapi_query::{Clause, Filter, FilterGroup, Operator, QueryBuilder, RowParams, Value};

    #[cfg(feature = "client")]
    pub use xivapi_client::{AssetFormat, SearchResults, SheetRow, XivApiClient};
}
