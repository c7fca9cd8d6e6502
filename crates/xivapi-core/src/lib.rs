//! # xivapi-core
//!
//! Core types, settings, and error types shared by the xivapi crates.
//! This crate performs no I/O beyond reading configuration files.
//!
//! ## Modules
//!
//! - [`error`] - Error types and result aliases
//! - [`language`] - The fixed set of game-data language codes
//! - [`settings`] - Client configuration
//! - [`settings_loader`] - Loading settings from TOML and the environment
//! - [`logging`] - Tracing-based logging integration

pub mod error;
pub mod language;
pub mod logging;
pub mod settings;
pub mod settings_loader;

// Re-export the most commonly used types at the crate root.
pub use error::{XivError, XivResult};
pub use language::Language;
pub use settings::ClientSettings;
