//! trmerge - translation bundle merging with English fallback
//!
//! trmerge is a CLI tool and library that merges partial per-locale JSON
//! translation bundles against an English reference. Every locale ends up
//! with an entry for every namespace, and keys a locale does not translate
//! resolve to the English text, then to the key itself.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer
//! - `config`: Configuration file loading and parsing
//! - `core`: Bundle loading, merging and lookup
//! - `locale`: Supported locales and active-locale resolution
//! - `mcp`: Model Context Protocol server implementation

pub mod cli;
pub mod config;
pub mod core;
pub mod locale;
pub mod mcp;

pub use crate::core::{MergedTable, Translator};
pub use locale::Locale;
