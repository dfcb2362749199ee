//! Translation merging engine.
//!
//! ## Module Structure
//!
//! - `bundle`: TranslationBundle, the namespace -> locale -> key -> text document
//! - `loader`: Reading bundles from JSON files and combining them per locale
//! - `merge`: Combining partial bundles and building the English-fallback table
//! - `table`: MergedTable lookups and coverage statistics
//! - `translator`: Lookups against the currently active locale

pub mod bundle;
pub mod loader;
pub mod merge;
pub mod table;
pub mod translator;

pub use bundle::{Messages, TranslationBundle};
pub use loader::{LoadWarning, LoadedSources, load_sources, parse_bundle_file};
pub use merge::{CombineMode, combine_bundles, merge_translations};
pub use table::{Coverage, MergedTable};
pub use translator::{EnvLocale, LocaleSource, SharedLocale, Translator};
