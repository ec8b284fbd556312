//! Core catalog engine.
//!
//! ## Module Structure
//!
//! - `data`: Catalog model and report locations
//! - `parsers`: `.ts` reader and entity codec
//! - `writer`: `.ts` writer (lupdate layout)
//! - `plural`: Numerus rules per language
//! - `lookup`: Runtime-style translation lookup
//! - `suppressions`: `tsglot-disable` directives in translator comments
//! - `file_scanner`: Catalog discovery
//! - `context`: `CheckContext`, the per-run state shared by commands

pub mod context;
pub mod data;
pub mod file_scanner;
pub mod lookup;
pub mod parsers;
pub mod plural;
pub mod suppressions;
pub mod writer;

pub use context::{CheckContext, LoadedCatalogs};
pub use data::{
    Catalog, CatalogLocation, Context, Location, Message, MessageContext, MessageKey, Position,
    Translation, TranslationKind, TranslationText,
};
