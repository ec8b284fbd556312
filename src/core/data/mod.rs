//! Core data types for translation catalogs.
//!
//! ## Module Structure
//!
//! - `catalog`: The catalog model (Catalog, Context, Message, Translation, Location)
//! - `location`: Positions inside catalog files and the reporter's MessageContext

pub mod catalog;
pub mod location;

pub use catalog::{
    Catalog, Context, Location, Message, MessageKey, Translation, TranslationKind,
    TranslationText,
};
pub use location::{CatalogLocation, MessageContext, Position};
