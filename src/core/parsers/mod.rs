//! Catalog file parsers.
//!
//! - `escape`: XML entity decoding/encoding for catalog text
//! - `ts`: Qt Linguist `.ts` reader

pub mod escape;
pub mod ts;

pub use ts::{CatalogError, looks_like_catalog, parse_catalog, parse_catalog_file};
