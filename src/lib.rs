//! tsglot - checker and toolkit for Qt Linguist translation catalogs
//!
//! tsglot loads `.ts` catalogs as written by `lupdate`, validates them
//! (numerus form counts, duplicate keys, placeholders, accelerators, sibling
//! coverage, ...), resolves lookups the way `QTranslator` does and rewrites
//! catalogs for mechanical fixes.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (user-facing commands and actions)
//! - `config`: Configuration file loading and parsing
//! - `core`: Catalog model, reader, writer, numerus rules and lookup
//! - `issues`: Issue type definitions and reporting
//! - `mcp`: Model Context Protocol server implementation
//! - `rules`: Lint rules over parsed catalogs
//! - `utils`: Placeholder and accelerator helpers

pub mod cli;
pub mod config;
pub mod core;
pub mod issues;
pub mod mcp;
pub mod rules;
pub mod utils;
