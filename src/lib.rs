//! Lingot - Qt Linguist catalog checker and updater
//!
//! Lingot is a CLI tool and library for working with Qt Linguist `.ts`
//! translation catalogs. It loads catalogs for runtime lookup with identity
//! fallback, re-extracts translatable strings from C++ and Designer sources,
//! merges them back while preserving translations, and reports missing,
//! untranslated, obsolete and duplicate entries.
//!
//! ## Module Structure
//!
//! - `catalog`: Catalog data model, TS document reader and writer
//! - `cli`: Command-line interface layer (user-facing commands)
//! - `config`: Configuration file loading and parsing
//! - `extract`: Translatable-string extraction from project sources
//! - `issues`: Issue type definitions and reporting
//! - `merge`: Extraction-into-catalog merging
//! - `project`: Project context (config + sources + catalogs)
//! - `rules`: Detection rules for catalog issues
//! - `utils`: Shared utility functions

pub mod catalog;
pub mod cli;
pub mod config;
pub mod extract;
pub mod issues;
pub mod merge;
pub mod project;
pub mod rules;
pub mod utils;
