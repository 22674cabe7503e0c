//! Extraction of translatable strings from project sources.
//!
//! The producer side of the catalog lifecycle: C++-style sources are scanned
//! for `tr()` / `translate()` calls and Designer `.ui` files for `<string>`
//! properties. The result feeds [`crate::merge`] to regenerate catalogs and
//! the check rules to compare catalogs against reality.

mod cpp;
mod scanner;
mod ui;

use std::collections::HashMap;

use crate::catalog::Location;

pub use cpp::extract_cpp;
pub use scanner::{ScanResult, scan_sources};
pub use ui::extract_ui;

/// One translatable string found in a source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedMessage {
    /// Context the string belongs to (class name, possibly qualified).
    pub context: String,
    /// The literal source text, with C escapes decoded.
    pub source: String,
    pub location: Location,
}

impl ExtractedMessage {
    pub fn new(context: impl Into<String>, source: impl Into<String>, location: Location) -> Self {
        Self {
            context: context.into(),
            source: source.into(),
            location,
        }
    }
}

/// A file that could not be scanned; reported, never fatal.
#[derive(Debug, Clone)]
pub struct ScanWarning {
    pub file_path: String,
    pub error: String,
}

/// All strings extracted from a project, deduplicated by (context, source)
/// in first-seen order with every location retained.
#[derive(Debug, Default)]
pub struct Extraction {
    order: Vec<(String, String)>,
    locations: HashMap<String, HashMap<String, Vec<Location>>>,
}

impl Extraction {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, message: ExtractedMessage) {
        let by_source = self.locations.entry(message.context.clone()).or_default();
        if !by_source.contains_key(&message.source) {
            self.order.push((message.context, message.source.clone()));
        }
        by_source
            .entry(message.source)
            .or_default()
            .push(message.location);
    }

    pub fn contains(&self, context: &str, source: &str) -> bool {
        self.locations
            .get(context)
            .is_some_and(|by_source| by_source.contains_key(source))
    }

    /// Iterate (context, source, locations) in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str, &[Location])> {
        self.order.iter().map(|(context, source)| {
            let locations = self.locations[context][source].as_slice();
            (context.as_str(), source.as_str(), locations)
        })
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
