//! Missing message detection rule.
//!
//! A string extracted from the sources must have an active entry in every
//! catalog, otherwise the application will silently fall back to the source
//! text at runtime for that locale.

use crate::issues::MissingMessageIssue;
use crate::project::{LoadedCatalog, Project};

pub fn check_missing_issues(project: &Project) -> Vec<MissingMessageIssue> {
    check_missing(&project.extraction, &project.catalogs)
}

/// Check for extracted strings without an active catalog entry.
///
/// One issue is reported per (context, source) pair, listing every catalog
/// that lacks it. Obsolete entries count as missing: they no longer resolve.
pub fn check_missing(
    extraction: &crate::extract::Extraction,
    catalogs: &[LoadedCatalog],
) -> Vec<MissingMessageIssue> {
    let mut issues = Vec::new();

    for (context_name, source, locations) in extraction.iter() {
        let missing_in: Vec<String> = catalogs
            .iter()
            .filter(|loaded| {
                !loaded
                    .catalog
                    .context(context_name)
                    .and_then(|c| c.message(source))
                    .is_some_and(|m| m.status.is_active())
            })
            .map(|loaded| loaded.path.clone())
            .collect();

        if !missing_in.is_empty() {
            issues.push(MissingMessageIssue {
                context_name: context_name.to_string(),
                source_text: source.to_string(),
                location: locations
                    .first()
                    .cloned()
                    .unwrap_or_else(|| crate::catalog::Location::new("", 0)),
                missing_in,
            });
        }
    }

    // Sort by location, then context/source for deterministic output
    issues.sort_by(|a, b| {
        a.location
            .filename
            .cmp(&b.location.filename)
            .then_with(|| a.location.line.cmp(&b.location.line))
            .then_with(|| a.context_name.cmp(&b.context_name))
            .then_with(|| a.source_text.cmp(&b.source_text))
    });

    issues
}
