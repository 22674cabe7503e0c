//! Duplicate source detection rule.
//!
//! Within a context, source texts are unique by contract: a second entry
//! for the same string can never be reached by a lookup, so one of the two
//! translations is silently dead.

use crate::issues::DuplicateIssue;
use crate::project::{LoadedCatalog, Project};

pub fn check_duplicate_issues(project: &Project) -> Vec<DuplicateIssue> {
    check_duplicates(&project.catalogs)
}

pub fn check_duplicates(catalogs: &[LoadedCatalog]) -> Vec<DuplicateIssue> {
    let mut issues = Vec::new();

    for loaded in catalogs {
        for context in loaded.catalog.contexts() {
            for (first, duplicate) in context.duplicates() {
                issues.push(DuplicateIssue {
                    catalog_path: loaded.path.clone(),
                    line: duplicate.ts_line,
                    context_name: context.name.clone(),
                    source_text: duplicate.source.clone(),
                    first_line: first.ts_line,
                });
            }
        }
    }

    issues.sort_by(|a, b| {
        a.catalog_path
            .cmp(&b.catalog_path)
            .then_with(|| a.line.cmp(&b.line))
            .then_with(|| a.source_text.cmp(&b.source_text))
    });

    issues
}
