//! Obsolete entry detection rule.
//!
//! Obsolete and vanished messages never resolve at runtime; they linger in
//! a catalog after the sources moved on. Worth reviewing and dropping once
//! their translations are no longer interesting.

use crate::issues::ObsoleteIssue;
use crate::project::{LoadedCatalog, Project};

pub fn check_obsolete_issues(project: &Project) -> Vec<ObsoleteIssue> {
    check_obsolete(&project.catalogs)
}

pub fn check_obsolete(catalogs: &[LoadedCatalog]) -> Vec<ObsoleteIssue> {
    let mut issues = Vec::new();

    for loaded in catalogs {
        for context in loaded.catalog.contexts() {
            for message in context.messages() {
                if !message.status.is_active() {
                    issues.push(ObsoleteIssue {
                        catalog_path: loaded.path.clone(),
                        line: message.ts_line,
                        context_name: context.name.clone(),
                        source_text: message.source.clone(),
                    });
                }
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
