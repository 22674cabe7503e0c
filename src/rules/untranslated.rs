//! Untranslated entry detection rule.
//!
//! Flags catalog entries that resolve to nothing at runtime: unfinished
//! messages and messages whose translation text is empty.

use crate::issues::UntranslatedIssue;
use crate::project::{LoadedCatalog, Project};

pub fn check_untranslated_issues(project: &Project) -> Vec<UntranslatedIssue> {
    check_untranslated(&project.catalogs)
}

pub fn check_untranslated(catalogs: &[LoadedCatalog]) -> Vec<UntranslatedIssue> {
    let mut issues = Vec::new();

    for loaded in catalogs {
        for context in loaded.catalog.contexts() {
            for message in context.messages() {
                if message.status.is_active() && !message.resolves() {
                    issues.push(UntranslatedIssue {
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
