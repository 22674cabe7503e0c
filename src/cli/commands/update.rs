use std::path::Path;

use anyhow::{Ok, Result};

use super::super::args::UpdateCommand;
use super::{
    CatalogUpdate, CommandResult, CommandSummary, UpdateSummary,
    helper::finish,
};

use crate::{
    catalog::{Catalog, save_catalog},
    issues::Issue,
    merge::{MergeOptions, merge},
    project::{Project, ProjectOptions},
    utils::{locale_from_path, rel_slash},
};

pub fn update(cmd: UpdateCommand) -> Result<CommandResult> {
    let options = ProjectOptions {
        source_root: cmd.common.source_root.clone(),
        catalogs: cmd.common.catalogs.clone(),
    };
    let root = Path::new(".");
    let project = Project::load(root, &options)?;

    let merge_options = MergeOptions {
        drop_obsolete: cmd.no_obsolete,
    };

    let mut files = Vec::new();

    for loaded in &project.catalogs {
        let mut catalog = loaded.catalog.clone();
        let stats = merge(&mut catalog, &project.extraction, merge_options);
        if cmd.apply && stats.changed() {
            save_catalog(&catalog, &root.join(&loaded.path))?;
        }
        files.push(CatalogUpdate {
            path: loaded.path.clone(),
            created: false,
            stats,
        });
    }

    for rel in &project.new_catalog_paths {
        let mut catalog = match locale_from_path(rel) {
            Some(locale) => Catalog::with_language(locale),
            None => Catalog::new(),
        };
        let stats = merge(&mut catalog, &project.extraction, merge_options);
        if cmd.apply {
            save_catalog(&catalog, &root.join(rel))?;
        }
        files.push(CatalogUpdate {
            path: rel_slash(rel),
            created: true,
            stats,
        });
    }

    // Broken catalogs are never overwritten; they surface as parse errors.
    let issues: Vec<Issue> = project
        .parse_error_issues()
        .into_iter()
        .map(Issue::ParseError)
        .collect();

    let source_files = project.source_files.len();
    let catalog_files = project.catalogs.len();

    Ok(finish(
        CommandSummary::Update(UpdateSummary {
            files,
            is_apply: cmd.apply,
        }),
        issues,
        source_files,
        catalog_files,
        true,
    ))
}
