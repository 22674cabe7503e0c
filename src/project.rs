//! Project context: configuration, scanned sources and loaded catalogs.
//!
//! Commands build one [`Project`] and work from it. Broken catalog files
//! are collected as issues instead of aborting, so a single bad document
//! never hides the rest of the report (the hosting behavior is the same:
//! a catalog that fails to load acts as an empty one).

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};

use crate::catalog::{Catalog, load_catalog};
use crate::config::{Config, load_config};
use crate::extract::{Extraction, ScanWarning, scan_sources};
use crate::issues::ParseErrorIssue;
use crate::utils::rel_slash;

/// Config values that CLI options may override.
#[derive(Debug, Clone, Default)]
pub struct ProjectOptions {
    pub source_root: Option<PathBuf>,
    /// Catalog paths or globs replacing the configured ones.
    pub catalogs: Vec<String>,
}

/// A catalog file that parsed successfully.
#[derive(Debug)]
pub struct LoadedCatalog {
    /// Path relative to the project root, slash-separated.
    pub path: String,
    pub catalog: Catalog,
}

#[derive(Debug)]
pub struct Project {
    pub root: PathBuf,
    pub config: Config,
    /// Scanned source files, relative to the source root.
    pub source_files: Vec<PathBuf>,
    pub extraction: Extraction,
    pub scan_warnings: Vec<ScanWarning>,
    pub catalogs: Vec<LoadedCatalog>,
    /// Catalog files that failed to load.
    pub load_errors: Vec<ParseErrorIssue>,
    /// Configured catalog paths that do not exist yet (no glob involved);
    /// `update --apply` creates them.
    pub new_catalog_paths: Vec<PathBuf>,
}

impl Project {
    /// Load the project rooted at `root` (usually the working directory).
    pub fn load(root: &Path, options: &ProjectOptions) -> Result<Project> {
        let mut config = load_config(root)?.config;
        if let Some(source_root) = &options.source_root {
            config.source_root = source_root.to_string_lossy().into_owned();
        }
        if !options.catalogs.is_empty() {
            config.catalogs = options.catalogs.clone();
        }
        config.validate()?;

        let scan = scan_sources(root, &config)?;

        let (existing, new_catalog_paths) = resolve_catalog_paths(root, &config.catalogs)?;
        let mut catalogs = Vec::new();
        let mut load_errors = Vec::new();
        for rel in existing {
            let display = rel_slash(&rel);
            match load_catalog(&root.join(&rel)) {
                Ok(catalog) => catalogs.push(LoadedCatalog {
                    path: display,
                    catalog,
                }),
                Err(err) => load_errors.push(ParseErrorIssue {
                    file_path: display,
                    error: format!("{:#}", err),
                }),
            }
        }

        Ok(Project {
            root: root.to_path_buf(),
            config,
            source_files: scan.files,
            extraction: scan.extraction,
            scan_warnings: scan.warnings,
            catalogs,
            load_errors,
            new_catalog_paths,
        })
    }

    /// Every load failure and scan warning as a reportable issue.
    pub fn parse_error_issues(&self) -> Vec<ParseErrorIssue> {
        let mut issues = self.load_errors.clone();
        issues.extend(self.scan_warnings.iter().map(|w| ParseErrorIssue {
            file_path: w.file_path.clone(),
            error: w.error.clone(),
        }));
        issues
    }
}

/// Split configured catalog entries into files that exist and literal paths
/// still to be created. Glob entries only ever match existing files.
fn resolve_catalog_paths(
    root: &Path,
    entries: &[String],
) -> Result<(Vec<PathBuf>, Vec<PathBuf>)> {
    let mut existing = Vec::new();
    let mut missing = Vec::new();

    for entry in entries {
        if entry.contains('*') || entry.contains('?') || entry.contains('[') {
            let pattern = root.join(entry);
            let pattern = pattern.to_string_lossy();
            let paths = glob::glob(&pattern)
                .with_context(|| format!("Invalid catalog pattern: \"{}\"", entry))?;
            for path in paths {
                let path = path.with_context(|| format!("Cannot read path for \"{}\"", entry))?;
                if let Ok(rel) = path.strip_prefix(root) {
                    existing.push(rel.to_path_buf());
                }
            }
        } else if root.join(entry).is_file() {
            existing.push(PathBuf::from(entry));
        } else {
            missing.push(PathBuf::from(entry));
        }
    }

    existing.sort();
    existing.dedup();
    Ok((existing, missing))
}
