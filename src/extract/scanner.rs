//! Source-file discovery and parallel extraction.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use glob::Pattern;
use rayon::prelude::*;
use walkdir::{DirEntry, WalkDir};

use crate::config::Config;
use crate::extract::{ExtractedMessage, Extraction, ScanWarning, extract_cpp, extract_ui};
use crate::utils::rel_slash;

/// Outcome of scanning a project's sources.
#[derive(Debug, Default)]
pub struct ScanResult {
    /// Scanned files, relative to the source root, sorted.
    pub files: Vec<PathBuf>,
    pub extraction: Extraction,
    pub warnings: Vec<ScanWarning>,
}

/// Discover and extract every translatable string under the source root.
///
/// Files are visited in sorted order and extracted in parallel, so the
/// resulting extraction order is deterministic for a given tree.
pub fn scan_sources(root: &Path, config: &Config) -> Result<ScanResult> {
    let source_root = root.join(&config.source_root);
    let files = discover_files(&source_root, config);

    let per_file: Vec<(Vec<ExtractedMessage>, Vec<ScanWarning>)> = files
        .par_iter()
        .map(|rel| extract_file(&source_root, rel, config))
        .collect();

    let mut result = ScanResult {
        files,
        ..Default::default()
    };
    for (messages, warnings) in per_file {
        for message in messages {
            result.extraction.insert(message);
        }
        result.warnings.extend(warnings);
    }
    Ok(result)
}

fn extract_file(
    source_root: &Path,
    rel: &Path,
    config: &Config,
) -> (Vec<ExtractedMessage>, Vec<ScanWarning>) {
    let path = source_root.join(rel);
    let rel_name = rel_slash(rel);

    let content = match fs::read_to_string(&path) {
        Ok(content) => content,
        Err(err) => {
            return (
                Vec::new(),
                vec![ScanWarning {
                    file_path: rel_name,
                    error: format!("cannot read file: {}", err),
                }],
            );
        }
    };

    let is_form = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("ui"));

    if is_form {
        match extract_ui(&content, &rel_name, &config.ignore_texts) {
            Ok(messages) => (messages, Vec::new()),
            Err(err) => (
                Vec::new(),
                vec![ScanWarning {
                    file_path: rel_name,
                    error: format!("{:#}", err),
                }],
            ),
        }
    } else {
        extract_cpp(
            &content,
            &rel_name,
            &config.namespace_prefix,
            &config.ignore_texts,
        )
    }
}

fn discover_files(source_root: &Path, config: &Config) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(source_root)
        .follow_links(false)
        .into_iter()
        .filter_entry(|e| !is_hidden(e))
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .filter_map(|entry| {
            entry
                .path()
                .strip_prefix(source_root)
                .ok()
                .map(Path::to_path_buf)
        })
        .filter(|rel| wanted(rel, config))
        .collect();
    files.sort();
    files
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry.depth() > 0
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| name.starts_with('.'))
}

fn wanted(rel: &Path, config: &Config) -> bool {
    let Some(extension) = rel.extension().and_then(|e| e.to_str()) else {
        return false;
    };
    if !config
        .source_extensions
        .iter()
        .any(|e| e.eq_ignore_ascii_case(extension))
    {
        return false;
    }

    let rel_name = rel_slash(rel);

    if !config.includes.is_empty() {
        let included = config.includes.iter().any(|include| {
            rel_name == *include
                || rel_name.starts_with(&format!("{}/", include))
                || Pattern::new(include)
                    .map(|p| p.matches(&rel_name))
                    .unwrap_or(false)
        });
        if !included {
            return false;
        }
    }

    !config.ignores.iter().any(|ignore| {
        Pattern::new(ignore)
            .map(|p| p.matches(&rel_name))
            .unwrap_or(false)
    })
}
