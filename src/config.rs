use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result};
use glob::Pattern;
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = ".lingotrc.json";

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Glob patterns for files and directories excluded from scanning.
    #[serde(default)]
    pub ignores: Vec<String>,
    /// Directories or glob patterns to scan. Empty means the whole source
    /// root.
    #[serde(default)]
    pub includes: Vec<String>,
    /// Catalog files to check and update. Entries may be globs; a literal
    /// path that does not exist yet is created by `update --apply`.
    #[serde(default = "default_catalogs")]
    pub catalogs: Vec<String>,
    #[serde(default = "default_source_root")]
    pub source_root: String,
    /// File extensions treated as translatable sources.
    #[serde(default = "default_source_extensions")]
    pub source_extensions: Vec<String>,
    /// Namespace prepended to unqualified class names found in sources
    /// (e.g. "LeechCraft::Azoth::Autopaste").
    #[serde(default)]
    pub namespace_prefix: String,
    /// Literals never extracted, matched exactly.
    #[serde(default)]
    pub ignore_texts: Vec<String>,
}

fn default_catalogs() -> Vec<String> {
    vec!["translations/*.ts".to_string()]
}

fn default_source_root() -> String {
    "./".to_string()
}

fn default_source_extensions() -> Vec<String> {
    ["cpp", "cc", "cxx", "c", "h", "hh", "hpp", "ui"]
        .map(String::from)
        .to_vec()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ignores: Vec::new(),
            includes: Vec::new(),
            catalogs: default_catalogs(),
            source_root: default_source_root(),
            source_extensions: default_source_extensions(),
            namespace_prefix: String::new(),
            ignore_texts: Vec::new(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error if any glob patterns in `ignores`, `includes` or
    /// `catalogs` are invalid.
    pub fn validate(&self) -> Result<()> {
        for pattern in &self.ignores {
            Pattern::new(pattern)
                .with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", pattern))?;
        }

        // Include patterns without wildcards are treated as literal
        // directory paths and need no validation.
        for pattern in &self.includes {
            if pattern.contains('*') || pattern.contains('?') {
                Pattern::new(pattern).with_context(|| {
                    format!("Invalid glob pattern in 'includes': \"{}\"", pattern)
                })?;
            }
        }

        for pattern in &self.catalogs {
            if pattern.contains('*') || pattern.contains('?') {
                Pattern::new(pattern).with_context(|| {
                    format!("Invalid glob pattern in 'catalogs': \"{}\"", pattern)
                })?;
            }
        }

        Ok(())
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
        }),
    }
}
