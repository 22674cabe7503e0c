use crate::issues::Issue;
use crate::merge::MergeStats;

#[derive(Debug)]
pub enum CommandSummary {
    Check,
    Update(UpdateSummary),
    Stats(StatsSummary),
    Init(InitSummary),
}

#[derive(Debug)]
pub struct UpdateSummary {
    pub files: Vec<CatalogUpdate>,
    pub is_apply: bool,
}

/// What an update did (or would do) to one catalog file.
#[derive(Debug)]
pub struct CatalogUpdate {
    pub path: String,
    /// True when the file did not exist before.
    pub created: bool,
    pub stats: MergeStats,
}

#[derive(Debug)]
pub struct StatsSummary {
    pub catalogs: Vec<CatalogStats>,
}

#[derive(Debug)]
pub struct CatalogStats {
    pub path: String,
    pub language: Option<String>,
    pub contexts: usize,
    pub messages: usize,
    pub finished: usize,
    pub unfinished: usize,
    pub obsolete: usize,
}

impl CatalogStats {
    /// Completion over the active messages, in percent.
    pub fn percent_finished(&self) -> usize {
        let active = self.finished + self.unfinished;
        if active == 0 {
            100
        } else {
            self.finished * 100 / active
        }
    }
}

#[derive(Debug)]
pub struct InitSummary {
    pub created: bool,
}

/// Result of running lingot commands
pub struct CommandResult {
    pub summary: CommandSummary,
    pub error_count: usize,
    pub warning_count: usize,
    /// If true, exit code 1 should be returned when error_count > 0.
    /// If false, always exit 0 (used for dry-run commands that report work to do).
    pub exit_on_errors: bool,
    /// All issues found during the check.
    /// Empty for non-check commands.
    pub issues: Vec<Issue>,
    /// Number of files that failed to parse or scan.
    pub parse_error_count: usize,
    /// Number of source files (C++/.ui) that were scanned.
    pub source_files_checked: usize,
    /// Number of catalog files that were loaded.
    pub catalog_files_checked: usize,
}
