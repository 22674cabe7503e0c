use std::path::Path;

use anyhow::{Ok, Result};
use clap::ValueEnum;

use super::super::args::CheckCommand;
use super::{
    CommandResult, CommandSummary,
    helper::finish,
};

use crate::{
    issues::Issue,
    project::{Project, ProjectOptions},
    rules::{
        duplicate::check_duplicate_issues, missing::check_missing_issues,
        obsolete::check_obsolete_issues, untranslated::check_untranslated_issues,
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum CheckRule {
    Missing,
    Untranslated,
    Obsolete,
    Duplicate,
}

impl CheckRule {
    pub fn all() -> Vec<CheckRule> {
        vec![
            CheckRule::Missing,
            CheckRule::Untranslated,
            CheckRule::Obsolete,
            CheckRule::Duplicate,
        ]
    }
}

pub fn check(cmd: CheckCommand) -> Result<CommandResult> {
    let options = ProjectOptions {
        source_root: cmd.common.source_root.clone(),
        catalogs: cmd.common.catalogs.clone(),
    };
    let project = Project::load(Path::new("."), &options)?;

    let checks = if cmd.checks.is_empty() {
        CheckRule::all()
    } else {
        cmd.checks.clone()
    };

    let mut all_issues: Vec<Issue> = Vec::new();

    for check in checks {
        match check {
            CheckRule::Missing => {
                let issues = check_missing_issues(&project);
                all_issues.extend(issues.into_iter().map(Issue::Missing));
            }
            CheckRule::Untranslated => {
                let issues = check_untranslated_issues(&project);
                all_issues.extend(issues.into_iter().map(Issue::Untranslated));
            }
            CheckRule::Obsolete => {
                let issues = check_obsolete_issues(&project);
                all_issues.extend(issues.into_iter().map(Issue::Obsolete));
            }
            CheckRule::Duplicate => {
                let issues = check_duplicate_issues(&project);
                all_issues.extend(issues.into_iter().map(Issue::Duplicate));
            }
        }
    }

    let parse_errors = project.parse_error_issues();
    all_issues.extend(parse_errors.into_iter().map(Issue::ParseError));

    Ok(finish(
        CommandSummary::Check,
        all_issues,
        project.source_files.len(),
        project.catalogs.len(),
        true,
    ))
}
