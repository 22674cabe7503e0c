//! Issue types for catalog analysis results.
//!
//! Every issue is self-contained: it carries the location to point at and
//! the details the reporter needs, so printing requires no further lookups.

use std::cmp::Ordering;

use crate::catalog::Location;

// ============================================================
// Severity and Rule
// ============================================================

/// Severity level of an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// Rule identifier for each issue type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Rule {
    Missing,
    Untranslated,
    Obsolete,
    Duplicate,
    ParseError,
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rule::Missing => write!(f, "missing"),
            Rule::Untranslated => write!(f, "untranslated"),
            Rule::Obsolete => write!(f, "obsolete"),
            Rule::Duplicate => write!(f, "duplicate"),
            Rule::ParseError => write!(f, "parse-error"),
        }
    }
}

// ============================================================
// Issue types
// ============================================================

/// String extracted from the sources but absent (or obsolete) in one or
/// more catalogs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingMessageIssue {
    pub context_name: String,
    pub source_text: String,
    /// First place the string was extracted from.
    pub location: Location,
    /// Catalog files lacking the message.
    pub missing_in: Vec<String>,
}

impl MissingMessageIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::Missing
    }
}

/// Catalog entry with no usable translation yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UntranslatedIssue {
    pub catalog_path: String,
    /// Line of the message in the catalog document.
    pub line: usize,
    pub context_name: String,
    pub source_text: String,
}

impl UntranslatedIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::Untranslated
    }
}

/// Obsolete or vanished entry still kept in a catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObsoleteIssue {
    pub catalog_path: String,
    pub line: usize,
    pub context_name: String,
    pub source_text: String,
}

impl ObsoleteIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::Obsolete
    }
}

/// Second or later occurrence of a source text within one context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateIssue {
    pub catalog_path: String,
    /// Line of the duplicate occurrence.
    pub line: usize,
    pub context_name: String,
    pub source_text: String,
    /// Line of the first occurrence, the one lookups resolve to.
    pub first_line: usize,
}

impl DuplicateIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::Duplicate
    }
}

/// A file that could not be parsed or scanned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseErrorIssue {
    pub file_path: String,
    pub error: String,
}

impl ParseErrorIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::ParseError
    }
}

// ============================================================
// Issue enum
// ============================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Issue {
    Missing(MissingMessageIssue),
    Untranslated(UntranslatedIssue),
    Obsolete(ObsoleteIssue),
    Duplicate(DuplicateIssue),
    ParseError(ParseErrorIssue),
}

impl Issue {
    pub fn severity(&self) -> Severity {
        match self {
            Issue::Missing(_) => MissingMessageIssue::severity(),
            Issue::Untranslated(_) => UntranslatedIssue::severity(),
            Issue::Obsolete(_) => ObsoleteIssue::severity(),
            Issue::Duplicate(_) => DuplicateIssue::severity(),
            Issue::ParseError(_) => ParseErrorIssue::severity(),
        }
    }

    pub fn rule(&self) -> Rule {
        match self {
            Issue::Missing(_) => MissingMessageIssue::rule(),
            Issue::Untranslated(_) => UntranslatedIssue::rule(),
            Issue::Obsolete(_) => ObsoleteIssue::rule(),
            Issue::Duplicate(_) => DuplicateIssue::rule(),
            Issue::ParseError(_) => ParseErrorIssue::rule(),
        }
    }

    /// The headline shown after the severity.
    pub fn message(&self) -> String {
        match self {
            Issue::Missing(issue) => issue.source_text.clone(),
            Issue::Untranslated(issue) => issue.source_text.clone(),
            Issue::Obsolete(issue) => issue.source_text.clone(),
            Issue::Duplicate(issue) => issue.source_text.clone(),
            Issue::ParseError(issue) => issue.error.clone(),
        }
    }

    /// File the issue points at.
    pub fn file_path(&self) -> &str {
        match self {
            Issue::Missing(issue) => &issue.location.filename,
            Issue::Untranslated(issue) => &issue.catalog_path,
            Issue::Obsolete(issue) => &issue.catalog_path,
            Issue::Duplicate(issue) => &issue.catalog_path,
            Issue::ParseError(issue) => &issue.file_path,
        }
    }

    /// Line within `file_path`, 0 when unknown.
    pub fn line(&self) -> usize {
        match self {
            Issue::Missing(issue) => issue.location.line,
            Issue::Untranslated(issue) => issue.line,
            Issue::Obsolete(issue) => issue.line,
            Issue::Duplicate(issue) => issue.line,
            Issue::ParseError(_) => 0,
        }
    }

    /// Extra context printed as a note.
    pub fn details(&self) -> Option<String> {
        match self {
            Issue::Missing(issue) => Some(format!(
                "context {}; missing in: {}",
                issue.context_name,
                issue.missing_in.join(", ")
            )),
            Issue::Untranslated(issue) => Some(format!("context {}", issue.context_name)),
            Issue::Obsolete(issue) => Some(format!("context {}", issue.context_name)),
            Issue::Duplicate(issue) => Some(format!(
                "context {}; first occurrence at line {}",
                issue.context_name, issue.first_line
            )),
            Issue::ParseError(_) => None,
        }
    }

    /// Actionable advice printed as a hint.
    pub fn hint(&self) -> Option<String> {
        match self {
            Issue::Missing(_) => {
                Some("run `lingot update --apply` to add it to the catalogs".to_string())
            }
            Issue::Obsolete(_) => {
                Some("run `lingot update --apply --no-obsolete` to drop it".to_string())
            }
            Issue::Untranslated(_) | Issue::Duplicate(_) | Issue::ParseError(_) => None,
        }
    }
}

/// Deterministic ordering for reports: by file, line, rule, then headline.
pub fn compare_issues(a: &Issue, b: &Issue) -> Ordering {
    a.file_path()
        .cmp(b.file_path())
        .then_with(|| a.line().cmp(&b.line()))
        .then_with(|| a.rule().cmp(&b.rule()))
        .then_with(|| a.message().cmp(&b.message()))
}
