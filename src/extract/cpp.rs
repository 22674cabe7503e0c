//! Regex-based extraction of translatable literals from C++-style sources.
//!
//! This is a heuristic scanner, not a compiler: it recognizes the common
//! shapes `tr("...")`, `Klass::tr("...")` and `translate("Ctx", "...")`,
//! and resolves the context of unqualified `tr()` calls from the nearest
//! preceding `Klass::method(` definition above the call site.

use std::sync::LazyLock;

use regex::Regex;

use crate::catalog::Location;
use crate::extract::{ExtractedMessage, ScanWarning};
use crate::utils::{build_line_index, offset_to_line};

static TR_CALL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?:([A-Za-z_]\w*(?:::[A-Za-z_]\w*)*)\s*::\s*)?\btr\s*\(\s*"((?:[^"\\]|\\.)*)""#)
        .expect("tr call pattern")
});

static TRANSLATE_CALL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"\btranslate\s*\(\s*"((?:[^"\\]|\\.)*)"\s*,\s*"((?:[^"\\]|\\.)*)""#)
        .expect("translate call pattern")
});

/// A line that starts a method definition: optional return type, then
/// `Klass::method(`. Statement-like lines are filtered separately.
static METHOD_DEF: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(?:[\w:<>,&*~\s]+\s+)?([A-Za-z_]\w*(?:::[A-Za-z_]\w*)*)\s*::\s*~?[A-Za-z_]\w*\s*\(")
        .expect("method definition pattern")
});

static CONTROL_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*\}?\s*(?:if|else|while|for|switch|return|case|do|new|delete)\b")
        .expect("control line pattern")
});

/// Extract translatable strings from one C++-style source file.
///
/// `file` is the path recorded in locations. `namespace_prefix` is prepended
/// to unqualified class names. Returns the messages in source order plus a
/// warning for every `tr()` call whose context could not be determined.
pub fn extract_cpp(
    content: &str,
    file: &str,
    namespace_prefix: &str,
    ignore_texts: &[String],
) -> (Vec<ExtractedMessage>, Vec<ScanWarning>) {
    let line_index = build_line_index(content);
    let class_by_line = track_classes(content);

    let mut found: Vec<(usize, ExtractedMessage)> = Vec::new();
    let mut warnings = Vec::new();

    for captures in TR_CALL.captures_iter(content) {
        let offset = captures.get(0).map_or(0, |m| m.start());
        let line = offset_to_line(&line_index, offset);
        let source = unescape_c(&captures[2]);
        if skip_text(&source, ignore_texts) {
            continue;
        }

        let context = match captures.get(1) {
            Some(qualifier) => Some(qualify(qualifier.as_str(), namespace_prefix)),
            None => class_by_line
                .get(line.saturating_sub(1))
                .and_then(|c| c.as_deref())
                .map(|c| qualify(c, namespace_prefix)),
        };

        match context {
            Some(context) => {
                found.push((
                    offset,
                    ExtractedMessage::new(context, source, Location::new(file, line)),
                ));
            }
            None => warnings.push(ScanWarning {
                file_path: file.to_string(),
                error: format!("cannot determine context for tr() call at line {}", line),
            }),
        }
    }

    for captures in TRANSLATE_CALL.captures_iter(content) {
        let offset = captures.get(0).map_or(0, |m| m.start());
        let line = offset_to_line(&line_index, offset);
        let context = unescape_c(&captures[1]);
        let source = unescape_c(&captures[2]);
        if context.is_empty() || skip_text(&source, ignore_texts) {
            continue;
        }
        found.push((
            offset,
            ExtractedMessage::new(context, source, Location::new(file, line)),
        ));
    }

    found.sort_by_key(|(offset, _)| *offset);
    let messages = found.into_iter().map(|(_, message)| message).collect();
    (messages, warnings)
}

/// For each line (0-indexed), the class whose method body the line belongs
/// to, as far as the definition heuristic can tell.
fn track_classes(content: &str) -> Vec<Option<String>> {
    let mut current: Option<String> = None;
    content
        .lines()
        .map(|line| {
            let trimmed = line.trim_end();
            if !CONTROL_LINE.is_match(trimmed)
                && !trimmed.ends_with(';')
                && let Some(captures) = METHOD_DEF.captures(trimmed)
            {
                current = Some(captures[1].to_string());
            }
            current.clone()
        })
        .collect()
}

fn qualify(name: &str, namespace_prefix: &str) -> String {
    if namespace_prefix.is_empty() || name.contains("::") {
        name.to_string()
    } else {
        format!("{}::{}", namespace_prefix, name)
    }
}

fn skip_text(source: &str, ignore_texts: &[String]) -> bool {
    source.is_empty() || ignore_texts.iter().any(|t| t == source)
}

/// Decode C escape sequences in a string literal body.
fn unescape_c(raw: &str) -> String {
    let mut result = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            result.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => result.push('\n'),
            Some('t') => result.push('\t'),
            Some('r') => result.push('\r'),
            Some('0') => result.push('\0'),
            Some(other) => result.push(other), // \" \\ \' and anything exotic
            None => result.push('\\'),
        }
    }
    result
}
