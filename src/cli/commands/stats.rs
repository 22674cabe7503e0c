use std::path::Path;

use anyhow::{Ok, Result};

use super::super::args::StatsCommand;
use super::{
    CatalogStats, CommandResult, CommandSummary, StatsSummary,
    helper::finish,
};

use crate::{
    catalog::Catalog,
    issues::Issue,
    project::{Project, ProjectOptions},
};

pub fn stats(cmd: StatsCommand) -> Result<CommandResult> {
    let options = ProjectOptions {
        source_root: cmd.common.source_root.clone(),
        catalogs: cmd.common.catalogs.clone(),
    };
    let project = Project::load(Path::new("."), &options)?;

    let catalogs = project
        .catalogs
        .iter()
        .map(|loaded| catalog_stats(&loaded.path, &loaded.catalog))
        .collect();

    let issues: Vec<Issue> = project
        .parse_error_issues()
        .into_iter()
        .map(Issue::ParseError)
        .collect();

    let source_files = project.source_files.len();
    let catalog_files = project.catalogs.len();

    Ok(finish(
        CommandSummary::Stats(StatsSummary { catalogs }),
        issues,
        source_files,
        catalog_files,
        true,
    ))
}

fn catalog_stats(path: &str, catalog: &Catalog) -> CatalogStats {
    let mut finished = 0;
    let mut unfinished = 0;
    let mut obsolete = 0;

    for context in catalog.contexts() {
        for message in context.messages() {
            if !message.status.is_active() {
                obsolete += 1;
            } else if message.resolves() {
                finished += 1;
            } else {
                unfinished += 1;
            }
        }
    }

    CatalogStats {
        path: path.to_string(),
        language: catalog.language.clone(),
        contexts: catalog.contexts().len(),
        messages: catalog.message_count(),
        finished,
        unfinished,
        obsolete,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::catalog::parse_ts;

    #[test]
    fn test_catalog_stats() {
        let xml = r#"<TS version="2.0" language="de_DE">
<context>
    <name>PasteDialog</name>
    <message>
        <source>Service:</source>
        <translation>Dienst:</translation>
    </message>
    <message>
        <source>Highlight:</source>
        <translation type="unfinished"/>
    </message>
    <message>
        <source>Old text</source>
        <translation type="obsolete">Alter Text</translation>
    </message>
</context>
<context>
    <name>PasteServiceBase</name>
    <message>
        <source>Text pasted</source>
        <translation>Text eingefügt</translation>
    </message>
</context>
</TS>"#;
        let catalog = parse_ts(xml).unwrap();
        let stats = catalog_stats("app_de.ts", &catalog);

        assert_eq!(stats.language.as_deref(), Some("de_DE"));
        assert_eq!(stats.contexts, 2);
        assert_eq!(stats.messages, 4);
        assert_eq!(stats.finished, 2);
        assert_eq!(stats.unfinished, 1);
        assert_eq!(stats.obsolete, 1);
        assert_eq!(stats.percent_finished(), 66);
    }
}
