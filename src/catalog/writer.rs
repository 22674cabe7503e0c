//! Serializer for Qt Linguist TS documents.
//!
//! Emits the same shape the surrounding toolchain produces: XML declaration,
//! `<!DOCTYPE TS>`, 4-space indentation, contexts and messages in catalog
//! order. Round-trips are semantically lossless; byte layout may differ
//! (empty translations become self-closing elements).

use std::fs;
use std::io;
use std::path::Path;

use anyhow::{Context as _, Result};
use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};

use crate::catalog::Catalog;

/// Serialize a catalog to TS XML.
pub fn write_ts(catalog: &Catalog) -> Result<String> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 4);

    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))?;
    writer.write_event(Event::DocType(BytesText::new("TS")))?;

    let mut ts = BytesStart::new("TS");
    ts.push_attribute(("version", catalog.version.as_str()));
    if let Some(language) = &catalog.language {
        ts.push_attribute(("language", language.as_str()));
    }
    if let Some(source_language) = &catalog.source_language {
        ts.push_attribute(("sourcelanguage", source_language.as_str()));
    }
    writer.write_event(Event::Start(ts))?;

    for context in catalog.contexts() {
        writer.write_event(Event::Start(BytesStart::new("context")))?;
        write_text_element(&mut writer, "name", &context.name)?;

        for message in context.messages() {
            writer.write_event(Event::Start(BytesStart::new("message")))?;

            for location in &message.locations {
                let mut el = BytesStart::new("location");
                el.push_attribute(("filename", location.filename.as_str()));
                el.push_attribute(("line", location.line.to_string().as_str()));
                writer.write_event(Event::Empty(el))?;
            }

            write_text_element(&mut writer, "source", &message.source)?;

            let mut translation = BytesStart::new("translation");
            if let Some(ty) = message.status.type_attr() {
                translation.push_attribute(("type", ty));
            }
            if message.translation.is_empty() {
                writer.write_event(Event::Empty(translation))?;
            } else {
                writer.write_event(Event::Start(translation))?;
                writer.write_event(Event::Text(BytesText::new(&message.translation)))?;
                writer.write_event(Event::End(BytesEnd::new("translation")))?;
            }

            writer.write_event(Event::End(BytesEnd::new("message")))?;
        }

        writer.write_event(Event::End(BytesEnd::new("context")))?;
    }

    writer.write_event(Event::End(BytesEnd::new("TS")))?;

    let mut out = writer.into_inner();
    out.push(b'\n');
    String::from_utf8(out).context("serialized catalog is not valid UTF-8")
}

/// Serialize and write a catalog file.
pub fn save_catalog(catalog: &Catalog, path: &Path) -> Result<()> {
    let content = write_ts(catalog)?;
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    fs::write(path, content)
        .with_context(|| format!("Failed to write catalog file: {}", path.display()))
}

fn write_text_element<W: io::Write>(writer: &mut Writer<W>, tag: &str, text: &str) -> Result<()> {
    if text.is_empty() {
        writer.write_event(Event::Empty(BytesStart::new(tag)))?;
        return Ok(());
    }
    writer.write_event(Event::Start(BytesStart::new(tag)))?;
    writer.write_event(Event::Text(BytesText::new(text)))?;
    writer.write_event(Event::End(BytesEnd::new(tag)))?;
    Ok(())
}
