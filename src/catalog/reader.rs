//! Streaming parser for Qt Linguist TS documents.
//!
//! The reader is strict about structure (bad XML, a non-TS root, or a
//! message without `<source>` are load errors) and lenient about content
//! (unknown elements such as numerus forms or comments are skipped,
//! location attributes that fail to parse degrade to 0).

use std::borrow::Cow;
use std::fs;
use std::path::Path;

use anyhow::{Context as _, Result, bail};
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

use crate::catalog::{Catalog, Context, Location, Message, TranslationStatus};
use crate::utils::{build_line_index, offset_to_line};

/// Which leaf element text is currently being captured.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    None,
    Name,
    Source,
    Translation,
}

struct MessageBuilder {
    source: Option<String>,
    translation: String,
    status: TranslationStatus,
    locations: Vec<Location>,
    ts_line: usize,
}

/// Load and parse a catalog file.
pub fn load_catalog(path: &Path) -> Result<Catalog> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read catalog file: {}", path.display()))?;
    parse_ts(&content).with_context(|| format!("Failed to parse catalog file: {}", path.display()))
}

/// Parse a TS document from a string.
pub fn parse_ts(content: &str) -> Result<Catalog> {
    let line_index = build_line_index(content);
    let mut reader = Reader::from_str(content);

    let mut catalog = Catalog::new();
    let mut saw_root = false;
    let mut current_context: Option<Context> = None;
    let mut current_name = String::new();
    let mut current_message: Option<MessageBuilder> = None;
    let mut field = Field::None;

    loop {
        let event = match reader.read_event() {
            Ok(event) => event,
            Err(err) => {
                let line = offset_to_line(&line_index, reader.buffer_position() as usize);
                bail!("invalid XML at line {}: {}", line, err);
            }
        };

        match event {
            Event::Eof => break,
            Event::Start(e) => {
                let line = offset_to_line(&line_index, reader.buffer_position() as usize);
                match e.name().as_ref() {
                    b"TS" => {
                        saw_root = true;
                        if let Some(version) = attr(&e, b"version")? {
                            catalog.version = version;
                        }
                        catalog.language = attr(&e, b"language")?;
                        catalog.source_language = attr(&e, b"sourcelanguage")?;
                    }
                    b"context" if saw_root => {
                        current_context = Some(Context::default());
                        current_name.clear();
                    }
                    b"name" if current_context.is_some() && current_message.is_none() => {
                        field = Field::Name;
                    }
                    b"message" if current_context.is_some() => {
                        current_message = Some(MessageBuilder {
                            source: None,
                            translation: String::new(),
                            status: TranslationStatus::Finished,
                            locations: Vec::new(),
                            ts_line: line,
                        });
                    }
                    b"location" => {
                        if let Some(message) = current_message.as_mut() {
                            message.locations.push(read_location(&e)?);
                        }
                    }
                    b"source" if current_message.is_some() => {
                        field = Field::Source;
                        if let Some(message) = current_message.as_mut() {
                            message.source = Some(String::new());
                        }
                    }
                    b"translation" if current_message.is_some() => {
                        field = Field::Translation;
                        if let Some(message) = current_message.as_mut() {
                            if let Some(ty) = attr(&e, b"type")? {
                                message.status =
                                    TranslationStatus::from_type_attr(&ty).unwrap_or_default();
                            }
                        }
                    }
                    _ if !saw_root => {
                        bail!("not a TS document: unexpected root element at line {}", line);
                    }
                    _ => {
                        // Numerus forms, comments and other extensions are
                        // outside the catalog model; skip the whole subtree.
                        let end = e.to_end().into_owned();
                        reader.read_to_end(end.name())?;
                    }
                }
            }
            Event::Empty(e) => match e.name().as_ref() {
                b"location" => {
                    if let Some(message) = current_message.as_mut() {
                        message.locations.push(read_location(&e)?);
                    }
                }
                b"translation" if current_message.is_some() => {
                    if let Some(message) = current_message.as_mut() {
                        if let Some(ty) = attr(&e, b"type")? {
                            message.status =
                                TranslationStatus::from_type_attr(&ty).unwrap_or_default();
                        }
                    }
                }
                b"source" if current_message.is_some() => {
                    if let Some(message) = current_message.as_mut() {
                        message.source = Some(String::new());
                    }
                }
                _ => {}
            },
            Event::Text(t) => {
                if field != Field::None {
                    let text = t.unescape()?;
                    append_field(
                        field,
                        &text,
                        &mut current_name,
                        current_message.as_mut(),
                    );
                }
            }
            Event::CData(t) => {
                if field != Field::None {
                    let text = String::from_utf8_lossy(&t.into_inner()).into_owned();
                    append_field(
                        field,
                        &text,
                        &mut current_name,
                        current_message.as_mut(),
                    );
                }
            }
            Event::End(e) => match e.name().as_ref() {
                b"name" | b"source" | b"translation" => field = Field::None,
                b"message" => {
                    if let (Some(context), Some(builder)) =
                        (current_context.as_mut(), current_message.take())
                    {
                        let Some(source) = builder.source else {
                            bail!("message without <source> at line {}", builder.ts_line);
                        };
                        // Indentation around skipped child elements (numerus
                        // forms) must not count as translation text.
                        let translation = if builder.translation.trim().is_empty() {
                            String::new()
                        } else {
                            builder.translation
                        };
                        let mut message = Message::new(source, translation);
                        message.status = builder.status;
                        message.locations = builder.locations;
                        message.ts_line = builder.ts_line;
                        context.push(message);
                    }
                }
                b"context" => {
                    if let Some(mut context) = current_context.take() {
                        let name = current_name.trim();
                        if name.is_empty() {
                            let line =
                                offset_to_line(&line_index, reader.buffer_position() as usize);
                            bail!("context without <name> at line {}", line);
                        }
                        context.name = name.to_string();
                        catalog.push_context(context);
                    }
                }
                _ => {}
            },
            _ => {}
        }
    }

    if !saw_root {
        bail!("not a TS document: missing <TS> root element");
    }

    Ok(catalog)
}

fn append_field(
    field: Field,
    text: &str,
    current_name: &mut String,
    message: Option<&mut MessageBuilder>,
) {
    match field {
        Field::Name => current_name.push_str(text),
        Field::Source => {
            if let Some(message) = message {
                message.source.get_or_insert_with(String::new).push_str(text);
            }
        }
        Field::Translation => {
            if let Some(message) = message {
                message.translation.push_str(text);
            }
        }
        Field::None => {}
    }
}

fn read_location(e: &BytesStart<'_>) -> Result<Location> {
    let filename = attr(e, b"filename")?.unwrap_or_default();
    // The reference is informational, so a bad line attribute degrades to 0
    // instead of failing the load.
    let line = attr(e, b"line")?
        .and_then(|v| v.parse::<usize>().ok())
        .unwrap_or(0);
    Ok(Location::new(filename, line))
}

fn attr(e: &BytesStart<'_>, name: &[u8]) -> Result<Option<String>> {
    let value = e
        .try_get_attribute(name)?
        .map(|a| a.unescape_value())
        .transpose()?
        .map(Cow::into_owned);
    Ok(value)
}
