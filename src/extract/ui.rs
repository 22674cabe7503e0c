//! Extraction of translatable strings from Qt Designer `.ui` files.
//!
//! A Designer form contributes one context, named by its `<class>` element;
//! every `<string>` property is a translatable message unless it is marked
//! `notr="true"`.

use anyhow::{Result, bail};
use quick_xml::Reader;
use quick_xml::events::Event;

use crate::catalog::Location;
use crate::extract::ExtractedMessage;
use crate::utils::{build_line_index, offset_to_line};

/// Extract translatable strings from one Designer file.
///
/// Fails on malformed XML; the scanner downgrades that to a warning so a
/// broken form never aborts a whole project scan.
pub fn extract_ui(
    content: &str,
    file: &str,
    ignore_texts: &[String],
) -> Result<Vec<ExtractedMessage>> {
    let line_index = build_line_index(content);
    let mut reader = Reader::from_str(content);

    let mut saw_root = false;
    let mut class: Option<String> = None;
    let mut capture_class = false;
    let mut capture_string: Option<(usize, String)> = None;
    let mut strings: Vec<(usize, String)> = Vec::new();

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
            Event::Start(e) => match e.name().as_ref() {
                b"ui" => saw_root = true,
                b"class" if saw_root && class.is_none() => capture_class = true,
                b"string" if saw_root => {
                    let notr = e
                        .try_get_attribute("notr")?
                        .map(|a| a.unescape_value())
                        .transpose()?
                        .is_some_and(|v| v == "true");
                    if notr {
                        let end = e.to_end().into_owned();
                        reader.read_to_end(end.name())?;
                    } else {
                        let line =
                            offset_to_line(&line_index, reader.buffer_position() as usize);
                        capture_string = Some((line, String::new()));
                    }
                }
                _ if !saw_root => {
                    bail!("not a Designer form: root element is not <ui>");
                }
                _ => {}
            },
            Event::Text(t) => {
                let text = t.unescape()?;
                if capture_class {
                    class.get_or_insert_with(String::new).push_str(&text);
                } else if let Some((_, value)) = capture_string.as_mut() {
                    value.push_str(&text);
                }
            }
            Event::End(e) => match e.name().as_ref() {
                b"class" => capture_class = false,
                b"string" => {
                    if let Some(entry) = capture_string.take() {
                        strings.push(entry);
                    }
                }
                _ => {}
            },
            _ => {}
        }
    }

    if !saw_root {
        bail!("not a Designer form: missing <ui> root element");
    }

    // Forms are usually named; fall back to the file stem for anonymous ones.
    let context = class
        .map(|c| c.trim().to_string())
        .filter(|c| !c.is_empty())
        .unwrap_or_else(|| {
            std::path::Path::new(file)
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_else(|| file.to_string())
        });

    Ok(strings
        .into_iter()
        .filter(|(_, text)| !text.is_empty() && !ignore_texts.iter().any(|t| t == text))
        .map(|(line, text)| ExtractedMessage::new(context.clone(), text, Location::new(file, line)))
        .collect())
}
