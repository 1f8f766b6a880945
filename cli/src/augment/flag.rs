//! # Flag Injector (`augment::flag`)
//!
//! File: cli/src/augment/flag.rs
//!
//! Appends a build property such as `<Nullable>enable</Nullable>` to the first
//! property group directly under a project document's root element.
//!
//! The document is streamed through `quick_xml` event by event, so everything
//! outside the inserted element (declaration, comments, attribute quoting,
//! line endings) comes back exactly as it went in. The new element copies the
//! indentation of the group's first child:
//!
//! ```xml
//! <Project>
//!   <PropertyGroup>
//!     <LangVersion>9.0</LangVersion>
//!     <Nullable>enable</Nullable>      <!-- inserted -->
//!   </PropertyGroup>
//! </Project>
//! ```
//!
//! The flag is appended even when the group already declares it.
//!
use crate::core::config::FlagConfig;
use crate::core::error::{AugmentError, Result};
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use quick_xml::{Reader, Writer};
use tracing::debug;

/// Depth of a direct child of the root element.
const GROUP_DEPTH: usize = 2;

enum Progress {
    Searching,
    InGroup {
        child_indent: Option<String>,
        pending_whitespace: Option<String>,
    },
    Done,
}

/// Returns `contents` with `flag` appended to its first top-level property group.
///
/// # Errors
///
/// `AugmentError::MalformedProjectDocument` when the XML cannot be parsed, its
/// elements are unbalanced, or it has no matching property group.
pub fn inject_flag(contents: &str, flag: &FlagConfig) -> Result<String> {
    let group = flag.property_group.as_bytes();
    let mut reader = Reader::from_str(contents);
    let mut writer = Writer::new(Vec::with_capacity(contents.len() + 64));
    let mut depth = 0usize;
    let mut progress = Progress::Searching;
    let mut root_seen = false;

    loop {
        let event = reader.read_event().map_err(|e| {
            malformed(format!(
                "XML error at byte {}: {}",
                reader.buffer_position(),
                e
            ))
        })?;

        if depth == 0 {
            match &event {
                Event::Start(start) | Event::Empty(start) if root_seen => {
                    return Err(malformed(format!(
                        "second root element <{}>",
                        String::from_utf8_lossy(start.name().as_ref())
                    ))
                    .into());
                }
                Event::Start(_) | Event::Empty(_) => root_seen = true,
                Event::Text(text) if !text.is_empty() && !is_whitespace(text) => {
                    return Err(malformed("text outside the root element".to_string()).into());
                }
                Event::CData(_) => {
                    return Err(malformed("CDATA outside the root element".to_string()).into());
                }
                _ => {}
            }
        }

        // Whitespace directly inside the target group is held back until we know
        // whether it precedes the group's end tag.
        if let Progress::InGroup {
            child_indent,
            pending_whitespace,
        } = &mut progress
        {
            let at_group_level = depth == GROUP_DEPTH;
            match &event {
                Event::Text(text) if at_group_level && is_whitespace(text) => {
                    if let Some(ws) = pending_whitespace.take() {
                        write_raw_text(&mut writer, &ws)?;
                    }
                    *pending_whitespace = Some(String::from_utf8_lossy(text).into_owned());
                    continue;
                }
                Event::End(_) if at_group_level => {
                    if pending_whitespace.is_some() {
                        write_raw_text(&mut writer, child_indent.as_deref().unwrap_or(""))?;
                    }
                    write_flag(&mut writer, flag)?;
                    if let Some(ws) = pending_whitespace.take() {
                        write_raw_text(&mut writer, &ws)?;
                    }
                    writer.write_event(&event)?;
                    depth -= 1;
                    progress = Progress::Done;
                    debug!("Appended <{}> to first <{}>", flag.name, flag.property_group);
                    continue;
                }
                Event::Start(_) | Event::Empty(_) if at_group_level && child_indent.is_none() => {
                    *child_indent = pending_whitespace.clone();
                }
                _ => {}
            }
            if let Some(ws) = pending_whitespace.take() {
                write_raw_text(&mut writer, &ws)?;
            }
        }

        match &event {
            Event::Start(start) => {
                depth += 1;
                if matches!(progress, Progress::Searching)
                    && depth == GROUP_DEPTH
                    && start.name().as_ref() == group
                {
                    progress = Progress::InGroup {
                        child_indent: None,
                        pending_whitespace: None,
                    };
                }
                writer.write_event(&event)?;
            }
            Event::Empty(start)
                if matches!(progress, Progress::Searching)
                    && depth + 1 == GROUP_DEPTH
                    && start.name().as_ref() == group =>
            {
                writer.write_event(Event::Start(start.clone()))?;
                write_flag(&mut writer, flag)?;
                writer.write_event(Event::End(BytesEnd::new(flag.property_group.as_str())))?;
                progress = Progress::Done;
                debug!("Expanded empty <{}> to hold <{}>", flag.property_group, flag.name);
            }
            Event::End(end) => {
                depth = depth.checked_sub(1).ok_or_else(|| {
                    malformed(format!(
                        "unexpected closing tag </{}>",
                        String::from_utf8_lossy(end.name().as_ref())
                    ))
                })?;
                writer.write_event(&event)?;
            }
            Event::Eof => break,
            _ => writer.write_event(&event)?,
        }
    }

    if depth != 0 {
        return Err(malformed(format!("{} element(s) left unclosed", depth)).into());
    }
    if !matches!(progress, Progress::Done) {
        return Err(malformed(format!(
            "no <{}> element found under the root element",
            flag.property_group
        ))
        .into());
    }

    String::from_utf8(writer.into_inner())
        .map_err(|e| malformed(format!("output is not valid UTF-8: {}", e)).into())
}

fn write_flag(writer: &mut Writer<Vec<u8>>, flag: &FlagConfig) -> Result<()> {
    writer.write_event(Event::Start(BytesStart::new(flag.name.as_str())))?;
    writer.write_event(Event::Text(BytesText::new(&flag.value)))?;
    writer.write_event(Event::End(BytesEnd::new(flag.name.as_str())))?;
    Ok(())
}

fn write_raw_text(writer: &mut Writer<Vec<u8>>, text: &str) -> Result<()> {
    if !text.is_empty() {
        writer.write_event(Event::Text(BytesText::from_escaped(text)))?;
    }
    Ok(())
}

fn is_whitespace(text: &BytesText) -> bool {
    let raw: &[u8] = text;
    !raw.is_empty() && raw.iter().all(u8::is_ascii_whitespace)
}

fn malformed(message: String) -> AugmentError {
    AugmentError::MalformedProjectDocument(message)
}
