//! Primary descriptor handling: locate the version reference in a Maven
//! pom, resolve `${...}` property indirection, and rewrite exactly the
//! resolved text while leaving every other byte of the document as written.

use crate::domain::model::VersionSlot;
use crate::utils::error::{BumpError, Result};
use quick_xml::events::Event;
use quick_xml::Reader;
use regex::Regex;
use std::ops::Range;
use std::path::Path;

const PROJECT_VERSION_PATH: [&str; 2] = ["project", "version"];

/// Locate the version reference at `/project/version` and resolve `${name}`
/// indirection through `/project/properties/<name>`. Returns the slot to
/// rewrite and its current literal text.
pub fn resolve_version(content: &str, path: &Path) -> Result<(VersionSlot, String)> {
    let version = find_text(content, &PROJECT_VERSION_PATH)?.ok_or_else(|| {
        BumpError::MissingVersionNode {
            path: path.display().to_string(),
        }
    })?;

    let text = version.value.trim().to_string();
    let indirection = Regex::new(r"^\$\{(.+)\}$").unwrap();
    let Some(caps) = indirection.captures(&text) else {
        return Ok((VersionSlot::ProjectVersion, text));
    };

    let name = caps[1].to_string();
    let target = ["project", "properties", name.as_str()];
    let property = find_text(content, &target)?.ok_or_else(|| BumpError::UnresolvedProperty {
        name: name.clone(),
        path: path.display().to_string(),
    })?;
    let value = property.value.trim().to_string();

    Ok((VersionSlot::Property(name), value))
}

/// Rewrite the text of the element `slot` points at to `next`. Only the
/// raw text span of that one element changes; the rest of the document
/// round-trips byte-for-byte.
pub fn with_version(content: &str, slot: &VersionSlot, next: &str, path: &Path) -> Result<String> {
    let target: Vec<&str> = match slot {
        VersionSlot::ProjectVersion => vec!["project", "version"],
        VersionSlot::Property(name) => vec!["project", "properties", name.as_str()],
    };

    let hit = find_text(content, &target)?.ok_or_else(|| BumpError::MissingVersionNode {
        path: path.display().to_string(),
    })?;

    let mut updated = String::with_capacity(content.len() + next.len());
    updated.push_str(&content[..hit.span.start]);
    updated.push_str(next);
    updated.push_str(&content[hit.span.end..]);
    Ok(updated)
}

struct TextHit {
    /// Byte range of the raw text inside the original document.
    span: Range<usize>,
    /// Unescaped text content.
    value: String,
}

/// First text node whose open-element path equals `target`.
fn find_text(content: &str, target: &[&str]) -> Result<Option<TextHit>> {
    let mut reader = Reader::from_str(content);
    let mut stack: Vec<String> = Vec::new();
    let mut start = reader.buffer_position();

    loop {
        match reader.read_event()? {
            Event::Start(e) => {
                stack.push(String::from_utf8_lossy(e.local_name().as_ref()).into_owned());
            }
            Event::End(_) => {
                stack.pop();
            }
            Event::Text(e) if path_matches(&stack, target) => {
                let end = reader.buffer_position();
                return Ok(Some(TextHit {
                    span: start..end,
                    value: e.unescape()?.into_owned(),
                }));
            }
            Event::Eof => return Ok(None),
            _ => {}
        }
        start = reader.buffer_position();
    }
}

fn path_matches(stack: &[String], target: &[&str]) -> bool {
    stack.len() == target.len() && stack.iter().zip(target).all(|(s, t)| s == t)
}
