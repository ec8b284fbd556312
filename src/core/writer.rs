//! Serializes a [`Catalog`] back to `.ts` XML in the layout `lupdate` produces.

use std::{fmt::Write as _, fs, path::Path};

use anyhow::{Context as _, Result};

use super::parsers::escape::encode;
use crate::core::{Catalog, Context, Message, TranslationText};

const INDENT: &str = "    ";

/// Render a catalog as `.ts` XML.
pub fn write_catalog(catalog: &Catalog) -> String {
    let mut out = String::new();
    out.push_str("<?xml version=\"1.0\" encoding=\"utf-8\"?>\n");
    out.push_str("<!DOCTYPE TS>\n");

    out.push_str("<TS");
    if let Some(version) = &catalog.version {
        push_attr(&mut out, "version", version);
    }
    if let Some(language) = &catalog.language {
        push_attr(&mut out, "language", language);
    }
    if let Some(source_language) = &catalog.source_language {
        push_attr(&mut out, "sourcelanguage", source_language);
    }
    out.push_str(">\n");

    for context in &catalog.contexts {
        write_context(&mut out, context);
    }

    out.push_str("</TS>\n");
    out
}

/// Write a catalog to disk, replacing the file.
pub fn save_catalog(catalog: &Catalog, path: &Path) -> Result<()> {
    fs::write(path, write_catalog(catalog))
        .with_context(|| format!("Failed to write file: {}", path.display()))
}

fn write_context(out: &mut String, context: &Context) {
    out.push_str("<context>\n");
    push_element(out, 1, "name", &context.name);
    if let Some(comment) = &context.comment {
        push_element(out, 1, "comment", comment);
    }
    for message in &context.messages {
        write_message(out, message);
    }
    out.push_str("</context>\n");
}

fn write_message(out: &mut String, message: &Message) {
    out.push_str(INDENT);
    out.push_str("<message");
    if let Some(id) = &message.id {
        push_attr(out, "id", id);
    }
    if message.numerus {
        push_attr(out, "numerus", "yes");
    }
    out.push_str(">\n");

    for location in &message.locations {
        let _ = writeln!(
            out,
            "{INDENT}{INDENT}<location filename=\"{}\" line=\"{}\"/>",
            protect_attr(&location.file),
            location.line
        );
    }

    push_element(out, 2, "source", &message.source);
    let optional = [
        ("oldsource", &message.old_source),
        ("comment", &message.comment),
        ("oldcomment", &message.old_comment),
        ("extracomment", &message.extra_comment),
        ("translatorcomment", &message.translator_comment),
    ];
    for (name, value) in optional {
        if let Some(value) = value {
            push_element(out, 2, name, value);
        }
    }

    let translation = &message.translation;
    out.push_str(INDENT);
    out.push_str(INDENT);
    out.push_str("<translation");
    if let Some(kind) = translation.kind.attribute() {
        push_attr(out, "type", kind);
    }
    out.push('>');
    match &translation.text {
        TranslationText::Single(text) => out.push_str(&protect(text)),
        TranslationText::Plural(forms) => {
            out.push('\n');
            for form in forms {
                push_element(out, 3, "numerusform", form);
            }
            out.push_str(INDENT);
            out.push_str(INDENT);
        }
    }
    out.push_str("</translation>\n");

    out.push_str(INDENT);
    out.push_str("</message>\n");
}

fn push_attr(out: &mut String, name: &str, value: &str) {
    let _ = write!(out, " {}=\"{}\"", name, protect_attr(value));
}

fn push_element(out: &mut String, depth: usize, name: &str, text: &str) {
    for _ in 0..depth {
        out.push_str(INDENT);
    }
    let _ = writeln!(out, "<{name}>{}</{name}>", protect(text));
}

/// Escape element text the way `lupdate` does.
///
/// Control characters other than newline and tab become `<byte value="xN"/>`;
/// non-ASCII whitespace becomes a numeric character reference.
fn protect(text: &str) -> String {
    escape_controls(text, |out, c| {
        if c == '\n' || c == '\t' {
            out.push(c);
        } else {
            let _ = write!(out, "<byte value=\"x{:x}\"/>", c as u32);
        }
    })
}

/// Escape an attribute value. Elements are not allowed here, so every control
/// character (newline and tab included) becomes a numeric character reference.
fn protect_attr(text: &str) -> String {
    escape_controls(text, |out, c| {
        let _ = write!(out, "&#x{:x};", c as u32);
    })
}

fn escape_controls(text: &str, control: impl Fn(&mut String, char)) -> String {
    let escaped = encode(text);
    if !escaped
        .chars()
        .any(|c| c < ' ' || (!c.is_ascii() && c.is_whitespace()))
    {
        return escaped.into_owned();
    }

    let mut out = String::with_capacity(escaped.len() + 16);
    for c in escaped.chars() {
        if c < ' ' {
            control(&mut out, c);
        } else if !c.is_ascii() && c.is_whitespace() {
            let _ = write!(out, "&#x{:x};", c as u32);
        } else {
            out.push(c);
        }
    }
    out
}
