//! Reader for Qt Linguist `.ts` catalogs.
//!
//! Walks the quick-xml event stream once and builds a [`Catalog`]. Every message
//! remembers where its `<message>` and `<source>` tags start so issues can point
//! back into the file.

use std::{collections::HashMap, fs, path::Path};

use quick_xml::{
    Reader,
    events::{BytesStart, Event},
};
use thiserror::Error;

use super::escape::{decode, decode_byte_value};
use crate::core::{
    Catalog, Context, Location, Message, Position, Translation, TranslationKind, TranslationText,
};

/// Number of leading bytes inspected by [`looks_like_catalog`].
const SNIFF_LEN: usize = 1024;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read file: {0}")]
    Io(#[from] std::io::Error),
    #[error("{line}:{col}: malformed XML: {message}")]
    Xml {
        line: usize,
        col: usize,
        message: String,
    },
    #[error("no <TS> root element found")]
    NoRoot,
    #[error("{line}:{col}: expected <TS> root element, found <{found}>")]
    NotACatalog {
        line: usize,
        col: usize,
        found: String,
    },
    #[error("{line}:{col}: unexpected <{element}> inside <{parent}>")]
    UnexpectedElement {
        line: usize,
        col: usize,
        element: String,
        parent: String,
    },
    #[error("{line}:{col}: <{element}> is missing <{child}>")]
    MissingElement {
        line: usize,
        col: usize,
        element: String,
        child: String,
    },
    #[error("{line}:{col}: invalid {attribute}=\"{value}\" on <{element}>")]
    InvalidAttribute {
        line: usize,
        col: usize,
        element: String,
        attribute: String,
        value: String,
    },
    #[error("unexpected end of file inside <{element}>")]
    UnexpectedEof { element: String },
}

/// Cheap check used by the scanner: `.ts` is also the TypeScript extension.
pub fn looks_like_catalog(content: &str) -> bool {
    let mut end = content.len().min(SNIFF_LEN);
    while !content.is_char_boundary(end) {
        end -= 1;
    }
    let head = &content[..end];
    head.contains("<TS>") || head.contains("<TS ") || head.contains("<!DOCTYPE TS")
}

pub fn parse_catalog_file(path: &Path) -> Result<Catalog, CatalogError> {
    let content = fs::read_to_string(path)?;
    parse_catalog(&content, &path.to_string_lossy())
}

pub fn parse_catalog(content: &str, file_path: &str) -> Result<Catalog, CatalogError> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    TsReader::new(content).read(file_path)
}

/// Build an index of line start byte offsets.
fn build_line_index(content: &str) -> Vec<usize> {
    let mut offsets = vec![0];
    for (i, c) in content.char_indices() {
        if c == '\n' {
            offsets.push(i + 1);
        }
    }
    offsets
}

fn tag_name(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

struct TsReader<'a> {
    reader: Reader<&'a [u8]>,
    content: &'a str,
    line_index: Vec<usize>,
    /// File of the previous `<location>`; relative records omit `filename`.
    current_file: Option<String>,
    /// Last resolved line per file, the base for `line="+N"`.
    last_line_by_file: HashMap<String, i64>,
}

impl<'a> TsReader<'a> {
    fn new(content: &'a str) -> Self {
        Self {
            reader: Reader::from_str(content),
            content,
            line_index: build_line_index(content),
            current_file: None,
            last_line_by_file: HashMap::new(),
        }
    }

    fn position(&self, offset: usize) -> Position {
        let offset = offset.min(self.content.len());
        let line = match self.line_index.binary_search(&offset) {
            Ok(line) => line + 1,
            Err(line) => line,
        };
        let line_start = self.line_index[line - 1];
        let col = self
            .content
            .get(line_start..offset)
            .map(|prefix| prefix.chars().count())
            .unwrap_or(0)
            + 1;
        Position::new(line, col)
    }

    fn line_text(&self, line: usize) -> &'a str {
        let start = self.line_index[line - 1];
        let end = self
            .line_index
            .get(line)
            .copied()
            .unwrap_or(self.content.len());
        self.content[start..end].trim_end_matches(['\n', '\r'])
    }

    /// Read the next event along with the byte offset it starts at.
    fn next(&mut self) -> Result<(usize, Event<'a>), CatalogError> {
        let offset = self.reader.buffer_position() as usize;
        match self.reader.read_event() {
            Ok(event) => Ok((offset, event)),
            Err(e) => {
                let pos = self.position(self.reader.error_position() as usize);
                Err(CatalogError::Xml {
                    line: pos.line,
                    col: pos.col,
                    message: e.to_string(),
                })
            }
        }
    }

    fn xml_error(&self, offset: usize, message: impl Into<String>) -> CatalogError {
        let pos = self.position(offset);
        CatalogError::Xml {
            line: pos.line,
            col: pos.col,
            message: message.into(),
        }
    }

    fn unexpected(&self, offset: usize, element: &[u8], parent: &str) -> CatalogError {
        let pos = self.position(offset);
        CatalogError::UnexpectedElement {
            line: pos.line,
            col: pos.col,
            element: tag_name(element),
            parent: parent.to_string(),
        }
    }

    fn missing(&self, offset: usize, element: &str, child: &str) -> CatalogError {
        let pos = self.position(offset);
        CatalogError::MissingElement {
            line: pos.line,
            col: pos.col,
            element: element.to_string(),
            child: child.to_string(),
        }
    }

    fn attributes(
        &self,
        start: &BytesStart<'_>,
        offset: usize,
    ) -> Result<Vec<(String, String)>, CatalogError> {
        let mut attrs = Vec::new();
        for attr in start.attributes() {
            let attr = attr.map_err(|e| self.xml_error(offset, e.to_string()))?;
            let raw = std::str::from_utf8(&attr.value)
                .map_err(|e| self.xml_error(offset, e.to_string()))?;
            let value = decode(raw).map_err(|e| self.xml_error(offset, e))?;
            attrs.push((tag_name(attr.key.as_ref()), value.into_owned()));
        }
        Ok(attrs)
    }

    fn skip(&mut self, start: &BytesStart<'_>, offset: usize) -> Result<(), CatalogError> {
        let end = start.to_end().into_owned();
        self.reader
            .read_to_end(end.name())
            .map(|_| ())
            .map_err(|e| self.xml_error(offset, e.to_string()))
    }

    fn read(mut self, file_path: &str) -> Result<Catalog, CatalogError> {
        loop {
            let (offset, event) = self.next()?;
            match event {
                Event::Start(start) => {
                    if start.name().as_ref() != b"TS" {
                        let pos = self.position(offset);
                        return Err(CatalogError::NotACatalog {
                            line: pos.line,
                            col: pos.col,
                            found: tag_name(start.name().as_ref()),
                        });
                    }
                    let mut catalog = self.catalog_header(&start, offset, file_path)?;
                    self.read_contexts(&mut catalog)?;
                    return Ok(catalog);
                }
                Event::Empty(start) if start.name().as_ref() == b"TS" => {
                    return self.catalog_header(&start, offset, file_path);
                }
                Event::Empty(start) => {
                    let pos = self.position(offset);
                    return Err(CatalogError::NotACatalog {
                        line: pos.line,
                        col: pos.col,
                        found: tag_name(start.name().as_ref()),
                    });
                }
                Event::Eof => return Err(CatalogError::NoRoot),
                _ => {}
            }
        }
    }

    fn catalog_header(
        &self,
        start: &BytesStart<'_>,
        offset: usize,
        file_path: &str,
    ) -> Result<Catalog, CatalogError> {
        let mut catalog = Catalog::new(file_path);
        for (key, value) in self.attributes(start, offset)? {
            match key.as_str() {
                "version" => catalog.version = Some(value),
                "language" => catalog.language = Some(value),
                "sourcelanguage" => catalog.source_language = Some(value),
                _ => {}
            }
        }
        Ok(catalog)
    }

    fn read_contexts(&mut self, catalog: &mut Catalog) -> Result<(), CatalogError> {
        loop {
            let (offset, event) = self.next()?;
            match event {
                Event::Start(start) if start.name().as_ref() == b"context" => {
                    let context = self.read_context(offset)?;
                    catalog.contexts.push(context);
                }
                // <dependencies> and other top-level extras carry no messages.
                Event::Start(start) => self.skip(&start, offset)?,
                Event::End(_) => return Ok(()),
                Event::Eof => {
                    return Err(CatalogError::UnexpectedEof {
                        element: "TS".to_string(),
                    });
                }
                _ => {}
            }
        }
    }

    fn read_context(&mut self, context_offset: usize) -> Result<Context, CatalogError> {
        let mut name: Option<String> = None;
        let mut context = Context::default();

        loop {
            let (offset, event) = self.next()?;
            match event {
                Event::Start(start) => match start.name().as_ref() {
                    b"name" => name = Some(self.read_text(b"name")?),
                    b"comment" => context.comment = Some(self.read_text(b"comment")?),
                    b"message" => {
                        let message = self.read_message(&start, offset)?;
                        context.messages.push(message);
                    }
                    _ => self.skip(&start, offset)?,
                },
                Event::Empty(start) => match start.name().as_ref() {
                    b"name" => name = Some(String::new()),
                    b"message" => {
                        return Err(self.missing(offset, "message", "source"));
                    }
                    _ => {}
                },
                Event::End(_) => break,
                Event::Eof => {
                    return Err(CatalogError::UnexpectedEof {
                        element: "context".to_string(),
                    });
                }
                _ => {}
            }
        }

        context.name = name.ok_or_else(|| self.missing(context_offset, "context", "name"))?;
        Ok(context)
    }

    fn read_message(
        &mut self,
        start: &BytesStart<'_>,
        message_offset: usize,
    ) -> Result<Message, CatalogError> {
        let mut message = Message {
            position: self.position(message_offset),
            ..Default::default()
        };
        for (key, value) in self.attributes(start, message_offset)? {
            match key.as_str() {
                "id" => message.id = Some(value),
                "numerus" => message.numerus = value == "yes",
                _ => {}
            }
        }

        let mut source: Option<String> = None;
        let mut translation: Option<Translation> = None;

        loop {
            let (offset, event) = self.next()?;
            match event {
                Event::Start(start) => match start.name().as_ref() {
                    b"source" => {
                        message.source_position = self.position(offset);
                        message.source_line = self.line_text(message.source_position.line).into();
                        source = Some(self.read_text(b"source")?);
                    }
                    b"oldsource" => message.old_source = Some(self.read_text(b"oldsource")?),
                    b"comment" => message.comment = Some(self.read_text(b"comment")?),
                    b"oldcomment" => {
                        message.old_comment = Some(self.read_text(b"oldcomment")?)
                    }
                    b"extracomment" => {
                        message.extra_comment = Some(self.read_text(b"extracomment")?)
                    }
                    b"translatorcomment" => {
                        message.translator_comment =
                            Some(self.read_text(b"translatorcomment")?)
                    }
                    b"translation" => {
                        let kind = self.translation_kind(&start, offset)?;
                        translation = Some(self.read_translation(kind)?);
                    }
                    b"location" => {
                        let location = self.location(&start, offset)?;
                        message.locations.push(location);
                        self.skip(&start, offset)?;
                    }
                    _ => self.skip(&start, offset)?,
                },
                Event::Empty(start) => match start.name().as_ref() {
                    b"location" => {
                        let location = self.location(&start, offset)?;
                        message.locations.push(location);
                    }
                    b"source" => {
                        message.source_position = self.position(offset);
                        message.source_line = self.line_text(message.source_position.line).into();
                        source = Some(String::new());
                    }
                    b"comment" => message.comment = Some(String::new()),
                    b"translation" => {
                        let kind = self.translation_kind(&start, offset)?;
                        translation = Some(Translation {
                            kind,
                            text: TranslationText::default(),
                        });
                    }
                    _ => {}
                },
                Event::End(_) => break,
                Event::Eof => {
                    return Err(CatalogError::UnexpectedEof {
                        element: "message".to_string(),
                    });
                }
                _ => {}
            }
        }

        message.source = source.ok_or_else(|| self.missing(message_offset, "message", "source"))?;
        message.translation =
            translation.ok_or_else(|| self.missing(message_offset, "message", "translation"))?;
        Ok(message)
    }

    fn translation_kind(
        &self,
        start: &BytesStart<'_>,
        offset: usize,
    ) -> Result<TranslationKind, CatalogError> {
        let value = self
            .attributes(start, offset)?
            .into_iter()
            .find(|(key, _)| key == "type")
            .map(|(_, value)| value)
            .unwrap_or_default();

        TranslationKind::from_attribute(&value).ok_or_else(|| {
            let pos = self.position(offset);
            CatalogError::InvalidAttribute {
                line: pos.line,
                col: pos.col,
                element: "translation".to_string(),
                attribute: "type".to_string(),
                value,
            }
        })
    }

    fn read_translation(&mut self, kind: TranslationKind) -> Result<Translation, CatalogError> {
        let mut single = String::new();
        let mut forms: Option<Vec<String>> = None;
        let mut variants: Vec<String> = Vec::new();

        loop {
            let (offset, event) = self.next()?;
            match event {
                Event::Text(text) => {
                    let raw = std::str::from_utf8(&text)
                        .map_err(|e| self.xml_error(offset, e.to_string()))?;
                    single.push_str(&decode(raw).map_err(|e| self.xml_error(offset, e))?);
                }
                Event::CData(data) => {
                    single.push_str(&String::from_utf8_lossy(&data));
                }
                Event::Start(start) => match start.name().as_ref() {
                    b"numerusform" => {
                        let form = self.read_numerus_form()?;
                        forms.get_or_insert_with(Vec::new).push(form);
                    }
                    b"lengthvariant" => {
                        variants.push(self.read_text(b"lengthvariant")?);
                    }
                    other => return Err(self.unexpected(offset, other, "translation")),
                },
                Event::Empty(start) => match start.name().as_ref() {
                    b"numerusform" => forms.get_or_insert_with(Vec::new).push(String::new()),
                    b"byte" => {
                        if let Some(c) = self.byte_value(&start, offset)? {
                            single.push(c);
                        }
                    }
                    _ => {}
                },
                Event::End(_) => break,
                Event::Eof => {
                    return Err(CatalogError::UnexpectedEof {
                        element: "translation".to_string(),
                    });
                }
                _ => {}
            }
        }

        let text = match forms {
            Some(forms) => TranslationText::Plural(forms),
            None if !variants.is_empty() => {
                TranslationText::Single(variants.swap_remove(0))
            }
            None => TranslationText::Single(single),
        };
        Ok(Translation { kind, text })
    }

    /// A plural form is either plain text or a list of `<lengthvariant>`s,
    /// of which the first (longest) one is kept.
    fn read_numerus_form(&mut self) -> Result<String, CatalogError> {
        let mut text = String::new();
        let mut variants: Vec<String> = Vec::new();
        loop {
            let (offset, event) = self.next()?;
            match event {
                Event::Text(raw) => {
                    let raw = std::str::from_utf8(&raw)
                        .map_err(|e| self.xml_error(offset, e.to_string()))?;
                    text.push_str(&decode(raw).map_err(|e| self.xml_error(offset, e))?);
                }
                Event::CData(data) => text.push_str(&String::from_utf8_lossy(&data)),
                Event::Start(start) if start.name().as_ref() == b"lengthvariant" => {
                    variants.push(self.read_text(b"lengthvariant")?);
                }
                Event::Empty(start) => match start.name().as_ref() {
                    b"lengthvariant" => variants.push(String::new()),
                    b"byte" => {
                        if let Some(c) = self.byte_value(&start, offset)? {
                            text.push(c);
                        }
                    }
                    other => return Err(self.unexpected(offset, other, "numerusform")),
                },
                Event::Start(start) => {
                    return Err(self.unexpected(offset, start.name().as_ref(), "numerusform"));
                }
                Event::End(_) if variants.is_empty() => return Ok(text),
                Event::End(_) => return Ok(variants.swap_remove(0)),
                Event::Eof => {
                    return Err(CatalogError::UnexpectedEof {
                        element: "numerusform".to_string(),
                    });
                }
                _ => {}
            }
        }
    }

    /// Collect the text content of a leaf element up to its end tag.
    fn read_text(&mut self, element: &[u8]) -> Result<String, CatalogError> {
        let mut text = String::new();
        loop {
            let (offset, event) = self.next()?;
            match event {
                Event::Text(raw) => {
                    let raw = std::str::from_utf8(&raw)
                        .map_err(|e| self.xml_error(offset, e.to_string()))?;
                    text.push_str(&decode(raw).map_err(|e| self.xml_error(offset, e))?);
                }
                Event::CData(data) => text.push_str(&String::from_utf8_lossy(&data)),
                Event::Empty(start) if start.name().as_ref() == b"byte" => {
                    if let Some(c) = self.byte_value(&start, offset)? {
                        text.push(c);
                    }
                }
                Event::Start(start) | Event::Empty(start) => {
                    return Err(self.unexpected(offset, start.name().as_ref(), &tag_name(element)));
                }
                Event::End(_) => return Ok(text),
                Event::Eof => {
                    return Err(CatalogError::UnexpectedEof {
                        element: tag_name(element),
                    });
                }
                _ => {}
            }
        }
    }

    fn byte_value(
        &self,
        start: &BytesStart<'_>,
        offset: usize,
    ) -> Result<Option<char>, CatalogError> {
        let value = self
            .attributes(start, offset)?
            .into_iter()
            .find(|(key, _)| key == "value")
            .map(|(_, value)| value)
            .unwrap_or_default();
        match decode_byte_value(&value) {
            Some(c) => Ok(Some(c)),
            None => {
                let pos = self.position(offset);
                Err(CatalogError::InvalidAttribute {
                    line: pos.line,
                    col: pos.col,
                    element: "byte".to_string(),
                    attribute: "value".to_string(),
                    value,
                })
            }
        }
    }

    /// Resolve a `<location>` record against the previous ones.
    fn location(&mut self, start: &BytesStart<'_>, offset: usize) -> Result<Location, CatalogError> {
        let mut filename: Option<String> = None;
        let mut line_attr: Option<String> = None;
        for (key, value) in self.attributes(start, offset)? {
            match key.as_str() {
                "filename" => filename = Some(value),
                "line" => line_attr = Some(value),
                _ => {}
            }
        }

        let file = match filename {
            Some(file) => file,
            None => self.current_file.clone().unwrap_or_default(),
        };

        let invalid_line = |value: &str| {
            let pos = self.position(offset);
            CatalogError::InvalidAttribute {
                line: pos.line,
                col: pos.col,
                element: "location".to_string(),
                attribute: "line".to_string(),
                value: value.to_string(),
            }
        };

        let line = match line_attr.as_deref().map(str::trim) {
            None | Some("") => 0,
            Some(value) if value.starts_with(['+', '-']) => {
                let delta: i64 = value.parse().map_err(|_| invalid_line(value))?;
                self.last_line_by_file
                    .get(&file)
                    .copied()
                    .unwrap_or(0)
                    .checked_add(delta)
                    .ok_or_else(|| invalid_line(value))?
            }
            Some(value) => value.parse().map_err(|_| invalid_line(value))?,
        };

        self.current_file = Some(file.clone());
        self.last_line_by_file.insert(file.clone(), line);
        Ok(Location::new(file, line))
    }
}
