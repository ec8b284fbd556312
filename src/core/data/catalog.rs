use std::{fmt, path::Path};

use super::location::Position;

/// Lookup and uniqueness key of a message: `(context, source, comment)`.
///
/// An absent comment and an empty comment are the same key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MessageKey {
    pub context: String,
    pub source: String,
    pub comment: String,
}

impl MessageKey {
    pub fn new(
        context: impl Into<String>,
        source: impl Into<String>,
        comment: impl Into<String>,
    ) -> Self {
        Self {
            context: context.into(),
            source: source.into(),
            comment: comment.into(),
        }
    }
}

impl fmt::Display for MessageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.comment.is_empty() {
            write!(f, "{}::{}", self.context, self.source)
        } else {
            write!(f, "{}::{} ({})", self.context, self.source, self.comment)
        }
    }
}

/// State of a `<translation>` element, taken from its `type` attribute.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum TranslationKind {
    /// No `type` attribute: the translator marked it done.
    #[default]
    Finished,
    /// `type="unfinished"`: not yet (fully) translated.
    Unfinished,
    /// `type="obsolete"`: the source string no longer exists in code.
    Obsolete,
    /// `type="vanished"`: obsolete, written by newer `lupdate` versions.
    Vanished,
}

impl TranslationKind {
    /// Value of the `type` attribute, `None` for finished translations.
    pub fn attribute(&self) -> Option<&'static str> {
        match self {
            TranslationKind::Finished => None,
            TranslationKind::Unfinished => Some("unfinished"),
            TranslationKind::Obsolete => Some("obsolete"),
            TranslationKind::Vanished => Some("vanished"),
        }
    }

    pub fn from_attribute(value: &str) -> Option<Self> {
        match value {
            "" => Some(TranslationKind::Finished),
            "unfinished" => Some(TranslationKind::Unfinished),
            "obsolete" => Some(TranslationKind::Obsolete),
            "vanished" => Some(TranslationKind::Vanished),
            _ => None,
        }
    }

    /// Obsolete and vanished entries are kept in the file only for reference.
    pub fn is_dead(&self) -> bool {
        matches!(self, TranslationKind::Obsolete | TranslationKind::Vanished)
    }
}

impl fmt::Display for TranslationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.attribute().unwrap_or("finished"))
    }
}

/// Text content of a `<translation>` element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranslationText {
    /// Plain text content.
    Single(String),
    /// One string per numerus form, in `<numerusform>` order.
    Plural(Vec<String>),
}

impl Default for TranslationText {
    fn default() -> Self {
        TranslationText::Single(String::new())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Translation {
    pub kind: TranslationKind,
    pub text: TranslationText,
}

impl Translation {
    pub fn finished(text: impl Into<String>) -> Self {
        Self {
            kind: TranslationKind::Finished,
            text: TranslationText::Single(text.into()),
        }
    }

    pub fn unfinished() -> Self {
        Self {
            kind: TranslationKind::Unfinished,
            text: TranslationText::default(),
        }
    }

    /// All translated strings, whether singular or plural.
    pub fn forms(&self) -> &[String] {
        match &self.text {
            TranslationText::Single(text) => std::slice::from_ref(text),
            TranslationText::Plural(forms) => forms,
        }
    }

    /// True when every form is empty (or there are no forms at all).
    pub fn is_empty(&self) -> bool {
        self.forms().iter().all(|form| form.is_empty())
    }

    pub fn is_plural(&self) -> bool {
        matches!(self.text, TranslationText::Plural(_))
    }
}

/// A `<location>` record: where the source string appears in application code.
///
/// Relative records (`line="+3"`, omitted `filename`) are resolved by the reader,
/// so this always holds an absolute file and line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub file: String,
    pub line: i64,
}

impl Location {
    pub fn new(file: impl Into<String>, line: i64) -> Self {
        Self {
            file: file.into(),
            line,
        }
    }

    pub fn is_well_formed(&self) -> bool {
        !self.file.trim().is_empty() && self.line > 0
    }
}

/// A `<message>` element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Message {
    /// `id` attribute (id-based catalogs only).
    pub id: Option<String>,
    /// `numerus="yes"`: the translation is a list of plural forms.
    pub numerus: bool,
    pub source: String,
    pub old_source: Option<String>,
    /// Disambiguation comment.
    pub comment: Option<String>,
    pub old_comment: Option<String>,
    /// Comment for translators written by developers.
    pub extra_comment: Option<String>,
    /// Comment written by translators.
    pub translator_comment: Option<String>,
    pub locations: Vec<Location>,
    pub translation: Translation,
    /// Start of the `<message>` tag.
    pub position: Position,
    /// Start of the `<source>` tag; issues are anchored here.
    pub source_position: Position,
    /// Raw catalog line containing `<source>`.
    pub source_line: String,
}

impl Message {
    pub fn new(source: impl Into<String>, translation: Translation) -> Self {
        Self {
            source: source.into(),
            translation,
            ..Default::default()
        }
    }

    pub fn comment_str(&self) -> &str {
        self.comment.as_deref().unwrap_or("")
    }

    pub fn key(&self, context: &str) -> MessageKey {
        MessageKey::new(context, self.source.as_str(), self.comment_str())
    }

    /// Not obsolete or vanished.
    pub fn is_active(&self) -> bool {
        !self.translation.kind.is_dead()
    }
}

/// A `<context>` element: messages from one UI component.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Context {
    pub name: String,
    pub comment: Option<String>,
    pub messages: Vec<Message>,
}

impl Context {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }
}

/// A whole `.ts` file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    pub file_path: String,
    /// Format version (`version` attribute, e.g. "2.1").
    pub version: Option<String>,
    /// Target locale (`language` attribute, e.g. "vi_VN").
    pub language: Option<String>,
    pub source_language: Option<String>,
    pub contexts: Vec<Context>,
}

impl Catalog {
    pub fn new(file_path: impl Into<String>) -> Self {
        Self {
            file_path: file_path.into(),
            ..Default::default()
        }
    }

    /// All messages with their context, in document order.
    pub fn messages(&self) -> impl Iterator<Item = (&Context, &Message)> {
        self.contexts
            .iter()
            .flat_map(|ctx| ctx.messages.iter().map(move |msg| (ctx, msg)))
    }

    /// Messages that are neither obsolete nor vanished.
    pub fn active_messages(&self) -> impl Iterator<Item = (&Context, &Message)> {
        self.messages().filter(|(_, msg)| msg.is_active())
    }

    pub fn message_count(&self) -> usize {
        self.contexts.iter().map(|ctx| ctx.messages.len()).sum()
    }

    /// Base name of the catalog with its locale suffix removed.
    ///
    /// `drawpile_vi.ts` (language `vi_VN`) and `drawpile_uk.ts` (language `uk_UA`)
    /// both belong to the `drawpile` family.
    pub fn family(&self) -> String {
        let stem = Path::new(&self.file_path)
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_default();

        let Some(language) = self.language.as_deref().filter(|l| !l.is_empty()) else {
            return stem;
        };

        let primary = language
            .split(['_', '-', '@', '.'])
            .next()
            .unwrap_or(language);
        let dashed = language.replace('_', "-");

        for suffix in [language, dashed.as_str(), primary] {
            for sep in ['_', '-', '.'] {
                let candidate = format!("{}{}", sep, suffix);
                if let Some(base) = stem.strip_suffix(&candidate)
                    && !base.is_empty()
                {
                    return base.to_string();
                }
            }
        }

        stem
    }
}
