//! Translation lookup over a loaded catalog.
//!
//! Resolves `(context, source, comment)` to translated text the way a runtime
//! translator would: exact key first, then the same source without a comment,
//! and finally the source text itself.

use std::collections::HashMap;

use crate::core::{
    Catalog, Message, MessageKey, TranslationKind,
    plural::{PluralRule, plural_rule},
};

/// Result of [`Translator::resolve`]: the text plus whether it came from the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved {
    pub text: String,
    /// False when the source text was returned as a fallback.
    pub translated: bool,
}

pub struct Translator<'a> {
    messages: HashMap<MessageKey, &'a Message>,
    rule: Option<PluralRule>,
    include_unfinished: bool,
}

impl<'a> Translator<'a> {
    /// Index the active messages of `catalog`.
    ///
    /// When the same key appears twice, the first occurrence wins.
    pub fn new(catalog: &'a Catalog, include_unfinished: bool) -> Self {
        let mut messages = HashMap::new();
        for (ctx, msg) in catalog.active_messages() {
            messages.entry(msg.key(&ctx.name)).or_insert(msg);
        }
        Self {
            messages,
            rule: catalog.language.as_deref().and_then(plural_rule),
            include_unfinished,
        }
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Find the message for a key, retrying without the comment.
    pub fn find(&self, context: &str, source: &str, comment: &str) -> Option<&'a Message> {
        let key = MessageKey::new(context, source, comment);
        if let Some(msg) = self.messages.get(&key) {
            return Some(*msg);
        }
        if comment.is_empty() {
            return None;
        }
        self.messages
            .get(&MessageKey::new(context, source, ""))
            .copied()
    }

    /// Translate a message, falling back to the source text.
    pub fn translate(&self, context: &str, source: &str, comment: &str, n: Option<i64>) -> String {
        self.resolve(context, source, comment, n).text
    }

    pub fn resolve(&self, context: &str, source: &str, comment: &str, n: Option<i64>) -> Resolved {
        let translated = self
            .find(context, source, comment)
            .and_then(|msg| self.pick_form(msg, n));

        let (text, translated) = match translated {
            Some(text) => (text.to_string(), true),
            None => (source.to_string(), false),
        };

        let text = match n {
            Some(n) => substitute_count(&text, n),
            None => text,
        };
        Resolved { text, translated }
    }

    fn pick_form<'m>(&self, msg: &'m Message, n: Option<i64>) -> Option<&'m str> {
        let translation = &msg.translation;
        if translation.kind == TranslationKind::Unfinished && !self.include_unfinished {
            return None;
        }

        let forms = translation.forms();
        let index = match (n, self.rule) {
            (Some(n), Some(rule)) if msg.numerus => rule.form_index(n),
            _ => 0,
        };
        // A form list shorter than the language needs falls back to the last form.
        let form = forms.get(index).or_else(|| forms.last())?;
        (!form.is_empty()).then_some(form.as_str())
    }
}

/// Replace `%n` and `%Ln` with the count.
fn substitute_count(text: &str, n: i64) -> String {
    text.replace("%Ln", &n.to_string())
        .replace("%n", &n.to_string())
}
