//! Low-level catalog edits.
//!
//! Operations address a message by the position of its `<source>` tag, which
//! stays stable between the check that produced the issue and the re-parse
//! that applies the edit.

use std::io::{self, Write};

use colored::Colorize;

use crate::core::{
    Catalog, Message, MessageContext, Position, TranslationKind, TranslationText,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    /// Drop an obsolete or vanished message.
    RemoveMessage {
        context: MessageContext,
        kind: TranslationKind,
    },
    /// Set `type="unfinished"` on a translation.
    MarkUnfinished { context: MessageContext },
    /// Give the translation `count` forms and mark it unfinished.
    ///
    /// Numerus messages get a form list padded with empty strings or cut to
    /// `count`; other messages are collapsed to their first form.
    ResizeForms {
        context: MessageContext,
        count: usize,
    },
}

impl Operation {
    pub fn context(&self) -> &MessageContext {
        match self {
            Operation::RemoveMessage { context, .. }
            | Operation::MarkUnfinished { context }
            | Operation::ResizeForms { context, .. } => context,
        }
    }

    pub fn file_path(&self) -> &str {
        self.context().file_path()
    }

    fn position(&self) -> Position {
        let context = self.context();
        Position::new(context.line(), context.col())
    }

    fn describe(&self) -> String {
        match self {
            Operation::RemoveMessage { kind, .. } => format!("remove {} entry", kind),
            Operation::MarkUnfinished { .. } => "mark unfinished".to_string(),
            Operation::ResizeForms { count, .. } => {
                format!("resize to {} form(s), mark unfinished", count)
            }
        }
    }

    /// Print what this operation would do (dry-run mode).
    pub fn preview(&self) {
        self.preview_to(&mut io::stdout().lock());
    }

    pub fn preview_to<W: Write>(&self, writer: &mut W) {
        let context = self.context();
        let _ = writeln!(
            writer,
            "  {} {}:{}:{}  {}  {}",
            "-->".blue(),
            context.file_path(),
            context.line(),
            context.col(),
            context.qualified_key(),
            format!("({})", self.describe()).dimmed()
        );
    }

    /// Apply to a freshly parsed catalog. Returns false when the message is gone.
    pub fn apply(&self, catalog: &mut Catalog) -> bool {
        let position = self.position();

        if let Operation::RemoveMessage { .. } = self {
            for context in &mut catalog.contexts {
                let before = context.messages.len();
                context
                    .messages
                    .retain(|m| !(m.source_position == position && m.translation.kind.is_dead()));
                if context.messages.len() != before {
                    return true;
                }
            }
            return false;
        }

        let Some(message) = find_message_mut(catalog, position) else {
            return false;
        };

        match self {
            Operation::MarkUnfinished { .. } => {
                message.translation.kind = TranslationKind::Unfinished;
            }
            Operation::ResizeForms { count, .. } => {
                resize_forms(message, *count);
                message.translation.kind = TranslationKind::Unfinished;
            }
            Operation::RemoveMessage { .. } => {}
        }
        true
    }
}

fn find_message_mut(catalog: &mut Catalog, position: Position) -> Option<&mut Message> {
    catalog
        .contexts
        .iter_mut()
        .flat_map(|context| context.messages.iter_mut())
        .find(|message| message.source_position == position)
}

fn resize_forms(message: &mut Message, count: usize) {
    let mut forms = message.translation.forms().to_vec();
    if message.numerus {
        forms.resize(count.max(1), String::new());
        message.translation.text = TranslationText::Plural(forms);
    } else {
        let first = forms.into_iter().next().unwrap_or_default();
        message.translation.text = TranslationText::Single(first);
    }
}
