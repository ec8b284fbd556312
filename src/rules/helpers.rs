//! Helpers shared by rule implementations.

use crate::{
    core::{Catalog, CatalogLocation, Context, Message, MessageContext, suppressions},
    issues::Rule,
};

/// Build the reporter's view of a message.
pub fn message_context(catalog: &Catalog, context: &Context, message: &Message) -> MessageContext {
    MessageContext::new(
        CatalogLocation::at(&catalog.file_path, message.source_position),
        &context.name,
        &message.source,
        message.comment_str(),
        &message.source_line,
    )
}

pub fn is_ignored_context(context: &Context, ignore_contexts: &[String]) -> bool {
    ignore_contexts.iter().any(|name| *name == context.name)
}

/// Active messages a rule should look at.
///
/// Skips obsolete and vanished entries, ignored contexts and messages whose
/// translator comment disables `rule`.
pub fn checked_messages<'a>(
    catalog: &'a Catalog,
    ignore_contexts: &'a [String],
    rule: Rule,
) -> impl Iterator<Item = (&'a Context, &'a Message)> + 'a {
    catalog.active_messages().filter(move |(context, message)| {
        !is_ignored_context(context, ignore_contexts) && !suppressions::is_suppressed(message, rule)
    })
}

/// Sort by file path, then line, for deterministic output.
pub fn sort_by_location<T>(issues: &mut [T], context: impl Fn(&T) -> &MessageContext) {
    issues.sort_by(|a, b| {
        let (a, b) = (context(a), context(b));
        a.location
            .cmp(&b.location)
            .then_with(|| a.source.cmp(&b.source))
    });
}
