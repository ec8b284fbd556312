//! Lookup command - resolve one message in every catalog.
//!
//! Uses the same fallbacks as the runtime: exact key, then the key without its
//! comment, then the source text. Catalogs that fall back are marked.

use std::path::Path;

use anyhow::{Context, Result};
use glob::Pattern;

use super::super::args::LookupCommand;
use super::helper::{finish, parse_error_issues};
use super::{CommandResult, CommandSummary, LookupEntry, LookupSummary};
use crate::core::{Catalog, CheckContext, MessageKey, lookup::Translator};

pub fn lookup(cmd: LookupCommand) -> Result<CommandResult> {
    let ctx = CheckContext::new(&cmd.common)?;

    let filter = cmd
        .catalog
        .as_deref()
        .map(|glob| {
            Pattern::new(glob).with_context(|| format!("Invalid glob pattern: \"{}\"", glob))
        })
        .transpose()?;

    let key = MessageKey::new(
        cmd.context.as_str(),
        cmd.source.as_str(),
        cmd.comment.as_deref().unwrap_or(""),
    );
    let results = lookup_in(
        ctx.catalogs(),
        filter.as_ref(),
        ctx.config.include_unfinished,
        &key,
        cmd.count,
    );

    Ok(finish(
        CommandSummary::Lookup(LookupSummary {
            context: cmd.context,
            source: cmd.source,
            results,
        }),
        parse_error_issues(&ctx),
        &ctx,
    ))
}

/// Resolve `key` in every catalog accepted by `filter`, in catalog order.
pub fn lookup_in(
    catalogs: &[Catalog],
    filter: Option<&Pattern>,
    include_unfinished: bool,
    key: &MessageKey,
    count: Option<i64>,
) -> Vec<LookupEntry> {
    catalogs
        .iter()
        .filter(|catalog| filter.is_none_or(|pattern| matches_catalog(pattern, &catalog.file_path)))
        .map(|catalog| {
            let translator = Translator::new(catalog, include_unfinished);
            let resolved = translator.resolve(&key.context, &key.source, &key.comment, count);
            LookupEntry {
                file_path: catalog.file_path.clone(),
                language: catalog.language.clone(),
                text: resolved.text,
                translated: resolved.translated,
            }
        })
        .collect()
}

/// Match against the file name first, then the whole path.
pub fn matches_catalog(pattern: &Pattern, file_path: &str) -> bool {
    let path = Path::new(file_path);
    path.file_name()
        .is_some_and(|name| pattern.matches(&name.to_string_lossy()))
        || pattern.matches_path(path)
}
