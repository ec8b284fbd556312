//! Stats command - translation progress per catalog.

use anyhow::Result;

use super::super::args::StatsCommand;
use super::helper::{finish, parse_error_issues};
use super::{CatalogStats, CommandResult, CommandSummary, StatsSummary};
use crate::core::{Catalog, CheckContext, TranslationKind, plural::plural_rule};

pub fn stats(cmd: StatsCommand) -> Result<CommandResult> {
    let ctx = CheckContext::new(&cmd.common)?;

    let catalogs = ctx.catalogs().iter().map(catalog_stats).collect();

    Ok(finish(
        CommandSummary::Stats(StatsSummary { catalogs }),
        parse_error_issues(&ctx),
        &ctx,
    ))
}

pub fn catalog_stats(catalog: &Catalog) -> CatalogStats {
    let mut stats = CatalogStats {
        file_path: catalog.file_path.clone(),
        language: catalog.language.clone(),
        form_count: catalog
            .language
            .as_deref()
            .and_then(plural_rule)
            .map(|rule| rule.form_count()),
        messages: 0,
        finished: 0,
        unfinished: 0,
        obsolete: 0,
    };

    for (_, message) in catalog.messages() {
        match message.translation.kind {
            TranslationKind::Finished => stats.finished += 1,
            TranslationKind::Unfinished => stats.unfinished += 1,
            TranslationKind::Obsolete | TranslationKind::Vanished => stats.obsolete += 1,
        }
    }
    stats.messages = stats.finished + stats.unfinished;
    stats
}
