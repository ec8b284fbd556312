//! Malformed `<location>` records: empty file name or non-positive line.
//!
//! Stale locations (pointing at code that moved) are not checked; only the
//! record's shape matters.

use crate::{
    core::{Catalog, CheckContext},
    issues::{InvalidLocationIssue, Rule},
    rules::helpers::{checked_messages, message_context, sort_by_location},
};

pub fn check_invalid_location_issues(ctx: &CheckContext) -> Vec<InvalidLocationIssue> {
    check_invalid_locations(ctx.catalogs(), ctx.ignore_contexts())
}

pub fn check_invalid_locations(
    catalogs: &[Catalog],
    ignore_contexts: &[String],
) -> Vec<InvalidLocationIssue> {
    let mut issues: Vec<InvalidLocationIssue> = catalogs
        .iter()
        .flat_map(|catalog| {
            checked_messages(catalog, ignore_contexts, Rule::InvalidLocation).flat_map(
                move |(context, message)| {
                    message
                        .locations
                        .iter()
                        .filter(|location| !location.is_well_formed())
                        .map(move |location| InvalidLocationIssue {
                            context: message_context(catalog, context, message),
                            location: location.clone(),
                        })
                },
            )
        })
        .collect();

    sort_by_location(&mut issues, |i| &i.context);
    issues
}
