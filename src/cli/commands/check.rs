use anyhow::Result;

use super::super::args::CheckCommand;
use super::{
    helper::finish,
    {CommandResult, CommandSummary},
};
use crate::{core::CheckContext, rules::run_rules};

pub fn check(cmd: CheckCommand) -> Result<CommandResult> {
    let ctx = CheckContext::new(&cmd.common)?;
    let issues = run_rules(&ctx, &cmd.rules);
    Ok(finish(CommandSummary::Check, issues, &ctx))
}
