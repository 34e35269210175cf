use anyhow::Result;

use super::super::args::ListCommand;
use super::{CommandResult, CommandSummary, ListSummary};
use crate::core::ScanContext;

pub fn list(cmd: ListCommand) -> Result<CommandResult> {
    let ctx = ScanContext::new(&cmd.common)?;
    let registry = ctx.scan()?;

    let mut result = CommandResult::without_issues(CommandSummary::List(ListSummary {
        registry,
        json: cmd.json,
    }));
    result.files_checked = ctx.files.len();
    result.skipped_count = ctx.skipped_count;

    Ok(result)
}
