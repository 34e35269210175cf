use super::{CommandResult, CommandSummary};
use crate::issues::{Issue, sort_issues};

pub fn finish(
    summary: CommandSummary,
    mut issues: Vec<Issue>,
    files_checked: usize,
    skipped_count: usize,
    exit_on_issues: bool,
) -> CommandResult {
    sort_issues(&mut issues);

    CommandResult {
        summary,
        exit_on_issues,
        issues,
        files_checked,
        skipped_count,
    }
}
