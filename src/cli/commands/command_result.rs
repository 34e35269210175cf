use crate::{core::registry::EventRegistry, issues::Issue};

#[derive(Debug)]
pub enum CommandSummary {
    Check(CheckSummary),
    List(ListSummary),
    Init(InitSummary),
}

#[derive(Debug)]
pub struct CheckSummary {
    /// Number of distinct events in the registry.
    pub event_count: usize,
}

#[derive(Debug)]
pub struct ListSummary {
    pub registry: EventRegistry,
    pub json: bool,
}

#[derive(Debug)]
pub struct InitSummary {
    pub created: bool,
}

/// Result of running eventlint commands
#[derive(Debug)]
pub struct CommandResult {
    pub summary: CommandSummary,
    /// If true, exit code 1 is returned when any issue was found.
    pub exit_on_issues: bool,
    /// All issues found, sorted for display. Empty for non-check commands.
    pub issues: Vec<Issue>,
    /// Number of source files that were scanned.
    pub files_checked: usize,
    /// Directory entries that could not be read while collecting files.
    pub skipped_count: usize,
}

impl CommandResult {
    pub fn without_issues(summary: CommandSummary) -> Self {
        Self {
            summary,
            exit_on_issues: false,
            issues: Vec::new(),
            files_checked: 0,
            skipped_count: 0,
        }
    }
}
