use anyhow::{Ok, Result};
use clap::ValueEnum;

use super::super::args::CheckCommand;
use super::{CheckSummary, CommandResult, CommandSummary, helper::finish};
use crate::{
    core::{ScanContext, registry::EventRegistry},
    issues::Issue,
    rules::{
        arity::check_arity_issues, missing_declaration::check_missing_declaration_issues,
        missing_definition::check_missing_definition_issues,
        provenance::check_provenance_issues, uncreated::check_uncreated_issues,
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum CheckRule {
    MissingDeclaration,
    MissingDefinition,
    Uncreated,
    Arity,
    Provenance,
}

impl CheckRule {
    pub fn all() -> Vec<CheckRule> {
        vec![
            CheckRule::MissingDeclaration,
            CheckRule::MissingDefinition,
            CheckRule::Uncreated,
            CheckRule::Arity,
            CheckRule::Provenance,
        ]
    }
}

pub fn check(cmd: CheckCommand) -> Result<CommandResult> {
    let ctx = ScanContext::new(&cmd.common)?;
    let registry = ctx.scan()?;

    let rules = if cmd.rules.is_empty() {
        CheckRule::all()
    } else {
        cmd.rules
    };

    Ok(finish(
        CommandSummary::Check(CheckSummary {
            event_count: registry.len(),
        }),
        run_rules(&registry, &rules),
        ctx.files.len(),
        ctx.skipped_count,
        true,
    ))
}

pub fn run_rules(registry: &EventRegistry, rules: &[CheckRule]) -> Vec<Issue> {
    let mut all_issues: Vec<Issue> = Vec::new();

    for rule in rules {
        match rule {
            CheckRule::MissingDeclaration => {
                let issues = check_missing_declaration_issues(registry);
                all_issues.extend(issues.into_iter().map(Issue::MissingDeclaration));
            }
            CheckRule::MissingDefinition => {
                let issues = check_missing_definition_issues(registry);
                all_issues.extend(issues.into_iter().map(Issue::MissingDefinition));
            }
            CheckRule::Uncreated => {
                let issues = check_uncreated_issues(registry);
                all_issues.extend(issues.into_iter().map(Issue::UncreatedEvent));
            }
            CheckRule::Arity => {
                let issues = check_arity_issues(registry);
                all_issues.extend(issues.into_iter().map(Issue::ArityMismatch));
            }
            CheckRule::Provenance => {
                let issues = check_provenance_issues(registry);
                all_issues.extend(issues.into_iter().map(Issue::ConflictingProvenance));
            }
        }
    }

    all_issues
}
