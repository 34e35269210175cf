//! Events that are created but never declared with the declaration marker.

use crate::{core::registry::EventRegistry, issues::MissingDeclarationIssue};

pub fn check_missing_declaration_issues(registry: &EventRegistry) -> Vec<MissingDeclarationIssue> {
    registry
        .iter()
        .filter(|(_, event)| event.declaration.is_none())
        .filter_map(|(id, event)| {
            event
                .creation_file
                .as_ref()
                .map(|file| MissingDeclarationIssue {
                    event: id.to_string(),
                    creation_file: file.clone(),
                })
        })
        .collect()
}
