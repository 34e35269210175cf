//! Events that are declared but never defined with the definition marker.

use crate::{core::registry::EventRegistry, issues::MissingDefinitionIssue};

pub fn check_missing_definition_issues(registry: &EventRegistry) -> Vec<MissingDefinitionIssue> {
    registry
        .iter()
        .filter(|(_, event)| event.definition.is_none())
        .filter_map(|(id, event)| {
            event
                .declaration_file
                .as_ref()
                .map(|file| MissingDefinitionIssue {
                    event: id.to_string(),
                    declaration_file: file.clone(),
                })
        })
        .collect()
}
