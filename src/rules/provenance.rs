//! Facts about one event claimed by more than one file.

use crate::{core::registry::EventRegistry, issues::ConflictingProvenanceIssue};

pub fn check_provenance_issues(registry: &EventRegistry) -> Vec<ConflictingProvenanceIssue> {
    registry
        .iter()
        .flat_map(|(id, event)| {
            event
                .conflicts
                .iter()
                .map(move |conflict| ConflictingProvenanceIssue {
                    event: id.to_string(),
                    kind: conflict.kind,
                    previous: conflict.previous.clone(),
                    current: conflict.current.clone(),
                })
        })
        .collect()
}
