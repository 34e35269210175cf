//! Fire calls to events that no creation site ever instantiates.

use crate::{core::registry::EventRegistry, issues::UncreatedEventIssue};

/// One issue per fire call site of an event without a creation record.
pub fn check_uncreated_issues(registry: &EventRegistry) -> Vec<UncreatedEventIssue> {
    registry
        .iter()
        .filter(|(_, event)| event.creation_file.is_none())
        .flat_map(|(id, event)| {
            event.fire_calls.iter().map(move |call| UncreatedEventIssue {
                event: id.to_string(),
                call: call.clone(),
            })
        })
        .collect()
}
