//! Fire calls whose argument count disagrees with the event.
//!
//! The expected count for a call comes from, in order: the arity suffix of the
//! fire macro at that call, the arity suffix of the event's declaration, and
//! finally the argument count of the event's first fire site.

use crate::{
    core::registry::{Event, EventRegistry, FireCall},
    issues::{ArityMismatchIssue, ArityReference},
};

pub fn check_arity_issues(registry: &EventRegistry) -> Vec<ArityMismatchIssue> {
    registry
        .iter()
        .flat_map(|(id, event)| {
            event.fire_calls.iter().filter_map(move |call| {
                let (expected, reference) = expected_arity(event, call)?;
                (call.args.len() != expected).then(|| ArityMismatchIssue {
                    event: id.to_string(),
                    call: call.clone(),
                    expected,
                    reference,
                })
            })
        })
        .collect()
}

fn expected_arity(event: &Event, call: &FireCall) -> Option<(usize, ArityReference)> {
    if let Some(arity) = call.arity {
        if arity != call.args.len() {
            return Some((arity, ArityReference::FireMacro));
        }
    }

    if let Some(arity) = event.declared_arity {
        let file = event.declaration_file.clone().unwrap_or_default();
        return Some((arity, ArityReference::Declaration { file }));
    }

    let first = event.fire_calls.first()?;
    Some((
        first.args.len(),
        ArityReference::FirstCall {
            file: first.file.clone(),
            line: first.line,
        },
    ))
}
