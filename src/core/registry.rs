//! Cross-file event registry.
//!
//! Partial records from every file are folded into one map keyed by the event's
//! local identifier. The first observation creates the record; later ones only
//! touch the fields of their own kind and never clear what is already there.
//! When a file attribution is overwritten by a different file, the earlier
//! provenance is kept as a [`ProvenanceConflict`].

use std::collections::BTreeMap;

use serde::Serialize;

use super::extract::{Extraction, FileObservations, Observation};

/// One `EVENT_FIRE` call site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FireCall {
    pub file: String,
    pub line: usize,
    /// Numeric suffix of the fire macro (`EVENT_FIRE2` → 2), if any.
    pub arity: Option<usize>,
    pub args: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SiteKind {
    Declaration,
    Definition,
    Creation,
}

impl std::fmt::Display for SiteKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SiteKind::Declaration => write!(f, "declaration"),
            SiteKind::Definition => write!(f, "definition"),
            SiteKind::Creation => write!(f, "creation"),
        }
    }
}

/// A file attribution that was overwritten by another file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProvenanceConflict {
    pub kind: SiteKind,
    pub previous: String,
    pub current: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Event {
    pub declaration_file: Option<String>,
    pub definition_file: Option<String>,
    pub creation_file: Option<String>,
    pub declaration: Option<String>,
    pub definition: Option<String>,
    /// `<plugin>.<display name>`, only ever set from a creation site.
    pub global_name: Option<String>,
    /// Numeric suffix of the declaration macro (`EVENT_H1` → 1), if any.
    pub declared_arity: Option<usize>,
    pub fire_calls: Vec<FireCall>,
    pub conflicts: Vec<ProvenanceConflict>,
}

impl Event {
    fn attribute(&mut self, kind: SiteKind, file: &str) {
        let slot = match kind {
            SiteKind::Declaration => &mut self.declaration_file,
            SiteKind::Definition => &mut self.definition_file,
            SiteKind::Creation => &mut self.creation_file,
        };

        if let Some(previous) = slot.replace(file.to_string()) {
            if previous != file {
                self.conflicts.push(ProvenanceConflict {
                    kind,
                    previous,
                    current: file.to_string(),
                });
            }
        }
    }
}

#[derive(Debug, Default, Serialize)]
#[serde(transparent)]
pub struct EventRegistry {
    events: BTreeMap<String, Event>,
}

impl EventRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Existing record for `identifier`, or a freshly inserted empty one.
    pub fn get_or_create(&mut self, identifier: &str) -> &mut Event {
        self.events.entry(identifier.to_string()).or_default()
    }

    pub fn get(&self, identifier: &str) -> Option<&Event> {
        self.events.get(identifier)
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Events in identifier order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Event)> {
        self.events.iter().map(|(id, event)| (id.as_str(), event))
    }

    /// Fold everything observed in one file into the registry.
    pub fn merge(&mut self, file: FileObservations) {
        for observation in &file.observations {
            self.apply(&file.file, &file.plugin, observation);
        }
    }

    pub fn apply(&mut self, file: &str, plugin: &str, observation: &Observation) {
        match &observation.extraction {
            Extraction::Declaration { identifier, arity } => {
                let event = self.get_or_create(identifier);
                event.attribute(SiteKind::Declaration, file);
                event.declaration = Some(identifier.clone());
                if arity.is_some() {
                    event.declared_arity = *arity;
                }
            }
            Extraction::Definition { identifier } => {
                let event = self.get_or_create(identifier);
                event.attribute(SiteKind::Definition, file);
                event.definition = Some(identifier.clone());
            }
            Extraction::Creation {
                identifier,
                display_name,
            } => {
                let event = self.get_or_create(identifier);
                event.attribute(SiteKind::Creation, file);
                event.global_name = Some(format!("{}.{}", plugin, display_name));
            }
            Extraction::Fire {
                identifier,
                arity,
                args,
            } => {
                self.get_or_create(identifier).fire_calls.push(FireCall {
                    file: file.to_string(),
                    line: observation.line,
                    arity: *arity,
                    args: args.clone(),
                });
            }
            Extraction::ListenerRegistration | Extraction::ListenerDefinition => {}
        }
    }
}
