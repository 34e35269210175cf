//! Marker recognition on eligible source lines.
//!
//! Each eligible line is tested against the configured markers in a fixed
//! priority order: declaration, definition, creation, fire, listener
//! registration, listener definition. A macro marker only counts when it is
//! called, i.e. followed by an optional arity suffix and `(`, so names that merely
//! contain a marker (`EVENT_CODE_ESCAPE`) fall through to the next kind. The first
//! called marker decides how the line is parsed; if its arguments are malformed
//! the line yields nothing.

pub mod file_analyzer;

pub use file_analyzer::{FileObservations, Observation, analyze_file, extract_from_source};

use crate::config::Markers;

/// Partial event record extracted from one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Extraction {
    /// `EVENT_H(name)`, optionally arity-suffixed (`EVENT_H1(name, type)`).
    Declaration {
        identifier: String,
        arity: Option<usize>,
    },
    /// `EVENT_C(name)`.
    Definition { identifier: String },
    /// `name = event_create(plugin, "display")` or `event_create(handle, "display", ...)`.
    Creation {
        identifier: String,
        display_name: String,
    },
    /// `EVENT_FIREn(name, args...)`.
    Fire {
        identifier: String,
        arity: Option<usize>,
        args: Vec<String>,
    },
    ListenerRegistration,
    ListenerDefinition,
}

impl Extraction {
    pub fn identifier(&self) -> Option<&str> {
        match self {
            Extraction::Declaration { identifier, .. }
            | Extraction::Definition { identifier }
            | Extraction::Creation { identifier, .. }
            | Extraction::Fire { identifier, .. } => Some(identifier.as_str()),
            Extraction::ListenerRegistration | Extraction::ListenerDefinition => None,
        }
    }
}

pub struct EventExtractor<'a> {
    markers: &'a Markers,
}

impl<'a> EventExtractor<'a> {
    pub fn new(markers: &'a Markers) -> Self {
        Self { markers }
    }

    /// Recognize a marker on an eligible line.
    pub fn extract(&self, line: &str) -> Option<Extraction> {
        let markers = self.markers;

        if let Some(pos) = find_call(line, &markers.declaration) {
            let (arity, rest) = split_arity(&line[pos + markers.declaration.len()..]);
            return parse_macro_identifier(rest)
                .map(|identifier| Extraction::Declaration { identifier, arity });
        }

        if let Some(pos) = find_call(line, &markers.definition) {
            let (_, rest) = split_arity(&line[pos + markers.definition.len()..]);
            return parse_macro_identifier(rest)
                .map(|identifier| Extraction::Definition { identifier });
        }

        if let Some(pos) = find_call(line, &markers.creation) {
            return parse_creation(line, pos);
        }

        if let Some(pos) = find_call(line, &markers.fire) {
            return parse_fire(&line[pos + markers.fire.len()..]);
        }

        if line.contains(markers.listener_registration.as_str()) {
            return Some(Extraction::ListenerRegistration);
        }

        if line.contains(markers.listener_definition.as_str()) {
            return Some(Extraction::ListenerDefinition);
        }

        None
    }
}

/// Byte offset of the first occurrence of `marker` that is called, i.e. followed by
/// optional arity digits and `(`.
fn find_call(line: &str, marker: &str) -> Option<usize> {
    line.match_indices(marker).map(|(pos, _)| pos).find(|&pos| {
        let (_, rest) = split_arity(&line[pos + marker.len()..]);
        rest.trim_start().starts_with('(')
    })
}

/// Split a leading arity suffix (`1(` in `EVENT_FIRE1(`) off the text after a marker.
fn split_arity(rest: &str) -> (Option<usize>, &str) {
    let digits = rest
        .char_indices()
        .find(|(_, c)| !c.is_ascii_digit())
        .map_or(rest.len(), |(i, _)| i);
    (rest[..digits].parse().ok(), &rest[digits..])
}

fn is_identifier_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// `(name)` or `(name, ...)` → `name`.
fn parse_macro_identifier(rest: &str) -> Option<String> {
    let inner = rest.trim_start().strip_prefix('(')?;
    let end = inner.find([')', ',']).unwrap_or(inner.len());
    let identifier = inner[..end].trim();
    (!identifier.is_empty()).then(|| identifier.to_string())
}

fn parse_creation(line: &str, marker_pos: usize) -> Option<Extraction> {
    let display_field = line.split(',').nth(1)?;
    let display_name = display_field
        .trim_matches(|c: char| matches!(c, '"' | '(' | ')' | ';') || c.is_whitespace());
    if display_name.is_empty() {
        return None;
    }

    let identifier = match line[..marker_pos].rfind('=') {
        Some(eq) => line[..eq]
            .trim_end()
            .rsplit(|c: char| !is_identifier_char(c))
            .next()
            .unwrap_or_default(),
        // Without an assignment the call is keyed by its display name, which
        // must then be a string literal to tell it apart from prototypes.
        None if display_field.trim_start().starts_with('"') => display_name,
        None => return None,
    };
    if identifier.is_empty() {
        return None;
    }

    Some(Extraction::Creation {
        identifier: identifier.to_string(),
        display_name: display_name.to_string(),
    })
}

fn parse_fire(rest: &str) -> Option<Extraction> {
    let (arity, rest) = split_arity(rest);
    let inner = rest.trim_start().strip_prefix('(')?;

    let mut fields: Vec<&str> = inner
        .split(',')
        .map(|field| field.trim_matches(|c: char| c == ';' || c.is_whitespace()))
        .collect();
    if let Some(last) = fields.last_mut() {
        let field: &str = *last;
        *last = field.strip_suffix(')').unwrap_or(field).trim_end();
    }

    let identifier = fields.remove(0);
    if identifier.is_empty() {
        return None;
    }

    Some(Extraction::Fire {
        identifier: identifier.to_string(),
        arity,
        args: fields.into_iter().map(String::from).collect(),
    })
}
