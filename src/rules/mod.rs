//! Consistency rules over the event registry.
//!
//! Each rule is a pure function from the merged [`EventRegistry`] to a specific
//! issue type, so rules can be run and tested in isolation.
//!
//! ## Module Structure
//!
//! - `missing_declaration`: created events that are never declared
//! - `missing_definition`: declared events that are never defined
//! - `uncreated`: fire calls to events that are never created
//! - `arity`: fire calls whose argument count disagrees with the event
//! - `provenance`: facts claimed by more than one file
//!
//! [`EventRegistry`]: crate::core::registry::EventRegistry

pub mod arity;
pub mod missing_declaration;
pub mod missing_definition;
pub mod provenance;
pub mod uncreated;
