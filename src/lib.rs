//! Eventlint - event consistency checker for C plugin trees
//!
//! Eventlint scans C sources for the macros and calls that declare, define,
//! create and fire named events, merges what it finds into one registry keyed
//! by event identifier, and reports inconsistencies across files and plugins.
//! It is a line-oriented scanner, not a C parser.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (commands and reporting)
//! - `config`: Configuration file loading and parsing
//! - `core`: Scan engine (file collection, lexical state, extraction, registry)
//! - `issues`: Issue type definitions
//! - `rules`: Consistency rules over the registry

pub mod cli;
pub mod config;
pub mod core;
pub mod issues;
pub mod rules;
