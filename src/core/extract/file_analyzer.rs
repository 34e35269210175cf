use std::fs;

use anyhow::{Context, Result};

use super::{EventExtractor, Extraction};
use crate::core::{file_scanner::SourceFile, lexer::LexicalState};

/// One extraction, tagged with its 1-based line number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Observation {
    pub line: usize,
    pub extraction: Extraction,
}

/// Everything extracted from a single file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileObservations {
    pub file: String,
    pub plugin: String,
    pub observations: Vec<Observation>,
}

/// Run the lexical state machine over `source` and extract from eligible lines.
pub fn extract_from_source(source: &str, extractor: &EventExtractor<'_>) -> Vec<Observation> {
    let mut state = LexicalState::new();

    source
        .lines()
        .enumerate()
        .filter_map(|(idx, line)| {
            if !state.classify(line).is_eligible() {
                return None;
            }
            extractor.extract(line).map(|extraction| Observation {
                line: idx + 1,
                extraction,
            })
        })
        .collect()
}

/// Read and analyze one file. A read failure is an error for the whole scan.
pub fn analyze_file(
    file: &SourceFile,
    plugin: String,
    extractor: &EventExtractor<'_>,
) -> Result<FileObservations> {
    let bytes = fs::read(&file.path)
        .with_context(|| format!("Failed to read source file: {}", file.display_path))?;
    // C sources are not guaranteed to be UTF-8.
    let source = String::from_utf8_lossy(&bytes);

    Ok(FileObservations {
        file: file.display_path.clone(),
        plugin,
        observations: extract_from_source(&source, extractor),
    })
}
