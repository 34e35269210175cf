use std::path::{Path, PathBuf};

use colored::Colorize;
use glob::Pattern;
use walkdir::WalkDir;

use crate::config::is_glob_pattern;

/// A collected source file.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct SourceFile {
    /// Root-relative path. Identifies the file everywhere except when reading it.
    pub display_path: String,
    /// Path used to read the file.
    pub path: PathBuf,
}

impl SourceFile {
    pub fn new(base_dir: &Path, path: PathBuf) -> Self {
        let display_path = path
            .strip_prefix(base_dir)
            .unwrap_or(&path)
            .to_string_lossy()
            .into_owned();
        Self { display_path, path }
    }
}

/// Result of scanning files.
pub struct ScanResult {
    /// Sorted by display path.
    pub files: Vec<SourceFile>,
    /// Entries that could not be read while walking.
    pub skipped_count: usize,
}

/// Walk each root under `base_dir` and collect files ending with one of `extensions`.
pub fn collect_files(
    base_dir: &Path,
    roots: &[String],
    extensions: &[String],
    verbose: bool,
) -> ScanResult {
    let mut files = Vec::new();
    let mut skipped_count = 0;

    for root in roots {
        let dir = base_dir.join(root);
        if !dir.exists() {
            if verbose {
                eprintln!(
                    "{} Scan root does not exist: {}",
                    "warning:".bold().yellow(),
                    dir.display()
                );
            }
            continue;
        }

        for entry in WalkDir::new(&dir).sort_by_file_name() {
            let entry = match entry {
                Ok(e) => e,
                Err(e) => {
                    skipped_count += 1;
                    if verbose {
                        eprintln!("{} Cannot access path: {}", "warning:".bold().yellow(), e);
                    }
                    continue;
                }
            };

            if entry.file_type().is_file() && has_extension(entry.path(), extensions) {
                files.push(SourceFile::new(base_dir, entry.into_path()));
            }
        }
    }

    files.sort();
    files.dedup();

    ScanResult {
        files,
        skipped_count,
    }
}

fn has_extension(path: &Path, extensions: &[String]) -> bool {
    path.file_name()
        .map(|name| name.to_string_lossy())
        .is_some_and(|name| extensions.iter().any(|ext| name.ends_with(ext.as_str())))
}

/// Drop files whose display path contains one of `patterns`.
///
/// Patterns with wildcards are matched as globs against the display path instead.
pub fn exclude_files(files: Vec<SourceFile>, patterns: &[String], verbose: bool) -> Vec<SourceFile> {
    let mut substrings: Vec<&str> = Vec::new();
    let mut globs: Vec<Pattern> = Vec::new();

    for p in patterns {
        if is_glob_pattern(p) {
            match Pattern::new(p) {
                Ok(pattern) => globs.push(pattern),
                Err(e) => {
                    if verbose {
                        eprintln!(
                            "{} Invalid exclude pattern '{}': {}",
                            "warning:".bold().yellow(),
                            p,
                            e
                        );
                    }
                }
            }
        } else {
            substrings.push(p);
        }
    }

    files
        .into_iter()
        .filter(|file| {
            let path = file.display_path.as_str();
            !substrings.iter().any(|s| path.contains(s)) && !globs.iter().any(|g| g.matches(path))
        })
        .collect()
}
