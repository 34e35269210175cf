use std::path::{Path, PathBuf};

use anyhow::Result;
use rayon::prelude::*;

use crate::{
    cli::args::CommonArgs,
    config::{CONFIG_FILE_NAME, Config, Markers, load_config},
    core::{
        extract::{EventExtractor, FileObservations, analyze_file},
        file_scanner::{SourceFile, collect_files, exclude_files},
        plugin::PluginResolver,
        registry::EventRegistry,
    },
};

/// Scan orchestrator: owns the merged configuration and the collected file list.
///
/// # Configuration Priority
///
/// 1. CLI arguments (e.g. `--root util`)
/// 2. `.eventlintrc.json` config file
/// 3. Built-in defaults
pub struct ScanContext {
    /// Merged configuration (CLI args > config file > defaults).
    pub config: Config,

    /// Project root directory the scan roots are relative to.
    pub root_dir: PathBuf,

    /// Source files to analyze, sorted by root-relative path.
    pub files: Vec<SourceFile>,

    /// Directory entries that could not be read while collecting files.
    pub skipped_count: usize,

    /// Whether to print verbose diagnostic messages.
    pub verbose: bool,
}

impl ScanContext {
    /// Load configuration, apply CLI overrides and collect the files to scan.
    ///
    /// # Errors
    ///
    /// Returns error if the config file cannot be read, parsed or validated.
    pub fn new(common_args: &CommonArgs) -> Result<Self> {
        let verbose = common_args.verbose;
        let root_dir = common_args
            .source_root
            .clone()
            .unwrap_or_else(|| PathBuf::from("."));

        let config_result = load_config(&root_dir)?;
        if verbose && !config_result.from_file {
            eprintln!(
                "Note: No {} found, using default configuration",
                CONFIG_FILE_NAME
            );
        }

        let mut config = config_result.config;
        if !common_args.roots.is_empty() {
            config.roots = common_args.roots.clone();
        }
        config.excludes.extend(common_args.excludes.iter().cloned());
        config.validate()?;

        let scan_result = collect_files(&root_dir, &config.roots, &config.extensions, verbose);
        let files = exclude_files(scan_result.files, &config.excludes, verbose);

        Ok(Self {
            config,
            root_dir,
            files,
            skipped_count: scan_result.skipped_count,
            verbose,
        })
    }

    /// Run extraction over every collected file and merge the results.
    pub fn scan(&self) -> Result<EventRegistry> {
        let resolver = PluginResolver::new(
            &self.root_dir,
            &self.config.plugin_root,
            &self.config.plugin_marker,
        );
        scan_files(&self.files, &resolver, &self.config.markers)
    }
}

/// Extract from `files` in parallel, then merge in the given order.
///
/// Any read failure aborts the whole scan.
pub fn scan_files(
    files: &[SourceFile],
    resolver: &PluginResolver,
    markers: &Markers,
) -> Result<EventRegistry> {
    let extractor = EventExtractor::new(markers);

    let per_file: Vec<FileObservations> = files
        .par_iter()
        .map(|file| {
            let plugin = resolver.resolve(Path::new(&file.display_path));
            analyze_file(file, plugin, &extractor)
        })
        .collect::<Result<_>>()?;

    let mut registry = EventRegistry::new();
    for observations in per_file {
        registry.merge(observations);
    }

    Ok(registry)
}
