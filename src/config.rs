use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result, bail};
use glob::Pattern;
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = ".eventlintrc.json";

/// Plugin id assigned to files that do not live under a plugin root.
pub const BUILTIN_PLUGIN: &str = "builtin";

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_roots")]
    pub roots: Vec<String>,
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
    #[serde(default = "default_excludes")]
    pub excludes: Vec<String>,
    #[serde(default = "default_plugin_root")]
    pub plugin_root: String,
    #[serde(default = "default_plugin_marker")]
    pub plugin_marker: String,
    #[serde(default)]
    pub markers: Markers,
}

/// Textual tokens the extractor searches for on each eligible line.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Markers {
    pub declaration: String,
    pub definition: String,
    pub creation: String,
    pub fire: String,
    pub listener_registration: String,
    pub listener_definition: String,
}

impl Default for Markers {
    fn default() -> Self {
        Self {
            declaration: "EVENT_H".to_string(),
            definition: "EVENT_C".to_string(),
            creation: "event_create".to_string(),
            fire: "EVENT_FIRE".to_string(),
            listener_registration: "event_register_listener".to_string(),
            listener_definition: "EVENT_LISTENER".to_string(),
        }
    }
}

impl Markers {
    fn named(&self) -> [(&'static str, &str); 6] {
        [
            ("declaration", self.declaration.as_str()),
            ("definition", self.definition.as_str()),
            ("creation", self.creation.as_str()),
            ("fire", self.fire.as_str()),
            ("listenerRegistration", self.listener_registration.as_str()),
            ("listenerDefinition", self.listener_definition.as_str()),
        ]
    }
}

fn default_roots() -> Vec<String> {
    ["util", "plugins", "lightship"].map(String::from).to_vec()
}

fn default_extensions() -> Vec<String> {
    [".c", ".h"].map(String::from).to_vec()
}

fn default_excludes() -> Vec<String> {
    ["plugins/core/renderer_gl/ext", "plugins/core/yaml/ext"]
        .map(String::from)
        .to_vec()
}

fn default_plugin_root() -> String {
    "plugins".to_string()
}

fn default_plugin_marker() -> String {
    "CMakeLists.txt".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            roots: default_roots(),
            extensions: default_extensions(),
            excludes: default_excludes(),
            plugin_root: default_plugin_root(),
            plugin_marker: default_plugin_marker(),
            markers: Markers::default(),
        }
    }
}

/// Check if a pattern contains glob wildcards (* or ?).
/// Patterns without wildcards are matched as plain substrings.
pub fn is_glob_pattern(pattern: &str) -> bool {
    pattern.contains('*') || pattern.contains('?')
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error for empty markers, an empty extension list, or
    /// invalid glob patterns in `excludes`.
    pub fn validate(&self) -> Result<()> {
        for (name, marker) in self.markers.named() {
            if marker.trim().is_empty() {
                bail!("Marker '{}' must not be empty", name);
            }
        }

        if self.extensions.is_empty() {
            bail!("'extensions' must list at least one file suffix");
        }

        if self.plugin_marker.trim().is_empty() {
            bail!("'pluginMarker' must not be empty");
        }

        for pattern in &self.excludes {
            if is_glob_pattern(pattern) {
                Pattern::new(pattern).with_context(|| {
                    format!("Invalid glob pattern in 'excludes': \"{}\"", pattern)
                })?;
            }
        }

        Ok(())
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
        }),
    }
}
