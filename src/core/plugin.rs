//! Plugin ownership of source files.
//!
//! A plugin is a directory below the plugin root (e.g. `plugins/`) that carries
//! the build descriptor (e.g. `CMakeLists.txt`). Files outside the plugin root, or
//! with no descriptor between them and the plugin root, belong to `builtin`.

use std::{
    ffi::OsStr,
    path::{Path, PathBuf},
};

use crate::config::BUILTIN_PLUGIN;

pub struct PluginResolver {
    /// Project root that scanned paths are relative to.
    base_dir: PathBuf,
    root_segment: String,
    marker: String,
}

impl PluginResolver {
    pub fn new(
        base_dir: impl Into<PathBuf>,
        root_segment: impl Into<String>,
        marker: impl Into<String>,
    ) -> Self {
        Self {
            base_dir: base_dir.into(),
            root_segment: root_segment.into(),
            marker: marker.into(),
        }
    }

    /// Resolve the plugin id owning `relative`, a path relative to the project root.
    ///
    /// Only components below the project root are considered, so a checkout that
    /// itself lives under a directory named like the plugin root is unaffected.
    pub fn resolve(&self, relative: &Path) -> String {
        let Some(plugin_root) = self.plugin_root(relative) else {
            return BUILTIN_PLUGIN.to_string();
        };

        relative
            .ancestors()
            .skip(1)
            .take_while(|ancestor| *ancestor != plugin_root.as_path())
            .find(|ancestor| self.base_dir.join(ancestor).join(&self.marker).is_file())
            .and_then(Path::file_name)
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| BUILTIN_PLUGIN.to_string())
    }

    /// The directory named by the first `root_segment` component of `relative`, if any.
    fn plugin_root(&self, relative: &Path) -> Option<PathBuf> {
        let segment = OsStr::new(&self.root_segment);
        let mut root = PathBuf::new();
        // The final component is the file itself.
        let parent = relative.parent()?;

        for component in parent.components() {
            root.push(component);
            if component.as_os_str() == segment {
                return Some(root);
            }
        }

        None
    }
}
