//! Placement of rendered pages in the on-disk cache.
//!
//! Rendered text is stored under the cache root at
//!
//! ```txt
//! <root>/<release>/<package>/<version>/<locale>/<section>/<name>.txt
//! ```

use std::path::Path;
use std::path::PathBuf;

/// Where a rendered page belongs in the cache.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Location {
    pub release: String,
    pub package: String,
    pub version: String,
    pub locale: String,
    pub section: String,
}

impl Location {
    /// Returns the directory for this location under the cache root.
    pub fn directory(&self, root: &Path) -> PathBuf {
        [
            &self.release,
            &self.package,
            &self.version,
            &self.locale,
            &self.section,
        ]
        .into_iter()
        .fold(root.to_path_buf(), |path, component| path.join(component))
    }

    /// Write a rendered page to the cache, creating directories as needed.
    ///
    /// Returns the path of the file that was written.
    pub fn write(&self, root: &Path, name: &str, text: &str) -> Result<PathBuf, String> {
        let directory = self.directory(root);
        std::fs::create_dir_all(&directory).map_err(|err| {
            format!(
                "failed to create cache directory `{}`: {}",
                directory.display(),
                err
            )
        })?;
        let path = directory.join(format!["{name}.txt"]);
        std::fs::write(&path, text)
            .map_err(|err| format!("failed to write `{}`: {}", path.display(), err))?;
        tracing::info!(path = %path.display(), bytes = text.len(), "wrote rendered page to cache");
        Ok(path)
    }
}
