use std::sync::Arc;

use crate::context::Context;
use crate::fs::{DiskFS, Filesystem};
use crate::info::ResolutionResult;
use crate::location;
use crate::path::NormalPath;
use crate::url::Url;

use super::Loader;

/// The scheme claimed by `LocalLoader`.
pub const SCHEME: &str = "file";

/// Resolves locations that exist on a `Filesystem`, the local disk by default.
#[derive(Clone)]
pub struct LocalLoader {
    fs: Arc<dyn Filesystem>,
}

impl LocalLoader {
    pub fn new() -> Self {
        LocalLoader::with_filesystem(Arc::new(DiskFS::new()))
    }

    pub fn with_filesystem(fs: Arc<dyn Filesystem>) -> Self {
        LocalLoader { fs }
    }

    #[inline]
    pub fn filesystem(&self) -> &Arc<dyn Filesystem> {
        &self.fs
    }

    /// Returns the `file` URL of `path` if it exists.
    pub fn lookup(&self, path: &str) -> Option<Url> {
        if path.is_empty() {
            return None;
        }

        let path = self.fs.normalize(path).to_string_with(self.fs.separator());
        if self.fs.exists(&path) {
            self.fs.to_url(&path)
        } else {
            None
        }
    }
}

// Drops the authority of `file://host/path`, which is empty most of the time.
fn authority_free(path: &str) -> Option<&str> {
    if path.starts_with("//") {
        path[2..].find('/').map(|index| &path[index + 2..])
    } else {
        Some(path)
    }
}

impl Default for LocalLoader {
    fn default() -> Self {
        LocalLoader::new()
    }
}

impl Loader for LocalLoader {
    fn name(&self) -> &str {
        "LocalLoader"
    }

    fn resolve(&self, location: &str, _: &mut Context) -> ResolutionResult {
        let url = if location::has_scheme(location, SCHEME) {
            authority_free(location::strip_scheme(location)).and_then(|v| self.lookup(v))
        } else {
            self.lookup(location)
        };

        ResolutionResult::from(location, url, self.name())
    }

    fn scheme(&self) -> Option<&str> {
        Some(SCHEME)
    }

    fn separator(&self) -> Option<&str> {
        Some(self.fs.separator())
    }

    fn normalize(&self, location: &str) -> NormalPath {
        if location::has_scheme(location, SCHEME) {
            let path = authority_free(location::strip_scheme(location)).unwrap_or("");
            self.fs.normalize(path)
        } else {
            self.fs.normalize(location)
        }
    }

    fn anchor(&self, path: NormalPath) -> NormalPath {
        if path.is_absolute() {
            path
        } else {
            self.fs.working_dir().join(&path)
        }
    }
}
