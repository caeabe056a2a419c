//! The filesystem collaborator used by local loaders.
//!
//! A `Filesystem` only needs to answer whether a path exists and where it is
//! working from. Path normalization and the conversion into `file` URLs are
//! derived from the separator, so every implementation agrees on them.

pub mod disk;
pub use self::disk::DiskFS;

pub mod memory;
pub use self::memory::MemoryFS;

use crate::path::NormalPath;
use crate::url::Url;

pub trait Filesystem: Send + Sync {
    /// Returns whether the path points at an existing file or directory.
    fn exists(&self, path: &str) -> bool;

    /// The separator of path segments.
    fn separator(&self) -> &str;

    /// The absolute directory relative paths are resolved against.
    fn working_dir(&self) -> NormalPath;

    /// Normalizes `path` with the conventions of this filesystem.
    fn normalize(&self, path: &str) -> NormalPath {
        NormalPath::new(path, self.separator())
    }

    /// Normalizes `path` and resolves it against the working directory.
    fn absolute(&self, path: &str) -> NormalPath {
        let path = self.normalize(path);
        if path.is_absolute() {
            path
        } else {
            self.working_dir().join(&path)
        }
    }

    /// Converts `path` into a `file` URL.
    fn to_url(&self, path: &str) -> Option<Url> {
        Url::from_file_path(&self.absolute(path)).ok()
    }
}
