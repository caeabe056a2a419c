use std::path::Path;

use crate::path::NormalPath;

use super::Filesystem;

#[cfg(windows)]
const SEPARATOR: &str = "\\";
#[cfg(not(windows))]
const SEPARATOR: &str = "/";

/// Maps the local host filesystem.
#[derive(Debug, Default, Clone, Copy)]
pub struct DiskFS {}

impl DiskFS {
    pub fn new() -> Self {
        DiskFS {}
    }
}

impl Filesystem for DiskFS {
    fn exists(&self, path: &str) -> bool {
        !path.is_empty() && Path::new(path).exists()
    }

    fn separator(&self) -> &str {
        SEPARATOR
    }

    fn working_dir(&self) -> NormalPath {
        let cwd = std::env::current_dir()
            .ok()
            .and_then(|v| v.to_str().map(|v| v.to_owned()))
            .unwrap_or_else(|| SEPARATOR.to_owned());

        NormalPath::new(&cwd, SEPARATOR)
    }
}
