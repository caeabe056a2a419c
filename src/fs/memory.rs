use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::errors::*;
use crate::path::NormalPath;

use super::Filesystem;

#[derive(Debug, Clone)]
enum Entry {
    Dir,
    File(Vec<u8>),
}

/// An in-memory filesystem tree with unix or windows conventions. Entries could
/// be added or removed at any time, even if it has been shared between threads.
#[derive(Debug)]
pub struct MemoryFS {
    separator: &'static str,
    cwd: NormalPath,
    entries: RwLock<HashMap<NormalPath, Entry>>,
}

impl MemoryFS {
    /// Creates an empty filesystem with `/` separator, working from `/`.
    pub fn unix() -> Self {
        MemoryFS::new("/", "/")
    }

    /// Creates an empty filesystem with `\` separator, working from `c:\`.
    pub fn windows() -> Self {
        MemoryFS::new("\\", "c:\\")
    }

    fn new(separator: &'static str, root: &str) -> Self {
        let root = NormalPath::new(root, separator);
        let mut entries = HashMap::new();
        entries.insert(root.clone(), Entry::Dir);

        MemoryFS {
            separator,
            cwd: root,
            entries: RwLock::new(entries),
        }
    }

    /// Changes the directory relative paths are resolved against. The directory
    /// is created if not exists.
    pub fn with_working_dir(mut self, dir: &str) -> Self {
        let cwd = self.absolute(dir);
        self.create_dir(&cwd.to_string_with(self.separator));
        self.cwd = cwd;
        self
    }

    /// Creates a directory and all of its missing ancestors.
    pub fn create_dir(&self, path: &str) {
        let mut path = Some(self.absolute(path));
        let mut entries = self.write_entries();

        while let Some(v) = path {
            path = v.parent();
            entries.entry(v).or_insert(Entry::Dir);
        }
    }

    /// Writes a file, replacing its contents if exists. The parent directory
    /// must exist.
    pub fn write<T: Into<Vec<u8>>>(&self, path: &str, data: T) -> Result<()> {
        let path = self.absolute(path);
        let parent = path
            .parent()
            .ok_or_else(|| Error::FileNotFound(path.to_string_with(self.separator)))?;

        let mut entries = self.write_entries();
        match entries.get(&parent) {
            Some(Entry::Dir) => {}
            _ => return Err(Error::FileNotFound(parent.to_string_with(self.separator))),
        }

        if let Some(Entry::Dir) = entries.get(&path) {
            return Err(Error::IO(::std::io::Error::new(
                ::std::io::ErrorKind::Other,
                format!("{} is a directory.", path.to_string_with(self.separator)),
            )));
        }

        entries.insert(path, Entry::File(data.into()));
        Ok(())
    }

    /// Reads the contents of a file.
    pub fn read(&self, path: &str) -> Option<Vec<u8>> {
        match self.read_entries().get(&self.absolute(path)) {
            Some(Entry::File(bytes)) => Some(bytes.clone()),
            _ => None,
        }
    }

    /// Removes a file or a directory with everything inside it. Returns true if
    /// something has been removed.
    pub fn remove(&self, path: &str) -> bool {
        let path = self.absolute(path);
        let depth = path.segments().len();

        let mut entries = self.write_entries();
        let len = entries.len();
        entries.retain(|k, _| {
            let inside = k.prefix() == path.prefix()
                && k.segments().len() >= depth
                && k.segments()[..depth] == path.segments()[..];
            !inside || depth == 0
        });

        len != entries.len()
    }

    fn read_entries(&self) -> RwLockReadGuard<HashMap<NormalPath, Entry>> {
        match self.entries.read() {
            Ok(v) => v,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    fn write_entries(&self) -> RwLockWriteGuard<HashMap<NormalPath, Entry>> {
        match self.entries.write() {
            Ok(v) => v,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl Filesystem for MemoryFS {
    fn exists(&self, path: &str) -> bool {
        !path.is_empty() && self.read_entries().contains_key(&self.absolute(path))
    }

    fn separator(&self) -> &str {
        self.separator
    }

    fn working_dir(&self) -> NormalPath {
        self.cwd.clone()
    }
}
