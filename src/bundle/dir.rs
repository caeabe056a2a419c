use std::sync::Arc;

use crate::fs::Filesystem;
use crate::path::NormalPath;
use crate::url::Url;

use super::Bundle;

/// Exposes a directory of a `Filesystem` as a bundle.
pub struct DirBundle {
    name: String,
    fs: Arc<dyn Filesystem>,
    root: NormalPath,
}

impl DirBundle {
    pub fn new<T: Into<String>>(name: T, fs: Arc<dyn Filesystem>, root: &str) -> Self {
        let root = fs.absolute(root);
        let name = name.into();
        info!("Creates directory based bundle {} at {}.", name, root);

        DirBundle { name, fs, root }
    }

    /// Creates a bundle over the directory of the running executable.
    pub fn running(fs: Arc<dyn Filesystem>) -> Self {
        let root = std::env::current_exe()
            .ok()
            .and_then(|v| v.parent().and_then(|v| v.to_str()).map(|v| v.to_owned()))
            .unwrap_or_else(|| ".".to_owned());

        DirBundle::new("app", fs, &root)
    }

    #[inline]
    pub fn root(&self) -> &NormalPath {
        &self.root
    }

    /// Maps a handle produced by this bundle back to the path of its file.
    pub fn file_path(&self, url: &Url) -> Option<String> {
        if url.schema() != super::SCHEMA || url.host() != self.name {
            return None;
        }

        let name = super::normalize_name(url.path())?;
        let path = self.root.join(&name);
        Some(path.to_string_with(self.fs.separator()))
    }
}

impl Bundle for DirBundle {
    fn name(&self) -> &str {
        &self.name
    }

    fn find(&self, name: &str) -> Option<Url> {
        let name = super::normalize_name(name)?;
        let path = self.root.join(&name);

        if self.fs.exists(&path.to_string_with(self.fs.separator())) {
            super::handle(&self.name, &name)
        } else {
            None
        }
    }
}
