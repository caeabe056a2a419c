use std::sync::Arc;

use crate::context::Context;
use crate::errors::*;
use crate::info::ResolutionResult;
use crate::path::NormalPath;
use crate::url::Url;

use super::{apply_root, Loader};

/// Jails the wrapped loader into a root directory.
///
/// Only the resources whose parent directory is exactly the root could be
/// resolved. Absolute locations outside of the root are discarded without
/// asking the wrapped loader. Relative locations are prefixed with the root,
/// and the resolved handle is checked again since `..` segments might have
/// escaped it.
pub struct DirLoader {
    inner: Arc<dyn Loader>,
    root: String,
    normal_root: NormalPath,
    name: String,
}

impl DirLoader {
    pub fn new<T: Into<String>>(inner: Arc<dyn Loader>, root: T) -> Result<Self> {
        let root = root.into();
        if root.is_empty() {
            return Err(Error::EmptyRoot);
        }

        let normal_root = inner.anchor(inner.normalize(&root));
        let name = format!("DirLoader({})", inner.name());

        Ok(DirLoader {
            inner,
            root,
            normal_root,
            name,
        })
    }

    /// Moves the jail to another root.
    pub fn set_root<T: Into<String>>(&mut self, root: T) -> Result<()> {
        let root = root.into();
        if root.is_empty() {
            return Err(Error::EmptyRoot);
        }

        self.normal_root = self.inner.anchor(self.inner.normalize(&root));
        self.root = root;
        Ok(())
    }

    #[inline]
    pub fn root(&self) -> &str {
        &self.root
    }

    #[inline]
    pub fn inner(&self) -> &Arc<dyn Loader> {
        &self.inner
    }

    fn contains(&self, path: &NormalPath) -> bool {
        path.parent()
            .map(|parent| parent == self.normal_root)
            .unwrap_or(false)
    }
}

impl Loader for DirLoader {
    fn name(&self) -> &str {
        &self.name
    }

    fn resolve(&self, location: &str, ctx: &mut Context) -> ResolutionResult {
        if location.is_empty() {
            return ResolutionResult::unresolved(location);
        }

        let path = self.inner.normalize(location);
        if path.is_absolute() {
            if !self.contains(&path) {
                debug!("Discards {} outside of root {}.", location, self.normal_root);
                return ResolutionResult::unresolved(location);
            }

            return self.inner.resolve(location, ctx);
        }

        let rooted = apply_root(&*self.inner, &self.root, location);
        let info = self.inner.resolve(&rooted, ctx);

        let escaped = info
            .url()
            .map(|url| !self.contains(&self.inner.anchor(self.inner.handle_path(url))))
            .unwrap_or(false);

        if escaped {
            debug!("Discards {} escaping root {}.", location, self.normal_root);
            return ResolutionResult::unresolved(location);
        }

        info
    }

    fn scheme(&self) -> Option<&str> {
        self.inner.scheme()
    }

    fn separator(&self) -> Option<&str> {
        self.inner.separator()
    }

    fn normalize(&self, location: &str) -> NormalPath {
        self.inner.normalize(location)
    }

    fn handle_path(&self, url: &Url) -> NormalPath {
        self.inner.handle_path(url)
    }

    fn anchor(&self, path: NormalPath) -> NormalPath {
        self.inner.anchor(path)
    }
}
