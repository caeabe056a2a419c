use std::sync::Arc;

use smallvec::SmallVec;

use crate::context::Context;
use crate::errors::*;
use crate::info::ResolutionResult;
use crate::location;
use crate::path::NormalPath;
use crate::url::Url;

use super::{apply_root, Loader};

/// Retries a failed lookup of the wrapped loader under each of the fallback
/// prefixes in order, until one of them succeeds.
///
/// The retried locations are always scheme-less, e.g. `classpath:a.nfo` with
/// prefix `META-INF` is retried as `META-INF/a.nfo`. Prefixes the location
/// already starts with are skipped.
pub struct FallbackLoader {
    inner: Arc<dyn Loader>,
    prefixes: SmallVec<[String; 2]>,
    name: String,
}

impl FallbackLoader {
    /// Creates a fallback loader with a single prefix.
    pub fn new<T: Into<String>>(inner: Arc<dyn Loader>, prefix: T) -> Result<Self> {
        FallbackLoader::with_prefixes(inner, Some(prefix))
    }

    /// Creates a fallback loader which tries `prefixes` in order.
    pub fn with_prefixes<I, T>(inner: Arc<dyn Loader>, prefixes: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let name = format!("FallbackLoader({})", inner.name());
        let mut loader = FallbackLoader {
            inner,
            prefixes: SmallVec::new(),
            name,
        };

        for v in prefixes {
            loader.add_prefix(v)?;
        }

        Ok(loader)
    }

    /// Appends a fallback prefix.
    pub fn add_prefix<T: Into<String>>(&mut self, prefix: T) -> Result<()> {
        let prefix = prefix.into();
        if prefix.is_empty() {
            return Err(Error::EmptyFallback);
        }

        self.prefixes.push(prefix);
        Ok(())
    }

    #[inline]
    pub fn prefixes(&self) -> &[String] {
        &self.prefixes
    }

    #[inline]
    pub fn inner(&self) -> &Arc<dyn Loader> {
        &self.inner
    }
}

impl Loader for FallbackLoader {
    fn name(&self) -> &str {
        &self.name
    }

    fn resolve(&self, location: &str, ctx: &mut Context) -> ResolutionResult {
        let mut info = self.inner.resolve(location, ctx);
        if info.is_resolved() {
            return info;
        }

        let stripped = location::strip_scheme(location);
        for prefix in &self.prefixes {
            if location.starts_with(prefix.as_str()) || stripped.starts_with(prefix.as_str()) {
                trace!("Skips fallback {} of {}.", prefix, location);
                continue;
            }

            let fallback = apply_root(&*self.inner, prefix, location);
            debug!("Retries {} as {} with {}.", location, fallback, self.inner.name());

            info = self.inner.resolve(&fallback, ctx);
            if info.is_resolved() {
                return info;
            }
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
