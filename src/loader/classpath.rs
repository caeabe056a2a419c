use std::sync::Arc;

use crate::bundle::{self, Bundle};
use crate::context::Context;
use crate::info::ResolutionResult;
use crate::location;
use crate::path::NormalPath;
use crate::url::Url;

use super::Loader;

/// The scheme claimed by `ClasspathLoader`.
pub const SCHEME: &str = bundle::SCHEMA;

/// The namespace bundled resources are usually retried under.
pub const DEFAULT_FALLBACK: &str = "META-INF";

/// Resolves resources bundled with the application. The lookup goes to the
/// local bundle first, then to the global one if exists.
#[derive(Clone)]
pub struct ClasspathLoader {
    local: Arc<dyn Bundle>,
    global: Option<Arc<dyn Bundle>>,
}

impl ClasspathLoader {
    pub fn new(local: Arc<dyn Bundle>) -> Self {
        ClasspathLoader {
            local,
            global: None,
        }
    }

    /// Sets the bundle that is searched when the local one misses.
    pub fn with_global(mut self, global: Arc<dyn Bundle>) -> Self {
        self.global = Some(global);
        self
    }

    /// Replaces the local bundle.
    pub fn set_bundle(&mut self, local: Arc<dyn Bundle>) {
        self.local = local;
    }

    /// Returns the handle of resource `name` if exists.
    pub fn lookup(&self, name: &str) -> Option<Url> {
        self.local
            .find(name)
            .or_else(|| self.global.as_ref().and_then(|v| v.find(name)))
    }
}

impl Loader for ClasspathLoader {
    fn name(&self) -> &str {
        "ClasspathLoader"
    }

    fn resolve(&self, location: &str, _: &mut Context) -> ResolutionResult {
        let name = if location::has_scheme(location, SCHEME) {
            location::strip_scheme(location)
        } else {
            location
        };

        ResolutionResult::from(location, self.lookup(name), self.name())
    }

    fn scheme(&self) -> Option<&str> {
        Some(SCHEME)
    }

    fn normalize(&self, location: &str) -> NormalPath {
        let name = if location::has_scheme(location, SCHEME) {
            location::strip_scheme(location)
        } else {
            location
        };

        // Names are always relative to the bundle root.
        NormalPath::new(name, "/").relative()
    }

    fn handle_path(&self, url: &Url) -> NormalPath {
        NormalPath::new(url.path(), "/").relative()
    }
}
