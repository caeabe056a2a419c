//! An ordered list of loaders which are tried one after another.

use std::fmt;
use std::iter::FromIterator;
use std::sync::Arc;

use crate::context::Context;
use crate::info::ResolutionResult;
use crate::loader::Loader;

/// Asks its members in insertion order and returns the first resolved result.
/// If none of them could resolve the location, an explicit unresolved result
/// is returned.
///
/// Members are shared, so the same loader could take part in multiple chains,
/// and a chain is a `Loader` itself, so chains nest.
#[derive(Clone, Default)]
pub struct LoaderChain {
    loaders: Vec<Arc<dyn Loader>>,
}

impl LoaderChain {
    pub fn new() -> Self {
        LoaderChain::default()
    }

    /// Appends a shared loader at the lowest priority.
    pub fn add(&mut self, loader: Arc<dyn Loader>) {
        self.loaders.push(loader);
    }

    /// Appends a loader at the lowest priority.
    pub fn push<L: Loader + 'static>(&mut self, loader: L) {
        self.add(Arc::new(loader));
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.loaders.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.loaders.is_empty()
    }

    #[inline]
    pub fn loaders(&self) -> &[Arc<dyn Loader>] {
        &self.loaders
    }

    /// Runs the chain against `location`.
    pub fn process(&self, location: &str, ctx: &mut Context) -> ResolutionResult {
        for v in &self.loaders {
            trace!("Resolves {} with {}.", location, v.name());

            let info = v.resolve(location, ctx);
            if info.is_resolved() {
                debug!("{} resolved {}.", v.name(), location);
                return info;
            }
        }

        ResolutionResult::unresolved(location)
    }
}

impl Loader for LoaderChain {
    fn name(&self) -> &str {
        "LoaderChain"
    }

    #[inline]
    fn resolve(&self, location: &str, ctx: &mut Context) -> ResolutionResult {
        self.process(location, ctx)
    }
}

impl FromIterator<Arc<dyn Loader>> for LoaderChain {
    fn from_iter<I: IntoIterator<Item = Arc<dyn Loader>>>(iter: I) -> Self {
        LoaderChain {
            loaders: iter.into_iter().collect(),
        }
    }
}

impl fmt::Debug for LoaderChain {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_list()
            .entries(self.loaders.iter().map(|v| v.name()))
            .finish()
    }
}
