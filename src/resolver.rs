//! The entry point of location resolution.

use std::sync::Arc;

use crate::chain::LoaderChain;
use crate::context::Context;
use crate::errors::*;
use crate::info::ResolutionResult;
use crate::loader::{FallbackLoader, Loader};
use crate::location::Location;
use crate::settings::{Collaborators, ResolverParams};
use crate::shortcut::ShortcutResolver;
use crate::url::Url;

/// Owns a loader chain and resolves locations against it.
///
/// A `Resolver` holds no per-call state. Every call works with its own
/// `Context`, so a single resolver could be shared between threads.
#[derive(Debug, Clone)]
pub struct Resolver {
    chain: LoaderChain,
    shortcuts: ShortcutResolver,
}

impl Resolver {
    /// Creates a resolver with the default chain: local files, bundled
    /// resources with `META-INF` fallback, and remote URLs.
    pub fn new() -> Result<Self> {
        Resolver::from_params(&ResolverParams::default(), &Collaborators::default())
    }

    pub fn with_chain(chain: LoaderChain) -> Self {
        Resolver {
            chain,
            shortcuts: ShortcutResolver::new(),
        }
    }

    pub fn from_params(params: &ResolverParams, collaborators: &Collaborators) -> Result<Self> {
        Ok(Resolver {
            chain: params.build(collaborators)?,
            shortcuts: params.shortcuts()?,
        })
    }

    pub fn builder() -> ResolverBuilder {
        ResolverBuilder::default()
    }

    #[inline]
    pub fn chain(&self) -> &LoaderChain {
        &self.chain
    }

    #[inline]
    pub fn shortcuts(&self) -> &ShortcutResolver {
        &self.shortcuts
    }

    /// Resolves `location` and returns the full outcome, including the search
    /// path and the entity which resolved it.
    pub fn resolve(&self, location: &str) -> Result<ResolutionResult> {
        let mut ctx = Context::new();
        self.resolve_with(location, &mut ctx)
    }

    #[inline]
    pub fn fetch(&self, location: &str) -> Result<ResolutionResult> {
        self.resolve(location)
    }

    /// Resolves `location` and returns the context the outcome is recorded in.
    pub fn resolve_ctx(&self, location: &str) -> Result<Context> {
        let mut ctx = Context::new();
        self.resolve_with(location, &mut ctx)?;
        Ok(ctx)
    }

    /// Resolves `location` with a caller-provided context. The context is
    /// cleared before the chain runs.
    pub fn resolve_with(&self, location: &str, ctx: &mut Context) -> Result<ResolutionResult> {
        let location = Location::new(location)?;
        let location = location.as_str();

        ctx.clear();

        let expanded = if self.shortcuts.is_empty() {
            None
        } else {
            self.shortcuts.resolve(location)
        };

        let location = match expanded {
            Some(ref v) if v != location => {
                trace!("Expands {} into {}.", location, v);
                v.as_str()
            }
            _ => location,
        };

        let info = self.chain.process(location, ctx);
        ctx.record(&info);
        Ok(info)
    }

    /// Returns the resolved handle of `location`, if any.
    pub fn lookup(&self, location: &str) -> Option<Url> {
        self.resolve(location).ok().and_then(|v| v.into_url())
    }
}

/// Builds a resolver with a custom chain.
#[derive(Default)]
pub struct ResolverBuilder {
    chain: LoaderChain,
    shortcuts: ShortcutResolver,
}

impl ResolverBuilder {
    /// Appends `loader` at the lowest priority.
    pub fn with_loader<L: Loader + 'static>(mut self, loader: L) -> Self {
        self.chain.push(loader);
        self
    }

    /// Appends `loader` at the lowest priority.
    pub fn add<L: Loader + 'static>(&mut self, loader: L) -> &mut Self {
        self.chain.push(loader);
        self
    }

    /// Appends a loader that is shared with other chains.
    pub fn add_shared(&mut self, loader: Arc<dyn Loader>) -> &mut Self {
        self.chain.add(loader);
        self
    }

    /// Appends `loader` wrapped into a fallback under `prefix`.
    pub fn add_with_fallback<T: Into<String>>(
        mut self,
        loader: Arc<dyn Loader>,
        prefix: T,
    ) -> Result<Self> {
        self.chain.push(FallbackLoader::new(loader, prefix)?);
        Ok(self)
    }

    /// Appends all the `loaders` in order.
    pub fn with_loaders<I>(mut self, loaders: I) -> Self
    where
        I: IntoIterator<Item = Arc<dyn Loader>>,
    {
        for v in loaders {
            self.chain.add(v);
        }

        self
    }

    /// Registers a shortcut, e.g. `"assets:" => "file:///opt/app/assets/"`.
    pub fn shortcut<T1, T2>(mut self, shortcut: T1, fullname: T2) -> Result<Self>
    where
        T1: Into<String>,
        T2: Into<String>,
    {
        self.shortcuts.add(shortcut, fullname)?;
        Ok(self)
    }

    pub fn build(self) -> Resolver {
        Resolver {
            chain: self.chain,
            shortcuts: self.shortcuts,
        }
    }
}
