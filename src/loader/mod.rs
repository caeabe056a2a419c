//! Resolution strategies.
//!
//! A `Loader` turns a location into a `ResolutionResult`. Leaf loaders talk to
//! a collaborator (filesystem, bundle, network), while `FallbackLoader` and
//! `DirLoader` wrap another loader and rewrite the locations they hand to it.
//!
//! Besides `resolve`, the trait exposes a few capability queries that the
//! decorators rely on to rewrite paths the way the wrapped loader expects:
//! the scheme it claims, its path separator and how it maps locations and
//! handles into paths of its namespace.

pub mod classpath;
pub use self::classpath::ClasspathLoader;

pub mod dir;
pub use self::dir::DirLoader;

pub mod fallback;
pub use self::fallback::FallbackLoader;

pub mod func;
pub use self::func::FnLoader;

pub mod local;
pub use self::local::LocalLoader;

pub mod remote;
pub use self::remote::RemoteLoader;

use std::sync::Arc;

use crate::context::Context;
use crate::info::ResolutionResult;
use crate::location;
use crate::path::{NormalPath, DEFAULT_SEPARATOR};
use crate::url::Url;

pub trait Loader: Send + Sync {
    /// The identity reported as source entity of resolved results.
    fn name(&self) -> &str;

    /// Resolves `location`. Failures of the underlying collaborators are
    /// reported as unresolved results, never as errors.
    fn resolve(&self, location: &str, ctx: &mut Context) -> ResolutionResult;

    /// The scheme claimed by this loader, `*` for any absolute URL.
    fn scheme(&self) -> Option<&str> {
        None
    }

    /// The path separator if this loader is backed by a filesystem.
    fn separator(&self) -> Option<&str> {
        None
    }

    /// Maps `location` to a path in the namespace of this loader.
    fn normalize(&self, location: &str) -> NormalPath {
        let location = match self.scheme() {
            Some(scheme) if location::has_scheme(location, scheme) => {
                location::strip_scheme(location)
            }
            _ => location,
        };

        NormalPath::new(location, self.separator().unwrap_or(DEFAULT_SEPARATOR))
    }

    /// Maps a handle resolved by this loader to a path in its namespace.
    fn handle_path(&self, url: &Url) -> NormalPath {
        NormalPath::new(url.path(), self.separator().unwrap_or(DEFAULT_SEPARATOR))
    }

    /// Makes `path` comparable with the paths returned by `handle_path`.
    fn anchor(&self, path: NormalPath) -> NormalPath {
        path
    }
}

macro_rules! forward_loader {
    ($ptr: ident) => {
        impl<L: Loader + ?Sized> Loader for $ptr<L> {
            #[inline]
            fn name(&self) -> &str {
                (**self).name()
            }

            #[inline]
            fn resolve(&self, location: &str, ctx: &mut Context) -> ResolutionResult {
                (**self).resolve(location, ctx)
            }

            #[inline]
            fn scheme(&self) -> Option<&str> {
                (**self).scheme()
            }

            #[inline]
            fn separator(&self) -> Option<&str> {
                (**self).separator()
            }

            #[inline]
            fn normalize(&self, location: &str) -> NormalPath {
                (**self).normalize(location)
            }

            #[inline]
            fn handle_path(&self, url: &Url) -> NormalPath {
                (**self).handle_path(url)
            }

            #[inline]
            fn anchor(&self, path: NormalPath) -> NormalPath {
                (**self).anchor(path)
            }
        }
    };
}

forward_loader!(Arc);
forward_loader!(Box);

/// Prefixes `location` with `root`, joined by the separator of `loader`. The
/// scheme of `location` is stripped and not restored.
pub fn apply_root<L: Loader + ?Sized>(loader: &L, root: &str, location: &str) -> String {
    let separator = loader.separator().unwrap_or(DEFAULT_SEPARATOR);
    let is_sep = |c: char| c == '/' || separator.contains(c);

    let root = root.trim_end_matches(is_sep);
    let location = location::strip_scheme(location).trim_start_matches(is_sep);
    format!("{}{}{}", root, separator, location)
}
