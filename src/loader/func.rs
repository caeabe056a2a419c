use crate::context::Context;
use crate::info::ResolutionResult;
use crate::location;
use crate::url::Url;

use super::Loader;

/// A loader built from a closure, handy for custom strategies that read or
/// write the per-call `Context`.
///
/// ```
/// use locus::prelude::*;
///
/// let loader = FnLoader::new("Greeter", |location: &str, _: &mut Context| {
///     if location == "hello" {
///         Url::new("mem://greeter/hello").ok()
///     } else {
///         None
///     }
/// });
///
/// assert!(loader.resolve("hello", &mut Context::new()).is_resolved());
/// ```
pub struct FnLoader<F> {
    name: String,
    scheme: Option<String>,
    func: F,
}

impl<F> FnLoader<F>
where
    F: Fn(&str, &mut Context) -> Option<Url> + Send + Sync,
{
    pub fn new<T: Into<String>>(name: T, func: F) -> Self {
        FnLoader {
            name: name.into(),
            scheme: None,
            func,
        }
    }

    /// Claims `scheme`. Locations prefixed with it are handed to the closure
    /// without the prefix.
    pub fn with_scheme<T: Into<String>>(mut self, scheme: T) -> Self {
        self.scheme = Some(scheme.into());
        self
    }
}

impl<F> Loader for FnLoader<F>
where
    F: Fn(&str, &mut Context) -> Option<Url> + Send + Sync,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn resolve(&self, location: &str, ctx: &mut Context) -> ResolutionResult {
        let stripped = match self.scheme {
            Some(ref scheme) if location::has_scheme(location, scheme) => {
                location::strip_scheme(location)
            }
            _ => location,
        };

        let url = (self.func)(stripped, ctx);
        ResolutionResult::from(location, url, self.name.as_str())
    }

    fn scheme(&self) -> Option<&str> {
        self.scheme.as_ref().map(|v| v.as_str())
    }
}
