//! Per-call scratch space shared by the members of a loader chain.

use std::any::Any;
use std::collections::HashMap;
use std::fmt;

use inlinable_string::InlinableString;

use crate::info::ResolutionResult;
use crate::url::Url;

/// A `Context` lives for exactly one top-level resolve call. Loaders may stash
/// arbitrary values in it for the members that follow them in the chain, and
/// the resolver records the final outcome in it once the chain returns.
#[derive(Default)]
pub struct Context {
    properties: HashMap<InlinableString, Box<dyn Any + Send + Sync>>,
    url: Option<Url>,
    source_entity: Option<String>,
}

impl Context {
    pub fn new() -> Self {
        Context::default()
    }

    /// Keeps a value for the given key, replacing the previous one.
    pub fn set_property<K, V>(&mut self, key: K, value: V)
    where
        K: Into<InlinableString>,
        V: Any + Send + Sync,
    {
        self.properties.insert(key.into(), Box::new(value));
    }

    /// Gets the value of the property `key` if it exists with type `V`.
    pub fn property<V: Any>(&self, key: &str) -> Option<&V> {
        self.properties.get(key).and_then(|v| v.downcast_ref::<V>())
    }

    #[inline]
    pub fn has_property(&self, key: &str) -> bool {
        self.properties.contains_key(key)
    }

    /// Removes the property `key`. Returns true if it existed.
    pub fn remove_property(&mut self, key: &str) -> bool {
        self.properties.remove(key).is_some()
    }

    #[inline]
    pub fn is_resolved(&self) -> bool {
        self.url.is_some()
    }

    #[inline]
    pub fn url(&self) -> Option<&Url> {
        self.url.as_ref()
    }

    /// The entity which resolved the location, if any.
    #[inline]
    pub fn source_entity(&self) -> Option<&str> {
        self.source_entity.as_ref().map(|v| v.as_str())
    }

    /// Resets all the properties and the resolution state.
    pub fn clear(&mut self) {
        self.properties.clear();
        self.url = None;
        self.source_entity = None;
    }

    pub(crate) fn record(&mut self, info: &ResolutionResult) {
        self.url = info.url().cloned();
        self.source_entity = Some(info.source_entity().to_owned());
    }
}

impl fmt::Debug for Context {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Context")
            .field("properties", &self.properties.keys().collect::<Vec<_>>())
            .field("url", &self.url)
            .field("source_entity", &self.source_entity)
            .finish()
    }
}
