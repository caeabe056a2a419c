//! The outcome of a resolution attempt.

use std::fmt;

use crate::url::Url;

/// Source entity reported when no loader resolved the location.
pub const UNKNOWN_SOURCE: &str = "Unknown";

/// The outcome of one resolution attempt: the search path that was tried, the
/// resolved handle if any, and the loader which produced it.
///
/// A result is resolved if and only if it carries a handle, and only resolved
/// results name a real source entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolutionResult {
    search_path: String,
    url: Option<Url>,
    source_entity: String,
}

impl ResolutionResult {
    /// Creates a resolved result attributed to `source`.
    pub fn resolved<T1, T2>(search_path: T1, url: Url, source: T2) -> Self
    where
        T1: Into<String>,
        T2: Into<String>,
    {
        ResolutionResult {
            search_path: search_path.into(),
            url: Some(url),
            source_entity: source.into(),
        }
    }

    /// Creates an unresolved result for `search_path`.
    pub fn unresolved<T: Into<String>>(search_path: T) -> Self {
        ResolutionResult {
            search_path: search_path.into(),
            url: None,
            source_entity: UNKNOWN_SOURCE.to_owned(),
        }
    }

    /// Creates a result from an optional handle.
    pub fn from<T1, T2>(search_path: T1, url: Option<Url>, source: T2) -> Self
    where
        T1: Into<String>,
        T2: Into<String>,
    {
        match url {
            Some(url) => ResolutionResult::resolved(search_path, url, source),
            None => ResolutionResult::unresolved(search_path),
        }
    }

    #[inline]
    pub fn search_path(&self) -> &str {
        &self.search_path
    }

    #[inline]
    pub fn is_resolved(&self) -> bool {
        self.url.is_some()
    }

    #[inline]
    pub fn url(&self) -> Option<&Url> {
        self.url.as_ref()
    }

    #[inline]
    pub fn into_url(self) -> Option<Url> {
        self.url
    }

    #[inline]
    pub fn source_entity(&self) -> &str {
        &self.source_entity
    }
}

impl fmt::Display for ResolutionResult {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "ResolutionResult {{ search_path: '{}', resolved: {}, url: {}, source_entity: '{}' }}",
            self.search_path,
            self.is_resolved(),
            self.url.as_ref().map(|v| v.as_str()).unwrap_or("None"),
            self.source_entity
        )
    }
}
