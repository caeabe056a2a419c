//! Opaque resource locations and the scheme helpers shared by every loader.
//!
//! A location follows the grammar `[<scheme> ":"] <path>`. Schemes are at least
//! two chars long, so a DOS drive letter like `c:/tmp` is never taken as one.

use std::fmt;
use std::ops::Deref;
use std::str::FromStr;

use crate::errors::*;

/// The scheme claimed by loaders that accept any absolute URL.
pub const WILDCARD: &str = "*";

/// Returns the scheme token of `location`, if it has one.
pub fn extract_scheme(location: &str) -> Option<&str> {
    let index = location.find(':')?;
    let scheme = &location[..index];

    if scheme.len() < 2 {
        return None;
    }

    let mut chars = scheme.chars();
    let leading = chars.next().map(|c| c.is_ascii_alphabetic()).unwrap_or(false);
    if !leading {
        return None;
    }

    if chars.all(|c| c.is_ascii_alphanumeric() || c == '+' || c == '-' || c == '.') {
        Some(scheme)
    } else {
        None
    }
}

/// Removes the leading `scheme:` of `location` if exists.
pub fn strip_scheme(location: &str) -> &str {
    match extract_scheme(location) {
        Some(scheme) => &location[scheme.len() + 1..],
        None => location,
    }
}

/// Checks if `location` is prefixed with `scheme` (ignoring case).
pub fn has_scheme(location: &str, scheme: &str) -> bool {
    extract_scheme(location)
        .map(|v| v.eq_ignore_ascii_case(scheme))
        .unwrap_or(false)
}

/// A non-empty resource location.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Location(String);

impl Location {
    /// Creates a new location, rejecting empty strings.
    pub fn new<T: Into<String>>(location: T) -> Result<Self> {
        let location = location.into();
        if location.is_empty() {
            return Err(Error::EmptyLocation);
        }

        Ok(Location(location))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[inline]
    pub fn scheme(&self) -> Option<&str> {
        extract_scheme(&self.0)
    }

    #[inline]
    pub fn strip_scheme(&self) -> &str {
        strip_scheme(&self.0)
    }
}

impl Deref for Location {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<str> for Location {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for Location {
    type Err = Error;

    fn from_str(v: &str) -> Result<Self> {
        Location::new(v)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scheme() {
        assert_eq!(extract_scheme("file:/tmp/a.nfo"), Some("file"));
        assert_eq!(extract_scheme("classpath:META-INF/a.nfo"), Some("classpath"));
        assert_eq!(extract_scheme("https://www.rust-lang.org/"), Some("https"));
        assert_eq!(extract_scheme("svn+ssh://host/repo"), Some("svn+ssh"));

        assert_eq!(extract_scheme("/tmp/a.nfo"), None);
        assert_eq!(extract_scheme("c:/tmp/a.nfo"), None);
        assert_eq!(extract_scheme(":a.nfo"), None);
        assert_eq!(extract_scheme("1x:a.nfo"), None);
        assert_eq!(extract_scheme("/tmp/a:b.nfo"), None);
    }

    #[test]
    fn strip() {
        assert_eq!(strip_scheme("file:/tmp/a.nfo"), "/tmp/a.nfo");
        assert_eq!(strip_scheme("file:///tmp/a.nfo"), "///tmp/a.nfo");
        assert_eq!(strip_scheme("c:/tmp/a.nfo"), "c:/tmp/a.nfo");
        assert_eq!(strip_scheme("a.nfo"), "a.nfo");

        assert!(has_scheme("FILE:/tmp/a.nfo", "file"));
        assert!(!has_scheme("classpath:a.nfo", "file"));
    }

    #[test]
    fn location() {
        assert!(Location::new("").is_err());

        let location: Location = "classpath:META-INF/a.nfo".parse().unwrap();
        assert_eq!(location.scheme(), Some("classpath"));
        assert_eq!(location.strip_scheme(), "META-INF/a.nfo");
        assert_eq!(location.to_string(), "classpath:META-INF/a.nfo");
    }
}
