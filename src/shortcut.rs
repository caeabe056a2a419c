//! Central registry for shortcut definitions. Shortcuts are location aliases
//! that are expanded before a location reaches the loader chain.

use std::collections::HashMap;

use crate::errors::*;
use crate::location;

const MAX_DEPTH: usize = 32;

/// Central registry for shortcut definitions.
///
/// A shortcut like `home:` expands to a full prefix such as `file:///docs/`,
/// or to another shortcut that is expanded in turn.
#[derive(Debug, Default, Clone)]
pub struct ShortcutResolver {
    registry: HashMap<String, String>,
}

impl ShortcutResolver {
    /// Creates a new shortcut registry.
    pub fn new() -> Self {
        ShortcutResolver::default()
    }

    /// Add or replace a shortcut definition.
    pub fn add<T1, T2>(&mut self, shortcut: T1, fullname: T2) -> Result<()>
    where
        T1: Into<String>,
        T2: Into<String>,
    {
        let shortcut = shortcut.into();
        let fullname = fullname.into();

        if !shortcut.ends_with(':') {
            return Err(Error::MalformedShortcut(
                shortcut,
                "must end with a colon (':')",
            ));
        }

        if location::extract_scheme(&shortcut).is_none() {
            return Err(Error::MalformedShortcut(
                shortcut,
                "must be at least 2 chars to not be confused with DOS drive letters",
            ));
        }

        if !fullname.ends_with(':') && !fullname.ends_with('/') && !fullname.ends_with('\\') {
            return Err(Error::MalformedShortcut(
                shortcut,
                "fullname must end in a separator (dir) or ':' (other shortcut)",
            ));
        }

        self.registry.insert(shortcut, fullname);
        Ok(())
    }

    /// Checks if a shortcut exists.
    #[inline]
    pub fn has<T: AsRef<str>>(&self, shortcut: T) -> bool {
        self.registry.contains_key(shortcut.as_ref())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.registry.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }

    /// Resolve shortcuts in the provided string recursively. Returns None if
    /// the leading shortcut is not registered, or if the definitions are
    /// cyclic.
    pub fn resolve<T: AsRef<str>>(&self, src: T) -> Option<String> {
        let mut dst = src.as_ref().to_owned();
        let mut depth = 0;

        loop {
            if dst.contains("://") {
                break;
            }

            let shortcut = match location::extract_scheme(&dst) {
                Some(v) => format!("{}:", v),
                // Plain paths and DOS drive letters.
                None => break,
            };

            match self.registry.get(&shortcut) {
                Some(fullname) => dst.replace_range(0..shortcut.len(), fullname),
                None if depth == 0 => return None,
                None => break,
            }

            depth += 1;
            if depth >= MAX_DEPTH {
                warn!("Shortcut {} expands too deep.", src.as_ref());
                return None;
            }
        }

        Some(dst)
    }
}
