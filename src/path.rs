//! Lexical path normalization used for root containment checks.

use std::fmt;

/// The separator used when a loader does not expose one.
pub const DEFAULT_SEPARATOR: &str = "/";

/// A path with all the dot-segments and duplicated separators resolved.
///
/// Normalization is purely lexical. `..` never climbs above the root of an
/// absolute path, and is kept as leading segments of a relative one. With a
/// windows-style separator both `\` and `/` are accepted, and a drive prefix
/// like `c:` (or `/c:` as it appears in URL paths) is recognized.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NormalPath {
    prefix: Option<String>,
    absolute: bool,
    segments: Vec<String>,
}

fn drive(v: &str) -> bool {
    let bytes = v.as_bytes();
    bytes.len() >= 2
        && bytes[0].is_ascii_alphabetic()
        && bytes[1] == b':'
        && (bytes.len() == 2 || bytes[2] == b'/' || bytes[2] == b'\\')
}

impl NormalPath {
    /// Normalizes `path` with the conventions of `separator`.
    pub fn new(path: &str, separator: &str) -> Self {
        let windows = separator == "\\";
        let is_sep = |c: char| c == '/' || (windows && c == '\\');

        let mut rest = path;
        let mut prefix = None;

        if windows {
            if rest.starts_with('/') && drive(&rest[1..]) {
                rest = &rest[1..];
            }

            if drive(rest) {
                prefix = Some(rest[..2].to_owned());
                rest = &rest[2..];
            }
        }

        let mut v = NormalPath {
            prefix,
            absolute: rest.starts_with(is_sep),
            segments: Vec::new(),
        };

        for segment in rest.split(is_sep) {
            v.push(segment);
        }

        v
    }

    fn push(&mut self, segment: &str) {
        match segment {
            "" | "." => {}
            ".." => {
                let poppable = self.segments.last().map(|v| v != "..").unwrap_or(false);
                if poppable {
                    self.segments.pop();
                } else if !self.absolute {
                    self.segments.push("..".to_owned());
                }
            }
            v => self.segments.push(v.to_owned()),
        }
    }

    #[inline]
    pub fn is_absolute(&self) -> bool {
        self.absolute
    }

    /// Returns true if this is a relative path without any segment.
    #[inline]
    pub fn is_empty(&self) -> bool {
        !self.absolute && self.prefix.is_none() && self.segments.is_empty()
    }

    /// The drive prefix (e.g. `c:`) if exists.
    #[inline]
    pub fn prefix(&self) -> Option<&str> {
        self.prefix.as_ref().map(|v| v.as_str())
    }

    #[inline]
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Returns true if the path climbs above its starting point with `..`.
    pub fn escapes(&self) -> bool {
        self.segments.first().map(|v| v == "..").unwrap_or(false)
    }

    pub fn file_name(&self) -> Option<&str> {
        match self.segments.last() {
            Some(v) if v != ".." => Some(v.as_str()),
            _ => None,
        }
    }

    /// Returns the path without its final segment, or `None` if there is
    /// nothing left to strip.
    pub fn parent(&self) -> Option<NormalPath> {
        if self.segments.is_empty() {
            return None;
        }

        if !self.absolute && self.prefix.is_none() && self.segments.len() == 1 {
            return None;
        }

        let mut parent = self.clone();
        parent.segments.pop();
        Some(parent)
    }

    /// Appends `other` to this path. An absolute `other` replaces it.
    pub fn join(&self, other: &NormalPath) -> NormalPath {
        if other.absolute {
            return other.clone();
        }

        let mut v = self.clone();
        for segment in &other.segments {
            v.push(segment);
        }

        v
    }

    /// Drops the root, making the path relative to it.
    pub fn relative(&self) -> NormalPath {
        NormalPath {
            prefix: None,
            absolute: false,
            segments: self.segments.clone(),
        }
    }

    /// Renders the path with `separator`.
    pub fn to_string_with(&self, separator: &str) -> String {
        let mut v = String::new();
        if let Some(ref prefix) = self.prefix {
            v.push_str(prefix);
        }

        if self.absolute {
            v.push_str(separator);
        }

        v.push_str(&self.segments.join(separator));
        v
    }
}

impl fmt::Display for NormalPath {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_string_with(DEFAULT_SEPARATOR))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unix(v: &str) -> String {
        NormalPath::new(v, "/").to_string()
    }

    #[test]
    fn normalize() {
        assert_eq!(unix("/tmp/inner"), "/tmp/inner");
        assert_eq!(unix("/tmp/inner/"), "/tmp/inner");
        assert_eq!(unix("/tmp//inner/./a.nfo"), "/tmp/inner/a.nfo");
        assert_eq!(unix("/tmp/inner/../inner/a.nfo"), "/tmp/inner/a.nfo");
        assert_eq!(unix("/../a.nfo"), "/a.nfo");
        assert_eq!(unix("///tmp/a.nfo"), "/tmp/a.nfo");
        assert_eq!(unix("../a.nfo"), "../a.nfo");
        assert_eq!(unix("a/../../b"), "../b");
        assert_eq!(unix("a/.."), "");
        assert_eq!(unix("/"), "/");

        assert!(NormalPath::new("/tmp", "/").is_absolute());
        assert!(!NormalPath::new("tmp", "/").is_absolute());
        assert!(NormalPath::new("../a", "/").escapes());
        assert!(!NormalPath::new("a/../b", "/").escapes());
    }

    #[test]
    fn windows() {
        let v = NormalPath::new("c:\\tmp\\..\\tmp\\a.txt", "\\");
        assert_eq!(v.prefix(), Some("c:"));
        assert!(v.is_absolute());
        assert_eq!(v.to_string_with("\\"), "c:\\tmp\\a.txt");

        // Drive letters inside URL paths.
        assert_eq!(NormalPath::new("/c:/tmp/a.txt", "\\"), v);
        assert_eq!(NormalPath::new("c:/tmp/a.txt", "\\"), v);

        // No drive letters with unix separators.
        assert!(NormalPath::new("c:/tmp/a.txt", "/").prefix().is_none());
    }

    #[test]
    fn parent() {
        let v = NormalPath::new("/tmp/inner/a.nfo", "/");
        assert_eq!(v.file_name(), Some("a.nfo"));
        assert_eq!(v.parent(), Some(NormalPath::new("/tmp/inner", "/")));
        assert_eq!(NormalPath::new("/a.nfo", "/").parent(), Some(NormalPath::new("/", "/")));
        assert_eq!(NormalPath::new("/", "/").parent(), None);
        assert_eq!(NormalPath::new("a.nfo", "/").parent(), None);
        assert_eq!(NormalPath::new("a/b.nfo", "/").parent(), Some(NormalPath::new("a", "/")));
    }

    #[test]
    fn join() {
        let root = NormalPath::new("/tmp/inner", "/");
        assert_eq!(root.join(&NormalPath::new("a.nfo", "/")).to_string(), "/tmp/inner/a.nfo");
        assert_eq!(root.join(&NormalPath::new("../a.nfo", "/")).to_string(), "/tmp/a.nfo");
        assert_eq!(root.join(&NormalPath::new("/b.nfo", "/")).to_string(), "/b.nfo");
        assert_eq!(root.relative().to_string(), "tmp/inner");
    }
}
