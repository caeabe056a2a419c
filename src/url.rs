//! The resolved resource handle.

use crate::errors::*;
use crate::path::NormalPath;

const SCHEMA: usize = 0;
const SCHEMA_END: usize = 1;
const HOST: usize = 2;
const HOST_END: usize = 3;
const PATH: usize = 4;
const PATH_END: usize = 5;
const MAX_COMPONENTS: usize = 6;

/// Every resolved resource is expressed as an URL. On creation, the URL will be
/// parsed and indices to its parts will be stored internally.
///
/// The user info and the port are skipped when locating the host, and the
/// query and the fragment are never part of the path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Url {
    url: String,
    components: [usize; MAX_COMPONENTS],
}

impl Url {
    /// Creates a new URL.
    pub fn new<T: Into<String>>(url: T) -> Result<Self> {
        let url = url.into();
        let mut components = [0; MAX_COMPONENTS];

        let schema_index = match url.find("://") {
            Some(index) if index > 0 => index,
            _ => return Err(Error::MalformedUrl(url, "must have a schema")),
        };

        components[SCHEMA] = 0;
        components[SCHEMA_END] = schema_index;

        // The authority ends at the path, the query, the fragment or the end.
        let authority = schema_index + 3;
        let authority_end = url[authority..]
            .find(|c: char| c == '/' || c == '?' || c == '#')
            .map(|v| v + authority)
            .unwrap_or_else(|| url.len());

        let host = url[authority..authority_end]
            .rfind('@')
            .map(|v| v + authority + 1)
            .unwrap_or(authority);

        let host_end = url[host..authority_end]
            .find(':')
            .map(|v| v + host)
            .unwrap_or(authority_end);

        // `file:///tmp` has no host, but a path.
        if host == host_end && !url[authority_end..].starts_with('/') {
            return Err(Error::MalformedUrl(url, "must have a hostname"));
        }

        components[HOST] = host;
        components[HOST_END] = host_end;

        components[PATH] = authority_end;
        components[PATH_END] = url[authority_end..]
            .find(|c: char| c == '?' || c == '#')
            .map(|v| v + authority_end)
            .unwrap_or_else(|| url.len());

        Ok(Url { url, components })
    }

    /// Creates a `file` URL from an absolute path.
    pub fn from_file_path(path: &NormalPath) -> Result<Self> {
        if !path.is_absolute() {
            return Err(Error::MalformedUrl(path.to_string(), "file path must be absolute"));
        }

        let mut url = "file://".to_owned();
        if let Some(prefix) = path.prefix() {
            url.push('/');
            url.push_str(prefix);
        }

        url.push('/');
        url.push_str(&path.segments().join("/"));
        Url::new(url)
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.url
    }
}

impl std::ops::Deref for Url {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.url
    }
}

impl std::fmt::Display for Url {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.url)
    }
}

macro_rules! field {
    ($name: ident, $start: ident, $end: ident) => {
        #[inline]
        pub fn $name(&self) -> &str {
            &self.url[self.components[$start]..self.components[$end]]
        }
    };
}

impl Url {
    field!(schema, SCHEMA, SCHEMA_END);
    field!(host, HOST, HOST_END);
    field!(path, PATH, PATH_END);
}
