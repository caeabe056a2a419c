//! The remote collaborator used by `RemoteLoader`.

pub mod http;
pub use self::http::HttpConnector;

use std::fmt;

use crate::errors::*;
use crate::url::Url;

/// Opens a connection to a remote resource.
pub trait Connector: Send + Sync {
    /// Opens `url` (through `proxy` if provided) and reads at least one byte
    /// from it. Returns the final URL of the resource, which might differ from
    /// `url` after redirections.
    fn open(&self, url: &Url, proxy: Option<&Proxy>) -> Result<Url>;
}

/// The address of a network proxy, e.g. `http://proxy.local:3128/`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Proxy {
    url: Url,
}

impl Proxy {
    pub fn new<T: Into<String>>(url: T) -> Result<Self> {
        let mut url = url.into();
        // Bare `host:port` addresses are taken as http proxies.
        if !url.contains("://") {
            url = format!("http://{}", url);
        }

        let authority = url.find("://").map(|v| v + 3).unwrap_or(0);
        if !url[authority..].contains('/') {
            url.push('/');
        }

        let url = Url::new(url)?;
        if url.host().is_empty() {
            return Err(Error::MalformedUrl(url.to_string(), "must have a hostname"));
        }

        Ok(Proxy { url })
    }

    #[inline]
    pub fn url(&self) -> &Url {
        &self.url
    }
}

impl fmt::Display for Proxy {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.url)
    }
}
