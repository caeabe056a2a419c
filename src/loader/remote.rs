use std::sync::Arc;

use crate::context::Context;
use crate::info::ResolutionResult;
use crate::location::WILDCARD;
use crate::net::{Connector, HttpConnector, Proxy};
use crate::url::Url;

use super::Loader;

/// Resolves absolute URLs by opening a connection to them. Malformed URLs and
/// connection failures are reported as unresolved.
#[derive(Clone)]
pub struct RemoteLoader {
    connector: Arc<dyn Connector>,
    proxy: Option<Proxy>,
}

impl RemoteLoader {
    pub fn new() -> Self {
        RemoteLoader::with_connector(Arc::new(HttpConnector::new()))
    }

    pub fn with_connector(connector: Arc<dyn Connector>) -> Self {
        RemoteLoader {
            connector,
            proxy: None,
        }
    }

    /// Routes connections through `proxy`, or directly if `None`.
    pub fn with_proxy(mut self, proxy: Option<Proxy>) -> Self {
        self.proxy = proxy;
        self
    }

    pub fn set_proxy(&mut self, proxy: Option<Proxy>) {
        self.proxy = proxy;
    }

    #[inline]
    pub fn proxy(&self) -> Option<&Proxy> {
        self.proxy.as_ref()
    }

    /// Opens `location` and returns its final URL if reachable.
    pub fn lookup(&self, location: &str) -> Option<Url> {
        let url = match Url::new(location) {
            Ok(url) => url,
            Err(err) => {
                trace!("Skips {}: {}", location, err);
                return None;
            }
        };

        match self.connector.open(&url, self.proxy.as_ref()) {
            Ok(url) => Some(url),
            Err(err) => {
                debug!("Could not open {}: {}", url, err);
                None
            }
        }
    }
}

impl Default for RemoteLoader {
    fn default() -> Self {
        RemoteLoader::new()
    }
}

impl Loader for RemoteLoader {
    fn name(&self) -> &str {
        "RemoteLoader"
    }

    fn resolve(&self, location: &str, _: &mut Context) -> ResolutionResult {
        ResolutionResult::from(location, self.lookup(location), self.name())
    }

    fn scheme(&self) -> Option<&str> {
        Some(WILDCARD)
    }
}
