use std::collections::HashMap;
use std::io::Read;
use std::sync::{Mutex, MutexGuard};
use std::time::Duration;

use reqwest::blocking::Client;

use crate::errors::*;
use crate::url::Url;

use super::{Connector, Proxy};

fn network<E: ::std::fmt::Display>(err: E) -> Error {
    Error::Network(err.to_string())
}

/// Opens `http` and `https` resources with a blocking client.
///
/// Clients are built on first use and kept for the following requests, one
/// for direct connections and one per proxy.
#[derive(Debug, Default)]
pub struct HttpConnector {
    timeout: Option<Duration>,
    clients: Mutex<HashMap<Option<Url>, Client>>,
}

impl HttpConnector {
    pub fn new() -> Self {
        HttpConnector::default()
    }

    /// Sets the timeout of the whole request.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self.clients = Mutex::new(HashMap::new());
        self
    }

    fn client(&self, proxy: Option<&Proxy>) -> Result<Client> {
        let key = proxy.map(|v| v.url().clone());

        let mut clients = self.clients();
        if let Some(client) = clients.get(&key) {
            return Ok(client.clone());
        }

        let mut builder = Client::builder();
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }

        builder = match proxy {
            Some(proxy) => {
                let proxy = reqwest::Proxy::all(proxy.url().as_str()).map_err(network)?;
                builder.proxy(proxy)
            }
            None => builder.no_proxy(),
        };

        let client = builder.build().map_err(network)?;
        clients.insert(key, client.clone());
        Ok(client)
    }

    fn clients(&self) -> MutexGuard<HashMap<Option<Url>, Client>> {
        match self.clients.lock() {
            Ok(v) => v,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl Connector for HttpConnector {
    fn open(&self, url: &Url, proxy: Option<&Proxy>) -> Result<Url> {
        let schema = url.schema().to_ascii_lowercase();
        if schema != "http" && schema != "https" {
            return Err(Error::UnsupportedSchema(schema));
        }

        let mut rsp = self
            .client(proxy)?
            .get(url.as_str())
            .send()
            .and_then(|v| v.error_for_status())
            .map_err(network)?;

        let mut byte = [0; 1];
        if rsp.read(&mut byte)? == 0 {
            return Err(Error::EmptyStream(url.to_string()));
        }

        Url::new(rsp.url().as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reuse_clients() {
        let connector = HttpConnector::new().with_timeout(Duration::from_secs(5));
        let proxy = Proxy::new("127.0.0.1:1").unwrap();

        // Nothing listens on port 1.
        let url = Url::new("http://127.0.0.1:1/index.html").unwrap();
        for _ in 0..2 {
            assert!(connector.open(&url, None).is_err());
            assert!(connector.open(&url, Some(&proxy)).is_err());
        }

        assert_eq!(connector.clients().len(), 2);
        assert!(connector.clients().contains_key(&None));
        assert!(connector.clients().contains_key(&Some(proxy.url().clone())));

        // Unsupported schemas never build a client.
        let connector = HttpConnector::new();
        let url = Url::new("ftp://127.0.0.1/index.html").unwrap();
        assert!(connector.open(&url, None).is_err());
        assert!(connector.clients().is_empty());
    }
}
