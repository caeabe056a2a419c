//! Functions for loading resolver settings.

use std::collections::BTreeMap;
use std::io::Read;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::bundle::DirBundle;
use crate::chain::LoaderChain;
use crate::errors::*;
use crate::fs::{DiskFS, Filesystem};
use crate::loader::classpath::DEFAULT_FALLBACK;
use crate::loader::*;
use crate::net::{Connector, HttpConnector, Proxy};
use crate::shortcut::ShortcutResolver;

/// A structure containing configuration data for the resolver, which is used
/// to describe the loader chain and the registered shortcuts.
///
/// ```json
/// {
///     "loaders": [
///         { "type": "local" },
///         { "type": "fallback", "prefixes": ["META-INF"], "inner": { "type": "classpath" } },
///         { "type": "remote", "proxy": "proxy.local:3128" }
///     ],
///     "shortcuts": { "assets:": "file:///opt/app/assets/" }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverParams {
    /// Loaders in the order of their priority.
    pub loaders: Vec<LoaderParams>,
    /// Shortcut definitions, e.g. `"assets:" => "file:///opt/app/assets/"`.
    pub shortcuts: BTreeMap<String, String>,
}

impl Default for ResolverParams {
    fn default() -> Self {
        ResolverParams {
            loaders: LoaderParams::default_loaders(),
            shortcuts: BTreeMap::new(),
        }
    }
}

impl ResolverParams {
    /// Reads params from JSON. Missing fields take their default values.
    pub fn from_json<R: Read>(reader: R) -> Result<Self> {
        let params = serde_json::from_reader(reader)?;
        Ok(params)
    }

    /// Builds the loader chain described by these params.
    pub fn build(&self, collaborators: &Collaborators) -> Result<LoaderChain> {
        let mut chain = LoaderChain::new();
        for v in &self.loaders {
            chain.add(v.build(collaborators)?);
        }

        info!("Creates loader chain {:?}.", chain);
        Ok(chain)
    }

    /// Builds the shortcut registry described by these params.
    pub fn shortcuts(&self) -> Result<ShortcutResolver> {
        let mut shortcuts = ShortcutResolver::new();
        for (k, v) in &self.shortcuts {
            shortcuts.add(k.as_str(), v.as_str())?;
        }

        Ok(shortcuts)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum LoaderParams {
    /// Files on the filesystem collaborator.
    Local,
    /// Resources bundled in `directory`, or in the directory of the running
    /// executable if not specified.
    Classpath {
        name: Option<String>,
        directory: Option<String>,
    },
    /// Absolute URLs opened with the connector collaborator.
    Remote { proxy: Option<String> },
    /// Retries the inner loader under each of `prefixes`.
    Fallback {
        prefixes: Vec<String>,
        inner: Box<LoaderParams>,
    },
    /// Jails the inner loader into `root`.
    Dir { root: String, inner: Box<LoaderParams> },
}

impl LoaderParams {
    /// The default chain: local files, then bundled resources with `META-INF`
    /// fallback, then remote URLs.
    pub fn default_loaders() -> Vec<LoaderParams> {
        vec![
            LoaderParams::Local,
            LoaderParams::Fallback {
                prefixes: vec![DEFAULT_FALLBACK.to_owned()],
                inner: Box::new(LoaderParams::Classpath {
                    name: None,
                    directory: None,
                }),
            },
            LoaderParams::Remote { proxy: None },
        ]
    }

    pub fn build(&self, collaborators: &Collaborators) -> Result<Arc<dyn Loader>> {
        let fs = &collaborators.filesystem;

        let loader: Arc<dyn Loader> = match *self {
            LoaderParams::Local => Arc::new(LocalLoader::with_filesystem(fs.clone())),
            LoaderParams::Classpath {
                ref name,
                ref directory,
            } => {
                let bundle = match *directory {
                    Some(ref directory) => {
                        let name = name.as_ref().map(|v| v.as_str()).unwrap_or("app");
                        DirBundle::new(name, fs.clone(), directory)
                    }
                    None => DirBundle::running(fs.clone()),
                };

                Arc::new(ClasspathLoader::new(Arc::new(bundle)))
            }
            LoaderParams::Remote { ref proxy } => {
                let proxy = match *proxy {
                    Some(ref v) => Some(Proxy::new(v.as_str())?),
                    None => None,
                };

                let connector = collaborators.connector.clone();
                Arc::new(RemoteLoader::with_connector(connector).with_proxy(proxy))
            }
            LoaderParams::Fallback {
                ref prefixes,
                ref inner,
            } => {
                let inner = inner.build(collaborators)?;
                Arc::new(FallbackLoader::with_prefixes(inner, prefixes.iter().cloned())?)
            }
            LoaderParams::Dir {
                ref root,
                ref inner,
            } => {
                let inner = inner.build(collaborators)?;
                Arc::new(DirLoader::new(inner, root.as_str())?)
            }
        };

        Ok(loader)
    }
}

/// The collaborators handed to loaders built from params.
#[derive(Clone)]
pub struct Collaborators {
    pub filesystem: Arc<dyn Filesystem>,
    pub connector: Arc<dyn Connector>,
}

impl Default for Collaborators {
    fn default() -> Self {
        Collaborators {
            filesystem: Arc::new(DiskFS::new()),
            connector: Arc::new(HttpConnector::new()),
        }
    }
}
