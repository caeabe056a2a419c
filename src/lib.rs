//! # What is This?
//!
//! Locus resolves opaque resource locations, like `assets/logo.png`,
//! `file:///opt/app/config.json`, `classpath:META-INF/app.nfo` or
//! `https://www.rust-lang.org/index.html`, into concrete handles expressed as
//! URLs, by trying an ordered chain of pluggable loaders until one of them
//! succeeds.
//!
//! ## Loaders
//!
//! A `Loader` is a single resolution strategy. The crate ships with:
//!
//! - `LocalLoader` claims `file:` and resolves paths that exist on a
//! `Filesystem` collaborator (the local disk by default);
//! - `ClasspathLoader` claims `classpath:` and resolves resources bundled with
//! the application through a `Bundle` collaborator;
//! - `RemoteLoader` resolves absolute URLs by opening a connection to them
//! through a `Connector` collaborator;
//! - `FnLoader` builds a loader from a closure.
//!
//! Loaders compose. `FallbackLoader` retries a failed lookup of the wrapped
//! loader under alternate root prefixes, and `DirLoader` jails the wrapped
//! loader into a root directory. A `LoaderChain` tries its members in order,
//! and is a loader itself.
//!
//! ## Resolver
//!
//! The `Resolver` owns a chain and is the usual entry point:
//!
//! ```rust,no_run
//! use locus::prelude::*;
//!
//! let resolver = Resolver::new().unwrap();
//! if let Some(url) = resolver.lookup("classpath:app.nfo") {
//!     println!("{}", url);
//! }
//! ```
//!
//! Custom chains are assembled with `Resolver::builder()`, or described with
//! `ResolverParams` which could be read from JSON.
//!
//! Resolution failures are never errors. Collaborator failures are reported
//! as unresolved results, and only malformed inputs such as empty locations
//! are rejected with an `Error`.

#[macro_use]
extern crate failure;
#[macro_use]
extern crate log;

pub mod errors;

pub mod location;
pub mod path;
pub mod url;

pub mod context;
pub mod info;

pub mod bundle;
pub mod fs;
pub mod net;

pub mod chain;
pub mod loader;
pub mod shortcut;

pub mod resolver;
pub mod settings;

pub mod prelude {
    pub use crate::chain::LoaderChain;
    pub use crate::context::Context;
    pub use crate::errors::*;
    pub use crate::info::ResolutionResult;
    pub use crate::loader::{
        ClasspathLoader, DirLoader, FallbackLoader, FnLoader, LocalLoader, Loader, RemoteLoader,
    };
    pub use crate::location::Location;
    pub use crate::resolver::{Resolver, ResolverBuilder};
    pub use crate::settings::{Collaborators, LoaderParams, ResolverParams};
    pub use crate::url::Url;
}
