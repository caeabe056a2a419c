//! The bundled-resource collaborator used by `ClasspathLoader`.
//!
//! A `Bundle` is a namespace of resources shipped along with the application.
//! Resources are looked up by name (e.g. `META-INF/resource.xml`) and the
//! resolved handles take the form `classpath://<bundle>/<name>`.

pub mod dir;
pub use self::dir::DirBundle;

pub mod manifest;
pub use self::manifest::Manifest;

use crate::path::NormalPath;
use crate::url::Url;

/// The URL schema of the handles produced by bundles.
pub const SCHEMA: &str = "classpath";

pub trait Bundle: Send + Sync {
    /// The identifier of this bundle, used as the host of its handles.
    fn name(&self) -> &str;

    /// Finds the resource with `name`, returns None if not exists.
    fn find(&self, name: &str) -> Option<Url>;
}

/// Normalizes a resource name into a path relative to the bundle root. Names
/// that escape the bundle are rejected.
pub fn normalize_name(name: &str) -> Option<NormalPath> {
    let path = NormalPath::new(name, "/").relative();
    if path.is_empty() || path.escapes() {
        None
    } else {
        Some(path)
    }
}

/// Builds the handle of resource `name` in `bundle`.
pub fn handle(bundle: &str, name: &NormalPath) -> Option<Url> {
    Url::new(format!("{}://{}/{}", SCHEMA, bundle, name)).ok()
}
