//! A bundle described by a list of resource names.

use std::collections::BTreeSet;
use std::io::Read;

use serde::{Deserialize, Serialize};

use crate::errors::*;
use crate::url::Url;

use super::Bundle;

/// An in-memory set of resource names. It could be built at runtime or read
/// from a JSON document like:
///
/// ```json
/// { "name": "app", "resources": ["META-INF/resource.xml"] }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Manifest {
    name: String,
    #[serde(default)]
    resources: BTreeSet<String>,
}

impl Manifest {
    pub fn new<T: Into<String>>(name: T) -> Self {
        Manifest {
            name: name.into(),
            resources: BTreeSet::new(),
        }
    }

    /// Reads a manifest in JSON format.
    pub fn load_from(file: &mut dyn Read) -> Result<Self> {
        let mut manifest: Manifest = serde_json::from_reader(file)?;
        manifest.resources = manifest
            .resources
            .iter()
            .filter_map(|v| super::normalize_name(v))
            .map(|v| v.to_string())
            .collect();

        info!(
            "Loads manifest {} with {} resources.",
            manifest.name,
            manifest.resources.len()
        );

        Ok(manifest)
    }

    /// Adds a resource. Returns false if the name escapes the bundle.
    pub fn insert<T: AsRef<str>>(&mut self, name: T) -> bool {
        match super::normalize_name(name.as_ref()) {
            Some(v) => {
                self.resources.insert(v.to_string());
                true
            }
            None => false,
        }
    }

    pub fn contains<T: AsRef<str>>(&self, name: T) -> bool {
        super::normalize_name(name.as_ref())
            .map(|v| self.resources.contains(&v.to_string()))
            .unwrap_or(false)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.resources.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }
}

impl Bundle for Manifest {
    fn name(&self) -> &str {
        &self.name
    }

    fn find(&self, name: &str) -> Option<Url> {
        let name = super::normalize_name(name)?;
        if self.resources.contains(&name.to_string()) {
            super::handle(&self.name, &name)
        } else {
            None
        }
    }
}
