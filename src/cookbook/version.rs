//! Cookbook version records.

use super::Cookbook;
use crate::component::Component;
use crate::delta::{self, diffable_record, Changes};
use crate::error::Result;
use crate::fetch::{self, null_as_default};
use crate::instance::Instance;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

/// CookbookVersion is one published version of a cookbook.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CookbookVersion {
    #[serde(skip)]
    pub component: Component,
    #[serde(deserialize_with = "null_as_default")]
    pub license: String,
    #[serde(deserialize_with = "null_as_default")]
    pub tarball_file_size: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub version: String,
    pub average_rating: Option<f64>,
    /// URL of the parent cookbook.
    #[serde(deserialize_with = "null_as_default")]
    pub cookbook: String,
    /// Download URL of the tarball.
    #[serde(deserialize_with = "null_as_default")]
    pub file: String,
    /// Version constraint per dependency name.
    #[serde(deserialize_with = "null_as_default")]
    pub dependencies: BTreeMap<String, String>,
}

diffable_record!(CookbookVersion {
    component,
    license,
    tarball_file_size,
    version,
    average_rating,
    cookbook,
    file,
    dependencies,
});

impl CookbookVersion {
    /// Fetches version `version` of `cookbook`.
    pub fn fetch(instance: &Instance, cookbook: &Cookbook, version: &str) -> Result<CookbookVersion> {
        let endpoint = format!("{}/versions/{}", cookbook.endpoint(), version);
        debug!("Fetching cookbook version {} from {}", version, endpoint);
        let (mut cv, etag): (CookbookVersion, _) = fetch::get_json(instance.fetcher(), &endpoint)?;
        cv.component = Component::tagged(endpoint, etag);
        Ok(cv)
    }

    pub fn endpoint(&self) -> &str {
        &self.component.endpoint
    }

    /// Returns true if nothing but defaults has been filled in.
    pub fn is_empty(&self) -> bool {
        delta::is_empty(self)
    }

    pub fn equals(&self, other: &CookbookVersion) -> bool {
        delta::equals(self, other)
    }

    pub fn diff(&self, other: &CookbookVersion) -> Changes<CookbookVersion> {
        delta::diff(self, other)
    }
}
