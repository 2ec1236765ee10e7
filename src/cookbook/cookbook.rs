//! Cookbook records.

use super::CookbookVersion;
use crate::component::Component;
use crate::delta::{self, diffable_record, Changes};
use crate::error::Result;
use crate::fetch::{self, null_as_default};
use crate::instance::Instance;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

/// Downloads is the download counters of a cookbook.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Downloads {
    pub total: u64,
    /// Download count per version string.
    #[serde(deserialize_with = "null_as_default")]
    pub versions: BTreeMap<String, u64>,
}

diffable_record!(Downloads { total, versions });

/// Metrics is the metrics section of a cookbook.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Metrics {
    pub downloads: Downloads,
    pub followers: u64,
}

diffable_record!(Metrics {
    downloads,
    followers,
});

/// Cookbook is a single cookbook as described by the Supermarket API.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Cookbook {
    #[serde(skip)]
    pub component: Component,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub maintainer: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(deserialize_with = "null_as_default")]
    pub category: String,
    #[serde(deserialize_with = "null_as_default")]
    pub latest_version: String,
    #[serde(deserialize_with = "null_as_default")]
    pub external_url: String,
    /// `None` when the server reports `null`, i.e. nobody has rated it yet.
    pub average_rating: Option<f64>,
    #[serde(deserialize_with = "null_as_default")]
    pub created_at: String,
    #[serde(deserialize_with = "null_as_default")]
    pub updated_at: String,
    #[serde(deserialize_with = "null_as_default")]
    pub deprecated: bool,
    /// `None` when the server has no verdict yet.
    pub foodcritic_failure: Option<bool>,
    /// URLs of every published version, newest first.
    #[serde(deserialize_with = "null_as_default")]
    pub versions: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub metrics: Metrics,
}

diffable_record!(Cookbook {
    component,
    name,
    maintainer,
    description,
    category,
    latest_version,
    external_url,
    average_rating,
    created_at,
    updated_at,
    deprecated,
    foodcritic_failure,
    versions,
    metrics,
});

impl Cookbook {
    /// Fetches the cookbook called `name` from `instance`.
    pub fn fetch(instance: &Instance, name: &str) -> Result<Cookbook> {
        let endpoint = format!("{}/cookbooks/{}", instance.endpoint(), name);
        debug!("Fetching cookbook {} from {}", name, endpoint);
        let (mut cookbook, etag): (Cookbook, _) = fetch::get_json(instance.fetcher(), &endpoint)?;
        cookbook.component = Component::tagged(endpoint, etag);
        Ok(cookbook)
    }

    /// Fetches version `version` of this cookbook.
    pub fn version(&self, instance: &Instance, version: &str) -> Result<CookbookVersion> {
        CookbookVersion::fetch(instance, self, version)
    }

    pub fn endpoint(&self) -> &str {
        &self.component.endpoint
    }

    /// Returns true if nothing but defaults has been filled in.
    pub fn is_empty(&self) -> bool {
        delta::is_empty(self)
    }

    pub fn equals(&self, other: &Cookbook) -> bool {
        delta::equals(self, other)
    }

    /// Returns what was added or changed and what was removed going from this
    /// cookbook to `other`.
    pub fn diff(&self, other: &Cookbook) -> Changes<Cookbook> {
        delta::diff(self, other)
    }
}
