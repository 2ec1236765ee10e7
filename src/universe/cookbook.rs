//! Cookbook entries of the universe manifest.

use crate::delta::{self, diffable_record, Changes};
use crate::fetch::null_as_default;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// UniverseCookbookVersion is one version entry of a universe cookbook.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UniverseCookbookVersion {
    /// Filled in from the manifest key; the entry itself does not carry it.
    #[serde(skip_deserializing)]
    pub version: String,
    #[serde(deserialize_with = "null_as_default")]
    pub location_type: String,
    #[serde(deserialize_with = "null_as_default")]
    pub location_path: String,
    #[serde(deserialize_with = "null_as_default")]
    pub download_url: String,
    #[serde(deserialize_with = "null_as_default")]
    pub dependencies: BTreeMap<String, String>,
}

diffable_record!(UniverseCookbookVersion {
    version,
    location_type,
    location_path,
    download_url,
    dependencies,
});

impl UniverseCookbookVersion {
    pub fn is_empty(&self) -> bool {
        delta::is_empty(self)
    }

    pub fn equals(&self, other: &UniverseCookbookVersion) -> bool {
        delta::equals(self, other)
    }

    pub fn diff(&self, other: &UniverseCookbookVersion) -> Changes<UniverseCookbookVersion> {
        delta::diff(self, other)
    }
}

/// UniverseCookbook is a cookbook name and every version the universe lists
/// for it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UniverseCookbook {
    pub name: String,
    pub versions: BTreeMap<String, UniverseCookbookVersion>,
}

diffable_record!(UniverseCookbook { name, versions });

impl UniverseCookbook {
    /// Builds a cookbook from the version map decoded under `name`, filling
    /// each entry's version from its key.
    pub(crate) fn from_manifest(
        name: String,
        versions: BTreeMap<String, UniverseCookbookVersion>,
    ) -> Self {
        let versions = versions
            .into_iter()
            .map(|(version, mut entry)| {
                entry.version = version.clone();
                (version, entry)
            })
            .collect();
        UniverseCookbook { name, versions }
    }

    /// Returns the entry for `version`, if the universe lists it.
    pub fn version(&self, version: &str) -> Option<&UniverseCookbookVersion> {
        self.versions.get(version)
    }

    pub fn is_empty(&self) -> bool {
        delta::is_empty(self)
    }

    pub fn equals(&self, other: &UniverseCookbook) -> bool {
        delta::equals(self, other)
    }

    pub fn diff(&self, other: &UniverseCookbook) -> Changes<UniverseCookbook> {
        delta::diff(self, other)
    }
}
