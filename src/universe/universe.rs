//! The universe snapshot and its refresh protocol.

use super::{UniverseCookbook, UniverseCookbookVersion};
use crate::component::Component;
use crate::delta::{self, diffable_record, Changes, Diffable};
use crate::error::{Error, Result};
use crate::fetch;
use crate::instance::Instance;
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::{debug, info, warn};

/// The manifest as it comes off the wire: cookbook name to version to entry.
type Manifest = BTreeMap<String, BTreeMap<String, UniverseCookbookVersion>>;

/// Universe is a snapshot of every cookbook version a Supermarket serves.
///
/// The snapshot keeps the instance it was fetched from so it can refresh
/// itself. The instance takes no part in emptiness, equality or diffs.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Universe {
    pub component: Component,
    #[serde(skip)]
    pub instance: Option<Instance>,
    pub cookbooks: BTreeMap<String, UniverseCookbook>,
}

diffable_record!(Universe {
    component,
    cookbooks,
});

impl Universe {
    /// Fetches the universe of `instance`.
    pub fn fetch(instance: &Instance) -> Result<Universe> {
        let endpoint = format!("{}/universe", instance.base_url);
        debug!("Fetching universe from {}", endpoint);
        let (manifest, etag): (Manifest, _) = fetch::get_json(instance.fetcher(), &endpoint)?;
        let component = Component::tagged(endpoint, etag);
        let cookbooks: BTreeMap<String, UniverseCookbook> = manifest
            .into_iter()
            .map(|(name, versions)| {
                let cookbook = UniverseCookbook::from_manifest(name.clone(), versions);
                (name, cookbook)
            })
            .collect();
        debug!(
            "Fetched {} cookbooks, etag {:?}",
            cookbooks.len(),
            component.etag
        );

        Ok(Universe {
            component,
            instance: Some(instance.clone()),
            cookbooks,
        })
    }

    /// Builds a detached universe from its cookbooks, e.g. to hold one half of
    /// a diff.
    pub fn from_cookbooks(cookbooks: BTreeMap<String, UniverseCookbook>) -> Universe {
        Universe {
            cookbooks,
            ..Default::default()
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.component.endpoint
    }

    /// Returns the cookbook called `name`, if the snapshot has it.
    pub fn cookbook(&self, name: &str) -> Option<&UniverseCookbook> {
        self.cookbooks.get(name)
    }

    /// Returns the number of cookbooks in the snapshot.
    pub fn len(&self) -> usize {
        self.cookbooks.len()
    }

    /// Asks the server whether the snapshot is still current.
    ///
    /// True only when the snapshot has an ETag and a HEAD request against its
    /// endpoint returns the same one. A failed probe counts as stale.
    pub fn is_current(&self) -> bool {
        let Some(instance) = &self.instance else {
            return false;
        };
        if self.component.etag.is_empty() {
            return false;
        }
        match instance.fetcher().head(&self.component.endpoint) {
            Ok(Some(etag)) => etag == self.component.etag,
            Ok(None) => false,
            Err(e) => {
                warn!("ETag probe of {} failed: {}", self.component.endpoint, e);
                false
            }
        }
    }

    /// Brings the snapshot up to date and returns what changed.
    ///
    /// When the server still reports the snapshot's ETag nothing is
    /// downloaded. Otherwise the manifest is fetched again and compared by
    /// cookbook: added and removed cookbooks show up whole, changed ones
    /// down to the versions that differ. The snapshot is replaced only when
    /// something changed. If the manifest is unchanged under a new ETag, the
    /// snapshot keeps its data but takes the new ETag. On error the snapshot
    /// is left as it was.
    pub fn refresh(&mut self) -> Result<Changes<Universe>> {
        if self.is_current() {
            debug!(
                "Universe at {} unchanged (etag {})",
                self.component.endpoint, self.component.etag
            );
            return Ok(Changes::none());
        }

        let instance = self
            .instance
            .as_ref()
            .ok_or_else(|| Error::unbound(self.component.endpoint.as_str()))?;
        let current = Universe::fetch(instance)?;

        if self.cookbooks.equals(&current.cookbooks) {
            debug!("Universe at {} has no changes", self.component.endpoint);
            self.component = current.component;
            return Ok(Changes::none());
        }

        let (positive, negative) = self.cookbooks.delta(&current.cookbooks);
        let changes = Changes {
            positive: positive.map(Universe::from_cookbooks),
            negative: negative.map(Universe::from_cookbooks),
        };
        info!(
            "Universe at {} changed: {} cookbooks added or changed, {} removed or changed",
            current.component.endpoint,
            changes.positive.as_ref().map_or(0, Universe::len),
            changes.negative.as_ref().map_or(0, Universe::len),
        );
        self.replace_snapshot(current);
        Ok(changes)
    }

    /// Same as [`Universe::refresh`].
    pub fn update(&mut self) -> Result<Changes<Universe>> {
        self.refresh()
    }

    /// Replaces this snapshot with `new`.
    pub fn replace_snapshot(&mut self, new: Universe) {
        *self = new;
    }

    /// Returns true if the snapshot holds no cookbooks and no endpoint.
    pub fn is_empty(&self) -> bool {
        delta::is_empty(self)
    }

    /// Compares endpoint, ETag and cookbooks.
    pub fn equals(&self, other: &Universe) -> bool {
        delta::equals(self, other)
    }

    pub fn diff(&self, other: &Universe) -> Changes<Universe> {
        delta::diff(self, other)
    }
}
