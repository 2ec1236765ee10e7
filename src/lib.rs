//! # Supermarket
//!
//! A client library for the Chef Supermarket API.
//!
//! This library fetches instance status, cookbooks, cookbook versions and the
//! bulk universe manifest, and compares snapshots of them. Every record can be
//! checked for emptiness, compared for equality and diffed into what was added
//! or changed and what was removed.
//!
//! ## Modules
//!
//! - [`delta`] - Emptiness, equality and structural diff over API records
//! - [`instance`] - The connection to a Supermarket server
//! - [`cookbook`] - Single cookbooks and cookbook versions
//! - [`universe`] - The universe manifest and its ETag-based refresh
//! - [`fetch`] - The HTTP seam between records and the network
//!
//! ## Example
//!
//! ```no_run
//! use supermarket::Instance;
//!
//! let instance = Instance::new("https://supermarket.chef.io")?;
//! let mut universe = instance.universe()?;
//!
//! // Later on:
//! let changes = universe.refresh()?;
//! if let Some(added) = &changes.positive {
//!     for name in added.cookbooks.keys() {
//!         println!("{} has new versions", name);
//!     }
//! }
//! # Ok::<(), supermarket::Error>(())
//! ```

pub mod component;
pub mod config;
pub mod cookbook;
pub mod delta;
pub mod error;
pub mod fetch;
pub mod instance;
pub mod universe;

pub use component::Component;
pub use config::Config;
pub use cookbook::{Cookbook, CookbookVersion, Downloads, Metrics};
pub use delta::{diff, equals, is_empty, Changes, Diffable};
pub use error::{Error, Result};
pub use fetch::{Fetcher, HttpFetcher, Response};
pub use instance::{Instance, InstanceBuilder};
pub use universe::{Universe, UniverseCookbook, UniverseCookbookVersion};
