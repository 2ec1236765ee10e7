//! Universe module - The bulk manifest of every cookbook version.
//!
//! The universe is served at `/universe` as a map of cookbook names to maps of
//! version strings to version entries:
//!
//! ```json
//! {
//!   "chef": {
//!     "0.12.0": {
//!       "location_type": "opscode",
//!       "location_path": "https://supermarket.chef.io/api/v1",
//!       "download_url": "https://supermarket.chef.io/api/v1/cookbooks/chef/versions/0.12.0/download",
//!       "dependencies": { "runit": ">= 0.0.0", "couchdb": ">= 0.0.0" }
//!     }
//!   },
//!   "djbdns": {
//!     "0.8.2": {
//!       "location_type": "opscode",
//!       "location_path": "https://supermarket.chef.io/api/v1",
//!       "download_url": "https://supermarket.chef.io/api/v1/cookbooks/djbdns/versions/0.8.2/download",
//!       "dependencies": { "runit": ">= 0.0.0", "build-essential": ">= 0.0.0" }
//!     }
//!   }
//! }
//! ```
//!
//! A [`Universe`] is meant to be held and refreshed periodically.
//! [`Universe::refresh`] asks the server whether its ETag changed before
//! downloading the manifest again, and reports what changed between the two
//! snapshots at cookbook and version granularity.

mod cookbook;
mod universe;


pub use cookbook::*;
pub use universe::*;
