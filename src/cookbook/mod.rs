//! Cookbook module - Single cookbooks and cookbook versions.
//!
//! A cookbook, as served at `/api/v1/cookbooks/<name>`:
//!
//! ```json
//! {
//!   "name": "chef-dk",
//!   "maintainer": "roboticcheese",
//!   "description": "Installs/configures the Chef-DK",
//!   "category": "Other",
//!   "latest_version": "https://supermarket.chef.io/api/v1/cookbooks/chef-dk/versions/2.0.1",
//!   "external_url": "https://github.com/RoboticCheese/chef-dk-chef",
//!   "average_rating": null,
//!   "created_at": "2014-06-24T01:14:49.000Z",
//!   "updated_at": "2014-09-20T04:46:00.780Z",
//!   "deprecated": false,
//!   "foodcritic_failure": false,
//!   "versions": [
//!     "https://supermarket.chef.io/api/v1/cookbooks/chef-dk/versions/2.0.1",
//!     "https://supermarket.chef.io/api/v1/cookbooks/chef-dk/versions/2.0.0"
//!   ],
//!   "metrics": {
//!     "downloads": { "total": 47791, "versions": { "2.0.0": 32520, "2.0.1": 15271 } },
//!     "followers": 7
//!   }
//! }
//! ```
//!
//! And one of its versions, at `/api/v1/cookbooks/<name>/versions/<version>`:
//!
//! ```json
//! {
//!   "license": "Apache v2.0",
//!   "tarball_file_size": 5913,
//!   "version": "2.0.0",
//!   "average_rating": null,
//!   "cookbook": "https://supermarket.chef.io/api/v1/cookbooks/chef-dk",
//!   "file": "https://supermarket.chef.io/api/v1/cookbooks/chef-dk/versions/2.0.0/download",
//!   "dependencies": { "dmg": "~> 2.2" }
//! }
//! ```

mod cookbook;
mod version;


pub use cookbook::*;
pub use version::*;
