//! # tracktable-data
//!
//! Locator for the data files bundled with Tracktable: airport tables,
//! sample trajectories, map shapes and the like.
//!
//! Every non-source file under the asset root is indexed by its base
//! filename. Files are then resolved by exact name, by extension, or listed
//! as a whole.
//!
//! ## Example
//!
//! ```rust,no_run
//! use tracktable_data::prelude::*;
//!
//! let path = catalog::path_for("route17.json")?;
//! let csv_files = catalog::paths_with_extension("csv")?;
//!
//! let response = catalog::retrieve_with(Selectors::new().filename("route17.json"))?;
//! assert_eq!(response.as_path(), Some(path));
//! # let _ = csv_files;
//! # Ok::<(), DataError>(())
//! ```

pub mod catalog;
pub mod config;
pub mod error;
pub mod index;
pub mod metadata;
pub mod report;
pub mod request;

pub use catalog::retrieve;

pub mod prelude {
    //! Commonly used types and functions
    pub use crate::catalog;
    pub use crate::config::IndexConfig;
    pub use crate::error::{DataError, Result};
    pub use crate::index::AssetIndex;
    pub use crate::request::{Request, Response, Selectors};
}
