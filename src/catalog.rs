//! Process-wide asset catalog
//!
//! The shared [`AssetIndex`] is built on first use and kept for the life of
//! the process. Concurrent first callers block until a single build finishes;
//! a failed build is not cached, so the next call walks the root again.

use crate::config::IndexConfig;
use crate::error::Result;
use crate::index::AssetIndex;
use crate::request::{Request, Response, Selectors};
use once_cell::sync::OnceCell;
use std::path::Path;

static CATALOG: OnceCell<AssetIndex> = OnceCell::new();

/// The shared index, built from [`IndexConfig::from_env`] on first access
pub fn catalog() -> Result<&'static AssetIndex> {
    CATALOG.get_or_try_init(|| {
        let config = IndexConfig::from_env()?;
        AssetIndex::build(&config)
    })
}

/// Build the shared index from an explicit configuration.
///
/// Has no effect once the catalog exists; the existing index is returned.
pub fn init_with(config: &IndexConfig) -> Result<&'static AssetIndex> {
    let index = CATALOG.get_or_try_init(|| AssetIndex::build(config))?;
    if index.root() != config.root() {
        log::warn!(
            "Catalog already built from {}; ignoring {}",
            index.root().display(),
            config.root().display()
        );
    }
    Ok(index)
}

/// Whether the shared index has been built
pub fn is_built() -> bool {
    CATALOG.get().is_some()
}

/// Answer a request against the shared index
pub fn retrieve(request: &Request) -> Result<Response<'static>> {
    catalog()?.retrieve(request)
}

/// Keyword-style entry point: resolve the selectors, then [`retrieve`]
pub fn retrieve_with(selectors: Selectors) -> Result<Response<'static>> {
    let request = selectors.into_request();
    retrieve(&request)
}

pub fn path_for(filename: &str) -> Result<&'static Path> {
    catalog()?.path_for(filename)
}

pub fn paths_with_extension(ext: &str) -> Result<Vec<&'static Path>> {
    catalog()?.paths_with_extension(ext)
}

pub fn all() -> Result<&'static AssetIndex> {
    catalog()
}
