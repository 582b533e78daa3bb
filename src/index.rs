//! Asset index: base filename -> absolute path of every bundled data file

use crate::config::IndexConfig;
use crate::error::{DataError, Result};
use crate::report;
use crate::request::{Request, Response};
use hashbrown::HashSet;
use path_absolutize::Absolutize;
use std::collections::BTreeMap;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Lookup table of the data files found under an asset root.
///
/// Keys are base filenames and are assumed unique across the tree. When two
/// files share a name, the one walked later wins. The table is a snapshot:
/// files added or removed after [`AssetIndex::build`] are not seen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssetIndex {
    /// Root the index was built from
    root: PathBuf,
    /// Base filename -> normalized absolute path
    files: BTreeMap<String, PathBuf>,
}

impl AssetIndex {
    /// Walk the asset root described by `config` and index every data file.
    ///
    /// Only the root's immediate subdirectories are walked; files sitting
    /// directly in the root are package metadata and are left out.
    pub fn build(config: &IndexConfig) -> Result<Self> {
        let mut index = Self {
            root: config.root.clone(),
            files: BTreeMap::new(),
        };

        let mut data_dirs = Vec::new();
        for entry in fs::read_dir(&config.root)? {
            let entry = entry?;
            let path = entry.path();
            if !path.is_dir() {
                continue;
            }
            let name = entry.file_name();
            if config.is_skipped_dir(&name.to_string_lossy()) {
                log::debug!("Skipping {}", path.display());
                continue;
            }
            data_dirs.push(path);
        }
        data_dirs.sort();

        for dir in &data_dirs {
            for entry in WalkDir::new(dir).sort_by_file_name() {
                let entry = entry?;
                // symlinked directories are not followed, and are not files
                if entry.file_type().is_dir() || entry.path().is_dir() {
                    continue;
                }
                let name = entry.file_name().to_string_lossy().into_owned();
                if config.is_source_file(&name) {
                    continue;
                }
                let path = entry.path().absolutize()?.into_owned();
                index.insert(name, path);
            }
        }

        log::info!(
            "Indexed {} data files in {} directories under {}",
            index.len(),
            data_dirs.len(),
            config.root.display()
        );
        Ok(index)
    }

    /// Register a file, replacing any earlier entry with the same name
    fn insert(&mut self, name: String, path: PathBuf) {
        if let Some(previous) = self.files.get(&name) {
            log::debug!(
                "{} shadows {} for `{}`",
                path.display(),
                previous.display(),
                name
            );
        }
        self.files.insert(name, path);
    }

    /// Root the index was built from (empty for indexes built from pairs)
    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn contains(&self, filename: &str) -> bool {
        self.files.contains_key(filename)
    }

    /// Path for an exact base filename, if indexed
    pub fn get(&self, filename: &str) -> Option<&Path> {
        self.files.get(filename).map(|p| p.as_path())
    }

    /// All indexed filenames, sorted
    pub fn filenames(&self) -> Vec<&str> {
        self.files.keys().map(|k| k.as_str()).collect()
    }

    /// Iterate `(filename, path)` pairs in index order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Path)> {
        self.files.iter().map(|(k, v)| (k.as_str(), v.as_path()))
    }

    /// Paths whose filename ends with `.ext`, in index order.
    ///
    /// A leading dot on `ext` is accepted: `"csv"` and `".csv"` are the same.
    pub fn with_extension(&self, ext: &str) -> Vec<&Path> {
        let suffix = format!(".{}", ext.trim_start_matches('.'));
        self.files
            .iter()
            .filter(|(name, _)| name.ends_with(&suffix))
            .map(|(_, path)| path.as_path())
            .collect()
    }

    /// Distinct extensions (final dot-suffix) across all indexed files
    pub fn extensions(&self) -> HashSet<&str> {
        self.files
            .keys()
            .filter_map(|name| Path::new(name).extension())
            .filter_map(|ext| ext.to_str())
            .filter(|ext| !ext.is_empty())
            .collect()
    }

    /// Resolve an exact base filename.
    pub fn path_for(&self, filename: &str) -> Result<&Path> {
        self.get(filename).ok_or_else(|| {
            log::error!(
                "Unknown filename `{}`. Double check the provided filename or list the available data files with `Request::DescribeNames`.",
                filename
            );
            DataError::UnknownFilename(filename.to_string())
        })
    }

    /// Resolve every file with the given extension; an empty match is an error.
    pub fn paths_with_extension(&self, ext: &str) -> Result<Vec<&Path>> {
        let matching = self.with_extension(ext);
        if matching.is_empty() {
            log::error!(
                "Unknown file_ext `{}`. Double check the provided extension or list the available data file extensions with `Request::DescribeExtensions`.",
                ext
            );
            return Err(DataError::UnknownExtension(ext.to_string()));
        }
        Ok(matching)
    }

    /// The whole mapping
    pub fn all(&self) -> &Self {
        self
    }

    /// Answer a request against this index.
    ///
    /// The describe requests print their listing to standard output and
    /// return [`Response::Described`].
    pub fn retrieve(&self, request: &Request) -> Result<Response<'_>> {
        match request {
            Request::ListAll => Ok(Response::All(self.all())),
            Request::ByName(name) => self.path_for(name).map(Response::Path),
            Request::ByExtension(ext) => self.paths_with_extension(ext).map(Response::Paths),
            Request::DescribeNames | Request::DescribeExtensions => {
                let stdout = io::stdout();
                let mut out = stdout.lock();
                self.describe_to(request, &mut out)?;
                out.flush()?;
                Ok(Response::Described)
            }
        }
    }

    /// Write the listing for a describe request to `out`.
    ///
    /// Data-returning requests write nothing.
    pub fn describe_to<W: Write>(&self, request: &Request, out: &mut W) -> Result<()> {
        match request {
            Request::DescribeNames => report::write_filenames(out, self)?,
            Request::DescribeExtensions => report::write_extensions(out, self)?,
            Request::ListAll | Request::ByName(_) | Request::ByExtension(_) => {}
        }
        Ok(())
    }
}

impl FromIterator<(String, PathBuf)> for AssetIndex {
    fn from_iter<I: IntoIterator<Item = (String, PathBuf)>>(iter: I) -> Self {
        let mut index = AssetIndex::default();
        for (name, path) in iter {
            index.insert(name, path);
        }
        index
    }
}

impl<'a> IntoIterator for &'a AssetIndex {
    type Item = (&'a String, &'a PathBuf);
    type IntoIter = std::collections::btree_map::Iter<'a, String, PathBuf>;

    fn into_iter(self) -> Self::IntoIter {
        self.files.iter()
    }
}
