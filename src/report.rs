//! Human-readable listings of the index contents

use crate::index::AssetIndex;
use serde::Serialize;
use std::io::{self, Write};
use std::path::PathBuf;

pub const FILENAMES_HEADER: &str = "Available Data Files";
pub const EXTENSIONS_HEADER: &str = "Available Data File Extensions";

/// Header, a dashed rule, then every filename in sorted order
pub fn write_filenames<W: Write>(out: &mut W, index: &AssetIndex) -> io::Result<()> {
    writeln!(out, "{}", FILENAMES_HEADER)?;
    writeln!(out, "{}", "-".repeat(20))?;
    for name in index.filenames() {
        writeln!(out, "{}", name)?;
    }
    Ok(())
}

/// Header, a dashed rule, then each distinct extension (no particular order)
pub fn write_extensions<W: Write>(out: &mut W, index: &AssetIndex) -> io::Result<()> {
    writeln!(out, "{}", EXTENSIONS_HEADER)?;
    writeln!(out, "{}", "-".repeat(30))?;
    for ext in index.extensions() {
        writeln!(out, "{}", ext)?;
    }
    Ok(())
}

/// Index statistics
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IndexSummary {
    pub root: PathBuf,
    pub file_count: usize,
    pub extension_count: usize,
}

impl IndexSummary {
    pub fn from_index(index: &AssetIndex) -> Self {
        Self {
            root: index.root().to_path_buf(),
            file_count: index.len(),
            extension_count: index.extensions().len(),
        }
    }
}

pub fn summary(index: &AssetIndex) -> IndexSummary {
    IndexSummary::from_index(index)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_index() -> AssetIndex {
        vec![
            ("route17.json", "/d/t/route17.json"),
            ("airports.csv", "/d/a/airports.csv"),
            ("route17.csv", "/d/t/route17.csv"),
        ]
        .into_iter()
        .map(|(name, path)| (name.to_string(), PathBuf::from(path)))
        .collect()
    }

    #[test]
    fn test_filename_listing_is_sorted() {
        let mut out = Vec::new();
        write_filenames(&mut out, &sample_index()).unwrap();
        let text = String::from_utf8(out).unwrap();

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], FILENAMES_HEADER);
        assert_eq!(lines[1], "--------------------");
        assert_eq!(&lines[2..], &["airports.csv", "route17.csv", "route17.json"]);
    }

    #[test]
    fn test_extension_listing() {
        let mut out = Vec::new();
        write_extensions(&mut out, &sample_index()).unwrap();
        let text = String::from_utf8(out).unwrap();

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], EXTENSIONS_HEADER);
        assert_eq!(lines[1].len(), 30);
        let mut exts = lines[2..].to_vec();
        exts.sort();
        assert_eq!(exts, vec!["csv", "json"]);
    }

    #[test]
    fn test_summary() {
        let summary = summary(&sample_index());
        assert_eq!(summary.file_count, 3);
        assert_eq!(summary.extension_count, 2);

        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["file_count"], 3);
    }
}
