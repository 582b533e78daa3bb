//! Tests for the log messages emitted around lookups

use log::{Level, LevelFilter, Log, Metadata, Record};
use once_cell::sync::Lazy;
use std::fs;
use std::sync::Mutex;
use tempfile::TempDir;
use tracktable_data::prelude::*;

struct CaptureLogger;

static RECORDS: Mutex<Vec<(Level, String)>> = Mutex::new(Vec::new());
static LOGGER: CaptureLogger = CaptureLogger;

static INSTALL: Lazy<()> = Lazy::new(|| {
    log::set_logger(&LOGGER).unwrap();
    log::set_max_level(LevelFilter::Trace);
});

impl Log for CaptureLogger {
    fn enabled(&self, _metadata: &Metadata<'_>) -> bool {
        true
    }

    fn log(&self, record: &Record<'_>) {
        if let Ok(mut records) = RECORDS.lock() {
            records.push((record.level(), record.args().to_string()));
        }
    }

    fn flush(&self) {}
}

/// Messages logged at `level` that mention `needle`
fn logged(level: Level, needle: &str) -> Vec<String> {
    RECORDS
        .lock()
        .unwrap()
        .iter()
        .filter(|(l, msg)| *l == level && msg.contains(needle))
        .map(|(_, msg)| msg.clone())
        .collect()
}

fn sample_index() -> (TempDir, AssetIndex) {
    let dir = TempDir::new().unwrap();
    fs::create_dir_all(dir.path().join("trajectories")).unwrap();
    fs::write(dir.path().join("trajectories/route17.csv"), b"").unwrap();
    let index = AssetIndex::build(&IndexConfig::with_root(dir.path())).unwrap();
    (dir, index)
}

#[test]
fn test_both_selectors_logs_ignored_extension() {
    Lazy::force(&INSTALL);

    let request = Request::from_selectors(Some("route17.csv"), Some("json"), false, false);
    assert_eq!(request, Request::ByName("route17.csv".to_string()));

    let messages = logged(Level::Info, "ignoring `file_ext`");
    assert!(!messages.is_empty());
}

#[test]
fn test_unknown_filename_is_logged_before_error() {
    Lazy::force(&INSTALL);
    let (_dir, index) = sample_index();

    let err = index.path_for("absent_route.json").unwrap_err();
    assert!(matches!(err, DataError::UnknownFilename(_)));
    assert_eq!(logged(Level::Error, "absent_route.json").len(), 1);
}

#[test]
fn test_unknown_extension_is_logged_before_error() {
    Lazy::force(&INSTALL);
    let (_dir, index) = sample_index();

    let err = index
        .retrieve(&Request::ByExtension("geojson".to_string()))
        .unwrap_err();
    assert!(matches!(err, DataError::UnknownExtension(_)));
    assert_eq!(logged(Level::Error, "`geojson`").len(), 1);
}

#[test]
fn test_hits_log_no_errors() {
    Lazy::force(&INSTALL);
    let (_dir, index) = sample_index();

    index.path_for("route17.csv").unwrap();
    index.paths_with_extension("csv").unwrap();
    assert!(logged(Level::Error, "route17.csv").is_empty());
}
