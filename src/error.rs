//! Error types for tracktable-data

use thiserror::Error;

/// Main error type for tracktable-data
#[derive(Error, Debug)]
pub enum DataError {
    #[error("Unknown filename `{0}`")]
    UnknownFilename(String),

    #[error("Unknown file extension `{0}`")]
    UnknownExtension(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Directory walk error: {0}")]
    Walk(#[from] walkdir::Error),
}

impl DataError {
    /// True for the two lookup misses (`UnknownFilename`, `UnknownExtension`).
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            DataError::UnknownFilename(_) | DataError::UnknownExtension(_)
        )
    }
}

/// Result type alias for tracktable-data operations
pub type Result<T> = std::result::Result<T, DataError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_kinds() {
        assert!(DataError::UnknownFilename("a.csv".to_string()).is_not_found());
        assert!(DataError::UnknownExtension("kml".to_string()).is_not_found());
        assert!(!DataError::Config("bad".to_string()).is_not_found());

        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        assert!(!DataError::from(io).is_not_found());
    }

    #[test]
    fn test_error_messages() {
        let err = DataError::UnknownFilename("missing.txt".to_string());
        assert_eq!(err.to_string(), "Unknown filename `missing.txt`");

        let err = DataError::UnknownExtension("kml".to_string());
        assert!(err.to_string().contains("kml"));
    }
}
