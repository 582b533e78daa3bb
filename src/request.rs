//! Query shapes accepted by the asset index and the answers they produce

use crate::index::AssetIndex;
use std::path::Path;

/// One query against the asset index.
///
/// Exactly one selector is active; see [`Request::from_selectors`] for how
/// the optional keyword form collapses into a variant.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Request {
    /// Exact base filename
    ByName(String),
    /// Every file whose name ends with `.ext`
    ByExtension(String),
    /// The whole mapping
    #[default]
    ListAll,
    /// Print the sorted filename listing
    DescribeNames,
    /// Print the distinct extension listing
    DescribeExtensions,
}

impl Request {
    /// Resolve optional selectors into a single request.
    ///
    /// Precedence: `print_filenames`, then `print_extensions`, then
    /// `filename`, then `file_ext`, otherwise [`Request::ListAll`]. When both
    /// `filename` and `file_ext` are given the extension is ignored and an
    /// info message says so. Empty strings count as absent.
    pub fn from_selectors(
        filename: Option<&str>,
        file_ext: Option<&str>,
        print_filenames: bool,
        print_extensions: bool,
    ) -> Self {
        let filename = filename.filter(|s| !s.is_empty());
        let file_ext = file_ext.filter(|s| !s.is_empty());

        if filename.is_some() && file_ext.is_some() {
            log::info!(
                "`filename` and `file_ext` are both set, only returning the file matching `filename` and ignoring `file_ext`."
            );
        }

        if print_filenames {
            return Request::DescribeNames;
        }
        if print_extensions {
            return Request::DescribeExtensions;
        }
        match (filename, file_ext) {
            (Some(name), _) => Request::ByName(name.to_string()),
            (None, Some(ext)) => Request::ByExtension(ext.to_string()),
            (None, None) => Request::ListAll,
        }
    }

    /// Whether this request prints a listing instead of returning data
    pub fn is_describe(&self) -> bool {
        matches!(self, Request::DescribeNames | Request::DescribeExtensions)
    }
}

/// Keyword-style selectors, resolved into a [`Request`] on conversion
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selectors {
    pub filename: Option<String>,
    pub file_ext: Option<String>,
    pub print_filenames: bool,
    pub print_extensions: bool,
}

impl Selectors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn filename(mut self, filename: impl Into<String>) -> Self {
        self.filename = Some(filename.into());
        self
    }

    pub fn file_ext(mut self, file_ext: impl Into<String>) -> Self {
        self.file_ext = Some(file_ext.into());
        self
    }

    pub fn print_filenames(mut self, enabled: bool) -> Self {
        self.print_filenames = enabled;
        self
    }

    pub fn print_extensions(mut self, enabled: bool) -> Self {
        self.print_extensions = enabled;
        self
    }

    pub fn into_request(self) -> Request {
        Request::from_selectors(
            self.filename.as_deref(),
            self.file_ext.as_deref(),
            self.print_filenames,
            self.print_extensions,
        )
    }
}

impl From<Selectors> for Request {
    fn from(selectors: Selectors) -> Self {
        selectors.into_request()
    }
}

/// Answer to a [`Request`], borrowing from the index
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response<'a> {
    Path(&'a Path),
    Paths(Vec<&'a Path>),
    /// The index itself, not a copy
    All(&'a AssetIndex),
    /// A listing was printed; nothing is returned
    Described,
}

impl<'a> Response<'a> {
    pub fn as_path(&self) -> Option<&'a Path> {
        match self {
            Response::Path(path) => Some(*path),
            _ => None,
        }
    }

    pub fn into_paths(self) -> Option<Vec<&'a Path>> {
        match self {
            Response::Paths(paths) => Some(paths),
            _ => None,
        }
    }

    pub fn as_index(&self) -> Option<&'a AssetIndex> {
        match self {
            Response::All(index) => Some(*index),
            _ => None,
        }
    }

    pub fn is_described(&self) -> bool {
        matches!(self, Response::Described)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_selectors_lists_all() {
        assert_eq!(Request::from_selectors(None, None, false, false), Request::ListAll);
        assert_eq!(Selectors::new().into_request(), Request::ListAll);
    }

    #[test]
    fn test_filename_takes_precedence_over_extension() {
        let request = Request::from_selectors(Some("route17.json"), Some("csv"), false, false);
        assert_eq!(request, Request::ByName("route17.json".to_string()));
    }

    #[test]
    fn test_extension_only() {
        let request: Request = Selectors::new().file_ext("csv").into();
        assert_eq!(request, Request::ByExtension("csv".to_string()));
    }

    #[test]
    fn test_print_flags_win() {
        let request = Request::from_selectors(Some("a.csv"), Some("csv"), true, true);
        assert_eq!(request, Request::DescribeNames);

        let request = Selectors::new()
            .filename("a.csv")
            .print_extensions(true)
            .into_request();
        assert_eq!(request, Request::DescribeExtensions);
        assert!(request.is_describe());
    }

    #[test]
    fn test_empty_selectors_are_absent() {
        assert_eq!(Request::from_selectors(Some(""), Some(""), false, false), Request::ListAll);
        assert_eq!(
            Request::from_selectors(Some(""), Some("csv"), false, false),
            Request::ByExtension("csv".to_string())
        );
    }

    #[test]
    fn test_response_accessors() {
        let path = Path::new("/data/route17.csv");
        assert_eq!(Response::Path(path).as_path(), Some(path));
        assert_eq!(Response::Paths(vec![path]).into_paths(), Some(vec![path]));
        assert!(Response::Described.as_path().is_none());
        assert!(Response::Described.is_described());
    }
}
