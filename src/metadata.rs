//! Package metadata

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const TITLE: &str = "Tracktable Data";
pub const DESCRIPTION: &str = "Tracktable Data Files";
pub const URL: &str = "https://tracktable.sandia.gov";
pub const LICENSE: &str = "BSD";
pub const COPYRIGHT: &str =
    "Copyright (c) 2014-2022 National Technology and Engineering Solutions of Sandia, LLC.";

/// One-line description with the project URL, e.g. `Tracktable Data Files <https://...>`
pub fn about() -> String {
    format!("{} <{}>", DESCRIPTION, URL)
}
