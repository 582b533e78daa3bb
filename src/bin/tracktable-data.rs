//! tracktable-data CLI - locate the data files bundled with Tracktable
//!
//! ## Example Usage
//!
//! ```bash
//! # Path of one file
//! tracktable-data get route17.json
//!
//! # Every CSV file
//! tracktable-data ext csv
//!
//! # What is available
//! tracktable-data files
//! tracktable-data extensions
//! tracktable-data list --json
//! ```

use clap::{Parser, Subcommand};
use colored::Colorize;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::process;
use tracktable_data::catalog;
use tracktable_data::config::IndexConfig;
use tracktable_data::index::AssetIndex;
use tracktable_data::metadata;
use tracktable_data::report::{self, IndexSummary};
use tracktable_data::request::{Request, Response};

/// tracktable-data: locate the data files bundled with Tracktable
#[derive(Parser)]
#[command(name = "tracktable-data")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Locate the data files bundled with Tracktable", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Asset root to index (overrides config and TRACKTABLE_DATA_ROOT)
    #[arg(short, long, global = true)]
    root: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the path of a data file
    Get {
        /// Base filename, e.g. airports.csv
        #[arg(value_name = "FILENAME")]
        filename: String,

        /// Extension selector; ignored when FILENAME is given
        #[arg(short = 'e', long)]
        ext: Option<String>,
    },

    /// Print the paths of every data file with an extension
    Ext {
        /// Extension, with or without the leading dot
        #[arg(value_name = "EXT")]
        ext: String,
    },

    /// Print every indexed filename and its path
    List {
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// List available data files
    Files,

    /// List available data file extensions
    Extensions,

    /// Show package and index information
    Info {
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

fn config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".tracktable-data"))
}

fn read_config(path: &Path) -> Result<IndexConfig, String> {
    let contents = fs::read_to_string(path).map_err(|e| format!("Failed to read config: {}", e))?;
    toml::from_str(&contents).map_err(|e| format!("Failed to parse config: {}", e))
}

/// Resolve the index configuration: `--root`, then the config file, then the environment
fn load_config(path: Option<&Path>, root: Option<PathBuf>) -> IndexConfig {
    let default_file = config_dir().map(|dir| dir.join("config.toml"));
    let file = path.map(Path::to_path_buf).or(default_file);

    let mut config = match file {
        Some(ref file) if file.exists() => match read_config(file) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("{} {}", "Warning:".yellow(), e);
                env_config()
            }
        },
        Some(ref file) if path.is_some() => {
            eprintln!(
                "{} Config file not found: {}",
                "Warning:".yellow(),
                file.display()
            );
            env_config()
        }
        _ => env_config(),
    };

    if let Some(root) = root {
        config.root = root;
    }
    config
}

fn env_config() -> IndexConfig {
    IndexConfig::from_env().unwrap_or_else(|e| {
        eprintln!("{} {}", "Warning:".yellow(), e);
        IndexConfig::default()
    })
}

fn main() {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let config = load_config(cli.config.as_deref(), cli.root);

    if cli.verbose {
        println!(
            "{} v{}",
            "tracktable-data".cyan().bold(),
            metadata::VERSION
        );
        println!(
            "Asset root: {}",
            config.root.display().to_string().dimmed()
        );
    }

    let index = match catalog::init_with(&config) {
        Ok(index) => index,
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), e);
            process::exit(1);
        }
    };

    let result = match cli.command {
        Commands::Get { filename, ext } => get_file(&filename, ext.as_deref()),
        Commands::Ext { ext } => get_by_extension(&ext),
        Commands::List { json } => list_all(json),
        Commands::Files => describe(Request::DescribeNames),
        Commands::Extensions => describe(Request::DescribeExtensions),
        Commands::Info { json } => show_info(index, json),
    };

    if let Err(e) = result {
        eprintln!("{} {}", "Error:".red().bold(), e);
        process::exit(1);
    }
}

fn get_file(filename: &str, ext: Option<&str>) -> Result<(), Box<dyn std::error::Error>> {
    let request = Request::from_selectors(Some(filename), ext, false, false);
    if let Some(path) = catalog::retrieve(&request)?.as_path() {
        println!("{}", path.display());
    }
    Ok(())
}

fn get_by_extension(ext: &str) -> Result<(), Box<dyn std::error::Error>> {
    let request = Request::ByExtension(ext.to_string());
    if let Some(paths) = catalog::retrieve(&request)?.into_paths() {
        for path in paths {
            println!("{}", path.display());
        }
    }
    Ok(())
}

fn list_all(json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let index = match catalog::retrieve(&Request::ListAll)? {
        Response::All(index) => index,
        _ => return Ok(()),
    };

    if json {
        let entries: BTreeMap<&str, &Path> = index.iter().collect();
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    if index.is_empty() {
        println!("{}", "  No data files found.".dimmed());
        return Ok(());
    }
    for (name, path) in index.iter() {
        println!(
            "{} {} {}",
            name.bright_green().bold(),
            "->".dimmed(),
            path.display()
        );
    }
    Ok(())
}

fn describe(request: Request) -> Result<(), Box<dyn std::error::Error>> {
    catalog::retrieve(&request)?;
    Ok(())
}

#[derive(Serialize)]
struct InfoReport<'a> {
    title: &'a str,
    version: &'a str,
    description: &'a str,
    url: &'a str,
    license: &'a str,
    index: IndexSummary,
}

fn show_info(index: &AssetIndex, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let info = InfoReport {
        title: metadata::TITLE,
        version: metadata::VERSION,
        description: metadata::DESCRIPTION,
        url: metadata::URL,
        license: metadata::LICENSE,
        index: report::summary(index),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&info)?);
        return Ok(());
    }

    println!(
        "{} {}",
        info.title.cyan().bold(),
        format!("v{}", info.version).dimmed()
    );
    println!("{}", metadata::about());
    println!();

    println!("{}", "Index".bold());
    println!("{}", "=====".dimmed());
    println!("  {} {}", "Asset root:".bold(), info.index.root.display());
    println!("  {} {}", "Data files:".bold(), info.index.file_count);
    println!("  {} {}", "Extensions:".bold(), info.index.extension_count);
    println!();

    println!("{}", "Resources".bold());
    println!("{}", "=========".dimmed());
    println!("  {} {}", "Homepage:".bold(), info.url);
    println!("  {} {}", "License:".bold(), info.license);
    println!("  {}", metadata::COPYRIGHT.dimmed());
    println!();

    Ok(())
}
