// Author: Dustin Pilgrim
// License: MIT

pub mod model;
pub mod parser;

use eyre::Result;
use std::path::{Path, PathBuf};

pub use model::{OutputFormat, TickwatchConfig};

const SYSTEM_CONFIG: &str = "/etc/tickwatch/tickwatch.rune";

/// Candidate config locations, most specific first.
pub fn default_config_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();
    if let Some(mut p) = dirs::config_dir() {
        p.push("tickwatch");
        p.push("tickwatch.rune");
        paths.push(p);
    }
    paths.push(PathBuf::from(SYSTEM_CONFIG));
    paths
}

/// Loads an explicit config file, or the first default location that
/// exists, or the built-in defaults.
pub fn load(explicit: Option<&Path>) -> Result<TickwatchConfig> {
    if let Some(path) = explicit {
        if !path.exists() {
            return Err(eyre::eyre!("config file {} does not exist", path.display()));
        }
        return parser::load_file(path);
    }

    match default_config_paths().into_iter().find(|p| p.exists()) {
        Some(path) => parser::load_file(&path),
        None => Ok(TickwatchConfig::default()),
    }
}
