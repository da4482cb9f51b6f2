//! Settings file loading
//!
//! An explicitly requested file must load cleanly. Auto-discovered files
//! are best effort: problems are logged and the defaults are used instead.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tokenest_core::EstimationSettings;

const CONFIG_CANDIDATES: &[&str] = &["tokenest.toml", ".tokenest.toml"];

/// Table name accepted when settings live inside a larger TOML file
const NESTED_SECTION: &str = "tokenest";

pub fn load_settings(dir: &Path, config_path: Option<&Path>) -> Result<EstimationSettings> {
    let discovered = match config_path {
        Some(path) => Some(path.to_path_buf()),
        None => discover_config(dir),
    };

    let Some(config_file) = discovered else {
        return Ok(EstimationSettings::default());
    };

    match read_settings(&config_file) {
        Ok(settings) => {
            tracing::debug!("Loaded settings from {}", config_file.display());
            Ok(settings)
        }
        Err(e) if config_path.is_none() => {
            tracing::warn!(
                "Ignoring auto-discovered config {}: {:#}",
                config_file.display(),
                e
            );
            Ok(EstimationSettings::default())
        }
        Err(e) => Err(e),
    }
}

fn read_settings(config_file: &Path) -> Result<EstimationSettings> {
    let content = fs::read_to_string(config_file)
        .with_context(|| format!("Failed reading config file: {}", config_file.display()))?;

    let raw: toml::Value = toml::from_str(&content)
        .with_context(|| format!("Invalid TOML syntax: {}", config_file.display()))?;

    let section = if let Some(nested) = raw.get(NESTED_SECTION) {
        nested.clone()
    } else {
        raw
    };

    let settings: EstimationSettings = section
        .try_into()
        .with_context(|| format!("Invalid settings: {}", config_file.display()))?;

    // Surface bad patterns and ratios at load time rather than on first use
    settings
        .to_chunk_options()
        .with_context(|| format!("Invalid settings: {}", config_file.display()))?;

    Ok(settings)
}

fn discover_config(dir: &Path) -> Option<PathBuf> {
    CONFIG_CANDIDATES
        .iter()
        .map(|candidate| dir.join(candidate))
        .find(|path| path.exists())
}
