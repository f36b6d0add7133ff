use std::fs;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use super::core::MainseqConfig;
use crate::errors::AnalysisError;
use crate::io::walker::compile_ignore_pattern;

/// Name of the configuration file searched for in ancestor directories.
pub const CONFIG_FILE_NAME: &str = ".mainseq.toml";

const MAX_TRAVERSAL_DEPTH: usize = 10;

pub(crate) fn read_config_file(path: &Path) -> Result<String, std::io::Error> {
    let file = fs::File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Parse and validate config from a TOML string
pub fn parse_and_validate_config(contents: &str) -> Result<MainseqConfig, String> {
    let config = toml::from_str::<MainseqConfig>(contents)
        .map_err(|e| format!("Failed to parse {}: {}", CONFIG_FILE_NAME, e))?;
    validate_config(&config)?;
    Ok(config)
}

fn validate_config(config: &MainseqConfig) -> Result<(), String> {
    if let Some(ref scan) = config.scan {
        if scan.extensions.is_empty() {
            return Err("scan.extensions must not be empty".to_string());
        }
        for pattern in &scan.ignore {
            compile_ignore_pattern(pattern).map_err(|e| format!("scan.ignore: {}", e))?;
        }
    }
    if let Some(ref distance) = config.distance {
        if !(0.0..=1.0).contains(&distance.zone_band) {
            return Err(format!(
                "distance.zone_band must be in [0, 1], got {}",
                distance.zone_band
            ));
        }
    }
    if let Some(ref thresholds) = config.thresholds {
        if !(0.0..=1.0).contains(&thresholds.max_distance) {
            return Err(format!(
                "thresholds.max_distance must be in [0, 1], got {}",
                thresholds.max_distance
            ));
        }
    }
    Ok(())
}

/// Try loading config from a specific path, logging problems instead of failing
pub(crate) fn try_load_config_from_path(config_path: &Path) -> Option<MainseqConfig> {
    let contents = match read_config_file(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            handle_read_error(config_path, &e);
            return None;
        }
    };

    match parse_and_validate_config(&contents) {
        Ok(config) => {
            log::debug!("Loaded config from {}", config_path.display());
            Some(config)
        }
        Err(e) => {
            log::warn!("{} ({}). Using defaults.", e, config_path.display());
            None
        }
    }
}

/// Handle file read errors with appropriate logging
pub(crate) fn handle_read_error(config_path: &Path, error: &std::io::Error) {
    // "not found" is the normal case while walking up the tree
    if error.kind() != std::io::ErrorKind::NotFound {
        log::warn!(
            "Failed to read config file {}: {}",
            config_path.display(),
            error
        );
    }
}

/// Generate directory ancestors up to a depth limit
pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// Load `.mainseq.toml` from `start` or its nearest ancestor, falling back to defaults.
pub fn load_config_from(start: PathBuf) -> MainseqConfig {
    directory_ancestors(start, MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find_map(|path| try_load_config_from_path(&path))
        .unwrap_or_else(|| {
            log::debug!(
                "No config found after checking {} directories. Using default config.",
                MAX_TRAVERSAL_DEPTH
            );
            MainseqConfig::default()
        })
}

/// Load config starting from the current working directory.
pub fn load_config() -> MainseqConfig {
    match std::env::current_dir() {
        Ok(dir) => load_config_from(dir),
        Err(e) => {
            log::warn!(
                "Failed to get current directory: {}. Using default config.",
                e
            );
            MainseqConfig::default()
        }
    }
}

/// Load an explicitly requested config file. Unlike discovery, any problem is an error.
pub fn load_config_file(path: &Path) -> Result<MainseqConfig, AnalysisError> {
    let contents = read_config_file(path).map_err(|e| {
        AnalysisError::config_with_path(format!("Failed to read config file: {}", e), path)
    })?;
    parse_and_validate_config(&contents).map_err(|e| AnalysisError::config_with_path(e, path))
}
