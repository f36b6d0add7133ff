//! CLI command implementations.
//!
//! - **analyze**: matrix, instability and distance report for one directory
//! - **matrix**: print the include dependency matrix only
//! - **validate**: fail when files stray too far from the main sequence
//! - **init**: write a default `.mainseq.toml`

pub mod analyze;
pub mod init;
pub mod matrix;
pub mod validate;

pub use analyze::{handle_analyze, AnalyzeConfig};
pub use init::{init_config, init_config_in};
pub use matrix::{handle_matrix, MatrixConfig};
pub use validate::{validate_project, ValidateConfig};

use crate::config::{load_config, load_config_file, MainseqConfig};
use crate::formatting::FormattingConfig;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Explicit `--config` must load cleanly; otherwise discover one, falling back to defaults.
pub(crate) fn resolve_config(explicit: Option<&Path>) -> Result<MainseqConfig> {
    match explicit {
        Some(path) => Ok(load_config_file(path)?),
        None => Ok(load_config()),
    }
}

pub(crate) fn open_output(output: Option<&Path>) -> Result<Box<dyn Write>> {
    match output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file {}", path.display()))?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(std::io::stdout().lock())),
    }
}

/// Colours only make sense on a terminal; files always get plain text.
pub(crate) fn formatting_for(plain: bool, output: Option<&Path>) -> FormattingConfig {
    if plain || output.is_some() {
        FormattingConfig::plain()
    } else {
        FormattingConfig::detect()
    }
}
