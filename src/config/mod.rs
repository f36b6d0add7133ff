//! `.mainseq.toml` configuration.

mod core;
mod loader;

pub use self::core::{DistanceConfig, MainseqConfig, ScanConfig, ThresholdsConfig};
pub use loader::{
    directory_ancestors, load_config, load_config_file, load_config_from,
    parse_and_validate_config, CONFIG_FILE_NAME,
};

use crate::errors::AnalysisError;
use crate::io::walker::FileWalker;

impl ScanConfig {
    /// File walker honouring this scan configuration.
    ///
    /// # Errors
    ///
    /// Returns `AnalysisError::Config` when an ignore pattern is not a valid glob.
    pub fn walker(&self) -> Result<FileWalker, AnalysisError> {
        Ok(FileWalker::new()
            .with_extensions(self.extensions.clone())
            .with_ignore_patterns(&self.ignore)?
            .recursive(self.recursive))
    }
}

/// Default configuration file written by `mainseq init`.
pub const DEFAULT_CONFIG_TEMPLATE: &str = r#"# mainseq configuration

[scan]
extensions = ["c", "cc", "cpp", "cxx", "h", "hh", "hpp", "hxx", "inl"]
recursive = false
ignore = []

[distance]
# "strict": instability and abstractness must cover the same files
# "intersection": analyze only files present in both
alignment = "strict"
zone_band = 0.3

[thresholds]
max_distance = 0.7
"#;
