pub mod output;
pub mod real;
pub mod traits;
pub mod walker;

// Re-export I/O traits for convenient access
pub use output::{create_writer, OutputFormat, OutputWriter};
pub use real::RealFileSystem;
pub use traits::{FileEnumerator, FileSystem};
pub use walker::{extract_label, FileWalker, DEFAULT_EXTENSIONS};

use anyhow::Result;
use std::fs;
use std::path::Path;

pub fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_file_creates_parent_dirs() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("reports/out.json");
        write_file(&path, "{}").unwrap();
        assert_eq!(fs::read_to_string(path).unwrap(), "{}");
    }
}
