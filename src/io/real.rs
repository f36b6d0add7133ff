//! Production implementations of the I/O traits.
//!
//! ```rust,ignore
//! use mainseq::io::real::RealFileSystem;
//! use mainseq::io::traits::FileSystem;
//!
//! let fs = RealFileSystem::new();
//! let content = fs.read_to_string(Path::new("src/widget.cpp"))?;
//! ```

use crate::errors::AnalysisError;
use crate::io::traits::FileSystem;
use std::fs;
use std::path::Path;

/// Production file system implementation delegating to `std::fs`.
///
/// Every read opens, fully reads and closes the file before returning.
#[derive(Debug, Default, Clone)]
pub struct RealFileSystem;

impl RealFileSystem {
    pub fn new() -> Self {
        Self
    }
}

impl FileSystem for RealFileSystem {
    fn read_to_string(&self, path: &Path) -> Result<String, AnalysisError> {
        if path.as_os_str().is_empty() {
            return Err(AnalysisError::io("Failed to read file: empty path"));
        }
        let bytes = fs::read(path).map_err(|e| {
            AnalysisError::io_with_path(format!("Failed to read file: {}", e), path)
        })?;
        Ok(match String::from_utf8(bytes) {
            Ok(text) => text,
            Err(e) => {
                log::debug!("{} is not valid UTF-8, decoding lossily", path.display());
                String::from_utf8_lossy(e.as_bytes()).into_owned()
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_real_filesystem_read() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("widget.hpp");
        fs::write(&file_path, "#include <vector>\n").unwrap();

        let content = RealFileSystem::new().read_to_string(&file_path).unwrap();
        assert_eq!(content, "#include <vector>\n");
    }

    #[test]
    fn test_real_filesystem_reads_latin1_lossily() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("legacy.cpp");
        fs::write(&file_path, b"// M\xFCller \xA9 1999\n#include \"a.h\"\n").unwrap();

        let content = RealFileSystem::new().read_to_string(&file_path).unwrap();
        assert!(content.starts_with("// M\u{FFFD}ller"));
        assert!(content.contains("#include \"a.h\""));
    }

    #[test]
    fn test_real_filesystem_read_nonexistent() {
        let fs = RealFileSystem::new();
        let result = fs.read_to_string(Path::new("/nonexistent/path/file.hpp"));
        assert!(result.unwrap_err().is_io_error());
    }

    #[test]
    fn test_real_filesystem_read_empty_path() {
        let fs = RealFileSystem::new();
        assert!(fs.read_to_string(Path::new("")).is_err());
    }
}
