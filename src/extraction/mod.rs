//! Dependency extraction: classify the include directives of a source file.

pub mod extractor;
pub mod includes;

pub use extractor::{
    get_includes_of_file, ExtractionOutcome, IncludeExtractor, UNREADABLE_FILE_WARNING,
};
pub use includes::{parse_include_line, scan_includes, split_includes};
