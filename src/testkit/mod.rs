//! Testing infrastructure for mainseq.
//!
//! - **[`MockFileSystem`]**: in-memory [`FileSystem`](crate::io::traits::FileSystem)
//!   and [`FileEnumerator`](crate::io::traits::FileEnumerator) with
//!   insertion-ordered listings and injectable read failures
//! - **[`helpers`]**: factories for include lists and labeled series
//!
//! ```rust
//! use mainseq::matrix::MatrixBuilder;
//! use mainseq::testkit::MockFileSystem;
//! use std::path::Path;
//!
//! let fs = MockFileSystem::new()
//!     .with_file("src/a.cpp", "#include \"b.h\"\n#include <map>\n")
//!     .with_file("src/b.h", "");
//! let build = MatrixBuilder::new(&fs, &fs).build(Path::new("src")).unwrap();
//! assert_eq!(build.matrix.shape(), (2, 3));
//! ```

pub mod helpers;
mod mock_fs;

pub use helpers::{include_lists, series};
pub use mock_fs::MockFileSystem;
