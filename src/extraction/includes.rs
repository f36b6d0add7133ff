//! Lexical include scanning.
//!
//! A line-oriented pass over source text. Each line is matched against one
//! pattern with two alternatives: `#include "name"` (user include) and
//! `#include <name>` (standard-library include). Anything else, including
//! directives with unbalanced delimiters, is ignored. Includes are never
//! followed into the files they name.

use crate::core::{IncludeLists, IncludeReference};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref INCLUDE_DIRECTIVE: Regex =
        Regex::new(r#"^\s*#\s*include\s*(?:"([^"]+)"|<([^>]+)>)"#)
            .expect("include pattern is valid");
}

/// Classify a single line. Returns `None` when the line is not an include.
pub fn parse_include_line(line: &str, line_number: usize) -> Option<IncludeReference> {
    let captures = INCLUDE_DIRECTIVE.captures(line)?;
    if let Some(user) = captures.get(1) {
        return Some(IncludeReference::user(user.as_str(), line_number));
    }
    captures
        .get(2)
        .map(|std| IncludeReference::std(std.as_str(), line_number))
}

/// All include directives of `content` in source order.
pub fn scan_includes(content: &str) -> Vec<IncludeReference> {
    content
        .lines()
        .enumerate()
        .filter_map(|(idx, line)| parse_include_line(line, idx + 1))
        .collect()
}

/// Include names of `content` split into user and standard-library lists.
pub fn split_includes(content: &str) -> IncludeLists {
    IncludeLists::from_references(&scan_includes(content))
}
