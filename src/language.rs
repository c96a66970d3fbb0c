//! Language Support - Shared tree-sitter language configuration
//!
//! This module is the single source of truth for parser construction. All
//! tree-sitter configuration goes here so that the manager, the policies, and
//! the tests build their trees the same way.

use anyhow::{anyhow, Result};
use std::path::Path;
use tree_sitter::{Parser, Tree};

/// Get the tree-sitter language for Swift.
pub fn swift_language() -> tree_sitter::Language {
    tree_sitter_swift::LANGUAGE.into()
}

/// Create a parser configured for Swift.
pub fn new_parser() -> Result<Parser> {
    let mut parser = Parser::new();
    parser
        .set_language(&swift_language())
        .map_err(|e| anyhow!("Failed to set parser language for swift: {}", e))?;
    Ok(parser)
}

/// Parse Swift source text into a syntax tree.
///
/// Tree construction is entirely tree-sitter's job; callers that already hold
/// a tree can skip this and hand nodes straight to the traversal driver.
pub fn parse(source: &str) -> Result<Tree> {
    let mut parser = new_parser()?;
    parser
        .parse(source, None)
        .ok_or_else(|| anyhow!("Parser returned no tree for source"))
}

/// Check whether a path looks like a Swift source file.
pub fn is_swift_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext == "swift")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_parse_produces_source_file_root() {
        let tree = parse("import Foundation\n").unwrap();
        assert_eq!(tree.root_node().kind(), "source_file");
    }

    #[test]
    fn test_is_swift_file() {
        assert!(is_swift_file(&PathBuf::from("Sources/App/Login.swift")));
        assert!(!is_swift_file(&PathBuf::from("Sources/App/Login.m")));
        assert!(!is_swift_file(&PathBuf::from("README")));
    }
}
