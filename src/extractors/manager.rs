//! ScanManager - Public API for declaration scanning
//!
//! Handles source parsing and delegates to the extraction policies through
//! the traversal driver. Every call builds a fresh parser and a fresh policy,
//! so results are always scoped to one file and one traversal; aggregation
//! across files belongs to the caller.

use anyhow::{anyhow, Context, Result};
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;
use tracing::debug;

use crate::extractors::imports::ImportScan;
use crate::extractors::typealias::{TypealiasInfo, TypealiasScan};
use crate::extractors::visitor::DeclarationVisitor;
use crate::language;

/// Manager for the declaration scan policies
pub struct ScanManager {
    // No state needed - every scan call is self-contained
}

impl Default for ScanManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ScanManager {
    pub fn new() -> Self {
        Self {}
    }

    /// Collect the set of imported module names from Swift source text.
    pub fn scan_imports(&self, source: &str) -> Result<BTreeSet<String>> {
        let tree = language::parse(source)?;

        let mut visitor = DeclarationVisitor::new(ImportScan::new(source));
        visitor.traverse(tree.root_node());
        let modules = visitor.into_policy().into_modules();

        debug!("Extracted {} imported module(s)", modules.len());
        Ok(modules)
    }

    /// Collect typealias records from Swift source text, in file order.
    pub fn scan_typealiases(&self, source: &str) -> Result<Vec<TypealiasInfo>> {
        let tree = language::parse(source)?;

        let mut visitor = DeclarationVisitor::new(TypealiasScan::new(source));
        visitor.traverse(tree.root_node());
        let aliases = visitor.into_policy().into_aliases();

        debug!("Extracted {} typealias record(s)", aliases.len());
        Ok(aliases)
    }

    /// Read a Swift source file and collect its imported module names.
    pub fn scan_imports_file(&self, path: &Path) -> Result<BTreeSet<String>> {
        let source = read_source(path)?;
        self.scan_imports(&source)
    }

    /// Read a Swift source file and collect its typealias records.
    pub fn scan_typealiases_file(&self, path: &Path) -> Result<Vec<TypealiasInfo>> {
        let source = read_source(path)?;
        self.scan_typealiases(&source)
    }
}

fn read_source(path: &Path) -> Result<String> {
    if !language::is_swift_file(path) {
        return Err(anyhow!("Not a Swift source file: {}", path.display()));
    }
    fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}
