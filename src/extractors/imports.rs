//! Imported module name collection.
//!
//! Records the first path segment of every `import` declaration, so
//! `import UIKit.UIGestureRecognizer` contributes `UIKit` - the module, not
//! the submodule. Names are kept in a `BTreeSet`: duplicates collapse and
//! iteration order is lexical, which keeps the exported list reproducible.

use std::collections::BTreeSet;
use tracing::debug;
use tree_sitter::Node;

use super::node_text;
use super::visitor::{Continuation, ScanPolicy};

/// Scan policy that collects imported module names from one source file.
pub struct ImportScan {
    source: String,
    modules: BTreeSet<String>,
}

impl ImportScan {
    pub fn new(source: &str) -> Self {
        Self {
            source: source.to_string(),
            modules: BTreeSet::new(),
        }
    }

    /// Module names collected so far.
    pub fn modules(&self) -> &BTreeSet<String> {
        &self.modules
    }

    /// Consume the policy and return the collected module names.
    pub fn into_modules(self) -> BTreeSet<String> {
        self.modules
    }

    /// First path segment of the import, e.g. `Foo` for `import Foo.Bar`.
    ///
    /// An import without a path segment is not meaningful input; it
    /// contributes nothing rather than failing the traversal.
    fn first_path_segment(&self, node: &Node<'_>) -> Option<String> {
        let path = node
            .children(&mut node.walk())
            .find(|c| c.kind() == "identifier");
        let Some(path) = path else {
            debug!("import declaration without a path, skipping");
            return None;
        };

        let first = path
            .children(&mut path.walk())
            .find(|c| c.kind() == "simple_identifier")?;
        let module = node_text(&first, &self.source);
        if module.is_empty() {
            return None;
        }
        Some(module)
    }
}

impl ScanPolicy for ImportScan {
    fn matches(&self, node: &Node<'_>) -> bool {
        node.kind() == "import_declaration"
    }

    fn visit(&mut self, node: Node<'_>) -> Continuation {
        if let Some(module) = self.first_path_segment(&node) {
            self.modules.insert(module);
        }
        // Import declarations have no nested declarations of interest
        Continuation::SkipChildren
    }
}
