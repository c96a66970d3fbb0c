//! Declaration Extractors Module
//!
//! Extraction is split into a generic traversal driver and small per-fact
//! policies driven by it:
//! - `visitor.rs` - `DeclarationVisitor` driver and the `ScanPolicy` trait
//! - `imports.rs` - imported module name collection
//! - `typealias.rs` - typealias declarations and their protocol compositions
//! - `manager.rs` - `ScanManager` public API (parse + scan in one call)

pub mod imports;
pub mod manager;
pub mod typealias;
pub mod visitor;

use tree_sitter::Node;

// Re-export the public API
pub use imports::ImportScan;
pub use manager::ScanManager;
pub use typealias::{TypealiasInfo, TypealiasScan};
pub use visitor::{Continuation, DeclarationVisitor, ScanPolicy};

/// Get the literal source text covered by a tree-sitter node.
pub fn node_text(node: &Node, source: &str) -> String {
    let start_byte = node.start_byte();
    let end_byte = node.end_byte();

    // Use byte slices but handle UTF-8 boundaries properly
    let source_bytes = source.as_bytes();
    if start_byte < source_bytes.len() && end_byte <= source_bytes.len() {
        String::from_utf8_lossy(&source_bytes[start_byte..end_byte]).to_string()
    } else {
        String::new()
    }
}
