// swift-declscan - tree-sitter powered declaration scanning for Swift sources
//
// Walks pre-built Swift syntax trees and extracts two facts per file: the set
// of imported module names and the list of typealias declarations together
// with the protocol names each alias composes. Parsing itself is delegated to
// tree-sitter; this crate only visits the trees it produces.

// Swift language configuration
pub mod language;

// Traversal driver and extraction policies
pub mod extractors;

// Append-only import list export
pub mod export;

pub use export::{append_import_list, ExportError};
pub use extractors::imports::ImportScan;
pub use extractors::manager::ScanManager;
pub use extractors::typealias::{TypealiasInfo, TypealiasScan};
pub use extractors::visitor::{Continuation, DeclarationVisitor, ScanPolicy};
