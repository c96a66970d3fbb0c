//! Typealias declarations and their protocol compositions.
//!
//! For every `typealias` the policy records the alias name and, when the
//! aliased type is a protocol composition (`A & B & C`), the composed type
//! names as literal source text. A single named type, a closure type or any
//! other non-composition value yields an empty list - "no composed protocols
//! to report", not an error.

use serde::{Deserialize, Serialize};
use tracing::debug;
use tree_sitter::Node;

use super::node_text;
use super::visitor::{Continuation, ScanPolicy};

/// One typealias declaration.
///
/// `composed_types` preserves left-to-right source order. Composition members
/// keep their full literal text: a member like `Collection<Int>` is not
/// decomposed further.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypealiasInfo {
    pub alias_name: String,
    pub composed_types: Vec<String>,
}

/// Scan policy that collects typealias declarations from one source file,
/// in file order.
pub struct TypealiasScan {
    source: String,
    aliases: Vec<TypealiasInfo>,
}

impl TypealiasScan {
    pub fn new(source: &str) -> Self {
        Self {
            source: source.to_string(),
            aliases: Vec::new(),
        }
    }

    /// Records collected so far, in file order.
    pub fn aliases(&self) -> &[TypealiasInfo] {
        &self.aliases
    }

    /// Consume the policy and return the collected records.
    pub fn into_aliases(self) -> Vec<TypealiasInfo> {
        self.aliases
    }

    fn read_declaration(&self, node: &Node<'_>) -> Option<TypealiasInfo> {
        let name_node = node
            .children(&mut node.walk())
            .find(|c| c.kind() == "type_identifier");
        let Some(name_node) = name_node else {
            debug!("typealias declaration without a name, skipping");
            return None;
        };
        let alias_name = node_text(&name_node, &self.source);
        if alias_name.is_empty() {
            return None;
        }

        // The aliased type is the child following the `=` token
        let children: Vec<Node> = node.children(&mut node.walk()).collect();
        let value = children
            .iter()
            .position(|c| node_text(c, &self.source) == "=")
            .and_then(|equal_index| children.get(equal_index + 1));

        let composed_types = match value {
            Some(value) if value.kind() == "protocol_composition_type" => {
                self.composition_members(value)
            }
            _ => Vec::new(),
        };

        Some(TypealiasInfo {
            alias_name,
            composed_types,
        })
    }

    /// Member types of a composition, as trimmed literal source text.
    fn composition_members(&self, node: &Node<'_>) -> Vec<String> {
        node.named_children(&mut node.walk())
            .map(|member| node_text(&member, &self.source).trim().to_string())
            .filter(|text| !text.is_empty())
            .collect()
    }
}

impl ScanPolicy for TypealiasScan {
    fn matches(&self, node: &Node<'_>) -> bool {
        node.kind() == "typealias_declaration"
    }

    fn visit(&mut self, node: Node<'_>) -> Continuation {
        if let Some(info) = self.read_declaration(&node) {
            self.aliases.push(info);
        }
        // Nothing of interest can nest inside an alias's value position
        Continuation::SkipChildren
    }
}
