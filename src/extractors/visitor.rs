//! Generic declaration traversal driver.
//!
//! `DeclarationVisitor` walks a syntax tree depth-first in source order and
//! hands every node matching the configured `ScanPolicy` to that policy. The
//! policy decides per node whether the subtree still needs to be searched.

use tree_sitter::Node;

/// Per-node decision returned by a policy after it has handled a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Continuation {
    /// Visit this node's children normally.
    Descend,
    /// The node has been fully interpreted; do not search its subtree.
    SkipChildren,
}

/// Kind-specific matching and extraction logic driven by `DeclarationVisitor`.
///
/// A fresh policy instance must be created per traversal; results accumulate
/// on the instance and reuse across trees is not supported.
pub trait ScanPolicy {
    /// Whether this policy wants to handle `node`.
    fn matches(&self, node: &Node<'_>) -> bool;

    /// Handle a matched node and elect whether to descend into it.
    fn visit(&mut self, node: Node<'_>) -> Continuation;
}

/// Pre-order depth-first traversal over one syntax tree.
///
/// Non-matching nodes are always descended into, so declarations nested in
/// type bodies are still found. Traversal cannot fail; a malformed tree is
/// the parser's contract violation and is not defended against here.
pub struct DeclarationVisitor<P> {
    policy: P,
}

impl<P: ScanPolicy> DeclarationVisitor<P> {
    pub fn new(policy: P) -> Self {
        Self { policy }
    }

    /// Visit `root` and its subtree.
    pub fn traverse(&mut self, root: Node<'_>) {
        self.visit_node(root);
    }

    pub fn policy(&self) -> &P {
        &self.policy
    }

    /// Consume the visitor and return the policy with its collected results.
    pub fn into_policy(self) -> P {
        self.policy
    }

    fn visit_node(&mut self, node: Node<'_>) {
        if !node.is_named() {
            return;
        }

        if self.policy.matches(&node) {
            if let Continuation::SkipChildren = self.policy.visit(node) {
                return;
            }
        }

        let mut cursor = node.walk();
        for child in node.children(&mut cursor) {
            self.visit_node(child);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language;

    /// Counts nodes of one kind; continuation is fixed up front so tests can
    /// observe pruning behavior directly.
    struct CountingPolicy {
        kind: &'static str,
        directive: Continuation,
        seen: usize,
    }

    impl ScanPolicy for CountingPolicy {
        fn matches(&self, node: &Node<'_>) -> bool {
            node.kind() == self.kind
        }

        fn visit(&mut self, _node: Node<'_>) -> Continuation {
            self.seen += 1;
            self.directive
        }
    }

    const NESTED_CLASSES: &str = r#"
class Outer {
    class Inner {
    }
}
"#;

    #[test]
    fn test_descend_reaches_nested_declarations() {
        let tree = language::parse(NESTED_CLASSES).unwrap();
        let mut visitor = DeclarationVisitor::new(CountingPolicy {
            kind: "class_declaration",
            directive: Continuation::Descend,
            seen: 0,
        });
        visitor.traverse(tree.root_node());
        assert_eq!(visitor.policy().seen, 2);
    }

    #[test]
    fn test_skip_children_prunes_subtree() {
        let tree = language::parse(NESTED_CLASSES).unwrap();
        let mut visitor = DeclarationVisitor::new(CountingPolicy {
            kind: "class_declaration",
            directive: Continuation::SkipChildren,
            seen: 0,
        });
        visitor.traverse(tree.root_node());
        assert_eq!(visitor.policy().seen, 1);
    }

    #[test]
    fn test_fresh_policy_is_deterministic() {
        let source = "import UIKit\nimport Foundation\n";
        let tree = language::parse(source).unwrap();

        let mut counts = Vec::new();
        for _ in 0..2 {
            let mut visitor = DeclarationVisitor::new(CountingPolicy {
                kind: "import_declaration",
                directive: Continuation::SkipChildren,
                seen: 0,
            });
            visitor.traverse(tree.root_node());
            counts.push(visitor.policy().seen);
        }
        assert_eq!(counts, vec![2, 2]);
    }
}
