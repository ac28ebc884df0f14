use crate::emit;
use crate::parser::{NodeKind, SyntaxTree};
use crate::types::{Severity, Violation};

use super::Rule;

/// Flags blocks nested deeper than a configured depth. Depth counts
/// enclosing blocks, so a function body sits at depth 0. Only the
/// first block past the limit in each chain is reported, not every
/// block below it.
pub struct MaxNestingRule {
    severity: Severity,
    max_depth: usize,
}

impl MaxNestingRule {
    pub fn new(severity: Severity, max_depth: usize) -> Self {
        Self {
            severity,
            max_depth,
        }
    }
}

impl Rule for MaxNestingRule {
    fn id(&self) -> &str {
        "max-nesting"
    }

    fn description(&self) -> &str {
        "Flags blocks nested deeper than the configured limit"
    }

    fn severity(&self) -> Severity {
        self.severity
    }

    fn evaluate(&self, tree: &SyntaxTree) -> Vec<Violation> {
        let mut out = Vec::new();
        for (id, node) in tree.nodes() {
            if !matches!(node.kind, NodeKind::Block) {
                continue;
            }
            let depth = tree.ancestor_count(id, |k| matches!(k, NodeKind::Block));
            if depth == self.max_depth + 1 {
                emit!(
                    out,
                    self.id(),
                    tree,
                    node.span.start_line,
                    node.span.start_column,
                    self.severity,
                    "block nested {depth} levels deep (max {})",
                    self.max_depth
                );
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::{rust::RustParser, Language, ParserAdapter, SourceFile};
    use std::path::PathBuf;

    fn tree_for(text: &str) -> SyntaxTree {
        let source = SourceFile::new(PathBuf::from("a.rs"), text.to_string(), Language::Rust);
        RustParser.parse(&source).unwrap()
    }

    const DEEP: &str = "fn f() {\n    if true {\n        if true {\n            if true {\n                let _x = 1;\n            }\n        }\n    }\n}\n";

    #[test]
    fn test_deep_nesting_flagged() {
        let rule = MaxNestingRule::new(Severity::Warning, 2);
        let violations = rule.evaluate(&tree_for(DEEP));
        assert_eq!(violations.len(), 1, "only the boundary block is reported");
        assert!(violations[0].message.contains("3 levels"));
    }

    #[test]
    fn test_within_limit_passes() {
        let rule = MaxNestingRule::new(Severity::Warning, 3);
        assert!(rule.evaluate(&tree_for(DEEP)).is_empty());
    }

    #[test]
    fn test_flat_function_passes() {
        let rule = MaxNestingRule::new(Severity::Warning, 2);
        assert!(rule
            .evaluate(&tree_for("fn f() {\n    let _x = 1;\n}\n"))
            .is_empty());
    }
}
