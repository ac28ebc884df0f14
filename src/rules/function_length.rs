use crate::emit;
use crate::parser::{NodeKind, SyntaxTree};
use crate::types::{Severity, Violation};

use super::Rule;

/// Flags functions spanning more lines than the configured limit.
pub struct FunctionLengthRule {
    severity: Severity,
    max_lines: usize,
}

impl FunctionLengthRule {
    pub fn new(severity: Severity, max_lines: usize) -> Self {
        Self {
            severity,
            max_lines,
        }
    }
}

impl Rule for FunctionLengthRule {
    fn id(&self) -> &str {
        "function-length"
    }

    fn description(&self) -> &str {
        "Flags functions longer than the configured line limit"
    }

    fn severity(&self) -> Severity {
        self.severity
    }

    fn evaluate(&self, tree: &SyntaxTree) -> Vec<Violation> {
        let mut out = Vec::new();
        for (_, node) in tree.nodes() {
            let NodeKind::Function { name } = &node.kind else {
                continue;
            };
            let lines = node.span.line_count();
            if lines > self.max_lines {
                emit!(
                    out,
                    self.id(),
                    tree,
                    node.span.start_line,
                    node.span.start_column,
                    self.severity,
                    "function `{name}` is {lines} lines long (max {})",
                    self.max_lines
                );
            }
        }
        out
    }
}
