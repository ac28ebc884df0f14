use crate::emit;
use crate::parser::{NodeKind, SyntaxTree};
use crate::types::{Severity, Violation};

use super::Rule;

/// Flags `use path::*` glob imports, which hide where names come from.
pub struct WildcardImportRule {
    severity: Severity,
}

impl WildcardImportRule {
    pub fn new(severity: Severity) -> Self {
        Self { severity }
    }
}

impl Rule for WildcardImportRule {
    fn id(&self) -> &str {
        "wildcard-import"
    }

    fn description(&self) -> &str {
        "Flags glob imports (use path::*) that obscure name origins"
    }

    fn severity(&self) -> Severity {
        self.severity
    }

    fn evaluate(&self, tree: &SyntaxTree) -> Vec<Violation> {
        let mut out = Vec::new();
        for (_, node) in tree.nodes() {
            if let NodeKind::GlobImport { path } = &node.kind {
                emit!(
                    out,
                    self.id(),
                    tree,
                    node.span.start_line,
                    node.span.start_column,
                    self.severity,
                    "glob import `{path}` obscures which names are in scope"
                );
            }
        }
        out
    }
}
