use globset::{Glob, GlobSet, GlobSetBuilder};

use crate::emit;
use crate::parser::{NodeKind, SyntaxTree};
use crate::types::{Severity, Violation};

use super::Rule;

/// Flags `.unwrap()` and `.expect()` calls. Files whose root-relative
/// path matches an allow glob (typically test code) are exempt.
pub struct UnwrapUsedRule {
    severity: Severity,
    allow: GlobSet,
}

impl UnwrapUsedRule {
    pub fn new(severity: Severity, allow: &[String]) -> Self {
        let mut builder = GlobSetBuilder::new();
        for pattern in allow {
            if let Ok(glob) = Glob::new(pattern) {
                builder.add(glob);
            }
        }
        Self {
            severity,
            allow: builder.build().unwrap_or_else(|_| GlobSet::empty()),
        }
    }
}

impl Rule for UnwrapUsedRule {
    fn id(&self) -> &str {
        "unwrap-used"
    }

    fn description(&self) -> &str {
        "Flags .unwrap()/.expect() calls that turn recoverable errors into panics"
    }

    fn severity(&self) -> Severity {
        self.severity
    }

    fn evaluate(&self, tree: &SyntaxTree) -> Vec<Violation> {
        let mut out = Vec::new();
        if self.allow.is_match(&tree.path) {
            return out;
        }
        for (_, node) in tree.nodes() {
            if let NodeKind::MethodCall { method } = &node.kind {
                if method == "unwrap" || method == "expect" {
                    emit!(
                        out,
                        self.id(),
                        tree,
                        node.span.start_line,
                        node.span.start_column,
                        self.severity,
                        ".{method}() can panic; propagate the error instead"
                    );
                }
            }
        }
        out
    }
}
