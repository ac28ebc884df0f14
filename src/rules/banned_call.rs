use crate::emit;
use crate::parser::{NodeKind, SyntaxTree};
use crate::types::{Severity, Violation};

use super::Rule;

/// Flags calls to an explicit deny-list of functions or methods,
/// supplied at construction. A bare name bans a method or any call
/// whose path ends in that name; a `::` path bans that exact path.
pub struct BannedCallRule {
    severity: Severity,
    banned: Vec<String>,
}

impl BannedCallRule {
    pub fn new(severity: Severity, banned: &[String]) -> Self {
        Self {
            severity,
            banned: banned.to_vec(),
        }
    }

    fn matches(&self, callee: &str) -> Option<&str> {
        self.banned
            .iter()
            .find(|b| {
                if b.contains("::") {
                    callee == b.as_str()
                } else {
                    callee == b.as_str()
                        || callee
                            .rsplit("::")
                            .next()
                            .is_some_and(|last| last == b.as_str())
                }
            })
            .map(String::as_str)
    }
}

impl Rule for BannedCallRule {
    fn id(&self) -> &str {
        "banned-call"
    }

    fn description(&self) -> &str {
        "Flags calls to functions on a configured deny-list"
    }

    fn severity(&self) -> Severity {
        self.severity
    }

    fn evaluate(&self, tree: &SyntaxTree) -> Vec<Violation> {
        let mut out = Vec::new();
        for (_, node) in tree.nodes() {
            let callee = match &node.kind {
                NodeKind::Call { callee } => callee.as_str(),
                NodeKind::MethodCall { method } => method.as_str(),
                _ => continue,
            };
            if let Some(name) = self.matches(callee) {
                emit!(
                    out,
                    self.id(),
                    tree,
                    node.span.start_line,
                    node.span.start_column,
                    self.severity,
                    "call to banned function `{name}`"
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

    fn rule(banned: &[&str]) -> BannedCallRule {
        let banned: Vec<String> = banned.iter().map(|s| s.to_string()).collect();
        BannedCallRule::new(Severity::Error, &banned)
    }

    #[test]
    fn test_exact_path_banned() {
        let tree = tree_for("fn f() {\n    std::process::exit(1);\n}\n");
        let violations = rule(&["std::process::exit"]).evaluate(&tree);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].line, 2);
    }

    #[test]
    fn test_bare_name_matches_path_tail() {
        let tree = tree_for("fn f() {\n    std::process::exit(1);\n}\n");
        assert_eq!(rule(&["exit"]).evaluate(&tree).len(), 1);
    }

    #[test]
    fn test_bare_name_matches_method() {
        let tree = tree_for("fn f(v: Vec<i32>) {\n    v.leak();\n}\n");
        assert_eq!(rule(&["leak"]).evaluate(&tree).len(), 1);
    }

    #[test]
    fn test_path_entry_does_not_match_bare_call() {
        let tree = tree_for("fn exit() {}\nfn f() {\n    exit();\n}\n");
        assert!(rule(&["std::process::exit"]).evaluate(&tree).is_empty());
    }

    #[test]
    fn test_empty_list_matches_nothing() {
        let tree = tree_for("fn f() {\n    std::process::exit(1);\n}\n");
        assert!(rule(&[]).evaluate(&tree).is_empty());
    }
}
