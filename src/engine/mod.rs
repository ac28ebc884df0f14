pub mod scanner;

use rayon::prelude::*;
use std::panic::{self, AssertUnwindSafe};
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::debug;

use crate::config::Config;
use crate::parser::{self, Language, SourceFile};
use crate::rules::{Rule, RuleRegistry};
use crate::types::{Severity, ValidationResult, Violation, ViolationKind};

/// Rule id attached to file-scoped parse failures.
pub const PARSE_RULE_ID: &str = "parse-error";

/// Runs every enabled rule against every file and aggregates the
/// outcome. Never fails once invoked: per-file and per-rule problems
/// become violations in the result instead. Violations carry paths
/// relative to `root`, so path globs in rule config anchor at the
/// project root.
pub fn run(
    root: &Path,
    paths: &[impl AsRef<Path> + Sync],
    registry: &RuleRegistry,
    config: &Config,
) -> ValidationResult {
    run_with_cancel(root, paths, registry, config, &AtomicBool::new(false))
}

/// Like [`run`], but stops early once `cancel` is set. A cancelled run
/// is returned with `complete = false` and never reports pass.
pub fn run_with_cancel(
    root: &Path,
    paths: &[impl AsRef<Path> + Sync],
    registry: &RuleRegistry,
    config: &Config,
    cancel: &AtomicBool,
) -> ValidationResult {
    let rules = registry.enabled_rules();
    debug!(files = paths.len(), rules = rules.len(), "starting run");

    // Files are independent: trees are built per file and never shared,
    // and rules are pure, so parallel evaluation cannot reorder the
    // report once the final total sort runs.
    let per_file: Vec<Option<Vec<Violation>>> = paths
        .par_iter()
        .map(|path| {
            if cancel.load(Ordering::Relaxed) {
                return None;
            }
            Some(check_file(root, path.as_ref(), &rules))
        })
        .collect();

    let complete = per_file.iter().all(Option::is_some);
    let files_checked = per_file.iter().flatten().count();

    let mut violations: Vec<Violation> = per_file.into_iter().flatten().flatten().collect();
    violations.sort();
    violations.dedup();

    let no_rules_ran = rules.is_empty();
    let pass = complete && !violations.iter().any(|v| v.severity >= config.fail_on);

    ValidationResult {
        violations,
        files_checked,
        no_rules_ran,
        complete,
        pass,
    }
}

fn check_file(root: &Path, path: &Path, rules: &[&dyn Rule]) -> Vec<Violation> {
    let display = path.strip_prefix(root).unwrap_or(path);

    let Some(language) = Language::from_path(path) else {
        return vec![file_violation(display, 1, 1, "no parser for this file type")];
    };

    // Read from the full path, report the root-relative one
    let text = match std::fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) => return vec![file_violation(display, 1, 1, &format!("cannot read file: {e}"))],
    };
    let source = SourceFile::new(display.to_path_buf(), text, language);

    let tree = match parser::adapter_for(language).parse(&source) {
        Ok(tree) => tree,
        // Rules never run against an unparseable file
        Err(e) => return vec![file_violation(display, e.line, e.column, &e.message)],
    };

    let mut violations = Vec::new();
    for rule in rules {
        match panic::catch_unwind(AssertUnwindSafe(|| rule.evaluate(&tree))) {
            Ok(found) => violations.extend(found),
            Err(payload) => {
                // A broken rule is isolated to this (rule, file) pair;
                // the remaining rules still run.
                violations.push(Violation {
                    rule: rule.id().to_string(),
                    file: display.to_path_buf(),
                    line: 1,
                    column: 1,
                    severity: Severity::Error,
                    kind: ViolationKind::RuleFailure,
                    message: format!("rule failed: {}", panic_message(&*payload)),
                });
            }
        }
    }
    violations
}

fn file_violation(path: &Path, line: usize, column: usize, message: &str) -> Violation {
    Violation {
        rule: PARSE_RULE_ID.to_string(),
        file: path.to_path_buf(),
        line,
        column,
        severity: Severity::Error,
        kind: ViolationKind::Parse,
        message: message.to_string(),
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::SyntaxTree;
    use std::fs;
    use std::path::PathBuf;

    struct AlwaysFires;

    impl Rule for AlwaysFires {
        fn id(&self) -> &str {
            "always-fires"
        }
        fn description(&self) -> &str {
            "fires once per file"
        }
        fn severity(&self) -> Severity {
            Severity::Warning
        }
        fn evaluate(&self, tree: &SyntaxTree) -> Vec<Violation> {
            vec![Violation {
                rule: self.id().to_string(),
                file: tree.path.clone(),
                line: 1,
                column: 1,
                severity: Severity::Warning,
                kind: ViolationKind::Lint,
                message: "fired".to_string(),
            }]
        }
    }

    struct AlwaysPanics;

    impl Rule for AlwaysPanics {
        fn id(&self) -> &str {
            "always-panics"
        }
        fn description(&self) -> &str {
            "panics on every file"
        }
        fn severity(&self) -> Severity {
            Severity::Error
        }
        fn evaluate(&self, _tree: &SyntaxTree) -> Vec<Violation> {
            panic!("internal rule bug")
        }
    }

    fn write_file(dir: &Path, name: &str, text: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, text).unwrap();
        path
    }

    fn registry_with(rules: Vec<Box<dyn Rule>>) -> RuleRegistry {
        let mut registry = RuleRegistry::new();
        for rule in rules {
            registry.register(rule).unwrap();
        }
        registry
    }

    #[test]
    fn test_empty_files_empty_rules_passes() {
        let registry = RuleRegistry::new();
        let result = run(Path::new("."), &[] as &[PathBuf], &registry, &Config::default());
        assert!(result.pass);
        assert!(result.violations.is_empty());
        assert!(result.no_rules_ran, "no-op run must be flagged");
        assert!(result.complete);
        assert_eq!(result.files_checked, 0);
    }

    #[test]
    fn test_empty_ruleset_passes_regardless_of_input() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(dir.path(), "a.rs", "fn f() { Some(1).unwrap(); }\n");
        let registry = RuleRegistry::new();
        let result = run(dir.path(), &[path], &registry, &Config::default());
        assert!(result.pass);
        assert!(result.no_rules_ran);
        assert_eq!(result.files_checked, 1);
    }

    #[test]
    fn test_always_firing_rule_fails_run() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(dir.path(), "a.rs", "fn f() {}\n");
        let registry = registry_with(vec![Box::new(AlwaysFires)]);
        let result = run(dir.path(), &[path], &registry, &Config::default());
        assert_eq!(result.violations.len(), 1);
        assert_eq!(result.violations[0].rule, "always-fires");
        assert_eq!(result.violations[0].file, PathBuf::from("a.rs"));
        assert!(!result.pass, "default threshold fails on any violation");
        assert!(!result.no_rules_ran);
    }

    #[test]
    fn test_parse_error_skips_rules_for_that_file_only() {
        let dir = tempfile::tempdir().unwrap();
        let bad = write_file(dir.path(), "bad.rs", "fn broken( {\n");
        let good = write_file(dir.path(), "good.rs", "fn ok() {}\n");
        let registry = registry_with(vec![Box::new(AlwaysFires)]);
        let result = run(dir.path(), &[bad, good], &registry, &Config::default());

        let bad_violations: Vec<_> = result
            .violations
            .iter()
            .filter(|v| v.file == Path::new("bad.rs"))
            .collect();
        assert_eq!(bad_violations.len(), 1);
        assert_eq!(bad_violations[0].kind, ViolationKind::Parse);
        assert_eq!(bad_violations[0].rule, PARSE_RULE_ID);

        let good_violations: Vec<_> = result
            .violations
            .iter()
            .filter(|v| v.file == Path::new("good.rs"))
            .collect();
        assert_eq!(good_violations.len(), 1, "other files still evaluated");
        assert_eq!(good_violations[0].kind, ViolationKind::Lint);
    }

    #[test]
    fn test_panicking_rule_isolated() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(dir.path(), "a.rs", "fn f() {}\n");
        let registry = registry_with(vec![Box::new(AlwaysPanics), Box::new(AlwaysFires)]);
        let result = run(dir.path(), &[path], &registry, &Config::default());

        let failure = result
            .violations
            .iter()
            .find(|v| v.kind == ViolationKind::RuleFailure)
            .expect("rule failure recorded");
        assert_eq!(failure.rule, "always-panics");
        assert!(failure.message.contains("internal rule bug"));

        assert!(
            result
                .violations
                .iter()
                .any(|v| v.rule == "always-fires"),
            "other rules still report for the same file"
        );
    }

    #[test]
    fn test_disabled_rule_produces_nothing_until_reenabled() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(dir.path(), "a.rs", "fn f() {}\n");
        let mut registry = registry_with(vec![Box::new(AlwaysFires)]);

        registry.disable("always-fires").unwrap();
        let result = run(dir.path(), &[path.clone()], &registry, &Config::default());
        assert!(result.violations.is_empty());
        assert!(result.pass);
        assert!(result.no_rules_ran);

        registry.enable("always-fires").unwrap();
        let result = run(dir.path(), &[path], &registry, &Config::default());
        assert_eq!(result.violations.len(), 1);
        assert!(!result.pass);
    }

    #[test]
    fn test_fail_threshold() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(dir.path(), "a.rs", "fn f() {}\n");
        let registry = registry_with(vec![Box::new(AlwaysFires)]);

        let mut config = Config::default();
        config.fail_on = Severity::Error;
        let result = run(dir.path(), &[path], &registry, &config);
        assert_eq!(result.violations.len(), 1);
        assert!(result.pass, "warning is below the error threshold");
    }

    #[test]
    fn test_violations_sorted_across_files() {
        let dir = tempfile::tempdir().unwrap();
        let b = write_file(dir.path(), "b.rs", "fn f() {}\n");
        let a = write_file(dir.path(), "a.rs", "fn f() {}\n");
        let registry = registry_with(vec![Box::new(AlwaysFires)]);
        // Supplied out of order; report order is sorted
        let result = run(dir.path(), &[b, a], &registry, &Config::default());
        assert_eq!(result.violations[0].file, PathBuf::from("a.rs"));
    }

    #[test]
    fn test_unreadable_file_is_file_violation() {
        let registry = registry_with(vec![Box::new(AlwaysFires)]);
        let missing = PathBuf::from("/nonexistent/missing.rs");
        let result = run(Path::new("/nonexistent"), &[missing], &registry, &Config::default());
        assert_eq!(result.violations.len(), 1);
        assert_eq!(result.violations[0].kind, ViolationKind::Parse);
        assert!(result.violations[0].message.contains("cannot read"));
    }

    #[test]
    fn test_unsupported_extension_is_file_violation() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(dir.path(), "a.txt", "hello\n");
        let registry = registry_with(vec![Box::new(AlwaysFires)]);
        let result = run(dir.path(), &[path], &registry, &Config::default());
        assert_eq!(result.violations.len(), 1);
        assert_eq!(result.violations[0].kind, ViolationKind::Parse);
    }

    #[test]
    fn test_cancelled_run_is_incomplete_and_never_pass() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(dir.path(), "a.rs", "fn f() {}\n");
        let registry = RuleRegistry::new();
        let cancel = AtomicBool::new(true);
        let result = run_with_cancel(dir.path(), &[path], &registry, &Config::default(), &cancel);
        assert!(!result.complete);
        assert!(!result.pass, "incomplete run must not report pass");
    }

    #[test]
    fn test_determinism_same_input_same_result() {
        let dir = tempfile::tempdir().unwrap();
        let a = write_file(dir.path(), "a.rs", "fn f() { Some(1).unwrap(); }\n");
        let b = write_file(dir.path(), "b.rs", "use x::*;\nfn g() {}\n");
        let config = Config::default();
        let registry = crate::rules::build_registry(&config).unwrap();
        let paths = vec![a, b];

        let first = run(dir.path(), &paths, &registry, &config);
        let second = run(dir.path(), &paths, &registry, &config);
        assert_eq!(first.violations, second.violations);
        assert_eq!(first.pass, second.pass);
    }
}
