use std::fmt::Write;
use std::path::Path;

use crate::types::{Severity, ValidationResult};

pub fn render(result: &ValidationResult, project_root: &Path) -> String {
    let mut out = String::new();

    if !result.complete {
        let _ = writeln!(out, "::error title=astlint::run interrupted; results are incomplete");
    }
    if result.no_rules_ran {
        let _ = writeln!(out, "::warning title=astlint::no rules enabled; no checks were performed");
    }

    for v in &result.violations {
        let rel = super::relative_path(&v.file, project_root);

        let level = match v.severity {
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Info => "notice",
        };

        let _ = writeln!(
            out,
            "::{level} file={rel},line={line},col={column},title={rule}::{message}",
            line = v.line,
            column = v.column,
            rule = v.rule,
            message = v.message,
        );
    }

    out
}
