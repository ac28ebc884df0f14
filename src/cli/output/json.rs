use serde::Serialize;
use std::path::Path;

use crate::types::{Severity, ValidationResult, ViolationKind};

#[derive(Serialize)]
struct JsonOutput<'a> {
    violations: Vec<JsonViolation<'a>>,
    summary: JsonSummary,
}

#[derive(Serialize)]
struct JsonViolation<'a> {
    file: String,
    line: usize,
    column: usize,
    severity: &'a Severity,
    kind: &'a ViolationKind,
    rule: &'a str,
    message: &'a str,
}

#[derive(Serialize)]
struct JsonSummary {
    errors: usize,
    warnings: usize,
    info: usize,
    files_checked: usize,
    no_rules_ran: bool,
    complete: bool,
    pass: bool,
}

fn build_output<'a>(result: &'a ValidationResult, project_root: &Path) -> JsonOutput<'a> {
    let violations = result
        .violations
        .iter()
        .map(|v| JsonViolation {
            file: super::relative_path(&v.file, project_root),
            line: v.line,
            column: v.column,
            severity: &v.severity,
            kind: &v.kind,
            rule: &v.rule,
            message: &v.message,
        })
        .collect();

    JsonOutput {
        violations,
        summary: JsonSummary {
            errors: result.error_count(),
            warnings: result.warning_count(),
            info: result.info_count(),
            files_checked: result.files_checked,
            no_rules_ran: result.no_rules_ran,
            complete: result.complete,
            pass: result.pass,
        },
    }
}

pub fn render(result: &ValidationResult, project_root: &Path) -> String {
    let output = build_output(result, project_root);
    // Serialization of these plain structs cannot fail
    serde_json::to_string_pretty(&output).unwrap_or_default()
}
