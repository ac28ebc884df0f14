use owo_colors::OwoColorize;
use std::collections::{BTreeMap, HashSet};
use std::fmt::Write;
use std::path::Path;

use crate::types::{Severity, ValidationResult};

pub fn render(result: &ValidationResult, project_root: &Path) -> String {
    let mut out = String::new();

    if !result.complete {
        let _ = writeln!(
            out,
            "\n  {}",
            "run interrupted; results are incomplete".red().bold()
        );
    }
    if result.no_rules_ran {
        let _ = writeln!(
            out,
            "\n  {}",
            "no rules enabled; no checks were performed".yellow()
        );
    }

    if result.violations.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "  {}", "\u{2501}".repeat(50).dimmed());
        if result.pass {
            let _ = writeln!(out, "  {}", "no violations found".green());
        }
        let _ = writeln!(out);
        return out;
    }

    let mut by_rule: BTreeMap<&str, Vec<_>> = BTreeMap::new();
    for v in &result.violations {
        by_rule.entry(v.rule.as_str()).or_default().push(v);
    }

    let errors = result.error_count();
    let warnings = result.warning_count();
    let infos = result.info_count();

    let _ = writeln!(out);
    let _ = writeln!(out, "  {}", "\u{2501}".repeat(50).dimmed());
    let mut parts = Vec::new();
    if errors > 0 {
        parts.push(format!("{errors} errors").red().bold().to_string());
    }
    if warnings > 0 {
        parts.push(format!("{warnings} warnings").yellow().bold().to_string());
    }
    if infos > 0 {
        parts.push(format!("{infos} info").blue().to_string());
    }
    let file_count = result
        .violations
        .iter()
        .map(|v| &v.file)
        .collect::<HashSet<_>>()
        .len();
    let _ = writeln!(
        out,
        "  {} across {} files",
        parts.join(", "),
        file_count.bold()
    );
    let _ = writeln!(out, "  {}", "\u{2501}".repeat(50).dimmed());

    for (rule, violations) in &by_rule {
        let severity = violations
            .iter()
            .map(|v| v.severity)
            .max()
            .unwrap_or(Severity::Info);
        let (icon, label) = match severity {
            Severity::Error => ("\u{2717}".red().to_string(), rule.red().bold().to_string()),
            Severity::Warning => (
                "\u{26a0}".yellow().to_string(),
                rule.yellow().bold().to_string(),
            ),
            Severity::Info => ("\u{2139}".blue().to_string(), rule.blue().bold().to_string()),
        };

        let _ = writeln!(out);
        let _ = writeln!(
            out,
            "  {} {} {}",
            icon,
            label,
            format!("({})", violations.len()).dimmed()
        );

        let mut by_file: BTreeMap<String, Vec<_>> = BTreeMap::new();
        for v in violations {
            let rel = super::relative_path(&v.file, project_root);
            by_file.entry(rel).or_default().push(v);
        }

        for (file, file_violations) in &by_file {
            let _ = writeln!(out, "    {}", file.dimmed());
            for v in file_violations {
                let _ = writeln!(out, "      L{:<4} {}", v.line, v.message);
            }
        }
    }

    let _ = writeln!(out);
    out
}
