use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Error => "error",
        })
    }
}

/// Distinguishes "the code is bad" from "the run had a problem":
/// `Lint` is a genuine rule match, `Parse` is a file that could not be
/// parsed, `RuleFailure` is a rule that panicked mid-evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ViolationKind {
    Lint,
    Parse,
    RuleFailure,
}

impl std::fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            ViolationKind::Lint => "lint",
            ViolationKind::Parse => "parse",
            ViolationKind::RuleFailure => "rule-failure",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    pub rule: String,
    pub file: PathBuf,
    pub line: usize,
    pub column: usize,
    pub severity: Severity,
    pub kind: ViolationKind,
    pub message: String,
}

impl Violation {
    /// Total order for report output: file, then location, then rule id.
    pub fn sort_key(&self) -> (&PathBuf, usize, usize, &str) {
        (&self.file, self.line, self.column, &self.rule)
    }
}

impl PartialOrd for Violation {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Violation {
    fn cmp(&self, other: &Self) -> Ordering {
        self.sort_key()
            .cmp(&other.sort_key())
            .then_with(|| self.message.cmp(&other.message))
            .then_with(|| self.severity.cmp(&other.severity))
            .then_with(|| self.kind.cmp(&other.kind))
    }
}

#[derive(Debug, Default)]
pub struct ValidationResult {
    pub violations: Vec<Violation>,
    pub files_checked: usize,
    /// Set when zero rules were enabled, so a no-op run is never
    /// indistinguishable from "all checks passed".
    pub no_rules_ran: bool,
    /// False when the run was cancelled before covering every file.
    pub complete: bool,
    pub pass: bool,
}

impl ValidationResult {
    pub fn error_count(&self) -> usize {
        self.violations
            .iter()
            .filter(|v| v.severity == Severity::Error)
            .count()
    }

    pub fn warning_count(&self) -> usize {
        self.violations
            .iter()
            .filter(|v| v.severity == Severity::Warning)
            .count()
    }

    pub fn info_count(&self) -> usize {
        self.violations
            .iter()
            .filter(|v| v.severity == Severity::Info)
            .count()
    }

    pub fn has_severity_at_least(&self, threshold: Severity) -> bool {
        self.violations.iter().any(|v| v.severity >= threshold)
    }
}
