//! Deterministic AST-based validators for bad code patterns.
//!
//! astlint parses each target file once into a normalized syntax tree,
//! evaluates a registered set of pure rules against it, and renders the
//! aggregated violations in a stable order: byte-identical input and
//! ruleset always produce a byte-identical report.

pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod parser;
pub mod rules;
pub mod types;

pub use error::{ConfigError, RegistryError};
pub use types::{Severity, ValidationResult, Violation, ViolationKind};
