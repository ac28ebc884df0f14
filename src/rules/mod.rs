pub mod banned_call;
pub mod custom_pattern;
pub mod function_length;
pub mod macros;
pub mod max_nesting;
pub mod registry;
pub mod unwrap_used;
pub mod wildcard_import;

pub use registry::RuleRegistry;

use crate::config::Config;
use crate::error::ConfigError;
use crate::parser::SyntaxTree;
use crate::types::{Severity, Violation};

/// A deterministic check over one parsed file. `evaluate` must be a
/// pure function of the tree (and the file path it carries): same tree
/// in, same violations out, no I/O, no shared mutable state.
pub trait Rule: Send + Sync {
    fn id(&self) -> &str;
    fn description(&self) -> &str;
    fn severity(&self) -> Severity;
    fn evaluate(&self, tree: &SyntaxTree) -> Vec<Violation>;
}

/// Builds the registry from config. Every built-in rule is registered
/// (disabled ones included, so they stay introspectable); custom
/// patterns each become their own instance. Invalid patterns and
/// duplicate ids are fatal before any file is read.
pub fn build_registry(config: &Config) -> anyhow::Result<RuleRegistry> {
    let mut registry = RuleRegistry::new();
    let rules = &config.rules;

    let register = |registry: &mut RuleRegistry,
                    enabled: bool,
                    rule: Box<dyn Rule>|
     -> anyhow::Result<()> {
        if enabled {
            registry.register(rule)?;
        } else {
            registry.register_disabled(rule)?;
        }
        Ok(())
    };

    register(
        &mut registry,
        rules.unwrap_used.enabled,
        Box::new(unwrap_used::UnwrapUsedRule::new(
            rules.unwrap_used.severity,
            &rules.unwrap_used.allow,
        )),
    )?;
    register(
        &mut registry,
        rules.wildcard_import.enabled,
        Box::new(wildcard_import::WildcardImportRule::new(
            rules.wildcard_import.severity,
        )),
    )?;
    register(
        &mut registry,
        rules.banned_call.enabled,
        Box::new(banned_call::BannedCallRule::new(
            rules.banned_call.severity,
            &rules.banned_call.functions,
        )),
    )?;
    register(
        &mut registry,
        rules.max_nesting.enabled,
        Box::new(max_nesting::MaxNestingRule::new(
            rules.max_nesting.severity,
            rules.max_nesting.max_depth,
        )),
    )?;
    register(
        &mut registry,
        rules.function_length.enabled,
        Box::new(function_length::FunctionLengthRule::new(
            rules.function_length.severity,
            rules.function_length.max_lines,
        )),
    )?;

    for pattern in &rules.custom_patterns {
        let rule = custom_pattern::CustomPatternRule::from_config(pattern)
            .map_err(|e: ConfigError| anyhow::anyhow!(e))?;
        registry.register(Box::new(rule))?;
    }

    Ok(registry)
}
